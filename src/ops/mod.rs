pub mod auth;
pub mod names;
pub mod store;

pub use store::{Store, StoreError};
