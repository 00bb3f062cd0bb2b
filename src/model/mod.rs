pub mod activity;
pub mod config;
pub mod contact;
pub mod id;
pub mod plan;
pub mod project;
pub mod task;
pub mod user;

pub use activity::ActivityEntry;
pub use config::*;
pub use contact::*;
pub use id::*;
pub use plan::*;
pub use project::*;
pub use task::*;
pub use user::*;
