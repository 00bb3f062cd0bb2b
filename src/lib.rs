//! Nexus: a project-management dashboard for the terminal.
//!
//! Layers, leaf first: [`model`] types, [`nav`] navigation state, the
//! [`ops::Store`] shared state with its mutation protocol, the pure
//! [`router`], and the ratatui front end in [`tui`].

pub mod cli;
pub mod io;
pub mod model;
pub mod nav;
pub mod ops;
pub mod router;
pub mod tui;
pub mod util;
