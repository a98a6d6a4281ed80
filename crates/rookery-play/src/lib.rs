//! Terminal play for rookery: input parsing, board rendering and the turn loop.

pub mod command;
pub mod error;
pub mod session;

pub use command::Command;
pub use error::PlayError;
pub use session::{Session, SessionConfig};
