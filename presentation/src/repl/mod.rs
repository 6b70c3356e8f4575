//! Interactive session

mod command;
mod session;

pub use command::ReplCommand;
pub use session::{ReplStep, StudioRepl};
