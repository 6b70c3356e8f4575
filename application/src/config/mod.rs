//! Application-level configuration.
//!
//! - [`SessionParams`]: initial selections and save directory for a session

pub mod session_params;

pub use session_params::SessionParams;
