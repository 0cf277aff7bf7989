//! # Cookie Rules
//!
//! Rules for a small cookie clicker idle game. A player clicks to earn cookies
//! by hand and spends them on generators, which bake more cookies on their own
//! for as long as they are owned.
//!
//! Production is never ticked. It is derived from elapsed time whenever a
//! balance is asked for, so every query takes (or reads) the current time.

pub mod catalog;
pub mod config;
pub mod error;
pub mod generators;
pub mod session;

pub use catalog::*;
pub use config::*;
pub use error::*;
pub use generators::*;
pub use session::*;
