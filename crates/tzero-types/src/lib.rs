//! Foundation types for Terminal Zero.
//!
//! Shared by the level catalog, the file store, and the command engine:
//! the `CommandResult` contract, level metadata, and the error enum.

pub mod command;
pub mod error;
pub mod level;

pub use command::{CommandResult, MAX_LEVEL};
pub use error::{Result, TzeroError};
pub use level::Level;
