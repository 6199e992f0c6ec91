//! Command engine for Terminal Zero.
//!
//! The terminal simulation is canned: commands do not touch the host
//! system. [`Interpreter::process`] maps one raw input line plus the
//! active level to a [`CommandResult`], consulting per-level hidden
//! flags, the session file store, the completion-rule table, and the
//! script validator along the way.

mod commands;
mod interpreter;
mod pipeline;
mod rules;
mod session;
mod transport;
mod validator;

pub use interpreter::{Command, CommandRegistry, Environment, Interpreter};
pub use session::{LevelFlag, Session};
pub use transport::decode_content;
pub use validator::{Validation, has_validator, validate_level_solution};
