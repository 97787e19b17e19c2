//! # Line-oriented command interpreter
//!
//! Tokenizes input lines, parses them into [`Command`]s and runs them against a
//! [`Session`]. See [`command`] for the accepted commands.
pub mod command;
pub mod session;
pub mod tokenizer;

pub use command::Command;
pub use session::{format_decimal, Session, GENERIC_ERROR};
pub use tokenizer::tokenize;
