//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file.

pub mod add;
pub mod dad_joke;

pub use add::{AddParams, AddTool};
pub use dad_joke::{DadJokeTool, JOKES};
