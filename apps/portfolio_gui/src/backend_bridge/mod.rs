//! Bridge between the page and the relay worker thread.

pub mod commands;
pub mod runtime;
