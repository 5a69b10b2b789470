//! Output formatting for composition outcomes

pub mod console;

pub use console::ConsoleFormatter;
