//! Application layer: rendering the layout document
//!
//! This layer turns domain data into text on any `std::io::Write` sink.

pub mod printer;

pub use printer::{render_to_string, TreePrinter, DIR_ICON, FILE_ICON, INDENT, RULE_WIDTH};
