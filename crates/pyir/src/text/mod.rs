//! Textual surface: type syntax and whole-module dumps.

mod dump;
mod type_syntax;


pub use dump::ModulePrinter;
pub use type_syntax::{ParseError, TypeDisplay, display_type, parse_type, print_type};
