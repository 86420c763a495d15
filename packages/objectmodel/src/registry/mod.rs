//! Parser registry system for extensible card parsing.
//!
//! Element and action parsers are registered under their schema type name.
//! The card parser looks each `type` up in the matching registry, so hosts
//! can add, override or remove parsers without touching the built-in ones.

mod config;
mod core;
mod engine;
mod parser;
pub mod parsers;
mod types;

pub use config::{create_action_registry, create_element_registry};
pub use core::{ActionParserRegistry, ElementParserRegistry, ParserRegistry};
pub use engine::CardParser;
pub use parser::{ActionParser, ElementParser};
pub use types::{ParseContext, ParseResult};
