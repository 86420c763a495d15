//! AdaptiveCards object model - registrable JSON parsers for card elements.
//!
//! This crate parses AdaptiveCards JSON payloads into a typed object model.
//! Every element and action type is handled by a parser registered under its
//! schema type name, so hosts can extend or override the schema.
//!
//! # Example
//!
//! ```
//! use adaptivecards_objectmodel::CardParser;
//!
//! let parser = CardParser::with_defaults();
//! let result = parser
//!     .parse_str(r#"{
//!         "type": "AdaptiveCard",
//!         "version": "1.5",
//!         "body": [
//!             { "type": "FactSet", "facts": [{ "title": "Status", "value": "Open" }] }
//!         ]
//!     }"#)
//!     .unwrap();
//!
//! let fact_set = result.card.body[0].as_fact_set().unwrap();
//! assert_eq!(fact_set.facts[0].title, "Status");
//! assert!(result.warnings.is_empty());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Type names, limits and parse options
//! - [`types`]: The card object model (elements, actions, card)
//! - [`error`]: Error types and Result alias
//! - [`warning`]: Non-fatal warnings and the append-only warning sink
//! - [`json`]: Property accessors that report schema deviations
//! - [`registry`]: Parser traits, registries, built-in parsers and the card parser
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod json;
pub mod registry;
pub mod types;
pub mod warning;

// Re-export commonly used items
pub use config::{CoercionPolicy, ParseOptions};
pub use error::{CardError, Result};
pub use registry::parsers::{
    FactSetParser, OpenUrlActionParser, SubmitActionParser, TextBlockParser,
};
pub use registry::{
    ActionParser, ActionParserRegistry, CardParser, ElementParser, ElementParserRegistry,
    ParseContext, ParseResult,
};
pub use types::{Action, AdaptiveCard, CardElement, Fact, FactSet, TextBlock};
pub use warning::{Warning, WarningCode, Warnings};
