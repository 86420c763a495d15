//! Default registry configuration with the built-in parsers.

use super::core::{ActionParserRegistry, ElementParserRegistry};
use super::parsers::{FactSetParser, OpenUrlActionParser, SubmitActionParser, TextBlockParser};
use crate::config::{FACT_SET_TYPE, OPEN_URL_ACTION_TYPE, SUBMIT_ACTION_TYPE, TEXT_BLOCK_TYPE};

/// Create an element registry with the built-in element parsers.
///
/// The registry holds the process-wide parser instances, so building
/// many registries does not create new parsers.
#[must_use]
pub fn create_element_registry() -> ElementParserRegistry {
    let mut registry = ElementParserRegistry::new();

    registry.add_parser(FACT_SET_TYPE, FactSetParser::instance());
    registry.add_parser(TEXT_BLOCK_TYPE, TextBlockParser::instance());

    registry
}

/// Create an action registry with the built-in action parsers.
#[must_use]
pub fn create_action_registry() -> ActionParserRegistry {
    let mut registry = ActionParserRegistry::new();

    registry.add_parser(OPEN_URL_ACTION_TYPE, OpenUrlActionParser::instance());
    registry.add_parser(SUBMIT_ACTION_TYPE, SubmitActionParser::instance());

    registry
}
