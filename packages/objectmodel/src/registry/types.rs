//! Types for the parser registry system.

use std::fmt;

use serde::Serialize;

use super::core::{ActionParserRegistry, ElementParserRegistry};
use crate::config::ParseOptions;
use crate::types::AdaptiveCard;
use crate::warning::Warnings;

/// Result of parsing a whole card.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseResult {
    /// The parsed card.
    pub card: AdaptiveCard,
    /// Warnings recorded while parsing, in encounter order.
    pub warnings: Warnings,
}

/// Context passed through parsing operations.
///
/// Registries are borrowed shared for the duration of one parse; the
/// warning sink is borrowed mutably and only ever appended to.
pub struct ParseContext<'a> {
    /// Parsers for nested card elements.
    pub element_parsers: &'a ElementParserRegistry,

    /// Parsers for nested actions.
    pub action_parsers: &'a ActionParserRegistry,

    /// Sink for recoverable schema issues.
    pub warnings: &'a mut Warnings,

    /// Options for this parse session.
    pub options: ParseOptions,

    /// Current depth of nested `fallback` resolution.
    pub(crate) fallback_depth: usize,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with default options.
    #[must_use]
    pub fn new(
        element_parsers: &'a ElementParserRegistry,
        action_parsers: &'a ActionParserRegistry,
        warnings: &'a mut Warnings,
    ) -> Self {
        Self {
            element_parsers,
            action_parsers,
            warnings,
            options: ParseOptions::default(),
            fallback_depth: 0,
        }
    }

    /// Set the parse options.
    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }
}

impl fmt::Debug for ParseContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseContext")
            .field("element_types", &self.element_parsers.len())
            .field("action_types", &self.action_parsers.len())
            .field("warnings", &self.warnings.len())
            .field("options", &self.options)
            .field("fallback_depth", &self.fallback_depth)
            .finish()
    }
}
