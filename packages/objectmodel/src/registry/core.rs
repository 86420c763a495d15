//! Parser registries mapping schema type names to parsers.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::parser::{ActionParser, ElementParser};

/// Registry mapping type names to parsers of kind `P`.
///
/// Lookup is by exact type name. Registering a name that already has a
/// parser replaces it, which is how hosts override built-in parsers.
pub struct ParserRegistry<P: ?Sized> {
    parsers: HashMap<String, Box<P>>,
}

/// Registry of card element parsers, keyed by element type (`"FactSet"`).
pub type ElementParserRegistry = ParserRegistry<dyn ElementParser>;

/// Registry of action parsers, keyed by action type (`"Action.OpenUrl"`).
pub type ActionParserRegistry = ParserRegistry<dyn ActionParser>;

impl<P: ?Sized> ParserRegistry<P> {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Register an already boxed parser, returning the one it replaces.
    pub fn add_boxed(&mut self, type_name: impl Into<String>, parser: Box<P>) -> Option<Box<P>> {
        let type_name = type_name.into();
        let previous = self.parsers.insert(type_name.clone(), parser);
        if previous.is_some() {
            tracing::debug!(type_name = %type_name, "Overriding registered parser");
        } else {
            tracing::debug!(type_name = %type_name, "Registered parser");
        }
        previous
    }

    /// Remove the parser for a type name.
    pub fn remove_parser(&mut self, type_name: &str) -> Option<Box<P>> {
        self.parsers.remove(type_name)
    }

    /// Get the parser registered for a type name.
    #[must_use]
    pub fn get_parser(&self, type_name: &str) -> Option<&P> {
        self.parsers.get(type_name).map(|parser| parser.as_ref())
    }

    /// Check if a parser is registered for a type name.
    #[must_use]
    pub fn has_parser(&self, type_name: &str) -> bool {
        self.parsers.contains_key(type_name)
    }

    /// Return set of all registered type names.
    #[must_use]
    pub fn registered_types(&self) -> HashSet<&str> {
        self.parsers.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered parsers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl ParserRegistry<dyn ElementParser> {
    /// Register an element parser, returning the one it replaces.
    pub fn add_parser(
        &mut self,
        type_name: impl Into<String>,
        parser: impl ElementParser + 'static,
    ) -> Option<Box<dyn ElementParser>> {
        self.add_boxed(type_name, Box::new(parser))
    }

    /// Create a registry with the built-in element parsers.
    #[must_use]
    pub fn with_defaults() -> Self {
        super::config::create_element_registry()
    }
}

impl ParserRegistry<dyn ActionParser> {
    /// Register an action parser, returning the one it replaces.
    pub fn add_parser(
        &mut self,
        type_name: impl Into<String>,
        parser: impl ActionParser + 'static,
    ) -> Option<Box<dyn ActionParser>> {
        self.add_boxed(type_name, Box::new(parser))
    }

    /// Create a registry with the built-in action parsers.
    #[must_use]
    pub fn with_defaults() -> Self {
        super::config::create_action_registry()
    }
}

impl<P: ?Sized> Default for ParserRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized> fmt::Debug for ParserRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&str> = self.parsers.keys().map(|s| s.as_str()).collect();
        types.sort_unstable();
        f.debug_struct("ParserRegistry")
            .field("types", &types)
            .finish()
    }
}
