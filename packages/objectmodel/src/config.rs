//! Configuration constants and parse options.
//!
//! Type names, JSON property keys and resource limits are centralized here
//! so parsers, registries and the CLI agree on them.

/// Type name of the top-level card object.
pub const ADAPTIVE_CARD_TYPE: &str = "AdaptiveCard";

/// Type name under which the FactSet parser is registered.
pub const FACT_SET_TYPE: &str = "FactSet";

/// Type name under which the TextBlock parser is registered.
pub const TEXT_BLOCK_TYPE: &str = "TextBlock";

/// Type name under which the OpenUrl action parser is registered.
pub const OPEN_URL_ACTION_TYPE: &str = "Action.OpenUrl";

/// Type name under which the Submit action parser is registered.
pub const SUBMIT_ACTION_TYPE: &str = "Action.Submit";

/// Fallback value that removes an unknown element from the card.
pub const FALLBACK_DROP: &str = "drop";

/// Highest schema version this object model understands (major, minor).
pub const SUPPORTED_SCHEMA_VERSION: (u32, u32) = (1, 6);

/// Maximum card payload size in bytes (1 MB).
///
/// Cards are UI payloads; anything past this is rejected before JSON parsing.
pub const MAX_CARD_SIZE: usize = 1_000_000;

/// Maximum chain length when following nested `fallback` elements.
pub const MAX_FALLBACK_DEPTH: usize = 16;

/// How scalar values of the wrong JSON type are treated for string fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoercionPolicy {
    /// Convert numbers and booleans to their JSON text and record a warning.
    #[default]
    Lenient,
    /// Drop the owning entry and record a warning.
    Strict,
}

impl CoercionPolicy {
    /// Get the string value used on the command line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

/// Options applied to a single parse session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Coercion policy for mistyped string fields.
    pub coercion: CoercionPolicy,
    /// Maximum accepted payload size in bytes.
    pub max_card_size: usize,
}

impl ParseOptions {
    /// Create options with lenient coercion and the default size limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            coercion: CoercionPolicy::Lenient,
            max_card_size: MAX_CARD_SIZE,
        }
    }

    /// Set the coercion policy.
    #[must_use]
    pub fn with_coercion(mut self, coercion: CoercionPolicy) -> Self {
        self.coercion = coercion;
        self
    }

    /// Set the maximum accepted payload size.
    #[must_use]
    pub fn with_max_card_size(mut self, max_card_size: usize) -> Self {
        self.max_card_size = max_card_size;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
