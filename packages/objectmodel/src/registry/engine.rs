//! Card parser that orchestrates element and action parsing using the registries.

use serde_json::{Map, Value};

use super::core::{ActionParserRegistry, ElementParserRegistry};
use super::types::{ParseContext, ParseResult};
use crate::config::{
    ParseOptions, ADAPTIVE_CARD_TYPE, FALLBACK_DROP, MAX_FALLBACK_DEPTH, SUPPORTED_SCHEMA_VERSION,
};
use crate::error::{CardError, Result};
use crate::json::{expect_object, get_string, get_type_name, json_kind};
use crate::types::{
    Action, AdaptiveCard, CardElement, SchemaVersion, UnknownAction, UnknownElement,
};
use crate::warning::{WarningCode, Warnings};

/// Engine that parses whole cards using the registries.
///
/// Body entries are dispatched to the element registry and `actions`
/// entries to the action registry by their `type`. An entry that fails to
/// parse is reported as a warning and skipped; only a malformed card root
/// is an error.
#[derive(Debug)]
pub struct CardParser {
    elements: ElementParserRegistry,
    actions: ActionParserRegistry,
    options: ParseOptions,
}

impl CardParser {
    /// Create a new card parser with the given registries.
    #[must_use]
    pub fn new(elements: ElementParserRegistry, actions: ActionParserRegistry) -> Self {
        Self {
            elements,
            actions,
            options: ParseOptions::default(),
        }
    }

    /// Create a card parser with the built-in parsers registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(
            ElementParserRegistry::with_defaults(),
            ActionParserRegistry::with_defaults(),
        )
    }

    /// Set the parse options.
    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Get a reference to the element registry.
    #[must_use]
    pub fn element_parsers(&self) -> &ElementParserRegistry {
        &self.elements
    }

    /// Get a reference to the action registry.
    #[must_use]
    pub fn action_parsers(&self) -> &ActionParserRegistry {
        &self.actions
    }

    /// Get the parse options.
    #[must_use]
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parse a card from JSON text.
    ///
    /// # Errors
    /// Returns `CardTooLarge` when `input` exceeds the configured size,
    /// `Json` when it is not JSON, and `MalformedCard` when the root is not
    /// an `AdaptiveCard` object.
    pub fn parse_str(&self, input: &str) -> Result<ParseResult> {
        if input.len() > self.options.max_card_size {
            return Err(CardError::CardTooLarge {
                size: input.len(),
                max: self.options.max_card_size,
            });
        }

        let json: Value = serde_json::from_str(input)?;
        self.parse_value(&json)
    }

    /// Parse a card from a JSON value.
    ///
    /// # Errors
    /// Returns `MalformedCard` when the root is not an `AdaptiveCard` object.
    pub fn parse_value(&self, json: &Value) -> Result<ParseResult> {
        let root = expect_object(json, ADAPTIVE_CARD_TYPE)?;
        match get_type_name(root) {
            Some(ADAPTIVE_CARD_TYPE) => {}
            Some(other) => {
                return Err(CardError::malformed(
                    ADAPTIVE_CARD_TYPE,
                    format!("root type must be '{ADAPTIVE_CARD_TYPE}', got '{other}'"),
                ))
            }
            None => {
                return Err(CardError::malformed(
                    ADAPTIVE_CARD_TYPE,
                    "root object has no string 'type' property",
                ))
            }
        }

        let mut warnings = Warnings::new();
        let mut context = ParseContext::new(&self.elements, &self.actions, &mut warnings)
            .with_options(self.options);

        let version = parse_version(root, context.warnings);
        let fallback_text = get_string(root, "fallbackText", ADAPTIVE_CARD_TYPE, context.warnings);
        let lang = get_string(root, "lang", ADAPTIVE_CARD_TYPE, context.warnings);
        let body = context.parse_elements(root, "body", ADAPTIVE_CARD_TYPE);
        let actions = context.parse_actions(root, "actions", ADAPTIVE_CARD_TYPE);

        tracing::debug!(
            body = body.len(),
            actions = actions.len(),
            warnings = warnings.len(),
            "Parsed card"
        );

        Ok(ParseResult {
            card: AdaptiveCard {
                version,
                fallback_text,
                lang,
                body,
                actions,
            },
            warnings,
        })
    }
}

impl Default for CardParser {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Read and check the card `version`.
fn parse_version(root: &Map<String, Value>, warnings: &mut Warnings) -> Option<SchemaVersion> {
    let Some(value) = root.get("version").filter(|v| !v.is_null()) else {
        warnings.add(
            WarningCode::RequiredPropertyMissing,
            "AdaptiveCard: required property 'version' is missing",
        );
        return None;
    };

    let Some(version) = value.as_str().and_then(SchemaVersion::parse) else {
        warnings.add(
            WarningCode::InvalidValue,
            format!("AdaptiveCard: invalid version {value}"),
        );
        return None;
    };

    let (major, minor) = SUPPORTED_SCHEMA_VERSION;
    let supported = SchemaVersion::new(major, minor);
    if version > supported {
        warnings.add(
            WarningCode::UnsupportedSchemaVersion,
            format!("AdaptiveCard: schema version {version} is newer than supported {supported}"),
        );
    }
    Some(version)
}

/// What to do with an entry whose type has no parser.
enum Fallback<'v> {
    Drop,
    Replace(&'v Value),
    Placeholder,
}

impl ParseContext<'_> {
    /// Parse one card element through the element registry.
    ///
    /// Returns `None` when the entry is dropped; the reason is always
    /// recorded as a warning.
    pub fn parse_element(&mut self, json: &Value) -> Option<CardElement> {
        let Some(obj) = json.as_object() else {
            self.warnings.add(
                WarningCode::InvalidValue,
                format!("Card element must be a JSON object, got {}", json_kind(json)),
            );
            return None;
        };
        let Some(type_name) = get_type_name(obj) else {
            self.warnings.add(
                WarningCode::RequiredPropertyMissing,
                "Card element has no string 'type' property; skipping",
            );
            return None;
        };

        let registry = self.element_parsers;
        if let Some(parser) = registry.get_parser(type_name) {
            tracing::debug!(type_name, "Dispatching card element");
            return match parser.from_json(json, self) {
                Ok(element) => Some(element),
                Err(err) => {
                    tracing::warn!(error = %err, type_name, "Error parsing card element, skipping");
                    self.warnings.add(WarningCode::InvalidValue, err.to_string());
                    None
                }
            };
        }

        self.warnings.add(
            WarningCode::UnknownElementType,
            format!("Unknown element type '{type_name}'"),
        );
        match self.fallback_for(obj) {
            Fallback::Drop => None,
            Fallback::Replace(replacement) => {
                self.fallback_depth += 1;
                let element = self.parse_element(replacement);
                self.fallback_depth -= 1;
                element
            }
            Fallback::Placeholder => Some(CardElement::Unknown(UnknownElement {
                type_name: type_name.to_string(),
                json: json.clone(),
            })),
        }
    }

    /// Parse one action through the action registry.
    ///
    /// Returns `None` when the entry is dropped; the reason is always
    /// recorded as a warning.
    pub fn parse_action(&mut self, json: &Value) -> Option<Action> {
        let Some(obj) = json.as_object() else {
            self.warnings.add(
                WarningCode::InvalidValue,
                format!("Action must be a JSON object, got {}", json_kind(json)),
            );
            return None;
        };
        let Some(type_name) = get_type_name(obj) else {
            self.warnings.add(
                WarningCode::RequiredPropertyMissing,
                "Action has no string 'type' property; skipping",
            );
            return None;
        };

        let registry = self.action_parsers;
        if let Some(parser) = registry.get_parser(type_name) {
            tracing::debug!(type_name, "Dispatching action");
            return match parser.from_json(json, self) {
                Ok(action) => Some(action),
                Err(err) => {
                    tracing::warn!(error = %err, type_name, "Error parsing action, skipping");
                    self.warnings.add(WarningCode::InvalidValue, err.to_string());
                    None
                }
            };
        }

        self.warnings.add(
            WarningCode::UnknownActionElementType,
            format!("Unknown action type '{type_name}'"),
        );
        match self.fallback_for(obj) {
            Fallback::Drop => None,
            Fallback::Replace(replacement) => {
                self.fallback_depth += 1;
                let action = self.parse_action(replacement);
                self.fallback_depth -= 1;
                action
            }
            Fallback::Placeholder => Some(Action::Unknown(UnknownAction {
                type_name: type_name.to_string(),
                json: json.clone(),
            })),
        }
    }

    /// Parse the array under `key` as card elements.
    ///
    /// An absent key yields an empty list; a non-array is reported.
    pub fn parse_elements(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        owner: &str,
    ) -> Vec<CardElement> {
        match self.entries(obj, key, owner) {
            Some(entries) => entries
                .iter()
                .filter_map(|entry| self.parse_element(entry))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Parse the array under `key` as actions.
    pub fn parse_actions(&mut self, obj: &Map<String, Value>, key: &str, owner: &str) -> Vec<Action> {
        match self.entries(obj, key, owner) {
            Some(entries) => entries
                .iter()
                .filter_map(|entry| self.parse_action(entry))
                .collect(),
            None => Vec::new(),
        }
    }

    fn entries<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        key: &str,
        owner: &str,
    ) -> Option<&'v Vec<Value>> {
        let value = obj.get(key).filter(|v| !v.is_null())?;
        let entries = value.as_array();
        if entries.is_none() {
            self.warnings.add(
                WarningCode::InvalidValue,
                format!("{owner}: '{key}' must be an array, got {}", json_kind(value)),
            );
        }
        entries
    }

    fn fallback_for<'v>(&mut self, obj: &'v Map<String, Value>) -> Fallback<'v> {
        match obj.get("fallback") {
            None | Some(Value::Null) => Fallback::Placeholder,
            Some(Value::String(text)) if text == FALLBACK_DROP => Fallback::Drop,
            Some(replacement @ Value::Object(_)) => {
                if self.fallback_depth >= MAX_FALLBACK_DEPTH {
                    self.warnings.add(
                        WarningCode::InvalidValue,
                        format!("Fallback chain deeper than {MAX_FALLBACK_DEPTH}; dropping entry"),
                    );
                    Fallback::Drop
                } else {
                    Fallback::Replace(replacement)
                }
            }
            Some(other) => {
                self.warnings.add(
                    WarningCode::InvalidValue,
                    format!("Invalid fallback {other}; expected \"drop\" or an object"),
                );
                Fallback::Placeholder
            }
        }
    }
}
