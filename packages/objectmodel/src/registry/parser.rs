//! Parser trait definitions.

use serde_json::Value;

use super::types::ParseContext;
use crate::error::Result;
use crate::types::{Action, CardElement};

/// Trait for card element parsers.
///
/// Parsers turn the JSON object of one element into a [`CardElement`].
/// They receive the parse context, which carries both registries for
/// nested elements and actions plus the warning sink.
pub trait ElementParser: Send + Sync {
    /// Parse an element from its JSON object.
    ///
    /// # Errors
    /// Returns `MalformedCard` when `json` is structurally unusable
    /// (e.g. not an object). Recoverable issues go to `context.warnings`.
    fn from_json(&self, json: &Value, context: &mut ParseContext<'_>) -> Result<CardElement>;
}

/// Trait for action parsers.
pub trait ActionParser: Send + Sync {
    /// Parse an action from its JSON object.
    ///
    /// # Errors
    /// Returns `MalformedCard` when `json` is structurally unusable.
    fn from_json(&self, json: &Value, context: &mut ParseContext<'_>) -> Result<Action>;
}

// Lets a registry hold `&'static` singletons directly.
impl<P: ElementParser + ?Sized> ElementParser for &P {
    fn from_json(&self, json: &Value, context: &mut ParseContext<'_>) -> Result<CardElement> {
        (**self).from_json(json, context)
    }
}

impl<P: ActionParser + ?Sized> ActionParser for &P {
    fn from_json(&self, json: &Value, context: &mut ParseContext<'_>) -> Result<Action> {
        (**self).from_json(json, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ActionParserRegistry, ElementParserRegistry};
    use crate::types::UnknownElement;
    use crate::warning::Warnings;

    struct TestParser;

    impl ElementParser for TestParser {
        fn from_json(&self, json: &Value, _context: &mut ParseContext<'_>) -> Result<CardElement> {
            Ok(CardElement::Unknown(UnknownElement {
                type_name: "Test".to_string(),
                json: json.clone(),
            }))
        }
    }

    #[test]
    fn test_parser_trait() {
        let elements = ElementParserRegistry::new();
        let actions = ActionParserRegistry::new();
        let mut warnings = Warnings::new();
        let mut context = ParseContext::new(&elements, &actions, &mut warnings);

        let element = TestParser
            .from_json(&serde_json::json!({ "type": "Test" }), &mut context)
            .unwrap();

        assert_eq!(element.element_type(), "Test");
    }

    #[test]
    fn test_reference_delegates() {
        static PARSER: TestParser = TestParser;
        let parser: &'static TestParser = &PARSER;

        let elements = ElementParserRegistry::new();
        let actions = ActionParserRegistry::new();
        let mut warnings = Warnings::new();
        let mut context = ParseContext::new(&elements, &actions, &mut warnings);

        let element = ElementParser::from_json(&parser, &serde_json::json!({}), &mut context)
            .unwrap();
        assert_eq!(element.element_type(), "Test");
    }
}
