//! FactSet element parser.
//!
//! A fact set is an ordered list of title/value pairs:
//!
//! ```json
//! { "type": "FactSet", "facts": [ { "title": "Owner", "value": "Ada" } ] }
//! ```
//!
//! Individual malformed facts are skipped or defaulted with a warning; only
//! a root that is not a JSON object fails the element.

use std::sync::OnceLock;

use serde_json::Value;

use super::base::parse_element_base;
use crate::config::FACT_SET_TYPE;
use crate::error::Result;
use crate::json::{expect_object, json_kind, rejects_text, required_text};
use crate::registry::{ElementParser, ParseContext};
use crate::types::{CardElement, Fact, FactSet};
use crate::warning::WarningCode;

/// Parser for `FactSet` elements.
///
/// Stateless; use [`FactSetParser::instance`] to share one instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactSetParser;

static FACT_SET_PARSER: OnceLock<FactSetParser> = OnceLock::new();

impl FactSetParser {
    /// Get the process-wide parser instance.
    pub fn instance() -> &'static FactSetParser {
        FACT_SET_PARSER.get_or_init(FactSetParser::default)
    }

    /// Parse a fact set from its JSON object.
    ///
    /// # Errors
    /// Returns `MalformedCard` if `json` is not an object.
    pub fn parse(&self, json: &Value, context: &mut ParseContext<'_>) -> Result<FactSet> {
        let obj = expect_object(json, FACT_SET_TYPE)?;
        let base = parse_element_base(obj, FACT_SET_TYPE, context.warnings);

        let facts = match obj.get("facts") {
            None | Some(Value::Null) => {
                context.warnings.add(
                    WarningCode::RequiredPropertyMissing,
                    "FactSet: required property 'facts' is missing; using an empty list",
                );
                Vec::new()
            }
            Some(Value::Array(entries)) => self.parse_facts(entries, context),
            Some(other) => {
                context.warnings.add(
                    WarningCode::InvalidValue,
                    format!(
                        "FactSet: 'facts' must be an array, got {}; using an empty list",
                        json_kind(other)
                    ),
                );
                Vec::new()
            }
        };

        Ok(FactSet { base, facts })
    }

    fn parse_facts(&self, entries: &[Value], context: &mut ParseContext<'_>) -> Vec<Fact> {
        let policy = context.options.coercion;
        let mut facts = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let owner = format!("FactSet.facts[{index}]");
            let Some(fact) = entry.as_object() else {
                context.warnings.add(
                    WarningCode::InvalidValue,
                    format!(
                        "{owner}: expected an object, got {}; fact skipped",
                        json_kind(entry)
                    ),
                );
                continue;
            };

            // A dropped fact reports only its first unusable key.
            if let Some(key) = ["title", "value"]
                .into_iter()
                .find(|key| rejects_text(fact, key, policy))
            {
                let _ = required_text(fact, key, &owner, policy, context.warnings);
                continue;
            }

            let title = required_text(fact, "title", &owner, policy, context.warnings);
            let value = required_text(fact, "value", &owner, policy, context.warnings);
            if let (Some(title), Some(value)) = (title, value) {
                facts.push(Fact { title, value });
            }
        }

        facts
    }
}

impl ElementParser for FactSetParser {
    fn from_json(&self, json: &Value, context: &mut ParseContext<'_>) -> Result<CardElement> {
        self.parse(json, context).map(CardElement::FactSet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CoercionPolicy, ParseOptions};
    use crate::error::CardError;
    use crate::registry::{ActionParserRegistry, ElementParserRegistry};
    use crate::warning::Warnings;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse_with(json: &Value, options: ParseOptions) -> (Result<FactSet>, Warnings) {
        let elements = ElementParserRegistry::new();
        let actions = ActionParserRegistry::new();
        let mut warnings = Warnings::new();
        let result = {
            let mut context =
                ParseContext::new(&elements, &actions, &mut warnings).with_options(options);
            FactSetParser::instance().parse(json, &mut context)
        };
        (result, warnings)
    }

    fn parse(json: &Value) -> (Result<FactSet>, Warnings) {
        parse_with(json, ParseOptions::default())
    }

    #[test]
    fn test_well_typed_facts_keep_order() {
        let (result, warnings) = parse(&json!({
            "type": "FactSet",
            "facts": [
                { "title": "Board", "value": "Adaptive Cards" },
                { "title": "List", "value": "Backlog" },
                { "title": "Assigned to", "value": "" }
            ]
        }));

        assert_eq!(
            result.unwrap().facts,
            vec![
                Fact::new("Board", "Adaptive Cards"),
                Fact::new("List", "Backlog"),
                Fact::new("Assigned to", ""),
            ]
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_missing_facts_key() {
        let (result, warnings) = parse(&json!({ "type": "FactSet" }));

        assert!(result.unwrap().facts.is_empty());
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings.as_slice()[0].code,
            WarningCode::RequiredPropertyMissing
        );
    }

    #[test]
    fn test_null_facts_treated_as_missing() {
        let (result, warnings) = parse(&json!({ "type": "FactSet", "facts": null }));

        assert!(result.unwrap().facts.is_empty());
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings.as_slice()[0].code,
            WarningCode::RequiredPropertyMissing
        );
    }

    #[test]
    fn test_facts_not_an_array() {
        let (result, warnings) = parse(&json!({ "type": "FactSet", "facts": "Owner: Ada" }));

        assert!(result.unwrap().facts.is_empty());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings.as_slice()[0].code, WarningCode::InvalidValue);
    }

    #[test]
    fn test_missing_value_defaults_to_empty() {
        let (result, warnings) = parse(&json!({ "type": "FactSet", "facts": [{ "title": "A" }] }));

        assert_eq!(result.unwrap().facts, vec![Fact::new("A", "")]);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_non_object_fact_skipped() {
        let (result, warnings) = parse(&json!({
            "type": "FactSet",
            "facts": ["loose", { "title": "Kept", "value": "yes" }]
        }));

        assert_eq!(result.unwrap().facts, vec![Fact::new("Kept", "yes")]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings.as_slice()[0].message.starts_with("FactSet.facts[0]"));
    }

    #[test]
    fn test_numeric_value_lenient() {
        let (result, warnings) = parse(&json!({
            "type": "FactSet",
            "facts": [{ "title": "Count", "value": 3 }, { "title": "Done", "value": false }]
        }));

        assert_eq!(
            result.unwrap().facts,
            vec![Fact::new("Count", "3"), Fact::new("Done", "false")]
        );
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_numeric_value_strict() {
        let (result, warnings) = parse_with(
            &json!({
                "type": "FactSet",
                "facts": [{ "title": "Count", "value": 3 }, { "title": "Name", "value": "x" }]
            }),
            ParseOptions::new().with_coercion(CoercionPolicy::Strict),
        );

        assert_eq!(result.unwrap().facts, vec![Fact::new("Name", "x")]);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_skipped_fact_records_one_warning() {
        let (result, warnings) = parse(&json!({ "type": "FactSet", "facts": [{ "title": ["x"] }] }));

        assert!(result.unwrap().facts.is_empty());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings.as_slice()[0].code, WarningCode::InvalidValue);
        assert!(warnings.as_slice()[0].message.contains("'title'"));
    }

    #[test]
    fn test_skipped_fact_records_one_warning_strict() {
        let (result, warnings) = parse_with(
            &json!({ "type": "FactSet", "facts": [{ "title": 1 }, { "value": { "a": 1 } }] }),
            ParseOptions::new().with_coercion(CoercionPolicy::Strict),
        );

        assert!(result.unwrap().facts.is_empty());
        let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert_eq!(messages.len(), 2, "{messages:?}");
        assert!(messages[0].starts_with("FactSet.facts[0]: 'title'"));
        assert!(messages[1].starts_with("FactSet.facts[1]: 'value'"));
        assert!(warnings.iter().all(|w| w.code == WarningCode::InvalidValue));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let (result, warnings) = parse(&json!({
            "type": "FactSet",
            "id": "details",
            "futureProperty": { "a": 1 },
            "facts": [{ "title": "T", "value": "V", "style": "bold" }]
        }));

        let fact_set = result.unwrap();
        assert_eq!(fact_set.base.id.as_deref(), Some("details"));
        assert_eq!(fact_set.facts.len(), 1);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_null_root_is_malformed() {
        let (result, warnings) = parse(&Value::Null);

        assert!(matches!(result, Err(CardError::MalformedCard { .. })));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_array_root_is_malformed() {
        let (result, _) = parse(&json!([{ "title": "A", "value": "B" }]));
        assert!(matches!(result, Err(CardError::MalformedCard { .. })));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let json = json!({
            "type": "FactSet",
            "facts": [{ "title": "A", "value": "1" }, { "title": "B" }]
        });

        let (first, first_warnings) = parse(&json);
        let (second, second_warnings) = parse(&json);

        assert_eq!(first.unwrap(), second.unwrap());
        assert_eq!(first_warnings, second_warnings);
    }

    #[test]
    fn test_from_json_wraps_element() {
        let elements = ElementParserRegistry::new();
        let actions = ActionParserRegistry::new();
        let mut warnings = Warnings::new();
        let mut context = ParseContext::new(&elements, &actions, &mut warnings);

        let element = FactSetParser
            .from_json(&json!({ "type": "FactSet", "facts": [] }), &mut context)
            .unwrap();

        assert_eq!(element.element_type(), "FactSet");
    }

    #[test]
    fn test_instance_is_shared() {
        assert!(std::ptr::eq(
            FactSetParser::instance(),
            FactSetParser::instance()
        ));
    }
}
