//! Action parsers.
//!
//! Actions are parsed into data only. Executing them (opening the URL,
//! submitting inputs) is the host's job.

use std::sync::OnceLock;

use serde_json::Value;

use super::base::parse_action_base;
use crate::config::{OPEN_URL_ACTION_TYPE, SUBMIT_ACTION_TYPE};
use crate::error::Result;
use crate::json::{expect_object, required_text};
use crate::registry::{ActionParser, ParseContext};
use crate::types::{Action, OpenUrlAction, SubmitAction};

/// Parser for `Action.OpenUrl`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenUrlActionParser;

static OPEN_URL_ACTION_PARSER: OnceLock<OpenUrlActionParser> = OnceLock::new();

impl OpenUrlActionParser {
    /// Get the process-wide parser instance.
    pub fn instance() -> &'static OpenUrlActionParser {
        OPEN_URL_ACTION_PARSER.get_or_init(OpenUrlActionParser::default)
    }
}

impl ActionParser for OpenUrlActionParser {
    fn from_json(&self, json: &Value, context: &mut ParseContext<'_>) -> Result<Action> {
        let obj = expect_object(json, OPEN_URL_ACTION_TYPE)?;
        let policy = context.options.coercion;
        let warnings = &mut *context.warnings;

        Ok(Action::OpenUrl(OpenUrlAction {
            base: parse_action_base(obj, OPEN_URL_ACTION_TYPE, warnings),
            url: required_text(obj, "url", OPEN_URL_ACTION_TYPE, policy, warnings)
                .unwrap_or_default(),
        }))
    }
}

/// Parser for `Action.Submit`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitActionParser;

static SUBMIT_ACTION_PARSER: OnceLock<SubmitActionParser> = OnceLock::new();

impl SubmitActionParser {
    /// Get the process-wide parser instance.
    pub fn instance() -> &'static SubmitActionParser {
        SUBMIT_ACTION_PARSER.get_or_init(SubmitActionParser::default)
    }
}

impl ActionParser for SubmitActionParser {
    fn from_json(&self, json: &Value, context: &mut ParseContext<'_>) -> Result<Action> {
        let obj = expect_object(json, SUBMIT_ACTION_TYPE)?;

        Ok(Action::Submit(SubmitAction {
            base: parse_action_base(obj, SUBMIT_ACTION_TYPE, context.warnings),
            data: obj.get("data").filter(|data| !data.is_null()).cloned(),
        }))
    }
}
