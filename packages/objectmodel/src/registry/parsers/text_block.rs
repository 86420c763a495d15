//! TextBlock element parser.

use std::sync::OnceLock;

use serde_json::Value;

use super::base::parse_element_base;
use crate::config::TEXT_BLOCK_TYPE;
use crate::error::Result;
use crate::json::{expect_object, get_bool, get_enum, get_u32, required_text};
use crate::registry::{ElementParser, ParseContext};
use crate::types::{
    CardElement, ForegroundColor, HorizontalAlignment, TextBlock, TextSize, TextWeight,
};

/// Parser for `TextBlock` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextBlockParser;

static TEXT_BLOCK_PARSER: OnceLock<TextBlockParser> = OnceLock::new();

impl TextBlockParser {
    /// Get the process-wide parser instance.
    pub fn instance() -> &'static TextBlockParser {
        TEXT_BLOCK_PARSER.get_or_init(TextBlockParser::default)
    }

    /// Parse a text block from its JSON object.
    ///
    /// # Errors
    /// Returns `MalformedCard` if `json` is not an object.
    pub fn parse(&self, json: &Value, context: &mut ParseContext<'_>) -> Result<TextBlock> {
        let obj = expect_object(json, TEXT_BLOCK_TYPE)?;
        let warnings = &mut *context.warnings;
        let owner = TEXT_BLOCK_TYPE;

        Ok(TextBlock {
            base: parse_element_base(obj, owner, warnings),
            // Under strict coercion a mistyped text is reported and left empty.
            text: required_text(obj, "text", owner, context.options.coercion, warnings)
                .unwrap_or_default(),
            wrap: get_bool(obj, "wrap", false, owner, warnings),
            max_lines: get_u32(obj, "maxLines", owner, warnings),
            is_subtle: get_bool(obj, "isSubtle", false, owner, warnings),
            size: get_enum::<TextSize>(obj, "size", owner, warnings).unwrap_or_default(),
            weight: get_enum::<TextWeight>(obj, "weight", owner, warnings).unwrap_or_default(),
            color: get_enum::<ForegroundColor>(obj, "color", owner, warnings).unwrap_or_default(),
            horizontal_alignment: get_enum::<HorizontalAlignment>(
                obj,
                "horizontalAlignment",
                owner,
                warnings,
            )
            .unwrap_or_default(),
        })
    }
}

impl ElementParser for TextBlockParser {
    fn from_json(&self, json: &Value, context: &mut ParseContext<'_>) -> Result<CardElement> {
        self.parse(json, context).map(CardElement::TextBlock)
    }
}
