//! Core data types of the card object model.
//!
//! These types are the parsed, in-memory form of an AdaptiveCards payload.
//! They serialize back to camelCase JSON so hosts can log or re-emit them.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::config::{
    ADAPTIVE_CARD_TYPE, FACT_SET_TYPE, OPEN_URL_ACTION_TYPE, SUBMIT_ACTION_TYPE, TEXT_BLOCK_TYPE,
};

/// A closed set of string values accepted by a schema property.
///
/// Matching is case-insensitive, the way card authors write them in practice.
pub trait SchemaEnum: Sized + Copy + 'static {
    /// Every variant, in schema order.
    const VARIANTS: &'static [Self];

    /// Get the schema string for this value.
    fn as_str(&self) -> &'static str;

    /// Parse a schema string.
    fn from_schema(value: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(value))
    }
}

/// Space between an element and the one before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Spacing {
    None,
    Small,
    #[default]
    Default,
    Medium,
    Large,
    ExtraLarge,
    Padding,
}

impl SchemaEnum for Spacing {
    const VARIANTS: &'static [Self] = &[
        Self::None,
        Self::Small,
        Self::Default,
        Self::Medium,
        Self::Large,
        Self::ExtraLarge,
        Self::Padding,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Small => "small",
            Self::Default => "default",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extraLarge",
            Self::Padding => "padding",
        }
    }
}

/// Vertical sizing of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HeightType {
    #[default]
    Auto,
    Stretch,
}

impl SchemaEnum for HeightType {
    const VARIANTS: &'static [Self] = &[Self::Auto, Self::Stretch];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Stretch => "stretch",
        }
    }
}

/// Font size of a text block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextSize {
    #[default]
    Default,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl SchemaEnum for TextSize {
    const VARIANTS: &'static [Self] = &[
        Self::Default,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::ExtraLarge,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extraLarge",
        }
    }
}

/// Font weight of a text block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextWeight {
    #[default]
    Default,
    Lighter,
    Bolder,
}

impl SchemaEnum for TextWeight {
    const VARIANTS: &'static [Self] = &[Self::Default, Self::Lighter, Self::Bolder];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Lighter => "lighter",
            Self::Bolder => "bolder",
        }
    }
}

/// Foreground color of a text block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ForegroundColor {
    #[default]
    Default,
    Dark,
    Light,
    Accent,
    Good,
    Warning,
    Attention,
}

impl SchemaEnum for ForegroundColor {
    const VARIANTS: &'static [Self] = &[
        Self::Default,
        Self::Dark,
        Self::Light,
        Self::Accent,
        Self::Good,
        Self::Warning,
        Self::Attention,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Accent => "accent",
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Attention => "attention",
        }
    }
}

/// Horizontal alignment of a text block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl SchemaEnum for HorizontalAlignment {
    const VARIANTS: &'static [Self] = &[Self::Left, Self::Center, Self::Right];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Card schema version, e.g. `1.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
}

impl SchemaVersion {
    /// Create a version from its parts.
    #[must_use]
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse `"major.minor"`; a bare `"major"` is read as `major.0`.
    ///
    /// # Examples
    /// ```
    /// use adaptivecards_objectmodel::types::SchemaVersion;
    ///
    /// assert_eq!(SchemaVersion::parse("1.5"), Some(SchemaVersion::new(1, 5)));
    /// assert_eq!(SchemaVersion::parse("2"), Some(SchemaVersion::new(2, 0)));
    /// assert_eq!(SchemaVersion::parse("one.five"), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.trim().split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(minor) => minor.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self { major, minor })
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl Serialize for SchemaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fields shared by every card element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub spacing: Spacing,
    pub separator: bool,
    pub is_visible: bool,
    pub height: HeightType,
}

impl Default for ElementBase {
    fn default() -> Self {
        Self {
            id: None,
            spacing: Spacing::Default,
            separator: false,
            is_visible: true,
            height: HeightType::Auto,
        }
    }
}

/// A single title/value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

impl Fact {
    /// Create a new fact.
    #[must_use]
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Ordered list of facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FactSet {
    #[serde(flatten)]
    pub base: ElementBase,
    pub facts: Vec<Fact>,
}

/// A block of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(flatten)]
    pub base: ElementBase,
    pub text: String,
    pub wrap: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,
    pub is_subtle: bool,
    pub size: TextSize,
    pub weight: TextWeight,
    pub color: ForegroundColor,
    pub horizontal_alignment: HorizontalAlignment,
}

/// Placeholder for an element whose type has no registered parser.
///
/// Serializes as its original `json`, so the type tag is the author's.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownElement {
    pub type_name: String,
    pub json: Value,
}

/// Known variant body with its schema `type` tag in front.
#[derive(Serialize)]
struct Tagged<'a, T> {
    #[serde(rename = "type")]
    type_name: &'a str,
    #[serde(flatten)]
    inner: &'a T,
}

fn tagged<S: Serializer, T: Serialize>(
    serializer: S,
    type_name: &str,
    inner: &T,
) -> Result<S::Ok, S::Error> {
    Tagged { type_name, inner }.serialize(serializer)
}

/// A node in the card body.
#[derive(Debug, Clone, PartialEq)]
pub enum CardElement {
    FactSet(FactSet),
    TextBlock(TextBlock),
    Unknown(UnknownElement),
}

impl Serialize for CardElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::FactSet(fact_set) => tagged(serializer, FACT_SET_TYPE, fact_set),
            Self::TextBlock(text_block) => tagged(serializer, TEXT_BLOCK_TYPE, text_block),
            Self::Unknown(unknown) => unknown.json.serialize(serializer),
        }
    }
}

impl CardElement {
    /// Schema type name of this element.
    #[must_use]
    pub fn element_type(&self) -> &str {
        match self {
            Self::FactSet(_) => FACT_SET_TYPE,
            Self::TextBlock(_) => TEXT_BLOCK_TYPE,
            Self::Unknown(unknown) => &unknown.type_name,
        }
    }

    /// Common element fields, if the element was parsed by a known parser.
    #[must_use]
    pub fn base(&self) -> Option<&ElementBase> {
        match self {
            Self::FactSet(fact_set) => Some(&fact_set.base),
            Self::TextBlock(text_block) => Some(&text_block.base),
            Self::Unknown(_) => None,
        }
    }

    /// Element id, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.base().and_then(|base| base.id.as_deref())
    }

    /// Get the fact set, if this element is one.
    #[must_use]
    pub fn as_fact_set(&self) -> Option<&FactSet> {
        match self {
            Self::FactSet(fact_set) => Some(fact_set),
            _ => None,
        }
    }

    /// Get the text block, if this element is one.
    #[must_use]
    pub fn as_text_block(&self) -> Option<&TextBlock> {
        match self {
            Self::TextBlock(text_block) => Some(text_block),
            _ => None,
        }
    }
}

/// Fields shared by every action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub is_enabled: bool,
}

impl Default for ActionBase {
    fn default() -> Self {
        Self {
            id: None,
            title: None,
            icon_url: None,
            tooltip: None,
            is_enabled: true,
        }
    }
}

/// Action that asks the host to open a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpenUrlAction {
    #[serde(flatten)]
    pub base: ActionBase,
    pub url: String,
}

/// Action that hands input data back to the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubmitAction {
    #[serde(flatten)]
    pub base: ActionBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Placeholder for an action whose type has no registered parser.
///
/// Serializes as its original `json`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownAction {
    pub type_name: String,
    pub json: Value,
}

/// An action attached to a card.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    OpenUrl(OpenUrlAction),
    Submit(SubmitAction),
    Unknown(UnknownAction),
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::OpenUrl(action) => tagged(serializer, OPEN_URL_ACTION_TYPE, action),
            Self::Submit(action) => tagged(serializer, SUBMIT_ACTION_TYPE, action),
            Self::Unknown(unknown) => unknown.json.serialize(serializer),
        }
    }
}

impl Action {
    /// Schema type name of this action.
    #[must_use]
    pub fn action_type(&self) -> &str {
        match self {
            Self::OpenUrl(_) => OPEN_URL_ACTION_TYPE,
            Self::Submit(_) => SUBMIT_ACTION_TYPE,
            Self::Unknown(unknown) => &unknown.type_name,
        }
    }

    /// Common action fields, if the action was parsed by a known parser.
    #[must_use]
    pub fn base(&self) -> Option<&ActionBase> {
        match self {
            Self::OpenUrl(action) => Some(&action.base),
            Self::Submit(action) => Some(&action.base),
            Self::Unknown(_) => None,
        }
    }
}

/// A parsed card.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<SchemaVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub body: Vec<CardElement>,
    pub actions: Vec<Action>,
}

impl AdaptiveCard {
    /// Schema type name of the card root.
    #[must_use]
    pub fn card_type(&self) -> &'static str {
        ADAPTIVE_CARD_TYPE
    }

    /// Find a body element by id.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<&CardElement> {
        self.body.iter().find(|element| element.id() == Some(id))
    }
}
