use serde::Serialize;

/// Recognized accessibility property keys.
///
/// Closed enumeration: adding a key is a source change, so every lookup
/// is exhaustive at compile time instead of a runtime string match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    Autocomplete,
    Checked,
    Disabled,
    Expanded,
    HasPopup,
    Invalid,
    Label,
    DescribedBy,
    Level,
    Multiline,
    MultiSelectable,
    Orientation,
    Placeholder,
    Pressed,
    ReadOnly,
    Required,
    Selected,
    Modal,
    Atomic,
    Live,
    PosInSet,
    SetSize,
    ValueMin,
    ValueMax,
    ValueNow,
    ValueText,
}

/// Expected value shape for a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Text,
    Number,
    /// A single token drawn from a closed vocabulary.
    Token,
    /// A list of identifier tokens (element references).
    IdList,
}

impl Property {
    /// The `aria-*` attribute name, used in issue text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Autocomplete => "aria-autocomplete",
            Self::Checked => "aria-checked",
            Self::Disabled => "aria-disabled",
            Self::Expanded => "aria-expanded",
            Self::HasPopup => "aria-haspopup",
            Self::Invalid => "aria-invalid",
            Self::Label => "aria-label",
            Self::DescribedBy => "aria-describedby",
            Self::Level => "aria-level",
            Self::Multiline => "aria-multiline",
            Self::MultiSelectable => "aria-multiselectable",
            Self::Orientation => "aria-orientation",
            Self::Placeholder => "aria-placeholder",
            Self::Pressed => "aria-pressed",
            Self::ReadOnly => "aria-readonly",
            Self::Required => "aria-required",
            Self::Selected => "aria-selected",
            Self::Modal => "aria-modal",
            Self::Atomic => "aria-atomic",
            Self::Live => "aria-live",
            Self::PosInSet => "aria-posinset",
            Self::SetSize => "aria-setsize",
            Self::ValueMin => "aria-valuemin",
            Self::ValueMax => "aria-valuemax",
            Self::ValueNow => "aria-valuenow",
            Self::ValueText => "aria-valuetext",
        }
    }

    #[must_use]
    pub const fn value_kind(self) -> ValueKind {
        match self {
            Self::Disabled
            | Self::Multiline
            | Self::MultiSelectable
            | Self::ReadOnly
            | Self::Required
            | Self::Modal
            | Self::Atomic => ValueKind::Bool,
            Self::Label | Self::Placeholder | Self::ValueText => ValueKind::Text,
            Self::Level
            | Self::PosInSet
            | Self::SetSize
            | Self::ValueMin
            | Self::ValueMax
            | Self::ValueNow => ValueKind::Number,
            Self::Autocomplete
            | Self::Checked
            | Self::Expanded
            | Self::HasPopup
            | Self::Invalid
            | Self::Orientation
            | Self::Pressed
            | Self::Selected
            | Self::Live => ValueKind::Token,
            Self::DescribedBy => ValueKind::IdList,
        }
    }

    /// The closed token vocabulary for [`ValueKind::Token`] properties.
    #[must_use]
    pub const fn token_values(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Checked => Some(&["true", "false", "mixed"]),
            Self::Expanded | Self::Selected => Some(&["true", "false", "undefined"]),
            Self::Pressed => Some(&["true", "false", "mixed", "undefined"]),
            Self::Invalid => Some(&["true", "false", "grammar", "spelling"]),
            Self::Live => Some(LIVE_TOKENS),
            Self::Orientation => Some(&["horizontal", "vertical", "undefined"]),
            Self::Autocomplete => Some(&["none", "inline", "list", "both"]),
            Self::HasPopup => Some(&["false", "true", "menu", "listbox", "tree", "grid", "dialog"]),
            _ => None,
        }
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Politeness tokens accepted by a live region.
pub const LIVE_TOKENS: &[&str] = &["off", "polite", "assertive"];

/// Default politeness applied when synthesizing a live-region value.
pub const DEFAULT_LIVE_TOKEN: &str = "polite";

/// A typed property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Str(String),
    Number(f64),
    Tokens(Vec<String>),
}

impl PropertyValue {
    #[must_use]
    pub fn str(s: &str) -> Self {
        Self::Str(s.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this value has the shape a property expects.
    ///
    /// Token vocabularies are checked separately by the rule evaluator;
    /// this only validates the carrier type.
    #[must_use]
    pub const fn matches_kind(&self, kind: ValueKind) -> bool {
        match kind {
            ValueKind::Bool => matches!(self, Self::Bool(_)),
            ValueKind::Text | ValueKind::Token => matches!(self, Self::Str(_)),
            ValueKind::Number => matches!(self, Self::Number(_)),
            ValueKind::IdList => matches!(self, Self::Tokens(_) | Self::Str(_)),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

#[cfg(test)]
#[path = "property_tests.rs"]
mod tests;
