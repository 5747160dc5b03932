use serde::Serialize;

/// Structural widget category of an element, as reported by the UI layer.
///
/// `Other` carries the toolkit class name of widgets this crate does not
/// recognize; such elements infer [`Role::None`] and are flagged at Info
/// severity rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Button,
    Checkbox,
    RadioButton,
    TextInput,
    TextArea,
    Label,
    Slider,
    ScrollBar,
    ListBox,
    ComboBox,
    SpinBox,
    ProgressBar,
    TabStrip,
    Frame,
    Window,
    Canvas,
    Separator,
    Switch,
    Link,
    Image,
    StatusBar,
    Other(String),
}

impl ElementKind {
    /// Display name used in ancestor paths and issue text.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Button => "Button",
            Self::Checkbox => "Checkbox",
            Self::RadioButton => "RadioButton",
            Self::TextInput => "TextInput",
            Self::TextArea => "TextArea",
            Self::Label => "Label",
            Self::Slider => "Slider",
            Self::ScrollBar => "ScrollBar",
            Self::ListBox => "ListBox",
            Self::ComboBox => "ComboBox",
            Self::SpinBox => "SpinBox",
            Self::ProgressBar => "ProgressBar",
            Self::TabStrip => "TabStrip",
            Self::Frame => "Frame",
            Self::Window => "Window",
            Self::Canvas => "Canvas",
            Self::Separator => "Separator",
            Self::Switch => "Switch",
            Self::Link => "Link",
            Self::Image => "Image",
            Self::StatusBar => "StatusBar",
            Self::Other(name) => name,
        }
    }

    /// Default role for this widget category.
    #[must_use]
    pub const fn default_role(&self) -> Role {
        match self {
            Self::Button => Role::Button,
            Self::Checkbox => Role::Checkbox,
            Self::RadioButton => Role::Radio,
            Self::TextInput | Self::TextArea => Role::Textbox,
            Self::Slider => Role::Slider,
            Self::ScrollBar => Role::Scrollbar,
            Self::ListBox => Role::Listbox,
            Self::ComboBox => Role::Combobox,
            Self::SpinBox => Role::SpinButton,
            Self::ProgressBar => Role::ProgressBar,
            Self::TabStrip => Role::TabList,
            Self::Frame => Role::Group,
            Self::Window => Role::Dialog,
            Self::Canvas | Self::Image => Role::Image,
            Self::Separator => Role::Separator,
            Self::Switch => Role::Switch,
            Self::Link => Role::Link,
            Self::StatusBar => Role::Status,
            // Labels are presentation only.
            Self::Label | Self::Other(_) => Role::None,
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// ARIA-style role. Closed enumeration; every role has a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Button,
    Checkbox,
    Radio,
    Textbox,
    Slider,
    SpinButton,
    ProgressBar,
    Combobox,
    Listbox,
    Tree,
    TabList,
    Tab,
    TabPanel,
    Dialog,
    Group,
    Scrollbar,
    Separator,
    Switch,
    Link,
    Image,
    Alert,
    Status,
    Log,
    None,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Textbox => "textbox",
            Self::Slider => "slider",
            Self::SpinButton => "spinbutton",
            Self::ProgressBar => "progressbar",
            Self::Combobox => "combobox",
            Self::Listbox => "listbox",
            Self::Tree => "tree",
            Self::TabList => "tablist",
            Self::Tab => "tab",
            Self::TabPanel => "tabpanel",
            Self::Dialog => "dialog",
            Self::Group => "group",
            Self::Scrollbar => "scrollbar",
            Self::Separator => "separator",
            Self::Switch => "switch",
            Self::Link => "link",
            Self::Image => "img",
            Self::Alert => "alert",
            Self::Status => "status",
            Self::Log => "log",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "role_tests.rs"]
mod tests;
