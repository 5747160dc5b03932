use super::property::Property;
use super::role::Role;

/// Properties any role may carry, mirroring ARIA's global attributes.
pub const GLOBAL_SUPPORTED: &[Property] = &[
    Property::Label,
    Property::DescribedBy,
    Property::Live,
    Property::Atomic,
];

/// Static rule set for a role: which properties it must and may declare,
/// and whether it is interactive by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub required: &'static [Property],
    pub supported: &'static [Property],
    pub interactive: bool,
}

impl RuleSet {
    /// Whether `property` is allowed on this role.
    ///
    /// Required and global properties are always supported.
    #[must_use]
    pub fn supports(&self, property: Property) -> bool {
        self.required.contains(&property)
            || self.supported.contains(&property)
            || GLOBAL_SUPPORTED.contains(&property)
    }
}

const RANGE_REQUIRED: &[Property] = &[Property::ValueMin, Property::ValueMax, Property::ValueNow];

const FORM_STATE: &[Property] = &[
    Property::Disabled,
    Property::Invalid,
    Property::ReadOnly,
    Property::Required,
];

impl Role {
    /// The rule set governing this role.
    ///
    /// Total by construction: the match is exhaustive over the closed
    /// role enumeration, and the table itself is `'static` data.
    #[must_use]
    #[allow(clippy::too_many_lines)] // flat data table, one arm per role
    pub const fn rule_set(self) -> RuleSet {
        match self {
            Self::Button => RuleSet {
                required: &[],
                supported: &[
                    Property::Disabled,
                    Property::Expanded,
                    Property::HasPopup,
                    Property::Pressed,
                ],
                interactive: true,
            },
            Self::Checkbox | Self::Switch => RuleSet {
                required: &[Property::Checked],
                supported: FORM_STATE,
                interactive: true,
            },
            Self::Radio => RuleSet {
                required: &[Property::Checked],
                supported: &[
                    Property::Disabled,
                    Property::Invalid,
                    Property::ReadOnly,
                    Property::Required,
                    Property::PosInSet,
                    Property::SetSize,
                ],
                interactive: true,
            },
            Self::Textbox => RuleSet {
                required: &[],
                supported: &[
                    Property::Autocomplete,
                    Property::Disabled,
                    Property::Invalid,
                    Property::Multiline,
                    Property::Placeholder,
                    Property::ReadOnly,
                    Property::Required,
                ],
                interactive: true,
            },
            Self::Slider => RuleSet {
                required: RANGE_REQUIRED,
                supported: &[
                    Property::ValueText,
                    Property::Orientation,
                    Property::Disabled,
                ],
                interactive: true,
            },
            Self::SpinButton => RuleSet {
                required: RANGE_REQUIRED,
                supported: &[
                    Property::ValueText,
                    Property::Disabled,
                    Property::Invalid,
                    Property::ReadOnly,
                    Property::Required,
                ],
                interactive: true,
            },
            Self::ProgressBar => RuleSet {
                required: RANGE_REQUIRED,
                supported: &[Property::ValueText],
                interactive: false,
            },
            Self::Combobox => RuleSet {
                required: &[Property::Expanded],
                supported: &[
                    Property::Autocomplete,
                    Property::Disabled,
                    Property::HasPopup,
                    Property::Invalid,
                    Property::ReadOnly,
                    Property::Required,
                ],
                interactive: true,
            },
            Self::Listbox => RuleSet {
                required: &[],
                supported: &[
                    Property::MultiSelectable,
                    Property::Orientation,
                    Property::Disabled,
                    Property::Expanded,
                ],
                interactive: true,
            },
            Self::Tree => RuleSet {
                required: &[],
                supported: &[
                    Property::MultiSelectable,
                    Property::Orientation,
                    Property::Disabled,
                ],
                interactive: true,
            },
            Self::TabList => RuleSet {
                required: &[],
                supported: &[Property::Orientation],
                interactive: false,
            },
            Self::Tab => RuleSet {
                required: &[Property::Selected],
                supported: &[
                    Property::Disabled,
                    Property::Expanded,
                    Property::HasPopup,
                    Property::PosInSet,
                    Property::SetSize,
                ],
                interactive: true,
            },
            Self::TabPanel | Self::Group | Self::Image => RuleSet {
                required: &[],
                supported: &[],
                interactive: false,
            },
            Self::Dialog => RuleSet {
                required: &[],
                supported: &[Property::Modal],
                interactive: false,
            },
            Self::Scrollbar => RuleSet {
                required: &[],
                supported: &[
                    Property::Orientation,
                    Property::Disabled,
                    Property::ValueMin,
                    Property::ValueMax,
                    Property::ValueNow,
                ],
                interactive: true,
            },
            Self::Separator => RuleSet {
                required: &[],
                supported: &[Property::Orientation],
                interactive: false,
            },
            Self::Link => RuleSet {
                required: &[],
                supported: &[Property::Disabled, Property::Expanded, Property::HasPopup],
                interactive: true,
            },
            // Live-region roles must announce; politeness is mandatory.
            Self::Alert | Self::Status | Self::Log => RuleSet {
                required: &[Property::Live],
                supported: &[],
                interactive: false,
            },
            Self::None => RuleSet {
                required: &[],
                supported: &[],
                interactive: false,
            },
        }
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
