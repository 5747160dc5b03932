mod property;
mod role;
mod rules;

pub use property::{DEFAULT_LIVE_TOKEN, LIVE_TOKENS, Property, PropertyValue, ValueKind};
pub use role::{ElementKind, Role};
pub use rules::{GLOBAL_SUPPORTED, RuleSet};

/// Resolve the effective role of an element.
///
/// An explicitly declared role always wins; otherwise the widget kind's
/// default mapping applies. Unrecognized kinds resolve to [`Role::None`].
#[must_use]
pub const fn infer_role(declared: Option<Role>, kind: &ElementKind) -> Role {
    match declared {
        Some(role) => role,
        None => kind.default_role(),
    }
}
