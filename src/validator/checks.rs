use crate::config::CheckConfig;
use crate::contrast::{self, Palette};
use crate::issue::{Issue, IssueKind};
use crate::level::ComplianceLevel;
use crate::taxonomy::{ElementKind, LIVE_TOKENS, Property, ValueKind};
use crate::tree::{Element, ElementId, WalkEntry};

/// Hierarchy depth beyond which nesting is flagged.
const MAX_NESTING_DEPTH: usize = 10;

/// Backgrounds treated as pure color coding for the use-of-color check.
const SATURATED_BACKGROUNDS: &[&str] = &[
    "#ff0000", "#f00", "#00ff00", "#0f0", "#ffff00", "#ff0", "#0000ff", "#00f",
];

pub(super) struct CheckContext<'a> {
    pub level: ComplianceLevel,
    pub palette: &'a Palette,
    pub tab_order: Option<&'a [ElementId]>,
    pub checks: &'a CheckConfig,
}

/// Run every check against one element, appending issues in a fixed
/// order so output is reproducible.
pub(super) fn run_all(
    element: &Element,
    entry: &WalkEntry,
    ctx: &CheckContext<'_>,
    issues: &mut Vec<Issue>,
) {
    check_unknown_kind(element, entry, issues);
    check_required_properties(element, entry, issues);
    check_unsupported_properties(element, entry, issues);
    check_property_values(element, entry, issues);
    check_accessible_name(element, entry, issues);
    if ctx.checks.contrast {
        check_contrast(element, entry, ctx, issues);
    }
    if ctx.checks.focus_order {
        check_tab_order(element, entry, ctx, issues);
    }
    check_live_region(element, entry, issues);
    if ctx.checks.font_size {
        check_font_size(element, entry, issues);
    }
    if ctx.checks.color_only {
        check_color_only(element, entry, issues);
    }
    if ctx.checks.nesting {
        check_nesting(entry, issues);
    }
}

/// Widgets this crate cannot classify still get audited, but the caller
/// is told the role defaulted to `none`.
fn check_unknown_kind(element: &Element, entry: &WalkEntry, issues: &mut Vec<Issue>) {
    if element.declared_role().is_none()
        && let ElementKind::Other(name) = element.kind()
    {
        issues.push(Issue::new(
            IssueKind::UnknownElementKind { kind: name.clone() },
            entry.id,
            &entry.path,
        ));
    }
}

fn check_required_properties(element: &Element, entry: &WalkEntry, issues: &mut Vec<Issue>) {
    let role = element.resolved_role();
    for &property in role.rule_set().required {
        if element.property(property).is_none() {
            issues.push(Issue::new(
                IssueKind::MissingRequiredProperty { role, property },
                entry.id,
                &entry.path,
            ));
        }
    }
}

fn check_unsupported_properties(element: &Element, entry: &WalkEntry, issues: &mut Vec<Issue>) {
    let role = element.resolved_role();
    let rules = role.rule_set();
    for &property in element.properties().keys() {
        if !rules.supports(property) {
            issues.push(Issue::new(
                IssueKind::UnsupportedProperty { role, property },
                entry.id,
                &entry.path,
            ));
        }
    }
}

/// Declared values must match the kind the taxonomy expects; token
/// properties must also draw from their closed vocabulary. `aria-live`
/// is excluded here because the live-region check owns it.
fn check_property_values(element: &Element, entry: &WalkEntry, issues: &mut Vec<Issue>) {
    for (&property, value) in element.properties() {
        if property == Property::Live {
            continue;
        }
        let valid = match property.value_kind() {
            ValueKind::Token => property.token_values().is_some_and(|vocabulary| {
                value
                    .as_str()
                    .is_some_and(|token| vocabulary.contains(&token))
            }),
            kind => value.matches_kind(kind),
        };
        if !valid {
            issues.push(Issue::new(
                IssueKind::InvalidPropertyValue { property },
                entry.id,
                &entry.path,
            ));
        }
    }
}

/// Interactive elements must expose an accessible name. Visible text is
/// not itself a name, but its presence makes the issue auto-fixable.
fn check_accessible_name(element: &Element, entry: &WalkEntry, issues: &mut Vec<Issue>) {
    if !element.is_interactive() || element.accessible_name().is_some() {
        return;
    }
    let has_text_fallback = element.text().is_some_and(|text| !text.trim().is_empty());
    issues.push(
        Issue::new(IssueKind::MissingAccessibleName, entry.id, &entry.path)
            .with_auto_fixable(has_text_fallback),
    );
}

fn check_contrast(
    element: &Element,
    entry: &WalkEntry,
    ctx: &CheckContext<'_>,
    issues: &mut Vec<Issue>,
) {
    let (Some(fg_value), Some(bg_value)) = (element.foreground(), element.background()) else {
        return;
    };
    let Some(required) = contrast::required_ratio(
        ctx.level,
        contrast::is_large_text(element.font_size(), element.is_bold()),
    ) else {
        return;
    };

    let mut resolve = |value: &str| match contrast::resolve_color(ctx.palette, value) {
        Ok(rgb) => Some(rgb),
        Err(_) => {
            issues.push(Issue::new(
                IssueKind::UnparseableColor {
                    value: value.to_string(),
                },
                entry.id,
                &entry.path,
            ));
            None
        }
    };

    let fg = resolve(fg_value);
    let bg = resolve(bg_value);
    let (Some(fg), Some(bg)) = (fg, bg) else {
        return;
    };

    let ratio = contrast::contrast_ratio(fg, bg);
    if ratio < required {
        let criterion = match ctx.level {
            ComplianceLevel::AAA => "1.4.6",
            _ => "1.4.3",
        };
        issues.push(
            Issue::new(
                IssueKind::InsufficientContrast { ratio, required },
                entry.id,
                &entry.path,
            )
            .with_wcag(criterion),
        );
    }
}

/// Keyboard reachability, against the externally supplied tab order.
/// Skipped for elements a keyboard user cannot reach by design
/// (disabled or hidden, directly or through an ancestor).
fn check_tab_order(
    element: &Element,
    entry: &WalkEntry,
    ctx: &CheckContext<'_>,
    issues: &mut Vec<Issue>,
) {
    let Some(tab_order) = ctx.tab_order else {
        return;
    };
    if element.is_interactive()
        && !entry.disabled
        && !entry.hidden
        && !tab_order.contains(&entry.id)
    {
        issues.push(Issue::new(IssueKind::NotInTabOrder, entry.id, &entry.path));
    }
}

/// A declared `aria-live` must carry a recognized politeness token; live
/// region roles that omit it entirely are flagged the same way.
fn check_live_region(element: &Element, entry: &WalkEntry, issues: &mut Vec<Issue>) {
    let required = element
        .resolved_role()
        .rule_set()
        .required
        .contains(&Property::Live);

    match element.property(Property::Live) {
        Some(value) => {
            let valid = value
                .as_str()
                .is_some_and(|token| LIVE_TOKENS.contains(&token));
            if !valid {
                issues.push(Issue::new(
                    IssueKind::InvalidLiveRegion {
                        declared: value.as_str().map(String::from),
                    },
                    entry.id,
                    &entry.path,
                ));
            }
        }
        None if required => {
            issues.push(Issue::new(
                IssueKind::InvalidLiveRegion { declared: None },
                entry.id,
                &entry.path,
            ));
        }
        None => {}
    }
}

fn check_font_size(element: &Element, entry: &WalkEntry, issues: &mut Vec<Issue>) {
    if let Some(size_pt) = element.font_size()
        && size_pt < contrast::MIN_FONT_PT
    {
        issues.push(Issue::new(
            IssueKind::FontTooSmall { size_pt },
            entry.id,
            &entry.path,
        ));
    }
}

/// Buttons and labels whose only signal is a saturated background color.
fn check_color_only(element: &Element, entry: &WalkEntry, issues: &mut Vec<Issue>) {
    if !matches!(element.kind(), ElementKind::Button | ElementKind::Label) {
        return;
    }
    let Some(background) = element.background() else {
        return;
    };
    if !SATURATED_BACKGROUNDS.contains(&background.to_lowercase().as_str()) {
        return;
    }
    let meaningful_text = element.text().is_some_and(|text| text.trim().len() >= 2);
    if !meaningful_text {
        issues.push(Issue::new(
            IssueKind::ColorOnlyInformation,
            entry.id,
            &entry.path,
        ));
    }
}

fn check_nesting(entry: &WalkEntry, issues: &mut Vec<Issue>) {
    if entry.depth > MAX_NESTING_DEPTH {
        issues.push(Issue::new(
            IssueKind::ExcessiveNesting { depth: entry.depth },
            entry.id,
            &entry.path,
        ));
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
