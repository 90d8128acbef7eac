//! Attribute names and alias normalization.
//!
//! [`normalize`] maps every per-side box alias to one of the four side names
//! and is what box-model values use internally. [`normalize_view_tag`] is the
//! component-level variant: it keeps `<box>-<side>` names intact (they are
//! separate override attributes on a component) and only folds the reversed
//! `<side>-<box>` spelling onto them.

// ---------------------------------------------------------------------------
// Attribute names
// ---------------------------------------------------------------------------

pub const TOP: &str = "top";
pub const RIGHT: &str = "right";
pub const BOTTOM: &str = "bottom";
pub const LEFT: &str = "left";

pub const MARGIN: &str = "margin";
pub const PADDING: &str = "padding";
pub const CELL_PADDING: &str = "cell-padding";

pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const MIN_WIDTH: &str = "min-width";
pub const MIN_HEIGHT: &str = "min-height";
pub const MAX_WIDTH: &str = "max-width";
pub const MAX_HEIGHT: &str = "max-height";

pub const TEXT: &str = "text";
pub const TEXT_ALIGN: &str = "text-align";
pub const TEXT_OVERFLOW: &str = "text-overflow";
pub const DISABLED: &str = "disabled";
pub const FOCUSABLE: &str = "focusable";

pub const ITEMS: &str = "items";
pub const CURRENT: &str = "current";
pub const CHECKED: &str = "checked";
pub const CHECKBOX: &str = "checkbox";
pub const ORIENTATION: &str = "orientation";
pub const LIST_WRAP: &str = "list-wrap";
pub const ITEM_WIDTH: &str = "item-width";
pub const ITEM_HEIGHT: &str = "item-height";
pub const HORIZONTAL_ALIGN: &str = "horizontal-align";
pub const VERTICAL_ALIGN: &str = "vertical-align";
pub const ITEM_HORIZONTAL_ALIGN: &str = "item-horizontal-align";
pub const ITEM_VERTICAL_ALIGN: &str = "item-vertical-align";
pub const CHECKBOX_HORIZONTAL_ALIGN: &str = "checkbox-horizontal-align";
pub const CHECKBOX_VERTICAL_ALIGN: &str = "checkbox-vertical-align";
pub const LIST_ITEM_STYLE: &str = "list-item-style";
pub const CURRENT_STYLE: &str = "current-style";
pub const CURRENT_INACTIVE_STYLE: &str = "current-inactive-style";

pub const CLICK_EVENT: &str = "click-event";
pub const KEY_DOWN_EVENT: &str = "key-down-event";
pub const KEY_UP_EVENT: &str = "key-up-event";
pub const TEXT_CHANGED_EVENT: &str = "text-changed";
pub const LIST_ITEM_CLICKED_EVENT: &str = "list-item-clicked";
pub const LIST_ITEM_SELECTED_EVENT: &str = "list-item-selected";
pub const LIST_ITEM_CHECKED_EVENT: &str = "list-item-checked";

/// Box-model attributes that own per-side overrides.
pub const BOXES: [&str; 3] = [MARGIN, PADDING, CELL_PADDING];

/// The four side names in shorthand order.
pub const SIDES: [&str; 4] = [TOP, RIGHT, BOTTOM, LEFT];

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Split `name` into `(box, side)` if it is a `<box>-<side>` or `<side>-<box>` alias.
fn split_side_alias(name: &str) -> Option<(&'static str, &'static str)> {
    for box_name in BOXES {
        for side in SIDES {
            if let Some(rest) = name.strip_prefix(box_name) {
                if rest.strip_prefix('-') == Some(side) {
                    return Some((box_name, side));
                }
            }
            if let Some(rest) = name.strip_prefix(side) {
                if rest.strip_prefix('-') == Some(box_name) {
                    return Some((box_name, side));
                }
            }
        }
    }
    None
}

/// Lower-case `name` and fold every per-side box alias onto its side name.
///
/// `"Margin-Top"`, `"top-padding"`, and `"cell-padding-top"` all become `"top"`.
/// Unknown names pass through lower-cased. Idempotent.
pub fn normalize(name: &str) -> String {
    let name = name.to_ascii_lowercase();
    match split_side_alias(&name) {
        Some((_, side)) => side.to_string(),
        None => name,
    }
}

/// Lower-case `name` and fold `<side>-<box>` aliases onto `<box>-<side>`.
///
/// `"top-margin"` becomes `"margin-top"`; `"margin-top"` is already canonical.
/// Idempotent.
pub fn normalize_view_tag(name: &str) -> String {
    let name = name.to_ascii_lowercase();
    match split_side_alias(&name) {
        Some((box_name, side)) => format!("{box_name}-{side}"),
        None => name,
    }
}

/// The four per-side override attributes of a box attribute, in shorthand order.
pub fn side_tags(box_name: &str) -> [String; 4] {
    SIDES.map(|side| format!("{box_name}-{side}"))
}

/// Returns `true` if `name` (already normalized) is a `<box>-<side>` override.
pub fn is_side_override(name: &str) -> bool {
    split_side_alias(name).is_some()
}
