//! Typed value coercion: raw input → canonical [`PropertyValue`].
//!
//! Every attribute belongs to one value family, and the family decides which
//! input shapes are accepted:
//!
//! | Family | Attributes | Accepts |
//! |---|---|---|
//! | Box | `margin`, `padding`, `cell-padding` | size, bounds, record, comma shorthand |
//! | Size | `width`, `height`, `min-*`, `max-*`, `item-*`, `<box>-<side>` | size text, number, [`SizeUnit`] |
//! | Enum | `checkbox`, `orientation`, alignments, ... | token (any case) or in-range index |
//! | Text | `text`, styles | text; `text` also numbers and flags |
//! | Bool | `disabled`, `focusable` | flag, `0`/`1`, `true`/`yes`/`on`, ... |
//! | Int | `current` | integer, `-1` for none |
//! | Indices | `checked` | index list, single index, `"1,3"` |
//! | Strings | `items` | list of texts, single text |
//! | Listener | registered event attributes | [`ErasedListenerInput`](crate::property::value::ErasedListenerInput) |
//!
//! [`coerce`] is the single place a rejected value is logged.

use std::fmt;

use tracing::{trace, warn};

use crate::event::kinds::ListenerKinds;
use crate::property::enums::{
    CheckboxMode, HorizontalAlign, ListWrap, Orientation, PropertyEnum, TextAlign, TextOverflow,
    VerticalAlign,
};
use crate::property::error::PropertyError;
use crate::property::tag;
use crate::property::value::{PropertyValue, RawValue};
use crate::value::bounds::{Bounds, BoundsProperty};
use crate::value::constants::{resolve_constants, ConstantResolver, NoConstants};
use crate::value::size::{SizeKind, SizeUnit};

/// Default limit on chained constant references.
pub const DEFAULT_MAX_CONSTANT_DEPTH: usize = 8;

// ---------------------------------------------------------------------------
// CoerceContext
// ---------------------------------------------------------------------------

/// Everything coercion needs from the surrounding session.
#[derive(Clone, Copy)]
pub struct CoerceContext<'a> {
    resolver: &'a dyn ConstantResolver,
    kinds: Option<&'a ListenerKinds>,
    default_unit: SizeKind,
    max_constant_depth: usize,
}

impl<'a> CoerceContext<'a> {
    /// No constants, no event attributes, bare numbers in pixels.
    pub fn plain() -> Self {
        Self {
            resolver: &NoConstants,
            kinds: None,
            default_unit: SizeKind::Px,
            max_constant_depth: DEFAULT_MAX_CONSTANT_DEPTH,
        }
    }

    pub fn with_resolver(mut self, resolver: &'a dyn ConstantResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_kinds(mut self, kinds: &'a ListenerKinds) -> Self {
        self.kinds = Some(kinds);
        self
    }

    pub fn with_default_unit(mut self, unit: SizeKind) -> Self {
        self.default_unit = unit;
        self
    }

    pub fn with_max_constant_depth(mut self, depth: usize) -> Self {
        self.max_constant_depth = depth;
        self
    }

    pub fn default_unit(&self) -> SizeKind {
        self.default_unit
    }

    /// Resolve `text` if it is an `@name` constant reference.
    pub fn resolve(&self, text: &str) -> Result<String, PropertyError> {
        resolve_constants(text, self.resolver, self.max_constant_depth)
    }

    /// Resolve constants, then parse a size literal in the default unit.
    pub fn parse_size(&self, text: &str) -> Result<SizeUnit, PropertyError> {
        let resolved = self.resolve(text)?;
        SizeUnit::parse_with_default(&resolved, self.default_unit)
    }
}

impl fmt::Debug for CoerceContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoerceContext")
            .field("kinds", &self.kinds.map(ListenerKinds::len))
            .field("default_unit", &self.default_unit)
            .field("max_constant_depth", &self.max_constant_depth)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Families
// ---------------------------------------------------------------------------

/// The value family of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Box,
    Size,
    /// Closed token set; the slice is in index order.
    Enum(&'static [&'static str]),
    Text,
    Bool,
    Int,
    Indices,
    Strings,
    Listener,
}

/// The family of an already-normalized attribute name.
pub fn family(name: &str, ctx: &CoerceContext<'_>) -> Option<Family> {
    if ctx.kinds.is_some_and(|kinds| kinds.contains(name)) {
        return Some(Family::Listener);
    }
    let family = match name {
        tag::MARGIN | tag::PADDING | tag::CELL_PADDING => Family::Box,
        tag::WIDTH
        | tag::HEIGHT
        | tag::MIN_WIDTH
        | tag::MIN_HEIGHT
        | tag::MAX_WIDTH
        | tag::MAX_HEIGHT
        | tag::ITEM_WIDTH
        | tag::ITEM_HEIGHT
        | tag::TOP
        | tag::RIGHT
        | tag::BOTTOM
        | tag::LEFT => Family::Size,
        tag::CHECKBOX => Family::Enum(CheckboxMode::TOKENS),
        tag::ORIENTATION => Family::Enum(Orientation::TOKENS),
        tag::LIST_WRAP => Family::Enum(ListWrap::TOKENS),
        tag::ITEM_HORIZONTAL_ALIGN => Family::Enum(HorizontalAlign::TOKENS),
        tag::ITEM_VERTICAL_ALIGN => Family::Enum(VerticalAlign::TOKENS),
        tag::CHECKBOX_HORIZONTAL_ALIGN => Family::Enum(&HorizontalAlign::TOKENS[..3]),
        tag::CHECKBOX_VERTICAL_ALIGN => Family::Enum(&VerticalAlign::TOKENS[..3]),
        tag::TEXT_OVERFLOW => Family::Enum(TextOverflow::TOKENS),
        tag::TEXT_ALIGN => Family::Enum(TextAlign::TOKENS),
        tag::TEXT | tag::LIST_ITEM_STYLE | tag::CURRENT_STYLE | tag::CURRENT_INACTIVE_STYLE => {
            Family::Text
        }
        tag::DISABLED | tag::FOCUSABLE => Family::Bool,
        tag::CURRENT => Family::Int,
        tag::CHECKED => Family::Indices,
        tag::ITEMS => Family::Strings,
        other if tag::is_side_override(other) => Family::Size,
        _ => return None,
    };
    Some(family)
}

// ---------------------------------------------------------------------------
// coerce
// ---------------------------------------------------------------------------

/// Coerce `value` for the attribute `name` (already normalized).
///
/// `Ok(None)` means the value resolves to absence and the attribute should be
/// removed. Rejections are logged here with the tag and offending value.
pub fn coerce(
    name: &str,
    value: RawValue,
    ctx: &CoerceContext<'_>,
) -> Result<Option<PropertyValue>, PropertyError> {
    if value.is_null() {
        return Ok(None);
    }
    let shown = format!("{value:?}");
    let result = match family(name, ctx) {
        Some(family) => coerce_family(name, family, value, ctx),
        None => Err(PropertyError::UnknownProperty(name.to_string())),
    };
    match &result {
        Ok(_) => trace!(tag = name, value = %shown, "coerced"),
        Err(err) => warn!(tag = name, value = %shown, error = %err, "property value rejected"),
    }
    result
}

fn coerce_family(
    name: &str,
    family: Family,
    value: RawValue,
    ctx: &CoerceContext<'_>,
) -> Result<Option<PropertyValue>, PropertyError> {
    let value = match family {
        Family::Box => PropertyValue::Bounds(coerce_box(name, value, ctx)?),
        Family::Size => PropertyValue::Size(coerce_size(name, value, ctx)?),
        Family::Enum(tokens) => PropertyValue::Enum(coerce_enum(name, tokens, value, ctx)?),
        Family::Text => PropertyValue::Text(coerce_text(name, value)?),
        Family::Bool => PropertyValue::Bool(coerce_bool(name, value, ctx)?),
        Family::Int => PropertyValue::Int(coerce_int(name, value, ctx)?),
        Family::Indices => PropertyValue::Indices(coerce_indices(name, value, ctx)?),
        Family::Strings => PropertyValue::Strings(coerce_strings(name, value)?),
        Family::Listener => return coerce_listeners(name, value, ctx),
    };
    Ok(Some(value))
}

/// Coerce a size value: `"<number><unit>"`, `"auto"`, `@constant`, a bare
/// number in the default unit, or a [`SizeUnit`].
pub fn coerce_size(
    name: &str,
    value: RawValue,
    ctx: &CoerceContext<'_>,
) -> Result<SizeUnit, PropertyError> {
    match value {
        RawValue::Size(size) => Ok(size),
        RawValue::Int(n) => Ok(SizeUnit::from_number(n as f64, ctx.default_unit)),
        RawValue::Float(n) => Ok(SizeUnit::from_number(n, ctx.default_unit)),
        RawValue::Text(text) => ctx.parse_size(&text).map_err(|err| match err {
            PropertyError::IncompatibleType { .. } => PropertyError::incompatible(name, text),
            other => other,
        }),
        other => Err(PropertyError::incompatible(name, other)),
    }
}

fn coerce_box(
    name: &str,
    value: RawValue,
    ctx: &CoerceContext<'_>,
) -> Result<Bounds, PropertyError> {
    match value {
        RawValue::Bounds(bounds) => Ok(bounds),
        RawValue::BoundsProperty(property) => Ok(property.bounds()),
        RawValue::Record(record) => Ok(BoundsProperty::from_record(&record, ctx)?.bounds()),
        RawValue::Text(text) => Bounds::parse_shorthand(&text, ctx, |element| {
            coerce_size(name, RawValue::Text(element.to_string()), ctx)
        }),
        other => coerce_size(name, other, ctx).map(Bounds::all),
    }
}

fn coerce_enum(
    name: &str,
    tokens: &[&str],
    value: RawValue,
    ctx: &CoerceContext<'_>,
) -> Result<usize, PropertyError> {
    match value {
        RawValue::Int(n) => usize::try_from(n)
            .ok()
            .filter(|&index| index < tokens.len())
            .ok_or_else(|| PropertyError::incompatible(name, n)),
        RawValue::Text(text) => {
            let resolved = ctx.resolve(&text)?;
            let wanted = resolved.trim();
            tokens
                .iter()
                .position(|token| token.eq_ignore_ascii_case(wanted))
                .or_else(|| {
                    wanted
                        .parse::<usize>()
                        .ok()
                        .filter(|&index| index < tokens.len())
                })
                .ok_or_else(|| PropertyError::incompatible(name, text))
        }
        other => Err(PropertyError::incompatible(name, other)),
    }
}

fn coerce_text(name: &str, value: RawValue) -> Result<String, PropertyError> {
    match value {
        RawValue::Text(text) => Ok(text),
        RawValue::Int(n) if name == tag::TEXT => Ok(n.to_string()),
        RawValue::Float(n) if name == tag::TEXT => Ok(n.to_string()),
        RawValue::Bool(flag) if name == tag::TEXT => Ok(flag.to_string()),
        other => Err(PropertyError::incompatible(name, other)),
    }
}

fn coerce_bool(name: &str, value: RawValue, ctx: &CoerceContext<'_>) -> Result<bool, PropertyError> {
    match value {
        RawValue::Bool(flag) => Ok(flag),
        RawValue::Int(0) => Ok(false),
        RawValue::Int(1) => Ok(true),
        RawValue::Text(text) => {
            let resolved = ctx.resolve(&text)?;
            match resolved.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(true),
                "false" | "no" | "off" | "0" => Ok(false),
                _ => Err(PropertyError::incompatible(name, text)),
            }
        }
        other => Err(PropertyError::incompatible(name, other)),
    }
}

fn coerce_int(name: &str, value: RawValue, ctx: &CoerceContext<'_>) -> Result<i64, PropertyError> {
    let n = match value {
        RawValue::Int(n) => n,
        RawValue::Float(n) if n.fract() == 0.0 => n as i64,
        RawValue::Text(text) => {
            let resolved = ctx.resolve(&text)?;
            resolved
                .trim()
                .parse()
                .map_err(|_| PropertyError::incompatible(name, &text))?
        }
        other => return Err(PropertyError::incompatible(name, other)),
    };
    if n < -1 {
        return Err(PropertyError::incompatible(name, n));
    }
    Ok(n)
}

fn coerce_indices(
    name: &str,
    value: RawValue,
    ctx: &CoerceContext<'_>,
) -> Result<Vec<usize>, PropertyError> {
    match value {
        RawValue::Indices(indices) => Ok(indices),
        RawValue::Int(n) => usize::try_from(n)
            .map(|index| vec![index])
            .map_err(|_| PropertyError::incompatible(name, n)),
        RawValue::Text(text) => {
            let resolved = ctx.resolve(&text)?;
            resolved
                .split(',')
                .map(str::trim)
                .filter(|element| !element.is_empty())
                .map(|element| {
                    element
                        .parse::<usize>()
                        .map_err(|_| PropertyError::incompatible(name, &text))
                })
                .collect()
        }
        other => Err(PropertyError::incompatible(name, other)),
    }
}

fn coerce_strings(name: &str, value: RawValue) -> Result<Vec<String>, PropertyError> {
    match value {
        RawValue::Strings(items) => Ok(items),
        RawValue::Text(text) => Ok(vec![text]),
        other => Err(PropertyError::incompatible(name, other)),
    }
}

fn coerce_listeners(
    name: &str,
    value: RawValue,
    ctx: &CoerceContext<'_>,
) -> Result<Option<PropertyValue>, PropertyError> {
    let kind = ctx
        .kinds
        .and_then(|kinds| kinds.get(name))
        .ok_or_else(|| PropertyError::UnknownProperty(name.to_string()))?;
    let input = match value {
        RawValue::Listeners(input) => input,
        other => return Err(PropertyError::incompatible(name, other)),
    };
    let set = kind
        .adapt(input)
        .map_err(|detail| PropertyError::IncompatibleType {
            tag: name.to_string(),
            value: detail,
        })?;
    Ok((!set.is_empty()).then_some(PropertyValue::Listeners(set)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::input::MouseEvent;
    use crate::event::listener::{Callback, ListenerInput};
    use crate::property::value::Record;
    use crate::value::constants::ConstantTable;
    use crate::view::View;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn px(v: f64) -> SizeUnit {
        SizeUnit::px(v)
    }

    fn plain(name: &str, value: impl Into<RawValue>) -> Result<Option<PropertyValue>, PropertyError> {
        coerce(name, value.into(), &CoerceContext::plain())
    }

    // ── Box family ───────────────────────────────────────────────────

    #[test]
    fn box_single_value_broadcasts() {
        assert_eq!(
            plain("padding", "10px").unwrap(),
            Some(PropertyValue::Bounds(Bounds::all(px(10.0))))
        );
        assert_eq!(
            plain("margin", 4).unwrap(),
            Some(PropertyValue::Bounds(Bounds::all(px(4.0))))
        );
    }

    #[test]
    fn box_comma_with_one_meaningful_element() {
        assert_eq!(
            plain("margin", "2em,").unwrap(),
            Some(PropertyValue::Bounds(Bounds::all(SizeUnit::em(2.0))))
        );
    }

    #[test]
    fn box_four_elements_positional() {
        assert_eq!(
            plain("cell-padding", "1px, 2px, 3px, 4px").unwrap(),
            Some(PropertyValue::Bounds(Bounds::new(px(1.0), px(2.0), px(3.0), px(4.0))))
        );
    }

    #[test]
    fn box_other_counts_name_the_literal() {
        let err = plain("padding", "1px,2px,3px").unwrap_err();
        assert_eq!(
            err,
            PropertyError::InvalidShorthand {
                literal: "1px,2px,3px".into()
            }
        );
    }

    #[test]
    fn box_empty_elements_are_not_skipped() {
        for literal in ["1px,,2px,3px,4px", "1px,2px,3px,,4px", "1px,2px,3px,4px,,,", "10px,,,,,"] {
            assert_eq!(
                plain("margin", literal).unwrap_err(),
                PropertyError::InvalidShorthand {
                    literal: literal.into()
                },
                "{literal}"
            );
            assert!(Bounds::parse(literal).is_err(), "{literal}");
        }
        assert_eq!(
            plain("margin", ",,,10px").unwrap_err(),
            PropertyError::incompatible("margin", "")
        );
    }

    #[test]
    fn box_agrees_with_bounds_parse() {
        for literal in ["3px", "3px,", "1px,2px,3px,4px", "1px, 2px, 3px, 4px,"] {
            assert_eq!(
                plain("padding", literal).unwrap(),
                Some(PropertyValue::Bounds(Bounds::parse(literal).unwrap())),
                "{literal}"
            );
        }
    }

    #[test]
    fn box_bad_side_names_the_attribute() {
        assert_eq!(
            plain("margin", "1px,wide,3px,4px").unwrap_err(),
            PropertyError::incompatible("margin", "wide")
        );
    }

    #[test]
    fn box_record_and_prebuilt() {
        let record: Record = [("left".to_string(), "3px".to_string())].into_iter().collect();
        let bounds = plain("margin", record).unwrap().and_then(|v| v.as_bounds()).unwrap();
        assert_eq!(bounds.left, px(3.0));
        assert!(bounds.top.is_auto());

        let mut property = BoundsProperty::new();
        property.set("top", "1px").unwrap();
        let bounds = plain("margin", property).unwrap().and_then(|v| v.as_bounds()).unwrap();
        assert_eq!(bounds.top, px(1.0));
    }

    #[test]
    fn box_constant_expands_to_shorthand() {
        let constants = ConstantTable::new().with("frame", "1px,2px,1px,2px");
        let ctx = CoerceContext::plain().with_resolver(&constants);
        let value = coerce("padding", "@frame".into(), &ctx).unwrap();
        assert_eq!(
            value,
            Some(PropertyValue::Bounds(Bounds::new(px(1.0), px(2.0), px(1.0), px(2.0))))
        );
    }

    // ── Size family ──────────────────────────────────────────────────

    #[test]
    fn size_forms() {
        assert_eq!(plain("width", "50%").unwrap(), Some(PropertyValue::Size(SizeUnit::percent(50.0))));
        assert_eq!(plain("height", 1.5).unwrap(), Some(PropertyValue::Size(px(1.5))));
        assert_eq!(plain("padding-left", "auto").unwrap(), Some(PropertyValue::Size(SizeUnit::auto())));
        assert_eq!(plain("item-width", SizeUnit::em(2.0)).unwrap(), Some(PropertyValue::Size(SizeUnit::em(2.0))));
    }

    #[test]
    fn size_default_unit_from_context() {
        let ctx = CoerceContext::plain().with_default_unit(SizeKind::Em);
        assert_eq!(coerce_size("width", RawValue::Int(3), &ctx).unwrap(), SizeUnit::em(3.0));
    }

    #[test]
    fn size_rejects_garbage_with_tag() {
        let err = plain("width", "wide").unwrap_err();
        assert_eq!(err, PropertyError::incompatible("width", "wide"));
        assert!(plain("width", true).is_err());
    }

    // ── Enum family ──────────────────────────────────────────────────

    #[test]
    fn enum_tokens_case_insensitive() {
        assert_eq!(plain("checkbox", "Multiple").unwrap(), Some(PropertyValue::Enum(2)));
        assert_eq!(plain("orientation", "BOTTOM-UP").unwrap(), Some(PropertyValue::Enum(2)));
        assert_eq!(plain("list-wrap", "reverse").unwrap(), Some(PropertyValue::Enum(2)));
        assert_eq!(plain("text-overflow", "ellipsis").unwrap(), Some(PropertyValue::Enum(1)));
    }

    #[test]
    fn enum_in_range_integer() {
        assert_eq!(plain("text-align", 3).unwrap(), Some(PropertyValue::Enum(3)));
        assert!(plain("text-align", 4).is_err());
        assert!(plain("text-align", -1).is_err());
        assert_eq!(plain("checkbox", "1").unwrap(), Some(PropertyValue::Enum(1)));
    }

    #[test]
    fn checkbox_alignment_excludes_stretch() {
        assert_eq!(plain("item-horizontal-align", "stretch").unwrap(), Some(PropertyValue::Enum(3)));
        assert!(plain("checkbox-horizontal-align", "stretch").is_err());
        assert_eq!(plain("checkbox-vertical-align", "center").unwrap(), Some(PropertyValue::Enum(2)));
    }

    // ── Scalar families ──────────────────────────────────────────────

    #[test]
    fn text_accepts_numbers_and_flags() {
        assert_eq!(plain("text", 42).unwrap(), Some(PropertyValue::Text("42".into())));
        assert_eq!(plain("text", 2.5).unwrap(), Some(PropertyValue::Text("2.5".into())));
        assert_eq!(plain("text", false).unwrap(), Some(PropertyValue::Text("false".into())));
        assert!(plain("current-style", 1).is_err());
    }

    #[test]
    fn bool_tokens() {
        for (input, expected) in [("yes", true), ("OFF", false), ("1", true), ("false", false)] {
            assert_eq!(plain("disabled", input).unwrap(), Some(PropertyValue::Bool(expected)));
        }
        assert_eq!(plain("focusable", 0).unwrap(), Some(PropertyValue::Bool(false)));
        assert!(plain("focusable", 2).is_err());
        assert!(plain("focusable", "maybe").is_err());
    }

    #[test]
    fn current_accepts_minus_one() {
        assert_eq!(plain("current", -1).unwrap(), Some(PropertyValue::Int(-1)));
        assert_eq!(plain("current", " 4 ").unwrap(), Some(PropertyValue::Int(4)));
        assert!(plain("current", -2).is_err());
    }

    #[test]
    fn checked_forms() {
        assert_eq!(plain("checked", vec![1usize, 3]).unwrap(), Some(PropertyValue::Indices(vec![1, 3])));
        assert_eq!(plain("checked", 2).unwrap(), Some(PropertyValue::Indices(vec![2])));
        assert_eq!(plain("checked", "0, 5").unwrap(), Some(PropertyValue::Indices(vec![0, 5])));
        assert_eq!(plain("checked", "").unwrap(), Some(PropertyValue::Indices(vec![])));
        assert!(plain("checked", "a,b").is_err());
    }

    #[test]
    fn items_forms() {
        assert_eq!(
            plain("items", vec!["a", "b"]).unwrap(),
            Some(PropertyValue::Strings(vec!["a".into(), "b".into()]))
        );
        assert_eq!(plain("items", "solo").unwrap(), Some(PropertyValue::Strings(vec!["solo".into()])));
    }

    // ── Null / unknown ───────────────────────────────────────────────

    #[test]
    fn null_removes() {
        assert_eq!(plain("width", RawValue::Null).unwrap(), None);
        assert_eq!(plain("anything", RawValue::Null).unwrap(), None);
    }

    #[test]
    #[traced_test]
    fn unknown_tag_is_logged() {
        let err = plain("colour", "red").unwrap_err();
        assert_eq!(err, PropertyError::UnknownProperty("colour".into()));
        assert!(logs_contain("property value rejected"));
        assert!(logs_contain("colour"));
    }

    // ── Listener family ──────────────────────────────────────────────

    #[test]
    fn listeners_through_registry() {
        let kinds = ListenerKinds::with_defaults();
        let ctx = CoerceContext::plain().with_kinds(&kinds);
        let input = ListenerInput::single(Callback::<View, MouseEvent>::bare(|| {}));
        let value = coerce("click-event", input.into(), &ctx).unwrap();
        assert!(matches!(value, Some(PropertyValue::Listeners(ref set)) if set.len() == 1));

        let empty: ListenerInput<Callback<View, MouseEvent>> = ListenerInput::None;
        assert_eq!(coerce("click-event", empty.into(), &ctx).unwrap(), None);
    }

    #[test]
    fn listeners_of_wrong_shape_rejected() {
        let kinds = ListenerKinds::with_defaults();
        let ctx = CoerceContext::plain().with_kinds(&kinds);
        let input = ListenerInput::single(Callback::<View, usize>::bare(|| {}));
        let err = coerce("click-event", input.into(), &ctx).unwrap_err();
        assert!(matches!(err, PropertyError::IncompatibleType { ref tag, .. } if tag == "click-event"));

        assert!(coerce("click-event", "handler".into(), &ctx).is_err());
    }

    #[test]
    fn listeners_unknown_without_registry() {
        let input = ListenerInput::single(Callback::<View, MouseEvent>::bare(|| {}));
        let err = plain("click-event", input).unwrap_err();
        assert_eq!(err, PropertyError::UnknownProperty("click-event".into()));
    }
}
