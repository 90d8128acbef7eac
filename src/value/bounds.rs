//! Four-sided box model values: Side, Bounds, BoundsProperty.
//!
//! [`Bounds`] is the resolved value (every side a [`SizeUnit`]). Its shorthand
//! grammar is comma separated: one value applies to all sides, four values are
//! top, right, bottom, left. [`BoundsProperty`] is the partial form where each
//! side may be unset, used when a box is assembled side by side.

use std::fmt;
use std::str::FromStr;

use crate::property::coerce::{coerce_size, CoerceContext};
use crate::property::error::PropertyError;
use crate::property::store::PropertyStore;
use crate::property::tag;
use crate::property::value::{PropertyValue, RawValue, Record};
use crate::value::size::SizeUnit;

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// One side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides in shorthand order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Canonical attribute name of this side.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => tag::TOP,
            Side::Right => tag::RIGHT,
            Side::Bottom => tag::BOTTOM,
            Side::Left => tag::LEFT,
        }
    }

    /// Resolve a tag (aliases allowed) to a side.
    pub fn from_tag(name: &str) -> Option<Side> {
        match tag::normalize(name).as_str() {
            tag::TOP => Some(Side::Top),
            tag::RIGHT => Some(Side::Right),
            tag::BOTTOM => Some(Side::Bottom),
            tag::LEFT => Some(Side::Left),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Resolved four-sided sizes, e.g. a margin or padding.
///
/// The default value has every side set to auto.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: SizeUnit,
    pub right: SizeUnit,
    pub bottom: SizeUnit,
    pub left: SizeUnit,
}

impl Bounds {
    /// Create bounds with explicit values for all four sides.
    pub fn new(top: SizeUnit, right: SizeUnit, bottom: SizeUnit, left: SizeUnit) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create bounds with the same value on all four sides.
    pub fn all(value: SizeUnit) -> Self {
        Self::new(value, value, value, value)
    }

    /// Bounds with every side auto.
    pub fn auto() -> Self {
        Self::all(SizeUnit::auto())
    }

    /// Set all four sides to `value`.
    pub fn set_all(&mut self, value: SizeUnit) {
        *self = Self::all(value);
    }

    /// The value of one side.
    pub fn side(&self, side: Side) -> SizeUnit {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Replace the value of one side.
    pub fn set_side(&mut self, side: Side, value: SizeUnit) {
        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
    }

    /// Parse a comma shorthand with a plain context (no constants, pixels).
    pub fn parse(text: &str) -> Result<Self, PropertyError> {
        Self::parse_with(text, &CoerceContext::plain())
    }

    /// Parse a comma shorthand.
    ///
    /// - 1 value: all sides
    /// - 2 values where the last is empty: the 1-value form with a trailing comma
    /// - 4 values: top, right, bottom, left
    /// - 5 values where the last is empty: the 4-value form with a trailing comma
    ///
    /// Constant references are resolved first. Any other count is
    /// [`PropertyError::InvalidShorthand`].
    pub fn parse_with(text: &str, ctx: &CoerceContext<'_>) -> Result<Self, PropertyError> {
        Self::parse_shorthand(text, ctx, |value| ctx.parse_size(value))
    }

    /// The shorthand grammar of [`Bounds::parse_with`], with `size` parsing
    /// each element.
    pub(crate) fn parse_shorthand(
        text: &str,
        ctx: &CoerceContext<'_>,
        mut size: impl FnMut(&str) -> Result<SizeUnit, PropertyError>,
    ) -> Result<Self, PropertyError> {
        let resolved = ctx.resolve(text)?;
        let values: Vec<&str> = resolved.split(',').map(str::trim).collect();
        match values.as_slice() {
            [single] | [single, ""] => Ok(Self::all(size(single)?)),
            [top, right, bottom, left] | [top, right, bottom, left, ""] => Ok(Self::new(
                size(top)?,
                size(right)?,
                size(bottom)?,
                size(left)?,
            )),
            _ => Err(PropertyError::InvalidShorthand {
                literal: text.to_string(),
            }),
        }
    }

    /// Parse into `self`, leaving it untouched on failure.
    pub fn parse_into(&mut self, text: &str, ctx: &CoerceContext<'_>) -> Result<(), PropertyError> {
        *self = Self::parse_with(text, ctx)?;
        Ok(())
    }

    /// Resolve bounds from a base attribute plus per-side override attributes.
    ///
    /// Each side independently takes its override if present, else the base
    /// value, else auto. `sides` are the override tags in top, right, bottom,
    /// left order.
    pub fn from_properties(store: &PropertyStore, base: &str, sides: [&str; 4]) -> Self {
        let base_value = store.get(base);
        let mut bounds = Self::auto();
        for (side, side_tag) in Side::ALL.into_iter().zip(sides) {
            let value = store
                .get(side_tag)
                .and_then(|v| size_for_side(&v, side))
                .or_else(|| base_value.as_ref().and_then(|v| size_for_side(v, side)))
                .unwrap_or_else(SizeUnit::auto);
            bounds.set_side(side, value);
        }
        bounds
    }

    /// Returns `true` if every side is auto.
    pub fn all_sides_auto(&self) -> bool {
        Side::ALL.iter().all(|&side| self.side(side).is_auto())
    }

    /// Returns `true` if every side has the same kind and, unless auto, the same value.
    pub fn all_sides_equal(&self) -> bool {
        self.right == self.top && self.bottom == self.top && self.left == self.top
    }

    /// CSS text: a single value when all sides are equal, else `"t r b l"`.
    pub fn css_string(&self, text_for_auto: &str) -> String {
        if self.all_sides_equal() {
            return self.top.css_string(text_for_auto);
        }
        Side::ALL
            .iter()
            .map(|&side| self.side(side).css_string(text_for_auto))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Read the size a stored value contributes to `side`.
fn size_for_side(value: &PropertyValue, side: Side) -> Option<SizeUnit> {
    match value {
        PropertyValue::Size(size) => Some(*size),
        PropertyValue::Bounds(bounds) => Some(bounds.side(side)),
        _ => None,
    }
}

impl fmt::Display for Bounds {
    /// Shorthand text that [`Bounds::parse`] reads back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.all_sides_equal() {
            write!(f, "{}", self.top)
        } else {
            write!(f, "{},{},{},{}", self.top, self.right, self.bottom, self.left)
        }
    }
}

impl FromStr for Bounds {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ---------------------------------------------------------------------------
// BoundsProperty
// ---------------------------------------------------------------------------

/// A box whose sides are set individually; unset sides resolve to auto.
///
/// Side tags accept every alias understood by [`tag::normalize`], so
/// `"margin-top"`, `"top-padding"` and `"TOP"` all address the top side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundsProperty {
    sides: [Option<SizeUnit>; 4],
}

impl BoundsProperty {
    /// Create an empty box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a box with every side set from `bounds`.
    pub fn from_bounds(bounds: Bounds) -> Self {
        let mut property = Self::new();
        for side in Side::ALL {
            property.sides[side.index()] = Some(bounds.side(side));
        }
        property
    }

    /// Build a box from a record keyed by side name.
    ///
    /// Keys that do not name a side are ignored. Any side value that fails to
    /// parse fails the whole record.
    pub fn from_record(record: &Record, ctx: &CoerceContext<'_>) -> Result<Self, PropertyError> {
        let mut property = Self::new();
        for (key, text) in record {
            if let Some(side) = Side::from_tag(key) {
                property.set_with(side.as_str(), RawValue::Text(text.clone()), ctx)?;
            }
        }
        Ok(property)
    }

    /// The value of a side, if set.
    pub fn get(&self, name: &str) -> Option<SizeUnit> {
        Side::from_tag(name).and_then(|side| self.sides[side.index()])
    }

    /// Set a side with a plain context.
    pub fn set(&mut self, name: &str, value: impl Into<RawValue>) -> Result<(), PropertyError> {
        self.set_with(name, value.into(), &CoerceContext::plain())
    }

    /// Set a side. [`RawValue::Null`] removes it.
    pub fn set_with(
        &mut self,
        name: &str,
        value: RawValue,
        ctx: &CoerceContext<'_>,
    ) -> Result<(), PropertyError> {
        let side = Side::from_tag(name)
            .ok_or_else(|| PropertyError::UnknownProperty(tag::normalize(name)))?;
        if value.is_null() {
            self.sides[side.index()] = None;
            return Ok(());
        }
        let size = coerce_size(side.as_str(), value, ctx)?;
        self.sides[side.index()] = Some(size);
        Ok(())
    }

    /// Unset a side.
    pub fn remove(&mut self, name: &str) {
        if let Some(side) = Side::from_tag(name) {
            self.sides[side.index()] = None;
        }
    }

    /// Unset every side.
    pub fn clear(&mut self) {
        self.sides = [None; 4];
    }

    /// Names of the sides that are set, sorted.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Side::ALL
            .iter()
            .filter(|side| self.sides[side.index()].is_some())
            .map(|side| side.as_str().to_string())
            .collect();
        tags.sort();
        tags
    }

    /// Resolve to [`Bounds`], unset sides becoming auto.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::auto();
        for side in Side::ALL {
            if let Some(size) = self.sides[side.index()] {
                bounds.set_side(side, size);
            }
        }
        bounds
    }
}

impl fmt::Display for BoundsProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{{")?;
        let mut first = true;
        for side in Side::ALL {
            if let Some(size) = self.sides[side.index()] {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{} = {}", side.as_str(), size)?;
                first = false;
            }
        }
        write!(f, "}}")
    }
}
