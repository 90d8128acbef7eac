//! Size values: SizeUnit, SizeKind (px, em, %, fr, auto, ...).

use std::fmt;
use std::str::FromStr;

use crate::property::error::PropertyError;
use crate::value::tokenizer::{split_dimension, tokenize, Token};

/// The unit of a [`SizeUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeKind {
    /// Let the layout decide. The numeric value is ignored.
    #[default]
    Auto,
    /// Pixels.
    Px,
    /// Font-size relative.
    Em,
    /// x-height relative.
    Ex,
    /// Percentage of the parent dimension.
    Percent,
    /// Points (1/72 inch).
    Pt,
    /// Picas (12 points).
    Pc,
    /// Inches.
    In,
    /// Millimeters.
    Mm,
    /// Centimeters.
    Cm,
    /// Grid fraction.
    Fr,
}

impl SizeKind {
    /// The textual suffix for this unit, empty for [`SizeKind::Auto`].
    pub fn suffix(self) -> &'static str {
        match self {
            SizeKind::Auto => "",
            SizeKind::Px => "px",
            SizeKind::Em => "em",
            SizeKind::Ex => "ex",
            SizeKind::Percent => "%",
            SizeKind::Pt => "pt",
            SizeKind::Pc => "pc",
            SizeKind::In => "in",
            SizeKind::Mm => "mm",
            SizeKind::Cm => "cm",
            SizeKind::Fr => "fr",
        }
    }

    /// Look up a unit by its suffix (lower-case).
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Some(match suffix {
            "px" => SizeKind::Px,
            "em" => SizeKind::Em,
            "ex" => SizeKind::Ex,
            "%" => SizeKind::Percent,
            "pt" => SizeKind::Pt,
            "pc" => SizeKind::Pc,
            "in" => SizeKind::In,
            "mm" => SizeKind::Mm,
            "cm" => SizeKind::Cm,
            "fr" => SizeKind::Fr,
            _ => return None,
        })
    }
}

/// A magnitude paired with a unit, e.g. `10px`, `50%`, `auto`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeUnit {
    pub kind: SizeKind,
    pub value: f64,
}

impl SizeUnit {
    /// Create a size with an explicit unit.
    pub fn new(value: f64, kind: SizeKind) -> Self {
        Self { kind, value }
    }

    /// The automatic sentinel.
    pub fn auto() -> Self {
        Self {
            kind: SizeKind::Auto,
            value: 0.0,
        }
    }

    /// Create a size in pixels.
    pub fn px(value: f64) -> Self {
        Self::new(value, SizeKind::Px)
    }

    /// Create a size in em.
    pub fn em(value: f64) -> Self {
        Self::new(value, SizeKind::Em)
    }

    /// Create a size as a percentage.
    pub fn percent(value: f64) -> Self {
        Self::new(value, SizeKind::Percent)
    }

    /// Create a size in grid fractions.
    pub fn fr(value: f64) -> Self {
        Self::new(value, SizeKind::Fr)
    }

    /// Returns `true` if this size is the automatic sentinel.
    pub fn is_auto(&self) -> bool {
        self.kind == SizeKind::Auto
    }

    /// Parse `"<number><unit>"`, `"auto"`, or a bare number (pixels).
    pub fn parse(text: &str) -> Result<Self, PropertyError> {
        Self::parse_with_default(text, SizeKind::Px)
    }

    /// Parse a size literal, reading bare numbers in `default_unit`.
    ///
    /// Constant references must be resolved beforehand; an `@name` reaching
    /// this function is reported as [`PropertyError::UnresolvedConstant`].
    pub fn parse_with_default(text: &str, default_unit: SizeKind) -> Result<Self, PropertyError> {
        let invalid = || PropertyError::IncompatibleType {
            tag: "size".into(),
            value: format!("{text:?}"),
        };
        let tokens = tokenize(text).ok_or_else(invalid)?;
        let [(token, slice)] = tokens.as_slice() else {
            return Err(invalid());
        };
        match token {
            Token::Auto => Ok(Self::auto()),
            Token::Number => {
                let value = slice.parse().map_err(|_| invalid())?;
                Ok(Self::from_number(value, default_unit))
            }
            Token::Dimension => {
                let (value, suffix) = split_dimension(slice).ok_or_else(invalid)?;
                let kind = SizeKind::from_suffix(suffix).ok_or_else(invalid)?;
                Ok(Self::new(value, kind))
            }
            Token::Constant => Err(PropertyError::UnresolvedConstant {
                name: slice.trim_start_matches('@').to_string(),
            }),
            Token::Comma => Err(invalid()),
        }
    }

    /// Interpret a bare numeric literal in `default_unit`.
    ///
    /// An `Auto` default unit falls back to pixels so the number is not lost.
    pub fn from_number(value: f64, default_unit: SizeKind) -> Self {
        match default_unit {
            SizeKind::Auto => Self::px(value),
            kind => Self::new(value, kind),
        }
    }

    /// CSS text for this size, using `text_for_auto` for the auto sentinel.
    pub fn css_string(&self, text_for_auto: &str) -> String {
        if self.is_auto() {
            text_for_auto.to_string()
        } else {
            self.to_string()
        }
    }
}

impl PartialEq for SizeUnit {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && (self.kind == SizeKind::Auto || self.value == other.value)
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_auto() {
            return write!(f, "auto");
        }
        if self.value.fract() == 0.0 && self.value.abs() < 1e15 {
            write!(f, "{}{}", self.value as i64, self.kind.suffix())
        } else {
            write!(f, "{}{}", self.value, self.kind.suffix())
        }
    }
}

impl FromStr for SizeUnit {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
