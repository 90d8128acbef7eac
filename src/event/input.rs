//! Input event types decoded from the remote renderer.
//!
//! Defines [`KeyEvent`], [`MouseEvent`] and supporting types. Events arrive as
//! [`Record`]s of text fields; `from_record` decodes them. Flags are set only by
//! the literal `"1"`, and numeric fields that fail to parse read as zero.

use std::ops::{BitAnd, BitOr};

use crate::property::value::Record;

fn flag(record: &Record, field: &str) -> bool {
    record.get(field).is_some_and(|value| value == "1")
}

fn number(record: &Record, field: &str) -> f64 {
    record
        .get(field)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0.0)
}

fn text(record: &Record, field: &str) -> String {
    record.get(field).cloned().unwrap_or_default()
}

fn timestamp(record: &Record) -> u64 {
    record
        .get("timeStamp")
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| *value >= 0.0)
        .map(|value| value as u64)
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);
    pub const META: Modifiers = Modifiers(8);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Read the `shiftKey`, `ctrlKey`, `altKey` and `metaKey` flags.
    pub fn from_record(record: &Record) -> Self {
        [
            ("shiftKey", Modifiers::SHIFT),
            ("ctrlKey", Modifiers::CTRL),
            ("altKey", Modifiers::ALT),
            ("metaKey", Modifiers::META),
        ]
        .into_iter()
        .filter(|(field, _)| flag(record, field))
        .fold(Modifiers::NONE, |acc, (_, bit)| acc | bit)
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// Physical key code of the space bar.
pub const SPACE_CODE: &str = "Space";
/// Physical key code of the enter key.
pub const ENTER_CODE: &str = "Enter";

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyEvent {
    /// Milliseconds since the epoch, as reported by the renderer.
    pub timestamp: u64,
    /// The key value, e.g. `"a"`, `" "`, `"Enter"`.
    pub key: String,
    /// The physical key, e.g. `"KeyA"`, `"Space"`.
    pub code: String,
    /// `true` when the key is auto-repeating.
    pub repeat: bool,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event with no modifiers.
    pub fn new(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            ..Self::default()
        }
    }

    /// Set the modifiers (builder).
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Decode a key event record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            timestamp: timestamp(record),
            key: text(record, "key"),
            code: text(record, "code"),
            repeat: flag(record, "repeat"),
            modifiers: Modifiers::from_record(record),
        }
    }

    /// Whether this key activates a focused control (space or enter).
    pub fn is_activation(&self) -> bool {
        self.key == " " || self.key == ENTER_CODE
    }
}

// ---------------------------------------------------------------------------
// MouseButton / MouseEvent
// ---------------------------------------------------------------------------

/// Mouse button, numbered as the renderer reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Primary,
    Auxiliary,
    Secondary,
    Fourth,
    Fifth,
}

impl MouseButton {
    /// Bit of this button in [`MouseEvent::buttons`].
    pub fn mask(self) -> u8 {
        match self {
            MouseButton::Primary => 1,
            MouseButton::Secondary => 2,
            MouseButton::Auxiliary => 4,
            MouseButton::Fourth => 8,
            MouseButton::Fifth => 16,
        }
    }

    fn from_number(n: f64) -> Self {
        match n as i64 {
            1 => MouseButton::Auxiliary,
            2 => MouseButton::Secondary,
            3 => MouseButton::Fourth,
            4 => MouseButton::Fifth,
            _ => MouseButton::Primary,
        }
    }
}

/// A mouse event: button, buttons held, positions, and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseEvent {
    pub timestamp: u64,
    pub button: MouseButton,
    /// Bitmask of held buttons; see [`MouseButton::mask`].
    pub buttons: u8,
    /// Position relative to the view.
    pub x: f64,
    pub y: f64,
    /// Position relative to the viewport.
    pub client_x: f64,
    pub client_y: f64,
    /// Position relative to the screen.
    pub screen_x: f64,
    pub screen_y: f64,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// A primary-button press at `(x, y)`.
    pub fn primary(x: f64, y: f64) -> Self {
        Self {
            button: MouseButton::Primary,
            buttons: MouseButton::Primary.mask(),
            x,
            y,
            client_x: x,
            client_y: y,
            screen_x: x,
            screen_y: y,
            ..Self::default()
        }
    }

    /// Decode a mouse event record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            timestamp: timestamp(record),
            button: MouseButton::from_number(number(record, "button")),
            buttons: number(record, "buttons") as u8,
            x: number(record, "x"),
            y: number(record, "y"),
            client_x: number(record, "clientX"),
            client_y: number(record, "clientY"),
            screen_x: number(record, "screenX"),
            screen_y: number(record, "screenY"),
            modifiers: Modifiers::from_record(record),
        }
    }

    /// The synthetic click produced by activating a focused view from the keyboard.
    pub fn from_activation(key: &KeyEvent) -> Self {
        Self {
            timestamp: key.timestamp,
            modifiers: key.modifiers,
            ..Self::primary(0.0, 0.0)
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
