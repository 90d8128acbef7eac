//! Closed token sets for enum-valued attributes.
//!
//! An enum attribute is stored as [`PropertyValue::Enum`](crate::property::value::PropertyValue::Enum),
//! the index of its token. The typed enums here give that index a name.

/// An enum whose variants map one-to-one onto a closed token list.
pub trait PropertyEnum: Copy + Sized + 'static {
    /// Tokens in index order.
    const TOKENS: &'static [&'static str];

    /// The variant at `index`.
    fn from_index(index: usize) -> Option<Self>;

    /// Index of this variant in [`PropertyEnum::TOKENS`].
    fn index(self) -> usize;

    /// The token of this variant.
    fn token(self) -> &'static str {
        Self::TOKENS[self.index()]
    }
}

macro_rules! property_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant in token order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl PropertyEnum for $name {
            const TOKENS: &'static [&'static str] = &[$($token),+];

            fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            fn index(self) -> usize {
                self as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

property_enum! {
    /// How many list items may be checked at once.
    pub enum CheckboxMode {
        #[default]
        None => "none",
        Single => "single",
        Multiple => "multiple",
    }
}

property_enum! {
    /// Direction in which list items are laid out.
    pub enum Orientation {
        #[default]
        TopDown => "up-down",
        StartToEnd => "start-to-end",
        BottomUp => "bottom-up",
        EndToStart => "end-to-start",
    }
}

property_enum! {
    /// Whether list items wrap onto further lines or columns.
    pub enum ListWrap {
        #[default]
        Off => "off",
        On => "on",
        Reverse => "reverse",
    }
}

property_enum! {
    /// Horizontal alignment. The checkbox variant of this attribute stops at `Center`.
    pub enum HorizontalAlign {
        #[default]
        Left => "left",
        Right => "right",
        Center => "center",
        Stretch => "stretch",
    }
}

property_enum! {
    /// Vertical alignment. The checkbox variant of this attribute stops at `Center`.
    pub enum VerticalAlign {
        #[default]
        Top => "top",
        Bottom => "bottom",
        Center => "center",
        Stretch => "stretch",
    }
}

property_enum! {
    pub enum TextOverflow {
        #[default]
        Clip => "clip",
        Ellipsis => "ellipsis",
    }
}

property_enum! {
    pub enum TextAlign {
        #[default]
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
    }
}
