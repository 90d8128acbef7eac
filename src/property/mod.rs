//! Property system: tags, stores, value coercion.

pub mod coerce;
pub mod enums;
pub mod error;
pub mod store;
pub mod tag;
pub mod value;

pub use coerce::{coerce, coerce_size, CoerceContext};
pub use enums::{
    CheckboxMode, HorizontalAlign, ListWrap, Orientation, PropertyEnum, TextAlign, TextOverflow,
    VerticalAlign,
};
pub use error::PropertyError;
pub use store::{Properties, PropertyStore};
pub use value::{ErasedListenerInput, ListenerSet, PropertyValue, RawValue, Record};
