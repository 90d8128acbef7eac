//! Input and stored value types.
//!
//! [`RawValue`] is the closed set of input shapes a caller may hand to
//! `set`. [`PropertyValue`] is the canonical form a store holds after
//! coercion; nothing else is ever stored.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::event::listener::{CallbackShape, ListenerInput};
use crate::value::bounds::{Bounds, BoundsProperty};
use crate::value::size::SizeUnit;

/// A structured record of textual fields, as decoded from a remote object.
pub type Record = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// RawValue
// ---------------------------------------------------------------------------

/// A value as supplied by a caller, before coercion.
pub enum RawValue {
    /// No value; setting it removes the attribute.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Size(SizeUnit),
    Bounds(Bounds),
    BoundsProperty(BoundsProperty),
    Record(Record),
    Indices(Vec<usize>),
    Strings(Vec<String>),
    Listeners(ErasedListenerInput),
}

impl RawValue {
    /// Returns `true` for [`RawValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Name of the input shape, for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Int(_) => "int",
            RawValue::Float(_) => "float",
            RawValue::Text(_) => "text",
            RawValue::Size(_) => "size",
            RawValue::Bounds(_) => "bounds",
            RawValue::BoundsProperty(_) => "bounds property",
            RawValue::Record(_) => "record",
            RawValue::Indices(_) => "indices",
            RawValue::Strings(_) => "strings",
            RawValue::Listeners(_) => "listeners",
        }
    }
}

impl fmt::Debug for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => write!(f, "Null"),
            RawValue::Bool(v) => write!(f, "Bool({v})"),
            RawValue::Int(v) => write!(f, "Int({v})"),
            RawValue::Float(v) => write!(f, "Float({v})"),
            RawValue::Text(v) => write!(f, "Text({v:?})"),
            RawValue::Size(v) => write!(f, "Size({v})"),
            RawValue::Bounds(v) => write!(f, "Bounds({v})"),
            RawValue::BoundsProperty(v) => write!(f, "BoundsProperty({v})"),
            RawValue::Record(v) => write!(f, "Record({v:?})"),
            RawValue::Indices(v) => write!(f, "Indices({v:?})"),
            RawValue::Strings(v) => write!(f, "Strings({v:?})"),
            RawValue::Listeners(v) => write!(f, "Listeners({})", v.type_name),
        }
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Text(v)
    }
}

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        RawValue::Bool(v)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Int(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        RawValue::Int(i64::from(v))
    }
}

impl From<usize> for RawValue {
    fn from(v: usize) -> Self {
        RawValue::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Float(v)
    }
}

impl From<SizeUnit> for RawValue {
    fn from(v: SizeUnit) -> Self {
        RawValue::Size(v)
    }
}

impl From<Bounds> for RawValue {
    fn from(v: Bounds) -> Self {
        RawValue::Bounds(v)
    }
}

impl From<BoundsProperty> for RawValue {
    fn from(v: BoundsProperty) -> Self {
        RawValue::BoundsProperty(v)
    }
}

impl From<Record> for RawValue {
    fn from(v: Record) -> Self {
        RawValue::Record(v)
    }
}

impl From<Vec<usize>> for RawValue {
    fn from(v: Vec<usize>) -> Self {
        RawValue::Indices(v)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(v: Vec<String>) -> Self {
        RawValue::Strings(v)
    }
}

impl From<Vec<&str>> for RawValue {
    fn from(v: Vec<&str>) -> Self {
        RawValue::Strings(v.into_iter().map(str::to_string).collect())
    }
}

impl<C: CallbackShape> From<ListenerInput<C>> for RawValue {
    fn from(input: ListenerInput<C>) -> Self {
        RawValue::Listeners(ErasedListenerInput::new(input))
    }
}

// ---------------------------------------------------------------------------
// ErasedListenerInput
// ---------------------------------------------------------------------------

/// A [`ListenerInput`] whose callback types have been erased so it can travel
/// through the string-keyed `set` path.
///
/// The attribute's registered listener kind recovers the concrete type; a
/// payload of any other type is rejected as incompatible.
pub struct ErasedListenerInput {
    payload: Box<dyn Any + Send>,
    type_name: &'static str,
}

impl ErasedListenerInput {
    /// Erase a typed listener input.
    pub fn new<C: CallbackShape>(input: ListenerInput<C>) -> Self {
        Self {
            payload: Box::new(input),
            type_name: std::any::type_name::<C>(),
        }
    }

    /// Name of the erased callback type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Recover the typed input, or give the erased value back on mismatch.
    pub fn downcast<C: CallbackShape>(self) -> Result<ListenerInput<C>, Self> {
        let type_name = self.type_name;
        self.payload
            .downcast::<ListenerInput<C>>()
            .map(|input| *input)
            .map_err(|payload| Self { payload, type_name })
    }
}

// ---------------------------------------------------------------------------
// ListenerSet
// ---------------------------------------------------------------------------

/// An adapted, non-empty listener sequence stored under an event attribute.
///
/// The concrete element type is fixed by the attribute's listener kind and
/// recovered with [`ListenerSet::listeners`].
#[derive(Clone)]
pub struct ListenerSet {
    listeners: Arc<dyn Any + Send + Sync>,
    len: usize,
}

impl ListenerSet {
    /// Wrap an adapted listener sequence.
    pub fn new<L: Send + Sync + 'static>(listeners: Vec<L>) -> Self {
        let len = listeners.len();
        Self {
            listeners: Arc::new(listeners),
            len,
        }
    }

    /// The listeners, if they are of type `L`.
    pub fn listeners<L: Clone + 'static>(&self) -> Option<Vec<L>> {
        self.listeners.downcast_ref::<Vec<L>>().cloned()
    }

    /// Number of listeners.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet").field("len", &self.len).finish()
    }
}

impl PartialEq for ListenerSet {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.listeners, &other.listeners)
    }
}

// ---------------------------------------------------------------------------
// PropertyValue
// ---------------------------------------------------------------------------

/// A canonical, validated attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Size(SizeUnit),
    Bounds(Bounds),
    /// Index into the attribute's closed token set.
    Enum(usize),
    Int(i64),
    Bool(bool),
    Text(String),
    Indices(Vec<usize>),
    Strings(Vec<String>),
    Listeners(ListenerSet),
}

impl PropertyValue {
    /// The size, if this is a [`PropertyValue::Size`].
    pub fn as_size(&self) -> Option<SizeUnit> {
        match self {
            PropertyValue::Size(v) => Some(*v),
            _ => None,
        }
    }

    /// The bounds, if this is a [`PropertyValue::Bounds`].
    pub fn as_bounds(&self) -> Option<Bounds> {
        match self {
            PropertyValue::Bounds(v) => Some(*v),
            _ => None,
        }
    }

    /// The enum index, if this is a [`PropertyValue::Enum`].
    pub fn as_enum(&self) -> Option<usize> {
        match self {
            PropertyValue::Enum(v) => Some(*v),
            _ => None,
        }
    }

    /// The text, if this is a [`PropertyValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(v) => Some(v),
            _ => None,
        }
    }

    /// The flag, if this is a [`PropertyValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}
