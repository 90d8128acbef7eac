//! Listener normalization: callback shapes → canonical listeners.
//!
//! Event attributes accept callbacks of several arities. Each family models its
//! accepted arities as a sum type ([`Callback`], [`CallbackWithOld`]) whose only
//! job is to lift a variant into the family's canonical closure:
//!
//! | Family | Canonical listener | Accepted shapes |
//! |---|---|---|
//! | [`Callback<V, E>`] | `Fn(&V, &E)` | `(V,E)`, `(E)`, `(V)`, `()` |
//! | [`CallbackWithOld<V, E>`] | `Fn(&V, &E, &E)` | `(V,E,E)`, `(V,E)`, `(E,E)`, `(E)`, `(V)`, `()` |
//!
//! [`adapt`] is the one routine shared by every event attribute. It is
//! all-or-nothing: a single unset element fails the whole sequence.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

/// Canonical two-argument listener: `(owner, event)`.
pub type Listener<V, E> = Arc<dyn Fn(&V, &E) + Send + Sync>;

/// Canonical three-argument listener: `(owner, new value, previous value)`.
pub type ListenerWithOld<V, E> = Arc<dyn Fn(&V, &E, &E) + Send + Sync>;

// ---------------------------------------------------------------------------
// CallbackShape
// ---------------------------------------------------------------------------

/// A sum type of accepted callback arities for one listener family.
pub trait CallbackShape: Send + 'static {
    /// The canonical listener every variant lifts into.
    type Listener: Clone + Send + Sync + 'static;

    /// Wrap this callback in the canonical listener shape, forwarding exactly
    /// the arguments the callback accepts.
    fn lift(self) -> Self::Listener;
}

// ---------------------------------------------------------------------------
// Callback
// ---------------------------------------------------------------------------

/// Accepted shapes for a `(owner, event)` listener.
pub enum Callback<V, E> {
    /// `(owner, event)`.
    Full(Listener<V, E>),
    /// `(event)`.
    Event(Arc<dyn Fn(&E) + Send + Sync>),
    /// `(owner)`.
    Owner(Arc<dyn Fn(&V) + Send + Sync>),
    /// `()`.
    Bare(Arc<dyn Fn() + Send + Sync>),
}

impl<V, E> Callback<V, E> {
    pub fn full(f: impl Fn(&V, &E) + Send + Sync + 'static) -> Self {
        Callback::Full(Arc::new(f))
    }

    pub fn event(f: impl Fn(&E) + Send + Sync + 'static) -> Self {
        Callback::Event(Arc::new(f))
    }

    pub fn owner(f: impl Fn(&V) + Send + Sync + 'static) -> Self {
        Callback::Owner(Arc::new(f))
    }

    pub fn bare(f: impl Fn() + Send + Sync + 'static) -> Self {
        Callback::Bare(Arc::new(f))
    }
}

impl<V: 'static, E: 'static> CallbackShape for Callback<V, E> {
    type Listener = Listener<V, E>;

    fn lift(self) -> Listener<V, E> {
        match self {
            Callback::Full(f) => f,
            Callback::Event(f) => Arc::new(move |_: &V, event: &E| f(event)),
            Callback::Owner(f) => Arc::new(move |owner: &V, _: &E| f(owner)),
            Callback::Bare(f) => Arc::new(move |_: &V, _: &E| f()),
        }
    }
}

impl<V, E> fmt::Debug for Callback<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Full(_) => write!(f, "Callback(owner, event)"),
            Callback::Event(_) => write!(f, "Callback(event)"),
            Callback::Owner(_) => write!(f, "Callback(owner)"),
            Callback::Bare(_) => write!(f, "Callback()"),
        }
    }
}

// ---------------------------------------------------------------------------
// CallbackWithOld
// ---------------------------------------------------------------------------

/// Accepted shapes for a `(owner, new, old)` listener.
pub enum CallbackWithOld<V, E> {
    /// `(owner, new, old)`.
    Full(ListenerWithOld<V, E>),
    /// `(owner, new)`.
    OwnerNew(Arc<dyn Fn(&V, &E) + Send + Sync>),
    /// `(new, old)`.
    NewOld(Arc<dyn Fn(&E, &E) + Send + Sync>),
    /// `(new)`.
    New(Arc<dyn Fn(&E) + Send + Sync>),
    /// `(owner)`.
    Owner(Arc<dyn Fn(&V) + Send + Sync>),
    /// `()`.
    Bare(Arc<dyn Fn() + Send + Sync>),
}

impl<V, E> CallbackWithOld<V, E> {
    pub fn full(f: impl Fn(&V, &E, &E) + Send + Sync + 'static) -> Self {
        CallbackWithOld::Full(Arc::new(f))
    }

    pub fn owner_new(f: impl Fn(&V, &E) + Send + Sync + 'static) -> Self {
        CallbackWithOld::OwnerNew(Arc::new(f))
    }

    pub fn new_old(f: impl Fn(&E, &E) + Send + Sync + 'static) -> Self {
        CallbackWithOld::NewOld(Arc::new(f))
    }

    pub fn new_value(f: impl Fn(&E) + Send + Sync + 'static) -> Self {
        CallbackWithOld::New(Arc::new(f))
    }

    pub fn owner(f: impl Fn(&V) + Send + Sync + 'static) -> Self {
        CallbackWithOld::Owner(Arc::new(f))
    }

    pub fn bare(f: impl Fn() + Send + Sync + 'static) -> Self {
        CallbackWithOld::Bare(Arc::new(f))
    }
}

impl<V: 'static, E: 'static> CallbackShape for CallbackWithOld<V, E> {
    type Listener = ListenerWithOld<V, E>;

    fn lift(self) -> ListenerWithOld<V, E> {
        match self {
            CallbackWithOld::Full(f) => f,
            CallbackWithOld::OwnerNew(f) => Arc::new(move |owner: &V, new: &E, _: &E| f(owner, new)),
            CallbackWithOld::NewOld(f) => Arc::new(move |_: &V, new: &E, old: &E| f(new, old)),
            CallbackWithOld::New(f) => Arc::new(move |_: &V, new: &E, _: &E| f(new)),
            CallbackWithOld::Owner(f) => Arc::new(move |owner: &V, _: &E, _: &E| f(owner)),
            CallbackWithOld::Bare(f) => Arc::new(move |_: &V, _: &E, _: &E| f()),
        }
    }
}

impl<V, E> fmt::Debug for CallbackWithOld<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self {
            CallbackWithOld::Full(_) => "owner, new, old",
            CallbackWithOld::OwnerNew(_) => "owner, new",
            CallbackWithOld::NewOld(_) => "new, old",
            CallbackWithOld::New(_) => "new",
            CallbackWithOld::Owner(_) => "owner",
            CallbackWithOld::Bare(_) => "",
        };
        write!(f, "CallbackWithOld({shape})")
    }
}

// ---------------------------------------------------------------------------
// ListenerInput
// ---------------------------------------------------------------------------

/// What a caller may assign to an event attribute.
pub enum ListenerInput<C> {
    /// No listeners; assigning it clears the attribute.
    None,
    /// One callback.
    Single(C),
    /// An ordered sequence, possibly of mixed shapes. `None` marks an unset slot.
    Sequence(Vec<Option<C>>),
}

impl<C> ListenerInput<C> {
    /// A single callback.
    pub fn single(callback: C) -> Self {
        ListenerInput::Single(callback)
    }

    /// A sequence of callbacks.
    pub fn sequence(callbacks: impl IntoIterator<Item = C>) -> Self {
        ListenerInput::Sequence(callbacks.into_iter().map(Some).collect())
    }
}

impl<C> fmt::Debug for ListenerInput<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListenerInput::None => write!(f, "ListenerInput::None"),
            ListenerInput::Single(_) => write!(f, "ListenerInput::Single"),
            ListenerInput::Sequence(items) => {
                write!(f, "ListenerInput::Sequence(len = {})", items.len())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// adapt
// ---------------------------------------------------------------------------

/// An element of a listener sequence was unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("listener at position {index} is unset")]
pub struct UnsetListener {
    pub index: usize,
}

/// Normalize a listener input into canonical listeners, preserving order.
///
/// `None` and an empty sequence yield an empty vector. Any unset element fails
/// the whole input and nothing is returned.
pub fn adapt<C: CallbackShape>(input: ListenerInput<C>) -> Result<Vec<C::Listener>, UnsetListener> {
    match input {
        ListenerInput::None => Ok(Vec::new()),
        ListenerInput::Single(callback) => Ok(vec![callback.lift()]),
        ListenerInput::Sequence(callbacks) => callbacks
            .into_iter()
            .enumerate()
            .map(|(index, callback)| {
                callback
                    .map(CallbackShape::lift)
                    .ok_or(UnsetListener { index })
            })
            .collect(),
    }
}

/// Invoke every listener in order with `(owner, event)`.
pub fn notify<V, E>(listeners: &[Listener<V, E>], owner: &V, event: &E) {
    trace!(count = listeners.len(), "dispatching listeners");
    for listener in listeners {
        listener(owner, event);
    }
}

/// Invoke every listener in order with `(owner, new, old)`.
pub fn notify_with_old<V, E>(listeners: &[ListenerWithOld<V, E>], owner: &V, new: &E, old: &E) {
    trace!(count = listeners.len(), "dispatching listeners with previous value");
    for listener in listeners {
        listener(owner, new, old);
    }
}
