//! Listener kinds registry.
//!
//! [`ListenerKinds`] maps an event attribute name to the callback family it
//! accepts. `with_defaults()` installs the event attributes of the built-in
//! components. A host may register further attributes for its own components.

use std::collections::HashMap;
use std::fmt;

use super::input::{KeyEvent, MouseEvent};
use super::listener::{adapt, Callback, CallbackShape, CallbackWithOld};
use crate::property::tag;
use crate::property::value::{ErasedListenerInput, ListenerSet};
use crate::view::{ListView, View};

// ---------------------------------------------------------------------------
// ListenerKind
// ---------------------------------------------------------------------------

type AdaptFn = fn(ErasedListenerInput) -> Result<ListenerSet, String>;

/// The callback family accepted by one event attribute.
#[derive(Clone, Copy)]
pub struct ListenerKind {
    adapt: AdaptFn,
    callback: &'static str,
}

impl ListenerKind {
    /// The kind accepting `ListenerInput<C>`.
    pub fn of<C: CallbackShape>() -> Self {
        Self {
            adapt: adapt_erased::<C>,
            callback: std::any::type_name::<C>(),
        }
    }

    /// Name of the accepted callback type.
    pub fn callback_type(&self) -> &'static str {
        self.callback
    }

    /// Recover the typed input and adapt it.
    ///
    /// On failure the error text describes the rejected value.
    pub fn adapt(&self, input: ErasedListenerInput) -> Result<ListenerSet, String> {
        (self.adapt)(input)
    }
}

impl fmt::Debug for ListenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListenerKind({})", self.callback)
    }
}

fn adapt_erased<C: CallbackShape>(input: ErasedListenerInput) -> Result<ListenerSet, String> {
    let input = input
        .downcast::<C>()
        .map_err(|other| format!("listeners of type {}", other.type_name()))?;
    adapt(input)
        .map(ListenerSet::new)
        .map_err(|err| err.to_string())
}

// ---------------------------------------------------------------------------
// ListenerKinds
// ---------------------------------------------------------------------------

/// Registry of event attributes: attribute name -> [`ListenerKind`].
#[derive(Debug, Default)]
pub struct ListenerKinds {
    kinds: HashMap<String, ListenerKind>,
}

impl ListenerKinds {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in event attributes.
    ///
    /// Defaults:
    /// - `click-event` -> `Callback<View, MouseEvent>`
    /// - `key-down-event`, `key-up-event` -> `Callback<View, KeyEvent>`
    /// - `text-changed` -> `CallbackWithOld<View, String>`
    /// - `list-item-clicked` -> `Callback<ListView, usize>`
    /// - `list-item-selected` -> `Callback<ListView, Option<usize>>`
    /// - `list-item-checked` -> `Callback<ListView, Vec<usize>>`
    pub fn with_defaults() -> Self {
        let mut kinds = Self::new();
        kinds.register::<Callback<View, MouseEvent>>(tag::CLICK_EVENT);
        kinds.register::<Callback<View, KeyEvent>>(tag::KEY_DOWN_EVENT);
        kinds.register::<Callback<View, KeyEvent>>(tag::KEY_UP_EVENT);
        kinds.register::<CallbackWithOld<View, String>>(tag::TEXT_CHANGED_EVENT);
        kinds.register::<Callback<ListView, usize>>(tag::LIST_ITEM_CLICKED_EVENT);
        kinds.register::<Callback<ListView, Option<usize>>>(tag::LIST_ITEM_SELECTED_EVENT);
        kinds.register::<Callback<ListView, Vec<usize>>>(tag::LIST_ITEM_CHECKED_EVENT);
        kinds
    }

    /// Register an event attribute, replacing any previous kind for it.
    pub fn register<C: CallbackShape>(&mut self, tag: &str) {
        self.kinds
            .insert(tag.to_ascii_lowercase(), ListenerKind::of::<C>());
    }

    /// Remove an event attribute. Returns its kind, if any.
    pub fn unregister(&mut self, tag: &str) -> Option<ListenerKind> {
        self.kinds.remove(&tag.to_ascii_lowercase())
    }

    /// The kind registered for `tag`.
    pub fn get(&self, tag: &str) -> Option<ListenerKind> {
        self.kinds.get(&tag.to_ascii_lowercase()).copied()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.kinds.contains_key(&tag.to_ascii_lowercase())
    }

    /// Number of registered attributes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the registry has no attributes.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::listener::{Listener, ListenerInput};

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_registry_is_empty() {
        let kinds = ListenerKinds::new();
        assert!(kinds.is_empty());
        assert_eq!(kinds.len(), 0);
    }

    #[test]
    fn defaults_cover_builtin_events() {
        let kinds = ListenerKinds::with_defaults();
        assert_eq!(kinds.len(), 7);
        for name in [
            tag::CLICK_EVENT,
            tag::KEY_DOWN_EVENT,
            tag::KEY_UP_EVENT,
            tag::TEXT_CHANGED_EVENT,
            tag::LIST_ITEM_CLICKED_EVENT,
            tag::LIST_ITEM_SELECTED_EVENT,
            tag::LIST_ITEM_CHECKED_EVENT,
        ] {
            assert!(kinds.contains(name), "missing {name}");
        }
        assert!(kinds.contains("Click-Event"));
    }

    // ── Register / unregister ────────────────────────────────────────

    #[test]
    fn register_replaces() {
        let mut kinds = ListenerKinds::new();
        kinds.register::<Callback<u8, u8>>("ping");
        kinds.register::<Callback<u8, u16>>("ping");
        assert_eq!(kinds.len(), 1);
        assert!(kinds.get("ping").unwrap().callback_type().contains("u16"));
        assert!(kinds.unregister("PING").is_some());
        assert!(kinds.is_empty());
    }

    // ── Adaptation ───────────────────────────────────────────────────

    #[test]
    fn adapt_matching_input() {
        let kind = ListenerKind::of::<Callback<u8, u16>>();
        let input = ListenerInput::sequence([Callback::<u8, u16>::bare(|| {}), Callback::bare(|| {})]);
        let set = kind.adapt(ErasedListenerInput::new(input)).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.listeners::<Listener<u8, u16>>().map(|l| l.len()), Some(2));
    }

    #[test]
    fn adapt_rejects_other_callback_type() {
        let kind = ListenerKind::of::<Callback<u8, u16>>();
        let input = ListenerInput::single(Callback::<u8, u32>::bare(|| {}));
        let err = kind.adapt(ErasedListenerInput::new(input)).unwrap_err();
        assert!(err.starts_with("listeners of type"));
    }

    #[test]
    fn adapt_reports_unset_element() {
        let kind = ListenerKind::of::<Callback<u8, u16>>();
        let input: ListenerInput<Callback<u8, u16>> = ListenerInput::Sequence(vec![None]);
        let err = kind.adapt(ErasedListenerInput::new(input)).unwrap_err();
        assert_eq!(err, "listener at position 0 is unset");
    }
}
