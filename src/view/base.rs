//! View: the base component every other component builds on.
//!
//! A view owns one [`PropertyStore`] and shares its [`Session`]. Attribute
//! writes go through [`Properties::set`]: the tag is normalized, the value
//! coerced, and only then committed. Each successful change is reported to
//! the session's update sink.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::event::input::{KeyEvent, MouseEvent};
use crate::event::listener::{notify, notify_with_old, Listener, ListenerWithOld};
use crate::property::coerce::{coerce, family, Family};
use crate::property::error::PropertyError;
use crate::property::store::{Properties, PropertyStore};
use crate::property::tag;
use crate::property::value::{PropertyValue, RawValue, Record};
use crate::session::Session;
use crate::update::Update;
use crate::value::bounds::Bounds;
use crate::value::size::SizeUnit;

/// A component with dynamic attributes and event listeners.
pub struct View {
    id: String,
    store: PropertyStore,
    session: Arc<Session>,
    focusable_by_default: bool,
}

impl View {
    /// Create a view with no attributes.
    pub fn new(id: impl Into<String>, session: Arc<Session>) -> Self {
        Self {
            id: id.into(),
            store: PropertyStore::new(),
            session,
            focusable_by_default: false,
        }
    }

    /// Make the view focusable unless `focusable` says otherwise (builder).
    pub(crate) fn focusable_by_default(mut self) -> Self {
        self.focusable_by_default = true;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub(crate) fn store(&self) -> &PropertyStore {
        &self.store
    }

    // -- Typed getters ----------------------------------------------------

    /// The `text` attribute, empty when unset.
    pub fn text(&self) -> String {
        self.store
            .get_raw(tag::TEXT)
            .and_then(|value| value.as_text().map(str::to_string))
            .unwrap_or_default()
    }

    /// A size attribute.
    pub fn size(&self, name: &str) -> Option<SizeUnit> {
        self.store
            .get_raw(&tag::normalize_view_tag(name))
            .and_then(|value| value.as_size())
    }

    pub fn is_disabled(&self) -> bool {
        self.flag(tag::DISABLED).unwrap_or(false)
    }

    pub fn is_focusable(&self) -> bool {
        self.flag(tag::FOCUSABLE).unwrap_or(self.focusable_by_default)
    }

    fn flag(&self, name: &str) -> Option<bool> {
        self.store.get_raw(name).and_then(|value| value.as_bool())
    }

    /// Resolve a box attribute (`margin`, `padding`, `cell-padding`) with its
    /// per-side overrides. Each side takes its override, else the box value,
    /// else auto.
    pub fn effective_bounds(&self, box_name: &str) -> Bounds {
        let box_name = box_name.to_ascii_lowercase();
        let sides = tag::side_tags(&box_name);
        Bounds::from_properties(&self.store, &box_name, sides.each_ref().map(String::as_str))
    }

    /// CSS text of [`View::effective_bounds`].
    pub fn bounds_css(&self, box_name: &str) -> String {
        self.effective_bounds(box_name)
            .css_string(&self.session.config().text_for_auto)
    }

    // -- Listeners --------------------------------------------------------

    /// The listeners stored under an event attribute, in attachment order.
    ///
    /// Empty when none are attached or `tag` holds listeners of another type.
    pub fn listeners<V: 'static, E: 'static>(&self, name: &str) -> Vec<Listener<V, E>> {
        self.listener_set(name)
    }

    /// The previous-value listeners stored under an event attribute.
    pub fn listeners_with_old<V: 'static, E: 'static>(
        &self,
        name: &str,
    ) -> Vec<ListenerWithOld<V, E>> {
        self.listener_set(name)
    }

    fn listener_set<L: Clone + 'static>(&self, name: &str) -> Vec<L> {
        match self.store.get_raw(&name.to_ascii_lowercase()) {
            Some(PropertyValue::Listeners(set)) => set.listeners::<L>().unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    // -- Events -----------------------------------------------------------

    /// Dispatch a key event to the `key-down-event` / `key-up-event` listeners.
    ///
    /// A key-down with no listeners on a focusable, enabled view turns space
    /// and enter into a primary-button click.
    pub fn handle_key_event(&self, event_tag: &str, event: &KeyEvent) {
        let event_tag = event_tag.to_ascii_lowercase();
        let listeners = self.listeners::<View, KeyEvent>(&event_tag);
        if !listeners.is_empty() {
            notify(&listeners, self, event);
            return;
        }
        if event_tag == tag::KEY_DOWN_EVENT
            && event.is_activation()
            && self.is_focusable()
            && !self.is_disabled()
        {
            debug!(view = %self.id, key = %event.key, "key activation dispatched as click");
            self.handle_click(&MouseEvent::from_activation(event));
        }
    }

    /// Decode a key event record and dispatch it.
    pub fn handle_key_record(&self, event_tag: &str, record: &Record) {
        self.handle_key_event(event_tag, &KeyEvent::from_record(record));
    }

    /// Dispatch a click to the `click-event` listeners.
    pub fn handle_click(&self, event: &MouseEvent) {
        let listeners = self.listeners::<View, MouseEvent>(tag::CLICK_EVENT);
        notify(&listeners, self, event);
    }

    // -- Commit -----------------------------------------------------------

    /// Coerce and commit a value under an already-normalized name.
    pub(crate) fn commit(&self, name: String, value: RawValue) -> Result<(), PropertyError> {
        let ctx = self.session.context();
        let value = coerce(&name, value, &ctx)?;
        let is_listener = matches!(family(&name, &ctx), Some(Family::Listener));
        self.replace(name, value, is_listener);
        Ok(())
    }

    /// Store an already-coerced, non-listener value under a normalized name.
    pub(crate) fn commit_value(&self, name: String, value: Option<PropertyValue>) {
        self.replace(name, value, false);
    }

    fn replace(&self, name: String, value: Option<PropertyValue>, is_listener: bool) {
        let old_text = (name == tag::TEXT).then(|| self.text());
        let had = self.store.contains(&name);
        let has = value.is_some();
        self.store.set_raw(name.clone(), value);

        if is_listener {
            // Focusable views keep key-down wired for the activation click.
            let keeps_handler = !has && name == tag::KEY_DOWN_EVENT && self.is_focusable();
            if had != has && !keeps_handler {
                self.session.send(Update::HandlerChanged {
                    view: self.id.clone(),
                    event: name,
                    attached: has,
                });
            }
            return;
        }

        if let Some(old) = old_text {
            self.session.send(Update::Content {
                view: self.id.clone(),
            });
            let new = self.text();
            if new != old {
                let listeners = self.listeners_with_old::<View, String>(tag::TEXT_CHANGED_EVENT);
                notify_with_old(&listeners, self, &new, &old);
            }
        } else if name == tag::ITEMS {
            self.session.send(Update::Content {
                view: self.id.clone(),
            });
        } else if had || has {
            self.session.send(Update::Style {
                view: self.id.clone(),
                tag: name,
            });
        }
    }

    /// Remove an already-normalized name.
    pub(crate) fn discard(&self, name: String) {
        if !self.store.contains(&name) {
            return;
        }
        let is_listener = self.session.kinds().contains(&name);
        self.replace(name, None, is_listener);
    }
}

impl Properties for View {
    fn get(&self, name: &str) -> Option<PropertyValue> {
        self.store.get_raw(&tag::normalize_view_tag(name))
    }

    fn set(&self, name: &str, value: RawValue) -> Result<(), PropertyError> {
        self.commit(tag::normalize_view_tag(name), value)
    }

    fn remove(&self, name: &str) {
        self.discard(tag::normalize_view_tag(name));
    }

    fn clear(&self) {
        for name in self.store.all_tags() {
            self.discard(name);
        }
    }

    fn all_tags(&self) -> Vec<String> {
        self.store.all_tags()
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("id", &self.id)
            .field("tags", &self.store.all_tags())
            .finish_non_exhaustive()
    }
}
