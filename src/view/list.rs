//! ListView: a view over a list of items with current and checked state.
//!
//! `current`, `checked` and `checkbox` are backed by a [`SelectionState`]
//! instead of plain attributes, so every write is validated against the
//! checkbox mode. Listeners are cloned out and called after all locks are
//! released; a listener may call back into the list.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::event::listener::{notify, Listener};
use crate::property::coerce::coerce;
use crate::property::enums::{
    CheckboxMode, HorizontalAlign, ListWrap, Orientation, PropertyEnum, VerticalAlign,
};
use crate::property::error::PropertyError;
use crate::property::store::Properties;
use crate::property::tag;
use crate::property::value::{PropertyValue, RawValue};
use crate::selection::{CheckDelta, SelectionState};
use crate::session::Session;
use crate::update::Update;
use crate::value::size::SizeUnit;

use super::base::View;

/// Normalize a list attribute name.
///
/// On top of [`tag::normalize_view_tag`], the plain alignment names address
/// the item alignment.
pub fn normalize_list_tag(name: &str) -> String {
    let name = tag::normalize_view_tag(name);
    match name.as_str() {
        tag::HORIZONTAL_ALIGN => tag::ITEM_HORIZONTAL_ALIGN.to_string(),
        tag::VERTICAL_ALIGN => tag::ITEM_VERTICAL_ALIGN.to_string(),
        _ => name,
    }
}

/// A list component.
pub struct ListView {
    view: View,
    selection: Mutex<SelectionState>,
}

impl ListView {
    /// Create an empty list. Lists are focusable unless told otherwise.
    pub fn new(id: impl Into<String>, session: Arc<Session>) -> Self {
        Self {
            view: View::new(id, session).focusable_by_default(),
            selection: Mutex::new(SelectionState::default()),
        }
    }

    /// The underlying view.
    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn id(&self) -> &str {
        self.view.id()
    }

    // -- Queries ----------------------------------------------------------

    /// The current item.
    pub fn current(&self) -> Option<usize> {
        self.selection.lock().current()
    }

    /// Checked items, in the order they were checked.
    pub fn checked(&self) -> Vec<usize> {
        self.selection.lock().checked().to_vec()
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.selection.lock().is_checked(index)
    }

    pub fn checkbox_mode(&self) -> CheckboxMode {
        self.selection.lock().mode()
    }

    pub fn items(&self) -> Vec<String> {
        match self.view.store().get_raw(tag::ITEMS) {
            Some(PropertyValue::Strings(items)) => items,
            _ => Vec::new(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.enum_value(tag::ORIENTATION)
    }

    pub fn list_wrap(&self) -> ListWrap {
        self.enum_value(tag::LIST_WRAP)
    }

    pub fn item_horizontal_align(&self) -> HorizontalAlign {
        self.enum_value(tag::ITEM_HORIZONTAL_ALIGN)
    }

    pub fn item_vertical_align(&self) -> VerticalAlign {
        self.enum_value(tag::ITEM_VERTICAL_ALIGN)
    }

    pub fn checkbox_horizontal_align(&self) -> HorizontalAlign {
        self.enum_value(tag::CHECKBOX_HORIZONTAL_ALIGN)
    }

    pub fn checkbox_vertical_align(&self) -> VerticalAlign {
        self.enum_value(tag::CHECKBOX_VERTICAL_ALIGN)
    }

    pub fn item_width(&self) -> Option<SizeUnit> {
        self.view.size(tag::ITEM_WIDTH)
    }

    pub fn item_height(&self) -> Option<SizeUnit> {
        self.view.size(tag::ITEM_HEIGHT)
    }

    fn enum_value<T: PropertyEnum + Default>(&self, name: &str) -> T {
        self.view
            .store()
            .get_raw(name)
            .and_then(|value| value.as_enum())
            .and_then(T::from_index)
            .unwrap_or_default()
    }

    fn listeners<E: 'static>(&self, name: &str) -> Vec<Listener<ListView, E>> {
        self.view.listeners::<ListView, E>(name)
    }

    // -- Selection --------------------------------------------------------

    /// Move the current item; `None` clears it.
    ///
    /// Fires `list-item-selected` when the current item changes.
    pub fn set_current(&self, current: Option<usize>) -> Result<(), PropertyError> {
        let changed = {
            let mut selection = self.selection.lock();
            let item_count = self.items().len();
            selection.set_current(current, item_count)?
        };
        if changed {
            self.current_changed(current);
        }
        Ok(())
    }

    fn current_changed(&self, current: Option<usize>) {
        self.view.session().send(Update::Content {
            view: self.id().to_string(),
        });
        let listeners = self.listeners::<Option<usize>>(tag::LIST_ITEM_SELECTED_EVENT);
        notify(&listeners, self, &current);
    }

    /// Replace the checked items.
    ///
    /// Emits one [`Update::ItemChecked`] per changed item, then calls the
    /// `list-item-checked` listeners once with the full checked set.
    pub fn set_checked(&self, indices: &[usize]) -> Result<(), PropertyError> {
        let (deltas, checked) = {
            let mut selection = self.selection.lock();
            let deltas = selection.set_checked(indices)?;
            (deltas, selection.checked().to_vec())
        };
        self.send_deltas(&deltas);
        let listeners = self.listeners::<Vec<usize>>(tag::LIST_ITEM_CHECKED_EVENT);
        notify(&listeners, self, &checked);
        Ok(())
    }

    /// Switch checkbox mode, unchecking items the new mode cannot hold.
    fn set_mode(&self, mode: CheckboxMode) {
        let (deltas, checked) = {
            let mut selection = self.selection.lock();
            let deltas = selection.set_mode(mode);
            (deltas, selection.checked().to_vec())
        };
        self.send_deltas(&deltas);
        if !deltas.is_empty() {
            let listeners = self.listeners::<Vec<usize>>(tag::LIST_ITEM_CHECKED_EVENT);
            notify(&listeners, self, &checked);
        }
    }

    /// Click the current item.
    ///
    /// Toggles its checked state for the checkbox mode, then calls the
    /// `list-item-checked` listeners (unless the mode is `none`) and the
    /// `list-item-clicked` listeners, in that order. A disabled list ignores
    /// the click.
    pub fn click_current(&self) -> Result<(), PropertyError> {
        if self.view.is_disabled() {
            debug!(view = %self.id(), "click ignored on disabled list");
            return Ok(());
        }
        let (deltas, current, mode, checked) = {
            let mut selection = self.selection.lock();
            let deltas = selection.toggle_current()?;
            let current = selection.current().unwrap_or_default();
            (deltas, current, selection.mode(), selection.checked().to_vec())
        };
        self.send_deltas(&deltas);
        if mode != CheckboxMode::None {
            let listeners = self.listeners::<Vec<usize>>(tag::LIST_ITEM_CHECKED_EVENT);
            notify(&listeners, self, &checked);
        }
        let listeners = self.listeners::<usize>(tag::LIST_ITEM_CLICKED_EVENT);
        notify(&listeners, self, &current);
        Ok(())
    }

    /// A click on `index` reported by the renderer: select it, then click it.
    pub fn handle_item_click(&self, index: usize) -> Result<(), PropertyError> {
        self.set_current(Some(index))?;
        self.click_current()
    }

    fn send_deltas(&self, deltas: &[CheckDelta]) {
        for delta in deltas {
            self.view.session().send(Update::ItemChecked {
                view: self.id().to_string(),
                index: delta.index,
                checked: delta.checked,
            });
        }
    }

    fn coerce(&self, name: &str, value: RawValue) -> Result<Option<PropertyValue>, PropertyError> {
        coerce(name, value, &self.view.session().context())
    }

    /// Replace the items. Current is cleared if it no longer points at an item.
    fn set_items(&self, value: RawValue) -> Result<(), PropertyError> {
        let items = self.coerce(tag::ITEMS, value)?;
        let cleared = {
            // Items and current change under the one selection lock.
            let mut selection = self.selection.lock();
            let count = match &items {
                Some(PropertyValue::Strings(items)) => items.len(),
                _ => 0,
            };
            self.view.commit_value(tag::ITEMS.to_string(), items);
            match selection.current() {
                Some(current) if current >= count => selection.set_current(None, count)?,
                _ => false,
            }
        };
        if cleared {
            self.current_changed(None);
        }
        Ok(())
    }
}

impl Properties for ListView {
    fn get(&self, name: &str) -> Option<PropertyValue> {
        let name = normalize_list_tag(name);
        match name.as_str() {
            tag::CURRENT => Some(PropertyValue::Int(
                self.current()
                    .and_then(|current| i64::try_from(current).ok())
                    .unwrap_or(-1),
            )),
            tag::CHECKED => {
                let checked = self.checked();
                (!checked.is_empty()).then_some(PropertyValue::Indices(checked))
            }
            _ => self.view.get(&name),
        }
    }

    fn set(&self, name: &str, value: RawValue) -> Result<(), PropertyError> {
        let name = normalize_list_tag(name);
        match name.as_str() {
            tag::CURRENT => {
                let current = match self.coerce(&name, value)? {
                    Some(PropertyValue::Int(n)) => usize::try_from(n).ok(),
                    _ => None,
                };
                self.set_current(current)
            }
            tag::CHECKED => match self.coerce(&name, value)? {
                Some(PropertyValue::Indices(indices)) => self.set_checked(&indices),
                _ => self.set_checked(&[]),
            },
            tag::CHECKBOX => {
                let coerced = self.coerce(&name, value)?;
                let mode = coerced
                    .as_ref()
                    .and_then(PropertyValue::as_enum)
                    .and_then(CheckboxMode::from_index)
                    .unwrap_or_default();
                self.view.commit_value(name, coerced);
                self.set_mode(mode);
                Ok(())
            }
            tag::ITEMS => self.set_items(value),
            _ => self.view.commit(name, value),
        }
    }

    fn remove(&self, name: &str) {
        let name = normalize_list_tag(name);
        match name.as_str() {
            tag::CURRENT => {
                let _ = self.set_current(None);
            }
            tag::CHECKED => {
                let _ = self.set_checked(&[]);
            }
            tag::CHECKBOX => {
                self.view.discard(name);
                self.set_mode(CheckboxMode::None);
            }
            tag::ITEMS => {
                let _ = self.set_items(RawValue::Null);
            }
            _ => self.view.discard(name),
        }
    }

    fn clear(&self) {
        for name in self.all_tags() {
            self.remove(&name);
        }
    }

    fn all_tags(&self) -> Vec<String> {
        let mut tags = self.view.all_tags();
        if self.current().is_some() {
            tags.push(tag::CURRENT.to_string());
        }
        if !self.checked().is_empty() {
            tags.push(tag::CHECKED.to_string());
        }
        tags.sort();
        tags
    }
}

impl fmt::Debug for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("view", &self.view)
            .field("selection", &*self.selection.lock())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::listener::{Callback, ListenerInput};
    use crate::selection::SelectionError;
    use crate::testing::{Recorder, RecordingSink};
    use pretty_assertions::assert_eq;

    fn list_with_sink() -> (ListView, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let session = Session::default().with_sink(sink.clone()).shared();
        let list = ListView::new("list", session);
        list.set("items", vec!["a", "b", "c", "d", "e", "f"].into()).unwrap();
        sink.take();
        (list, sink)
    }

    fn checked_recorder(list: &ListView) -> Recorder {
        let recorder = Recorder::new();
        let r = recorder.clone();
        list.set(
            "list-item-checked",
            ListenerInput::single(Callback::<ListView, Vec<usize>>::event(move |checked: &Vec<usize>| {
                r.record(format!("checked {checked:?}"));
            }))
            .into(),
        )
        .unwrap();
        recorder
    }

    fn checked_update(index: usize, checked: bool) -> Update {
        Update::ItemChecked {
            view: "list".into(),
            index,
            checked,
        }
    }

    // ── Mode & tags ──────────────────────────────────────────────────

    #[test]
    fn checkbox_attribute_drives_mode() {
        let (list, _) = list_with_sink();
        assert_eq!(list.checkbox_mode(), CheckboxMode::None);
        list.set("Checkbox", "single".into()).unwrap();
        assert_eq!(list.checkbox_mode(), CheckboxMode::Single);
        assert_eq!(list.get("checkbox"), Some(PropertyValue::Enum(1)));
        assert!(list.set("checkbox", "several".into()).is_err());
        assert_eq!(list.checkbox_mode(), CheckboxMode::Single);
    }

    #[test]
    fn alignment_aliases() {
        let (list, _) = list_with_sink();
        list.set("horizontal-align", "center".into()).unwrap();
        list.set("vertical-align", 3.into()).unwrap();
        assert_eq!(list.item_horizontal_align(), HorizontalAlign::Center);
        assert_eq!(list.item_vertical_align(), VerticalAlign::Stretch);
        assert_eq!(list.checkbox_vertical_align(), VerticalAlign::Top);
    }

    #[test]
    fn typed_getters() {
        let (list, _) = list_with_sink();
        list.set("orientation", "start-to-end".into()).unwrap();
        list.set("list-wrap", "on".into()).unwrap();
        list.set("item-width", "20%".into()).unwrap();
        assert_eq!(list.orientation(), Orientation::StartToEnd);
        assert_eq!(list.list_wrap(), ListWrap::On);
        assert_eq!(list.item_width(), Some(SizeUnit::percent(20.0)));
        assert_eq!(list.item_height(), None);
    }

    // ── Current ──────────────────────────────────────────────────────

    #[test]
    fn current_fires_selected_listeners() {
        let (list, _) = list_with_sink();
        let recorder = Recorder::new();
        let r = recorder.clone();
        list.set(
            "list-item-selected",
            ListenerInput::single(Callback::<ListView, Option<usize>>::full(
                move |list: &ListView, current: &Option<usize>| {
                    r.record(format!("{} {current:?}", list.id()));
                },
            ))
            .into(),
        )
        .unwrap();

        list.set("current", 2.into()).unwrap();
        list.set("current", 2.into()).unwrap();
        list.set("current", (-1).into()).unwrap();
        assert_eq!(recorder.calls(), vec!["list Some(2)", "list None"]);
        assert_eq!(list.get("current"), Some(PropertyValue::Int(-1)));
    }

    #[test]
    fn current_out_of_range_rejected() {
        let (list, _) = list_with_sink();
        let err = list.set("current", 6.into()).unwrap_err();
        assert_eq!(
            err,
            PropertyError::Selection(SelectionError::IndexOutOfRange { index: 6, len: 6 })
        );
        assert_eq!(list.current(), None);
    }

    #[test]
    fn current_never_outlives_its_item() {
        let (list, _) = list_with_sink();
        std::thread::scope(|scope| {
            let list = &list;
            scope.spawn(move || {
                for round in 0..200 {
                    let items = if round % 2 == 0 { vec!["a", "b"] } else { vec!["a", "b", "c", "d", "e", "f"] };
                    list.set("items", items.into()).unwrap();
                }
            });
            for _ in 0..2 {
                scope.spawn(move || {
                    for _ in 0..200 {
                        let _ = list.set_current(Some(5));
                        let _ = list.set_current(Some(1));
                    }
                });
            }
        });
        let count = list.items().len();
        assert!(list.current().map_or(true, |current| current < count));
    }

    #[test]
    fn shrinking_items_clears_current() {
        let (list, _) = list_with_sink();
        list.set_current(Some(4)).unwrap();
        list.set("items", vec!["a", "b"].into()).unwrap();
        assert_eq!(list.current(), None);
    }

    // ── Checked ──────────────────────────────────────────────────────

    #[test]
    fn single_mode_replace_scenario() {
        let (list, sink) = list_with_sink();
        list.set("checkbox", "single".into()).unwrap();
        let recorder = checked_recorder(&list);
        sink.take();

        list.set("checked", vec![2usize].into()).unwrap();
        list.set("checked", vec![5usize].into()).unwrap();
        assert_eq!(
            sink.take(),
            vec![checked_update(2, true), checked_update(2, false), checked_update(5, true)]
        );
        assert_eq!(recorder.calls(), vec!["checked [2]", "checked [5]"]);
        assert_eq!(list.checked(), vec![5]);
    }

    #[test]
    fn none_mode_rejects_checks() {
        let (list, sink) = list_with_sink();
        let recorder = checked_recorder(&list);
        sink.take();
        assert!(list.set("checked", 0.into()).is_err());
        assert!(list.checked().is_empty());
        assert!(sink.take().is_empty());
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn multiple_mode_diff_and_single_notification() {
        let (list, sink) = list_with_sink();
        list.set("checkbox", "multiple".into()).unwrap();
        list.set("checked", "1,2".into()).unwrap();
        let recorder = checked_recorder(&list);
        sink.take();

        list.set("checked", vec![2usize, 3].into()).unwrap();
        assert_eq!(sink.take(), vec![checked_update(1, false), checked_update(3, true)]);
        assert_eq!(recorder.calls(), vec!["checked [2, 3]"]);
        assert_eq!(list.get("checked"), Some(PropertyValue::Indices(vec![2, 3])));
        assert!(list.all_tags().contains(&"checked".to_string()));
    }

    #[test]
    fn mode_switch_trims_checked() {
        let (list, sink) = list_with_sink();
        list.set("checkbox", "multiple".into()).unwrap();
        list.set_checked(&[0, 4]).unwrap();
        sink.take();
        list.set("checkbox", "single".into()).unwrap();
        assert_eq!(list.checked(), vec![0]);
        assert!(sink.take().contains(&checked_update(4, false)));
        list.remove("checkbox");
        assert!(list.checked().is_empty());
    }

    // ── Clicks ───────────────────────────────────────────────────────

    #[test]
    fn click_fires_checked_then_clicked() {
        let (list, _) = list_with_sink();
        list.set("checkbox", "multiple".into()).unwrap();
        let recorder = checked_recorder(&list);
        let r = recorder.clone();
        list.set(
            "list-item-clicked",
            ListenerInput::single(Callback::<ListView, usize>::event(move |index: &usize| {
                r.record(format!("clicked {index}"));
            }))
            .into(),
        )
        .unwrap();

        list.handle_item_click(3).unwrap();
        list.handle_item_click(3).unwrap();
        assert_eq!(
            recorder.calls(),
            vec!["checked [3]", "clicked 3", "checked []", "clicked 3"]
        );
    }

    #[test]
    fn click_in_none_mode_only_clicks() {
        let (list, _) = list_with_sink();
        let recorder = checked_recorder(&list);
        let r = recorder.clone();
        list.set(
            "list-item-clicked",
            ListenerInput::single(Callback::<ListView, usize>::bare(move || r.record("clicked"))).into(),
        )
        .unwrap();
        list.handle_item_click(0).unwrap();
        assert_eq!(recorder.calls(), vec!["clicked"]);
    }

    #[test]
    fn disabled_list_ignores_clicks() {
        let (list, _) = list_with_sink();
        list.set("checkbox", "single".into()).unwrap();
        list.set("disabled", true.into()).unwrap();
        list.handle_item_click(1).unwrap();
        assert!(list.checked().is_empty());
        assert_eq!(list.current(), Some(1));
    }

    #[test]
    fn click_without_current_fails() {
        let (list, _) = list_with_sink();
        assert_eq!(
            list.click_current(),
            Err(PropertyError::Selection(SelectionError::NoCurrent))
        );
    }

    // ── Reentrancy ───────────────────────────────────────────────────

    #[test]
    fn listener_may_read_list_state() {
        let (list, _) = list_with_sink();
        list.set("checkbox", "single".into()).unwrap();
        let recorder = Recorder::new();
        let r = recorder.clone();
        list.set(
            "list-item-checked",
            ListenerInput::single(Callback::<ListView, Vec<usize>>::owner(move |list: &ListView| {
                r.record(format!("{:?} {}", list.checked(), list.is_checked(1)));
            }))
            .into(),
        )
        .unwrap();
        list.set_checked(&[1]).unwrap();
        assert_eq!(recorder.calls(), vec!["[1] true"]);
    }

    #[test]
    fn lists_are_focusable_by_default() {
        let (list, _) = list_with_sink();
        assert!(list.view().is_focusable());
        list.set("focusable", false.into()).unwrap();
        assert!(!list.view().is_focusable());
    }
}
