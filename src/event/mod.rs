//! Event system: input events, listener adaptation, listener kinds.

pub mod input;
pub mod kinds;
pub mod listener;

pub use input::{KeyEvent, Modifiers, MouseButton, MouseEvent};
pub use kinds::{ListenerKind, ListenerKinds};
pub use listener::{
    adapt, notify, notify_with_old, Callback, CallbackShape, CallbackWithOld, Listener,
    ListenerInput, ListenerWithOld, UnsetListener,
};
