//! Incremental updates handed to the rendering collaborator.
//!
//! Components never wait on the renderer. Each visible change becomes an
//! [`Update`] pushed into an [`UpdateSink`]; what the sink does with it (queue,
//! ship over a socket, drop) is outside this crate.

use tokio::sync::mpsc::UnboundedSender;
use tracing::trace;

/// A visible change to one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// The component's content must be re-rendered.
    Content { view: String },
    /// A style attribute changed.
    Style { view: String, tag: String },
    /// A list item's checkbox changed.
    ItemChecked {
        view: String,
        index: usize,
        checked: bool,
    },
    /// The first listener for an event was attached, or the last one removed.
    HandlerChanged {
        view: String,
        event: String,
        attached: bool,
    },
}

impl Update {
    /// Id of the component the update belongs to.
    pub fn view(&self) -> &str {
        match self {
            Update::Content { view }
            | Update::Style { view, .. }
            | Update::ItemChecked { view, .. }
            | Update::HandlerChanged { view, .. } => view,
        }
    }
}

/// Fire-and-forget receiver of [`Update`]s.
pub trait UpdateSink: Send + Sync {
    fn apply(&self, update: Update);
}

/// A sink that discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl UpdateSink for NullSink {
    fn apply(&self, _update: Update) {}
}

/// Hands updates to an async transport task. A closed channel drops them.
impl UpdateSink for UnboundedSender<Update> {
    fn apply(&self, update: Update) {
        if let Err(err) = self.send(update) {
            trace!(view = err.0.view(), "update channel closed, update dropped");
        }
    }
}
