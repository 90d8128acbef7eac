//! Session: configuration and the collaborators every component shares.

use std::fmt;
use std::sync::Arc;

use crate::event::kinds::ListenerKinds;
use crate::property::coerce::{CoerceContext, DEFAULT_MAX_CONSTANT_DEPTH};
use crate::update::{NullSink, Update, UpdateSink};
use crate::value::constants::{ConstantResolver, NoConstants};
use crate::value::size::SizeKind;

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Unit given to bare numbers in size attributes.
    pub default_unit: SizeKind,
    /// Text written for `auto` sizes in CSS output.
    pub text_for_auto: String,
    /// Longest chain of `@name` references that is followed.
    pub max_constant_depth: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_unit: SizeKind::Px,
            text_for_auto: "auto".to_string(),
            max_constant_depth: DEFAULT_MAX_CONSTANT_DEPTH,
        }
    }
}

impl SessionConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unit for bare numbers (builder).
    pub fn with_default_unit(mut self, unit: SizeKind) -> Self {
        self.default_unit = unit;
        self
    }

    /// Set the text written for `auto` (builder).
    pub fn with_text_for_auto(mut self, text: impl Into<String>) -> Self {
        self.text_for_auto = text.into();
        self
    }

    /// Set the constant chain limit (builder).
    pub fn with_max_constant_depth(mut self, depth: usize) -> Self {
        self.max_constant_depth = depth;
        self
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Shared by every component of one client.
///
/// Owns the config, the constant resolver, the listener kinds registry, and
/// the update sink.
pub struct Session {
    config: SessionConfig,
    constants: Box<dyn ConstantResolver>,
    kinds: ListenerKinds,
    sink: Arc<dyn UpdateSink>,
}

impl Session {
    /// A session with default listener kinds, no constants, and a discarding sink.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            constants: Box::new(NoConstants),
            kinds: ListenerKinds::with_defaults(),
            sink: Arc::new(NullSink),
        }
    }

    /// Replace the constant resolver (builder).
    pub fn with_constants(mut self, constants: impl ConstantResolver + 'static) -> Self {
        self.constants = Box::new(constants);
        self
    }

    /// Replace the listener kinds registry (builder).
    pub fn with_kinds(mut self, kinds: ListenerKinds) -> Self {
        self.kinds = kinds;
        self
    }

    /// Replace the update sink (builder).
    pub fn with_sink(mut self, sink: Arc<dyn UpdateSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Wrap in an `Arc` for sharing between components.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn kinds(&self) -> &ListenerKinds {
        &self.kinds
    }

    /// Coercion context drawing on this session's config, constants and kinds.
    pub fn context(&self) -> CoerceContext<'_> {
        CoerceContext::plain()
            .with_resolver(self.constants.as_ref())
            .with_kinds(&self.kinds)
            .with_default_unit(self.config.default_unit)
            .with_max_constant_depth(self.config.max_constant_depth)
    }

    /// Push an update to the sink.
    pub fn send(&self, update: Update) {
        self.sink.apply(update);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("kinds", &self.kinds)
            .finish_non_exhaustive()
    }
}
