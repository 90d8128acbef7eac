//! # propview
//!
//! A dynamic property and event-binding engine for server-held view models.
//!
//! Components hold loosely-typed attributes (sizes, box-model bounds, enums,
//! text, event callbacks) that arrive as strings, numbers, records or
//! pre-built values. propview normalizes attribute names, coerces every value
//! into one canonical type before it is stored, adapts callbacks of any
//! accepted arity into a single listener shape, and keeps list selection state
//! consistent with a remote renderer through minimal incremental updates.
//!
//! ## Core Systems
//!
//! - **[`property`]**: Tag normalization, the attribute store, typed value coercion
//! - **[`value`]**: Size units, four-sided bounds with shorthand parsing, constant references
//! - **[`event`]**: Input events, the generic listener adapter, the listener kinds registry
//! - **[`selection`]**: Current/checked state machine for list components
//! - **[`view`]**: Components: `View` and `ListView`
//! - **[`session`]**: Configuration and shared collaborators
//! - **[`update`]**: Incremental updates for the rendering collaborator
//! - **[`testing`]**: Recording sink and listener call recorder

// Values and attributes
pub mod property;
pub mod value;

// Events and selection
pub mod event;
pub mod selection;

// Components
pub mod session;
pub mod update;
pub mod view;

// Test support
pub mod testing;
