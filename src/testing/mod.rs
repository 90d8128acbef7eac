//! Headless testing helpers: RecordingSink, Recorder.
//!
//! Use a [`RecordingSink`] as a session's update sink to assert on the updates
//! components emit, and a [`Recorder`] inside listeners to assert on the order
//! in which they ran.

pub mod recorder;

pub use recorder::{Recorder, RecordingSink};
