//! Value types: sizes, four-sided bounds, constant references.

pub mod bounds;
pub mod constants;
pub mod size;
pub mod tokenizer;

pub use bounds::{Bounds, BoundsProperty, Side};
pub use constants::{ConstantResolver, ConstantTable, NoConstants};
pub use size::{SizeKind, SizeUnit};
