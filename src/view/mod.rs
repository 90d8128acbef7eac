//! Components: View and ListView.

pub mod base;
pub mod list;

pub use base::View;
pub use list::{normalize_list_tag, ListView};
