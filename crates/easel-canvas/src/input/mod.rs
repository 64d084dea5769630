//! Pointer input bridging.
//!
//! Responsibilities:
//! - the click event/button types callers see
//! - collapsing toolkit button variants into those buckets

mod click;

pub use click::{ClickEvent, ClickHandler, PointerButton};
pub(crate) use click::map_pointer_button;
