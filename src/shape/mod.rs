//! Boxes and the sizes they are built from.

pub use self::layout_box::LayoutBox;
pub use self::size::{DeclaredSize, Size};

mod layout_box;
mod size;
