mod flex;
mod rect;

pub use flex::{layout, LayoutMap};
pub use rect::Rect;
