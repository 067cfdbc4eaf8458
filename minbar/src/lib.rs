pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod registry;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;
pub mod widgets;

pub use buffer::{Buffer, Cell};
pub use element::{Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::hit_test;
pub use layout::{layout, LayoutMap, Rect};
pub use registry::HandlerRegistry;
pub use terminal::Terminal;
pub use types::*;
