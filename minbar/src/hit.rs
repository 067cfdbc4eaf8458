use crate::element::{Content, Element};
use crate::layout::LayoutMap;

/// Deepest clickable element containing the point, or None.
/// Children are checked in reverse order so the last painted wins.
pub fn hit_test(layout: &LayoutMap, root: &Element, x: u16, y: u16) -> Option<String> {
    let rect = layout.get(&root.id)?;
    if !rect.contains(x, y) {
        return None;
    }

    if let Content::Children(children) = &root.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_test(layout, child, x, y) {
                return Some(id);
            }
        }
    }

    root.clickable.then(|| root.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;
    use crate::layout::Rect;
    use crate::types::Size;

    #[test]
    fn finds_deepest_clickable() {
        let tree = Element::col()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fill)
            .clickable(true)
            .child(
                Element::box_()
                    .id("row-1")
                    .width(Size::Fill)
                    .height(Size::Fixed(1))
                    .clickable(true),
            );
        let map = layout(&tree, Rect::from_size(10, 5));
        assert_eq!(hit_test(&map, &tree, 3, 0).as_deref(), Some("row-1"));
        assert_eq!(hit_test(&map, &tree, 3, 3).as_deref(), Some("root"));
    }

    #[test]
    fn misses_outside_and_non_clickable() {
        let tree = Element::box_()
            .id("root")
            .width(Size::Fixed(4))
            .height(Size::Fixed(2));
        let map = layout(&tree, Rect::from_size(10, 10));
        assert_eq!(hit_test(&map, &tree, 1, 1), None);
        assert_eq!(hit_test(&map, &tree, 9, 9), None);
    }
}
