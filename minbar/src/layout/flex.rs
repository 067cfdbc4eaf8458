use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Border, Direction, Justify, Size};

/// Element id to computed screen rect.
pub type LayoutMap = HashMap<String, Rect>;

/// Compute rects for every element in the tree within `available`.
pub fn layout(root: &Element, available: Rect) -> LayoutMap {
    let mut map = LayoutMap::new();
    let width = resolve_axis(root, root.width, available.width, true);
    let height = resolve_axis(root, root.height, available.height, false);
    let rect = Rect::new(available.x, available.y, width, height);
    map.insert(root.id.clone(), rect);
    layout_children(root, rect, &mut map);
    map
}

fn layout_children(element: &Element, rect: Rect, map: &mut LayoutMap) {
    let Content::Children(children) = &element.content else {
        return;
    };
    if children.is_empty() {
        return;
    }

    let inner = inner_rect(element, rect);
    let is_row = element.direction == Direction::Row;
    let main_avail = if is_row { inner.width } else { inner.height };
    let cross_avail = if is_row { inner.height } else { inner.width };
    let gap_total = element.gap * (children.len() as u16 - 1);

    // Pass one: fixed and content-sized children, flex weights.
    let mut reserved = 0u16;
    let mut flex_weight = 0u16;
    for child in children {
        match main_size(child, is_row) {
            Size::Fixed(n) => reserved += n,
            Size::Auto => reserved += estimate(child, is_row),
            Size::Flex(w) => flex_weight += w.max(1),
            Size::Fill => flex_weight += 1,
        }
    }

    let remaining = main_avail.saturating_sub(reserved + gap_total);

    // Pass two: concrete main sizes. Flex remainders go to the last flex
    // child so weighted splits always fill the axis exactly.
    let mut sizes = Vec::with_capacity(children.len());
    let mut flex_given = 0u16;
    let mut flex_seen = 0u16;
    for child in children {
        let size = match main_size(child, is_row) {
            Size::Fixed(n) => n,
            Size::Auto => estimate(child, is_row),
            Size::Flex(w) => {
                flex_seen += w.max(1);
                let upto = if flex_weight > 0 {
                    (u32::from(remaining) * u32::from(flex_seen) / u32::from(flex_weight)) as u16
                } else {
                    0
                };
                let share = upto - flex_given;
                flex_given = upto;
                share
            }
            Size::Fill => {
                flex_seen += 1;
                let upto = if flex_weight > 0 {
                    (u32::from(remaining) * u32::from(flex_seen) / u32::from(flex_weight)) as u16
                } else {
                    0
                };
                let share = upto - flex_given;
                flex_given = upto;
                share
            }
        };
        let size = match (is_row, child.min_width) {
            (true, Some(min)) => size.max(min),
            _ => size,
        };
        sizes.push(size);
    }

    let used: u16 = sizes.iter().sum::<u16>() + gap_total;
    let slack = main_avail.saturating_sub(used);
    let (mut offset, between) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::Center => (slack / 2, element.gap),
        Justify::End => (slack, element.gap),
        Justify::SpaceBetween => {
            if children.len() > 1 {
                (0, element.gap + slack / (children.len() as u16 - 1))
            } else {
                (0, element.gap)
            }
        }
    };

    for (child, &main) in children.iter().zip(&sizes) {
        let main = main.min(main_avail.saturating_sub(offset));
        let cross = match cross_size(child, is_row) {
            Size::Fixed(n) => n.min(cross_avail),
            Size::Fill | Size::Flex(_) => cross_avail,
            Size::Auto => {
                if element.align == Align::Stretch {
                    cross_avail
                } else {
                    estimate(child, !is_row).min(cross_avail)
                }
            }
        };
        let cross_offset = match element.align {
            Align::Start | Align::Stretch => 0,
            Align::Center => (cross_avail - cross) / 2,
            Align::End => cross_avail - cross,
        };

        let child_rect = if is_row {
            Rect::new(inner.x + offset, inner.y + cross_offset, main, cross)
        } else {
            Rect::new(inner.x + cross_offset, inner.y + offset, cross, main)
        };
        map.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, map);

        offset += main + between;
    }
}

fn inner_rect(element: &Element, rect: Rect) -> Rect {
    let border = if element.style.border == Border::None {
        0
    } else {
        1
    };
    rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    )
}

fn main_size(child: &Element, is_row: bool) -> Size {
    if is_row {
        child.width
    } else {
        child.height
    }
}

fn cross_size(child: &Element, is_row: bool) -> Size {
    if is_row {
        child.height
    } else {
        child.width
    }
}

fn resolve_axis(element: &Element, size: Size, available: u16, is_width: bool) -> u16 {
    let base = match size {
        Size::Fixed(n) => n,
        Size::Fill | Size::Flex(_) => available,
        Size::Auto => estimate(element, is_width),
    };
    let base = match (is_width, element.min_width) {
        (true, Some(min)) => base.max(min),
        _ => base,
    };
    base.min(available)
}

/// Content-based size estimate for `Size::Auto`.
fn estimate(element: &Element, is_width: bool) -> u16 {
    let border = if element.style.border == Border::None {
        0
    } else {
        2
    };
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => {
            if is_width {
                text.lines().map(display_width).max().unwrap_or(0) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else {
                let along_main = (element.direction == Direction::Row) == is_width;
                if along_main {
                    let gaps = element.gap * (children.len() as u16 - 1);
                    children.iter().map(|c| estimate(c, is_width)).sum::<u16>() + gaps
                } else {
                    children
                        .iter()
                        .map(|c| estimate(c, is_width))
                        .max()
                        .unwrap_or(0)
                }
            }
        }
    };

    content + padding + border
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Edges;

    fn rect_of<'a>(map: &'a LayoutMap, id: &str) -> &'a Rect {
        map.get(id).expect("missing rect")
    }

    #[test]
    fn fixed_and_fill_split_a_row() {
        let root = Element::row()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fill)
            .child(Element::box_().id("side").width(Size::Fixed(20)))
            .child(Element::box_().id("main").width(Size::Fill));
        let map = layout(&root, Rect::from_size(80, 24));
        assert_eq!(*rect_of(&map, "side"), Rect::new(0, 0, 20, 0));
        assert_eq!(rect_of(&map, "main").x, 20);
        assert_eq!(rect_of(&map, "main").width, 60);
    }

    #[test]
    fn flex_weights_fill_the_axis_exactly() {
        let root = Element::row()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .child(Element::box_().id("a").width(Size::Flex(1)).height(Size::Fill))
            .child(Element::box_().id("b").width(Size::Flex(2)).height(Size::Fill));
        let map = layout(&root, Rect::from_size(31, 1));
        let a = rect_of(&map, "a").width;
        let b = rect_of(&map, "b").width;
        assert_eq!(a + b, 31);
        assert!(b > a);
    }

    #[test]
    fn column_stacks_text_heights() {
        let root = Element::col()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fill)
            .child(Element::text("one").id("t1").height(Size::Fixed(1)))
            .child(Element::text("two").id("t2").height(Size::Fixed(1)));
        let map = layout(&root, Rect::from_size(10, 5));
        assert_eq!(rect_of(&map, "t1").y, 0);
        assert_eq!(rect_of(&map, "t2").y, 1);
    }

    #[test]
    fn padding_insets_children() {
        let root = Element::col()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fill)
            .padding(Edges::all(2))
            .child(Element::box_().id("inner").width(Size::Fill).height(Size::Fill));
        let map = layout(&root, Rect::from_size(20, 10));
        assert_eq!(*rect_of(&map, "inner"), Rect::new(2, 2, 16, 6));
    }

    #[test]
    fn justify_center_offsets_content() {
        let root = Element::row()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .justify(Justify::Center)
            .child(Element::box_().id("mid").width(Size::Fixed(10)).height(Size::Fill));
        let map = layout(&root, Rect::from_size(30, 1));
        assert_eq!(rect_of(&map, "mid").x, 10);
    }

    #[test]
    fn gap_separates_children() {
        let root = Element::row()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .gap(3)
            .child(Element::box_().id("a").width(Size::Fixed(5)).height(Size::Fill))
            .child(Element::box_().id("b").width(Size::Fixed(5)).height(Size::Fill));
        let map = layout(&root, Rect::from_size(30, 1));
        assert_eq!(rect_of(&map, "b").x, 8);
    }
}
