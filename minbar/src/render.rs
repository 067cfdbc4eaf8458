use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutMap, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Border, Color, ColorContext, Rgb};

/// Paint an element tree into `buf` using the rects in `layout`.
/// Theme variables and derived colors are resolved through `cx` at paint
/// time, so a theme swap takes effect on the next frame.
pub fn render_to_buffer(root: &Element, layout: &LayoutMap, cx: &ColorContext, buf: &mut Buffer) {
    render_element(root, layout, cx, buf);
}

fn render_element(element: &Element, layout: &LayoutMap, cx: &ColorContext, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };
    if rect.is_empty() {
        return;
    }

    if let Some(bg) = &element.style.background {
        fill_rect(buf, *rect, cx.resolve(bg));
    }

    render_border(element, *rect, cx, buf);

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, *rect, cx, buf),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, cx, buf);
            }
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get(x, y) {
                let mut cell = *cell;
                cell.bg = bg;
                buf.set(x, y, cell);
            }
        }
    }
}

fn foreground(element: &Element, cx: &ColorContext) -> Rgb {
    match &element.style.foreground {
        Some(color) => cx.resolve(color),
        None => cx.resolve(&Color::var("foreground")),
    }
}

fn render_text(text: &str, element: &Element, rect: Rect, cx: &ColorContext, buf: &mut Buffer) {
    let fg = foreground(element, cx);
    let explicit_bg = element.style.background.as_ref().map(|c| cx.resolve(c));

    let border = if element.style.border == Border::None {
        0
    } else {
        1
    };
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );
    if inner.is_empty() {
        return;
    }

    for (row, line) in text.lines().enumerate() {
        let y = inner.y + row as u16;
        if y >= inner.bottom() {
            break;
        }

        let line = truncate_to_width(line, inner.width as usize);
        let offset = align_offset(display_width(&line), inner.width as usize, element.text_align);
        let mut x = inner.x + offset as u16;

        for ch in line.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if x + w > inner.right() {
                break;
            }

            let bg = explicit_bg
                .unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or_default());
            buf.set(
                x,
                y,
                Cell::new(ch)
                    .with_fg(fg)
                    .with_bg(bg)
                    .with_style(element.style.text_style),
            );
            if w == 2 {
                let mut cont = Cell::new(' ').with_fg(fg).with_bg(bg);
                cont.wide_continuation = true;
                buf.set(x + 1, y, cont);
            }
            x += w;
        }
    }
}

fn render_border(element: &Element, rect: Rect, cx: &ColorContext, buf: &mut Buffer) {
    let Some((tl, tr, bl, br, h, v)) = element.style.border.glyphs() else {
        return;
    };
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = foreground(element, cx);

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }
    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

// Keeps the cell background so borders sit on the box fill.
fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get(x, y) {
        let mut cell = *cell;
        cell.char = ch;
        cell.fg = fg;
        cell.wide_continuation = false;
        buf.set(x, y, cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;
    use crate::types::{DefaultTheme, Size, Style, TextAlign};

    fn paint(root: &Element, width: u16, height: u16) -> Buffer {
        let theme = DefaultTheme::new();
        let cx = ColorContext::new(&theme);
        let map = layout(root, Rect::from_size(width, height));
        let mut buf = Buffer::new(width, height);
        render_to_buffer(root, &map, &cx, &mut buf);
        buf
    }

    fn line(buf: &Buffer, y: u16) -> String {
        (0..buf.width())
            .filter_map(|x| buf.get(x, y))
            .filter(|c| !c.wide_continuation)
            .map(|c| c.char)
            .collect()
    }

    #[test]
    fn text_is_painted_at_origin() {
        let root = Element::text("salam")
            .id("t")
            .width(Size::Fill)
            .height(Size::Fixed(1));
        let buf = paint(&root, 10, 1);
        assert_eq!(line(&buf, 0), "salam     ");
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let root = Element::text("abcdefghij")
            .id("t")
            .width(Size::Fill)
            .height(Size::Fixed(1));
        let buf = paint(&root, 6, 1);
        assert_eq!(line(&buf, 0), "abcde…");
    }

    #[test]
    fn centered_text_is_offset() {
        let root = Element::text("hi")
            .id("t")
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .text_align(TextAlign::Center);
        let buf = paint(&root, 8, 1);
        assert_eq!(line(&buf, 0), "   hi   ");
    }

    #[test]
    fn border_draws_corners() {
        let root = Element::box_()
            .id("b")
            .width(Size::Fixed(4))
            .height(Size::Fixed(3))
            .style(Style::new().border(Border::Single));
        let buf = paint(&root, 4, 3);
        assert_eq!(buf.get(0, 0).unwrap().char, '┌');
        assert_eq!(buf.get(3, 0).unwrap().char, '┐');
        assert_eq!(buf.get(0, 2).unwrap().char, '└');
        assert_eq!(buf.get(3, 2).unwrap().char, '┘');
    }

    #[test]
    fn background_fills_the_rect() {
        let root = Element::box_()
            .id("b")
            .width(Size::Fixed(2))
            .height(Size::Fixed(2))
            .style(Style::new().background(Color::rgb(9, 9, 9)));
        let buf = paint(&root, 4, 4);
        assert_eq!(buf.get(1, 1).unwrap().bg, Rgb::new(9, 9, 9));
        assert_eq!(buf.get(3, 3).unwrap().bg, Rgb::default());
    }
}
