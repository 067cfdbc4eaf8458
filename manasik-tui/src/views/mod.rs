//! One module per portal surface. Each view owns its rows and loading
//! flag, knows how to request fresh data, and builds its element tree
//! from scratch every frame.

pub mod dashboard;
pub mod documents;
pub mod finances;
pub mod fraud;
pub mod journey;
pub mod packages;
pub mod resources;
pub mod sentiment;

use minbar::types::{Border, Color, Edges, Size, Style};
use minbar::widgets::Spinner;
use minbar::Element;

/// Standard page chrome: a title row with a spinner while loading, then
/// the view's content.
pub fn page(title: &str, loading: bool, tick: usize, children: Vec<Element>) -> Element {
    let mut header = Element::row()
        .height(Size::Fixed(2))
        .gap(2)
        .child(
            Element::text(title)
                .height(Size::Fixed(1))
                .style(Style::new().foreground(Color::var("foreground")).bold()),
        );
    if loading {
        header = header.child(Spinner::new().frame(tick).build());
    }

    Element::col()
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(1))
        .gap(1)
        .style(Style::new().background(Color::var("background")))
        .child(header)
        .children(children)
}

/// Bordered panel listing label/value pairs for an activated row.
pub fn detail_panel(id: &str, title: &str, fields: Vec<(&str, String)>) -> Element {
    let mut panel = Element::col()
        .id(id)
        .width(Size::Fill)
        .padding(Edges::symmetric(0, 1))
        .style(
            Style::new()
                .border(Border::Rounded)
                .background(Color::var("surface"))
                .foreground(Color::var("border")),
        )
        .child(Element::text(title).style(Style::new().foreground(Color::var("accent")).bold()));

    for (label, value) in fields {
        panel = panel.child(
            Element::row()
                .gap(1)
                .child(
                    Element::text(format!("{label}:"))
                        .width(Size::Fixed(10))
                        .style(Style::new().foreground(Color::var("text.muted"))),
                )
                .child(Element::text(value)),
        );
    }

    panel
}
