//! Sidebar navigation between the portal's surfaces.

use std::sync::Arc;

use minbar::types::{Color, Edges, Size, Style};
use minbar::{Element, HandlerRegistry};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

use crate::msg::Msg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Dashboard,
    Journey,
    Finances,
    Fraud,
    Documents,
    Resources,
    Sentiment,
    Packages,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Dashboard,
        Route::Journey,
        Route::Finances,
        Route::Fraud,
        Route::Documents,
        Route::Resources,
        Route::Sentiment,
        Route::Packages,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Journey => "Journey tracking",
            Route::Finances => "Finances",
            Route::Fraud => "Fraud watch",
            Route::Documents => "Documents",
            Route::Resources => "Resources",
            Route::Sentiment => "Sentiment",
            Route::Packages => "Packages",
        }
    }

    pub fn element_id(self) -> String {
        format!("nav-{}", self.slug())
    }

    fn slug(self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::Journey => "journey",
            Route::Finances => "finances",
            Route::Fraud => "fraud",
            Route::Documents => "documents",
            Route::Resources => "resources",
            Route::Sentiment => "sentiment",
            Route::Packages => "packages",
        }
    }

    /// Route bound to a number key, 1-based.
    pub fn from_digit(digit: char) -> Option<Route> {
        let index = digit.to_digit(10)? as usize;
        Route::ALL.get(index.checked_sub(1)?).copied()
    }

    pub fn next(self) -> Route {
        let i = Route::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Route::ALL[(i + 1) % Route::ALL.len()]
    }

    pub fn previous(self) -> Route {
        let i = Route::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Route::ALL[(i + Route::ALL.len() - 1) % Route::ALL.len()]
    }
}

/// Sidebar sections: the pilgrim-facing surfaces first, then the
/// administrator console.
const GROUPS: [(&str, &[Route]); 2] = [
    (
        "Pilgrim Portal",
        &[Route::Dashboard, Route::Journey, Route::Finances],
    ),
    (
        "Admin Console",
        &[
            Route::Fraud,
            Route::Documents,
            Route::Resources,
            Route::Sentiment,
            Route::Packages,
        ],
    ),
];

/// Build the sidebar and register click handlers for each entry.
pub fn sidebar(active: Route, registry: &HandlerRegistry, tx: &UnboundedSender<Msg>) -> Element {
    let mut column = Element::col()
        .id("sidebar")
        .width(Size::Fixed(22))
        .height(Size::Fill)
        .padding(Edges::symmetric(1, 0))
        .style(Style::new().background(Color::var("sidebar.bg")))
        .child(
            Element::text(" Manasik Portal")
                .height(Size::Fixed(2))
                .style(Style::new().foreground(Color::var("accent")).bold()),
        );

    let mut shortcut = 0usize;
    for (group, routes) in GROUPS {
        if shortcut > 0 {
            column = column.child(Element::box_().height(Size::Fixed(1)));
        }
        column = column.child(
            Element::text(format!(" {group}"))
                .height(Size::Fixed(1))
                .style(Style::new().foreground(Color::var("text.muted")).dim()),
        );
        for route in routes.iter().copied() {
            shortcut += 1;
            column = column.child(entry(route, shortcut, active, registry, tx));
        }
    }

    column
}

fn entry(
    route: Route,
    shortcut: usize,
    active: Route,
    registry: &HandlerRegistry,
    tx: &UnboundedSender<Msg>,
) -> Element {
    let id = route.element_id();
    let label = format!(" {} {}", shortcut, route.title());

    let mut item = Element::text(label)
        .id(&id)
        .width(Size::Fill)
        .height(Size::Fixed(1))
        .clickable(true);
    if route == active {
        item = item.style(
            Style::new()
                .background(Color::var("sidebar.active_bg"))
                .bold(),
        );
    } else {
        item = item.style(Style::new().foreground(Color::var("text.muted")));
    }

    let tx = tx.clone();
    registry.register(
        &id,
        "on_activate",
        Arc::new(move || {
            let _ = tx.send(Msg::Navigate(route));
        }),
    );
    item
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_routes() {
        assert_eq!(Route::from_digit('1'), Some(Route::Dashboard));
        assert_eq!(Route::from_digit('8'), Some(Route::Packages));
        assert_eq!(Route::from_digit('9'), None);
        assert_eq!(Route::from_digit('x'), None);
    }

    #[test]
    fn groups_cover_every_route_in_shortcut_order() {
        let flattened: Vec<Route> = GROUPS
            .iter()
            .flat_map(|(_, routes)| routes.iter().copied())
            .collect();
        assert_eq!(flattened, Route::ALL);
    }

    #[test]
    fn cycling_wraps() {
        assert_eq!(Route::Packages.next(), Route::Dashboard);
        assert_eq!(Route::Dashboard.previous(), Route::Packages);
    }
}
