use minbar::types::{Color, Style};
use minbar::widgets::{Bar, BarChart, CellValue, Column, DataTable};
use minbar::{Element, HandlerRegistry};
use tokio::sync::mpsc::UnboundedSender;

use crate::data::resources::{self, Resource};
use crate::data::spawn_fetch;
use crate::msg::Msg;

use super::page;

#[derive(Default)]
pub struct ResourcesView {
    pub rows: Vec<Resource>,
    pub loading: bool,
}

fn utilization_color(share: f64) -> Color {
    if share >= 0.95 {
        Color::var("badge.danger")
    } else if share >= 0.8 {
        Color::var("badge.warning")
    } else {
        Color::var("badge.success")
    }
}

impl ResourcesView {
    pub fn fetch(&mut self, tx: &UnboundedSender<Msg>) {
        self.loading = true;
        spawn_fetch(tx.clone(), resources::sample, Msg::ResourcesLoaded);
    }

    pub fn element(
        &self,
        registry: &HandlerRegistry,
        tx: &UnboundedSender<Msg>,
        tick: usize,
    ) -> Element {
        let chart = BarChart::new()
            .id("resources-chart")
            .label_width(18)
            .bars(
                self.rows
                    .iter()
                    .map(|r| {
                        Bar::new(
                            format!("{} {}", r.site, r.kind.label()),
                            r.utilization() * 100.0,
                        )
                        .color(utilization_color(r.utilization()))
                    })
                    .collect(),
            )
            .build();

        let columns = vec![
            Column::new("site", "Site", |r: &Resource| CellValue::Text(r.site.clone()))
                .flex(2),
            Column::new("kind", "Resource", |r: &Resource| {
                CellValue::Text(r.kind.label().into())
            })
            .fixed(11),
            Column::new("capacity", "Capacity", |r: &Resource| {
                CellValue::Int(r.capacity)
            })
            .fixed(10),
            Column::new("in_use", "In use", |r: &Resource| CellValue::Int(r.in_use))
                .fixed(10),
            Column::new("util", "Utilization", |r: &Resource| {
                CellValue::Float(r.utilization() * 100.0)
            })
            .renderer(|value, row: &Resource| {
                let text = match value {
                    CellValue::Float(pct) => format!("{pct:.0}%"),
                    other => other.to_text(),
                };
                Element::text(text)
                    .style(Style::new().foreground(utilization_color(row.utilization())))
            })
            .fixed(12),
        ];

        let tx = tx.clone();
        let table = DataTable::new()
            .id("resources-table")
            .columns(columns)
            .rows(self.rows.clone())
            .loading(self.loading)
            .empty_message("No sites reporting")
            .on_activate(move |row: Resource| {
                let _ = tx.send(Msg::Inspect(row.summary()));
            })
            .build(registry);

        page("Resources", self.loading, tick, vec![chart, table])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_bands_follow_pressure() {
        assert_eq!(utilization_color(0.5), Color::var("badge.success"));
        assert_eq!(utilization_color(0.85), Color::var("badge.warning"));
        assert_eq!(utilization_color(0.99), Color::var("badge.danger"));
    }
}
