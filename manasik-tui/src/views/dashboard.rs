use minbar::types::{Color, Size};
use minbar::widgets::{Badge, CellValue, Column, DataTable, StatCard};
use minbar::{Element, HandlerRegistry};
use tokio::sync::mpsc::UnboundedSender;

use crate::data::dashboard::{self, Arrival, DashboardData};
use crate::data::spawn_fetch;
use crate::msg::Msg;

use super::page;

#[derive(Default)]
pub struct DashboardView {
    pub data: Option<DashboardData>,
    pub loading: bool,
}

impl DashboardView {
    pub fn fetch(&mut self, tx: &UnboundedSender<Msg>) {
        self.loading = true;
        spawn_fetch(tx.clone(), dashboard::sample, Msg::DashboardLoaded);
    }

    pub fn element(
        &self,
        registry: &HandlerRegistry,
        tx: &UnboundedSender<Msg>,
        tick: usize,
    ) -> Element {
        let stats = self.stat_row();
        let arrivals = self.arrivals_table(registry, tx);
        page("Dashboard", self.loading, tick, vec![stats, arrivals])
    }

    fn stat_row(&self) -> Element {
        let (total, today, alerts, occupancy) = match &self.data {
            Some(d) => (
                format_count(d.pilgrims_total),
                format_count(d.arrivals_today),
                d.open_alerts.to_string(),
                format!("{:.0}%", d.camp_occupancy * 100.0),
            ),
            None => ("—".into(), "—".into(), "—".into(), "—".into()),
        };

        Element::row()
            .width(Size::Fill)
            .gap(1)
            .child(StatCard::new("Registered pilgrims", total).id("stat-total").build())
            .child(StatCard::new("Arrivals today", today).id("stat-arrivals").build())
            .child(
                StatCard::new("Open fraud alerts", alerts)
                    .id("stat-alerts")
                    .accent(Color::var("badge.danger"))
                    .build(),
            )
            .child(
                StatCard::new("Camp occupancy", occupancy)
                    .id("stat-occupancy")
                    .trend("Mina + Arafat")
                    .build(),
            )
    }

    fn arrivals_table(&self, registry: &HandlerRegistry, tx: &UnboundedSender<Msg>) -> Element {
        let columns = vec![
            Column::new("flight", "Flight", |a: &Arrival| {
                CellValue::Text(a.flight.clone())
            })
            .fixed(10),
            Column::new("origin", "Origin", |a: &Arrival| {
                CellValue::Text(a.origin.clone())
            })
            .flex(2),
            Column::new("eta", "ETA", |a: &Arrival| CellValue::Text(a.eta.clone())).fixed(7),
            Column::new("pilgrims", "Pilgrims", |a: &Arrival| {
                CellValue::Int(a.pilgrims)
            })
            .fixed(10),
            Column::new("status", "Status", |a: &Arrival| {
                CellValue::Text(a.status.label().into())
            })
            .renderer(|value, row: &Arrival| {
                Badge::new(value.to_text()).variant(row.status.badge()).build()
            })
            .fixed(12),
        ];

        let rows = self
            .data
            .as_ref()
            .map(|d| d.arrivals.clone())
            .unwrap_or_default();

        let tx = tx.clone();
        DataTable::new()
            .id("arrivals-table")
            .columns(columns)
            .rows(rows)
            .loading(self.loading)
            .empty_message("No arrivals scheduled today")
            .on_activate(move |row: Arrival| {
                let _ = tx.send(Msg::Inspect(row.summary()));
            })
            .build(registry)
    }
}

fn format_count(n: i64) -> String {
    if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 10_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_abbreviate_at_scale() {
        assert_eq!(format_count(1_245_300), "1.25M");
        assert_eq!(format_count(18_420), "18.4k");
        assert_eq!(format_count(4), "4");
    }
}
