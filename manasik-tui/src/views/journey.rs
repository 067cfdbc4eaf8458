use minbar::types::{Color, Style};
use minbar::widgets::{Badge, CellValue, Column, DataTable};
use minbar::{Element, HandlerRegistry};
use tokio::sync::mpsc::UnboundedSender;

use crate::data::pilgrims::{self, Pilgrim};
use crate::data::spawn_fetch;
use crate::msg::Msg;

use super::page;

#[derive(Default)]
pub struct JourneyView {
    pub rows: Vec<Pilgrim>,
    pub loading: bool,
}

impl JourneyView {
    pub fn fetch(&mut self, tx: &UnboundedSender<Msg>) {
        self.loading = true;
        spawn_fetch(tx.clone(), pilgrims::sample, Msg::PilgrimsLoaded);
    }

    pub fn element(
        &self,
        registry: &HandlerRegistry,
        tx: &UnboundedSender<Msg>,
        tick: usize,
    ) -> Element {
        let columns = vec![
            Column::new("name", "Pilgrim", |p: &Pilgrim| {
                CellValue::Text(p.name.clone())
            })
            .flex(2),
            Column::new("nationality", "Nationality", |p: &Pilgrim| {
                CellValue::Text(p.nationality.clone())
            }),
            Column::new("group", "Group", |p: &Pilgrim| {
                CellValue::Text(p.group.clone())
            })
            .fixed(7),
            Column::new("stage", "Stage", |p: &Pilgrim| {
                CellValue::Text(p.stage.label().into())
            })
            .renderer(|value, row: &Pilgrim| {
                Badge::new(value.to_text()).variant(row.stage.badge()).build()
            })
            .fixed(14),
            Column::new("arrival", "Arrived", |p: &Pilgrim| match p.arrival {
                Some(d) => CellValue::Date(d),
                None => CellValue::Missing,
            })
            .fixed(12),
            Column::new("visa", "Visa", |p: &Pilgrim| CellValue::Bool(p.visa_ok))
                .renderer(|value, _| {
                    if *value == CellValue::Bool(true) {
                        Element::text("✓").style(Style::new().foreground(Color::var("badge.success")))
                    } else {
                        Element::text("✗").style(Style::new().foreground(Color::var("badge.danger")))
                    }
                })
                .fixed(5),
        ];

        let tx = tx.clone();
        let table = DataTable::new()
            .id("journey-table")
            .columns(columns)
            .rows(self.rows.clone())
            .loading(self.loading)
            .empty_message("No pilgrims match the current filters")
            .on_activate(move |row: Pilgrim| {
                let _ = tx.send(Msg::Inspect(row.summary()));
            })
            .build(registry);

        page("Journey tracking", self.loading, tick, vec![table])
    }
}
