use minbar::types::{Color, Style};
use minbar::widgets::{CellValue, Column, DataTable};
use minbar::{Element, HandlerRegistry};
use tokio::sync::mpsc::UnboundedSender;

use crate::data::documents::{self, TravelDocument};
use crate::data::spawn_fetch;
use crate::msg::Msg;

use super::page;

#[derive(Default)]
pub struct DocumentsView {
    pub rows: Vec<TravelDocument>,
    pub loading: bool,
}

impl DocumentsView {
    pub fn fetch(&mut self, tx: &UnboundedSender<Msg>) {
        self.loading = true;
        spawn_fetch(tx.clone(), documents::sample, Msg::DocumentsLoaded);
    }

    pub fn element(
        &self,
        registry: &HandlerRegistry,
        tx: &UnboundedSender<Msg>,
        tick: usize,
    ) -> Element {
        let columns = vec![
            Column::new("pilgrim", "Pilgrim", |d: &TravelDocument| {
                CellValue::Text(d.pilgrim.clone())
            })
            .flex(2),
            Column::new("kind", "Type", |d: &TravelDocument| {
                CellValue::Text(d.kind.label().into())
            })
            .fixed(13),
            Column::new("number", "Number", |d: &TravelDocument| {
                CellValue::Text(d.number.clone())
            })
            .flex(2),
            // Vaccination records carry no expiry, the cell stays blank.
            Column::new("expires", "Expires", |d: &TravelDocument| match d.expires {
                Some(date) => CellValue::Date(date),
                None => CellValue::Missing,
            })
            .fixed(12),
            Column::new("verified", "Verified", |d: &TravelDocument| {
                CellValue::Bool(d.verified)
            })
            .renderer(|value, _| {
                if *value == CellValue::Bool(true) {
                    Element::text("verified")
                        .style(Style::new().foreground(Color::var("badge.success")))
                } else {
                    Element::text("pending")
                        .style(Style::new().foreground(Color::var("badge.warning")).bold())
                }
            })
            .fixed(10),
        ];

        let tx = tx.clone();
        let table = DataTable::new()
            .id("documents-table")
            .columns(columns)
            .rows(self.rows.clone())
            .loading(self.loading)
            .empty_message("No documents uploaded yet")
            .on_activate(move |row: TravelDocument| {
                let _ = tx.send(Msg::Inspect(row.summary()));
            })
            .build(registry);

        page("Documents", self.loading, tick, vec![table])
    }
}
