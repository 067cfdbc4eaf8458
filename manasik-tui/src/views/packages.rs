use minbar::widgets::{Badge, BadgeVariant, CellValue, Column, DataTable};
use minbar::{Element, HandlerRegistry};
use tokio::sync::mpsc::UnboundedSender;

use crate::data::packages::{self, HajjPackage};
use crate::data::spawn_fetch;
use crate::msg::Msg;

use super::{detail_panel, page};

#[derive(Default)]
pub struct PackagesView {
    pub rows: Vec<HajjPackage>,
    pub loading: bool,
    pub selected: Option<HajjPackage>,
}

impl PackagesView {
    pub fn fetch(&mut self, tx: &UnboundedSender<Msg>) {
        self.loading = true;
        self.selected = None;
        spawn_fetch(tx.clone(), packages::sample, Msg::PackagesLoaded);
    }

    pub fn element(
        &self,
        registry: &HandlerRegistry,
        tx: &UnboundedSender<Msg>,
        tick: usize,
    ) -> Element {
        let columns = vec![
            Column::new("name", "Package", |p: &HajjPackage| {
                CellValue::Text(p.name.clone())
            })
            .flex(2),
            Column::new("operator", "Operator", |p: &HajjPackage| {
                CellValue::Text(p.operator.clone())
            })
            .flex(2),
            Column::new("tier", "Tier", |p: &HajjPackage| {
                CellValue::Text(p.tier.label().into())
            })
            .renderer(|value, row: &HajjPackage| {
                Badge::new(value.to_text()).variant(row.tier.badge()).build()
            })
            .fixed(10),
            Column::new("price", "Price (SAR)", |p: &HajjPackage| {
                CellValue::Float(p.price_sar)
            })
            .fixed(13),
            Column::new("seats", "Seats", |p: &HajjPackage| {
                CellValue::Int(p.seats_left)
            })
            .renderer(|value, _| {
                if *value == CellValue::Int(0) {
                    Badge::new("SOLD OUT").variant(BadgeVariant::Danger).build()
                } else {
                    Element::text(value.to_text())
                }
            })
            .fixed(10),
            Column::new("rating", "Rating", |p: &HajjPackage| {
                CellValue::Float(p.rating)
            })
            .renderer(|value, _| {
                let text = match value {
                    CellValue::Float(r) => format!("{r:.1} ★"),
                    other => other.to_text(),
                };
                Element::text(text)
            })
            .fixed(8),
        ];

        let tx = tx.clone();
        let table = DataTable::new()
            .id("packages-table")
            .columns(columns)
            .rows(self.rows.clone())
            .loading(self.loading)
            .empty_message("No packages published")
            .on_activate(move |row: HajjPackage| {
                let _ = tx.send(Msg::PackageSelected(row));
            })
            .build(registry);

        let mut children = vec![table];
        if let Some(pkg) = &self.selected {
            children.push(detail_panel(
                "package-detail",
                &pkg.name,
                vec![
                    ("Operator", pkg.operator.clone()),
                    ("Tier", pkg.tier.label().into()),
                    ("Price", format!("SAR {:.0}", pkg.price_sar)),
                    ("Seats", pkg.seats_left.to_string()),
                    ("Rating", format!("{:.1} / 5", pkg.rating)),
                ],
            ));
        }

        page("Packages", self.loading, tick, children)
    }
}
