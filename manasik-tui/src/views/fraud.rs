use minbar::types::{Color, Size};
use minbar::widgets::{Badge, BadgeVariant, CellValue, Column, DataTable, StatCard};
use minbar::{Element, HandlerRegistry};
use tokio::sync::mpsc::UnboundedSender;

use crate::data::fraud::{self, FraudAlert, Severity};
use crate::data::spawn_fetch;
use crate::msg::Msg;

use super::{detail_panel, page};

#[derive(Default)]
pub struct FraudView {
    pub rows: Vec<FraudAlert>,
    pub loading: bool,
    pub selected: Option<FraudAlert>,
}

impl FraudView {
    pub fn fetch(&mut self, tx: &UnboundedSender<Msg>) {
        self.loading = true;
        self.selected = None;
        spawn_fetch(tx.clone(), fraud::sample, Msg::FraudAlertsLoaded);
    }

    pub fn element(
        &self,
        registry: &HandlerRegistry,
        tx: &UnboundedSender<Msg>,
        tick: usize,
    ) -> Element {
        let open = self.rows.iter().filter(|a| a.open).count();
        let critical = self
            .rows
            .iter()
            .filter(|a| a.open && a.severity == Severity::Critical)
            .count();

        let stats = Element::row()
            .width(Size::Fill)
            .gap(1)
            .child(
                StatCard::new("Open alerts", open.to_string())
                    .id("fraud-open")
                    .accent(Color::var("badge.warning"))
                    .build(),
            )
            .child(
                StatCard::new("Critical", critical.to_string())
                    .id("fraud-critical")
                    .accent(Color::var("badge.danger"))
                    .build(),
            );

        let columns = vec![
            Column::new("id", "Alert", |a: &FraudAlert| CellValue::Text(a.id.clone()))
                .fixed(9),
            Column::new("pattern", "Pattern", |a: &FraudAlert| {
                CellValue::Text(a.pattern.clone())
            })
            .flex(3),
            Column::new("account", "Account", |a: &FraudAlert| {
                CellValue::Text(a.account.clone())
            })
            .flex(1),
            Column::new("severity", "Severity", |a: &FraudAlert| {
                CellValue::Text(a.severity.label().into())
            })
            .renderer(|value, row: &FraudAlert| {
                Badge::new(value.to_text()).variant(row.severity.badge()).build()
            })
            .fixed(11),
            Column::new("score", "Score", |a: &FraudAlert| CellValue::Float(a.score))
                .fixed(7),
            Column::new("flagged", "Flagged", |a: &FraudAlert| {
                CellValue::Date(a.flagged_on)
            })
            .fixed(12),
            Column::new("state", "State", |a: &FraudAlert| CellValue::Bool(a.open))
                .renderer(|value, _| {
                    if *value == CellValue::Bool(true) {
                        Badge::new("OPEN").variant(BadgeVariant::Danger).build()
                    } else {
                        Badge::new("CLOSED").variant(BadgeVariant::Neutral).build()
                    }
                })
                .fixed(9),
        ];

        let tx = tx.clone();
        let table = DataTable::new()
            .id("fraud-table")
            .columns(columns)
            .rows(self.rows.clone())
            .loading(self.loading)
            .empty_message("No fraud alerts, all clear")
            .on_activate(move |row: FraudAlert| {
                let _ = tx.send(Msg::AlertSelected(row));
            })
            .build(registry);

        let mut children = vec![stats, table];
        if let Some(alert) = &self.selected {
            children.push(detail_panel(
                "fraud-detail",
                &format!("{} · {}", alert.id, alert.pattern),
                vec![
                    ("Account", alert.account.clone()),
                    ("Severity", alert.severity.label().into()),
                    ("Score", format!("{:.2}", alert.score)),
                    ("Flagged", alert.flagged_on.format("%Y-%m-%d").to_string()),
                    ("State", if alert.open { "Open".into() } else { "Closed".into() }),
                ],
            ));
        }

        page("Fraud watch", self.loading, tick, children)
    }
}
