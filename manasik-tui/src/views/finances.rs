use minbar::types::{Color, Size};
use minbar::widgets::{Badge, CellValue, Column, DataTable, StatCard};
use minbar::{Element, HandlerRegistry};
use tokio::sync::mpsc::UnboundedSender;

use crate::data::finance::{self, PaymentStatus, Transaction};
use crate::data::spawn_fetch;
use crate::msg::Msg;

use super::page;

#[derive(Default)]
pub struct FinancesView {
    pub rows: Vec<Transaction>,
    pub loading: bool,
}

impl FinancesView {
    pub fn fetch(&mut self, tx: &UnboundedSender<Msg>) {
        self.loading = true;
        spawn_fetch(tx.clone(), finance::sample, Msg::TransactionsLoaded);
    }

    fn total_with(&self, status: PaymentStatus) -> f64 {
        self.rows
            .iter()
            .filter(|t| t.status == status)
            .map(|t| t.amount_sar)
            .sum()
    }

    pub fn element(
        &self,
        registry: &HandlerRegistry,
        tx: &UnboundedSender<Msg>,
        tick: usize,
    ) -> Element {
        let stats = Element::row()
            .width(Size::Fill)
            .gap(1)
            .child(
                StatCard::new("Settled", format!("SAR {:.0}", self.total_with(PaymentStatus::Settled)))
                    .id("fin-settled")
                    .build(),
            )
            .child(
                StatCard::new("Pending", format!("SAR {:.0}", self.total_with(PaymentStatus::Pending)))
                    .id("fin-pending")
                    .accent(Color::var("badge.warning"))
                    .build(),
            )
            .child(
                StatCard::new("Transactions", self.rows.len().to_string())
                    .id("fin-count")
                    .build(),
            );

        let columns = vec![
            Column::new("ref", "Reference", |t: &Transaction| {
                CellValue::Text(t.reference.clone())
            })
            .fixed(11),
            Column::new("pilgrim", "Pilgrim", |t: &Transaction| {
                CellValue::Text(t.pilgrim.clone())
            })
            .flex(2),
            Column::new("desc", "Description", |t: &Transaction| {
                CellValue::Text(t.description.clone())
            })
            .flex(2),
            Column::new("amount", "Amount (SAR)", |t: &Transaction| {
                CellValue::Float(t.amount_sar)
            })
            .fixed(14),
            Column::new("date", "Date", |t: &Transaction| CellValue::Date(t.date)).fixed(12),
            Column::new("status", "Status", |t: &Transaction| {
                CellValue::Text(t.status.label().into())
            })
            .renderer(|value, row: &Transaction| {
                Badge::new(value.to_text()).variant(row.status.badge()).build()
            })
            .fixed(11),
        ];

        let tx = tx.clone();
        let table = DataTable::new()
            .id("finance-table")
            .columns(columns)
            .rows(self.rows.clone())
            .loading(self.loading)
            .empty_message("No transactions in this period")
            .on_activate(move |row: Transaction| {
                let _ = tx.send(Msg::Inspect(row.summary()));
            })
            .build(registry);

        page("Finances", self.loading, tick, vec![stats, table])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_by_status() {
        let view = FinancesView {
            rows: finance::sample(),
            loading: false,
        };
        let settled = view.total_with(PaymentStatus::Settled);
        let pending = view.total_with(PaymentStatus::Pending);
        assert!(settled > 0.0);
        assert!(pending > 0.0);
        assert!(settled > pending);
    }
}
