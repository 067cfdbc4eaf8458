use minbar::types::{Color, Style};
use minbar::widgets::{Bar, BarChart, CellValue, Column, DataTable};
use minbar::{Element, HandlerRegistry};
use tokio::sync::mpsc::UnboundedSender;

use crate::data::sentiment::{self, TopicSentiment};
use crate::data::spawn_fetch;
use crate::msg::Msg;

use super::page;

#[derive(Default)]
pub struct SentimentView {
    pub rows: Vec<TopicSentiment>,
    pub loading: bool,
}

impl SentimentView {
    pub fn fetch(&mut self, tx: &UnboundedSender<Msg>) {
        self.loading = true;
        spawn_fetch(tx.clone(), sentiment::sample, Msg::SentimentLoaded);
    }

    pub fn element(
        &self,
        registry: &HandlerRegistry,
        tx: &UnboundedSender<Msg>,
        tick: usize,
    ) -> Element {
        let chart = BarChart::new()
            .id("sentiment-chart")
            .label_width(22)
            .show_values(false)
            .bars(
                self.rows
                    .iter()
                    .map(|t| {
                        let color = if t.positive >= 0.6 {
                            Color::var("badge.success")
                        } else if t.positive >= 0.45 {
                            Color::var("badge.warning")
                        } else {
                            Color::var("badge.danger")
                        };
                        Bar::new(t.topic.clone(), t.positive * 100.0).color(color)
                    })
                    .collect(),
            )
            .build();

        let columns = vec![
            Column::new("topic", "Topic", |t: &TopicSentiment| {
                CellValue::Text(t.topic.clone())
            })
            .flex(3),
            Column::new("mentions", "Mentions", |t: &TopicSentiment| {
                CellValue::Int(t.mentions)
            })
            .fixed(10),
            Column::new("positive", "Positive", |t: &TopicSentiment| {
                CellValue::Float(t.positive * 100.0)
            })
            .renderer(|value, _| {
                let text = match value {
                    CellValue::Float(pct) => format!("{pct:.0}%"),
                    other => other.to_text(),
                };
                Element::text(text)
            })
            .fixed(10),
            Column::new("delta", "WoW", |t: &TopicSentiment| {
                CellValue::Float(t.delta * 100.0)
            })
            .renderer(|value, row: &TopicSentiment| {
                let text = match value {
                    CellValue::Float(pts) => format!("{pts:+.0} pts"),
                    other => other.to_text(),
                };
                let color = if row.delta >= 0.0 {
                    Color::var("badge.success")
                } else {
                    Color::var("badge.danger")
                };
                Element::text(text).style(Style::new().foreground(color))
            })
            .fixed(9),
        ];

        let tx = tx.clone();
        let table = DataTable::new()
            .id("sentiment-table")
            .columns(columns)
            .rows(self.rows.clone())
            .loading(self.loading)
            .empty_message("No feedback collected yet")
            .on_activate(move |row: TopicSentiment| {
                let _ = tx.send(Msg::Inspect(row.summary()));
            })
            .build(registry);

        page("Sentiment", self.loading, tick, vec![chart, table])
    }
}
