use crate::element::Element;
use crate::types::{Border, Color, Edges, Size, Style, TextAlign};

/// A bordered card with a headline figure and a caption underneath.
#[derive(Debug, Clone, Default)]
pub struct StatCard {
    id: Option<String>,
    label: String,
    value: String,
    trend: Option<String>,
    accent: Option<Color>,
}

impl StatCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            value: value.into(),
            trend: None,
            accent: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// A short trend line shown next to the value, e.g. "+12% this week".
    pub fn trend(mut self, trend: impl Into<String>) -> Self {
        self.trend = Some(trend.into());
        self
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn build(self) -> Element {
        let accent = self.accent.unwrap_or_else(|| Color::var("accent"));

        let mut value_row = Element::row().gap(1).child(
            Element::text(&self.value)
                .style(Style::new().foreground(accent).bold()),
        );
        if let Some(trend) = &self.trend {
            value_row = value_row.child(
                Element::text(trend).style(Style::new().foreground(Color::var("text.muted")).dim()),
            );
        }

        let mut card = Element::col()
            .width(Size::Fill)
            .padding(Edges::symmetric(0, 1))
            .gap(0)
            .style(
                Style::new()
                    .border(Border::Rounded)
                    .background(Color::var("surface"))
                    .foreground(Color::var("border")),
            )
            .child(value_row)
            .child(
                Element::text(&self.label)
                    .text_align(TextAlign::Left)
                    .style(Style::new().foreground(Color::var("text.muted"))),
            );
        if let Some(id) = self.id {
            card = card.id(id);
        }
        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::find_element;

    #[test]
    fn card_carries_value_and_label() {
        let card = StatCard::new("Registered pilgrims", "1,245,300")
            .id("stat-pilgrims")
            .trend("+4% this week")
            .build();
        assert!(find_element(&card, "stat-pilgrims").is_some());
        assert_eq!(card.style.border, Border::Rounded);
    }
}
