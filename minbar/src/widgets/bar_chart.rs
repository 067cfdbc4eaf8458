use crate::element::Element;
use crate::types::{Color, Size, Style};

/// One labelled bar.
#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: Option<Color>,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// A horizontal bar chart. Bars are scaled against the largest value so
/// the longest bar always spans the full track.
#[derive(Debug, Clone)]
pub struct BarChart {
    id: Option<String>,
    bars: Vec<Bar>,
    label_width: u16,
    track_width: u16,
    show_values: bool,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            id: None,
            bars: Vec::new(),
            label_width: 12,
            track_width: 24,
            show_values: true,
        }
    }
}

impl BarChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn bars(mut self, bars: Vec<Bar>) -> Self {
        self.bars = bars;
        self
    }

    pub fn bar(mut self, bar: Bar) -> Self {
        self.bars.push(bar);
        self
    }

    pub fn label_width(mut self, width: u16) -> Self {
        self.label_width = width;
        self
    }

    pub fn track_width(mut self, width: u16) -> Self {
        self.track_width = width;
        self
    }

    pub fn show_values(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }

    pub fn build(self) -> Element {
        let max = self
            .bars
            .iter()
            .map(|b| b.value)
            .fold(0.0_f64, f64::max);

        let mut chart = Element::col().gap(0);
        if let Some(id) = &self.id {
            chart = chart.id(id);
        }

        for (i, bar) in self.bars.iter().enumerate() {
            let filled = if max > 0.0 {
                ((bar.value / max) * f64::from(self.track_width)).round() as u16
            } else {
                0
            };
            let filled = filled.min(self.track_width);
            let color = bar.color.clone().unwrap_or_else(|| Color::var("accent"));

            let track: String = "█".repeat(filled as usize)
                + &"░".repeat((self.track_width - filled) as usize);

            let mut row = Element::row()
                .height(Size::Fixed(1))
                .gap(1)
                .child(
                    Element::text(&bar.label)
                        .width(Size::Fixed(self.label_width))
                        .style(Style::new().foreground(Color::var("text.muted"))),
                )
                .child(Element::text(track).style(Style::new().foreground(color)));
            if let Some(id) = &self.id {
                row = row.id(format!("{id}-bar-{i}"));
            }

            if self.show_values {
                row = row.child(Element::text(format_value(bar.value)));
            }
            chart = chart.child(row);
        }

        chart
    }
}

fn format_value(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{find_element, Content};

    #[test]
    fn longest_bar_fills_the_track() {
        let chart = BarChart::new()
            .id("c")
            .track_width(10)
            .bar(Bar::new("Mina", 50.0))
            .bar(Bar::new("Arafat", 100.0))
            .build();

        let full = find_element(&chart, "c-bar-1").unwrap();
        let Content::Children(children) = &full.content else {
            panic!("expected children");
        };
        let Content::Text(track) = &children[1].content else {
            panic!("expected track text");
        };
        assert_eq!(track.chars().filter(|&c| c == '█').count(), 10);
    }

    #[test]
    fn zero_max_draws_empty_tracks() {
        let chart = BarChart::new()
            .id("c")
            .track_width(4)
            .bar(Bar::new("none", 0.0))
            .build();
        let row = find_element(&chart, "c-bar-0").unwrap();
        let Content::Children(children) = &row.content else {
            panic!("expected children");
        };
        let Content::Text(track) = &children[1].content else {
            panic!("expected track text");
        };
        assert_eq!(track, "░░░░");
    }

    #[test]
    fn values_abbreviate() {
        assert_eq!(format_value(2_500_000.0), "2.5M");
        assert_eq!(format_value(1_200.0), "1.2k");
        assert_eq!(format_value(42.0), "42");
    }
}
