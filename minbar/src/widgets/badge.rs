use crate::element::Element;
use crate::types::{Color, Edges, Size, Style};

/// Semantic coloring for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeVariant {
    fn color(self) -> Color {
        match self {
            BadgeVariant::Neutral => Color::var("badge.neutral"),
            BadgeVariant::Success => Color::var("badge.success"),
            BadgeVariant::Warning => Color::var("badge.warning"),
            BadgeVariant::Danger => Color::var("badge.danger"),
            BadgeVariant::Info => Color::var("badge.info"),
        }
    }
}

/// A small inline status chip.
#[derive(Debug, Clone, Default)]
pub struct Badge {
    label: String,
    variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: BadgeVariant::default(),
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn build(self) -> Element {
        let color = self.variant.color();
        Element::text(self.label)
            .height(Size::Fixed(1))
            .padding(Edges::horizontal(1))
            .style(
                Style::new()
                    .foreground(color.clone())
                    .background(color.darken(0.35))
                    .bold(),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Content;

    #[test]
    fn badge_keeps_its_label() {
        let el = Badge::new("OVERDUE").variant(BadgeVariant::Danger).build();
        match el.content {
            Content::Text(t) => assert_eq!(t, "OVERDUE"),
            other => panic!("expected text content, got {other:?}"),
        }
        assert!(el.style.text_style.bold);
    }
}
