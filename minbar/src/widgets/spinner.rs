//! Loading indicator: a short gradient bar bouncing along a track.
//! Stateless; the caller advances `frame` on its tick timer.

use crate::element::Element;
use crate::types::{Color, Style};

#[derive(Debug, Clone)]
pub struct Spinner {
    id: Option<String>,
    track_width: u16,
    snake_len: u16,
    frame: usize,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            id: None,
            track_width: 8,
            snake_len: 4,
            frame: 0,
        }
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn track_width(mut self, width: u16) -> Self {
        self.track_width = width;
        self
    }

    pub fn snake_len(mut self, len: u16) -> Self {
        self.snake_len = len;
        self
    }

    /// Current animation frame, advanced by the caller each tick.
    pub fn frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }

    pub fn build(self) -> Element {
        let track = self.track_width as i32;
        let snake = self.snake_len.max(1) as i32;

        // The head sweeps right then left over one period.
        let sweep = track + snake - 1;
        let period = (sweep * 2) as usize;
        let phase = (self.frame % period.max(1)) as i32;
        let head = if phase < sweep { phase } else { sweep * 2 - phase - 1 };

        let mut row = Element::row();
        if let Some(id) = self.id {
            row = row.id(id);
        }

        for i in 0..track {
            let offset = head - i;
            let child = if (0..snake).contains(&offset) {
                // Brightest at the head, fading toward the tail.
                let fade = 0.4 * offset as f32 / snake as f32;
                Element::text("■")
                    .style(Style::new().foreground(Color::var("accent").darken(fade)))
            } else {
                Element::text("⬝")
                    .style(Style::new().foreground(Color::var("accent").darken(0.5)))
            };
            row = row.child(child);
        }

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Content;

    fn glyphs(spinner: Spinner) -> String {
        let el = spinner.build();
        let Content::Children(children) = el.content else {
            panic!("expected children");
        };
        children
            .into_iter()
            .map(|c| match c.content {
                Content::Text(t) => t,
                other => panic!("expected text, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn snake_starts_at_the_left_edge() {
        let s = glyphs(Spinner::new().track_width(6).snake_len(2).frame(0));
        assert_eq!(s, "■⬝⬝⬝⬝⬝");
    }

    #[test]
    fn animation_wraps_around_its_period() {
        let a = glyphs(Spinner::new().track_width(6).snake_len(2).frame(1));
        let b = glyphs(Spinner::new().track_width(6).snake_len(2).frame(15));
        assert_eq!(a, b);
    }
}
