use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::theme::Palette;

/// Bottom line listing the keys the current screen reacts to, optionally
/// followed by a transient status message.
#[derive(Clone, Debug, Default)]
pub(crate) struct HintBar {
    hints: Vec<(&'static str, &'static str)>,
    status: Option<String>,
}

impl HintBar {
    pub(crate) fn new(hints: &[(&'static str, &'static str)]) -> Self {
        Self {
            hints: hints.to_vec(),
            status: None,
        }
    }

    pub(crate) fn with_status(mut self, status: Option<String>) -> Self {
        self.status = status;
        self
    }

    fn line(&self, palette: Palette) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (idx, (key, action)) in self.hints.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" · ", palette.dim()));
            }
            spans.push(Span::styled(*key, palette.focused()));
            spans.push(Span::styled(format!(" {action}"), palette.dim()));
        }
        if let Some(status) = &self.status {
            spans.push(Span::styled("  ·  ", palette.dim()));
            spans.push(Span::styled(status.clone(), palette.base()));
        }
        Line::from(spans)
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer, palette: Palette) {
        if area.height == 0 {
            return;
        }
        Paragraph::new(self.line(palette))
            .style(palette.base())
            .render(Rect::new(area.x, area.bottom() - 1, area.width, 1), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_hints_and_status_on_last_row() {
        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);
        HintBar::new(&[("F1", "home"), ("^C", "quit")])
            .with_status(Some("saved".to_string()))
            .render(area, &mut buf, Palette::LIGHT);

        let last: String = (0..40).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(last.trim_end(), "F1 home · ^C quit  ·  saved");
        let first: String = (0..40).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(first.trim(), "");
    }
}
