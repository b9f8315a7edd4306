use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::theme::Palette;

/// Apply a key to a single-line value with the cursor pinned at the end.
/// Returns `true` when the value changed.
pub(crate) fn apply_edit(value: &mut String, key_event: KeyEvent) -> bool {
    match (key_event.code, key_event.modifiers) {
        (KeyCode::Backspace, _) => value.pop().is_some(),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            let changed = !value.is_empty();
            value.clear();
            changed
        }
        (KeyCode::Char(c), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            value.push(c);
            true
        }
        _ => false,
    }
}

/// Pasted text lands on one line.
pub(crate) fn apply_paste(value: &mut String, pasted: &str) -> bool {
    let line: String = pasted.chars().filter(|c| !c.is_control()).collect();
    value.push_str(&line);
    !line.is_empty()
}

/// Bordered one-line input.
pub(crate) struct InputField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub masked: bool,
    pub palette: Palette,
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border(self.focused))
            .style(self.palette.base())
            .title(Span::styled(
                self.label,
                if self.focused {
                    self.palette.focused()
                } else {
                    self.palette.dim()
                },
            ));
        let line = if self.value.is_empty() {
            Line::from(Span::styled(self.placeholder, self.palette.dim()))
        } else if self.masked {
            Line::from("•".repeat(self.value.chars().count()))
        } else {
            Line::from(self.value)
        };
        Paragraph::new(line)
            .style(self.palette.base())
            .block(block)
            .render(area, buf);
    }
}
