use admin_core::DarkModeSetting;
use admin_core::SettingsForm;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::hint_bar::HintBar;
use crate::text_input::InputField;
use crate::text_input::apply_edit;
use crate::text_input::apply_paste;
use crate::theme::Palette;

const HINTS: &[(&str, &str)] = &[
    ("Tab", "next"),
    ("Space", "toggle dark mode"),
    ("Enter", "save"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFocus {
    Name,
    Email,
    DarkMode,
    Save,
}

impl SettingsFocus {
    fn next(self) -> Self {
        match self {
            SettingsFocus::Name => SettingsFocus::Email,
            SettingsFocus::Email => SettingsFocus::DarkMode,
            SettingsFocus::DarkMode => SettingsFocus::Save,
            SettingsFocus::Save => SettingsFocus::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            SettingsFocus::Name => SettingsFocus::Save,
            SettingsFocus::Email => SettingsFocus::Name,
            SettingsFocus::DarkMode => SettingsFocus::Email,
            SettingsFocus::Save => SettingsFocus::DarkMode,
        }
    }
}

pub(crate) struct SettingsView {
    form: SettingsForm,
    dark_mode: DarkModeSetting,
    focus: SettingsFocus,
    status: Option<String>,
    app_event_tx: AppEventSender,
}

impl SettingsView {
    pub(crate) fn new(
        form: SettingsForm,
        dark_mode: DarkModeSetting,
        app_event_tx: AppEventSender,
    ) -> Self {
        Self {
            form,
            dark_mode,
            focus: SettingsFocus::Name,
            status: None,
            app_event_tx,
        }
    }

    #[cfg(test)]
    pub(crate) fn form(&self) -> &SettingsForm {
        &self.form
    }

    pub(crate) fn handle_key(&mut self, key_event: KeyEvent) {
        match (self.focus, key_event.code) {
            (_, KeyCode::Tab) | (SettingsFocus::Name | SettingsFocus::Email, KeyCode::Down) => {
                self.focus = self.focus.next();
            }
            (_, KeyCode::BackTab) | (_, KeyCode::Up) => self.focus = self.focus.prev(),
            (SettingsFocus::Name, _) => {
                apply_edit(&mut self.form.name, key_event);
            }
            (SettingsFocus::Email, _) => {
                apply_edit(&mut self.form.email, key_event);
            }
            (SettingsFocus::DarkMode, KeyCode::Char(' ') | KeyCode::Enter) => self.toggle_dark_mode(),
            (SettingsFocus::Save, KeyCode::Enter) => {
                self.form.submit();
                self.status = Some("Saved".to_string());
            }
            _ => {}
        }
    }

    pub(crate) fn handle_paste(&mut self, pasted: &str) {
        match self.focus {
            SettingsFocus::Name => {
                apply_paste(&mut self.form.name, pasted);
            }
            SettingsFocus::Email => {
                apply_paste(&mut self.form.email, pasted);
            }
            SettingsFocus::DarkMode | SettingsFocus::Save => {}
        }
    }

    fn toggle_dark_mode(&mut self) {
        let persisted = self.form.toggle_dark_mode(&self.dark_mode);
        self.status = persisted
            .is_err()
            .then(|| "Could not save preference".to_string());
        self.app_event_tx
            .send(AppEvent::DarkModeChanged(self.form.dark_mode));
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer, palette: Palette) {
        let [title_area, name_area, email_area, toggle_area, save_area, _, hint_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area);

        Paragraph::new(Span::styled("Settings", palette.focused()))
            .style(palette.base())
            .render(title_area, buf);

        InputField {
            label: "Name",
            value: &self.form.name,
            placeholder: "",
            focused: self.focus == SettingsFocus::Name,
            masked: false,
            palette,
        }
        .render(name_area, buf);
        InputField {
            label: "Email",
            value: &self.form.email,
            placeholder: "",
            focused: self.focus == SettingsFocus::Email,
            masked: false,
            palette,
        }
        .render(email_area, buf);

        let checkbox = if self.form.dark_mode { "[x]" } else { "[ ]" };
        let toggle_style = if self.focus == SettingsFocus::DarkMode {
            palette.focused()
        } else {
            palette.base()
        };
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {checkbox} "), toggle_style),
            Span::styled("Dark mode", toggle_style),
        ]))
        .style(palette.base())
        .render(toggle_area, buf);

        let save_style = if self.focus == SettingsFocus::Save {
            palette.focused().add_modifier(Modifier::REVERSED)
        } else {
            palette.base()
        };
        Paragraph::new(Span::styled(" Save ", save_style))
            .style(palette.base())
            .render(save_area, buf);

        HintBar::new(HINTS)
            .with_status(self.status.clone())
            .render(hint_area, buf, palette);
    }
}
