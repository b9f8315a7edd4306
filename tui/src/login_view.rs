use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
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

const HINTS: &[(&str, &str)] = &[("Tab", "next field"), ("Enter", "sign in")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginFocus {
    Username,
    Password,
}

/// Sign-in form. Any input is accepted.
pub(crate) struct LoginView {
    username: String,
    password: String,
    focus: LoginFocus,
    app_event_tx: AppEventSender,
}

impl LoginView {
    pub(crate) fn new(app_event_tx: AppEventSender) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focus: LoginFocus::Username,
            app_event_tx,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            LoginFocus::Username => &mut self.username,
            LoginFocus::Password => &mut self.password,
        }
    }

    pub(crate) fn handle_key(&mut self, key_event: KeyEvent) {
        match (self.focus, key_event.code) {
            (_, KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down)
            | (LoginFocus::Username, KeyCode::Enter) => {
                self.focus = match self.focus {
                    LoginFocus::Username => LoginFocus::Password,
                    LoginFocus::Password => LoginFocus::Username,
                };
            }
            (LoginFocus::Password, KeyCode::Enter) => {
                self.app_event_tx.send(AppEvent::SignIn {
                    username: std::mem::take(&mut self.username),
                    password: std::mem::take(&mut self.password),
                });
            }
            _ => {
                apply_edit(self.field_mut(), key_event);
            }
        }
    }

    pub(crate) fn handle_paste(&mut self, pasted: &str) {
        apply_paste(self.field_mut(), pasted);
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer, palette: Palette) {
        let [title_area, username_area, password_area, _, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(Span::styled("Sign in", palette.focused()))
            .style(palette.base())
            .render(title_area, buf);
        InputField {
            label: "Username",
            value: &self.username,
            placeholder: "",
            focused: self.focus == LoginFocus::Username,
            masked: false,
            palette,
        }
        .render(username_area, buf);
        InputField {
            label: "Password",
            value: &self.password,
            placeholder: "",
            focused: self.focus == LoginFocus::Password,
            masked: true,
            palette,
        }
        .render(password_area, buf);
        HintBar::new(HINTS).render(hint_area, buf, palette);
    }
}
