use admin_core::FetchApplied;
use admin_core::FetchCompletion;
use admin_core::IntakeField;
use admin_core::IntakeOutcome;
use admin_core::LoadState;
use admin_core::UserRecord;
use admin_core::UsersPage;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use tracing::debug;
use tracing::info;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::hint_bar::HintBar;
use crate::render::card_list::CardListState;
use crate::render::card_list::CardSource;
use crate::text_input::InputField;
use crate::text_input::apply_edit;
use crate::text_input::apply_paste;
use crate::theme::Palette;

const CARD_HEIGHT: u16 = 5;
const SEARCH_HINTS: &[(&str, &str)] = &[("Tab", "next field"), ("^S", "sort"), ("↓", "cards")];
const INTAKE_HINTS: &[(&str, &str)] = &[("Tab", "next field"), ("Enter", "add user"), ("^S", "sort")];
const CARD_HINTS: &[(&str, &str)] = &[
    ("↑/↓", "select"),
    ("PgUp/PgDn", "page"),
    ("Enter", "edit in settings"),
    ("^S", "sort"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UsersFocus {
    Search,
    Intake(IntakeField),
    Cards,
}

impl UsersFocus {
    const ORDER: [UsersFocus; 5] = [
        UsersFocus::Search,
        UsersFocus::Intake(IntakeField::Name),
        UsersFocus::Intake(IntakeField::Email),
        UsersFocus::Intake(IntakeField::Company),
        UsersFocus::Cards,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or_default()
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// The users screen: search, sort, intake and the record cards for one
/// mount of [`UsersPage`].
pub(crate) struct UsersView {
    page: UsersPage,
    visible: Vec<UserRecord>,
    focus: UsersFocus,
    cards: CardListState,
    list_area: Rect,
    intake_hint: Option<String>,
    app_event_tx: AppEventSender,
}

impl UsersView {
    pub(crate) fn new(page: UsersPage, app_event_tx: AppEventSender) -> Self {
        let mut view = Self {
            page,
            visible: Vec::new(),
            focus: UsersFocus::Search,
            cards: CardListState::default(),
            list_area: Rect::default(),
            intake_hint: None,
            app_event_tx,
        };
        view.refresh();
        view
    }

    #[cfg(test)]
    pub(crate) fn page(&self) -> &UsersPage {
        &self.page
    }

    pub(crate) fn apply_fetch(&mut self, completion: FetchCompletion) -> FetchApplied {
        let applied = self.page.apply_fetch(completion);
        debug!(?applied, "directory completion delivered to users view");
        self.refresh();
        applied
    }

    fn refresh(&mut self) {
        self.visible = self.page.visible();
        let cards = RecordCards {
            records: &self.visible,
            palette: Palette::LIGHT,
        };
        self.cards.clamp(&cards);
    }

    pub(crate) fn handle_key(&mut self, key_event: KeyEvent) {
        match (self.focus, key_event.code, key_event.modifiers) {
            (_, KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                self.page.toggle_sort();
                self.refresh();
            }
            (_, KeyCode::Tab, _) => self.focus = self.focus.next(),
            (_, KeyCode::BackTab, _) => self.focus = self.focus.prev(),
            (UsersFocus::Search, KeyCode::Down, _) => self.focus = UsersFocus::Cards,
            (UsersFocus::Search, _, _) => {
                let mut text = self.page.query().search_text.clone();
                if apply_edit(&mut text, key_event) {
                    self.page.set_search_text(text);
                    self.refresh();
                }
            }
            (UsersFocus::Intake(_), KeyCode::Enter, _) => self.submit_intake(),
            (UsersFocus::Intake(field), _, _) => {
                apply_edit(self.page.draft_mut().field_mut(field), key_event);
            }
            (UsersFocus::Cards, KeyCode::Up | KeyCode::Char('k'), _) => self.move_selection(-1),
            (UsersFocus::Cards, KeyCode::Down | KeyCode::Char('j'), _) => self.move_selection(1),
            (UsersFocus::Cards, KeyCode::PageUp, _) => {
                let step = self.page_step();
                self.move_selection(-(step as isize));
            }
            (UsersFocus::Cards, KeyCode::PageDown, _) => {
                let step = self.page_step();
                self.move_selection(step as isize);
            }
            (UsersFocus::Cards, KeyCode::Home, _) => self.move_selection(isize::MIN),
            (UsersFocus::Cards, KeyCode::End, _) => self.move_selection(isize::MAX),
            (UsersFocus::Cards, KeyCode::Enter, _) => self.open_selected(),
            _ => {}
        }
    }

    pub(crate) fn handle_paste(&mut self, pasted: &str) {
        match self.focus {
            UsersFocus::Search => {
                let mut text = self.page.query().search_text.clone();
                if apply_paste(&mut text, pasted) {
                    self.page.set_search_text(text);
                    self.refresh();
                }
            }
            UsersFocus::Intake(field) => {
                apply_paste(self.page.draft_mut().field_mut(field), pasted);
            }
            UsersFocus::Cards => {}
        }
    }

    fn submit_intake(&mut self) {
        match self.page.submit_draft() {
            IntakeOutcome::Added(id) => {
                info!(%id, "added local user");
                self.intake_hint = None;
                self.refresh();
            }
            IntakeOutcome::Rejected { missing } => {
                let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
                self.intake_hint = Some(format!("Missing: {}", names.join(", ")));
            }
        }
    }

    fn open_selected(&self) {
        if let Some(nav) = self.page.select(self.cards.selected()) {
            self.app_event_tx.send(AppEvent::Navigate(nav));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let cards = RecordCards {
            records: &self.visible,
            palette: Palette::LIGHT,
        };
        self.cards.move_selection(&cards, delta);
    }

    fn page_step(&self) -> usize {
        let cards = RecordCards {
            records: &self.visible,
            palette: Palette::LIGHT,
        };
        self.cards.page_step(&cards, self.list_area)
    }

    pub(crate) fn render(&mut self, area: Rect, buf: &mut Buffer, palette: Palette) {
        let [title_area, search_area, intake_area, status_area, list_area, hint_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area);

        let title = Line::from(vec![
            Span::styled("Users", palette.focused()),
            Span::styled(
                format!(
                    "  {} shown · sort: name {}",
                    self.visible.len(),
                    self.page.query().sort_indicator()
                ),
                palette.dim(),
            ),
        ]);
        Paragraph::new(title).style(palette.base()).render(title_area, buf);

        InputField {
            label: "Search by name",
            value: &self.page.query().search_text,
            placeholder: "type to filter",
            focused: self.focus == UsersFocus::Search,
            masked: false,
            palette,
        }
        .render(search_area, buf);

        let intake_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(intake_area);
        let draft = self.page.draft();
        for (field, field_area) in [IntakeField::Name, IntakeField::Email, IntakeField::Company]
            .into_iter()
            .zip(intake_areas.iter())
        {
            InputField {
                label: intake_label(field),
                value: draft.get(field),
                placeholder: "",
                focused: self.focus == UsersFocus::Intake(field),
                masked: false,
                palette,
            }
            .render(*field_area, buf);
        }

        self.status_line(palette).render(status_area, buf);

        self.list_area = list_area;
        let cards = RecordCards {
            records: &self.visible,
            palette,
        };
        if cards.is_empty() {
            if matches!(self.page.load_state(), LoadState::Ready) {
                Paragraph::new(Span::styled("No users match", palette.dim()))
                    .style(palette.base())
                    .render(list_area, buf);
            }
        } else {
            self.cards.render(&cards, list_area, buf);
        }

        let hints = match self.focus {
            UsersFocus::Search => SEARCH_HINTS,
            UsersFocus::Intake(_) => INTAKE_HINTS,
            UsersFocus::Cards => CARD_HINTS,
        };
        HintBar::new(hints).render(hint_area, buf, palette);
    }

    /// Load state first, then the intake hint, so a rejected add never
    /// hides the unavailable banner.
    fn status_line(&self, palette: Palette) -> Paragraph<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        match self.page.load_state() {
            LoadState::Loading => spans.push(Span::styled("Loading users…", palette.dim())),
            LoadState::Ready => {}
            LoadState::Unavailable { reason } => spans.push(Span::styled(
                format!("Directory unavailable: {reason}"),
                palette.error(),
            )),
        }
        if let Some(hint) = &self.intake_hint {
            if !spans.is_empty() {
                spans.push(Span::styled("  ·  ", palette.dim()));
            }
            spans.push(Span::styled(hint.clone(), palette.dim()));
        }
        Paragraph::new(Line::from(spans)).style(palette.base())
    }
}

fn intake_label(field: IntakeField) -> &'static str {
    match field {
        IntakeField::Name => "Name",
        IntakeField::Email => "Email",
        IntakeField::Company => "Company",
    }
}

struct RecordCards<'a> {
    records: &'a [UserRecord],
    palette: Palette,
}

impl CardSource for RecordCards<'_> {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn card_height(&self, _index: usize, _width: u16) -> u16 {
        CARD_HEIGHT
    }

    fn render_card(&self, index: usize, area: Rect, buf: &mut Buffer, selected: bool) {
        let Some(record) = self.records.get(index) else {
            return;
        };
        let palette = self.palette;
        let mut name = vec![Span::styled(
            record.name.clone(),
            if selected {
                palette.focused()
            } else {
                palette.base()
            },
        )];
        if record.is_local() {
            name.push(Span::styled("  (added here)", palette.dim()));
        }
        Paragraph::new(vec![
            Line::from(name),
            Line::from(Span::styled(record.email.clone(), palette.dim())),
            Line::from(Span::styled(record.company.clone(), palette.dim())),
        ])
        .style(palette.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(selected)),
        )
        .render(area, buf);
    }
}
