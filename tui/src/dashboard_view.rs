use admin_core::Navigation;
use admin_core::Route;
use admin_core::dashboard;
use admin_core::dashboard::DashboardSnapshot;
use admin_core::dashboard::SeriesPoint;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Bar;
use ratatui::widgets::BarChart;
use ratatui::widgets::BarGroup;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::hint_bar::HintBar;
use crate::theme::Palette;

const HINTS: &[(&str, &str)] = &[("←/→", "select card"), ("Enter/u", "open users")];

pub(crate) struct DashboardView {
    snapshot: DashboardSnapshot,
    selected_card: usize,
    app_event_tx: AppEventSender,
}

impl DashboardView {
    pub(crate) fn new(app_event_tx: AppEventSender) -> Self {
        Self {
            snapshot: dashboard::snapshot(),
            selected_card: dashboard::USERS_CARD,
            app_event_tx,
        }
    }

    pub(crate) fn handle_key(&mut self, key_event: KeyEvent) {
        let card_count = self.snapshot.stats.len();
        match key_event.code {
            KeyCode::Left => {
                self.selected_card = (self.selected_card + card_count - 1) % card_count;
            }
            KeyCode::Right | KeyCode::Tab => {
                self.selected_card = (self.selected_card + 1) % card_count;
            }
            KeyCode::Char('u') => self.open_users(),
            KeyCode::Enter if self.selected_card == dashboard::USERS_CARD => self.open_users(),
            _ => {}
        }
    }

    fn open_users(&self) {
        self.app_event_tx
            .send(AppEvent::Navigate(Navigation::to(Route::Users)));
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer, palette: Palette) {
        let [cards_area, charts_area, hint_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .areas(area);

        let card_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(cards_area);
        for (idx, (card, card_area)) in self.snapshot.stats.iter().zip(card_areas.iter()).enumerate() {
            let focused = idx == self.selected_card;
            Paragraph::new(vec![
                Line::from(Span::styled(card.title, palette.dim())),
                Line::from(Span::styled(card.value.to_string(), palette.focused())),
            ])
            .style(palette.base())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.border(focused)),
            )
            .render(*card_area, buf);
        }

        let [registrations_area, roles_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(charts_area);
        bar_chart("User registrations", self.snapshot.registrations, palette)
            .render(registrations_area, buf);
        bar_chart("Roles", self.snapshot.roles, palette).render(roles_area, buf);

        HintBar::new(HINTS).render(hint_area, buf, palette);
    }
}

fn bar_chart<'a>(title: &'a str, series: &'a [SeriesPoint], palette: Palette) -> BarChart<'a> {
    let bars: Vec<Bar<'a>> = series
        .iter()
        .map(|point| {
            Bar::default()
                .label(Line::from(point.label))
                .value(point.value)
                .style(palette.base().fg(palette.accent))
                .value_style(palette.focused().add_modifier(Modifier::REVERSED))
        })
        .collect();
    BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(false))
                .title(Span::styled(title, palette.dim())),
        )
        .style(palette.base())
        .bar_width(5)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars))
}
