use std::sync::Arc;

use admin_core::DarkModeSetting;
use admin_core::NameCollator;
use admin_core::Navigation;
use admin_core::PreferenceStore;
use admin_core::Route;
use admin_core::Session;
use admin_core::SettingsForm;
use admin_core::UsersPage;
use admin_core::fetch_directory;
use admin_directory_client::DirectorySource;
use color_eyre::eyre::Result;
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
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use tokio::select;
use tokio::sync::mpsc::unbounded_channel;
use tokio::task::JoinHandle;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::dashboard_view::DashboardView;
use crate::login_view::LoginView;
use crate::settings_view::SettingsView;
use crate::theme::Palette;
use crate::tui::Tui;
use crate::tui::TuiEvent;
use crate::users_view::UsersView;

const NAV_TABS: &[(Route, &str, &str)] = &[
    (Route::Dashboard, "F1", "Dashboard"),
    (Route::Users, "F2", "Users"),
    (Route::Settings, "F3", "Settings"),
];

/// Long-lived handles the console needs to mount views.
pub(crate) struct AppServices {
    pub directory: Arc<dyn DirectorySource>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub collation_locale: String,
}

enum Screen {
    Login(LoginView),
    Dashboard(DashboardView),
    Users(UsersView),
    Settings(SettingsView),
}

impl Screen {
    fn route(&self) -> Route {
        match self {
            Screen::Login(_) => Route::Login,
            Screen::Dashboard(_) => Route::Dashboard,
            Screen::Users(_) => Route::Users,
            Screen::Settings(_) => Route::Settings,
        }
    }
}

pub(crate) struct App {
    services: AppServices,
    dark_mode: DarkModeSetting,
    palette: Palette,
    session: Session,
    screen: Screen,
    fetch_task: Option<JoinHandle<()>>,
    app_event_tx: AppEventSender,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(
        services: AppServices,
        initial_route: Route,
        app_event_tx: AppEventSender,
    ) -> Self {
        let dark_mode = DarkModeSetting::new(services.preferences.clone());
        let palette = Palette::for_dark_mode(dark_mode.load());
        let mut app = Self {
            services,
            dark_mode,
            palette,
            session: Session::default(),
            screen: Screen::Dashboard(DashboardView::new(app_event_tx.clone())),
            fetch_task: None,
            app_event_tx,
            should_quit: false,
        };
        app.navigate(Navigation::to(initial_route));
        app
    }

    pub(crate) async fn run(tui: &mut Tui, services: AppServices, initial_route: Route) -> Result<()> {
        let (app_event_tx, mut app_event_rx) = unbounded_channel();
        let mut app = Self::new(services, initial_route, AppEventSender::new(app_event_tx));

        while !app.should_quit {
            tui.draw(|frame| {
                let area = frame.area();
                app.render(area, frame.buffer_mut());
            })?;
            select! {
                Some(event) = app_event_rx.recv() => app.handle_event(event),
                event = tui.next_event() => match event {
                    Some(Ok(event)) => app.handle_tui_event(event),
                    Some(Err(err)) => return Err(err.into()),
                    None => app.should_quit = true,
                },
            }
        }
        app.teardown_users_fetch();
        tui.clear()?;
        Ok(())
    }

    fn handle_tui_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key_event) => self.handle_key(key_event),
            TuiEvent::Paste(pasted) => {
                let pasted = pasted.replace('\r', "\n");
                match &mut self.screen {
                    Screen::Login(view) => view.handle_paste(&pasted),
                    Screen::Users(view) => view.handle_paste(&pasted),
                    Screen::Settings(view) => view.handle_paste(&pasted),
                    Screen::Dashboard(_) => {}
                }
            }
            TuiEvent::Draw => {}
        }
    }

    pub(crate) fn handle_key(&mut self, key_event: KeyEvent) {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.app_event_tx.send(AppEvent::ExitRequest);
            }
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
                self.app_event_tx.send(AppEvent::Logout);
            }
            (KeyCode::F(n), _) => {
                if let Some((route, _, _)) = NAV_TABS.get(usize::from(n).wrapping_sub(1)) {
                    self.app_event_tx.send(AppEvent::Navigate(Navigation::to(*route)));
                }
            }
            _ => match &mut self.screen {
                Screen::Login(view) => view.handle_key(key_event),
                Screen::Dashboard(view) => view.handle_key(key_event),
                Screen::Users(view) => view.handle_key(key_event),
                Screen::Settings(view) => view.handle_key(key_event),
            },
        }
    }

    pub(crate) fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Navigate(nav) => self.navigate(nav),
            AppEvent::DirectoryFetched(completion) => match &mut self.screen {
                Screen::Users(view) => {
                    view.apply_fetch(completion);
                }
                _ => debug!("users view gone; dropping directory completion"),
            },
            AppEvent::DarkModeChanged(enabled) => {
                self.palette = Palette::for_dark_mode(enabled);
            }
            AppEvent::SignIn { username, password } => {
                let nav = self.session.sign_in(&username, &password);
                self.navigate(nav);
            }
            AppEvent::Logout => {
                let (nav, cleared) = self.session.sign_out(self.services.preferences.as_ref());
                if let Err(err) = cleared {
                    warn!("failed to clear preferences on logout: {err}");
                }
                self.palette = Palette::for_dark_mode(self.dark_mode.load());
                self.navigate(nav);
            }
            AppEvent::ExitRequest => self.should_quit = true,
        }
    }

    /// Unmount the current screen and mount `nav.route` from scratch.
    fn navigate(&mut self, nav: Navigation) {
        self.teardown_users_fetch();
        let Navigation { route, handoff } = nav;
        info!(%route, with_payload = !handoff.is_absent(), "navigate");
        self.screen = match route {
            Route::Login => Screen::Login(LoginView::new(self.app_event_tx.clone())),
            Route::Dashboard => Screen::Dashboard(DashboardView::new(self.app_event_tx.clone())),
            Route::Users => Screen::Users(self.mount_users()),
            Route::Settings => {
                let form = SettingsForm::mount(handoff, &self.dark_mode);
                Screen::Settings(SettingsView::new(
                    form,
                    self.dark_mode.clone(),
                    self.app_event_tx.clone(),
                ))
            }
        };
    }

    fn mount_users(&mut self) -> UsersView {
        let collator = NameCollator::for_tag(&self.services.collation_locale);
        let (page, ticket) = UsersPage::mount(collator);
        let directory = self.services.directory.clone();
        let tx = self.app_event_tx.clone();
        self.fetch_task = Some(tokio::spawn(async move {
            let completion = fetch_directory(directory.as_ref(), ticket).await;
            if let Err(err) = &completion.result {
                warn!("directory fetch failed: {err}");
            }
            tx.send(AppEvent::DirectoryFetched(completion));
        }));
        UsersView::new(page, self.app_event_tx.clone())
    }

    fn teardown_users_fetch(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
    }

    pub(crate) fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        Block::default().style(palette.base()).render(area, buf);
        let [nav_area, body_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
        self.render_nav(nav_area, buf);
        match &mut self.screen {
            Screen::Login(view) => view.render(body_area, buf, palette),
            Screen::Dashboard(view) => view.render(body_area, buf, palette),
            Screen::Users(view) => view.render(body_area, buf, palette),
            Screen::Settings(view) => view.render(body_area, buf, palette),
        }
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let active = self.screen.route();
        let mut spans = vec![Span::styled("Admin Console  ", palette.focused())];
        for (route, key, label) in NAV_TABS {
            let style = if *route == active {
                palette.focused()
            } else {
                palette.dim()
            };
            spans.push(Span::styled(format!("[{key}] {label}  "), style));
        }
        spans.push(Span::styled("[^L] Logout  [^C] Quit", palette.dim()));
        Paragraph::new(Line::from(spans))
            .style(palette.base())
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_core::MemoryPreferenceStore;
    use admin_core::preferences::DARK_MODE_KEY;
    use admin_directory_client::DirectoryError;
    use admin_directory_client::DirectoryUser;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc::UnboundedReceiver;

    struct FixedDirectory;

    #[async_trait]
    impl DirectorySource for FixedDirectory {
        async fn list_users(&self) -> Result<Vec<DirectoryUser>, DirectoryError> {
            Ok(vec![DirectoryUser {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                company: "Analytical Engines".to_string(),
            }])
        }
    }

    fn services(preferences: Arc<MemoryPreferenceStore>) -> AppServices {
        AppServices {
            directory: Arc::new(FixedDirectory),
            preferences,
            collation_locale: "en".to_string(),
        }
    }

    fn test_app(services: AppServices, initial_route: Route) -> (App, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = unbounded_channel();
        (App::new(services, initial_route, AppEventSender::new(tx)), rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn pump(app: &mut App, rx: &mut UnboundedReceiver<AppEvent>) {
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
    }

    #[tokio::test]
    async fn users_fetch_hydrates_and_hands_off_to_settings() {
        let (mut app, mut rx) = test_app(
            services(Arc::new(MemoryPreferenceStore::default())),
            Route::Users,
        );
        let event = rx.recv().await.expect("fetch completion");
        app.handle_event(event);
        let Screen::Users(view) = &app.screen else {
            panic!("expected users screen");
        };
        assert_eq!(view.page().store().len(), 1);

        app.handle_key(key(KeyCode::BackTab));
        app.handle_key(key(KeyCode::Enter));
        pump(&mut app, &mut rx);

        let Screen::Settings(view) = &app.screen else {
            panic!("expected settings screen");
        };
        assert_eq!(view.form().name, "Ada Lovelace");
        assert_eq!(view.form().email, "ada@example.com");
    }

    #[tokio::test]
    async fn leaving_users_aborts_the_fetch_and_drops_late_completions() {
        let (mut app, mut rx) = test_app(
            services(Arc::new(MemoryPreferenceStore::default())),
            Route::Users,
        );
        app.handle_key(key(KeyCode::F(1)));
        let nav = rx.recv().await.expect("navigate event");
        assert!(matches!(nav, AppEvent::Navigate(_)));
        app.handle_event(nav);

        assert!(app.fetch_task.is_none());
        assert_eq!(app.screen.route(), Route::Dashboard);
        pump(&mut app, &mut rx);
        assert_eq!(app.screen.route(), Route::Dashboard);
    }

    #[tokio::test]
    async fn direct_navigation_to_settings_has_empty_fields() {
        let (mut app, mut rx) = test_app(
            services(Arc::new(MemoryPreferenceStore::default())),
            Route::Dashboard,
        );
        app.handle_key(key(KeyCode::F(3)));
        pump(&mut app, &mut rx);

        let Screen::Settings(view) = &app.screen else {
            panic!("expected settings screen");
        };
        assert_eq!(view.form().name, "");
        assert_eq!(view.form().email, "");
    }

    #[tokio::test]
    async fn logout_clears_preferences_and_shows_login() {
        let preferences = Arc::new(MemoryPreferenceStore::default());
        preferences.set(DARK_MODE_KEY, "true").unwrap();
        let (mut app, mut rx) = test_app(services(preferences.clone()), Route::Dashboard);
        assert_eq!(app.palette, Palette::DARK);

        app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        pump(&mut app, &mut rx);

        assert_eq!(app.screen.route(), Route::Login);
        assert_eq!(app.palette, Palette::LIGHT);
        assert_eq!(preferences.get(DARK_MODE_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn ctrl_c_requests_exit() {
        let (mut app, mut rx) = test_app(
            services(Arc::new(MemoryPreferenceStore::default())),
            Route::Login,
        );
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        pump(&mut app, &mut rx);
        assert!(app.should_quit);
    }
}
