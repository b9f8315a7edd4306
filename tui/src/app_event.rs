use admin_core::FetchCompletion;
use admin_core::Navigation;

#[derive(Debug)]
pub(crate) enum AppEvent {
    /// Mount the destination route, consuming any handoff it carries.
    Navigate(Navigation),

    /// The directory fetch spawned for a users view finished. The ticket
    /// inside decides whether the current view still accepts it.
    DirectoryFetched(FetchCompletion),

    /// The persisted dark-mode flag changed; repaint with the new palette.
    DarkModeChanged(bool),

    /// Submit the login stub.
    SignIn { username: String, password: String },

    /// Clear preferences and return to the login screen.
    Logout,

    /// Request to exit the application gracefully.
    ExitRequest,
}
