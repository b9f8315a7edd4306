//! Session stub. Sign-in accepts anything and nothing checks the session
//! before rendering a view.

use tracing::info;

use crate::error::PreferenceError;
use crate::handoff::Navigation;
use crate::handoff::Route;
use crate::preferences::PreferenceStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Credentials are not verified.
    pub fn sign_in(&mut self, username: &str, _password: &str) -> Navigation {
        info!(username, "signed in");
        self.user = Some(username.to_string());
        Navigation::to(Route::Dashboard)
    }

    /// Forget the user and wipe every stored preference, then route to the
    /// login screen. The route is returned even if wiping fails.
    pub fn sign_out(&mut self, prefs: &dyn PreferenceStore) -> (Navigation, Result<(), PreferenceError>) {
        info!(username = ?self.user, "signed out");
        self.user = None;
        (Navigation::to(Route::Login), prefs.clear())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::DARK_MODE_KEY;
    use crate::preferences::MemoryPreferenceStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn sign_in_goes_to_dashboard() {
        let mut session = Session::default();
        let nav = session.sign_in("admin", "");
        assert_eq!(nav, Navigation::to(Route::Dashboard));
        assert_eq!(session.user(), Some("admin"));
    }

    #[test]
    fn sign_out_clears_preferences_and_routes_to_login() {
        let prefs = MemoryPreferenceStore::default();
        prefs.set(DARK_MODE_KEY, "true").unwrap();
        let mut session = Session::default();
        session.sign_in("admin", "secret");

        let (nav, cleared) = session.sign_out(&prefs);

        assert!(cleared.is_ok());
        assert_eq!(nav, Navigation::to(Route::Login));
        assert!(!session.is_signed_in());
        assert_eq!(prefs.get(DARK_MODE_KEY).unwrap(), None);
    }
}
