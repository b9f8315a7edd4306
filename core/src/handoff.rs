//! Typed one-shot navigation between console views.

use serde::Serialize;
use strum_macros::Display;
use strum_macros::EnumString;

use crate::record::UserRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Route {
    Login,
    Dashboard,
    Users,
    Settings,
}

/// The two display fields a selected record hands to the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionPayload {
    pub name: String,
    pub email: String,
}

impl From<&UserRecord> for SelectionPayload {
    fn from(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
        }
    }
}

/// Payload attached to a single transition. Not `Clone`: the
/// destination takes it by value and nothing keeps a copy.
#[derive(Debug, PartialEq, Eq, Default)]
pub enum Handoff {
    Selected(SelectionPayload),
    #[default]
    Absent,
}

impl Handoff {
    /// Consume the handoff into `(name, email)`, blank when absent.
    pub fn into_fields(self) -> (String, String) {
        match self {
            Handoff::Selected(SelectionPayload { name, email }) => (name, email),
            Handoff::Absent => (String::new(), String::new()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Handoff::Absent)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub handoff: Handoff,
}

impl Navigation {
    /// Direct navigation, no payload.
    pub fn to(route: Route) -> Self {
        Self {
            route,
            handoff: Handoff::Absent,
        }
    }

    /// Open the settings form pre-filled from `record`. Company is dropped.
    pub fn settings_for(record: &UserRecord) -> Self {
        Self {
            route: Route::Settings,
            handoff: Handoff::Selected(SelectionPayload::from(record)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn selection_carries_name_and_email_only() {
        let record = UserRecord::local("Ada Lovelace", "ada@example.com", "Analytical");
        let nav = Navigation::settings_for(&record);

        assert_eq!(nav.route, Route::Settings);
        assert_eq!(
            nav.handoff.into_fields(),
            ("Ada Lovelace".to_string(), "ada@example.com".to_string())
        );
    }

    #[test]
    fn absent_handoff_yields_blank_fields() {
        let nav = Navigation::to(Route::Settings);
        assert!(nav.handoff.is_absent());
        assert_eq!(nav.handoff.into_fields(), (String::new(), String::new()));
    }

    #[test]
    fn routes_parse_from_cli_names() {
        assert_eq!(Route::from_str("users").unwrap(), Route::Users);
        assert_eq!(Route::from_str("Settings").unwrap(), Route::Settings);
        assert!(Route::from_str("admin").is_err());
        assert_eq!(Route::Dashboard.to_string(), "dashboard");
    }
}
