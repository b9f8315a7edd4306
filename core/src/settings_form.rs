//! Local state of the settings view.

use serde::Serialize;
use tracing::info;
use tracing::warn;

use crate::error::PreferenceError;
use crate::handoff::Handoff;
use crate::preferences::DarkModeSetting;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsForm {
    pub name: String,
    pub email: String,
    pub dark_mode: bool,
}

impl SettingsForm {
    /// Seed the form from a one-shot handoff (blank when absent) and the
    /// persisted dark-mode flag. The handoff is consumed here; nothing links
    /// the form back to the record it came from.
    pub fn mount(handoff: Handoff, dark_mode: &DarkModeSetting) -> Self {
        let (name, email) = handoff.into_fields();
        Self {
            name,
            email,
            dark_mode: dark_mode.load(),
        }
    }

    /// Flip the dark-mode flag and persist the new value. The in-memory flag
    /// changes even if persisting fails.
    pub fn toggle_dark_mode(&mut self, setting: &DarkModeSetting) -> Result<bool, PreferenceError> {
        self.dark_mode = !self.dark_mode;
        if let Err(err) = setting.set(self.dark_mode) {
            warn!("dark mode change not persisted: {err}");
            return Err(err);
        }
        Ok(self.dark_mode)
    }

    /// There is no settings backend; submission only records the form.
    pub fn submit(&self) -> &Self {
        info!(
            name = %self.name,
            email = %self.email,
            dark_mode = self.dark_mode,
            "settings form submitted"
        );
        self
    }
}
