//! Record management for the admin console: the users page state machine,
//! its search/sort projection, local intake, the typed handoff to the
//! settings form, and the persisted dark-mode preference.

pub mod config;
pub mod dashboard;
mod error;
pub mod handoff;
pub mod intake;
pub mod lifecycle;
pub mod preferences;
pub mod query;
pub mod record;
pub mod session;
pub mod settings_form;
pub mod store;

pub use config::ConfigOverrides;
pub use config::ConsoleConfig;
pub use error::ConfigError;
pub use error::PreferenceError;
pub use handoff::Handoff;
pub use handoff::Navigation;
pub use handoff::Route;
pub use handoff::SelectionPayload;
pub use intake::IntakeDraft;
pub use intake::IntakeField;
pub use intake::IntakeOutcome;
pub use lifecycle::FetchApplied;
pub use lifecycle::FetchCompletion;
pub use lifecycle::FetchTicket;
pub use lifecycle::LoadState;
pub use lifecycle::UsersPage;
pub use lifecycle::fetch_directory;
pub use preferences::DarkModeSetting;
pub use preferences::FilePreferenceStore;
pub use preferences::MemoryPreferenceStore;
pub use preferences::PreferenceStore;
pub use query::NameCollator;
pub use query::QueryState;
pub use record::RecordId;
pub use record::UserRecord;
pub use session::Session;
pub use settings_form::SettingsForm;
pub use store::RecordStore;
