#![expect(clippy::expect_used)]
use std::sync::Arc;

use admin_core::DarkModeSetting;
use admin_core::FetchApplied;
use admin_core::FilePreferenceStore;
use admin_core::IntakeField;
use admin_core::IntakeOutcome;
use admin_core::LoadState;
use admin_core::NameCollator;
use admin_core::Route;
use admin_core::Session;
use admin_core::SettingsForm;
use admin_core::UsersPage;
use admin_core::fetch_directory;
use admin_directory_client::DirectoryError;
use admin_directory_client::DirectorySource;
use admin_directory_client::DirectoryUser;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

struct FixedDirectory(Vec<DirectoryUser>);

#[async_trait]
impl DirectorySource for FixedDirectory {
    async fn list_users(&self) -> Result<Vec<DirectoryUser>, DirectoryError> {
        Ok(self.0.clone())
    }
}

fn user(name: &str, email: &str, company: &str) -> DirectoryUser {
    DirectoryUser {
        name: name.to_string(),
        email: email.to_string(),
        company: company.to_string(),
    }
}

fn fill(page: &mut UsersPage, name: &str, email: &str, company: &str) {
    let draft = page.draft_mut();
    draft.set(IntakeField::Name, name);
    draft.set(IntakeField::Email, email);
    draft.set(IntakeField::Company, company);
}

#[tokio::test]
async fn fetched_user_round_trips_into_settings_form() {
    let home = TempDir::new().unwrap();
    let dark_mode = DarkModeSetting::new(Arc::new(FilePreferenceStore::new(home.path())));
    let source = FixedDirectory(vec![
        user("Leanne Graham", "Sincere@april.biz", "Romaguera-Crona"),
        user("Ervin Howell", "Shanna@melissa.tv", "Deckow-Crist"),
    ]);

    let (mut page, ticket) = UsersPage::mount(NameCollator::default());
    let completion = fetch_directory(&source, ticket).await;
    assert!(matches!(
        page.apply_fetch(completion),
        FetchApplied::Hydrated { fetched: 2, .. }
    ));
    assert_eq!(page.load_state(), &LoadState::Ready);

    page.set_search_text("ERVIN");
    let nav = page.select(0).expect("visible row");
    assert_eq!(nav.route, Route::Settings);

    let form = SettingsForm::mount(nav.handoff, &dark_mode);
    assert_eq!(form.name, "Ervin Howell");
    assert_eq!(form.email, "Shanna@melissa.tv");
    assert!(!form.dark_mode);
}

#[tokio::test]
async fn local_add_during_fetch_survives_hydration() {
    let source = FixedDirectory(vec![user("Leanne Graham", "Sincere@april.biz", "Romaguera-Crona")]);
    let (mut page, ticket) = UsersPage::mount(NameCollator::default());

    fill(&mut page, "Zed", "zed@example.com", "Acme");
    assert!(matches!(page.submit_draft(), IntakeOutcome::Added(_)));

    let completion = fetch_directory(&source, ticket).await;
    page.apply_fetch(completion);

    let names: Vec<&str> = page.store().records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Zed", "Leanne Graham"]);
}

#[tokio::test]
async fn completion_for_a_previous_mount_is_ignored() {
    let source = FixedDirectory(vec![user("Leanne Graham", "Sincere@april.biz", "Romaguera-Crona")]);
    let (_old_page, old_ticket) = UsersPage::mount(NameCollator::default());
    let (mut page, _ticket) = UsersPage::mount(NameCollator::default());

    let completion = fetch_directory(&source, old_ticket).await;

    assert_eq!(page.apply_fetch(completion), FetchApplied::Stale);
    assert_eq!(page.load_state(), &LoadState::Loading);
    assert!(page.store().is_empty());
}

#[test]
fn dark_mode_survives_restart_and_is_wiped_by_logout() {
    let home = TempDir::new().unwrap();
    let store = Arc::new(FilePreferenceStore::new(home.path()));
    let dark_mode = DarkModeSetting::new(store.clone());
    dark_mode.set(true).unwrap();

    let reopened = DarkModeSetting::new(Arc::new(FilePreferenceStore::new(home.path())));
    assert!(reopened.load());

    let mut session = Session::default();
    session.sign_in("admin", "");
    let (nav, cleared) = session.sign_out(store.as_ref());
    assert!(cleared.is_ok());
    assert_eq!(nav.route, Route::Login);
    assert!(!reopened.load());
}
