//! State of the users page: the record store, its one-time hydration from
//! the directory, the query, and the intake draft.
//!
//! The fetch runs off the UI loop. [`UsersPage::mount`] hands out exactly
//! one [`FetchTicket`]; the completion must present that ticket to
//! [`UsersPage::apply_fetch`], so a response that outlives its page (or
//! arrives twice) is dropped instead of being applied to a defunct store.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use admin_directory_client::DirectoryError;
use admin_directory_client::DirectorySource;
use admin_directory_client::DirectoryUser;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::handoff::Navigation;
use crate::intake::IntakeDraft;
use crate::intake::IntakeOutcome;
use crate::query::NameCollator;
use crate::query::QueryState;
use crate::query::derive_view;
use crate::record::UserRecord;
use crate::store::RecordStore;

static NEXT_MOUNT: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    fn next() -> Self {
        Self(NEXT_MOUNT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Permission to deliver one directory result to one page mount.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket {
    mount: MountId,
}

impl FetchTicket {
    pub fn mount(&self) -> MountId {
        self.mount
    }
}

/// The observed outcome of a directory fetch, tagged with its ticket.
#[derive(Debug)]
pub struct FetchCompletion {
    pub ticket: FetchTicket,
    pub result: Result<Vec<DirectoryUser>, DirectoryError>,
}

/// Run the single directory request for a mount. Never panics and never
/// drops the error: the caller always receives a completion.
pub async fn fetch_directory(source: &dyn DirectorySource, ticket: FetchTicket) -> FetchCompletion {
    let result = source.list_users().await;
    FetchCompletion { ticket, result }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// The directory could not be read. Distinct from an empty result.
    Unavailable { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchApplied {
    Hydrated { fetched: usize, kept_local: usize },
    Failed,
    /// Ticket from another mount, or already consumed.
    Stale,
}

#[derive(Debug)]
pub struct UsersPage {
    mount: MountId,
    awaiting_fetch: bool,
    load: LoadState,
    store: RecordStore,
    query: QueryState,
    draft: IntakeDraft,
    collator: NameCollator,
}

impl UsersPage {
    /// Create the page state for a new mount together with the one ticket
    /// its fetch may use.
    pub fn mount(collator: NameCollator) -> (Self, FetchTicket) {
        let mount = MountId::next();
        debug!(?mount, "users page mounted");
        let page = Self {
            mount,
            awaiting_fetch: true,
            load: LoadState::Loading,
            store: RecordStore::new(),
            query: QueryState::default(),
            draft: IntakeDraft::default(),
            collator,
        };
        (page, FetchTicket { mount })
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn draft(&self) -> &IntakeDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut IntakeDraft {
        &mut self.draft
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
    }

    pub fn toggle_sort(&mut self) {
        self.query.toggle_sort();
    }

    pub fn apply_fetch(&mut self, completion: FetchCompletion) -> FetchApplied {
        if completion.ticket.mount != self.mount || !self.awaiting_fetch {
            debug!(
                ticket = ?completion.ticket.mount,
                live = ?self.mount,
                "discarding stale directory completion"
            );
            return FetchApplied::Stale;
        }
        self.awaiting_fetch = false;
        match completion.result {
            Ok(users) => {
                let hydration = self.store.hydrate(users);
                self.load = LoadState::Ready;
                info!(
                    fetched = hydration.fetched,
                    kept_local = hydration.kept_local,
                    "directory loaded"
                );
                FetchApplied::Hydrated {
                    fetched: hydration.fetched,
                    kept_local: hydration.kept_local,
                }
            }
            Err(err) => {
                warn!("directory unavailable: {err}");
                self.load = LoadState::Unavailable {
                    reason: err.summary(),
                };
                FetchApplied::Failed
            }
        }
    }

    pub fn submit_draft(&mut self) -> IntakeOutcome {
        self.draft.submit(&mut self.store)
    }

    /// The filtered, sorted projection currently shown.
    pub fn visible(&self) -> Vec<UserRecord> {
        derive_view(self.store.records(), &self.query, &self.collator)
    }

    /// Hand the record at `index` of the visible projection to the settings
    /// view.
    pub fn select(&self, index: usize) -> Option<Navigation> {
        self.visible().get(index).map(Navigation::settings_for)
    }
}
