//! Search and sort projection over the record store.

use std::cmp::Ordering;

use icu_collator::Collator;
use icu_collator::CollatorBorrowed;
use icu_collator::options::CollatorOptions;
use icu_locale_core::Locale;
use icu_locale_core::locale;
use tracing::warn;

use crate::record::UserRecord;

/// Presentation-only query state. Never persisted, never written back into
/// the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    pub sort_ascending: bool,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_ascending: true,
        }
    }
}

impl QueryState {
    pub fn toggle_sort(&mut self) {
        self.sort_ascending = !self.sort_ascending;
    }

    /// Arrow shown next to the sort control.
    pub fn sort_indicator(&self) -> &'static str {
        if self.sort_ascending { "↓" } else { "↑" }
    }
}

/// Locale-aware name ordering. Falls back to code-point order when no
/// collation data is available for the requested locale.
pub struct NameCollator {
    collator: Option<CollatorBorrowed<'static>>,
}

impl NameCollator {
    pub fn new(locale: Locale) -> Self {
        let collator = match Collator::try_new(locale.into(), CollatorOptions::default()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                warn!("collator unavailable, sorting by code point: {err}");
                None
            }
        };
        Self { collator }
    }

    /// Parse a BCP-47 tag such as `en` or `sv-SE`; unparseable tags fall back
    /// to `en`.
    pub fn for_tag(tag: &str) -> Self {
        let locale = tag.parse::<Locale>().unwrap_or_else(|err| {
            warn!("invalid collation locale `{tag}` ({err}), using en");
            locale!("en")
        });
        Self::new(locale)
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(left, right),
            None => left.cmp(right),
        }
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new(locale!("en"))
    }
}

impl std::fmt::Debug for NameCollator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameCollator")
            .field("locale_aware", &self.collator.is_some())
            .finish()
    }
}

/// True when `name` contains `needle`, ignoring case. An empty needle
/// matches every name.
pub fn name_matches(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(&needle.to_lowercase())
}

/// Derive the visible projection: keep records whose name contains the
/// search text (case-insensitive), then sort by name. The sort is stable, so
/// equal names keep store order in either direction.
pub fn derive_view(
    records: &[UserRecord],
    query: &QueryState,
    collator: &NameCollator,
) -> Vec<UserRecord> {
    let mut visible: Vec<UserRecord> = records
        .iter()
        .filter(|record| name_matches(&record.name, &query.search_text))
        .cloned()
        .collect();
    visible.sort_by(|a, b| {
        let ordering = collator.compare(&a.name, &b.name);
        if query.sort_ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    visible
}
