//! Bulk-update merge — reconciles the stored `unique_id`, the address found in
//! the device registry and the operator's manual input, then regenerates
//! titles.
//!
//! For every entry, in document order:
//! 1. the [`IDENTIFIER_RULES`] are evaluated in order and the first rule that
//!    proposes a value wins;
//! 2. the winning value replaces `unique_id` when it differs;
//! 3. if a title update was requested, the title is rebuilt as
//!    `"<base name> - <unique_id>"` from the post-step-2 identifier;
//! 4. an entry changed by step 2 or 3 is reported once.

use crate::device::{DevicesDocument, resolve_address};
use crate::entry::EntriesDocument;
use crate::request::BulkUpdateRequest;

/// Separator between a title's base name and its identifier suffix.
pub const TITLE_SEPARATOR: &str = " - ";

/// A source that may propose a new `unique_id` for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierRule {
    /// Address of the first linked device in the registry, when sync was requested.
    AddressSync,
    /// Non-empty manual input that differs from the stored value.
    Manual,
}

/// Evaluation order of identifier rules. The first proposal wins.
pub const IDENTIFIER_RULES: [IdentifierRule; 2] =
    [IdentifierRule::AddressSync, IdentifierRule::Manual];

impl IdentifierRule {
    /// Value this rule proposes for `entry_id`, if any.
    #[must_use]
    pub fn propose<'a>(
        self,
        entry_id: &str,
        current: Option<&str>,
        devices: Option<&'a DevicesDocument>,
        request: &'a BulkUpdateRequest,
    ) -> Option<&'a str> {
        match self {
            Self::AddressSync if request.wants_address_sync(entry_id) => {
                resolve_address(entry_id, devices)
            }
            Self::AddressSync => None,
            Self::Manual => request
                .manual_id(entry_id)
                .filter(|manual| Some(*manual) != current),
        }
    }
}

/// A proposed identifier together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub rule: IdentifierRule,
    pub value: &'a str,
}

/// Run [`IDENTIFIER_RULES`] in order and return the first proposal.
#[must_use]
pub fn resolve_identifier<'a>(
    entry_id: &str,
    current: Option<&str>,
    devices: Option<&'a DevicesDocument>,
    request: &'a BulkUpdateRequest,
) -> Option<Candidate<'a>> {
    IDENTIFIER_RULES.iter().find_map(|rule| {
        rule.propose(entry_id, current, devices, request)
            .map(|value| Candidate { rule: *rule, value })
    })
}

/// Rebuild a title as `"<base name> - <unique_id>"`.
///
/// The base name is everything before the last separator, or the whole title
/// when it has none.
#[must_use]
pub fn regenerate_title(title: &str, unique_id: &str) -> String {
    let base = title
        .rsplit_once(TITLE_SEPARATOR)
        .map_or(title, |(base, _)| base);
    format!("{base}{TITLE_SEPARATOR}{unique_id}")
}

/// What happened to one changed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryChange {
    pub entry_id: String,
    /// Rule whose proposal was applied, `None` when only the title changed.
    pub rule: Option<IdentifierRule>,
    pub previous_unique_id: Option<String>,
    pub unique_id: Option<String>,
    pub previous_title: String,
    pub title: String,
}

impl EntryChange {
    #[must_use]
    pub fn unique_id_changed(&self) -> bool {
        self.previous_unique_id != self.unique_id
    }

    #[must_use]
    pub fn title_changed(&self) -> bool {
        self.previous_title != self.title
    }
}

/// Result of [`merge_bulk_update`]: one [`EntryChange`] per changed entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    changes: Vec<EntryChange>,
}

impl MergeReport {
    #[must_use]
    pub fn changed_count(&self) -> usize {
        self.changes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    #[must_use]
    pub fn changes(&self) -> &[EntryChange] {
        &self.changes
    }
}

/// Apply `request` to `entries` in place.
///
/// Entries the request does not touch, and every document-level field, are
/// left as they were.
pub fn merge_bulk_update(
    entries: &mut EntriesDocument,
    devices: Option<&DevicesDocument>,
    request: &BulkUpdateRequest,
) -> MergeReport {
    let mut report = MergeReport::default();

    for mut record in entries.records_mut() {
        let entry_id = record.entry_id().to_string();
        let previous_unique_id = record.unique_id().map(str::to_string);
        let previous_title = record.title().to_string();
        let mut applied = None;

        if let Some(candidate) =
            resolve_identifier(&entry_id, previous_unique_id.as_deref(), devices, request)
            && previous_unique_id.as_deref() != Some(candidate.value)
        {
            record.set_unique_id(candidate.value);
            applied = Some(candidate.rule);
        }

        let mut title_changed = false;
        if request.wants_title_update(&entry_id) {
            let title = record
                .unique_id()
                .map(|unique_id| regenerate_title(&previous_title, unique_id));
            if let Some(title) = title.filter(|title| *title != previous_title) {
                record.set_title(title);
                title_changed = true;
            }
        }

        if applied.is_some() || title_changed {
            report.changes.push(EntryChange {
                entry_id,
                rule: applied,
                previous_unique_id,
                unique_id: record.unique_id().map(str::to_string),
                previous_title,
                title: record.title().to_string(),
            });
        }
    }

    report
}
