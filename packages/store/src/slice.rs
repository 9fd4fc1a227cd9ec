//! # Request lifecycle state for one entity collection
//!
//! [`CollectionSlice`] is the client-side cache for a single record type. The
//! same lifecycle applies everywhere: an action marks the slice pending, then
//! either merges the server payload in (fulfilled) or retains the error string
//! for display (rejected). The view re-renders from whatever snapshot the
//! slice holds; last write wins.
//!
//! A failed fetch deliberately leaves the previous items in place. Stale data
//! plus an error banner beats an empty table.

use uuid::Uuid;

use crate::models::{Account, Contact, Note, Opportunity, Page};

/// Access to a record's id, for the update/delete merges.
pub trait Keyed {
    fn key(&self) -> Uuid;
}

impl Keyed for Account {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Contact {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Opportunity {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Note {
    fn key(&self) -> Uuid {
        self.id
    }
}

/// Cached collection of one record type plus the in-flight request state.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionSlice<T> {
    pub items: Vec<T>,
    /// The record the detail/form views are looking at.
    pub current: Option<T>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for CollectionSlice<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            total: 0,
            limit: 20,
            offset: 0,
            loading: false,
            error: None,
        }
    }
}

impl<T: Keyed + Clone> CollectionSlice<T> {
    /// A request is in flight.
    pub fn pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// A list fetch succeeded; the payload replaces the collection.
    pub fn fulfilled_list(&mut self, page: Page<T>) {
        self.loading = false;
        self.items = page.data;
        self.total = page.total;
        self.limit = page.limit;
        self.offset = page.offset;
    }

    /// A single fetch succeeded; only `current` changes.
    pub fn fulfilled_one(&mut self, item: T) {
        self.loading = false;
        self.current = Some(item);
    }

    /// A create succeeded; the new record joins the collection.
    pub fn created(&mut self, item: T) {
        self.loading = false;
        self.items.push(item);
        self.total += 1;
    }

    /// An update succeeded; the matching item and `current` are replaced.
    pub fn updated(&mut self, item: T) {
        self.loading = false;
        if let Some(existing) = self.items.iter_mut().find(|i| i.key() == item.key()) {
            *existing = item.clone();
        }
        if self.current.as_ref().map(Keyed::key) == Some(item.key()) {
            self.current = Some(item);
        }
    }

    /// A delete succeeded; the record leaves the collection, and `current`
    /// is cleared if it pointed at the deleted record.
    pub fn deleted(&mut self, id: Uuid) {
        self.loading = false;
        self.items.retain(|i| i.key() != id);
        self.total = self.total.saturating_sub(1);
        if self.current.as_ref().map(Keyed::key) == Some(id) {
            self.current = None;
        }
    }

    /// A request failed; existing items stay put.
    pub fn rejected(&mut self, error: impl Into<String>) {
        self.loading = false;
        self.error = Some(error.into());
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_params(&mut self, limit: u32, offset: u32) {
        self.limit = limit;
        self.offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn account(name: &str) -> Account {
        Account {
            id: Uuid::new_v4(),
            name: name.to_string(),
            industry: String::new(),
            website: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            country: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            created_by: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_pending_clears_error_and_sets_loading() {
        let mut slice = CollectionSlice::<Account>::default();
        slice.rejected("boom");
        slice.pending();
        assert!(slice.loading);
        assert!(slice.error.is_none());
    }

    #[test]
    fn test_fulfilled_list_replaces_collection() {
        let mut slice = CollectionSlice::<Account>::default();
        slice.items = vec![account("old")];
        slice.pending();
        slice.fulfilled_list(Page {
            data: vec![account("a"), account("b")],
            total: 2,
            limit: 50,
            offset: 10,
        });
        assert!(!slice.loading);
        assert_eq!(slice.items.len(), 2);
        assert_eq!(slice.total, 2);
        assert_eq!(slice.limit, 50);
        assert_eq!(slice.offset, 10);
    }

    #[test]
    fn test_fulfilled_one_only_touches_current() {
        let mut slice = CollectionSlice::<Account>::default();
        slice.items = vec![account("kept")];
        slice.fulfilled_one(account("detail"));
        assert_eq!(slice.items.len(), 1);
        assert_eq!(slice.current.as_ref().unwrap().name, "detail");
    }

    #[test]
    fn test_created_pushes_and_bumps_total() {
        let mut slice = CollectionSlice::<Account>::default();
        slice.created(account("new"));
        assert_eq!(slice.items.len(), 1);
        assert_eq!(slice.total, 1);
    }

    #[test]
    fn test_updated_replaces_item_and_current() {
        let mut slice = CollectionSlice::<Account>::default();
        let mut acct = account("before");
        slice.items = vec![acct.clone()];
        slice.current = Some(acct.clone());
        acct.name = "after".to_string();
        slice.updated(acct);
        assert_eq!(slice.items[0].name, "after");
        assert_eq!(slice.current.as_ref().unwrap().name, "after");
    }

    #[test]
    fn test_updated_leaves_unrelated_current() {
        let mut slice = CollectionSlice::<Account>::default();
        let other = account("other");
        slice.current = Some(other.clone());
        slice.updated(account("changed"));
        assert_eq!(slice.current, Some(other));
    }

    #[test]
    fn test_deleted_filters_and_clears_matching_current() {
        let mut slice = CollectionSlice::<Account>::default();
        let acct = account("doomed");
        slice.items = vec![acct.clone(), account("kept")];
        slice.current = Some(acct.clone());
        slice.total = 2;
        slice.deleted(acct.id);
        assert_eq!(slice.items.len(), 1);
        assert_eq!(slice.total, 1);
        assert!(slice.current.is_none());
    }

    #[test]
    fn test_deleted_total_saturates_at_zero() {
        let mut slice = CollectionSlice::<Account>::default();
        slice.deleted(Uuid::new_v4());
        assert_eq!(slice.total, 0);
    }

    #[test]
    fn test_rejected_keeps_stale_items() {
        let mut slice = CollectionSlice::<Account>::default();
        slice.items = vec![account("stale")];
        slice.pending();
        slice.rejected("server unavailable");
        assert!(!slice.loading);
        assert_eq!(slice.error.as_deref(), Some("server unavailable"));
        assert_eq!(slice.items.len(), 1);
    }
}
