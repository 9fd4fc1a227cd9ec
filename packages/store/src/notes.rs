//! Notes state: the regular collection plus the related-notes panel.
//!
//! Detail views show the notes linked to the record on screen. That list is
//! fetched per record and tracked separately from the main notes collection
//! so navigating between a detail view and the notes pages does not clobber
//! either cache.

use crate::models::Note;
use crate::slice::CollectionSlice;

/// Notes collection plus the per-record related list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotesSlice {
    pub collection: CollectionSlice<Note>,
    /// Notes linked to the record currently on screen.
    pub related: Vec<Note>,
    pub related_loading: bool,
    pub related_error: Option<String>,
}

impl NotesSlice {
    pub fn related_pending(&mut self) {
        self.related_loading = true;
        self.related_error = None;
    }

    pub fn related_fulfilled(&mut self, notes: Vec<Note>) {
        self.related_loading = false;
        self.related = notes;
    }

    pub fn related_rejected(&mut self, error: impl Into<String>) {
        self.related_loading = false;
        self.related_error = Some(error.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn note(content: &str) -> Note {
        Note {
            id: Uuid::new_v4(),
            content: content.to_string(),
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            records: Vec::new(),
        }
    }

    #[test]
    fn test_related_lifecycle_is_independent_of_collection() {
        let mut slice = NotesSlice::default();
        slice.collection.created(note("in collection"));

        slice.related_pending();
        assert!(slice.related_loading);
        slice.related_fulfilled(vec![note("linked")]);
        assert!(!slice.related_loading);
        assert_eq!(slice.related.len(), 1);
        assert_eq!(slice.collection.items.len(), 1);
    }

    #[test]
    fn test_related_rejected_keeps_previous_list() {
        let mut slice = NotesSlice::default();
        slice.related_fulfilled(vec![note("kept")]);
        slice.related_pending();
        slice.related_rejected("timeout");
        assert_eq!(slice.related.len(), 1);
        assert_eq!(slice.related_error.as_deref(), Some("timeout"));
    }
}
