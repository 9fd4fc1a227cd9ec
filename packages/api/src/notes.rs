//! Note endpoints, including per-record lookup and associations.

use store::{Note, NoteAssociation, NoteCreate, NoteUpdate, Page, RecordType};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// `GET /notes`
    pub async fn list_notes(&self, limit: u32, offset: u32) -> Result<Page<Note>> {
        self.get_with_query("/notes", &[("limit", limit), ("offset", offset)])
            .await
    }

    /// `GET /notes/:id`
    pub async fn get_note(&self, id: Uuid) -> Result<Note> {
        self.get(&format!("/notes/{id}")).await
    }

    /// `GET /notes/record/:type/:id` — notes linked to one record, as a
    /// plain array.
    pub async fn notes_for_record(
        &self,
        record_type: RecordType,
        record_id: Uuid,
    ) -> Result<Vec<Note>> {
        self.get(&format!("/notes/record/{record_type}/{record_id}"))
            .await
    }

    /// `POST /notes`. The server rejects a note with no associations.
    pub async fn create_note(&self, payload: &NoteCreate) -> Result<Note> {
        self.post("/notes", payload).await
    }

    /// `PUT /notes/:id`
    pub async fn update_note(&self, id: Uuid, payload: &NoteUpdate) -> Result<Note> {
        self.put(&format!("/notes/{id}"), payload).await
    }

    /// `DELETE /notes/:id`
    pub async fn delete_note(&self, id: Uuid) -> Result<()> {
        self.delete(&format!("/notes/{id}")).await
    }

    /// `POST /notes/associations` — link a note to a record.
    pub async fn add_note_association(&self, payload: &NoteAssociation) -> Result<()> {
        self.post::<_, serde_json::Value>("/notes/associations", payload)
            .await?;
        Ok(())
    }

    /// `DELETE /notes/associations` — unlink a note from a record.
    pub async fn remove_note_association(&self, payload: &NoteAssociation) -> Result<()> {
        self.delete_with_body("/notes/associations", payload).await
    }
}
