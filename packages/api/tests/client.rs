//! REST client tests against a mock backend.

use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use api::{ApiClient, ApiError};
use store::{
    AccountCreate, ContactCreate, LoginRequest, NoteAssociation, RecordType, Stage,
};

fn account_json(id: Uuid, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "industry": "Software",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z",
        "created_by": Uuid::new_v4(),
    })
}

fn user_json(id: Uuid) -> serde_json::Value {
    json!({
        "id": id,
        "username": "ada",
        "email": "ada@example.com",
        "role": "admin",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
    })
}

#[tokio::test]
async fn attaches_bearer_token_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .and(header("authorization", "Bearer opaque-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "total": 0,
            "limit": 20,
            "offset": 0,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::with_base(server.uri(), Some("opaque-token".to_string()));
    let page = client.list_accounts(20, 0).await.unwrap();
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn list_forwards_pagination_params_and_decodes_envelope() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [account_json(id, "Acme")],
            "total": 42,
            "limit": 5,
            "offset": 10,
        })))
        .mount(&server)
        .await;

    let client = ApiClient::with_base(server.uri(), None);
    let page = client.list_accounts(5, 10).await.unwrap();
    assert_eq!(page.total, 42);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, id);
    assert_eq!(page.data[0].name, "Acme");
}

#[tokio::test]
async fn login_returns_token_and_user() {
    let server = MockServer::start().await;
    let user_id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_partial_json(json!({"email": "ada@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-goes-here",
            "user": user_json(user_id),
        })))
        .mount(&server)
        .await;

    let client = ApiClient::with_base(server.uri(), None);
    let response = client
        .login(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(response.token, "jwt-goes-here");
    assert_eq!(response.user.id, user_id);
}

#[tokio::test]
async fn login_failure_maps_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": "Invalid email or password"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::with_base(server.uri(), None);
    let err = client
        .login(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn missing_record_maps_to_not_found() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{id}")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Account not found"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::with_base(server.uri(), None);
    let err = client.get_account(id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[tokio::test]
async fn server_error_message_is_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accounts"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"error": "pq: relation does not exist"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::with_base(server.uri(), None);
    let err = client
        .create_account(&AccountCreate {
            name: "Acme".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "pq: relation does not exist");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_status_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = ApiClient::with_base(server.uri(), None);
    let err = client.list_contacts(20, 0).await.unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status 502");
}

#[tokio::test]
async fn create_contact_serializes_missing_account_as_nil_uuid() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/contacts"))
        .and(body_partial_json(json!({
            "first_name": "Ada",
            "account_id": "00000000-0000-0000-0000-000000000000",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": id,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "created_by": Uuid::new_v4(),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::with_base(server.uri(), None);
    let contact = client
        .create_contact(&ContactCreate {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(contact.id, id);
    assert_eq!(contact.account_id, None);
}

#[tokio::test]
async fn opportunity_stage_survives_round_trip() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/opportunities/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "opportunity_name": "Renewal",
            "account_id": Uuid::new_v4(),
            "primary_contact_id": "00000000-0000-0000-0000-000000000000",
            "stage": "Closed Won",
            "amount": 125000.0,
            "probability": 0.9,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "created_by": Uuid::new_v4(),
        })))
        .mount(&server)
        .await;

    let client = ApiClient::with_base(server.uri(), None);
    let opp = client.get_opportunity(id).await.unwrap();
    assert_eq!(opp.stage, Stage::ClosedWon);
    assert!(opp.account_id.is_some());
    assert_eq!(opp.primary_contact_id, None);
}

#[tokio::test]
async fn notes_for_record_hits_typed_path_and_decodes_array() {
    let server = MockServer::start().await;
    let record_id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/notes/record/account/{record_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": Uuid::new_v4(),
                "content": "Follow up next week",
                "created_by": Uuid::new_v4(),
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z",
                "records": [
                    {"record_id": record_id, "record_type": "account"}
                ],
            }
        ])))
        .mount(&server)
        .await;

    let client = ApiClient::with_base(server.uri(), None);
    let notes = client
        .notes_for_record(RecordType::Account, record_id)
        .await
        .unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].records[0].record_type, RecordType::Account);
}

#[tokio::test]
async fn remove_association_sends_delete_with_body() {
    let server = MockServer::start().await;
    let note_id = Uuid::new_v4();
    let record_id = Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path("/notes/associations"))
        .and(body_partial_json(json!({
            "note_id": note_id,
            "record_id": record_id,
            "record_type": "contact",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Note association removed successfully"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::with_base(server.uri(), None);
    client
        .remove_note_association(&NoteAssociation {
            note_id,
            record_id,
            record_type: RecordType::Contact,
            created_by: Uuid::new_v4(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_discards_acknowledgment_body() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path(format!("/accounts/{id}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Account deleted successfully"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::with_base(server.uri(), None);
    client.delete_account(id).await.unwrap();
}

#[tokio::test]
async fn health_reports_database_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "database": {"status": "ok", "error": ""},
        })))
        .mount(&server)
        .await;

    let client = ApiClient::with_base(server.uri(), None);
    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.database.status, "ok");
}
