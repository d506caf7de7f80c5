use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Envelope, ACCOUNTS_PATH};
use tower::ServiceExt;

const ACCOUNT_ID: &str = "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc";
const ORG_ID: &str = "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c";

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn account_body(id: &str, org: &str) -> String {
    serde_json::json!({
        "data": {
            "type": "accounts",
            "id": id,
            "organisation_id": org,
            "attributes": {
                "name": ["Dong", "Wang"],
                "country": "GB",
                "base_currency": "GBP",
                "bank_id": "400300",
                "bank_id_code": "GBDSC",
                "bic": "NWBKGB22"
            }
        }
    })
    .to_string()
}

fn create_request(body: String) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(ACCOUNTS_PATH)
        .header(http::header::CONTENT_TYPE, "application/vnd.api+json")
        .body(body)
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- create ---

#[tokio::test]
async fn create_account_returns_201_with_version() {
    let resp = app()
        .oneshot(create_request(account_body(ACCOUNT_ID, ORG_ID)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.data.id, ACCOUNT_ID);
    assert_eq!(envelope.data.version, Some(0));
    assert_eq!(envelope.data.attributes["bic"], "NWBKGB22");
}

#[tokio::test]
async fn create_account_bad_id_returns_400() {
    let resp = app()
        .oneshot(create_request(account_body("not-a-uuid", ORG_ID)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error_message"], "id is not a valid uuid");
}

#[tokio::test]
async fn create_account_bad_organisation_returns_400() {
    let resp = app()
        .oneshot(create_request(account_body(ACCOUNT_ID, "org")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_account_missing_envelope_returns_422() {
    let resp = app()
        .oneshot(create_request(format!(r#"{{"id":"{ACCOUNT_ID}"}}"#)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- fetch ---

#[tokio::test]
async fn fetch_account_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", &format!("{ACCOUNTS_PATH}/{ACCOUNT_ID}")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fetch_account_bad_uuid_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", &format!("{ACCOUNTS_PATH}/not-a-uuid")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_account_not_found() {
    let resp = app()
        .oneshot(empty_request(
            "DELETE",
            &format!("{ACCOUNTS_PATH}/{ACCOUNT_ID}?version=0"),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_account_without_version_returns_400() {
    let resp = app()
        .oneshot(empty_request("DELETE", &format!("{ACCOUNTS_PATH}/{ACCOUNT_ID}")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- full lifecycle ---

#[tokio::test]
async fn account_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(create_request(account_body(ACCOUNT_ID, ORG_ID)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    // duplicate create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(create_request(account_body(ACCOUNT_ID, ORG_ID)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // fetch
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("{ACCOUNTS_PATH}/{ACCOUNT_ID}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Envelope = body_json(resp).await;
    assert_eq!(fetched.data.organisation_id, ORG_ID);
    assert_eq!(fetched.data.version, Some(0));

    // delete with a stale version
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request(
            "DELETE",
            &format!("{ACCOUNTS_PATH}/{ACCOUNT_ID}?version=5"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request(
            "DELETE",
            &format!("{ACCOUNTS_PATH}/{ACCOUNT_ID}?version=0"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // fetch after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("{ACCOUNTS_PATH}/{ACCOUNT_ID}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
