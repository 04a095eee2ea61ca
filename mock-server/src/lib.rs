use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Header the server expects the CSRF token in. Safe methods (GET) are
/// exempt from the check, matching how web frameworks scope CSRF
/// protection to state-changing requests.
pub const CSRF_HEADER: &str = "x-csrftoken";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayItem {
    pub id: Uuid,
    pub url: String,
    pub hidden: bool,
}

#[derive(Deserialize)]
pub struct CreateDisplayItem {
    pub url: String,
    #[serde(default)]
    pub hidden: bool,
}

pub type Db = Arc<RwLock<HashMap<Uuid, DisplayItem>>>;

#[derive(Clone)]
struct AppState {
    db: Db,
    csrf_token: Arc<str>,
}

pub fn app(csrf_token: &str) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(HashMap::new())),
        csrf_token: csrf_token.into(),
    };
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .with_state(state)
}

pub async fn run(listener: TcpListener, csrf_token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(csrf_token)).await
}

async fn list_items(State(state): State<AppState>) -> Json<Vec<DisplayItem>> {
    let items = state.db.read().await;
    Json(items.values().cloned().collect())
}

/// The CSRF check runs before the body is parsed, so a missing or stale
/// token yields 403 even for a malformed payload.
async fn create_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<(StatusCode, Json<DisplayItem>), (StatusCode, String)> {
    check_csrf(&headers, &state.csrf_token)?;
    let input: CreateDisplayItem = serde_json::from_str(&body)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;
    let item = DisplayItem {
        id: Uuid::new_v4(),
        url: input.url,
        hidden: input.hidden,
    };
    state.db.write().await.insert(item.id, item.clone());
    Ok((StatusCode::CREATED, Json(item)))
}

fn check_csrf(headers: &HeaderMap, expected: &str) -> Result<(), (StatusCode, String)> {
    match headers.get(CSRF_HEADER).and_then(|v| v.to_str().ok()) {
        Some(token) if token == expected => Ok(()),
        _ => Err((
            StatusCode::FORBIDDEN,
            "CSRF verification failed".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_item_serializes_to_json() {
        let item = DisplayItem {
            id: Uuid::nil(),
            url: "https://example.com/a.jpg".to_string(),
            hidden: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["url"], "https://example.com/a.jpg");
        assert_eq!(json["hidden"], false);
    }

    #[test]
    fn display_item_roundtrips_through_json() {
        let item = DisplayItem {
            id: Uuid::new_v4(),
            url: "https://example.com/b.jpg".to_string(),
            hidden: true,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: DisplayItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, item.id);
        assert_eq!(back.url, item.url);
        assert_eq!(back.hidden, item.hidden);
    }

    #[test]
    fn create_display_item_defaults_hidden_to_false() {
        let input: CreateDisplayItem =
            serde_json::from_str(r#"{"url":"https://example.com/c.jpg"}"#).unwrap();
        assert_eq!(input.url, "https://example.com/c.jpg");
        assert!(!input.hidden);
    }

    #[test]
    fn create_display_item_rejects_missing_url() {
        let result: Result<CreateDisplayItem, _> = serde_json::from_str(r#"{"hidden":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn check_csrf_accepts_matching_token() {
        let mut headers = HeaderMap::new();
        headers.insert(CSRF_HEADER, "secret".parse().unwrap());
        assert!(check_csrf(&headers, "secret").is_ok());
    }

    #[test]
    fn check_csrf_rejects_missing_header() {
        let headers = HeaderMap::new();
        let (status, _) = check_csrf(&headers, "secret").unwrap_err();
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
