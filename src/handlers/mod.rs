pub mod generate;
pub mod health;
pub mod influencer;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/api/generate", post(generate::generate))
        .route("/api/health", get(health::health))
        .route(
            "/api/influencer",
            get(influencer::get_influencer)
                .put(influencer::put_influencer)
                .delete(influencer::delete_influencer),
        )
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::build_router;
    use crate::llm::scripted::ScriptedModel;
    use crate::llm::{ModelRequest, PromptModel};
    use crate::state::AppState;
    use crate::store::InfluencerStore;

    /// 1x1 transparent PNG.
    pub const PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

    pub const TEST_BODY_LIMIT: usize = 64 * 1024;

    /// Read access to the scripted model behind an [`AppState`].
    pub struct ScriptedHandle(Arc<PromptModel>);

    impl ScriptedHandle {
        pub fn calls(&self) -> Vec<ModelRequest> {
            match self.0.as_ref() {
                PromptModel::Scripted(model) => model.calls(),
                _ => Vec::new(),
            }
        }
    }

    fn state_with(model: ScriptedModel) -> (AppState, ScriptedHandle) {
        let state = AppState::new(PromptModel::Scripted(model), InfluencerStore::in_memory());
        let handle = ScriptedHandle(Arc::clone(&state.model));
        (state, handle)
    }

    pub fn scripted_state(replies: Vec<Result<&str, &str>>) -> (AppState, ScriptedHandle) {
        state_with(ScriptedModel::new(replies))
    }

    pub fn unconfigured_state() -> (AppState, ScriptedHandle) {
        state_with(ScriptedModel::unconfigured())
    }

    pub fn request_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
        request_json("POST", uri, body)
    }

    /// Runs one request through the router; empty or non-JSON bodies come
    /// back as `Value::Null`.
    pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(state.clone(), TEST_BODY_LIMIT)
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }
}
