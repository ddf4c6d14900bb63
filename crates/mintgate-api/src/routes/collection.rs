//! Collection overview endpoint

use axum::{extract::State, routing::get, Json, Router};

use nft_drop::fetch_collection_info;

use crate::dto::CollectionResponse;
use crate::AppState;

/// Create collection routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_collection))
}

/// GET /collection - Collection overview with configured fallbacks
pub async fn get_collection(State(state): State<AppState>) -> Json<CollectionResponse> {
    let info = fetch_collection_info(state.chain(), &state.config().drop).await;
    Json(CollectionResponse::from(info))
}
