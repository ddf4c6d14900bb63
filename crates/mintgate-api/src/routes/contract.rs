//! Contract diagnostics endpoint

use axum::{extract::State, routing::get, Json, Router};

use eth_contract_client::detect_capabilities;

use crate::dto::ContractStatusResponse;
use crate::AppState;

/// Create contract routes
pub fn router() -> Router<AppState> {
    Router::new().route("/status", get(get_status))
}

/// GET /contract/status - Probe the contract surface
pub async fn get_status(State(state): State<AppState>) -> Json<ContractStatusResponse> {
    let capabilities = detect_capabilities(state.chain()).await;

    Json(ContractStatusResponse {
        reachable: capabilities.is_reachable,
        contract: state.chain().contract_address().to_string(),
        network: state.config().network.to_string(),
        chain_id: capabilities.chain_id,
        tier: capabilities.tier.as_str().to_string(),
        has_mint_surface: capabilities.has_mint_surface,
        has_presale_price: capabilities.has_presale_price,
        has_pause_flag: capabilities.has_pause_flag,
        has_wallet_cap: capabilities.has_wallet_cap,
        has_allowlist: capabilities.has_allowlist,
    })
}
