//! Handler for slug redirects.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};

use crate::domain::RenderedResponse;
use crate::state::AppState;

/// Redirects a slug to its configured destination.
///
/// # Endpoint
///
/// `ANY /{slug}` (router fallback, every path not claimed by another route)
///
/// # Responses
///
/// - **302 Found**: slug declared with the temporary prefix
/// - **301 Moved Permanently**: slug declared only with the permanent prefix
/// - **404 Not Found**: unknown slug, configured not-found body
///
/// Redirects carry a `Location` header and the found template with the
/// destination substituted.
pub async fn redirect_handler(State(state): State<AppState>, req: Request) -> RenderedResponse {
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    state
        .redirect_service
        .handle(req.method().as_str(), req.uri().path(), client)
}
