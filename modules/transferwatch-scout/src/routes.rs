use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use discord_client::types::{INTERACTION_APPLICATION_COMMAND, INTERACTION_PING};
use discord_client::{verify_signature, Interaction, InteractionResponse};
use transferwatch_core::{Category, Snapshot};

use crate::render::render_snapshot;
use crate::scout::HeadlineScout;

pub const CMD_TRANSFERS: &str = "transfers";
pub const CMD_RUMOURS: &str = "rumours";

#[derive(Clone)]
pub struct AppState {
    pub scout: Arc<HeadlineScout>,
    /// Hex-encoded Ed25519 public key from the Discord application page.
    pub public_key: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/interactions", post(interactions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Discord interaction webhook. Signature verification happens over the raw
/// body, before any parsing; unsigned traffic never reaches the handler.
async fn interactions(State(state): State<AppState>, headers: HeaderMap, body: String) -> Response {
    let Some(signature) = header_str(&headers, "x-signature-ed25519") else {
        return StatusCode::UNAUTHORIZED.into_response();
    };
    let Some(timestamp) = header_str(&headers, "x-signature-timestamp") else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    if !verify_signature(&state.public_key, signature, timestamp, &body) {
        warn!("Rejected interaction with invalid signature");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let interaction: Interaction = match serde_json::from_str(&body) {
        Ok(interaction) => interaction,
        Err(e) => {
            warn!(error = %e, "Unparseable interaction payload");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    Json(handle_interaction(&state.scout, &interaction).await).into_response()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Answer one verified interaction. Command failures come back as the
/// placeholder embed; the protocol reply itself never errors.
pub async fn handle_interaction(
    scout: &HeadlineScout,
    interaction: &Interaction,
) -> InteractionResponse {
    match interaction.kind {
        INTERACTION_PING => InteractionResponse::pong(),
        INTERACTION_APPLICATION_COMMAND => {
            let name = interaction
                .data
                .as_ref()
                .map(|d| d.name.as_str())
                .unwrap_or_default();
            let snapshot = command_snapshot(scout, name).await;
            InteractionResponse::message(vec![render_snapshot(&snapshot)])
        }
        other => {
            warn!(kind = other, "Unsupported interaction type, answering with pong");
            InteractionResponse::pong()
        }
    }
}

/// A fresh snapshot for a command, straight from the live page. The poller's
/// baselines are not consulted and not advanced here.
async fn command_snapshot(scout: &HeadlineScout, name: &str) -> Snapshot {
    let category = match name {
        CMD_TRANSFERS => Category::Official,
        CMD_RUMOURS => Category::Rumour,
        other => {
            warn!(command = other, "Unknown command, rendering placeholder");
            return Snapshot::empty(Category::Official);
        }
    };

    match scout.snapshot_for(category).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(command = name, error = %e, "Command fetch failed, rendering placeholder");
            Snapshot::empty(category)
        }
    }
}
