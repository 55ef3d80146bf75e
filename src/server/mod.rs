//! The http surface: routes, the request timeout, and the
//! translation of build failures into json error bodies.

use axum::{
    extract::{rejection::QueryRejection, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use error_chain::ChainedError;
use serde::Serialize;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

use crate::builder::{self, BuildRequest};
use crate::ddragon::Context;
use crate::util::BuildMode;

pub const TIMEOUT_MESSAGE : &str = "Request Timeout. Please try again.";
pub const RATE_LIMIT_MESSAGE : &str = "Riot API Rate Limit Exceeded. Please try again later.";
pub const NO_VALID_ITEMS_MESSAGE : &str = "No valid items found. Please try again.";
pub const FETCH_FAILED_MESSAGE : &str = "Failed to fetch build. Please try again.";
pub const LIVENESS_MESSAGE : &str = "Random build server is running.";

#[derive(Clone)]
pub struct AppState {
    pub context : Context,
    pub mode : BuildMode,
    pub request_timeout : Duration,
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error : String,
}

/// Builds the router. `/` only exists in filtered mode.
pub fn router(state : AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    let mut app = Router::new().route("/random-build", get(random_build));
    if state.mode == BuildMode::Filtered {
        app = app.route("/", get(liveness));
    }

    app.layer(middleware::from_fn_with_state(state.clone(), enforce_timeout))
        .layer(cors)
        .with_state(state)
}

/// Binds to all interfaces on the given port and serves until the process dies.
pub async fn serve(state : AppState, port : u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, mode = %state.mode, "Server running on port {}", port);
    axum::serve(listener, router(state)).await
}

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

async fn random_build(State(state) : State<AppState>, query : Result<Query<BuildRequest>, QueryRejection>) -> Response {
    let request = match query {
        Ok(Query(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable query string");
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED_MESSAGE);
        }
    };

    match builder::random_build(&state.context, state.mode, &request).await {
        Ok(build) => Json(build).into_response(),
        Err(e) => {
            error!(error = %e.display_chain(), "Failed to assemble build");
            error_response(state.mode, &e)
        }
    }
}

/// Answers 408 when the wrapped handler takes longer than the configured timeout.
/// The handler future is dropped at that point, so its upstream requests are
/// cancelled too rather than left running in the background.
async fn enforce_timeout(State(state) : State<AppState>, request : Request, next : Next) -> Response {
    match tokio::time::timeout(state.request_timeout, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!(timeout = ?state.request_timeout, "Request timed out.");
            json_error(StatusCode::REQUEST_TIMEOUT, TIMEOUT_MESSAGE)
        }
    }
}

/// Maps a build failure to its status and body. Rate limiting is only
/// passed through in locked mode, filtered mode reports every upstream
/// failure as a 500.
pub fn error_response(mode : BuildMode, err : &builder::Error) -> Response {
    if mode == BuildMode::Locked && err.is_rate_limited() {
        json_error(StatusCode::TOO_MANY_REQUESTS, RATE_LIMIT_MESSAGE)
    }
    else if err.is_no_valid_items() {
        json_error(StatusCode::INTERNAL_SERVER_ERROR, NO_VALID_ITEMS_MESSAGE)
    }
    else {
        json_error(StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED_MESSAGE)
    }
}

fn json_error(status : StatusCode, message : &str) -> Response {
    (status, Json(ErrorResponse { error : message.to_string() })).into_response()
}
