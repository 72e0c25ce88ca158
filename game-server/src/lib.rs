use std::sync::Arc;
use tracing::warn;
use warp::http::StatusCode;
use warp::Filter;

use crate::session_manager::SessionManager;
use game_types::{GameError, GameIntent};

pub mod config;
pub mod session_manager;

/// Largest accepted intent body.
const MAX_INTENT_BYTES: u64 = 16 * 1024;

pub fn create_routes(
    session_manager: Arc<SessionManager>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let session_filter = warp::any().map({
        let session_manager = session_manager.clone();
        move || session_manager.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    let state = warp::path!("api" / "state")
        .and(warp::get())
        .and(session_filter.clone())
        .and_then(handle_state_request);

    let intents = warp::path!("api" / "intents")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_INTENT_BYTES))
        .and(warp::body::json())
        .and(session_filter.clone())
        .and_then(handle_intent_request);

    let leaderboard = warp::path!("api" / "leaderboard")
        .and(warp::get())
        .and(session_filter.clone())
        .and_then(handle_leaderboard_request);

    let clear_leaderboard = warp::path!("api" / "leaderboard")
        .and(warp::delete())
        .and(session_filter)
        .and_then(handle_clear_leaderboard_request);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "DELETE"]);

    health
        .or(state)
        .or(intents)
        .or(leaderboard)
        .or(clear_leaderboard)
        .recover(handle_rejection)
        .with(cors)
        .with(warp::log("tictactoe"))
}

async fn handle_state_request(
    session_manager: Arc<SessionManager>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&session_manager.state().await))
}

async fn handle_intent_request(
    intent: GameIntent,
    session_manager: Arc<SessionManager>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let intent_name = intent.name();

    match session_manager.dispatch(intent).await {
        Ok(state) => Ok(warp::reply::with_status(
            warp::reply::json(&state),
            StatusCode::OK,
        )),
        Err(err) => {
            warn!("Rejected {} intent: {}", intent_name, err);
            Ok(warp::reply::with_status(
                warp::reply::json(&err),
                StatusCode::UNPROCESSABLE_ENTITY,
            ))
        }
    }
}

async fn handle_leaderboard_request(
    session_manager: Arc<SessionManager>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&session_manager.leaderboard().await))
}

async fn handle_clear_leaderboard_request(
    session_manager: Arc<SessionManager>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&session_manager.clear_leaderboard().await))
}

/// Turn unparseable intent bodies into a `MalformedIntent` error body.
async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, warp::Rejection> {
    if let Some(body_err) = err.find::<warp::filters::body::BodyDeserializeError>() {
        let error = GameError::MalformedIntent {
            message: body_err.to_string(),
        };
        return Ok(warp::reply::with_status(
            warp::reply::json(&error),
            StatusCode::BAD_REQUEST,
        ));
    }

    Err(err)
}
