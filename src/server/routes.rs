//! Game API handlers
//!
//! Every handler resolves the session, runs one game operation under the
//! session lock and echoes the session id back.

use super::error::ApiError;
use super::AppState;
use crate::core::{GuessRecord, Word};
use crate::game::{Game, GameError, GameStatus};
use crate::session::SessionId;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    pub session_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewGameRequest {
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub word: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NewGameResponse {
    pub message: &'static str,
    pub session_id: SessionId,
}

#[derive(Debug, Serialize)]
pub struct HintResponse {
    pub hint: Option<char>,
    pub session_id: SessionId,
}

#[derive(Debug, Serialize)]
pub struct GuessResponse {
    pub guess: GuessRecord,
    pub state: GameStatus,
    pub remaining_guesses: usize,
    pub session_id: SessionId,
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub state: GameStatus,
    pub session_id: SessionId,
}

#[derive(Debug, Serialize)]
pub struct GuessesResponse {
    pub guesses: Vec<GuessRecord>,
    pub session_id: SessionId,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: Word,
    pub session_id: SessionId,
}

#[derive(Debug, Serialize)]
pub struct RemainingGuessesResponse {
    pub remaining_guesses: usize,
    pub session_id: SessionId,
}

fn parse_session_id(raw: Option<&str>) -> Result<SessionId, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("session_id is required"))?;

    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("{raw} is not a valid session_id")))
}

/// Start a game, or reset the caller's game if it names an existing session
///
/// The body is optional. When present it must be a JSON object, whatever
/// content type the client sent.
async fn new_game(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse, ApiError> {
    let request = parse_new_game_body(&body)?;

    let session_id = match request.session_id.as_deref() {
        Some(raw) => {
            let id = parse_session_id(Some(raw))?;
            if state.store.contains(id) {
                state.store.with_game(id, Game::reset)?;
                tracing::info!(session_id = %id, "game reset");
                id
            } else {
                state.store.create()
            }
        }
        None => state.store.create(),
    };

    Ok(HttpResponse::Ok().json(NewGameResponse {
        message: "New game has started",
        session_id,
    }))
}

fn parse_new_game_body(body: &[u8]) -> Result<NewGameRequest, ApiError> {
    if body.trim_ascii().is_empty() {
        return Ok(NewGameRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request(format!("invalid new_game body: {e}")))
}

async fn hint(
    state: web::Data<AppState>,
    query: web::Query<SessionQuery>,
) -> Result<HttpResponse, ApiError> {
    let session_id = parse_session_id(query.session_id.as_deref())?;
    let hint = state.store.with_game(session_id, Game::hint)?;

    Ok(HttpResponse::Ok().json(HintResponse { hint, session_id }))
}

async fn guess(
    state: web::Data<AppState>,
    body: web::Json<GuessRequest>,
) -> Result<HttpResponse, ApiError> {
    submit_guess(&state, &body, false)
}

async fn hard_guess(
    state: web::Data<AppState>,
    body: web::Json<GuessRequest>,
) -> Result<HttpResponse, ApiError> {
    submit_guess(&state, &body, true)
}

fn submit_guess(
    state: &AppState,
    request: &GuessRequest,
    hard: bool,
) -> Result<HttpResponse, ApiError> {
    let session_id = parse_session_id(request.session_id.as_deref())?;

    let outcome = state.store.with_game(session_id, |game| {
        let record = if hard {
            game.make_hard_guess(&request.word)?.clone()
        } else {
            game.make_guess(&request.word)?.clone()
        };
        Ok::<_, GameError>((record, game.status(), game.remaining_guesses()))
    });

    match outcome {
        Ok((guess, status, remaining_guesses)) => {
            tracing::debug!(%session_id, word = %guess.word(), %status, hard, "guess accepted");
            Ok(HttpResponse::Ok().json(GuessResponse {
                guess,
                state: status,
                remaining_guesses,
                session_id,
            }))
        }
        Err(e) => {
            tracing::debug!(%session_id, word = %request.word, error = %e, hard, "guess rejected");
            Err(e.into())
        }
    }
}

async fn game_state(
    state: web::Data<AppState>,
    query: web::Query<SessionQuery>,
) -> Result<HttpResponse, ApiError> {
    let session_id = parse_session_id(query.session_id.as_deref())?;
    let status = state.store.with_game(session_id, |game| game.status());

    Ok(HttpResponse::Ok().json(StateResponse {
        state: status,
        session_id,
    }))
}

async fn guesses(
    state: web::Data<AppState>,
    query: web::Query<SessionQuery>,
) -> Result<HttpResponse, ApiError> {
    let session_id = parse_session_id(query.session_id.as_deref())?;
    let guesses = state
        .store
        .with_game(session_id, |game| game.guesses().to_vec());

    Ok(HttpResponse::Ok().json(GuessesResponse {
        guesses,
        session_id,
    }))
}

/// Reveal the answer; forfeits a game still in progress
async fn answer(
    state: web::Data<AppState>,
    query: web::Query<SessionQuery>,
) -> Result<HttpResponse, ApiError> {
    let session_id = parse_session_id(query.session_id.as_deref())?;
    let answer = state
        .store
        .with_game(session_id, |game| game.reveal_answer().clone());
    tracing::info!(%session_id, "answer revealed");

    Ok(HttpResponse::Ok().json(AnswerResponse { answer, session_id }))
}

async fn remaining_guesses(
    state: web::Data<AppState>,
    query: web::Query<SessionQuery>,
) -> Result<HttpResponse, ApiError> {
    let session_id = parse_session_id(query.session_id.as_deref())?;
    let remaining_guesses = state
        .store
        .with_game(session_id, |game| game.remaining_guesses());

    Ok(HttpResponse::Ok().json(RemainingGuessesResponse {
        remaining_guesses,
        session_id,
    }))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound(req.path().to_string()))
}

/// Register the game API, the health check and the JSON error handlers
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()),
    )
    .route("/health", web::get().to(health))
    .service(
        web::scope("/api")
            .route("/new_game", web::post().to(new_game))
            .route("/hint", web::get().to(hint))
            .route("/guess", web::post().to(guess))
            .route("/hard_guess", web::post().to(hard_guess))
            .route("/state", web::get().to(game_state))
            .route("/guesses", web::get().to(guesses))
            .route("/answer", web::get().to(answer))
            .route("/remaining_guesses", web::get().to(remaining_guesses)),
    )
    .default_service(web::to(not_found));
}
