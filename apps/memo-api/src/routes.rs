use axum::{
	Json, Router,
	body::Bytes,
	extract::{Path, State},
	http::{
		HeaderMap, StatusCode,
		header::{ETAG, IF_NONE_MATCH},
	},
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;
use uuid::Uuid;

use crate::state::AppState;
use memo_domain::{Memo, MemoForm};
use memo_service::{
	Error as ServiceError, ListMemosResponse, ROOT_VIEW, SeedOutcome, SummarizeRequest,
	SummarizeResponse, summarize,
};

const SEEDED_MESSAGE: &str = "샘플 데이터가 성공적으로 생성되었습니다.";
const SEED_SKIPPED_MESSAGE: &str = "이미 데이터가 존재합니다.";
const SEED_FAILED_MESSAGE: &str = "데이터 생성 중 오류가 발생했습니다.";

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/seed", get(seed))
		.route("/api/summarize", post(summarize_memo))
		.route("/api/memos", get(list_memos).post(create_memo))
		.route("/api/memos/{id}", get(get_memo).put(update_memo).delete(delete_memo))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

#[derive(Debug, Serialize)]
struct SeedBody {
	success: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	message: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	error: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	details: Option<String>,
}

async fn seed(State(state): State<AppState>) -> Response {
	let (status, body) = match state.service.seed_sample_data().await {
		Ok(SeedOutcome::Seeded { .. }) => (
			StatusCode::OK,
			SeedBody { success: true, message: Some(SEEDED_MESSAGE), error: None, details: None },
		),
		Ok(SeedOutcome::Skipped) => (
			StatusCode::OK,
			SeedBody {
				success: false,
				message: Some(SEED_SKIPPED_MESSAGE),
				error: None,
				details: None,
			},
		),
		Err(ServiceError::Seed { message, diagnostics }) => {
			let details = match (diagnostics.details, diagnostics.hint) {
				(Some(details), Some(hint)) => Some(format!("{details} ({hint})")),
				(details, hint) => details.or(hint).or(diagnostics.code),
			};

			(
				StatusCode::INTERNAL_SERVER_ERROR,
				SeedBody { success: false, message: None, error: Some(message), details },
			)
		},
		Err(err) => {
			tracing::error!(error = %err, "Unexpected seed failure.");

			(
				StatusCode::INTERNAL_SERVER_ERROR,
				SeedBody {
					success: false,
					message: None,
					error: Some(SEED_FAILED_MESSAGE.to_string()),
					details: None,
				},
			)
		},
	};

	(status, Json(body)).into_response()
}

async fn summarize_memo(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<Json<SummarizeResponse>, ApiError> {
	let req = SummarizeRequest::from_slice(&body).map_err(summarize_error)?;
	let response = state.service.summarize(req).await.map_err(summarize_error)?;

	Ok(Json(response))
}

/// Lists memos. The weak `ETag` tracks the root view generation; a degraded listing carries none.
async fn list_memos(State(state): State<AppState>, headers: HeaderMap) -> Response {
	// Read before the query: the tag may trail the data but never runs ahead of it.
	let etag = state.service.views.etag(ROOT_VIEW);

	if etag_matches(&headers, &etag) {
		return (StatusCode::NOT_MODIFIED, [(ETAG, etag)]).into_response();
	}

	let response = ListMemosResponse::from(state.service.list_memos().await);

	if response.degraded {
		return Json(response).into_response();
	}

	([(ETAG, etag)], Json(response)).into_response()
}

async fn create_memo(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<(StatusCode, Json<Memo>), ApiError> {
	let form = parse_form(&body)?;
	let memo = state.service.create_memo(form).await?;

	Ok((StatusCode::CREATED, Json(memo)))
}

async fn get_memo(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<Memo>, ApiError> {
	let id = parse_id(&id)?;

	match state.service.get_memo_by_id(id).await {
		Some(memo) => Ok(Json(memo)),
		None => Err(ApiError::new(StatusCode::NOT_FOUND, "Memo not found.")),
	}
}

async fn update_memo(
	State(state): State<AppState>,
	Path(id): Path<String>,
	body: Bytes,
) -> Result<Json<Memo>, ApiError> {
	let id = parse_id(&id)?;
	let form = parse_form(&body)?;
	let memo = state.service.update_memo(id, form).await?;

	Ok(Json(memo))
}

async fn delete_memo(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
	let id = parse_id(&id)?;

	state.service.delete_memo(id).await?;

	Ok(StatusCode::NO_CONTENT)
}

fn etag_matches(headers: &HeaderMap, etag: &str) -> bool {
	headers
		.get_all(IF_NONE_MATCH)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.flat_map(|value| value.split(','))
		.map(str::trim)
		.any(|candidate| candidate == "*" || candidate == etag)
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
	Uuid::parse_str(raw).map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "Invalid memo id."))
}

fn parse_form(body: &[u8]) -> Result<MemoForm, ApiError> {
	serde_json::from_slice(body).map_err(|err| {
		ApiError::new(StatusCode::BAD_REQUEST, format!("Invalid memo form: {err}."))
	})
}

fn summarize_error(err: ServiceError) -> ApiError {
	match err {
		ServiceError::InvalidRequest { message } => ApiError::new(StatusCode::BAD_REQUEST, message),
		ServiceError::MissingApiKey =>
			ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, summarize::API_KEY_MISSING_MESSAGE),
		ServiceError::Provider { kind, .. } =>
			ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, summarize::failure_message(kind)),
		_ => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, summarize::GENERIC_FAILURE_MESSAGE),
	}
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, message: impl Into<String>) -> Self {
		Self { status, message: message.into() }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } => Self::new(StatusCode::BAD_REQUEST, message),
			ServiceError::Write { .. } => Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
			ServiceError::MissingApiKey | ServiceError::Provider { .. } => summarize_error(err),
			ServiceError::Seed { message, .. } | ServiceError::Storage { message } => {
				tracing::error!(%message, "Request failed.");

				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal error.")
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(ErrorBody { error: self.message })).into_response()
	}
}
