use serde_json::Value;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Coarse failure category of a text-generation call, used to pick the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
	Credential,
	ModelNotFound,
	QuotaExhausted,
	Other,
}
impl ProviderErrorKind {
	/// Derives the kind from a Gemini error payload (`{"error": {"status", "details", ...}}`) and
	/// its HTTP status. Falls back to the message text when neither is conclusive.
	pub fn from_api_error(http_status: u16, body: &Value) -> Self {
		let error = body.get("error");
		let status = error.and_then(|e| e.get("status")).and_then(Value::as_str).unwrap_or("");
		let reasons = error
			.and_then(|e| e.get("details"))
			.and_then(Value::as_array)
			.map(|details| {
				details
					.iter()
					.filter_map(|detail| detail.get("reason").and_then(Value::as_str))
					.collect::<Vec<_>>()
			})
			.unwrap_or_default();

		if reasons.iter().any(|reason| reason.starts_with("API_KEY")) {
			return Self::Credential;
		}

		match (status, http_status) {
			("UNAUTHENTICATED" | "PERMISSION_DENIED", _) | (_, 401 | 403) => Self::Credential,
			("RESOURCE_EXHAUSTED", _) | (_, 429) => Self::QuotaExhausted,
			("NOT_FOUND", _) | (_, 404) => Self::ModelNotFound,
			_ => {
				let message =
					error.and_then(|e| e.get("message")).and_then(Value::as_str).unwrap_or("");

				Self::from_message(message)
			},
		}
	}

	/// Substring classification. Quota wins over model, model wins over credential.
	pub fn from_message(message: &str) -> Self {
		if message.contains("quota") || message.contains("Quota") {
			return Self::QuotaExhausted;
		}
		if message.contains("model") || message.contains("Model") {
			return Self::ModelNotFound;
		}
		if message.contains("API_KEY") || message.contains("api key") {
			return Self::Credential;
		}

		Self::Other
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Reqwest(#[from] reqwest::Error),
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
	#[error(transparent)]
	InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),
	#[error(transparent)]
	InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
	#[error("{message}")]
	InvalidConfig { message: String },
	#[error("{message}")]
	InvalidResponse { message: String },
	#[error("Provider returned HTTP {status}: {message}")]
	Api { status: u16, kind: ProviderErrorKind, message: String },
}
impl Error {
	/// Only provider-reported failures carry a specific kind. Transport, decode and local
	/// configuration failures are always `Other`.
	pub fn kind(&self) -> ProviderErrorKind {
		match self {
			Self::Api { kind, .. } => *kind,
			Self::Reqwest(_)
			| Self::SerdeJson(_)
			| Self::InvalidHeaderName(_)
			| Self::InvalidHeaderValue(_)
			| Self::InvalidConfig { .. }
			| Self::InvalidResponse { .. } => ProviderErrorKind::Other,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_key_reason_is_a_credential_error() {
		let body = serde_json::json!({
			"error": {
				"code": 400,
				"message": "API key not valid. Please pass a valid API key.",
				"status": "INVALID_ARGUMENT",
				"details": [{
					"@type": "type.googleapis.com/google.rpc.ErrorInfo",
					"reason": "API_KEY_INVALID"
				}]
			}
		});

		assert_eq!(ProviderErrorKind::from_api_error(400, &body), ProviderErrorKind::Credential);
	}

	#[test]
	fn structured_status_beats_message_text() {
		let body = serde_json::json!({
			"error": {
				"code": 429,
				"message": "Resource has been exhausted for model gemini-2.5-flash-lite.",
				"status": "RESOURCE_EXHAUSTED"
			}
		});

		assert_eq!(
			ProviderErrorKind::from_api_error(429, &body),
			ProviderErrorKind::QuotaExhausted
		);
	}

	#[test]
	fn unknown_model_maps_to_model_not_found() {
		let body = serde_json::json!({
			"error": { "code": 404, "message": "models/nope is not found.", "status": "NOT_FOUND" }
		});

		assert_eq!(ProviderErrorKind::from_api_error(404, &body), ProviderErrorKind::ModelNotFound);
	}

	#[test]
	fn inconclusive_payload_falls_back_to_message() {
		let body = serde_json::json!({
			"error": { "code": 500, "message": "Daily quota reached.", "status": "INTERNAL" }
		});

		assert_eq!(
			ProviderErrorKind::from_api_error(500, &body),
			ProviderErrorKind::QuotaExhausted
		);
		assert_eq!(
			ProviderErrorKind::from_api_error(502, &serde_json::json!("bad gateway")),
			ProviderErrorKind::Other
		);
	}

	#[test]
	fn message_precedence_prefers_quota_then_model() {
		assert_eq!(
			ProviderErrorKind::from_message("model quota exceeded for api key"),
			ProviderErrorKind::QuotaExhausted
		);
		assert_eq!(
			ProviderErrorKind::from_message("Model missing; check API_KEY"),
			ProviderErrorKind::ModelNotFound
		);
		assert_eq!(
			ProviderErrorKind::from_message("invalid api key"),
			ProviderErrorKind::Credential
		);
		assert_eq!(ProviderErrorKind::from_message("socket closed"), ProviderErrorKind::Other);
	}

	#[test]
	fn non_api_errors_ignore_display_text() {
		let err = Error::InvalidResponse { message: "Quota window closed for model x.".to_string() };

		assert_eq!(err.kind(), ProviderErrorKind::Other);

		let err = Error::InvalidConfig { message: "api key header for model x".to_string() };

		assert_eq!(err.kind(), ProviderErrorKind::Other);
	}
}
