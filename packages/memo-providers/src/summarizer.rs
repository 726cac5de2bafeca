use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{Error, ProviderErrorKind, Result};

/// Sends one prompt to `generateContent` and returns the generated text.
pub async fn generate(
	cfg: &memo_config::LlmProviderConfig,
	api_key: &str,
	prompt: &str,
) -> Result<String> {
	let mut builder = Client::builder();

	if let Some(timeout_ms) = cfg.timeout_ms {
		builder = builder.timeout(Duration::from_millis(timeout_ms));
	}

	let client = builder.build()?;
	let url = format!("{}/v1beta/models/{}:generateContent", cfg.api_base, cfg.model);
	let body = serde_json::json!({
		"contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let status = res.status();
	let raw = res.text().await?;

	if !status.is_success() {
		tracing::warn!(provider = %cfg.provider_id, model = %cfg.model, %status, "Generation request failed.");

		return Err(parse_error_response(status.as_u16(), &raw));
	}

	let json: Value = serde_json::from_str(&raw)?;

	parse_generate_response(json)
}

fn parse_error_response(status: u16, raw: &str) -> Error {
	let json = serde_json::from_str::<Value>(raw).unwrap_or(Value::Null);
	let kind = ProviderErrorKind::from_api_error(status, &json);
	let message = json
		.get("error")
		.and_then(|e| e.get("message"))
		.and_then(Value::as_str)
		.map(str::to_string)
		.unwrap_or_else(|| raw.trim().to_string());

	Error::Api { status, kind, message }
}

fn parse_generate_response(json: Value) -> Result<String> {
	let parts = json
		.get("candidates")
		.and_then(Value::as_array)
		.and_then(|candidates| candidates.first())
		.and_then(|candidate| candidate.get("content"))
		.and_then(|content| content.get("parts"))
		.and_then(Value::as_array);
	let Some(parts) = parts else {
		let reason = json
			.get("promptFeedback")
			.and_then(|feedback| feedback.get("blockReason"))
			.and_then(Value::as_str);

		return Err(Error::InvalidResponse {
			message: match reason {
				Some(reason) => format!("Generation was blocked: {reason}."),
				None => "Generation response is missing candidate content.".to_string(),
			},
		});
	};
	let text = parts
		.iter()
		.filter_map(|part| part.get("text").and_then(Value::as_str))
		.collect::<String>();

	if text.is_empty() {
		return Err(Error::InvalidResponse {
			message: "Generation response contains no text parts.".to_string(),
		});
	}

	Ok(text)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn joins_text_parts_of_first_candidate() {
		let json = serde_json::json!({
			"candidates": [
				{ "content": { "parts": [{ "text": "첫 문장. " }, { "text": "둘째 문장." }] } },
				{ "content": { "parts": [{ "text": "ignored" }] } }
			]
		});
		let text = parse_generate_response(json).expect("parse failed");

		assert_eq!(text, "첫 문장. 둘째 문장.");
	}

	#[test]
	fn reports_block_reason() {
		let json = serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } });
		let err = parse_generate_response(json).expect_err("blocked prompt must fail");

		assert!(err.to_string().contains("SAFETY"), "{err}");
		assert_eq!(err.kind(), ProviderErrorKind::Other);
	}

	#[test]
	fn error_body_keeps_provider_message_and_kind() {
		let raw = r#"{"error":{"code":429,"message":"You exceeded your current quota.","status":"RESOURCE_EXHAUSTED"}}"#;
		let err = parse_error_response(429, raw);

		assert_eq!(err.kind(), ProviderErrorKind::QuotaExhausted);
		assert!(err.to_string().contains("You exceeded your current quota."), "{err}");
	}

	#[test]
	fn non_json_error_body_is_kept_verbatim() {
		let err = parse_error_response(503, "upstream unavailable\n");

		assert_eq!(err.kind(), ProviderErrorKind::Other);
		assert!(err.to_string().ends_with("upstream unavailable"), "{err}");
	}
}
