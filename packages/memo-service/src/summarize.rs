use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, MemoService, Result};
use memo_providers::ProviderErrorKind;

pub const CONTENT_REQUIRED_MESSAGE: &str = "메모 내용이 필요합니다.";
pub const API_KEY_MISSING_MESSAGE: &str = "Gemini API 키가 설정되지 않았습니다.";
pub const CREDENTIAL_MESSAGE: &str = "Gemini API 키가 유효하지 않습니다. API 키를 확인해주세요.";
pub const MODEL_NOT_FOUND_MESSAGE: &str = "모델을 찾을 수 없습니다. 모델 이름을 확인해주세요.";
pub const QUOTA_MESSAGE: &str = "API 할당량을 초과했습니다. 잠시 후 다시 시도해주세요.";
pub const GENERIC_FAILURE_MESSAGE: &str = "요약 생성 중 오류가 발생했습니다.";

const PROMPT_PREAMBLE: &str = "다음 메모를 간결하고 명확하게 요약해주세요. 핵심 내용만 2-3문장으로 정리해주세요. 한국어로 답변해주세요.";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummarizeRequest {
	pub content: String,
}
impl SummarizeRequest {
	/// Accepts only a JSON object whose `content` is a non-empty string.
	pub fn from_slice(body: &[u8]) -> Result<Self> {
		let content = serde_json::from_slice::<Value>(body)
			.ok()
			.and_then(|json| json.get("content").and_then(Value::as_str).map(str::to_string))
			.filter(|content| !content.is_empty());

		match content {
			Some(content) => Ok(Self { content }),
			None => Err(Error::InvalidRequest { message: CONTENT_REQUIRED_MESSAGE.to_string() }),
		}
	}
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
	pub summary: String,
}

pub fn build_prompt(content: &str) -> String {
	format!("{PROMPT_PREAMBLE}\n\n메모 내용:\n{content}")
}

pub fn failure_message(kind: ProviderErrorKind) -> &'static str {
	match kind {
		ProviderErrorKind::Credential => CREDENTIAL_MESSAGE,
		ProviderErrorKind::ModelNotFound => MODEL_NOT_FOUND_MESSAGE,
		ProviderErrorKind::QuotaExhausted => QUOTA_MESSAGE,
		ProviderErrorKind::Other => GENERIC_FAILURE_MESSAGE,
	}
}

impl MemoService {
	pub async fn summarize(&self, req: SummarizeRequest) -> Result<SummarizeResponse> {
		if req.content.is_empty() {
			return Err(Error::InvalidRequest { message: CONTENT_REQUIRED_MESSAGE.to_string() });
		}

		let cfg = &self.cfg.providers.summarizer;
		let Some(api_key) = cfg.resolve_api_key() else {
			tracing::error!(provider = %cfg.provider_id, "Summarizer API key is not configured.");

			return Err(Error::MissingApiKey);
		};
		let prompt = build_prompt(&req.content);
		let summary =
			self.providers.summarizer.summarize(cfg, &api_key, &prompt).await.map_err(|err| {
				let err = Error::from(err);

				tracing::error!(error = %err, "Summary generation failed.");

				err
			})?;

		Ok(SummarizeResponse { summary })
	}
}
