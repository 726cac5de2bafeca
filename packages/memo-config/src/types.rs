use std::env;

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub providers: Providers,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	/// Connection string with the public (least privileged) role.
	pub dsn: String,
	/// Optional. Connection string with the privileged service role, preferred when present.
	pub service_dsn: Option<String>,
	pub pool_max_conns: u32,
}
impl Postgres {
	pub fn effective_dsn(&self) -> &str {
		self.service_dsn.as_deref().unwrap_or(&self.dsn)
	}
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub summarizer: LlmProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct LlmProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: Option<String>,
	/// Optional. Environment variable consulted when `api_key` is unset, read on every call.
	pub api_key_env: Option<String>,
	pub model: String,
	/// Optional. No client-side timeout when unset.
	pub timeout_ms: Option<u64>,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}
impl LlmProviderConfig {
	pub fn resolve_api_key(&self) -> Option<String> {
		if let Some(key) = self.api_key.as_ref() {
			return Some(key.clone());
		}

		let name = self.api_key_env.as_deref()?;

		env::var(name).ok().filter(|value| !value.trim().is_empty())
	}
}

fn default_log_level() -> String {
	"info".to_string()
}
