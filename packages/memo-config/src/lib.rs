mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, LlmProviderConfig, Postgres, Providers, Service, Storage};

use std::{fs, net::SocketAddr, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.parse::<SocketAddr>().is_err() {
		return Err(Error::Validation {
			message: "service.http_bind must be a socket address.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}

	let summarizer = &cfg.providers.summarizer;

	for (label, value) in [
		("providers.summarizer.provider_id", &summarizer.provider_id),
		("providers.summarizer.api_base", &summarizer.api_base),
		("providers.summarizer.model", &summarizer.model),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if summarizer.timeout_ms == Some(0) {
		return Err(Error::Validation {
			message: "providers.summarizer.timeout_ms must be greater than zero when set."
				.to_string(),
		});
	}
	if summarizer.default_headers.values().any(|value| !value.is_string()) {
		return Err(Error::Validation {
			message: "providers.summarizer.default_headers values must be strings.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let postgres = &mut cfg.storage.postgres;

	if postgres.service_dsn.as_deref().map(|dsn| dsn.trim().is_empty()).unwrap_or(false) {
		postgres.service_dsn = None;
	}

	let summarizer = &mut cfg.providers.summarizer;

	if summarizer.api_key.as_deref().map(|key| key.trim().is_empty()).unwrap_or(false) {
		summarizer.api_key = None;
	}
	if summarizer.api_key_env.as_deref().map(|name| name.trim().is_empty()).unwrap_or(false) {
		summarizer.api_key_env = None;
	}

	let trimmed = summarizer.api_base.trim_end_matches('/').len();

	summarizer.api_base.truncate(trimmed);
}
