use std::fmt;

use memo_providers::ProviderErrorKind;
use memo_storage::Diagnostics;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
	Create,
	Update,
	Delete,
}
impl fmt::Display for WriteOp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Create => "create",
			Self::Update => "update",
			Self::Delete => "delete",
		})
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	/// Store rejected a write. The caller only sees the operation, the cause is logged.
	#[error("Failed to {op} memo")]
	Write { op: WriteOp, message: String },
	#[error("{message}")]
	Seed { message: String, diagnostics: Diagnostics },
	#[error("Summarizer API key is not configured.")]
	MissingApiKey,
	#[error("Provider error: {message}")]
	Provider { kind: ProviderErrorKind, message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<memo_domain::Error> for Error {
	fn from(err: memo_domain::Error) -> Self {
		match err {
			memo_domain::Error::InvalidForm { .. } =>
				Self::InvalidRequest { message: err.to_string() },
			memo_domain::Error::MalformedRow { message } => Self::Storage { message },
		}
	}
}

impl From<memo_storage::Error> for Error {
	fn from(err: memo_storage::Error) -> Self {
		match err {
			memo_storage::Error::Domain(inner) => inner.into(),
			memo_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
		}
	}
}

impl From<memo_providers::Error> for Error {
	fn from(err: memo_providers::Error) -> Self {
		Self::Provider { kind: err.kind(), message: err.to_string() }
	}
}
