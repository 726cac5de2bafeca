pub mod memos;
pub mod seed;
pub mod summarize;
pub mod views;

mod error;

pub use error::{Error, Result, WriteOp};
pub use memos::{ListMemosResponse, MemoListing};
pub use seed::SeedOutcome;
pub use summarize::{SummarizeRequest, SummarizeResponse};
pub use views::{ROOT_VIEW, ViewCache};

use std::{future::Future, pin::Pin, sync::Arc};

use memo_config::{Config, LlmProviderConfig};
use memo_providers::summarizer;
use memo_storage::db::Db;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait SummaryProvider
where
	Self: Send + Sync,
{
	fn summarize<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		api_key: &'a str,
		prompt: &'a str,
	) -> BoxFuture<'a, memo_providers::Result<String>>;
}

#[derive(Clone)]
pub struct Providers {
	pub summarizer: Arc<dyn SummaryProvider>,
}
impl Providers {
	pub fn new(summarizer: Arc<dyn SummaryProvider>) -> Self {
		Self { summarizer }
	}
}
impl Default for Providers {
	fn default() -> Self {
		Self { summarizer: Arc::new(DefaultProviders) }
	}
}

struct DefaultProviders;
impl SummaryProvider for DefaultProviders {
	fn summarize<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		api_key: &'a str,
		prompt: &'a str,
	) -> BoxFuture<'a, memo_providers::Result<String>> {
		Box::pin(summarizer::generate(cfg, api_key, prompt))
	}
}

pub struct MemoService {
	pub cfg: Config,
	pub db: Db,
	pub providers: Providers,
	pub views: ViewCache,
}
impl MemoService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db, providers: Providers::default(), views: ViewCache::new() }
	}

	pub fn with_providers(cfg: Config, db: Db, providers: Providers) -> Self {
		Self { cfg, db, providers, views: ViewCache::new() }
	}
}

pub(crate) fn log_store_error(context: &'static str, err: &memo_storage::Error) {
	let diagnostics = err.diagnostics();

	tracing::error!(
		error.message = %diagnostics.message,
		error.code = ?diagnostics.code,
		error.details = ?diagnostics.details,
		error.hint = ?diagnostics.hint,
		"{context}"
	);
}
