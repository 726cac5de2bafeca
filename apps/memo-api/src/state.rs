use std::sync::Arc;

use memo_service::MemoService;
use memo_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<MemoService>,
}
impl AppState {
	pub async fn new(config: memo_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		Ok(Self::from_service(MemoService::new(config, db)))
	}

	pub fn from_service(service: MemoService) -> Self {
		Self { service: Arc::new(service) }
	}
}
