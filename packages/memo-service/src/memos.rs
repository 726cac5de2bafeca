use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, MemoService, ROOT_VIEW, Result, WriteOp};
use memo_domain::{Memo, MemoForm, writegate};
use memo_storage::{models::MemoRow, queries};

/// Outcome of a listing read. A failed read is kept distinct from an empty table so callers can
/// tell them apart, while [`MemoListing::into_memos`] keeps the degrade-to-empty behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoListing {
	Loaded(Vec<Memo>),
	Unavailable,
}
impl MemoListing {
	pub fn is_unavailable(&self) -> bool {
		matches!(self, Self::Unavailable)
	}

	pub fn into_memos(self) -> Vec<Memo> {
		match self {
			Self::Loaded(memos) => memos,
			Self::Unavailable => Vec::new(),
		}
	}
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListMemosResponse {
	pub memos: Vec<Memo>,
	pub degraded: bool,
}
impl From<MemoListing> for ListMemosResponse {
	fn from(listing: MemoListing) -> Self {
		let degraded = listing.is_unavailable();

		Self { memos: listing.into_memos(), degraded }
	}
}

impl MemoService {
	/// All memos, newest first.
	pub async fn list_memos(&self) -> MemoListing {
		let rows = match queries::list_memos(&self.db.pool).await {
			Ok(rows) => rows,
			Err(err) => {
				crate::log_store_error("Error fetching memos.", &err);

				return MemoListing::Unavailable;
			},
		};

		match rows.into_iter().map(MemoRow::into_memo).collect::<memo_domain::Result<Vec<_>>>() {
			Ok(memos) => MemoListing::Loaded(memos),
			Err(err) => {
				tracing::error!(error = %err, "Memo listing contains a malformed row.");

				MemoListing::Unavailable
			},
		}
	}

	pub async fn create_memo(&self, form: MemoForm) -> Result<Memo> {
		let form = writegate::writegate(form)?;
		let now = OffsetDateTime::now_utc();
		let row = MemoRow {
			id: Uuid::new_v4(),
			title: form.title,
			content: form.content,
			category: form.category,
			tags: Some(form.tags),
			created_at: now,
			updated_at: now,
		};
		let stored = queries::insert_memo(&self.db.pool, &row).await.map_err(|err| {
			crate::log_store_error("Error creating memo.", &err);

			write_error(WriteOp::Create, &err)
		})?;
		let memo = stored.into_memo()?;

		self.views.invalidate(ROOT_VIEW);

		tracing::info!(memo_id = %memo.id, "Memo created.");

		Ok(memo)
	}

	pub async fn update_memo(&self, id: Uuid, form: MemoForm) -> Result<Memo> {
		let form = writegate::writegate(form)?;
		let now = OffsetDateTime::now_utc();
		let updated = queries::update_memo(&self.db.pool, id, &form, now).await.map_err(|err| {
			crate::log_store_error("Error updating memo.", &err);

			write_error(WriteOp::Update, &err)
		})?;
		let Some(row) = updated else {
			tracing::error!(memo_id = %id, "Error updating memo: no row matched.");

			return Err(Error::Write {
				op: WriteOp::Update,
				message: format!("No memo matched id {id}."),
			});
		};
		let memo = row.into_memo()?;

		self.views.invalidate(ROOT_VIEW);

		tracing::info!(memo_id = %memo.id, "Memo updated.");

		Ok(memo)
	}

	/// Hard delete. Deleting an id that does not exist succeeds.
	pub async fn delete_memo(&self, id: Uuid) -> Result<()> {
		let deleted = queries::delete_memo(&self.db.pool, id).await.map_err(|err| {
			crate::log_store_error("Error deleting memo.", &err);

			write_error(WriteOp::Delete, &err)
		})?;

		self.views.invalidate(ROOT_VIEW);

		tracing::info!(memo_id = %id, deleted, "Memo deleted.");

		Ok(())
	}

	/// `None` both when the memo does not exist and when the store cannot be read.
	pub async fn get_memo_by_id(&self, id: Uuid) -> Option<Memo> {
		let row = match queries::get_memo(&self.db.pool, id).await {
			Ok(row) => row?,
			Err(err) => {
				crate::log_store_error("Error fetching memo.", &err);

				return None;
			},
		};

		match row.into_memo() {
			Ok(memo) => Some(memo),
			Err(err) => {
				tracing::error!(memo_id = %id, error = %err, "Stored memo is malformed.");

				None
			},
		}
	}
}

fn write_error(op: WriteOp, err: &memo_storage::Error) -> Error {
	Error::Write { op, message: err.diagnostics().message }
}
