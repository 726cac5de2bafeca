use uuid::Uuid;

use crate::{Error, MemoService, ROOT_VIEW, Result};
use memo_domain::SAMPLE_MEMOS;
use memo_storage::{models::MemoRow, queries};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
	Seeded { inserted: u64 },
	Skipped,
}

impl MemoService {
	/// Populates an empty store with the built-in sample notes.
	///
	/// The existence check and the insert are separate statements, so two concurrent calls
	/// against an empty table can both insert. Preventing that needs a store-level guard such as a
	/// uniqueness constraint on the sample set.
	pub async fn seed_sample_data(&self) -> Result<SeedOutcome> {
		let exists = queries::any_memo_exists(&self.db.pool).await.map_err(|err| {
			crate::log_store_error("Error checking existing data.", &err);

			seed_error("Failed to check existing data", &err)
		})?;

		if exists {
			tracing::info!("Memos already exist. Skipping seed.");

			return Ok(SeedOutcome::Skipped);
		}

		let rows = SAMPLE_MEMOS
			.iter()
			.map(|sample| {
				let form = sample.form();

				MemoRow {
					id: Uuid::new_v4(),
					title: form.title,
					content: form.content,
					category: form.category,
					tags: Some(form.tags),
					created_at: sample.created_at,
					updated_at: sample.updated_at,
				}
			})
			.collect::<Vec<_>>();
		let inserted = queries::insert_memos(&self.db.pool, &rows).await.map_err(|err| {
			crate::log_store_error("Error seeding data.", &err);

			seed_error("Failed to seed sample data", &err)
		})?;

		self.views.invalidate(ROOT_VIEW);

		tracing::info!(inserted, "Sample memos seeded.");

		Ok(SeedOutcome::Seeded { inserted })
	}
}

fn seed_error(context: &str, err: &memo_storage::Error) -> Error {
	let diagnostics = err.diagnostics();

	Error::Seed { message: format!("{context}: {}", diagnostics.message), diagnostics }
}
