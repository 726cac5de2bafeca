use sqlx::{PgExecutor, Postgres, QueryBuilder};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Result, models::MemoRow};
use memo_domain::MemoForm;

const MEMO_COLUMNS: &str = "id, title, content, category, tags, created_at, updated_at";

pub async fn list_memos<'e, E>(executor: E) -> Result<Vec<MemoRow>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, MemoRow>(&format!(
		"SELECT {MEMO_COLUMNS} FROM memos ORDER BY created_at DESC, id DESC"
	))
	.fetch_all(executor)
	.await?;

	Ok(rows)
}

pub async fn get_memo<'e, E>(executor: E, id: Uuid) -> Result<Option<MemoRow>>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, MemoRow>(&format!("SELECT {MEMO_COLUMNS} FROM memos WHERE id = $1"))
		.bind(id)
		.fetch_optional(executor)
		.await?;

	Ok(row)
}

pub async fn insert_memo<'e, E>(executor: E, row: &MemoRow) -> Result<MemoRow>
where
	E: PgExecutor<'e>,
{
	let stored = sqlx::query_as::<_, MemoRow>(&format!(
		"\
INSERT INTO memos ({MEMO_COLUMNS})
VALUES ($1,$2,$3,$4,$5,$6,$7)
RETURNING {MEMO_COLUMNS}"
	))
	.bind(row.id)
	.bind(row.title.as_str())
	.bind(row.content.as_str())
	.bind(row.category.as_str())
	.bind(&row.tags)
	.bind(row.created_at)
	.bind(row.updated_at)
	.fetch_one(executor)
	.await?;

	Ok(stored)
}

/// Overwrites the mutable fields of one memo. `updated_at` always moves forward, even when `now`
/// does not exceed the stored value at microsecond precision.
pub async fn update_memo<'e, E>(
	executor: E,
	id: Uuid,
	form: &MemoForm,
	now: OffsetDateTime,
) -> Result<Option<MemoRow>>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, MemoRow>(&format!(
		"\
UPDATE memos
SET
	title = $1,
	content = $2,
	category = $3,
	tags = $4,
	updated_at = GREATEST($5, updated_at + INTERVAL '1 microsecond')
WHERE id = $6
RETURNING {MEMO_COLUMNS}"
	))
	.bind(form.title.as_str())
	.bind(form.content.as_str())
	.bind(form.category.as_str())
	.bind(&form.tags)
	.bind(now)
	.bind(id)
	.fetch_optional(executor)
	.await?;

	Ok(row)
}

/// Returns the number of deleted rows; zero is not an error.
pub async fn delete_memo<'e, E>(executor: E, id: Uuid) -> Result<u64>
where
	E: PgExecutor<'e>,
{
	let result = sqlx::query("DELETE FROM memos WHERE id = $1").bind(id).execute(executor).await?;

	Ok(result.rows_affected())
}

pub async fn any_memo_exists<'e, E>(executor: E) -> Result<bool>
where
	E: PgExecutor<'e>,
{
	let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM memos LIMIT 1)")
		.fetch_one(executor)
		.await?;

	Ok(exists)
}

/// Inserts all rows in a single statement, so either every row lands or none does.
pub async fn insert_memos<'e, E>(executor: E, rows: &[MemoRow]) -> Result<u64>
where
	E: PgExecutor<'e>,
{
	if rows.is_empty() {
		return Ok(0);
	}

	let mut builder: QueryBuilder<Postgres> =
		QueryBuilder::new(format!("INSERT INTO memos ({MEMO_COLUMNS}) "));

	builder.push_values(rows, |mut values, row| {
		values
			.push_bind(row.id)
			.push_bind(row.title.as_str())
			.push_bind(row.content.as_str())
			.push_bind(row.category.as_str())
			.push_bind(&row.tags)
			.push_bind(row.created_at)
			.push_bind(row.updated_at);
	});

	let result = builder.build().execute(executor).await?;

	Ok(result.rows_affected())
}
