use time::OffsetDateTime;
use uuid::Uuid;

use memo_domain::Memo;

/// Raw `memos` row as decoded from Postgres.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MemoRow {
	pub id: Uuid,
	pub title: String,
	pub content: String,
	pub category: String,
	pub tags: Option<Vec<String>>,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}
impl MemoRow {
	/// Validates the row and converts it into the domain record. NULL tags become an empty list.
	pub fn into_memo(self) -> memo_domain::Result<Memo> {
		if self.id.is_nil() {
			return Err(memo_domain::Error::MalformedRow {
				message: "id must not be the nil UUID.".to_string(),
			});
		}
		if self.updated_at < self.created_at {
			return Err(memo_domain::Error::MalformedRow {
				message: format!("updated_at precedes created_at for memo {}.", self.id),
			});
		}

		Ok(Memo {
			id: self.id,
			title: self.title,
			content: self.content,
			category: self.category,
			tags: self.tags.unwrap_or_default(),
			created_at: self.created_at,
			updated_at: self.updated_at,
		})
	}
}
