use sqlx::postgres::PgDatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Sqlx(#[from] sqlx::Error),
	#[error(transparent)]
	Domain(#[from] memo_domain::Error),
}
impl Error {
	/// Store-provided fields worth logging next to a failed statement.
	pub fn diagnostics(&self) -> Diagnostics {
		let mut diagnostics = Diagnostics { message: self.to_string(), ..Default::default() };
		let Self::Sqlx(sqlx::Error::Database(db_err)) = self else {
			return diagnostics;
		};

		diagnostics.message = db_err.message().to_string();
		diagnostics.code = db_err.code().map(|code| code.into_owned());

		if let Some(pg_err) = db_err.try_downcast_ref::<PgDatabaseError>() {
			diagnostics.details = pg_err.detail().map(str::to_string);
			diagnostics.hint = pg_err.hint().map(str::to_string);
		}

		diagnostics
	}
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
	pub message: String,
	pub code: Option<String>,
	pub details: Option<String>,
	pub hint: Option<String>,
}
