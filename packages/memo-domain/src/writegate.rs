use crate::{Error, MemoForm, Result};

/// Normalizes a form before it is written: trims the title, category and tags, drops empty tags
/// while keeping the caller's order. Content is stored verbatim.
pub fn writegate(form: MemoForm) -> Result<MemoForm> {
	let MemoForm { title, content, category, tags } = form;
	let title = title.trim().to_string();

	if title.is_empty() {
		return Err(Error::InvalidForm { field: "title", message: "must be non-empty".to_string() });
	}

	let tags = tags
		.into_iter()
		.map(|tag| tag.trim().to_string())
		.filter(|tag| !tag.is_empty())
		.collect::<Vec<_>>();

	Ok(MemoForm { title, content, category: category.trim().to_string(), tags })
}
