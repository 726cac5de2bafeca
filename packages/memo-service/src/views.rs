//! Generation counters for cached presentation views. A mutation bumps the generation of the
//! views it affects; readers compare tags to decide whether their copy is still fresh.

use std::{collections::HashMap, sync::Mutex};

use uuid::Uuid;

/// The root listing, the only view memo writes affect.
pub const ROOT_VIEW: &str = "/";

pub struct ViewCache {
	epoch: String,
	generations: Mutex<HashMap<String, u64>>,
}
impl ViewCache {
	pub fn new() -> Self {
		Self { epoch: Uuid::new_v4().simple().to_string(), generations: Mutex::new(HashMap::new()) }
	}

	pub fn generation(&self, path: &str) -> u64 {
		let generations = self.generations.lock().unwrap_or_else(|err| err.into_inner());

		generations.get(path).copied().unwrap_or(0)
	}

	pub fn invalidate(&self, path: &str) -> u64 {
		let mut generations = self.generations.lock().unwrap_or_else(|err| err.into_inner());
		let generation = generations.entry(path.to_string()).or_insert(0);

		*generation += 1;

		tracing::debug!(path, generation = *generation, "View invalidated.");

		*generation
	}

	/// Weak entity tag for `path`. The epoch keeps tags from a previous process from matching.
	pub fn etag(&self, path: &str) -> String {
		format!("W/\"{}-{}\"", self.epoch, self.generation(path))
	}
}
impl Default for ViewCache {
	fn default() -> Self {
		Self::new()
	}
}
