pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid memo form at {field}: {message}")]
	InvalidForm { field: &'static str, message: String },
	#[error("Malformed memo row: {message}")]
	MalformedRow { message: String },
}
