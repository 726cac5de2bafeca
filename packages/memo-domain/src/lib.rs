pub mod memo;
pub mod samples;
pub mod time_serde;
pub mod writegate;

mod error;

pub use error::{Error, Result};
pub use memo::{Memo, MemoForm};
pub use samples::{SAMPLE_MEMOS, SampleMemo};
