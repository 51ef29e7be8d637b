//! Request extractors that reject with [`AppError`](crate::errors::AppError),
//! so every failure is rendered as the standard error envelope.

pub mod id_path;
pub mod page_params;
pub mod validated_json;

pub use id_path::IdPath;
pub use page_params::{PageParams, PageQuery};
pub use validated_json::ValidatedJson;
