//! Request extractors that reject with `AppError`.

mod body;
pub use body::JsonBody;
