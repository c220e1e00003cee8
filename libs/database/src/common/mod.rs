//! Utilities shared by every store adapter

pub mod error;
pub mod retry;

pub use error::{DatabaseError, StoreErrorKind};
#[cfg(feature = "postgres")]
pub use error::classify_db_err;
pub use retry::{RetryConfig, retry_with_backoff};
