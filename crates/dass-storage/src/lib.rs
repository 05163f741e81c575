//! dass-storage
//!
//! Optional persistence of submitted assessments. The store is constructed
//! by the caller and handed in; nothing here is global.

pub mod error;
pub mod local;
pub mod objects;
pub mod s3;
pub mod store;

pub use local::LocalStore;
pub use s3::S3Store;
pub use store::{BoxFuture, ResultStore};
