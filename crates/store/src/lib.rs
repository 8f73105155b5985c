//! Infrastructure layer: in-memory implementations of the catalog's
//! persistence and file-storage collaborators.

pub mod file_storage;
pub mod record_store;

pub use file_storage::InMemoryFileStorage;
pub use record_store::InMemoryRecordStore;
