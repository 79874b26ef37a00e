// SQLite stores for diagnostic runs
// History and the path tree live in separate database files

mod error;
mod queries;
mod records;
mod schema;
mod store;

// Public API
pub use error::{Error, Result};
pub use records::StoredRun;
pub use schema::SCHEMA_VERSION;
pub use store::{HistoryStore, PathStore};
