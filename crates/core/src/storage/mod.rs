mod error;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use traits::CrustTable;
pub use types::{ETag, TableCreation, Versioned};
