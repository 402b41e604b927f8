pub mod catalog;
pub mod derive;
pub mod error;
pub mod instruction;
pub mod persist;
pub mod preview;
pub mod program;
pub mod refdata;
pub mod reindex;
pub mod settings;
pub mod types;

pub use error::{Result, RouteError};
