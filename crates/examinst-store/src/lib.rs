//! examinst-store: examination read collaborators.
//!
//! Implements the `ExaminationSource` trait over in-memory fixtures and
//! directories of TOML examination files, and loads the examinst
//! configuration.

pub mod config;
pub mod directory;
pub mod error;
pub mod memory;

pub use config::{load_config, load_config_from, ExaminstConfig};
pub use directory::DirectorySource;
pub use error::StoreError;
pub use memory::InMemorySource;
