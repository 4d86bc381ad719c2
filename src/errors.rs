//src/errors.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubsError {
    #[error(
        "Database file {0:?} missing. Please download the dbCAN substrate \
         mapping table and place it under the configured database directory."
    )]
    MissingDatabase(Vec<PathBuf>),

    #[error(
        "The length of the results ({found} columns) doesn't match any known \
         header"
    )]
    SchemaMismatch { found: usize },

    #[error("Cannot parse {value:?} as a floating-point evalue/coverage")]
    InvalidEvalue { value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
