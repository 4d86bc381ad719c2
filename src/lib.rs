// src/lib.rs
pub mod errors;
pub mod mapping;
pub mod profile;
pub mod reader;
pub mod subsdb;
pub mod types;
pub mod writer;

use std::path::Path;

use crate::errors::SubsError;
use crate::mapping::SubstrateMapper;
use crate::reader::{open_tsv, read_tsv_rows};
use crate::subsdb::{check_db, read_subs_mapping, MappingTable};
use crate::writer::{write_results, OutputTarget};

/// Loads the substrate mapping table, verifying the file exists first.
/// The table is built once and never mutated afterwards.
pub fn load_mapping_table<P: AsRef<Path>>(path: P) -> Result<MappingTable, SubsError> {
    check_db(&[path.as_ref()])?;
    Ok(read_subs_mapping(path)?)
}

/// Unified entry point: reads dbcan-format hmmsearch rows from `input_path`
/// (gzip detected by extension), annotates each with its decoded subfamily,
/// EC codes and predicted substrates, and streams the enriched rows to the
/// output target. Rows are processed one at a time; any I/O or schema error
/// aborts the run. Returns the number of rows written.
pub fn annotate_substrates<P: AsRef<Path>>(
    input_path: P,
    table: &MappingTable,
    target: &OutputTarget,
) -> Result<u64, SubsError> {
    let rows = read_tsv_rows(open_tsv(input_path)?);
    let results = SubstrateMapper::new(rows, table);
    write_results(results, target)
}
