//src/subsdb.rs

use ahash::AHashMap;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::errors::SubsError;

/// Lookup key into the substrate mapping table: (family key, EC key).
/// The EC key is `-` for the no-annotation entry of a family.
pub type MappingKey = (String, String);
/// Substrate names for one key. Ordered so joined output is deterministic.
pub type SubstrateSet = BTreeSet<String>;
/// The whole mapping table, built once and read-only afterwards.
pub type MappingTable = AHashMap<MappingKey, SubstrateSet>;

/// Parses the dbCAN substrate mapping table in the format:
/// ```text
/// <substrate description>\t<PMID>\t<family>\t<subfamily>\t<EC>\t...
/// ```
/// One header line, then one row per (family, EC) pair. The free-text
/// description lists one or more substrate names separated by `", and "`,
/// `" and "` or plain commas. Later rows for an identical key replace
/// earlier ones.
pub fn parse_subs_mapping<R: BufRead>(reader: R) -> io::Result<MappingTable> {
    let mut table: MappingTable = AHashMap::new();

    for line_result in reader.lines().skip(1) {
        let line = line_result?;
        let fields: Vec<&str> = line.split('\t').collect();

        // Skip malformed short rows
        if fields.len() < 5 {
            continue;
        }

        let subs = split_substrates(fields[0]);
        let family = fields[2].to_string();
        let ec = fields[4].trim();
        let ec = if ec.is_empty() { "-" } else { ec };

        table.insert((family, ec.to_string()), subs);
    }

    log::info!("Loaded substrate mapping table with {} keys", table.len());
    Ok(table)
}

/// Opens the mapping file and parses it into a `MappingTable`.
pub fn read_subs_mapping<P: AsRef<Path>>(path: P) -> io::Result<MappingTable> {
    let file = File::open(path)?;
    parse_subs_mapping(BufReader::new(file))
}

/// Splits a free-text substrate description into a set of names:
/// `", and "` and `" and "` conjunctions are first normalized to commas,
/// then the text is split on commas (consuming at most one whitespace
/// character after each).
fn split_substrates(description: &str) -> SubstrateSet {
    let normalized = normalize_conjunctions(description);
    normalized
        .split(',')
        .map(|piece| {
            let mut chars = piece.chars();
            match chars.next() {
                Some(c) if c.is_whitespace() => chars.as_str().to_string(),
                _ => piece.to_string(),
            }
        })
        .collect()
}

/// Rewrites `,<ws>and` and `<ws>and` to a single comma.
fn normalize_conjunctions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(stripped) = strip_conjunction(rest) {
            out.push(',');
            rest = stripped;
        } else {
            let mut chars = rest.chars();
            // unwrap is fine, rest is non-empty
            out.push(chars.next().unwrap());
            rest = chars.as_str();
        }
    }

    out
}

/// If `text` starts with `,<ws>and` or `<ws>and`, returns the remainder
/// after that prefix.
fn strip_conjunction(text: &str) -> Option<&str> {
    let after_comma = text.strip_prefix(',').unwrap_or(text);
    let mut chars = after_comma.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str().strip_prefix("and"),
        _ => None,
    }
}

/// Verifies that every database file exists before any input is consumed.
/// A missing file is a fatal precondition failure.
pub fn check_db(dbs: &[&Path]) -> Result<(), SubsError> {
    let missing: Vec<PathBuf> = dbs
        .iter()
        .filter(|db| !db.exists())
        .map(|db| db.to_path_buf())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SubsError::MissingDatabase(missing))
    }
}
