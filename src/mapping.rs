//src/mapping.rs

use std::io;

use crate::errors::SubsError;
use crate::profile::parse_profile_id;
use crate::subsdb::{MappingTable, SubstrateSet};
use crate::types::{EMPTY_FIELD, HMMSEARCH_HEADER};

/// Lazy row mapper: consumes parsed hmmsearch rows and yields substrate
/// annotation rows, one per qualifying input row, in input order. Holds no
/// state across rows beyond the read-only mapping table.
pub struct SubstrateMapper<'a, I> {
    rows: I,
    table: &'a MappingTable,
}

impl<'a, I> SubstrateMapper<'a, I>
where
    I: Iterator<Item = io::Result<Vec<String>>>,
{
    pub fn new(rows: I, table: &'a MappingTable) -> Self {
        Self { rows, table }
    }

    /// Maps a single input row to its 13-field output row:
    /// decode the composite profile ID, union the substrate sets of every
    /// `(familyKey, ecKey)` hit in the table (the `-` sentinel key included),
    /// carry the middle fields through unchanged, and reformat the final
    /// field to 3 significant digits.
    fn map_row(&self, row: Vec<String>) -> Result<Vec<String>, SubsError> {
        let parsed = parse_profile_id(&row[0]);

        let mut substrates = SubstrateSet::new();
        if let Some(family) = &parsed.family_key {
            for ec in &parsed.ec_keys {
                match self.table.get(&(family.clone(), ec.clone())) {
                    Some(subs) => substrates.extend(subs.iter().cloned()),
                    // Key absent is not a failure, just no contribution
                    None => log::debug!("No substrate found for {family} {ec}"),
                }
            }
        }

        let last = &row[row.len() - 1];
        let value: f64 = last.parse().map_err(|_| SubsError::InvalidEvalue {
            value: last.clone(),
        })?;

        let mut out = Vec::with_capacity(row.len() + 3);
        out.push(
            parsed
                .subfamily
                .unwrap_or_else(|| EMPTY_FIELD.to_string()),
        );
        out.push(join_or_dash(parsed.composition.iter(), "|"));
        out.push(join_or_dash(parsed.ec_annotations.iter(), "|"));
        out.push(join_or_dash(substrates.iter(), ","));
        out.extend(
            row.get(1..row.len() - 1)
                .unwrap_or(&[])
                .iter()
                .cloned(),
        );
        out.push(format_sig3(value));
        Ok(out)
    }
}

impl<'a, I> Iterator for SubstrateMapper<'a, I>
where
    I: Iterator<Item = io::Result<Vec<String>>>,
{
    type Item = Result<Vec<String>, SubsError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let row = match self.rows.next()? {
                Ok(row) => row,
                Err(e) => return Some(Err(e.into())),
            };
            // Re-embedded header rows are dropped, not mapped
            if row.is_empty() || row.iter().map(String::as_str).eq(HMMSEARCH_HEADER) {
                continue;
            }
            return Some(self.map_row(row));
        }
    }
}

fn join_or_dash<'s>(items: impl Iterator<Item = &'s String>, sep: &str) -> String {
    let joined = items.cloned().collect::<Vec<_>>().join(sep);
    if joined.is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        joined
    }
}

/// Formats a float with 3 significant digits the way the dbcan tables print
/// evalues: fixed notation with at least one fractional digit while the
/// exponent lies in [-4, 3), scientific with a two-digit exponent otherwise.
pub fn format_sig3(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Round to 3 significant digits first; the exponent of the rounded
    // value decides the notation (9.996e2 must print as 1e+03, not 1000.0).
    let sci = format!("{:.2e}", value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= 3 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (2 - exp).max(0) as usize;
        if decimals == 0 {
            return format!("{value:.0}.0");
        }
        let mut fixed = format!("{value:.decimals$}");
        while fixed.ends_with('0') {
            fixed.pop();
        }
        if fixed.ends_with('.') {
            fixed.push('0');
        }
        fixed
    }
}

/// Drops trailing zeros (and a then-dangling dot) from a mantissa.
fn trim_fraction(mantissa: &str) -> &str {
    if !mantissa.contains('.') {
        return mantissa;
    }
    mantissa.trim_end_matches('0').trim_end_matches('.')
}
