//! Parser for valgrind massif reports rendered by `ms_print`.
//!
//! `ms_print` output mixes an ASCII graph, prose and allocation trees with a
//! fixed-width snapshot table:
//!
//! ```text
//!   n        time(i)         total(B)   useful-heap(B) extra-heap(B)    stacks(B)
//! --------------------------------------------------------------------------------
//!   0              0                0                0             0            0
//!   1        126,094          364,768          352,072        12,696            0
//! ```
//!
//! Only the data rows are kept. The parsed report ends with a synthetic total
//! row holding the column-wise sums.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::{BenchError, BenchResult};

static DATA_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\s+\d").expect("static regex"));

const MIN_FIELDS: usize = 6;

/// Row label: a snapshot index or the synthetic total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLabel {
    Sample(u64),
    Total,
}

impl fmt::Display for RowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowLabel::Sample(n) => write!(f, "{n}"),
            RowLabel::Total => f.write_str("Total"),
        }
    }
}

/// One row of the snapshot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryRow {
    pub label: RowLabel,
    /// Time unit of the snapshot (instructions executed by default).
    pub time_i: u64,
    pub total_bytes: u64,
    pub useful_heap_bytes: u64,
    pub extra_heap_bytes: u64,
    pub stack_bytes: u64,
}

/// Parsed snapshot table. The last row is always the synthetic total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryReport {
    rows: Vec<MemoryRow>,
}

impl MemoryReport {
    /// Build a report from sample rows, appending the total row.
    ///
    /// Fails if any column sum does not fit in a `u64`.
    pub fn from_samples(samples: Vec<MemoryRow>) -> BenchResult<Self> {
        let mut total = MemoryRow {
            label: RowLabel::Total,
            time_i: 0,
            total_bytes: 0,
            useful_heap_bytes: 0,
            extra_heap_bytes: 0,
            stack_bytes: 0,
        };
        for s in &samples {
            total.time_i = column_sum(total.time_i, s.time_i, "time(i)")?;
            total.total_bytes = column_sum(total.total_bytes, s.total_bytes, "total(B)")?;
            total.useful_heap_bytes = column_sum(total.useful_heap_bytes, s.useful_heap_bytes, "useful-heap(B)")?;
            total.extra_heap_bytes = column_sum(total.extra_heap_bytes, s.extra_heap_bytes, "extra-heap(B)")?;
            total.stack_bytes = column_sum(total.stack_bytes, s.stack_bytes, "stacks(B)")?;
        }
        let mut rows = samples;
        rows.push(total);
        Ok(MemoryReport { rows })
    }

    /// All rows, total last.
    pub fn rows(&self) -> &[MemoryRow] {
        &self.rows
    }

    /// Data rows only.
    pub fn samples(&self) -> &[MemoryRow] {
        &self.rows[..self.rows.len() - 1]
    }

    pub fn total(&self) -> &MemoryRow {
        &self.rows[self.rows.len() - 1]
    }

    /// Sample with the largest `total(B)`, if any.
    pub fn peak_sample(&self) -> Option<&MemoryRow> {
        self.samples().iter().max_by_key(|r| r.total_bytes)
    }
}

/// Parse `ms_print` text into a [`MemoryReport`].
///
/// Lines that do not look like data rows, or that have fewer than six fields,
/// are skipped. A data row with a non-numeric field is an error, as is a report
/// with no data rows at all.
pub fn parse_memory_report(text: &str) -> BenchResult<MemoryReport> {
    let mut samples = Vec::new();

    for line in text.lines().filter(|l| DATA_ROW_RE.is_match(l)) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < MIN_FIELDS {
            continue;
        }
        samples.push(MemoryRow {
            label: RowLabel::Sample(parse_grouped(parts[0], "n", line)?),
            time_i: parse_grouped(parts[1], "time(i)", line)?,
            total_bytes: parse_grouped(parts[2], "total(B)", line)?,
            useful_heap_bytes: parse_grouped(parts[3], "useful-heap(B)", line)?,
            extra_heap_bytes: parse_grouped(parts[4], "extra-heap(B)", line)?,
            stack_bytes: parse_grouped(parts[5], "stacks(B)", line)?,
        });
    }

    if samples.is_empty() {
        return Err(BenchError::EmptyMemoryReport);
    }
    MemoryReport::from_samples(samples)
}

fn column_sum(acc: u64, value: u64, column: &'static str) -> BenchResult<u64> {
    acc.checked_add(value).ok_or(BenchError::ReportOverflow { column })
}

/// Parse a comma-grouped integer such as `12,345`.
fn parse_grouped(field: &str, column: &'static str, line: &str) -> BenchResult<u64> {
    field.replace(',', "").parse::<u64>().map_err(|_| BenchError::InvalidNumber {
        column,
        value: field.to_string(),
        line: line.trim().to_string(),
    })
}
