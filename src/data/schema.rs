use thiserror::Error;

use super::loader::RawTable;
use super::model::{BattingDataset, Player};

// ---------------------------------------------------------------------------
// Schema – required columns and their resolved positions
// ---------------------------------------------------------------------------

/// Required columns, case-sensitive. The header must match exactly.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Name", "AVG", "HR", "OPS", "WAR"];

/// Optional column enabling team filtering and the team table column.
pub const TEAM_COLUMN: &str = "Team";

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },
}

/// Resolved header positions. `team` doubles as the capability flag: `Some`
/// iff the source has a `Team` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub name: usize,
    pub avg: usize,
    pub hr: usize,
    pub ops: usize,
    pub war: usize,
    pub team: Option<usize>,
}

/// Check that every required column is present in the header and resolve the
/// column positions. Fails listing exactly the missing names; no defaults
/// are synthesized.
pub fn validate(table: &RawTable) -> Result<ColumnIndices, SchemaError> {
    let position = |col: &str| table.headers.iter().position(|h| h == col);

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| position(col).is_none())
        .map(|col| col.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns { missing });
    }

    Ok(ColumnIndices {
        name: position("Name").unwrap(),
        avg: position("AVG").unwrap(),
        hr: position("HR").unwrap(),
        ops: position("OPS").unwrap(),
        war: position("WAR").unwrap(),
        team: position(TEAM_COLUMN),
    })
}

// ---------------------------------------------------------------------------
// Cleaning – presence check, then numeric coercion
// ---------------------------------------------------------------------------

/// Drop invalid rows and coerce the numeric columns, yielding the immutable
/// session dataset.
///
/// Two passes over each row, in order:
/// 1. Presence: a blank or absent cell in a required column (or in `Team`
///    when the column exists) drops the whole row.
/// 2. Coercion: `AVG`, `OPS`, `WAR` must parse to finite floats and `HR` to
///    a non-negative integer; any failure drops the whole row.
///
/// Rows that pass the presence check can still fail coercion (numeric-looking
/// text such as `"n/a"` or `"0,310"`), so both passes are required.
pub fn clean(table: &RawTable, cols: &ColumnIndices) -> BattingDataset {
    let mut players = Vec::with_capacity(table.rows.len());
    let mut dropped_missing = 0usize;
    let mut dropped_coercion = 0usize;

    let mut required = vec![cols.name, cols.avg, cols.hr, cols.ops, cols.war];
    if let Some(team_idx) = cols.team {
        required.push(team_idx);
    }

    for row in &table.rows {
        if required.iter().any(|&idx| cell(row, idx).is_none()) {
            dropped_missing += 1;
            continue;
        }

        // Presence established above; unwraps below cannot fire.
        let parsed = (
            parse_metric(cell(row, cols.avg).unwrap()),
            parse_hr(cell(row, cols.hr).unwrap()),
            parse_metric(cell(row, cols.ops).unwrap()),
            parse_metric(cell(row, cols.war).unwrap()),
        );
        let (Some(avg), Some(hr), Some(ops), Some(war)) = parsed else {
            dropped_coercion += 1;
            continue;
        };

        players.push(Player {
            name: cell(row, cols.name).unwrap().to_string(),
            team: cols.team.map(|idx| cell(row, idx).unwrap().to_string()),
            avg,
            hr,
            ops,
            war,
        });
    }

    if dropped_missing > 0 || dropped_coercion > 0 {
        log::warn!(
            "dropped {dropped_missing} row(s) with missing values and \
             {dropped_coercion} row(s) with non-numeric values"
        );
    }

    BattingDataset::from_players(players, cols.team.is_some())
}

/// Non-blank cell at `idx`, or `None` if the cell is blank or the row is
/// short.
fn cell(row: &[String], idx: usize) -> Option<&str> {
    let value = row.get(idx)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// A float metric must parse and be finite ("NaN"/"inf" strings count as
/// coercion failures).
fn parse_metric(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// HR is a count: accept integer-valued numbers only, reject negatives.
fn parse_hr(value: &str) -> Option<u32> {
    let v = value.parse::<f64>().ok()?;
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
        Some(v as u32)
    } else {
        None
    }
}
