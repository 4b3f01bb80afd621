use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::BattingDataset;

// ---------------------------------------------------------------------------
// Export of the current filtered view
// ---------------------------------------------------------------------------

/// Write the view as CSV with the same column projection as the table
/// (Team only when the capability exists).
pub fn write_csv(path: &Path, dataset: &BattingDataset, indices: &[usize]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV export")?;

    if dataset.has_team {
        writer.write_record(["Name", "Team", "AVG", "HR", "OPS", "WAR"])?;
    } else {
        writer.write_record(["Name", "AVG", "HR", "OPS", "WAR"])?;
    }

    for &idx in indices {
        let p = &dataset.players[idx];
        let mut record = vec![p.name.clone()];
        if dataset.has_team {
            record.push(p.team.clone().unwrap_or_default());
        }
        record.extend([
            p.avg.to_string(),
            p.hr.to_string(),
            p.ops.to_string(),
            p.war.to_string(),
        ]);
        writer.write_record(&record)?;
    }

    writer.flush().context("writing CSV export")?;
    Ok(())
}

/// Write the view as a records-oriented JSON array.
pub fn write_json(path: &Path, dataset: &BattingDataset, indices: &[usize]) -> Result<()> {
    let rows: Vec<_> = indices.iter().map(|&idx| &dataset.players[idx]).collect();
    let file = std::fs::File::create(path).context("creating JSON export")?;
    serde_json::to_writer_pretty(file, &rows).context("writing JSON export")?;
    Ok(())
}
