/// Data layer: core types, loading, validation, cleaning, filtering, and
/// derived views.
///
/// Architecture:
/// ```text
///  URL / local .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + decode + parse → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  schema   │  validate columns, clean rows → BattingDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  team predicate → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  views    │  ranking / paired points / player card
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod schema;
pub mod views;

use thiserror::Error;

use loader::{DataSource, LoadError, TextEncoding};
use model::BattingDataset;
use schema::SchemaError;

/// Any failure on the load path. All variants are fatal for the load: no
/// partial dataset is ever produced.
#[derive(Error, Debug)]
pub enum DataError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Run the full pipeline: fetch, decode, parse, validate, clean.
pub fn load_dataset(
    source: &DataSource,
    encoding: TextEncoding,
) -> Result<BattingDataset, DataError> {
    let table = loader::load_table(source, encoding)?;
    let columns = schema::validate(&table)?;
    Ok(schema::clean(&table, &columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn full_pipeline_from_file() {
        let path = temp_csv(
            "dugout_pipeline_test.csv",
            "Name,Team,AVG,HR,OPS,WAR\n\
             Kim Minho,LG,0.310,25,0.920,5.1\n\
             Lee Jiho,KIA,n/a,9,0.750,1.4\n\
             Park Dohyun,LG,0.295,17,0.880,3.9\n",
        );
        let ds = load_dataset(&DataSource::File(path.clone()), TextEncoding::Utf8).unwrap();
        std::fs::remove_file(&path).ok();

        // The n/a row fails coercion; the other two survive in order.
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.players[0].name, "Kim Minho");
        assert_eq!(ds.players[1].name, "Park Dohyun");
        assert!(ds.has_team);
        assert_eq!(ds.teams, vec!["LG".to_string()]);
    }

    #[test]
    fn pipeline_halts_on_missing_columns() {
        let path = temp_csv(
            "dugout_pipeline_schema_test.csv",
            "Name,AVG,OPS\nKim,0.310,0.920\n",
        );
        let err = load_dataset(&DataSource::File(path.clone()), TextEncoding::Utf8).unwrap_err();
        std::fs::remove_file(&path).ok();

        match err {
            DataError::Schema(SchemaError::MissingColumns { missing }) => {
                assert_eq!(missing, vec!["HR".to_string(), "WAR".to_string()]);
            }
            other => panic!("expected SchemaError, got {other:?}"),
        }
    }

    #[test]
    fn pipeline_halts_on_unavailable_source() {
        let source = DataSource::File(PathBuf::from("/nonexistent/dir/batting.csv"));
        let err = load_dataset(&source, TextEncoding::Utf8).unwrap_err();
        assert!(matches!(
            err,
            DataError::Load(LoadError::SourceUnavailable { .. })
        ));
    }
}
