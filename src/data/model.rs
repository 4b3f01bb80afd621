use std::collections::BTreeSet;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Player – one row of the source table
// ---------------------------------------------------------------------------

/// A single player-season row after cleaning.
///
/// Every field except `team` is guaranteed present and numeric; `team` is
/// `Some` for every row exactly when the source carried a `Team` column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub name: String,
    pub team: Option<String>,
    /// Batting average, hits / at-bats.
    pub avg: f64,
    /// Home runs.
    pub hr: u32,
    /// On-base percentage plus slugging percentage.
    pub ops: f64,
    /// Wins above replacement.
    pub war: f64,
}

// ---------------------------------------------------------------------------
// BattingDataset – the complete cleaned dataset
// ---------------------------------------------------------------------------

/// The full cleaned dataset, immutable for the rest of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct BattingDataset {
    /// All players (rows), in source order.
    pub players: Vec<Player>,
    /// Whether the source had a `Team` column. Gates every team-dependent
    /// feature downstream (filter UI, table column, scatter series).
    pub has_team: bool,
    /// Distinct team values, sorted. Empty when `has_team` is false.
    pub teams: Vec<String>,
}

impl BattingDataset {
    /// Build the team index from the cleaned rows.
    pub fn from_players(players: Vec<Player>, has_team: bool) -> Self {
        let teams: Vec<String> = if has_team {
            let set: BTreeSet<String> = players
                .iter()
                .filter_map(|p| p.team.clone())
                .collect();
            set.into_iter().collect()
        } else {
            Vec::new()
        };
        BattingDataset {
            players,
            has_team,
            teams,
        }
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, team: Option<&str>) -> Player {
        Player {
            name: name.to_string(),
            team: team.map(|t| t.to_string()),
            avg: 0.300,
            hr: 10,
            ops: 0.850,
            war: 2.0,
        }
    }

    #[test]
    fn teams_are_distinct_and_sorted() {
        let ds = BattingDataset::from_players(
            vec![
                player("A", Some("LG")),
                player("B", Some("KIA")),
                player("C", Some("LG")),
            ],
            true,
        );
        assert_eq!(ds.teams, vec!["KIA".to_string(), "LG".to_string()]);
    }

    #[test]
    fn no_team_capability_means_no_team_index() {
        let ds = BattingDataset::from_players(vec![player("A", None)], false);
        assert!(ds.teams.is_empty());
        assert!(!ds.has_team);
        assert_eq!(ds.len(), 1);
    }
}
