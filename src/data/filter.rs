use super::model::{BattingDataset, Player};

// ---------------------------------------------------------------------------
// Team selection – the sidebar filter predicate
// ---------------------------------------------------------------------------

/// Current team filter. `All` is the sentinel for "no filtering".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TeamSelection {
    #[default]
    All,
    Team(String),
}

impl TeamSelection {
    pub fn label(&self) -> &str {
        match self {
            TeamSelection::All => "All teams",
            TeamSelection::Team(t) => t,
        }
    }
}

/// Return indices of players matching the team filter, in original order.
///
/// `All` yields the full dataset unchanged. Datasets without the team
/// capability are never filtered; callers gate the team UI on
/// `dataset.has_team` and pass `All` here.
pub fn filtered_indices(dataset: &BattingDataset, selection: &TeamSelection) -> Vec<usize> {
    match selection {
        TeamSelection::All => (0..dataset.len()).collect(),
        TeamSelection::Team(team) => dataset
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.team.as_deref() == Some(team.as_str()))
            .map(|(i, _)| i)
            .collect(),
    }
}

/// Distinct player names within the view, first-occurrence order.
pub fn player_names(dataset: &BattingDataset, indices: &[usize]) -> Vec<String> {
    let mut names = Vec::new();
    for &idx in indices {
        let name = &dataset.players[idx].name;
        if !names.contains(name) {
            names.push(name.clone());
        }
    }
    names
}

/// First player in the view whose name matches exactly. Duplicate names
/// resolve to the first occurrence.
pub fn select_player<'a>(
    dataset: &'a BattingDataset,
    indices: &[usize],
    name: &str,
) -> Option<&'a Player> {
    indices
        .iter()
        .map(|&idx| &dataset.players[idx])
        .find(|p| p.name == name)
}
