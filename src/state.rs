use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, player_names, TeamSelection};
use crate::data::loader::TextEncoding;
use crate::data::model::BattingDataset;

// ---------------------------------------------------------------------------
// Filter selection – transient per-interaction state
// ---------------------------------------------------------------------------

/// The user's current sidebar selections. Never mutates the dataset.
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    pub team: TeamSelection,
    pub player: Option<String>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering. The dataset is set once
/// per load and immutable afterwards; every interaction recomputes the
/// filtered view from it.
pub struct AppState {
    /// Loaded dataset (None until the user loads a source).
    pub dataset: Option<BattingDataset>,

    /// Current team / player selection.
    pub selection: FilterSelection,

    /// Indices of players passing the current team filter (cached).
    pub visible: Vec<usize>,

    /// Team → colour map for the chart series (None without team capability).
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Contents of the source text field (URL or path).
    pub source_input: String,

    /// Encoding used to decode the source bytes.
    pub encoding: TextEncoding,

    /// Whether a load is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: FilterSelection::default(),
            visible: Vec::new(),
            color_map: None,
            status_message: None,
            source_input: String::new(),
            encoding: TextEncoding::default(),
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, reset the selection, rebuild colours.
    pub fn set_dataset(&mut self, dataset: BattingDataset) {
        self.selection = FilterSelection::default();
        self.visible = (0..dataset.len()).collect();
        self.color_map = dataset
            .has_team
            .then(|| ColorMap::new(&dataset.teams));
        self.status_message = (!dataset.has_team)
            .then(|| "No 'Team' column in the source; team filtering is disabled.".to_string());

        self.dataset = Some(dataset);
        self.reset_player_selection();
        self.loading = false;
    }

    /// Recompute the cached view after a team change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible = filtered_indices(ds, &self.selection.team);
        }
        self.reset_player_selection();
    }

    /// Change the team filter and recompute the view.
    pub fn set_team(&mut self, team: TeamSelection) {
        if self.selection.team != team {
            self.selection.team = team;
            self.refilter();
        }
    }

    pub fn set_player(&mut self, name: String) {
        self.selection.player = Some(name);
    }

    /// Distinct names in the current view, for the player combo.
    pub fn visible_player_names(&self) -> Vec<String> {
        match &self.dataset {
            Some(ds) => player_names(ds, &self.visible),
            None => Vec::new(),
        }
    }

    /// Keep the selected player only while it remains in the view; otherwise
    /// fall back to the first visible name.
    fn reset_player_selection(&mut self) {
        let names = self.visible_player_names();
        let keep = self
            .selection
            .player
            .as_ref()
            .is_some_and(|p| names.contains(p));
        if !keep {
            self.selection.player = names.first().cloned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Player;

    fn dataset() -> BattingDataset {
        let players = vec![("Kim", "LG"), ("Lee", "KIA"), ("Park", "LG")]
            .into_iter()
            .map(|(name, team)| Player {
                name: name.to_string(),
                team: Some(team.to_string()),
                avg: 0.300,
                hr: 10,
                ops: 0.850,
                war: 2.0,
            })
            .collect();
        BattingDataset::from_players(players, true)
    }

    #[test]
    fn set_dataset_shows_everything_and_picks_first_player() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        assert_eq!(state.visible, vec![0, 1, 2]);
        assert_eq!(state.selection.player.as_deref(), Some("Kim"));
        assert!(state.color_map.is_some());
    }

    #[test]
    fn team_change_refilters_and_drops_stale_player() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.set_player("Lee".to_string());

        state.set_team(TeamSelection::Team("LG".to_string()));
        assert_eq!(state.visible, vec![0, 2]);
        // Lee left the view; selection falls back to the first LG name.
        assert_eq!(state.selection.player.as_deref(), Some("Kim"));
    }

    #[test]
    fn empty_view_is_a_state_not_an_error() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.set_team(TeamSelection::Team("NC".to_string()));
        assert!(state.visible.is_empty());
        assert!(state.selection.player.is_none());
    }

    #[test]
    fn missing_team_capability_disables_filtering() {
        let mut state = AppState::default();
        let ds = BattingDataset::from_players(
            vec![Player {
                name: "Kim".to_string(),
                team: None,
                avg: 0.300,
                hr: 10,
                ops: 0.850,
                war: 2.0,
            }],
            false,
        );
        state.set_dataset(ds);
        assert!(state.color_map.is_none());
        assert!(state.status_message.is_some());
    }
}
