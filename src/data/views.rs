use super::model::{BattingDataset, Player};

// ---------------------------------------------------------------------------
// Metric – the four numeric columns the charts can project
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Avg,
    Hr,
    Ops,
    War,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Avg => "AVG",
            Metric::Hr => "HR",
            Metric::Ops => "OPS",
            Metric::War => "WAR",
        }
    }

    pub fn value_of(&self, player: &Player) -> f64 {
        match self {
            Metric::Avg => player.avg,
            Metric::Hr => player.hr as f64,
            Metric::Ops => player.ops,
            Metric::War => player.war,
        }
    }
}

// ---------------------------------------------------------------------------
// Ranking view – top-N by a metric
// ---------------------------------------------------------------------------

/// Indices of the top `n` players in the view by the given metric,
/// descending. The sort is stable: equal values keep their original
/// relative order.
pub fn top_by_metric(
    dataset: &BattingDataset,
    indices: &[usize],
    metric: Metric,
    n: usize,
) -> Vec<usize> {
    let mut ranked: Vec<usize> = indices.to_vec();
    ranked.sort_by(|&a, &b| {
        metric
            .value_of(&dataset.players[b])
            .total_cmp(&metric.value_of(&dataset.players[a]))
    });
    ranked.truncate(n);
    ranked
}

// ---------------------------------------------------------------------------
// Paired-metric view – one (x, y, label) point per player
// ---------------------------------------------------------------------------

/// One scatter point: two metric values plus the player it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub team: Option<String>,
}

/// Project each player in the view to an (x, y) pair. No aggregation.
pub fn paired_view(
    dataset: &BattingDataset,
    indices: &[usize],
    x_metric: Metric,
    y_metric: Metric,
) -> Vec<PairedPoint> {
    indices
        .iter()
        .map(|&idx| {
            let p = &dataset.players[idx];
            PairedPoint {
                x: x_metric.value_of(p),
                y: y_metric.value_of(p),
                label: p.name.clone(),
                team: p.team.clone(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Player detail card
// ---------------------------------------------------------------------------

/// Pre-formatted metric strings for the sidebar detail card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    pub avg: String,
    pub hr: String,
    pub ops: String,
    pub war: String,
}

/// AVG and OPS to three decimals, HR as a plain count, WAR to two decimals.
pub fn player_card(player: &Player) -> PlayerCard {
    PlayerCard {
        avg: format!("{:.3}", player.avg),
        hr: format!("{}", player.hr),
        ops: format!("{:.3}", player.ops),
        war: format!("{:.2}", player.war),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> BattingDataset {
        let players = vec![
            ("Kim", 0.310, 25, 0.920, 5.1),
            ("Lee", 0.280, 9, 0.750, 1.4),
            ("Park", 0.295, 25, 0.880, 3.9),
            ("Choi", 0.260, 31, 0.900, 4.2),
        ]
        .into_iter()
        .map(|(name, avg, hr, ops, war)| Player {
            name: name.to_string(),
            team: None,
            avg,
            hr,
            ops,
            war,
        })
        .collect();
        BattingDataset::from_players(players, false)
    }

    #[test]
    fn ranking_is_descending_and_truncated() {
        let ds = dataset();
        let all: Vec<usize> = (0..ds.len()).collect();
        let top = top_by_metric(&ds, &all, Metric::Hr, 2);
        assert_eq!(top, vec![3, 0]); // Choi 31, then Kim 25
    }

    #[test]
    fn ranking_is_stable_on_ties() {
        let ds = dataset();
        let all: Vec<usize> = (0..ds.len()).collect();
        // Kim and Park both have 25 HR; Kim comes first in source order.
        let top = top_by_metric(&ds, &all, Metric::Hr, 10);
        assert_eq!(top, vec![3, 0, 2, 1]);
    }

    #[test]
    fn ranking_with_n_larger_than_view_returns_everything() {
        let ds = dataset();
        let all: Vec<usize> = (0..ds.len()).collect();
        assert_eq!(top_by_metric(&ds, &all, Metric::Hr, 10).len(), 4);
    }

    #[test]
    fn ranking_of_empty_view_is_empty() {
        let ds = dataset();
        assert!(top_by_metric(&ds, &[], Metric::War, 10).is_empty());
    }

    #[test]
    fn paired_view_is_one_point_per_player() {
        let ds = dataset();
        let view = paired_view(&ds, &[0, 2], Metric::Ops, Metric::War);
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].x, 0.920);
        assert_eq!(view[0].y, 5.1);
        assert_eq!(view[0].label, "Kim");
    }

    #[test]
    fn card_formats_match_the_display_contract() {
        let card = player_card(&Player {
            name: "Kim".to_string(),
            team: None,
            avg: 0.3,
            hr: 25,
            ops: 0.9201,
            war: 5.14,
        });
        assert_eq!(card.avg, "0.300");
        assert_eq!(card.hr, "25");
        assert_eq!(card.ops, "0.920");
        assert_eq!(card.war, "5.14");
    }
}
