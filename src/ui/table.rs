use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::BattingDataset;
use crate::data::views::player_card;

// ---------------------------------------------------------------------------
// Data preview table
// ---------------------------------------------------------------------------

/// Render the current view as a table. The column projection is fixed:
/// Name, Team (only when the dataset has the team capability), AVG, HR,
/// OPS, WAR.
pub fn stats_table(ui: &mut Ui, dataset: &BattingDataset, indices: &[usize]) {
    let has_team = dataset.has_team;
    let n_cols = if has_team { 6 } else { 5 };

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::remainder(), n_cols)
        .max_scroll_height(280.0)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            if has_team {
                header.col(|ui| {
                    ui.strong("Team");
                });
            }
            for label in ["AVG", "HR", "OPS", "WAR"] {
                header.col(|ui| {
                    ui.strong(label);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, indices.len(), |mut row| {
                let player = &dataset.players[indices[row.index()]];
                let card = player_card(player);

                row.col(|ui| {
                    ui.label(&player.name);
                });
                if has_team {
                    row.col(|ui| {
                        ui.label(player.team.as_deref().unwrap_or(""));
                    });
                }
                row.col(|ui| {
                    ui.label(card.avg);
                });
                row.col(|ui| {
                    ui.label(card.hr);
                });
                row.col(|ui| {
                    ui.label(card.ops);
                });
                row.col(|ui| {
                    ui.label(card.war);
                });
            });
        });
}
