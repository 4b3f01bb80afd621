use std::collections::BTreeMap;

use eframe::egui::{Color32, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::model::BattingDataset;
use crate::data::views::{paired_view, top_by_metric, Metric};
use crate::state::AppState;
use crate::ui::table;

/// How many players the HR ranking shows.
const RANKING_SIZE: usize = 10;

// ---------------------------------------------------------------------------
// Dashboard (central panel)
// ---------------------------------------------------------------------------

/// Render the table and the three charts for the current view.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Load a CSV to view batting stats  (File → Open…)");
            });
            return;
        }
    };

    // A filter matching nothing is a display state, not an error; no charts
    // are drawn against an empty view.
    if state.visible.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(format!("No data for {}.", state.selection.team.label()));
        });
        return;
    }

    let team_label = state.selection.team.label().to_string();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Preview");
            table::stats_table(ui, dataset, &state.visible);
            ui.add_space(16.0);

            ui.heading(format!("AVG by player — {team_label}"));
            avg_line_chart(ui, dataset, &state.visible);
            ui.add_space(16.0);

            ui.heading(format!("HR ranking (top {RANKING_SIZE}) — {team_label}"));
            hr_ranking_chart(ui, dataset, &state.visible);
            ui.add_space(16.0);

            ui.heading(format!("OPS vs WAR — {team_label}"));
            ops_war_scatter(ui, dataset, &state.visible, state.color_map.as_ref());
        });
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

/// Line chart of batting average across the view, one x step per player.
fn avg_line_chart(ui: &mut Ui, dataset: &BattingDataset, indices: &[usize]) {
    let names: Vec<String> = indices
        .iter()
        .map(|&idx| dataset.players[idx].name.clone())
        .collect();

    let points: PlotPoints = indices
        .iter()
        .enumerate()
        .map(|(i, &idx)| [i as f64, dataset.players[idx].avg])
        .collect();

    let line = Line::new(points)
        .name("AVG")
        .color(Color32::LIGHT_BLUE)
        .width(1.5);

    Plot::new("avg_line")
        .height(220.0)
        .legend(Legend::default())
        .y_axis_label(Metric::Avg.label())
        .x_axis_formatter(move |mark, _range| name_tick(&names, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

/// Bar chart of the top players by home runs, descending.
fn hr_ranking_chart(ui: &mut Ui, dataset: &BattingDataset, indices: &[usize]) {
    let top = top_by_metric(dataset, indices, Metric::Hr, RANKING_SIZE);

    let names: Vec<String> = top
        .iter()
        .map(|&idx| dataset.players[idx].name.clone())
        .collect();

    let bars: Vec<Bar> = top
        .iter()
        .enumerate()
        .map(|(i, &idx)| {
            let player = &dataset.players[idx];
            Bar::new(i as f64, player.hr as f64).name(&player.name)
        })
        .collect();

    let chart = BarChart::new(bars).name("HR").color(Color32::LIGHT_GREEN);

    Plot::new("hr_ranking")
        .height(220.0)
        .legend(Legend::default())
        .y_axis_label(Metric::Hr.label())
        .x_axis_formatter(move |mark, _range| name_tick(&names, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

/// Scatter of OPS against WAR, one point per player, one series per team.
fn ops_war_scatter(
    ui: &mut Ui,
    dataset: &BattingDataset,
    indices: &[usize],
    color_map: Option<&ColorMap>,
) {
    let view = paired_view(dataset, indices, Metric::Ops, Metric::War);

    // Group into one series per team so the legend lists teams.
    let mut series: BTreeMap<String, Vec<[f64; 2]>> = BTreeMap::new();
    for point in &view {
        let key = point
            .team
            .clone()
            .unwrap_or_else(|| "All players".to_string());
        series.entry(key).or_default().push([point.x, point.y]);
    }

    Plot::new("ops_war_scatter")
        .height(240.0)
        .legend(Legend::default())
        .x_axis_label(Metric::Ops.label())
        .y_axis_label(Metric::War.label())
        .show(ui, |plot_ui| {
            for (team, pts) in series {
                let color = color_map
                    .map(|cm| cm.color_for(&team))
                    .unwrap_or(Color32::LIGHT_BLUE);
                plot_ui.points(
                    Points::new(PlotPoints::from(pts))
                        .name(&team)
                        .color(color)
                        .radius(3.0),
                );
            }
        });
}

/// Label integer axis marks with the player name at that position.
fn name_tick(names: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    names
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}
