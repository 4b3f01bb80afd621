use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{select_player, TeamSelection};
use crate::data::loader::{DataSource, TextEncoding};
use crate::data::views::player_card;
use crate::export;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – source entry, encoding, menus, status
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            let has_data = state.dataset.is_some();
            if ui
                .add_enabled(has_data, egui::Button::new("Export view as CSV…"))
                .clicked()
            {
                export_view_dialog(state, ExportFormat::Csv);
                ui.close_menu();
            }
            if ui
                .add_enabled(has_data, egui::Button::new("Export view as JSON…"))
                .clicked()
            {
                export_view_dialog(state, ExportFormat::Json);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label("Source:");
        ui.add(
            egui::TextEdit::singleline(&mut state.source_input)
                .hint_text("https://…/batting.csv or a local path")
                .desired_width(320.0),
        );

        egui::ComboBox::from_id_salt("encoding")
            .selected_text(state.encoding.label())
            .show_ui(ui, |ui: &mut Ui| {
                for enc in [TextEncoding::Utf8, TextEncoding::EucKr] {
                    ui.selectable_value(&mut state.encoding, enc, enc.label());
                }
            });

        if ui.button("Load").clicked() {
            load_from_input(state);
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} players loaded, {} visible",
                ds.len(),
                state.visible.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filters and player detail
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };
    let has_team = dataset.has_team;
    let teams = dataset.teams.clone();

    // ---- Team selector (only with the team capability) ----
    if has_team {
        ui.strong("Team");
        let current = state.selection.team.clone();
        egui::ComboBox::from_id_salt("team_filter")
            .selected_text(current.label().to_string())
            .show_ui(ui, |ui: &mut Ui| {
                if ui
                    .selectable_label(current == TeamSelection::All, "All teams")
                    .clicked()
                {
                    state.set_team(TeamSelection::All);
                }
                for team in &teams {
                    let candidate = TeamSelection::Team(team.clone());
                    if ui.selectable_label(current == candidate, team).clicked() {
                        state.set_team(TeamSelection::Team(team.clone()));
                    }
                }
            });
        ui.separator();
    }

    // ---- Player selector ----
    ui.strong("Player");
    let names = state.visible_player_names();
    if names.is_empty() {
        ui.label("No players in the current view.");
        return;
    }

    let current_player = state.selection.player.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("player_select")
        .selected_text(current_player.clone())
        .show_ui(ui, |ui: &mut Ui| {
            for name in &names {
                if ui
                    .selectable_label(current_player == *name, name)
                    .clicked()
                {
                    state.set_player(name.clone());
                }
            }
        });

    // ---- Detail card for the selected player ----
    ui.add_space(8.0);
    if let (Some(ds), Some(name)) = (&state.dataset, &state.selection.player) {
        if let Some(player) = select_player(ds, &state.visible, name) {
            let card = player_card(player);
            ui.separator();
            ui.strong(format!("{} — season", player.name));
            egui::Grid::new("player_card")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui: &mut Ui| {
                    ui.label("AVG");
                    ui.label(card.avg);
                    ui.end_row();
                    ui.label("HR");
                    ui.label(card.hr);
                    ui.end_row();
                    ui.label("OPS");
                    ui.label(card.ops);
                    ui.end_row();
                    ui.label("WAR");
                    ui.label(card.war);
                    ui.end_row();
                });
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load from the source text field (URL or path).
pub fn load_from_input(state: &mut AppState) {
    let input = state.source_input.trim().to_string();
    if input.is_empty() {
        state.status_message = Some("Enter a URL or file path first.".to_string());
        return;
    }
    load_source(state, &DataSource::from_input(&input));
}

/// Pick a local CSV with the native file dialog and load it.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open batting stats")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.source_input = path.display().to_string();
        load_source(state, &DataSource::File(path));
    }
}

fn load_source(state: &mut AppState, source: &DataSource) {
    state.loading = true;
    match crate::data::load_dataset(source, state.encoding) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} players from {source} ({} teams)",
                dataset.len(),
                dataset.teams.len()
            );
            let empty = dataset.is_empty();
            state.set_dataset(dataset);
            if empty {
                state.status_message =
                    Some("Loaded, but no rows survived cleaning.".to_string());
            }
        }
        Err(e) => {
            log::error!("Failed to load {source}: {e}");
            state.status_message = Some(format!("Error: {e}"));
            state.loading = false;
        }
    }
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

enum ExportFormat {
    Csv,
    Json,
}

fn export_view_dialog(state: &mut AppState, format: ExportFormat) {
    let (title, ext) = match format {
        ExportFormat::Csv => ("Export view as CSV", "csv"),
        ExportFormat::Json => ("Export view as JSON", "json"),
    };

    let Some(path) = rfd::FileDialog::new()
        .set_title(title)
        .add_filter(ext.to_uppercase(), &[ext])
        .save_file()
    else {
        return;
    };

    let result = match &state.dataset {
        Some(ds) => match format {
            ExportFormat::Csv => export::write_csv(&path, ds, &state.visible),
            ExportFormat::Json => export::write_json(&path, ds, &state.visible),
        },
        None => return,
    };

    match result {
        Ok(()) => {
            log::info!(
                "Exported {} rows to {}",
                state.visible.len(),
                path.display()
            );
        }
        Err(e) => {
            log::error!("Export failed: {e:#}");
            state.status_message = Some(format!("Export failed: {e:#}"));
        }
    }
}
