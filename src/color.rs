use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: team → Color32
// ---------------------------------------------------------------------------

/// Maps team names to distinct colours for the chart series.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the dataset's sorted team list.
    pub fn new(teams: &[String]) -> Self {
        let palette = generate_palette(teams.len());
        let mapping: BTreeMap<String, Color32> = teams
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a team.
    pub fn color_for(&self, team: &str) -> Color32 {
        self.mapping
            .get(team)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_size_matches_request() {
        assert_eq!(generate_palette(10).len(), 10);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn teams_get_distinct_colors() {
        let teams = vec!["KIA".to_string(), "LG".to_string(), "NC".to_string()];
        let map = ColorMap::new(&teams);
        let colors: Vec<Color32> = teams.iter().map(|t| map.color_for(t)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }

    #[test]
    fn unknown_team_falls_back_to_default() {
        let map = ColorMap::new(&["LG".to_string()]);
        assert_eq!(map.color_for("Doosan"), Color32::GRAY);
    }
}
