use egui::{Color32, RichText};

use super::{DashboardApp, SeasonListState};
use crate::season::Season;

impl DashboardApp {
    pub(crate) fn seasons_view(&mut self, ui: &mut egui::Ui) {
        if matches!(self.season_list, SeasonListState::Idle) {
            self.request_season_list();
        }

        let mut picked: Option<Season> = None;
        match &self.season_list {
            SeasonListState::Idle | SeasonListState::Pending => {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label("Loading seasons...");
                });
            }
            SeasonListState::Failed(error) => {
                ui.label(
                    RichText::new(format!("Error loading seasons: {error}"))
                        .color(Color32::RED),
                );
            }
            SeasonListState::Loaded(seasons) if seasons.is_empty() => {
                ui.label("No seasons found.");
            }
            SeasonListState::Loaded(seasons) => {
                ui.heading("World Champions");
                ui.add_space(4.0);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for season in seasons {
                        if season_row(ui, season) {
                            picked = Some(season.clone());
                        }
                    }
                });
            }
        }

        if let Some(season) = picked {
            self.open_season(season);
        }
    }
}

fn season_row(ui: &mut egui::Ui, season: &Season) -> bool {
    let champion = season
        .winner
        .as_ref()
        .map(|driver| driver.full_name())
        .unwrap_or_else(|| "No winner data".to_string());
    let text = format!("{}  —  {}", season.year, champion);

    ui.add_sized(
        [ui.available_width(), 28.0],
        egui::Button::new(RichText::new(text).size(14.0)),
    )
    .clicked()
}
