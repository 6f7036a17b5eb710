use egui::{Color32, RichText};
use egui_extras::{Column, TableBuilder};

use super::{CHAMPION_GOLD, DashboardApp};
use crate::season::{CorrelatedRace, RaceListState, ResolveState, Season};

impl DashboardApp {
    pub(crate) fn detail_view(&mut self, ui: &mut egui::Ui, year: u16) {
        if self.resolver.is_pending() || self.races.is_pending() {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Loading season details...");
            });
            return;
        }

        match self.resolver.state() {
            ResolveState::Failed(error) if error.is_not_found() => {
                ui.label(format!("Season {year} not found."));
                return;
            }
            ResolveState::Failed(error) => {
                ui.label(
                    RichText::new(format!("Error loading season: {error}")).color(Color32::RED),
                );
                return;
            }
            ResolveState::Idle | ResolveState::Pending => return,
            ResolveState::Resolved(season) => {
                champion_header(ui, season);
            }
        }

        ui.add_space(8.0);
        match self.races.state() {
            RaceListState::Failed(error) => {
                ui.label(
                    RichText::new(format!("Error loading races: {error}")).color(Color32::RED),
                );
            }
            RaceListState::Loaded(races) if races.is_empty() => {
                ui.label("No races found.");
            }
            RaceListState::Loaded(_) => {
                if let Some(correlated) = &self.correlated {
                    races_table(ui, correlated);
                }
            }
            RaceListState::Idle | RaceListState::Pending => {}
        }
    }
}

fn champion_header(ui: &mut egui::Ui, season: &Season) {
    ui.heading(format!("{} Champion", season.year));
    match &season.winner {
        Some(driver) => {
            ui.label(RichText::new(driver.full_name()).size(16.0).strong());
            ui.label(&driver.nationality);
        }
        None => {
            ui.label("No winner data");
        }
    }
}

fn races_table(ui: &mut egui::Ui, races: &[CorrelatedRace]) {
    ui.heading("Race Results");
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .column(Column::remainder())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Round", "Date", "Grand Prix", "Circuit", "Winner"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for tagged in races {
                body.row(20.0, |mut row| {
                    let cell = |value: String| {
                        if tagged.is_champion_win {
                            RichText::new(value).color(CHAMPION_GOLD).strong()
                        } else {
                            RichText::new(value)
                        }
                    };
                    row.col(|ui| {
                        ui.label(cell(tagged.race.round.to_string()));
                    });
                    row.col(|ui| {
                        ui.label(cell(tagged.race.date.clone()));
                    });
                    row.col(|ui| {
                        ui.label(cell(tagged.race.race_name.clone()));
                    });
                    row.col(|ui| {
                        ui.label(cell(tagged.race.circuit_name.clone()));
                    });
                    row.col(|ui| {
                        let winner = tagged
                            .race
                            .winner_name()
                            .unwrap_or_else(|| "-".to_string());
                        ui.label(cell(winner));
                    });
                });
            }
        });
}
