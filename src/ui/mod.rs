pub(crate) mod detail_view;
pub(crate) mod seasons_view;

use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use egui::{Color32, Visuals};
use log::debug;

use crate::errors::PodiumError;
use crate::remote::{FetchRequest, FetchResponse};
use crate::season::{
    CorrelatedRace, RaceListSlot, RaceListState, ResolveState, Season, SeasonResolver,
    SelectedSeasonCache, correlate_champion_wins,
};
use crate::theme::{Theme, ThemeStore};

const PENDING_REPAINT_MS: u64 = 100;
pub(crate) const CHAMPION_GOLD: Color32 = Color32::from_rgb(212, 175, 55);

#[derive(Clone, Copy, Debug)]
enum View {
    SeasonList,
    SeasonDetail { year: u16 },
}

#[derive(Debug, Default)]
enum SeasonListState {
    #[default]
    Idle,
    Pending,
    Loaded(Vec<Season>),
    Failed(PodiumError),
}

/// `DashboardApp` renders the season list and the per-season detail view.
///
/// All season and race data arrives through the fetch worker channels; the
/// UI thread itself never touches the network. Season selection is carried
/// to the detail view through the `SelectedSeasonCache` so an already
/// complete season is not fetched twice.
pub struct DashboardApp {
    requests: Sender<FetchRequest>,
    responses: Receiver<FetchResponse>,
    view: View,
    season_list: SeasonListState,
    cache: SelectedSeasonCache,
    resolver: SeasonResolver,
    races: RaceListSlot,
    correlated: Option<Vec<CorrelatedRace>>,
    theme: Theme,
    theme_store: ThemeStore,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        requests: Sender<FetchRequest>,
        responses: Receiver<FetchResponse>,
        initial_year: Option<u16>,
    ) -> Self {
        let theme_store = ThemeStore::new_default();
        // the default egui style follows the host preference, so its dark
        // flag doubles as the ambient signal
        let theme = theme_store.load(Some(cc.egui_ctx.style().visuals.dark_mode));

        let mut app = Self {
            requests,
            responses,
            view: View::SeasonList,
            season_list: SeasonListState::Idle,
            cache: SelectedSeasonCache::new(),
            resolver: SeasonResolver::new(),
            races: RaceListSlot::new(),
            correlated: None,
            theme,
            theme_store,
        };
        // opened by year directly (deep link): no cached season, always fetch
        if let Some(year) = initial_year {
            app.open_year(year);
        }
        app
    }

    fn request_season_list(&mut self) {
        self.season_list = match self.requests.send(FetchRequest::SeasonList) {
            Ok(()) => SeasonListState::Pending,
            Err(_) => SeasonListState::Failed(PodiumError::FetchChannelClosed),
        };
    }

    fn open_season(&mut self, season: Season) {
        let year = season.year;
        self.cache.set(season);
        self.open_year(year);
    }

    fn open_year(&mut self, year: u16) {
        self.view = View::SeasonDetail { year };
        self.correlated = None;
        self.resolver.reset();
        self.races.reset();

        if let Some(ticket) = self.resolver.begin(year, self.cache.get()) {
            if self.requests.send(FetchRequest::Season(ticket)).is_err() {
                self.resolver
                    .commit(ticket, Err(PodiumError::FetchChannelClosed));
            }
        }
        if let Some(ticket) = self.races.begin(year) {
            if self.requests.send(FetchRequest::Races(ticket)).is_err() {
                self.races
                    .commit(ticket, Err(PodiumError::FetchChannelClosed));
            }
        }
        self.try_correlate();
    }

    fn close_detail(&mut self) {
        self.view = View::SeasonList;
    }

    fn handle_response(&mut self, response: FetchResponse) {
        match response {
            FetchResponse::SeasonList(result) => {
                self.season_list = match result {
                    Ok(seasons) => SeasonListState::Loaded(seasons),
                    Err(error) => SeasonListState::Failed(error),
                };
            }
            FetchResponse::Season { ticket, result } => {
                if self.resolver.commit(ticket, result) {
                    self.try_correlate();
                } else {
                    debug!("Discarded stale season response for {}", ticket.year());
                }
            }
            FetchResponse::Races { ticket, result } => {
                if self.races.commit(ticket, result) {
                    self.try_correlate();
                } else {
                    debug!("Discarded stale race list response for {}", ticket.year());
                }
            }
        }
    }

    /// Correlation runs only once both the season and the race list are
    /// terminal and successful; a season-only or races-only completion
    /// never produces a partial result.
    fn try_correlate(&mut self) {
        if self.correlated.is_some() {
            return;
        }
        if let (ResolveState::Resolved(season), RaceListState::Loaded(races)) =
            (self.resolver.state(), self.races.state())
        {
            self.correlated = Some(correlate_champion_wins(season, races.clone()));
        }
    }

    fn has_pending_fetch(&self) -> bool {
        matches!(self.season_list, SeasonListState::Pending)
            || self.resolver.is_pending()
            || self.races.is_pending()
    }

    fn header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Podium");
            if matches!(self.view, View::SeasonDetail { .. }) && ui.button("< Seasons").clicked() {
                self.close_detail();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = match self.theme {
                    Theme::Light => "Dark mode",
                    Theme::Dark => "Light mode",
                };
                if ui.button(label).clicked() {
                    self.theme = self.theme_store.toggle(self.theme);
                }
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(response) = self.responses.try_recv() {
            self.handle_response(response);
        }

        // idempotent: keeps the display marker in sync with the stored value
        ctx.set_visuals(if self.theme.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.header(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            View::SeasonList => self.seasons_view(ui),
            View::SeasonDetail { year } => self.detail_view(ui, year),
        });

        if self.has_pending_fetch() {
            ctx.request_repaint_after(Duration::from_millis(PENDING_REPAINT_MS));
        }
    }
}
