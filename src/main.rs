use std::sync::mpsc;

use clap::{Parser, Subcommand};
use egui::Vec2;
use log::warn;

use podium::errors::PodiumError;
use podium::remote::{HttpSeasonSource, SeasonSource, spawn_fetch_worker};
use podium::season::correlate_champion_wins;
use podium::ui::DashboardApp;

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the dashboard window
    Dashboard {
        #[arg(short, long, default_value = DEFAULT_API_URL)]
        api: String,

        /// Open a season's detail view directly
        #[arg(short, long)]
        year: Option<u16>,
    },
    /// Print a season's race results to the terminal
    Season {
        #[arg(short, long)]
        year: u16,

        #[arg(short, long, default_value = DEFAULT_API_URL)]
        api: String,
    },
}

fn dashboard(api: String, year: Option<u16>) -> Result<(), PodiumError> {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_fetch_worker(HttpSeasonSource::new(api), request_rx, response_tx);

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_inner_size(Vec2::new(720., 560.));

    eframe::run_native(
        "Podium",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(DashboardApp::new(
                cc,
                request_tx,
                response_rx,
                year,
            )))
        }),
    )
    .expect("could not start app");
    Ok(())
}

fn season(year: u16, api: String) -> Result<(), PodiumError> {
    let source = HttpSeasonSource::new(api);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| PodiumError::RuntimeStartError { source: e })?;

    let season = runtime.block_on(source.get_season(year))?;
    let races = runtime.block_on(source.list_races(year))?;

    match &season.winner {
        Some(driver) => println!(
            "{} champion: {} ({})",
            season.year,
            driver.full_name(),
            driver.nationality
        ),
        None => println!("{} champion: no winner data", season.year),
    }

    let correlated = correlate_champion_wins(&season, races);
    if correlated.is_empty() {
        println!("No races found.");
        return Ok(());
    }

    println!("{:<6} {:<12} {:<32} {}", "Round", "Date", "Grand Prix", "Winner");
    for tagged in &correlated {
        let winner = tagged.race.winner_name().unwrap_or_else(|| "-".to_string());
        let marker = if tagged.is_champion_win { " *" } else { "" };
        println!(
            "{:<6} {:<12} {:<32} {}{}",
            tagged.race.round, tagged.race.date, tagged.race.race_name, winner, marker
        );
    }
    Ok(())
}

fn main() {
    colog::init();

    let cli = Args::parse();
    if let Err(e) = ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    }) {
        warn!("Could not set Ctrl-C handler: {e}");
    }

    match cli.command {
        Commands::Dashboard { api, year } => {
            dashboard(api, year).expect("Error while running the dashboard");
        }
        Commands::Season { year, api } => {
            season(year, api).expect("Error while loading season results");
        }
    };
}
