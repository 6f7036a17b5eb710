// Fetch worker thread bridging the UI and the remote source
//
// The dashboard UI thread never blocks on the network. A worker thread owns
// a current-thread tokio runtime and the season source, takes requests off
// an mpsc channel, and answers on a second channel. Season and race
// responses echo the ticket they were issued for so the UI can reject
// completions that arrive after the viewed year changed.

use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use log::{debug, error};

use crate::errors::PodiumError;
use crate::remote::SeasonSource;
use crate::season::{FetchTicket, Race, Season};

#[derive(Debug)]
pub enum FetchRequest {
    SeasonList,
    Season(FetchTicket),
    Races(FetchTicket),
}

#[derive(Debug)]
pub enum FetchResponse {
    SeasonList(Result<Vec<Season>, PodiumError>),
    Season {
        ticket: FetchTicket,
        result: Result<Season, PodiumError>,
    },
    Races {
        ticket: FetchTicket,
        result: Result<Vec<Race>, PodiumError>,
    },
}

/// Spawns the worker. The thread exits when either channel endpoint is
/// dropped by the UI.
pub fn spawn_fetch_worker<S>(
    source: S,
    requests: Receiver<FetchRequest>,
    responses: Sender<FetchResponse>,
) -> thread::JoinHandle<()>
where
    S: SeasonSource + Send + 'static,
{
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                error!("Could not start fetch worker runtime: {e}");
                return;
            }
        };

        while let Ok(request) = requests.recv() {
            debug!("Fetch worker handling {request:?}");
            let response = match request {
                FetchRequest::SeasonList => {
                    FetchResponse::SeasonList(runtime.block_on(source.list_seasons()))
                }
                FetchRequest::Season(ticket) => FetchResponse::Season {
                    ticket,
                    result: runtime.block_on(source.get_season(ticket.year())),
                },
                FetchRequest::Races(ticket) => FetchResponse::Races {
                    ticket,
                    result: runtime.block_on(source.list_races(ticket.year())),
                },
            };
            if responses.send(response).is_err() {
                break;
            }
        }
    })
}
