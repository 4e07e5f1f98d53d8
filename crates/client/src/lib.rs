//! Terminal client for Energy Quest.
//!
//! # Architecture
//!
//! ```text
//! Client (frame loop)
//!   ├─→ Orchestrator (game rules, state machine, timers)
//!   ├─→ stdin (typed commands → InputEvent)
//!   └─→ EventBus (game events → stdout)
//! ```
//!
//! The client is the composition root: it picks the collaborators (terminal
//! scene, logged audio, directory or preloaded assets, file saves) and owns
//! the only clock the game has.

pub mod config;
pub mod frontend;
pub mod logging;
pub mod terminal;

pub use config::ClientConfig;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use runtime::{Event, FileProgressRepository, Orchestrator, Topic};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio::time::{Instant, MissedTickBehavior};

use frontend::{Command, HELP, parse_command, render_event};
use terminal::{DirectoryAssets, LoggedAudio, TerminalScene};

/// Assembles an orchestrator from client settings.
pub fn build_orchestrator(config: &ClientConfig) -> Result<Orchestrator> {
    let mut builder = Orchestrator::builder()
        .config(config.runtime_config())
        .scene(TerminalScene::default())
        .audio(LoggedAudio::default());

    if let Some(dir) = &config.asset_dir {
        tracing::info!(dir = %dir.display(), "loading assets from directory");
        builder = builder.asset_loader(DirectoryAssets::new(dir));
    }

    if config.enable_persistence {
        let repository = match &config.save_data_dir {
            Some(dir) => FileProgressRepository::new(dir),
            None => FileProgressRepository::in_default_dir(),
        }
        .context("opening the save directory")?;
        tracing::info!(path = %repository.path().display(), "save file");
        builder = builder.repository(Arc::new(repository));
    }

    builder.build().context("building the orchestrator")
}

/// Top-level client container.
pub struct Client {
    orchestrator: Orchestrator,
    frame: Duration,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Runs the frame loop until the player quits or stdin closes.
    pub async fn run(mut self) -> Result<()> {
        let mut by_topic = self
            .orchestrator
            .event_bus()
            .subscribe_multiple(&Topic::ALL);
        let mut receivers: Vec<_> = Topic::ALL
            .iter()
            .filter_map(|topic| by_topic.remove(topic))
            .collect();

        self.orchestrator.start()?;
        flush_events(&mut receivers);
        println!("(ketik `help` untuk daftar perintah)");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut interval = tokio::time::interval(self.frame);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_frame = Instant::now();

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let now = Instant::now();
                    let dt = now - last_frame;
                    last_frame = now;
                    let change = self.orchestrator.tick(dt)?;
                    if change.is_some() && self.orchestrator.is_finished() {
                        flush_events(&mut receivers);
                        println!("\n(tamat - ketik `menu` untuk kembali atau `quit` untuk keluar)");
                    }
                }
                line = lines.next_line() => {
                    let Some(line) = line.context("reading stdin")? else {
                        tracing::info!("stdin closed");
                        break;
                    };
                    match parse_command(&line) {
                        Ok(Some(Command::Quit)) => break,
                        Ok(Some(Command::Help)) => println!("{HELP}"),
                        Ok(Some(Command::Input(event))) => {
                            if let Err(error) = self.orchestrator.handle_input(event) {
                                tracing::error!(%error, severity = ?error.severity(), "input failed");
                                println!("! {error}");
                            }
                        }
                        Ok(None) => {}
                        Err(error) => println!("{error}"),
                    }
                }
            }

            flush_events(&mut receivers);
        }

        if self.orchestrator.current_state().level().is_some()
            && let Err(error) = self.orchestrator.save()
        {
            tracing::debug!(%error, "no save on exit");
        }
        tracing::info!(clock = ?self.orchestrator.clock(), "client stopped");
        Ok(())
    }
}

/// Builder for [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    orchestrator: Option<Orchestrator>,
    frame: Option<Duration>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the orchestrator (required).
    pub fn orchestrator(mut self, orchestrator: Orchestrator) -> Self {
        self.orchestrator = Some(orchestrator);
        self
    }

    /// Wall-clock length of one frame (default: 1/30 s).
    pub fn frame(mut self, frame: Duration) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn build(self) -> Result<Client> {
        let orchestrator = self
            .orchestrator
            .context("Orchestrator is required. Use .orchestrator() to set it.")?;
        Ok(Client {
            orchestrator,
            frame: self.frame.unwrap_or(Duration::from_secs(1) / 30),
        })
    }
}

fn flush_events(receivers: &mut [broadcast::Receiver<Event>]) {
    for receiver in receivers {
        loop {
            match receiver.try_recv() {
                Ok(event) => {
                    if let Some(text) = render_event(&event) {
                        println!("{text}");
                    }
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event display lagged");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }
}
