//! CLI runner - executes commands

use crate::api::SpotifyClient;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::pagination::PageStream;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load config, build the client and run the command against stdout
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        config.require_token()?;
        let client = SpotifyClient::from_config(&config)?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.execute(&client, &mut out).await
    }

    /// Config file (if any) overlaid with the environment
    fn load_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                ClientConfig::from_file(path)?
            }
            None => ClientConfig::default(),
        };
        config.merge_env()
    }

    /// Run the command, writing one record per item to `out`
    pub async fn execute(&self, client: &SpotifyClient, out: &mut impl Write) -> Result<()> {
        match &self.cli.command {
            Commands::Me => {
                let user = client.users().current_user().await?;
                self.emit(out, &user)
            }
            Commands::Playlists { limit } => {
                let stream = client.playlists().current_user_playlists_all().await?;
                self.drain(stream, *limit, out).await
            }
            Commands::PlaylistItems { id, max } => {
                let stream = client.playlists().items_all(id).await?;
                self.drain(stream, *max, out).await
            }
            Commands::SavedTracks { max } => {
                let stream = client.library().saved_tracks_all().await?;
                self.drain(stream, *max, out).await
            }
            Commands::Search { query, kind, max } => {
                let stream = client.search().search_all::<Value>(query, *kind).await?;
                self.drain(stream, Some(*max), out).await
            }
            Commands::Album { id } => {
                let album = client.albums().get(id).await?;
                self.emit(out, &album)
            }
            Commands::NowPlaying => match client.player().currently_playing().await? {
                Some(playing) => self.emit(out, &playing),
                None => {
                    info!("Nothing is playing");
                    Ok(())
                }
            },
            Commands::Devices => {
                for device in client.player().devices().await? {
                    self.emit(out, &device)?;
                }
                Ok(())
            }
        }
    }

    /// Emit items from `stream`, stopping after `max` if given
    async fn drain<T: Serialize>(
        &self,
        mut stream: PageStream<T>,
        max: Option<usize>,
        out: &mut impl Write,
    ) -> Result<()> {
        let mut emitted = 0;
        while max.map_or(true, |max| emitted < max) {
            let Some(item) = stream.next().await? else {
                break;
            };
            self.emit(out, &item)?;
            emitted += 1;
        }
        debug!(
            "Emitted {emitted} items from {} pages",
            stream.pages_fetched()
        );
        Ok(())
    }

    fn emit<T: Serialize>(&self, out: &mut impl Write, value: &T) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        writeln!(out, "{line}")?;
        Ok(())
    }
}
