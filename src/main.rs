use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use clickwheel::app::cli::Args;
use clickwheel::app::config::AppConfig;
use clickwheel::app::events::AppEvent;
use clickwheel::app::input_handler;
use clickwheel::app::{App, Effect};
use clickwheel::artwork::ArtworkRenderer;
use clickwheel::auth::{resolve_token, AuthProvider, TokenAuth, DEFAULT_PROVIDER};
use clickwheel::catalog::{CatalogClient, PlaylistsPayload};
use clickwheel::player::{self, PlaybackTrait};
use clickwheel::ui;

/// Everything an effect may need to reach outside the controller.
struct Runtime {
    tx: mpsc::Sender<AppEvent>,
    auth: Arc<TokenAuth>,
    catalog: CatalogClient,
    artwork: Arc<ArtworkRenderer>,
    player: Box<dyn PlaybackTrait>,
}

impl Runtime {
    fn run(&mut self, app: &mut App, effects: Vec<Effect>) {
        for effect in effects {
            self.run_one(app, effect);
        }
    }

    fn run_one(&mut self, app: &mut App, effect: Effect) {
        match effect {
            Effect::SignIn(provider) => {
                if let Err(e) = self.auth.sign_in(&provider) {
                    warn!(error = %e, "sign in failed");
                    app.show_toast(&e.to_string());
                }
            }
            Effect::SignOut => {
                if let Err(e) = self.auth.sign_out() {
                    warn!(error = %e, "sign out failed");
                }
                if let Err(e) = self.player.stop() {
                    warn!(error = %e, "failed to stop player");
                }
            }
            Effect::FetchPlaylists {
                generation,
                token,
                needs_owner,
            } => {
                let catalog = self.catalog.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let event = match catalog.fetch_playlists(&token).await {
                        Ok(playlists) => {
                            // Name lookup is best effort
                            let owner = if needs_owner {
                                catalog.fetch_channel_title(&token).await.unwrap_or_else(|e| {
                                    warn!(error = %e, "channel lookup failed");
                                    None
                                })
                            } else {
                                None
                            };
                            AppEvent::PlaylistsLoaded(PlaylistsPayload {
                                generation,
                                playlists,
                                owner,
                            })
                        }
                        Err(e) => AppEvent::CatalogFailed("playlists".to_string(), e.to_string()),
                    };
                    let _ = tx.send(event).await;
                });
            }
            Effect::FetchSongs { ticket, token } => {
                let catalog = self.catalog.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let event = match catalog.fetch_songs(&token, &ticket.playlist_id).await {
                        Ok(songs) => AppEvent::SongsLoaded(ticket, songs),
                        Err(e) => AppEvent::CatalogFailed(ticket.label.clone(), e.to_string()),
                    };
                    let _ = tx.send(event).await;
                });
            }
            Effect::Play(id) => {
                if let Err(e) = self.player.load(&id, true) {
                    error!(error = %e, "playback failed");
                    app.show_toast("Playback failed");
                }
            }
            Effect::SetPlaying(playing) => {
                if let Err(e) = self.player.set_playing(playing) {
                    warn!(error = %e, "failed to toggle playback");
                }
            }
            Effect::LoadArtwork(url) => {
                let artwork = self.artwork.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let image = match artwork.fetch_image(&url).await {
                        Ok(img) => Some(img),
                        Err(e) => {
                            warn!(%url, error = %e, "artwork fetch failed");
                            None
                        }
                    };
                    let _ = tx.send(AppEvent::ArtworkUpdate(url, image)).await;
                });
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    let args = Args::parse();

    if args.generate_config {
        println!("{}", AppConfig::generate_default()?);
        return Ok(());
    }

    // Log to file, the terminal belongs to the UI
    let file_appender = tracing_appender::rolling::daily(AppConfig::get_log_dir(), "clickwheel.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let config = AppConfig::load(args.config.as_deref());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let (tx, mut rx) = mpsc::channel(100);

    // Global HTTP Client (Reused)
    let client = reqwest::Client::builder()
        .user_agent(concat!("clickwheel/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default();

    let token = resolve_token(args.token.as_deref(), config.access_token.as_deref());
    let auth = Arc::new(TokenAuth::new(token, config.user_name.clone()));

    let mut runtime = Runtime {
        tx: tx.clone(),
        auth: auth.clone(),
        catalog: CatalogClient::new(client.clone(), &config),
        artwork: Arc::new(ArtworkRenderer::new(client)),
        player: player::get_player(&config, args.no_audio, tx.clone()),
    };

    // 1. Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. Session Watch Task
    let tx_session = tx.clone();
    let mut session_rx = auth.subscribe();
    tokio::spawn(async move {
        while session_rx.changed().await.is_ok() {
            let session = session_rx.borrow_and_update().clone();
            if tx_session.send(AppEvent::SessionUpdate(session)).await.is_err() {
                break;
            }
        }
    });

    // 3. Animation Tick Task ⚡
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(50));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    if auth.has_token() {
        if let Err(e) = auth.sign_in(DEFAULT_PROVIDER) {
            warn!(error = %e, "automatic sign in failed");
        }
    }

    loop {
        terminal.draw(|f| ui::ui(f, &mut app))?;

        let Some(event) = rx.recv().await else {
            break;
        };
        let effects = match event {
            AppEvent::Input(event) => input_handler::handle_event(&event, &mut app),
            AppEvent::SessionUpdate(session) => app.apply_session(session),
            AppEvent::PlaylistsLoaded(payload) => {
                app.apply_playlists(payload);
                Vec::new()
            }
            AppEvent::SongsLoaded(ticket, songs) => {
                app.apply_songs(ticket, songs);
                Vec::new()
            }
            AppEvent::CatalogFailed(what, error) => {
                app.catalog_failed(&what, &error);
                Vec::new()
            }
            AppEvent::ArtworkUpdate(url, image) => {
                app.apply_artwork(url, image);
                Vec::new()
            }
            AppEvent::PlaybackEnded(generation) => {
                if generation == runtime.player.generation() {
                    app.on_playback_ended()
                } else {
                    Vec::new()
                }
            }
            AppEvent::Tick => {
                app.on_tick();
                Vec::new()
            }
        };
        runtime.run(&mut app, effects);

        if !app.is_running {
            break;
        }
    }

    if let Err(e) = runtime.player.stop() {
        warn!(error = %e, "failed to stop player");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    info!("bye");

    Ok(())
}
