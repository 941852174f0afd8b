use super::config::UserConfig;
use super::keys::KeyConfig;
use super::menu::{initial_menu, signed_in_menu, MenuNode};
use super::navigation::{NavigationState, Selection};
use super::queue::PlaybackQueue;
use super::wheel::{ClickWheel, WheelEvent, Zone};
use crate::auth::{AuthStatus, Session, DEFAULT_PROVIDER};
use crate::catalog::{FetchTicket, PlaylistsPayload};
use crate::ui::theme::Theme;
use image::DynamicImage;
use ratatui::layout::Rect;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Exclusive display mode of the screen 🖥️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Menu,
    Player,
    CoverFlow,
}

/// Everything the wheel, its buttons and the keyboard can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Scroll(i32),
    Select,
    Back,
    PlayPause,
    Next,
    Prev,
}

/// Side effects a transition asks the runtime to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SignIn(String),
    SignOut,
    /// `needs_owner`: the session carries no user name, look it up.
    FetchPlaylists { generation: u64, token: String, needs_owner: bool },
    FetchSongs { ticket: FetchTicket, token: String },
    Play(String),
    SetPlaying(bool),
    LoadArtwork(String),
}

pub enum ArtworkState {
    Idle,
    Loading(String),
    Loaded(String, DynamicImage),
    Failed,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub start_time: Instant,
    pub deadline: Instant,
}

/// Read-only view handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub title: &'a str,
    pub entries: &'a [MenuNode],
    pub selection: usize,
    pub view: ViewMode,
    pub now_playing: Option<&'a MenuNode>,
    pub is_playing: bool,
    /// (1-based position, length)
    pub queue_position: Option<(usize, usize)>,
    pub user_name: Option<&'a str>,
    pub loading: Option<&'a str>,
}

/// Thumbnail for a playable id, preferring the catalog's own image.
pub fn artwork_url(song: &MenuNode) -> Option<String> {
    song.image_url.clone().or_else(|| {
        song.external_id
            .as_ref()
            .map(|id| format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id))
    })
}

pub struct App {
    pub theme: Theme,
    pub keys: KeyConfig,
    pub is_running: bool,
    pub device_name: String,

    nav: NavigationState,
    queue: PlaybackQueue,
    pub view_mode: ViewMode,
    pub is_playing: bool,

    pub session: Session,
    /// Playlist label of the in-flight song fetch
    pub loading: Option<String>,

    pub artwork: ArtworkState,
    pub toast: Option<Toast>,

    /// Gesture state + where the wheel was last drawn
    pub wheel: ClickWheel,
    pub wheel_area: Rect,
    pub cell_aspect: f64,

    /// Animation frame counter
    pub frame: u64,
}

impl App {
    pub fn new(config: &UserConfig) -> Self {
        Self {
            theme: config.theme.clone(),
            keys: config.keys.clone(),
            is_running: true,
            device_name: config.device_name.clone(),
            nav: NavigationState::new(initial_menu(&config.device_name)),
            queue: PlaybackQueue::default(),
            view_mode: ViewMode::default(),
            is_playing: false,
            session: Session::default(),
            loading: None,
            artwork: ArtworkState::Idle,
            toast: None,
            wheel: ClickWheel::new(),
            wheel_area: Rect::default(),
            cell_aspect: config.cell_aspect,
            frame: 0,
        }
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn queue(&self) -> &PlaybackQueue {
        &self.queue
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let current = self.nav.current();
        Snapshot {
            title: &current.label,
            entries: current.children(),
            selection: self.nav.selection(),
            view: self.view_mode,
            now_playing: self.queue.current(),
            is_playing: self.is_playing,
            queue_position: self.queue.current_index().map(|i| (i + 1, self.queue.len())),
            user_name: self.session.user_name.as_deref(),
            loading: self.loading.as_deref(),
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Scroll(direction) => {
                self.scroll(direction);
                Vec::new()
            }
            Action::Select => self.select(),
            Action::Back => {
                self.back();
                Vec::new()
            }
            Action::PlayPause => self.play_pause(),
            Action::Next => self.next(),
            Action::Prev => self.prev(),
        }
    }

    pub fn on_wheel_event(&mut self, event: WheelEvent) -> Vec<Effect> {
        let action = match event {
            WheelEvent::Scroll(direction) => Action::Scroll(direction),
            WheelEvent::CenterTap => Action::Select,
            WheelEvent::Tap(Zone::Menu) => Action::Back,
            WheelEvent::Tap(Zone::Play) => Action::PlayPause,
            WheelEvent::Tap(Zone::Prev) => Action::Prev,
            WheelEvent::Tap(Zone::Next) => Action::Next,
        };
        self.dispatch(action)
    }

    pub fn scroll(&mut self, direction: i32) {
        self.nav.scroll(direction);
    }

    pub fn select(&mut self) -> Vec<Effect> {
        match self.nav.resolve_selection() {
            Selection::Nothing => Vec::new(),
            Selection::SignIn => vec![Effect::SignIn(DEFAULT_PROVIDER.to_string())],
            Selection::SignOut => vec![Effect::SignOut],
            Selection::Fetch { index, id, label } => {
                let Some(token) = self.session.access_token.clone() else {
                    self.show_toast("Sign in from Settings first");
                    return Vec::new();
                };
                debug!(playlist = %id, "requesting playlist items");
                self.loading = Some(label.clone());
                vec![Effect::FetchSongs {
                    ticket: FetchTicket {
                        generation: self.session.generation,
                        parent_path: self.nav.path().to_vec(),
                        index,
                        playlist_id: id,
                        label,
                    },
                    token,
                }]
            }
            Selection::Descend(index) => {
                self.nav.descend(index);
                Vec::new()
            }
            Selection::Song(index) => {
                self.queue = PlaybackQueue::from_listing(self.nav.current().children(), index);
                self.view_mode = ViewMode::Player;
                self.is_playing = true;
                self.start_current()
            }
            Selection::CoverFlow => {
                self.view_mode = ViewMode::CoverFlow;
                Vec::new()
            }
        }
    }

    /// Leave a sub-view first, otherwise pop one menu level.
    pub fn back(&mut self) {
        if self.view_mode != ViewMode::Menu {
            self.view_mode = ViewMode::Menu;
            return;
        }
        self.nav.pop();
    }

    pub fn play_pause(&mut self) -> Vec<Effect> {
        self.is_playing = !self.is_playing;
        vec![Effect::SetPlaying(self.is_playing)]
    }

    pub fn next(&mut self) -> Vec<Effect> {
        if self.queue.next().is_none() {
            return Vec::new();
        }
        self.is_playing = true;
        self.start_current()
    }

    pub fn prev(&mut self) -> Vec<Effect> {
        if self.queue.prev().is_none() {
            return Vec::new();
        }
        self.is_playing = true;
        self.start_current()
    }

    /// The player finished the current item.
    pub fn on_playback_ended(&mut self) -> Vec<Effect> {
        self.next()
    }

    fn start_current(&mut self) -> Vec<Effect> {
        let Some(song) = self.queue.current() else {
            return Vec::new();
        };
        let Some(id) = song.external_id.clone() else {
            return Vec::new();
        };
        info!(title = %song.label, %id, "now playing");

        let mut effects = vec![Effect::Play(id)];
        match artwork_url(song) {
            Some(url) => {
                self.artwork = ArtworkState::Loading(url.clone());
                effects.push(Effect::LoadArtwork(url));
            }
            None => self.artwork = ArtworkState::Idle,
        }
        effects
    }

    /// New session from the auth collaborator.
    pub fn apply_session(&mut self, session: Session) -> Vec<Effect> {
        let was_signed_in = self.session.is_authenticated();
        self.session = session;

        if self.session.is_authenticated() {
            if let Some(token) = self.session.access_token.clone() {
                return vec![Effect::FetchPlaylists {
                    generation: self.session.generation,
                    token,
                    needs_owner: self.session.user_name.is_none(),
                }];
            }
        } else if was_signed_in && self.session.status == AuthStatus::Unauthenticated {
            self.loading = None;
            self.nav.replace_root(initial_menu(&self.device_name));
            // the runtime stops the player alongside the sign-out
            self.queue = PlaybackQueue::default();
            self.is_playing = false;
            self.artwork = ArtworkState::Idle;
            self.view_mode = ViewMode::Menu;
            self.show_toast("Signed out");
        }
        Vec::new()
    }

    /// Splice fetched playlists into a rebuilt tree. Answers for an older
    /// session are dropped.
    pub fn apply_playlists(&mut self, payload: PlaylistsPayload) -> bool {
        if payload.generation != self.session.generation || !self.session.is_authenticated() {
            debug!(generation = payload.generation, "dropping stale playlists");
            return false;
        }
        let name = self
            .session
            .user_name
            .clone()
            .or(payload.owner);
        info!(count = payload.playlists.len(), "playlists loaded");
        let root = signed_in_menu(&self.device_name, payload.playlists, name.as_deref());
        self.nav.replace_root(root);
        true
    }

    /// Store fetched songs into their playlist and open it if the user is
    /// still looking at the listing that requested it.
    pub fn apply_songs(&mut self, ticket: FetchTicket, songs: Vec<MenuNode>) -> bool {
        if self.loading.as_deref() == Some(ticket.label.as_str()) {
            self.loading = None;
        }
        if ticket.generation != self.session.generation {
            debug!(playlist = %ticket.playlist_id, "dropping songs from an old session");
            return false;
        }

        let Some(playlist) = self
            .nav
            .node_at_mut(&ticket.parent_path)
            .and_then(|parent| parent.children_mut())
            .and_then(|children| children.get_mut(ticket.index))
            .filter(|node| node.has_id(&ticket.playlist_id))
        else {
            debug!(playlist = %ticket.playlist_id, "playlist no longer in the tree");
            return false;
        };

        info!(playlist = %ticket.label, count = songs.len(), "playlist items loaded");
        playlist.children = super::menu::Children::Loaded(songs);

        if self.nav.path() == ticket.parent_path.as_slice() {
            self.nav.descend(ticket.index)
        } else {
            debug!(playlist = %ticket.playlist_id, "navigated away, not opening");
            false
        }
    }

    pub fn catalog_failed(&mut self, what: &str, error: &str) {
        warn!(%error, "{} failed", what);
        self.loading = None;
        self.show_toast(&format!("Couldn't load {}", what));
    }

    pub fn apply_artwork(&mut self, url: String, image: Option<DynamicImage>) {
        // Only the most recent request may land
        if !matches!(&self.artwork, ArtworkState::Loading(u) if *u == url) {
            return;
        }
        self.artwork = match image {
            Some(img) => ArtworkState::Loaded(url, img),
            None => ArtworkState::Failed,
        };
    }

    pub fn show_toast(&mut self, message: &str) {
        let now = Instant::now();
        let duration = std::time::Duration::from_millis(2000); // 2s display time
        let deadline = now + duration;

        if let Some(ref mut current) = self.toast {
            // keep start_time so rapid updates don't restart the entrance
            current.message = message.to_string();
            current.deadline = deadline;
        } else {
            self.toast = Some(Toast {
                message: message.to_string(),
                start_time: now,
                deadline,
            });
        }
    }

    /// Called every tick to update state
    pub fn on_tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        if let Some(ref toast) = self.toast {
            if Instant::now() > toast.deadline {
                self.toast = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::menu::MenuNode;

    fn signed_in_app() -> App {
        let mut app = App::new(&UserConfig::default());
        let effects = app.apply_session(Session {
            access_token: Some("tok".to_string()),
            user_name: Some("Ada Lovelace".to_string()),
            status: AuthStatus::Authenticated,
            generation: 1,
        });
        assert_eq!(
            effects,
            vec![Effect::FetchPlaylists {
                generation: 1,
                token: "tok".to_string(),
                needs_owner: false,
            }]
        );
        app
    }

    #[test]
    fn test_back_from_player_keeps_stack() {
        let mut app = App::new(&UserConfig::default());
        app.dispatch(Action::Scroll(1)); // Music
        app.dispatch(Action::Select);
        app.view_mode = ViewMode::Player;
        let depth = app.navigation().depth();
        let sel = app.navigation().selection();

        app.dispatch(Action::Back);
        assert_eq!(app.view_mode, ViewMode::Menu);
        assert_eq!(app.navigation().depth(), depth);
        assert_eq!(app.navigation().selection(), sel);
    }

    #[test]
    fn test_cover_flow_action_switches_view() {
        let mut app = App::new(&UserConfig::default());
        assert!(app.dispatch(Action::Select).is_empty());
        assert_eq!(app.view_mode, ViewMode::CoverFlow);
        assert_eq!(app.navigation().depth(), 1);
    }

    #[test]
    fn test_sign_in_entry_emits_effect() {
        let mut app = App::new(&UserConfig::default());
        app.dispatch(Action::Scroll(-1)); // Settings
        app.dispatch(Action::Select);
        assert_eq!(
            app.dispatch(Action::Select),
            vec![Effect::SignIn("google".to_string())]
        );
        assert_eq!(app.navigation().depth(), 2);
    }

    #[test]
    fn test_fetch_then_apply_opens_playlist() {
        let mut app = signed_in_app();
        assert!(app.apply_playlists(PlaylistsPayload {
            generation: 1,
            playlists: vec![MenuNode::remote_menu("Mix", "PL1")],
            owner: None,
        }));
        app.dispatch(Action::Scroll(1)); // Music
        app.dispatch(Action::Select);
        app.dispatch(Action::Select); // My Playlists

        let effects = app.dispatch(Action::Select); // Mix
        let Some(Effect::FetchSongs { ticket, token }) = effects.into_iter().next() else {
            panic!("expected a fetch");
        };
        assert_eq!(token, "tok");
        assert_eq!(app.loading.as_deref(), Some("Mix"));

        let songs = vec![MenuNode::song("A", "a", None), MenuNode::song("B", "b", None)];
        assert!(app.apply_songs(ticket, songs));
        assert_eq!(app.snapshot().title, "Mix");
        assert_eq!(app.snapshot().entries.len(), 2);
        assert_eq!(app.loading, None);
    }

    #[test]
    fn test_stale_songs_are_cached_not_opened() {
        let mut app = signed_in_app();
        app.apply_playlists(PlaylistsPayload {
            generation: 1,
            playlists: vec![MenuNode::remote_menu("Mix", "PL1")],
            owner: None,
        });
        app.dispatch(Action::Scroll(1));
        app.dispatch(Action::Select);
        app.dispatch(Action::Select);
        let effects = app.dispatch(Action::Select);
        let Some(Effect::FetchSongs { ticket, .. }) = effects.into_iter().next() else {
            panic!("expected a fetch");
        };

        app.dispatch(Action::Back);
        assert!(!app.apply_songs(ticket, vec![MenuNode::song("A", "a", None)]));
        assert_eq!(app.snapshot().title, "Music");

        // cached: selecting it again descends without a fetch
        app.dispatch(Action::Select);
        assert!(app.dispatch(Action::Select).is_empty());
        assert_eq!(app.snapshot().title, "Mix");
    }

    #[test]
    fn test_songs_from_old_session_dropped() {
        let mut app = signed_in_app();
        let ticket = FetchTicket {
            generation: 0,
            parent_path: vec![1, 0],
            index: 0,
            playlist_id: "PL1".to_string(),
            label: "Mix".to_string(),
        };
        assert!(!app.apply_songs(ticket, Vec::new()));
    }

    #[test]
    fn test_sign_out_resets_tree_and_playback() {
        let mut app = signed_in_app();
        app.apply_playlists(PlaylistsPayload {
            generation: 1,
            playlists: vec![MenuNode::remote_menu("Mix", "PL1")],
            owner: None,
        });
        app.queue = PlaybackQueue::from_listing(&[MenuNode::song("A", "a", None)], 0);
        app.view_mode = ViewMode::Player;
        app.is_playing = true;

        app.apply_session(Session {
            generation: 2,
            ..Session::default()
        });
        assert!(app.queue().is_empty());
        assert!(!app.is_playing);
        assert_eq!(app.view_mode, ViewMode::Menu);
        let music = &app.navigation().root().children()[1];
        assert_eq!(music.children()[0].label, "Playlists");
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_fetch_without_token_only_toasts() {
        let mut app = App::new(&UserConfig::default());
        app.nav = NavigationState::new(signed_in_menu(
            "iPod",
            vec![MenuNode::remote_menu("Mix", "PL1")],
            None,
        ));
        app.dispatch(Action::Scroll(1)); // Music
        app.dispatch(Action::Select);
        app.dispatch(Action::Select); // My Playlists

        assert!(app.dispatch(Action::Select).is_empty());
        assert!(app.toast.is_some());
        assert_eq!(app.loading, None);
        assert_eq!(app.snapshot().title, "My Playlists");
    }

    #[test]
    fn test_owner_lookup_only_without_name() {
        let mut app = App::new(&UserConfig::default());
        let effects = app.apply_session(Session {
            access_token: Some("tok".to_string()),
            user_name: None,
            status: AuthStatus::Authenticated,
            generation: 1,
        });
        assert!(matches!(
            effects.as_slice(),
            [Effect::FetchPlaylists { needs_owner: true, .. }]
        ));
    }

    #[test]
    fn test_resync_while_inside_playlist_allows_refetch() {
        let mut app = signed_in_app();
        app.apply_playlists(PlaylistsPayload {
            generation: 1,
            playlists: vec![MenuNode::remote_menu("Mix", "PL1")],
            owner: None,
        });
        app.dispatch(Action::Scroll(1));
        app.dispatch(Action::Select);
        app.dispatch(Action::Select);
        let effects = app.dispatch(Action::Select);
        let Some(Effect::FetchSongs { ticket, .. }) = effects.into_iter().next() else {
            panic!("expected a fetch");
        };
        let songs = vec![MenuNode::song("A", "a", None), MenuNode::song("B", "b", None)];
        assert!(app.apply_songs(ticket, songs));
        assert_eq!(app.snapshot().title, "Mix");

        // signed in again, the new session's playlists arrive
        app.apply_session(Session {
            access_token: Some("tok2".to_string()),
            user_name: Some("Ada Lovelace".to_string()),
            status: AuthStatus::Authenticated,
            generation: 2,
        });
        assert!(app.apply_playlists(PlaylistsPayload {
            generation: 2,
            playlists: vec![MenuNode::remote_menu("Mix", "PL1")],
            owner: None,
        }));
        assert_eq!(app.snapshot().title, "My Playlists");
        assert_eq!(app.snapshot().entries[app.snapshot().selection].label, "Mix");

        let effects = app.dispatch(Action::Select);
        assert!(matches!(
            effects.as_slice(),
            [Effect::FetchSongs { ticket, token }] if ticket.generation == 2 && token == "tok2"
        ));
    }

    #[test]
    fn test_play_pause_flips_flag() {
        let mut app = App::new(&UserConfig::default());
        assert_eq!(app.dispatch(Action::PlayPause), vec![Effect::SetPlaying(true)]);
        assert_eq!(app.dispatch(Action::PlayPause), vec![Effect::SetPlaying(false)]);
    }

    #[test]
    fn test_wheel_taps_map_to_actions() {
        let mut app = App::new(&UserConfig::default());
        app.on_wheel_event(WheelEvent::CenterTap);
        assert_eq!(app.view_mode, ViewMode::CoverFlow);
        app.on_wheel_event(WheelEvent::Tap(Zone::Menu));
        assert_eq!(app.view_mode, ViewMode::Menu);
        app.on_wheel_event(WheelEvent::Scroll(1));
        assert_eq!(app.navigation().selection(), 1);
    }
}
