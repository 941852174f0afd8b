use clickwheel::app::config::{AppConfig, UserConfig};
use clickwheel::app::input_handler::handle_mouse;
use clickwheel::app::queue::PlaybackQueue;
use clickwheel::app::wheel::{ClickWheel, Surface, WheelEvent, Zone};
use clickwheel::app::{Action, App, Effect, MenuNode, ViewMode};
use clickwheel::auth::{AuthStatus, Session};
use clickwheel::catalog::PlaylistsPayload;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Helper to create a test app instance
fn create_test_app() -> App {
    App::new(&UserConfig::default())
}

fn songs() -> Vec<MenuNode> {
    vec![
        MenuNode::song("Alpha", "a", None),
        MenuNode::song("Bravo", "b", None),
        MenuNode::song("Charlie", "c", None),
    ]
}

/// Signed in, playlists loaded, standing inside "Road Trip" with its songs.
fn app_in_playlist() -> App {
    let mut app = create_test_app();
    app.apply_session(Session {
        access_token: Some("tok".to_string()),
        user_name: Some("Ada Lovelace".to_string()),
        status: AuthStatus::Authenticated,
        generation: 1,
    });
    assert!(app.apply_playlists(PlaylistsPayload {
        generation: 1,
        playlists: vec![MenuNode::remote_menu("Road Trip", "PL1")],
        owner: None,
    }));

    // iPod > Music > My Playlists > Road Trip
    app.dispatch(Action::Scroll(1));
    app.dispatch(Action::Select);
    app.dispatch(Action::Select);
    let effects = app.dispatch(Action::Select);
    let ticket = match effects.as_slice() {
        [Effect::FetchSongs { ticket, token }] => {
            assert_eq!(token, "tok");
            ticket.clone()
        }
        other => panic!("expected a song fetch, got {:?}", other),
    };
    assert!(app.apply_songs(ticket, songs()));
    assert_eq!(app.navigation().current().label, "Road Trip");
    app
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_app_initialization() {
    let app = create_test_app();
    assert!(app.is_running);
    assert_eq!(app.view_mode, ViewMode::default());
    assert!(app.queue().is_empty());

    let snapshot = app.snapshot();
    assert_eq!(snapshot.title, "iPod");
    assert_eq!(snapshot.entries.len(), 3);
    assert_eq!(snapshot.selection, 0);
}

#[test]
fn test_scroll_wraps_at_both_ends() {
    let mut app = create_test_app();
    app.dispatch(Action::Scroll(-1));
    assert_eq!(app.navigation().selection(), 2);
    app.dispatch(Action::Scroll(1));
    assert_eq!(app.navigation().selection(), 0);

    for _ in 0..50 {
        app.dispatch(Action::Scroll(1));
        assert!(app.navigation().selection() < 3);
    }
}

#[test]
fn test_back_pops_one_level_and_stops_at_root() {
    let mut app = create_test_app();
    app.dispatch(Action::Scroll(1));
    app.dispatch(Action::Select);
    app.dispatch(Action::Scroll(1));
    assert_eq!(app.navigation().depth(), 2);

    app.dispatch(Action::Back);
    assert_eq!(app.navigation().depth(), 1);
    assert_eq!(app.navigation().selection(), 0);

    app.dispatch(Action::Back);
    assert_eq!(app.navigation().depth(), 1);
    assert_eq!(app.navigation().current().label, "iPod");
}

#[test]
fn test_playing_a_song_builds_queue_from_listing() {
    let mut app = app_in_playlist();
    app.dispatch(Action::Scroll(1));
    let effects = app.dispatch(Action::Select);

    assert_eq!(app.view_mode, ViewMode::Player);
    assert!(app.is_playing);
    assert_eq!(app.queue().len(), 3);
    assert_eq!(app.queue().current_index(), Some(1));
    assert_eq!(effects[0], Effect::Play("b".to_string()));
    assert_eq!(
        effects[1],
        Effect::LoadArtwork("https://img.youtube.com/vi/b/hqdefault.jpg".to_string())
    );
    assert_eq!(app.snapshot().queue_position, Some((2, 3)));
}

#[test]
fn test_back_from_player_keeps_navigation() {
    let mut app = app_in_playlist();
    app.dispatch(Action::Scroll(1));
    app.dispatch(Action::Select);
    let depth = app.navigation().depth();

    app.dispatch(Action::Back);
    assert_eq!(app.view_mode, ViewMode::Menu);
    assert_eq!(app.navigation().depth(), depth);
    assert_eq!(app.navigation().selection(), 1);
}

#[test]
fn test_next_and_prev_wrap_around_queue() {
    let mut app = app_in_playlist();
    app.dispatch(Action::Scroll(-1));
    app.dispatch(Action::Select);
    assert_eq!(app.queue().current_index(), Some(2));

    let effects = app.dispatch(Action::Next);
    assert_eq!(app.queue().current_index(), Some(0));
    assert_eq!(effects[0], Effect::Play("a".to_string()));

    app.dispatch(Action::Prev);
    assert_eq!(app.queue().current_index(), Some(2));
}

#[test]
fn test_playback_end_advances_queue() {
    let mut app = app_in_playlist();
    app.dispatch(Action::Select);
    let effects = app.on_playback_ended();
    assert_eq!(app.queue().current_index(), Some(1));
    assert_eq!(effects[0], Effect::Play("b".to_string()));
}

#[test]
fn test_play_pause_toggles_player() {
    let mut app = app_in_playlist();
    app.dispatch(Action::Select);
    assert_eq!(app.dispatch(Action::PlayPause), vec![Effect::SetPlaying(false)]);
    assert!(!app.is_playing);
    assert_eq!(app.dispatch(Action::PlayPause), vec![Effect::SetPlaying(true)]);
}

#[test]
fn test_queue_ignores_non_song_siblings() {
    let mut listing = songs();
    listing.insert(1, MenuNode::menu("Folder", vec![]));
    let queue = PlaybackQueue::from_listing(&listing, 2);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.current().map(|s| s.label.as_str()), Some("Bravo"));
}

#[test]
fn test_gesture_emits_once_per_threshold() {
    let surface = Surface::new(0.0, 0.0, 260.0, 260.0);
    let at = |deg: f64| {
        let r = 100.0;
        (130.0 + r * deg.to_radians().cos(), 130.0 + r * deg.to_radians().sin())
    };
    let mut wheel = ClickWheel::new();

    let (x, y) = at(0.0);
    wheel.press(x, y, &surface);
    assert_eq!(wheel.drag_to(x, y, &surface), None);
    let (x, y) = at(20.0);
    assert_eq!(wheel.drag_to(x, y, &surface), Some(WheelEvent::Scroll(1)));

    let mut wheel = ClickWheel::new();
    let (x, y) = at(0.0);
    wheel.press(x, y, &surface);
    let mut emitted = Vec::new();
    for deg in [0.0, 10.0, 20.0] {
        let (x, y) = at(deg);
        emitted.extend(wheel.drag_to(x, y, &surface));
    }
    assert_eq!(emitted, vec![WheelEvent::Scroll(1)]);
}

#[test]
fn test_tap_zones_prefer_top_and_bottom() {
    let (w, h) = (260.0, 260.0);
    let surface = Surface::new(0.0, 0.0, w, h);
    assert_eq!(
        ClickWheel::tap(0.1 * w, 0.5 * h, &surface),
        Some(WheelEvent::Tap(Zone::Prev))
    );
    assert_eq!(
        ClickWheel::tap(0.9 * w, 0.1 * h, &surface),
        Some(WheelEvent::Tap(Zone::Menu))
    );
    assert_eq!(ClickWheel::tap(0.5 * w, 0.5 * h, &surface), Some(WheelEvent::CenterTap));
}

#[test]
fn test_mouse_tap_on_menu_leaves_player() {
    let mut app = app_in_playlist();
    app.dispatch(Action::Select);
    assert_eq!(app.view_mode, ViewMode::Player);

    app.wheel_area = Rect::new(0, 0, 40, 20);
    handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 20, 1), &mut app);
    handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 20, 1), &mut app);
    assert_eq!(app.view_mode, ViewMode::Menu);
}

#[test]
fn test_stale_playlists_are_dropped() {
    let mut app = create_test_app();
    app.apply_session(Session {
        access_token: Some("tok".to_string()),
        user_name: None,
        status: AuthStatus::Authenticated,
        generation: 2,
    });
    assert!(!app.apply_playlists(PlaylistsPayload {
        generation: 1,
        playlists: vec![MenuNode::remote_menu("Old", "PL0")],
        owner: None,
    }));
}

#[test]
fn test_config_defaults_survive_generation() {
    let text = AppConfig::generate_default().unwrap();
    let parsed = AppConfig::parse(&text).unwrap();
    assert_eq!(parsed.device_name, "iPod");
    assert_eq!(parsed.player_command, "mpv");
    assert_eq!(parsed.theme, UserConfig::default().theme);
}
