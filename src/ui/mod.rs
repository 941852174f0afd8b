pub mod layout;
pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;

use crate::app::keys::KeyConfig;
use crate::app::{App, ViewMode};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

/// Key hints for the footer, following the configured bindings.
pub fn footer_hints(keys: &KeyConfig) -> Vec<(String, &'static str)> {
    vec![
        (format!("{}/{}", keys.display(&keys.scroll_up), keys.display(&keys.scroll_down)), "scroll"),
        (keys.display(&keys.select), "select"),
        (keys.display(&keys.menu), "menu"),
        (keys.display(&keys.play_pause), "play"),
        (format!("{}/{}", keys.display(&keys.prev_track), keys.display(&keys.next_track)), "skip"),
        (keys.display(&keys.quit), "quit"),
    ]
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // 1. Layout
    let main_layout = layout::get_main_layout(area, app.cell_aspect);

    // 2. Wheel first, it records its own hit-test rect
    widgets::wheel::render(f, main_layout.wheel_area, app);

    let app = &*app;
    let theme = &app.theme;
    let snapshot = app.snapshot();

    // 3. Screen bezel + status bar + active view
    let bezel = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay));
    let screen = bezel.inner(main_layout.screen_area);
    f.render_widget(bezel, main_layout.screen_area);

    let screen_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(screen);

    widgets::status_bar::render(f, screen_chunks[0], &snapshot, theme);
    match snapshot.view {
        ViewMode::Menu => widgets::menu::render(f, screen_chunks[1], app, &snapshot),
        ViewMode::Player => widgets::player::render(f, screen_chunks[1], app, &snapshot),
        ViewMode::CoverFlow => widgets::cover_flow::render(f, screen_chunks[1], app, &snapshot),
    }

    // 4. Footer hint
    let mut spans = Vec::new();
    for (key, label) in footer_hints(&app.keys) {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(theme.overlay).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(label, Style::default().fg(theme.overlay)));
    }
    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    f.render_widget(footer, main_layout.footer_area);

    // 5. Overlays
    widgets::toast::render(f, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::UserConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_footer_hints_follow_bindings() {
        let hints = footer_hints(&KeyConfig::default());
        assert_eq!(hints[0].0, "k/j");
        assert_eq!(hints.last().map(|h| h.1), Some("quit"));
    }

    #[test]
    fn test_draw_records_wheel_area() {
        let mut app = App::new(&UserConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        terminal.draw(|f| ui(f, &mut app)).unwrap();

        assert!(!app.wheel_area.is_empty());
        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Music"));
        assert!(text.contains("MENU"));
    }

    #[test]
    fn test_menu_panel_shows_account() {
        let mut app = App::new(&UserConfig::default());
        app.apply_session(crate::auth::Session {
            access_token: Some("tok".to_string()),
            user_name: Some("Ada Lovelace".to_string()),
            status: crate::auth::AuthStatus::Authenticated,
            generation: 1,
        });
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        terminal.draw(|f| ui(f, &mut app)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Ada Lovelace"));
    }
}
