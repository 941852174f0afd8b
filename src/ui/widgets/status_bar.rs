use crate::app::Snapshot;
use crate::ui::utils::truncate;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Glyph for the playback state, blank when nothing is queued.
pub fn playback_glyph(snapshot: &Snapshot) -> &'static str {
    match (snapshot.now_playing, snapshot.is_playing) {
        (None, _) => " ",
        (Some(_), true) => "▶",
        (Some(_), false) => "❚❚",
    }
}

/// Title bar of the screen: playback glyph, current menu label, battery.
pub fn render(f: &mut Frame, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    let style = Style::default().fg(theme.base).bg(theme.text);

    f.render_widget(Paragraph::new("").style(style), area);

    let side = Line::from(vec![
        Span::raw(" "),
        Span::raw(playback_glyph(snapshot)),
    ]);
    f.render_widget(Paragraph::new(side).style(style), area);

    let title = truncate(snapshot.title, area.width.saturating_sub(10) as usize);
    f.render_widget(
        Paragraph::new(Span::styled(title, style.add_modifier(Modifier::BOLD)))
            .alignment(Alignment::Center),
        area,
    );

    f.render_widget(
        Paragraph::new("▮▮▮▯ ").style(style).alignment(Alignment::Right),
        area,
    );
}
