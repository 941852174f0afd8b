use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

const SLIDE_MS: u128 = 300;

/// Horizontal offset of a sliding toast: eases in from the right after
/// `elapsed_ms`, eases back out during the last `SLIDE_MS` before the deadline.
pub fn slide_offset(width: u16, elapsed_ms: u128, remaining_ms: u128) -> u16 {
    let fraction = if elapsed_ms < SLIDE_MS {
        let t = elapsed_ms as f32 / SLIDE_MS as f32;
        (1.0 - t).powi(3)
    } else if remaining_ms < SLIDE_MS {
        let t = (SLIDE_MS - remaining_ms) as f32 / SLIDE_MS as f32;
        t.powi(3)
    } else {
        0.0
    };
    (width as f32 * fraction) as u16
}

pub fn render(f: &mut Frame, app: &App) {
    let Some(toast) = &app.toast else {
        return;
    };
    let theme = &app.theme;
    let screen = f.area();
    let now = Instant::now();

    let width = (toast.message.width() as u16 + 6).min(screen.width.saturating_sub(2));
    let offset = slide_offset(
        width,
        now.duration_since(toast.start_time).as_millis(),
        toast.deadline.saturating_duration_since(now).as_millis(),
    );
    let x = screen.width.saturating_sub(width + 1) + offset;
    if x >= screen.width {
        return;
    }

    let area = Rect::new(x, 1, width, 3).intersection(screen);
    if area.is_empty() {
        return;
    }
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.red));
    let text = Paragraph::new(Span::styled(
        toast.message.as_str(),
        Style::default().fg(theme.red).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(text, area);
}
