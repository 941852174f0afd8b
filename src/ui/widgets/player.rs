use crate::app::{App, ArtworkState, Snapshot};
use crate::artwork::ArtworkRenderer;
use crate::ui::layout::square_in;
use crate::ui::utils::truncate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const SOURCE_CAPTION: &str = "YouTube Music";

/// Frames per knob step of the activity bar.
const PULSE_STEP: u64 = 4;

/// Column of the activity knob: sweeps back and forth while playing,
/// parked at the start when paused.
pub fn pulse_position(frame: u64, width: usize, playing: bool) -> usize {
    if !playing || width < 2 {
        return 0;
    }
    let span = (width - 1) as u64;
    let step = (frame / PULSE_STEP) % (span * 2);
    if step <= span {
        step as usize
    } else {
        (span * 2 - step) as usize
    }
}

/// Now Playing screen 🎵
pub fn render(f: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot) {
    let theme = &app.theme;
    let Some(song) = snapshot.now_playing else {
        let p = Paragraph::new("\nNothing playing")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.overlay));
        f.render_widget(p, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_art(f, square_in(chunks[0], app.cell_aspect), app);

    let info = chunks[1];
    let width = info.width.saturating_sub(2) as usize;

    let bar_width = width.min(24);
    let knob = pulse_position(app.frame, bar_width, snapshot.is_playing);
    let bar: Vec<Span> = (0..bar_width)
        .map(|i| {
            if i == knob {
                Span::styled("●", Style::default().fg(theme.highlight))
            } else if i < knob {
                Span::styled("━", Style::default().fg(theme.highlight))
            } else {
                Span::styled("─", Style::default().fg(theme.surface))
            }
        })
        .collect();

    let position = snapshot
        .queue_position
        .map(|(n, m)| format!("{} of {}", n, m))
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(
            truncate(&song.label, width),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SOURCE_CAPTION, Style::default().fg(theme.overlay))),
        Line::default(),
        Line::from(bar),
        Line::from(Span::styled(position, Style::default().fg(theme.overlay))),
    ];

    let top = info.height.saturating_sub(lines.len() as u16) / 2;
    let text_area = Rect::new(info.x + 1, info.y + top, info.width.saturating_sub(1), info.height - top);
    f.render_widget(Paragraph::new(lines), text_area);
}

fn render_art(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    match &app.artwork {
        ArtworkState::Loaded(_, img) => {
            let lines = ArtworkRenderer::render_half_blocks(img, area.width, area.height);
            f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        }
        ArtworkState::Loading(_) => {
            let p = Paragraph::new("\nLoading...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.yellow));
            f.render_widget(p, area);
        }
        ArtworkState::Idle | ArtworkState::Failed => {
            let p = Paragraph::new("\n♪")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.overlay).bg(theme.surface));
            f.render_widget(p, area);
        }
    }
}
