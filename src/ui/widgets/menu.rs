use crate::app::{App, ArtworkState, MenuKind, MenuNode, Snapshot};
use crate::artwork::ArtworkRenderer;
use crate::ui::utils::truncate;
use unicode_width::UnicodeWidthStr;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// One list row: label on the left, `>` on entries that open a submenu.
pub fn entry_line(entry: &MenuNode, width: usize) -> String {
    let marker = if entry.kind == MenuKind::Menu { " >" } else { "" };
    let label = truncate(&entry.label, width.saturating_sub(marker.len() + 1));
    let pad = width.saturating_sub(label.width() + marker.len());
    format!("{}{}{}", label, " ".repeat(pad), marker)
}

pub fn render(f: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_list(f, chunks[0], app, snapshot);
    render_panel(f, chunks[1], app, snapshot);
}

fn render_list(f: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot) {
    let theme = &app.theme;

    if snapshot.entries.is_empty() {
        let p = Paragraph::new("\n  (empty)").style(Style::default().fg(theme.overlay));
        f.render_widget(p, area);
        return;
    }

    let width = area.width as usize;
    let items: Vec<ListItem> = snapshot
        .entries
        .iter()
        .map(|entry| ListItem::new(entry_line(entry, width)))
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(theme.text))
        .highlight_style(
            Style::default()
                .fg(theme.base)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(Some(snapshot.selection));
    f.render_stateful_widget(list, area, &mut state);
}

/// Right half: now-playing artwork if any, otherwise the device badge.
fn render_panel(f: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(theme.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if let (Some(_), ArtworkState::Loaded(_, img)) = (snapshot.now_playing, &app.artwork) {
        let lines = ArtworkRenderer::render_half_blocks(img, inner.width, inner.height);
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        return;
    }

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled("♪", Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(app.device_name.as_str(), Style::default().fg(theme.overlay))),
    ];
    if let Some(name) = snapshot.user_name {
        lines.push(Line::from(Span::styled(
            truncate(name, inner.width as usize),
            Style::default().fg(theme.green),
        )));
    }
    if let Some(label) = snapshot.loading {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            truncate(&format!("Loading {}...", label), inner.width as usize),
            Style::default().fg(theme.yellow),
        )));
    }
    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let centered = Rect::new(inner.x, inner.y + top, inner.width, inner.height - top);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}
