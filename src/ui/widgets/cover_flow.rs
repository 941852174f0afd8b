use crate::app::{App, ArtworkState, Snapshot};
use crate::artwork::ArtworkRenderer;
use crate::ui::utils::truncate;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Cards shown on each side of the selected one.
const SIDE_CARDS: i32 = 2;

/// Entries around `selection` as (index, offset from center), left to right.
pub fn visible_cards(len: usize, selection: usize, side: i32) -> Vec<(usize, i32)> {
    (-side..=side)
        .filter_map(|offset| {
            let index = selection as i64 + offset as i64;
            (index >= 0 && (index as usize) < len).then_some((index as usize, offset))
        })
        .collect()
}

/// Carousel of the current listing centered on the selection.
pub fn render(f: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot) {
    let theme = &app.theme;
    if snapshot.entries.is_empty() || area.width < 10 || area.height < 4 {
        let p = Paragraph::new("\nNo covers")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.overlay));
        f.render_widget(p, area);
        return;
    }

    let center_w = (area.width / 3).max(8);
    let side_w = (area.width.saturating_sub(center_w) / (SIDE_CARDS as u16 * 2)).max(1);
    let center_x = area.x + (area.width - center_w) / 2;

    for (index, offset) in visible_cards(snapshot.entries.len(), snapshot.selection, SIDE_CARDS) {
        let entry = &snapshot.entries[index];
        let (x, width, height) = if offset == 0 {
            (center_x, center_w, area.height.saturating_sub(1))
        } else if offset < 0 {
            let x = center_x.saturating_sub(side_w * offset.unsigned_abs() as u16);
            (x.max(area.x), side_w, area.height.saturating_sub(3))
        } else {
            let x = center_x + center_w + side_w * (offset as u16 - 1);
            (x, side_w, area.height.saturating_sub(3))
        };
        let card = Rect::new(x, area.y + (area.height - height) / 2, width, height)
            .intersection(area);
        if card.is_empty() {
            continue;
        }

        let focused = offset == 0;
        let border = if focused { theme.highlight } else { theme.surface };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(card);
        f.render_widget(block, card);

        // Only the now-playing item has fetched artwork
        let is_playing_item = snapshot
            .now_playing
            .is_some_and(|song| song.external_id.is_some() && song.external_id == entry.external_id);
        if let (true, ArtworkState::Loaded(_, img)) = (is_playing_item, &app.artwork) {
            let lines = ArtworkRenderer::render_half_blocks(img, inner.width, inner.height);
            f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
            continue;
        }

        let style = if focused {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.overlay)
        };
        let label = truncate(&entry.label, inner.width as usize * inner.height as usize);
        let p = Paragraph::new(label)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(style);
        f.render_widget(p, inner);
    }
}
