use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub screen_area: Rect,
    pub wheel_area: Rect,
    pub footer_area: Rect,
}

/// Screen on top, wheel below, one hint line at the bottom.
/// Short and wide terminals put the wheel to the right instead.
pub fn get_main_layout(area: Rect, cell_aspect: f64) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);
    let body = chunks[0];

    let side_by_side = body.height < 24 && f64::from(body.width) >= f64::from(body.height) * cell_aspect * 2.0;

    let (screen_area, wheel_slot) = if side_by_side {
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(body);
        (parts[0], parts[1])
    } else {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(body);
        (parts[0], parts[1])
    };

    MainLayout {
        screen_area,
        wheel_area: square_in(wheel_slot, cell_aspect),
        footer_area: chunks[1],
    }
}

/// Largest centered rect inside `area` that looks square on screen.
pub fn square_in(area: Rect, cell_aspect: f64) -> Rect {
    if area.is_empty() || cell_aspect <= 0.0 {
        return Rect::new(area.x, area.y, 0, 0);
    }
    let max_h_from_width = (f64::from(area.width) / cell_aspect).floor() as u16;
    let height = area.height.min(max_h_from_width);
    let width = ((f64::from(height) * cell_aspect).round() as u16).min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_in_respects_cell_aspect() {
        let r = square_in(Rect::new(0, 0, 80, 20), 2.0);
        assert_eq!((r.width, r.height), (40, 20));
        assert_eq!(r.x, 20);

        let r = square_in(Rect::new(0, 0, 20, 40), 2.0);
        assert_eq!((r.width, r.height), (20, 10));
        assert_eq!(r.y, 15);
    }

    #[test]
    fn test_wheel_sits_inside_body() {
        let layout = get_main_layout(Rect::new(0, 0, 60, 50), 2.0);
        assert_eq!(layout.footer_area.y, 49);
        assert!(layout.wheel_area.y >= layout.screen_area.bottom());
        assert!(!layout.wheel_area.is_empty());
    }
}
