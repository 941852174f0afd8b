use crate::app::wheel::CENTER_BUTTON_RATIO;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::canvas::{Canvas, Circle},
    Frame,
};

/// Draws the click wheel into `area` (already square on screen) and records
/// it as the hit-test surface.
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    app.wheel_area = area;
    if area.width < 4 || area.height < 2 {
        return;
    }

    let theme = &app.theme;
    let ring = if app.wheel.is_dragging() { theme.highlight } else { theme.overlay };
    let label = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let disc = theme.surface;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 0.98,
                color: ring,
            });
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: CENTER_BUTTON_RATIO,
                color: disc,
            });
            ctx.print(-0.15, 0.7, Span::styled("MENU", label));
            ctx.print(-0.8, 0.0, Span::styled("⏮", label));
            ctx.print(0.72, 0.0, Span::styled("⏭", label));
            ctx.print(-0.1, -0.72, Span::styled("▶❚❚", label));
        });
    f.render_widget(canvas, area);
}
