use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::state::{Action, App, Effect};
use super::wheel::Surface;

/// Route one terminal event into the controller.
pub fn handle_event(event: &Event, app: &mut App) -> Vec<Effect> {
    match event {
        Event::Key(key) => handle_key(*key, app),
        Event::Mouse(mouse) => handle_mouse(*mouse, app),
        _ => Vec::new(),
    }
}

pub fn handle_key(key: KeyEvent, app: &mut App) -> Vec<Effect> {
    if app.keys.matches(key, &app.keys.quit) {
        app.is_running = false;
        return Vec::new();
    }
    match app.keys.action_for(key) {
        Some(action) => app.dispatch(action),
        None => Vec::new(),
    }
}

/// Mouse on the wheel: press / drag / release drive the gesture interpreter.
/// The mouse wheel scrolls too.
pub fn handle_mouse(mouse: MouseEvent, app: &mut App) -> Vec<Effect> {
    let surface = Surface::from_cells(app.wheel_area, app.cell_aspect);
    let (x, y) = Surface::cell_point(mouse.column, mouse.row, app.cell_aspect);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.wheel.press(x, y, &surface);
            Vec::new()
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if !surface.contains(x, y) {
                app.wheel.cancel();
                return Vec::new();
            }
            match app.wheel.drag_to(x, y, &surface) {
                Some(ev) => app.on_wheel_event(ev),
                None => Vec::new(),
            }
        }
        MouseEventKind::Up(MouseButton::Left) => match app.wheel.release(x, y, &surface) {
            Some(ev) => app.on_wheel_event(ev),
            None => Vec::new(),
        },
        MouseEventKind::ScrollDown => app.dispatch(Action::Scroll(1)),
        MouseEventKind::ScrollUp => app.dispatch(Action::Scroll(-1)),
        _ => Vec::new(),
    }
}
