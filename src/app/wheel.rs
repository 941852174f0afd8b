use ratatui::layout::Rect;

/// Rotation (in degrees) between two samples needed for one scroll tick.
pub const SCROLL_THRESHOLD_DEG: f64 = 15.0;

/// Center button diameter relative to the wheel diameter.
pub const CENTER_BUTTON_RATIO: f64 = 100.0 / 260.0;

/// Outer ring regions mapped to commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Menu,
    Play,
    Prev,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelEvent {
    /// +1 clockwise, -1 counter-clockwise
    Scroll(i32),
    Tap(Zone),
    CenterTap,
}

/// Bounding box of the wheel in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Surface {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Terminal cells are taller than wide; rows are stretched by `cell_aspect`
    /// so the wheel is round for angle math.
    pub fn from_cells(area: Rect, cell_aspect: f64) -> Self {
        Self {
            left: area.x as f64,
            top: area.y as f64 * cell_aspect,
            width: area.width as f64,
            height: area.height as f64 * cell_aspect,
        }
    }

    /// Center of a terminal cell in surface units.
    pub fn cell_point(column: u16, row: u16, cell_aspect: f64) -> (f64, f64) {
        (column as f64 + 0.5, (row as f64 + 0.5) * cell_aspect)
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.left + self.width && y >= self.top && y < self.top + self.height
    }

    /// Pointer angle around the center, degrees in (-180, 180].
    pub fn angle_of(&self, x: f64, y: f64) -> f64 {
        let (cx, cy) = self.center();
        (y - cy).atan2(x - cx).to_degrees()
    }

    pub fn in_center_button(&self, x: f64, y: f64) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let (cx, cy) = self.center();
        let rx = self.width / 2.0 * CENTER_BUTTON_RATIO;
        let ry = self.height / 2.0 * CENTER_BUTTON_RATIO;
        let nx = (x - cx) / rx;
        let ny = (y - cy) / ry;
        nx * nx + ny * ny <= 1.0
    }

    /// Quadrant under a tap. Top and bottom win over left and right.
    pub fn zone_at(&self, x: f64, y: f64) -> Option<Zone> {
        if self.is_degenerate() {
            return None;
        }
        let rx = x - self.left;
        let ry = y - self.top;

        if ry < self.height * 0.25 {
            Some(Zone::Menu)
        } else if ry > self.height * 0.75 {
            Some(Zone::Play)
        } else if rx < self.width * 0.25 {
            Some(Zone::Prev)
        } else if rx > self.width * 0.75 {
            Some(Zone::Next)
        } else {
            None
        }
    }
}

/// Fold an angle difference into (-180, 180].
pub fn normalize_delta(delta: f64) -> f64 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// Turns raw pointer samples into wheel events 🎡
///
/// The threshold compares against the angle of the last emitted tick, so
/// small jitters accumulate until they add up to a full tick.
#[derive(Debug, Clone, Default)]
pub struct ClickWheel {
    dragging: bool,
    last_angle: Option<f64>,
    scrolled: bool,
    center_pressed: bool,
}

impl ClickWheel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer went down. The center button is a separate target and never
    /// starts a drag.
    pub fn press(&mut self, x: f64, y: f64, surface: &Surface) {
        self.last_angle = None;
        self.scrolled = false;
        if surface.in_center_button(x, y) {
            self.center_pressed = true;
            self.dragging = false;
        } else {
            self.center_pressed = false;
            self.dragging = surface.contains(x, y);
        }
    }

    /// Pointer moved while held.
    pub fn drag_to(&mut self, x: f64, y: f64, surface: &Surface) -> Option<WheelEvent> {
        if !self.dragging || surface.is_degenerate() {
            return None;
        }
        let angle = surface.angle_of(x, y);

        let Some(last) = self.last_angle else {
            self.last_angle = Some(angle);
            return None;
        };

        let delta = normalize_delta(angle - last);
        if delta.abs() > SCROLL_THRESHOLD_DEG {
            self.last_angle = Some(angle);
            self.scrolled = true;
            Some(WheelEvent::Scroll(if delta > 0.0 { 1 } else { -1 }))
        } else {
            None
        }
    }

    /// Pointer went up. A press that never scrolled counts as a tap.
    pub fn release(&mut self, x: f64, y: f64, surface: &Surface) -> Option<WheelEvent> {
        let was_center = std::mem::take(&mut self.center_pressed);
        let was_dragging = std::mem::take(&mut self.dragging);
        let scrolled = std::mem::take(&mut self.scrolled);
        self.last_angle = None;

        if was_center {
            return Some(WheelEvent::CenterTap);
        }
        if was_dragging && !scrolled {
            return Self::tap(x, y, surface);
        }
        None
    }

    /// Pointer left the surface mid-drag.
    pub fn cancel(&mut self) {
        self.dragging = false;
        self.center_pressed = false;
        self.scrolled = false;
        self.last_angle = None;
    }

    /// A discrete click at `(x, y)`.
    pub fn tap(x: f64, y: f64, surface: &Surface) -> Option<WheelEvent> {
        if surface.in_center_button(x, y) {
            return Some(WheelEvent::CenterTap);
        }
        surface.zone_at(x, y).map(WheelEvent::Tap)
    }
}
