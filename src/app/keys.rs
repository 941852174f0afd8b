use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use super::state::Action;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub quit: String,

    // Wheel
    pub scroll_up: String,
    pub scroll_up_alt: String,
    pub scroll_down: String,
    pub scroll_down_alt: String,

    // Buttons
    pub select: String,
    pub select_alt: String,
    pub menu: String,
    pub menu_alt: String,
    pub menu_alt2: String,
    pub play_pause: String,
    pub next_track: String,
    pub prev_track: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),

            scroll_up: "k".to_string(),
            scroll_up_alt: "Up".to_string(),
            scroll_down: "j".to_string(),
            scroll_down_alt: "Down".to_string(),

            select: "Enter".to_string(),
            select_alt: "l".to_string(),
            menu: "Esc".to_string(),
            menu_alt: "Backspace".to_string(),
            menu_alt2: "h".to_string(),
            play_pause: "Space".to_string(),
            next_track: "n".to_string(),
            prev_track: "p".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn matches(&self, event: KeyEvent, key_str: &str) -> bool {
        match key_str {
            "Space" => event.code == KeyCode::Char(' '),
            "Enter" => event.code == KeyCode::Enter,
            "Backspace" => event.code == KeyCode::Backspace,
            "Esc" => event.code == KeyCode::Esc,
            "Tab" => event.code == KeyCode::Tab,
            "BackTab" => event.code == KeyCode::BackTab,
            "Up" => event.code == KeyCode::Up,
            "Down" => event.code == KeyCode::Down,
            "Left" => event.code == KeyCode::Left,
            "Right" => event.code == KeyCode::Right,
            s if s.chars().count() == 1 => {
                if let Some(ch) = s.chars().next() {
                    // Check for shift modifier if char is uppercase
                    if ch.is_uppercase() {
                        event.code == KeyCode::Char(ch)
                            || (event.code == KeyCode::Char(ch.to_ascii_lowercase())
                                && event.modifiers.contains(KeyModifiers::SHIFT))
                    } else {
                        event.code == KeyCode::Char(ch)
                    }
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Keyboard stand-ins for the wheel and its buttons.
    pub fn action_for(&self, event: KeyEvent) -> Option<Action> {
        let any = |keys: &[&String]| keys.iter().any(|k| self.matches(event, k));

        if any(&[&self.scroll_up, &self.scroll_up_alt]) {
            Some(Action::Scroll(-1))
        } else if any(&[&self.scroll_down, &self.scroll_down_alt]) {
            Some(Action::Scroll(1))
        } else if any(&[&self.select, &self.select_alt]) {
            Some(Action::Select)
        } else if any(&[&self.menu, &self.menu_alt, &self.menu_alt2]) {
            Some(Action::Back)
        } else if any(&[&self.play_pause]) {
            Some(Action::PlayPause)
        } else if any(&[&self.next_track]) {
            Some(Action::Next)
        } else if any(&[&self.prev_track]) {
            Some(Action::Prev)
        } else {
            None
        }
    }

    // Helper for UI display
    pub fn display(&self, key_str: &str) -> String {
        match key_str {
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "BackTab" => "S-Tab".to_string(),
            "Backspace" => "Bksp".to_string(),
            _ => key_str.to_string(),
        }
    }
}
