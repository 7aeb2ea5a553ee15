//src/theme.rs
use serde::{Deserialize, Serialize};

/// The app's color palette. Stored as a single object, not a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: String,
    pub background: String,
    pub card: String,
    pub text: String,
    pub border: String,
    pub notification: String,
}

impl Default for Theme {
    fn default() -> Self {
        let [name, primary, background, card, text, border, notification] = BUILTIN_THEMES[0];
        Self::from_palette(name, primary, background, card, text, border, notification)
    }
}

// name, primary, background, card, text, border, notification
const BUILTIN_THEMES: [[&str; 7]; 9] = [
    ["Dark", "#4CAF50", "#0a0a0a", "#1a1a1a", "#ffffff", "#333333", "#ff3b30"],
    ["Phub", "#f37c23", "#0a0a0a", "#181818", "#ffffff", "#333333", "#ff3b30"],
    ["Light", "#4CAF50", "#f5f5f5", "#ffffff", "#1a1b26", "#e0e0e0", "#ff3b30"],
    ["Ocean", "#2196F3", "#0a1929", "#132f4c", "#e6f4ff", "#1e4976", "#ff3b30"],
    ["Sunset", "#FF6B35", "#1a0f0a", "#2d1b16", "#fff5f0", "#4a2c1a", "#ff3b30"],
    ["Forest", "#8BC34A", "#0d1b0d", "#1a2e1a", "#f0fff0", "#2d4a2d", "#ff3b30"],
    ["Purple", "#9C27B0", "#1a0d1a", "#2e1a2e", "#f5f0f5", "#4a2d4a", "#ff3b30"],
    ["Cyberpunk", "#00FFFF", "#0a0a0f", "#1a1a2e", "#00ff41", "#16213e", "#ff0080"],
    ["Minimal", "#666666", "#fafafa", "#ffffff", "#2c2c2c", "#eeeeee", "#ff3b30"],
];

impl Theme {
    fn from_palette(
        name: &str,
        primary: &str,
        background: &str,
        card: &str,
        text: &str,
        border: &str,
        notification: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            primary: primary.to_string(),
            background: background.to_string(),
            card: card.to_string(),
            text: text.to_string(),
            border: border.to_string(),
            notification: notification.to_string(),
        }
    }
}

#[must_use]
pub fn builtin_themes() -> Vec<Theme> {
    BUILTIN_THEMES
        .iter()
        .map(|[name, primary, background, card, text, border, notification]| {
            Theme::from_palette(name, primary, background, card, text, border, notification)
        })
        .collect()
}

/// Looks a preset up by name, ignoring case.
#[must_use]
pub fn find_builtin_theme(name: &str) -> Option<Theme> {
    builtin_themes()
        .into_iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name.trim()))
}
