//! Per-node visual parameters
//!
//! Everything here is a pure function of a node's role, its depth in the
//! rendered subtree, and the active theme.

use std::fmt;

use crate::config::UiPreferences;
use crate::org::node::Role;

/// Node widths for depth 0, 1 and 2
const WIDTHS: [f32; 3] = [200.0, 170.0, 140.0];
/// Width for depth >= 3
pub const MIN_NODE_WIDTH: f32 = 120.0;
pub const NODE_HEIGHT: f32 = 64.0;
pub const AVATAR_RADIUS: f32 = 14.0;

/// Labels at or above this brightness get dark text
pub const BRIGHTNESS_THRESHOLD: u32 = 128;

pub const DARK_TEXT: Rgb = Rgb::new(0x00, 0x00, 0x00);
pub const LIGHT_TEXT: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness on a 0-255 scale, in thousandths.
    ///
    /// Integer weights keep the threshold comparison exact.
    pub fn brightness_milli(self) -> u32 {
        299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)
    }

    /// Perceived brightness on a 0-255 scale
    pub fn brightness(self) -> f64 {
        f64::from(self.brightness_milli()) / 1000.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Colors that vary with the light/dark preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    /// Fill for roles without a dedicated color
    pub surface: Rgb,
    pub connector: Rgb,
    pub border: Rgb,
}

impl Theme {
    pub const fn light() -> Self {
        Self {
            background: Rgb::new(0xFF, 0xFF, 0xFF),
            surface: Rgb::new(0xF5, 0xF5, 0xF5),
            connector: Rgb::new(0x9E, 0x9E, 0x9E),
            border: Rgb::new(0xE0, 0xE0, 0xE0),
        }
    }

    pub const fn dark() -> Self {
        Self {
            background: Rgb::new(0x12, 0x12, 0x12),
            surface: Rgb::new(0x2C, 0x2C, 0x2E),
            connector: Rgb::new(0x75, 0x75, 0x75),
            border: Rgb::new(0x3A, 0x3A, 0x3C),
        }
    }

    pub fn from_preferences(prefs: &UiPreferences) -> Self {
        if prefs.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Node width at `depth`; non-increasing, clamped at depth 3
pub fn node_width(depth: usize) -> f32 {
    WIDTHS.get(depth).copied().unwrap_or(MIN_NODE_WIDTH)
}

/// Fill color for a role
pub fn role_fill(role: &Role, theme: &Theme) -> Rgb {
    match role {
        Role::BusinessManager => Rgb::new(0x3F, 0x51, 0xB5),
        Role::Administrator => Rgb::new(0x00, 0x96, 0x88),
        Role::Building | Role::Residential => Rgb::new(0x4C, 0xAF, 0x50),
        Role::Commercial => Rgb::new(0xFF, 0x98, 0x00),
        Role::BuildingType => Rgb::new(0x60, 0x7D, 0x8B),
        Role::Units => Rgb::new(0x21, 0x96, 0xF3),
        Role::Residents => Rgb::new(0x9C, 0x27, 0xB0),
        Role::Other(_) => theme.surface,
    }
}

/// Label color that stays legible on `fill`
pub fn label_color(fill: Rgb) -> Rgb {
    if fill.brightness_milli() >= BRIGHTNESS_THRESHOLD * 1000 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Two-letter avatar text for nodes without an image
pub fn monogram(name: &str) -> String {
    let mut words = name.split_whitespace();
    let initials: String = match (words.next(), words.next()) {
        (Some(first), Some(second)) => first.chars().take(1).chain(second.chars().take(1)).collect(),
        (Some(only), None) => only.chars().take(2).collect(),
        _ => return "?".to_string(),
    };
    initials.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_display() {
        assert_eq!(Rgb::new(0x4C, 0xAF, 0x50).to_string(), "#4CAF50");
        assert_eq!(Rgb::new(0x0A, 0x00, 0xFF).to_string(), "#0A00FF");
    }

    #[test]
    fn test_label_color_contrast() {
        let green = Rgb::new(0x4C, 0xAF, 0x50);
        assert!(green.brightness() >= 128.0);
        assert_eq!(label_color(green), DARK_TEXT);

        let purple = Rgb::new(0x9C, 0x27, 0xB0);
        assert!(purple.brightness() < 128.0);
        assert_eq!(label_color(purple), LIGHT_TEXT);
        assert_eq!(label_color(purple).to_string(), "#FFFFFF");
    }

    #[test]
    fn test_label_color_threshold_is_inclusive() {
        // The weights sum to 1, so a grey's brightness is its channel value.
        assert_eq!(label_color(Rgb::new(128, 128, 128)), DARK_TEXT);
        assert_eq!(label_color(Rgb::new(127, 127, 127)), LIGHT_TEXT);
    }

    #[test]
    fn test_width_monotonic_and_clamped() {
        for d in 0..3 {
            assert!(node_width(d + 1) <= node_width(d));
        }
        assert_eq!(node_width(3), MIN_NODE_WIDTH);
        assert_eq!(node_width(10), MIN_NODE_WIDTH);
        assert!(node_width(0) > node_width(3));
    }

    #[test]
    fn test_role_fill() {
        let theme = Theme::light();
        assert_eq!(role_fill(&Role::Residential, &theme), role_fill(&Role::Building, &theme));
        assert_eq!(role_fill(&Role::Commercial, &theme).to_string(), "#FF9800");
        assert_eq!(role_fill(&Role::Other("Janitor".into()), &theme), theme.surface);
        assert_eq!(
            role_fill(&Role::Other("Janitor".into()), &Theme::dark()),
            Theme::dark().surface
        );
        assert_eq!(label_color(Theme::light().surface), DARK_TEXT);
        assert_eq!(label_color(Theme::dark().surface), LIGHT_TEXT);
    }

    #[test]
    fn test_monogram() {
        assert_eq!(monogram("Jane Cooper"), "JC");
        assert_eq!(monogram("besa hoxha lala"), "BH");
        assert_eq!(monogram("Sunset"), "SU");
        assert_eq!(monogram("  "), "?");
        assert_eq!(monogram("Ë"), "Ë");
    }
}
