use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Persisted display mode preference.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Return the opposite mode.
    ///
    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Return the label of the button that switches away from this mode.
    ///
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark Mode",
            ThemeMode::Dark => "Light Mode",
        }
    }
}

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification in RGB components.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::for_mode(ThemeMode::default())
    }
}

impl Theme {
    /// Return the palette used for the given display mode.
    ///
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Light palette (Rose Pine Dawn).
    ///
    pub fn light() -> Self {
        Theme {
            name: "light".to_string(),
            primary: ColorSpec::rgb(144, 122, 169),     // Iris
            accent: ColorSpec::rgb(215, 130, 126),      // Rose
            banner: ColorSpec::rgb(180, 99, 122),       // Love
            text: ColorSpec::rgb(87, 82, 121),          // Text
            text_muted: ColorSpec::rgb(152, 147, 165),  // Muted
            background: ColorSpec::rgb(250, 244, 237),  // Base
            surface: ColorSpec::rgb(255, 250, 243),     // Surface
            success: ColorSpec::rgb(40, 105, 131),      // Pine
            warning: ColorSpec::rgb(234, 157, 52),      // Gold
            error: ColorSpec::rgb(180, 99, 122),        // Love
            border_active: ColorSpec::rgb(144, 122, 169),
            border_normal: ColorSpec::rgb(223, 218, 217),
            highlight_bg: ColorSpec::rgb(242, 233, 225),
            highlight_fg: ColorSpec::rgb(87, 82, 121),
        }
    }

    /// Dark palette (Tokyo Night).
    ///
    pub fn dark() -> Self {
        Theme {
            name: "dark".to_string(),
            primary: ColorSpec::rgb(122, 162, 247),    // Blue
            accent: ColorSpec::rgb(187, 154, 247),     // Magenta
            banner: ColorSpec::rgb(247, 118, 142),     // Red
            text: ColorSpec::rgb(192, 202, 245),       // Foreground
            text_muted: ColorSpec::rgb(86, 95, 137),   // Comment
            background: ColorSpec::rgb(26, 27, 38),    // Background
            surface: ColorSpec::rgb(36, 40, 59),       // Surface
            success: ColorSpec::rgb(158, 206, 106),    // Green
            warning: ColorSpec::rgb(224, 175, 104),    // Yellow
            error: ColorSpec::rgb(247, 118, 142),      // Red
            border_active: ColorSpec::rgb(122, 162, 247),
            border_normal: ColorSpec::rgb(59, 66, 97),
            highlight_bg: ColorSpec::rgb(41, 46, 66),
            highlight_fg: ColorSpec::rgb(192, 202, 245),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn palette_follows_mode() {
        assert_eq!(Theme::for_mode(ThemeMode::Dark).name, "dark");
        assert_eq!(Theme::default().name, "light");
        assert_ne!(Theme::light().background, Theme::dark().background);
    }
}
