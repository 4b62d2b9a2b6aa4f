//! Color palettes and ANSI escape sequence generation.
//!
//! Two built-in palettes exist, `light` and `dark`, selected by the persisted
//! dark-mode flag. Colors are hex strings converted to 24-bit ANSI sequences
//! at render time.
//!
//! # Example
//!
//! ```
//! use reelfind::ui::theme::Theme;
//!
//! let theme = Theme::for_mode(true);
//! assert_eq!(theme.name, "dark");
//! let styled = format!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert!(styled.ends_with("\u{1b}[0m"));
//! ```

/// Color scheme used by every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Palette name, `light` or `dark`.
    pub name: &'static str,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as `#rrggbb` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub header_fg: &'static str,
    pub header_bg: Option<&'static str>,

    /// Row under the cursor in the filter panel.
    pub selection_fg: &'static str,
    pub selection_bg: &'static str,

    pub text_normal: &'static str,
    /// Footer, genres, plots.
    pub text_dim: &'static str,

    pub border: &'static str,

    pub search_bar_border: &'static str,
    /// Search box border while the box has focus.
    pub search_bar_focus: &'static str,

    /// Query terms found in movie titles.
    pub match_highlight_fg: &'static str,
    pub match_highlight_bg: &'static str,

    pub empty_state_fg: &'static str,
    /// Answer text and the loading indicator.
    pub accent_fg: &'static str,

    pub error_fg: &'static str,
    pub offline_fg: &'static str,
    pub offline_bg: &'static str,
    pub reconnected_fg: &'static str,
    pub reconnected_bg: &'static str,
}

impl Theme {
    /// Light palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            name: "light",
            colors: ThemeColors {
                header_fg: "#1e66f5",
                header_bg: None,
                selection_fg: "#eff1f5",
                selection_bg: "#1e66f5",
                text_normal: "#4c4f69",
                text_dim: "#8c8fa1",
                border: "#bcc0cc",
                search_bar_border: "#9ca0b0",
                search_bar_focus: "#1e66f5",
                match_highlight_fg: "#eff1f5",
                match_highlight_bg: "#df8e1d",
                empty_state_fg: "#1e66f5",
                accent_fg: "#179299",
                error_fg: "#d20f39",
                offline_fg: "#eff1f5",
                offline_bg: "#d20f39",
                reconnected_fg: "#eff1f5",
                reconnected_bg: "#40a02b",
            },
        }
    }

    /// Dark palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            name: "dark",
            colors: ThemeColors {
                header_fg: "#cdd6f4",
                header_bg: Some("#313244"),
                selection_fg: "#1e1e2e",
                selection_bg: "#f5c2e7",
                text_normal: "#cdd6f4",
                text_dim: "#6c7086",
                border: "#45475a",
                search_bar_border: "#585b70",
                search_bar_focus: "#f5c2e7",
                match_highlight_fg: "#1e1e2e",
                match_highlight_bg: "#f9e2af",
                empty_state_fg: "#89b4fa",
                accent_fg: "#94e2d5",
                error_fg: "#f38ba8",
                offline_fg: "#1e1e2e",
                offline_bg: "#f38ba8",
                reconnected_fg: "#1e1e2e",
                reconnected_bg: "#a6e3a1",
            },
        }
    }

    /// Palette for the dark-mode flag.
    #[must_use]
    pub const fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Converts a hex color to RGB. Returns white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground sequence, `\x1b[38;2;r;g;bm`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence, `\x1b[48;2;r;g;bm`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selects_palette() {
        assert_eq!(Theme::for_mode(false), Theme::light());
        assert_eq!(Theme::for_mode(true), Theme::dark());
        assert_eq!(Theme::default().name, "light");
    }

    #[test]
    fn hex_colors_become_ansi() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }
}
