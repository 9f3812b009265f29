use chroma_core::{MostLike, Theme};
use ratatui::style::Color;

fn to_color(c: chroma_core::Color) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Terminal stylesheet derived from one theme.
///
/// The shell keeps an ambient `StyleSheet` for the active theme; preview
/// cards derive their own from the theme they show, so a card is rendered
/// entirely in its subject's styles regardless of the ambient theme.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSheet {
    pub bg: Color,
    pub surface: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub destructive: Color,
    pub text_main: Color,
    pub text_dim: Color,
    pub border: Color,
    pub most_like: MostLike,
}

impl StyleSheet {
    pub fn from_theme(theme: &Theme) -> Self {
        let mut sheet = match theme.most_like {
            MostLike::Dark => Self::dark_scaffold(),
            MostLike::Light => Self::light_scaffold(),
        };
        sheet.most_like = theme.most_like;

        if let Some(palette) = &theme.colors {
            sheet.primary = to_color(palette.primary);
            sheet.secondary = to_color(palette.secondary);
            sheet.accent = to_color(palette.accent);
            sheet.destructive = to_color(palette.destructive);
        }
        sheet
    }

    fn dark_scaffold() -> Self {
        Self {
            bg: Color::Rgb(15, 17, 18),
            surface: Color::Rgb(30, 33, 34),
            primary: Color::Rgb(163, 133, 255),
            secondary: Color::Rgb(30, 33, 34),
            accent: Color::Rgb(109, 255, 216),
            destructive: Color::Rgb(255, 109, 148),
            text_main: Color::Rgb(212, 212, 216),
            text_dim: Color::Rgb(113, 113, 122),
            border: Color::Rgb(40, 40, 45),
            most_like: MostLike::Dark,
        }
    }

    fn light_scaffold() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 248),
            surface: Color::Rgb(233, 233, 236),
            primary: Color::Rgb(53, 116, 240),
            secondary: Color::Rgb(233, 233, 236),
            accent: Color::Rgb(46, 125, 50),
            destructive: Color::Rgb(198, 40, 40),
            text_main: Color::Rgb(24, 24, 27),
            text_dim: Color::Rgb(113, 113, 122),
            border: Color::Rgb(209, 209, 214),
            most_like: MostLike::Light,
        }
    }

    /// Glyph shown next to the app name, matching the theme flavor.
    pub fn flavor_glyph(&self) -> &'static str {
        match self.most_like {
            MostLike::Light => "☀",
            MostLike::Dark => "☾",
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::dark_scaffold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::builtin_themes;

    #[test]
    fn palette_overrides_scaffold() {
        let themes = builtin_themes().unwrap();
        let default = &themes[0];
        let sheet = StyleSheet::from_theme(default);
        let palette = default.colors.as_ref().unwrap();
        assert_eq!(sheet.accent, to_color(palette.accent));
        assert_eq!(sheet.most_like, default.most_like);
    }

    #[test]
    fn light_theme_gets_light_scaffold() {
        let themes = builtin_themes().unwrap();
        let paper = themes.iter().find(|t| t.name == "paper").unwrap();
        let sheet = StyleSheet::from_theme(paper);
        assert_eq!(sheet.most_like, MostLike::Light);
        assert_eq!(sheet.flavor_glyph(), "☀");
    }
}
