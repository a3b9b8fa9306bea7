use iced::theme::Palette;
use iced::{Color, Theme};

/// Named color set for one theme preset, kept as hex text so palettes
/// stay easy to read and tweak in one place.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) red: String,
    pub(crate) green: String,
    pub(crate) yellow: String,
    pub(crate) blue: String,
    pub(crate) dim_black: String,
    pub(crate) dim_blue: String,
    pub(crate) dim_white: String,
    pub(crate) dim_foreground: String,
    pub(crate) overlay: String,
}

impl ColorPalette {
    pub(crate) fn dark() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#161822"),
            red: String::from("#E06C75"),
            green: String::from("#98C379"),
            yellow: String::from("#E5C07B"),
            blue: String::from("#4FA6ED"),
            dim_black: String::from("#0F1115"),
            dim_blue: String::from("#2F638F"),
            dim_white: String::from("#6C7385"),
            dim_foreground: String::from("#6B7280"),
            overlay: String::from("#232530"),
        }
    }

    pub(crate) fn light() -> Self {
        Self {
            foreground: String::from("#2A2E3A"),
            background: String::from("#F4F5F7"),
            red: String::from("#C43E4C"),
            green: String::from("#4E7A32"),
            yellow: String::from("#9C7A1F"),
            blue: String::from("#1E66B8"),
            dim_black: String::from("#E4E6EA"),
            dim_blue: String::from("#7FA7D4"),
            dim_white: String::from("#8B90A0"),
            dim_foreground: String::from("#6D7282"),
            overlay: String::from("#E9EAEE"),
        }
    }
}

/// Parse a `#RRGGBB` string into an iced color.
///
/// Palettes are authored in this crate, so a malformed value is a
/// programming mistake; it falls back to black instead of panicking.
pub(crate) fn parse_hex_color(value: &str) -> Color {
    let digits = match value.strip_prefix('#') {
        Some(digits) if digits.len() == 6 => digits,
        _ => return Color::BLACK,
    };

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).ok()
    };

    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::from_rgb8(r, g, b),
        _ => Color::BLACK,
    }
}

#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) red: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
    pub(crate) blue: Color,
    pub(crate) dim_black: Color,
    pub(crate) dim_blue: Color,
    pub(crate) dim_white: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) overlay: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground),
            background: parse_hex_color(&p.background),
            red: parse_hex_color(&p.red),
            green: parse_hex_color(&p.green),
            yellow: parse_hex_color(&p.yellow),
            blue: parse_hex_color(&p.blue),
            dim_black: parse_hex_color(&p.dim_black),
            dim_blue: parse_hex_color(&p.dim_blue),
            dim_white: parse_hex_color(&p.dim_white),
            dim_foreground: parse_hex_color(&p.dim_foreground),
            overlay: parse_hex_color(&p.overlay),
        }
    }
}

/// Global application theme shared by every widget.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        AppTheme::from_preset(ThemePreset::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.blue,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    /// Build an application theme from a custom palette.
    pub(crate) fn from_palette(id: String, palette: ColorPalette) -> Self {
        let iced_palette = IcedColorPalette::from(&palette);
        Self { id, iced_palette }
    }

    pub(crate) fn from_preset(preset: ThemePreset) -> Self {
        AppTheme::from_palette(String::from(preset.label()), preset.palette())
    }

    pub(crate) fn id(&self) -> &String {
        &self.id
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Built-in theme presets selectable from the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ThemePreset {
    #[default]
    Dark,
    Light,
}

impl ThemePreset {
    pub(crate) fn all() -> [ThemePreset; 2] {
        [ThemePreset::Dark, ThemePreset::Light]
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            ThemePreset::Dark => "Vellum Dark",
            ThemePreset::Light => "Vellum Light",
        }
    }

    /// Stable name persisted in the config store.
    pub(crate) fn storage_name(self) -> &'static str {
        match self {
            ThemePreset::Dark => "dark",
            ThemePreset::Light => "light",
        }
    }

    pub(crate) fn from_storage_name(name: &str) -> Option<Self> {
        ThemePreset::all()
            .into_iter()
            .find(|preset| preset.storage_name() == name)
    }

    fn palette(self) -> ColorPalette {
        match self {
            ThemePreset::Dark => ColorPalette::dark(),
            ThemePreset::Light => ColorPalette::light(),
        }
    }
}

/// Manages the current global theme and preset switching.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme::default(),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    pub(crate) fn apply_preset(&mut self, preset: ThemePreset) {
        self.current = AppTheme::from_preset(preset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_hex_string_when_parsing_then_channels_match() {
        let color = parse_hex_color("#4FA6ED");

        assert_eq!(color, Color::from_rgb8(0x4F, 0xA6, 0xED));
    }

    #[test]
    fn given_malformed_hex_when_parsing_then_falls_back_to_black() {
        assert_eq!(parse_hex_color("4FA6ED"), Color::BLACK);
        assert_eq!(parse_hex_color("#4FA6"), Color::BLACK);
        assert_eq!(parse_hex_color("#GGGGGG"), Color::BLACK);
    }

    #[test]
    fn given_preset_when_round_tripping_storage_name_then_same_preset() {
        for preset in ThemePreset::all() {
            let name = preset.storage_name();

            assert_eq!(ThemePreset::from_storage_name(name), Some(preset));
        }
    }

    #[test]
    fn given_unknown_storage_name_when_resolving_then_none() {
        assert_eq!(ThemePreset::from_storage_name("solarized"), None);
    }

    #[test]
    fn given_preset_when_applied_then_manager_switches_theme() {
        let mut manager = ThemeManager::new();
        assert_eq!(manager.current().id(), ThemePreset::Dark.label());

        manager.apply_preset(ThemePreset::Light);

        assert_eq!(manager.current().id(), ThemePreset::Light.label());
    }
}
