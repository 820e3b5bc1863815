use super::settings::StoreSettings;

/// Overlay label shown while the custom text is blank.
pub const PLACEHOLDER_TEXT: &str = "Tên Của Bạn";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Opacity {
    Full,
    Dimmed,
}

impl Opacity {
    pub fn alpha(self) -> f32 {
        match self {
            Opacity::Full => 1.0,
            Opacity::Dimmed => 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn parse_hex(s: &str) -> Option<Rgb> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let mut channels = hex
                    .chars()
                    .map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Rgb(channels.next()??, channels.next()??, channels.next()??))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }

    /// Mix `self` over `background` with the given alpha.
    pub fn blend(self, background: Rgb, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (fg as f32 * alpha + bg as f32 * (1.0 - alpha)).round() as u8;
        Rgb(
            mix(self.0, background.0),
            mix(self.1, background.1),
            mix(self.2, background.2),
        )
    }
}

/// What the overlay currently renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub text: String,
    pub opacity: Opacity,
    pub color: String,
    pub font: String,
}

/// The shopper's text, color and font selections.
#[derive(Debug, Clone, Default)]
pub struct CustomizationState {
    text: String,
    color: Option<usize>,
    font: Option<usize>,
}

impl CustomizationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Make `index` the single active color. Returns false (and changes
    /// nothing) when the index is outside the palette.
    pub fn select_color(&mut self, index: usize, palette_len: usize) -> bool {
        if index >= palette_len {
            return false;
        }
        self.color = Some(index);
        true
    }

    pub fn active_color(&self) -> Option<usize> {
        self.color
    }

    pub fn select_font(&mut self, index: usize, font_count: usize) -> bool {
        if index >= font_count {
            return false;
        }
        self.font = Some(index);
        true
    }

    pub fn active_font(&self) -> Option<usize> {
        self.font
    }

    /// Text as displayed on the overlay, placeholder included.
    pub fn display_text(&self) -> &str {
        if self.is_blank() {
            PLACEHOLDER_TEXT
        } else {
            &self.text
        }
    }

    pub fn opacity(&self) -> Opacity {
        if self.is_blank() {
            Opacity::Dimmed
        } else {
            Opacity::Full
        }
    }

    pub fn color_hex<'a>(&self, settings: &'a StoreSettings) -> &'a str {
        self.color
            .and_then(|i| settings.palette.get(i))
            .map(|c| c.hex.as_str())
            .unwrap_or(settings.fallback_color.as_str())
    }

    pub fn font_family<'a>(&self, settings: &'a StoreSettings) -> &'a str {
        self.font
            .and_then(|i| settings.fonts.get(i))
            .map(String::as_str)
            .unwrap_or(settings.default_font.as_str())
    }

    pub fn preview(&self, settings: &StoreSettings) -> Preview {
        Preview {
            text: self.display_text().to_string(),
            opacity: self.opacity(),
            color: self.color_hex(settings).to_string(),
            font: self.font_family(settings).to_string(),
        }
    }
}
