use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};

/// One swatch in the fixed color palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorOption {
    pub name: String,
    /// `#rgb` or `#rrggbb`
    pub hex: String,
}

impl ColorOption {
    pub fn new(name: &str, hex: &str) -> Self {
        Self {
            name: name.to_string(),
            hex: hex.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Order intake URL the checkout form posts to
    #[serde(default = "default_order_endpoint")]
    pub order_endpoint: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How long the "added" feedback stays on the add-to-cart button
    #[serde(default = "default_cart_feedback_ms")]
    pub cart_feedback_ms: u64,

    /// Delay between the closing animation and hiding the checkout panel
    #[serde(default = "default_modal_close_ms")]
    pub modal_close_ms: u64,

    /// Color sent with the order when the shopper never picked one
    #[serde(default = "default_fallback_color")]
    pub fallback_color: String,

    #[serde(default = "default_palette")]
    pub palette: Vec<ColorOption>,

    #[serde(default = "default_fonts")]
    pub fonts: Vec<String>,

    #[serde(default = "default_font")]
    pub default_font: String,
}

fn default_order_endpoint() -> String {
    "https://orders.example.com/totecraft/intake".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_cart_feedback_ms() -> u64 {
    2000
}

fn default_modal_close_ms() -> u64 {
    300
}

fn default_fallback_color() -> String {
    "#333".to_string()
}

fn default_palette() -> Vec<ColorOption> {
    vec![
        ColorOption::new("Đen", "#1a1a1a"),
        ColorOption::new("Đỏ", "#d62828"),
        ColorOption::new("Xanh navy", "#1d3557"),
        ColorOption::new("Xanh lá", "#2a9d8f"),
        ColorOption::new("Vàng", "#e9c46a"),
        ColorOption::new("Hồng", "#e07a9b"),
    ]
}

fn default_fonts() -> Vec<String> {
    vec![
        "Helvetica".to_string(),
        "Helvetica Bold".to_string(),
        "Times".to_string(),
        "Times Italic".to_string(),
        "Courier".to_string(),
    ]
}

fn default_font() -> String {
    "Helvetica".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            order_endpoint: default_order_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
            cart_feedback_ms: default_cart_feedback_ms(),
            modal_close_ms: default_modal_close_ms(),
            fallback_color: default_fallback_color(),
            palette: default_palette(),
            fonts: default_fonts(),
            default_font: default_font(),
        }
    }
}

impl StoreSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to load settings from {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                if let Err(e) = default.save_to(path) {
                    log::debug!("Could not write default settings to {}: {}", path.display(), e);
                }
                default
            }
        }
    }

    fn parse(contents: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.order_endpoint.trim().is_empty() {
            return Err(AppError::Settings("order endpoint is empty".to_string()));
        }
        if self.fonts.is_empty() {
            return Err(AppError::Settings("font list is empty".to_string()));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("totecraft");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = StoreSettings::default();
        assert_eq!(settings.cart_feedback_ms, 2000);
        assert_eq!(settings.modal_close_ms, 300);
        assert_eq!(settings.fallback_color, "#333");
        assert_eq!(settings.request_timeout_secs, 30);
        assert!(!settings.palette.is_empty());
        assert!(settings.fonts.contains(&settings.default_font));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        // Simulate an old config that only pins the endpoint
        let json = r#"{"order_endpoint": "http://127.0.0.1:9000/orders"}"#;
        let settings: StoreSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.order_endpoint, "http://127.0.0.1:9000/orders");
        assert_eq!(settings.modal_close_ms, 300); // Should use default
        assert_eq!(settings.fonts, default_fonts());
    }

    #[test]
    fn test_custom_palette_deserialization() {
        let json = r##"{"palette": [{"name": "Trắng", "hex": "#fff"}]}"##;
        let settings: StoreSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.palette, vec![ColorOption::new("Trắng", "#fff")]);
    }

    #[test]
    fn test_validate_rejects_empty_endpoint() {
        let settings = StoreSettings {
            order_endpoint: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(AppError::Settings(_))));
    }

    #[test]
    fn test_load_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = StoreSettings::load_from(&path);
        assert_eq!(settings, StoreSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = StoreSettings {
            cart_feedback_ms: 500,
            default_font: "Courier".to_string(),
            ..Default::default()
        };

        settings.save_to(&path).unwrap();
        assert_eq!(StoreSettings::load_from(&path), settings);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ this is not json").unwrap();

        assert_eq!(StoreSettings::load_from(&path), StoreSettings::default());
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"fonts": []}"#).unwrap();

        assert_eq!(StoreSettings::load_from(&path), StoreSettings::default());
    }
}
