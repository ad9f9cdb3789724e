use std::fs;
use std::path::{Path, PathBuf};

use engine_logging::{engine_error, engine_warn};
use logo_engine::HarvestConfig;
use serde::{Deserialize, Serialize};

const SETTINGS_FILENAME: &str = "logo_harvester.ron";

/// Persisted shell settings. The page URL, sub-folder name, and URL markers
/// live here rather than in source, so pointing the harvester at another
/// wiki is a settings edit, not a rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub page_url: String,
    pub subfolder: String,
    pub asset_path_marker: String,
    pub revision_marker: String,
    pub min_image_bytes: u64,
    pub destination: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_url: "https://truck-simulator.fandom.com/wiki/Euro_Truck_Simulator_2_Companies"
                .to_string(),
            subfolder: "Downloaded_Company_Logos".to_string(),
            asset_path_marker: "/images/".to_string(),
            revision_marker: "/revision/".to_string(),
            min_image_bytes: 5000,
            destination: None,
        }
    }
}

impl Settings {
    pub fn load_or_default() -> Self {
        Self::load_from(Path::new(SETTINGS_FILENAME))
    }

    fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(err) => {
                engine_warn!("Failed to read settings from {:?}: {}", path, err);
                return Self::default();
            }
        };

        match ron::from_str(&content) {
            Ok(settings) => settings,
            Err(err) => {
                engine_warn!("Failed to parse settings from {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        self.save_to(Path::new(SETTINGS_FILENAME));
    }

    fn save_to(&self, path: &Path) {
        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(self, pretty) {
            Ok(text) => text,
            Err(err) => {
                engine_error!("Failed to serialize settings: {}", err);
                return;
            }
        };
        if let Err(err) = fs::write(path, content) {
            engine_error!("Failed to write settings to {:?}: {}", path, err);
        }
    }

    /// Session config for one run: shell settings plus the chosen folder.
    pub fn harvest_config(&self, page_url: String, destination: PathBuf) -> HarvestConfig {
        HarvestConfig {
            page_url,
            destination,
            subfolder: self.subfolder.clone(),
            asset_path_marker: self.asset_path_marker.clone(),
            revision_marker: self.revision_marker.clone(),
            min_image_bytes: self.min_image_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn settings_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.ron");

        let mut settings = Settings::default();
        settings.destination = Some("/tmp/logos".to_string());
        settings.min_image_bytes = 1234;
        settings.save_to(&path);

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let loaded = Settings::load_from(&temp.path().join("absent.ron"));
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.ron");
        fs::write(&path, "not ron at all {{{{").unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn harvest_config_carries_overrides() {
        let settings = Settings {
            subfolder: "Logos".to_string(),
            min_image_bytes: 64,
            ..Settings::default()
        };

        let config = settings.harvest_config(
            "https://wiki.example/wiki/Companies".to_string(),
            PathBuf::from("/tmp/out"),
        );
        assert_eq!(config.subfolder, "Logos");
        assert_eq!(config.min_image_bytes, 64);
        assert_eq!(config.destination, PathBuf::from("/tmp/out"));
    }
}
