//! Visualizer settings
//!
//! Read from an optional JSON block embedded in the page; every field falls
//! back to its default when missing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::engine::AlgorithmKind;

/// Settings could not be parsed
#[derive(Debug)]
pub enum SettingsError {
    Json(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid settings JSON: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Playback settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Elements for the O(n log n) sorts and the shuffle
    pub sample_size: usize,
    /// Elements for the O(n²) sorts
    pub quadratic_sample_size: usize,
    /// Target animation rate; one algorithm step per frame
    pub frames_per_second: f64,
    /// Fixed shuffle seed; time-based when absent
    pub seed: Option<u32>,
    /// Pause after each algorithm until the next click
    pub pause_between: bool,
    /// Algorithms in play order
    pub playlist: Vec<AlgorithmKind>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            quadratic_sample_size: DEFAULT_SAMPLE_SIZE / QUADRATIC_SAMPLE_DIVISOR,
            frames_per_second: DEFAULT_FPS,
            seed: None,
            pause_between: false,
            playlist: AlgorithmKind::ALL.to_vec(),
        }
    }
}

impl Settings {
    /// Parse settings and clamp them to supported ranges
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    /// Clamp out-of-range values, logging each correction
    pub fn validated(mut self) -> Self {
        let sample_size = self.sample_size.clamp(1, MAX_SAMPLE_SIZE);
        if sample_size != self.sample_size {
            log::warn!(
                "sample_size {} out of range, using {}",
                self.sample_size,
                sample_size
            );
            self.sample_size = sample_size;
        }

        let quadratic = self.quadratic_sample_size.clamp(1, self.sample_size);
        if quadratic != self.quadratic_sample_size {
            log::warn!(
                "quadratic_sample_size {} out of range, using {}",
                self.quadratic_sample_size,
                quadratic
            );
            self.quadratic_sample_size = quadratic;
        }

        if !self.frames_per_second.is_finite() {
            log::warn!("frames_per_second is not finite, using {}", DEFAULT_FPS);
            self.frames_per_second = DEFAULT_FPS;
        }
        let fps = self.frames_per_second.clamp(MIN_FPS, MAX_FPS);
        if fps != self.frames_per_second {
            log::warn!(
                "frames_per_second {} out of range, using {}",
                self.frames_per_second,
                fps
            );
            self.frames_per_second = fps;
        }

        if self.playlist.is_empty() {
            log::warn!("empty playlist, using the default order");
            self.playlist = AlgorithmKind::ALL.to_vec();
        }
        self
    }

    /// Minimum time between two algorithm steps
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.frames_per_second
    }

    /// DOM id of the embedded settings block
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "visualizer-settings";

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                    return settings;
                }
                Err(err) => log::warn!("{err}; using defaults"),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.sample_size, 128);
        assert_eq!(settings.quadratic_sample_size, 32);
        assert_eq!(settings.playlist.len(), 6);
        assert!((settings.frame_interval_ms() - 1000.0 / 30.0).abs() < 1e-9);
        assert_eq!(settings.clone().validated(), settings);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{"seed": 7, "playlist": ["quick", "merge"]}"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(
            settings.playlist,
            vec![AlgorithmKind::Quick, AlgorithmKind::Merge]
        );
        assert_eq!(settings.sample_size, DEFAULT_SAMPLE_SIZE);
        assert!(!settings.pause_between);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let settings = Settings::from_json(
            r#"{"sample_size": 1000, "quadratic_sample_size": 0, "frames_per_second": 0.5, "playlist": []}"#,
        )
        .unwrap();
        assert_eq!(settings.sample_size, MAX_SAMPLE_SIZE);
        assert_eq!(settings.quadratic_sample_size, 1);
        assert_eq!(settings.frames_per_second, MIN_FPS);
        assert_eq!(settings.playlist, AlgorithmKind::ALL.to_vec());
    }

    #[test]
    fn test_quadratic_never_exceeds_sample() {
        let settings =
            Settings::from_json(r#"{"sample_size": 16, "quadratic_sample_size": 64}"#).unwrap();
        assert_eq!(settings.quadratic_sample_size, 16);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let err = Settings::from_json(r#"{"playlist": ["heap"]}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid settings JSON"));
        assert!(Settings::from_json("not json").is_err());
    }
}
