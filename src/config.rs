//! Carousel configuration.

/// Tilt effect parameters for the active item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TiltConfig {
    /// Maximum rotation on either axis, in degrees
    pub max_angle_deg: f64,
    /// Vertical lift applied to the active item, in pixels
    pub lift_px: f64,
    /// Scale applied to the active item
    pub scale: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_angle_deg: 3.0,
            lift_px: 12.0,
            scale: 1.02,
        }
    }
}

/// CSS selectors used by the DOM binding to find carousel parts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Selectors {
    pub container: String,
    pub item: String,
    pub prev_button: String,
    pub next_button: String,
    pub dot: String,
    pub progress: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            container: ".carousel".into(),
            item: ".movie-card".into(),
            prev_button: ".prev-btn".into(),
            next_button: ".next-btn".into(),
            dot: ".dot".into(),
            progress: ".progress".into(),
        }
    }
}

/// Configuration for a [`Carousel`](crate::Carousel).
///
/// All fields are optional when loaded from TOML; missing values fall
/// back to the defaults below.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Period of the auto-advance tick in milliseconds
    pub tick_interval_ms: u32,
    /// Time for the progress bar to fill before advancing, in milliseconds
    pub advance_duration_ms: u32,
    /// Minimum horizontal travel for a touch to count as a swipe
    pub swipe_threshold_px: f64,
    pub tilt: TiltConfig,
    pub selectors: Selectors,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
            advance_duration_ms: 5000,
            swipe_threshold_px: 50.0,
            tilt: TiltConfig::default(),
            selectors: Selectors::default(),
        }
    }
}

impl CarouselConfig {
    /// Parse a carousel config from a TOML string.
    ///
    /// ## Example
    ///
    /// ```rust
    /// # #[cfg(feature = "toml")]
    /// # {
    /// use media_carousel::CarouselConfig;
    ///
    /// let config = CarouselConfig::from_toml_str("advance_duration_ms = 8000\n").unwrap();
    /// assert_eq!(config.advance_duration_ms, 8000);
    /// assert_eq!(config.tick_interval_ms, 50);
    /// # }
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Tick period, never below 1ms.
    #[inline]
    pub fn tick_interval(&self) -> u32 {
        self.tick_interval_ms.max(1)
    }

    /// Full progress cycle duration, never below 1ms.
    #[inline]
    pub fn advance_duration(&self) -> u32 {
        self.advance_duration_ms.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_durations_are_clamped() {
        let config = CarouselConfig {
            tick_interval_ms: 0,
            advance_duration_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_interval(), 1);
        assert_eq!(config.advance_duration(), 1);
    }

    #[test]
    fn default_selectors() {
        let selectors = Selectors::default();
        assert_eq!(selectors.item, ".movie-card");
        assert_eq!(selectors.prev_button, ".prev-btn");
    }

    #[cfg(feature = "toml")]
    #[test]
    fn partial_toml() {
        let config = CarouselConfig::from_toml_str(
            "swipe_threshold_px = 80.0\n[tilt]\nmax_angle_deg = 5.0\n",
        )
        .unwrap();
        assert_eq!(config.swipe_threshold_px, 80.0);
        assert_eq!(config.tilt.max_angle_deg, 5.0);
        assert_eq!(config.tilt.scale, 1.02);
        assert_eq!(config.selectors, Selectors::default());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn malformed_toml() {
        assert!(CarouselConfig::from_toml_str("tick_interval_ms = \"fast\"").is_err());
    }
}
