use serde::{Deserialize, Serialize};

/// Tunables for every effect on the page.
///
/// All fields are optional in the JSON form; anything missing keeps its default.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Cursor particles appended per pointer move.
    pub trail_emit: usize,
    /// Upper bound on live cursor particles; the oldest are evicted past it.
    pub trail_capacity: usize,
    /// Upper bound on live fireworks.
    pub firework_capacity: usize,
    /// Fireworks spawned when the orb reaches its last image.
    pub burst_fireworks: usize,
    pub sparks_per_firework: usize,
    /// Minimum gap between two ripples.
    pub ripple_interval_ms: f64,
    pub ripple_capacity: usize,
    pub flow_population: usize,
    pub snake_length: usize,
    /// Silence between the end of an ambient track and the next one.
    pub track_gap_ms: f64,
    pub ambient_volume: f64,
    pub video_volume: f64,
    /// Scroll distance for one full turn of the earth.
    pub rotation_period_px: f64,
    pub flash_hold_ms: f64,
    pub flash_fade_ms: f64,
    /// Fixed seed for the random source, mostly for reproducing a session.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            trail_emit: 3,
            trail_capacity: 900,
            firework_capacity: 64,
            burst_fireworks: 8,
            sparks_per_firework: 50,
            ripple_interval_ms: 100.0,
            ripple_capacity: 128,
            flow_population: 50,
            snake_length: 30,
            track_gap_ms: 2000.0,
            ambient_volume: 0.3,
            video_volume: 0.5,
            rotation_period_px: 3000.0,
            flash_hold_ms: 50.0,
            flash_fade_ms: 1500.0,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Settings, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "trailEmit": 5, "seed": 11 }"#).unwrap();

        assert_eq!(settings.trail_emit, 5);
        assert_eq!(settings.seed, Some(11));
        assert_eq!(settings.snake_length, 30);
        assert_eq!(settings.track_gap_ms, 2000.0);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Settings::from_json(r#"{ "trailEmit": "three" }"#).is_err());
    }
}
