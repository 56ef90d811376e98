use serde::{Deserialize, Serialize};

/// Speed multiplier bounds, matching the host slider's range.
pub const SPEED_MIN: f64 = 0.1;
pub const SPEED_MAX: f64 = 10.0;
pub const SPEED_DEFAULT: f64 = 1.0;

/// The two user-facing controls, exchanged with the host UI as JSON.
///
/// `speed` is read by reference each frame; changing it never rebuilds the
/// scene, only the magnitude of the per-frame time increment. Toggling
/// `exaggerated` regeometrizes every body, which requires a full
/// teardown-and-rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    /// Simulation speed multiplier in [0.1, 10.0].
    pub speed: f64,
    /// Whether non-central bodies are drawn at full size.
    pub exaggerated: bool,
}

impl ControlState {
    pub fn new() -> Self {
        Self {
            speed: SPEED_DEFAULT,
            exaggerated: false,
        }
    }

    /// Set the speed multiplier, clamped to the slider's range.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }

    /// Restore both controls to their defaults.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Snapshot as JSON for the host UI.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Parse a control state sent by the host UI.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ControlState::new();
        assert_eq!(c.speed, 1.0);
        assert!(!c.exaggerated);
    }

    #[test]
    fn speed_is_clamped() {
        let mut c = ControlState::new();
        c.set_speed(100.0);
        assert_eq!(c.speed, SPEED_MAX);
        c.set_speed(0.0);
        assert_eq!(c.speed, SPEED_MIN);
        c.set_speed(3.7);
        assert_eq!(c.speed, 3.7);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut c = ControlState::new();
        c.set_speed(9.9);
        c.exaggerated = true;
        c.reset();
        assert_eq!(c, ControlState::new());
    }

    #[test]
    fn json_roundtrip() {
        let mut c = ControlState::new();
        c.set_speed(2.5);
        c.exaggerated = true;
        let back = ControlState::from_json(&c.to_json()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ControlState::from_json("{").is_err());
    }
}
