//! Engine configuration.
//!
//! Configuration is validated once at startup; anything that would produce
//! a degenerate projection or a dead control scheme is rejected up front
//! rather than clamped silently.

use crate::{Error, Result};

/// Window startup settings.
#[derive(Clone, Debug)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in pixels
    pub width: u32,
    /// Initial height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Groove Engine".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Camera startup settings.
#[derive(Clone, Copy, Debug)]
pub struct CameraConfig {
    /// Initial camera position in world space
    pub position: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
    /// Movement speed in units per second
    pub movement_speed: f32,
    /// Mouse look sensitivity in degrees per input unit
    pub mouse_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
        }
    }
}

/// Top-level engine configuration.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Camera settings
    pub camera: CameraConfig,
    /// Scripted spin rate for the demo object, in degrees per second
    pub spin_degrees_per_sec: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            spin_degrees_per_sec: 45.0,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for a zero-sized window, a field of view
    /// outside (0, 180) degrees, clip planes violating `0 < near < far`,
    /// or non-finite control constants.
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::Config(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }

        let camera = &self.camera;
        if camera.position.iter().any(|v| !v.is_finite()) {
            return Err(Error::Config(format!(
                "camera position must be finite, got {:?}",
                camera.position
            )));
        }
        if !(camera.fov_y_degrees.is_finite()
            && camera.fov_y_degrees > 0.0
            && camera.fov_y_degrees < 180.0)
        {
            return Err(Error::Config(format!(
                "field of view must be within (0, 180) degrees, got {}",
                camera.fov_y_degrees
            )));
        }
        if !(camera.near.is_finite()
            && camera.far.is_finite()
            && camera.near > 0.0
            && camera.far > camera.near)
        {
            return Err(Error::Config(format!(
                "clip planes must satisfy 0 < near < far, got near = {}, far = {}",
                camera.near, camera.far
            )));
        }
        if !(camera.movement_speed.is_finite() && camera.movement_speed >= 0.0) {
            return Err(Error::Config(format!(
                "movement speed must be finite and non-negative, got {}",
                camera.movement_speed
            )));
        }
        if !camera.mouse_sensitivity.is_finite() {
            return Err(Error::Config(format!(
                "mouse sensitivity must be finite, got {}",
                camera.mouse_sensitivity
            )));
        }
        if !self.spin_degrees_per_sec.is_finite() {
            return Err(Error::Config(format!(
                "spin rate must be finite, got {}",
                self.spin_degrees_per_sec
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_window_size_is_rejected() {
        let mut config = EngineConfig::default();
        config.window.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_clip_planes_are_rejected() {
        let mut config = EngineConfig::default();
        config.camera.near = 50.0;
        config.camera.far = 0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_fov_is_rejected() {
        for fov in [0.0, -10.0, 180.0, f32::NAN] {
            let mut config = EngineConfig::default();
            config.camera.fov_y_degrees = fov;
            assert!(config.validate().is_err(), "fov {fov} should be rejected");
        }
    }
}
