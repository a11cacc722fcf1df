//! Data-driven game balance
//!
//! Every gameplay constant lives here so a build can be rebalanced without
//! touching the sim. On wasm a partial JSON override can be dropped into
//! LocalStorage; missing fields fall back to [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable balance values for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Velocity assigned on a flap (negative = upward)
    pub flap_impulse: f32,

    /// Bird sprite size (pixels)
    pub bird_w: f32,
    pub bird_h: f32,
    /// Bird column as a fraction of canvas width
    pub bird_x_fraction: f32,

    /// Pipe width (pixels)
    pub pipe_w: f32,
    /// Gap height as a fraction of canvas height
    pub gap_fraction: f32,
    /// Scroll speed is `canvas_width / speed_ref_width`
    pub speed_ref_width: f32,

    /// Ticks between pipe spawns
    pub spawn_period: u64,
    /// Spawn offset past the right canvas edge
    pub spawn_lead: f32,
    /// Off-screen distance at which pipes are dropped
    pub despawn_margin: f32,

    /// Minimum gap-top distance from the ceiling
    pub gap_top_min: f32,
    /// Minimum gap-bottom distance from the floor
    pub gap_floor_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: consts::GRAVITY,
            flap_impulse: consts::FLAP_IMPULSE,
            bird_w: consts::BIRD_W,
            bird_h: consts::BIRD_H,
            bird_x_fraction: consts::BIRD_X_FRACTION,
            pipe_w: consts::PIPE_W,
            gap_fraction: consts::GAP_FRACTION,
            speed_ref_width: consts::SPEED_REF_WIDTH,
            spawn_period: consts::SPAWN_PERIOD,
            spawn_lead: consts::SPAWN_LEAD,
            despawn_margin: consts::DESPAWN_MARGIN,
            gap_top_min: consts::GAP_TOP_MIN,
            gap_floor_margin: consts::GAP_FLOOR_MARGIN,
        }
    }
}

impl Tuning {
    /// LocalStorage key for overrides
    const STORAGE_KEY: &'static str = "skyflap_tuning";

    /// Load tuning, applying any LocalStorage override (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning override from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring bad tuning override: {e}"),
                }
            }
        }

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
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.gravity, consts::GRAVITY);
        assert_eq!(t.flap_impulse, consts::FLAP_IMPULSE);
        assert_eq!(t.spawn_period, consts::SPAWN_PERIOD);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let t: Tuning = serde_json::from_str(r#"{"gravity": 0.8}"#).unwrap();
        assert_eq!(t.gravity, 0.8);
        assert_eq!(t.flap_impulse, consts::FLAP_IMPULSE);
        assert_eq!(t.pipe_w, consts::PIPE_W);
    }
}
