//! Tunables for the greeting flow, hover decorations and the mini-game.
//!
//! Defaults reproduce the shipped card. An optional JSON override can be
//! stored in LocalStorage under [`Config::STORAGE_KEY`]; missing fields keep
//! their defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub greeting: GreetingConfig,
    pub decorations: DecorationConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    /// Rejections needed before imagery escalates and acceptance sticks.
    pub rejection_threshold: u32,
    /// Exact rejection count that triggers the one-time milestone dialog.
    pub milestone_count: u32,
    /// The reject button evades the pointer while the count is strictly
    /// between these two values.
    pub evade_after: u32,
    pub evade_until: u32,
    pub celebration_interval_ms: u32,
    pub accept_font_base_px: u32,
    pub accept_font_step_px: u32,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            rejection_threshold: 4,
            milestone_count: 25,
            evade_after: 16,
            evade_until: 25,
            celebration_interval_ms: 5000,
            accept_font_base_px: 16,
            accept_font_step_px: 16,
        }
    }
}

/// Floating hover sprites. All distances are in percent of the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationConfig {
    pub count: usize,
    pub min_separation: f64,
    /// Sprites are placed in `[0, span_percent)` on both axes.
    pub span_percent: f64,
    pub max_attempts: u32,
    pub min_duration_secs: f64,
    pub max_duration_secs: f64,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            count: 10,
            min_separation: 15.0,
            span_percent: 90.0,
            max_attempts: 64,
            min_duration_secs: 1.0,
            max_duration_secs: 3.0,
        }
    }
}

/// Mini-game geometry, in CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub target_count: u32,
    pub hearts_to_win: u32,
    pub character_size: f64,
    pub target_size: f64,
    pub move_step: f64,
    pub touch_damping: f64,
    pub spawn_margin: f64,
    pub start_x: f64,
    pub start_y: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_count: 8,
            hearts_to_win: 5,
            character_size: 60.0,
            target_size: 40.0,
            move_step: 15.0,
            touch_damping: 0.5,
            spawn_margin: 50.0,
            start_x: 50.0,
            start_y: 50.0,
        }
    }
}

impl Config {
    pub const STORAGE_KEY: &'static str = "vp_config";

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load the LocalStorage override, falling back to defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let Some(raw) = crate::util::local_storage()
            .and_then(|store| store.get_item(Self::STORAGE_KEY).ok().flatten())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => {
                log::info!("Loaded config override from {}", Self::STORAGE_KEY);
                cfg.sanitized()
            }
            Err(e) => {
                log::warn!("Ignoring invalid {} override: {}", Self::STORAGE_KEY, e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    /// Clamp values that would break the state machines.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        let g = &mut self.greeting;
        if g.celebration_interval_ms == 0 {
            log::warn!("celebration_interval_ms must be positive; using default");
            g.celebration_interval_ms = defaults.greeting.celebration_interval_ms;
        }
        if g.evade_until < g.evade_after {
            log::warn!("evade window is inverted; swapping bounds");
            std::mem::swap(&mut g.evade_after, &mut g.evade_until);
        }

        let d = &mut self.decorations;
        if !(d.span_percent > 0.0 && d.span_percent <= 100.0) {
            log::warn!("span_percent {} out of range; using default", d.span_percent);
            d.span_percent = defaults.decorations.span_percent;
        }
        if !(d.min_separation >= 0.0) {
            d.min_separation = defaults.decorations.min_separation;
        }
        if d.max_attempts == 0 {
            d.max_attempts = 1;
        }
        if !(d.min_duration_secs > 0.0) || d.max_duration_secs < d.min_duration_secs {
            log::warn!("decoration duration range invalid; using default");
            d.min_duration_secs = defaults.decorations.min_duration_secs;
            d.max_duration_secs = defaults.decorations.max_duration_secs;
        }

        let gm = &mut self.game;
        if gm.target_count == 0 {
            log::warn!("target_count must be positive; using default");
            gm.target_count = defaults.game.target_count;
        }
        if gm.hearts_to_win == 0 || gm.hearts_to_win > gm.target_count {
            log::warn!(
                "hearts_to_win {} unreachable with {} targets; clamping",
                gm.hearts_to_win,
                gm.target_count
            );
            gm.hearts_to_win = gm.hearts_to_win.clamp(1, gm.target_count);
        }
        for (value, fallback) in [
            (&mut gm.character_size, defaults.game.character_size),
            (&mut gm.target_size, defaults.game.target_size),
            (&mut gm.move_step, defaults.game.move_step),
        ] {
            if !(*value > 0.0) {
                *value = fallback;
            }
        }
        if !(gm.touch_damping > 0.0) {
            gm.touch_damping = defaults.game.touch_damping;
        }
        if !(gm.spawn_margin >= 0.0) {
            gm.spawn_margin = defaults.game.spawn_margin;
        }
        self
    }
}
