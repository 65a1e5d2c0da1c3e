use rand::Rng;

use super::placement::{self, Bounds, Point, Spacing};
use crate::config::DecorationConfig;
use crate::content;

/// Which prompt button the pointer is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mood {
    Love,
    Sad,
}

impl Mood {
    pub fn asset(self) -> &'static str {
        match self {
            Mood::Love => content::HEART_GIF,
            Mood::Sad => content::SAD_GIF,
        }
    }

    fn id_prefix(self) -> &'static str {
        match self {
            Mood::Love => "heart",
            Mood::Sad => "sad",
        }
    }
}

/// A bouncing sprite scattered over the page while a prompt button is hovered.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingDecoration {
    pub id: String,
    pub asset: &'static str,
    /// `x` is the left offset, `y` the top offset, both in viewport percent.
    pub position: Point,
    pub animation_duration_secs: f64,
}

impl FloatingDecoration {
    pub fn style(&self) -> String {
        format!(
            "top:{:.2}vh; left:{:.2}vw; animation-duration:{:.2}s;",
            self.position.y, self.position.x, self.animation_duration_secs
        )
    }
}

pub fn spawn<R: Rng + ?Sized>(
    mood: Mood,
    cfg: &DecorationConfig,
    rng: &mut R,
) -> Vec<FloatingDecoration> {
    let spacing = Spacing {
        min_separation: cfg.min_separation,
        max_attempts: cfg.max_attempts,
    };
    let positions = placement::scatter(cfg.count, Bounds::square(cfg.span_percent), spacing, rng);
    let duration_span = (cfg.max_duration_secs - cfg.min_duration_secs).max(0.0);
    positions
        .into_iter()
        .enumerate()
        .map(|(i, position)| FloatingDecoration {
            id: format!("{}-{}", mood.id_prefix(), i),
            asset: mood.asset(),
            position,
            animation_duration_secs: cfg.min_duration_secs + rng.random::<f64>() * duration_span,
        })
        .collect()
}
