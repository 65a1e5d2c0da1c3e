//! Heart-collecting mini-game.
//!
//! All coordinates are CSS pixels relative to the game surface; positions
//! are top-left corners of the sprite boxes.

use std::rc::Rc;

use rand::Rng;
use yew::Reducible;

use super::placement::Point;
use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Intro,
    Playing,
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Arrow keys and WASD (either case).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }

    fn delta(self, step: f64) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -step),
            Direction::Down => (0.0, step),
            Direction::Left => (-step, 0.0),
            Direction::Right => (step, 0.0),
        }
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    KeyDown { key: String },
    TouchStart(Point),
    TouchMove(Point),
    TouchEnd,
    Resize(Viewport),
}

/// What a single update changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub collected: u32,
    /// True only on the update that crossed the win threshold.
    pub won_now: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub config: GameConfig,
    pub viewport: Viewport,
    pub character: Point,
    pub targets: Vec<Target>,
    pub initial_target_count: u32,
    pub score: u32,
    pub won: bool,
    pub intro_dismissed: bool,
    pub touch_anchor: Option<Point>,
}

impl GameState {
    /// Fresh game with a random target layout.
    ///
    /// No collision pass runs here: a target spawned under the character is
    /// collected on the first move.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, viewport: Viewport, rng: &mut R) -> Self {
        let margin = config.spawn_margin;
        let span_x = (viewport.width - config.target_size - 2.0 * margin).max(0.0);
        let span_y = (viewport.height - config.target_size - 2.0 * margin).max(0.0);
        let targets = (0..config.target_count)
            .map(|id| Target {
                id,
                x: margin + rng.random::<f64>() * span_x,
                y: margin + rng.random::<f64>() * span_y,
            })
            .collect();
        Self::with_targets(config, viewport, targets)
    }

    pub fn with_targets(config: GameConfig, viewport: Viewport, targets: Vec<Target>) -> Self {
        let character = Point::new(config.start_x, config.start_y);
        Self {
            initial_target_count: targets.len() as u32,
            config,
            viewport,
            character,
            targets,
            score: 0,
            won: false,
            intro_dismissed: false,
            touch_anchor: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.won {
            GamePhase::Won
        } else if self.intro_dismissed {
            GamePhase::Playing
        } else {
            GamePhase::Intro
        }
    }

    pub fn hearts_to_win(&self) -> u32 {
        self.config.hearts_to_win
    }

    fn max_x(&self) -> f64 {
        (self.viewport.width - self.config.character_size).max(0.0)
    }

    fn max_y(&self) -> f64 {
        (self.viewport.height - self.config.character_size).max(0.0)
    }

    fn move_by(&mut self, dx: f64, dy: f64) -> StepOutcome {
        self.character.x = (self.character.x + dx).clamp(0.0, self.max_x());
        self.character.y = (self.character.y + dy).clamp(0.0, self.max_y());
        self.resolve_collisions()
    }

    /// Collect every target overlapping the character, then check the win.
    pub fn resolve_collisions(&mut self) -> StepOutcome {
        if self.won {
            return StepOutcome::default();
        }
        let char_half = self.config.character_size / 2.0;
        let target_half = self.config.target_size / 2.0;
        let reach = char_half + target_half;
        let centre = Point::new(self.character.x + char_half, self.character.y + char_half);

        let before = self.targets.len();
        self.targets
            .retain(|t| centre.distance(Point::new(t.x + target_half, t.y + target_half)) >= reach);
        let collected = (before - self.targets.len()) as u32;
        self.score += collected;
        if collected > 0 {
            log::debug!("collected {} heart(s), score {}", collected, self.score);
        }

        let won_now = self.score >= self.config.hearts_to_win;
        if won_now {
            log::info!("mini-game won with {} hearts", self.score);
            self.won = true;
        }
        StepOutcome { collected, won_now }
    }

    pub fn apply(&mut self, action: GameAction) -> StepOutcome {
        if self.won {
            if let GameAction::Resize(viewport) = action {
                self.viewport = viewport;
            }
            return StepOutcome::default();
        }
        match action {
            GameAction::KeyDown { key } => {
                let Some(dir) = Direction::from_key(&key) else {
                    return StepOutcome::default();
                };
                self.intro_dismissed = true;
                let (dx, dy) = dir.delta(self.config.move_step);
                self.move_by(dx, dy)
            }
            GameAction::TouchStart(p) => {
                self.intro_dismissed = true;
                self.touch_anchor = Some(p);
                StepOutcome::default()
            }
            GameAction::TouchMove(p) => {
                let Some(anchor) = self.touch_anchor else {
                    return StepOutcome::default();
                };
                self.touch_anchor = Some(p);
                let damping = self.config.touch_damping;
                self.move_by((p.x - anchor.x) * damping, (p.y - anchor.y) * damping)
            }
            GameAction::TouchEnd => {
                self.touch_anchor = None;
                StepOutcome::default()
            }
            GameAction::Resize(viewport) => {
                self.viewport = viewport;
                self.move_by(0.0, 0.0)
            }
        }
    }
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.won && !matches!(action, GameAction::Resize(_)) {
            return self;
        }
        let mut new = (*self).clone();
        new.apply(action);
        Rc::new(new)
    }
}
