//! The proposal prompt: rejection counter, acceptance and the dialogs they raise.

use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use yew::Reducible;

use super::decoration::{self, FloatingDecoration, Mood};
use super::dialog::Dialog;
use super::placement::{self, Bounds, Point};
use crate::config::{DecorationConfig, GreetingConfig};
use crate::content;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GreetingPhase {
    Asking,
    Accepted,
}

/// Percent of the viewport the evading button may jump within.
const EVADE_SPAN_PERCENT: f64 = 80.0;

#[derive(Clone, Debug)]
pub enum GreetingAction {
    Reject,
    Accept,
    /// Celebration timer fired.
    AdvanceCelebration,
    HoverEnter(Mood),
    HoverLeave,
    /// Pointer reached the reject button while it is evading.
    Evade,
    OpenGame,
    CloseGame,
}

/// Most recent dialog raised by a transition. `seq` increases with every
/// dialog so hosts can tell a new one from a re-render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u32,
    pub dialog: Dialog,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GreetingState {
    pub config: GreetingConfig,
    pub decoration_config: DecorationConfig,
    pub rejection_count: u32,
    pub accepted: bool,
    /// Index into the celebration imagery, always kept modulo its length.
    pub celebration_index: usize,
    pub soft_confirm_shown: bool,
    pub celebration_shown: bool,
    pub milestone_shown: bool,
    pub decorations: Vec<FloatingDecoration>,
    /// Reject-button offset (viewport percent) while it evades the pointer.
    pub evader_position: Option<Point>,
    pub game_open: bool,
    pub notice: Option<Notice>,
    rng: Pcg32,
}

impl GreetingState {
    pub fn new(config: GreetingConfig, decoration_config: DecorationConfig, seed: u64) -> Self {
        Self {
            config,
            decoration_config,
            rejection_count: 0,
            accepted: false,
            celebration_index: 0,
            soft_confirm_shown: false,
            celebration_shown: false,
            milestone_shown: false,
            decorations: Vec::new(),
            evader_position: None,
            game_open: false,
            notice: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> GreetingPhase {
        if self.accepted {
            GreetingPhase::Accepted
        } else {
            GreetingPhase::Asking
        }
    }

    pub fn reject_label(&self) -> &'static str {
        let idx = (self.rejection_count as usize).min(content::REJECT_PHRASES.len() - 1);
        content::REJECT_PHRASES[idx]
    }

    /// Position in the rejection imagery cycle, once past the threshold.
    pub fn rejection_imagery_index(&self) -> Option<usize> {
        let threshold = self.config.rejection_threshold;
        (self.rejection_count >= threshold)
            .then(|| (self.rejection_count - threshold) as usize % content::REJECTION_GIFS.len())
    }

    pub fn prompt_gif(&self) -> &'static str {
        self.rejection_imagery_index()
            .map_or(content::PROMPT_GIF, |i| content::REJECTION_GIFS[i])
    }

    pub fn celebration_gif(&self) -> &'static str {
        content::CELEBRATION_GIFS[self.celebration_index % content::CELEBRATION_GIFS.len()]
    }

    pub fn accept_font_px(&self) -> u32 {
        self.config
            .accept_font_base_px
            .saturating_add(self.rejection_count.saturating_mul(self.config.accept_font_step_px))
    }

    /// The reject button dodges the pointer inside this window.
    pub fn evasion_active(&self) -> bool {
        !self.accepted
            && self.rejection_count > self.config.evade_after
            && self.rejection_count < self.config.evade_until
    }

    fn past_threshold(&self) -> bool {
        self.rejection_count >= self.config.rejection_threshold
    }

    /// Apply one action, returning the dialog it raises, if any.
    pub fn apply(&mut self, action: GreetingAction) -> Option<Dialog> {
        use GreetingAction::*;
        match action {
            Reject => self.reject(),
            Accept => self.accept(),
            AdvanceCelebration => {
                if self.accepted {
                    self.celebration_index =
                        (self.celebration_index + 1) % content::CELEBRATION_GIFS.len();
                }
                None
            }
            HoverEnter(mood) => {
                if !self.accepted {
                    self.decorations = decoration::spawn(mood, &self.decoration_config, &mut self.rng);
                }
                None
            }
            HoverLeave => {
                self.decorations.clear();
                None
            }
            Evade => {
                if self.evasion_active() {
                    self.evader_position = Some(placement::random_point(
                        Bounds::square(EVADE_SPAN_PERCENT),
                        &mut self.rng,
                    ));
                }
                None
            }
            OpenGame => {
                if self.accepted && !self.game_open {
                    log::info!("mini-game opened");
                    self.game_open = true;
                }
                None
            }
            CloseGame => {
                if self.game_open {
                    log::info!("mini-game closed");
                    self.game_open = false;
                }
                None
            }
        }
    }

    fn reject(&mut self) -> Option<Dialog> {
        if self.accepted {
            return None;
        }
        self.rejection_count = self.rejection_count.saturating_add(1);
        log::debug!("rejection #{}", self.rejection_count);
        if !self.evasion_active() {
            self.evader_position = None;
        }
        if self.rejection_count == self.config.milestone_count && !self.milestone_shown {
            log::info!("rejection milestone {} reached", self.rejection_count);
            self.milestone_shown = true;
            return Some(Dialog::Milestone);
        }
        None
    }

    fn accept(&mut self) -> Option<Dialog> {
        if !self.past_threshold() {
            // Too early: nudge once, never unlock.
            if self.soft_confirm_shown {
                return None;
            }
            self.soft_confirm_shown = true;
            return Some(Dialog::SoftConfirm);
        }
        if !self.accepted {
            log::info!("accepted after {} rejections", self.rejection_count);
            self.accepted = true;
            self.decorations.clear();
            self.evader_position = None;
        }
        if self.celebration_shown {
            return None;
        }
        self.celebration_shown = true;
        Some(Dialog::Celebration)
    }
}

impl Reducible for GreetingState {
    type Action = GreetingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        if let Some(dialog) = new.apply(action) {
            let seq = new.notice.map_or(1, |n| n.seq.wrapping_add(1));
            new.notice = Some(Notice { seq, dialog });
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fresh() -> GreetingState {
        GreetingState::new(GreetingConfig::default(), DecorationConfig::default(), 42)
    }

    fn rejected(n: u32) -> GreetingState {
        let mut s = fresh();
        for _ in 0..n {
            s.apply(GreetingAction::Reject);
        }
        s
    }

    #[test]
    fn states_compare_by_value() {
        assert_eq!(rejected(3), rejected(3));
        assert_ne!(rejected(3), rejected(4));
        let mut hovered = rejected(3);
        hovered.apply(GreetingAction::HoverEnter(Mood::Sad));
        assert_ne!(hovered, rejected(3));
    }

    #[test]
    fn starts_asking_with_default_prompt() {
        let s = fresh();
        assert_eq!(s.phase(), GreetingPhase::Asking);
        assert_eq!(s.reject_label(), "No");
        assert_eq!(s.prompt_gif(), content::PROMPT_GIF);
        assert_eq!(s.rejection_imagery_index(), None);
        assert_eq!(s.accept_font_px(), 16);
    }

    #[test]
    fn four_rejections_escalate_label_and_imagery() {
        let mut s = rejected(4);
        assert_eq!(s.reject_label(), "Pretty please?");
        assert_eq!(s.rejection_imagery_index(), Some(0));
        assert_eq!(s.prompt_gif(), content::REJECTION_GIFS[0]);
        s.apply(GreetingAction::Reject);
        assert_eq!(s.rejection_imagery_index(), Some(1));
    }

    #[test]
    fn accept_button_grows_with_rejections() {
        assert_eq!(rejected(3).accept_font_px(), 64);
    }

    #[test]
    fn early_accept_shows_soft_confirm_once() {
        let mut s = rejected(2);
        assert_eq!(s.apply(GreetingAction::Accept), Some(Dialog::SoftConfirm));
        assert_eq!(s.apply(GreetingAction::Accept), None);
        assert_eq!(s.apply(GreetingAction::Accept), None);
        assert!(!s.accepted);
        assert_eq!(s.phase(), GreetingPhase::Asking);
    }

    #[test]
    fn soft_confirm_does_not_block_later_acceptance() {
        let mut s = fresh();
        s.apply(GreetingAction::Accept);
        for _ in 0..4 {
            s.apply(GreetingAction::Reject);
        }
        assert_eq!(s.apply(GreetingAction::Accept), Some(Dialog::Celebration));
        assert_eq!(s.phase(), GreetingPhase::Accepted);
    }

    #[test]
    fn acceptance_past_threshold_is_sticky() {
        let mut s = rejected(4);
        assert_eq!(s.apply(GreetingAction::Accept), Some(Dialog::Celebration));
        assert_eq!(s.apply(GreetingAction::Accept), None);
        assert_eq!(s.apply(GreetingAction::Reject), None);
        assert!(s.accepted);
        assert_eq!(s.rejection_count, 4);
    }

    #[test]
    fn milestone_dialog_fires_only_at_exact_count() {
        let mut s = rejected(24);
        assert_eq!(s.apply(GreetingAction::Reject), Some(Dialog::Milestone));
        assert_eq!(s.apply(GreetingAction::Reject), None);
        assert_eq!(s.rejection_count, 26);
        assert!(s.milestone_shown);
    }

    #[test]
    fn evasion_window_is_exclusive() {
        assert!(!rejected(16).evasion_active());
        assert!(rejected(17).evasion_active());
        assert!(rejected(24).evasion_active());
        assert!(!rejected(25).evasion_active());
    }

    #[test]
    fn evade_moves_button_only_inside_window() {
        let mut s = rejected(10);
        s.apply(GreetingAction::Evade);
        assert_eq!(s.evader_position, None);

        let mut s = rejected(20);
        s.apply(GreetingAction::Evade);
        let p = s.evader_position.expect("evader placed");
        assert!((0.0..EVADE_SPAN_PERCENT).contains(&p.x));
        for _ in 0..5 {
            s.apply(GreetingAction::Reject);
        }
        assert_eq!(s.evader_position, None);
    }

    #[test]
    fn hover_replaces_and_leave_clears_decorations() {
        let mut s = fresh();
        s.apply(GreetingAction::HoverEnter(Mood::Love));
        assert_eq!(s.decorations.len(), 10);
        assert!(s.decorations[0].id.starts_with("heart-"));
        s.apply(GreetingAction::HoverEnter(Mood::Sad));
        assert_eq!(s.decorations.len(), 10);
        assert!(s.decorations.iter().all(|d| d.id.starts_with("sad-")));
        s.apply(GreetingAction::HoverLeave);
        assert!(s.decorations.is_empty());
    }

    #[test]
    fn celebration_cycles_only_when_accepted() {
        let mut s = fresh();
        s.apply(GreetingAction::AdvanceCelebration);
        assert_eq!(s.celebration_index, 0);

        let mut s = rejected(5);
        s.apply(GreetingAction::Accept);
        let len = content::CELEBRATION_GIFS.len();
        for _ in 0..len + 2 {
            s.apply(GreetingAction::AdvanceCelebration);
        }
        assert_eq!(s.celebration_index, 2);
        assert_eq!(s.celebration_gif(), content::CELEBRATION_GIFS[2]);
    }

    #[test]
    fn game_opens_only_after_acceptance() {
        let mut s = fresh();
        s.apply(GreetingAction::OpenGame);
        assert!(!s.game_open);

        let mut s = rejected(4);
        s.apply(GreetingAction::Accept);
        s.apply(GreetingAction::OpenGame);
        assert!(s.game_open);
        s.apply(GreetingAction::CloseGame);
        assert!(!s.game_open);
        assert_eq!(s.phase(), GreetingPhase::Accepted);
    }

    #[test]
    fn reducer_records_notice_sequence() {
        let s = Rc::new(rejected(4));
        let s = s.reduce(GreetingAction::Accept);
        assert_eq!(
            s.notice,
            Some(Notice {
                seq: 1,
                dialog: Dialog::Celebration
            })
        );
        let s = s.reduce(GreetingAction::Accept);
        assert_eq!(s.notice.map(|n| n.seq), Some(1));
    }

    proptest! {
        #[test]
        fn label_tracks_clamped_phrase(count in 0u32..200) {
            let s = rejected(count);
            let idx = (count as usize).min(content::REJECT_PHRASES.len() - 1);
            prop_assert_eq!(s.reject_label(), content::REJECT_PHRASES[idx]);
        }

        #[test]
        fn imagery_cycles_past_threshold(count in 4u32..200) {
            let s = rejected(count);
            let expected = (count as usize - 4) % content::REJECTION_GIFS.len();
            prop_assert_eq!(s.rejection_imagery_index(), Some(expected));
        }

        #[test]
        fn early_accepts_never_unlock(count in 0u32..4, presses in 1usize..10) {
            let mut s = rejected(count);
            let dialogs: Vec<_> = (0..presses).filter_map(|_| s.apply(GreetingAction::Accept)).collect();
            prop_assert_eq!(dialogs, vec![Dialog::SoftConfirm]);
            prop_assert!(!s.accepted);
        }

        #[test]
        fn late_accepts_celebrate_once(count in 4u32..60, presses in 1usize..10) {
            let mut s = rejected(count);
            let dialogs: Vec<_> = (0..presses).filter_map(|_| s.apply(GreetingAction::Accept)).collect();
            prop_assert_eq!(dialogs, vec![Dialog::Celebration]);
            prop_assert_eq!(s.phase(), GreetingPhase::Accepted);
        }
    }
}
