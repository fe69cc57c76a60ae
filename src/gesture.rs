/*
 * Copyright (C) 2026 The Intercards Authors
 *
 * This file is part of Intercards.
 *
 * Intercards is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Intercards is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Intercards.  If not, see <http://www.gnu.org/licenses/>.
 */

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::{
    geometry::{Offset, Point},
    input::GestureInput,
    session::Navigator,
};

/// Tuning for drag interpretation. Distances are in gesture units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Horizontal travel a release must exceed to commit a swipe.
    pub commit_threshold: f64,
    /// Movement beyond which a press is a drag rather than a tap.
    pub jitter_threshold: f64,
    pub exit_duration: Duration,
    /// Degrees of tilt per unit of horizontal travel.
    pub rotation_per_unit: f64,
    /// Exit travel as a multiple of the card width.
    pub exit_travel: f64,
    pub fallback_card_width: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            commit_threshold: 120.0,
            jitter_threshold: 6.0,
            exit_duration: Duration::from_millis(260),
            rotation_per_unit: 0.06,
            exit_travel: 1.5,
            fallback_card_width: 320.0,
        }
    }
}

/// Where a committed swipe takes the session.
///
/// Dragging left (negative dx) moves to the next card, dragging right moves to
/// the previous one, so the card always leaves on the side it was thrown to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

impl SwipeDirection {
    pub fn from_dx(dx: f64) -> Self {
        if dx > 0.0 {
            Self::Previous
        } else {
            Self::Next
        }
    }

    /// Sign of the exit travel along x.
    pub fn sign(self) -> f64 {
        match self {
            Self::Next => -1.0,
            Self::Previous => 1.0,
        }
    }

    fn apply(self, target: &mut impl Navigator) -> Option<usize> {
        match self {
            Self::Next => target.advance(),
            Self::Previous => target.retreat(),
        }
    }
}

/// The scheduled end of an exit animation. Owned by the controller; dropping
/// it is the cancellation.
#[derive(Debug, PartialEq)]
struct PendingExit {
    direction: SwipeDirection,
    deadline: Instant,
    generation: u64,
}

#[derive(Debug, PartialEq)]
enum Phase {
    Idle,
    Dragging { start: Point },
    Exiting(PendingExit),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Nothing was being dragged.
    Ignored,
    /// The card snaps back.
    Cancelled,
    /// The exit animation started.
    Committed(SwipeDirection),
}

/// Everything the presentation needs to draw the card in motion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardMotion {
    pub offset: Offset,
    /// Tilt in degrees, proportional to the horizontal offset.
    pub rotation: f64,
    pub dragging: bool,
    pub exiting: bool,
}

/// Turns press/move/release samples over the active card into either a
/// snap-back or a committed swipe that, once its exit animation has run,
/// moves a [`Navigator`] by exactly one card.
///
/// `Idle -> Dragging -> Idle` on cancel, `Dragging -> Exiting -> Idle` on
/// commit. Presses are ignored while exiting.
#[derive(Debug)]
pub struct GestureController {
    config: GestureConfig,
    phase: Phase,
    offset: Offset,
    block_click: bool,
    card_width: Option<f64>,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureController {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            offset: Offset::ORIGIN,
            block_click: false,
            card_width: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Width of the rendered card, used to size the exit travel.
    pub fn set_card_width(&mut self, width: f64) {
        self.card_width = (width > 0.0).then_some(width);
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting(_))
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn motion(&self) -> CardMotion {
        CardMotion {
            offset: self.offset,
            rotation: self.offset.x * self.config.rotation_per_unit,
            dragging: self.is_dragging(),
            exiting: self.is_exiting(),
        }
    }

    /// When the pending exit fires, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        match &self.phase {
            Phase::Exiting(pending) => Some(pending.deadline),
            _ => None,
        }
    }

    /// Feeds one normalized sample through the state machine. Only a release
    /// has an outcome.
    pub fn handle(
        &mut self,
        input: GestureInput,
        now: Instant,
        target: &impl Navigator,
    ) -> Option<Release> {
        match input {
            GestureInput::Press(point) => {
                self.press(point);
                None
            }
            GestureInput::Move(point) => {
                self.drag_to(point);
                None
            }
            GestureInput::Release(point) => Some(self.release(point, now, target)),
            GestureInput::Leave => {
                self.leave();
                None
            }
        }
    }

    /// Starts a drag at `point`. Returns false while an exit is running.
    pub fn press(&mut self, point: Point) -> bool {
        if self.is_exiting() {
            return false;
        }
        self.phase = Phase::Dragging { start: point };
        self.block_click = false;
        true
    }

    pub fn drag_to(&mut self, point: Point) {
        let Phase::Dragging { start } = self.phase else {
            return;
        };

        let delta = point - start;
        if delta.distance() > self.config.jitter_threshold {
            self.block_click = true;
        }
        self.offset = delta;
    }

    /// Ends the drag at `point`. A horizontal delta beyond the commit
    /// threshold starts the exit animation towards the side it was thrown;
    /// anything shorter snaps back.
    pub fn release(&mut self, point: Point, now: Instant, target: &impl Navigator) -> Release {
        let start = match self.phase {
            Phase::Dragging { start } => start,
            Phase::Exiting(_) => return Release::Ignored,
            Phase::Idle => {
                self.reset();
                return Release::Ignored;
            }
        };

        let delta = point - start;
        if delta.distance() > self.config.jitter_threshold {
            self.block_click = true;
        }

        if delta.x.abs() > self.config.commit_threshold {
            let direction = SwipeDirection::from_dx(delta.x);
            let travel = self.card_width.unwrap_or(self.config.fallback_card_width)
                * self.config.exit_travel
                * direction.sign();

            debug!("swipe committed {direction:?} with dx {:.1}", delta.x);
            self.offset = Offset::new(travel, delta.y);
            self.block_click = true;
            self.phase = Phase::Exiting(PendingExit {
                direction,
                deadline: now + self.config.exit_duration,
                generation: target.generation(),
            });
            Release::Committed(direction)
        } else {
            trace!("swipe cancelled with dx {:.1}", delta.x);
            self.phase = Phase::Idle;
            self.offset = Offset::ORIGIN;
            Release::Cancelled
        }
    }

    /// The pointer left the card mid-drag: snap back without committing.
    pub fn leave(&mut self) {
        if self.is_dragging() {
            trace!("pointer left the stage, drag cancelled");
            self.phase = Phase::Idle;
            self.offset = Offset::ORIGIN;
            self.block_click = false;
        }
    }

    /// A click on the card. Returns whether it should flip the card; the
    /// first click after a real drag is swallowed.
    pub fn click(&mut self) -> bool {
        if self.is_exiting() {
            return false;
        }
        if self.block_click {
            self.block_click = false;
            return false;
        }
        true
    }

    /// Fires the pending exit once its deadline has passed, moving `target`
    /// one card in the committed direction. An exit committed against an
    /// earlier generation of `target` is dropped without acting.
    pub fn tick(&mut self, now: Instant, target: &mut impl Navigator) -> Option<SwipeDirection> {
        if self.deadline().map_or(true, |deadline| now < deadline) {
            return None;
        }

        let Phase::Exiting(pending) = std::mem::replace(&mut self.phase, Phase::Idle) else {
            return None;
        };
        self.reset();

        if pending.generation != target.generation() {
            debug!("dropping swipe for a replaced session");
            return None;
        }

        pending.direction.apply(target);
        Some(pending.direction)
    }

    /// Drops any drag or pending exit without acting on it.
    pub fn cancel(&mut self) {
        if self.is_exiting() {
            debug!("pending swipe cancelled");
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.offset = Offset::ORIGIN;
        self.block_click = false;
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        catalogue::QuestionRecord,
        geometry::{Offset, Point},
        input::GestureInput,
        selection::SessionKey,
        session::{Navigator, Session},
    };

    use super::{GestureController, Release, SwipeDirection};

    const EXIT: Duration = Duration::from_millis(260);

    fn records(len: usize) -> Vec<QuestionRecord> {
        (0..len)
            .map(|i| QuestionRecord::new(format!("q{i}"), "Rust", "Q?", "A."))
            .collect()
    }

    fn session(records: &[QuestionRecord]) -> Session<'_, StdRng> {
        let mut session = Session::with_rng(StdRng::seed_from_u64(9));
        session.initialize(SessionKey::from("Rust|5"), records.iter().collect());
        session
    }

    /// Counts calls instead of moving anything.
    #[derive(Default)]
    struct Recorder {
        advanced: usize,
        retreated: usize,
        generation: u64,
    }

    impl Navigator for Recorder {
        fn advance(&mut self) -> Option<usize> {
            self.advanced += 1;
            None
        }

        fn retreat(&mut self) -> Option<usize> {
            self.retreated += 1;
            None
        }

        fn generation(&self) -> u64 {
            self.generation
        }
    }

    fn swipe(
        controller: &mut GestureController,
        dx: f64,
        now: Instant,
        target: &impl Navigator,
    ) -> Release {
        let start = Point::new(400.0, 200.0);
        controller.press(start);
        controller.drag_to(start + Point::new(dx / 2.0, 3.0));
        controller.drag_to(start + Point::new(dx, 5.0));
        controller.release(start + Point::new(dx, 5.0), now, target)
    }

    #[test]
    fn drag_tracks_offset_and_tilt() {
        let mut controller = GestureController::default();
        controller.press(Point::new(10.0, 10.0));
        controller.drag_to(Point::new(60.0, 30.0));

        let motion = controller.motion();
        assert!(motion.dragging);
        assert!(!motion.exiting);
        assert_eq!(motion.offset, Offset::new(50.0, 20.0));
        assert!((motion.rotation - 3.0).abs() < 1e-9);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut controller = GestureController::default();
        controller.drag_to(Point::new(60.0, 30.0));
        assert_eq!(controller.offset(), Offset::ORIGIN);
        assert!(controller.is_idle());
    }

    #[test]
    fn long_left_swipe_advances_after_exit() {
        let records = records(5);
        let mut session = session(&records);
        let mut controller = GestureController::default();
        let now = Instant::now();

        assert_eq!(
            swipe(&mut controller, -150.0, now, &session),
            Release::Committed(SwipeDirection::Next)
        );
        assert!(controller.is_exiting());
        assert_eq!(controller.offset(), Offset::new(-480.0, 5.0));

        // nothing happens before the deadline
        assert_eq!(controller.tick(now + EXIT / 2, &mut session), None);
        assert_eq!(session.cursor(), Some(0));

        assert_eq!(
            controller.tick(now + EXIT, &mut session),
            Some(SwipeDirection::Next)
        );
        assert_eq!(session.cursor(), Some(1));
        assert!(controller.is_idle());
        assert_eq!(controller.offset(), Offset::ORIGIN);

        // fires once
        assert_eq!(controller.tick(now + EXIT * 2, &mut session), None);
        assert_eq!(session.cursor(), Some(1));
    }

    #[test]
    fn long_right_swipe_retreats() {
        let records = records(5);
        let mut session = session(&records);
        session.advance();
        session.advance();
        let mut controller = GestureController::default();
        controller.set_card_width(200.0);
        let now = Instant::now();

        assert_eq!(
            swipe(&mut controller, 150.0, now, &session),
            Release::Committed(SwipeDirection::Previous)
        );
        assert_eq!(controller.offset(), Offset::new(300.0, 5.0));

        controller.tick(now + EXIT, &mut session);
        assert_eq!(session.cursor(), Some(1));
    }

    #[test]
    fn short_swipe_snaps_back() {
        let records = records(5);
        let mut session = session(&records);
        let mut controller = GestureController::default();
        let now = Instant::now();

        assert_eq!(swipe(&mut controller, 40.0, now, &session), Release::Cancelled);
        assert!(controller.is_idle());
        assert_eq!(controller.offset(), Offset::ORIGIN);
        assert_eq!(controller.deadline(), None);

        controller.tick(now + EXIT, &mut session);
        assert_eq!(session.cursor(), Some(0));
    }

    #[test]
    fn threshold_is_exclusive() {
        let recorder = Recorder::default();
        let mut controller = GestureController::default();
        assert_eq!(
            swipe(&mut controller, 120.0, Instant::now(), &recorder),
            Release::Cancelled
        );
    }

    #[test]
    fn presses_ignored_while_exiting() {
        let mut recorder = Recorder::default();
        let mut controller = GestureController::default();
        let now = Instant::now();

        swipe(&mut controller, -200.0, now, &recorder);
        assert!(!controller.press(Point::new(0.0, 0.0)));
        assert_eq!(
            controller.release(Point::new(-500.0, 0.0), now, &recorder),
            Release::Ignored
        );
        assert!(controller.is_exiting());

        controller.tick(now + EXIT, &mut recorder);
        assert_eq!(recorder.advanced, 1);
        assert_eq!(recorder.retreated, 0);
        assert!(controller.press(Point::new(0.0, 0.0)));
    }

    #[test]
    fn leaving_cancels_the_drag() {
        let mut recorder = Recorder::default();
        let mut controller = GestureController::default();
        let now = Instant::now();

        controller.press(Point::new(0.0, 0.0));
        controller.drag_to(Point::new(-300.0, 0.0));
        controller.leave();

        assert!(controller.is_idle());
        assert_eq!(controller.offset(), Offset::ORIGIN);
        assert_eq!(
            controller.release(Point::new(-300.0, 0.0), now, &recorder),
            Release::Ignored
        );
        controller.tick(now + EXIT, &mut recorder);
        assert_eq!(recorder.advanced, 0);
    }

    #[test]
    fn tap_flips_but_drag_swallows_one_click() {
        let recorder = Recorder::default();
        let mut controller = GestureController::default();
        let now = Instant::now();

        controller.press(Point::new(0.0, 0.0));
        controller.drag_to(Point::new(2.0, 1.0));
        assert_eq!(
            controller.release(Point::new(2.0, 1.0), now, &recorder),
            Release::Cancelled
        );
        assert!(controller.click());

        assert_eq!(swipe(&mut controller, 40.0, now, &recorder), Release::Cancelled);
        assert!(!controller.click());
        assert!(controller.click());
    }

    #[test]
    fn no_click_while_exiting() {
        let recorder = Recorder::default();
        let mut controller = GestureController::default();
        swipe(&mut controller, -200.0, Instant::now(), &recorder);
        assert!(!controller.click());
    }

    #[test]
    fn cancel_drops_pending_exit() {
        let mut recorder = Recorder::default();
        let mut controller = GestureController::default();
        let now = Instant::now();

        swipe(&mut controller, -200.0, now, &recorder);
        controller.cancel();

        assert!(controller.is_idle());
        assert_eq!(controller.tick(now + EXIT, &mut recorder), None);
        assert_eq!(recorder.advanced, 0);
    }

    #[test]
    fn replaced_session_suppresses_exit() {
        let records = records(5);
        let mut session = session(&records);
        let mut controller = GestureController::default();
        let now = Instant::now();

        swipe(&mut controller, -200.0, now, &session);
        session.initialize(SessionKey::from("Rust|4"), records[..4].iter().collect());

        assert_eq!(controller.tick(now + EXIT, &mut session), None);
        assert_eq!(session.cursor(), Some(0));
        assert!(controller.is_idle());
    }

    #[test]
    fn deadline_is_exit_duration_after_release() {
        let recorder = Recorder::default();
        let mut controller = GestureController::default();
        let now = Instant::now();

        swipe(&mut controller, 300.0, now, &recorder);
        assert_eq!(controller.deadline(), Some(now + EXIT));
    }

    #[test]
    fn handle_dispatches_samples() {
        let mut recorder = Recorder::default();
        let mut controller = GestureController::default();
        let now = Instant::now();

        let samples = [
            GestureInput::Press(Point::new(500.0, 0.0)),
            GestureInput::Move(Point::new(400.0, 0.0)),
            GestureInput::Move(Point::new(300.0, 0.0)),
        ];
        for sample in samples {
            assert_eq!(controller.handle(sample, now, &recorder), None);
        }
        assert!(controller.is_dragging());

        assert_eq!(
            controller.handle(GestureInput::Release(Point::new(300.0, 0.0)), now, &recorder),
            Some(Release::Committed(SwipeDirection::Next))
        );
        controller.tick(now + EXIT, &mut recorder);
        assert_eq!(recorder.advanced, 1);
    }
}
