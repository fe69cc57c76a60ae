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

use log::{debug, info};
use rand::{rngs::ThreadRng, Rng};

use crate::{catalogue::QuestionRecord, random::shuffled_indices, selection::SessionKey};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Front,
    Back,
}

impl Side {
    fn flipped(self) -> Self {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }
}

/// Something a committed swipe can move. The generation lets a delayed
/// action detect that the target was re-initialized in the meantime.
pub trait Navigator {
    fn advance(&mut self) -> Option<usize>;
    fn retreat(&mut self) -> Option<usize>;
    fn generation(&self) -> u64;
}

/// One shuffled pass over a fixed subset of questions.
///
/// The traversal order is a permutation of `0..questions.len()`, the cursor
/// only ever moves by one and saturates at both ends, and every cursor move
/// turns the card back to its front.
pub struct Session<'a, R = ThreadRng> {
    key: SessionKey,
    questions: Vec<&'a QuestionRecord>,
    order: Vec<usize>,
    cursor: Option<usize>,
    side: Side,
    generation: u64,
    rng: R,
}

impl<'a> Session<'a> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl<'a> Default for Session<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R: Rng> Session<'a, R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            key: SessionKey::default(),
            questions: vec![],
            order: vec![],
            cursor: None,
            side: Side::Front,
            generation: 0,
            rng,
        }
    }

    /// Replaces the question subset and starts a fresh shuffled pass over it.
    /// Any previous position and flip state are discarded.
    pub fn initialize(&mut self, key: SessionKey, questions: Vec<&'a QuestionRecord>) {
        info!("starting session {key} with {} questions", questions.len());
        self.key = key;
        self.questions = questions;
        self.reshuffle();
    }

    /// Initializes only when `key` differs from the current subset's key.
    /// Returns whether a new session was started.
    pub fn sync(
        &mut self,
        key: SessionKey,
        questions: impl FnOnce() -> Vec<&'a QuestionRecord>,
    ) -> bool {
        if self.key == key && self.generation != 0 {
            return false;
        }
        self.initialize(key, questions());
        true
    }

    pub fn restart(&mut self) {
        info!("restarting session {}", self.key);
        self.reshuffle();
    }

    fn reshuffle(&mut self) {
        self.order = shuffled_indices(self.questions.len(), &mut self.rng);
        self.cursor = (!self.order.is_empty()).then_some(0);
        self.side = Side::Front;
        self.generation += 1;
    }

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn active_question(&self) -> Option<&'a QuestionRecord> {
        self.cursor
            .and_then(|cursor| self.order.get(cursor))
            .and_then(|index| self.questions.get(*index))
            .copied()
    }

    pub fn can_advance(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor + 1 < self.len())
    }

    pub fn can_retreat(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    fn move_to(&mut self, cursor: usize) -> Option<usize> {
        self.cursor = Some(cursor);
        self.side = Side::Front;
        debug!("session {} at card {}/{}", self.key, cursor + 1, self.len());
        self.cursor
    }

    pub fn flip(&mut self) {
        if self.cursor.is_some() {
            self.side = self.side.flipped();
        }
    }

    /// True once the answer of the final card has been revealed.
    pub fn is_complete(&self) -> bool {
        self.cursor
            .is_some_and(|cursor| cursor + 1 == self.len() && self.side == Side::Back)
    }

    /// `(current, total)` for display, one-based.
    pub fn progress(&self) -> (usize, usize) {
        match self.cursor {
            Some(cursor) => ((cursor + 1).min(self.len()), self.len()),
            None => (0, 0),
        }
    }
}

impl<'a, R: Rng> Navigator for Session<'a, R> {
    fn advance(&mut self) -> Option<usize> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.len() => self.move_to(cursor + 1),
            cursor => cursor,
        }
    }

    fn retreat(&mut self) -> Option<usize> {
        match self.cursor {
            Some(cursor) if cursor > 0 => self.move_to(cursor - 1),
            cursor => cursor,
        }
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{catalogue::QuestionRecord, selection::SessionKey};

    use super::{Navigator, Session, Side};

    fn records(len: usize) -> Vec<QuestionRecord> {
        (0..len)
            .map(|i| {
                QuestionRecord::new(format!("q{i}"), "Rust", format!("Q{i}?"), format!("A{i}."))
            })
            .collect()
    }

    fn session(records: &[QuestionRecord]) -> Session<'_, StdRng> {
        let mut session = Session::with_rng(StdRng::seed_from_u64(11));
        session.initialize(SessionKey::default(), records.iter().collect());
        session
    }

    fn assert_permutation(order: &[usize], len: usize) {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        assert!(sorted.into_iter().eq(0..len));
    }

    #[test]
    fn initialize_builds_a_permutation() {
        for len in 0..20 {
            let records = records(len);
            let session = session(&records);
            assert_permutation(session.order(), len);
            assert_eq!(session.cursor(), (len > 0).then_some(0));
            assert_eq!(session.side(), Side::Front);
        }
    }

    #[test]
    fn active_question_follows_order() {
        let records = records(6);
        let mut session = session(&records);

        for position in 0..6 {
            let expected = &records[session.order()[position]];
            assert_eq!(session.active_question(), Some(expected));
            session.advance();
        }
    }

    #[test]
    fn navigation_saturates() {
        let records = records(3);
        let mut session = session(&records);

        assert_eq!(session.retreat(), Some(0));
        assert_eq!(session.retreat(), Some(0));
        assert_eq!(session.advance(), Some(1));
        assert_eq!(session.advance(), Some(2));
        assert_eq!(session.advance(), Some(2));
        assert_eq!(session.advance(), Some(2));
        assert!(!session.can_advance());
        assert!(session.can_retreat());
    }

    #[test]
    fn moving_resets_to_front() {
        let records = records(3);
        let mut session = session(&records);

        session.flip();
        assert_eq!(session.side(), Side::Back);
        session.advance();
        assert_eq!(session.side(), Side::Front);

        session.flip();
        session.retreat();
        assert_eq!(session.side(), Side::Front);
    }

    #[test]
    fn saturated_move_keeps_flip() {
        let records = records(2);
        let mut session = session(&records);

        session.flip();
        session.retreat();
        assert_eq!(session.side(), Side::Back);
    }

    #[test]
    fn flip_toggles_without_moving() {
        let records = records(2);
        let mut session = session(&records);

        session.flip();
        session.flip();
        assert_eq!(session.side(), Side::Front);
        assert_eq!(session.cursor(), Some(0));
    }

    #[test]
    fn five_cards_to_completion() {
        let records = records(5);
        let mut session = session(&records);

        for _ in 0..4 {
            session.advance();
        }
        assert_eq!(session.progress(), (5, 5));
        assert!(!session.is_complete());

        session.flip();
        assert!(session.is_complete());

        session.flip();
        assert!(!session.is_complete());
    }

    #[test]
    fn back_of_earlier_card_is_not_complete() {
        let records = records(3);
        let mut session = session(&records);

        session.flip();
        assert!(!session.is_complete());
    }

    #[test]
    fn empty_session_is_inert() {
        let mut session = session(&[]);

        assert_eq!(session.active_question(), None);
        assert_eq!(session.advance(), None);
        assert_eq!(session.retreat(), None);
        session.flip();
        assert_eq!(session.side(), Side::Front);
        assert!(!session.is_complete());
        assert_eq!(session.progress(), (0, 0));
    }

    #[test]
    fn restart_reshuffles_from_the_start() {
        let records = records(8);
        let mut session = session(&records);
        let generation = session.generation();

        session.advance();
        session.advance();
        session.flip();
        session.restart();

        assert_eq!(session.cursor(), Some(0));
        assert_eq!(session.side(), Side::Front);
        assert_permutation(session.order(), 8);
        assert_eq!(session.generation(), generation + 1);
    }

    #[test]
    fn new_subset_discards_progress() {
        let first = records(5);
        let second = records(3);
        let mut session = Session::with_rng(StdRng::seed_from_u64(5));

        assert!(session.sync(SessionKey::from("Rust|5"), || first.iter().collect()));
        session.advance();
        session.advance();
        session.flip();

        // same subset, nothing changes
        assert!(!session.sync(SessionKey::from("Rust|5"), || second.iter().collect()));
        assert_eq!(session.cursor(), Some(2));
        assert_eq!(session.side(), Side::Back);

        assert!(session.sync(SessionKey::from("Rust|3"), || second.iter().collect()));
        assert_eq!(session.len(), 3);
        assert_eq!(session.cursor(), Some(0));
        assert_eq!(session.side(), Side::Front);
        assert_permutation(session.order(), 3);
    }
}
