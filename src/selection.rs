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

use std::fmt::Display;

use crate::catalogue::{Catalogue, QuestionRecord};

const DEFAULT_CARD_COUNT: usize = 10;

pub const ALL_TOPICS_LABEL: &str = "All topics";

/// Identity of a session's question subset. Two selections with equal keys
/// yield the same questions in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl From<&str> for SessionKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which topics are studied and how many cards are drawn from them. Every
/// derived value (pool, session questions, key, label) is recomputed from
/// the catalogue on demand rather than stored.
pub struct Selection<'a> {
    catalogue: &'a Catalogue,
    /// Indices into `catalogue.topics()`, kept sorted.
    selected: Vec<usize>,
    count: usize,
}

impl<'a> Selection<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        let selected = (0..catalogue.topics().len()).collect();
        let mut selection = Self {
            catalogue,
            selected,
            count: 0,
        };
        selection.count = DEFAULT_CARD_COUNT.min(selection.pool_size());
        selection
    }

    /// Restricts the selection to the named topics. Unknown names are ignored;
    /// if none match, every topic stays selected.
    pub fn with_topics<S: AsRef<str>>(mut self, topics: &[S]) -> Self {
        let selected = self
            .topics()
            .iter()
            .enumerate()
            .filter(|(_, topic)| {
                topics
                    .iter()
                    .any(|wanted| wanted.as_ref().eq_ignore_ascii_case(topic))
            })
            .map(|(index, _)| index)
            .collect::<Vec<_>>();

        if !selected.is_empty() {
            let previous_pool = self.pool_size();
            self.selected = selected;
            self.pool_changed(previous_pool);
        }
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.set_count(count);
        self
    }

    pub fn topics(&self) -> &'a [String] {
        self.catalogue.topics()
    }

    pub fn is_selected(&self, topic_index: usize) -> bool {
        self.selected.binary_search(&topic_index).is_ok()
    }

    pub fn selected_topics(&self) -> impl Iterator<Item = &'a String> + '_ {
        let topics = self.topics();
        self.selected.iter().map(move |index| &topics[*index])
    }

    pub fn all_selected(&self) -> bool {
        self.selected.len() == self.topics().len()
    }

    /// Adds or removes a topic. The last selected topic cannot be removed.
    pub fn toggle_topic(&mut self, topic_index: usize) {
        if topic_index >= self.topics().len() {
            return;
        }

        let previous_pool = self.pool_size();
        match self.selected.binary_search(&topic_index) {
            Ok(_) if self.selected.len() == 1 => return,
            Ok(position) => {
                self.selected.remove(position);
            }
            Err(position) => self.selected.insert(position, topic_index),
        }
        self.pool_changed(previous_pool);
    }

    pub fn select_all(&mut self) {
        let previous_pool = self.pool_size();
        self.selected = (0..self.topics().len()).collect();
        self.pool_changed(previous_pool);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Clamps `count` to `[1, pool]`, or to zero when the pool is empty.
    pub fn set_count(&mut self, count: usize) {
        let available = self.pool_size();
        self.count = if available == 0 {
            0
        } else {
            count.clamp(1, available)
        };
    }

    fn pool_changed(&mut self, previous_pool: usize) {
        let available = self.pool_size();
        if available == previous_pool {
            return;
        }

        self.count = match (available, self.count) {
            (0, _) => 0,
            (available, 0) => DEFAULT_CARD_COUNT.min(available),
            (available, count) => count.min(available),
        };
    }

    /// Questions on a selected topic, in catalogue order.
    pub fn pool(&self) -> impl Iterator<Item = &'a QuestionRecord> + '_ {
        let catalogue = self.catalogue;
        catalogue.iter().filter(move |record| {
            self.selected_topics()
                .any(|topic| topic == &record.topic)
        })
    }

    pub fn pool_size(&self) -> usize {
        self.pool().count()
    }

    pub fn session_questions(&self) -> Vec<&'a QuestionRecord> {
        self.pool().take(self.count).collect()
    }

    pub fn session_key(&self) -> SessionKey {
        let mut key = self
            .selected_topics()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("|");
        key.push('|');
        key.push_str(&self.count.to_string());
        SessionKey(key)
    }

    pub fn label(&self) -> String {
        if self.all_selected() {
            ALL_TOPICS_LABEL.to_owned()
        } else {
            self.selected_topics()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}
