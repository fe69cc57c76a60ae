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

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::catalogue::{Catalogue, QuestionRecord};

const ROWS_PER_ENTRY: usize = 3;

pub(super) fn heading(record: &QuestionRecord) -> String {
    format!("[{}] {}", record.topic, record.question)
}

/// Every catalogue question with its answer, in catalogue order.
pub(crate) struct QuestionListWidget<'a> {
    catalogue: &'a Catalogue,
    scroll: u16,
}

impl<'a> QuestionListWidget<'a> {
    pub(crate) fn new(catalogue: &'a Catalogue, scroll: u16) -> Self {
        Self { catalogue, scroll }
    }
}

/// Width the list was last wrapped to; scrolling is limited against it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct QuestionListWidgetState {
    pub(crate) list_width: u16,
}

impl StatefulWidget for QuestionListWidget<'_> {
    type State = QuestionListWidgetState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);
        state.list_width = list_area.width;

        Paragraph::new(format!(
            "Interview questions ({}) \u{b7} \u{2191}/\u{2193} scroll \u{b7} Tab cards \u{b7} q quit",
            self.catalogue.len()
        ))
        .bold()
        .block(Block::new().borders(Borders::BOTTOM))
        .render(header_area, buf);

        let mut lines = Vec::with_capacity(self.catalogue.len() * ROWS_PER_ENTRY);
        for record in self.catalogue.iter() {
            // same text as `heading`, styled per part
            lines.push(Line::from(vec![
                Span::raw(format!("[{}] ", record.topic)).cyan(),
                Span::raw(record.question.as_str()).bold(),
            ]));
            lines.push(Line::raw(record.answer.as_str()));
            lines.push(Line::default());
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(list_area, buf);
    }
}
