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

use rand::{rngs::ThreadRng, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::{
    color::Color,
    geometry::CellScale,
    gesture::{CardMotion, GestureConfig, SwipeDirection},
    render_utils::vertically_centered_area,
    selection::Selection,
    session::{Session, Side},
};

const MAX_CARD_WIDTH: u16 = 64;
const MAX_CARD_HEIGHT: u16 = 14;

const FRONT_HINT: &str = "Click or press Space to see the answer";
const BACK_HINT: &str = "Swipe or use \u{2190}/\u{2192} to move on";
const EMPTY_MESSAGE: &str =
    "No cards match the current filters. Change the settings to continue.";
const COMPLETE_MESSAGE: &str = "You've seen every card! Press r to start over.";
const KEY_HINTS: &str =
    "Space flip \u{b7} \u{2190}/\u{2192} move \u{b7} r shuffle \u{b7} 1-9 topics \u{b7} a all \u{b7} +/- count \u{b7} Tab list \u{b7} q quit";

pub(crate) struct CardSessionWidget<'a, 'b, R = ThreadRng> {
    session: &'b Session<'a, R>,
    selection: &'b Selection<'a>,
    motion: CardMotion,
    config: &'b GestureConfig,
    scale: CellScale,
}

impl<'a, 'b, R: Rng> CardSessionWidget<'a, 'b, R> {
    pub(crate) fn new(
        session: &'b Session<'a, R>,
        selection: &'b Selection<'a>,
        motion: CardMotion,
        config: &'b GestureConfig,
        scale: CellScale,
    ) -> Self {
        Self {
            session,
            selection,
            motion,
            config,
            scale,
        }
    }

    fn border_color(&self) -> Color {
        let dx = self.motion.offset.x;
        let target = match SwipeDirection::from_dx(dx) {
            SwipeDirection::Next => Color::NEXT,
            SwipeDirection::Previous => Color::PREVIOUS,
        };
        let pct = if self.motion.exiting {
            1.0
        } else {
            dx.abs() / self.config.commit_threshold
        };
        Color::CARD.blend_with(target, pct)
    }

    fn render_settings(&self, area: Rect, buf: &mut Buffer) {
        let mut topics = vec![Span::raw("Topics: ")];
        for (index, topic) in self.selection.topics().iter().enumerate() {
            let mark = if self.selection.is_selected(index) {
                "[x]"
            } else {
                "[ ]"
            };
            let number = if index < 9 {
                format!("{} ", index + 1)
            } else {
                String::new()
            };
            topics.push(Span::raw(format!("{mark} {number}{topic}  ")));
        }

        let count = Line::from(format!(
            "Cards: {} of {} available",
            self.selection.count(),
            self.selection.pool_size()
        ));

        Paragraph::new(vec![Line::from(topics), count])
            .wrap(Wrap { trim: true })
            .block(Block::new().borders(Borders::BOTTOM))
            .render(area, buf);
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let (current, total) = self.session.progress();
        let [title_area, progress_area] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(12)]).areas(area);

        Paragraph::new(format!("Interview mode \u{b7} {}", self.selection.label()))
            .bold()
            .render(title_area, buf);
        Paragraph::new(format!("{current} / {total}"))
            .right_aligned()
            .render(progress_area, buf);
    }

    fn render_card(&self, card_area: Rect, stage_area: Rect, buf: &mut Buffer) {
        let Some(question) = self.session.active_question() else {
            return;
        };
        let Some(area) = self.scale.translate(card_area, self.motion.offset, stage_area) else {
            return;
        };

        let mut border_style = Style::new().fg(self.border_color().into());
        if self.motion.dragging {
            border_style = border_style.add_modifier(Modifier::BOLD);
        }
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(format!(" {} ", question.topic)).bold());

        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);

        let (text, hint) = match self.session.side() {
            Side::Front => (question.question.as_str(), FRONT_HINT),
            Side::Back => (question.answer.as_str(), BACK_HINT),
        };

        let [text_area, hint_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let mut text_style = Style::new();
        if self.motion.exiting {
            text_style = text_style.add_modifier(Modifier::DIM);
        }
        Paragraph::new(text)
            .style(text_style)
            .wrap(Wrap { trim: false })
            .centered()
            .render(vertically_centered_area(text_area, text), buf);
        Paragraph::new(hint)
            .italic()
            .dim()
            .centered()
            .render(hint_area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let footer = if self.session.is_complete() {
            Paragraph::new(COMPLETE_MESSAGE)
                .fg(Color::DONE)
                .bold()
        } else {
            Paragraph::new(KEY_HINTS).dim()
        };
        footer.wrap(Wrap { trim: true }).centered().render(area, buf);
    }
}

/// Where the card and the surface it can be dragged over were drawn. Mouse
/// input is judged against the last frame's areas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct CardSessionWidgetState {
    pub(crate) card_area: Rect,
    pub(crate) stage_area: Rect,
}

impl<R: Rng> StatefulWidget for CardSessionWidget<'_, '_, R> {
    type State = CardSessionWidgetState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [settings_area, header_area, stage_area, footer_area] = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(2),
            ],
        )
        .areas(area);

        self.render_settings(settings_area, buf);
        self.render_header(header_area, buf);
        self.render_footer(footer_area, buf);

        state.stage_area = stage_area;

        if self.session.is_empty() {
            state.card_area = Rect::default();
            Paragraph::new(EMPTY_MESSAGE)
                .wrap(Wrap { trim: true })
                .centered()
                .render(vertically_centered_area(stage_area, EMPTY_MESSAGE), buf);
            return;
        }

        let card_area = centered_card_area(stage_area);
        state.card_area = card_area;
        self.render_card(card_area, stage_area, buf);
    }
}

fn centered_card_area(stage: Rect) -> Rect {
    let width = stage.width.saturating_sub(4).min(MAX_CARD_WIDTH);
    let height = stage.height.saturating_sub(2).min(MAX_CARD_HEIGHT);

    Rect::new(
        stage.x + (stage.width - width) / 2,
        stage.y + (stage.height - height) / 2,
        width,
        height,
    )
}
