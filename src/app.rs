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

use std::time::Instant;

use crossterm::event::{Event, MouseEvent};
use log::debug;

use crate::{
    catalogue::Catalogue,
    event::next_event,
    geometry::CellScale,
    gesture::{GestureController, Release},
    input::{IntoGestureInput, PointerSample},
    modes::{
        cards::{self, widget::CardSessionWidget, widget::CardSessionWidgetState, UserInput},
        list::{
            self,
            widget::{QuestionListWidget, QuestionListWidgetState},
            ListInput,
        },
    },
    selection::Selection,
    session::{Navigator, Session},
    terminal::TerminalWrapper,
    IntercardsError, Mode, Summary,
};

/// Everything the event loop mutates. The catalogue is borrowed for the
/// whole run; selection and session borrow records out of it.
pub(crate) struct App<'a> {
    catalogue: &'a Catalogue,
    mode: Mode,
    selection: Selection<'a>,
    session: Session<'a>,
    gesture: GestureController,
    scale: CellScale,
    list_scroll: u16,
    list_state: QuestionListWidgetState,
    quit: bool,
}

impl<'a> App<'a> {
    pub(crate) fn new(catalogue: &'a Catalogue, selection: Selection<'a>, mode: Mode) -> Self {
        let mut app = Self {
            catalogue,
            mode,
            selection,
            session: Session::new(),
            gesture: GestureController::default(),
            scale: CellScale::default(),
            list_scroll: 0,
            list_state: QuestionListWidgetState::default(),
            quit: false,
        };
        app.sync_session();
        app
    }

    /// Starts a new session whenever the selection names a different subset.
    /// A swipe in flight belongs to the old session and is dropped.
    fn sync_session(&mut self) {
        let selection = &self.selection;
        if self
            .session
            .sync(selection.session_key(), || selection.session_questions())
        {
            self.gesture.cancel();
        }
    }

    fn summary(&self) -> Summary {
        Summary {
            progress: self.session.progress(),
            completed: self.session.is_complete(),
        }
    }

    fn handle_event(&mut self, event: Event, layout: &CardSessionWidgetState, now: Instant) {
        match self.mode {
            Mode::Cards => match event {
                Event::Mouse(mouse) => self.handle_mouse(mouse, layout, now),
                event => {
                    if let Some(input) = cards::match_user_input(event) {
                        self.handle_card_input(input);
                    }
                }
            },
            Mode::List => {
                if let Some(input) = list::match_user_input(event) {
                    self.handle_list_input(input);
                }
            }
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent, layout: &CardSessionWidgetState, now: Instant) {
        if self.session.is_empty() {
            return;
        }

        let sample = PointerSample {
            event,
            card: layout.card_area,
            surface: layout.stage_area,
            scale: self.scale,
        };
        let Some(input) = sample.into_gesture_input() else {
            return;
        };

        // a release that never became a swipe reaches the card as a click
        if let Some(Release::Cancelled) = self.gesture.handle(input, now, &self.session) {
            if self.gesture.click() {
                self.session.flip();
            }
        }
    }

    fn handle_card_input(&mut self, input: UserInput) {
        let exiting = self.gesture.is_exiting();

        match input {
            UserInput::Flip if !exiting => self.session.flip(),
            // a drag belongs to the card it started on
            UserInput::Next if !exiting => {
                self.gesture.cancel();
                self.session.advance();
            }
            UserInput::Previous if !exiting => {
                self.gesture.cancel();
                self.session.retreat();
            }
            UserInput::Flip | UserInput::Next | UserInput::Previous => {
                debug!("ignoring {input:?} during swipe");
            }
            UserInput::Restart => {
                self.gesture.cancel();
                self.session.restart();
            }
            UserInput::ToggleTopic(index) => self.selection.toggle_topic(index),
            UserInput::SelectAllTopics => self.selection.select_all(),
            UserInput::MoreCards => self.selection.set_count(self.selection.count() + 1),
            UserInput::FewerCards => self
                .selection
                .set_count(self.selection.count().saturating_sub(1)),
            UserInput::SwitchMode => self.switch_mode(),
            UserInput::Resize => {}
            UserInput::Quit => self.quit = true,
        }
    }

    fn handle_list_input(&mut self, input: ListInput) {
        let max_scroll = list::line_count(self.catalogue, self.list_state.list_width);
        match input {
            ListInput::Up(rows) => self.list_scroll = self.list_scroll.saturating_sub(rows),
            ListInput::Down(rows) => {
                self.list_scroll = self.list_scroll.saturating_add(rows).min(max_scroll)
            }
            ListInput::Top => self.list_scroll = 0,
            ListInput::SwitchMode => self.switch_mode(),
            ListInput::Resize => {}
            ListInput::Quit => self.quit = true,
        }
    }

    fn switch_mode(&mut self) {
        // the card is no longer on screen
        self.gesture.cancel();
        self.mode = self.mode.toggled();
    }
}

pub(crate) fn run_app(term: &mut TerminalWrapper, mut app: App) -> Result<Summary, IntercardsError> {
    let mut layout = CardSessionWidgetState::default();

    while !app.quit {
        app.sync_session();

        match app.mode {
            Mode::Cards => {
                let widget = CardSessionWidget::new(
                    &app.session,
                    &app.selection,
                    app.gesture.motion(),
                    app.gesture.config(),
                    app.scale,
                );
                term.render_stateful_widget(widget, &mut layout)?;
                app.gesture
                    .set_card_width(app.scale.width_units(layout.card_area.width));
            }
            Mode::List => {
                term.render_stateful_widget(
                    QuestionListWidget::new(app.catalogue, app.list_scroll),
                    &mut app.list_state,
                )?
            }
        }

        if let Some(event) = next_event(app.gesture.deadline())? {
            app.handle_event(event, &layout, Instant::now());
        }

        if let Some(direction) = app.gesture.tick(Instant::now(), &mut app.session) {
            debug!("swipe {direction:?} landed at {:?}", app.session.progress());
        }
    }

    Ok(app.summary())
}
