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

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

pub(crate) mod widget;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum UserInput {
    Flip,
    Next,
    Previous,
    Restart,
    ToggleTopic(usize),
    SelectAllTopics,
    MoreCards,
    FewerCards,
    SwitchMode,
    Resize,
    Quit,
}

/// Keyboard equivalents of the card gestures, plus session settings.
/// Right moves to the next card and Left to the previous one, matching a
/// swipe towards the opposite side.
pub(crate) fn match_user_input(event: Event) -> Option<UserInput> {
    match event {
        Event::Key(KeyEvent {
            kind: KeyEventKind::Press,
            code,
            ..
        }) => match code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(UserInput::Flip),
            KeyCode::Right | KeyCode::Char('l') => Some(UserInput::Next),
            KeyCode::Left | KeyCode::Char('h') => Some(UserInput::Previous),
            KeyCode::Char('r') => Some(UserInput::Restart),
            KeyCode::Char(digit @ '1'..='9') => digit
                .to_digit(10)
                .map(|digit| UserInput::ToggleTopic(digit as usize - 1)),
            KeyCode::Char('a') => Some(UserInput::SelectAllTopics),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(UserInput::MoreCards),
            KeyCode::Char('-') => Some(UserInput::FewerCards),
            KeyCode::Tab => Some(UserInput::SwitchMode),
            KeyCode::Esc | KeyCode::Char('q') => Some(UserInput::Quit),
            _ => None,
        },
        Event::Resize(_, _) => Some(UserInput::Resize),
        _ => None,
    }
}
