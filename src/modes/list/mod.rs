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

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use crate::{catalogue::Catalogue, render_utils::wrapped_height};

pub(crate) mod widget;

const PAGE_ROWS: u16 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ListInput {
    Up(u16),
    Down(u16),
    Top,
    SwitchMode,
    Resize,
    Quit,
}

pub(crate) fn match_user_input(event: Event) -> Option<ListInput> {
    match event {
        Event::Key(KeyEvent {
            kind: KeyEventKind::Press,
            code,
            ..
        }) => match code {
            KeyCode::Up | KeyCode::Char('k') => Some(ListInput::Up(1)),
            KeyCode::Down | KeyCode::Char('j') => Some(ListInput::Down(1)),
            KeyCode::PageUp => Some(ListInput::Up(PAGE_ROWS)),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(ListInput::Down(PAGE_ROWS)),
            KeyCode::Home | KeyCode::Char('g') => Some(ListInput::Top),
            KeyCode::Tab => Some(ListInput::SwitchMode),
            KeyCode::Esc | KeyCode::Char('q') => Some(ListInput::Quit),
            _ => None,
        },
        Event::Mouse(MouseEvent { kind, .. }) => match kind {
            MouseEventKind::ScrollUp => Some(ListInput::Up(3)),
            MouseEventKind::ScrollDown => Some(ListInput::Down(3)),
            _ => None,
        },
        Event::Resize(_, _) => Some(ListInput::Resize),
        _ => None,
    }
}

/// Rows the whole list takes when wrapped to `width` columns, which is as far
/// as it can be scrolled.
pub(crate) fn line_count(catalogue: &Catalogue, width: u16) -> u16 {
    let rows = catalogue.iter().fold(0usize, |rows, record| {
        rows + wrapped_height(&widget::heading(record), width) as usize
            + wrapped_height(&record.answer, width) as usize
            + 1
    });
    rows.min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

    use crate::catalogue::{Catalogue, QuestionRecord};

    use super::{line_count, match_user_input, ListInput};

    #[test]
    fn scrolling_keys() {
        let press = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        assert_eq!(match_user_input(press(KeyCode::Down)), Some(ListInput::Down(1)));
        assert_eq!(match_user_input(press(KeyCode::Char('k'))), Some(ListInput::Up(1)));
        assert_eq!(match_user_input(press(KeyCode::Tab)), Some(ListInput::SwitchMode));

        let wheel = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(match_user_input(wheel), Some(ListInput::Down(3)));
    }

    #[test]
    fn line_count_covers_every_entry() {
        let catalogue = Catalogue::new(vec![
            QuestionRecord::new("a", "Rust", "Q?", "A."),
            QuestionRecord::new("b", "Rust", "Q?", "A."),
        ])
        .expect("Unable to build catalogue");
        assert_eq!(line_count(&catalogue, 80), 6);
    }

    #[test]
    fn line_count_includes_wrapped_rows() {
        let answer = "word ".repeat(30);
        let catalogue = Catalogue::new(vec![
            QuestionRecord::new("a", "Rust", "Q?", answer.trim()),
            QuestionRecord::new("b", "Rust", "Q?", "A."),
        ])
        .expect("Unable to build catalogue");
        // 149 columns of answer wrap to 8 rows at width 20
        assert_eq!(line_count(&catalogue, 20), 1 + 8 + 1 + 1 + 1 + 1);
        assert_eq!(line_count(&catalogue, 0), 2);
    }
}
