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

//! Mouse and touch input reduced to one stream of gesture samples, so the
//! gesture controller never needs to know which device produced them.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::geometry::{CellScale, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureInput {
    Press(Point),
    Move(Point),
    Release(Point),
    /// The pointer left the card surface without releasing.
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A touch event as delivered by a touch surface: the touches still down,
/// and the ones that changed in this event.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: Vec<Point>,
    pub changed_touches: Vec<Point>,
}

pub trait IntoGestureInput {
    fn into_gesture_input(self) -> Option<GestureInput>;
}

impl IntoGestureInput for TouchEvent {
    fn into_gesture_input(self) -> Option<GestureInput> {
        match self.phase {
            TouchPhase::Start => self.touches.first().copied().map(GestureInput::Press),
            TouchPhase::Move => self.touches.first().copied().map(GestureInput::Move),
            // an end with no lifted touch still ends the gesture
            TouchPhase::End => Some(
                self.changed_touches
                    .first()
                    .copied()
                    .map_or(GestureInput::Leave, GestureInput::Release),
            ),
            TouchPhase::Cancel => Some(GestureInput::Leave),
        }
    }
}

/// A terminal mouse event together with the regions it is judged against.
/// Presses only start on `card`. The drawn card follows the pointer, so it is
/// only left when the pointer leaves `surface`, which is a leave.
pub struct PointerSample {
    pub event: MouseEvent,
    pub card: Rect,
    pub surface: Rect,
    pub scale: CellScale,
}

impl IntoGestureInput for PointerSample {
    fn into_gesture_input(self) -> Option<GestureInput> {
        let MouseEvent {
            kind, column, row, ..
        } = self.event;
        let position = Position::new(column, row);
        let point = self.scale.point(column, row);

        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.card.contains(position).then_some(GestureInput::Press(point))
            }
            MouseEventKind::Drag(MouseButton::Left) => Some(if self.surface.contains(position) {
                GestureInput::Move(point)
            } else {
                GestureInput::Leave
            }),
            MouseEventKind::Up(MouseButton::Left) => Some(GestureInput::Release(point)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::layout::Rect;

    use crate::geometry::{CellScale, Point};

    use super::{GestureInput, IntoGestureInput, PointerSample, TouchEvent, TouchPhase};

    fn pointer(kind: MouseEventKind, column: u16, row: u16) -> Option<GestureInput> {
        PointerSample {
            event: MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
            card: Rect::new(10, 5, 20, 10),
            surface: Rect::new(0, 2, 60, 20),
            scale: CellScale::default(),
        }
        .into_gesture_input()
    }

    #[test]
    fn press_only_on_card() {
        assert_eq!(
            pointer(MouseEventKind::Down(MouseButton::Left), 12, 6),
            Some(GestureInput::Press(Point::new(96.0, 96.0)))
        );
        assert_eq!(pointer(MouseEventKind::Down(MouseButton::Left), 2, 6), None);
        assert_eq!(pointer(MouseEventKind::Down(MouseButton::Right), 12, 6), None);
    }

    #[test]
    fn drag_off_surface_leaves() {
        assert_eq!(
            pointer(MouseEventKind::Drag(MouseButton::Left), 40, 6),
            Some(GestureInput::Move(Point::new(320.0, 96.0)))
        );
        assert_eq!(
            pointer(MouseEventKind::Drag(MouseButton::Left), 40, 0),
            Some(GestureInput::Leave)
        );
    }

    #[test]
    fn release_anywhere() {
        assert_eq!(
            pointer(MouseEventKind::Up(MouseButton::Left), 70, 30),
            Some(GestureInput::Release(Point::new(560.0, 480.0)))
        );
        assert_eq!(pointer(MouseEventKind::Moved, 12, 6), None);
    }

    #[test]
    fn touch_normalizes_like_pointer() {
        let touch = |phase, touches: Vec<Point>, changed_touches: Vec<Point>| {
            TouchEvent {
                phase,
                touches,
                changed_touches,
            }
            .into_gesture_input()
        };
        let at = Point::new(5.0, 7.0);

        assert_eq!(
            touch(TouchPhase::Start, vec![at], vec![at]),
            Some(GestureInput::Press(at))
        );
        assert_eq!(
            touch(TouchPhase::Move, vec![at], vec![at]),
            Some(GestureInput::Move(at))
        );
        // the lifted finger is only in changed_touches
        assert_eq!(
            touch(TouchPhase::End, vec![], vec![at]),
            Some(GestureInput::Release(at))
        );
        assert_eq!(
            touch(TouchPhase::End, vec![], vec![]),
            Some(GestureInput::Leave)
        );
        assert_eq!(touch(TouchPhase::Move, vec![], vec![]), None);
        assert_eq!(
            touch(TouchPhase::Cancel, vec![], vec![]),
            Some(GestureInput::Leave)
        );
    }
}
