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

use std::ops::{Add, Sub};

use ratatui::layout::Rect;

/// A position in gesture units. Terminal input arrives in cells and is scaled
/// through [`CellScale`] so thresholds read the same as on a pixel surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Displacement of the card from its resting position.
pub type Offset = Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellScale {
    pub width: f64,
    pub height: f64,
}

impl CellScale {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn point(&self, column: u16, row: u16) -> Point {
        Point::new(column as f64 * self.width, row as f64 * self.height)
    }

    pub fn width_units(&self, columns: u16) -> f64 {
        columns as f64 * self.width
    }

    /// Moves `area` by `offset`, rounded to whole cells and clipped to
    /// `bounds`. `None` once the card has left `bounds` entirely.
    pub fn translate(&self, area: Rect, offset: Offset, bounds: Rect) -> Option<Rect> {
        let dx = (offset.x / self.width).round() as i32;
        let dy = (offset.y / self.height).round() as i32;

        let left = (area.x as i32 + dx).max(bounds.left() as i32);
        let top = (area.y as i32 + dy).max(bounds.top() as i32);
        let right = (area.right() as i32 + dx).min(bounds.right() as i32);
        let bottom = (area.bottom() as i32 + dy).min(bounds.bottom() as i32);

        (right > left && bottom > top).then(|| {
            Rect::new(
                left as u16,
                top as u16,
                (right - left) as u16,
                (bottom - top) as u16,
            )
        })
    }
}

impl Default for CellScale {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}
