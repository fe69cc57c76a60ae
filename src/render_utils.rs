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

use ratatui::{layout::Rect, text::Line};

/// Rows `text` occupies when wrapped to `width` columns.
pub(crate) fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }

    let rows = text.lines().fold(0usize, |total, line| {
        let columns = Line::raw(line).width();
        total + columns.div_ceil(width as usize).max(1)
    });

    rows.min(u16::MAX as usize) as u16
}

/// Shrinks `area` to the rows `text` needs, centred vertically. Text taller
/// than `area` keeps the whole area.
pub(crate) fn vertically_centered_area(area: Rect, text: &str) -> Rect {
    let mut area = area;
    let rows = wrapped_height(text, area.width);

    if rows < area.height {
        area.y += (area.height - rows) / 2;
        area.height = rows;
    }

    area
}
