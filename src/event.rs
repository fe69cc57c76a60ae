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

use crossterm::event::{self, Event};

use crate::UiError;

/// Waits for the next terminal event, or until `deadline` passes.
/// With no deadline this blocks until input arrives.
pub fn next_event(deadline: Option<Instant>) -> Result<Option<Event>, UiError> {
    let Some(deadline) = deadline else {
        return Ok(Some(event::read()?));
    };

    if event::poll(deadline.saturating_duration_since(Instant::now()))? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
