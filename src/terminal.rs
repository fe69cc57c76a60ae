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

use std::{
    io::Stdout,
    sync::atomic::{AtomicBool, Ordering},
};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{StatefulWidget, Widget},
    Frame, Terminal,
};

use crate::UiError;

/// The terminal in raw mode on the alternate screen with mouse capture on.
/// Each layer is undone in reverse order when the wrapper is dropped, on
/// every exit path including unwinding.
pub struct TerminalWrapper {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    #[allow(unused)]
    mouse_capture: MouseCapture,
}

impl TerminalWrapper {
    pub fn new() -> Result<TerminalWrapper, UiError> {
        let raw_mode = RawMode::enable()?;
        let alt_screen = AltScreen::enter(raw_mode)?;
        let mouse_capture = MouseCapture::enable(alt_screen)?;
        let terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

        Ok(TerminalWrapper {
            terminal,
            mouse_capture,
        })
    }

    pub fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame)) -> Result<(), UiError> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }

    pub fn render_widget(&mut self, widget: impl Widget) -> Result<(), UiError> {
        self.draw(|frame| frame.render_widget(widget, frame.area()))
    }

    pub fn render_stateful_widget<W: StatefulWidget>(
        &mut self,
        widget: W,
        state: &mut W::State,
    ) -> Result<(), UiError> {
        self.draw(|frame| frame.render_stateful_widget(widget, frame.area(), state))
    }
}

static IN_USE: AtomicBool = AtomicBool::new(false);

/// Only one wrapper may own the terminal at a time.
struct Lock;

impl Lock {
    fn acquire() -> Result<Lock, UiError> {
        if IN_USE.swap(true, Ordering::AcqRel) {
            return Err(UiError::IoError(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                "Terminal is already in use",
            )));
        }
        Ok(Lock)
    }
}

impl Drop for Lock {
    fn drop(&mut self) {
        IN_USE.store(false, Ordering::Release);
    }
}

#[repr(transparent)]
struct RawMode(Lock);

impl RawMode {
    fn enable() -> Result<RawMode, UiError> {
        let lock = Lock::acquire()?;
        enable_raw_mode()?;
        Ok(RawMode(lock))
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

#[repr(transparent)]
struct AltScreen(RawMode);

impl AltScreen {
    fn enter(raw_mode: RawMode) -> Result<Self, UiError> {
        execute!(std::io::stdout(), EnterAlternateScreen)?;
        Ok(Self(raw_mode))
    }
}

impl Drop for AltScreen {
    fn drop(&mut self) {
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

#[repr(transparent)]
struct MouseCapture(AltScreen);

impl MouseCapture {
    fn enable(alt_screen: AltScreen) -> Result<Self, UiError> {
        execute!(std::io::stdout(), EnableMouseCapture)?;
        Ok(Self(alt_screen))
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
    }
}
