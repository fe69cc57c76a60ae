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

use std::{fmt::Display, panic::AssertUnwindSafe, str::FromStr};

use clap::Parser;
use log::info;
use thiserror::Error;

use app::App;
use catalogue::{load_catalogue, CatalogueError};
use selection::Selection;
use terminal::TerminalWrapper;

mod app;
pub mod catalogue;
mod cli;
mod color;
mod event;
pub mod geometry;
pub mod gesture;
pub mod input;
mod logging;
mod modes;
mod random;
mod render_utils;
pub mod selection;
pub mod session;
mod terminal;

pub use logging::LogError;

pub fn run() -> Result<Summary, IntercardsError> {
    let cli = cli::IntercardsCli::parse();

    if let Some(path) = cli.log_file.as_ref() {
        logging::init(path)?;
    }

    let catalogue = load_catalogue(cli.paths)?;
    let mut selection = Selection::new(&catalogue).with_topics(&cli.topics);
    if let Some(count) = cli.card_count {
        selection = selection.with_count(count);
    }
    info!(
        "{} questions in {} topics, studying {}",
        catalogue.len(),
        catalogue.topics().len(),
        selection.label()
    );

    let app = App::new(&catalogue, selection, cli.mode);

    std::panic::catch_unwind(AssertUnwindSafe(|| -> Result<Summary, IntercardsError> {
        //NOTE: From this point, stdout/stderr will not be usable, hence we
        //need to catch any panics, since they are not loggable. Mapping to
        //IntercardsError allows us to gracefully exit and report the panic.
        let term = &mut TerminalWrapper::new()?;
        app::run_app(term, app)
    }))
    .map_err(|err| {
        IntercardsError::Panic(if let Some(msg) = err.downcast_ref::<String>() {
            msg.clone()
        } else if let Some(msg) = err.downcast_ref::<&str>() {
            (*msg).to_owned()
        } else {
            "Unknown panic occurred".to_owned()
        })
    })?
}

/// Where the user stood in the card session when the program exited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub progress: (usize, usize),
    pub completed: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    List,
    #[default]
    Cards,
}

impl Mode {
    fn toggled(self) -> Self {
        match self {
            Mode::List => Mode::Cards,
            Mode::Cards => Mode::List,
        }
    }
}

impl FromStr for Mode {
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(Self::List),
            "cards" => Ok(Self::Cards),
            s => Err(format!("Mode argument not recognized: {s}")),
        }
    }

    type Err = String;
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mode::List => "list",
            Mode::Cards => "cards",
        })
    }
}

#[derive(Debug, Error)]
pub enum IntercardsError {
    #[error("Catalogue: {0}")]
    Catalogue(#[from] CatalogueError),
    #[error("Ui: {0}")]
    Ui(#[from] UiError),
    #[error("Log: {0}")]
    Log(#[from] LogError),
    #[error("Panicked: {0}")]
    Panic(String),
}

#[derive(Debug, Error)]
pub enum UiError {
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::Mode;

    #[test]
    fn mode_round_trips_through_str() {
        assert_eq!("LIST".parse::<Mode>(), Ok(Mode::List));
        assert_eq!(Mode::Cards.to_string().parse::<Mode>(), Ok(Mode::Cards));
        assert!("grid".parse::<Mode>().is_err());
    }
}
