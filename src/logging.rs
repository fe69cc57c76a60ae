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

use std::{fs::File, path::Path, path::PathBuf};

use env_logger::{Builder, Env, Target};
use log::SetLoggerError;
use thiserror::Error;

const LOG_ENV: &str = "INTERCARDS_LOG";
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum LogError {
    #[error("IoError: {}, path: {}", .1, .0.display())]
    IoError(PathBuf, std::io::Error),
    #[error("Init: {0}")]
    Init(#[from] SetLoggerError),
}

/// Sends log output to `path`. The terminal owns stdout/stderr while the UI
/// is up, so logging to a file is the only useful target.
pub fn init(path: &Path) -> Result<(), LogError> {
    let file = File::create(path).map_err(|err| LogError::IoError(path.to_owned(), err))?;

    Builder::from_env(Env::default().filter_or(LOG_ENV, DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
