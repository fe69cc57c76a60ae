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

use std::process::ExitCode;

use intercards::{catalogue::CatalogueError, IntercardsError, LogError, Summary, UiError};

fn main() -> ExitCode {
    match intercards::run() {
        Ok(Summary {
            progress: (current, total),
            completed,
        }) => {
            if total == 0 {
                println!("No cards were studied");
            } else {
                println!("You reached card {current} of {total}");
            }
            if completed {
                println!("Well done!");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err {
                IntercardsError::Catalogue(err) => match err {
                    CatalogueError::DuplicateName(name) => eprintln!(
                        "DuplicateName: At least two catalogues are named \"{name}\""
                    ),
                    CatalogueError::DuplicateId(id) => {
                        eprintln!("DuplicateId: At least two questions have id \"{id}\"")
                    }
                    CatalogueError::EmptyField { id, field } => {
                        eprintln!("EmptyField: Question \"{id}\" has an empty {field}")
                    }
                    err @ (CatalogueError::Io(..) | CatalogueError::Serde(..)) => {
                        eprintln!("{err}")
                    }
                },
                IntercardsError::Ui(UiError::IoError(err)) => eprintln!("UiError: IoError: {err}"),
                IntercardsError::Log(err) => match err {
                    LogError::IoError(path, err) => eprintln!(
                        "LogError: IoError: {err}, path: {}",
                        path.to_str().unwrap_or("unknown")
                    ),
                    LogError::Init(err) => eprintln!("LogError: {err}"),
                },
                IntercardsError::Panic(msg) => eprintln!("Panicked: {msg}"),
            }
            ExitCode::FAILURE
        }
    }
}
