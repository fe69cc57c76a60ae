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

use std::path::PathBuf;

use clap::Parser;

use crate::Mode;

#[derive(Parser, Debug)]
#[command(name = "intercards", version = env!("CARGO_PKG_VERSION"))]
pub struct IntercardsCli {
    #[arg(short = 'c', long = "count", value_name = "CARD_COUNT", help = "Number of cards to study.", long_help = COUNT_HELP)]
    pub card_count: Option<usize>,
    #[arg(
        short = 't',
        long = "topic",
        value_name = "TOPIC",
        help = "Topics to study.",
        long_help = TOPIC_HELP
    )]
    pub topics: Vec<String>,
    #[arg(short = 'm', long = "mode", default_value_t = Mode::Cards, value_name = "MODE", help = "Starting mode", long_help = MODE_HELP)]
    pub mode: Mode,
    #[arg(long = "log-file", value_name = "PATH", help = "Write logs to a file", long_help = LOG_FILE_HELP)]
    pub log_file: Option<PathBuf>,
    #[arg(help = "Catalogue JSON file/dir paths", long_help = PATHS_HELP)]
    pub paths: Vec<PathBuf>,
}

const COUNT_HELP: &str = r#"Number of cards to study. Clamped to the number of questions available for the selected topics. Defaults to 10."#;
const TOPIC_HELP: &str = r#"Topics to study, case-insensitive. Unknown topics are ignored; if none match, every topic is studied.
Example Usage: intercards -t Rust -t Databases ./questions"#;
const MODE_HELP: &str = r#"Starting mode. Switch at any time with Tab. Possible values:
    cards   - Shuffled flashcards, one question at a time
    list    - Every question with its answer"#;
const LOG_FILE_HELP: &str = r#"Write logs to this file. The level is read from the INTERCARDS_LOG environment variable and defaults to info."#;
const PATHS_HELP: &str = r#"Paths to load question catalogues from. Can be individual files or directories. If omitted, questions are read from the user config directory (intercards/questions), falling back to a built-in set."#;
