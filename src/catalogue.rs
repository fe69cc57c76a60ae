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
    ffi::OsStr,
    fmt::Debug,
    fs,
    ops::Deref,
    path::{Path, PathBuf},
};

use hashbrown::HashSet;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

///A single interview question. Records are owned by the [`Catalogue`] and only
///ever borrowed by sessions.
///
///Example:
///```
///# use intercards::catalogue::CatalogueFile;
///let json = r#"{
///  "name": "Backend",
///  "questions": [
///    {"id": "http-1", "topic": "HTTP", "question": "What is idempotency?", "answer": "Repeating a request has the same effect as sending it once."}
///  ]
///}"#;
///assert!(serde_json::from_str::<CatalogueFile>(json)
///  .is_ok_and(|file| file.name == "Backend" && file.questions.len() == 1));
///```
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct QuestionRecord {
    pub id: String,
    pub topic: String,
    pub question: String,
    pub answer: String,
}

impl QuestionRecord {
    pub fn new(
        id: impl Into<String>,
        topic: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            topic: topic.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }

    fn blank_field(&self) -> Option<&'static str> {
        [
            ("id", &self.id),
            ("topic", &self.topic),
            ("question", &self.question),
            ("answer", &self.answer),
        ]
        .into_iter()
        .find_map(|(name, value)| value.trim().is_empty().then_some(name))
    }
}

///On-disk shape of one catalogue file.
#[derive(Serialize, Deserialize)]
pub struct CatalogueFile {
    pub name: String,
    pub questions: Vec<QuestionRecord>,
}

impl Debug for CatalogueFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogueFile")
            .field("name", &self.name)
            .field("questions", &self.questions.len())
            .finish()
    }
}

///Every loaded question in load order, plus the topics they span.
#[derive(Debug, Default)]
pub struct Catalogue {
    questions: Vec<QuestionRecord>,
    topics: Vec<String>,
}

impl Catalogue {
    pub fn new(questions: Vec<QuestionRecord>) -> Result<Self, CatalogueError> {
        validate_questions(&questions)?;
        let topics = sorted_topics(&questions);
        Ok(Self { questions, topics })
    }

    pub fn builtin() -> Result<Self, CatalogueError> {
        let path = PathBuf::from("<builtin>");
        let file: CatalogueFile = serde_json::from_str(BUILTIN_CATALOGUE)
            .map_err(|err| CatalogueError::Serde(path, err))?;
        Self::new(file.questions)
    }

    ///Unique topics, sorted case-insensitively.
    pub fn topics(&self) -> &[String] {
        &self.topics
    }
}

impl Deref for Catalogue {
    type Target = [QuestionRecord];

    fn deref(&self) -> &Self::Target {
        &self.questions
    }
}

const BUILTIN_CATALOGUE: &str = include_str!("../data/questions.json");

const DEFAULT_CONFIG_CATALOGUE_PATH: &str = "intercards/questions";

fn sorted_topics(questions: &[QuestionRecord]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(questions.len());
    let mut topics = questions
        .iter()
        .filter(|record| seen.insert(record.topic.as_str()))
        .map(|record| record.topic.clone())
        .collect::<Vec<_>>();
    topics.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    topics
}

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("IoError: {}, path: {}", .1, .0.display())]
    Io(PathBuf, std::io::Error),
    #[error("SerdeError: {}, path: {}", .1, .0.display())]
    Serde(PathBuf, serde_json::Error),
    #[error("DuplicateName: At least two catalogues loaded have the same name, {0}")]
    DuplicateName(String),
    #[error("DuplicateId: More than one question has the id \"{0}\"")]
    DuplicateId(String),
    #[error("EmptyField: Question \"{id}\" has an empty {field}")]
    EmptyField { id: String, field: &'static str },
}

///Loads every catalogue file reachable from `paths`. With no paths, the user's
///config directory is tried before falling back to the built-in questions.
pub fn load_catalogue<P: Into<PathBuf>>(
    paths: impl IntoIterator<Item = P>,
) -> Result<Catalogue, CatalogueError> {
    let mut paths = paths.into_iter().map(Into::<PathBuf>::into).peekable();

    if paths.peek().is_none() {
        return match default_catalogue_dir() {
            Some(dir) => {
                info!("loading catalogue from {}", dir.display());
                load_catalogue([dir])
            }
            None => {
                info!("no catalogue paths given, using built-in questions");
                Catalogue::builtin()
            }
        };
    }

    let files = paths.try_fold(vec![], |mut files, path| {
        files.extend(load_files_from_path(path)?.into_iter().flatten());
        Ok::<_, CatalogueError>(files)
    })?;

    validate_files(&files)?;

    let questions = files
        .into_iter()
        .flat_map(|file| file.questions)
        .collect::<Vec<_>>();

    info!("loaded {} questions", questions.len());
    Catalogue::new(questions)
}

fn default_catalogue_dir() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(DEFAULT_CONFIG_CATALOGUE_PATH);
    path.is_dir().then_some(path)
}

fn load_files_from_path(path: PathBuf) -> Result<Option<Vec<CatalogueFile>>, CatalogueError> {
    let metadata = fs::metadata(&path).map_err(|err| CatalogueError::Io(path.clone(), err))?;

    if metadata.is_dir() {
        load_files_from_dir(path).map(Some)
    } else if file_extension(&path).is_some_and(|ext| ext.to_lowercase() == "json") {
        load_file(path).map(|file| Some(vec![file]))
    } else {
        debug!("skipping non-catalogue file {}", path.display());
        Ok(None)
    }
}

fn file_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(OsStr::to_str)
}

fn load_files_from_dir(path: PathBuf) -> Result<Vec<CatalogueFile>, CatalogueError> {
    let mut entries = fs::read_dir(&path)
        .map_err(|err| CatalogueError::Io(path, err))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect::<Vec<_>>();
    // read_dir order is platform dependent; catalogue order must not be
    entries.sort();

    entries
        .into_iter()
        .try_fold(Vec::with_capacity(4), |mut files, entry| {
            files.extend(load_files_from_path(entry)?.into_iter().flatten());
            Ok(files)
        })
}

fn load_file(path: PathBuf) -> Result<CatalogueFile, CatalogueError> {
    let json = fs::read_to_string(&path).map_err(|err| CatalogueError::Io(path.clone(), err))?;
    let file: CatalogueFile =
        serde_json::from_str(&json).map_err(|err| CatalogueError::Serde(path.clone(), err))?;
    debug!("read {file:?} from {}", path.display());
    Ok(file)
}

fn validate_files(files: &[CatalogueFile]) -> Result<(), CatalogueError> {
    let mut names = HashSet::with_capacity(files.len());
    match files.iter().find(|file| !names.insert(file.name.as_str())) {
        Some(file) => Err(CatalogueError::DuplicateName(file.name.clone())),
        None => Ok(()),
    }
}

fn validate_questions(questions: &[QuestionRecord]) -> Result<(), CatalogueError> {
    if let Some((record, field)) = questions
        .iter()
        .find_map(|record| record.blank_field().map(|field| (record, field)))
    {
        return Err(CatalogueError::EmptyField {
            id: record.id.clone(),
            field,
        });
    }

    let mut ids = HashSet::with_capacity(questions.len());
    match questions.iter().find(|record| !ids.insert(record.id.as_str())) {
        Some(record) => Err(CatalogueError::DuplicateId(record.id.clone())),
        None => Ok(()),
    }
}
