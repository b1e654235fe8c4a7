// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrakritiError {
    #[error("Question bank error: {0}")]
    Bank(#[from] BankError),
    #[error("Assessment error: {0}")]
    Assessment(#[from] AssessmentError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum BankError {
    #[error("Failed to parse YAML question bank: {source}")]
    YamlParse {
        #[from]
        source: serde_yaml::Error,
    },
    #[error("Failed to read question bank file '{path}': {source}")]
    BankFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Duplicate question id found: {id}")]
    DuplicateQuestionId { id: u32 },
    #[error("Question bank is empty")]
    EmptyBank,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("Question at position {index} requires an answer before advancing")]
    AnswerRequired { index: usize },
    #[error("Already at the first question")]
    AtFirstQuestion,
    #[error("Assessment is already complete")]
    AlreadyComplete,
    #[error("Assessment is not yet complete")]
    NotComplete,
}

pub type Result<T> = std::result::Result<T, PrakritiError>;
