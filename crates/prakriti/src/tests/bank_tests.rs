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

use std::collections::HashSet;
use std::io::Write;

use crate::error::{BankError, PrakritiError};
use crate::question::{AnswerChoice, Dosha, QuestionBank};

#[test]
fn builtin_bank_has_twenty_questions_with_unique_ids() {
    let bank = QuestionBank::builtin();
    assert_eq!(bank.len(), 20);

    let ids: HashSet<u32> = bank.questions().iter().map(|q| q.id).collect();
    assert_eq!(ids.len(), 20);
}

#[test]
fn builtin_bank_covers_every_dosha_in_each_question() {
    let bank = QuestionBank::builtin();
    for question in bank.questions() {
        let doshas: HashSet<Dosha> = AnswerChoice::ALL
            .iter()
            .map(|&choice| question.option(choice).dosha)
            .collect();
        assert_eq!(doshas.len(), 3, "question {} repeats a dosha", question.id);
    }
}

#[test]
fn duplicate_question_ids_are_rejected() {
    let bank = QuestionBank::builtin();
    let mut questions = bank.questions().to_vec();
    questions[5].id = questions[0].id;

    match QuestionBank::new(questions) {
        Err(PrakritiError::Bank(BankError::DuplicateQuestionId { id })) => {
            assert_eq!(id, bank.questions()[0].id);
        }
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn empty_bank_is_rejected() {
    assert!(matches!(
        QuestionBank::new(Vec::new()),
        Err(PrakritiError::Bank(BankError::EmptyBank))
    ));
}

#[test]
fn bank_round_trips_through_yaml() {
    let bank = QuestionBank::builtin();
    let yaml = serde_yaml::to_string(bank.questions()).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let loaded = QuestionBank::from_yaml_file(file.path()).unwrap();
    assert_eq!(loaded, bank);
}

#[test]
fn missing_bank_file_reports_the_path() {
    let result = QuestionBank::from_yaml_file("/nonexistent/bank.yml");
    match result {
        Err(PrakritiError::Bank(BankError::BankFile { path, .. })) => {
            assert!(path.contains("bank.yml"));
        }
        other => panic!("expected file error, got {other:?}"),
    }
}
