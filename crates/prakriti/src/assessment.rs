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

use tracing::debug;

use crate::classifier::{classify, score_answers, DoshaProfile};
use crate::error::AssessmentError;
use crate::question::{AnswerChoice, AnswerSet, Question, QuestionBank};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentState {
    InProgress { index: usize },
    Complete,
}

#[derive(Debug, Clone)]
pub struct Assessment {
    bank: QuestionBank,
    answers: AnswerSet,
    state: AssessmentState,
}

impl Assessment {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            answers: AnswerSet::new(),
            state: AssessmentState::InProgress { index: 0 },
        }
    }

    pub fn state(&self) -> AssessmentState {
        self.state
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            AssessmentState::InProgress { index } => self.bank.questions().get(index),
            AssessmentState::Complete => None,
        }
    }

    pub fn answer_for(&self, question_id: u32) -> Option<AnswerChoice> {
        self.answers.get(&question_id).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn record_answer(&mut self, choice: AnswerChoice) -> Result<(), AssessmentError> {
        let question = self
            .current_question()
            .ok_or(AssessmentError::AlreadyComplete)?;
        self.answers.insert(question.id, choice);
        Ok(())
    }

    pub fn advance(&mut self) -> Result<AssessmentState, AssessmentError> {
        let index = match self.state {
            AssessmentState::InProgress { index } => index,
            AssessmentState::Complete => return Err(AssessmentError::AlreadyComplete),
        };
        let question = &self.bank.questions()[index];
        if !self.answers.contains_key(&question.id) {
            return Err(AssessmentError::AnswerRequired { index });
        }
        self.state = if index + 1 >= self.bank.len() {
            debug!(answered = self.answers.len(), "assessment complete");
            AssessmentState::Complete
        } else {
            AssessmentState::InProgress { index: index + 1 }
        };
        Ok(self.state)
    }

    pub fn back(&mut self) -> Result<AssessmentState, AssessmentError> {
        match self.state {
            AssessmentState::InProgress { index: 0 } => Err(AssessmentError::AtFirstQuestion),
            AssessmentState::InProgress { index } => {
                self.state = AssessmentState::InProgress { index: index - 1 };
                Ok(self.state)
            }
            AssessmentState::Complete => {
                self.state = AssessmentState::InProgress {
                    index: self.bank.len() - 1,
                };
                Ok(self.state)
            }
        }
    }

    pub fn profile(&self) -> Result<DoshaProfile, AssessmentError> {
        if self.state != AssessmentState::Complete {
            return Err(AssessmentError::NotComplete);
        }
        Ok(classify(score_answers(&self.answers, &self.bank)))
    }
}
