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

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::question::{AnswerSet, Dosha, QuestionBank};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaScores {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
}

impl DoshaScores {
    pub fn get(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn total(&self) -> u32 {
        self.vata + self.pitta + self.kapha
    }

    fn increment(&mut self, dosha: Dosha) {
        match dosha {
            Dosha::Vata => self.vata += 1,
            Dosha::Pitta => self.pitta += 1,
            Dosha::Kapha => self.kapha += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaProfile {
    pub dominant: Dosha,
    pub secondary: Dosha,
    pub scores: DoshaScores,
}

pub fn score_answers(answers: &AnswerSet, bank: &QuestionBank) -> DoshaScores {
    let mut scores = DoshaScores::default();
    for (id, choice) in answers {
        if let Some(question) = bank.get(*id) {
            scores.increment(question.option(*choice).dosha);
        }
    }
    scores
}

pub fn classify(scores: DoshaScores) -> DoshaProfile {
    let mut ranked: Vec<(Dosha, u32)> = Dosha::PRIORITY
        .iter()
        .map(|&dosha| (dosha, scores.get(dosha)))
        .collect();
    // Stable sort: equal counts keep the PRIORITY ordering.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    debug!(
        dominant = ranked[0].0.as_str(),
        secondary = ranked[1].0.as_str(),
        vata = scores.vata,
        pitta = scores.pitta,
        kapha = scores.kapha,
        "classified constitution"
    );
    DoshaProfile {
        dominant: ranked[0].0,
        secondary: ranked[1].0,
        scores,
    }
}
