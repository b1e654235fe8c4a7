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
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::{BankError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// Tie-break priority for classification. Ties between counts resolve
    /// towards the earlier entry.
    pub const PRIORITY: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
        }
    }
}

impl std::fmt::Display for Dosha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerChoice {
    A,
    B,
    C,
}

impl AnswerChoice {
    pub const ALL: [AnswerChoice; 3] = [AnswerChoice::A, AnswerChoice::B, AnswerChoice::C];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub dosha: Dosha,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub a: AnswerOption,
    pub b: AnswerOption,
    pub c: AnswerOption,
}

impl Question {
    pub fn option(&self, choice: AnswerChoice) -> &AnswerOption {
        match choice {
            AnswerChoice::A => &self.a,
            AnswerChoice::B => &self.b,
            AnswerChoice::C => &self.c,
        }
    }
}

pub type AnswerSet = HashMap<u32, AnswerChoice>;

// Deliberately not Deserialize: banks are only built through `new`, which
// enforces unique ids and a non-empty question list.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(BankError::EmptyBank.into());
        }
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(BankError::DuplicateQuestionId { id: question.id }.into());
            }
        }
        Ok(Self { questions })
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| BankError::BankFile {
            path: path.display().to_string(),
            source,
        })?;
        let questions: Vec<Question> =
            serde_yaml::from_str(&content).map_err(BankError::from)?;
        Self::new(questions)
    }

    pub fn builtin() -> Self {
        Self {
            questions: builtin_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

fn question(id: u32, prompt: &str, vata: &str, pitta: &str, kapha: &str) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        a: AnswerOption {
            text: vata.to_string(),
            dosha: Dosha::Vata,
        },
        b: AnswerOption {
            text: pitta.to_string(),
            dosha: Dosha::Pitta,
        },
        c: AnswerOption {
            text: kapha.to_string(),
            dosha: Dosha::Kapha,
        },
    }
}

fn builtin_questions() -> Vec<Question> {
    vec![
        question(
            1,
            "How would you describe your body frame?",
            "Thin and light, with prominent joints",
            "Medium build with good muscle definition",
            "Broad and solid, gains weight easily",
        ),
        question(
            2,
            "How is your skin most of the time?",
            "Dry, rough or cool to the touch",
            "Warm, slightly oily, prone to redness",
            "Thick, smooth, cool and well moisturised",
        ),
        question(
            3,
            "What best describes your hair?",
            "Dry, frizzy or brittle",
            "Fine, straight, early greying or thinning",
            "Thick, wavy and lustrous",
        ),
        question(
            4,
            "How is your appetite?",
            "Irregular, I often forget to eat",
            "Strong, I get irritable when meals are late",
            "Steady but mild, I can skip meals easily",
        ),
        question(
            5,
            "How does your digestion usually behave?",
            "Variable, with bloating or gas",
            "Quick and strong, sometimes acidic",
            "Slow and heavy after meals",
        ),
        question(
            6,
            "What is your sleep like?",
            "Light and easily disturbed",
            "Moderate, I wake up if too warm",
            "Deep and long, hard to wake up",
        ),
        question(
            7,
            "Which weather bothers you the most?",
            "Cold, windy and dry days",
            "Hot and humid days",
            "Cold, damp and grey days",
        ),
        question(
            8,
            "How is your memory?",
            "Quick to learn and quick to forget",
            "Sharp and precise",
            "Slow to learn but I rarely forget",
        ),
        question(
            9,
            "What describes your usual temperament?",
            "Enthusiastic, creative and changeable",
            "Focused, ambitious and intense",
            "Calm, steady and easy-going",
        ),
        question(
            10,
            "How do you usually speak?",
            "Fast, talkative, topics jump around",
            "Sharp, persuasive and to the point",
            "Slow, melodious and deliberate",
        ),
        question(
            11,
            "How are your energy levels through the day?",
            "Comes in bursts, then I crash",
            "Strong and purposeful while working",
            "Steady endurance, slow to get started",
        ),
        question(
            12,
            "How do you react under stress?",
            "Anxious, worried or overwhelmed",
            "Irritable, critical or angry",
            "Withdrawn, I become quiet and sluggish",
        ),
        question(
            13,
            "How do you make decisions?",
            "Quickly, but I often change my mind",
            "Decisively after weighing the facts",
            "Slowly, after a lot of deliberation",
        ),
        question(
            14,
            "What are your dreams usually like?",
            "Active, flying or restless dreams",
            "Vivid, intense or fiery dreams",
            "Calm, romantic or watery dreams",
        ),
        question(
            15,
            "How do you walk?",
            "Quickly and lightly",
            "With determination and purpose",
            "Slowly and with a steady rhythm",
        ),
        question(
            16,
            "How do you handle money?",
            "I spend impulsively on small things",
            "I spend on quality and planned purchases",
            "I save well and spend reluctantly",
        ),
        question(
            17,
            "How do you learn best?",
            "By listening and talking things through",
            "By reading and visual material",
            "By hands-on repetition",
        ),
        question(
            18,
            "How are your hands and feet?",
            "Usually cold and dry",
            "Warm, sometimes sweaty",
            "Cool, soft and well padded",
        ),
        question(
            19,
            "How are your joints?",
            "Thin, prominent, they crack often",
            "Loose and flexible with good mobility",
            "Large, sturdy and well lubricated",
        ),
        question(
            20,
            "How do you feel about routine?",
            "I resist it, I prefer variety",
            "I like an organised, efficient schedule",
            "I settle into routines and keep them",
        ),
    ]
}
