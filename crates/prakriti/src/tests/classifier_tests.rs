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

use proptest::prelude::*;

use crate::classifier::{classify, score_answers, DoshaScores};
use crate::question::{AnswerChoice, AnswerSet, Dosha, QuestionBank};

#[test]
fn all_vata_answers_produce_a_pure_vata_vector() {
    let bank = QuestionBank::builtin();
    let mut answers = AnswerSet::new();
    for question in bank.questions() {
        answers.insert(question.id, AnswerChoice::A);
    }

    let scores = score_answers(&answers, &bank);
    assert_eq!(
        scores,
        DoshaScores {
            vata: 20,
            pitta: 0,
            kapha: 0
        }
    );

    let profile = classify(scores);
    assert_eq!(profile.dominant, Dosha::Vata);
    assert_eq!(profile.secondary, Dosha::Pitta);
    assert_eq!(profile.scores, scores);
}

#[test]
fn unknown_question_ids_are_skipped_silently() {
    let bank = QuestionBank::builtin();
    let mut answers = AnswerSet::new();
    answers.insert(1, AnswerChoice::B);
    answers.insert(9999, AnswerChoice::A);
    answers.insert(424_242, AnswerChoice::C);

    let scores = score_answers(&answers, &bank);
    assert_eq!(scores.total(), 1);
    assert_eq!(scores.pitta, 1);
}

#[test]
fn tie_between_vata_and_pitta_resolves_to_vata() {
    let profile = classify(DoshaScores {
        vata: 5,
        pitta: 5,
        kapha: 0,
    });
    assert_eq!(profile.dominant, Dosha::Vata);
    assert_eq!(profile.secondary, Dosha::Pitta);
}

#[test]
fn tie_between_pitta_and_kapha_resolves_to_pitta_as_secondary() {
    let profile = classify(DoshaScores {
        vata: 10,
        pitta: 5,
        kapha: 5,
    });
    assert_eq!(profile.dominant, Dosha::Vata);
    assert_eq!(profile.secondary, Dosha::Pitta);
}

#[test]
fn three_way_tie_follows_priority_order() {
    let profile = classify(DoshaScores {
        vata: 7,
        pitta: 7,
        kapha: 7,
    });
    assert_eq!(profile.dominant, Dosha::Vata);
    assert_eq!(profile.secondary, Dosha::Pitta);
}

#[test]
fn all_zero_vector_classifies_without_panicking() {
    let profile = classify(DoshaScores::default());
    assert_eq!(profile.dominant, Dosha::Vata);
    assert_eq!(profile.secondary, Dosha::Pitta);
    assert_eq!(profile.scores.total(), 0);
}

#[test]
fn kapha_dominant_when_counts_favour_it() {
    let profile = classify(DoshaScores {
        vata: 3,
        pitta: 6,
        kapha: 11,
    });
    assert_eq!(profile.dominant, Dosha::Kapha);
    assert_eq!(profile.secondary, Dosha::Pitta);
}

#[test]
fn scoring_is_independent_of_insertion_order() {
    let bank = QuestionBank::builtin();
    let choices = [AnswerChoice::A, AnswerChoice::B, AnswerChoice::C];

    let mut forward = AnswerSet::new();
    for (i, question) in bank.questions().iter().enumerate() {
        forward.insert(question.id, choices[i % 3]);
    }
    let mut reverse = AnswerSet::new();
    for (i, question) in bank.questions().iter().enumerate().rev() {
        reverse.insert(question.id, choices[i % 3]);
    }

    assert_eq!(score_answers(&forward, &bank), score_answers(&reverse, &bank));
}

proptest! {
    #[test]
    fn score_total_matches_valid_answer_count(
        selections in proptest::collection::hash_map(0u32..40, 0usize..3, 0..30)
    ) {
        let bank = QuestionBank::builtin();
        let answers: AnswerSet = selections
            .into_iter()
            .map(|(id, choice)| (id, AnswerChoice::ALL[choice]))
            .collect();

        let scores = score_answers(&answers, &bank);
        let valid = answers.keys().filter(|id| bank.get(**id).is_some()).count();
        prop_assert_eq!(scores.total() as usize, valid);
    }

    #[test]
    fn classify_is_total_and_dominant_has_max_count(
        vata in 0u32..100, pitta in 0u32..100, kapha in 0u32..100
    ) {
        let scores = DoshaScores { vata, pitta, kapha };
        let profile = classify(scores);
        let max = vata.max(pitta).max(kapha);
        prop_assert_eq!(profile.scores.get(profile.dominant), max);
        prop_assert!(profile.dominant != profile.secondary);
    }
}
