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

use anyhow::Result;
use clap::{Arg, Command};
use prakriti::{AnswerChoice, Assessment, AssessmentState, QuestionBank};
use tracing::{info, warn, Level};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .init();

    let matches = Command::new("dosha-assessment-demo")
        .version("1.0.0")
        .author("Sattva Project")
        .about("Walks the builtin dosha questionnaire with a scripted answer pattern")
        .arg(
            Arg::new("pattern")
                .long("pattern")
                .value_name("PATTERN")
                .help("Cycle of answers applied per question, e.g. 'a', 'abc', 'aabc'")
                .default_value("abc"),
        )
        .arg(
            Arg::new("bank")
                .long("bank")
                .value_name("FILE")
                .help("Optional YAML question bank to use instead of the builtin one"),
        )
        .get_matches();

    let pattern: Vec<AnswerChoice> = matches
        .get_one::<String>("pattern")
        .expect("pattern has a default")
        .chars()
        .map(|c| match c {
            'a' | 'A' => Ok(AnswerChoice::A),
            'b' | 'B' => Ok(AnswerChoice::B),
            'c' | 'C' => Ok(AnswerChoice::C),
            other => Err(anyhow::anyhow!("invalid answer '{other}' in pattern")),
        })
        .collect::<Result<_>>()?;
    if pattern.is_empty() {
        anyhow::bail!("answer pattern must not be empty");
    }

    let bank = match matches.get_one::<String>("bank") {
        Some(path) => QuestionBank::from_yaml_file(path)?,
        None => QuestionBank::builtin(),
    };
    info!(questions = bank.len(), "loaded question bank");

    let mut assessment = Assessment::new(bank);

    // Advancing before answering is rejected without changing state.
    if let Err(error) = assessment.advance() {
        warn!(%error, "advance before answering was rejected, as expected");
    }

    let mut step = 0usize;
    loop {
        let question = match assessment.current_question() {
            Some(question) => question,
            None => break,
        };
        let choice = pattern[step % pattern.len()];
        info!(
            id = question.id,
            prompt = %question.prompt,
            answer = %question.option(choice).text,
            "answering"
        );
        assessment.record_answer(choice)?;
        if assessment.advance()? == AssessmentState::Complete {
            break;
        }
        step += 1;
    }

    let profile = assessment.profile()?;
    info!(
        dominant = %profile.dominant,
        secondary = %profile.secondary,
        "assessment classified"
    );
    println!("{}", serde_json::to_string_pretty(&profile)?);

    Ok(())
}
