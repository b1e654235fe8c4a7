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

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalyserConfig;
use crate::error::{AsanaError, Result};
use crate::evaluator::{CheckOutcome, PoseEvaluator, SubScore};
use crate::landmark::LandmarkFrame;
use crate::poses::PoseRegistry;

const SUB_SCORE_CAP: u32 = 100;
const NEUTRAL_SCORE: u32 = 50;
const GENERIC_BASELINE: u32 = 75;

const NEUTRAL_FEEDBACK: &str = "No body landmarks detected. Step back so your full body is in view";
const NEUTRAL_IMPROVEMENT: &str = "Move into the camera frame so your whole body is visible";
const GENERIC_FEEDBACK: &str = "Keep practising. Hold the pose steadily and breathe evenly";

/// Post-hoc score noise. The default source smooths repeated identical
/// scores; tests swap in [`NoJitter`] for exact assertions.
pub trait ScoreJitter: Send + Sync {
    fn offset(&self) -> i32;
}

pub struct RandomJitter {
    span: i32,
}

impl RandomJitter {
    pub fn new(span: i32) -> Self {
        Self { span }
    }
}

impl ScoreJitter for RandomJitter {
    fn offset(&self) -> i32 {
        if self.span == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(-self.span..=self.span)
    }
}

pub struct NoJitter;

impl ScoreJitter for NoJitter {
    fn offset(&self) -> i32 {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub alignment: u32,
    pub balance: u32,
    pub technique: u32,
    pub overall: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseAnalysis {
    pub pose_id: String,
    pub accuracy: u32,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

pub struct PoseAnalyser {
    config: AnalyserConfig,
    registry: PoseRegistry,
    jitter: Box<dyn ScoreJitter>,
}

impl PoseAnalyser {
    pub fn new() -> Self {
        Self::with_config(AnalyserConfig::default()).expect("default config is valid")
    }

    pub fn with_config(config: AnalyserConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|reason| AsanaError::InvalidConfig { reason })?;
        Ok(Self {
            jitter: Box::new(RandomJitter::new(config.jitter_span)),
            registry: PoseRegistry::with_builtin_poses(),
            config,
        })
    }

    pub fn with_jitter(mut self, jitter: Box<dyn ScoreJitter>) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_registry(mut self, registry: PoseRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &AnalyserConfig {
        &self.config
    }

    pub fn registry(&self) -> &PoseRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PoseRegistry {
        &mut self.registry
    }

    pub fn analyse(&self, frame: &LandmarkFrame, pose_id: &str) -> PoseAnalysis {
        if frame.is_empty() {
            debug!(pose_id, "empty landmark frame, returning neutral result");
            return self.neutral_analysis(pose_id);
        }
        match self.registry.get(pose_id) {
            Some(evaluator) => self.scored_analysis(evaluator, frame),
            None => {
                debug!(pose_id, "no evaluator registered, using generic baseline");
                self.generic_analysis(pose_id)
            }
        }
    }

    fn scored_analysis(&self, evaluator: &dyn PoseEvaluator, frame: &LandmarkFrame) -> PoseAnalysis {
        let outcomes = evaluator.evaluate(frame, self.config.visibility_threshold);

        let mut alignment = 0u32;
        let mut balance = 0u32;
        let mut technique = 0u32;
        let mut strengths = Vec::new();
        let mut improvements = Vec::new();

        for outcome in outcomes {
            let points = outcome.points();
            match outcome.target() {
                SubScore::Alignment => alignment += points,
                SubScore::Balance => balance += points,
                SubScore::Technique => technique += points,
            }
            match outcome {
                CheckOutcome::Pass { strength, .. } => strengths.push(strength),
                CheckOutcome::Partial { improvement, .. } | CheckOutcome::Fail { improvement, .. } => {
                    improvements.push(improvement);
                }
            }
        }

        let alignment = alignment.min(SUB_SCORE_CAP);
        let balance = balance.min(SUB_SCORE_CAP);
        let technique = technique.min(SUB_SCORE_CAP);
        let overall = (f64::from(alignment + balance + technique) / 3.0).round() as u32;

        let base = overall.max(evaluator.accuracy_floor());
        let accuracy = self.clamp_accuracy(i64::from(base) + i64::from(self.jitter.offset()));

        debug!(
            pose_id = evaluator.id(),
            alignment, balance, technique, overall, accuracy, "scored pose frame"
        );

        let feedback = if strengths.is_empty() {
            evaluator.encouragement().to_string()
        } else {
            format!("{}.", strengths.join(". "))
        };

        PoseAnalysis {
            pose_id: evaluator.id().to_string(),
            accuracy,
            feedback,
            strengths,
            improvements,
            breakdown: ScoreBreakdown {
                alignment,
                balance,
                technique,
                overall,
            },
        }
    }

    fn generic_analysis(&self, pose_id: &str) -> PoseAnalysis {
        let accuracy =
            self.clamp_accuracy(i64::from(GENERIC_BASELINE) + i64::from(self.jitter.offset()));
        PoseAnalysis {
            pose_id: pose_id.to_string(),
            accuracy,
            feedback: GENERIC_FEEDBACK.to_string(),
            strengths: Vec::new(),
            improvements: Vec::new(),
            breakdown: ScoreBreakdown {
                alignment: GENERIC_BASELINE,
                balance: GENERIC_BASELINE,
                technique: GENERIC_BASELINE,
                overall: GENERIC_BASELINE,
            },
        }
    }

    // Fixed and deterministic: the empty-frame path never applies jitter.
    fn neutral_analysis(&self, pose_id: &str) -> PoseAnalysis {
        PoseAnalysis {
            pose_id: pose_id.to_string(),
            accuracy: NEUTRAL_SCORE,
            feedback: NEUTRAL_FEEDBACK.to_string(),
            strengths: Vec::new(),
            improvements: vec![NEUTRAL_IMPROVEMENT.to_string()],
            breakdown: ScoreBreakdown {
                alignment: NEUTRAL_SCORE,
                balance: NEUTRAL_SCORE,
                technique: NEUTRAL_SCORE,
                overall: NEUTRAL_SCORE,
            },
        }
    }

    fn clamp_accuracy(&self, value: i64) -> u32 {
        value.clamp(
            i64::from(self.config.min_accuracy),
            i64::from(self.config.max_accuracy),
        ) as u32
    }
}

impl Default for PoseAnalyser {
    fn default() -> Self {
        Self::new()
    }
}
