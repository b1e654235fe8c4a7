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

use crate::landmark::LandmarkFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubScore {
    Alignment,
    Balance,
    Technique,
}

/// Result of one geometric check. A check lands in exactly one variant, so
/// it feeds exactly one of the strength/improvement lists.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Pass {
        target: SubScore,
        points: u32,
        strength: String,
    },
    Partial {
        target: SubScore,
        points: u32,
        improvement: String,
    },
    Fail {
        target: SubScore,
        improvement: String,
    },
}

impl CheckOutcome {
    pub fn target(&self) -> SubScore {
        match self {
            CheckOutcome::Pass { target, .. }
            | CheckOutcome::Partial { target, .. }
            | CheckOutcome::Fail { target, .. } => *target,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            CheckOutcome::Pass { points, .. } | CheckOutcome::Partial { points, .. } => *points,
            CheckOutcome::Fail { .. } => 0,
        }
    }
}

/// One evaluator per supported pose id. Point values per sub-score are
/// chosen so a flawless frame totals exactly 100 for every sub-score the
/// evaluator feeds.
pub trait PoseEvaluator: Send + Sync {
    fn id(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    /// Lowest accuracy this pose reports once a body is in frame.
    fn accuracy_floor(&self) -> u32;

    /// Fallback overall feedback when no check passed.
    fn encouragement(&self) -> &'static str;

    /// Runs the geometric checks. Checks whose landmarks are missing or
    /// below the visibility threshold are skipped, not failed.
    fn evaluate(&self, frame: &LandmarkFrame, visibility_threshold: f64) -> Vec<CheckOutcome>;
}

pub(crate) fn graded(
    target: SubScore,
    deviation: f64,
    tight: f64,
    loose: f64,
    full_points: u32,
    partial_points: u32,
    strength: &str,
    improvement: &str,
) -> CheckOutcome {
    if deviation <= tight {
        CheckOutcome::Pass {
            target,
            points: full_points,
            strength: strength.to_string(),
        }
    } else if deviation <= loose {
        CheckOutcome::Partial {
            target,
            points: partial_points,
            improvement: improvement.to_string(),
        }
    } else {
        CheckOutcome::Fail {
            target,
            improvement: improvement.to_string(),
        }
    }
}
