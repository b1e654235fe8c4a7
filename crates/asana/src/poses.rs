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

use std::collections::HashMap;

use crate::error::{AsanaError, Result};
use crate::evaluator::{graded, CheckOutcome, PoseEvaluator, SubScore};
use crate::geometry::{angle, band_deviation, distance, shortfall};
use crate::landmark::{BodyPart, LandmarkFrame};

mod thresholds {
    pub mod mountain {
        pub const SPINE_TIGHT: f64 = 0.03;
        pub const SPINE_LOOSE: f64 = 0.06;
        pub const LEVEL_TIGHT: f64 = 0.02;
        pub const LEVEL_LOOSE: f64 = 0.05;
        pub const STANCE_MIN: f64 = 0.05;
        pub const STANCE_MAX: f64 = 0.15;
        pub const STANCE_SLACK: f64 = 0.05;
    }

    pub mod tree {
        pub const CENTRE_TIGHT: f64 = 0.03;
        pub const CENTRE_LOOSE: f64 = 0.07;
        pub const LEVEL_TIGHT: f64 = 0.02;
        pub const LEVEL_LOOSE: f64 = 0.05;
        pub const FOLDED_KNEE_MAX: f64 = 100.0;
        pub const FOLDED_KNEE_SLACK: f64 = 25.0;
    }

    pub mod warrior {
        pub const FRONT_KNEE_TARGET: f64 = 90.0;
        pub const FRONT_KNEE_TIGHT: f64 = 15.0;
        pub const FRONT_KNEE_LOOSE: f64 = 30.0;
        pub const REAR_LEG_MIN: f64 = 160.0;
        pub const REAR_LEG_SLACK: f64 = 15.0;
        pub const ARMS_TIGHT: f64 = 0.05;
        pub const ARMS_LOOSE: f64 = 0.10;
        pub const STANCE_MIN: f64 = 0.25;
        pub const STANCE_SLACK: f64 = 0.08;
    }
}

pub struct PoseRegistry {
    evaluators: HashMap<&'static str, Box<dyn PoseEvaluator>>,
}

impl PoseRegistry {
    pub fn new() -> Self {
        Self {
            evaluators: HashMap::new(),
        }
    }

    pub fn with_builtin_poses() -> Self {
        let mut registry = Self::new();
        for evaluator in builtin_evaluators() {
            registry
                .register(evaluator)
                .expect("builtin pose ids are unique");
        }
        registry
    }

    pub fn register(&mut self, evaluator: Box<dyn PoseEvaluator>) -> Result<()> {
        let id = evaluator.id();
        if self.evaluators.contains_key(id) {
            return Err(AsanaError::DuplicateEvaluator { id: id.to_string() });
        }
        self.evaluators.insert(id, evaluator);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&dyn PoseEvaluator> {
        self.evaluators.get(id).map(Box::as_ref)
    }

    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.evaluators.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for PoseRegistry {
    fn default() -> Self {
        Self::with_builtin_poses()
    }
}

fn builtin_evaluators() -> Vec<Box<dyn PoseEvaluator>> {
    vec![
        Box::new(MountainEvaluator),
        Box::new(TreeEvaluator),
        Box::new(WarriorTwoEvaluator),
    ]
}

fn level_deviation(frame: &LandmarkFrame, left: BodyPart, right: BodyPart, threshold: f64) -> Option<f64> {
    let l = frame.point(left, threshold)?;
    let r = frame.point(right, threshold)?;
    Some((l.y - r.y).abs())
}

fn knee_angle(frame: &LandmarkFrame, hip: BodyPart, knee: BodyPart, ankle: BodyPart, threshold: f64) -> Option<f64> {
    Some(angle(
        frame.point(hip, threshold)?,
        frame.point(knee, threshold)?,
        frame.point(ankle, threshold)?,
    ))
}

pub struct MountainEvaluator;

impl PoseEvaluator for MountainEvaluator {
    fn id(&self) -> &'static str {
        "mountain"
    }

    fn display_name(&self) -> &'static str {
        "Tadasana (Mountain Pose)"
    }

    fn accuracy_floor(&self) -> u32 {
        65
    }

    fn encouragement(&self) -> &'static str {
        "Stand tall and steady, grounding evenly through both feet"
    }

    fn evaluate(&self, frame: &LandmarkFrame, visibility_threshold: f64) -> Vec<CheckOutcome> {
        use thresholds::mountain::*;
        let mut outcomes = Vec::new();

        if let (Some(nose), Some(hip_mid)) = (
            frame.point(BodyPart::Nose, visibility_threshold),
            frame.midpoint(BodyPart::LeftHip, BodyPart::RightHip, visibility_threshold),
        ) {
            outcomes.push(graded(
                SubScore::Alignment,
                (nose.x - hip_mid.x).abs(),
                SPINE_TIGHT,
                SPINE_LOOSE,
                60,
                35,
                "Your spine is stacked vertically over your pelvis",
                "Draw your head back so it stacks over your hips",
            ));
        }

        if let Some(deviation) = level_deviation(
            frame,
            BodyPart::LeftShoulder,
            BodyPart::RightShoulder,
            visibility_threshold,
        ) {
            outcomes.push(graded(
                SubScore::Alignment,
                deviation,
                LEVEL_TIGHT,
                LEVEL_LOOSE,
                40,
                20,
                "Your shoulders are level and relaxed",
                "Soften and level your shoulders",
            ));
        }

        if let Some(deviation) = level_deviation(
            frame,
            BodyPart::LeftHip,
            BodyPart::RightHip,
            visibility_threshold,
        ) {
            outcomes.push(graded(
                SubScore::Balance,
                deviation,
                LEVEL_TIGHT,
                LEVEL_LOOSE,
                100,
                55,
                "Your hips are even, weight spread across both legs",
                "Level your hips by balancing weight between both feet",
            ));
        }

        if let (Some(left), Some(right)) = (
            frame.point(BodyPart::LeftAnkle, visibility_threshold),
            frame.point(BodyPart::RightAnkle, visibility_threshold),
        ) {
            outcomes.push(graded(
                SubScore::Technique,
                band_deviation(distance(left, right), STANCE_MIN, STANCE_MAX),
                0.0,
                STANCE_SLACK,
                100,
                55,
                "Your feet are planted hip-width apart",
                "Bring your feet to roughly hip-width apart",
            ));
        }

        outcomes
    }
}

pub struct TreeEvaluator;

impl PoseEvaluator for TreeEvaluator {
    fn id(&self) -> &'static str {
        "tree"
    }

    fn display_name(&self) -> &'static str {
        "Vrikshasana (Tree Pose)"
    }

    fn accuracy_floor(&self) -> u32 {
        60
    }

    fn encouragement(&self) -> &'static str {
        "Fix your gaze on one point and let your standing leg root down"
    }

    fn evaluate(&self, frame: &LandmarkFrame, visibility_threshold: f64) -> Vec<CheckOutcome> {
        use thresholds::tree::*;
        let mut outcomes = Vec::new();

        if let (Some(nose), Some(hip_mid)) = (
            frame.point(BodyPart::Nose, visibility_threshold),
            frame.midpoint(BodyPart::LeftHip, BodyPart::RightHip, visibility_threshold),
        ) {
            outcomes.push(graded(
                SubScore::Balance,
                (nose.x - hip_mid.x).abs(),
                CENTRE_TIGHT,
                CENTRE_LOOSE,
                100,
                55,
                "Your centre line is steady over the standing leg",
                "Shift your weight until your head centres over your hips",
            ));
        }

        if let Some(deviation) = level_deviation(
            frame,
            BodyPart::LeftShoulder,
            BodyPart::RightShoulder,
            visibility_threshold,
        ) {
            outcomes.push(graded(
                SubScore::Alignment,
                deviation,
                LEVEL_TIGHT,
                LEVEL_LOOSE,
                50,
                25,
                "Your shoulders stay level while balancing",
                "Keep your shoulders level as you hold the balance",
            ));
        }

        if let Some(deviation) = level_deviation(
            frame,
            BodyPart::LeftHip,
            BodyPart::RightHip,
            visibility_threshold,
        ) {
            outcomes.push(graded(
                SubScore::Alignment,
                deviation,
                LEVEL_TIGHT,
                LEVEL_LOOSE,
                50,
                25,
                "Your hips remain square despite the lifted leg",
                "Square your hips, the lifted side tends to hitch upwards",
            ));
        }

        let left = knee_angle(
            frame,
            BodyPart::LeftHip,
            BodyPart::LeftKnee,
            BodyPart::LeftAnkle,
            visibility_threshold,
        );
        let right = knee_angle(
            frame,
            BodyPart::RightHip,
            BodyPart::RightKnee,
            BodyPart::RightAnkle,
            visibility_threshold,
        );
        if let (Some(left), Some(right)) = (left, right) {
            // The folded leg is whichever knee is more bent.
            let folded = left.min(right);
            outcomes.push(graded(
                SubScore::Technique,
                folded - FOLDED_KNEE_MAX,
                0.0,
                FOLDED_KNEE_SLACK,
                100,
                55,
                "Your lifted leg is folded deeply into the pose",
                "Draw your lifted foot higher up the standing leg",
            ));
        }

        outcomes
    }
}

pub struct WarriorTwoEvaluator;

impl PoseEvaluator for WarriorTwoEvaluator {
    fn id(&self) -> &'static str {
        "warrior-2"
    }

    fn display_name(&self) -> &'static str {
        "Virabhadrasana II (Warrior II)"
    }

    fn accuracy_floor(&self) -> u32 {
        62
    }

    fn encouragement(&self) -> &'static str {
        "Sink into the front knee and reach strongly through both arms"
    }

    fn evaluate(&self, frame: &LandmarkFrame, visibility_threshold: f64) -> Vec<CheckOutcome> {
        use thresholds::warrior::*;
        let mut outcomes = Vec::new();

        let left = knee_angle(
            frame,
            BodyPart::LeftHip,
            BodyPart::LeftKnee,
            BodyPart::LeftAnkle,
            visibility_threshold,
        );
        let right = knee_angle(
            frame,
            BodyPart::RightHip,
            BodyPart::RightKnee,
            BodyPart::RightAnkle,
            visibility_threshold,
        );
        if let (Some(left), Some(right)) = (left, right) {
            // The front leg is the more bent one, the rear leg the straighter.
            let front = left.min(right);
            let rear = left.max(right);
            outcomes.push(graded(
                SubScore::Technique,
                (front - FRONT_KNEE_TARGET).abs(),
                FRONT_KNEE_TIGHT,
                FRONT_KNEE_LOOSE,
                100,
                55,
                "Your front knee is bent to a strong right angle",
                "Bend your front knee towards a right angle over the ankle",
            ));
            outcomes.push(graded(
                SubScore::Alignment,
                shortfall(rear, REAR_LEG_MIN),
                0.0,
                REAR_LEG_SLACK,
                50,
                25,
                "Your back leg is strong and straight",
                "Press your back leg straight without locking the knee",
            ));
        }

        let arms = [
            (BodyPart::LeftWrist, BodyPart::LeftShoulder),
            (BodyPart::RightWrist, BodyPart::RightShoulder),
        ]
        .into_iter()
        .map(|(wrist, shoulder)| {
            Some(
                (frame.point(wrist, visibility_threshold)?.y
                    - frame.point(shoulder, visibility_threshold)?.y)
                    .abs(),
            )
        })
        .collect::<Option<Vec<f64>>>();
        if let Some(deviations) = arms {
            let worst = deviations.into_iter().fold(0.0f64, f64::max);
            outcomes.push(graded(
                SubScore::Alignment,
                worst,
                ARMS_TIGHT,
                ARMS_LOOSE,
                50,
                25,
                "Your arms reach parallel to the floor",
                "Lift or lower your arms until they are parallel to the floor",
            ));
        }

        if let (Some(left), Some(right)) = (
            frame.point(BodyPart::LeftAnkle, visibility_threshold),
            frame.point(BodyPart::RightAnkle, visibility_threshold),
        ) {
            outcomes.push(graded(
                SubScore::Balance,
                shortfall(distance(left, right), STANCE_MIN),
                0.0,
                STANCE_SLACK,
                100,
                55,
                "Your stance is wide and stable",
                "Step your feet wider apart for a more stable base",
            ));
        }

        outcomes
    }
}
