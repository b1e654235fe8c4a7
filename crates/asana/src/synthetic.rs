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

//! Synthetic landmark frames for demos and tests. Coordinates are
//! normalised image space, y increasing downwards, as the detector emits.

use crate::landmark::{BodyPart, Landmark, LandmarkFrame};

fn frame_with(points: &[(BodyPart, f64, f64)]) -> LandmarkFrame {
    let mut landmarks = vec![Landmark::with_visibility(0.5, 0.5, 1.0); BodyPart::COUNT];
    for &(part, x, y) in points {
        landmarks[part.index()] = Landmark::with_visibility(x, y, 1.0);
    }
    LandmarkFrame::new(landmarks)
}

/// A geometrically clean tadasana: spine vertical, shoulders and hips
/// level, feet hip-width apart.
pub fn mountain_frame() -> LandmarkFrame {
    use BodyPart::*;
    frame_with(&[
        (Nose, 0.50, 0.20),
        (LeftEyeInner, 0.485, 0.185),
        (LeftEye, 0.475, 0.185),
        (LeftEyeOuter, 0.465, 0.185),
        (RightEyeInner, 0.515, 0.185),
        (RightEye, 0.525, 0.185),
        (RightEyeOuter, 0.535, 0.185),
        (LeftEar, 0.455, 0.19),
        (RightEar, 0.545, 0.19),
        (MouthLeft, 0.48, 0.24),
        (MouthRight, 0.52, 0.24),
        (LeftShoulder, 0.44, 0.35),
        (RightShoulder, 0.56, 0.35),
        (LeftElbow, 0.42, 0.46),
        (RightElbow, 0.58, 0.46),
        (LeftWrist, 0.41, 0.56),
        (RightWrist, 0.59, 0.56),
        (LeftPinky, 0.405, 0.59),
        (RightPinky, 0.595, 0.59),
        (LeftIndex, 0.41, 0.60),
        (RightIndex, 0.59, 0.60),
        (LeftThumb, 0.415, 0.59),
        (RightThumb, 0.585, 0.59),
        (LeftHip, 0.46, 0.55),
        (RightHip, 0.54, 0.55),
        (LeftKnee, 0.46, 0.72),
        (RightKnee, 0.54, 0.72),
        (LeftAnkle, 0.46, 0.90),
        (RightAnkle, 0.54, 0.90),
        (LeftHeel, 0.455, 0.92),
        (RightHeel, 0.545, 0.92),
        (LeftFootIndex, 0.46, 0.95),
        (RightFootIndex, 0.54, 0.95),
    ])
}

/// Mountain frame with the head drifted sideways off the centre line.
pub fn leaning_mountain_frame() -> LandmarkFrame {
    let mut landmarks = mountain_frame().landmarks().to_vec();
    landmarks[BodyPart::Nose.index()] = Landmark::with_visibility(0.58, 0.20, 1.0);
    LandmarkFrame::new(landmarks)
}

/// Mountain frame where everything below the hips is low confidence, as
/// when the camera only sees the upper body.
pub fn upper_body_frame() -> LandmarkFrame {
    use BodyPart::*;
    let mut landmarks = mountain_frame().landmarks().to_vec();
    for part in [
        LeftHip, RightHip, LeftKnee, RightKnee, LeftAnkle, RightAnkle, LeftHeel, RightHeel,
        LeftFootIndex, RightFootIndex,
    ] {
        landmarks[part.index()].visibility = Some(0.2);
    }
    LandmarkFrame::new(landmarks)
}

/// A balanced vrikshasana on the left leg, right foot folded high.
pub fn tree_frame() -> LandmarkFrame {
    use BodyPart::*;
    frame_with(&[
        (Nose, 0.50, 0.20),
        (LeftEar, 0.455, 0.19),
        (RightEar, 0.545, 0.19),
        (LeftShoulder, 0.44, 0.35),
        (RightShoulder, 0.56, 0.35),
        (LeftElbow, 0.46, 0.26),
        (RightElbow, 0.54, 0.26),
        (LeftWrist, 0.48, 0.17),
        (RightWrist, 0.52, 0.17),
        (LeftHip, 0.46, 0.55),
        (RightHip, 0.54, 0.55),
        (LeftKnee, 0.46, 0.72),
        (RightKnee, 0.60, 0.65),
        (LeftAnkle, 0.46, 0.90),
        (RightAnkle, 0.54, 0.68),
        (LeftHeel, 0.455, 0.92),
        (RightHeel, 0.545, 0.70),
        (LeftFootIndex, 0.46, 0.95),
        (RightFootIndex, 0.53, 0.72),
    ])
}

/// A virabhadrasana II with the left leg forward at a right angle, rear
/// leg straight and arms reaching parallel to the floor.
pub fn warrior_two_frame() -> LandmarkFrame {
    use BodyPart::*;
    frame_with(&[
        (Nose, 0.50, 0.25),
        (LeftEar, 0.46, 0.24),
        (RightEar, 0.54, 0.24),
        (LeftShoulder, 0.42, 0.40),
        (RightShoulder, 0.58, 0.40),
        (LeftElbow, 0.30, 0.40),
        (RightElbow, 0.70, 0.40),
        (LeftWrist, 0.18, 0.40),
        (RightWrist, 0.82, 0.40),
        (LeftHip, 0.45, 0.68),
        (RightHip, 0.55, 0.68),
        (LeftKnee, 0.30, 0.70),
        (RightKnee, 0.635, 0.765),
        (LeftAnkle, 0.30, 0.85),
        (RightAnkle, 0.72, 0.85),
        (LeftHeel, 0.29, 0.87),
        (RightHeel, 0.73, 0.86),
        (LeftFootIndex, 0.30, 0.90),
        (RightFootIndex, 0.76, 0.88),
    ])
}
