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
use asana::synthetic;
use asana::{LandmarkFrame, NoJitter, PoseAnalyser};
use clap::{Arg, ArgAction, Command};
use tracing::{info, Level};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .init();

    let matches = Command::new("pose-feedback-demo")
        .version("1.0.0")
        .author("Sattva Project")
        .about("Scores synthetic landmark frames against the builtin pose evaluators")
        .arg(
            Arg::new("pose")
                .long("pose")
                .value_name("ID")
                .help("Pose id to score every frame against (defaults to each frame's own pose)"),
        )
        .arg(
            Arg::new("deterministic")
                .long("deterministic")
                .action(ArgAction::SetTrue)
                .help("Disable score jitter for reproducible output"),
        )
        .get_matches();

    let mut analyser = PoseAnalyser::new();
    if matches.get_flag("deterministic") {
        analyser = analyser.with_jitter(Box::new(NoJitter));
    }
    info!(poses = ?analyser.registry().ids(), "analyser ready");

    let frames: Vec<(&str, LandmarkFrame)> = vec![
        ("mountain", synthetic::mountain_frame()),
        ("mountain", synthetic::leaning_mountain_frame()),
        ("mountain", synthetic::upper_body_frame()),
        ("tree", synthetic::tree_frame()),
        ("warrior-2", synthetic::warrior_two_frame()),
        ("eagle", synthetic::mountain_frame()),
        ("mountain", LandmarkFrame::empty()),
    ];

    for (default_pose, frame) in frames {
        let pose_id = matches
            .get_one::<String>("pose")
            .map_or(default_pose, String::as_str);
        let analysis = analyser.analyse(&frame, pose_id);
        info!(
            pose_id,
            accuracy = analysis.accuracy,
            landmarks = frame.len(),
            "scored frame"
        );
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    }

    Ok(())
}
