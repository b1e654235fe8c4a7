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

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnalyserConfig {
    pub visibility_threshold: f64,
    pub jitter_span: i32,
    pub min_accuracy: u32,
    pub max_accuracy: u32,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.5,
            jitter_span: 3,
            min_accuracy: 50,
            max_accuracy: 95,
        }
    }
}

impl AnalyserConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err("visibility_threshold must be between 0.0 and 1.0".to_string());
        }
        if self.jitter_span < 0 {
            return Err("jitter_span must be non-negative".to_string());
        }
        if self.min_accuracy >= self.max_accuracy {
            return Err("min_accuracy must be below max_accuracy".to_string());
        }
        if self.max_accuracy > 100 {
            return Err("max_accuracy must not exceed 100".to_string());
        }
        Ok(())
    }

    pub fn deterministic() -> Self {
        Self {
            jitter_span: 0,
            ..Default::default()
        }
    }
}
