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

use crate::landmark::Landmark;

/// Interior angle in degrees at vertex `b`, formed by the rays to `a` and
/// `c`. Always in [0, 180] and symmetric in `a` and `c`.
pub fn angle(a: Landmark, b: Landmark, c: Landmark) -> f64 {
    let raw = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let degrees = raw.to_degrees().abs();
    if degrees > 180.0 {
        360.0 - degrees
    } else {
        degrees
    }
}

pub fn distance(a: Landmark, b: Landmark) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Distance of `value` below `minimum`; zero when the value reaches it.
pub fn shortfall(value: f64, minimum: f64) -> f64 {
    (minimum - value).max(0.0)
}

/// Distance of `value` outside the closed band [lo, hi]; zero inside it.
pub fn band_deviation(value: f64, lo: f64, hi: f64) -> f64 {
    if value < lo {
        lo - value
    } else if value > hi {
        value - hi
    } else {
        0.0
    }
}
