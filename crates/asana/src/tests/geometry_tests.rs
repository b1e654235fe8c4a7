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

use crate::geometry::{angle, band_deviation, distance, shortfall};
use crate::landmark::Landmark;

#[test]
fn right_angle_at_the_vertex() {
    let a = Landmark::new(0.5, 0.2);
    let b = Landmark::new(0.5, 0.5);
    let c = Landmark::new(0.8, 0.5);
    assert!((angle(a, b, c) - 90.0).abs() < 1e-9);
}

#[test]
fn collinear_points_give_a_straight_angle() {
    let a = Landmark::new(0.2, 0.2);
    let b = Landmark::new(0.5, 0.5);
    let c = Landmark::new(0.8, 0.8);
    assert!((angle(a, b, c) - 180.0).abs() < 1e-9);
}

#[test]
fn folded_rays_give_a_zero_angle() {
    let a = Landmark::new(0.8, 0.5);
    let b = Landmark::new(0.5, 0.5);
    let c = Landmark::new(0.9, 0.5);
    assert!(angle(a, b, c).abs() < 1e-9);
}

#[test]
fn distance_is_euclidean() {
    let a = Landmark::new(0.0, 0.0);
    let b = Landmark::new(0.3, 0.4);
    assert!((distance(a, b) - 0.5).abs() < 1e-12);
}

#[test]
fn shortfall_is_zero_at_or_above_the_minimum() {
    assert_eq!(shortfall(0.3, 0.25), 0.0);
    assert_eq!(shortfall(0.25, 0.25), 0.0);
    assert!((shortfall(0.2, 0.25) - 0.05).abs() < 1e-12);
}

#[test]
fn band_deviation_measures_distance_outside_the_band() {
    assert_eq!(band_deviation(0.10, 0.05, 0.15), 0.0);
    assert!((band_deviation(0.02, 0.05, 0.15) - 0.03).abs() < 1e-12);
    assert!((band_deviation(0.20, 0.05, 0.15) - 0.05).abs() < 1e-12);
}

proptest! {
    #[test]
    fn angle_is_symmetric_in_its_outer_points(
        ax in 0.0f64..1.0, ay in 0.0f64..1.0,
        bx in 0.0f64..1.0, by in 0.0f64..1.0,
        cx in 0.0f64..1.0, cy in 0.0f64..1.0,
    ) {
        let a = Landmark::new(ax, ay);
        let b = Landmark::new(bx, by);
        let c = Landmark::new(cx, cy);
        prop_assert!((angle(a, b, c) - angle(c, b, a)).abs() < 1e-9);
    }

    #[test]
    fn angle_is_always_within_zero_and_one_eighty(
        ax in 0.0f64..1.0, ay in 0.0f64..1.0,
        bx in 0.0f64..1.0, by in 0.0f64..1.0,
        cx in 0.0f64..1.0, cy in 0.0f64..1.0,
    ) {
        let value = angle(
            Landmark::new(ax, ay),
            Landmark::new(bx, by),
            Landmark::new(cx, cy),
        );
        prop_assert!((0.0..=180.0).contains(&value));
    }

    #[test]
    fn distance_is_symmetric_and_non_negative(
        ax in 0.0f64..1.0, ay in 0.0f64..1.0,
        bx in 0.0f64..1.0, by in 0.0f64..1.0,
    ) {
        let a = Landmark::new(ax, ay);
        let b = Landmark::new(bx, by);
        prop_assert!(distance(a, b) >= 0.0);
        prop_assert!((distance(a, b) - distance(b, a)).abs() < 1e-12);
    }
}
