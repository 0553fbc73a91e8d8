/*
    Belos, blazing fast dart trajectory analysis
    Copyright (C) 2018-onwards Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

//! Maclaurin partial sums for sine, cosine and arctangent, truncated to a
//! requested term count `n`. These deliberately do NOT fall back to the libm
//! implementations: the truncation error is the quantity under study, and a
//! low `n` is reported through a wrong value, never through an error.

use std::f64::consts::{FRAC_PI_2, PI};

/// Largest supported term count. The default search bounds stop here, and the
/// highest power any series requests at this cap is `2 * MAX_TERMS - 1 = 59`.
pub const MAX_TERMS: u32 = 30;

/// Factorial of `p` as a floating point running product.
///
/// Exact through `18!` (every partial product below 2^53), and correctly
/// rounded but inexact beyond. The largest argument reachable through the
/// series is 59, and `59! ~ 1.4e80` sits comfortably within f64 range, so no
/// overflow is possible. A 64-bit integer would silently wrap past `20!`.
pub fn factorial(p: u32) -> f64 {
    let mut prod = 1.0;
    for i in 2..=p {
        prod *= f64::from(i);
    }
    prod
}

/// Sine of `angle` (radians) from the Maclaurin series truncated to `n` terms.
///
/// Term `i` is `(-1)^i * angle^(2i+1) / (2i+1)!`, summed for `i = 0..n`.
pub fn sin(angle: f64, n: u32) -> f64 {
    let mut sum = 0.0;
    for i in 0..n {
        let power = 2 * i + 1;
        let term = angle.powi(power as i32) / factorial(power);
        sum += if i % 2 == 0 { term } else { -term };
    }
    sum
}

/// Cosine of `angle` (radians) from the Maclaurin series truncated to `n` terms.
///
/// Term `i` is `(-1)^i * angle^(2i) / (2i)!`, summed for `i = 0..n`.
pub fn cos(angle: f64, n: u32) -> f64 {
    let mut sum = 0.0;
    for i in 0..n {
        let power = 2 * i;
        let term = angle.powi(power as i32) / factorial(power);
        sum += if i % 2 == 0 { term } else { -term };
    }
    sum
}

/// Arctangent of `x` from the alternating odd-power series truncated to `n` terms.
///
/// The input is clamped to `[-1, 1]` first: the series diverges outside that
/// interval. Convergence at the clamp boundary is slow (the term magnitude
/// only decays as `1/(2i+1)`), which is visible in [`atan2`] accuracy when
/// `|y/x|` approaches 1.
pub fn atan(x: f64, n: u32) -> f64 {
    let x = x.clamp(-1.0, 1.0);
    let mut sum = 0.0;
    for i in 0..n {
        let power = 2 * i + 1;
        let term = x.powi(power as i32) / f64::from(power);
        sum += if i % 2 == 0 { term } else { -term };
    }
    sum
}

/// Two-argument arctangent built from the truncated [`atan`] series.
///
/// Returns `+pi/2` on the positive `y` axis (including `y == 0`) and `-pi/2`
/// on the negative one, and otherwise shifts the `atan(y/x)` series result by
/// `+-pi` when `x < 0` to land in the correct quadrant, matching the standard
/// two-argument arctangent semantics.
pub fn atan2(y: f64, x: f64, n: u32) -> f64 {
    if x == 0.0 {
        return if y >= 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
    }

    let at = atan(y / x, n);
    if x > 0.0 {
        at
    } else if y >= 0.0 {
        at + PI
    } else {
        at - PI
    }
}
