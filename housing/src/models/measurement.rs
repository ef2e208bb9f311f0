/*
 * Housing Registry
 * Copyright (c)  2022. Sam Ralph
 *
 * This file is part of Housing Registry.
 *
 * Housing Registry is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, version 3 of the License.
 *
 * Housing Registry is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Housing Registry.  If not, see <https://www.gnu.org/licenses/>.
 *
 */

use std::fmt::{Display, Formatter};

/// The number of significant digits a measurement is rendered with
pub const SIGNIFICANT_DIGITS: i32 = 6;

/// Renders a floating point measurement (area, price) with six significant digits
///
/// Trailing zeros are dropped, and the exponent form (`1.23457e+06`) is used when the
/// exponent is below -4 or at least six, so values render the same as a default
/// formatted stream.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measurement(pub f64);

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return write!(f, "nan");
        }
        if value.is_infinite() {
            return write!(f, "{}", if value < 0.0 { "-inf" } else { "inf" });
        }
        // Round to the significant digits first, as rounding can carry into the exponent
        let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some(parts) => parts,
            None => return write!(f, "{}", value),
        };
        let exponent: i32 = match exponent.parse() {
            Ok(exponent) => exponent,
            Err(_) => return write!(f, "{}", value),
        };
        if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                strip_trailing_zeros(mantissa),
                sign,
                exponent.abs()
            )
        } else {
            let precision = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
            let fixed = format!("{:.*}", precision, value);
            write!(f, "{}", strip_trailing_zeros(&fixed))
        }
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use crate::models::measurement::Measurement;

    fn render(value: f64) -> String {
        Measurement(value).to_string()
    }

    #[test]
    fn short_values_keep_their_digits() {
        assert_eq!(render(80.5), "80.5");
        assert_eq!(render(120.0), "120");
        assert_eq!(render(50.0), "50");
        assert_eq!(render(0.0), "0");
        assert_eq!(render(-12.5), "-12.5");
        assert_eq!(render(100000.0), "100000");
    }

    #[test]
    fn rounds_to_six_significant_digits() {
        assert_eq!(render(0.1 + 0.2), "0.3");
        assert_eq!(render(65.123456), "65.1235");
        assert_eq!(render(999999.4), "999999");
        assert_eq!(render(0.0001234), "0.0001234");
    }

    #[test]
    fn large_and_small_values_use_exponents() {
        assert_eq!(render(1234567.0), "1.23457e+06");
        assert_eq!(render(1000000.0), "1e+06");
        assert_eq!(render(0.00001234), "1.234e-05");
        assert_eq!(render(-2.5e21), "-2.5e+21");
        assert_eq!(render(1e100), "1e+100");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(render(f64::NAN), "nan");
        assert_eq!(render(f64::INFINITY), "inf");
        assert_eq!(render(f64::NEG_INFINITY), "-inf");
    }
}
