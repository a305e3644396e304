/// Exact decimal arithmetic for percentage values.
///
/// This module contains:
/// - The `Percent` type (integer mantissa + decimal scale)
/// - The percent → ray-scale fixed-point conversion
///
/// IMPORTANT:
/// - No binary floating point anywhere in this module.
///   A percent entered as "45.5" must survive to the emitted
///   integer literal without representation error.
/// - Intermediates are widened to `U256` so the multiply by
///   `10^ray_decimals` can never overflow.
///
use std::fmt;
use std::str::FromStr;

use bnum::types::U256;

use crate::error::GeneratorError;

/// Scale used by the Aave v3 config engine: 100% == 10^27.
pub const DEFAULT_RAY_DECIMALS: u32 = 27;

/// Upper bound on the injectable fixed-point scale.
///
/// Keeps `mantissa * 10^ray_decimals` comfortably inside U256
/// for any mantissa expressible as u128.
pub const MAX_RAY_DECIMALS: u32 = 38;

/// Upper bound on digits right of the decimal point.
///
/// Anything beyond this is operator noise, not precision: the
/// target scale itself never exceeds `MAX_RAY_DECIMALS` digits.
const MAX_FRACTION_DIGITS: u32 = 60;

/// An exact decimal percentage, e.g. `45.5` meaning 45.5%.
///
/// Representation: `mantissa * 10^-scale` percent, with the
/// fraction normalized (no trailing zeros), so `45.00` and `45`
/// compare equal.
///
/// Absence of a value is expressed by the consumer as
/// `Option<Percent>` — there is no "empty" Percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent {
    mantissa: u128,
    scale: u32,
}

impl Percent {
    /// Construct from raw parts. Trailing zeros in the fraction
    /// are stripped so equality is structural.
    pub fn new(mut mantissa: u128, mut scale: u32) -> Self {
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        Self { mantissa, scale }
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    /// Convert to the protocol's fixed-point integer representation,
    /// rendered as a decimal literal.
    ///
    /// RULE:
    ///     ray = round(P / 100 * 10^ray_decimals)
    ///
    /// computed exactly as
    ///     (mantissa * 10^ray_decimals) / 10^(scale + 2)
    ///
    /// with round-half-even on the remainder. Values expressible at
    /// the target scale convert exactly; anything finer rounds
    /// deterministically (ties to the even quotient).
    ///
    /// PANIC:
    /// - Never, provided `ray_decimals <= MAX_RAY_DECIMALS`
    ///   (enforced at configuration load).
    pub fn to_ray(&self, ray_decimals: u32) -> String {
        let numerator = U256::from(self.mantissa) * U256::from(10u8).pow(ray_decimals);
        let denominator = U256::from(10u8).pow(self.scale + 2);

        let quotient = numerator / denominator;
        let remainder = numerator % denominator;

        let twice = remainder * U256::from(2u8);
        let two = U256::from(2u8);

        let rounded = if twice > denominator || (twice == denominator && quotient % two == U256::ONE)
        {
            quotient + U256::ONE
        } else {
            quotient
        };

        rounded.to_string()
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.mantissa);
        }
        let digits = self.mantissa.to_string();
        let scale = self.scale as usize;
        if digits.len() > scale {
            let split = digits.len() - scale;
            write!(f, "{}.{}", &digits[..split], &digits[split..])
        } else {
            write!(f, "0.{}{}", "0".repeat(scale - digits.len()), digits)
        }
    }
}

impl FromStr for Percent {
    type Err = GeneratorError;

    /// Parse operator text like "45", "45.5", ".5" or "0.05".
    ///
    /// REJECTED:
    /// - empty input (absence is the prompt's concern, not ours)
    /// - signs, exponents, grouping separators
    /// - anything that overflows the u128 mantissa
    /// - more than `MAX_FRACTION_DIGITS` fractional digits
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || GeneratorError::InvalidPercent(raw.to_string());

        let text = raw.trim();
        if text.is_empty() {
            return Err(invalid());
        }

        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, f),
            None => (text, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        if frac_part.len() as u32 > MAX_FRACTION_DIGITS {
            return Err(invalid());
        }

        let mut mantissa: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| invalid())?
        };
        for c in frac_part.chars() {
            let digit = (c as u8 - b'0') as u128;
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(digit))
                .ok_or_else(invalid)?;
        }

        Ok(Percent::new(mantissa, frac_part.len() as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(s: &str) -> Percent {
        s.parse().expect("valid percent")
    }

    #[test]
    fn parses_and_normalizes() {
        assert_eq!(pct("45.5"), Percent::new(455, 1));
        assert_eq!(pct("45.00"), pct("45"));
        assert_eq!(pct(".5"), Percent::new(5, 1));
        assert_eq!(pct("0"), Percent::new(0, 0));
        assert_eq!(pct(" 80 "), Percent::new(80, 0));
        assert!(pct("0.00").is_zero());
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", ".", "-1", "+2", "4,5", "1e5", "abc", "4.5.6"] {
            assert!(
                Percent::from_str(bad).is_err(),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn rejects_mantissa_overflow() {
        let huge = "9".repeat(40);
        assert!(Percent::from_str(&huge).is_err());
    }

    #[test]
    fn displays_round_trip() {
        for s in ["45.5", "0.05", "80", "0", "100", "12.125"] {
            assert_eq!(pct(s).to_string(), s);
        }
    }

    #[test]
    fn converts_whole_percents_exactly() {
        // 45% of 10^27 == 45 * 10^25
        assert_eq!(
            pct("45.00").to_ray(DEFAULT_RAY_DECIMALS),
            "450000000000000000000000000"
        );
        assert_eq!(pct("0").to_ray(DEFAULT_RAY_DECIMALS), "0");
        assert_eq!(
            pct("100").to_ray(DEFAULT_RAY_DECIMALS),
            "1000000000000000000000000000"
        );
    }

    #[test]
    fn converts_fractional_percents_exactly() {
        // 0.05% of 10^27 == 5 * 10^23
        assert_eq!(
            pct("0.05").to_ray(DEFAULT_RAY_DECIMALS),
            "500000000000000000000000"
        );
        assert_eq!(
            pct("4").to_ray(DEFAULT_RAY_DECIMALS),
            "40000000000000000000000000"
        );
    }

    #[test]
    fn rounds_half_to_even() {
        // 26 fractional digits: one digit finer than the ray can hold,
        // so the last digit decides the rounding.
        let half_low = Percent::new(5, 26); // exactly 0.5 ray units
        assert_eq!(half_low.to_ray(DEFAULT_RAY_DECIMALS), "0"); // ties to even (0)

        let half_odd = Percent::new(15, 26); // 1.5 ray units
        assert_eq!(half_odd.to_ray(DEFAULT_RAY_DECIMALS), "2"); // ties to even (2)

        let half_even = Percent::new(25, 26); // 2.5 ray units
        assert_eq!(half_even.to_ray(DEFAULT_RAY_DECIMALS), "2"); // stays at 2

        let above_half = Percent::new(26, 26); // 2.6 ray units
        assert_eq!(above_half.to_ray(DEFAULT_RAY_DECIMALS), "3");

        let below_half = Percent::new(24, 26); // 2.4 ray units
        assert_eq!(below_half.to_ray(DEFAULT_RAY_DECIMALS), "2");
    }

    #[test]
    fn honors_injected_scale() {
        // A protocol variant with 18-decimal fixed point (wad).
        assert_eq!(pct("45").to_ray(18), "450000000000000000");
        assert_eq!(pct("0.05").to_ray(18), "500000000000000");
    }
}
