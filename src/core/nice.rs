use crate::core::constants::NICE_DIGITS;
use crate::error::GroundScaleError;

/// Largest power of ten applied in one step, keeping `10^k` finite for subnormal targets.
const POW10_STEP: i32 = 300;
const POW10_STEP_VALUE: f64 = 1e300;

/// A round number `digit * 10^exponent`, with `digit` one of 1, 2, 5 or 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NiceNumber {
    digit: u8,
    exponent: i32,
}

impl NiceNumber {
    pub fn digit(&self) -> u8 {
        self.digit
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The number as an `f64`.
    ///
    /// Negative exponents divide by an exact power of ten (in two steps below
    /// `10^-300`), so `5 * 10^-2` comes out as `0.05` rather than
    /// `0.05000000000000001`.
    pub fn value(&self) -> f64 {
        let digit = f64::from(self.digit);
        if self.exponent >= 0 {
            digit * 10.0_f64.powi(self.exponent)
        } else if self.exponent < -POW10_STEP {
            digit / POW10_STEP_VALUE / 10.0_f64.powi(-self.exponent - POW10_STEP)
        } else {
            digit / 10.0_f64.powi(-self.exponent)
        }
    }
}

impl std::fmt::Display for NiceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Rounds `target` up to the next value in the 1-2-5 sequence.
///
/// The digit is chosen from the order-of-magnitude fraction of `target` with
/// inclusive upper thresholds: `<= 1` gives 1, `<= 2` gives 2, `<= 5` gives 5,
/// anything above gives 10.
///
/// # Example
/// ```
/// use groundscale_rs::select_nice_number;
///
/// # fn main() -> Result<(), groundscale_rs::GroundScaleError> {
/// assert_eq!(select_nice_number(21.03)?.value(), 50.0);
/// assert_eq!(select_nice_number(0.66)?.value(), 1.0);
/// # Ok(())
/// # }
/// ```
pub fn select_nice_number(target: f64) -> Result<NiceNumber, GroundScaleError> {
    if !target.is_finite() {
        return Err(GroundScaleError::NonFiniteInput("nice number target"));
    }
    if target <= 0.0 {
        return Err(GroundScaleError::NonPositiveTarget(target));
    }

    let mut exponent = target.log10().floor() as i32;
    let mut fraction = divide_by_pow10(target, exponent);

    // log10 can be off by one ulp around exact powers of ten
    if fraction >= 10.0 {
        exponent += 1;
        fraction = divide_by_pow10(target, exponent);
    } else if fraction < 1.0 {
        exponent -= 1;
        fraction = divide_by_pow10(target, exponent);
    }

    let digit = NICE_DIGITS
        .iter()
        .copied()
        .find(|&d| fraction <= f64::from(d))
        .unwrap_or(NICE_DIGITS[NICE_DIGITS.len() - 1]);

    let nice = NiceNumber { digit, exponent };
    let value = nice.value();
    if !value.is_finite() {
        return Err(GroundScaleError::NonFiniteInput("nice number overflow"));
    }
    if value <= 0.0 {
        return Err(GroundScaleError::NonFiniteInput("nice number underflow"));
    }
    Ok(nice)
}

fn divide_by_pow10(value: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        value / 10.0_f64.powi(exponent)
    } else if exponent < -POW10_STEP {
        value * POW10_STEP_VALUE * 10.0_f64.powi(-exponent - POW10_STEP)
    } else {
        value * 10.0_f64.powi(-exponent)
    }
}
