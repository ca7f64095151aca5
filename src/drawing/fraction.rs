//! Shop-fraction formatting for inch dimensions.

/// Default finest denominator (sixteenths)
pub const DEFAULT_PRECISION: u32 = 16;
/// Finest denominator accepted; larger precisions are clamped to it
pub const MAX_PRECISION: u32 = 256;

/// Format a decimal inch value as a shop fraction string.
///
/// The value is rounded to six decimals, then the fractional part is
/// replaced by the closest fraction whose denominator is at most
/// `precision`, clamped to [`MAX_PRECISION`].
///
/// ```
/// use kintsugi::to_shop_fraction;
///
/// assert_eq!(to_shop_fraction(0.625, 16), "5/8\"");
/// assert_eq!(to_shop_fraction(1.75, 16), "1 3/4\"");
/// assert_eq!(to_shop_fraction(3.0, 16), "3\"");
/// ```
pub fn to_shop_fraction(value: f64, precision: u32) -> String {
    if !value.is_finite() {
        return format!("{value}\"");
    }
    if value < 0.0 {
        let inner = to_shop_fraction(-value, precision);
        // -0.0000001 rounds to zero and takes no sign
        return if inner == "0\"" { inner } else { format!("-{inner}") };
    }

    // from 2^52 up every f64 is a whole number
    let rounded = if value < 4_503_599_627_370_496.0 {
        (value * 1e6).round() / 1e6
    } else {
        value
    };
    let whole = rounded.trunc();
    let frac = rounded - whole;

    if frac == 0.0 {
        return format!("{whole:.0}\"");
    }

    let (num, den) = closest_fraction(frac, precision.clamp(1, MAX_PRECISION));
    if num == 0 {
        format!("{whole:.0}\"")
    } else if num == den {
        format!("{:.0}\"", whole + 1.0)
    } else if whole == 0.0 {
        format!("{num}/{den}\"")
    } else {
        format!("{whole:.0} {num}/{den}\"")
    }
}

/// Closest `n/d` to `x` (0 <= x < 1) with `d <= max_den`, in lowest terms.
/// Ties go to the smaller denominator.
fn closest_fraction(x: f64, max_den: u32) -> (u32, u32) {
    let mut best = (0u32, 1u32);
    let mut best_err = x.abs();
    for den in 2..=max_den {
        let num = (x * den as f64).round() as u32;
        let err = (x - num as f64 / den as f64).abs();
        if err < best_err - 1e-12 {
            best = (num, den);
            best_err = err;
        }
    }
    // d = 1 with n = 1 covers values that round up to the next inch
    if (1.0 - x).abs() < best_err - 1e-12 {
        best = (1, 1);
    }
    let g = gcd(best.0, best.1);
    (best.0 / g, best.1 / g)
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_examples() {
        assert_eq!(to_shop_fraction(0.625, 16), "5/8\"");
        assert_eq!(to_shop_fraction(1.75, 16), "1 3/4\"");
        assert_eq!(to_shop_fraction(3.0, 16), "3\"");
    }

    #[test]
    fn negative_values() {
        assert_eq!(to_shop_fraction(-0.5, 16), "-1/2\"");
        assert_eq!(to_shop_fraction(-2.25, 16), "-2 1/4\"");
        assert_eq!(to_shop_fraction(-0.0000001, 16), "0\"");
    }

    #[test]
    fn carries_into_whole_inch() {
        assert_eq!(to_shop_fraction(0.999, 16), "1\"");
        assert_eq!(to_shop_fraction(2.98, 16), "3\"");
    }

    #[test]
    fn coarser_precision() {
        assert_eq!(to_shop_fraction(0.8125, 16), "13/16\"");
        assert_eq!(to_shop_fraction(0.8125, 8), "4/5\"");
        assert_eq!(to_shop_fraction(0.3, 4), "1/3\"");
    }

    #[test]
    fn tiny_fraction_rounds_down() {
        assert_eq!(to_shop_fraction(4.01, 16), "4\"");
    }

    #[test]
    fn huge_values_keep_their_whole_part() {
        assert_eq!(to_shop_fraction(1e20, 16), "100000000000000000000\"");
        assert_eq!(to_shop_fraction(-1e20, 16), "-100000000000000000000\"");
        assert!(to_shop_fraction(f64::MAX, 16).starts_with("17976931348623157"));
    }

    #[test]
    fn precision_is_clamped() {
        assert_eq!(
            to_shop_fraction(0.5004, u32::MAX),
            to_shop_fraction(0.5004, MAX_PRECISION)
        );
    }

    #[test]
    fn not_a_number() {
        assert_eq!(to_shop_fraction(f64::NAN, 16), "NaN\"");
    }
}
