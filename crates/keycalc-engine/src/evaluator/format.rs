// Result formatting under the significant-digit budget

use keycalc_core::{DIGIT_UPPER, Unit, UnitType};

/// Format a result to [`DIGIT_UPPER`] significant digits.
///
/// Exponential notation is used when the result exceeds `10^8`, or when its
/// magnitude is below 1 and rounding to 8 digits loses more than
/// `threshold` (in units of the 8th digit) in both directions.
/// Trailing fractional zeros are dropped. An exponential mantissa keeps
/// one fractional digit (`1.0e+8`).
///
/// ```
/// use keycalc_engine::evaluator::format_result;
/// assert_eq!(format_result(3.14, 0.01), "3.14");
/// assert_eq!(format_result(1.0 / 3.0, 0.01), "3.3333333e-1");
/// assert_eq!(format_result(123456789.0, 0.01), "1.2345679e+8");
/// ```
pub fn format_result(value: f64, threshold: f64) -> String {
    // No "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    let abs = value.abs();
    let scaled = abs * 10f64.powi(DIGIT_UPPER as i32 - 1);
    let lower_error = scaled - scaled.floor();
    let upper_error = scaled.ceil() - scaled;

    let inexact_fraction = abs < 1.0 && lower_error > threshold && upper_error > threshold;
    let raw = if inexact_fraction || value > 10f64.powi(DIGIT_UPPER as i32) {
        to_exponential(value, DIGIT_UPPER - 1)
    } else {
        to_precision(value, DIGIT_UPPER)
    };
    trim_zeros(&raw)
}

/// Digits printed when reading a value's decimal expansion. Enough that a
/// cut at [`DIGIT_UPPER`] never lands on a digit produced by this formatting's
/// own rounding.
const EXPANSION_DIGITS: usize = 40;

/// The first `precision` significant digits of `abs`, rounded half up, and
/// the decimal exponent of the first digit.
///
/// `format!` rounds exact ties to even; a displayed result rounds them away
/// from zero.
fn round_half_up(abs: f64, precision: usize) -> (Vec<u8>, i32) {
    let expansion = format!("{abs:.EXPANSION_DIGITS$e}");
    let (mantissa, exp) = expansion.split_once('e').unwrap_or((expansion.as_str(), "0"));
    let mut exp: i32 = exp.parse().unwrap_or(0);
    let all: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let (kept, dropped) = all.split_at(precision.min(all.len()));
    let mut digits = kept.to_vec();

    if dropped.first().is_some_and(|&d| d >= 5) {
        match digits.iter().rposition(|&d| d != 9) {
            Some(i) => {
                digits[i] += 1;
                digits[i + 1..].fill(0);
            }
            None => {
                // 9.99…9 carries into a new leading digit.
                digits.fill(0);
                digits[0] = 1;
                exp += 1;
            }
        }
    }
    (digits, exp)
}

fn digit_str(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// `d.ddde±n` with `fraction_digits` digits after the point.
fn to_exponential(value: f64, fraction_digits: usize) -> String {
    let (digits, exp) = round_half_up(value.abs(), fraction_digits + 1);
    let sign = if value < 0.0 { "-" } else { "" };
    let (int, frac) = digits.split_at(1);
    let mantissa = if frac.is_empty() {
        digit_str(int)
    } else {
        format!("{}.{}", digit_str(int), digit_str(frac))
    };
    let exp_sign = if exp < 0 { '-' } else { '+' };
    format!("{sign}{mantissa}e{exp_sign}{}", exp.unsigned_abs())
}

/// Round to `precision` significant digits, switching to exponential
/// notation for very large or very small magnitudes.
fn to_precision(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return format!("{value:.prec$}", prec = precision - 1);
    }
    // The exponent must be taken after rounding: 9.99999999 rounds to 10.
    let (digits, exp) = round_half_up(value.abs(), precision);
    if exp < -6 || exp >= precision as i32 {
        return to_exponential(value, precision - 1);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if exp < 0 {
        let zeros = "0".repeat(exp.unsigned_abs() as usize - 1);
        return format!("{sign}0.{zeros}{}", digit_str(&digits));
    }
    let (int, frac) = digits.split_at(exp as usize + 1);
    if frac.is_empty() {
        format!("{sign}{}", digit_str(int))
    } else {
        format!("{sign}{}.{}", digit_str(int), digit_str(frac))
    }
}

fn trim_zeros(raw: &str) -> String {
    match raw.split_once('e') {
        Some((mantissa, exp)) => match mantissa.split_once('.') {
            Some((int, frac)) => {
                let frac = frac.trim_end_matches('0');
                let frac = if frac.is_empty() { "0" } else { frac };
                format!("{int}.{frac}e{exp}")
            }
            None => raw.to_string(),
        },
        None if raw.contains('.') => {
            let trimmed = raw.trim_end_matches('0');
            trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
        }
        None => raw.to_string(),
    }
}

/// Turn a formatted result into units that can be replayed as input.
///
/// Every digit other than `0` becomes [`UnitType::Number`], `1` included.
pub fn result_units(formatted: &str) -> Vec<Unit> {
    formatted
        .chars()
        .map(|c| {
            let unit_type = match c {
                '.' => UnitType::Dot,
                '0' => UnitType::Zero,
                'e' => UnitType::Exp,
                '+' => UnitType::Plus,
                '-' => UnitType::Minus,
                _ => UnitType::Number,
            };
            Unit::new(unit_type, c.to_string())
        })
        .collect()
}
