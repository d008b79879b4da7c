//! Number formatting for tick labels, tooltips and control labels.

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "\u{b5}", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

const MINUS: char = '\u{2212}';

/// `precision` significant digits with an SI prefix (`1.50M`, `250k`, `0.00`).
///
/// Trailing zeros are kept so labels line up. Negative values use the
/// typographic minus sign.
pub fn format_si(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let precision = precision.max(1);

    let (digits, exponent) = decimal_parts(value.abs(), precision);
    let prefix_exp = exponent.div_euclid(3).clamp(-8, 8);
    let i = exponent - prefix_exp * 3 + 1;
    let n = digits.len() as i32;

    let body = if i == n {
        digits
    } else if i > n {
        format!("{digits}{}", "0".repeat((i - n) as usize))
    } else if i > 0 {
        let (int, frac) = digits.split_at(i as usize);
        format!("{int}.{frac}")
    } else {
        // Below the smallest prefix: pad with leading zeros.
        let keep = (precision as i32 + i - 1).max(1) as usize;
        let (tail, _) = decimal_parts(value.abs(), keep);
        format!("0.{}{tail}", "0".repeat((-i) as usize))
    };

    let prefix = SI_PREFIXES[(prefix_exp + 8) as usize];
    if value < 0.0 && body.chars().any(|c| c != '0' && c != '.') {
        format!("{MINUS}{body}{prefix}")
    } else {
        format!("{body}{prefix}")
    }
}

/// Fixed number of decimals (`7.5` → `"7.5"` at one digit).
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Decimals needed to distinguish ticks spaced `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    let (_, exponent) = decimal_parts(step, 1);
    (-exponent).max(0) as usize
}

/// Significant digits (without the decimal point) and the base-10 exponent
/// of `value`, rounded to `precision` digits. `value` must be finite and >= 0.
fn decimal_parts(value: f64, precision: usize) -> (String, i32) {
    let formatted = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = formatted
        .split_once('e')
        .unwrap_or((formatted.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exponent.parse().unwrap_or(0))
}

#[cfg(test)]
#[path = "../../tests/unit/chart/format.rs"]
mod tests;
