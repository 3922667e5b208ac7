// printf-style number formatting used by the report layouts, plus the
// percent arithmetic shared between the driver and the simulator.

/// Percent change from `from` to `to`, i.e. `((to - from) / from) * 100`.
///
/// A zero `from` yields an infinite or NaN result rather than a panic; the
/// caller decides how to render it.
pub fn percent_change(from: f64, to: f64) -> f64 {
    ((to - from) / from) * 100.0
}

/// `%.8f`
pub fn format_price(value: f64) -> String {
    signed_digits(value, 8)
}

/// `%W.Pf`: right-aligned in `width` columns with `precision` decimals.
pub fn format_fixed(value: f64, width: usize, precision: usize) -> String {
    format!("{:>width$}", signed_digits(value, precision), width = width)
}

/// `% W.Pf`: like `format_fixed` but a non-negative value gets a leading
/// space where the minus sign would be, so columns line up.
pub fn format_space_signed(value: f64, width: usize, precision: usize) -> String {
    let sign = if value.is_nan() {
        ""
    } else if value < 0.0 {
        "-"
    } else {
        " "
    };
    let body = format!("{}{}", sign, fixed_digits(value.abs(), precision));
    format!("{:>width$}", body, width = width)
}

fn signed_digits(value: f64, precision: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, fixed_digits(value.abs(), precision))
}

/// Digits of a non-negative `magnitude` with `precision` decimals, rounding
/// exact ties away from zero as printf/`toFixed` do. `{:.N}` alone rounds
/// them to even (12.25 -> "12.2" instead of "12.3").
fn fixed_digits(magnitude: f64, precision: usize) -> String {
    let rounded = format!("{:.*}", precision, magnitude);
    if !magnitude.is_finite() {
        return rounded;
    }

    // A tie at digit `precision + 1` is a multiple of 2^-(precision + 1), so
    // its decimal expansion ends there and prints exactly.
    let scaled = magnitude * 2f64.powi(precision as i32 + 1);
    if !scaled.is_finite() || scaled.fract() != 0.0 {
        return rounded;
    }
    let exact = format!("{:.*}", precision + 1, magnitude);
    if !exact.ends_with('5') {
        return rounded;
    }

    let kept = exact[..exact.len() - 1].trim_end_matches('.');
    increment_last_digit(kept)
}

/// Adds one unit in the last place of a plain decimal string, carrying left.
fn increment_last_digit(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
                break;
            }
        }
    }
    let body = String::from_utf8(bytes).unwrap_or_default();
    if carry {
        format!("1{}", body)
    } else {
        body
    }
}
