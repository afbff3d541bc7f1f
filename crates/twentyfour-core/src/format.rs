use crate::EPSILON;

/// Formats a value for display.
///
/// Values within [`EPSILON`] of an integer are printed as that integer.
/// Everything else is printed with up to two decimal places, trailing zeros
/// removed.
///
/// # Examples
///
/// ```
/// use twentyfour_core::format_value;
///
/// assert_eq!(format_value(8.0), "8");
/// assert_eq!(format_value(8.0 / 3.0), "2.67");
/// assert_eq!(format_value(-2.0), "-2");
/// assert_eq!(format_value(0.5), "0.5");
/// assert_eq!(format_value(23.999_999_999_999_99), "24");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < EPSILON {
        // avoid "-0"
        if rounded == 0.0 {
            return "0".to_owned();
        }
        return format!("{rounded:.0}");
    }

    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}
