//! Number and grid formatting.
//!
//! Two renderings exist:
//! - [`format_value`] for the screen and the clipboard, which snaps values
//!   within `1e-9` of an integer to that integer;
//! - [`format_general`], a `%g`-style renderer used for CSV export.

use crate::grid::Grid;

/// Values closer than this to an integer are shown as that integer.
pub const INTEGER_TOLERANCE: f64 = 1e-9;

/// Significant digits used for display and export.
pub const DISPLAY_PRECISION: usize = 6;

/// Formats a value for display.
///
/// ```
/// use matrixtool_core::format_value;
///
/// assert_eq!(format_value(2.0000000001), "2");
/// assert_eq!(format_value(1.0 / 3.0), "0.333333");
/// ```
pub fn format_value(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < INTEGER_TOLERANCE {
        if rounded == 0.0 {
            return "0".to_string();
        }
        return format!("{rounded:.0}");
    }
    format_general(value, DISPLAY_PRECISION)
}

/// Formats a value like C's `%.<precision>g`.
///
/// Fixed notation is used when the decimal exponent lies in
/// `[-4, precision)`, scientific notation otherwise. Trailing zeros are
/// removed in both cases.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Renders a grid as display text: one line per row, values separated by
/// a single space.
pub fn grid_to_text(grid: &Grid) -> String {
    join_rows(grid, format_value)
}

/// Renders a grid with full precision so that parsing the text yields the
/// same grid.
pub fn grid_to_source_text(grid: &Grid) -> String {
    join_rows(grid, |value| value.to_string())
}

fn join_rows(grid: &Grid, render: impl Fn(f64) -> String) -> String {
    grid.iter_rows()
        .map(|row| {
            row.into_iter()
                .map(&render)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
