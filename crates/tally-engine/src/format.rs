//! Operand rendering for the display lines.

/// Render an operand for display: the integer part is grouped into
/// thousands with `,`, a decimal part is appended verbatim after `.`.
///
/// An absent operand renders as absent. A bare trailing `.` is kept
/// (`"12."` stays `"12."`), and an empty integer part renders as `"0"`
/// (`"."` becomes `"0."`). Integer parts that are not plain digit runs,
/// like the `"Error"` sentinel, pass through untouched.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;
    match operand.split_once('.') {
        None => Some(group_integer(operand)),
        Some((integer, decimal)) => Some(format!("{}.{decimal}", group_integer(integer))),
    }
}

fn group_integer(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if digits.is_empty() {
        return "0".to_string();
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return integer.to_string();
    }

    let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_the_integer_part() {
        assert_eq!(format_operand(Some("1234567")).as_deref(), Some("1,234,567"));
        assert_eq!(format_operand(Some("123")).as_deref(), Some("123"));
        assert_eq!(format_operand(Some("1000.25")).as_deref(), Some("1,000.25"));
    }

    #[test]
    fn decimal_part_passes_through_verbatim() {
        assert_eq!(
            format_operand(Some("1.000500")).as_deref(),
            Some("1.000500")
        );
    }

    #[test]
    fn tolerates_a_bare_trailing_point() {
        assert_eq!(format_operand(Some("12.")).as_deref(), Some("12."));
    }

    #[test]
    fn bare_leading_point_renders_a_zero_integer_part() {
        assert_eq!(format_operand(Some(".")).as_deref(), Some("0."));
        assert_eq!(format_operand(Some(".5")).as_deref(), Some("0.5"));
    }

    #[test]
    fn negative_integers_keep_their_sign() {
        assert_eq!(format_operand(Some("-1234")).as_deref(), Some("-1,234"));
        assert_eq!(format_operand(Some("-12.5")).as_deref(), Some("-12.5"));
    }

    #[test]
    fn error_sentinel_passes_through() {
        assert_eq!(format_operand(Some("Error")).as_deref(), Some("Error"));
    }

    #[test]
    fn absent_operand_renders_nothing() {
        assert_eq!(format_operand(None), None);
    }
}
