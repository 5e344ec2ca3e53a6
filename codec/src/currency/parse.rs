use crate::error::CodecError;

fn is_kept(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+' | '(' | ')')
}

pub(crate) fn parse_amount(text: &str) -> Result<f64, CodecError> {
    let cleaned: String = text.chars().filter(|&c| is_kept(c)).collect();
    if !cleaned.bytes().any(|b| b.is_ascii_digit()) {
        tracing::debug!("No digits in currency text '{}'", text);
        return Err(CodecError::parse(text, "no digits found"));
    }

    let (negative, body) = split_sign(text, &cleaned)?;
    if body.contains(['-', '+', '(', ')']) {
        return Err(CodecError::parse(text, "misplaced sign"));
    }

    let (integer, fraction) = split_separators(text, body)?;
    let normalized = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if integer.is_empty() { "0" } else { integer.as_str() },
        fraction.unwrap_or("0"),
    );
    tracing::trace!("Normalized '{}' to '{}'", text, normalized);

    let value: f64 = normalized
        .parse()
        .map_err(|e| CodecError::parse(text, format!("{}", e)))?;
    if !value.is_finite() {
        return Err(CodecError::parse(text, "value out of range"));
    }
    // "-0,00" is plain zero.
    Ok(if value == 0.0 { 0.0 } else { value })
}

fn split_sign<'a>(text: &str, cleaned: &'a str) -> Result<(bool, &'a str), CodecError> {
    if let Some(inner) = cleaned.strip_prefix('(') {
        let inner = inner
            .strip_suffix(')')
            .ok_or_else(|| CodecError::parse(text, "unbalanced parentheses"))?;
        return Ok((true, inner));
    }
    if let Some(rest) = cleaned.strip_prefix('-') {
        return Ok((true, rest));
    }
    if let Some(rest) = cleaned.strip_prefix('+') {
        return Ok((false, rest));
    }
    Ok((false, cleaned))
}

/// Splits `body` (digits, `.` and `,` only) into ungrouped integer digits and
/// the optional fraction digits.
fn split_separators<'a>(text: &str, body: &'a str) -> Result<(String, Option<&'a str>), CodecError> {
    let decimal_pos = match (body.rfind('.'), body.rfind(',')) {
        (Some(dot), Some(comma)) => Some(dot.max(comma)),
        (Some(pos), None) | (None, Some(pos)) => {
            let sep = body.as_bytes()[pos];
            let occurrences = body.bytes().filter(|&b| b == sep).count();
            let trailing_digits = body.len() - pos - 1;
            if occurrences == 1 && trailing_digits == 2 {
                Some(pos)
            } else {
                None
            }
        }
        (None, None) => None,
    };

    let (integer_raw, fraction) = match decimal_pos {
        Some(pos) => {
            let decimal = body.as_bytes()[pos] as char;
            let integer_raw = &body[..pos];
            if integer_raw.contains(decimal) {
                return Err(CodecError::parse(text, "multiple decimal separators"));
            }
            let fraction = &body[pos + 1..];
            if fraction.is_empty() {
                return Err(CodecError::parse(text, "missing digits after decimal separator"));
            }
            tracing::debug!("Using '{}' as decimal separator in '{}'", decimal, text);
            (integer_raw, Some(fraction))
        }
        None => (body, None),
    };

    let integer = ungroup(text, integer_raw, fraction.is_some())?;
    Ok((integer, fraction))
}

fn ungroup(text: &str, integer_raw: &str, has_fraction: bool) -> Result<String, CodecError> {
    if !integer_raw.contains(['.', ',']) {
        if integer_raw.is_empty() && !has_fraction {
            return Err(CodecError::parse(text, "no digits found"));
        }
        return Ok(integer_raw.to_string());
    }

    let mut groups = integer_raw.split(['.', ',']);
    let first = groups.next().unwrap_or_default();
    if first.is_empty() || first.len() > 3 || first.starts_with('0') {
        return Err(CodecError::parse(text, "malformed leading digit group"));
    }
    let mut digits = first.to_string();
    for group in groups {
        if group.len() != 3 {
            return Err(CodecError::parse(text, "digit groups must have three digits"));
        }
        digits.push_str(group);
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> f64 {
        parse_amount(s).unwrap()
    }

    fn reason(s: &str) -> String {
        match parse_amount(s) {
            Err(CodecError::Parse { reason, .. }) => reason,
            other => panic!("expected parse error for '{}', got {:?}", s, other),
        }
    }

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(parse("1000"), 1000.0);
        assert_eq!(parse("0"), 0.0);
        assert_eq!(parse("  42 "), 42.0);
    }

    #[test]
    fn test_single_separator_with_two_digits_is_decimal() {
        assert_eq!(parse("1234.56"), 1234.56);
        assert_eq!(parse("1234,56"), 1234.56);
        assert_eq!(parse(",50"), 0.5);
        assert_eq!(parse("R$ 0,01"), 0.01);
    }

    #[test]
    fn test_single_separator_otherwise_groups_thousands() {
        assert_eq!(parse("1.234"), 1234.0);
        assert_eq!(parse("1,234"), 1234.0);
        assert_eq!(parse("1.234.567"), 1_234_567.0);
        assert_eq!(parse("600.822.115"), 600_822_115.0);
    }

    #[test]
    fn test_both_separators_rightmost_is_decimal() {
        assert_eq!(parse("1.234,56"), 1234.56);
        assert_eq!(parse("1,234.56"), 1234.56);
        assert_eq!(parse("600.822.115,84"), 600_822_115.84);
        assert_eq!(parse("1.234,5"), 1234.5);
        assert_eq!(parse("1,234.567"), 1234.567);
    }

    #[test]
    fn test_signs() {
        assert_eq!(parse("-1.234,56"), -1234.56);
        assert_eq!(parse("+12,00"), 12.0);
        assert_eq!(parse("(1.234,56)"), -1234.56);
        assert_eq!(parse("-0,00"), 0.0);
        assert!(parse("-0,00").is_sign_positive());
    }

    #[test]
    fn test_symbols_and_text_are_ignored() {
        assert_eq!(parse("R$\u{a0}1.234,56"), 1234.56);
        assert_eq!(parse("BRL 99,90"), 99.9);
    }

    #[test]
    fn test_malformed_separators() {
        assert_eq!(reason("1.234.56"), "digit groups must have three digits");
        assert_eq!(reason("1234.5"), "malformed leading digit group");
        assert_eq!(reason("1,5"), "digit groups must have three digits");
        assert_eq!(reason("1,234.567,89"), "multiple decimal separators");
        assert_eq!(reason("1.234,"), "missing digits after decimal separator");
        assert_eq!(reason("1234.567,89"), "malformed leading digit group");
        assert_eq!(reason(".123"), "malformed leading digit group");
        assert_eq!(reason("0.001"), "malformed leading digit group");
    }

    #[test]
    fn test_malformed_signs() {
        assert_eq!(reason("12-34"), "misplaced sign");
        assert_eq!(reason("--5"), "misplaced sign");
        assert_eq!(reason("(5"), "unbalanced parentheses");
        assert_eq!(reason("(-5)"), "misplaced sign");
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(reason("abc"), "no digits found");
        assert_eq!(reason("-R$"), "no digits found");
    }

    #[test]
    fn test_parse_error_keeps_input() {
        let err = parse_amount("R$ abc").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse currency 'R$ abc': no digits found");
    }
}
