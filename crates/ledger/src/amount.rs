//! Amount validation and normalization.

use crate::error::LedgerError;

/// Validates `input` as an amount and strips thousands separators.
///
/// The accepted shape is digits with optional `,` grouping (first group one
/// to three digits, later groups exactly three) and an optional decimal
/// fraction: `1234`, `12.5`, `1,234.50`. The result is the same text with
/// the separators removed; the amount stays text until it is formatted into
/// a record line.
pub fn parse(input: &str) -> Result<String, LedgerError> {
    let trimmed = input.trim();
    let invalid = || LedgerError::InvalidAmount(input.to_string());

    let (integral, fraction) = match trimmed.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (trimmed, None),
    };

    if let Some(fraction) = fraction
        && (fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(invalid());
    }

    if integral.contains(',') {
        let mut groups = integral.split(',');
        let head = groups.next().unwrap_or_default();
        if head.is_empty() || head.len() > 3 || !head.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        for group in groups {
            if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
        }
    } else if integral.is_empty() || !integral.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let mut normalized = integral.replace(',', "");
    if let Some(fraction) = fraction {
        normalized.push('.');
        normalized.push_str(fraction);
    }
    Ok(normalized)
}
