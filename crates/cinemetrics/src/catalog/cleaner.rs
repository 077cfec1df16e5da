//! Per-field coercions applied to raw export cells. Each one degrades an
//! unparseable value to `None`; none of them can fail the whole import.

pub(crate) fn parse_rating(raw: &str) -> Option<f64> {
    // "NaN" parses as a float; treat it as missing like any other junk cell.
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub(crate) fn parse_year(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

/// Runtime cells carry a unit suffix ("142 min"). Strip it, then parse the
/// remaining digits as minutes.
pub(crate) fn parse_runtime(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix(" min").unwrap_or(trimmed);
    digits.trim().parse::<u32>().ok()
}

/// Gross cells are currency-formatted ("$28,341,469") or the literal "nan".
/// Re-applying this to an already-cleaned value is a no-op.
pub(crate) fn parse_gross(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .chars()
        .filter(|ch| *ch != '$' && *ch != ',')
        .collect();
    let trimmed = stripped.trim();
    if trimmed.is_empty() || trimmed == "nan" {
        return None;
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Genre cells hold a comma-separated label list ("Crime, Drama"). The first
/// label is the primary genre.
pub(crate) fn split_genres(raw: &str) -> Vec<String> {
    raw.split(", ")
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}
