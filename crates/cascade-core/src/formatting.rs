use std::collections::BTreeMap;
use std::fmt::Write;

/// Parse a number that may carry comma thousands separators.
///
/// Returns `None` when what remains after removing the commas is not a
/// valid floating-point literal.
///
/// # Examples
///
/// ```
/// use cascade_core::formatting::parse_grouped_number;
///
/// assert_eq!(parse_grouped_number("12,000,000"), Some(12_000_000.0));
/// assert_eq!(parse_grouped_number("1,234.5"), Some(1234.5));
/// assert_eq!(parse_grouped_number("ns/iter"), None);
/// assert_eq!(parse_grouped_number(""), None);
/// ```
pub fn parse_grouped_number(token: &str) -> Option<f64> {
    let digits: String = token.chars().filter(|&c| c != ',').collect();
    digits.parse::<f64>().ok()
}

/// Build the suffix appended to an annotated benchmark line.
///
/// # Examples
///
/// ```
/// use cascade_core::formatting::format_rate_suffix;
///
/// assert_eq!(format_rate_suffix(2000), "    2000 RT/s");
/// assert_eq!(format_rate_suffix(0), "    0 RT/s");
/// ```
pub fn format_rate_suffix(rate: i64) -> String {
    format!("    {} RT/s", rate)
}

/// Render an occurrence histogram as a single `{key: value, ...}` dump in
/// ascending key order.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use cascade_core::formatting::format_histogram;
///
/// let hist: BTreeMap<u64, u64> = [(2, 1), (1, 1), (3, 1)].into_iter().collect();
/// assert_eq!(format_histogram(&hist), "{1: 1, 2: 1, 3: 1}");
/// assert_eq!(format_histogram(&BTreeMap::new()), "{}");
/// ```
pub fn format_histogram(histogram: &BTreeMap<u64, u64>) -> String {
    let mut out = String::from("{");
    for (i, (count, timestamps)) in histogram.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}: {}", count, timestamps);
    }
    out.push('}');
    out
}
