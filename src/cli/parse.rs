use waypath_core::format::OutputFormat;
use waypath_core::Criterion;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse route criterion from string
pub fn parse_criterion(s: &str) -> std::result::Result<Criterion, String> {
    s.parse::<Criterion>().map_err(|e| e.to_string())
}

/// Normalize a node code typed by a user: trimmed and upper-cased
pub fn normalize_node(s: &str) -> String {
    s.trim().to_uppercase()
}
