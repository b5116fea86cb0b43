//! Terminal rendering for decoded station metadata.

/// Renders decoded fields as two aligned columns: key left-justified to the
/// widest key, value right-justified to the widest value, with a dashed rule
/// after every row.
pub fn render_metadata(fields: &[(String, String)]) -> String {
    let key_width = fields.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let value_width = fields
        .iter()
        .map(|(_, value)| value.len())
        .max()
        .unwrap_or(0);
    let rule = "-".repeat(key_width + value_width + 2);

    let mut out = String::new();
    for (key, value) in fields {
        out.push_str(&format!("{key:<key_width$}{value:>value_width$}\n"));
        out.push_str(&rule);
        out.push('\n');
    }

    out
}

/// Convenience links shown after the metadata table. The map link is printed
/// only, never fetched.
pub fn station_links(detail_url: &str, map_url: &str) -> String {
    format!("\n\nView additional details: {detail_url}\nView on a map: {map_url}\n")
}

// -- Tests -------------------------------------------------------------------
