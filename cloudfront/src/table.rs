use crate::document::BehaviorRecord;

/// One flattened line of the behavior summary table.
#[derive(Debug, PartialEq)]
pub struct BehaviorRow {
    pub path_pattern: String,
    pub target_origin: String,
    pub cache_policy: String,
    pub origin_request_policy: String,
    pub response_headers_policy: String,
}

const HEADERS: [&str; 5] = [
    "PathPattern",
    "TargetOrigin",
    "CachePolicy",
    "OriginRequestPolicy",
    "ResponseHeadersPolicy",
];

pub fn summary_row(record: &BehaviorRecord) -> BehaviorRow {
    BehaviorRow {
        path_pattern: record.path_pattern.clone(),
        target_origin: record.target_origin_id.clone(),
        cache_policy: policy_cell(record.cache_policy.as_ref().and_then(|p| p.display_name())),
        origin_request_policy: policy_cell(record.origin_request_policy.as_ref().and_then(|p| p.display_name())),
        response_headers_policy: policy_cell(record.response_headers_policy.as_ref().and_then(|p| p.display_name())),
    }
}

fn policy_cell(name: Option<&str>) -> String {
    name.unwrap_or("None").to_string()
}

/// Render rows as a pipe-delimited table with padded columns:
///
/// ```text
/// | PathPattern | TargetOrigin | ... |
/// |-------------|--------------|-----|
/// | /api/*      | api-origin   | ... |
/// ```
pub fn render(rows: &[BehaviorRow]) -> String {
    let mut widths: Vec<usize> = HEADERS.iter().map(|header| header.len()).collect();
    for row in rows {
        for (i, cell) in row_cells(row).iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();

    out.push_str(&format_line(&HEADERS.map(String::from), &widths));
    out.push('\n');

    let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    out.push_str(&format!(
        "|-{}-|",
        separator.join("-|-"),
    ));
    out.push('\n');

    for row in rows {
        out.push_str(&format_line(&row_cells(row), &widths));
        out.push('\n');
    }

    out
}

fn row_cells(row: &BehaviorRow) -> [String; 5] {
    [
        row.path_pattern.clone(),
        row.target_origin.clone(),
        row.cache_policy.clone(),
        row.origin_request_policy.clone(),
        row.response_headers_policy.clone(),
    ]
}

fn format_line(cells: &[String; 5], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    format!("| {} |", padded.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CachePolicyConfigRecord, CachePolicyRecord, PolicyError, PolicyResolution};

    fn row(path: &str, origin: &str) -> BehaviorRow {
        BehaviorRow {
            path_pattern: path.to_string(),
            target_origin: origin.to_string(),
            cache_policy: String::from("None"),
            origin_request_policy: String::from("None"),
            response_headers_policy: String::from("None"),
        }
    }

    #[test]
    fn renders_padded_github_style_table() {
        let rows = vec![row("Default (*)", "primary"), row("/api/*", "api-origin")];
        let rendered = render(&rows);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "| PathPattern | TargetOrigin | CachePolicy | OriginRequestPolicy | ResponseHeadersPolicy |"
        );
        assert_eq!(
            lines[1],
            "|-------------|--------------|-------------|---------------------|-----------------------|"
        );
        assert_eq!(
            lines[2],
            "| Default (*) | primary      | None        | None                | None                  |"
        );

        // Every line is the same width.
        assert!(lines.iter().all(|line| line.len() == lines[0].len()));
    }

    #[test]
    fn columns_grow_to_fit_long_cells() {
        let mut long = row("/really/long/path/pattern/*", "origin");
        long.cache_policy = String::from("Managed-CachingOptimized");
        let rendered = render(&[long]);

        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].contains("PathPattern"));
        assert!(lines[2].contains("/really/long/path/pattern/*"));
        assert!(lines.iter().all(|line| line.len() == lines[0].len()));
    }

    #[test]
    fn empty_row_set_renders_header_only() {
        let rendered = render(&[]);
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn summary_row_shows_policy_names_or_none() {
        let mut record = BehaviorRecord {
            path_pattern: String::from("/api/*"),
            target_origin_id: String::from("api-origin"),
            viewer_protocol_policy: String::from("https-only"),
            allowed_methods: None,
            cached_methods: None,
            compress: None,
            lambda_function_associations: None,
            function_associations: None,
            field_level_encryption_id: None,
            cache_policy: Some(PolicyResolution::Resolved(CachePolicyRecord {
                id: String::from("cp-1"),
                last_modified_time: String::from("2024-01-01T00:00:00Z"),
                config: Some(CachePolicyConfigRecord {
                    name: String::from("Managed-CachingDisabled"),
                    comment: None,
                    default_ttl: None,
                    max_ttl: None,
                    min_ttl: 0,
                    parameters_in_cache_key_and_forwarded_to_origin: None,
                }),
            })),
            origin_request_policy: None,
            response_headers_policy: None,
        };

        let row = summary_row(&record);
        assert_eq!(row.path_pattern, "/api/*");
        assert_eq!(row.target_origin, "api-origin");
        assert_eq!(row.cache_policy, "Managed-CachingDisabled");
        // Absent and failed resolutions both show as None.
        assert_eq!(row.origin_request_policy, "None");
        assert_eq!(row.response_headers_policy, "None");

        record.cache_policy = Some(PolicyResolution::Failed(PolicyError {
            error: String::from("NoSuchCachePolicy"),
        }));
        assert_eq!(summary_row(&record).cache_policy, "None");
    }
}
