//! Table rendering for reports.
//!
//! Pure functions producing header/row grids, laid out with `comfy-table`;
//! printing is left to the caller. JSON output is plain `serde_json` on the
//! report.

use comfy_table::presets::NOTHING;
use comfy_table::Table;

use crate::report::ValidationReport;

/// Headers and rows of one table, before layout.
pub type Grid = (Vec<String>, Vec<Vec<String>>);

const CHECK_HEADERS: [&str; 6] = [
    "Severity",
    "Check ID",
    "Field",
    "Resource",
    "Message",
    "Remediation",
];

/// Subject columns followed by the summary counts and the strict flag.
pub fn summary_table<R: ValidationReport + ?Sized>(report: &R) -> Grid {
    let summary = report.summary();
    let mut headers = Vec::new();
    let mut row = Vec::new();
    for (header, value) in report.subject_rows() {
        headers.push(header.to_string());
        row.push(value);
    }
    for (header, value) in [
        ("Errors", summary.errors.to_string()),
        ("Warnings", summary.warnings.to_string()),
        ("Infos", summary.infos.to_string()),
        ("Blocking", summary.blocking.to_string()),
        ("Strict", report.strict().to_string()),
    ] {
        headers.push(header.to_string());
        row.push(value);
    }
    (headers, vec![row])
}

/// One row per check, or a single `validation.ok` row when there are none.
pub fn check_table<R: ValidationReport + ?Sized>(report: &R) -> Grid {
    let headers: Vec<String> = CHECK_HEADERS.iter().map(|h| h.to_string()).collect();
    let checks = report.checks();
    if checks.is_empty() {
        let row: Vec<String> = ["info", "validation.ok", "", "", "No issues found", ""]
            .iter()
            .map(|s| s.to_string())
            .collect();
        return (headers, vec![row]);
    }

    let rows: Vec<Vec<String>> = checks
        .iter()
        .map(|check| {
            vec![
                check.severity.to_string(),
                check.id.clone(),
                check.field.clone(),
                check.resource_label(),
                check.message.clone(),
                check.remediation.clone(),
            ]
        })
        .collect();
    (headers, rows)
}

/// Summary table, a blank line, then the checks table.
pub fn render_table<R: ValidationReport + ?Sized>(report: &R) -> String {
    format!(
        "{}\n\n{}\n",
        layout(&summary_table(report)),
        layout(&check_table(report))
    )
}

/// Borderless layout; column widths follow display width, so wide
/// characters stay aligned.
pub fn layout((headers, rows): &Grid) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(headers.clone());
    for row in rows {
        table.add_row(row.clone());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Iap;
    use crate::validate::{validate_iap, IapInput};

    fn report(state: &str) -> crate::report::IapReport {
        validate_iap(
            &IapInput {
                app_id: "app-1".into(),
                iaps: vec![Iap {
                    id: "iap-1".into(),
                    name: "Pro".into(),
                    product_id: "com.example.pro".into(),
                    state: state.into(),
                    ..Default::default()
                }],
            },
            true,
        )
    }

    #[test]
    fn test_summary_table_shape() {
        let (headers, rows) = summary_table(&report("READY_TO_SUBMIT"));
        assert_eq!(
            headers,
            vec!["App ID", "IAPs", "Errors", "Warnings", "Infos", "Blocking", "Strict"]
        );
        assert_eq!(rows[0], vec!["app-1", "1", "0", "1", "0", "1", "true"]);
    }

    #[test]
    fn test_check_table_ok_row_when_clean() {
        let (_, rows) = check_table(&report("APPROVED"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][1], "validation.ok");
        assert_eq!(rows[0][4], "No issues found");
    }

    #[test]
    fn test_check_table_resource_column() {
        let (_, rows) = check_table(&report("REJECTED"));
        assert_eq!(rows[0][0], "warning");
        assert_eq!(rows[0][3], "inAppPurchaseV2:iap-1");
    }

    fn column_of(text: &str, row_start: &str, needle: char) -> usize {
        let line = text
            .lines()
            .find(|l| l.trim_start().starts_with(row_start))
            .unwrap();
        line.chars().position(|c| c == needle).unwrap()
    }

    #[test]
    fn test_layout_aligns_columns() {
        let grid: Grid = (
            vec!["A".into(), "Long header".into()],
            vec![vec!["value".into(), "x".into()]],
        );
        let text = layout(&grid).to_string();
        assert_eq!(column_of(&text, "A", 'L'), column_of(&text, "value", 'x'));
    }

    #[test]
    fn test_layout_pads_wide_characters_by_display_width() {
        let grid: Grid = (
            vec!["Name".into(), "X".into()],
            vec![
                vec!["名前名前".into(), "y".into()],
                vec!["abcd".into(), "z".into()],
            ],
        );
        let text = layout(&grid).to_string();
        // Each CJK character occupies two columns but one `char`.
        assert_eq!(column_of(&text, "abcd", 'z'), column_of(&text, "名前名前", 'y') + 4);
        assert_eq!(column_of(&text, "abcd", 'z'), column_of(&text, "Name", 'X'));
    }

    #[test]
    fn test_render_table_contains_both_sections() {
        let out = render_table(&report("REJECTED"));
        assert!(out.contains("Blocking"));
        assert!(out.contains("Severity"));
        assert!(out.contains("iap.review_readiness.needs_attention"));
    }
}
