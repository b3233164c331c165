//! Multi-subject directory summary: a tabular PDF with bordered rows,
//! display-width truncation for the free-text columns and a trailing total.

use super::ReportError;
use super::pdf::{Align, FontStyle, PageWriter};
use super::roster::RosterRow;

const SUMMARY_COLUMNS: [&str; 5] = ["#", "Name", "Email", "Employee ID", "Department"];
const COLUMN_WIDTHS_MM: [f32; 5] = [10.0, 50.0, 60.0, 30.0, 40.0];
const TABLE_LEFT: f32 = 10.0;

pub const NAME_MAX_CHARS: usize = 25;
pub const EMAIL_MAX_CHARS: usize = 30;
pub const DEPARTMENT_MAX_CHARS: usize = 20;

/// Display-width cap for the fixed-width columns; deliberate, not data loss.
fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        value.chars().take(max_chars).collect()
    }
}

/// Filter annotation lines under the title, one per non-empty filter.
pub fn filter_annotations(
    academic_year: Option<&str>,
    department: Option<&str>,
) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(year) = academic_year.filter(|y| !y.trim().is_empty()) {
        lines.push(format!("Academic Year: {year}"));
    }
    if let Some(dept) = department.filter(|d| !d.trim().is_empty()) {
        lines.push(format!("Department: {dept}"));
    }
    lines
}

fn summary_cells(index: usize, row: &RosterRow) -> [String; 5] {
    [
        (index + 1).to_string(),
        truncate(&row.name, NAME_MAX_CHARS),
        truncate(&row.email, EMAIL_MAX_CHARS),
        row.employee_id.clone(),
        truncate(row.department.as_deref().unwrap_or(""), DEPARTMENT_MAX_CHARS),
    ]
}

pub fn compile_roster_summary(
    rows: &[RosterRow],
    academic_year: Option<&str>,
    department: Option<&str>,
) -> Result<Vec<u8>, ReportError> {
    let mut page = PageWriter::new("Faculty Directory Summary", None)?;

    page.text_centered("Faculty Directory Summary", FontStyle::Bold, 16.0);
    page.advance(10.0);

    for line in filter_annotations(academic_year, department) {
        page.text_centered(&line, FontStyle::Regular, 10.0);
        page.advance(6.0);
    }
    page.advance(10.0);

    page.ensure_space(8.0);
    let mut x = TABLE_LEFT;
    for (i, title) in SUMMARY_COLUMNS.iter().enumerate() {
        page.cell(x, COLUMN_WIDTHS_MM[i], 8.0, title, FontStyle::Bold, 10.0, Align::Center);
        x += COLUMN_WIDTHS_MM[i];
    }
    page.advance(8.0);

    for (i, row) in rows.iter().enumerate() {
        page.ensure_space(7.0);
        let cells = summary_cells(i, row);
        let mut x = TABLE_LEFT;
        for (c, value) in cells.iter().enumerate() {
            // Ordinal and employee id center; free text aligns left.
            let align = if c == 0 || c == 3 { Align::Center } else { Align::Left };
            page.cell(x, COLUMN_WIDTHS_MM[c], 7.0, value, FontStyle::Regular, 9.0, align);
            x += COLUMN_WIDTHS_MM[c];
        }
        page.advance(7.0);
    }

    page.advance(10.0);
    page.ensure_space(10.0);
    page.text_right(
        &format!("Total Faculty: {}", rows.len()),
        FontStyle::Italic,
        10.0,
    );

    page.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, email: &str, department: Option<&str>) -> RosterRow {
        RosterRow {
            name: name.into(),
            email: email.into(),
            employee_id: "EMP001".into(),
            designation: None,
            department: department.map(str::to_string),
            publications: 0,
            awards: 0,
            patents: 0,
        }
    }

    #[test]
    fn long_values_are_truncated_to_their_caps() {
        let long_name = "Dr. Maximilian Bartholomew Fitzgerald-Throckmorton III";
        let long_email = "maximilian.bartholomew.fitzgerald@college-of-engineering.edu";
        let cells = summary_cells(
            0,
            &row(long_name, long_email, Some("Electronics and Communication Engineering")),
        );

        assert_eq!(cells[1].chars().count(), NAME_MAX_CHARS);
        assert_eq!(cells[2].chars().count(), EMAIL_MAX_CHARS);
        assert_eq!(cells[4].chars().count(), DEPARTMENT_MAX_CHARS);
        assert!(long_name.starts_with(&cells[1]));
    }

    #[test]
    fn short_values_pass_through_untouched() {
        let cells = summary_cells(2, &row("J. Doe", "jdoe@college.edu", None));
        assert_eq!(cells, ["3", "J. Doe", "jdoe@college.edu", "EMP001", ""]);
    }

    #[test]
    fn annotations_appear_only_for_non_empty_filters() {
        assert!(filter_annotations(None, None).is_empty());
        assert!(filter_annotations(Some(""), Some("  ")).is_empty());
        assert_eq!(
            filter_annotations(Some("2024-2025"), Some("Physics")),
            vec!["Academic Year: 2024-2025", "Department: Physics"]
        );
    }

    #[test]
    fn compile_produces_a_pdf_buffer() {
        let rows = vec![row("J. Doe", "jdoe@college.edu", Some("Physics"))];
        let bytes = compile_roster_summary(&rows, Some("2024-2025"), None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn empty_roster_compiles_with_zero_total() {
        let bytes = compile_roster_summary(&[], None, None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
