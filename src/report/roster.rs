//! Multi-subject tabular spreadsheet: one sheet, a merged title banner, a
//! styled 8-column header row and one data row per faculty member.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};

use super::ReportError;

/// The column identities and their order are a structural contract of the
/// export, not a configuration surface.
pub const ROSTER_COLUMNS: [&str; 8] = [
    "Name",
    "Email",
    "Employee ID",
    "Designation",
    "Department",
    "Publications",
    "Awards",
    "Patents",
];

const COLUMN_WIDTHS: [f64; 8] = [25.0, 30.0, 15.0, 20.0, 25.0, 12.0, 10.0, 10.0];
const HEADER_FILL: u32 = 0x4285F4;

/// Per-subject summary data consumed by the multi-subject exports.
#[derive(Debug, Clone)]
pub struct RosterRow {
    pub name: String,
    pub email: String,
    pub employee_id: String,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub publications: i64,
    pub awards: i64,
    pub patents: i64,
}

impl RosterRow {
    /// Cell values in `ROSTER_COLUMNS` order; missing text values become
    /// empty strings.
    pub fn cells(&self) -> [String; 8] {
        [
            self.name.clone(),
            self.email.clone(),
            self.employee_id.clone(),
            self.designation.clone().unwrap_or_default(),
            self.department.clone().unwrap_or_default(),
            self.publications.to_string(),
            self.awards.to_string(),
            self.patents.to_string(),
        ]
    }
}

pub fn compile_roster_spreadsheet(
    rows: &[RosterRow],
    academic_year: Option<&str>,
) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Faculty Summary")?;

    let title_format = Format::new()
        .set_bold()
        .set_font_size(14)
        .set_align(FormatAlign::Center);
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let cell_format = Format::new().set_border(FormatBorder::Thin);

    // Row 1: merged title banner across the full column span.
    let title = format!(
        "Faculty Summary Report - {}",
        academic_year.unwrap_or("All Years")
    );
    worksheet.merge_range(0, 0, 0, (ROSTER_COLUMNS.len() - 1) as u16, &title, &title_format)?;

    // Row 3: header; data rows from row 4 (zero-based 2 and 3).
    for (col, header) in ROSTER_COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(2, col as u16, *header, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = 3 + i as u32;
        worksheet.write_string_with_format(r, 0, &row.name, &cell_format)?;
        worksheet.write_string_with_format(r, 1, &row.email, &cell_format)?;
        worksheet.write_string_with_format(r, 2, &row.employee_id, &cell_format)?;
        worksheet.write_string_with_format(
            r,
            3,
            row.designation.as_deref().unwrap_or(""),
            &cell_format,
        )?;
        worksheet.write_string_with_format(
            r,
            4,
            row.department.as_deref().unwrap_or(""),
            &cell_format,
        )?;
        worksheet.write_number_with_format(r, 5, row.publications as f64, &cell_format)?;
        worksheet.write_number_with_format(r, 6, row.awards as f64, &cell_format)?;
        worksheet.write_number_with_format(r, 7, row.patents as f64, &cell_format)?;
    }

    // Fixed widths, not auto-fit.
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RosterRow {
        RosterRow {
            name: "J. Doe".into(),
            email: "jdoe@college.edu".into(),
            employee_id: "EMP007".into(),
            designation: None,
            department: Some("Computer Science".into()),
            publications: 4,
            awards: 2,
            patents: 0,
        }
    }

    #[test]
    fn column_contract_is_fixed() {
        assert_eq!(
            ROSTER_COLUMNS,
            [
                "Name",
                "Email",
                "Employee ID",
                "Designation",
                "Department",
                "Publications",
                "Awards",
                "Patents",
            ]
        );
    }

    #[test]
    fn cells_follow_column_order_with_empty_defaults() {
        let cells = row().cells();
        assert_eq!(cells[0], "J. Doe");
        assert_eq!(cells[2], "EMP007");
        // Missing designation is an empty string, never a placeholder.
        assert_eq!(cells[3], "");
        assert_eq!(cells[4], "Computer Science");
        assert_eq!(cells[5], "4");
        assert_eq!(cells[7], "0");
    }

    #[test]
    fn empty_roster_still_produces_a_workbook() {
        let bytes = compile_roster_spreadsheet(&[], None).unwrap();
        // XLSX is a zip container.
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn populated_roster_produces_a_workbook() {
        let bytes = compile_roster_spreadsheet(&[row()], Some("2024-2025")).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
