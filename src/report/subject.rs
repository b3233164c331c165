//! Single-subject profile document: a paginated PDF with a basic-information
//! block followed by one section per non-empty record category, in a fixed
//! order that never depends on input ordering or map iteration.

use crate::records::FacultyRecordSet;

use super::ReportError;
use super::pdf::PageWriter;

const RUNNING_HEADER: &str = "Faculty Profile Report";
const BODY_WRAP_CHARS: usize = 100;

pub(crate) const NOT_AVAILABLE: &str = "N/A";

/// Missing and blank fields render as the literal placeholder, never as an
/// empty string and never as an error.
fn field(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

fn matches_year(record_year: Option<&str>, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(year) => record_year == Some(year),
    }
}

#[derive(Debug, PartialEq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

fn section<T>(
    title: &str,
    items: &[T],
    filter: Option<&str>,
    year_of: impl Fn(&T) -> Option<&str>,
    line_of: impl Fn(&T) -> String,
) -> Option<Section> {
    let kept: Vec<&T> = items
        .iter()
        .filter(|item| matches_year(year_of(item), filter))
        .collect();
    if kept.is_empty() {
        return None;
    }

    Some(Section {
        title: format!("{} ({})", title, kept.len()),
        lines: kept
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, line_of(item)))
            .collect(),
    })
}

/// The "Basic Information" block rows. The year-filter annotation appears
/// only when a filter is active.
pub fn basic_info(set: &FacultyRecordSet, filter: Option<&str>) -> Vec<(&'static str, String)> {
    let profile = set.profile.as_ref();

    let display_name = match profile
        .and_then(|p| p.name_prefix.as_deref())
        .filter(|prefix| !prefix.trim().is_empty())
    {
        Some(prefix) => format!("{} {}", prefix, set.user.name),
        None => set.user.name.clone(),
    };

    let mut rows = vec![
        ("Name", display_name),
        ("Employee ID", set.user.employee_id.clone()),
        ("Email", set.user.email.clone()),
        ("Phone", field(set.user.phone.as_deref()).to_string()),
        (
            "Designation",
            field(profile.and_then(|p| p.designation.as_deref())).to_string(),
        ),
        (
            "Department",
            field(profile.and_then(|p| p.department.as_deref())).to_string(),
        ),
    ];

    if let Some(year) = filter {
        rows.push(("Academic Year Filter", year.to_string()));
    }

    rows
}

/// Assembles the category sections in their fixed rendering order, dropping
/// categories left empty after the year filter.
pub fn build_sections(set: &FacultyRecordSet, filter: Option<&str>) -> Vec<Section> {
    let mut sections = Vec::new();

    sections.extend(section(
        "Publications",
        &set.publications,
        filter,
        |p| p.academic_year.as_deref(),
        |p| {
            format!(
                "{} - {} ({})",
                field(p.title.as_deref()),
                field(p.journal_name.as_deref()),
                field(p.academic_year.as_deref()),
            )
        },
    ));
    sections.extend(section(
        "Awards",
        &set.awards,
        filter,
        |a| a.academic_year.as_deref(),
        |a| {
            format!(
                "{} - {} ({})",
                field(a.title.as_deref()),
                field(a.awarding_agency.as_deref()),
                field(a.academic_year.as_deref()),
            )
        },
    ));
    sections.extend(section(
        "Patents",
        &set.patents,
        filter,
        |p| p.academic_year.as_deref(),
        |p| {
            format!(
                "{} - Patent No: {} ({})",
                field(p.title.as_deref()),
                field(p.patent_number.as_deref()),
                field(p.academic_year.as_deref()),
            )
        },
    ));
    sections.extend(section(
        "Research Projects",
        &set.research_projects,
        filter,
        |p| p.academic_year.as_deref(),
        |p| {
            format!(
                "{} - {} ({})",
                field(p.title.as_deref()),
                field(p.agency.as_deref()),
                field(p.academic_year.as_deref()),
            )
        },
    ));
    sections.extend(section(
        "Conferences",
        &set.conferences,
        filter,
        |c| c.academic_year.as_deref(),
        |c| {
            format!(
                "{} ({})",
                field(c.paper_title.as_deref()),
                field(c.academic_year.as_deref()),
            )
        },
    ));
    sections.extend(section(
        "Book Publications",
        &set.book_publications,
        filter,
        |b| b.academic_year.as_deref(),
        |b| {
            format!(
                "{} - {} ({})",
                field(b.title.as_deref()),
                field(b.publisher.as_deref()),
                field(b.academic_year.as_deref()),
            )
        },
    ));
    sections.extend(section(
        "Seminars",
        &set.seminars,
        filter,
        |s| s.academic_year.as_deref(),
        |s| {
            format!(
                "{} - {} ({})",
                field(s.title.as_deref()),
                field(s.organizer.as_deref()),
                field(s.academic_year.as_deref()),
            )
        },
    ));
    sections.extend(section(
        "Lectures",
        &set.lectures,
        filter,
        |l| l.academic_year.as_deref(),
        |l| {
            format!(
                "{} - {} ({})",
                field(l.topic.as_deref()),
                field(l.institution.as_deref()),
                field(l.academic_year.as_deref()),
            )
        },
    ));
    sections.extend(section(
        "Memberships",
        &set.memberships,
        filter,
        |m| m.academic_year.as_deref(),
        |m| {
            format!(
                "{} - {} ({})",
                field(m.body_name.as_deref()),
                field(m.membership_type.as_deref()),
                field(m.academic_year.as_deref()),
            )
        },
    ));

    sections
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

pub fn compile_subject_document(
    set: &FacultyRecordSet,
    academic_year: Option<&str>,
) -> Result<Vec<u8>, ReportError> {
    let mut page = PageWriter::new(RUNNING_HEADER, Some(RUNNING_HEADER))?;

    page.section_title("Basic Information");
    for (label, value) in basic_info(set, academic_year) {
        page.field_row(label, &value);
    }
    page.advance(5.0);

    for section in build_sections(set, academic_year) {
        page.section_title(&section.title);
        for line in &section.lines {
            for wrapped in wrap_text(line, BODY_WRAP_CHARS) {
                page.body_line(&wrapped);
            }
        }
        page.advance(3.0);
    }

    page.finish()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::records::{Award, FacultyAccount, FacultyRecordSet, Publication};

    use super::*;

    fn account() -> FacultyAccount {
        FacultyAccount {
            id: Uuid::new_v4(),
            email: "jdoe@college.edu".into(),
            name: "J. Doe".into(),
            employee_id: "EMP007".into(),
            phone: None,
            password_hash: "x".into(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn empty_set() -> FacultyRecordSet {
        FacultyRecordSet {
            user: account(),
            profile: None,
            previous_work: vec![],
            courses_taught: vec![],
            publications: vec![],
            book_publications: vec![],
            awards: vec![],
            ict_creations: vec![],
            research_guidance: vec![],
            pg_dissertations: vec![],
            research_projects: vec![],
            patents: vec![],
            conferences: vec![],
            seminars: vec![],
            lectures: vec![],
            other_details: vec![],
            memberships: vec![],
        }
    }

    fn award(title: &str, year: &str) -> Award {
        Award {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            academic_year: Some(year.into()),
            title: Some(title.into()),
            awarding_agency: Some("AICTE".into()),
            level: None,
            award_date: None,
            created_at: Utc::now(),
        }
    }

    fn publication(title: Option<&str>, journal: Option<&str>, year: &str) -> Publication {
        Publication {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            academic_year: Some(year.into()),
            authors: None,
            title: title.map(str::to_string),
            journal_name: journal.map(str::to_string),
            issn_isbn: None,
            url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_categories_render_no_sections() {
        assert!(build_sections(&empty_set(), None).is_empty());
    }

    #[test]
    fn empty_category_is_omitted_and_counts_are_in_headings() {
        let mut set = empty_set();
        set.awards = vec![
            award("Best Teacher", "2024-2025"),
            award("Research Excellence", "2024-2025"),
            award("Young Scientist", "2023-2024"),
        ];

        let sections = build_sections(&set, None);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Awards (3)");
        assert_eq!(sections[0].lines.len(), 3);
        assert!(!sections.iter().any(|s| s.title.starts_with("Publications")));
    }

    #[test]
    fn missing_fields_render_as_placeholder() {
        let mut set = empty_set();
        set.publications = vec![publication(Some("A Study"), None, "2024-2025")];

        let sections = build_sections(&set, None);
        assert_eq!(sections[0].lines[0], "1. A Study - N/A (2024-2025)");
    }

    #[test]
    fn blank_fields_render_as_placeholder() {
        let mut set = empty_set();
        set.publications = vec![publication(None, Some("   "), "2024-2025")];

        let sections = build_sections(&set, None);
        assert_eq!(sections[0].lines[0], "1. N/A - N/A (2024-2025)");
    }

    #[test]
    fn year_filter_narrows_sections() {
        let mut set = empty_set();
        set.awards = vec![award("Old", "2023-2024"), award("New", "2024-2025")];

        let sections = build_sections(&set, Some("2024-2025"));
        assert_eq!(sections[0].title, "Awards (1)");
        assert!(sections[0].lines[0].contains("New"));

        // A filter matching nothing drops the section entirely.
        assert!(build_sections(&set, Some("2019-2020")).is_empty());
    }

    #[test]
    fn section_order_is_fixed() {
        let mut set = empty_set();
        set.conferences = vec![crate::records::Conference {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            academic_year: Some("2024-2025".into()),
            paper_title: Some("Paper".into()),
            issn_isbn: None,
            conference_details: None,
            level: None,
            created_at: Utc::now(),
        }];
        set.awards = vec![award("Award", "2024-2025")];
        set.publications = vec![publication(Some("Pub"), Some("Journal"), "2024-2025")];

        let titles: Vec<_> = build_sections(&set, None)
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Publications (1)", "Awards (1)", "Conferences (1)"]
        );
    }

    #[test]
    fn basic_info_includes_filter_annotation_only_when_filtering() {
        let set = empty_set();

        let rows = basic_info(&set, None);
        assert!(!rows.iter().any(|(label, _)| *label == "Academic Year Filter"));

        let rows = basic_info(&set, Some("2024-2025"));
        assert_eq!(
            rows.last().unwrap(),
            &("Academic Year Filter", "2024-2025".to_string())
        );
    }

    #[test]
    fn basic_info_substitutes_placeholders() {
        let set = empty_set();
        let rows = basic_info(&set, None);
        let phone = rows.iter().find(|(label, _)| *label == "Phone").unwrap();
        assert_eq!(phone.1, NOT_AVAILABLE);
    }

    #[test]
    fn wrap_text_respects_width() {
        let text = "alpha beta gamma delta epsilon";
        let wrapped = wrap_text(text, 12);
        assert!(wrapped.len() > 1);
        assert!(wrapped.iter().all(|line| line.chars().count() <= 12));
        assert_eq!(wrapped.join(" "), text);
    }

    #[test]
    fn compile_produces_a_pdf_buffer() {
        let mut set = empty_set();
        set.awards = vec![award("Best Teacher", "2024-2025")];

        let bytes = compile_subject_document(&set, None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
