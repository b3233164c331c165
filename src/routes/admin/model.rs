use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::records::{Award, Patent, Publication};
use crate::report::RosterRow;

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub search: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub academic_year: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
}

impl ExportQuery {
    pub fn academic_year(&self) -> Option<&str> {
        non_empty(self.academic_year.as_deref())
    }

    pub fn department(&self) -> Option<&str> {
        non_empty(self.department.as_deref())
    }

    pub fn designation(&self) -> Option<&str> {
        non_empty(self.designation.as_deref())
    }
}

/// Blank query parameters mean "no filter".
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// One roster listing entry: the account row joined with the profile fields
/// the directory views care about.
#[derive(Debug, Serialize, FromRow)]
pub struct FacultyListItem {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub employee_id: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub designation: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FacultyListResponse {
    pub faculty: Vec<FacultyListItem>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct AcademicYearsResponse {
    pub academic_years: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DepartmentsResponse {
    pub departments: Vec<String>,
}

pub async fn list_faculty_with_profiles(
    pool: &PgPool,
) -> Result<Vec<FacultyListItem>, sqlx::Error> {
    sqlx::query_as::<_, FacultyListItem>(
        "SELECT u.id, u.name, u.email, u.employee_id, u.phone, u.is_active, u.created_at, \
                p.designation, p.department \
         FROM faculty_users u \
         LEFT JOIN faculty_profiles p ON p.user_id = u.id \
         ORDER BY u.created_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// Search matches name, email or employee id case-insensitively; department
/// and designation filter by exact profile value.
pub fn apply_roster_filters(
    items: Vec<FacultyListItem>,
    search: Option<&str>,
    department: Option<&str>,
    designation: Option<&str>,
) -> Vec<FacultyListItem> {
    items
        .into_iter()
        .filter(|item| {
            let matches_search = match search {
                None => true,
                Some(query) => {
                    let query = query.to_lowercase();
                    item.name.to_lowercase().contains(&query)
                        || item.email.to_lowercase().contains(&query)
                        || item.employee_id.to_lowercase().contains(&query)
                }
            };
            let matches_department = match department {
                None => true,
                Some(dept) => item.department.as_deref() == Some(dept),
            };
            let matches_designation = match designation {
                None => true,
                Some(desig) => item.designation.as_deref() == Some(desig),
            };
            matches_search && matches_department && matches_designation
        })
        .collect()
}

/// Assembles the export roster: filtered directory entries plus per-subject
/// category counts, optionally scoped to one academic year.
pub async fn build_roster(
    pool: &PgPool,
    academic_year: Option<&str>,
    department: Option<&str>,
    designation: Option<&str>,
) -> Result<Vec<RosterRow>, sqlx::Error> {
    let items = list_faculty_with_profiles(pool).await?;
    let items = apply_roster_filters(items, None, department, designation);

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        rows.push(RosterRow {
            publications: Publication::count_for_user(pool, item.id, academic_year).await?,
            awards: Award::count_for_user(pool, item.id, academic_year).await?,
            patents: Patent::count_for_user(pool, item.id, academic_year).await?,
            name: item.name,
            email: item.email,
            employee_id: item.employee_id,
            designation: item.designation,
            department: item.department,
        });
    }
    Ok(rows)
}

const YEAR_TAGGED_TABLES: [&str; 5] = [
    "publications",
    "awards",
    "research_projects",
    "patents",
    "conferences",
];

// Seed vocabulary shown before any year-tagged record exists.
const DEFAULT_ACADEMIC_YEARS: [&str; 3] = ["2024-2025", "2025-2026", "2026-2027"];

/// Distinct academic years across the principal year-tagged tables, newest
/// first.
pub async fn list_academic_years(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    let mut years: BTreeSet<String> = BTreeSet::new();

    for table in YEAR_TAGGED_TABLES {
        let rows: Vec<String> = sqlx::query_scalar(&format!(
            "SELECT DISTINCT academic_year FROM {table} WHERE academic_year IS NOT NULL"
        ))
        .fetch_all(pool)
        .await?;
        years.extend(rows);
    }

    if years.is_empty() {
        years.extend(DEFAULT_ACADEMIC_YEARS.map(String::from));
    }

    Ok(years.into_iter().rev().collect())
}

pub async fn list_departments(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT department FROM faculty_profiles \
         WHERE department IS NOT NULL ORDER BY department",
    )
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, email: &str, employee_id: &str, department: Option<&str>) -> FacultyListItem {
        FacultyListItem {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            employee_id: employee_id.into(),
            phone: None,
            is_active: true,
            created_at: Utc::now(),
            designation: Some("Professor".into()),
            department: department.map(str::to_string),
        }
    }

    #[test]
    fn search_matches_name_email_and_employee_id() {
        let items = vec![
            item("Alice Kumar", "alice@college.edu", "EMP001", Some("Physics")),
            item("Bob Singh", "bob@college.edu", "EMP002", Some("Chemistry")),
        ];

        let by_name = apply_roster_filters(items, Some("kumar"), None, None);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Alice Kumar");
    }

    #[test]
    fn department_filter_is_exact() {
        let items = vec![
            item("Alice Kumar", "alice@college.edu", "EMP001", Some("Physics")),
            item("Bob Singh", "bob@college.edu", "EMP002", None),
        ];

        let filtered = apply_roster_filters(items, None, Some("Physics"), None);
        assert_eq!(filtered.len(), 1);

        let none = apply_roster_filters(
            vec![item("C", "c@college.edu", "EMP003", Some("Physics"))],
            None,
            Some("Phys"),
            None,
        );
        assert!(none.is_empty());
    }

    #[test]
    fn blank_filters_are_ignored() {
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(Some("Physics")), Some("Physics"));
        assert_eq!(non_empty(None), None);
    }
}
