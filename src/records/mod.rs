//! Typed rows for the account tables and the per-category academic record
//! tables. Every category record references exactly one owning faculty
//! account and is independent of every other category; year-tagged
//! categories can be narrowed to one academic year at query time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminAccount {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FacultyAccount {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub employee_id: String,
    pub phone: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FacultyProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name_prefix: Option<String>,
    pub name: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub employee_id: Option<String>,
    pub faculty_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Publication {
    pub id: Uuid,
    pub user_id: Uuid,
    pub academic_year: Option<String>,
    pub authors: Option<String>,
    pub title: Option<String>,
    pub journal_name: Option<String>,
    pub issn_isbn: Option<String>,
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookPublication {
    pub id: Uuid,
    pub user_id: Uuid,
    pub academic_year: Option<String>,
    pub title: Option<String>,
    pub authors: Option<String>,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Award {
    pub id: Uuid,
    pub user_id: Uuid,
    pub academic_year: Option<String>,
    pub title: Option<String>,
    pub awarding_agency: Option<String>,
    pub level: Option<String>,
    pub award_date: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IctCreation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub academic_year: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResearchGuidance {
    pub id: Uuid,
    pub user_id: Uuid,
    pub academic_year: Option<String>,
    pub scholar_name: Option<String>,
    pub degree: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResearchProject {
    pub id: Uuid,
    pub user_id: Uuid,
    pub academic_year: Option<String>,
    pub title: Option<String>,
    pub agency: Option<String>,
    pub period: Option<String>,
    pub investigator_type: Option<String>,
    pub grant_amount: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Patent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub academic_year: Option<String>,
    pub title: Option<String>,
    pub patent_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Conference {
    pub id: Uuid,
    pub user_id: Uuid,
    pub academic_year: Option<String>,
    pub paper_title: Option<String>,
    pub issn_isbn: Option<String>,
    pub conference_details: Option<String>,
    pub level: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Seminar {
    pub id: Uuid,
    pub user_id: Uuid,
    pub academic_year: Option<String>,
    pub title: Option<String>,
    pub organizer: Option<String>,
    pub venue: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Lecture {
    pub id: Uuid,
    pub user_id: Uuid,
    pub academic_year: Option<String>,
    pub topic: Option<String>,
    pub institution: Option<String>,
    pub venue: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OtherDetail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub academic_year: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Membership {
    pub id: Uuid,
    pub user_id: Uuid,
    pub academic_year: Option<String>,
    pub body_name: Option<String>,
    pub membership_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PreviousWork {
    pub id: Uuid,
    pub user_id: Uuid,
    pub institution: Option<String>,
    pub designation: Option<String>,
    pub from_year: Option<String>,
    pub to_year: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseTaught {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub semester: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PgDissertation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub student_name: Option<String>,
    pub title: Option<String>,
    pub year_completed: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AdminAccount {
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, email, name, password_hash, is_active, created_at \
             FROM admins WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM admins WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await
    }

    pub async fn insert(
        pool: &PgPool,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO admins (email, name, password_hash, is_active) \
             VALUES ($1, $2, $3, true) \
             RETURNING id, email, name, password_hash, is_active, created_at",
        )
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .fetch_one(pool)
        .await
    }
}

impl FacultyAccount {
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, email, name, employee_id, phone, password_hash, is_active, created_at \
             FROM faculty_users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, email, name, employee_id, phone, password_hash, is_active, created_at \
             FROM faculty_users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM faculty_users WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(pool)
        .await
    }

    pub async fn employee_id_exists(
        pool: &PgPool,
        employee_id: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM faculty_users WHERE employee_id = $1)",
        )
        .bind(employee_id)
        .fetch_one(pool)
        .await
    }

    pub async fn insert(
        pool: &PgPool,
        email: &str,
        name: &str,
        employee_id: &str,
        phone: Option<&str>,
        password_hash: &str,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO faculty_users (email, name, employee_id, phone, password_hash, is_active) \
             VALUES ($1, $2, $3, $4, $5, true) \
             RETURNING id, email, name, employee_id, phone, password_hash, is_active, created_at",
        )
        .bind(email)
        .bind(name)
        .bind(employee_id)
        .bind(phone)
        .bind(password_hash)
        .fetch_one(pool)
        .await
    }
}

impl FacultyProfile {
    pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, name_prefix, name, designation, department, \
                    employee_id, faculty_id, email, phone \
             FROM faculty_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}

impl Publication {
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, academic_year, authors, title, journal_name, issn_isbn, url, created_at \
             FROM publications \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2) \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_all(pool)
        .await
    }

    pub async fn count_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM publications \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2)",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_one(pool)
        .await
    }

    pub async fn delete_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM publications WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

impl BookPublication {
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, academic_year, title, authors, publisher, isbn, created_at \
             FROM book_publications \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2) \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_all(pool)
        .await
    }
}

impl Award {
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, academic_year, title, awarding_agency, level, award_date, created_at \
             FROM awards \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2) \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_all(pool)
        .await
    }

    pub async fn count_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM awards \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2)",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_one(pool)
        .await
    }
}

impl IctCreation {
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, academic_year, title, description, created_at \
             FROM ict_creations \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2) \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_all(pool)
        .await
    }
}

impl ResearchGuidance {
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, academic_year, scholar_name, degree, status, created_at \
             FROM research_guidance \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2) \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_all(pool)
        .await
    }
}

impl ResearchProject {
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, academic_year, title, agency, period, investigator_type, \
                    grant_amount, created_at \
             FROM research_projects \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2) \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_all(pool)
        .await
    }
}

impl Patent {
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, academic_year, title, patent_number, created_at \
             FROM patents \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2) \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_all(pool)
        .await
    }

    pub async fn count_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM patents \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2)",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_one(pool)
        .await
    }
}

impl Conference {
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, academic_year, paper_title, issn_isbn, conference_details, \
                    level, created_at \
             FROM conferences \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2) \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_all(pool)
        .await
    }
}

impl Seminar {
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, academic_year, title, organizer, venue, created_at \
             FROM seminars \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2) \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_all(pool)
        .await
    }
}

impl Lecture {
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, academic_year, topic, institution, venue, created_at \
             FROM lectures \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2) \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_all(pool)
        .await
    }
}

impl OtherDetail {
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, academic_year, description, created_at \
             FROM other_details \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2) \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_all(pool)
        .await
    }
}

impl Membership {
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, academic_year, body_name, membership_type, created_at \
             FROM memberships \
             WHERE user_id = $1 AND ($2::text IS NULL OR academic_year = $2) \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(academic_year)
        .fetch_all(pool)
        .await
    }
}

impl PreviousWork {
    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, institution, designation, from_year, to_year, created_at \
             FROM previous_work WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}

impl CourseTaught {
    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, course_name, course_code, semester, created_at \
             FROM courses_taught WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}

impl PgDissertation {
    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, student_name, title, year_completed, created_at \
             FROM pg_dissertations WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}

/// The full per-faculty record set: account, optional profile and every
/// category collection, loaded in one pass. An academic-year filter narrows
/// the year-tagged categories; profile, previous work, courses taught and PG
/// dissertations are never year-scoped.
#[derive(Debug, Serialize)]
pub struct FacultyRecordSet {
    pub user: FacultyAccount,
    pub profile: Option<FacultyProfile>,
    pub previous_work: Vec<PreviousWork>,
    pub courses_taught: Vec<CourseTaught>,
    pub publications: Vec<Publication>,
    pub book_publications: Vec<BookPublication>,
    pub awards: Vec<Award>,
    pub ict_creations: Vec<IctCreation>,
    pub research_guidance: Vec<ResearchGuidance>,
    pub pg_dissertations: Vec<PgDissertation>,
    pub research_projects: Vec<ResearchProject>,
    pub patents: Vec<Patent>,
    pub conferences: Vec<Conference>,
    pub seminars: Vec<Seminar>,
    pub lectures: Vec<Lecture>,
    pub other_details: Vec<OtherDetail>,
    pub memberships: Vec<Membership>,
}

impl FacultyRecordSet {
    pub async fn load(
        pool: &PgPool,
        user_id: Uuid,
        academic_year: Option<&str>,
    ) -> Result<Option<Self>, sqlx::Error> {
        let Some(user) = FacultyAccount::find_by_id(pool, user_id).await? else {
            return Ok(None);
        };

        let set = Self {
            profile: FacultyProfile::find_by_user(pool, user_id).await?,
            previous_work: PreviousWork::list_for_user(pool, user_id).await?,
            courses_taught: CourseTaught::list_for_user(pool, user_id).await?,
            publications: Publication::list_for_user(pool, user_id, academic_year).await?,
            book_publications: BookPublication::list_for_user(pool, user_id, academic_year)
                .await?,
            awards: Award::list_for_user(pool, user_id, academic_year).await?,
            ict_creations: IctCreation::list_for_user(pool, user_id, academic_year).await?,
            research_guidance: ResearchGuidance::list_for_user(pool, user_id, academic_year)
                .await?,
            pg_dissertations: PgDissertation::list_for_user(pool, user_id).await?,
            research_projects: ResearchProject::list_for_user(pool, user_id, academic_year)
                .await?,
            patents: Patent::list_for_user(pool, user_id, academic_year).await?,
            conferences: Conference::list_for_user(pool, user_id, academic_year).await?,
            seminars: Seminar::list_for_user(pool, user_id, academic_year).await?,
            lectures: Lecture::list_for_user(pool, user_id, academic_year).await?,
            other_details: OtherDetail::list_for_user(pool, user_id, academic_year).await?,
            memberships: Membership::list_for_user(pool, user_id, academic_year).await?,
            user,
        };

        Ok(Some(set))
    }
}
