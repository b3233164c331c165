use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::records::{
    Award, Conference, FacultyProfile, Patent, Publication, ResearchProject,
};
use crate::utils::Claims;

#[derive(Debug, Deserialize)]
pub struct YearFilter {
    pub academic_year: Option<String>,
}

impl YearFilter {
    /// Blank query values mean "no filter".
    pub fn year(&self) -> Option<&str> {
        self.academic_year.as_deref().filter(|y| !y.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    pub name_prefix: Option<String>,
    pub name: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub employee_id: Option<String>,
    pub faculty_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Fallback identity shown before a profile row exists, taken from the
/// caller's token claims.
#[derive(Debug, Serialize)]
pub struct ProfileDefaults {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileEnvelope {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<FacultyProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<ProfileDefaults>,
}

impl ProfileEnvelope {
    pub fn found(profile: FacultyProfile) -> Self {
        Self {
            exists: true,
            profile: Some(profile),
            defaults: None,
        }
    }

    pub fn missing(claims: &Claims) -> Self {
        Self {
            exists: false,
            profile: None,
            defaults: Some(ProfileDefaults {
                name: claims.name.clone(),
                email: claims.email.clone(),
                employee_id: claims.employee_id.clone(),
            }),
        }
    }
}

/// Create-or-update: fields absent from the request keep their stored value.
pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    req: &ProfileUpdate,
) -> Result<FacultyProfile, sqlx::Error> {
    let existing = FacultyProfile::find_by_user(pool, user_id).await?;

    if existing.is_some() {
        sqlx::query_as::<_, FacultyProfile>(
            "UPDATE faculty_profiles SET \
               name_prefix = COALESCE($2, name_prefix), \
               name = COALESCE($3, name), \
               designation = COALESCE($4, designation), \
               department = COALESCE($5, department), \
               employee_id = COALESCE($6, employee_id), \
               faculty_id = COALESCE($7, faculty_id), \
               email = COALESCE($8, email), \
               phone = COALESCE($9, phone) \
             WHERE user_id = $1 \
             RETURNING id, user_id, name_prefix, name, designation, department, \
                       employee_id, faculty_id, email, phone",
        )
        .bind(user_id)
        .bind(&req.name_prefix)
        .bind(&req.name)
        .bind(&req.designation)
        .bind(&req.department)
        .bind(&req.employee_id)
        .bind(&req.faculty_id)
        .bind(&req.email)
        .bind(&req.phone)
        .fetch_one(pool)
        .await
    } else {
        sqlx::query_as::<_, FacultyProfile>(
            "INSERT INTO faculty_profiles \
               (user_id, name_prefix, name, designation, department, employee_id, \
                faculty_id, email, phone) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING id, user_id, name_prefix, name, designation, department, \
                       employee_id, faculty_id, email, phone",
        )
        .bind(user_id)
        .bind(&req.name_prefix)
        .bind(&req.name)
        .bind(&req.designation)
        .bind(&req.department)
        .bind(&req.employee_id)
        .bind(&req.faculty_id)
        .bind(&req.email)
        .bind(&req.phone)
        .fetch_one(pool)
        .await
    }
}

#[derive(Debug, Deserialize)]
pub struct PublicationCreate {
    pub academic_year: String,
    pub authors: Option<String>,
    pub title: Option<String>,
    pub journal_name: Option<String>,
    pub issn_isbn: Option<String>,
    pub url: Option<String>,
}

impl PublicationCreate {
    pub async fn insert(&self, pool: &PgPool, user_id: Uuid) -> Result<Publication, sqlx::Error> {
        sqlx::query_as::<_, Publication>(
            "INSERT INTO publications \
               (user_id, academic_year, authors, title, journal_name, issn_isbn, url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id, user_id, academic_year, authors, title, journal_name, \
                       issn_isbn, url, created_at",
        )
        .bind(user_id)
        .bind(&self.academic_year)
        .bind(&self.authors)
        .bind(&self.title)
        .bind(&self.journal_name)
        .bind(&self.issn_isbn)
        .bind(&self.url)
        .fetch_one(pool)
        .await
    }
}

#[derive(Debug, Deserialize)]
pub struct AwardCreate {
    pub academic_year: String,
    pub title: Option<String>,
    pub awarding_agency: Option<String>,
    pub level: Option<String>,
    pub award_date: Option<String>,
}

impl AwardCreate {
    pub async fn insert(&self, pool: &PgPool, user_id: Uuid) -> Result<Award, sqlx::Error> {
        sqlx::query_as::<_, Award>(
            "INSERT INTO awards \
               (user_id, academic_year, title, awarding_agency, level, award_date) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, user_id, academic_year, title, awarding_agency, level, \
                       award_date, created_at",
        )
        .bind(user_id)
        .bind(&self.academic_year)
        .bind(&self.title)
        .bind(&self.awarding_agency)
        .bind(&self.level)
        .bind(&self.award_date)
        .fetch_one(pool)
        .await
    }
}

#[derive(Debug, Deserialize)]
pub struct ResearchProjectCreate {
    pub academic_year: String,
    pub title: Option<String>,
    pub agency: Option<String>,
    pub period: Option<String>,
    pub investigator_type: Option<String>,
    pub grant_amount: Option<f64>,
}

impl ResearchProjectCreate {
    pub async fn insert(
        &self,
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<ResearchProject, sqlx::Error> {
        sqlx::query_as::<_, ResearchProject>(
            "INSERT INTO research_projects \
               (user_id, academic_year, title, agency, period, investigator_type, grant_amount) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id, user_id, academic_year, title, agency, period, \
                       investigator_type, grant_amount, created_at",
        )
        .bind(user_id)
        .bind(&self.academic_year)
        .bind(&self.title)
        .bind(&self.agency)
        .bind(&self.period)
        .bind(&self.investigator_type)
        .bind(self.grant_amount)
        .fetch_one(pool)
        .await
    }
}

#[derive(Debug, Deserialize)]
pub struct PatentCreate {
    pub academic_year: String,
    pub title: Option<String>,
    pub patent_number: Option<String>,
}

impl PatentCreate {
    pub async fn insert(&self, pool: &PgPool, user_id: Uuid) -> Result<Patent, sqlx::Error> {
        sqlx::query_as::<_, Patent>(
            "INSERT INTO patents (user_id, academic_year, title, patent_number) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, user_id, academic_year, title, patent_number, created_at",
        )
        .bind(user_id)
        .bind(&self.academic_year)
        .bind(&self.title)
        .bind(&self.patent_number)
        .fetch_one(pool)
        .await
    }
}

#[derive(Debug, Deserialize)]
pub struct ConferenceCreate {
    pub academic_year: String,
    pub paper_title: Option<String>,
    pub issn_isbn: Option<String>,
    pub conference_details: Option<String>,
    pub level: Option<String>,
}

impl ConferenceCreate {
    pub async fn insert(&self, pool: &PgPool, user_id: Uuid) -> Result<Conference, sqlx::Error> {
        sqlx::query_as::<_, Conference>(
            "INSERT INTO conferences \
               (user_id, academic_year, paper_title, issn_isbn, conference_details, level) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, user_id, academic_year, paper_title, issn_isbn, \
                       conference_details, level, created_at",
        )
        .bind(user_id)
        .bind(&self.academic_year)
        .bind(&self.paper_title)
        .bind(&self.issn_isbn)
        .bind(&self.conference_details)
        .bind(&self.level)
        .fetch_one(pool)
        .await
    }
}
