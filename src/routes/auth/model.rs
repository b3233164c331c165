use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::records::{AdminAccount, FacultyAccount};
use crate::utils::{Identity, Role, verify_password};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_type: Role,
    pub user_id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct FacultyCreateRequest {
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: Uuid,
    pub email: String,
    pub user_type: Role,
    pub name: String,
}

/// Resolves a login against the two principal tables. Policy, in order:
/// the admin row is considered first, so a verifying admin match shadows any
/// faculty enrollment under the same email; a matched but inactive row fails
/// immediately as a disabled account; an admin row whose password does not
/// verify falls through to the faculty row. Anything else is invalid
/// credentials, indistinguishable from an unknown email.
pub fn authenticate(
    admin: Option<AdminAccount>,
    faculty: Option<FacultyAccount>,
    password: &str,
) -> Result<Identity, AppError> {
    if let Some(admin) = admin {
        if !admin.is_active {
            return Err(AppError::AccountDisabled);
        }
        if verify_password(password, &admin.password_hash) {
            return Ok(Identity {
                id: admin.id,
                email: admin.email,
                name: admin.name,
                role: Role::Admin,
                employee_id: None,
            });
        }
    }

    if let Some(faculty) = faculty {
        if !faculty.is_active {
            return Err(AppError::AccountDisabled);
        }
        if verify_password(password, &faculty.password_hash) {
            return Ok(Identity {
                id: faculty.id,
                email: faculty.email,
                name: faculty.name,
                role: Role::Faculty,
                employee_id: Some(faculty.employee_id),
            });
        }
    }

    Err(AppError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::utils::hash_password;

    use super::*;

    fn admin(password: &str, is_active: bool) -> AdminAccount {
        AdminAccount {
            id: Uuid::new_v4(),
            email: "a@x.edu".into(),
            name: "The Admin".into(),
            password_hash: hash_password(password).unwrap(),
            is_active,
            created_at: Utc::now(),
        }
    }

    fn faculty(password: &str, is_active: bool) -> FacultyAccount {
        FacultyAccount {
            id: Uuid::new_v4(),
            email: "a@x.edu".into(),
            name: "The Professor".into(),
            employee_id: "EMP001".into(),
            phone: None,
            password_hash: hash_password(password).unwrap(),
            is_active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn admin_match_shadows_faculty_enrollment() {
        // Same email enrolled in both tables, same password: the admin row
        // wins and the faculty row is never reached.
        let identity =
            authenticate(Some(admin("pw", true)), Some(faculty("pw", true)), "pw").unwrap();
        assert_eq!(identity.role, Role::Admin);
        assert!(identity.employee_id.is_none());
    }

    #[test]
    fn mismatched_admin_password_falls_through_to_faculty() {
        let identity = authenticate(
            Some(admin("admin-pw", true)),
            Some(faculty("faculty-pw", true)),
            "faculty-pw",
        )
        .unwrap();
        assert_eq!(identity.role, Role::Faculty);
        assert_eq!(identity.employee_id.as_deref(), Some("EMP001"));
    }

    #[test]
    fn inactive_admin_fails_as_disabled_without_fallthrough() {
        let err = authenticate(Some(admin("pw", false)), Some(faculty("pw", true)), "pw")
            .unwrap_err();
        assert!(matches!(err, AppError::AccountDisabled));
    }

    #[test]
    fn inactive_faculty_fails_as_disabled_not_invalid() {
        let err = authenticate(None, Some(faculty("pw", false)), "pw").unwrap_err();
        assert!(matches!(err, AppError::AccountDisabled));
    }

    #[test]
    fn unknown_email_and_wrong_password_are_indistinguishable() {
        let nobody = authenticate(None, None, "pw").unwrap_err();
        let wrong_pw = authenticate(None, Some(faculty("other", true)), "pw").unwrap_err();
        assert_eq!(nobody.to_string(), wrong_pw.to_string());
        assert!(matches!(nobody, AppError::InvalidCredentials));
    }

    #[test]
    fn faculty_login_succeeds_when_only_faculty_matches() {
        let identity = authenticate(None, Some(faculty("pw", true)), "pw").unwrap();
        assert_eq!(identity.role, Role::Faculty);
    }
}
