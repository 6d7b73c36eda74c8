use crate::errors::AppError;
use crate::portfolio::models::ProfileFields;

/// Checks the personal-info fields a portfolio cannot be published without.
/// All missing fields are reported together.
pub fn validate_profile(fields: &ProfileFields) -> Result<(), AppError> {
    let required = [
        ("full_name", &fields.full_name),
        ("profession", &fields.profession),
        ("bio", &fields.bio),
        ("email", &fields.email),
    ];

    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }

    if !fields.email.contains('@') {
        return Err(AppError::Validation(format!(
            "email '{}' is not a valid address",
            fields.email.trim()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ProfileFields {
        ProfileFields {
            full_name: "Grace Hopper".to_string(),
            profession: "Backend Developer".to_string(),
            bio: "Compilers and cobol.".to_string(),
            email: "grace@example.com".to_string(),
            ..ProfileFields::default()
        }
    }

    #[test]
    fn test_complete_profile_passes() {
        assert!(validate_profile(&complete()).is_ok());
    }

    #[test]
    fn test_reports_every_missing_field() {
        let fields = ProfileFields {
            bio: "  ".to_string(),
            email: String::new(),
            ..complete()
        };
        match validate_profile(&fields) {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "missing required fields: bio, email");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_email_without_at() {
        let fields = ProfileFields {
            email: "grace.example.com".to_string(),
            ..complete()
        };
        assert!(matches!(
            validate_profile(&fields),
            Err(AppError::Validation(_))
        ));
    }
}
