use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserValidator {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[serde(default)]
    pub allergens: Vec<String>,

    #[serde(default)]
    pub preferences: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name cannot be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub allergens: Option<Vec<String>>,

    #[serde(default)]
    pub preferences: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_requires_valid_email() {
        let payload = RegisterUserValidator {
            name: "Ana".to_string(),
            email: "not-an-email".to_string(),
            allergens: vec![],
            preferences: vec![],
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_register_defaults_tags() {
        let payload: RegisterUserValidator =
            serde_json::from_str(r#"{"name":"Ana","email":"ana@example.com"}"#).unwrap();
        assert!(payload.validate().is_ok());
        assert!(payload.allergens.is_empty());
    }

    #[test]
    fn test_update_rejects_empty_name_only_when_present() {
        let empty: UpdateProfileValidator = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert!(empty.validate().is_err());

        let absent: UpdateProfileValidator =
            serde_json::from_str(r#"{"allergens":["gluten"]}"#).unwrap();
        assert!(absent.validate().is_ok());
    }
}
