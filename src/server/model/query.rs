//! Contact query domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::QueryStatus as QueryStatusEntity;

use crate::model::query::{ContactQueryDto, CreateContactQueryDto, QueryStatusDto};

/// Follow-up state of a contact query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    New,
    Contacted,
    Converted,
    Rejected,
}

impl QueryStatus {
    pub fn from_entity(status: QueryStatusEntity) -> Self {
        match status {
            QueryStatusEntity::New => Self::New,
            QueryStatusEntity::Contacted => Self::Contacted,
            QueryStatusEntity::Converted => Self::Converted,
            QueryStatusEntity::Rejected => Self::Rejected,
        }
    }

    pub fn into_entity(self) -> QueryStatusEntity {
        match self {
            Self::New => QueryStatusEntity::New,
            Self::Contacted => QueryStatusEntity::Contacted,
            Self::Converted => QueryStatusEntity::Converted,
            Self::Rejected => QueryStatusEntity::Rejected,
        }
    }

    pub fn from_dto(status: QueryStatusDto) -> Self {
        match status {
            QueryStatusDto::New => Self::New,
            QueryStatusDto::Contacted => Self::Contacted,
            QueryStatusDto::Converted => Self::Converted,
            QueryStatusDto::Rejected => Self::Rejected,
        }
    }

    pub fn into_dto(self) -> QueryStatusDto {
        match self {
            Self::New => QueryStatusDto::New,
            Self::Contacted => QueryStatusDto::Contacted,
            Self::Converted => QueryStatusDto::Converted,
            Self::Rejected => QueryStatusDto::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactQuery {
    pub id: i32,
    pub name: String,
    pub mobile: String,
    pub email: Option<String>,
    pub message: Option<String>,
    pub status: QueryStatus,
    pub created_at: DateTime<Utc>,
}

impl ContactQuery {
    pub fn from_entity(entity: entity::contact_query::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            mobile: entity.mobile,
            email: entity.email,
            message: entity.message,
            status: QueryStatus::from_entity(entity.status),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ContactQueryDto {
        ContactQueryDto {
            id: self.id,
            name: self.name,
            mobile: self.mobile,
            email: self.email,
            message: self.message,
            status: self.status.into_dto(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateContactQueryParams {
    pub name: String,
    pub mobile: String,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl CreateContactQueryParams {
    pub fn from_dto(dto: CreateContactQueryDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            mobile: dto.mobile.trim().to_string(),
            email: dto.email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()),
            message: dto.message,
        }
    }

    /// Checks field lengths and the email shape.
    ///
    /// # Returns
    /// - `Ok(())` - All fields acceptable
    /// - `Err(String)` - Description of the first invalid field
    pub fn validate(&self) -> Result<(), String> {
        let name_len = self.name.chars().count();
        if !(2..=100).contains(&name_len) {
            return Err("Name must be between 2 and 100 characters".to_string());
        }

        let mobile_len = self.mobile.chars().count();
        if !(8..=15).contains(&mobile_len) {
            return Err("Mobile must be between 8 and 15 characters".to_string());
        }

        if let Some(email) = &self.email {
            let valid = email
                .split_once('@')
                .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
            if !valid {
                return Err("Email address is invalid".to_string());
            }
        }

        if let Some(message) = &self.message {
            if message.chars().count() > 500 {
                return Err("Message must be at most 500 characters".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CreateContactQueryParams {
        CreateContactQueryParams {
            name: "Asha".to_string(),
            mobile: "9876543210".to_string(),
            email: Some("asha@example.com".to_string()),
            message: Some("Interested in the quarterly plan".to_string()),
        }
    }

    #[test]
    fn accepts_valid_query() {
        assert!(params().validate().is_ok());
    }

    #[test]
    fn rejects_short_name_and_mobile() {
        let mut short_name = params();
        short_name.name = "A".to_string();
        assert!(short_name.validate().is_err());

        let mut short_mobile = params();
        short_mobile.mobile = "12345".to_string();
        assert!(short_mobile.validate().is_err());
    }

    #[test]
    fn rejects_malformed_email_and_long_message() {
        let mut bad_email = params();
        bad_email.email = Some("not-an-email".to_string());
        assert!(bad_email.validate().is_err());

        let mut long_message = params();
        long_message.message = Some("x".repeat(501));
        assert!(long_message.validate().is_err());
    }
}
