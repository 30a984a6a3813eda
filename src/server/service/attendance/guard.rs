//! Deciding which trainer an attendance request acts on.
//!
//! Trainers always act on themselves. Front desk staff (admins and receptionists) act on
//! behalf of a trainer and must say which one. The resolved target must be an existing
//! user whose role is exactly trainer.

use crate::server::{
    error::attendance::AttendanceError,
    model::user::{Role, User},
};

/// Resolves the trainer targeted by a check-in or check-out request.
///
/// # Arguments
/// - `actor_role` - Role of the authenticated user making the request
/// - `actor_id` - ID of the authenticated user
/// - `requested_trainer_id` - Trainer ID supplied in the request body, if any. An ID of `0`
///   counts as absent.
///
/// # Returns
/// - `Ok(i32)` - ID of the trainer to act on
/// - `Err(AttendanceError::Forbidden)` - A trainer named another trainer, or the role may not
///   record attendance at all
/// - `Err(AttendanceError::InvalidRequest)` - Front desk staff omitted the trainer ID
pub fn resolve_target(
    actor_role: Role,
    actor_id: i32,
    requested_trainer_id: Option<i32>,
) -> Result<i32, AttendanceError> {
    let requested_trainer_id = requested_trainer_id.filter(|id| *id != 0);

    match actor_role {
        Role::Trainer => match requested_trainer_id {
            Some(requested) if requested != actor_id => Err(AttendanceError::Forbidden(
                "Trainers can only record their own attendance".to_string(),
            )),
            _ => Ok(actor_id),
        },
        Role::Admin | Role::Receptionist => requested_trainer_id.ok_or_else(|| {
            AttendanceError::InvalidRequest("trainer_id is required".to_string())
        }),
        Role::Member => Err(AttendanceError::Forbidden(
            "Members cannot record trainer attendance".to_string(),
        )),
    }
}

/// Checks that the resolved target is an existing trainer.
///
/// # Arguments
/// - `trainer_id` - Resolved target ID, used in the error message
/// - `user` - The user found for `trainer_id`, if any
pub fn ensure_trainer(trainer_id: i32, user: Option<&User>) -> Result<(), AttendanceError> {
    match user {
        None => Err(AttendanceError::NotFound(format!(
            "Trainer {} not found",
            trainer_id
        ))),
        Some(user) if user.role != Role::Trainer => Err(AttendanceError::InvalidRole(format!(
            "User {} is not a trainer",
            trainer_id
        ))),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::user::ApprovalStatus;
    use chrono::Utc;

    fn user(id: i32, role: Role) -> User {
        User {
            id,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            password_hash: String::new(),
            role,
            status: ApprovalStatus::Approved,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn trainer_without_target_acts_on_self() {
        assert_eq!(resolve_target(Role::Trainer, 4, None), Ok(4));
    }

    #[test]
    fn trainer_naming_self_acts_on_self() {
        assert_eq!(resolve_target(Role::Trainer, 4, Some(4)), Ok(4));
    }

    #[test]
    fn trainer_naming_other_trainer_is_forbidden() {
        assert!(matches!(
            resolve_target(Role::Trainer, 4, Some(9)),
            Err(AttendanceError::Forbidden(_))
        ));
    }

    #[test]
    fn front_desk_must_name_trainer() {
        for role in [Role::Admin, Role::Receptionist] {
            assert!(matches!(
                resolve_target(role, 1, None),
                Err(AttendanceError::InvalidRequest(_))
            ));
            assert_eq!(resolve_target(role, 1, Some(9)), Ok(9));
        }
    }

    #[test]
    fn zero_trainer_id_counts_as_absent() {
        assert_eq!(resolve_target(Role::Trainer, 4, Some(0)), Ok(4));
        for role in [Role::Admin, Role::Receptionist] {
            assert!(matches!(
                resolve_target(role, 1, Some(0)),
                Err(AttendanceError::InvalidRequest(_))
            ));
        }
    }

    #[test]
    fn member_cannot_record_attendance() {
        assert!(matches!(
            resolve_target(Role::Member, 3, Some(3)),
            Err(AttendanceError::Forbidden(_))
        ));
    }

    #[test]
    fn missing_target_is_not_found() {
        assert!(matches!(
            ensure_trainer(12, None),
            Err(AttendanceError::NotFound(_))
        ));
    }

    #[test]
    fn non_trainer_target_has_invalid_role() {
        for role in [Role::Admin, Role::Receptionist, Role::Member] {
            let target = user(12, role);
            assert!(matches!(
                ensure_trainer(12, Some(&target)),
                Err(AttendanceError::InvalidRole(_))
            ));
        }
    }

    #[test]
    fn trainer_target_is_accepted() {
        let target = user(12, Role::Trainer);
        assert_eq!(ensure_trainer(12, Some(&target)), Ok(()));
    }
}
