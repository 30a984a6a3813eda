//! Member domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::member::{CreateMemberDto, MemberDto, UpdateMemberDto},
    server::service::checkup::schedule::{checkup_status, is_due_soon, DUE_SOON_HORIZON_DAYS},
};

/// Gym member with enrollment and fitness checkup dates.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub membership_type: Option<String>,
    pub membership_start: Option<NaiveDate>,
    pub membership_end: Option<NaiveDate>,
    pub last_fitness_checkup_date: Option<NaiveDate>,
    pub next_fitness_checkup_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            phone: entity.phone,
            age: entity.age,
            gender: entity.gender,
            address: entity.address,
            membership_type: entity.membership_type,
            membership_start: entity.membership_start,
            membership_end: entity.membership_end,
            last_fitness_checkup_date: entity.last_fitness_checkup_date,
            next_fitness_checkup_date: entity.next_fitness_checkup_date,
            created_at: entity.created_at,
        }
    }

    /// Converts to a DTO, labelling the next checkup relative to `today`.
    pub fn into_dto(self, today: NaiveDate) -> MemberDto {
        let next = self.next_fitness_checkup_date;

        MemberDto {
            id: self.id,
            name: self.name,
            phone: self.phone,
            age: self.age,
            gender: self.gender,
            address: self.address,
            membership_type: self.membership_type,
            membership_start: self.membership_start,
            membership_end: self.membership_end,
            last_fitness_checkup_date: self.last_fitness_checkup_date,
            next_fitness_checkup_date: next,
            checkup_status: checkup_status(next, today).into_dto(),
            checkup_due_soon: is_due_soon(next, DUE_SOON_HORIZON_DAYS, today),
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a member.
#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    pub name: String,
    pub phone: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub membership_type: Option<String>,
    pub membership_start: Option<NaiveDate>,
    pub membership_end: Option<NaiveDate>,
}

impl CreateMemberParams {
    pub fn from_dto(dto: CreateMemberDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            age: dto.age,
            gender: dto.gender,
            address: dto.address,
            membership_type: dto.membership_type,
            membership_start: dto.membership_start,
            membership_end: dto.membership_end,
        }
    }
}

/// Row to insert for a new member, with its first checkup already scheduled.
#[derive(Debug, Clone)]
pub struct InsertMemberParams {
    pub member: CreateMemberParams,
    pub next_fitness_checkup_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Partial member update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateMemberParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub membership_type: Option<String>,
    pub membership_start: Option<NaiveDate>,
    pub membership_end: Option<NaiveDate>,
    /// Set by the service when the schedule has to be rewritten.
    pub next_fitness_checkup_date: Option<Option<NaiveDate>>,
}

impl UpdateMemberParams {
    pub fn from_dto(dto: UpdateMemberDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            age: dto.age,
            gender: dto.gender,
            address: dto.address,
            membership_type: dto.membership_type,
            membership_start: dto.membership_start,
            membership_end: dto.membership_end,
            next_fitness_checkup_date: None,
        }
    }
}
