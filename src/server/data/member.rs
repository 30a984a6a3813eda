//! Member data repository.
//!
//! Stores member records and their fitness checkup dates. The repository never derives
//! checkup dates itself; callers pass in whatever the schedule produced.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::member::{InsertMemberParams, Member, UpdateMemberParams};

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new member together with their first scheduled checkup.
    pub async fn create(&self, params: InsertMemberParams) -> Result<Member, DbErr> {
        let member = params.member;

        let entity = entity::member::ActiveModel {
            name: ActiveValue::Set(member.name),
            phone: ActiveValue::Set(member.phone),
            age: ActiveValue::Set(member.age),
            gender: ActiveValue::Set(member.gender),
            address: ActiveValue::Set(member.address),
            membership_type: ActiveValue::Set(member.membership_type),
            membership_start: ActiveValue::Set(member.membership_start),
            membership_end: ActiveValue::Set(member.membership_end),
            last_fitness_checkup_date: ActiveValue::Set(None),
            next_fitness_checkup_date: ActiveValue::Set(params.next_fitness_checkup_date),
            created_at: ActiveValue::Set(params.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Member::from_entity))
    }

    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::Phone.eq(phone))
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Gets all members ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Member>, DbErr> {
        let entities = entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }

    /// Applies a partial update to a member.
    ///
    /// Only fields present in `params` are written.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - The updated member
    /// - `Ok(None)` - No member with that ID
    /// - `Err(DbErr)` - Database error, including a unique violation on phone
    pub async fn update(
        &self,
        id: i32,
        params: UpdateMemberParams,
    ) -> Result<Option<Member>, DbErr> {
        let Some(entity) = entity::prelude::Member::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::member::ActiveModel = entity.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(phone);
        }
        if let Some(age) = params.age {
            active.age = ActiveValue::Set(Some(age));
        }
        if let Some(gender) = params.gender {
            active.gender = ActiveValue::Set(Some(gender));
        }
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(Some(address));
        }
        if let Some(membership_type) = params.membership_type {
            active.membership_type = ActiveValue::Set(Some(membership_type));
        }
        if let Some(start) = params.membership_start {
            active.membership_start = ActiveValue::Set(Some(start));
        }
        if let Some(end) = params.membership_end {
            active.membership_end = ActiveValue::Set(Some(end));
        }
        if let Some(next) = params.next_fitness_checkup_date {
            active.next_fitness_checkup_date = ActiveValue::Set(next);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Member::from_entity(entity)))
    }

    /// Overwrites both checkup dates for a member.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - The updated member
    /// - `Ok(None)` - No member with that ID
    pub async fn set_checkup_dates(
        &self,
        id: i32,
        last_checkup: Option<NaiveDate>,
        next_checkup: Option<NaiveDate>,
    ) -> Result<Option<Member>, DbErr> {
        let Some(entity) = entity::prelude::Member::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::member::ActiveModel = entity.into();
        active.last_fitness_checkup_date = ActiveValue::Set(last_checkup);
        active.next_fitness_checkup_date = ActiveValue::Set(next_checkup);

        let entity = active.update(self.db).await?;

        Ok(Some(Member::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets members with a scheduled checkup on or before `cutoff`, earliest first.
    ///
    /// Overdue checkups are included; members without a next date are not.
    pub async fn get_due_by(&self, cutoff: NaiveDate) -> Result<Vec<Member>, DbErr> {
        let entities = entity::prelude::Member::find()
            .filter(entity::member::Column::NextFitnessCheckupDate.is_not_null())
            .filter(entity::member::Column::NextFitnessCheckupDate.lte(cutoff))
            .order_by_asc(entity::member::Column::NextFitnessCheckupDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }

    /// Gets members that have no next checkup date stored.
    pub async fn get_without_next_checkup(&self) -> Result<Vec<Member>, DbErr> {
        let entities = entity::prelude::Member::find()
            .filter(entity::member::Column::NextFitnessCheckupDate.is_null())
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }
}
