//! Contact query repository for walk-in and website enquiries.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::query::{ContactQuery, CreateContactQueryParams, QueryStatus};

pub struct ContactQueryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactQueryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new enquiry with status `New`.
    pub async fn create(&self, params: CreateContactQueryParams) -> Result<ContactQuery, DbErr> {
        let entity = entity::contact_query::ActiveModel {
            name: ActiveValue::Set(params.name),
            mobile: ActiveValue::Set(params.mobile),
            email: ActiveValue::Set(params.email),
            message: ActiveValue::Set(params.message),
            status: ActiveValue::Set(QueryStatus::New.into_entity()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ContactQuery::from_entity(entity))
    }

    /// Gets all enquiries, newest first.
    pub async fn get_all(&self) -> Result<Vec<ContactQuery>, DbErr> {
        let entities = entity::prelude::ContactQuery::find()
            .order_by_desc(entity::contact_query::Column::CreatedAt)
            .order_by_desc(entity::contact_query::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ContactQuery::from_entity).collect())
    }

    pub async fn set_status(
        &self,
        id: i32,
        status: QueryStatus,
    ) -> Result<Option<ContactQuery>, DbErr> {
        let Some(entity) = entity::prelude::ContactQuery::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::contact_query::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.into_entity());

        let entity = active.update(self.db).await?;

        Ok(Some(ContactQuery::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ContactQuery::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
