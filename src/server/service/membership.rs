//! Assigning membership plans to members.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{member::MemberRepository, membership::MembershipRepository, plan::PlanRepository},
    error::AppError,
    model::{
        member::Member,
        membership::{
            membership_end_date, AssignMembershipParams, MemberMembership, MembershipPreview,
        },
        plan::MembershipPlan,
    },
};

pub struct MembershipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Shows what an assignment would look like without saving it.
    ///
    /// # Returns
    /// - `Ok(MembershipPreview)` - Member, plan and computed end date
    /// - `Err(AppError::NotFound)` - Unknown member or plan
    pub async fn preview(
        &self,
        params: AssignMembershipParams,
    ) -> Result<MembershipPreview, AppError> {
        let (member, plan) = self.load(&params).await?;
        let end_date = end_date(&params, &plan)?;

        Ok(MembershipPreview {
            member_id: member.id,
            member_name: member.name,
            plan_id: plan.id,
            plan_name: plan.name,
            duration_days: plan.duration_days,
            start_date: params.start_date,
            end_date,
        })
    }

    /// Assigns a plan to a member starting on the given date.
    ///
    /// # Returns
    /// - `Ok(MemberMembership)` - The stored assignment
    /// - `Err(AppError::NotFound)` - Unknown member or plan
    pub async fn assign(
        &self,
        params: AssignMembershipParams,
    ) -> Result<MemberMembership, AppError> {
        let (member, plan) = self.load(&params).await?;
        let end_date = end_date(&params, &plan)?;

        let membership = MembershipRepository::new(self.db)
            .create(member.id, plan.id, params.start_date, end_date)
            .await?;

        tracing::info!(
            "Assigned plan {} to member {} until {}",
            plan.id,
            member.id,
            end_date
        );

        Ok(membership)
    }

    /// Gets a member's plan history.
    pub async fn history(&self, member_id: i32) -> Result<Vec<MemberMembership>, AppError> {
        MemberRepository::new(self.db)
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        let memberships = MembershipRepository::new(self.db)
            .get_by_member(member_id)
            .await?;

        Ok(memberships)
    }

    async fn load(
        &self,
        params: &AssignMembershipParams,
    ) -> Result<(Member, MembershipPlan), AppError> {
        let member = MemberRepository::new(self.db)
            .find_by_id(params.member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        let plan = PlanRepository::new(self.db)
            .get_by_id(params.plan_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Plan not found".to_string()))?;

        Ok((member, plan))
    }
}

fn end_date(
    params: &AssignMembershipParams,
    plan: &MembershipPlan,
) -> Result<chrono::NaiveDate, AppError> {
    membership_end_date(params.start_date, plan.duration_days)
        .ok_or_else(|| AppError::BadRequest("Membership end date is out of range".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_utils::{
        builder::TestBuilder,
        factory::{self, membership_plan::MembershipPlanFactory},
    };

    /// Tests that assigning persists the computed end date.
    #[tokio::test]
    async fn assign_stores_end_date() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_membership_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let member = factory::create_member(db).await?;
        let plan = MembershipPlanFactory::new(db)
            .duration_days(30)
            .build()
            .await?;

        let service = MembershipService::new(db);
        let membership = service
            .assign(AssignMembershipParams {
                member_id: member.id,
                plan_id: plan.id,
                start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            })
            .await?;

        assert_eq!(
            membership.end_date,
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
        );
        assert_eq!(service.history(member.id).await?.len(), 1);

        Ok(())
    }

    /// Tests previewing with an unknown plan.
    #[tokio::test]
    async fn preview_unknown_plan_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_membership_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let member = factory::create_member(db).await?;

        let result = MembershipService::new(db)
            .preview(AssignMembershipParams {
                member_id: member.id,
                plan_id: 999,
                start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }
}
