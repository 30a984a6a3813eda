use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        attendance::{AttendanceActionDto, AttendanceDto},
        member::{CheckupStatusDto, CreateMemberDto, MemberDto, UpdateMemberDto},
        membership::{MembershipDto, MembershipPreviewDto, MembershipRequestDto},
        plan::{CreatePlanDto, PlanDto, UpdatePlanDto},
        query::{ContactQueryDto, CreateContactQueryDto, QueryStatusDto, UpdateQueryStatusDto},
        trainer::{AttachTrainerDto, CreateTrainerDto, TrainerDto, UpdateTrainerDto},
        user::{
            AccountStatusDto, LoginDto, RegisterUserDto, UpdateUserRoleDto, UserDto, UserRoleDto,
        },
        workout::{CreateWorkoutDto, UpdateWorkoutDto, WorkoutDto},
    },
    server::{
        controller::{
            admin, attendance, auth, checkup, member, membership, plan, query, trainer, workout,
        },
        state::AppState,
    },
};

/// OpenAPI document covering every route registered by [`router`].
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dojo Fitness API",
        description = "Gym management backend: members, fitness checkups, trainer attendance and plans"
    ),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_user,
        admin::get_pending_users,
        admin::approve_user,
        admin::update_user_role,
        admin::reject_user,
        member::create_member,
        member::get_members,
        member::get_member,
        member::update_member,
        member::delete_member,
        checkup::get_due_checkups,
        checkup::mark_checkup_done,
        checkup::recalculate_checkup,
        attendance::check_in,
        attendance::check_out,
        attendance::get_attendance,
        attendance::get_my_attendance,
        attendance::get_today_attendance,
        attendance::get_attendance_by_trainer,
        trainer::create_trainer,
        trainer::attach_trainer,
        trainer::get_trainers,
        trainer::get_trainer,
        trainer::update_trainer,
        trainer::delete_trainer,
        plan::create_plan,
        plan::get_plans,
        plan::get_plan,
        plan::update_plan,
        plan::delete_plan,
        membership::preview_membership,
        membership::assign_membership,
        membership::get_membership_history,
        workout::get_workouts,
        workout::get_workout,
        workout::create_workout,
        workout::update_workout,
        workout::delete_workout,
        query::submit_query,
        query::get_queries,
        query::update_query_status,
        query::delete_query,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        UserDto,
        UserRoleDto,
        AccountStatusDto,
        RegisterUserDto,
        LoginDto,
        UpdateUserRoleDto,
        MemberDto,
        CheckupStatusDto,
        CreateMemberDto,
        UpdateMemberDto,
        AttendanceDto,
        AttendanceActionDto,
        TrainerDto,
        CreateTrainerDto,
        AttachTrainerDto,
        UpdateTrainerDto,
        PlanDto,
        CreatePlanDto,
        UpdatePlanDto,
        MembershipRequestDto,
        MembershipPreviewDto,
        MembershipDto,
        WorkoutDto,
        CreateWorkoutDto,
        UpdateWorkoutDto,
        ContactQueryDto,
        CreateContactQueryDto,
        UpdateQueryStatusDto,
        QueryStatusDto,
    )),
    tags(
        (name = "auth", description = "Registration, login and session"),
        (name = "admin", description = "Account approval and roles"),
        (name = "members", description = "Gym members"),
        (name = "fitness-checkups", description = "Fitness checkup schedule"),
        (name = "trainer-attendance", description = "Trainer check-in and check-out"),
        (name = "trainers", description = "Trainer profiles"),
        (name = "plans", description = "Membership plans"),
        (name = "member-memberships", description = "Plan assignments"),
        (name = "workouts", description = "Personal workout log"),
        (name = "queries", description = "Contact us queries"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/admin/users/pending", get(admin::get_pending_users))
        .route("/api/admin/users/{user_id}/approve", put(admin::approve_user))
        .route("/api/admin/users/{user_id}/role", put(admin::update_user_role))
        .route("/api/admin/users/{user_id}", delete(admin::reject_user))
        .route(
            "/api/members",
            post(member::create_member).get(member::get_members),
        )
        .route(
            "/api/members/{member_id}",
            get(member::get_member)
                .put(member::update_member)
                .delete(member::delete_member),
        )
        .route("/api/fitness-checkups/due", get(checkup::get_due_checkups))
        .route(
            "/api/fitness-checkups/{member_id}/mark-done",
            post(checkup::mark_checkup_done),
        )
        .route(
            "/api/fitness-checkups/{member_id}/recalculate",
            post(checkup::recalculate_checkup),
        )
        .route("/api/trainer-attendance", get(attendance::get_attendance))
        .route("/api/trainer-attendance/checkin", post(attendance::check_in))
        .route("/api/trainer-attendance/checkout", post(attendance::check_out))
        .route("/api/trainer-attendance/me", get(attendance::get_my_attendance))
        .route(
            "/api/trainer-attendance/today",
            get(attendance::get_today_attendance),
        )
        .route(
            "/api/trainer-attendance/by-trainer",
            get(attendance::get_attendance_by_trainer),
        )
        .route(
            "/api/trainers",
            post(trainer::create_trainer).get(trainer::get_trainers),
        )
        .route("/api/trainers/attach", post(trainer::attach_trainer))
        .route(
            "/api/trainers/{trainer_id}",
            get(trainer::get_trainer)
                .put(trainer::update_trainer)
                .delete(trainer::delete_trainer),
        )
        .route("/api/plans", get(plan::get_plans).post(plan::create_plan))
        .route(
            "/api/plans/{plan_id}",
            get(plan::get_plan)
                .put(plan::update_plan)
                .delete(plan::delete_plan),
        )
        .route(
            "/api/member-memberships/preview",
            post(membership::preview_membership),
        )
        .route(
            "/api/member-memberships/assign",
            post(membership::assign_membership),
        )
        .route(
            "/api/member-memberships/{member_id}",
            get(membership::get_membership_history),
        )
        .route(
            "/api/workouts",
            get(workout::get_workouts).post(workout::create_workout),
        )
        .route(
            "/api/workouts/{workout_id}",
            get(workout::get_workout)
                .put(workout::update_workout)
                .delete(workout::delete_workout),
        )
        .route(
            "/api/queries",
            post(query::submit_query).get(query::get_queries),
        )
        .route(
            "/api/queries/{query_id}/status",
            patch(query::update_query_status),
        )
        .route("/api/queries/{query_id}", delete(query::delete_query))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
