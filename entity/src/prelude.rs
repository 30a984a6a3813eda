pub use super::contact_query::Entity as ContactQuery;
pub use super::member::Entity as Member;
pub use super::member_membership::Entity as MemberMembership;
pub use super::membership_plan::Entity as MembershipPlan;
pub use super::trainer_attendance::Entity as TrainerAttendance;
pub use super::trainer_profile::Entity as TrainerProfile;
pub use super::user::Entity as User;
pub use super::workout::Entity as Workout;
