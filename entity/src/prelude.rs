pub use super::festival_coupon::Entity as FestivalCoupon;
pub use super::festival_credit::Entity as FestivalCredit;
pub use super::festival_event::Entity as FestivalEvent;
pub use super::festival_pass::Entity as FestivalPass;
pub use super::festival_registration::Entity as FestivalRegistration;
pub use super::festival_team::Entity as FestivalTeam;
pub use super::festival_team_member::Entity as FestivalTeamMember;
pub use super::festival_user::Entity as FestivalUser;
