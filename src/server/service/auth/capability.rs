use std::fmt;

use entity::sea_orm_active_enums::UserRole;

/// Operation guarded by a role check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RegisterTeam,
    PurchasePass,
    ViewOwnRecords,
    CheckInPass,
    VerifyPass,
    ManageEvents,
    ManageCoupons,
    ViewFinancials,
    ViewLeaderboard,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Self::RegisterTeam => "register a team",
            Self::PurchasePass => "purchase a pass",
            Self::ViewOwnRecords => "view your records",
            Self::CheckInPass => "check in passes",
            Self::VerifyPass => "verify passes",
            Self::ManageEvents => "manage events",
            Self::ManageCoupons => "manage coupons",
            Self::ViewFinancials => "view financials",
            Self::ViewLeaderboard => "view the coupon leaderboard",
        };

        f.write_str(action)
    }
}

/// Returns whether an account with `role` may perform `action`.
///
/// Every signed in account may act on its own behalf. Volunteers additionally run the gate and
/// see the leaderboard, admins may do everything.
pub fn can(role: UserRole, action: Action) -> bool {
    match action {
        Action::RegisterTeam | Action::PurchasePass | Action::ViewOwnRecords => true,
        Action::CheckInPass | Action::ViewLeaderboard => {
            matches!(role, UserRole::Volunteer | UserRole::Admin)
        }
        Action::VerifyPass
        | Action::ManageEvents
        | Action::ManageCoupons
        | Action::ViewFinancials => role == UserRole::Admin,
    }
}
