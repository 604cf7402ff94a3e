use entity::sea_orm_active_enums::{PassStatus, PassType, UserRole};
use festival_test_utils::prelude::*;

use crate::model::registration::{PaymentMode, RegisterTeamDto, TeamMemberDto};


/// Builds a submission for the provided member emails
fn submission(emails: &[&str], payment_mode: PaymentMode, amount_paid: i64) -> RegisterTeamDto {
    RegisterTeamDto {
        team_name: "Null Pointers".to_string(),
        members: emails
            .iter()
            .map(|email| TeamMemberDto {
                email: email.to_string(),
                role: "member".to_string(),
            })
            .collect(),
        payment_mode,
        amount_paid,
    }
}

/// Inserts one account per email, with an active pass for the flagged ones, returning their IDs
async fn insert_members(
    test: &TestContext,
    members: &[(&str, bool)],
) -> Result<Vec<i32>, TestError> {
    let mut ids = Vec::with_capacity(members.len());

    for (email, has_pass) in members {
        let user = test.user().insert_user(email, UserRole::User).await?;
        if *has_pass {
            test.pass()
                .insert_pass(user.id, PassType::Standard, PassStatus::Active)
                .await?;
        }
        ids.push(user.id);
    }

    Ok(ids)
}
