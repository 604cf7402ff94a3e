//! Team registration service.
//!
//! Resolves a submitted roster against existing accounts, prices the team with
//! [`pricing::quote_team`] and persists the team, its roster, registrations and credits in a
//! single transaction.

pub mod pricing;

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use entity::sea_orm_active_enums::RegistrationStatus;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::registration::{PaymentMode, RegisterTeamDto, RegisterTeamResponseDto},
    server::{
        data::{
            credit::CreditRepository, event::EventRepository, pass::PassRepository,
            registration::RegistrationRepository, team::TeamRepository,
            team_member::TeamMemberRepository, user::UserRepository,
        },
        error::{registration::RegistrationError, Error},
        service::retry::RetryContext,
        util::code::generate_join_code,
    },
};

/// Roster entry after trimming and lower-casing the email.
#[derive(Clone)]
struct RosterMember {
    email: String,
    role: String,
}

/// Validated registration submission.
#[derive(Clone)]
struct TeamSubmission {
    leader_id: i32,
    event_id: i32,
    team_name: String,
    members: Vec<RosterMember>,
    payment_mode: PaymentMode,
    amount_paid: i64,
}

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new instance of [`RegistrationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a team for an event on behalf of `leader_id`
    ///
    /// The team is free only when every member holds an active pass, otherwise it pays the full
    /// event fee and each resolved member without a pass receives a credit for their share.
    ///
    /// # Returns
    /// - `Ok(RegisterTeamResponseDto)` - Team registered, includes the amount charged
    /// - `Err(Error::RegistrationError)` - Invalid roster, unknown event, ineligible pass
    ///   redemption, underpayment or an existing registration for the event
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn register_team(
        &self,
        leader_id: i32,
        event_id: i32,
        registration: RegisterTeamDto,
    ) -> Result<RegisterTeamResponseDto, Error> {
        let submission = validate_submission(leader_id, event_id, registration)?;

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("team registration for event ID {}", event_id),
            || {
                let db = db.clone();
                let submission = submission.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;
                    let response = register_team_in_txn(&txn, submission).await?;
                    txn.commit().await?;

                    Ok(response)
                })
            },
        )
        .await
    }
}

/// Normalizes the roster and rejects submissions which can never succeed.
fn validate_submission(
    leader_id: i32,
    event_id: i32,
    registration: RegisterTeamDto,
) -> Result<TeamSubmission, RegistrationError> {
    let team_name = registration.team_name.trim().to_string();
    if team_name.is_empty() {
        return Err(RegistrationError::EmptyTeamName);
    }
    if registration.members.is_empty() {
        return Err(RegistrationError::EmptyRoster);
    }

    let mut seen = HashSet::new();
    let mut members = Vec::with_capacity(registration.members.len());
    for member in registration.members {
        let email = member.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(RegistrationError::EmptyMemberEmail);
        }
        if !seen.insert(email.clone()) {
            return Err(RegistrationError::DuplicateMemberEmail(email));
        }

        members.push(RosterMember {
            email,
            role: member.role.trim().to_string(),
        });
    }

    Ok(TeamSubmission {
        leader_id,
        event_id,
        team_name,
        members,
        payment_mode: registration.payment_mode,
        amount_paid: registration.amount_paid,
    })
}

async fn register_team_in_txn(
    txn: &DatabaseTransaction,
    submission: TeamSubmission,
) -> Result<RegisterTeamResponseDto, Error> {
    let event = EventRepository::new(txn)
        .get(submission.event_id)
        .await?
        .ok_or(RegistrationError::EventNotFound(submission.event_id))?;

    let roster_size = submission.members.len();
    if roster_size < event.min_team_size.max(0) as usize
        || roster_size > event.max_team_size.max(0) as usize
    {
        return Err(RegistrationError::RosterSizeOutOfBounds {
            size: roster_size,
            min: event.min_team_size,
            max: event.max_team_size,
        }
        .into());
    }

    let emails: Vec<String> = submission.members.iter().map(|m| m.email.clone()).collect();
    let accounts: HashMap<String, i32> = UserRepository::new(txn)
        .find_many_by_emails(&emails)
        .await?
        .into_iter()
        .map(|user| (user.email.to_lowercase(), user.id))
        .collect();

    let resolved_ids: Vec<i32> = accounts.values().copied().collect();
    let pass_holders = PassRepository::new(txn)
        .user_ids_with_active_pass(&resolved_ids)
        .await?;

    let resolved: Vec<(RosterMember, Option<i32>)> = submission
        .members
        .into_iter()
        .map(|member| {
            let user_id = accounts.get(&member.email).copied();
            (member, user_id)
        })
        .collect();

    let has_valid_pass: Vec<bool> = resolved
        .iter()
        .map(|(_, user_id)| user_id.is_some_and(|id| pass_holders.contains(&id)))
        .collect();

    let quote = pricing::quote_team(event.fee, &has_valid_pass);

    if submission.payment_mode == PaymentMode::Pass && !quote.all_members_have_pass {
        return Err(RegistrationError::NotEligibleForPassRedemption.into());
    }
    if quote.final_amount > 0 && submission.amount_paid < quote.final_amount {
        return Err(RegistrationError::Underpaid {
            expected: quote.final_amount,
            paid: submission.amount_paid,
        }
        .into());
    }

    let team_repo = TeamRepository::new(txn);
    let registration_repo = RegistrationRepository::new(txn);

    if team_repo
        .get_by_event_and_leader(event.id, submission.leader_id)
        .await?
        .is_some()
    {
        return Err(RegistrationError::LeaderAlreadyRegistered(event.id).into());
    }

    let existing = registration_repo
        .find_many_by_event_and_users(event.id, &resolved_ids)
        .await?;
    if let Some(existing) = existing.first() {
        let email = accounts
            .iter()
            .find(|(_, id)| **id == existing.user_id)
            .map(|(email, _)| email.clone())
            .unwrap_or_default();

        return Err(RegistrationError::MemberAlreadyRegistered {
            email,
            event_id: event.id,
        }
        .into());
    }

    let team = team_repo
        .create(
            submission.team_name,
            event.id,
            submission.leader_id,
            generate_join_code(),
            quote.final_amount,
        )
        .await?;

    let registration_status = if quote.final_amount > 0 {
        RegistrationStatus::Paid
    } else {
        RegistrationStatus::Confirmed
    };

    let member_repo = TeamMemberRepository::new(txn);
    let credit_repo = CreditRepository::new(txn);
    let mut credits_issued = 0;

    for ((member, user_id), has_pass) in resolved.into_iter().zip(has_valid_pass) {
        member_repo
            .create(team.id, user_id, member.email, member.role)
            .await?;

        let Some(user_id) = user_id else {
            continue;
        };

        registration_repo
            .create(user_id, event.id, Some(team.id), registration_status)
            .await?;

        if quote.fair_share > 0 && !has_pass {
            credit_repo
                .create(
                    user_id,
                    quote.fair_share,
                    format!("Share of team {} fee for {}", team.name, event.name),
                    Some(team.id),
                    Some(event.id),
                )
                .await?;
            credits_issued += 1;
        }
    }

    tracing::info!(
        team_id = %team.id,
        event_id = %event.id,
        amount_paid = %quote.final_amount,
        credits_issued = %credits_issued,
        "Registered team {}",
        team.name
    );

    let message = if quote.final_amount == 0 {
        "Registration confirmed. Every member holds an active pass, no payment was required."
            .to_string()
    } else {
        format!(
            "Registration confirmed. Paid {}, members without a pass received {} in credit each.",
            quote.final_amount, quote.fair_share
        )
    };

    Ok(RegisterTeamResponseDto {
        success: true,
        team_id: team.id,
        amount_paid: quote.final_amount,
        message,
    })
}
