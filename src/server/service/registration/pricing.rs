//! Team fee calculation under the all-or-nothing free entry rule.

/// Outcome of pricing a team roster for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamQuote {
    /// `0` when every member holds an active pass, otherwise the full event fee
    pub final_amount: i64,
    /// Whether every member holds an active pass
    pub all_members_have_pass: bool,
    /// Credit owed to each paying member without a pass, `0` for free registrations
    pub fair_share: i64,
}

/// Prices a roster given whether each member holds an active pass.
///
/// The fee is waived only when every member has a pass, a single member without one makes the
/// whole team pay the full fee. The fair share divides the fee over the whole roster, including
/// members whose email did not resolve to an account, rounding down.
pub fn quote_team(fee: i64, has_valid_pass: &[bool]) -> TeamQuote {
    let all_members_have_pass = has_valid_pass.iter().all(|has_pass| *has_pass);

    let final_amount = if all_members_have_pass { 0 } else { fee };

    let fair_share = match has_valid_pass.len() {
        0 => 0,
        _ if final_amount == 0 => 0,
        size => final_amount / size as i64,
    };

    TeamQuote {
        final_amount,
        all_members_have_pass,
        fair_share,
    }
}
