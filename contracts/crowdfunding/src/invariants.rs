#![allow(dead_code)]

extern crate std;

use crate::types::{Campaign, CampaignStatus};

/// INV-1: Campaign goal must always be positive.
pub fn assert_goal_positive(campaign: &Campaign) {
    assert!(
        campaign.goal > 0,
        "INV-1 violated: campaign {} has non-positive goal ({})",
        campaign.id,
        campaign.goal
    );
}

/// INV-2: The pledge window must be ordered: `start_at < end_at`.
pub fn assert_window_ordered(campaign: &Campaign) {
    assert!(
        campaign.start_at < campaign.end_at,
        "INV-2 violated: campaign {} window [{}, {}] is not ordered",
        campaign.id,
        campaign.start_at,
        campaign.end_at
    );
}

/// INV-3: The pledged total must never be negative.
pub fn assert_pledged_non_negative(campaign: &Campaign) {
    assert!(
        campaign.pledged >= 0,
        "INV-3 violated: campaign {} has negative pledged total ({})",
        campaign.id,
        campaign.pledged
    );
}

/// INV-4: A claimed campaign must have met its goal.
pub fn assert_claimed_implies_goal_met(campaign: &Campaign) {
    if campaign.claimed {
        assert!(
            campaign.pledged >= campaign.goal,
            "INV-4 violated: campaign {} is claimed with pledged {} < goal {}",
            campaign.id,
            campaign.pledged,
            campaign.goal
        );
    }
}

/// INV-5: Pledge invariant — after a pledge of `amount`, the pledged
/// total increases by exactly `amount`.
pub fn assert_pledge_invariant(pledged_before: i128, pledged_after: i128, amount: i128) {
    assert_eq!(
        pledged_after,
        pledged_before + amount,
        "INV-5 violated: pledge invariant broken: {} + {} != {}",
        pledged_before,
        amount,
        pledged_after
    );
}

/// INV-6: Campaign ids are sequential starting from 1.
pub fn assert_sequential_ids(campaigns: &[Campaign]) {
    for (i, campaign) in campaigns.iter().enumerate() {
        assert_eq!(
            campaign.id,
            i as u64 + 1,
            "INV-6 violated: expected id {}, got {}",
            i + 1,
            campaign.id
        );
    }
}

/// INV-7: Accounting invariant — the campaign's pledged total equals the
/// sum of all live (not yet refunded) ledger entries for it. After a
/// failed campaign's refunds start, the historical total instead bounds
/// the live sum from above.
pub fn assert_accounting(campaign: &Campaign, live_entries: &[i128]) {
    let sum: i128 = live_entries.iter().sum();
    assert!(
        campaign.pledged >= sum,
        "INV-7 violated: campaign {} pledged {} below live ledger sum {}",
        campaign.id,
        campaign.pledged,
        sum
    );
}

/// INV-8: Status transition validity. The classification only moves
/// forward in time:
///   Pending -> Active
///   Active  -> Successful | Failed
///   Successful / Failed -> (none)
pub fn assert_valid_status_transition(from: &CampaignStatus, to: &CampaignStatus) {
    let valid = from == to
        || matches!(
            (from, to),
            (CampaignStatus::Pending, CampaignStatus::Active)
                | (CampaignStatus::Active, CampaignStatus::Successful)
                | (CampaignStatus::Active, CampaignStatus::Failed)
        );

    assert!(
        valid,
        "INV-8 violated: invalid status transition from {:?} to {:?}",
        from, to
    );
}

/// INV-9: Immutable fields — everything except `pledged` and `claimed`
/// must remain unchanged after creation.
pub fn assert_immutable_fields(original: &Campaign, current: &Campaign) {
    assert_eq!(original.id, current.id, "INV-9 violated: id changed");
    assert_eq!(
        original.owner, current.owner,
        "INV-9 violated: owner changed"
    );
    assert_eq!(
        original.token, current.token,
        "INV-9 violated: token changed"
    );
    assert_eq!(original.goal, current.goal, "INV-9 violated: goal changed");
    assert_eq!(
        original.start_at, current.start_at,
        "INV-9 violated: start_at changed"
    );
    assert_eq!(
        original.end_at, current.end_at,
        "INV-9 violated: end_at changed"
    );
}

/// Run all stateless campaign invariants.
pub fn assert_all_campaign_invariants(campaign: &Campaign) {
    assert_goal_positive(campaign);
    assert_window_ordered(campaign);
    assert_pledged_non_negative(campaign);
    assert_claimed_implies_goal_met(campaign);
}
