//! # Types
//!
//! Shared data structures of the crowdfunding ledger.
//!
//! ## Config / State split
//!
//! A `Campaign` is internally stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written once at creation; never mutated.
//! - [`CampaignState`] — written on every pledge and on claim.
//!
//! Pledges are the high-frequency write path, and the config carries the
//! descriptive strings (title, description, image), so rewriting the full
//! record on every pledge would be wasteful. The public API exposes the
//! reconstructed [`Campaign`] struct.
//!
//! ## Status as a derived classification
//!
//! [`CampaignStatus`] is never stored. It is computed from the pledge
//! window and the goal, so repeated reads in a terminal state always
//! return the same classification:
//!
//! ```text
//! Pending    (now <  start_at)
//! Active     (start_at <= now <= end_at)
//! Successful (now >  end_at, pledged >= goal)
//! Failed     (now >  end_at, pledged <  goal)
//! ```
//!
//! The only mutations permitted in a terminal state are the single claim
//! (`Successful`) or per-contributor refunds (`Failed`).

use soroban_sdk::{contracttype, Address, String};

/// Derived lifecycle classification of a campaign at a given timestamp.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// Pledge window has not opened yet.
    Pending,
    /// Accepting pledges.
    Active,
    /// Window closed with the goal met; awaiting (or past) the owner's claim.
    Successful,
    /// Window closed short of the goal; contributors may refund.
    Failed,
}

/// Immutable campaign configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub owner: Address,
    pub title: String,
    pub description: String,
    pub image: String,
    pub goal: i128,
    pub token: Address,
    pub start_at: u64,
    pub end_at: u64,
}

/// Mutable campaign state, updated on pledges and on claim.
///
/// Kept small so the frequent writes are cheap.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    /// Cumulative amount pledged. Monotonically non-decreasing; deliberately
    /// left untouched by refunds so the record keeps the historical total.
    pub pledged: i128,
    /// Set exactly once by a successful claim; irreversible.
    pub claimed: bool,
}

/// Full public representation of a campaign.
///
/// Reconstructed from the split `CampaignConfig` + `CampaignState`
/// storage entries; used as the query return type.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Unique identifier, assigned sequentially starting at 1.
    pub id: u64,
    /// Creator of the campaign; the only identity allowed to claim.
    pub owner: Address,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Target amount in the campaign's token.
    pub goal: i128,
    /// The fungible token pledges are denominated in.
    pub token: Address,
    /// Cumulative amount pledged so far.
    pub pledged: i128,
    /// Start of the pledge-acceptance window (inclusive).
    pub start_at: u64,
    /// End of the pledge-acceptance window (inclusive).
    pub end_at: u64,
    /// Whether the owner has claimed the pledged pool.
    pub claimed: bool,
}

impl Campaign {
    /// `pledged == goal` counts as met: claimable, not refundable.
    pub fn goal_met(&self) -> bool {
        self.pledged >= self.goal
    }

    /// Classify the campaign at ledger timestamp `now`.
    pub fn status(&self, now: u64) -> CampaignStatus {
        if now < self.start_at {
            CampaignStatus::Pending
        } else if now <= self.end_at {
            CampaignStatus::Active
        } else if self.goal_met() {
            CampaignStatus::Successful
        } else {
            CampaignStatus::Failed
        }
    }
}
