//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers. This module is the
//! campaign store and the pledge ledger; the entry points in `lib.rs`
//! never touch raw keys.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key              | Type      | Description                          |
//! |------------------|-----------|--------------------------------------|
//! | `Admin`          | `Address` | Administrator (upgrade / deadline)   |
//! | `CampaignCount`  | `u64`     | Last assigned campaign id (ids start at 1) |
//! | `SchemaVersion`  | `u32`     | Storage schema version, see `upgrade` |
//! | `DeadlinePeriod` | `u64`     | Global deadline period (schema v2)   |
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                        | Type             | Description              |
//! |----------------------------|------------------|--------------------------|
//! | `Campaign(id)`             | `CampaignConfig` | Immutable campaign data  |
//! | `CampaignState(id)`        | `CampaignState`  | Mutable campaign state   |
//! | `Pledge(id, pledger)`      | `i128`           | Cumulative pledge, not yet refunded |
//!
//! ## Layout discipline
//!
//! `DataKey` variants are append-only: existing variants keep their
//! position and encoding across logic versions, and new global keys are
//! appended after all pre-existing ones. `migrate` in [`crate::upgrade`]
//! relies on this to add `DeadlinePeriod` without disturbing any existing
//! `Campaign`/`Pledge` entry.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::types::{Campaign, CampaignConfig, CampaignState};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Append-only across logic versions: `DeadlinePeriod` was added after
/// all v1 keys and any future global key goes after it. Never reorder,
/// remove, or re-type an existing variant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Administrator address (Instance).
    Admin,
    /// Last assigned campaign id; the first campaign gets 1 (Instance).
    CampaignCount,
    /// Immutable campaign configuration keyed by id (Persistent).
    Campaign(u64),
    /// Mutable campaign state keyed by id (Persistent).
    CampaignState(u64),
    /// Cumulative pledge keyed by (campaign id, pledger) (Persistent).
    Pledge(u64, Address),
    /// Storage schema version (Instance).
    SchemaVersion,
    /// Global deadline period, appended in schema v2 (Instance).
    DeadlinePeriod,
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

/// Retrieve the administrator. Panics if the contract was never initialized.
pub fn get_admin(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("not initialized")
}

/// Assign the next sequential campaign id, starting at 1.
///
/// Reads, increments, and stores the counter in one invocation; ids are
/// never reused.
pub fn next_campaign_id(env: &Env) -> u64 {
    bump_instance(env);
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
        + 1;
    env.storage().instance().set(&DataKey::CampaignCount, &id);
    id
}

pub fn set_schema_version(env: &Env, version: u32) {
    env.storage()
        .instance()
        .set(&DataKey::SchemaVersion, &version);
    bump_instance(env);
}

/// Stored schema version. A v1 deployment predates the version key, so
/// absence reads as 1.
pub fn get_schema_version(env: &Env) -> u32 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::SchemaVersion)
        .unwrap_or(1)
}

pub fn set_deadline_period(env: &Env, period: u64) {
    env.storage()
        .instance()
        .set(&DataKey::DeadlinePeriod, &period);
    bump_instance(env);
}

/// Global deadline period. Panics if the schema has not been migrated.
pub fn get_deadline_period(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::DeadlinePeriod)
        .expect("deadline period not set")
}

// ── Campaign Store ───────────────────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save both the immutable config and initial mutable state for a new campaign.
pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let config_key = DataKey::Campaign(campaign.id);
    let state_key = DataKey::CampaignState(campaign.id);

    let config = CampaignConfig {
        id: campaign.id,
        owner: campaign.owner.clone(),
        title: campaign.title.clone(),
        description: campaign.description.clone(),
        image: campaign.image.clone(),
        goal: campaign.goal,
        token: campaign.token.clone(),
        start_at: campaign.start_at,
        end_at: campaign.end_at,
    };

    let state = CampaignState {
        pledged: campaign.pledged,
        claimed: campaign.claimed,
    };

    env.storage().persistent().set(&config_key, &config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Campaign` by combining config and state.
/// Panics with `CampaignNotFound` if the campaign does not exist.
pub fn load_campaign(env: &Env, id: u64) -> Campaign {
    let config = load_campaign_config(env, id);
    let state = load_campaign_state(env, id);
    Campaign {
        id: config.id,
        owner: config.owner,
        title: config.title,
        description: config.description,
        image: config.image,
        goal: config.goal,
        token: config.token,
        pledged: state.pledged,
        start_at: config.start_at,
        end_at: config.end_at,
        claimed: state.claimed,
    }
}

/// Load only the immutable campaign configuration.
pub fn load_campaign_config(env: &Env, id: u64) -> CampaignConfig {
    let key = DataKey::Campaign(id);
    let config: CampaignConfig = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
    bump_persistent(env, &key);
    config
}

/// Load only the mutable campaign state.
pub fn load_campaign_state(env: &Env, id: u64) -> CampaignState {
    let key = DataKey::CampaignState(id);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
    bump_persistent(env, &key);
    state
}

/// Save only the mutable campaign state (pledge / claim writes).
pub fn save_campaign_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::CampaignState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

// ── Pledge Ledger ────────────────────────────────────────────────────

/// Add `amount` to the pledger's entry, creating it at zero if absent.
pub fn add_pledge(env: &Env, campaign_id: u64, pledger: &Address, amount: i128) {
    let key = DataKey::Pledge(campaign_id, pledger.clone());
    let current: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage().persistent().set(&key, &(current + amount));
    bump_persistent(env, &key);
}

/// Cumulative amount `pledger` has pledged to the campaign and not yet
/// had refunded. Zero if no entry exists.
pub fn pledge_amount(env: &Env, campaign_id: u64, pledger: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Pledge(campaign_id, pledger.clone()))
        .unwrap_or(0)
}

/// Read the pledger's entry and clear it in the same invocation,
/// returning the pre-clear amount.
///
/// The read-and-clear is what makes a second refund impossible: after
/// this returns, the entry reads as zero.
pub fn take_pledge(env: &Env, campaign_id: u64, pledger: &Address) -> i128 {
    let key = DataKey::Pledge(campaign_id, pledger.clone());
    let amount: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    if amount > 0 {
        env.storage().persistent().remove(&key);
    }
    amount
}
