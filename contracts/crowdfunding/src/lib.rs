//! # Crowdfunding Contract
//!
//! Token-denominated crowdfunding ledger. Campaign owners register a
//! funding goal and a pledge window; contributors pledge a fungible
//! token; after the window closes the pool is either claimed by the
//! owner (goal met) or returned pledge-by-pledge to the contributors
//! (goal missed).
//!
//! | Phase      | Entry Point(s)                                    |
//! |------------|---------------------------------------------------|
//! | Bootstrap  | [`Crowdfunding::initialize`]                      |
//! | Lifecycle  | `create_campaign`, `pledge`, `claim`, `refund`    |
//! | Admin      | `change_deadline`, `upgrade`, `migrate`           |
//! | Queries    | `get_campaign`, `campaign_status`, `pledged_amount`, `deadline`, `schema_version` |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`] (campaign store +
//! pledge ledger), schema versioning to [`upgrade`], and event emission
//! to [`events`]. This file contains only the entry points and their
//! precondition sequencing.
//!
//! Every entry point either satisfies all of its preconditions and
//! commits, or panics with a variant of [`Error`] and leaves no trace —
//! the host rolls back all storage writes and token transfers of a
//! failed invocation, so no operation has observable partial effects.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, BytesN, Env, String,
};

mod events;
mod storage;
mod types;
mod upgrade;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_upgrade;

use events::{CampaignClaimed, CampaignCreated, PledgeMade, PledgeRefunded};
pub use types::{Campaign, CampaignStatus};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized        = 1,
    /// `goal <= 0` or `start_at >= end_at` at creation.
    InvalidCampaignParameters = 2,
    CampaignNotFound          = 3,
    InvalidAmount             = 4,
    /// Pledge attempted outside `[start_at, end_at]`.
    PledgeWindowClosed        = 5,
    /// Claim or refund attempted at or before `end_at`.
    CampaignNotEnded          = 6,
    Unauthorized              = 7,
    /// Claim attempted with `pledged < goal`.
    GoalNotMet                = 8,
    /// Refund attempted with `pledged >= goal`.
    GoalAlreadyMet            = 9,
    AlreadyClaimed            = 10,
    NothingToRefund           = 11,
    /// The token contract rejected the pledge pull.
    TransferFailed            = 12,
    /// Stored storage schema does not match what this operation expects.
    SchemaMismatch            = 13,
}

#[contract]
pub struct Crowdfunding;

#[contractimpl]
impl Crowdfunding {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Initialize a fresh deployment.
    ///
    /// Must be called exactly once; subsequent calls panic with
    /// `AlreadyInitialized`. Writes the administrator, the global
    /// deadline period, and the current schema version.
    ///
    /// A v1 deployment being upgraded in place does *not* call this —
    /// it keeps its storage and runs [`Crowdfunding::migrate`] instead.
    pub fn initialize(env: Env, admin: Address, deadline_period: u64) {
        if storage::has_admin(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        storage::set_deadline_period(&env, deadline_period);
        storage::set_schema_version(&env, upgrade::SCHEMA_VERSION);
    }

    // ─────────────────────────────────────────────────────────
    // Campaign lifecycle
    // ─────────────────────────────────────────────────────────

    /// Create a new campaign and return its id.
    ///
    /// Ids are assigned sequentially starting at 1 and never reused.
    /// `title`, `description`, and `image` are opaque descriptive
    /// strings, stored as given.
    ///
    /// Preconditions: `goal > 0` and `start_at < end_at`, otherwise
    /// `InvalidCampaignParameters`.
    pub fn create_campaign(
        env: Env,
        owner: Address,
        title: String,
        description: String,
        image: String,
        goal: i128,
        token: Address,
        start_at: u64,
        end_at: u64,
    ) -> u64 {
        owner.require_auth();

        if goal <= 0 || start_at >= end_at {
            panic_with_error!(&env, Error::InvalidCampaignParameters);
        }

        let id = storage::next_campaign_id(&env);

        let campaign = Campaign {
            id,
            owner: owner.clone(),
            title,
            description,
            image,
            goal,
            token: token.clone(),
            pledged: 0,
            start_at,
            end_at,
            claimed: false,
        };
        storage::save_campaign(&env, &campaign);

        events::emit_campaign_created(
            &env,
            CampaignCreated {
                campaign_id: id,
                owner,
                token,
                goal,
                start_at,
                end_at,
            },
        );

        id
    }

    /// Pledge `amount` of the campaign's token.
    ///
    /// Only allowed while the window is open (`start_at <= now <=
    /// end_at`). The tokens are pulled from `pledger` into contract
    /// custody; repeated pledges from the same contributor accumulate in
    /// a single ledger entry.
    pub fn pledge(env: Env, campaign_id: u64, pledger: Address, amount: i128) {
        pledger.require_auth();

        let config = storage::load_campaign_config(&env, campaign_id);
        let mut state = storage::load_campaign_state(&env, campaign_id);

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        let now = env.ledger().timestamp();
        if now < config.start_at || now > config.end_at {
            panic_with_error!(&env, Error::PledgeWindowClosed);
        }

        // Pull the pledge into custody. A rejection (insufficient balance,
        // missing authorization) surfaces as TransferFailed.
        let token_client = token::Client::new(&env, &config.token);
        if token_client
            .try_transfer(&pledger, &env.current_contract_address(), &amount)
            .is_err()
        {
            panic_with_error!(&env, Error::TransferFailed);
        }

        state.pledged += amount;
        storage::save_campaign_state(&env, campaign_id, &state);
        storage::add_pledge(&env, campaign_id, &pledger, amount);

        events::emit_pledge(
            &env,
            PledgeMade {
                campaign_id,
                pledger,
                amount,
            },
        );
    }

    /// Claim the full pledged pool of a successful campaign.
    ///
    /// Owner-only, after `end_at`, with `pledged >= goal` (an exact
    /// match counts as met), at most once. A single irreversible
    /// settlement of the entire pool — there are no partial claims.
    pub fn claim(env: Env, campaign_id: u64, caller: Address) {
        caller.require_auth();

        let config = storage::load_campaign_config(&env, campaign_id);
        let mut state = storage::load_campaign_state(&env, campaign_id);

        if caller != config.owner {
            panic_with_error!(&env, Error::Unauthorized);
        }
        if env.ledger().timestamp() <= config.end_at {
            panic_with_error!(&env, Error::CampaignNotEnded);
        }
        if state.pledged < config.goal {
            panic_with_error!(&env, Error::GoalNotMet);
        }
        if state.claimed {
            panic_with_error!(&env, Error::AlreadyClaimed);
        }

        state.claimed = true;
        storage::save_campaign_state(&env, campaign_id, &state);

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&env.current_contract_address(), &config.owner, &state.pledged);

        events::emit_claim(
            &env,
            CampaignClaimed {
                campaign_id,
                owner: config.owner,
                amount: state.pledged,
            },
        );
    }

    /// Return the caller's pledge after a failed campaign.
    ///
    /// Allowed after `end_at` when `pledged < goal`. Consumes the
    /// caller's ledger entry in the same invocation, so a second refund
    /// finds nothing and fails with `NothingToRefund`. Each contributor
    /// refunds independently; the campaign's `pledged` counter keeps the
    /// historical total.
    pub fn refund(env: Env, campaign_id: u64, pledger: Address) {
        pledger.require_auth();

        let config = storage::load_campaign_config(&env, campaign_id);
        let state = storage::load_campaign_state(&env, campaign_id);

        if env.ledger().timestamp() <= config.end_at {
            panic_with_error!(&env, Error::CampaignNotEnded);
        }
        if state.pledged >= config.goal {
            panic_with_error!(&env, Error::GoalAlreadyMet);
        }

        let amount = storage::take_pledge(&env, campaign_id, &pledger);
        if amount == 0 {
            panic_with_error!(&env, Error::NothingToRefund);
        }

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&env.current_contract_address(), &pledger, &amount);

        events::emit_refund(
            &env,
            PledgeRefunded {
                campaign_id,
                pledger,
                amount,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Administration & upgrade
    // ─────────────────────────────────────────────────────────

    /// Set the global deadline period. Administrator-only; requires the
    /// v2 schema. Touches no campaign or pledge entry.
    pub fn change_deadline(env: Env, caller: Address, new_period: u64) {
        caller.require_auth();
        if caller != storage::get_admin(&env) {
            panic_with_error!(&env, Error::Unauthorized);
        }
        upgrade::require_current_schema(&env);
        storage::set_deadline_period(&env, new_period);
    }

    /// Replace the contract logic with `new_wasm_hash`, keeping all
    /// storage in place. Administrator-only. Follow with
    /// [`Crowdfunding::migrate`] when the new logic's schema differs.
    pub fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) {
        caller.require_auth();
        if caller != storage::get_admin(&env) {
            panic_with_error!(&env, Error::Unauthorized);
        }
        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    /// One-time v1 → v2 storage migration: append the global deadline
    /// period. Administrator-only; refuses any layout other than an
    /// unmigrated v1 prefix (`SchemaMismatch`).
    pub fn migrate(env: Env, caller: Address, deadline_period: u64) {
        caller.require_auth();
        if caller != storage::get_admin(&env) {
            panic_with_error!(&env, Error::Unauthorized);
        }
        upgrade::migrate_storage(&env, deadline_period);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Retrieve a campaign by id.
    pub fn get_campaign(env: Env, campaign_id: u64) -> Campaign {
        storage::load_campaign(&env, campaign_id)
    }

    /// Classify a campaign at the current ledger timestamp.
    pub fn campaign_status(env: Env, campaign_id: u64) -> CampaignStatus {
        let campaign = storage::load_campaign(&env, campaign_id);
        campaign.status(env.ledger().timestamp())
    }

    /// Amount `pledger` has pledged to the campaign and not yet had
    /// refunded. Zero if they never pledged.
    pub fn pledged_amount(env: Env, campaign_id: u64, pledger: Address) -> i128 {
        storage::pledge_amount(&env, campaign_id, &pledger)
    }

    /// Current global deadline period.
    pub fn deadline(env: Env) -> u64 {
        storage::get_deadline_period(&env)
    }

    /// Current storage schema version.
    pub fn schema_version(env: Env) -> u32 {
        storage::get_schema_version(&env)
    }
}
