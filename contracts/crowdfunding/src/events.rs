//! Contract events.
//!
//! Every fund-moving operation publishes an event so off-chain consumers
//! (the indexer in `backend/indexer`) can reconstruct the campaign
//! history from the transaction log. Topics are `(symbol, campaign_id)`;
//! the data payload is the corresponding struct below.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub owner: Address,
    pub token: Address,
    pub goal: i128,
    pub start_at: u64,
    pub end_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PledgeMade {
    pub campaign_id: u64,
    pub pledger: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignClaimed {
    pub campaign_id: u64,
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PledgeRefunded {
    pub campaign_id: u64,
    pub pledger: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreated) {
    env.events()
        .publish((symbol_short!("created"), event.campaign_id), event);
}

pub fn emit_pledge(env: &Env, event: PledgeMade) {
    env.events()
        .publish((symbol_short!("pledge"), event.campaign_id), event);
}

pub fn emit_claim(env: &Env, event: CampaignClaimed) {
    env.events()
        .publish((symbol_short!("claim"), event.campaign_id), event);
}

pub fn emit_refund(env: &Env, event: PledgeRefunded) {
    env.events()
        .publish((symbol_short!("refund"), event.campaign_id), event);
}
