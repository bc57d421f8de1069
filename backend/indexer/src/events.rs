//! Canonical event types emitted by the crowdfunding contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/crowdfunding/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the crowdfunding contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new campaign was created (`created` topic).
    CampaignCreated,
    /// A contributor pledged tokens (`pledge` topic).
    PledgeMade,
    /// The owner claimed a successful campaign's pool (`claim` topic).
    CampaignClaimed,
    /// A contributor was refunded after a failed campaign (`refund` topic).
    PledgeRefunded,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::CampaignCreated,
            "pledge" => Self::PledgeMade,
            "claim" => Self::CampaignClaimed,
            "refund" => Self::PledgeRefunded,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CampaignCreated => "campaign_created",
            Self::PledgeMade => "pledge_made",
            Self::CampaignClaimed => "campaign_claimed",
            Self::PledgeRefunded => "pledge_refunded",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded crowdfunding event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignEvent {
    pub event_type: String,
    pub campaign_id: Option<String>,
    /// Campaign owner for `created`/`claim`, pledger for `pledge`/`refund`.
    pub actor: Option<String>,
    /// Goal for `created`, moved amount for the fund-moving events.
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
