//! Storage schema versioning for in-place logic upgrades.
//!
//! The contract can be replaced with a newer wasm blob while keeping its
//! storage (`Crowdfunding::upgrade`). Storage written by the previous
//! version must stay valid under the new one, which this module enforces
//! with two rules:
//!
//! 1. `DataKey` variants are append-only (see [`crate::storage`]): a new
//!    version may add keys after all existing ones but never relocate or
//!    re-type an existing key. Campaign and pledge entries written by v1
//!    are therefore readable by v2 verbatim.
//! 2. Each schema change ships an explicit migration. [`migrate_storage`]
//!    refuses to run unless the stored version is exactly the one it
//!    upgrades from, so a skipped or repeated migration fails instead of
//!    corrupting state.
//!
//! ## v1 → v2
//!
//! v2 appends the global `DeadlinePeriod` parameter (mutable via
//! `change_deadline`). No existing entry is rewritten.

use soroban_sdk::{panic_with_error, Env};

use crate::storage;
use crate::Error;

/// Schema version written by this logic version.
pub const SCHEMA_VERSION: u32 = 2;

/// The schema version this logic version knows how to migrate from.
const MIGRATES_FROM: u32 = 1;

/// Migrate v1 storage to v2: append the global deadline period and bump
/// the schema version.
///
/// Panics with `SchemaMismatch` unless the stored version is exactly
/// [`MIGRATES_FROM`] — running against an already-migrated (or future)
/// layout is refused outright.
pub fn migrate_storage(env: &Env, deadline_period: u64) {
    if storage::get_schema_version(env) != MIGRATES_FROM {
        panic_with_error!(env, Error::SchemaMismatch);
    }
    storage::set_deadline_period(env, deadline_period);
    storage::set_schema_version(env, SCHEMA_VERSION);
}

/// Guard for entry points that only exist in the v2 schema.
pub fn require_current_schema(env: &Env) {
    if storage::get_schema_version(env) != SCHEMA_VERSION {
        panic_with_error!(env, Error::SchemaMismatch);
    }
}
