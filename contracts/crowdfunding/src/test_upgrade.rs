//! Migration tests: a v1 storage layout (campaigns + pledge ledger, no
//! global deadline, no schema version key) must survive the v1 → v2
//! migration byte-for-byte, and the migration itself must be one-shot.

extern crate std;

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::storage;
use crate::types::Campaign;
use crate::{Crowdfunding, CrowdfundingClient, Error};

const WEEK: u64 = 604_800;

/// Register the contract and hand-write a v1 storage layout into it:
/// admin, one campaign, two pledge entries, and no deadline-period key.
/// `initialize` is deliberately not called.
fn seed_v1() -> (Env, CrowdfundingClient<'static>, Address, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(Crowdfunding, ());
    let client = CrowdfundingClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let pledger = Address::generate(&env);
    let token = Address::generate(&env);

    env.as_contract(&contract_id, || {
        storage::set_admin(&env, &admin);
        storage::set_schema_version(&env, 1);
        let id = storage::next_campaign_id(&env);
        storage::save_campaign(
            &env,
            &Campaign {
                id,
                owner: owner.clone(),
                title: String::from_str(&env, "Save Trees"),
                description: String::from_str(&env, "Planted before the upgrade"),
                image: String::from_str(&env, "Green trees"),
                goal: 5_000_000,
                token: token.clone(),
                pledged: 1_500,
                start_at: 1_050,
                end_at: 1_500,
                claimed: false,
            },
        );
        storage::add_pledge(&env, id, &pledger, 1_000);
        storage::add_pledge(&env, id, &owner, 500);
    });

    (env, client, admin, owner, pledger)
}

#[test]
fn test_migrate_appends_deadline_and_bumps_version() {
    let (_env, client, admin, _, _) = seed_v1();

    assert_eq!(client.schema_version(), 1);

    client.migrate(&admin, &WEEK);

    assert_eq!(client.schema_version(), 2);
    assert_eq!(client.deadline(), WEEK);
}

#[test]
fn test_migrate_preserves_campaigns_and_pledges() {
    let (_env, client, admin, owner, pledger) = seed_v1();

    let campaign_before = client.get_campaign(&1);
    let pledger_before = client.pledged_amount(&1, &pledger);
    let owner_before = client.pledged_amount(&1, &owner);

    client.migrate(&admin, &WEEK);

    // Every value observed before the migration reads back identically.
    assert_eq!(client.get_campaign(&1), campaign_before);
    assert_eq!(client.pledged_amount(&1, &pledger), pledger_before);
    assert_eq!(client.pledged_amount(&1, &owner), owner_before);
}

#[test]
fn test_migrate_is_one_shot() {
    let (_env, client, admin, _, _) = seed_v1();

    client.migrate(&admin, &WEEK);

    let res = client.try_migrate(&admin, &WEEK);
    assert_eq!(res, Err(Ok(Error::SchemaMismatch.into())));
}

#[test]
fn test_migrate_requires_admin() {
    let (env, client, _, _, _) = seed_v1();
    let stranger = Address::generate(&env);

    let res = client.try_migrate(&stranger, &WEEK);
    assert_eq!(res, Err(Ok(Error::Unauthorized.into())));
    assert_eq!(client.schema_version(), 1);
}

#[test]
fn test_change_deadline_refused_on_v1_schema() {
    let (_env, client, admin, _, _) = seed_v1();

    let res = client.try_change_deadline(&admin, &1_000_000);
    assert_eq!(res, Err(Ok(Error::SchemaMismatch.into())));
}

#[test]
fn test_fresh_deployment_needs_no_migration() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(Crowdfunding, ());
    let client = CrowdfundingClient::new(&env, &contract_id);
    let admin = Address::generate(&env);

    client.initialize(&admin, &WEEK);

    assert_eq!(client.schema_version(), 2);
    let res = client.try_migrate(&admin, &WEEK);
    assert_eq!(res, Err(Ok(Error::SchemaMismatch.into())));
}

#[test]
fn test_upgrade_requires_admin() {
    let (env, client, _, _, _) = seed_v1();
    let stranger = Address::generate(&env);
    let wasm_hash = soroban_sdk::BytesN::from_array(&env, &[0u8; 32]);

    let res = client.try_upgrade(&stranger, &wasm_hash);
    assert_eq!(res, Err(Ok(Error::Unauthorized.into())));
}
