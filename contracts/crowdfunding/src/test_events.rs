extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{CampaignClaimed, CampaignCreated, PledgeMade, PledgeRefunded};
use crate::{Crowdfunding, CrowdfundingClient};

const BASE_TIME: u64 = 1_000;
const GOAL: i128 = 5_000_000;

fn setup() -> (Env, CrowdfundingClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = BASE_TIME);
    let contract_id = env.register(Crowdfunding, ());
    let client = CrowdfundingClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    client.initialize(&admin, &604_800);
    (env, client)
}

fn create_token<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    token::Client::new(env, &addr.address())
}

fn create_campaign(env: &Env, client: &CrowdfundingClient, owner: &Address, token: &Address) -> u64 {
    client.create_campaign(
        owner,
        &String::from_str(env, "Save Trees"),
        &String::from_str(env, "Plant more of them"),
        &String::from_str(env, "Green trees"),
        &GOAL,
        token,
        &(BASE_TIME + 50),
        &(BASE_TIME + 500),
    )
}

#[test]
fn test_campaign_created_event() {
    let (env, client) = setup();
    let owner = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = create_token(&env, &token_admin);

    let id = create_campaign(&env, &client, &owner, &token.address);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            campaign_id: id,
            owner: owner.clone(),
            token: token.address.clone(),
            goal: GOAL,
            start_at: BASE_TIME + 50,
            end_at: BASE_TIME + 500,
        }
    );
}

#[test]
fn test_pledge_event() {
    let (env, client) = setup();
    let owner = Address::generate(&env);
    let pledger = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = create_token(&env, &token_admin);
    let amount = 1_000i128;

    let id = create_campaign(&env, &client, &owner, &token.address);

    let sac = token::StellarAssetClient::new(&env, &token.address);
    sac.mint(&pledger, &amount);

    env.ledger().with_mut(|li| li.timestamp = BASE_TIME + 100);
    client.pledge(&id, &pledger, &amount);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("pledge").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: PledgeMade = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PledgeMade {
            campaign_id: id,
            pledger: pledger.clone(),
            amount,
        }
    );
}

#[test]
fn test_claim_event() {
    let (env, client) = setup();
    let owner = Address::generate(&env);
    let pledger = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = create_token(&env, &token_admin);

    let id = create_campaign(&env, &client, &owner, &token.address);

    let sac = token::StellarAssetClient::new(&env, &token.address);
    sac.mint(&pledger, &GOAL);

    env.ledger().with_mut(|li| li.timestamp = BASE_TIME + 100);
    client.pledge(&id, &pledger, &GOAL);

    env.ledger().with_mut(|li| li.timestamp = BASE_TIME + 1_000);
    client.claim(&id, &owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("claim").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignClaimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignClaimed {
            campaign_id: id,
            owner: owner.clone(),
            amount: GOAL,
        }
    );
}

#[test]
fn test_refund_event() {
    let (env, client) = setup();
    let owner = Address::generate(&env);
    let pledger = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = create_token(&env, &token_admin);
    let amount = 500_000i128;

    let id = create_campaign(&env, &client, &owner, &token.address);

    let sac = token::StellarAssetClient::new(&env, &token.address);
    sac.mint(&pledger, &amount);

    env.ledger().with_mut(|li| li.timestamp = BASE_TIME + 100);
    client.pledge(&id, &pledger, &amount);

    env.ledger().with_mut(|li| li.timestamp = BASE_TIME + 1_000);
    client.refund(&id, &pledger);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("refund").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: PledgeRefunded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PledgeRefunded {
            campaign_id: id,
            pledger: pledger.clone(),
            amount,
        }
    );
}
