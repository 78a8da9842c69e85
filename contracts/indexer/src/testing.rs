use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage};
use cosmwasm_std::{from_binary, Addr, CosmosMsg, OwnedDeps, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use beacon::asset::AssetInfo;
use beacon::indexer::{Config, ExecuteMsg, IndexInfo, InstantiateMsg, LocatorEntry, QueryMsg};

use crate::contract::{execute, instantiate, query};
use crate::error::ContractError;
use crate::state::CONFIG;

const OWNER: &str = "owner";
const TOKEN: &str = "stake_token";

fn signer_asset() -> AssetInfo {
    AssetInfo::native_token("uatom")
}

fn sender_asset() -> AssetInfo {
    AssetInfo::native_token("uxprt")
}

fn setup() -> OwnedDeps<MockStorage, MockApi, MockQuerier> {
    let mut deps = mock_dependencies();
    instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(OWNER, &[]),
        InstantiateMsg {
            owner: Addr::unchecked(OWNER),
            staking_token: Addr::unchecked(TOKEN),
            locator_whitelist: None,
        },
    )
    .unwrap();

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info("anyone", &[]),
        ExecuteMsg::CreateIndex {
            signer_asset: signer_asset(),
            sender_asset: sender_asset(),
        },
    )
    .unwrap();

    deps
}

fn set_intent_msg(amount: u128, locator: &str) -> ExecuteMsg {
    ExecuteMsg::SetIntent {
        signer_asset: signer_asset(),
        sender_asset: sender_asset(),
        amount: Uint128::new(amount),
        locator: locator.to_string(),
    }
}

fn token_msg(msg: &CosmosMsg) -> Cw20ExecuteMsg {
    match msg {
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr, msg, ..
        }) => {
            assert_eq!(contract_addr, TOKEN);
            from_binary(msg).unwrap()
        }
        _ => panic!("unexpected message {:?}", msg),
    }
}

#[test]
fn proper_initialization() {
    let mut deps = mock_dependencies();
    let res = instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info("deployer", &[]),
        InstantiateMsg {
            owner: Addr::unchecked(OWNER),
            staking_token: Addr::unchecked(TOKEN),
            locator_whitelist: Some(Addr::unchecked("whitelist")),
        },
    )
    .unwrap();
    assert_eq!(0, res.messages.len());

    let config = CONFIG.load(deps.as_ref().storage).unwrap();
    assert_eq!(
        config,
        Config {
            owner: Addr::unchecked(OWNER),
            staking_token: Addr::unchecked(TOKEN),
            locator_whitelist: Some(Addr::unchecked("whitelist")),
            paused: false,
        }
    );
}

#[test]
fn create_index_is_idempotent_and_ordered() {
    let mut deps = setup();

    let res = execute(
        deps.as_mut(),
        mock_env(),
        mock_info("someone_else", &[]),
        ExecuteMsg::CreateIndex {
            signer_asset: signer_asset(),
            sender_asset: sender_asset(),
        },
    )
    .unwrap();
    assert!(res.events.is_empty());
    let existing: IndexInfo = from_binary(&res.data.unwrap()).unwrap();
    assert_eq!(existing.id, 1);

    // the reversed pair is a different index
    let res = execute(
        deps.as_mut(),
        mock_env(),
        mock_info("someone_else", &[]),
        ExecuteMsg::CreateIndex {
            signer_asset: sender_asset(),
            sender_asset: signer_asset(),
        },
    )
    .unwrap();
    assert_eq!(res.events.len(), 1);
    let reversed: IndexInfo = from_binary(&res.data.unwrap()).unwrap();
    assert_eq!(reversed.id, 2);
    assert_eq!(reversed.signer_asset, sender_asset());
}

#[test]
fn set_intent_pulls_stake_and_reconciles_updates() {
    let mut deps = setup();
    let env = mock_env();

    let res = execute(deps.as_mut(), env.clone(), mock_info("alice", &[]), set_intent_msg(50, "alice.one")).unwrap();
    assert_eq!(res.messages.len(), 1);
    assert_eq!(
        token_msg(&res.messages[0].msg),
        Cw20ExecuteMsg::TransferFrom {
            owner: "alice".to_string(),
            recipient: env.contract.address.to_string(),
            amount: Uint128::new(50),
        }
    );

    // lowering the stake refunds the difference
    let res = execute(deps.as_mut(), env.clone(), mock_info("alice", &[]), set_intent_msg(30, "alice.two")).unwrap();
    assert_eq!(res.messages.len(), 1);
    assert_eq!(
        token_msg(&res.messages[0].msg),
        Cw20ExecuteMsg::Transfer {
            recipient: "alice".to_string(),
            amount: Uint128::new(20),
        }
    );

    // raising it pulls only the difference
    let res = execute(deps.as_mut(), env.clone(), mock_info("alice", &[]), set_intent_msg(45, "alice.three")).unwrap();
    assert_eq!(
        token_msg(&res.messages[0].msg),
        Cw20ExecuteMsg::TransferFrom {
            owner: "alice".to_string(),
            recipient: env.contract.address.to_string(),
            amount: Uint128::new(15),
        }
    );

    // same amount, new locator: no token movement
    let res = execute(deps.as_mut(), env.clone(), mock_info("alice", &[]), set_intent_msg(45, "alice.four")).unwrap();
    assert!(res.messages.is_empty());

    let staked: Uint128 = from_binary(
        &query(
            deps.as_ref(),
            env.clone(),
            QueryMsg::GetStakedAmount {
                user: Addr::unchecked("alice"),
                signer_asset: signer_asset(),
                sender_asset: sender_asset(),
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(staked, Uint128::new(45));

    let entry: Option<LocatorEntry> = from_binary(
        &query(
            deps.as_ref(),
            env,
            QueryMsg::GetLocator {
                user: Addr::unchecked("alice"),
                signer_asset: signer_asset(),
                sender_asset: sender_asset(),
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(entry.unwrap().locator, "alice.four");
}

#[test]
fn zero_amount_intent_is_recorded_without_transfer() {
    let mut deps = setup();

    let res = execute(deps.as_mut(), mock_env(), mock_info("bob", &[]), set_intent_msg(0, "bob.free")).unwrap();
    assert!(res.messages.is_empty());

    let locators: Vec<LocatorEntry> = from_binary(
        &query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::GetLocators {
                signer_asset: signer_asset(),
                sender_asset: sender_asset(),
                start_after: None,
                limit: None,
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(
        locators,
        vec![LocatorEntry {
            account: Addr::unchecked("bob"),
            score: Uint128::zero(),
            locator: "bob.free".to_string(),
        }]
    );

    // nothing to refund on unset
    let res = execute(
        deps.as_mut(),
        mock_env(),
        mock_info("bob", &[]),
        ExecuteMsg::UnsetIntent {
            signer_asset: signer_asset(),
            sender_asset: sender_asset(),
        },
    )
    .unwrap();
    assert!(res.messages.is_empty());
}

#[test]
fn set_intent_rejections() {
    let mut deps = setup();

    let err = execute(
        deps.as_mut(),
        mock_env(),
        mock_info("alice", &[]),
        ExecuteMsg::SetIntent {
            signer_asset: sender_asset(),
            sender_asset: signer_asset(),
            amount: Uint128::new(10),
            locator: "alice".to_string(),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        ContractError::IndexDoesNotExist {
            signer_asset: "uxprt".to_string(),
            sender_asset: "uatom".to_string(),
        }
    );

    let err = execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), set_intent_msg(10, "")).unwrap_err();
    assert_eq!(err, ContractError::EmptyLocator);

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(OWNER, &[]),
        ExecuteMsg::AddToBlacklist {
            asset: sender_asset(),
        },
    )
    .unwrap();
    let err = execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), set_intent_msg(10, "alice")).unwrap_err();
    assert_eq!(
        err,
        ContractError::PairIsBlacklisted {
            signer_asset: "uatom".to_string(),
            sender_asset: "uxprt".to_string(),
        }
    );

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(OWNER, &[]),
        ExecuteMsg::SetPausedStatus { new_status: true },
    )
    .unwrap();
    let err = execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), set_intent_msg(10, "alice")).unwrap_err();
    assert_eq!(err, ContractError::ContractPaused);
}

#[test]
fn blacklist_toggles_are_owner_only_and_idempotent() {
    let mut deps = setup();
    let add = ExecuteMsg::AddToBlacklist {
        asset: signer_asset(),
    };

    let err = execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), add.clone()).unwrap_err();
    assert_eq!(err, ContractError::Unauthorized);

    let res = execute(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), add.clone()).unwrap();
    assert_eq!(res.events.len(), 1);
    let res = execute(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), add).unwrap();
    assert!(res.events.is_empty());

    let blacklisted: bool = from_binary(
        &query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::IsBlacklisted {
                asset: signer_asset(),
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert!(blacklisted);

    let remove = ExecuteMsg::RemoveFromBlacklist {
        asset: signer_asset(),
    };
    let res = execute(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), remove.clone()).unwrap();
    assert_eq!(res.events.len(), 1);
    let res = execute(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), remove).unwrap();
    assert!(res.events.is_empty());
}

#[test]
fn unset_intent_ignores_blacklist_and_respects_pause() {
    let mut deps = setup();
    execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), set_intent_msg(70, "alice")).unwrap();

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(OWNER, &[]),
        ExecuteMsg::AddToBlacklist {
            asset: signer_asset(),
        },
    )
    .unwrap();

    let unset = ExecuteMsg::UnsetIntent {
        signer_asset: signer_asset(),
        sender_asset: sender_asset(),
    };
    let res = execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), unset.clone()).unwrap();
    assert_eq!(
        token_msg(&res.messages[0].msg),
        Cw20ExecuteMsg::Transfer {
            recipient: "alice".to_string(),
            amount: Uint128::new(70),
        }
    );

    let err = execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), unset.clone()).unwrap_err();
    assert_eq!(
        err,
        ContractError::EntryDoesNotExist {
            account: "alice".to_string()
        }
    );

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(OWNER, &[]),
        ExecuteMsg::SetPausedStatus { new_status: true },
    )
    .unwrap();
    let err = execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), unset).unwrap_err();
    assert_eq!(err, ContractError::ContractPaused);
}

#[test]
fn owner_drains_stake_while_paused() {
    let mut deps = setup();
    execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), set_intent_msg(120, "alice")).unwrap();

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(OWNER, &[]),
        ExecuteMsg::SetPausedStatus { new_status: true },
    )
    .unwrap();

    let drain = ExecuteMsg::UnsetIntentForUser {
        user: Addr::unchecked("alice"),
        signer_asset: signer_asset(),
        sender_asset: sender_asset(),
    };

    let err = execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), drain.clone()).unwrap_err();
    assert_eq!(err, ContractError::Unauthorized);

    let res = execute(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), drain).unwrap();
    assert_eq!(
        token_msg(&res.messages[0].msg),
        Cw20ExecuteMsg::Transfer {
            recipient: "alice".to_string(),
            amount: Uint128::new(120),
        }
    );
}

#[test]
fn get_locators_is_empty_instead_of_failing() {
    let mut deps = setup();
    execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), set_intent_msg(10, "alice")).unwrap();

    let get_locators = |signer_asset: AssetInfo, sender_asset: AssetInfo| QueryMsg::GetLocators {
        signer_asset,
        sender_asset,
        start_after: None,
        limit: Some(10),
    };

    let locators: Vec<LocatorEntry> = from_binary(
        &query(deps.as_ref(), mock_env(), get_locators(signer_asset(), sender_asset())).unwrap(),
    )
    .unwrap();
    assert_eq!(locators.len(), 1);

    // missing index
    let locators: Vec<LocatorEntry> = from_binary(
        &query(deps.as_ref(), mock_env(), get_locators(sender_asset(), signer_asset())).unwrap(),
    )
    .unwrap();
    assert!(locators.is_empty());

    // paused
    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(OWNER, &[]),
        ExecuteMsg::SetPausedStatus { new_status: true },
    )
    .unwrap();
    let locators: Vec<LocatorEntry> = from_binary(
        &query(deps.as_ref(), mock_env(), get_locators(signer_asset(), sender_asset())).unwrap(),
    )
    .unwrap();
    assert!(locators.is_empty());

    // blacklisted, whatever the pause state
    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(OWNER, &[]),
        ExecuteMsg::AddToBlacklist {
            asset: sender_asset(),
        },
    )
    .unwrap();
    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(OWNER, &[]),
        ExecuteMsg::SetPausedStatus { new_status: false },
    )
    .unwrap();
    let locators: Vec<LocatorEntry> = from_binary(
        &query(deps.as_ref(), mock_env(), get_locators(signer_asset(), sender_asset())).unwrap(),
    )
    .unwrap();
    assert!(locators.is_empty());

    // the staked amount is still readable
    let staked: Uint128 = from_binary(
        &query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::GetStakedAmount {
                user: Addr::unchecked("alice"),
                signer_asset: signer_asset(),
                sender_asset: sender_asset(),
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(staked, Uint128::new(10));
}

#[test]
fn get_staked_amount_requires_index() {
    let deps = setup();

    let err = query(
        deps.as_ref(),
        mock_env(),
        QueryMsg::GetStakedAmount {
            user: Addr::unchecked("alice"),
            signer_asset: sender_asset(),
            sender_asset: signer_asset(),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        ContractError::IndexDoesNotExist {
            signer_asset: "uxprt".to_string(),
            sender_asset: "uatom".to_string(),
        }
    );

    let staked: Uint128 = from_binary(
        &query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::GetStakedAmount {
                user: Addr::unchecked("nobody"),
                signer_asset: signer_asset(),
                sender_asset: sender_asset(),
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(staked, Uint128::zero());
}

#[test]
fn whitelist_can_be_set_and_cleared_by_owner() {
    let mut deps = setup();

    let err = execute(
        deps.as_mut(),
        mock_env(),
        mock_info("alice", &[]),
        ExecuteMsg::SetLocatorWhitelist {
            new_whitelist: Some(Addr::unchecked("whitelist")),
        },
    )
    .unwrap_err();
    assert_eq!(err, ContractError::Unauthorized);

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(OWNER, &[]),
        ExecuteMsg::SetLocatorWhitelist {
            new_whitelist: Some(Addr::unchecked("whitelist")),
        },
    )
    .unwrap();
    assert_eq!(
        CONFIG.load(deps.as_ref().storage).unwrap().locator_whitelist,
        Some(Addr::unchecked("whitelist"))
    );

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(OWNER, &[]),
        ExecuteMsg::SetLocatorWhitelist { new_whitelist: None },
    )
    .unwrap();
    assert_eq!(CONFIG.load(deps.as_ref().storage).unwrap().locator_whitelist, None);
}

#[test]
fn blacklist_keeps_tokens_and_denoms_apart() {
    let mut deps = setup();
    let denom = AssetInfo::native_token("ucoin");
    let token = AssetInfo::token(Addr::unchecked("ucoin"));

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(OWNER, &[]),
        ExecuteMsg::AddToBlacklist {
            asset: denom.clone(),
        },
    )
    .unwrap();

    let is_blacklisted = |deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>, asset: AssetInfo| -> bool {
        from_binary(&query(deps.as_ref(), mock_env(), QueryMsg::IsBlacklisted { asset }).unwrap())
            .unwrap()
    };
    assert!(is_blacklisted(&deps, denom.clone()));
    assert!(!is_blacklisted(&deps, token.clone()));

    // the cw20 token with the same text gets its own index
    let res = execute(
        deps.as_mut(),
        mock_env(),
        mock_info("anyone", &[]),
        ExecuteMsg::CreateIndex {
            signer_asset: token.clone(),
            sender_asset: sender_asset(),
        },
    )
    .unwrap();
    let token_index: IndexInfo = from_binary(&res.data.unwrap()).unwrap();

    let res = execute(
        deps.as_mut(),
        mock_env(),
        mock_info("anyone", &[]),
        ExecuteMsg::CreateIndex {
            signer_asset: denom,
            sender_asset: sender_asset(),
        },
    )
    .unwrap();
    let denom_index: IndexInfo = from_binary(&res.data.unwrap()).unwrap();
    assert_ne!(token_index.id, denom_index.id);

    let res = execute(
        deps.as_mut(),
        mock_env(),
        mock_info("alice", &[]),
        ExecuteMsg::SetIntent {
            signer_asset: token,
            sender_asset: sender_asset(),
            amount: Uint128::new(5),
            locator: "alice".to_string(),
        },
    )
    .unwrap();
    assert_eq!(res.messages.len(), 1);
}
