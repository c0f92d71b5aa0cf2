use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg, StatusResponse, TokenBalanceResponse,
};
use crate::state::{
    Config, ReleaseStage, ReleaseState, CONFIG, MAX_RELEASE_DELAY, MIN_RELEASE_DELAY, STATE,
};

const CONTRACT_NAME: &str = "crates.io:burnable-timelock";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token = deps.api.addr_validate(&msg.token)?;
    let beneficiary = deps.api.addr_validate(&msg.beneficiary)?;

    if msg.release_time <= env.block.time.seconds() {
        return Err(ContractError::InvalidReleaseTime {});
    }

    if msg.release_delay < MIN_RELEASE_DELAY || msg.release_delay > MAX_RELEASE_DELAY {
        return Err(ContractError::InvalidReleaseDelay {});
    }

    // request_time = release_time - release_delay must not underflow
    if msg.release_delay > msg.release_time {
        return Err(ContractError::InvalidReleaseDelay {});
    }

    let config = Config {
        owner: info.sender.clone(),
        token: token.clone(),
        release_time: msg.release_time,
        release_delay: msg.release_delay,
    };
    CONFIG.save(deps.storage, &config)?;

    let state = ReleaseState {
        beneficiary: beneficiary.clone(),
        stage: ReleaseStage::Locked,
        requested_at: None,
        total_burned: Uint128::zero(),
        paused: false,
    };
    STATE.save(deps.storage, &state)?;

    // Funding is a separate, external cw20 transfer into this contract's
    // address; no tokens move at instantiation.
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("token", token)
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("release_time", msg.release_time.to_string())
        .add_attribute("release_delay", msg.release_delay.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::ChangeBeneficiary { new_beneficiary } => {
            execute_change_beneficiary(deps, info, new_beneficiary)
        }
        ExecuteMsg::Burn { amount } => execute_burn(deps, env, info, amount),
        ExecuteMsg::Release {} => execute_release(deps, env, info),
    }
}

pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let mut state = STATE.load(deps.storage)?;
    if state.paused {
        return Err(ContractError::AlreadyPaused {});
    }

    state.paused = true;
    STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("method", "pause")
        .add_attribute("account", info.sender))
}

pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let mut state = STATE.load(deps.storage)?;
    if !state.paused {
        return Err(ContractError::NotPaused {});
    }

    state.paused = false;
    STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("method", "unpause")
        .add_attribute("account", info.sender))
}

pub fn execute_change_beneficiary(
    deps: DepsMut,
    info: MessageInfo,
    new_beneficiary: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let new_addr = deps.api.addr_validate(&new_beneficiary)?;

    let mut state = STATE.load(deps.storage)?;
    // Pausing is the designated emergency channel for redirecting the
    // beneficiary; outside of it the beneficiary is fixed.
    if !state.paused {
        return Err(ContractError::NotPaused {});
    }

    let previous = state.beneficiary.clone();
    state.beneficiary = new_addr.clone();
    STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("method", "change_beneficiary")
        .add_attribute("previous", previous)
        .add_attribute("new", new_addr))
}

pub fn execute_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let mut state = STATE.load(deps.storage)?;
    if state.paused {
        return Err(ContractError::ContractPaused {});
    }

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }

    let balance = custodied_balance(deps.as_ref(), &env, &config)?;
    if amount > balance {
        return Err(ContractError::InsufficientBalance {});
    }

    state.total_burned += amount;
    STATE.save(deps.storage, &state)?;

    // cw20 burn destroys supply; this is not a transfer to anyone.
    let burn_msg = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Burn { amount })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(burn_msg)
        .add_attribute("method", "burn")
        .add_attribute("amount", amount)
        .add_attribute("total_burned", state.total_burned))
}

pub fn execute_release(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let mut state = STATE.load(deps.storage)?;
    if state.paused {
        return Err(ContractError::ContractPaused {});
    }

    let now = env.block.time.seconds();

    match state.stage {
        ReleaseStage::Locked => {
            if now < config.request_time() {
                return Err(ContractError::TooEarly {});
            }

            state.stage = ReleaseStage::Requested;
            state.requested_at = Some(now);
            STATE.save(deps.storage, &state)?;

            // Announcement only; no tokens move until the cooling-off
            // window has passed.
            Ok(Response::new()
                .add_attribute("method", "request_release")
                .add_attribute("account", info.sender))
        }
        ReleaseStage::Requested => {
            let requested_at = state
                .requested_at
                .ok_or_else(|| StdError::generic_err("request timestamp missing"))?;

            if now < requested_at + config.release_delay {
                return Err(ContractError::TooEarly {});
            }

            // Whatever remains after burns at execution time, not a
            // snapshot taken at request time.
            let balance = custodied_balance(deps.as_ref(), &env, &config)?;
            if balance.is_zero() {
                return Err(ContractError::InsufficientBalance {});
            }

            state.stage = ReleaseStage::Released;
            STATE.save(deps.storage, &state)?;

            let transfer_msg = WasmMsg::Execute {
                contract_addr: config.token.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: state.beneficiary.to_string(),
                    amount: balance,
                })?,
                funds: vec![],
            };

            Ok(Response::new()
                .add_message(transfer_msg)
                .add_attribute("method", "release")
                .add_attribute("beneficiary", state.beneficiary)
                .add_attribute("amount", balance))
        }
        ReleaseStage::Released => Err(ContractError::AlreadyReleased {}),
    }
}

fn ensure_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

fn custodied_balance(deps: Deps, env: &Env, config: &Config) -> StdResult<Uint128> {
    let resp: BalanceResponse = deps.querier.query_wasm_smart(
        config.token.clone(),
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    Ok(resp.balance)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Status {} => to_json_binary(&query_status(deps)?),
        QueryMsg::TokenBalance {} => to_json_binary(&query_token_balance(deps, env)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        request_time: config.request_time(),
        owner: config.owner,
        token: config.token,
        release_time: config.release_time,
        release_delay: config.release_delay,
    })
}

fn query_status(deps: Deps) -> StdResult<StatusResponse> {
    let state = STATE.load(deps.storage)?;
    Ok(StatusResponse {
        release_requested: !matches!(state.stage, ReleaseStage::Locked),
        beneficiary: state.beneficiary,
        stage: state.stage,
        requested_at: state.requested_at,
        total_burned: state.total_burned,
        paused: state.paused,
    })
}

fn query_token_balance(deps: Deps, env: Env) -> StdResult<TokenBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance = custodied_balance(deps, &env, &config)?;
    Ok(TokenBalanceResponse { balance })
}
