use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, StdError, StdResult};
use std::fmt;

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x    {{AssetInfo}} struct Type    x----------------x----------------
// ----------------x----------------x----------------x----------------x----------------x----------------

/// This enum describes the asset identifiers an index can be created for.
#[cw_serde]
#[derive(Hash, Eq)]
pub enum AssetInfo {
    /// Non-native Token
    Token { contract_addr: Addr },
    /// Native token
    NativeToken { denom: String },
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssetInfo::NativeToken { denom } => write!(f, "{}", denom),
            AssetInfo::Token { contract_addr } => write!(f, "{}", contract_addr),
        }
    }
}

impl AssetInfo {
    pub fn native_token(denom: impl Into<String>) -> Self {
        AssetInfo::NativeToken {
            denom: denom.into(),
        }
    }

    pub fn token(contract_addr: Addr) -> Self {
        AssetInfo::Token { contract_addr }
    }

    /// Canonical storage representation of the asset, prefixed by its kind so a cw20 address
    /// and a native denom with the same text never share a key. Contract addresses are
    /// lowercased so that the same token can't be indexed (or blacklisted) twice under
    /// different casings.
    pub fn as_string(&self) -> String {
        match self {
            AssetInfo::NativeToken { denom } => format!("native:{}", denom),
            AssetInfo::Token { contract_addr } => {
                format!("cw20:{}", contract_addr.as_str().to_lowercase())
            }
        }
    }

    /// Returns [`Ok`] if the token of type [`AssetInfo`] is in lowercase and valid. Otherwise returns [`Err`].
    pub fn check(&self, api: &dyn Api) -> StdResult<()> {
        match self {
            AssetInfo::Token { contract_addr } => {
                api.addr_validate(contract_addr.as_str())?;
            }
            AssetInfo::NativeToken { denom } => {
                if denom.is_empty() {
                    return Err(StdError::generic_err("Native token denom cannot be empty"));
                }
                if !denom.starts_with("ibc/") && denom != &denom.to_lowercase() {
                    return Err(StdError::generic_err(format!(
                        "Non-IBC token denom {} should be lowercase",
                        denom
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Storage key of the index for an ordered (signer asset, sender asset) pair.
/// The order is significant: (A, B) and (B, A) are different indexes.
pub fn pair_key(signer_asset: &AssetInfo, sender_asset: &AssetInfo) -> (String, String) {
    (signer_asset.as_string(), sender_asset.as_string())
}
