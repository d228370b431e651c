//! Coin / amount utilities.
//!
//! Two input shapes arrive at the parser boundary and both normalize to
//! [`Coin`] / [`Coins`]: the structured `{denom, amount}` objects carried in
//! a message body, and the comma-joined `"<digits><denom>"` strings carried
//! in event-log attributes. Amounts are parsed as arbitrary-precision
//! integers (`num_bigint::BigUint`) because on-chain amounts for some
//! denominations exceed `u128`.

use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoinError {
    #[error("coins string is empty")]
    EmptyCoins,

    #[error("invalid coin string `{0}`")]
    InvalidFormat(String),

    #[error("cannot add coins with mismatched denoms: `{0}` and `{1}`")]
    DenomMismatch(String, String),
}

/// A single typed coin: a non-negative amount of one denomination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde(with = "amount_as_string")]
    pub amount: BigUint,
}

impl Coin {
    pub fn zero(denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: BigUint::from(0u32),
        }
    }

    pub fn new(amount: BigUint, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount == BigUint::from(0u32)
    }

    /// Adds `other` to `self`. Both coins must share the same denom.
    pub fn add(&self, other: &Coin) -> Result<Coin, CoinError> {
        if self.denom != other.denom {
            return Err(CoinError::DenomMismatch(
                self.denom.clone(),
                other.denom.clone(),
            ));
        }
        Ok(Coin {
            denom: self.denom.clone(),
            amount: &self.amount + &other.amount,
        })
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// An ordered, denom-sorted, denom-deduplicated list of [`Coin`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(pub Vec<Coin>);

impl Coins {
    pub fn empty() -> Self {
        Coins(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Denom-wise addition: matching denoms are summed, new denoms are
    /// appended, and the result is re-sorted by denom.
    pub fn add(&self, other: &Coins) -> Coins {
        let mut merged = self.0.clone();
        for coin in &other.0 {
            if let Some(existing) = merged.iter_mut().find(|c| c.denom == coin.denom) {
                existing.amount += &coin.amount;
            } else {
                merged.push(coin.clone());
            }
        }
        merged.sort_by(|a, b| a.denom.cmp(&b.denom));
        Coins(merged)
    }
}

/// Parses one normalized coin string, e.g. `"100basecro"`.
pub fn parse_coin_normalized(raw: &str) -> Result<Coin, CoinError> {
    let coins = parse_coins_normalized(raw)?;
    match coins.0.len() {
        1 => Ok(coins.0.into_iter().next().unwrap()),
        _ => Err(CoinError::InvalidFormat(raw.to_string())),
    }
}

/// Parses a comma-joined list of normalized coin strings, e.g.
/// `"100basecro,50uatom"`, into a denom-sorted [`Coins`].
///
/// Rules: an empty string is `CoinError::EmptyCoins`. Each entry's amount is
/// its leading run of ASCII digits; the denom is everything from the first
/// non-digit character through the next comma (or end of string). Entries
/// sharing a denom are summed.
pub fn parse_coins_normalized(raw: &str) -> Result<Coins, CoinError> {
    if raw.is_empty() {
        return Err(CoinError::EmptyCoins);
    }

    let mut coins: Vec<Coin> = Vec::new();
    for part in raw.split(',') {
        let coin = parse_single_coin(part)?;
        if let Some(existing) = coins.iter_mut().find(|c| c.denom == coin.denom) {
            existing.amount += &coin.amount;
        } else {
            coins.push(coin);
        }
    }
    coins.sort_by(|a, b| a.denom.cmp(&b.denom));
    Ok(Coins(coins))
}

fn parse_single_coin(part: &str) -> Result<Coin, CoinError> {
    let digit_end = part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len());

    let (amount_str, denom) = part.split_at(digit_end);
    if amount_str.is_empty() || denom.is_empty() {
        return Err(CoinError::InvalidFormat(part.to_string()));
    }

    let amount = amount_str
        .parse::<BigUint>()
        .map_err(|_| CoinError::InvalidFormat(part.to_string()))?;

    Ok(Coin {
        denom: denom.to_string(),
        amount,
    })
}

/// Parses the structured `{denom, amount}` single-coin shape from a message
/// body (amounts here are plain decimal strings with no denom suffix).
pub fn coin_from_amount_value(value: &serde_json::Value) -> Result<Coin, CoinError> {
    let denom = value
        .get("denom")
        .and_then(|d| d.as_str())
        .ok_or_else(|| CoinError::InvalidFormat(value.to_string()))?;
    let amount = value
        .get("amount")
        .and_then(|a| a.as_str())
        .ok_or_else(|| CoinError::InvalidFormat(value.to_string()))?;
    let amount = amount
        .parse::<BigUint>()
        .map_err(|_| CoinError::InvalidFormat(amount.to_string()))?;
    Ok(Coin::new(amount, denom))
}

/// Parses the structured `[{denom, amount}, ...]` multi-coin shape from a
/// message body.
pub fn coins_from_amount_values(values: &[serde_json::Value]) -> Result<Coins, CoinError> {
    let mut coins = values
        .iter()
        .map(coin_from_amount_value)
        .collect::<Result<Vec<_>, _>>()?;
    coins.sort_by(|a, b| a.denom.cmp(&b.denom));
    Ok(Coins(coins))
}

mod amount_as_string {
    use num_bigint::BigUint;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(amount: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&amount.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<BigUint>().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_coin() {
        let coin = parse_coin_normalized("1234basecro").unwrap();
        assert_eq!(coin.denom, "basecro");
        assert_eq!(coin.amount, BigUint::from(1234u32));
    }

    #[test]
    fn parses_comma_joined_coins_sorted_by_denom() {
        let coins = parse_coins_normalized("100basecro,50uatom").unwrap();
        assert_eq!(coins.0[0].denom, "basecro");
        assert_eq!(coins.0[1].denom, "uatom");
    }

    #[test]
    fn sums_duplicate_denoms() {
        let coins = parse_coins_normalized("100basecro,50basecro").unwrap();
        assert_eq!(coins.0.len(), 1);
        assert_eq!(coins.0[0].amount, BigUint::from(150u32));
    }

    #[test]
    fn rejects_empty_string() {
        assert_eq!(parse_coins_normalized(""), Err(CoinError::EmptyCoins));
    }

    #[test]
    fn rejects_missing_denom() {
        assert!(parse_coins_normalized("100").is_err());
    }

    #[test]
    fn coin_add_requires_matching_denom() {
        let a = Coin::new(BigUint::from(1u32), "basecro");
        let b = Coin::new(BigUint::from(1u32), "uatom");
        assert!(matches!(a.add(&b), Err(CoinError::DenomMismatch(_, _))));
    }

    #[test]
    fn coins_add_merges_and_sorts() {
        let a = parse_coins_normalized("100basecro").unwrap();
        let b = parse_coins_normalized("50uatom,25basecro").unwrap();
        let sum = a.add(&b);
        assert_eq!(sum.0[0].denom, "basecro");
        assert_eq!(sum.0[0].amount, BigUint::from(125u32));
        assert_eq!(sum.0[1].denom, "uatom");
    }

    #[test]
    fn structured_amount_array_round_trips_with_normalized_string() {
        let values = vec![serde_json::json!({"denom": "basecro", "amount": "10000"})];
        let coins = coins_from_amount_values(&values).unwrap();
        assert_eq!(coins, parse_coins_normalized("10000basecro").unwrap());
    }
}
