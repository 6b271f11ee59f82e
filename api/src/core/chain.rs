//! Simulated Linera microchain metadata.
//!
//! Nothing here talks to a chain: the chain id is a constant and the block
//! height is a random draw. Both are opaque fields attached to each entry.

use std::{fmt, str::FromStr};

use rand::Rng;

/// Chain id stamped on every entry.
pub const SIMULATED_CHAIN_ID: &str = "e476187f6dd84755966526189874552";

/// Exclusive upper bound for simulated block heights.
pub const BLOCK_HEIGHT_LIMIT: i64 = 1_000_000;

/// Prefix of the display form `linera:<chain_id>:<id>` shown by the client.
const DISPLAY_PREFIX: &str = "linera";

/// Draws a block height uniformly from `[0, BLOCK_HEIGHT_LIMIT)`.
pub fn draw_block_height() -> i64 {
    rand::thread_rng().gen_range(0..BLOCK_HEIGHT_LIMIT)
}

/// Entry reference accepted by `GET /verify/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyId {
    /// Bare numeric id, e.g. `42`.
    Plain(i64),
    /// Client display form, e.g. `linera:e476…:42`.
    Display { chain_id: String, id: i64 },
    /// Well-formed integer outside the `i64` range; names no entry.
    OutOfRange,
}

impl VerifyId {
    /// Entry id to look up on `chain_id`, or `None` when the reference
    /// points at another chain.
    pub fn entry_id_on(&self, chain_id: &str) -> Option<i64> {
        match self {
            VerifyId::Plain(id) => Some(*id),
            VerifyId::Display { chain_id: c, id } if c == chain_id => Some(*id),
            VerifyId::Display { .. } | VerifyId::OutOfRange => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidVerifyId(pub String);

impl fmt::Display for InvalidVerifyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid entry id `{}`: expected an integer or linera:<chain_id>:<id>",
            self.0
        )
    }
}

impl std::error::Error for InvalidVerifyId {}

impl FromStr for VerifyId {
    type Err = InvalidVerifyId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let s = raw.trim();
        let invalid = || InvalidVerifyId(raw.to_string());

        if let Ok(id) = s.parse::<i64>() {
            return Ok(VerifyId::Plain(id));
        }
        if is_integer_literal(s) {
            return Ok(VerifyId::OutOfRange);
        }

        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(DISPLAY_PREFIX), Some(chain_id), Some(id), None) if !chain_id.is_empty() => {
                let id = id.parse::<i64>().map_err(|_| invalid())?;
                Ok(VerifyId::Display {
                    chain_id: chain_id.to_string(),
                    id,
                })
            }
            _ => Err(invalid()),
        }
    }
}

/// Optional leading `-` followed by at least one ASCII digit.
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_heights_stay_in_range() {
        for _ in 0..10_000 {
            let h = draw_block_height();
            assert!((0..BLOCK_HEIGHT_LIMIT).contains(&h), "out of range: {h}");
        }
    }

    #[test]
    fn parses_plain_ids() {
        assert_eq!("42".parse::<VerifyId>().unwrap(), VerifyId::Plain(42));
        assert_eq!("-3".parse::<VerifyId>().unwrap(), VerifyId::Plain(-3));
    }

    #[test]
    fn overflowing_integers_resolve_to_nothing() {
        for raw in ["99999999999999999999", "-99999999999999999999"] {
            let id: VerifyId = raw.parse().unwrap();
            assert_eq!(id, VerifyId::OutOfRange);
            assert_eq!(id.entry_id_on(SIMULATED_CHAIN_ID), None);
        }
    }

    #[test]
    fn parses_display_ids() {
        let id: VerifyId = format!("linera:{SIMULATED_CHAIN_ID}:7").parse().unwrap();
        assert_eq!(id.entry_id_on(SIMULATED_CHAIN_ID), Some(7));
    }

    #[test]
    fn display_id_for_other_chain_resolves_to_nothing() {
        let id: VerifyId = "linera:deadbeef:7".parse().unwrap();
        assert_eq!(id.entry_id_on(SIMULATED_CHAIN_ID), None);
    }

    #[test]
    fn rejects_garbage() {
        for raw in ["abc", "", "-", "12a", "linera:", "linera::1", "linera:c:x", "linera:c:1:2", "eth:c:1"] {
            assert!(raw.parse::<VerifyId>().is_err(), "accepted {raw:?}");
        }
    }
}
