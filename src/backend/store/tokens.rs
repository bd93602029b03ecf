/**
 * Session Token Table
 *
 * Maps opaque session tokens to the owner they were issued for and the
 * instant they stop being valid. The table itself is not synchronized; it
 * lives inside [`Store`](super::Store), which serializes every access.
 *
 * # Expiry
 *
 * A token is accepted while `now <= expires_at`. Expired entries are removed
 * the first time they fail validation, and [`TokenStore::purge_expired`]
 * removes the rest in bulk.
 */

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Identity a session token resolves to
pub type OwnerId = i64;

/// Stored state for one session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEntry {
    pub owner_id: OwnerId,
    pub expires_at: DateTime<Utc>,
}

/// A token handed out at login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub value: String,
    pub owner_id: OwnerId,
    pub expires_at: DateTime<Utc>,
}

/// Why a token was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenRejection {
    #[error("unknown session token")]
    Unknown,
    #[error("session token expired")]
    Expired,
}

/// Generate a fresh session token value
///
/// UUIDv4 bits come from the operating system's CSPRNG, so tokens cannot be
/// guessed from the owner id or the login time.
pub fn generate_token_value() -> String {
    Uuid::new_v4().simple().to_string()
}

#[derive(Debug, Default)]
pub struct TokenStore {
    entries: HashMap<String, SessionEntry>,
    last_owner_id: OwnerId,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token for `owner_id` valid for `ttl` from `now`
    ///
    /// A negative `ttl` yields a token that is already expired.
    pub fn issue(&mut self, owner_id: OwnerId, ttl: TimeDelta, now: DateTime<Utc>) -> IssuedToken {
        let expires_at = now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        let value = generate_token_value();

        self.entries.insert(
            value.clone(),
            SessionEntry {
                owner_id,
                expires_at,
            },
        );

        IssuedToken {
            value,
            owner_id,
            expires_at,
        }
    }

    /// Resolve a token to its owner, evicting it if it has expired
    pub fn validate(&mut self, token: &str, now: DateTime<Utc>) -> Result<OwnerId, TokenRejection> {
        let entry = self
            .entries
            .get(token)
            .copied()
            .ok_or(TokenRejection::Unknown)?;

        if now > entry.expires_at {
            self.entries.remove(token);
            return Err(TokenRejection::Expired);
        }

        Ok(entry.owner_id)
    }

    /// Remove every entry that has expired as of `now`
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| now <= entry.expires_at);
        before - self.entries.len()
    }

    /// Synthesize an owner id for a login
    ///
    /// Ids are derived from the clock in nanoseconds but never repeat, even
    /// when two logins land on the same tick.
    pub fn allocate_owner_id(&mut self, now: DateTime<Utc>) -> OwnerId {
        let from_clock = now.timestamp_nanos_opt().unwrap_or(OwnerId::MAX);
        let id = from_clock.max(self.last_owner_id.saturating_add(1));
        self.last_owner_id = id;
        id
    }

    pub fn get(&self, token: &str) -> Option<&SessionEntry> {
        self.entries.get(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
