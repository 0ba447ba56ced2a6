//! The `userProfiles` table and the user directory.
//!
//! Profiles are unique per user identity; the insert is the enforcement
//! point for the at-most-one-profile invariant. The directory holds the
//! display rows the identity collaborator owns, keyed by user id, and only
//! exists to resolve display names during projection.

use std::collections::HashMap;

use vigil_types::{ProfileId, TimestampMs, UserAccount, UserId, UserProfile};

use crate::document::Doc;
use crate::errors::StoreError;

/// Profile rows and the unique per-user index.
#[derive(Debug, Default)]
pub struct ProfileTable {
    rows: Vec<Doc<ProfileId, UserProfile>>,
    by_user: HashMap<UserId, usize>,
}

impl ProfileTable {
    /// New empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Insert a profile; fails if one already exists for the user.
    pub fn insert(&mut self, doc: Doc<ProfileId, UserProfile>) -> Result<(), StoreError> {
        if self.by_user.contains_key(&doc.record.user_id) {
            return Err(StoreError::ProfileExists(doc.record.user_id));
        }
        let slot = self.rows.len();
        self.by_user.insert(doc.record.user_id, slot);
        self.rows.push(doc);
        Ok(())
    }

    /// Profile for a user identity.
    pub fn get_by_user(&self, user_id: &UserId) -> Option<&Doc<ProfileId, UserProfile>> {
        self.by_user.get(user_id).map(|&slot| &self.rows[slot])
    }

    /// Stamp the user's last login. No-op when no profile exists.
    pub fn patch_last_login(&mut self, user_id: &UserId, timestamp: TimestampMs) {
        if let Some(&slot) = self.by_user.get(user_id) {
            self.rows[slot].record.last_login = Some(timestamp);
        }
    }

    /// All profiles, newest first.
    pub fn scan_all(&self) -> Vec<&Doc<ProfileId, UserProfile>> {
        self.rows.iter().rev().collect()
    }
}

/// Display rows for user identities, owned by the identity collaborator.
#[derive(Debug, Default)]
pub struct UserDirectory {
    accounts: HashMap<UserId, UserAccount>,
}

impl UserDirectory {
    /// New empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an account row.
    pub fn upsert(&mut self, user_id: UserId, account: UserAccount) {
        self.accounts.insert(user_id, account);
    }

    /// Whether an account row exists for this identity.
    pub fn contains(&self, user_id: &UserId) -> bool {
        self.accounts.contains_key(user_id)
    }

    /// Account row for this identity.
    pub fn get(&self, user_id: &UserId) -> Option<&UserAccount> {
        self.accounts.get(user_id)
    }

    /// Resolved display name: `name`, falling back to `email`.
    pub fn display_name(&self, user_id: &UserId) -> Option<String> {
        self.accounts.get(user_id).and_then(UserAccount::display_name)
    }
}
