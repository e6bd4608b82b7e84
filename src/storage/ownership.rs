// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ownership enforcement for storage reads.
//!
//! Journal entries are private to their author. Reads go through these
//! checks, and a foreign entry is reported as not found rather than
//! forbidden so that entry IDs of other users cannot be probed.

use crate::auth::AuthenticatedUser;

use super::{StorageError, StorageResult};

/// Trait for resources that have an owner.
pub trait OwnedResource {
    /// Get the owner's user ID.
    fn owner_user_id(&self) -> &str;

    /// Identifier used in error messages.
    fn resource_id(&self) -> &str;
}

/// Trait for enforcing ownership on storage operations.
pub trait OwnershipEnforcer {
    /// Verify that the user owns this resource.
    ///
    /// # Errors
    /// Returns `StorageError::NotFound` if the user doesn't own the resource.
    fn verify_ownership(&self, user: &AuthenticatedUser) -> StorageResult<()>;
}

impl<T: OwnedResource> OwnershipEnforcer for T {
    fn verify_ownership(&self, user: &AuthenticatedUser) -> StorageResult<()> {
        if self.owner_user_id() == user.user_id {
            Ok(())
        } else {
            Err(StorageError::NotFound(self.resource_id().to_string()))
        }
    }
}

/// Ownership check chained onto a storage read.
pub trait OwnershipCheck<T> {
    /// Verify ownership and return the resource if authorized.
    fn verify_owner(self, user: &AuthenticatedUser) -> StorageResult<T>;
}

impl<T: OwnedResource> OwnershipCheck<T> for StorageResult<T> {
    fn verify_owner(self, user: &AuthenticatedUser) -> StorageResult<T> {
        let resource = self?;
        resource.verify_ownership(user)?;
        Ok(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResource {
        id: String,
        owner: String,
    }

    impl OwnedResource for TestResource {
        fn owner_user_id(&self) -> &str {
            &self.owner
        }

        fn resource_id(&self) -> &str {
            &self.id
        }
    }

    fn make_user(user_id: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: user_id.to_string(),
            session_id: None,
            expires_at: 0,
        }
    }

    fn resource() -> TestResource {
        TestResource {
            id: "entry-1".to_string(),
            owner: "user_123".to_string(),
        }
    }

    #[test]
    fn ownership_verification_passes_for_owner() {
        assert!(resource().verify_ownership(&make_user("user_123")).is_ok());
    }

    #[test]
    fn ownership_verification_hides_foreign_resources() {
        let result = resource().verify_ownership(&make_user("user_456"));
        assert!(matches!(result, Err(StorageError::NotFound(id)) if id == "entry-1"));
    }

    #[test]
    fn ownership_check_on_result() {
        let ok: StorageResult<TestResource> = Ok(resource());
        assert!(ok.verify_owner(&make_user("user_123")).is_ok());

        let foreign: StorageResult<TestResource> = Ok(resource());
        assert!(foreign.verify_owner(&make_user("user_456")).is_err());

        let missing: StorageResult<TestResource> =
            Err(StorageError::NotFound("entry-2".to_string()));
        assert!(matches!(
            missing.verify_owner(&make_user("user_123")),
            Err(StorageError::NotFound(_))
        ));
    }
}
