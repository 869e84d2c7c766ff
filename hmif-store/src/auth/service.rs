//! Auth service
//!
//! Lookup and mutation of the user collection. Role policy: the first
//! successful registration into an empty collection is granted `admin`
//! (fresh-install bootstrap carried over from the legacy app), every
//! later one starts as `member`.

use shared::models::{Role, User, UserProfile, UserRegister};
use shared::util::{now_millis, record_token};

use super::password::{hash_password, verify_password};
use crate::collection::{Collection, Record};
use crate::core::error::{StoreError, StoreResult};
use crate::storage::RecordStore;

const COLLECTION: &str = "users";

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct AuthService {
    users: Collection<User>,
}

impl AuthService {
    pub fn new(store: RecordStore) -> Self {
        Self {
            users: Collection::new(store, COLLECTION),
        }
    }

    /// Register a new user.
    ///
    /// Fails with `Duplicate` when the NIM or the email is already taken
    /// (either collision alone suffices); on failure the collection is
    /// unchanged.
    pub async fn register(&self, data: UserRegister) -> StoreResult<UserProfile> {
        for (value, label) in [
            (&data.nim, "NIM"),
            (&data.name, "name"),
            (&data.email, "email"),
            (&data.password, "password"),
        ] {
            if value.trim().is_empty() {
                return Err(StoreError::Validation(format!("{label} is required")));
            }
        }

        let password_hash = hash_password(&data.password)?;

        let profile = self
            .users
            .mutate(|users| {
                if users.iter().any(|u| u.nim == data.nim) {
                    return Err(StoreError::Duplicate(format!(
                        "NIM {} is already registered",
                        data.nim
                    )));
                }
                if users.iter().any(|u| u.email == data.email) {
                    return Err(StoreError::Duplicate(format!(
                        "Email {} is already registered",
                        data.email
                    )));
                }

                let role = if users.is_empty() {
                    Role::Admin
                } else {
                    Role::Member
                };

                let user = User {
                    id: record_token(),
                    nim: data.nim.clone(),
                    name: data.name.clone(),
                    email: data.email.clone(),
                    phone: data.phone.clone(),
                    angkatan: data.angkatan.clone(),
                    password_hash: password_hash.clone(),
                    role,
                    created_at: now_millis(),
                };
                let profile = UserProfile::from(&user);
                users.push(user);
                Ok(profile)
            })
            .await?;

        tracing::info!(nim = %profile.nim, role = ?profile.role, "User registered");
        Ok(profile)
    }

    /// Authenticate by NIM or email.
    ///
    /// Every failure path returns the same `InvalidCredentials` error so
    /// callers cannot distinguish an unknown identifier from a wrong
    /// password.
    pub async fn login(&self, identifier: &str, password: &str) -> StoreResult<UserProfile> {
        let users = self.users.all()?;

        let user = users
            .iter()
            .find(|u| u.nim == identifier || u.email == identifier);

        match user {
            Some(user) if verify_password(&user.password_hash, password) => {
                tracing::debug!(nim = %user.nim, "Login succeeded");
                Ok(UserProfile::from(user))
            }
            _ => {
                tracing::warn!(identifier = %identifier, "Login failed");
                Err(StoreError::InvalidCredentials)
            }
        }
    }

    /// Overwrite a user's role. Authorization is the caller's concern;
    /// the operation itself checks nothing beyond existence.
    pub async fn update_role(&self, user_id: &str, role: Role) -> StoreResult<UserProfile> {
        let user = self
            .users
            .update_with(user_id, |user| {
                user.role = role;
                Ok(())
            })
            .await?;
        tracing::info!(nim = %user.nim, role = ?role, "Role updated");
        Ok(UserProfile::from(&user))
    }

    /// Verify the old password, then re-hash and store the new one
    pub async fn change_password(
        &self,
        user_id: &str,
        old_password: &str,
        new_password: &str,
    ) -> StoreResult<()> {
        if new_password.trim().is_empty() {
            return Err(StoreError::Validation("password is required".into()));
        }

        self.users
            .update_with(user_id, |user| {
                if !verify_password(&user.password_hash, old_password) {
                    return Err(StoreError::InvalidCredentials);
                }
                user.password_hash = hash_password(new_password)?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    /// Soft-miss profile lookup for session hydration
    pub fn get_profile(&self, user_id: &str) -> StoreResult<Option<UserProfile>> {
        Ok(self
            .users
            .get_by_id(user_id)?
            .map(|user| UserProfile::from(&user)))
    }
}
