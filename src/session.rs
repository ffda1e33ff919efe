//! Session
//!
//! Login, registration and logout. The client trusts whatever user record
//! the server returns and persists it as-is.

use crate::api::JobDirectory;
use crate::error::ClientResult;
use crate::models::{Credentials, Registration, User};
use crate::storage::{IdentityStore, KeyValueStore};

/// Sign in and remember the returned user
pub async fn login<S: KeyValueStore>(
    api: &dyn JobDirectory,
    identity: &IdentityStore<S>,
    credentials: &Credentials,
) -> ClientResult<User> {
    let user = api.login(credentials).await.map_err(|err| {
        log::error!("[SESSION] login error: {}", err);
        err
    })?;
    remember(identity, &user);
    log::info!("[SESSION] logged in as user {}", user.id);
    Ok(user)
}

/// Create an account; the new user is signed in straight away
pub async fn register<S: KeyValueStore>(
    api: &dyn JobDirectory,
    identity: &IdentityStore<S>,
    registration: &Registration,
) -> ClientResult<User> {
    let user = api.register(registration).await.map_err(|err| {
        log::error!("[SESSION] registration error: {}", err);
        err
    })?;
    remember(identity, &user);
    log::info!("[SESSION] registered user {}", user.id);
    Ok(user)
}

/// Persist the user; without storage the session lasts until the page closes
fn remember<S: KeyValueStore>(identity: &IdentityStore<S>, user: &User) {
    if let Err(err) = identity.save(user) {
        log::warn!("[SESSION] could not save user {}, session will not persist: {}", user.id, err);
    }
}

/// Forget the saved user
pub fn logout<S: KeyValueStore>(identity: &IdentityStore<S>) -> ClientResult<()> {
    log::info!("[SESSION] logging out");
    identity.clear()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{user, FakeDirectory};
    use crate::error::ClientError;
    use crate::storage::MemoryStore;

    /// Storage that refuses every call, like a browser with localStorage disabled
    struct DeniedStore;

    impl KeyValueStore for DeniedStore {
        fn get(&self, _key: &str) -> ClientResult<Option<String>> {
            Err(ClientError::Storage("localStorage unavailable".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> ClientResult<()> {
            Err(ClientError::Storage("localStorage unavailable".into()))
        }

        fn remove(&self, _key: &str) -> ClientResult<()> {
            Err(ClientError::Storage("localStorage unavailable".into()))
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            username: "jobseeker".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn test_login_persists_user() {
        let api = FakeDirectory::new().with_auth_user(user(7, "A", "B"));
        let identity = IdentityStore::new(MemoryStore::default(), "currentUser");

        let logged_in = login(&api, &identity, &credentials()).await.unwrap();

        assert_eq!(logged_in.id, 7);
        assert_eq!(identity.load(), Some(user(7, "A", "B")));
    }

    #[tokio::test]
    async fn test_rejected_login_stores_nothing() {
        let api = FakeDirectory::new();
        let identity = IdentityStore::new(MemoryStore::default(), "currentUser");

        let err = login(&api, &identity, &credentials()).await.unwrap_err();

        assert!(matches!(err, ClientError::Status { status: 401, .. }));
        assert_eq!(err.user_message("Login failed"), "Invalid username or password");
        assert!(identity.load().is_none());
    }

    #[tokio::test]
    async fn test_register_then_logout() {
        let api = FakeDirectory::new().with_auth_user(user(9, "Jane", "Seeker"));
        let identity = IdentityStore::new(MemoryStore::default(), "currentUser");
        let registration = Registration {
            first_name: "Jane".into(),
            last_name: "Seeker".into(),
            username: "jane".into(),
            email: "jane@example.com".into(),
            password: "secret".into(),
            role: "JOB_SEEKER".into(),
        };

        register(&api, &identity, &registration).await.unwrap();
        assert_eq!(identity.load().map(|u| u.id), Some(9));
        assert_eq!(*api.logins.borrow(), vec!["jane".to_string()]);

        logout(&identity).unwrap();
        assert!(identity.load().is_none());
    }

    #[tokio::test]
    async fn test_login_without_storage_still_signs_in() {
        let api = FakeDirectory::new().with_auth_user(user(7, "A", "B"));
        let identity = IdentityStore::new(DeniedStore, "currentUser");

        let logged_in = login(&api, &identity, &credentials()).await.unwrap();

        assert_eq!(logged_in, user(7, "A", "B"));
        assert!(identity.load().is_none());
    }
}
