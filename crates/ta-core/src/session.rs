//! Mock session store
//!
//! There is no identity provider behind this: any email/password pair logs in.
//! The store only fabricates a [`User`], keeps it in memory and mirrors it to
//! the `user` storage key so a reload stays logged in.

use crate::model::User;
use crate::runtime::Runtime;
use crate::storage::{self, KeyValueStore};
use crate::{AppConfig, CoreError, CoreResult};
use std::cell::{Cell, RefCell};
use tracing::{info, warn};

/// Identifier given to every user fabricated by `login`
pub const LOGIN_USER_ID: &str = "1";

pub struct SessionStore<S, R> {
    store: S,
    runtime: R,
    config: AppConfig,
    user: RefCell<Option<User>>,
    loading: Cell<bool>,
}

impl<S: KeyValueStore, R: Runtime> SessionStore<S, R> {
    /// Starts in the loading state until [`SessionStore::init`] runs
    pub fn new(store: S, runtime: R, config: AppConfig) -> Self {
        Self {
            store,
            runtime,
            config,
            user: RefCell::new(None),
            loading: Cell::new(true),
        }
    }

    /// Restore the persisted user, if any
    pub fn init(&self) -> CoreResult<Option<User>> {
        let restored = match storage::load_json::<User, _>(&self.store, &self.config.session_key) {
            Ok(user) => user,
            Err(CoreError::Json(e)) => {
                warn!("Discarding unreadable session record: {}", e);
                if let Err(e) = self.store.remove(&self.config.session_key) {
                    warn!("Failed to delete unreadable session record: {}", e);
                }
                None
            }
            Err(e) => {
                self.loading.set(false);
                return Err(e);
            }
        };

        if let Some(user) = &restored {
            info!("Restored session for {}", user.email);
        }
        *self.user.borrow_mut() = restored.clone();
        self.loading.set(false);
        Ok(restored)
    }

    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.borrow().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Accepts any credentials after the artificial delay
    pub async fn login(&self, email: &str, _password: &str) -> CoreResult<User> {
        self.runtime.sleep(self.config.auth_delay()).await;

        let user = User {
            id: LOGIN_USER_ID.to_string(),
            email: email.to_string(),
            name: name_from_email(email).to_string(),
        };
        self.establish(user)
    }

    /// Same as `login`, but keeps the given name and stamps a time-based id
    pub async fn register(&self, name: &str, email: &str, _password: &str) -> CoreResult<User> {
        self.runtime.sleep(self.config.auth_delay()).await;

        let user = User {
            id: chrono::Utc::now().timestamp_millis().to_string(),
            email: email.to_string(),
            name: name.to_string(),
        };
        self.establish(user)
    }

    /// Memory is cleared even if the storage delete fails
    pub fn logout(&self) -> CoreResult<()> {
        if let Some(user) = self.user.borrow_mut().take() {
            info!("Logged out {}", user.email);
        }
        self.store.remove(&self.config.session_key)
    }

    fn establish(&self, user: User) -> CoreResult<User> {
        storage::save_json(&self.store, &self.config.session_key, &user)?;
        info!("Session started for {}", user.email);
        *self.user.borrow_mut() = Some(user.clone());
        Ok(user)
    }
}

/// Local part of the address; the whole string when there is no `@`
pub fn name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::TokioRuntime;
    use crate::storage::MemoryStore;
    use std::time::Duration;

    fn session(store: &MemoryStore) -> SessionStore<MemoryStore, TokioRuntime> {
        SessionStore::new(store.clone(), TokioRuntime, AppConfig::default())
    }

    #[test]
    fn test_name_from_email() {
        assert_eq!(name_from_email("alice@example.com"), "alice");
        assert_eq!(name_from_email("bob"), "bob");
        assert_eq!(name_from_email("@host"), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_any_password() {
        let store = MemoryStore::new();
        let session = session(&store);
        session.init().unwrap();

        let start = tokio::time::Instant::now();
        let user = session.login("alice@example.com", "whatever").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1000));

        assert_eq!(user.name, "alice");
        assert_eq!(user.id, "1");
        assert_eq!(session.user(), Some(user.clone()));

        let persisted: User = storage::load_json(&store, "user").unwrap().unwrap();
        assert_eq!(persisted, user);
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_keeps_name() {
        let store = MemoryStore::new();
        let session = session(&store);
        session.init().unwrap();

        let user = session.register("Carol", "carol@example.com", "pw").await.unwrap();
        assert_eq!(user.name, "Carol");
        assert!(user.id.parse::<i64>().unwrap() > 0);
        assert!(session.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_init_restores_and_logout_clears() {
        let store = MemoryStore::new();
        session(&store).login("dave@example.com", "x").await.unwrap();

        let reloaded = session(&store);
        assert!(reloaded.is_loading());
        let user = reloaded.init().unwrap().unwrap();
        assert!(!reloaded.is_loading());
        assert_eq!(user.email, "dave@example.com");

        reloaded.logout().unwrap();
        assert!(reloaded.user().is_none());
        assert!(!store.contains("user"));

        let after = session(&store);
        assert!(after.init().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_record_is_discarded() {
        let store = MemoryStore::new();
        store.set("user", "{oops").unwrap();

        let session = session(&store);
        assert!(session.init().unwrap().is_none());
        assert!(!session.is_loading());
        assert!(!store.contains("user"));
    }

    /// Serves a corrupt record and refuses to delete anything
    struct StuckStore;

    impl KeyValueStore for StuckStore {
        fn get(&self, _key: &str) -> CoreResult<Option<String>> {
            Ok(Some("{oops".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> CoreResult<()> {
            Ok(())
        }

        fn remove(&self, key: &str) -> CoreResult<()> {
            Err(CoreError::Storage(format!("cannot remove {}", key)))
        }
    }

    #[test]
    fn test_corrupt_record_survives_failed_delete() {
        let session = SessionStore::new(StuckStore, TokioRuntime, AppConfig::default());
        assert!(session.init().unwrap().is_none());
        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
    }
}
