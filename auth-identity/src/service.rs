use std::sync::Arc;

use crate::error::{IdentityError, Result};
use crate::models::{NavItem, Role, Session};
use crate::navigation::navigation_for;
use crate::store::{SessionStore, LOGGED_IN_KEY, ROLE_KEY};

/// Explicit session handed to every layout instead of ambient storage
///
/// Lifecycle: [`SessionContext::login`] writes the role and logged-in flag,
/// [`SessionContext::logout`] clears both. Nothing else writes the store.
pub struct SessionContext<S: SessionStore> {
    store: Arc<S>,
}

impl<S: SessionStore> Clone for SessionContext<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: SessionStore> SessionContext<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub async fn login(&self, role: Role) -> Result<Session> {
        self.store.set(ROLE_KEY, role.as_str()).await?;
        self.store.set(LOGGED_IN_KEY, "true").await?;
        tracing::info!(role = %role, "session started");
        Ok(Session {
            role: Some(role),
            logged_in: true,
        })
    }

    pub async fn logout(&self) -> Result<()> {
        self.store.remove(ROLE_KEY).await?;
        self.store.remove(LOGGED_IN_KEY).await?;
        tracing::info!("session ended");
        Ok(())
    }

    /// Read the session; an unparseable stored role is an error
    pub async fn current(&self) -> Result<Session> {
        let logged_in = self
            .store
            .get(LOGGED_IN_KEY)
            .await?
            .is_some_and(|flag| flag == "true");
        let role = match self.store.get(ROLE_KEY).await? {
            Some(raw) => Some(raw.parse::<Role>()?),
            None => None,
        };
        Ok(Session { role, logged_in })
    }

    /// Role of the logged-in user
    pub async fn role(&self) -> Result<Role> {
        let session = self.current().await?;
        match (session.logged_in, session.role) {
            (true, Some(role)) => Ok(role),
            _ => Err(IdentityError::NotLoggedIn),
        }
    }

    /// Sidebar menu for the logged-in user
    pub async fn navigation(&self) -> Result<Vec<NavItem>> {
        Ok(navigation_for(self.role().await?))
    }
}
