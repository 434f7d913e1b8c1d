//! Session context and role-based navigation for CareDesk Engine
//!
//! There is no real authentication: the login screen only picks a [`Role`].
//! The session is an explicit [`SessionContext`] passed to whatever needs
//! it, backed by a [`SessionStore`] holding two keys, `userRole` and
//! `isLoggedIn`. The role decides which sidebar menu is rendered.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use auth_identity::{InMemorySessionStore, Role, SessionContext};
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! rt.block_on(async {
//!     let session = SessionContext::new(Arc::new(InMemorySessionStore::new()));
//!     session.login(Role::Doctor).await.unwrap();
//!     let menu = session.navigation().await.unwrap();
//!     assert_eq!(menu[0].label, "Dashboard");
//!     session.logout().await.unwrap();
//! });
//! ```

pub mod models;
pub mod store;
pub mod navigation;
pub mod service;
pub mod error;

pub use models::*;
pub use store::*;
pub use navigation::*;
pub use service::*;
pub use error::*;
