// SPDX-License-Identifier: MPL-2.0
//! External collaborators: the session provider and the row store.
//!
//! Both are thin REST clients over the hosted backend project. They are
//! bundled in [`Backend`] and threaded through the application explicitly,
//! so no screen depends on ambient global auth state.

pub mod session;
pub mod store;
pub mod types;

pub use session::{AuthUser, Session, SessionProvider, UserMetadata};
pub use store::RowStore;

/// Table names used by the screens.
pub mod tables {
    pub const AVAILABLE_PINCODES: &str = "available_pincodes";
    pub const NOTES: &str = "notes";
    pub const USER_ADDRESSES: &str = "user_addresses";
}

/// The two collaborators behind one shared HTTP client.
#[derive(Clone)]
pub struct Backend {
    pub session: SessionProvider,
    pub store: RowStore,
}

impl Backend {
    #[must_use]
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        let client = reqwest::Client::new();
        Self {
            session: SessionProvider::new(client.clone(), base_url, anon_key),
            store: RowStore::new(client, base_url, anon_key),
        }
    }
}
