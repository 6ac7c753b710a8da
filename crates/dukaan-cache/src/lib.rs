//! Type-safe key-value caching for the Dukaan storefront.
//!
//! Provides a small, ergonomic API for keeping state in a key-value store
//! with automatic JSON serialization. Two backends ship with the crate: an
//! in-memory store and a single JSON file on disk. On top of the cache sit
//! versioned [`Session`] records and a [`CookieJar`] with expiry.
//!
//! # Example
//!
//! ```rust
//! use dukaan_cache::{cookie, Cache, CookieJar};
//!
//! let cache = Cache::in_memory();
//! cache.set("greeting", &"salaam").unwrap();
//! assert_eq!(cache.get::<String>("greeting").unwrap().as_deref(), Some("salaam"));
//!
//! let jar = CookieJar::new(cache);
//! jar.set("dukaanLanguage", "ur", cookie::one_year()).unwrap();
//! assert_eq!(jar.get("dukaanLanguage").unwrap().as_deref(), Some("ur"));
//! ```

pub mod cookie;
mod error;
mod kv;
mod session;

pub use cookie::{Cookie, CookieJar};
pub use error::CacheError;
pub use kv::{Cache, FileStore, KvStore, MemoryStore};
pub use session::{Session, SessionData, SessionId};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, CookieJar, Session, SessionId};
}
