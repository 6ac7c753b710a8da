//! Named cookies with expiry, stored in the cache.

use crate::{cache_key, Cache, CacheError};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Lifetime of a cookie set for one year.
pub fn one_year() -> Duration {
    Duration::days(365)
}

/// A stored cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl Cookie {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// A client-side cookie jar.
///
/// Expired cookies read as absent and are dropped on read.
#[derive(Debug, Clone)]
pub struct CookieJar {
    cache: Cache,
}

impl CookieJar {
    pub fn new(cache: Cache) -> Self {
        Self { cache }
    }

    /// A jar over a throwaway in-memory cache.
    pub fn in_memory() -> Self {
        Self::new(Cache::in_memory())
    }

    /// Read a cookie value.
    pub fn get(&self, name: &str) -> Result<Option<String>, CacheError> {
        self.get_at(name, Utc::now())
    }

    /// Read a cookie value as of `now`.
    pub fn get_at(&self, name: &str, now: DateTime<Utc>) -> Result<Option<String>, CacheError> {
        let key = Self::key(name);
        match self.cache.get::<Cookie>(&key)? {
            Some(cookie) if cookie.is_expired(now) => {
                tracing::debug!(cookie = name, "dropping expired cookie");
                self.cache.delete(&key)?;
                Ok(None)
            }
            Some(cookie) => Ok(Some(cookie.value)),
            None => Ok(None),
        }
    }

    /// Read the full cookie record, expired or not.
    pub fn cookie(&self, name: &str) -> Result<Option<Cookie>, CacheError> {
        self.cache.get(&Self::key(name))
    }

    /// Store a cookie that expires `max_age` from now.
    pub fn set(&self, name: &str, value: &str, max_age: Duration) -> Result<Cookie, CacheError> {
        self.set_at(name, value, max_age, Utc::now())
    }

    /// Store a cookie that expires `max_age` after `now`.
    pub fn set_at(
        &self,
        name: &str,
        value: &str,
        max_age: Duration,
        now: DateTime<Utc>,
    ) -> Result<Cookie, CacheError> {
        let cookie = Cookie {
            name: name.to_string(),
            value: value.to_string(),
            expires_at: now + max_age,
        };
        self.cache.set(&Self::key(name), &cookie)?;
        Ok(cookie)
    }

    /// Remove a cookie.
    pub fn remove(&self, name: &str) -> Result<(), CacheError> {
        self.cache.delete(&Self::key(name))
    }

    fn key(name: &str) -> String {
        cache_key!("cookie", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let jar = CookieJar::in_memory();
        let cookie = jar.set("dukaanLanguage", "ur", one_year()).unwrap();
        assert_eq!(jar.get("dukaanLanguage").unwrap(), Some("ur".to_string()));
        assert!(cookie.expires_at > Utc::now() + Duration::days(364));
    }

    #[test]
    fn test_expired_cookie_is_absent() {
        let jar = CookieJar::in_memory();
        let set_at = Utc::now() - Duration::days(400);
        jar.set_at("dukaanLanguage", "ur", one_year(), set_at).unwrap();

        assert_eq!(jar.get("dukaanLanguage").unwrap(), None);
        assert_eq!(jar.cookie("dukaanLanguage").unwrap(), None);
    }

    #[test]
    fn test_remove() {
        let jar = CookieJar::in_memory();
        jar.set("a", "1", Duration::hours(1)).unwrap();
        jar.remove("a").unwrap();
        assert_eq!(jar.get("a").unwrap(), None);
    }

    #[test]
    fn test_jars_share_cache() {
        let cache = Cache::in_memory();
        CookieJar::new(cache.clone())
            .set("dukaanLanguage", "en", one_year())
            .unwrap();
        let jar = CookieJar::new(cache);
        assert_eq!(jar.get("dukaanLanguage").unwrap(), Some("en".to_string()));
    }
}
