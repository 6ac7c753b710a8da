//! Versioned session records stored in the cache.

use crate::{cache_key, Cache, CacheError};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new session ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the session ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new("default")
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Session data stored in the cache.
///
/// Generic over the user data type `T`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData<T> {
    /// The session ID.
    pub id: SessionId,
    /// User-defined session data.
    pub data: T,
    /// Incremented on every write.
    pub version: u64,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session was last written.
    pub updated_at: DateTime<Utc>,
}

/// Session manager for typed session state.
///
/// # Example
///
/// ```rust
/// use dukaan_cache::{Cache, Session, SessionId};
///
/// let session = Session::<Vec<u32>>::new(Cache::in_memory());
/// let id = SessionId::default();
///
/// session.update(&id, |ids| ids.push(7)).unwrap();
/// assert_eq!(session.get_or_create(&id).unwrap(), vec![7]);
/// ```
pub struct Session<T> {
    cache: Cache,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Session<T>
where
    T: Serialize + DeserializeOwned + Default + Clone,
{
    /// Create a session manager over a cache.
    pub fn new(cache: Cache) -> Self {
        Self {
            cache,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get session data, or create a new session if it doesn't exist.
    pub fn get_or_create(&self, id: &SessionId) -> Result<T, CacheError> {
        match self.get_versioned(id)? {
            Some(session_data) => Ok(session_data.data),
            None => {
                let data = T::default();
                self.write(id, &data, None)?;
                Ok(data)
            }
        }
    }

    /// Get session data if it exists.
    pub fn get(&self, id: &SessionId) -> Result<Option<T>, CacheError> {
        Ok(self.get_versioned(id)?.map(|s| s.data))
    }

    /// Get full session data including version.
    pub fn get_versioned(&self, id: &SessionId) -> Result<Option<SessionData<T>>, CacheError> {
        self.cache.get::<SessionData<T>>(&Self::session_key(id))
    }

    /// Set session data (unconditional write).
    pub fn set(&self, id: &SessionId, data: &T) -> Result<u64, CacheError> {
        let current = self.get_versioned(id)?;
        self.write(id, data, current.as_ref())
    }

    /// Delete a session.
    pub fn delete(&self, id: &SessionId) -> Result<(), CacheError> {
        self.cache.delete(&Self::session_key(id))
    }

    /// Check if a session exists.
    pub fn exists(&self, id: &SessionId) -> Result<bool, CacheError> {
        self.cache.exists(&Self::session_key(id))
    }

    /// Read-modify-write session data with a closure.
    ///
    /// A missing session starts from `T::default()`. Returns the written data.
    pub fn update<F>(&self, id: &SessionId, f: F) -> Result<T, CacheError>
    where
        F: FnOnce(&mut T),
    {
        let current = self.get_versioned(id)?;
        let mut data = current
            .as_ref()
            .map(|s| s.data.clone())
            .unwrap_or_default();
        f(&mut data);
        self.write(id, &data, current.as_ref())?;
        Ok(data)
    }

    fn write(
        &self,
        id: &SessionId,
        data: &T,
        previous: Option<&SessionData<T>>,
    ) -> Result<u64, CacheError> {
        let now = Utc::now();
        let version = previous.map(|s| s.version + 1).unwrap_or(1);
        let session_data = SessionData {
            id: id.clone(),
            data: data.clone(),
            version,
            created_at: previous.map(|s| s.created_at).unwrap_or(now),
            updated_at: now,
        };
        self.cache.set(&Self::session_key(id), &session_data)?;
        tracing::debug!(session = %id, version, "session written");
        Ok(version)
    }

    fn session_key(id: &SessionId) -> String {
        cache_key!("session", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    struct CliState {
        visits: u32,
        last_query: Option<String>,
    }

    #[test]
    fn test_session_id_default() {
        assert_eq!(SessionId::default().as_str(), "default");
        assert_eq!(format!("{}", SessionId::from("cli")), "cli");
    }

    #[test]
    fn test_get_or_create() {
        let session = Session::<CliState>::new(Cache::in_memory());
        let id = SessionId::default();
        assert!(!session.exists(&id).unwrap());
        assert_eq!(session.get_or_create(&id).unwrap(), CliState::default());
        assert!(session.exists(&id).unwrap());
    }

    #[test]
    fn test_versions_increment() {
        let session = Session::<CliState>::new(Cache::in_memory());
        let id = SessionId::default();
        let state = CliState {
            visits: 1,
            last_query: None,
        };
        assert_eq!(session.set(&id, &state).unwrap(), 1);
        assert_eq!(session.set(&id, &state).unwrap(), 2);

        let versioned = session.get_versioned(&id).unwrap().unwrap();
        assert_eq!(versioned.version, 2);
        assert!(versioned.updated_at >= versioned.created_at);
    }

    #[test]
    fn test_update() {
        let session = Session::<CliState>::new(Cache::in_memory());
        let id = SessionId::default();
        session.update(&id, |s| s.visits += 1).unwrap();
        let state = session
            .update(&id, |s| {
                s.visits += 1;
                s.last_query = Some("phone".into());
            })
            .unwrap();
        assert_eq!(state.visits, 2);
        assert_eq!(session.get(&id).unwrap(), Some(state));
    }

    #[test]
    fn test_delete() {
        let session = Session::<CliState>::new(Cache::in_memory());
        let id = SessionId::default();
        session.get_or_create(&id).unwrap();
        session.delete(&id).unwrap();
        assert_eq!(session.get(&id).unwrap(), None);
    }
}
