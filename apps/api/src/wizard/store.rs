use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::locale::Language;
use crate::wizard::session::Session;

pub type SharedSession = Arc<Mutex<Session>>;

const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(2 * 60 * 60);

struct Entry {
    session: SharedSession,
    last_seen: Instant,
}

/// In-memory registry of live wizard sessions.
///
/// Each session has its own mutex so one session's slow analysis never blocks
/// another. Callers must not hold a session lock across an external call.
/// Sessions idle for longer than `idle_ttl` are dropped by [`SessionStore::evict_idle`].
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
    idle_ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TTL)
    }
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    pub async fn create(&self, language: Language) -> SharedSession {
        let session = Session::new(language);
        let id = session.id();
        let shared = Arc::new(Mutex::new(session));
        let entry = Entry {
            session: shared.clone(),
            last_seen: Instant::now(),
        };
        self.sessions.write().await.insert(id, entry);
        info!(session = %id, %language, "session created");
        shared
    }

    /// Looks a session up and marks it as recently used.
    pub async fn get(&self, id: Uuid) -> Option<SharedSession> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id)?;
        entry.last_seen = Instant::now();
        Some(entry.session.clone())
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every session idle for longer than the TTL and returns how many
    /// went. Sessions that are locked or busy extracting or analyzing stay.
    pub async fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| {
            if now.duration_since(entry.last_seen) <= self.idle_ttl {
                return true;
            }
            match entry.session.try_lock() {
                Ok(session) => session.is_busy(),
                Err(_) => true,
            }
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, remaining = sessions.len(), "idle sessions evicted");
        }
        evicted
    }

    /// Runs [`SessionStore::evict_idle`] every `every` until the runtime stops.
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let evicted = store.evict_idle().await;
                debug!(evicted, "session sweep finished");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_create_then_get() {
        let store = SessionStore::default();
        let created = store.create(Language::Pt).await;
        let id = created.lock().await.id();

        let fetched = store.get(id).await.expect("session should exist");
        assert_eq!(fetched.lock().await.language(), Language::Pt);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let store = SessionStore::default();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_sessions() {
        let store = SessionStore::default();
        let other = store.clone();
        let id = store.create(Language::En).await.lock().await.id();
        assert!(other.get(id).await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_sessions_are_evicted() {
        let store = SessionStore::new(TTL);
        let id = store.create(Language::En).await.lock().await.id();

        tokio::time::advance(TTL / 2).await;
        assert_eq!(store.evict_idle().await, 0);

        tokio::time::advance(TTL).await;
        assert_eq!(store.evict_idle().await, 1);
        assert!(store.get(id).await.is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_refreshes_idle_timer() {
        let store = SessionStore::new(TTL);
        let id = store.create(Language::En).await.lock().await.id();

        tokio::time::advance(TTL - Duration::from_secs(1)).await;
        assert!(store.get(id).await.is_some());
        tokio::time::advance(TTL - Duration::from_secs(1)).await;

        assert_eq!(store.evict_idle().await, 0);
        assert!(store.get(id).await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_locked_session_survives_sweep() {
        let store = SessionStore::new(TTL);
        let shared = store.create(Language::En).await;
        let guard = shared.lock().await;

        tokio::time::advance(TTL * 2).await;
        assert_eq!(store.evict_idle().await, 0);
        drop(guard);

        assert_eq!(store.evict_idle().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_session_survives_sweep() {
        let store = SessionStore::new(TTL);
        let shared = store.create(Language::En).await;
        {
            let mut session = shared.lock().await;
            session.start().unwrap();
            session
                .update_intake(crate::wizard::models::IntakePatch {
                    purpose: Some("sign".into()),
                    representation: Some("tenant".into()),
                    contract_type: Some("lease".into()),
                    ..Default::default()
                })
                .unwrap();
            session.proceed_to_contract().unwrap();
            session.begin_extraction().unwrap();
        }

        tokio::time::advance(TTL * 2).await;
        assert_eq!(store.evict_idle().await, 0);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_evicts_in_background() {
        let store = SessionStore::new(TTL);
        store.create(Language::En).await;
        let sweeper = store.spawn_sweeper(Duration::from_secs(10));

        tokio::time::sleep(TTL + Duration::from_secs(30)).await;
        assert_eq!(store.len().await, 0);
        sweeper.abort();
    }
}
