//! In-memory preview sessions. Each session owns a debouncer whose settled value is
//! rendered and published through a watch channel; readers always see the newest render.
//!
//! Sessions live only as long as the process. Nothing is persisted. A session nobody has
//! submitted to or read from for the idle TTL is evicted the next time a session opens.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::letter::models::LetterRequest;
use crate::preview::debounce::Debouncer;
use crate::preview::{render_preview, PreviewRender};

/// The latest render of a session. Revision 0 is the initial placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewSnapshot {
    pub revision: u64,
    #[serde(flatten)]
    pub render: PreviewRender,
}

struct PreviewSession {
    debouncer: Debouncer<LetterRequest>,
    snapshots: watch::Receiver<PreviewSnapshot>,
    last_touched: Instant,
}

struct HubInner {
    sessions: Mutex<HashMap<Uuid, PreviewSession>>,
    quiet: Duration,
    max_sessions: usize,
    idle_ttl: Duration,
}

#[derive(Clone)]
pub struct PreviewHub {
    inner: Arc<HubInner>,
}

impl PreviewHub {
    pub fn new(quiet: Duration, max_sessions: usize, idle_ttl: Duration) -> Self {
        PreviewHub {
            inner: Arc::new(HubInner {
                sessions: Mutex::new(HashMap::new()),
                quiet,
                max_sessions,
                idle_ttl,
            }),
        }
    }

    /// Opens a session showing the placeholder panel.
    pub async fn open(&self) -> Result<Uuid, AppError> {
        let mut sessions = self.inner.sessions.lock().await;
        self.evict_idle(&mut sessions);
        if sessions.len() >= self.inner.max_sessions {
            return Err(AppError::TooManySessions(self.inner.max_sessions));
        }

        let id = Uuid::new_v4();
        let (tx, rx) = watch::channel(PreviewSnapshot {
            revision: 0,
            render: PreviewRender::empty(),
        });
        let debouncer = Debouncer::spawn(self.inner.quiet, move |request: LetterRequest| {
            let render = render_preview(&request);
            tx.send_modify(|snapshot| {
                snapshot.revision += 1;
                snapshot.render = render;
            });
            debug!("Preview session {id} re-rendered");
        });

        sessions.insert(
            id,
            PreviewSession {
                debouncer,
                snapshots: rx,
                last_touched: Instant::now(),
            },
        );
        info!("Opened preview session {id} ({} open)", sessions.len());
        Ok(id)
    }

    /// Queues new form state; supersedes anything not yet rendered.
    pub async fn submit(&self, id: Uuid, request: LetterRequest) -> Result<(), AppError> {
        let mut sessions = self.inner.sessions.lock().await;
        let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        session.last_touched = Instant::now();
        if !session.debouncer.submit(request) {
            return Err(AppError::Internal(anyhow::anyhow!(
                "Preview task for session {id} has stopped"
            )));
        }
        Ok(())
    }

    /// Current snapshot. With `after`, waits up to `wait` for the first snapshot newer
    /// than that revision and falls back to the current one on timeout.
    pub async fn snapshot(
        &self,
        id: Uuid,
        after: Option<u64>,
        wait: Duration,
    ) -> Result<PreviewSnapshot, AppError> {
        let mut rx = {
            let mut sessions = self.inner.sessions.lock().await;
            let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
            session.last_touched = Instant::now();
            session.snapshots.clone()
        };

        if let Some(after) = after {
            // Err means timeout or a closed session; either way report what we have.
            let _ = tokio::time::timeout(wait, rx.wait_for(|s| s.revision > after)).await;
        }
        let snapshot = rx.borrow().clone();
        Ok(snapshot)
    }

    pub async fn close(&self, id: Uuid) -> Result<(), AppError> {
        let mut sessions = self.inner.sessions.lock().await;
        sessions.remove(&id).ok_or_else(|| session_not_found(id))?;
        info!("Closed preview session {id} ({} open)", sessions.len());
        Ok(())
    }

    pub async fn open_sessions(&self) -> usize {
        let mut sessions = self.inner.sessions.lock().await;
        self.evict_idle(&mut sessions);
        sessions.len()
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, PreviewSession>) {
        let before = sessions.len();
        sessions.retain(|_, session| session.last_touched.elapsed() < self.inner.idle_ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {evicted} idle preview session(s) ({} open)", sessions.len());
        }
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Preview session {id} not found"))
}
