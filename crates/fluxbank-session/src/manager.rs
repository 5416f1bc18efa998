//! Session manager: the sole source of truth for "who is logged in".

use std::sync::Mutex;

use fluxbank_core::{
    AuthBackend, AuthError, Identity, IdentityStore, RegistrationProfile, SessionPhase,
    SessionSnapshot,
};
use futures::StreamExt;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

struct Inner {
    snapshot: SessionSnapshot,
    generation: u64,
}

/// Owns the authenticated identity and its lifecycle transitions.
///
/// One instance per client, owned by the application root and handed to
/// consumers by reference. The rest of the client only reads snapshots and
/// calls the three operations; nothing else mutates session state.
///
/// Overlapping async attempts are serialized by a generation counter: each
/// `login`/`register` claims a generation, and a resolution whose generation
/// has been superseded (by a newer attempt or a logout) commits nothing.
pub struct SessionManager<S, B>
where
    S: IdentityStore,
    B: AuthBackend,
{
    store: S,
    backend: B,
    inner: Mutex<Inner>,
    sender: watch::Sender<SessionSnapshot>,
}

impl<S, B> SessionManager<S, B>
where
    S: IdentityStore,
    B: AuthBackend,
{
    /// Create a new session manager. The session starts uninitialized;
    /// call [`Self::initialize`] to restore persisted state.
    #[must_use]
    pub fn new(store: S, backend: B) -> Self {
        let snapshot = SessionSnapshot::uninitialized();
        let (sender, _) = watch::channel(snapshot.clone());
        Self {
            store,
            backend,
            inner: Mutex::new(Inner {
                snapshot,
                generation: 0,
            }),
            sender,
        }
    }

    /// Restore the persisted session, if any.
    ///
    /// One synchronous store read: a present, parseable record signs the
    /// session in; anything else starts it signed out. An unreadable record
    /// is never surfaced to the caller; it is logged and cleared so the next
    /// start reads a clean slot.
    pub fn initialize(&self) -> SessionSnapshot {
        self.begin();

        let restored = match self.store.load() {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(error = %e, "persisted identity unreadable, starting signed out");
                if let Err(e) = self.store.clear() {
                    tracing::debug!(error = %e, "could not clear unreadable identity record");
                }
                None
            }
        };

        let snapshot = match restored {
            Some(identity) => {
                tracing::info!(email = %identity.email, "session restored");
                SessionSnapshot::authenticated(identity)
            }
            None => SessionSnapshot::unauthenticated(),
        };

        let mut inner = self.inner.lock().unwrap();
        inner.snapshot = snapshot.clone();
        self.sender.send_replace(snapshot.clone());
        snapshot
    }

    /// Sign in with an email/password pair.
    ///
    /// Resolves through `Loading` to `Authenticated`, persisting the identity
    /// so it survives a reload, or to `Unauthenticated` with a typed error.
    /// The phase is never left at `Loading` once the call returns. A call
    /// overtaken by a newer login, registration, or logout commits nothing
    /// and returns [`AuthError::Superseded`].
    ///
    /// # Errors
    /// Returns error if authentication or persistence fails, or the attempt
    /// was superseded.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let claimed = self.begin();
        let outcome = self.backend.authenticate(email, password).await;
        self.resolve(claimed, outcome)
    }

    /// Create an account from a partial profile and sign it in.
    ///
    /// Same resolution contract as [`Self::login`].
    ///
    /// # Errors
    /// Returns error if registration or persistence fails, or the attempt
    /// was superseded.
    pub async fn register(&self, profile: &RegistrationProfile) -> Result<Identity, AuthError> {
        let claimed = self.begin();
        let outcome = self.backend.register(profile).await;
        self.resolve(claimed, outcome)
    }

    /// Sign out.
    ///
    /// Synchronous and idempotent: clears the identity, supersedes any
    /// in-flight attempt, and removes the persisted record. A failed removal
    /// is logged, never surfaced.
    pub fn logout(&self) {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.generation += 1;
            inner.snapshot = SessionSnapshot::unauthenticated();
            self.sender.send_replace(inner.snapshot.clone());
        }

        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "could not remove persisted identity");
        }
        tracing::info!("session signed out");
    }

    /// Current read model.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.lock().unwrap().snapshot.clone()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.inner.lock().unwrap().snapshot.phase
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.inner.lock().unwrap().snapshot.identity.clone()
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.lock().unwrap().snapshot.is_authenticated()
    }

    /// Whether an operation is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.lock().unwrap().snapshot.is_loading()
    }

    /// Receiver for snapshot changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.sender.subscribe()
    }

    /// Stream of snapshots, starting with the current one.
    ///
    /// New consumers receive the present state immediately, then live
    /// updates; route guards and navigation hang off this.
    #[must_use]
    pub fn updates(&self) -> futures::stream::BoxStream<'static, SessionSnapshot> {
        WatchStream::new(self.sender.subscribe()).boxed()
    }

    // Claim a new attempt: supersede in-flight work and enter Loading.
    fn begin(&self) -> u64 {
        let mut inner = self.inner.lock().unwrap();
        inner.generation += 1;
        inner.snapshot = SessionSnapshot::loading();
        self.sender.send_replace(inner.snapshot.clone());
        inner.generation
    }

    // Commit an attempt's outcome unless a newer attempt owns the session.
    fn resolve(
        &self,
        claimed: u64,
        outcome: Result<Identity, AuthError>,
    ) -> Result<Identity, AuthError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.generation != claimed {
            tracing::warn!("stale authentication attempt discarded");
            return Err(AuthError::Superseded);
        }

        match outcome {
            Ok(identity) => {
                if let Err(e) = self.store.save(&identity) {
                    inner.snapshot = SessionSnapshot::unauthenticated();
                    self.sender.send_replace(inner.snapshot.clone());
                    return Err(AuthError::Store(e));
                }
                inner.snapshot = SessionSnapshot::authenticated(identity.clone());
                self.sender.send_replace(inner.snapshot.clone());
                tracing::info!(email = %identity.email, "session authenticated");
                Ok(identity)
            }
            Err(e) => {
                inner.snapshot = SessionSnapshot::unauthenticated();
                self.sender.send_replace(inner.snapshot.clone());
                Err(e)
            }
        }
    }
}
