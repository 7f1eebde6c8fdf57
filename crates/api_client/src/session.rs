//! Session state and token persistence
//!
//! The session is an explicit value with an explicit unauthenticated
//! variant, owned by the client and transitioned at operation boundaries:
//! a successful login stores the token and moves to `Authenticated`; any
//! 401 clears the stored token and moves back to `Anonymous`. Nothing
//! else mutates it.
//!
//! The bearer token itself is opaque: the server issues and validates it,
//! this side only carries it.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// An opaque bearer token issued by the server
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token for the Authorization header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Tokens must not leak into logs.
        write!(f, "BearerToken(****)")
    }
}

/// Authentication state of the client
#[derive(Debug, Clone)]
pub enum Session {
    /// No token; every protected operation fails fast
    Anonymous,
    /// Holding a bearer token
    Authenticated { token: BearerToken },
}

impl Session {
    pub fn authenticated(token: impl Into<String>) -> Self {
        Session::Authenticated {
            token: BearerToken::new(token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// Returns the token when authenticated
    pub fn token(&self) -> Option<&BearerToken> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { token } => Some(token),
        }
    }
}

/// Persistent storage for the single bearer token
///
/// One token under one recognized key; absence means the user must log in
/// again.
pub trait TokenStore: Send + Sync {
    /// Loads the stored token, if any
    fn load(&self) -> Option<String>;

    /// Stores the token, replacing any previous one
    fn save(&self, token: &str) -> io::Result<()>;

    /// Removes the stored token
    fn clear(&self) -> io::Result<()>;
}

/// Token persisted as a single file
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, token)
    }

    fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    fn save(&self, token: &str) -> io::Result<()> {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.token.write().expect("token lock poisoned") = None;
        Ok(())
    }
}
