//! One-shot schema bootstrap.

use std::future::Future;

use tokio::sync::OnceCell;

use payments_types::RepoError;

/// Runs the schema bootstrap until it succeeds once.
///
/// A failed attempt leaves the guard empty, so the next caller retries.
/// Concurrent callers wait on a single attempt.
#[derive(Default)]
pub(crate) struct SchemaGuard {
    ready: OnceCell<()>,
}

impl SchemaGuard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn ensure<F, Fut>(&self, init: F) -> Result<(), RepoError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), RepoError>>,
    {
        self.ready.get_or_try_init(init).await.map(|_| ())
    }

    #[cfg(test)]
    pub(crate) fn is_ready(&self) -> bool {
        self.ready.initialized()
    }
}
