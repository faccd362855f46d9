//! Copy-on-write routing table handle.
//!
//! The serving path never mutates a trie. A new table is built off to the
//! side with `&mut Router` and published in one atomic swap; requests in
//! flight keep the snapshot they loaded.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::router::Router;

/// Shared, atomically replaceable routing table.
pub struct SharedRouter<H> {
    inner: Arc<ArcSwap<Router<H>>>,
}

impl<H> SharedRouter<H> {
    pub fn new(router: Router<H>) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(router)),
        }
    }

    /// Current snapshot of the routing table.
    pub fn load(&self) -> Arc<Router<H>> {
        self.inner.load_full()
    }

    /// Publish a fully built table, returning the one it replaced.
    pub fn replace(&self, router: Router<H>) -> Arc<Router<H>> {
        let routes = router.len();
        let previous = self.inner.swap(Arc::new(router));
        tracing::info!(routes, previous_routes = previous.len(), "Routing table replaced");
        previous
    }
}

impl<H> Clone for SharedRouter<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
