/*!
Write-once registry cache.
*/

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::core::registry::Registry;

/// Memoizes a [`Registry`] for the lifetime of its owner
///
/// The build closure runs at most once. Concurrent first callers block
/// until the winning thread has stored the registry, so nobody observes a
/// partially built one. There is no way to reset or replace the content.
#[derive(Debug, Default)]
pub struct RegistrationCache {
    cell: OnceCell<Arc<Registry>>,
}

impl RegistrationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached registry, building it with `build` on first use
    pub fn get_or_build<F>(&self, build: F) -> Arc<Registry>
    where
        F: FnOnce() -> Registry,
    {
        if let Some(registry) = self.cell.get() {
            log::trace!("registry cache hit ({} entries)", registry.len());
            return Arc::clone(registry);
        }
        Arc::clone(self.cell.get_or_init(|| Arc::new(build())))
    }

    /// The cached registry, if it has been built
    pub fn get(&self) -> Option<Arc<Registry>> {
        self.cell.get().cloned()
    }

    pub fn is_built(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_builds_once() {
        let cache = RegistrationCache::new();
        let calls = AtomicUsize::new(0);
        assert!(!cache.is_built());
        assert!(cache.get().is_none());

        let first = cache.get_or_build(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            Registry::default()
        });
        let second = cache.get_or_build(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            Registry::default()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.is_built());
        assert!(Arc::ptr_eq(&first, &cache.get().unwrap()));
    }

    #[test]
    fn test_concurrent_first_access() {
        let cache = Arc::new(RegistrationCache::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                std::thread::spawn(move || {
                    cache.get_or_build(|| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Registry::default()
                    })
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|r| Arc::ptr_eq(r, &results[0])));
    }
}
