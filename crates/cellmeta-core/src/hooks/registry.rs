use dashmap::DashMap;
use std::cmp::Reverse;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::disposable::Disposable;

struct Registered<H: ?Sized> {
    seq: u64,
    priority: i32,
    hook: Arc<H>,
}

/// Hooks keyed by id. Clones share the same registrations.
pub(crate) struct HookRegistry<H: ?Sized> {
    hooks: Arc<DashMap<String, Registered<H>>>,
    next_seq: Arc<AtomicU64>,
}

impl<H: ?Sized + Send + Sync + 'static> HookRegistry<H> {
    pub(crate) fn new() -> Self {
        Self {
            hooks: Arc::new(DashMap::new()),
            next_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Register `hook` under `id`, replacing an earlier hook with that id.
    pub(crate) fn add(&self, id: &str, priority: i32, hook: Arc<H>) -> Disposable {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let replaced = self
            .hooks
            .insert(id.to_string(), Registered { seq, priority, hook })
            .is_some();
        if replaced {
            tracing::debug!(hook = id, "replaced previously registered hook");
        }

        let hooks = Arc::clone(&self.hooks);
        let id = id.to_string();
        // Only remove our own registration, not a later replacement.
        Disposable::new(move || {
            hooks.remove_if(&id, |_, registered| registered.seq == seq);
        })
    }

    /// Hooks in invocation order: highest priority first, then registration order.
    pub(crate) fn ordered(&self) -> Vec<Arc<H>> {
        let mut entries: Vec<(i32, u64, Arc<H>)> = self
            .hooks
            .iter()
            .map(|entry| (entry.priority, entry.seq, Arc::clone(&entry.hook)))
            .collect();
        entries.sort_by_key(|(priority, seq, _)| (Reverse(*priority), *seq));
        entries.into_iter().map(|(_, _, hook)| hook).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.hooks.len()
    }
}

impl<H: ?Sized> Clone for HookRegistry<H> {
    fn clone(&self) -> Self {
        Self {
            hooks: Arc::clone(&self.hooks),
            next_seq: Arc::clone(&self.next_seq),
        }
    }
}
