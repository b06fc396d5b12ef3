use cellmeta_engine::engine::{ApplyType, AutoFillLocation, Direction};
use std::sync::Arc;

use super::disposable::Disposable;
use super::registry::HookRegistry;
use crate::document::MutationPair;
use crate::error::Result;

/// Extension point invoked once a fill gesture's target is known.
pub trait AutoFillHook: Send + Sync {
    fn id(&self) -> &str;

    /// Higher runs first.
    fn priority(&self) -> i32 {
        0
    }

    fn on_fill_data(
        &self,
        location: &AutoFillLocation,
        direction: Direction,
        apply_type: ApplyType,
    ) -> Result<MutationPair>;
}

/// Host-side autofill service. Clones share hook registrations.
#[derive(Clone)]
pub struct AutoFillService {
    hooks: HookRegistry<dyn AutoFillHook>,
}

impl AutoFillService {
    pub fn new() -> Self {
        Self {
            hooks: HookRegistry::new(),
        }
    }

    pub fn add_hook(&self, hook: Arc<dyn AutoFillHook>) -> Disposable {
        let id = hook.id().to_string();
        let priority = hook.priority();
        self.hooks.add(&id, priority, hook)
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    /// Run every hook and merge what they return into one pair.
    pub fn fill_data(
        &self,
        location: &AutoFillLocation,
        direction: Direction,
        apply_type: ApplyType,
    ) -> Result<MutationPair> {
        let mut merged = MutationPair::noop();
        for hook in self.hooks.ordered() {
            merged.extend(hook.on_fill_data(location, direction, apply_type)?);
        }
        Ok(merged)
    }
}

impl Default for AutoFillService {
    fn default() -> Self {
        Self::new()
    }
}
