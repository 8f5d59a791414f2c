//! # Function Registry
//!
//! Name-keyed table of host functions exposed for cross-language invocation.
//!
//! Lookups run concurrently; registration serializes per key through the
//! map's entry API, so no caller can observe a half-registered entry.
//! Dispatch is synchronous and non-suspending.

use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use pontecast::HostFn;
use pontecast::Value;

use crate::error::BridgeError;
use crate::error::Result;

struct FnEntry {
    seq: u64,
    func: HostFn,
}

/// Registry of locally callable functions.
pub struct FunctionRegistry {
    functions: DashMap<String, FnEntry>,
    next_seq: AtomicU64,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self {
            functions: DashMap::new(),
            next_seq: AtomicU64::new(1),
        }
    }

    /// Registers a function under a unique name.
    ///
    /// Never overwrites: a second registration under the same name fails and
    /// leaves the existing binding in place.
    pub fn register(&self, name: impl Into<String>, func: HostFn) -> Result<()> {
        let name = name.into();
        match self.functions.entry(name.clone()) {
            Entry::Occupied(_) => Err(BridgeError::AlreadyRegistered(name)),
            Entry::Vacant(slot) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(FnEntry { seq, func });
                debug!(name = %name, "registered function");
                Ok(())
            }
        }
    }

    /// Convenience wrapper that arcs a plain closure.
    pub fn register_fn<F>(&self, name: impl Into<String>, func: F) -> Result<()>
    where
        F: Fn(&[Value]) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.register(name, Arc::new(func))
    }

    /// Removes a registration. Absent names are a no-op, not an error.
    pub fn unregister(&self, name: &str) {
        if self.functions.remove(name).is_some() {
            debug!(name, "unregistered function");
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Invokes a registered function with positional arguments.
    ///
    /// The callee's own failure is wrapped, not swallowed.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        // Clone the handle out of the shard before calling, so a callee may
        // re-enter the registry.
        let func = self
            .functions
            .get(name)
            .map(|entry| entry.func.clone())
            .ok_or_else(|| BridgeError::FunctionNotFound(name.to_string()))?;

        debug!(name, argc = args.len(), "dispatching registered function");
        func(args).map_err(|e| BridgeError::Runtime {
            target: None,
            function: name.to_string(),
            message: format!("{:#}", e),
        })
    }

    /// Registered names in insertion order.
    pub fn list(&self) -> Vec<String> {
        let mut entries: Vec<(u64, String)> = self
            .functions
            .iter()
            .map(|entry| (entry.value().seq, entry.key().clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, name)| name).collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
