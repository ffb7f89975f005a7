// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Binding registry for resolved field configurations.
//!
//! Converter configuration is resolved exactly once per field, at
//! schema-binding time; the hosting framework then reuses the resolved
//! binding for every row. This registry is the caching side of that
//! contract: bind once, register under the field name, look up per row.

use super::error::{BindError, Result};
use std::collections::HashMap;
use std::sync::RwLock;

/// Thread-safe store of resolved bindings keyed by field name.
///
/// Uses RwLock for concurrent read access with exclusive write access.
/// Registration happens during schema binding (single writer); lookups
/// happen per row, possibly from many threads.
pub struct BindingRegistry<T> {
    inner: RwLock<BindingRegistryInner<T>>,
}

struct BindingRegistryInner<T> {
    bindings: HashMap<String, T>,
}

impl<T> BindingRegistry<T> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BindingRegistryInner {
                bindings: HashMap::new(),
            }),
        }
    }

    /// Register a resolved binding under a field name.
    pub fn register(&self, name: impl Into<String>, binding: T) -> Result<()> {
        let name = name.into();
        let mut inner = self
            .inner
            .write()
            .map_err(|e| BindError::Other(format!("Registry lock poisoned: {e}")))?;
        tracing::debug!(field = %name, "binding registered");
        inner.bindings.insert(name, binding);
        Ok(())
    }

    /// Get a binding by field name.
    pub fn get(&self, name: &str) -> Result<Option<T>>
    where
        T: Clone,
    {
        let inner = self
            .inner
            .read()
            .map_err(|e| BindError::Other(format!("Registry lock poisoned: {e}")))?;
        Ok(inner.bindings.get(name).cloned())
    }

    /// Check if a field name is registered.
    pub fn contains(&self, name: &str) -> Result<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|e| BindError::Other(format!("Registry lock poisoned: {e}")))?;
        Ok(inner.bindings.contains_key(name))
    }

    /// Get all registered field names.
    pub fn names(&self) -> Result<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| BindError::Other(format!("Registry lock poisoned: {e}")))?;
        Ok(inner.bindings.keys().cloned().collect())
    }

    /// Remove a binding from the registry.
    pub fn remove(&self, name: &str) -> Result<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| BindError::Other(format!("Registry lock poisoned: {e}")))?;
        Ok(inner.bindings.remove(name).is_some())
    }

    /// Clear all bindings from the registry.
    pub fn clear(&self) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| BindError::Other(format!("Registry lock poisoned: {e}")))?;
        inner.bindings.clear();
        Ok(())
    }

    /// Get the number of registered bindings.
    pub fn len(&self) -> Result<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|e| BindError::Other(format!("Registry lock poisoned: {e}")))?;
        Ok(inner.bindings.len())
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl<T> Default for BindingRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_registry() {
        let registry = BindingRegistry::new();

        assert!(registry.register("active", 42).is_ok());
        assert_eq!(registry.get("active").unwrap(), Some(42));
        assert!(registry.contains("active").unwrap());
        assert_eq!(registry.len().unwrap(), 1);
        assert!(!registry.is_empty().unwrap());

        assert!(registry.remove("active").unwrap());
        assert!(!registry.contains("active").unwrap());
        assert!(registry.is_empty().unwrap());
    }

    #[test]
    fn test_register_overwrites() {
        let registry = BindingRegistry::new();
        registry.register("f", 1).unwrap();
        registry.register("f", 2).unwrap();
        assert_eq!(registry.get("f").unwrap(), Some(2));
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn test_names_and_clear() {
        let registry = BindingRegistry::new();
        registry.register("a", 1).unwrap();
        registry.register("b", 2).unwrap();

        let mut names = registry.names().unwrap();
        names.sort();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);

        registry.clear().unwrap();
        assert!(registry.is_empty().unwrap());
    }

    #[test]
    fn test_get_missing() {
        let registry: BindingRegistry<i32> = BindingRegistry::new();
        assert_eq!(registry.get("missing").unwrap(), None);
        assert!(!registry.remove("missing").unwrap());
    }

    #[test]
    fn test_concurrent_access() {
        use std::thread;

        let registry = std::sync::Arc::new(BindingRegistry::new());
        registry.register("shared", 7).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || {
                    for _ in 0..10 {
                        assert_eq!(registry.get("shared").unwrap(), Some(7));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(registry.contains("shared").unwrap());
    }
}
