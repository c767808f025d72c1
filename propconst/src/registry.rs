//! Run-wide uniqueness of generated type names.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use crate::error::Error;

/// Maps each fully qualified type name to the resource that claimed it first.
///
/// The registry can be shared between threads; every registration is an
/// atomic insert-if-absent.
#[derive(Debug, Default)]
pub struct NameRegistry {
    owners: Mutex<HashMap<String, String>>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `name` for `resource`.
    ///
    /// Fails with [`Error::NamingCollision`] when another resource already
    /// owns the name. Registering the same pair twice is a no-op.
    pub fn register(&self, name: &str, resource: &str) -> Result<(), Error> {
        let mut owners = self.owners.lock().unwrap_or_else(PoisonError::into_inner);
        match owners.get(name) {
            Some(existing) if existing != resource => Err(Error::NamingCollision {
                name: name.to_string(),
                resource: resource.to_string(),
                existing: existing.clone(),
            }),
            Some(_) => Ok(()),
            None => {
                owners.insert(name.to_string(), resource.to_string());
                Ok(())
            }
        }
    }

    /// The resource owning `name`, if any.
    pub fn owner(&self, name: &str) -> Option<String> {
        self.owners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.owners.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
