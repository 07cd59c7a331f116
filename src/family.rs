// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font family identity

use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Opaque identifier of a family within a native font backend
///
/// Currently the only native backend is the [`fontdb`] database used by
/// [`SystemResolver`](crate::SystemResolver); custom resolvers produce
/// handle-less families.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FamilyHandle(fontdb::ID);

impl FamilyHandle {
    /// The backend identifier
    #[inline]
    pub fn id(self) -> fontdb::ID {
        self.0
    }
}

impl From<fontdb::ID> for FamilyHandle {
    fn from(id: fontdb::ID) -> Self {
        FamilyHandle(id)
    }
}

/// A named font family, independent of style
///
/// At most one instance exists per distinct requested name (the cache key is
/// case-sensitive even though typeface keys fold case). Instances live for
/// the life of the owning [`FontLibrary`](crate::FontLibrary) and are
/// immutable apart from the native handle list, which only ever grows.
#[derive(Debug)]
pub struct FontFamily {
    source_name: String,
    canonical_name: String,
    handles: Mutex<SmallVec<[FamilyHandle; 1]>>,
}

impl FontFamily {
    pub(crate) fn new(source_name: String, canonical_name: String) -> Self {
        FontFamily {
            source_name,
            canonical_name,
            handles: Mutex::new(SmallVec::new()),
        }
    }

    /// The family name as requested
    #[inline]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// The family name as reported by the backend which resolved it
    ///
    /// May differ from [`source_name`](Self::source_name) in case or
    /// canonical form.
    #[inline]
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// Attach a native backend handle
    ///
    /// Handles are additive: an already-attached handle is never replaced,
    /// and attaching the same handle twice is a no-op.
    pub fn attach_handle(&self, handle: FamilyHandle) {
        let mut handles = self.handles.lock().unwrap();
        if !handles.contains(&handle) {
            handles.push(handle);
        }
    }

    /// Native backend handles attached so far
    pub fn handles(&self) -> SmallVec<[FamilyHandle; 1]> {
        self.handles.lock().unwrap().clone()
    }
}

/// Families keyed by requested name
#[derive(Default)]
pub(crate) struct FamilyStore {
    families: HashMap<String, Arc<FontFamily>>,
}

impl FamilyStore {
    pub fn get(&self, source_name: &str) -> Option<Arc<FontFamily>> {
        self.families.get(source_name).cloned()
    }

    /// First insertion wins; an existing entry is returned unchanged.
    pub fn insert_if_absent(&mut self, family: Arc<FontFamily>) -> Arc<FontFamily> {
        self.families
            .entry(family.source_name().to_string())
            .or_insert(family)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }
}
