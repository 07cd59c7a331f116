// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font library

use crate::attributes::{FontResolvingOptions, StyleSimulations};
use crate::checksum::checksum;
use crate::family::{FamilyStore, FontFamily};
use crate::key::TypefaceKey;
use crate::resolver::{FontResolver, ResolvedFont, SystemResolver};
use crate::source::{FontSource, SourceStore};
use crate::typeface::{GlyphTypeface, TypefaceStore};
use log::{debug, trace};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Font resolution errors
///
/// Both variants are local to one [`FontLibrary::resolve`] call: nothing is
/// cached for a failed resolution and the stores are left exactly as they
/// were, so a later call for the same key retries from scratch.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// No backend and no custom resolver produced font data for the request
    #[error("no font found for family '{family_name}'")]
    NotFound {
        /// The family name as requested
        family_name: String,
    },
    /// The resolver produced bytes the face parser rejects
    #[error("invalid font data")]
    InvalidFontData(#[from] ttf_parser::FaceParsingError),
}

struct Shared {
    resolver: Box<dyn FontResolver>,
    families: FamilyStore,
    sources: SourceStore,
    typefaces: TypefaceStore,
}

/// Library of resolved fonts
///
/// Owns the family, source and typeface stores plus the resolver, all
/// guarded by one exclusive section. The stores only ever grow; descriptors
/// live as long as the library. Construct one per document engine and pass
/// it by reference; there is deliberately no global instance, so tests and
/// embedders get isolated caches.
///
/// Thread-safety: any number of threads may call [`resolve`] concurrently.
/// A cache miss holds the exclusive section for the whole resolution (key
/// computation through final insertion), so the resolver and parser run at
/// most once per key no matter how many threads race; the losers block and
/// then take the fast path.
///
/// [`resolve`]: FontLibrary::resolve
pub struct FontLibrary {
    shared: Mutex<Shared>,
}

impl FontLibrary {
    /// Construct with the given resolver
    pub fn new<R: FontResolver + 'static>(resolver: R) -> Self {
        Self::new_boxed(Box::new(resolver))
    }

    /// Construct with a boxed resolver
    pub fn new_boxed(resolver: Box<dyn FontResolver>) -> Self {
        FontLibrary {
            shared: Mutex::new(Shared {
                resolver,
                families: FamilyStore::default(),
                sources: SourceStore::default(),
                typefaces: TypefaceStore::default(),
            }),
        }
    }

    /// Resolve a family/style request to a typeface
    ///
    /// Returns the unique [`GlyphTypeface`] for the request's
    /// [`TypefaceKey`], resolving and caching it first if this is the first
    /// request for that key. Identical requests always return the same
    /// instance (`Arc` identity).
    pub fn resolve(
        &self,
        family_name: &str,
        options: FontResolvingOptions,
    ) -> Result<Arc<GlyphTypeface>, ResolveError> {
        let key = TypefaceKey::new(family_name, &options);
        let mut shared = self.shared.lock().unwrap();

        if let Some(typeface) = shared.typefaces.get(&key) {
            trace!("resolve: hit {key}");
            return Ok(typeface);
        }
        debug!("resolve: miss {key}");

        let result = shared
            .resolver
            .resolve(family_name, &options, &key)
            .ok_or_else(|| ResolveError::NotFound {
                family_name: family_name.to_string(),
            })?;
        let (handle, canonical_name, bytes, face_name) = match result.font {
            ResolvedFont::Platform {
                handle,
                family_name,
                bytes,
                face_name,
            } => (Some(handle), family_name, bytes, face_name),
            ResolvedFont::Custom {
                family_name,
                bytes,
                face_name,
            } => (None, family_name, bytes, face_name),
        };

        // Parse before touching any store, so a failure leaves all three
        // exactly as they were.
        let key_sum = checksum(&bytes);
        let source = match shared.sources.get(key_sum, &bytes) {
            Some(existing) => {
                debug!("resolve: {key} shares font data {key_sum:#018x}");
                existing
            }
            None => Arc::new(FontSource::new(bytes.into(), key_sum, face_name)?),
        };

        let family = match shared.families.get(family_name) {
            Some(family) => family,
            None => shared.families.insert_if_absent(Arc::new(FontFamily::new(
                family_name.to_string(),
                canonical_name,
            ))),
        };
        if let Some(handle) = handle {
            family.attach_handle(handle);
        }

        let source = shared.sources.insert_if_absent(source);
        shared.sources.cache_under_additional_key(key.clone(), &source);

        let simulations = result.style_simulations.unwrap_or_else(|| {
            let face = source.face();
            let mut simulations = StyleSimulations::empty();
            if options.is_bold && !face.is_bold() {
                simulations |= StyleSimulations::BOLD;
            }
            if options.is_italic && !face.is_italic() {
                simulations |= StyleSimulations::ITALIC;
            }
            simulations
        });

        let typeface = GlyphTypeface::new(key, family, source, &options, simulations);
        Ok(shared.typefaces.insert_if_absent(Arc::new(typeface)))
    }

    /// The font source cached under a typeface key, if any
    ///
    /// Populated as a side effect of resolution; lets PDF emission reach
    /// font bytes by key without re-resolving.
    pub fn source_for_typeface_key(&self, key: &TypefaceKey) -> Option<Arc<FontSource>> {
        self.shared.lock().unwrap().sources.get_by_typeface_key(key)
    }

    /// Number of cached font families
    pub fn num_families(&self) -> usize {
        self.shared.lock().unwrap().families.len()
    }

    /// Number of cached font programs
    pub fn num_sources(&self) -> usize {
        self.shared.lock().unwrap().sources.len()
    }

    /// Number of cached typefaces
    pub fn num_typefaces(&self) -> usize {
        self.shared.lock().unwrap().typefaces.len()
    }
}

impl Default for FontLibrary {
    /// A library resolving against the system's installed fonts
    fn default() -> Self {
        FontLibrary::new(SystemResolver::new())
    }
}
