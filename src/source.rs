// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Content-addressed storage of font data

use crate::key::TypefaceKey;
use log::{debug, warn};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;
use ttf_parser::Face;

pub(crate) unsafe fn extend_lifetime<'b, T: ?Sized>(r: &'b T) -> &'static T {
    std::mem::transmute::<&'b T, &'static T>(r)
}

/// The raw bytes of one physical font program plus its parsed face header
///
/// Exactly one instance exists per distinct byte sequence; every
/// [`GlyphTypeface`](crate::GlyphTypeface) using the same font file shares
/// it by reference. Instances are immutable and live for the life of the
/// owning [`FontLibrary`](crate::FontLibrary).
pub struct FontSource {
    bytes: Arc<[u8]>,
    checksum: u64,
    face_name: String,
    face: Face<'static>,
}

impl FontSource {
    /// Parse `bytes` and construct
    ///
    /// Construction is the only fallible step on the way to a source-store
    /// entry; a parse failure therefore inserts nothing anywhere.
    pub(crate) fn new(
        bytes: Arc<[u8]>,
        checksum: u64,
        resolver_face_name: Option<String>,
    ) -> Result<Self, ttf_parser::FaceParsingError> {
        // Safety: `face` borrows the heap allocation owned by `bytes`, which
        // lives exactly as long as this FontSource and is never mutated.
        // `face` is only handed out re-narrowed to the lifetime of `&self`.
        let data = unsafe { extend_lifetime(&bytes[..]) };
        let face = Face::parse(data, 0)?;
        let face_name = full_font_name(&face)
            .or(resolver_face_name)
            .unwrap_or_default();
        Ok(FontSource {
            bytes,
            checksum,
            face_name,
            face,
        })
    }

    /// The font program, byte for byte
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The content fingerprint of [`bytes`](Self::bytes)
    ///
    /// Computed by [`checksum`](crate::checksum::checksum); stable for the
    /// life of the instance.
    #[inline]
    pub fn checksum(&self) -> u64 {
        self.checksum
    }

    /// The full font name from the parsed face
    ///
    /// Falls back to the resolver-reported name, or `""` if neither names
    /// the face.
    #[inline]
    pub fn face_name(&self) -> &str {
        &self.face_name
    }

    /// Access the parsed face header
    #[inline]
    pub fn face(&self) -> &Face<'_> {
        &self.face
    }
}

fn full_font_name(face: &Face) -> Option<String> {
    face.names()
        .into_iter()
        .filter(|name| name.name_id == ttf_parser::name_id::FULL_NAME && name.is_unicode())
        .find_map(|name| name.to_string())
}

/// Font sources keyed by content fingerprint
///
/// Fingerprint matches are re-verified against the actual bytes; two
/// genuinely different byte sequences with equal checksums coexist in the
/// same bucket rather than merging or displacing one another. A secondary
/// index maps typeface keys to the source backing them, so later resolution
/// paths and PDF emission can reach the bytes without re-resolving.
#[derive(Default)]
pub(crate) struct SourceStore {
    by_checksum: HashMap<u64, SmallVec<[Arc<FontSource>; 1]>>,
    by_typeface: HashMap<TypefaceKey, Arc<FontSource>>,
}

impl SourceStore {
    /// Look up by fingerprint, verifying content equality
    pub fn get(&self, checksum: u64, bytes: &[u8]) -> Option<Arc<FontSource>> {
        let bucket = self.by_checksum.get(&checksum)?;
        if bucket.iter().any(|s| s.bytes() != bytes) {
            warn!("font source checksum collision under {checksum:#018x}");
        }
        bucket.iter().find(|s| s.bytes() == bytes).cloned()
    }

    /// First insertion wins; an existing byte-identical entry is returned.
    pub fn insert_if_absent(&mut self, source: Arc<FontSource>) -> Arc<FontSource> {
        let bucket = self.by_checksum.entry(source.checksum()).or_default();
        if let Some(existing) = bucket.iter().find(|s| s.bytes() == source.bytes()) {
            return existing.clone();
        }
        if !bucket.is_empty() {
            debug!(
                "storing distinct font data under colliding checksum {:#018x}",
                source.checksum()
            );
        }
        bucket.push(source.clone());
        source
    }

    /// Link a typeface key to an existing source
    ///
    /// Used when a resolution path discovers it needs bytes already cached
    /// under a different typeface key; the key maps to the shared entry
    /// without duplicating storage.
    pub fn cache_under_additional_key(&mut self, key: TypefaceKey, source: &Arc<FontSource>) {
        self.by_typeface.entry(key).or_insert_with(|| source.clone());
    }

    pub fn get_by_typeface_key(&self, key: &TypefaceKey) -> Option<Arc<FontSource>> {
        self.by_typeface.get(key).cloned()
    }

    /// Number of distinct font programs stored
    pub fn len(&self) -> usize {
        self.by_checksum.values().map(|bucket| bucket.len()).sum()
    }
}
