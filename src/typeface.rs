// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Resolved typeface descriptors

use crate::attributes::{FontResolvingOptions, StyleSimulations};
use crate::family::FontFamily;
use crate::key::TypefaceKey;
use crate::source::FontSource;
use std::collections::HashMap;
use std::sync::Arc;

/// One concrete resolved face: the unit rendering code consumes
///
/// Combines a [`FontFamily`], a [`FontSource`] and the effective style and
/// simulation flags. Exactly one instance exists per distinct
/// [`TypefaceKey`]; the font source may be shared with other typefaces
/// (e.g. the same font file satisfying two simulated styles). Immutable,
/// cached for the life of the owning [`FontLibrary`](crate::FontLibrary).
pub struct GlyphTypeface {
    key: TypefaceKey,
    family: Arc<FontFamily>,
    source: Arc<FontSource>,
    is_bold: bool,
    is_italic: bool,
    simulations: StyleSimulations,
    style_name: String,
    display_name: String,
}

impl GlyphTypeface {
    pub(crate) fn new(
        key: TypefaceKey,
        family: Arc<FontFamily>,
        source: Arc<FontSource>,
        options: &FontResolvingOptions,
        simulations: StyleSimulations,
    ) -> Self {
        let style_name = subfamily_name(&source)
            .unwrap_or_else(|| synthesized_style_name(options.is_bold, options.is_italic).into());
        let display_name = if source.face_name().is_empty() {
            format!("{} {}", family.canonical_name(), style_name)
        } else {
            source.face_name().to_string()
        };
        GlyphTypeface {
            key,
            family,
            source,
            is_bold: options.is_bold,
            is_italic: options.is_italic,
            simulations,
            style_name,
            display_name,
        }
    }

    /// The identity key of this typeface
    #[inline]
    pub fn key(&self) -> &TypefaceKey {
        &self.key
    }

    /// The family this typeface belongs to
    #[inline]
    pub fn family(&self) -> &Arc<FontFamily> {
        &self.family
    }

    /// The canonical family name
    #[inline]
    pub fn family_name(&self) -> &str {
        self.family.canonical_name()
    }

    /// The style name, from the face's subfamily entry when present
    #[inline]
    pub fn style_name(&self) -> &str {
        &self.style_name
    }

    /// A human-readable name for the face
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether the bold weight bucket was requested
    #[inline]
    pub fn is_bold(&self) -> bool {
        self.is_bold
    }

    /// Whether the italic slant bucket was requested
    #[inline]
    pub fn is_italic(&self) -> bool {
        self.is_italic
    }

    /// Effective simulation flags
    ///
    /// Either the resolver-forced value or the derived difference between
    /// the requested style and what the resolved face supports.
    #[inline]
    pub fn style_simulations(&self) -> StyleSimulations {
        self.simulations
    }

    /// The font program backing this typeface
    #[inline]
    pub fn font_source(&self) -> &Arc<FontSource> {
        &self.source
    }

    /// The raw bytes of the backing font program
    #[inline]
    pub fn font_source_bytes(&self) -> &[u8] {
        self.source.bytes()
    }
}

fn subfamily_name(source: &FontSource) -> Option<String> {
    source
        .face()
        .names()
        .into_iter()
        .filter(|name| name.name_id == ttf_parser::name_id::SUBFAMILY && name.is_unicode())
        .find_map(|name| name.to_string())
}

fn synthesized_style_name(is_bold: bool, is_italic: bool) -> &'static str {
    match (is_bold, is_italic) {
        (false, false) => "Regular",
        (true, false) => "Bold",
        (false, true) => "Italic",
        (true, true) => "Bold Italic",
    }
}

/// Typefaces keyed by [`TypefaceKey`]
#[derive(Default)]
pub(crate) struct TypefaceStore {
    typefaces: HashMap<TypefaceKey, Arc<GlyphTypeface>>,
}

impl TypefaceStore {
    pub fn get(&self, key: &TypefaceKey) -> Option<Arc<GlyphTypeface>> {
        self.typefaces.get(key).cloned()
    }

    /// First insertion wins; an existing entry is returned unchanged.
    pub fn insert_if_absent(&mut self, typeface: Arc<GlyphTypeface>) -> Arc<GlyphTypeface> {
        self.typefaces
            .entry(typeface.key().clone())
            .or_insert(typeface)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.typefaces.len()
    }
}
