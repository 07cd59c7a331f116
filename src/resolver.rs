// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The font resolver contract and the system-font implementation

use crate::attributes::{FontResolvingOptions, StyleSimulations};
use crate::family::FamilyHandle;
use crate::key::TypefaceKey;
use log::{debug, info, warn};

/// Produces font data for a family/style request
///
/// Implementations may consult a platform font database, an application
/// bundle, or any other byte source. Returning `None` makes the library
/// report [`ResolveError::NotFound`](crate::ResolveError::NotFound); nothing
/// is cached for a failed request, so the next request for the same key
/// invokes the resolver again.
///
/// The resolver is always invoked under the library's exclusive section, at
/// most once per typeface key until it succeeds. It may block on synchronous
/// I/O but must not call back into the library.
pub trait FontResolver: Send {
    /// Resolve a family/style request to font data
    ///
    /// `key` is the identity the result will be cached under; it is provided
    /// for logging and for resolvers that index their own data by key.
    fn resolve(
        &mut self,
        family_name: &str,
        options: &FontResolvingOptions,
        key: &TypefaceKey,
    ) -> Option<ResolverResult>;
}

/// A successful resolver answer
pub struct ResolverResult {
    /// The resolved font data and its provenance
    pub font: ResolvedFont,
    /// If set, forces the simulation value instead of letting the library
    /// derive one from the face's own style flags
    pub style_simulations: Option<StyleSimulations>,
}

impl ResolverResult {
    /// Wrap a [`ResolvedFont`] without forcing simulations
    pub fn new(font: ResolvedFont) -> Self {
        ResolverResult {
            font,
            style_simulations: None,
        }
    }

    /// Force a simulation value
    pub fn with_style_simulations(mut self, simulations: StyleSimulations) -> Self {
        self.style_simulations = Some(simulations);
        self
    }
}

/// Font data produced by a resolver
pub enum ResolvedFont {
    /// Resolved by a native backend, which also names the family it matched
    /// and hands over its own identifier for it
    Platform {
        /// Backend identifier for the matched family
        handle: FamilyHandle,
        /// Family name as the backend reports it
        family_name: String,
        /// The font program
        bytes: Vec<u8>,
        /// Face name as the backend reports it, if it knows one
        face_name: Option<String>,
    },
    /// Resolved by application code from raw bytes
    Custom {
        /// Family name the bytes are being supplied for
        family_name: String,
        /// The font program
        bytes: Vec<u8>,
        /// Face name, if the supplier knows one
        face_name: Option<String>,
    },
}

/// System-font resolver backed by a [`fontdb::Database`]
///
/// This is the platform-native resolution path: family and style are matched
/// by the database query, and the matched face's database identifier becomes
/// the [`FamilyHandle`] attached to the resulting
/// [`FontFamily`](crate::FontFamily).
pub struct SystemResolver {
    db: fontdb::Database,
}

impl SystemResolver {
    /// Construct over the fonts installed on the system
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        info!("Found {} fonts", db.len());
        SystemResolver { db }
    }

    /// Construct over a prepared database
    ///
    /// Useful for embedding applications that bundle their own fonts.
    pub fn with_database(db: fontdb::Database) -> Self {
        SystemResolver { db }
    }

    /// Add an in-memory font to the database
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        SystemResolver::new()
    }
}

impl FontResolver for SystemResolver {
    fn resolve(
        &mut self,
        family_name: &str,
        options: &FontResolvingOptions,
        key: &TypefaceKey,
    ) -> Option<ResolverResult> {
        let families = [fontdb::Family::Name(family_name)];
        let query = fontdb::Query {
            families: &families,
            weight: if options.is_bold {
                fontdb::Weight::BOLD
            } else {
                fontdb::Weight::NORMAL
            },
            stretch: fontdb::Stretch::Normal,
            style: if options.is_italic {
                fontdb::Style::Italic
            } else {
                fontdb::Style::Normal
            },
        };
        let id = self.db.query(&query)?;
        let info = self.db.face(id)?;
        if info.index != 0 {
            // Font collections are not content-addressable per face; a
            // non-zero index would alias every face in the file to the
            // first one.
            warn!("{key}: matched face {} of a collection; skipping", info.index);
            return None;
        }
        debug!("{key}: matched {}", info.post_script_name);

        let family = info
            .families
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| family_name.to_string());
        let face_name = Some(info.post_script_name.clone());
        let bytes = self.db.with_face_data(id, |data, _index| data.to_vec())?;

        Some(ResolverResult::new(ResolvedFont::Platform {
            handle: FamilyHandle::from(id),
            family_name: family,
            bytes,
            face_name,
        }))
    }
}
