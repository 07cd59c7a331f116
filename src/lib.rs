// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font identity, resolution and caching for the vellum PDF drawing library
//!
//! Drawing code requests a font as (family name, style); rendering and PDF
//! emission need something much more concrete: a particular font program,
//! parsed, with its style and simulation flags settled. This crate manages
//! the identity layer in between:
//!
//! -   [`FontFamily`]: a named family, independent of style; one instance
//!     per requested name.
//! -   [`GlyphTypeface`]: one resolved variant (family + weight + slant +
//!     simulation); one instance per [`TypefaceKey`]. This is the unit
//!     rendering consumes.
//! -   [`FontSource`]: the raw bytes of one font program plus its parsed
//!     face header, content-addressed so byte-identical data is stored once
//!     no matter how many variants or resolution paths reach it.
//!
//! All three caches live in a [`FontLibrary`], which coordinates resolution
//! through a pluggable [`FontResolver`] (the fontdb-backed
//! [`SystemResolver`] by default) and guarantees the identity invariants
//! under concurrent use. Typical use:
//!
//! ```no_run
//! use vellum_fonts::{FontLibrary, FontResolvingOptions};
//!
//! let library = FontLibrary::default();
//! let typeface = library.resolve("Helvetica", FontResolvingOptions::new(true, false))?;
//! assert!(typeface.is_bold());
//! # Ok::<(), vellum_fonts::ResolveError>(())
//! ```
//!
//! When the resolved face does not itself cover the requested style (a bold
//! request satisfied by a regular face, say), the typeface carries
//! [`StyleSimulations`] flags telling the renderer to approximate it.
//!
//! Out of scope here, by design: glyph metrics and shaping, rasterization,
//! and writing PDF font dictionaries. Those consume the descriptors this
//! crate produces.

mod attributes;
pub mod checksum;
mod family;
mod key;
mod library;
mod resolver;
mod source;
mod typeface;

pub use attributes::{FontResolvingOptions, FontSlant, FontStretch, StyleSimulations, WeightClass};
pub use family::{FamilyHandle, FontFamily};
pub use key::TypefaceKey;
pub use library::{FontLibrary, ResolveError};
pub use resolver::{FontResolver, ResolvedFont, ResolverResult, SystemResolver};
pub use source::FontSource;
pub use typeface::GlyphTypeface;
