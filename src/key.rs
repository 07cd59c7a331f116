// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Typeface identity keys
//!
//! A [`TypefaceKey`] identifies one resolvable font variant: family plus the
//! recognized style axes plus an optional simulation override. Two requests
//! are the same variant exactly when their keys compare equal; the derived
//! [`Hash`]/[`Eq`] on the structured value is the cache-hit test used by the
//! typeface store, not string comparison. A string rendition exists for logs
//! and external interfaces via [`TypefaceKey::encode`].

use crate::attributes::{FontResolvingOptions, FontSlant, FontStretch, StyleSimulations, WeightClass};
use core::fmt;

const KEY_PREFIX: &str = "tk:";

/// Identity of one resolvable font variant
///
/// Family names are folded to lower case on construction, so two requests
/// differing only in family-name case produce equal keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypefaceKey {
    family: String,
    slant: FontSlant,
    weight: WeightClass,
    stretch: FontStretch,
    simulations: Option<StyleSimulations>,
}

impl TypefaceKey {
    /// Build the key for a resolution request
    pub fn new(family_name: &str, options: &FontResolvingOptions) -> Self {
        TypefaceKey {
            family: family_name.to_lowercase(),
            slant: options.slant(),
            weight: options.weight_class(),
            stretch: FontStretch::Normal,
            simulations: options.override_style_simulations,
        }
    }

    /// The lower-cased family name
    #[inline]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The slant bucket
    #[inline]
    pub fn slant(&self) -> FontSlant {
        self.slant
    }

    /// The weight bucket
    #[inline]
    pub fn weight(&self) -> WeightClass {
        self.weight
    }

    /// The forced simulation value, if the request carried one
    #[inline]
    pub fn simulations(&self) -> Option<StyleSimulations> {
        self.simulations
    }

    /// Render the key as a string
    ///
    /// The encoding is stable and injective over the recognized axis domain:
    /// `tk:` + family + `/i`|`/n` + `/700`|`/400` + `/5`, followed by a
    /// simulation suffix only when an override is present (`|b±/i±`).
    pub fn encode(&self) -> String {
        let mut key = String::with_capacity(KEY_PREFIX.len() + self.family.len() + 14);
        key.push_str(KEY_PREFIX);
        key.push_str(&self.family);
        key.push_str(match self.slant {
            FontSlant::Italic => "/i",
            FontSlant::Normal => "/n",
        });
        key.push_str(match self.weight {
            WeightClass::Bold => "/700",
            WeightClass::Normal => "/400",
        });
        debug_assert_eq!(self.stretch.class(), 5);
        key.push_str("/5");
        if let Some(simulations) = self.simulations {
            let bold = simulations.contains(StyleSimulations::BOLD);
            let italic = simulations.contains(StyleSimulations::ITALIC);
            key.push_str(match (bold, italic) {
                (false, false) => "|b-/i-",
                (true, false) => "|b+/i-",
                (false, true) => "|b-/i+",
                (true, true) => "|b+/i+",
            });
        }
        key
    }
}

impl fmt::Display for TypefaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
