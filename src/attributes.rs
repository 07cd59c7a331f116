// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Style axes and resolution request options

use bitflags::bitflags;
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Synthetic style approximation flags
    ///
    /// When a requested face is not available as a real font program, the
    /// renderer may approximate it: emboldening strokes for a missing bold
    /// face, slanting glyphs for a missing italic one. An empty value means
    /// the resolved face covers the requested style on its own.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct StyleSimulations: u8 {
        /// Synthetic emboldening
        const BOLD = 1 << 0;
        /// Synthetic slanting
        const ITALIC = 1 << 1;
    }
}

/// Visual slope of a face
///
/// Oblique faces are not distinguished from italic ones by this engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontSlant {
    /// An upright or "roman" slope
    #[default]
    Normal,
    /// A slanted, generally cursive form
    Italic,
}

impl fmt::Display for FontSlant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            FontSlant::Normal => "normal",
            FontSlant::Italic => "italic",
        };
        write!(f, "{keyword}")
    }
}

/// Weight bucket of a face
///
/// Only two buckets are recognized; arbitrary numeric weights are not
/// supported by this engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeightClass {
    /// Weight value of 400
    #[default]
    Normal,
    /// Weight value of 700
    Bold,
}

impl WeightClass {
    /// The numeric weight value of this bucket
    pub fn value(self) -> u16 {
        match self {
            WeightClass::Normal => 400,
            WeightClass::Bold => 700,
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            WeightClass::Normal => "normal",
            WeightClass::Bold => "bold",
        };
        write!(f, "{keyword}")
    }
}

/// Width bucket of a face
///
/// A single bucket is supported; condensed and expanded faces resolve as
/// distinct families or not at all.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontStretch {
    /// Width that is 100% of normal
    #[default]
    Normal,
}

impl FontStretch {
    /// The OpenType `usWidthClass` value of this bucket
    pub fn class(self) -> u8 {
        5
    }
}

impl fmt::Display for FontStretch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "normal")
    }
}

/// Parameters of a font resolution request
///
/// A request names a family elsewhere; these options select the style axes
/// recognized by the engine and may force a specific simulation value
/// instead of letting [`FontLibrary::resolve`] derive one from the face the
/// resolver produced.
///
/// [`FontLibrary::resolve`]: crate::FontLibrary::resolve
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontResolvingOptions {
    /// Select the bold weight bucket
    pub is_bold: bool,
    /// Select the italic slant bucket
    pub is_italic: bool,
    /// If set, force this simulation value
    pub override_style_simulations: Option<StyleSimulations>,
}

impl FontResolvingOptions {
    /// Construct from style flags, without a simulation override
    pub fn new(is_bold: bool, is_italic: bool) -> Self {
        FontResolvingOptions {
            is_bold,
            is_italic,
            override_style_simulations: None,
        }
    }

    /// Set a forced simulation value
    pub fn with_style_simulations(mut self, simulations: StyleSimulations) -> Self {
        self.override_style_simulations = Some(simulations);
        self
    }

    /// The slant bucket selected by these options
    #[inline]
    pub fn slant(&self) -> FontSlant {
        if self.is_italic {
            FontSlant::Italic
        } else {
            FontSlant::Normal
        }
    }

    /// The weight bucket selected by these options
    #[inline]
    pub fn weight_class(&self) -> WeightClass {
        if self.is_bold {
            WeightClass::Bold
        } else {
            WeightClass::Normal
        }
    }
}
