//! Conversion options.

use crate::pack::Rotation;

/// Options for a single RGBA conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Blackness threshold percent (1..=99). Pixels whose blended gray value
    /// falls at or below the resulting cutoff are printed black.
    pub black: u8,

    /// Rotation applied to the bitmap while packing.
    pub rotate: Rotation,

    /// Keep the full canvas instead of cropping to the dark bounding box.
    pub no_trim: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            black: 50,
            rotate: Rotation::None,
            no_trim: false,
        }
    }
}

impl ConvertOptions {
    /// Create options with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the blackness threshold percent.
    ///
    /// # Panics
    /// Panics if value is not in the 1..=99 range.
    pub fn with_black(mut self, val: u8) -> Self {
        assert!(
            (1..=99).contains(&val),
            "Blackness percent must be between 1 and 99, got {val}"
        );
        self.black = val;
        self
    }

    /// Builder: set the rotation.
    pub fn with_rotate(mut self, val: Rotation) -> Self {
        self.rotate = val;
        self
    }

    /// Builder: set the no-trim flag.
    pub fn with_no_trim(mut self, val: bool) -> Self {
        self.no_trim = val;
        self
    }
}
