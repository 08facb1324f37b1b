use crate::math::{Real, Vector};

/// The fully resolved dimensions of a box.
///
/// All three dimensions are finite and non-negative once resolved through
/// [`Size::resolve`] from a validated default.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Size {
    /// Extent along the x axis.
    pub width: Real,
    /// Extent along the y axis.
    pub height: Real,
    /// Extent along the z axis.
    pub depth: Real,
}

impl Default for Size {
    fn default() -> Self {
        Self::new(10.0, 10.0, 10.0)
    }
}

impl Size {
    /// Creates a new size.
    #[inline]
    pub fn new(width: Real, height: Real, depth: Real) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// A size with the same extent along every axis.
    #[inline]
    pub fn cube(extent: Real) -> Self {
        Self::new(extent, extent, extent)
    }

    /// The half-extents of a box of this size.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        Vector::new(self.width, self.height, self.depth) * 0.5
    }

    /// Returns the name and value of the first dimension that is negative or not finite.
    pub fn first_invalid_dimension(&self) -> Option<(&'static str, Real)> {
        [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ]
        .into_iter()
        .find(|(_, value)| !is_valid_extent(*value))
    }

    /// Resolves the size of a body, using `self` as the default.
    ///
    /// Each dimension is taken from `declared` when present, and from `self` otherwise.
    /// Declared dimensions that are negative or not finite count as absent.
    pub fn resolve(&self, declared: &DeclaredSize) -> Size {
        Size {
            width: pick(declared.width, self.width, "width"),
            height: pick(declared.height, self.height, "height"),
            depth: pick(declared.depth, self.depth, "depth"),
        }
    }
}

/// The dimensions a body declares in its own data, if any.
///
/// Missing dimensions fall back to the configured default size.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DeclaredSize {
    /// Declared extent along the x axis.
    pub width: Option<Real>,
    /// Declared extent along the y axis.
    pub height: Option<Real>,
    /// Declared extent along the z axis.
    pub depth: Option<Real>,
}

impl DeclaredSize {
    /// A body that declares no dimension at all.
    pub const NONE: Self = Self {
        width: None,
        height: None,
        depth: None,
    };

    /// A body that only declares its footprint on the layout plane.
    pub fn planar(width: Real, height: Real) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            depth: None,
        }
    }
}

#[inline]
fn is_valid_extent(value: Real) -> bool {
    value.is_finite() && value >= 0.0
}

fn pick(declared: Option<Real>, default: Real, dimension: &str) -> Real {
    match declared {
        Some(value) if is_valid_extent(value) => value,
        Some(value) => {
            log::debug!("Ignoring invalid declared {dimension} {value}, using {default}.");
            default
        }
        None => default,
    }
}
