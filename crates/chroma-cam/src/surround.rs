//! Surround classification and its induction factors.

// ============================================================================
// Surround
// ============================================================================

/// Viewing surround category.
///
/// Selects the induction factors (F, c, Nc) used when deriving
/// [`ViewingConditions`](crate::ViewingConditions). Intermediate surrounds
/// are not interpolated; pick the nearest category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surround {
    /// No view of the surround field (cinema).
    Dark,
    /// Surround luminance well below the stimulus (dim room).
    Dim,
    /// Surround luminance comparable to the stimulus (office, daylight).
    #[default]
    Average,
}

impl Surround {
    /// Degree-of-adaptation factor F.
    #[inline]
    pub const fn f(self) -> f32 {
        match self {
            Self::Dark => 0.8,
            Self::Dim => 0.9,
            Self::Average => 1.0,
        }
    }

    /// Impact-of-surround exponent c.
    #[inline]
    pub const fn c(self) -> f32 {
        match self {
            Self::Dark => 0.525,
            Self::Dim => 0.59,
            Self::Average => 0.69,
        }
    }

    /// Chromatic induction factor Nc.
    #[inline]
    pub const fn nc(self) -> f32 {
        match self {
            Self::Dark => 0.8,
            Self::Dim => 0.9,
            Self::Average => 1.0,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_ordered() {
        // Factors grow monotonically from dark to average viewing.
        assert!(Surround::Dark.f() < Surround::Dim.f());
        assert!(Surround::Dim.f() < Surround::Average.f());
        assert!(Surround::Dark.c() < Surround::Dim.c());
        assert!(Surround::Dim.c() < Surround::Average.c());
        assert!(Surround::Dark.nc() < Surround::Dim.nc());
        assert!(Surround::Dim.nc() < Surround::Average.nc());
    }

    #[test]
    fn test_default_is_average() {
        assert_eq!(Surround::default(), Surround::Average);
        assert_eq!(Surround::default().c(), 0.69);
    }
}
