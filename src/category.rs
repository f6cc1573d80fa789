use core::fmt;

/// Capability tier of a range.
///
/// The traversal tiers form a chain where each tier can do everything the
/// previous one can:
///
/// | Tier            | Adds                                    |
/// |-----------------|-----------------------------------------|
/// | `SinglePass`    | read the front, move forward once       |
/// | `Forward`       | positions can be revisited (multi-pass) |
/// | `Bidirectional` | positions can move backward             |
/// | `RandomAccess`  | positions move by any offset in O(1)    |
///
/// `Output` stands apart: an output range accepts values but cannot be traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RangeCategory {
    /// Write-only sink.
    Output,
    /// Single-pass traversal.
    SinglePass,
    /// Multi-pass forward traversal.
    Forward,
    /// Forward and backward traversal.
    Bidirectional,
    /// Constant-time movement by any offset.
    RandomAccess,
}

impl RangeCategory {
    /// Returns `true` if a range of this category can be used where `required` is expected.
    ///
    /// ```
    /// use position_range::RangeCategory;
    ///
    /// assert!(RangeCategory::RandomAccess.satisfies(RangeCategory::Forward));
    /// assert!(!RangeCategory::Forward.satisfies(RangeCategory::Bidirectional));
    /// assert!(!RangeCategory::RandomAccess.satisfies(RangeCategory::Output));
    /// ```
    #[inline]
    pub const fn satisfies(self, required: RangeCategory) -> bool {
        match (self, required) {
            (RangeCategory::Output, RangeCategory::Output) => true,
            (RangeCategory::Output, _) | (_, RangeCategory::Output) => false,
            _ => self as u8 >= required as u8,
        }
    }

    /// The weaker of two traversal tiers.
    ///
    /// Combining anything with `Output` yields `Output`.
    #[inline]
    pub const fn common(self, other: RangeCategory) -> RangeCategory {
        if (self as u8) <= (other as u8) {
            self
        } else {
            other
        }
    }

    /// Returns `true` for the traversal tiers.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, RangeCategory::Output)
    }
}

impl fmt::Display for RangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RangeCategory::Output => "output",
            RangeCategory::SinglePass => "single-pass",
            RangeCategory::Forward => "forward",
            RangeCategory::Bidirectional => "bidirectional",
            RangeCategory::RandomAccess => "random-access",
        };
        f.write_str(name)
    }
}
