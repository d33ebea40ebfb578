use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable draw index assigned to a component when it is drawn.
///
/// The drawing surface assigns these once, in order of creation; the solver
/// never reassigns them, even when a component is duplicated across several
/// outlet paths. They are the join key between solver rows and the canvas.
/// `NonZeroU32` keeps `Option<DrawId>` the size of the id itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawId(NonZeroU32);

impl DrawId {
    /// Create a DrawId from a 0-based draw index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        // index+1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The draw index of the component drawn immediately after this one.
    ///
    /// Tee downstream-diameter lookup is tied to drawing order, not path
    /// order, so "the next component drawn" is a meaningful neighbor.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

impl fmt::Debug for DrawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DrawId({})", self.index())
    }
}

impl fmt::Display for DrawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Integer key linking a tee pair to the outlets they feed.
pub type BranchRef = u32;
