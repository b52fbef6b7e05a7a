//! Typed identifiers.
//!
//! An id is the position of its owner in the coordinator's `Vec<Agent>` or
//! the world's `Vec<Cluster>`.  Both are assigned once, in order, and never
//! reused, so the plain index is the whole identity.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        /// Fails once the list outgrows the id's integer width.
        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// An agent's slot in the coordinator's agent list.  Dead agents keep
    /// their slot for the whole run.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a resource cluster in `World::clusters()`, in generation order.
    pub struct ClusterId(u32);
}
