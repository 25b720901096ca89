use std::fmt::{Display, Formatter};

/// Edge weight type. Any sign is accepted.
pub type Weight = i64;

/// Answer to a widest path query.
///
/// Variants are ordered `Disconnected < Width(_) < Unbounded`, which makes this
/// type its own (max, min) semiring: `Disconnected` is the neutral element of
/// `max` and `Unbounded` the neutral element of `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bottleneck {
    /// No path connects the two nodes.
    Disconnected,
    /// The best achievable minimum edge weight over all connecting paths.
    Width(Weight),
    /// Both endpoints are the same node, so nothing constrains the capacity.
    Unbounded,
}

impl Bottleneck {
    /// Numeric code for [`Bottleneck::Disconnected`].
    pub const DISCONNECTED_CODE: i64 = -1;
    /// Numeric code for [`Bottleneck::Unbounded`].
    pub const UNBOUNDED_CODE: i64 = 1_000_000_000_000_000_000;

    /// Fixed numeric encoding used by reporting layers.
    /// Only unambiguous for weights in `0..UNBOUNDED_CODE`.
    pub fn encode(self) -> i64 {
        match self {
            Self::Disconnected => Self::DISCONNECTED_CODE,
            Self::Width(w) => w,
            Self::Unbounded => Self::UNBOUNDED_CODE,
        }
    }

    /// The finite width, if any.
    pub fn width(self) -> Option<Weight> {
        match self {
            Self::Width(w) => Some(w),
            Self::Disconnected | Self::Unbounded => None,
        }
    }

    /// False only for [`Bottleneck::Disconnected`].
    pub fn is_connected(self) -> bool {
        self != Self::Disconnected
    }
}

impl Display for Bottleneck {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "disconnected"),
            Self::Width(w) => write!(f, "{w}"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}
