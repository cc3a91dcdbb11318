use std::fmt::Debug;

/// Errors raised while building or following a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyError<V> {
    /// A controlled vertex has no outgoing edge to choose from.
    NoStrategy(V),
    /// The vertex belongs to the other player, or to no one.
    NotControlled(V),
    /// The edge does not leave the vertex.
    NotAnEdge(V),
    /// No choice has been recorded for this vertex yet.
    Undefined(V),
    /// The vertex is on neither side of the partition.
    Unowned(V),
}

impl<V> std::fmt::Display for StrategyError<V>
where
    V: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoStrategy(v) => write!(f, "no strategy possible: {:?} has no outgoing edges", v),
            Self::NotControlled(v) => write!(f, "vertex not controlled by this strategy: {:?}", v),
            Self::NotAnEdge(v) => write!(f, "edge does not leave vertex: {:?}", v),
            Self::Undefined(v) => write!(f, "no successor chosen for vertex: {:?}", v),
            Self::Unowned(v) => write!(f, "vertex has no owner: {:?}", v),
        }
    }
}

impl<V> std::error::Error for StrategyError<V> where V: Debug {}
