use super::*;
use crate::Handle;

/// A two-player game on a directed graph.
///
/// Every vertex is owned by at most one [`Player`]; the owner picks which
/// outgoing edge is taken. Vertex and edge handles must be stable for the
/// lifetime of the graph, since strategy vectors key on them.
///
/// # Requirements
///
/// - `vertices` enumerates every vertex in a deterministic order
/// - `outgoing` lists `(edge, destination)` for each outgoing edge
pub trait GameGraph {
    /// Vertex handle.
    type V: Handle;
    /// Edge handle.
    type E: Handle;

    /// All vertices, in a deterministic order.
    fn vertices(&self) -> Vec<Self::V>;
    /// Which side moves at this vertex, if any.
    fn owner(&self, vertex: Self::V) -> Option<Player>;
    /// Outgoing edges with their destinations.
    fn outgoing(&self, vertex: Self::V) -> Vec<(Self::E, Self::V)>;

    fn controls(&self, player: Player, vertex: Self::V) -> bool {
        self.owner(vertex) == Some(player)
    }
    /// Vertices owned by `player`, in `vertices` order.
    fn positions(&self, player: Player) -> Vec<Self::V> {
        self.vertices()
            .into_iter()
            .filter(|v| self.controls(player, *v))
            .collect()
    }
}
