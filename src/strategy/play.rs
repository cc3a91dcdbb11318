use super::*;
use crate::*;

/// The play induced by fixing both players' strategies.
///
/// With every move decided, a walk from any start vertex eventually revisits
/// a vertex and loops forever. The walk splits into the `prefix` leading up
/// to that vertex and the `cycle` repeated from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play<V> {
    prefix: Vec<V>,
    cycle: Vec<V>,
}

impl<V> Play<V>
where
    V: Handle,
{
    /// Walk from `start`, letting each vertex's owner move by its strategy.
    pub fn follow<G, E>(
        game: &G,
        s0: &StrategyVector<V, E>,
        s1: &StrategyVector<V, E>,
        start: V,
    ) -> Result<Self, StrategyError<V>>
    where
        G: GameGraph<V = V, E = E>,
        E: Handle,
    {
        let mut visited = IntLookup::<V>::default();
        let mut trail = Vec::new();
        let mut vertex = start;
        while !visited.exists(vertex) {
            visited.put(vertex, trail.len() as i32);
            trail.push(vertex);
            let owner = game.owner(vertex).ok_or(StrategyError::Unowned(vertex))?;
            vertex = [s0, s1]
                .into_iter()
                .find(|s| s.player() == owner)
                .and_then(|s| s.get_successor(vertex))
                .ok_or(StrategyError::Undefined(vertex))?;
        }
        let cycle = trail.split_off(visited.get(vertex) as usize);
        log::trace!("play from {:?}: {} + {}", start, trail.len(), cycle.len());
        Ok(Self {
            prefix: trail,
            cycle,
        })
    }

    pub fn prefix(&self) -> &[V] {
        &self.prefix
    }
    pub fn cycle(&self) -> &[V] {
        &self.cycle
    }
}
