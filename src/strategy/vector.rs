use super::*;
use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// The move recorded for one controlled vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choice<V, E> {
    pub edge: E,
    pub successor: V,
}

/// Positional strategy for one player of a game graph.
///
/// Holds exactly one [`Choice`] per vertex the player controls once
/// initialized, and none for the opponent's vertices. Entries can be
/// replaced one at a time with [`set_successor`](Self::set_successor),
/// which is how an improvement step would update the strategy.
///
/// # Lifecycle
///
/// - Uninitialized: no entries, [`is_initialized`](Self::is_initialized) is false
/// - Initialized: after [`initialize_random_strategy`](Self::initialize_random_strategy)
///   or [`initialize_seeded`](Self::initialize_seeded) succeeds, or once
///   [`set_successor`](Self::set_successor) has covered every controlled vertex
///
/// Re-initializing replaces every entry. A failed initialization leaves
/// the previous entries untouched.
#[derive(Debug, Clone)]
pub struct StrategyVector<V, E>
where
    V: Handle,
    E: Handle,
{
    player: Player,
    choices: Lookup<V, Choice<V, E>>,
    initialized: bool,
}

impl<V, E> Default for StrategyVector<V, E>
where
    V: Handle,
    E: Handle,
{
    fn default() -> Self {
        Self::new(Player::V0)
    }
}

impl<V, E> StrategyVector<V, E>
where
    V: Handle,
    E: Handle,
{
    pub fn new(player: Player) -> Self {
        Self {
            player,
            choices: Lookup::default(),
            initialized: false,
        }
    }
    pub fn player(&self) -> Player {
        self.player
    }
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
    pub fn len(&self) -> usize {
        self.choices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Pick a uniformly random outgoing edge for every controlled vertex.
    ///
    /// Draws from a generator seeded by [`STRATEGY_SEED`] when that variable
    /// holds a `u64`, otherwise from the thread-local generator.
    pub fn initialize_random_strategy<G>(&mut self, game: &G) -> Result<(), StrategyError<V>>
    where
        G: GameGraph<V = V, E = E>,
    {
        self.initialize_from(game, seed())
    }

    fn initialize_from<G>(&mut self, game: &G, seed: Option<u64>) -> Result<(), StrategyError<V>>
    where
        G: GameGraph<V = V, E = E>,
    {
        match seed {
            Some(seed) => self.initialize_seeded(game, &mut SmallRng::seed_from_u64(seed)),
            None => self.initialize_seeded(game, &mut rand::rng()),
        }
    }

    /// Same as [`initialize_random_strategy`](Self::initialize_random_strategy)
    /// with a caller-supplied generator.
    pub fn initialize_seeded<G, R>(&mut self, game: &G, rng: &mut R) -> Result<(), StrategyError<V>>
    where
        G: GameGraph<V = V, E = E>,
        R: Rng + ?Sized,
    {
        let mut choices = Lookup::default();
        for vertex in game.positions(self.player) {
            let ref edges = game.outgoing(vertex);
            let (edge, successor) = edges
                .choose(rng)
                .copied()
                .ok_or(StrategyError::NoStrategy(vertex))?;
            choices.put(vertex, Choice { edge, successor });
        }
        log::debug!(
            "initialized {} strategy over {} vertices",
            self.player,
            choices.len()
        );
        self.choices = choices;
        self.initialized = true;
        Ok(())
    }

    /// Chosen successor, if this vertex has a recorded choice.
    pub fn get_successor(&self, vertex: V) -> Option<V> {
        self.choices.get(vertex).map(|c| c.successor)
    }
    /// Chosen edge, if this vertex has a recorded choice.
    pub fn get_edge(&self, vertex: V) -> Option<E> {
        self.choices.get(vertex).map(|c| c.edge)
    }
    pub fn choice(&self, vertex: V) -> Option<Choice<V, E>> {
        self.choices.get(vertex).copied()
    }

    /// Replace the choice at one controlled vertex, leaving others alone.
    /// The edge must be one of the vertex's outgoing edges in `game`.
    /// Once every controlled vertex has a choice the vector counts as
    /// initialized, however the choices got there.
    pub fn set_successor<G>(&mut self, game: &G, vertex: V, edge: E) -> Result<(), StrategyError<V>>
    where
        G: GameGraph<V = V, E = E>,
    {
        if !game.controls(self.player, vertex) {
            return Err(StrategyError::NotControlled(vertex));
        }
        let successor = game
            .outgoing(vertex)
            .into_iter()
            .find(|(e, _)| *e == edge)
            .map(|(_, v)| v)
            .ok_or(StrategyError::NotAnEdge(vertex))?;
        log::trace!("{} now moves {:?} -> {:?}", self.player, vertex, successor);
        self.choices.put(vertex, Choice { edge, successor });
        if !self.initialized {
            self.initialized = game
                .positions(self.player)
                .into_iter()
                .all(|v| self.choices.exists(v));
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (V, Choice<V, E>)> + '_ {
        self.choices.iter().map(|(v, c)| (v, *c))
    }
}

/// Seed from [`STRATEGY_SEED`], if set to a `u64`.
fn seed() -> Option<u64> {
    std::env::var(STRATEGY_SEED)
        .ok()
        .as_deref()
        .and_then(parse_seed)
}

fn parse_seed(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}
