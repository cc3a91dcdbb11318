use super::*;
use crate::Lookup;
use petgraph::Direction::Outgoing;
use petgraph::graph::DiGraph;
use petgraph::graph::EdgeIndex;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// State of a max-plus automaton: an FSM state paired with a token index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateLabel {
    pub fsm: usize,
    pub token: usize,
}

impl StateLabel {
    pub fn new(fsm: usize, token: usize) -> Self {
        Self { fsm, token }
    }
}

/// Transition label: max-plus delay, input symbol, and reward.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardLabel {
    pub delay: f64,
    pub symbol: String,
    pub reward: f64,
}

impl RewardLabel {
    pub fn new(delay: f64, symbol: &str, reward: f64) -> Self {
        Self {
            delay,
            symbol: symbol.to_string(),
            reward,
        }
    }
}

/// Max-plus game automaton with rewards.
///
/// States live in a petgraph arena, so their [`NodeIndex`] handles stay
/// valid for the automaton's lifetime. Each state is assigned to one side
/// of the V0/V1 partition with [`add_v0`](Self::add_v0) or
/// [`add_v1`](Self::add_v1); unassigned states have no owner.
#[derive(Debug, Clone, Default)]
pub struct GameAutomaton {
    graph: DiGraph<StateLabel, RewardLabel>,
    owners: Lookup<NodeIndex, Player>,
}

impl GameAutomaton {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_state(&mut self, label: StateLabel) -> NodeIndex {
        self.graph.add_node(label)
    }
    pub fn add_edge(&mut self, src: NodeIndex, label: RewardLabel, dst: NodeIndex) -> EdgeIndex {
        self.graph.add_edge(src, dst, label)
    }
    pub fn add_v0(&mut self, state: NodeIndex) {
        self.assign(state, Player::V0);
    }
    pub fn add_v1(&mut self, state: NodeIndex) {
        self.assign(state, Player::V1);
    }
    /// Move `state` to `player`'s side of the partition.
    pub fn assign(&mut self, state: NodeIndex, player: Player) {
        self.owners.put(state, player);
    }
    pub fn state(&self, state: NodeIndex) -> Option<&StateLabel> {
        self.graph.node_weight(state)
    }
    pub fn label(&self, edge: EdgeIndex) -> Option<&RewardLabel> {
        self.graph.edge_weight(edge)
    }
    pub fn n_states(&self) -> usize {
        self.graph.node_count()
    }
    pub fn n_edges(&self) -> usize {
        self.graph.edge_count()
    }
}

impl GameGraph for GameAutomaton {
    type V = NodeIndex;
    type E = EdgeIndex;

    fn vertices(&self) -> Vec<Self::V> {
        self.graph.node_indices().collect()
    }
    fn owner(&self, vertex: Self::V) -> Option<Player> {
        self.owners.get(vertex).copied()
    }
    fn outgoing(&self, vertex: Self::V) -> Vec<(Self::E, Self::V)> {
        self.graph
            .edges_directed(vertex, Outgoing)
            .map(|e| (e.id(), e.target()))
            .collect()
    }
}

#[cfg(test)]
impl GameAutomaton {
    /// One FSM state, three tokens. s1 belongs to V0 and may move to s2 or
    /// s3; both of those belong to V1 and can only move back to s1.
    pub(crate) fn simple() -> (Self, [NodeIndex; 3]) {
        let mut game = Self::new();
        let s1 = game.add_state(StateLabel::new(0, 0));
        let s2 = game.add_state(StateLabel::new(0, 1));
        let s3 = game.add_state(StateLabel::new(0, 2));
        game.add_edge(s1, RewardLabel::new(3.0, "A", 1.0), s2);
        game.add_edge(s1, RewardLabel::new(3.0, "A", 1.0), s3);
        game.add_edge(s2, RewardLabel::new(1.0, "A", 1.0), s1);
        game.add_edge(s3, RewardLabel::new(7.0, "A", 1.0), s1);
        game.add_v0(s1);
        game.add_v1(s2);
        game.add_v1(s3);
        (game, [s1, s2, s3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition() {
        let (game, [s1, s2, s3]) = GameAutomaton::simple();
        assert_eq!(game.owner(s1), Some(Player::V0));
        assert_eq!(game.owner(s2), Some(Player::V1));
        assert_eq!(game.owner(s3), Some(Player::V1));
        assert_eq!(game.positions(Player::V0), vec![s1]);
        assert_eq!(game.positions(Player::V1), vec![s2, s3]);
    }

    #[test]
    fn outgoing_destinations() {
        let (game, [s1, s2, s3]) = GameAutomaton::simple();
        let mut targets = game.outgoing(s1).into_iter().map(|(_, v)| v).collect::<Vec<_>>();
        targets.sort();
        assert_eq!(targets, vec![s2, s3]);
        assert_eq!(game.outgoing(s2).len(), 1);
        assert_eq!(game.outgoing(s3)[0].1, s1);
    }

    #[test]
    fn labels() {
        let (game, [_, _, s3]) = GameAutomaton::simple();
        let (edge, _) = game.outgoing(s3)[0];
        assert_eq!(game.label(edge).map(|l| l.delay), Some(7.0));
        assert_eq!(game.state(s3), Some(&StateLabel::new(0, 2)));
        assert_eq!(game.n_states(), 3);
        assert_eq!(game.n_edges(), 4);
    }

    #[test]
    fn unassigned_has_no_owner() {
        let mut game = GameAutomaton::new();
        let s = game.add_state(StateLabel::new(1, 0));
        assert_eq!(game.owner(s), None);
        game.assign(s, Player::V1);
        game.add_v0(s);
        assert_eq!(game.owner(s), Some(Player::V0));
    }
}
