//! The Wizards trick-taking environment.
//!
//! One learning agent at seat 0 plays against scripted seats. Each `step`
//! consumes the agent's play and then runs the table forward until the agent
//! must act again or the agent's hand is empty:
//!
//! 1. Validate and record the agent's card.
//! 2. Scripted seats complete the trick.
//! 3. The trick is resolved: the winner scores one point and leads next.
//! 4. Scripted seats from the winner onwards play until it is the agent's
//!    turn, resolving any trick they complete along the way.

use tracing::{debug, info, warn};

use super::observation::{Observation, StepInfo, StepResult, TrickRecord};
use super::spaces::{action_space, Discrete, ObservationSpace};
use super::Environment;
use crate::cards::{deal_hands, Hand};
use crate::core::{EnvError, GameRng, SeatId, SeatMap, WizardsConfig};
use crate::policy::{play_scripted, LeftmostLegal, OpponentPolicy, SeatPolicy};
use crate::rules::{validate_play, Trick, Violation};

/// Base reward for breaking a rule, before the score terms are added.
pub const VIOLATION_PENALTY: i64 = -100;

/// Weight of the total tricks played in the violation reward.
pub const VIOLATION_TRICK_WEIGHT: i64 = 10;

/// Trick-taking environment for a single agent.
///
/// ## Example
///
/// ```
/// use wizards_env::{Environment, WizardsConfig, WizardsEnv};
///
/// let mut env = WizardsEnv::with_seed(WizardsConfig::default(), 7);
/// let mut done = false;
/// while !done {
///     let action = env.legal_actions()[0];
///     done = env.step(action).unwrap().done;
/// }
/// assert!(env.hands()[wizards_env::SeatId::AGENT].is_exhausted());
/// ```
#[derive(Clone, Debug)]
pub struct WizardsEnv<P: OpponentPolicy = LeftmostLegal> {
    config: WizardsConfig,
    rng: GameRng,
    opponent: P,
    hands: SeatMap<Hand>,
    trick: Trick,
    scores: SeatMap<u32>,
    /// Seat that leads the current trick if nobody has played yet.
    next_leader: SeatId,
    finished: bool,
}

impl WizardsEnv<LeftmostLegal> {
    /// Create an environment seeded from OS entropy and deal the first episode.
    #[must_use]
    pub fn new(config: WizardsConfig) -> Self {
        Self::with_policy(config, GameRng::from_entropy(), LeftmostLegal)
    }

    /// Create a reproducible environment and deal the first episode.
    #[must_use]
    pub fn with_seed(config: WizardsConfig, seed: u64) -> Self {
        Self::with_policy(config, GameRng::new(seed), LeftmostLegal)
    }
}

impl<P: OpponentPolicy> WizardsEnv<P> {
    /// Create an environment with a custom scripted policy.
    pub fn with_policy(config: WizardsConfig, rng: GameRng, opponent: P) -> Self {
        let players = config.players();
        let mut env = Self {
            config,
            rng,
            opponent,
            hands: SeatMap::new(players, |_| Hand::empty(config.cards_per_player())),
            trick: Trick::new(players),
            scores: SeatMap::with_value(players, 0),
            next_leader: SeatId::AGENT,
            finished: false,
        };
        env.deal();
        env
    }

    /// Re-seed the generator. `None` draws a fresh seed from the OS.
    ///
    /// Returns the seed now in use. Takes effect at the next deal.
    pub fn seed(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(rand::random);
        self.rng.reseed(seed);
        seed
    }

    #[must_use]
    pub fn config(&self) -> &WizardsConfig {
        &self.config
    }

    #[must_use]
    pub fn hands(&self) -> &SeatMap<Hand> {
        &self.hands
    }

    #[must_use]
    pub fn trick(&self) -> &Trick {
        &self.trick
    }

    #[must_use]
    pub fn scores(&self) -> &SeatMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// True once the episode has ended, by exhaustion or by a violation.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn action_space(&self) -> Discrete {
        action_space(&self.config)
    }

    #[must_use]
    pub fn observation_space(&self) -> ObservationSpace {
        ObservationSpace::new(&self.config)
    }

    /// Slots the agent may play without breaking a rule.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.finished {
            return Vec::new();
        }
        self.hands[SeatId::AGENT]
            .legal_slots(self.trick.called_suit())
            .to_vec()
    }

    /// The agent's current view of the table.
    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation {
            hand: self.hands[SeatId::AGENT].slots().to_vec(),
            trick: self.trick.rotated_view(),
            scores: self.scores.as_slice().to_vec(),
        }
    }

    fn deal(&mut self) {
        self.hands = deal_hands(&self.config, &mut self.rng);
        self.scores.fill(0);
        self.trick.clear();
        self.next_leader = SeatId::AGENT;
        self.finished = false;
        debug!(seed = self.rng.seed(), "new episode");
    }

    fn agent_score(&self) -> i64 {
        self.scores[SeatId::AGENT] as i64
    }

    fn violation(&mut self, violation: Violation) -> StepResult<Observation> {
        let total: i64 = self.scores.values().map(|&s| s as i64).sum();
        let reward = VIOLATION_PENALTY + VIOLATION_TRICK_WEIGHT * total + self.agent_score();
        self.finished = true;
        warn!(%violation, reward, "agent broke a rule");

        StepResult {
            observation: self.observation(),
            reward,
            done: true,
            info: StepInfo {
                reason: Some(violation),
                tricks: Vec::new(),
            },
        }
    }

    /// Score the completed trick and start the next one.
    fn resolve_trick(&mut self) -> Option<TrickRecord> {
        let winner = self.trick.winner(self.config.max_rank())?;
        let record = TrickRecord {
            leader: self.trick.leader()?,
            called_suit: self.trick.called_suit()?,
            cards: self.trick.cards().as_slice().to_vec(),
            winner,
        };

        self.scores[winner] += 1;
        self.trick.clear();
        self.next_leader = winner;
        debug!(%winner, scores = ?self.scores.as_slice(), "trick resolved");
        Some(record)
    }

    /// Play scripted seats until the agent is to act or its hand is empty.
    fn run_until_agent(&mut self, tricks: &mut Vec<TrickRecord>) {
        loop {
            match self.trick.next_to_act(self.next_leader) {
                None => {
                    if let Some(record) = self.resolve_trick() {
                        tricks.push(record);
                    }
                    if self.hands[SeatId::AGENT].is_exhausted() {
                        return;
                    }
                }
                Some(seat) => match SeatPolicy::for_seat(seat) {
                    SeatPolicy::External => return,
                    SeatPolicy::Scripted => {
                        let played = play_scripted(
                            &self.opponent,
                            seat,
                            &mut self.hands[seat],
                            &mut self.trick,
                        );
                        if played.is_none() {
                            warn!(%seat, "scripted seat has no legal play");
                            return;
                        }
                    }
                },
            }
        }
    }
}

impl<P: OpponentPolicy> Environment for WizardsEnv<P> {
    type Observation = Observation;

    fn reset(&mut self, seed: Option<u64>) -> Observation {
        if let Some(seed) = seed {
            self.rng.reseed(seed);
        }
        self.deal();
        self.observation()
    }

    /// Play the agent's card and let scripted seats act until the agent is
    /// next or the episode ends.
    ///
    /// A rule violation ends the episode without touching the table: the
    /// returned observation shows the agent's hand and the trick as they were
    /// before the illegal play.
    fn step(&mut self, action: usize) -> Result<StepResult<Observation>, EnvError> {
        if self.finished {
            return Err(EnvError::EpisodeFinished);
        }
        let slots = self.config.cards_per_player();
        if action >= slots {
            return Err(EnvError::ActionOutOfRange { action, slots });
        }

        let agent = SeatId::AGENT;
        let card = match validate_play(&self.hands[agent], action, &self.trick) {
            Ok(card) => card,
            Err(violation) => return Ok(self.violation(violation)),
        };
        self.hands[agent].take(action);
        self.trick.play(agent, card);
        debug!(slot = action, %card, "agent play");

        let mut tricks = Vec::new();
        self.run_until_agent(&mut tricks);

        let done = self.hands[agent].is_exhausted();
        if done {
            self.finished = true;
            info!(scores = ?self.scores.as_slice(), "episode finished");
        }

        Ok(StepResult {
            observation: self.observation(),
            reward: self.agent_score(),
            done,
            info: StepInfo {
                reason: None,
                tricks,
            },
        })
    }

    fn render(&self) {
        print!("{self}");
    }
}

impl<P: OpponentPolicy> std::fmt::Display for WizardsEnv<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "scores: {:?}", self.scores.as_slice())?;
        writeln!(f, "hands:")?;
        for (seat, hand) in self.hands.iter() {
            writeln!(f, "  {seat}: {hand}")?;
        }
        write!(f, "played cards: [")?;
        for (i, card) in self.trick.cards().values().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        writeln!(f, "]")
    }
}
