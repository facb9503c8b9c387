//! Seed selection and population building between generations.
//!
//! The engine keeps the best policy seen so far and founds each new
//! generation from it: one unchanged copy plus mutated offspring.

use super::agent::Agent;
use super::brain::{Network, Topology};
use super::params::Params;
use super::road::Road;

/// The policy carried between generations and the progress it achieved.
#[derive(Debug, Clone, PartialEq)]
pub struct Champion {
    /// Copy of the best agent's network.
    pub network: Network,
    /// Distance that agent covered.
    pub progress: f64,
}

/// Manages the seed and spawns populations from it.
#[derive(Debug, Clone, Default)]
pub struct EvolutionEngine {
    champion: Option<Champion>,
}

impl EvolutionEngine {
    /// Creates an engine without a seed; the first population is random.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current seed, if any generation has finished.
    pub fn champion(&self) -> Option<&Champion> {
        self.champion.as_ref()
    }

    /// Progress of the current seed, or `None` before the first generation ends.
    pub fn best_progress(&self) -> Option<f64> {
        self.champion.as_ref().map(|c| c.progress)
    }

    /// Offers a finished generation's leader as the new seed.
    ///
    /// The candidate only replaces the seed if it got strictly further, so the
    /// recorded best never regresses.
    ///
    /// # Returns
    ///
    /// `true` if the seed was replaced.
    pub fn record_generation(&mut self, candidate: Champion) -> bool {
        let improved = self
            .champion
            .as_ref()
            .is_none_or(|best| candidate.progress > best.progress);
        if improved {
            self.champion = Some(candidate);
        }
        improved
    }

    /// Builds a population of `params.population_size` agents.
    ///
    /// With a seed, the first agent drives an exact copy of it and the rest
    /// drive copies mutated by `params.mutation_amount`. Without one, every
    /// agent gets a random network.
    pub fn spawn_population(
        &self,
        params: &Params,
        topology: &Topology,
        road: &Road,
        now_ms: f64,
    ) -> Vec<Agent> {
        let mut agents = Vec::with_capacity(params.population_size);

        match &self.champion {
            Some(champion) => {
                agents.push(Agent::new(params, road, champion.network.clone(), now_ms));
                for _ in 1..params.population_size {
                    let child = champion.network.mutated(params.mutation_amount);
                    agents.push(Agent::new(params, road, child, now_ms));
                }
            }
            None => {
                for _ in 0..params.population_size {
                    agents.push(Agent::new(params, road, Network::random(topology), now_ms));
                }
            }
        }

        agents
    }
}
