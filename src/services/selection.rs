//! Weighted random selection favouring games that have been picked the least.
//!
//! A game picked `c` times gets the unnormalised weight `1 / (c + 1)^alpha`. The
//! weights are normalised into a categorical distribution and a single draw
//! chooses the game. `alpha = 0` is a uniform choice; larger values suppress
//! repeat picks more sharply. Since `c + 1 >= 1` every game keeps a positive
//! weight and stays reachable.

use rand::{
    Rng,
    distr::{Distribution, weighted::WeightedIndex},
};

use crate::{config::DEFAULT_ALPHA, dao::models::GameEntity};

/// Selection policy parameterised by the suppression exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionPolicy {
    alpha: f64,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}

impl SelectionPolicy {
    /// Create a policy with the given exponent. Callers must pass a finite, non-negative value.
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Exponent applied to past selection counts.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Unnormalised weight of a game picked `times_selected` times.
    pub fn weight(&self, times_selected: u64) -> f64 {
        (times_selected as f64 + 1.0).powf(-self.alpha)
    }

    /// Probability of each game being drawn, in input order. Sums to one for
    /// non-empty input.
    pub fn probabilities(&self, games: &[GameEntity]) -> Vec<f64> {
        let weights = self.relative_weights(games);
        let total: f64 = weights.iter().sum();
        weights.into_iter().map(|weight| weight / total).collect()
    }

    /// Draw one game. Returns `None` only when `games` is empty.
    pub fn choose<'a, R>(&self, games: &'a [GameEntity], rng: &mut R) -> Option<&'a GameEntity>
    where
        R: Rng + ?Sized,
    {
        let weights = self.relative_weights(games);
        let distribution = WeightedIndex::new(&weights).ok()?;
        games.get(distribution.sample(rng))
    }

    /// Weights scaled so the least-picked game weighs exactly one.
    ///
    /// The ratio between any two weights is the same as for [`Self::weight`], so
    /// the normalised distribution is unchanged, but large exponents can no
    /// longer underflow every weight to zero at once.
    fn relative_weights(&self, games: &[GameEntity]) -> Vec<f64> {
        let Some(least) = games.iter().map(|game| game.times_selected).min() else {
            return Vec::new();
        };
        let base = (least as f64 + 1.0).ln();
        games
            .iter()
            .map(|game| {
                let log_ratio = (game.times_selected as f64 + 1.0).ln() - base;
                (-self.alpha * log_ratio).exp()
            })
            .collect()
    }
}
