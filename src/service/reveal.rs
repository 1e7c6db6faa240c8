//! Reveal planning.
//!
//! Turns a draw result into everything a client needs to stage the lottery
//! machine animation: which balls tumble inside the machine, the colour of
//! each result ball, and when each phase starts. A plan is an immutable value
//! per draw, so overlapping reveals never share state.

use rand::TryCryptoRng;

use crate::config::RevealConfig;
use crate::domain::{BallColor, MachineBall, RevealBall, RevealPlan};
use crate::error::SamplingResult;
use crate::sampling::partial_shuffle;

/// Builds machine previews and reveal timelines.
#[derive(Debug, Clone)]
pub struct RevealPlanner {
    config: RevealConfig,
}

impl RevealPlanner {
    /// Create a planner with the given timings.
    #[must_use]
    pub const fn new(config: RevealConfig) -> Self {
        Self { config }
    }

    /// Pick the balls shown inside the machine.
    ///
    /// Up to `preview_size` distinct candidates, chosen uniformly and in
    /// random display order. Consumes `pool`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entropy source fails.
    pub fn machine_balls<R: TryCryptoRng>(
        &self,
        rng: &mut R,
        mut pool: Vec<i64>,
    ) -> SamplingResult<Vec<MachineBall>> {
        let shown = partial_shuffle(rng, &mut pool, self.config.preview_size)?;

        Ok(shown
            .iter()
            .enumerate()
            .map(|(i, &number)| {
                let color = BallColor::for_index(i);
                MachineBall {
                    number,
                    color,
                    background: color.gradient().to_string(),
                }
            })
            .collect())
    }

    /// Lay out the reveal timeline for `numbers`.
    #[must_use]
    pub fn plan(&self, numbers: &[i64]) -> RevealPlan {
        let c = &self.config;
        let machine_visible_at_ms = c.machine_show_delay_ms;
        let first_ball_at_ms = machine_visible_at_ms.saturating_add(c.mix_duration_ms);

        let balls: Vec<RevealBall> = numbers
            .iter()
            .zip(0u64..)
            .enumerate()
            .map(|(i, (&number, step))| {
                let color = BallColor::for_index(i);
                RevealBall {
                    number,
                    color,
                    css_class: color.css_class().to_string(),
                    reveal_at_ms: first_ball_at_ms
                        .saturating_add(step.saturating_mul(c.ball_interval_ms)),
                    glow_delay_ms: step.saturating_mul(c.glow_stagger_ms),
                }
            })
            .collect();

        let ball_count = balls.len() as u64;
        let mixing_stops_at_ms =
            first_ball_at_ms.saturating_add(ball_count.saturating_mul(c.ball_interval_ms));
        let machine_hidden_at_ms = mixing_stops_at_ms.saturating_add(c.fade_out_ms);

        RevealPlan {
            machine_visible_at_ms,
            balls,
            mixing_stops_at_ms,
            machine_hidden_at_ms,
            confetti_at_ms: machine_hidden_at_ms,
            finished_at_ms: machine_hidden_at_ms.saturating_add(c.celebration_ms),
        }
    }
}

impl Default for RevealPlanner {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}
