//! Draw service.
//!
//! Boundary between raw form input and the sampling engine: parses and
//! validates the form, enforces the range limit, runs the draw against the
//! operating system entropy source and builds the reveal plan.

use chrono::Utc;
use rand::TryCryptoRng;
use rand::rngs::OsRng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{DrawConfig, RevealConfig};
use crate::domain::{DrawForm, DrawRequest, DrawResponse, Locale, RandomResponse};
use crate::error::{AppError, Result, ValidationError};
use crate::sampling::{self, parse_exclusions, parse_integer};
use crate::service::RevealPlanner;

/// Service running lottery draws.
#[derive(Debug, Clone)]
pub struct DrawService {
    max_range_size: u64,
    default_locale: Locale,
    planner: RevealPlanner,
}

impl DrawService {
    /// Create a new draw service.
    #[must_use]
    pub fn new(draw: &DrawConfig, reveal: &RevealConfig) -> Self {
        Self {
            max_range_size: draw.max_range_size,
            default_locale: draw.default_locale,
            planner: RevealPlanner::new(reveal.clone()),
        }
    }

    /// Parse and validate a form into a draw request.
    ///
    /// # Errors
    ///
    /// Returns a localized validation error, or [`AppError::RangeTooLarge`]
    /// if the range exceeds the configured limit.
    pub fn prepare(&self, form: &DrawForm) -> Result<DrawRequest> {
        let locale = form.lang.unwrap_or(self.default_locale);

        let request = sampling::validate(
            parse_integer(&form.start),
            parse_integer(&form.end),
            parse_integer(&form.count),
            parse_exclusions(&form.exclude),
        )
        .map_err(|kind| {
            metrics::counter!("lotto_draw_rejections_total", "reason" => rejection_reason(kind))
                .increment(1);
            AppError::validation(kind, locale)
        })?;

        let size = request.range_size();
        if size > u128::from(self.max_range_size) {
            metrics::counter!("lotto_draw_rejections_total", "reason" => "range_too_large")
                .increment(1);
            return Err(AppError::RangeTooLarge {
                size,
                limit: self.max_range_size,
            });
        }

        Ok(request)
    }

    /// Run a draw with the operating system entropy source.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is invalid or entropy is unavailable.
    pub fn draw(&self, form: &DrawForm) -> Result<DrawResponse> {
        self.draw_with_rng(&mut OsRng, form)
    }

    /// Run a draw with the given entropy source.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is invalid or entropy is unavailable.
    pub fn draw_with_rng<R: TryCryptoRng>(
        &self,
        rng: &mut R,
        form: &DrawForm,
    ) -> Result<DrawResponse> {
        let request = self.prepare(form)?;
        let draw_id = Uuid::new_v4();

        let numbers = sampling::draw(rng, &request)?;
        let pool = sampling::candidate_pool(request.start(), request.end(), request.exclude());
        let machine = self.planner.machine_balls(rng, pool)?;
        let reveal = self.planner.plan(&numbers);

        metrics::counter!("lotto_draws_total").increment(1);
        info!(
            %draw_id,
            start = request.start(),
            end = request.end(),
            count = request.count(),
            available = request.available(),
            "Draw completed"
        );
        debug!(%draw_id, ?numbers, "Drawn numbers");

        Ok(DrawResponse {
            draw_id,
            drawn_at: Utc::now(),
            numbers,
            available: request.available(),
            excluded: request.excluded_in_range(),
            machine,
            reveal,
        })
    }

    /// Draw one uniform integer in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `max < min` or entropy is unavailable.
    pub fn random_integer(&self, min: i64, max: i64) -> Result<RandomResponse> {
        let value = sampling::generate_uniform(&mut OsRng, min, max)?;
        Ok(RandomResponse { min, max, value })
    }
}

impl Default for DrawService {
    fn default() -> Self {
        Self::new(&DrawConfig::default(), &RevealConfig::default())
    }
}

/// Metric label for a validation failure.
const fn rejection_reason(kind: ValidationError) -> &'static str {
    match kind {
        ValidationError::InvalidStart => "invalid_start",
        ValidationError::InvalidEnd => "invalid_end",
        ValidationError::RangeInverted => "range_inverted",
        ValidationError::InvalidCount => "invalid_count",
        ValidationError::InsufficientPool { .. } => "insufficient_pool",
    }
}
