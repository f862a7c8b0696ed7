//! Walk configuration and validation.
//!
//! [`WalkConfig`] is shared by the solver and the walker. The solver
//! checks it with [`validate()`](WalkConfig::validate) at construction.

use thiserror::Error;

/// Step bound used when none is configured.
pub const DEFAULT_MAX_STEPS: usize = 1000;

// ── EndPolicy ──────────────────────────────────────────────────────

/// What an interactive walker does with moves issued after the end
/// character has been entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EndPolicy {
    /// Keep processing moves as usual. Stopping is the caller's job.
    #[default]
    Open,
    /// Reject every move once the end has been reached; state is frozen.
    Halt,
}

// ── WalkConfig ─────────────────────────────────────────────────────

/// Tunables for traversal.
///
/// # Examples
///
/// ```
/// use glyphwalk_engine::{EndPolicy, WalkConfig};
///
/// let config = WalkConfig {
///     max_steps: 50,
///     end_policy: EndPolicy::Halt,
///     ..WalkConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// assert!(!config.crossings);
/// assert!(WalkConfig::with_crossings().crossings);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WalkConfig {
    /// Upper bound on solver steps before giving up with
    /// `MaxStepsExceeded`. Default: 1000. Not used by the walker.
    pub max_steps: usize,
    /// Allow crossing a straight segment that lies across the direction
    /// of travel when the path continues straight on the far side.
    /// Default: `false`; straight segments are entered along their own
    /// axis only.
    pub crossings: bool,
    /// Walker behavior after the end is reached. Default: [`EndPolicy::Open`].
    pub end_policy: EndPolicy,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            crossings: false,
            end_policy: EndPolicy::Open,
        }
    }
}

impl WalkConfig {
    /// Default configuration with crossings enabled.
    pub fn with_crossings() -> Self {
        Self {
            crossings: true,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroStepLimit);
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`WalkConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_steps` is zero, so no map could ever be solved.
    #[error("max_steps must be at least 1")]
    ZeroStepLimit,
}
