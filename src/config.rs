//! Spring tuning parameters and the named presets.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::{Result, SpringError};
use crate::float::Float;

/// A named `(tension, friction)` pair.
///
/// Presets only differ in tension and friction; every other field keeps its
/// global default unless overridden through [`SpringConfigBuilder`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Preset {
    #[default]
    Default,
    Gentle,
    Wobbly,
    Stiff,
    Slow,
    Molasses,
}

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Preset; 6] = [
        Preset::Default,
        Preset::Gentle,
        Preset::Wobbly,
        Preset::Stiff,
        Preset::Slow,
        Preset::Molasses,
    ];

    /// The lowercase name used for parsing and display.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Gentle => "gentle",
            Preset::Wobbly => "wobbly",
            Preset::Stiff => "stiff",
            Preset::Slow => "slow",
            Preset::Molasses => "molasses",
        }
    }

    /// `(tension, friction)` for this preset.
    pub fn parameters(self) -> (f64, f64) {
        match self {
            Preset::Default => (DEFAULT_TENSION, DEFAULT_FRICTION),
            Preset::Gentle => (120.0, 14.0),
            Preset::Wobbly => (180.0, 12.0),
            Preset::Stiff => (210.0, 20.0),
            Preset::Slow => (280.0, 60.0),
            Preset::Molasses => (280.0, 120.0),
        }
    }

    /// Build the config for this preset with every other field at its default.
    pub fn config<F: Float>(self) -> SpringConfig<F> {
        let (tension, friction) = self.parameters();
        SpringConfig {
            tension: F::from_f64(tension),
            friction: F::from_f64(friction),
            ..SpringConfig::new()
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SpringError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SpringError::UnknownPreset { name: name.to_string() })
    }
}

const DEFAULT_TENSION: f64 = 170.0;
const DEFAULT_FRICTION: f64 = 26.0;
const DEFAULT_MASS: f64 = 1.0;

/// Physical and tuning parameters for a spring.
///
/// A `SpringConfig` is always valid: the only ways to obtain one are the
/// presets (known-good constants) and [`SpringConfigBuilder::build`], which
/// rejects values that would make the integrator produce NaN or infinity.
///
/// # Builder Pattern
/// ```
/// use tickspring::{Preset, SpringConfig};
///
/// let config: SpringConfig = SpringConfig::builder()
///     .with_preset(Preset::Wobbly)
///     .with_bounce(0.4)
///     .build()
///     .unwrap();
/// assert_eq!(config.tension(), 180.0);
/// assert_eq!(config.bounce_factor(), 0.4);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "SpringConfigBuilder<F>",
        bound(
            serialize = "F: serde::Serialize",
            deserialize = "F: Float + serde::Deserialize<'de>"
        )
    )
)]
pub struct SpringConfig<F: Float = f64> {
    tension: F,
    friction: F,
    mass: F,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    precision: Option<F>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    velocity: Option<F>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    max_velocity: Option<F>,
    clamp: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    bounce: Option<F>,
}

impl<F: Float> SpringConfig<F> {
    /// The default feel: tension 170, friction 26, mass 1, no bounce.
    pub fn new() -> Self {
        SpringConfig {
            tension: F::from_f64(DEFAULT_TENSION),
            friction: F::from_f64(DEFAULT_FRICTION),
            mass: F::from_f64(DEFAULT_MASS),
            precision: None,
            velocity: None,
            max_velocity: None,
            clamp: false,
            bounce: None,
        }
    }

    /// Tension 120, friction 14.
    pub fn gentle() -> Self { Preset::Gentle.config() }
    /// Tension 180, friction 12. Overshoots noticeably.
    pub fn wobbly() -> Self { Preset::Wobbly.config() }
    /// Tension 210, friction 20.
    pub fn stiff() -> Self { Preset::Stiff.config() }
    /// Tension 280, friction 60.
    pub fn slow() -> Self { Preset::Slow.config() }
    /// Tension 280, friction 120. Heavily damped.
    pub fn molasses() -> Self { Preset::Molasses.config() }

    /// Start a builder from the default preset.
    pub fn builder() -> SpringConfigBuilder<F> {
        SpringConfigBuilder::new()
    }

    /// A builder with every field of this config set explicitly.
    pub fn to_builder(&self) -> SpringConfigBuilder<F> {
        SpringConfigBuilder {
            preset: Preset::Default,
            tension: Some(self.tension),
            friction: Some(self.friction),
            mass: Some(self.mass),
            precision: self.precision,
            velocity: self.velocity,
            max_velocity: self.max_velocity,
            clamp: self.clamp,
            bounce: self.bounce,
        }
    }

    /// Spring stiffness.
    pub fn tension(&self) -> F { self.tension }
    /// Damping coefficient.
    pub fn friction(&self) -> F { self.friction }
    /// Mass of the moving end.
    pub fn mass(&self) -> F { self.mass }
    /// Explicit settle threshold, `None` when derived from the trip length.
    pub fn precision(&self) -> Option<F> { self.precision }
    /// Seed velocity for values that have not moved yet.
    pub fn velocity(&self) -> Option<F> { self.velocity }
    /// Per-sub-step velocity limit, `None` when unlimited.
    pub fn max_velocity(&self) -> Option<F> { self.max_velocity }
    /// Whether bouncing is disabled.
    pub fn clamp(&self) -> bool { self.clamp }
    /// Configured elasticity. See [`bounce_factor`](Self::bounce_factor).
    pub fn bounce(&self) -> Option<F> { self.bounce }

    /// Velocity used when the animated value has none of its own yet.
    pub fn initial_velocity(&self) -> F {
        self.velocity.unwrap_or_else(F::zero)
    }

    /// Elasticity applied on contact with the target. Zero means no bounce.
    pub fn bounce_factor(&self) -> F {
        if self.clamp {
            F::zero()
        } else {
            self.bounce.unwrap_or_else(F::zero)
        }
    }
}

impl<F: Float> Default for SpringConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> From<Preset> for SpringConfig<F> {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}

/// Validating builder for [`SpringConfig`].
///
/// Unset fields fall back to the chosen preset (tension, friction) or the
/// global defaults (everything else).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SpringConfigBuilder<F: Float = f64> {
    preset: Preset,
    tension: Option<F>,
    friction: Option<F>,
    mass: Option<F>,
    precision: Option<F>,
    velocity: Option<F>,
    max_velocity: Option<F>,
    clamp: bool,
    bounce: Option<F>,
}

impl<F: Float> SpringConfigBuilder<F> {
    /// Create a builder on the default preset with nothing overridden.
    pub fn new() -> Self {
        SpringConfigBuilder {
            preset: Preset::Default,
            tension: None,
            friction: None,
            mass: None,
            precision: None,
            velocity: None,
            max_velocity: None,
            clamp: false,
            bounce: None,
        }
    }

    /// Take tension and friction from a preset unless set explicitly.
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    /// Set the tension.
    pub fn with_tension(mut self, tension: F) -> Self {
        self.tension = Some(tension);
        self
    }

    /// Set the friction.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = Some(friction);
        self
    }

    /// Set the mass.
    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Fixed settle threshold. Zero is honoured as a real threshold.
    pub fn with_precision(mut self, precision: F) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the seed velocity (position units per ms).
    pub fn with_velocity(mut self, velocity: F) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Limit the per-sub-step velocity magnitude (position units per ms).
    pub fn with_max_velocity(mut self, max_velocity: F) -> Self {
        self.max_velocity = Some(max_velocity);
        self
    }

    /// Disable bouncing.
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Set the bounce elasticity, in [0, 1].
    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = Some(bounce);
        self
    }

    /// Resolve defaults and validate.
    pub fn build(self) -> Result<SpringConfig<F>> {
        let base: SpringConfig<F> = self.preset.config();
        let config = SpringConfig {
            tension: self.tension.unwrap_or(base.tension),
            friction: self.friction.unwrap_or(base.friction),
            mass: self.mass.unwrap_or(base.mass),
            precision: self.precision,
            velocity: self.velocity,
            max_velocity: self.max_velocity,
            clamp: self.clamp,
            bounce: self.bounce,
        };
        validate(&config)?;
        Ok(config)
    }
}

impl<F: Float> Default for SpringConfigBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> TryFrom<SpringConfigBuilder<F>> for SpringConfig<F> {
    type Error = SpringError;

    fn try_from(builder: SpringConfigBuilder<F>) -> Result<Self> {
        builder.build()
    }
}

fn validate<F: Float>(config: &SpringConfig<F>) -> Result<()> {
    let zero = F::zero();
    if !(config.tension.is_finite() && config.tension >= zero) {
        return Err(SpringError::InvalidTension);
    }
    if !(config.friction.is_finite() && config.friction >= zero) {
        return Err(SpringError::InvalidFriction);
    }
    if !(config.mass.is_finite() && config.mass > zero) {
        return Err(SpringError::InvalidMass);
    }
    if let Some(precision) = config.precision {
        if !(precision.is_finite() && precision >= zero) {
            return Err(SpringError::InvalidPrecision);
        }
    }
    if let Some(velocity) = config.velocity {
        if !velocity.is_finite() {
            return Err(SpringError::InvalidVelocity);
        }
    }
    if let Some(max_velocity) = config.max_velocity {
        if !(max_velocity.is_finite() && max_velocity > zero) {
            return Err(SpringError::InvalidMaxVelocity);
        }
    }
    if let Some(bounce) = config.bounce {
        if !(bounce >= zero && bounce <= F::one()) {
            return Err(SpringError::InvalidBounce);
        }
    }
    Ok(())
}
