//! Tween descriptions handed to the animation engine.

use crate::{AccentColor, ElementId};
use maru_error::{BuilderError, BuilderErrorKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// An animatable property and its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, strum::EnumDiscriminants)]
#[strum_discriminants(
    name(PropertyKind),
    derive(Hash, PartialOrd, Ord, strum::Display),
    doc = "Which property a [`Property`] value sets, without the value."
)]
pub enum Property {
    /// Horizontal translation in pixels
    X(f64),
    /// Vertical translation in pixels
    Y(f64),
    /// Opacity in [0, 1]
    Opacity(f64),
    /// Rotation around the z axis in degrees
    RotateZ(f64),
    /// Horizontal skew in degrees
    SkewX(f64),
    /// Blur radius in pixels
    Blur(f64),
    /// Uniform scale factor
    Scale(f64),
    /// Displacement map strength of the distortion filter
    DisplacementScale(f64),
    /// Width as a percentage of the parent
    WidthPercent(f64),
    /// The global accent color variable
    AccentColor(AccentColor),
    /// Absolute top offset in pixels
    Top(f64),
    /// Absolute left offset in pixels
    Left(f64),
    /// Absolute width in pixels
    Width(f64),
    /// Absolute height in pixels
    Height(f64),
}

impl Property {
    /// Discriminant of this property.
    pub fn kind(&self) -> PropertyKind {
        PropertyKind::from(self)
    }

    /// Numeric value, if the property is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::X(v)
            | Self::Y(v)
            | Self::Opacity(v)
            | Self::RotateZ(v)
            | Self::SkewX(v)
            | Self::Blur(v)
            | Self::Scale(v)
            | Self::DisplacementScale(v)
            | Self::WidthPercent(v)
            | Self::Top(v)
            | Self::Left(v)
            | Self::Width(v)
            | Self::Height(v) => Some(*v),
            Self::AccentColor(_) => None,
        }
    }
}

/// Easing curve token. The engine decides what each curve looks like.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    /// Constant speed
    Linear,
    /// Quadratic ease out
    #[default]
    Power2Out,
    /// Quadratic ease in and out
    Power2InOut,
    /// Cubic ease in
    Power3In,
    /// Quartic ease in and out
    Power4InOut,
    /// Overshooting ease out
    BackOut,
}

/// Per-element offset for tweens that animate a run of split glyphs or words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stagger {
    /// Offset between consecutive elements
    pub each: Duration,
    /// Number of elements in the run
    pub count: usize,
}

impl Stagger {
    /// Create a stagger.
    pub fn new(each: Duration, count: usize) -> Self {
        Self { each, count }
    }

    /// Extra time the last element starts after the first.
    ///
    /// Saturates at `Duration::MAX`.
    pub fn span(&self) -> Duration {
        let gaps = u32::try_from(self.count.saturating_sub(1)).unwrap_or(u32::MAX);
        self.each.saturating_mul(gaps)
    }
}

/// A single scheduled property animation.
///
/// # Examples
///
/// ```
/// use maru_core::{ElementId, Property, Tween};
/// use std::time::Duration;
///
/// let tween = Tween::builder()
///     .target(ElementId::container())
///     .to(vec![Property::X(-1440.0)])
///     .duration(Duration::from_millis(1800))
///     .build()
///     .unwrap();
///
/// assert_eq!(tween.total(), Duration::from_millis(1800));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    derive_builder::Builder,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
#[setters(prefix = "with_")]
pub struct Tween {
    /// Element being animated
    target: ElementId,
    /// Start values applied immediately, if any
    #[builder(default)]
    from: Vec<Property>,
    /// End values reached when the tween completes
    to: Vec<Property>,
    /// Animated duration
    #[builder(default)]
    duration: Duration,
    /// Easing curve
    #[builder(default)]
    ease: Ease,
    /// Optional stagger across split children
    #[builder(default)]
    #[setters(strip_option)]
    stagger: Option<Stagger>,
    /// Wait before the animation starts
    #[builder(default)]
    delay: Duration,
}

impl Tween {
    /// Creates a new tween builder.
    pub fn builder() -> TweenBuilder {
        TweenBuilder::default()
    }

    /// Tween to `to` over `duration` with the default ease.
    ///
    /// Chain `with_from`, `with_ease`, `with_stagger` and `with_delay` for
    /// the rest.
    pub fn new(target: ElementId, to: Vec<Property>, duration: Duration) -> Self {
        Self {
            target,
            from: Vec::new(),
            to,
            duration,
            ease: Ease::default(),
            stagger: None,
            delay: Duration::ZERO,
        }
    }

    /// Time from scheduling until the last element settles.
    pub fn total(&self) -> Duration {
        let stagger = self.stagger.map(|s| s.span()).unwrap_or_default();
        self.delay.saturating_add(stagger).saturating_add(self.duration)
    }
}

impl TweenBuilder {
    /// Build the Tween.
    ///
    /// # Errors
    ///
    /// Returns error if the target or end values are missing.
    pub fn build(&self) -> Result<Tween, BuilderError> {
        self.build_internal()
            .map_err(|e| BuilderError::new(BuilderErrorKind::MissingField(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_extends_total() {
        let tween = Tween::builder()
            .target(ElementId::chapter_title(0))
            .to(vec![Property::Opacity(1.0)])
            .duration(Duration::from_millis(1200))
            .stagger(Stagger::new(Duration::from_millis(30), 6))
            .delay(Duration::from_millis(100))
            .build()
            .unwrap();

        assert_eq!(tween.total(), Duration::from_millis(100 + 150 + 1200));
    }

    #[test]
    fn huge_stagger_saturates() {
        let stagger = Stagger::new(Duration::from_secs(u64::MAX / 2), usize::MAX);
        assert_eq!(stagger.span(), Duration::MAX);

        let tween = Tween::new(
            ElementId::chapter_title(0),
            vec![Property::Opacity(1.0)],
            Duration::from_millis(1200),
        )
        .with_stagger(stagger);
        assert_eq!(tween.total(), Duration::MAX);
    }

    #[test]
    fn setters_chain_from_new() {
        let tween = Tween::new(
            ElementId::distortion(),
            vec![Property::DisplacementScale(300.0)],
            Duration::from_millis(1000),
        )
        .with_ease(Ease::Power2InOut)
        .with_delay(Duration::from_millis(50));

        assert_eq!(*tween.ease(), Ease::Power2InOut);
        assert_eq!(tween.stagger(), &None);
        assert_eq!(tween.total(), Duration::from_millis(1050));
    }

    #[test]
    fn missing_target_is_rejected() {
        let result = Tween::builder().to(vec![Property::X(0.0)]).build();
        assert!(result.is_err());
    }

    #[test]
    fn property_kind_matches_variant() {
        assert_eq!(Property::WidthPercent(40.0).kind(), PropertyKind::WidthPercent);
        assert_eq!(Property::AccentColor("#fff".into()).as_f64(), None);
    }
}
