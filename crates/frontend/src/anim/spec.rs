//! Declarative animation binding model.
//!
//! A binding pairs a marker class with an initial state, a target
//! state, a timing curve, and the trigger that starts or drives it.
//! Nothing here touches the DOM; the controller interprets these.

/// Visual snapshot rendered as inline `opacity` and `transform` styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl VisualState {
    pub const fn new(opacity: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            opacity,
            translate_x,
            translate_y,
        }
    }

    /// Settled state: fully visible, no offset.
    pub const fn rest() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Same state entering from the opposite horizontal side.
    pub fn mirrored_x(self) -> Self {
        Self {
            translate_x: -self.translate_x,
            ..self
        }
    }

    /// CSS `transform` value for this state.
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.translate_x, self.translate_y)
    }
}

/// Timing curve applied as a CSS transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: &'static str,
}

impl Timing {
    /// CSS `transition` value covering transform and opacity.
    pub fn transition(&self) -> String {
        format!(
            "transform {dur}ms {ease} {delay}ms, opacity {dur}ms {ease} {delay}ms",
            dur = self.duration_ms,
            ease = self.easing,
            delay = self.delay_ms,
        )
    }

    /// Time until the animation has fully settled.
    pub fn total_ms(&self) -> u32 {
        self.duration_ms + self.delay_ms
    }
}

/// Scroll region offsets in pixels, relative to the bound element's
/// scrollable extent. `(0.0, 0.0)` scrubs across the whole element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub start: f64,
    pub end: f64,
}

impl Region {
    pub const FULL: Self = Self {
        start: 0.0,
        end: 0.0,
    };
}

/// What starts or drives a binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Time-driven; plays once when bound.
    Mount,
    /// One-shot on entering the viewport.
    Enter,
    /// Continuous, proportional to scroll position inside the region.
    Scrub(Region),
}

/// One declarative binding: a marker class plus its motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub marker: &'static str,
    pub from: VisualState,
    pub to: VisualState,
    pub timing: Timing,
    pub trigger: Trigger,
    /// Mirror the horizontal origin on odd-indexed matches.
    pub alternate_x: bool,
    /// Keep pointer events off until the entrance settles.
    pub suppress_pointer: bool,
}

impl AnimationSpec {
    /// Initial state for the `index`-th matched element.
    pub fn from_for(&self, index: usize) -> VisualState {
        if self.alternate_x && index % 2 == 1 {
            self.from.mirrored_x()
        } else {
            self.from
        }
    }
}
