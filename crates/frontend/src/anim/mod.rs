//! Scroll-linked animation layer.
//!
//! An isolated effect layer over the rendered DOM. Components mark
//! elements with the classes in [`markers`]; after each commit the
//! [`Animator`] binds the declarative table below to whatever is
//! mounted. The rendering layer itself never mutates styles.

mod controller;
mod progress;
mod spec;

pub use controller::Animator;
pub use spec::{AnimationSpec, Region, Timing, Trigger, VisualState};

/// Marker classes shared between components and animation bindings.
///
/// This is the binding contract with the presentation layer; renaming
/// one side silently detaches the animation.
pub mod markers {
    /// Hero heading block.
    pub const HERO_TEXT: &str = "hero-text";
    /// Hero call-to-action button.
    pub const HERO_BUTTON: &str = "hero-button";
    /// Full-page background element.
    pub const BACKGROUND: &str = "background-wrapper";
    /// About-section paragraph.
    pub const ABOUT_TEXT: &str = "about-text";
    /// Every rendered project card.
    pub const PROJECT_CARD: &str = "project-card";
}

/// Entrance easing shared by the timelines.
const EASE_OUT: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

/// The binding table for the portfolio page.
///
/// Hero copy and button play once on mount, staggered; the background
/// sweep scrubs with scroll across the whole page; the about text and
/// each card fade in once on entering the viewport, cards alternating
/// their horizontal origin to match the layout rhythm.
pub fn default_bindings() -> Vec<AnimationSpec> {
    vec![
        AnimationSpec {
            marker: markers::HERO_TEXT,
            from: VisualState::new(0.0, 0.0, 28.0),
            to: VisualState::rest(),
            timing: Timing {
                duration_ms: 700,
                delay_ms: 0,
                easing: EASE_OUT,
            },
            trigger: Trigger::Mount,
            alternate_x: false,
            suppress_pointer: false,
        },
        AnimationSpec {
            marker: markers::HERO_BUTTON,
            from: VisualState::new(0.0, 0.0, 28.0),
            to: VisualState::rest(),
            timing: Timing {
                duration_ms: 700,
                delay_ms: 250,
                easing: EASE_OUT,
            },
            trigger: Trigger::Mount,
            alternate_x: false,
            suppress_pointer: false,
        },
        AnimationSpec {
            marker: markers::BACKGROUND,
            from: VisualState::rest(),
            to: VisualState::rest(),
            timing: Timing {
                duration_ms: 0,
                delay_ms: 0,
                easing: "linear",
            },
            trigger: Trigger::Scrub(Region::FULL),
            alternate_x: false,
            suppress_pointer: false,
        },
        AnimationSpec {
            marker: markers::ABOUT_TEXT,
            from: VisualState::new(0.0, 0.0, 32.0),
            to: VisualState::rest(),
            timing: Timing {
                duration_ms: 600,
                delay_ms: 0,
                easing: EASE_OUT,
            },
            trigger: Trigger::Enter,
            alternate_x: false,
            suppress_pointer: false,
        },
        AnimationSpec {
            marker: markers::PROJECT_CARD,
            from: VisualState::new(0.0, -48.0, 0.0),
            to: VisualState::rest(),
            timing: Timing {
                duration_ms: 600,
                delay_ms: 0,
                easing: EASE_OUT,
            },
            trigger: Trigger::Enter,
            alternate_x: true,
            suppress_pointer: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(marker: &str) -> AnimationSpec {
        default_bindings()
            .into_iter()
            .find(|spec| spec.marker == marker)
            .unwrap()
    }

    #[test]
    fn test_every_marker_is_bound_exactly_once() {
        let bindings = default_bindings();
        let expected = [
            markers::HERO_TEXT,
            markers::HERO_BUTTON,
            markers::BACKGROUND,
            markers::ABOUT_TEXT,
            markers::PROJECT_CARD,
        ];

        assert_eq!(bindings.len(), expected.len());
        for marker in expected {
            assert_eq!(
                bindings.iter().filter(|spec| spec.marker == marker).count(),
                1,
                "{marker} must appear exactly once"
            );
        }
    }

    #[test]
    fn test_hero_group_plays_on_mount_with_stagger() {
        let text = binding(markers::HERO_TEXT);
        let button = binding(markers::HERO_BUTTON);

        assert_eq!(text.trigger, Trigger::Mount);
        assert_eq!(button.trigger, Trigger::Mount);
        assert!(button.timing.delay_ms > text.timing.delay_ms);
    }

    #[test]
    fn test_background_is_the_only_scrub() {
        let scrubs: Vec<_> = default_bindings()
            .into_iter()
            .filter(|spec| matches!(spec.trigger, Trigger::Scrub(_)))
            .collect();

        assert_eq!(scrubs.len(), 1);
        assert_eq!(scrubs[0].marker, markers::BACKGROUND);
    }

    #[test]
    fn test_about_text_enters_once() {
        assert_eq!(binding(markers::ABOUT_TEXT).trigger, Trigger::Enter);
    }

    #[test]
    fn test_cards_alternate_and_suppress_pointer() {
        let card = binding(markers::PROJECT_CARD);

        assert_eq!(card.trigger, Trigger::Enter);
        assert!(card.alternate_x);
        assert!(card.suppress_pointer);
        assert!(card.from.translate_x != 0.0);
    }

    #[test]
    fn test_entrances_start_invisible_and_settle_at_rest() {
        for spec in default_bindings() {
            if matches!(spec.trigger, Trigger::Scrub(_)) {
                continue;
            }
            assert_eq!(spec.from.opacity, 0.0, "{} starts hidden", spec.marker);
            assert_eq!(spec.to, VisualState::rest(), "{} settles", spec.marker);
        }
    }
}
