//! Project card component.

use portfolio_types::Project;
use yew::prelude::*;

use crate::anim::markers;

/// Properties for ProjectCard component.
#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub index: usize,
}

/// Layout orientation for a card position; even indexes sit left.
fn orientation_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "project-card-left"
    } else {
        "project-card-right"
    }
}

/// Single project card.
///
/// Pure projection of one record plus its position. The whole card is a
/// link when the record carries a `url`; without one the same markup
/// sits in a non-navigating wrapper.
#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    let media = match &project.image_url {
        Some(src) => html! {
            <div class="card-media">
                <img src={src.clone()} alt={project.title.clone()} />
            </div>
        },
        None => html! {
            <div class="card-media card-media-empty">
                <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path
                        d="M4 12h16M12 4v16"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                    />
                </svg>
            </div>
        },
    };

    let body = html! {
        <div class="card-body">
            { media }
            <div class="card-copy">
                <h3>{ &project.title }</h3>
                <p>{ &project.description }</p>
            </div>
        </div>
    };

    let card_classes = classes!(
        markers::PROJECT_CARD,
        orientation_class(props.index),
    );

    match &project.url {
        Some(url) => html! {
            <a
                class={card_classes}
                href={url.clone()}
                target="_blank"
                rel="noopener noreferrer"
            >
                { body }
            </a>
        },
        None => html! {
            <div class={card_classes}>{ body }</div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_alternates_by_parity() {
        assert_eq!(orientation_class(0), "project-card-left");
        assert_eq!(orientation_class(1), "project-card-right");
        assert_eq!(orientation_class(2), "project-card-left");
        assert_eq!(orientation_class(3), "project-card-right");
    }

    #[test]
    fn test_orientation_depends_only_on_parity() {
        for index in 0..16 {
            assert_eq!(orientation_class(index), orientation_class(index % 2));
        }
    }
}
