//! Project list component.

use portfolio_types::Project;
use yew::prelude::*;

use crate::components::ProjectCard;

/// Properties for ProjectList component.
#[derive(Properties, PartialEq)]
pub struct ProjectListProps {
    pub projects: Vec<Project>,
}

/// Ordered projection of the project list: one card per record, input
/// order preserved, `id` as the stable key.
#[function_component(ProjectList)]
pub fn project_list(props: &ProjectListProps) -> Html {
    if props.projects.is_empty() {
        return html! {
            <div class="project-list">
                <p class="project-list-empty">{"No projects here yet."}</p>
            </div>
        };
    }

    html! {
        <div class="project-list">
            { for props.projects.iter().enumerate().map(|(index, project)| {
                html! {
                    <ProjectCard
                        key={project.id.to_string()}
                        project={project.clone()}
                        {index}
                    />
                }
            })}
        </div>
    }
}
