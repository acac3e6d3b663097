//! Root application component.

use std::cell::Cell;
use std::rc::Rc;

use portfolio_types::{LOAD_ERROR_MESSAGE, LoadState};
use yew::prelude::*;

use crate::anim::{Animator, default_bindings, markers};
use crate::api;
use crate::components::{Loading, ProjectList};

/// Root component: owns the load state and the animation bindings.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| LoadState::Loading);

    // Fetch projects once on mount. The alive flag keeps a late
    // response from writing into an unmounted component.
    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let guard = alive.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = api::fetch_projects().await;

                if let Err(err) = &result {
                    let err = *err;
                    gloo_timers::callback::Timeout::new(0, move || {
                        web_sys::console::error_1(
                            &format!("Failed to fetch projects: {err}").into(),
                        );
                    })
                    .forget();
                }

                if guard.get() {
                    state.set(LoadState::from_fetch(result));
                }
            });

            move || alive.set(false)
        });
    }

    // Bind animations after each commit that changes the card set.
    // The binding pass targets whatever marker elements exist, so it
    // runs keyed on the identity of the ready list and releases itself
    // before every re-run and on unmount.
    let animator = use_mut_ref(Animator::default);
    {
        let animator = animator.clone();
        let card_ids: Vec<i64> = match &*state {
            LoadState::Ready(projects) => projects.iter().map(|p| p.id).collect(),
            _ => Vec::new(),
        };

        use_effect_with(card_ids, move |_| {
            animator.borrow_mut().bind(&default_bindings());
            move || animator.borrow_mut().release()
        });
    }

    match &*state {
        LoadState::Loading => html! { <Loading /> },
        LoadState::Failed(_) => html! {
            <div class="status-message status-error">
                <p>{ LOAD_ERROR_MESSAGE }</p>
            </div>
        },
        LoadState::Ready(projects) => html! {
            <div class={classes!("page", markers::BACKGROUND)}>
                <header class="hero">
                    <div class={classes!("hero-copy", markers::HERO_TEXT)}>
                        <h1>{"My Portfolio"}</h1>
                        <p>{"Selected projects, one scroll away."}</p>
                    </div>
                    <a class={classes!("btn", "btn-primary", markers::HERO_BUTTON)} href="#projects">
                        {"View Projects"}
                    </a>
                </header>

                <section class="about">
                    <p class={classes!("about-copy", markers::ABOUT_TEXT)}>
                        {"I design and build small, focused things for the web. \
                          Everything below is live somewhere."}
                    </p>
                </section>

                <section id="projects">
                    <ProjectList projects={projects.clone()} />
                </section>
            </div>
        },
    }
}
