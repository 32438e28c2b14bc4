//! Project showcase cards.

use leptos::prelude::*;

use crate::profile::{Profile, Section};

#[component]
pub fn Projects() -> impl IntoView {
    let profile = expect_context::<&'static Profile>();

    view! {
        <section id=Section::Projects.id() class="section section--alt">
            <div class="container">
                <div class="section__header section__header--split">
                    <div>
                        <span class="eyebrow">"Case Studies"</span>
                        <h2 class="section__title">"FEATURED PROJECTS"</h2>
                    </div>
                    <a href=profile.socials.github class="link-underline">
                        "View Repository"
                    </a>
                </div>
                <div class="projects">
                    {profile
                        .projects
                        .iter()
                        .map(|project| {
                            view! {
                                <article class="projects__card" data-project-id=project.id.to_string()>
                                    <img class="projects__image" src=project.image alt=project.title/>
                                    <div class="projects__overlay">
                                        <span class="eyebrow">{project.category}</span>
                                        <h3 class="projects__title">{project.title}</h3>
                                        <p class="projects__desc">{project.desc}</p>
                                        <a
                                            href=project.link
                                            class="projects__link"
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            "Open"
                                        </a>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
