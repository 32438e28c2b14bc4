use leptos::prelude::*;

use crate::profile::{Profile, Section};

/// Skills grid.
#[component]
pub fn Expertise() -> impl IntoView {
    let profile = expect_context::<&'static Profile>();

    view! {
        <section id=Section::Expertise.id() class="section">
            <div class="container">
                <div class="section__header section__header--center">
                    <span class="eyebrow">"Skill Stack"</span>
                    <h2 class="section__title">"TECHNICAL EXPERTISE"</h2>
                </div>
                <div class="skills">
                    {profile
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="skills__card">
                                    <span class="skills__category">{skill.category}</span>
                                    <h3 class="skills__name">{skill.name}</h3>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
