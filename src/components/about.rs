//! Portrait card and experience/education timeline.

use leptos::prelude::*;

use crate::profile::{Profile, Section};

#[component]
pub fn About() -> impl IntoView {
    let profile = expect_context::<&'static Profile>();

    let experience = profile
        .experience
        .iter()
        .map(|exp| {
            view! {
                <article class="timeline__card">
                    <header class="timeline__card-header">
                        <h5>{exp.role}</h5>
                        <span class="pill pill--accent">{exp.year}</span>
                    </header>
                    <p class="timeline__org">{exp.company}</p>
                    <p class="timeline__desc">{exp.desc}</p>
                </article>
            }
        })
        .collect_view();

    let education = profile
        .education
        .iter()
        .map(|edu| {
            view! {
                <article class="timeline__card">
                    <header class="timeline__card-header">
                        <h5>{edu.degree}</h5>
                        <span class="pill">{edu.year}</span>
                    </header>
                    <p class="timeline__org">{edu.institution}</p>
                    <p class="timeline__desc">{edu.desc}</p>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id=Section::About.id() class="section section--alt">
            <div class="container about">
                <div class="about__portrait">
                    <div class="about__portrait-caption">
                        <h3>"AI ENGINEER &" <br/> <span class="accent">"DEVELOPER"</span></h3>
                        <p>{profile.location}</p>
                    </div>
                </div>
                <div>
                    <span class="eyebrow">"Professional Background"</span>
                    <h2 class="section__title">"RESUME &" <br/> "MILESTONES"</h2>
                    <div class="timeline">
                        <div class="timeline__group">
                            <h4 class="timeline__heading">"Work Experience"</h4>
                            {experience}
                        </div>
                        <div class="timeline__group">
                            <h4 class="timeline__heading">"Education"</h4>
                            {education}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
