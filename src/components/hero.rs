//! Landing banner with name, socials, and bio.

use leptos::prelude::*;

use crate::profile::{Profile, Section};

#[component]
pub fn Hero() -> impl IntoView {
    let profile = expect_context::<&'static Profile>();
    let socials = [
        ("Github", "GH", profile.socials.github.to_owned()),
        ("LinkedIn", "IN", profile.socials.linkedin.to_owned()),
        ("Email", "@", profile.mailto()),
    ];

    view! {
        <section id=Section::Home.id() class="hero">
            <div class="hero__content">
                <span class="eyebrow">{profile.tagline}</span>
                <h1 class="hero__name">
                    {profile.first_name}
                    <span class="gradient-text">{profile.last_name}</span>
                </h1>
                <div class="hero__socials">
                    {socials
                        .into_iter()
                        .map(|(label, badge, href)| {
                            view! {
                                <a href=href class="hero__social">
                                    <span class="hero__social-badge">{badge}</span>
                                    <span class="hero__social-label">{label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="hero__bio">{profile.short_bio}</p>
                <a href=Section::Projects.href() class="button button--light">
                    "Explore Projects"
                </a>
            </div>
        </section>
    }
}
