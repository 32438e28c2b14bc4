//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::{
    about::About, contact_section::ContactSection, expertise::Expertise, footer::Footer, hero::Hero,
    navbar::Navbar, projects::Projects,
};
use crate::profile::{PROFILE, Profile};
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the profile record, contact settings, and page chrome state to
/// every section, then renders the sections in page order.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let profile: &'static Profile = &PROFILE;
    provide_context(profile);
    provide_context(crate::config::load());
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Title text=format!("{} | Portfolio", profile.name)/>
        <Meta name="description" content=profile.title/>

        <div class="page">
            <Navbar/>
            <main>
                <Hero/>
                <About/>
                <Expertise/>
                <Projects/>
                <ContactSection/>
            </main>
            <Footer/>
        </div>
    }
}
