//! Fixed top navigation with section anchors.

use leptos::prelude::*;

use crate::profile::Section;
use crate::state::ui::UiState;

/// Navigation bar that condenses once the page scrolls.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let scroll_y = window().scroll_y().unwrap_or(0.0);
            let mut next = ui.get_untracked();
            if next.observe_scroll(scroll_y) {
                ui.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let nav_class = move || if ui.get().scrolled { "navbar navbar--scrolled" } else { "navbar" };

    view! {
        <nav class=nav_class>
            <div class="navbar__inner">
                <a href=Section::Home.href() class="navbar__brand">
                    <span class="accent">"I"</span>
                    "NBA."
                </a>
                <div class="navbar__links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a href=section.href() class="navbar__link">
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=Section::Contact.href() class="navbar__cta">
                        "HIRE ME"
                    </a>
                </div>
            </div>
        </nav>
    }
}
