use leptos::prelude::*;

use crate::profile::Profile;

#[component]
pub fn Footer() -> impl IntoView {
    let profile = expect_context::<&'static Profile>();

    view! {
        <footer class="footer container">
            <span class="footer__brand">
                {profile.first_name}
                <span class="accent">{format!("{}.", profile.last_name)}</span>
            </span>
            <div class="footer__links">
                <a href=profile.socials.linkedin>"LinkedIn"</a>
                <a href=profile.socials.github>"GitHub"</a>
                <a href=profile.socials.leetcode>"LeetCode"</a>
            </div>
            <p class="footer__copyright">"\u{a9} 2025 AI Dev Portfolio"</p>
        </footer>
    }
}
