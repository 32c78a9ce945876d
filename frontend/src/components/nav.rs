use log::{debug, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::behaviors::scroll_state::ScrollStatus;
use crate::viewport::ScrollListener;

pub const NAV_ITEMS: &[&str] = &["Features", "How It Works", "For Companies", "Contact Us"];

/// "How It Works" -> "#how-it-works"
pub fn anchor_href(item: &str) -> String {
    let slug = item
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("#{}", slug)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let mut status = ScrollStatus::new();
            let listener = ScrollListener::attach(move |offset| {
                if status.observe(offset) {
                    debug!("navbar scrolled state -> {}", status.is_past_threshold());
                    is_scrolled.set(status.is_past_threshold());
                }
            });
            if listener.is_none() {
                warn!("no window to watch, navbar stays transparent");
            }

            move || drop(listener)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <img src="/assets/logo.svg" alt="Logo" />
                    <span>{"MatchTrack"}</span>
                </a>

                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a href={anchor_href(item)} class="nav-link">{*item}</a>
                    }) }
                </div>

                <button class="nav-cta pressable">{"Get Started"}</button>

                <button class={classes!("burger-menu", (*menu_open).then(|| "open"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "mobile-menu-open"))}>
                { for NAV_ITEMS.iter().map(|item| html! {
                    <a href={anchor_href(item)} class="mobile-link" onclick={close_menu.clone()}>{*item}</a>
                }) }
                <button class="mobile-cta">{"Get Started"}</button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_match_section_ids() {
        let hrefs: Vec<String> = NAV_ITEMS.iter().map(|item| anchor_href(item)).collect();
        assert_eq!(hrefs, ["#features", "#how-it-works", "#for-companies", "#contact-us"]);
    }

    #[test]
    fn collapses_repeated_whitespace() {
        assert_eq!(anchor_href("  For   Companies "), "#for-companies");
    }
}
