use yew::prelude::*;
use web_sys::window;

use crate::config::{FEATURES_ANCHOR, HERO_CONFIG_ELEMENT_ID};
use crate::hero::component::Hero;
use crate::hero::config::HeroOverrides;

/// Reads the overrides embedded in the page, if any. Missing or unreadable
/// JSON leaves every field at its default.
pub fn page_overrides() -> HeroOverrides {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|document| document.get_element_by_id(HERO_CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => {
            log::debug!("Loading hero overrides from #{}", HERO_CONFIG_ELEMENT_ID);
            HeroOverrides::from_json_lenient(&raw)
        }
        _ => HeroOverrides::default(),
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let overrides = use_memo(|_| page_overrides(), ());

    html! {
        <main class="home">
            <Hero overrides={(*overrides).clone()} />
            <section id={FEATURES_ANCHOR} class="features" style="min-height: 60vh; padding: 5rem 1rem;">
                <h2 style="text-align: center;">{"Features"}</h2>
            </section>
        </main>
    }
}
