use yew::prelude::*;

use super::config::{BackgroundPattern, HeroConfig, HeroOverrides};
use super::icons::Icon;
use super::style::HERO_CSS;
use super::view::{CallToAction, CountdownDisplay, Editable, FeaturePill, HeroBlock, HeroView};
use crate::effects::countdown::{Countdown, CountdownState};
use crate::effects::navigation::use_smart_navigation;
use crate::effects::particles::Particles;
use crate::effects::smooth_scroll::ScrollLink;
use crate::effects::typewriter::TypedText;
use crate::motion::parallax::use_pointer_parallax;
use crate::motion::scroll::use_scroll_progress;
use crate::motion::transform::{
    content_opacity, feature_pill_drift, primary_orb_shift_percent, secondary_orb_drift,
    secondary_orb_shift_percent,
};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_default]
    pub overrides: HeroOverrides,
    /// Replaces the default navigation resolver for the call-to-action buttons.
    #[prop_or_default]
    pub on_navigate: Option<Callback<String>>,
}

/// Live motion values shared by every block of one render.
struct Motion {
    spring_x: f64,
    spring_y: f64,
    scroll_progress: f64,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    // Resolved once per set of overrides so the default launch date stays put.
    let config = use_memo(|overrides: &HeroOverrides| HeroConfig::resolve(overrides.clone()), props.overrides.clone());
    let view = HeroView::compose(&config);

    let section = use_node_ref();
    let parallax = use_pointer_parallax(section.clone());
    let scroll_progress = use_scroll_progress(section.clone());
    let smart_navigate = use_smart_navigation();
    let navigate = props.on_navigate.clone().unwrap_or(smart_navigate);

    let motion = Motion {
        spring_x: parallax.x,
        spring_y: parallax.y,
        scroll_progress,
    };

    let (background, content): (Vec<&HeroBlock>, Vec<&HeroBlock>) = view
        .blocks
        .iter()
        .partition(|block| matches!(block, HeroBlock::Background { .. }));

    html! {
        <section id="hero" class="hero-section" ref={section} onmousemove={parallax.onmousemove.clone()}>
            <style>{HERO_CSS}</style>
            { for background.into_iter().map(|block| render_block(block, &motion, &navigate)) }
            <div class="hero-container">
                <div
                    class="hero-content"
                    style={format!("opacity: {:.3};", content_opacity(motion.scroll_progress))}
                >
                    { for content.into_iter().map(|block| render_block(block, &motion, &navigate)) }
                </div>
            </div>
        </section>
    }
}

fn render_block(block: &HeroBlock, motion: &Motion, navigate: &Callback<String>) -> Html {
    match block {
        HeroBlock::Background { pattern } => render_background(*pattern, motion),
        HeroBlock::Badge(text) => html! {
            <div class="hero-badge-wrap hero-rise">
                <div class="hero-badge">
                    <span class="hero-badge-icon">{ Icon::Sparkles.render("hero-icon-primary") }</span>
                    { editable_span(text, "hero-muted") }
                </div>
            </div>
        },
        HeroBlock::Countdown { launch_date } => html! {
            <div class="hero-countdown hero-pop" style="animation-delay: 0.1s;">
                <Countdown date={*launch_date} renderer={Callback::from(render_countdown)} />
            </div>
        },
        HeroBlock::Title { title, highlight } => html! {
            <h1 class="hero-title hero-fade" style="animation-delay: 0.2s;">
                <span data-editable={title.field} class="hero-title-line hero-rise" style="animation-delay: 0.3s;">
                    { title.text.clone() }
                </span>
                <span class="hero-title-highlight-wrap hero-rise" style="animation-delay: 0.4s;">
                    { editable_span(highlight, "hero-gradient-text") }
                    <svg class="hero-star" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                        <path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z" />
                    </svg>
                </span>
            </h1>
        },
        HeroBlock::TypedText { strings } => html! {
            <div class="hero-typed hero-fade" style="animation-delay: 0.6s;">
                <TypedText strings={strings.clone()} class={classes!("hero-typed-text")} />
            </div>
        },
        HeroBlock::Subtitle(text) => html! {
            <p data-editable={text.field} class="hero-subtitle hero-rise" style="animation-delay: 0.7s;">
                { text.text.clone() }
            </p>
        },
        HeroBlock::Features(pills) => html! {
            <div class="hero-features hero-fade" style="animation-delay: 0.8s;">
                { for pills.iter().map(|pill| render_pill(pill, motion)) }
            </div>
        },
        HeroBlock::Actions { primary, secondary } => html! {
            <div class="hero-actions hero-rise" style="animation-delay: 1.2s;">
                <button
                    class="hero-button hero-button-primary"
                    onclick={activation(primary, navigate)}
                    data-editable-href={primary.href_field}
                    data-href={primary.href.clone()}
                >
                    { editable_span(&primary.label, "") }
                    { Icon::ArrowRight.render("hero-button-arrow") }
                </button>
                <button
                    class="hero-button hero-button-outline"
                    onclick={activation(secondary, navigate)}
                    data-editable-href={secondary.href_field}
                    data-href={secondary.href.clone()}
                >
                    { editable_span(&secondary.label, "") }
                </button>
            </div>
        },
        HeroBlock::TrustedBy { label, logo_count } => html! {
            <div class="hero-trusted hero-rise" style="animation-delay: 1.4s;">
                <p data-editable={label.field} class="hero-trusted-label">{ label.text.clone() }</p>
                <div class="hero-logos">
                    { for (0..*logo_count).map(|_| html! { <div class="hero-logo-placeholder"></div> }) }
                </div>
            </div>
        },
        HeroBlock::ScrollIndicator { anchor, duration_ms, label } => html! {
            <div class="hero-scroll-indicator hero-drop" style="animation-delay: 2s;">
                <ScrollLink to={*anchor} duration={*duration_ms} class="hero-scroll-link">
                    <div class="hero-scroll-bounce">
                        <span class="hero-scroll-label">{ *label }</span>
                        { Icon::ArrowRight.render("hero-scroll-arrow") }
                    </div>
                </ScrollLink>
            </div>
        },
    }
}

fn render_background(pattern: Option<BackgroundPattern>, motion: &Motion) -> Html {
    let overlay = match pattern {
        Some(BackgroundPattern::Dots) => html! { <div class="hero-pattern hero-pattern-dots"></div> },
        Some(BackgroundPattern::Grid) => html! { <div class="hero-pattern hero-pattern-grid"></div> },
        Some(BackgroundPattern::Gradient) => html! { <div class="hero-pattern hero-pattern-gradient"></div> },
        Some(BackgroundPattern::Plain) | None => html! {},
    };

    // Orb A: scroll drift on the track, pointer follow on the orb itself.
    let track_style = format!(
        "transform: translateY({:.2}%);",
        primary_orb_shift_percent(motion.scroll_progress)
    );
    let orb_a_style = format!(
        "transform: translate({:.2}px, {:.2}px);",
        motion.spring_x, motion.spring_y
    );
    let orb_b_style = format!(
        "transform: translate({:.2}px, {:.2}%);",
        secondary_orb_drift(motion.spring_x),
        secondary_orb_shift_percent(motion.scroll_progress)
    );

    html! {
        <>
            <Particles id="tsparticles" class={classes!("hero-particles")} />
            { overlay }
            <div class="hero-orb-track" style={track_style}>
                <div class="hero-orb hero-orb-primary" style={orb_a_style}></div>
            </div>
            <div class="hero-orb hero-orb-secondary" style={orb_b_style}></div>
        </>
    }
}

fn render_pill(pill: &FeaturePill, motion: &Motion) -> Html {
    let style = format!(
        "animation-delay: {:.1}s; translate: {:.2}px 0;",
        0.9 + pill.index as f64 * 0.1,
        feature_pill_drift(motion.spring_x, pill.index)
    );
    html! {
        <div class="hero-pill hero-rise" {style}>
            { pill.icon.render("hero-icon-primary") }
            { editable_span(&pill.text, "hero-muted") }
        </div>
    }
}

fn render_countdown(state: CountdownState) -> Html {
    match CountdownDisplay::for_state(&state) {
        CountdownDisplay::Live(message) => html! {
            <span class="hero-countdown-live">{ message }</span>
        },
        CountdownDisplay::Remaining { label, parts } => html! {
            <div class="hero-countdown-pending">
                <span class="hero-muted">{ label }</span>
                <div class="hero-countdown-parts">
                    { for parts.into_iter().map(|part| html! {
                        <div class="hero-countdown-part">{ part }</div>
                    }) }
                </div>
            </div>
        },
    }
}

fn editable_span(text: &Editable, class: &'static str) -> Html {
    html! {
        <span data-editable={text.field} class={class}>{ text.text.clone() }</span>
    }
}

fn activation(cta: &CallToAction, navigate: &Callback<String>) -> Callback<MouseEvent> {
    let cta = cta.clone();
    let navigate = navigate.clone();
    Callback::from(move |_: MouseEvent| cta.activate(&navigate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::config::fields;
    use crate::hero::view::{COUNTDOWN_COMPLETED, COUNTDOWN_LABEL, TRUSTED_LOGO_COUNT};
    use chrono::{Duration, Utc};
    use yew::LocalServerRenderer;

    fn render(overrides: HeroOverrides) -> String {
        let props = HeroProps {
            overrides,
            on_navigate: Some(Callback::from(|_: String| ())),
        };
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        tokio::task::LocalSet::new().block_on(
            &runtime,
            LocalServerRenderer::<Hero>::with_props(props).render(),
        )
    }

    fn count(markup: &str, needle: &str) -> usize {
        markup.matches(needle).count()
    }

    fn overlays(markup: &str) -> usize {
        count(markup, "class=\"hero-pattern ")
    }

    #[test]
    fn every_editable_field_is_tagged_once() {
        let markup = render(HeroOverrides::default());
        for field in [
            fields::BADGE,
            fields::TITLE,
            fields::TITLE_HIGHLIGHT,
            fields::SUBTITLE,
            fields::FEATURE1_TEXT,
            fields::FEATURE2_TEXT,
            fields::FEATURE3_TEXT,
            fields::PRIMARY_CTA,
            fields::SECONDARY_CTA,
            fields::TRUSTED_BY_TEXT,
        ] {
            assert_eq!(count(&markup, &format!("data-editable=\"{}\"", field)), 1, "{}", field);
        }
        for field in [fields::PRIMARY_CTA_HREF, fields::SECONDARY_CTA_HREF] {
            assert_eq!(count(&markup, &format!("data-editable-href=\"{}\"", field)), 1, "{}", field);
        }
        assert!(markup.contains("data-href=\"/signup\""));
        assert!(markup.contains("data-href=\"/demo\""));
    }

    #[test]
    fn each_pattern_draws_exactly_its_overlay() {
        for (pattern, class) in [
            (BackgroundPattern::Dots, "hero-pattern-dots"),
            (BackgroundPattern::Grid, "hero-pattern-grid"),
            (BackgroundPattern::Gradient, "hero-pattern-gradient"),
        ] {
            let markup = render(HeroOverrides {
                background_pattern: Some(pattern),
                ..Default::default()
            });
            assert_eq!(overlays(&markup), 1, "{:?}", pattern);
            assert!(markup.contains(&format!("class=\"hero-pattern {}\"", class)), "{:?}", pattern);
        }

        let plain = render(HeroOverrides {
            background_pattern: Some(BackgroundPattern::from_name("waves")),
            ..Default::default()
        });
        assert_eq!(overlays(&plain), 0);
        assert!(plain.contains("id=\"tsparticles\""));
    }

    #[test]
    fn trusted_section_draws_placeholder_logos() {
        let markup = render(HeroOverrides::default());
        assert_eq!(count(&markup, "class=\"hero-logo-placeholder\""), TRUSTED_LOGO_COUNT);
    }

    #[test]
    fn pending_launch_shows_the_breakdown() {
        let markup = render(HeroOverrides::default());
        assert!(markup.contains(COUNTDOWN_LABEL));
        assert!(!markup.contains(COUNTDOWN_COMPLETED));
        assert_eq!(count(&markup, "class=\"hero-countdown-part\""), 4);
    }

    #[test]
    fn past_launch_shows_the_live_message() {
        let markup = render(HeroOverrides {
            launch_date: Some(Utc::now() - Duration::days(1)),
            ..Default::default()
        });
        assert!(markup.contains(COUNTDOWN_COMPLETED));
        assert!(!markup.contains(COUNTDOWN_LABEL));
        assert_eq!(count(&markup, "class=\"hero-countdown-part\""), 0);
    }

    #[test]
    fn toggled_off_sections_leave_no_markup() {
        let markup = render(HeroOverrides {
            show_animated_badge: Some(false),
            show_countdown: Some(false),
            show_trusted_logos: Some(false),
            ..Default::default()
        });
        assert_eq!(count(&markup, "data-editable=\"badge\""), 0);
        assert_eq!(count(&markup, "data-editable=\"trustedByText\""), 0);
        assert_eq!(count(&markup, "class=\"hero-countdown "), 0);
        assert_eq!(count(&markup, "class=\"hero-logo-placeholder\""), 0);
        assert_eq!(count(&markup, "data-editable=\"title\""), 1);
    }
}
