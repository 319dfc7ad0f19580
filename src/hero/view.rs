//! Render composer: turns an effective [`HeroConfig`] into the ordered list of
//! blocks the hero draws.
//!
//! Everything here is plain data so that inclusion rules, ordering and the
//! editable-field tags can be checked without a browser.

use chrono::{DateTime, Utc};
use yew::Callback;

use super::config::{fields, BackgroundPattern, HeroConfig};
use super::icons::Icon;
use crate::config::FEATURES_ANCHOR;
use crate::effects::countdown::CountdownState;
use crate::effects::smooth_scroll::DEFAULT_DURATION_MS;

pub const TRUSTED_LOGO_COUNT: usize = 5;
pub const COUNTDOWN_LABEL: &str = "Launch in:";
pub const COUNTDOWN_COMPLETED: &str = "🎉 TechFlow v2.0 is Live!";
pub const SCROLL_INDICATOR_LABEL: &str = "Scroll to explore";

/// Text bound to one configuration field, tagged with that field's name.
#[derive(Clone, Debug, PartialEq)]
pub struct Editable {
    pub field: &'static str,
    pub text: String,
}

impl Editable {
    fn new(field: &'static str, text: &str) -> Self {
        Self {
            field,
            text: text.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeaturePill {
    pub index: usize,
    pub icon: Icon,
    pub text: Editable,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallToAction {
    pub label: Editable,
    pub href: String,
    pub href_field: &'static str,
}

impl CallToAction {
    /// Hands this control's destination to the navigation resolver.
    pub fn activate(&self, navigate: &Callback<String>) {
        navigate.emit(self.href.clone());
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum HeroBlock {
    /// Particle field plus at most one pattern overlay.
    Background { pattern: Option<BackgroundPattern> },
    Badge(Editable),
    Countdown { launch_date: DateTime<Utc> },
    Title { title: Editable, highlight: Editable },
    TypedText { strings: Vec<String> },
    Subtitle(Editable),
    Features([FeaturePill; 3]),
    Actions { primary: CallToAction, secondary: CallToAction },
    TrustedBy { label: Editable, logo_count: usize },
    ScrollIndicator { anchor: &'static str, duration_ms: u32, label: &'static str },
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroView {
    pub blocks: Vec<HeroBlock>,
}

impl HeroView {
    pub fn compose(config: &HeroConfig) -> Self {
        let pattern = match config.background_pattern {
            BackgroundPattern::Plain => None,
            pattern => Some(pattern),
        };

        let mut blocks = vec![HeroBlock::Background { pattern }];

        if config.show_animated_badge {
            blocks.push(HeroBlock::Badge(Editable::new(fields::BADGE, &config.badge)));
        }
        if config.show_countdown {
            blocks.push(HeroBlock::Countdown {
                launch_date: config.launch_date,
            });
        }

        blocks.push(HeroBlock::Title {
            title: Editable::new(fields::TITLE, &config.title),
            highlight: Editable::new(fields::TITLE_HIGHLIGHT, &config.title_highlight),
        });
        blocks.push(HeroBlock::TypedText {
            strings: config.typed_strings.clone(),
        });
        blocks.push(HeroBlock::Subtitle(Editable::new(fields::SUBTITLE, &config.subtitle)));

        let pill = |index: usize, icon: &str, field: &'static str, text: &str| FeaturePill {
            index,
            icon: Icon::from_name(icon),
            text: Editable::new(field, text),
        };
        blocks.push(HeroBlock::Features([
            pill(0, &config.feature1_icon, fields::FEATURE1_TEXT, &config.feature1_text),
            pill(1, &config.feature2_icon, fields::FEATURE2_TEXT, &config.feature2_text),
            pill(2, &config.feature3_icon, fields::FEATURE3_TEXT, &config.feature3_text),
        ]));

        blocks.push(HeroBlock::Actions {
            primary: CallToAction {
                label: Editable::new(fields::PRIMARY_CTA, &config.primary_cta),
                href: config.primary_cta_href.clone(),
                href_field: fields::PRIMARY_CTA_HREF,
            },
            secondary: CallToAction {
                label: Editable::new(fields::SECONDARY_CTA, &config.secondary_cta),
                href: config.secondary_cta_href.clone(),
                href_field: fields::SECONDARY_CTA_HREF,
            },
        });

        if config.show_trusted_logos {
            blocks.push(HeroBlock::TrustedBy {
                label: Editable::new(fields::TRUSTED_BY_TEXT, &config.trusted_by_text),
                logo_count: TRUSTED_LOGO_COUNT,
            });
        }

        blocks.push(HeroBlock::ScrollIndicator {
            anchor: FEATURES_ANCHOR,
            duration_ms: DEFAULT_DURATION_MS,
            label: SCROLL_INDICATOR_LABEL,
        });

        Self { blocks }
    }

    /// Every editable tag in render order.
    #[cfg(test)]
    pub fn editable_fields(&self) -> Vec<&'static str> {
        let mut tags = Vec::new();
        for block in &self.blocks {
            match block {
                HeroBlock::Badge(text) | HeroBlock::Subtitle(text) => tags.push(text.field),
                HeroBlock::Title { title, highlight } => {
                    tags.push(title.field);
                    tags.push(highlight.field);
                }
                HeroBlock::Features(pills) => tags.extend(pills.iter().map(|p| p.text.field)),
                HeroBlock::Actions { primary, secondary } => {
                    tags.push(primary.label.field);
                    tags.push(secondary.label.field);
                }
                HeroBlock::TrustedBy { label, .. } => tags.push(label.field),
                _ => {}
            }
        }
        tags
    }

    #[cfg(test)]
    pub fn actions(&self) -> Option<(&CallToAction, &CallToAction)> {
        self.blocks.iter().find_map(|block| match block {
            HeroBlock::Actions { primary, secondary } => Some((primary, secondary)),
            _ => None,
        })
    }
}

/// What the countdown slot shows for a given tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountdownDisplay {
    Live(&'static str),
    Remaining { label: &'static str, parts: [String; 4] },
}

impl CountdownDisplay {
    pub fn for_state(state: &CountdownState) -> Self {
        if state.completed {
            return CountdownDisplay::Live(COUNTDOWN_COMPLETED);
        }
        CountdownDisplay::Remaining {
            label: COUNTDOWN_LABEL,
            parts: [
                format!("{}d", state.days),
                format!("{}h", state.hours),
                format!("{}m", state.minutes),
                format!("{}s", state.seconds),
            ],
        }
    }
}
