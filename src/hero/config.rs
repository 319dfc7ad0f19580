use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Configuration field names. Editable elements are tagged with these verbatim.
pub mod fields {
    pub const BADGE: &str = "badge";
    pub const SHOW_ANIMATED_BADGE: &str = "showAnimatedBadge";
    pub const TITLE: &str = "title";
    pub const TITLE_HIGHLIGHT: &str = "titleHighlight";
    pub const TYPED_STRINGS: &str = "typedStrings";
    pub const SUBTITLE: &str = "subtitle";
    pub const PRIMARY_CTA: &str = "primaryCTA";
    pub const SECONDARY_CTA: &str = "secondaryCTA";
    pub const PRIMARY_CTA_HREF: &str = "primaryCTAHref";
    pub const SECONDARY_CTA_HREF: &str = "secondaryCTAHref";
    pub const FEATURE1_ICON: &str = "feature1Icon";
    pub const FEATURE1_TEXT: &str = "feature1Text";
    pub const FEATURE2_ICON: &str = "feature2Icon";
    pub const FEATURE2_TEXT: &str = "feature2Text";
    pub const FEATURE3_ICON: &str = "feature3Icon";
    pub const FEATURE3_TEXT: &str = "feature3Text";
    pub const TRUSTED_BY_TEXT: &str = "trustedByText";
    pub const SHOW_TRUSTED_LOGOS: &str = "showTrustedLogos";
    pub const BACKGROUND_PATTERN: &str = "backgroundPattern";
    pub const LAUNCH_DATE: &str = "launchDate";
    pub const SHOW_COUNTDOWN: &str = "showCountdown";
}

/// How far ahead of "now" the default launch date sits.
pub const DEFAULT_LAUNCH_LEAD_DAYS: i64 = 30;

/// Decorative overlay drawn above the particle field.
///
/// Unknown names decode to `Plain`, which draws no overlay at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum BackgroundPattern {
    Dots,
    Grid,
    Gradient,
    Plain,
}

impl BackgroundPattern {
    pub fn from_name(name: &str) -> Self {
        match name {
            "dots" => BackgroundPattern::Dots,
            "grid" => BackgroundPattern::Grid,
            "gradient" => BackgroundPattern::Gradient,
            _ => BackgroundPattern::Plain,
        }
    }
}

impl From<String> for BackgroundPattern {
    fn from(name: String) -> Self {
        BackgroundPattern::from_name(&name)
    }
}

/// The effective hero configuration. Every field is always populated.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroConfig {
    pub badge: String,
    pub show_animated_badge: bool,
    pub title: String,
    pub title_highlight: String,
    pub typed_strings: Vec<String>,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub primary_cta_href: String,
    pub secondary_cta_href: String,
    pub feature1_icon: String,
    pub feature1_text: String,
    pub feature2_icon: String,
    pub feature2_text: String,
    pub feature3_icon: String,
    pub feature3_text: String,
    pub trusted_by_text: String,
    pub show_trusted_logos: bool,
    pub background_pattern: BackgroundPattern,
    pub launch_date: DateTime<Utc>,
    pub show_countdown: bool,
}

impl HeroConfig {
    /// Default configuration with the launch date anchored at `now`.
    pub fn defaults_at(now: DateTime<Utc>) -> Self {
        Self {
            badge: "🚀 TechFlow v2.0 launching soon".to_string(),
            show_animated_badge: true,
            title: "Build the future with".to_string(),
            title_highlight: "TechFlow".to_string(),
            typed_strings: vec![
                "lightning-fast apps".to_string(),
                "scalable platforms".to_string(),
                "modern solutions".to_string(),
                "cutting-edge tech".to_string(),
            ],
            subtitle: "The ultimate development platform for startups and enterprises. Ship faster, scale better, and innovate without limits.".to_string(),
            primary_cta: "Start Free Trial".to_string(),
            secondary_cta: "Watch Demo".to_string(),
            primary_cta_href: "/signup".to_string(),
            secondary_cta_href: "/demo".to_string(),
            feature1_icon: "zap".to_string(),
            feature1_text: "Deploy in seconds".to_string(),
            feature2_icon: "shield".to_string(),
            feature2_text: "Enterprise security".to_string(),
            feature3_icon: "globe".to_string(),
            feature3_text: "Global CDN".to_string(),
            trusted_by_text: "Trusted by 50,000+ developers worldwide".to_string(),
            show_trusted_logos: true,
            background_pattern: BackgroundPattern::Dots,
            launch_date: now + Duration::days(DEFAULT_LAUNCH_LEAD_DAYS),
            show_countdown: true,
        }
    }

    pub fn resolve(overrides: HeroOverrides) -> Self {
        Self::resolve_at(overrides, Utc::now())
    }

    pub fn resolve_at(overrides: HeroOverrides, now: DateTime<Utc>) -> Self {
        overrides.apply(Self::defaults_at(now))
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self::defaults_at(Utc::now())
    }
}

/// Caller-supplied partial configuration. `None` means "not supplied".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeroOverrides {
    pub badge: Option<String>,
    pub show_animated_badge: Option<bool>,
    pub title: Option<String>,
    pub title_highlight: Option<String>,
    pub typed_strings: Option<Vec<String>>,
    pub subtitle: Option<String>,
    pub primary_cta: Option<String>,
    pub secondary_cta: Option<String>,
    pub primary_cta_href: Option<String>,
    pub secondary_cta_href: Option<String>,
    pub feature1_icon: Option<String>,
    pub feature1_text: Option<String>,
    pub feature2_icon: Option<String>,
    pub feature2_text: Option<String>,
    pub feature3_icon: Option<String>,
    pub feature3_text: Option<String>,
    pub trusted_by_text: Option<String>,
    pub show_trusted_logos: Option<bool>,
    pub background_pattern: Option<BackgroundPattern>,
    pub launch_date: Option<DateTime<Utc>>,
    pub show_countdown: Option<bool>,
}

impl HeroOverrides {
    /// Field-wise merge onto `base`.
    pub fn apply(self, base: HeroConfig) -> HeroConfig {
        HeroConfig {
            badge: self.badge.unwrap_or(base.badge),
            show_animated_badge: self.show_animated_badge.unwrap_or(base.show_animated_badge),
            title: self.title.unwrap_or(base.title),
            title_highlight: self.title_highlight.unwrap_or(base.title_highlight),
            typed_strings: self.typed_strings.unwrap_or(base.typed_strings),
            subtitle: self.subtitle.unwrap_or(base.subtitle),
            primary_cta: self.primary_cta.unwrap_or(base.primary_cta),
            secondary_cta: self.secondary_cta.unwrap_or(base.secondary_cta),
            primary_cta_href: self.primary_cta_href.unwrap_or(base.primary_cta_href),
            secondary_cta_href: self.secondary_cta_href.unwrap_or(base.secondary_cta_href),
            feature1_icon: self.feature1_icon.unwrap_or(base.feature1_icon),
            feature1_text: self.feature1_text.unwrap_or(base.feature1_text),
            feature2_icon: self.feature2_icon.unwrap_or(base.feature2_icon),
            feature2_text: self.feature2_text.unwrap_or(base.feature2_text),
            feature3_icon: self.feature3_icon.unwrap_or(base.feature3_icon),
            feature3_text: self.feature3_text.unwrap_or(base.feature3_text),
            trusted_by_text: self.trusted_by_text.unwrap_or(base.trusted_by_text),
            show_trusted_logos: self.show_trusted_logos.unwrap_or(base.show_trusted_logos),
            background_pattern: self.background_pattern.unwrap_or(base.background_pattern),
            launch_date: self.launch_date.unwrap_or(base.launch_date),
            show_countdown: self.show_countdown.unwrap_or(base.show_countdown),
        }
    }

    /// Decodes overrides from JSON, one field at a time.
    ///
    /// A field with the wrong type is skipped, the rest still apply. Anything
    /// that is not a JSON object yields no overrides.
    pub fn from_json_lenient(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Self::from_map(&map),
            Ok(_) => {
                log::warn!("Hero overrides are not a JSON object, using defaults");
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to parse hero overrides: {}", e);
                Self::default()
            }
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            badge: field(map, fields::BADGE),
            show_animated_badge: field(map, fields::SHOW_ANIMATED_BADGE),
            title: field(map, fields::TITLE),
            title_highlight: field(map, fields::TITLE_HIGHLIGHT),
            typed_strings: field(map, fields::TYPED_STRINGS),
            subtitle: field(map, fields::SUBTITLE),
            primary_cta: field(map, fields::PRIMARY_CTA),
            secondary_cta: field(map, fields::SECONDARY_CTA),
            primary_cta_href: field(map, fields::PRIMARY_CTA_HREF),
            secondary_cta_href: field(map, fields::SECONDARY_CTA_HREF),
            feature1_icon: field(map, fields::FEATURE1_ICON),
            feature1_text: field(map, fields::FEATURE1_TEXT),
            feature2_icon: field(map, fields::FEATURE2_ICON),
            feature2_text: field(map, fields::FEATURE2_TEXT),
            feature3_icon: field(map, fields::FEATURE3_ICON),
            feature3_text: field(map, fields::FEATURE3_TEXT),
            trusted_by_text: field(map, fields::TRUSTED_BY_TEXT),
            show_trusted_logos: field(map, fields::SHOW_TRUSTED_LOGOS),
            background_pattern: field(map, fields::BACKGROUND_PATTERN),
            launch_date: launch_date_field(map),
            show_countdown: field(map, fields::SHOW_COUNTDOWN),
        }
    }
}

fn field<T: DeserializeOwned>(map: &Map<String, Value>, key: &str) -> Option<T> {
    match map.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                log::warn!("Ignoring hero override `{}`: {}", key, e);
                None
            }
        },
    }
}

// Accepts an RFC 3339 string or epoch milliseconds.
fn launch_date_field(map: &Map<String, Value>) -> Option<DateTime<Utc>> {
    match map.get(fields::LAUNCH_DATE) {
        Some(Value::Number(ms)) => match ms.as_i64().and_then(|ms| Utc.timestamp_millis_opt(ms).single()) {
            Some(date) => Some(date),
            None => {
                log::warn!("Ignoring hero override `{}`: {} is out of range", fields::LAUNCH_DATE, ms);
                None
            }
        },
        _ => field(map, fields::LAUNCH_DATE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn no_overrides_yields_defaults() {
        let config = HeroConfig::resolve_at(HeroOverrides::default(), fixed_now());
        assert_eq!(config, HeroConfig::defaults_at(fixed_now()));
        assert_eq!(config.primary_cta_href, "/signup");
        assert_eq!(config.secondary_cta_href, "/demo");
        assert_eq!(config.background_pattern, BackgroundPattern::Dots);
        assert_eq!(config.launch_date, fixed_now() + Duration::days(30));
    }

    #[test]
    fn only_supplied_fields_are_replaced() {
        let overrides = HeroOverrides {
            title: Some("Ship it with".to_string()),
            show_countdown: Some(false),
            background_pattern: Some(BackgroundPattern::Grid),
            typed_strings: Some(vec!["one".to_string()]),
            ..Default::default()
        };
        let config = HeroConfig::resolve_at(overrides, fixed_now());

        let expected = HeroConfig {
            title: "Ship it with".to_string(),
            show_countdown: false,
            background_pattern: BackgroundPattern::Grid,
            typed_strings: vec!["one".to_string()],
            ..HeroConfig::defaults_at(fixed_now())
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn unknown_pattern_names_draw_nothing() {
        assert_eq!(BackgroundPattern::from_name("dots"), BackgroundPattern::Dots);
        assert_eq!(BackgroundPattern::from_name("grid"), BackgroundPattern::Grid);
        assert_eq!(BackgroundPattern::from_name("gradient"), BackgroundPattern::Gradient);
        assert_eq!(BackgroundPattern::from_name("stripes"), BackgroundPattern::Plain);
        assert_eq!(BackgroundPattern::from_name("Dots"), BackgroundPattern::Plain);
    }

    #[test]
    fn json_overrides_use_original_field_names() {
        let overrides = HeroOverrides::from_json_lenient(
            r#"{
                "primaryCTA": "Get going",
                "primaryCTAHref": "https://example.com/start",
                "feature2Icon": "rocket",
                "showTrustedLogos": false,
                "backgroundPattern": "gradient",
                "launchDate": "2027-01-01T00:00:00Z"
            }"#,
        );
        assert_eq!(overrides.primary_cta.as_deref(), Some("Get going"));
        assert_eq!(overrides.primary_cta_href.as_deref(), Some("https://example.com/start"));
        assert_eq!(overrides.feature2_icon.as_deref(), Some("rocket"));
        assert_eq!(overrides.show_trusted_logos, Some(false));
        assert_eq!(overrides.background_pattern, Some(BackgroundPattern::Gradient));
        assert_eq!(
            overrides.launch_date,
            Some(Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(overrides.title, None);
    }

    #[test]
    fn mistyped_and_null_fields_fall_back() {
        let overrides = HeroOverrides::from_json_lenient(
            r#"{ "title": 42, "subtitle": null, "showCountdown": "yes", "badge": "New!" }"#,
        );
        assert_eq!(overrides.title, None);
        assert_eq!(overrides.subtitle, None);
        assert_eq!(overrides.show_countdown, None);
        assert_eq!(overrides.badge.as_deref(), Some("New!"));

        let config = HeroConfig::resolve_at(overrides, fixed_now());
        let defaults = HeroConfig::defaults_at(fixed_now());
        assert_eq!(config.title, defaults.title);
        assert!(config.show_countdown);
        assert_eq!(config.badge, "New!");
    }

    #[test]
    fn launch_date_accepts_epoch_millis() {
        let overrides = HeroOverrides::from_json_lenient(r#"{ "launchDate": 1800000000000 }"#);
        assert_eq!(overrides.launch_date, Utc.timestamp_millis_opt(1_800_000_000_000).single());
    }

    #[test]
    fn non_object_json_means_no_overrides() {
        assert_eq!(HeroOverrides::from_json_lenient("[1, 2, 3]"), HeroOverrides::default());
        assert_eq!(HeroOverrides::from_json_lenient("{ not json"), HeroOverrides::default());
    }
}
