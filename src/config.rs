use log::Level;

/// Id of the optional `<script type="application/json">` element carrying hero overrides.
pub const HERO_CONFIG_ELEMENT_ID: &str = "hero-config";

/// Anchor the hero's scroll indicator points at.
pub const FEATURES_ANCHOR: &str = "features";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info  // Production
}
