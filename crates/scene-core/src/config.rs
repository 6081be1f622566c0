//! Optional per-scene overrides read from the mount element.
//!
//! Every scene has a `*Params` struct with sensible defaults. A
//! [`ParamSource`] (the mount element's `data-*` attributes on the web, a
//! map in tests) can override individual fields; invalid values are logged
//! and the default is kept.

use crate::error::{SceneError, SceneResult};
use fnv::FnvHashMap;
use std::str::FromStr;

pub const PARAM_SPEED: &str = "speed";
pub const PARAM_SEED: &str = "seed";
pub const PARAM_COUNT: &str = "count";
pub const PARAM_COLOR: &str = "color";
pub const PARAM_IMAGES: &str = "images";

pub trait ParamSource {
    fn param(&self, key: &str) -> Option<String>;
}

impl ParamSource for FnvHashMap<String, String> {
    fn param(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// No overrides at all.
pub struct NoParams;

impl ParamSource for NoParams {
    fn param(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Parse `key` if present; `Ok(None)` when the source does not set it.
pub fn parse_param<T: FromStr>(source: &dyn ParamSource, key: &str) -> SceneResult<Option<T>> {
    match source.param(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| SceneError::InvalidParam {
                key: key.to_string(),
                value: raw,
            }),
    }
}

/// Parsed value of `key`, or `default` when missing or invalid.
pub fn param_or<T: FromStr>(source: &dyn ParamSource, key: &str, default: T) -> T {
    match parse_param(source, key) {
        Ok(Some(v)) => v,
        Ok(None) => default,
        Err(e) => {
            log::warn!("[config] {e}; using default");
            default
        }
    }
}

/// A follower speed override, rejected unless it lies in `(0, 1]`.
pub fn speed_or(source: &dyn ParamSource, default: f32) -> f32 {
    let speed = param_or(source, PARAM_SPEED, default);
    if speed > 0.0 && speed <= 1.0 {
        speed
    } else {
        log::warn!("[config] speed {speed} outside (0, 1]; using {default}");
        default
    }
}

/// A count override, rejected when zero.
pub fn count_or(source: &dyn ParamSource, default: usize) -> usize {
    match param_or(source, PARAM_COUNT, default) {
        0 => {
            log::warn!("[config] count must be positive; using {default}");
            default
        }
        n => n,
    }
}

/// A CSS color override; anything non-empty is passed through.
pub fn color_or(source: &dyn ParamSource, default: &str) -> String {
    source
        .param(PARAM_COLOR)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Comma-separated asset URLs, blanks dropped.
pub fn url_list(source: &dyn ParamSource, key: &str) -> Vec<String> {
    source
        .param(key)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
