use crate::warn;
use std::{env, str::FromStr};

/// Start-up conditions of the simulated aircraft and flight control unit.
#[derive(Debug, Clone, PartialEq)]
pub struct FcuConfig {
    pub heading_select: f64,
    pub speed_select: i32,
    pub altitude_select: i32,
    pub vertical_speed_select: i32,
    pub true_airspeed: f64,
    pub initial_heading: f64,
}

impl Default for FcuConfig {
    fn default() -> Self {
        Self {
            heading_select: 17.0,
            speed_select: 250,
            altitude_select: 30000,
            vertical_speed_select: 1500,
            true_airspeed: 150.0,
            initial_heading: 0.0,
        }
    }
}

impl FcuConfig {
    const HEADING_SELECT_VAR: &'static str = "FCU_HEADING_SELECT";
    const SPEED_SELECT_VAR: &'static str = "FCU_SPEED_SELECT";
    const ALTITUDE_SELECT_VAR: &'static str = "FCU_ALTITUDE_SELECT";
    const VS_SELECT_VAR: &'static str = "FCU_VS_SELECT";
    const TRUE_AIRSPEED_VAR: &'static str = "FCU_TRUE_AIRSPEED";
    const INITIAL_HEADING_VAR: &'static str = "FCU_INITIAL_HEADING";

    /// Builds the configuration from the `FCU_*` environment variables, falling back to
    /// the defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let def = Self::default();
        Self {
            heading_select: Self::parse_finite_or(&lookup, Self::HEADING_SELECT_VAR, def.heading_select),
            speed_select: Self::parse_or(&lookup, Self::SPEED_SELECT_VAR, def.speed_select),
            altitude_select: Self::parse_or(&lookup, Self::ALTITUDE_SELECT_VAR, def.altitude_select),
            vertical_speed_select: Self::parse_or(&lookup, Self::VS_SELECT_VAR, def.vertical_speed_select),
            true_airspeed: Self::parse_finite_or(&lookup, Self::TRUE_AIRSPEED_VAR, def.true_airspeed),
            initial_heading: Self::parse_finite_or(&lookup, Self::INITIAL_HEADING_VAR, def.initial_heading),
        }
    }

    fn parse_finite_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64) -> f64 {
        let value = Self::parse_or(lookup, key, default);
        if value.is_finite() {
            value
        } else {
            warn!("Ignoring non-finite {key}={value}, keeping default {default}.");
            default
        }
    }

    fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
    where
        T: FromStr + std::fmt::Display,
    {
        match lookup(key) {
            None => default,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring {key}={raw}, keeping default {default}.");
                default
            }),
        }
    }
}
