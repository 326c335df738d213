//! Weather snapshot wire types.
//!
//! Snapshots are plain serde-ready values supplied by a provider adapter
//! (see `skyplan-cli`); the engine only ever borrows them. Forecast entries
//! are the same shape with the date/day fields populated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single observation or forecast entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature in °C.
    pub temp_c: f64,
    /// Chance of rain, integer percent 0-100.
    pub rain_chance: u8,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Relative humidity, integer percent 0-100.
    pub humidity: u8,

    /// Calendar date, set for forecast entries.
    pub date: Option<NaiveDate>,
    /// Weekday label like "Saturday", set for forecast entries.
    pub day_name: Option<String>,
    /// Coarse condition label like "clear" or "rain".
    pub condition: Option<String>,
}

impl WeatherSnapshot {
    pub fn new(temp_c: f64, rain_chance: u8, wind_speed: f64, humidity: u8) -> Self {
        Self {
            temp_c,
            rain_chance,
            wind_speed,
            humidity,
            date: None,
            day_name: None,
            condition: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_day_name(mut self, day_name: impl Into<String>) -> Self {
        self.day_name = Some(day_name.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Date label for user-facing messages ("2026-03-14", or "Unknown").
    pub fn date_label(&self) -> String {
        match self.date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "Unknown".to_string(),
        }
    }

    /// Minimal invariants for safe downstream scoring.
    ///
    /// The engine assumes validated snapshots; adapters call this once at the
    /// provider boundary.
    pub fn validate(&self) -> Result<(), String> {
        if !self.temp_c.is_finite() {
            return Err("temp_c must be finite".to_string());
        }
        if self.rain_chance > 100 {
            return Err("rain_chance must be 0-100".to_string());
        }
        if self.humidity > 100 {
            return Err("humidity must be 0-100".to_string());
        }
        if !self.wind_speed.is_finite() || self.wind_speed < 0.0 {
            return Err("wind_speed must be finite and non-negative".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_json_roundtrip_is_stable() {
        let snap = WeatherSnapshot::new(21.5, 15, 3.2, 55)
            .with_date(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
            .with_day_name("Saturday")
            .with_condition("clear");
        snap.validate().unwrap();

        let json = serde_json::to_string(&snap).unwrap();
        let back: WeatherSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let mut snap = WeatherSnapshot::new(f64::NAN, 0, 0.0, 50);
        assert!(snap.validate().is_err());

        snap.temp_c = 20.0;
        snap.rain_chance = 101;
        assert!(snap.validate().is_err());

        snap.rain_chance = 10;
        snap.wind_speed = -1.0;
        assert!(snap.validate().is_err());
    }

    #[test]
    fn date_label_falls_back_to_unknown() {
        let snap = WeatherSnapshot::new(20.0, 0, 0.0, 50);
        assert_eq!(snap.date_label(), "Unknown");
        let dated = snap.with_date(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
        assert_eq!(dated.date_label(), "2026-03-14");
    }
}
