//! Weather suitability scoring.
//!
//! Four weighted sub-scores (temperature, rain, wind, humidity), each mapped
//! onto [0, 100], combined into a single suitability score and letter rating.
//! Indoor tasks short-circuit: weather has no effect on them.
//!
//! Scoring is a pure function of (task classification, snapshot). No hidden
//! state, no randomness; identical inputs yield bit-identical results.

use serde::{Deserialize, Serialize};

use crate::classify::ClassifierConfig;
use crate::weather::WeatherSnapshot;

/// Letter rating for a suitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Rating {
    /// Fixed thresholds: >=80 Excellent, >=60 Good, >=40 Fair, else Poor.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Rating::Excellent
        } else if score >= 60.0 {
            Rating::Good
        } else if score >= 40.0 {
            Rating::Fair
        } else {
            Rating::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Fair => "Fair",
            Rating::Poor => "Poor",
        }
    }
}

/// Weights and temperature bands. `Default` carries the tuned production
/// constants; tests inject their own.
#[derive(Debug, Clone, Copy)]
pub struct ScoringConfig {
    pub weight_temp: f64,
    pub weight_rain: f64,
    pub weight_wind: f64,
    pub weight_humidity: f64,

    pub temp_ideal_min: f64,
    pub temp_ideal_max: f64,
    pub temp_acceptable_min: f64,
    pub temp_acceptable_max: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weight_temp: 0.35,
            weight_rain: 0.40,
            weight_wind: 0.15,
            weight_humidity: 0.10,
            temp_ideal_min: 15.0,
            temp_ideal_max: 25.0,
            temp_acceptable_min: 10.0,
            temp_acceptable_max: 30.0,
        }
    }
}

/// Per-factor breakdown returned for explainability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Factors {
    /// Indoor tasks carry a single explanatory message instead of sub-scores.
    Indoor { message: String },
    /// Outdoor sub-scores, each rounded to 1 decimal place.
    Outdoor {
        temperature: f64,
        rain: f64,
        wind: f64,
        humidity: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0-100, rounded to 2 decimal places.
    pub score: f64,
    pub rating: Rating,
    pub factors: Factors,
}

/// The suitability scorer. Stateless; safe to share and call concurrently.
#[derive(Debug, Clone, Default)]
pub struct SuitabilityScorer {
    config: ScoringConfig,
    classifier: ClassifierConfig,
}

impl SuitabilityScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScoringConfig, classifier: ClassifierConfig) -> Self {
        Self { config, classifier }
    }

    /// Score one task against one snapshot.
    pub fn score(&self, task_name: &str, weather: &WeatherSnapshot) -> ScoreResult {
        if !self.classifier.is_outdoor(task_name) {
            // Indoor tasks are weather-invariant by definition.
            return ScoreResult {
                score: 95.0,
                rating: Rating::Excellent,
                factors: Factors::Indoor {
                    message: "Indoor activity - weather independent".to_string(),
                },
            };
        }

        let temp_score = self.score_temperature(weather.temp_c);
        let rain_score = score_rain(weather.rain_chance);
        let wind_score = score_wind(weather.wind_speed);
        let humidity_score = score_humidity(weather.humidity);

        let c = &self.config;
        let final_score = temp_score * c.weight_temp
            + rain_score * c.weight_rain
            + wind_score * c.weight_wind
            + humidity_score * c.weight_humidity;
        let final_score = round2(final_score);

        ScoreResult {
            score: final_score,
            rating: Rating::from_score(final_score),
            factors: Factors::Outdoor {
                temperature: round1(temp_score),
                rain: round1(rain_score),
                wind: round1(wind_score),
                humidity: round1(humidity_score),
            },
        }
    }

    /// 100 inside the ideal band; 8 pts/°C decay toward 60 inside the
    /// acceptable band; 10 pts/°C decay toward 0 outside it.
    fn score_temperature(&self, temp: f64) -> f64 {
        let c = &self.config;
        if temp >= c.temp_ideal_min && temp <= c.temp_ideal_max {
            100.0
        } else if temp >= c.temp_acceptable_min && temp <= c.temp_acceptable_max {
            let distance = if temp < c.temp_ideal_min {
                c.temp_ideal_min - temp
            } else {
                temp - c.temp_ideal_max
            };
            (100.0 - distance * 8.0).max(60.0)
        } else {
            let distance = if temp < c.temp_acceptable_min {
                c.temp_acceptable_min - temp
            } else {
                temp - c.temp_acceptable_max
            };
            (60.0 - distance * 10.0).max(0.0)
        }
    }
}

fn score_rain(rain_chance: u8) -> f64 {
    if rain_chance < 20 {
        100.0
    } else if rain_chance < 40 {
        80.0
    } else if rain_chance < 60 {
        50.0
    } else if rain_chance < 80 {
        25.0
    } else {
        10.0
    }
}

fn score_wind(wind_speed: f64) -> f64 {
    if wind_speed < 5.0 {
        100.0
    } else if wind_speed < 10.0 {
        80.0
    } else if wind_speed < 15.0 {
        50.0
    } else if wind_speed < 20.0 {
        25.0
    } else {
        10.0
    }
}

fn score_humidity(humidity: u8) -> f64 {
    if (40..=60).contains(&humidity) {
        100.0
    } else if (30..=70).contains(&humidity) {
        80.0
    } else if (20..=80).contains(&humidity) {
        60.0
    } else {
        40.0
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
