//! Forecast window ranking: pick the best days for a task.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::{Rating, SuitabilityScorer};
use crate::weather::WeatherSnapshot;

/// How many candidate days a ranking returns at most.
const TOP_WINDOWS: usize = 3;

/// Compact weather summary carried by a ranked day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowWeather {
    pub temp_c: f64,
    pub condition: String,
    pub rain_chance: u8,
}

/// One ranked forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayWindow {
    pub date: Option<NaiveDate>,
    pub day_name: String,
    pub score: f64,
    pub rating: Rating,
    pub weather: WindowWeather,
    pub recommendation: String,
}

impl DayWindow {
    /// Preferred user-facing label: weekday name, else the date, else "Unknown".
    pub fn display_day(&self) -> String {
        if !self.day_name.is_empty() {
            return self.day_name.clone();
        }
        match self.date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "Unknown".to_string(),
        }
    }
}

/// Score every forecast entry and return the top days, best first.
///
/// The sort is stable and descending by score, so equally-scored days keep
/// forecast input order. An empty forecast yields an empty ranking.
pub fn best_windows(
    scorer: &SuitabilityScorer,
    task_name: &str,
    forecast: &[WeatherSnapshot],
) -> Vec<DayWindow> {
    let mut results: Vec<DayWindow> = forecast
        .iter()
        .map(|day| {
            let scored = scorer.score(task_name, day);
            DayWindow {
                date: day.date,
                day_name: day.day_name.clone().unwrap_or_default(),
                score: scored.score,
                rating: scored.rating,
                weather: WindowWeather {
                    temp_c: day.temp_c,
                    condition: day.condition.clone().unwrap_or_else(|| "Unknown".to_string()),
                    rain_chance: day.rain_chance,
                },
                recommendation: recommendation_for(scored.score).to_string(),
            }
        })
        .collect();

    // Scores are clamped reals, never NaN, so total ordering is safe here.
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    results.truncate(TOP_WINDOWS);
    results
}

/// Recommendation text derived purely from the score band.
pub fn recommendation_for(score: f64) -> &'static str {
    if score >= 80.0 {
        "Perfect conditions! Highly recommended."
    } else if score >= 60.0 {
        "Good conditions. Should be comfortable."
    } else if score >= 40.0 {
        "Acceptable. Consider weather precautions."
    } else {
        "Not recommended. Consider rescheduling."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(label: &str, temp: f64, rain: u8) -> WeatherSnapshot {
        WeatherSnapshot::new(temp, rain, 2.0, 50).with_day_name(label)
    }

    #[test]
    fn returns_top_three_sorted_descending() {
        let scorer = SuitabilityScorer::new();
        let forecast = vec![
            day("Mon", 20.0, 90), // poor
            day("Tue", 20.0, 10), // perfect
            day("Wed", 20.0, 50), // middling
            day("Thu", 20.0, 30), // decent
            day("Fri", 20.0, 70),
        ];
        let top = best_windows(&scorer, "hiking", &forecast);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].day_name, "Tue");
        assert_eq!(top[1].day_name, "Thu");
        assert_eq!(top[2].day_name, "Wed");
        assert!(top[0].score >= top[1].score && top[1].score >= top[2].score);
    }

    #[test]
    fn ties_keep_forecast_input_order() {
        let scorer = SuitabilityScorer::new();
        let forecast = vec![day("Sat", 20.0, 10), day("Sun", 20.0, 10)];
        let top = best_windows(&scorer, "picnic", &forecast);
        assert_eq!(top[0].day_name, "Sat");
        assert_eq!(top[1].day_name, "Sun");
    }

    #[test]
    fn empty_forecast_yields_empty_ranking() {
        let scorer = SuitabilityScorer::new();
        assert!(best_windows(&scorer, "hiking", &[]).is_empty());
    }

    #[test]
    fn recommendation_bands() {
        assert_eq!(recommendation_for(85.0), "Perfect conditions! Highly recommended.");
        assert_eq!(recommendation_for(60.0), "Good conditions. Should be comfortable.");
        assert_eq!(recommendation_for(40.0), "Acceptable. Consider weather precautions.");
        assert_eq!(recommendation_for(39.9), "Not recommended. Consider rescheduling.");
    }

    #[test]
    fn window_carries_compact_weather_summary() {
        let scorer = SuitabilityScorer::new();
        let forecast = vec![WeatherSnapshot::new(22.0, 15, 3.0, 55)
            .with_day_name("Saturday")
            .with_condition("clear")];
        let top = best_windows(&scorer, "go hiking", &forecast);
        assert_eq!(top[0].weather.temp_c, 22.0);
        assert_eq!(top[0].weather.condition, "clear");
        assert_eq!(top[0].weather.rain_chance, 15);
        assert_eq!(top[0].display_day(), "Saturday");
    }
}
