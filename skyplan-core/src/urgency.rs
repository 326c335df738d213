//! Scheduling urgency: how scarce are the good-weather windows?

use serde::{Deserialize, Serialize};

use crate::scoring::SuitabilityScorer;
use crate::weather::WeatherSnapshot;

/// A forecast day counts as suitable at or above this score.
pub const SUITABLE_SCORE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrgencyLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl UrgencyLevel {
    /// Fixed urgency score per tier.
    pub fn score(&self) -> u8 {
        match self {
            UrgencyLevel::Critical => 100,
            UrgencyLevel::High => 80,
            UrgencyLevel::Medium => 50,
            UrgencyLevel::Low => 20,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Critical => "CRITICAL",
            UrgencyLevel::High => "HIGH",
            UrgencyLevel::Medium => "MEDIUM",
            UrgencyLevel::Low => "LOW",
        }
    }

    pub fn is_actionable(&self) -> bool {
        matches!(self, UrgencyLevel::Critical | UrgencyLevel::High)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgencyResult {
    pub level: UrgencyLevel,
    pub urgency_score: u8,
    pub reason: String,
    pub suitable_days_count: usize,
    /// Date labels of suitable days, forecast order.
    pub suitable_days: Vec<String>,
}

/// Classify how time-critical scheduling is for a task.
///
/// Tier boundaries are exact: 0 suitable days CRITICAL, 1 HIGH, 2 MEDIUM,
/// 3+ LOW. Exactly two days is its own MEDIUM tier, not folded into either
/// neighbor.
pub fn task_urgency(
    scorer: &SuitabilityScorer,
    task_name: &str,
    forecast: &[WeatherSnapshot],
) -> UrgencyResult {
    let suitable_days: Vec<String> = forecast
        .iter()
        .filter(|day| scorer.score(task_name, day).score >= SUITABLE_SCORE)
        .map(|day| day.date_label())
        .collect();
    let count = suitable_days.len();

    let (level, reason) = match count {
        0 => (
            UrgencyLevel::Critical,
            "No suitable weather windows in the forecast!".to_string(),
        ),
        1 => (
            UrgencyLevel::High,
            format!("Only 1 good day available: {}", suitable_days[0]),
        ),
        2 => (
            UrgencyLevel::Medium,
            format!("Limited weather windows: {count} days"),
        ),
        _ => (
            UrgencyLevel::Low,
            format!("Multiple good days available: {count} days"),
        ),
    };

    UrgencyResult {
        level,
        urgency_score: level.score(),
        reason,
        suitable_days_count: count,
        suitable_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn good_day(d: u32) -> WeatherSnapshot {
        WeatherSnapshot::new(20.0, 10, 2.0, 50)
            .with_date(NaiveDate::from_ymd_opt(2026, 3, d).unwrap())
    }

    fn bad_day(d: u32) -> WeatherSnapshot {
        WeatherSnapshot::new(2.0, 90, 22.0, 95)
            .with_date(NaiveDate::from_ymd_opt(2026, 3, d).unwrap())
    }

    fn forecast_with_good(good: usize) -> Vec<WeatherSnapshot> {
        (1..=7u32)
            .map(|d| if (d as usize) <= good { good_day(d) } else { bad_day(d) })
            .collect()
    }

    #[test]
    fn zero_suitable_days_is_critical() {
        let scorer = SuitabilityScorer::new();
        let r = task_urgency(&scorer, "hiking", &forecast_with_good(0));
        assert_eq!(r.level, UrgencyLevel::Critical);
        assert_eq!(r.urgency_score, 100);
        assert_eq!(r.reason, "No suitable weather windows in the forecast!");
        assert!(r.suitable_days.is_empty());
    }

    #[test]
    fn one_suitable_day_is_high_and_names_the_date() {
        let scorer = SuitabilityScorer::new();
        let r = task_urgency(&scorer, "hiking", &forecast_with_good(1));
        assert_eq!(r.level, UrgencyLevel::High);
        assert_eq!(r.urgency_score, 80);
        assert_eq!(r.reason, "Only 1 good day available: 2026-03-01");
        assert_eq!(r.suitable_days_count, 1);
    }

    #[test]
    fn exactly_two_suitable_days_is_medium() {
        let scorer = SuitabilityScorer::new();
        let r = task_urgency(&scorer, "hiking", &forecast_with_good(2));
        assert_eq!(r.level, UrgencyLevel::Medium);
        assert_eq!(r.urgency_score, 50);
        assert_eq!(r.reason, "Limited weather windows: 2 days");
    }

    #[test]
    fn three_or_more_suitable_days_is_low() {
        let scorer = SuitabilityScorer::new();
        for good in [3usize, 5, 7] {
            let r = task_urgency(&scorer, "hiking", &forecast_with_good(good));
            assert_eq!(r.level, UrgencyLevel::Low, "good={good}");
            assert_eq!(r.urgency_score, 20);
            assert_eq!(r.suitable_days_count, good);
        }
    }

    #[test]
    fn indoor_task_is_always_low_urgency() {
        // Indoor tasks score 95 on every day, so every day is suitable.
        let scorer = SuitabilityScorer::new();
        let r = task_urgency(&scorer, "file taxes", &forecast_with_good(0));
        assert_eq!(r.level, UrgencyLevel::Low);
        assert_eq!(r.suitable_days_count, 7);
    }

    #[test]
    fn level_serializes_uppercase() {
        let json = serde_json::to_string(&UrgencyLevel::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
    }
}
