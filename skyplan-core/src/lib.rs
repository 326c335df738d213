//! skyplan-core: weather-suitability scoring and scheduling alerts.
//!
//! Everything here is a pure function over caller-supplied data: classify a
//! task as outdoor, score it against a weather snapshot, rank forecast days,
//! tier scheduling urgency, and compose notifications. Providers, storage and
//! the LLM advisory call live in `skyplan-cli`.

pub mod advisory;
pub mod classify;
pub mod notify;
pub mod scoring;
pub mod task;
pub mod urgency;
pub mod weather;
pub mod windows;

pub use advisory::{Advisory, RiskLevel, parse_advisory, weather_risk_backstop};
pub use classify::{ClassifierConfig, OUTDOOR_KEYWORDS};
pub use notify::{
    DashboardSummary, Notification, SummaryLevel, dashboard_summary, notifications_for,
};
pub use scoring::{Factors, Rating, ScoreResult, ScoringConfig, SuitabilityScorer};
pub use task::{Task, TaskStatus};
pub use urgency::{SUITABLE_SCORE, UrgencyLevel, UrgencyResult, task_urgency};
pub use weather::WeatherSnapshot;
pub use windows::{DayWindow, WindowWeather, best_windows, recommendation_for};
