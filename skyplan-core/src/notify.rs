//! Weather notifications and the dashboard summary banner.
//!
//! Notifications are ephemeral: built per pass, handed to the presentation
//! layer, never stored. Only HIGH and CRITICAL urgency produce an alert;
//! MEDIUM/LOW are informational tiers consumed elsewhere (dashboard coloring).

use serde::{Deserialize, Serialize};

use crate::scoring::SuitabilityScorer;
use crate::task::Task;
use crate::urgency::{UrgencyLevel, UrgencyResult, task_urgency};
use crate::weather::WeatherSnapshot;
use crate::windows::{DayWindow, best_windows};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub task_id: String,
    pub task_name: String,
    pub urgency: UrgencyLevel,
    pub message: String,
    pub icon: String,
    pub action_required: bool,
    pub best_day: Option<DayWindow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLevel {
    Danger,
    Warning,
    Success,
}

impl SummaryLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLevel::Danger => "danger",
            SummaryLevel::Warning => "warning",
            SummaryLevel::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub level: SummaryLevel,
    pub message: String,
    pub count: usize,
}

/// Build notifications for every pending task against one forecast.
///
/// Completed tasks never alert; neither do MEDIUM/LOW urgency tasks.
pub fn notifications_for(
    scorer: &SuitabilityScorer,
    tasks: &[Task],
    forecast: &[WeatherSnapshot],
) -> Vec<Notification> {
    let mut notifications = Vec::new();

    for task in tasks {
        if task.is_completed() {
            continue;
        }

        let urgency = task_urgency(scorer, &task.name, forecast);
        if !urgency.level.is_actionable() {
            continue;
        }

        let best_day = best_windows(scorer, &task.name, forecast).into_iter().next();
        let icon = match urgency.level {
            UrgencyLevel::Critical => "🚨",
            _ => "⚠️",
        };

        notifications.push(Notification {
            task_id: task.id.clone(),
            task_name: task.name.clone(),
            message: compose_message(&task.name, &urgency, best_day.as_ref()),
            urgency: urgency.level,
            icon: icon.to_string(),
            action_required: true,
            best_day,
        });
    }

    notifications
}

fn compose_message(task_name: &str, urgency: &UrgencyResult, best_day: Option<&DayWindow>) -> String {
    match urgency.level {
        UrgencyLevel::Critical => format!(
            "🚨 CRITICAL: No suitable weather for '{task_name}' in the next 7 days! \
             Consider indoor alternative or wait for better forecast."
        ),
        UrgencyLevel::High => match best_day {
            Some(day) => format!(
                "⚠️ LIMITED TIME: Only 1 good day for '{task_name}' - {} ({} conditions). Schedule soon!",
                day.display_day(),
                day.rating.as_str()
            ),
            None => format!("⚠️ Act soon: Limited weather windows for '{task_name}'"),
        },
        _ => urgency.reason.clone(),
    }
}

/// Fold a notification list into the dashboard banner.
pub fn dashboard_summary(notifications: &[Notification]) -> DashboardSummary {
    let critical = notifications
        .iter()
        .filter(|n| n.urgency == UrgencyLevel::Critical)
        .count();
    let high = notifications
        .iter()
        .filter(|n| n.urgency == UrgencyLevel::High)
        .count();

    if critical > 0 {
        DashboardSummary {
            level: SummaryLevel::Danger,
            message: format!("🚨 {critical} critical weather alerts!"),
            count: critical + high,
        }
    } else if high > 0 {
        DashboardSummary {
            level: SummaryLevel::Warning,
            message: format!("⚠️ {high} time-sensitive weather windows"),
            count: high,
        }
    } else {
        DashboardSummary {
            level: SummaryLevel::Success,
            message: "✅ All tasks have good weather windows".to_string(),
            count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn good_day(d: u32) -> WeatherSnapshot {
        WeatherSnapshot::new(20.0, 10, 2.0, 50)
            .with_date(NaiveDate::from_ymd_opt(2026, 3, d).unwrap())
            .with_day_name("Saturday")
    }

    fn bad_day(d: u32) -> WeatherSnapshot {
        WeatherSnapshot::new(2.0, 90, 22.0, 95)
            .with_date(NaiveDate::from_ymd_opt(2026, 3, d).unwrap())
            .with_day_name("Monday")
    }

    fn all_bad() -> Vec<WeatherSnapshot> {
        (1..=7).map(bad_day).collect()
    }

    fn one_good() -> Vec<WeatherSnapshot> {
        let mut f = all_bad();
        f[3] = good_day(4);
        f
    }

    #[test]
    fn completed_tasks_never_alert() {
        let scorer = SuitabilityScorer::new();
        let tasks = vec![Task::new("t1", "go hiking").completed()];
        let out = notifications_for(&scorer, &tasks, &all_bad());
        assert!(out.is_empty());
    }

    #[test]
    fn medium_and_low_urgency_do_not_alert() {
        let scorer = SuitabilityScorer::new();
        let tasks = vec![Task::new("t1", "file taxes")]; // indoor: every day suitable
        let out = notifications_for(&scorer, &tasks, &all_bad());
        assert!(out.is_empty());

        let mut two_good = all_bad();
        two_good[0] = good_day(1);
        two_good[1] = good_day(2);
        let tasks = vec![Task::new("t2", "go hiking")];
        assert!(notifications_for(&scorer, &tasks, &two_good).is_empty());
    }

    #[test]
    fn critical_notification_recommends_indoor_alternative() {
        let scorer = SuitabilityScorer::new();
        let tasks = vec![Task::new("t1", "go hiking")];
        let out = notifications_for(&scorer, &tasks, &all_bad());
        assert_eq!(out.len(), 1);
        let n = &out[0];
        assert_eq!(n.urgency, UrgencyLevel::Critical);
        assert_eq!(n.icon, "🚨");
        assert!(n.action_required);
        assert!(n.message.contains("No suitable weather for 'go hiking'"));
        assert!(n.message.contains("indoor alternative"));
        // Best day still attached even when nothing scores well.
        assert!(n.best_day.is_some());
    }

    #[test]
    fn high_notification_names_the_best_day_and_rating() {
        let scorer = SuitabilityScorer::new();
        let tasks = vec![Task::new("t1", "go hiking")];
        let out = notifications_for(&scorer, &tasks, &one_good());
        assert_eq!(out.len(), 1);
        let n = &out[0];
        assert_eq!(n.urgency, UrgencyLevel::High);
        assert_eq!(n.icon, "⚠️");
        assert!(n.message.contains("Only 1 good day for 'go hiking'"));
        assert!(n.message.contains("Saturday"));
        assert!(n.message.contains("Excellent conditions"));
        assert_eq!(n.best_day.as_ref().unwrap().day_name, "Saturday");
    }

    #[test]
    fn high_without_forecast_uses_fallback_wording() {
        let urgency = UrgencyResult {
            level: UrgencyLevel::High,
            urgency_score: 80,
            reason: "Only 1 good day available: 2026-03-04".to_string(),
            suitable_days_count: 1,
            suitable_days: vec!["2026-03-04".to_string()],
        };
        let msg = compose_message("go hiking", &urgency, None);
        assert_eq!(msg, "⚠️ Act soon: Limited weather windows for 'go hiking'");
    }

    #[test]
    fn summary_danger_when_any_critical() {
        let scorer = SuitabilityScorer::new();
        let tasks = vec![Task::new("t1", "go hiking"), Task::new("t2", "picnic prep")];
        let out = notifications_for(&scorer, &tasks, &all_bad());
        let summary = dashboard_summary(&out);
        assert_eq!(summary.level, SummaryLevel::Danger);
        assert_eq!(summary.count, 2);
        assert!(summary.message.contains("2 critical weather alerts"));
    }

    #[test]
    fn summary_warning_when_only_high() {
        let scorer = SuitabilityScorer::new();
        let tasks = vec![Task::new("t1", "go hiking")];
        let out = notifications_for(&scorer, &tasks, &one_good());
        let summary = dashboard_summary(&out);
        assert_eq!(summary.level, SummaryLevel::Warning);
        assert_eq!(summary.count, 1);
        assert!(summary.message.contains("1 time-sensitive weather windows"));
    }

    #[test]
    fn summary_success_when_no_alerts() {
        let summary = dashboard_summary(&[]);
        assert_eq!(summary.level, SummaryLevel::Success);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.message, "✅ All tasks have good weather windows");
    }
}
