//! Terminal rendering for dashboard output.

use skyplan_core::{DashboardSummary, DayWindow, Factors, Notification, ScoreResult};

use crate::openweather::CurrentConditions;
use crate::store::StoredTask;

/// Emoji for a coarse condition label.
pub fn weather_emoji(condition: &str) -> &'static str {
    match condition.to_lowercase().as_str() {
        "clear" => "☀️",
        "clouds" => "☁️",
        "rain" => "🌧️",
        "drizzle" => "🌦️",
        "thunderstorm" => "⛈️",
        "snow" => "❄️",
        "mist" | "fog" | "haze" => "🌫️",
        "dust" | "sand" => "🌪️",
        "smoke" => "💨",
        _ => "🌤️",
    }
}

pub fn print_current(c: &CurrentConditions) {
    println!(
        "{} {} — {} ({:.0}°C, feels like {:.0}°C)",
        weather_emoji(&c.condition),
        c.city,
        c.description,
        c.temp_c,
        c.feels_like_c
    );
    println!(
        "   humidity {}% | wind {:.1} m/s | rain chance {}% | ☀ {} → {}",
        c.humidity, c.wind_speed, c.rain_chance, c.sunrise, c.sunset
    );
}

pub fn print_score(task_name: &str, result: &ScoreResult) {
    println!(
        "{}: {:.2}/100 ({})",
        task_name,
        result.score,
        result.rating.as_str()
    );
    match &result.factors {
        Factors::Indoor { message } => println!("   {message}"),
        Factors::Outdoor {
            temperature,
            rain,
            wind,
            humidity,
        } => {
            println!(
                "   temperature {temperature:.1} | rain {rain:.1} | wind {wind:.1} | humidity {humidity:.1}"
            );
        }
    }
}

pub fn print_windows(task_name: &str, windows: &[DayWindow]) {
    if windows.is_empty() {
        println!("No forecast data for '{task_name}'.");
        return;
    }
    println!("Best days for '{task_name}':");
    for (rank, w) in windows.iter().enumerate() {
        println!(
            "  {}. {} {} — {:.2} ({}) | {:.0}°C, {}, rain {}%",
            rank + 1,
            w.display_day(),
            weather_emoji(&w.weather.condition),
            w.score,
            w.rating.as_str(),
            w.weather.temp_c,
            w.weather.condition,
            w.weather.rain_chance
        );
        println!("     {}", w.recommendation);
    }
}

pub fn print_task_row(task: &StoredTask, result: &ScoreResult) {
    let status = if task.as_task().is_completed() { "✔" } else { " " };
    println!(
        "[{status}] {} {} — {:.2} ({})",
        task.id,
        task.name,
        result.score,
        result.rating.as_str()
    );
    if let Some(risk) = task.risk {
        println!("      risk: {}", risk.as_str());
    }
    if let Some(advisory) = &task.advisory {
        println!("      {advisory}");
    }
}

pub fn print_notifications(notifications: &[Notification], summary: &DashboardSummary) {
    println!("[{}] {}", summary.level.as_str(), summary.message);
    for n in notifications {
        println!("  {} {}", n.icon, n.message);
        if let Some(day) = &n.best_day {
            println!("     best option: {} — {}", day.display_day(), day.recommendation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_covers_known_conditions() {
        assert_eq!(weather_emoji("clear"), "☀️");
        assert_eq!(weather_emoji("Rain"), "🌧️");
        assert_eq!(weather_emoji("FOG"), "🌫️");
        assert_eq!(weather_emoji("volcanic ash"), "🌤️");
    }
}
