//! OpenWeatherMap provider adapter.
//!
//! Produces validated `WeatherSnapshot`s for the engine: one for current
//! conditions (rain chance derived from the share of upcoming 3-hourly slots
//! carrying rain) and up to 7 daily entries folded from the forecast feed.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use skyplan_core::WeatherSnapshot;

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Current conditions for one city, richer than the engine snapshot so the
/// dashboard and the advisory prompt can show detail.
#[derive(Debug, Clone)]
pub struct CurrentConditions {
    pub city: String,
    pub temp_c: f64,
    pub feels_like_c: f64,
    /// Lowercased coarse condition ("clear", "rain", ...).
    pub condition: String,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub rain_chance: u8,
    pub sunrise: String,
    pub sunset: String,
}

impl CurrentConditions {
    pub fn snapshot(&self) -> WeatherSnapshot {
        WeatherSnapshot::new(self.temp_c, self.rain_chance, self.wind_speed, self.humidity)
            .with_condition(self.condition.clone())
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResp {
    name: String,
    main: MainBlock,
    wind: WindBlock,
    weather: Vec<WeatherBlock>,
    sys: SysBlock,
    /// UTC offset in seconds.
    timezone: i64,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherBlock {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct ForecastResp {
    list: Vec<ForecastSlot>,
    city: CityBlock,
}

#[derive(Debug, Deserialize)]
struct CityBlock {
    timezone: i64,
}

#[derive(Debug, Deserialize)]
struct ForecastSlot {
    dt: i64,
    main: MainBlock,
    wind: WindBlock,
    weather: Vec<WeatherBlock>,
    /// Present iff the slot carries rain volume.
    rain: Option<RainBlock>,
}

#[derive(Debug, Deserialize)]
struct RainBlock {
    #[serde(rename = "3h")]
    #[allow(dead_code)]
    volume_3h: Option<f64>,
}

/// Fetch current conditions. Makes two calls: the current-weather endpoint,
/// plus the next 8 forecast slots (24h) to derive a rain chance the current
/// endpoint does not provide.
pub async fn fetch_current(
    client: &reqwest::Client,
    api_key: &str,
    city: &str,
) -> Result<CurrentConditions> {
    let current: CurrentResp = get_json(
        client,
        CURRENT_URL,
        &[("q", city), ("appid", api_key), ("units", "metric")],
    )
    .await
    .with_context(|| format!("current weather for {city}"))?;

    let forecast: ForecastResp = get_json(
        client,
        FORECAST_URL,
        &[("q", city), ("appid", api_key), ("units", "metric"), ("cnt", "8")],
    )
    .await
    .with_context(|| format!("24h forecast for {city}"))?;

    let weather = current
        .weather
        .first()
        .context("current weather response has no condition block")?;

    let conditions = CurrentConditions {
        city: current.name,
        temp_c: current.main.temp,
        feels_like_c: current.main.feels_like,
        condition: weather.main.to_lowercase(),
        description: weather.description.clone(),
        humidity: clamp_percent(current.main.humidity),
        wind_speed: current.wind.speed,
        rain_chance: percent_rainy(&forecast.list),
        sunrise: format_local_time(current.sys.sunrise, current.timezone),
        sunset: format_local_time(current.sys.sunset, current.timezone),
    };
    conditions
        .snapshot()
        .validate()
        .map_err(|e| anyhow::anyhow!("provider returned invalid snapshot: {e}"))?;
    Ok(conditions)
}

/// Fetch the multi-day forecast as daily snapshots, oldest first.
pub async fn fetch_forecast(
    client: &reqwest::Client,
    api_key: &str,
    city: &str,
) -> Result<Vec<WeatherSnapshot>> {
    let resp: ForecastResp = get_json(
        client,
        FORECAST_URL,
        &[("q", city), ("appid", api_key), ("units", "metric")],
    )
    .await
    .with_context(|| format!("forecast for {city}"))?;

    let days = fold_daily(&resp.list, resp.city.timezone);
    for day in &days {
        day.validate()
            .map_err(|e| anyhow::anyhow!("provider returned invalid forecast day: {e}"))?;
    }
    Ok(days)
}

async fn get_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T> {
    let resp = client.get(url).query(query).send().await.context("request")?;
    let status = resp.status();
    if !status.is_success() {
        let txt = resp.text().await.unwrap_or_default();
        bail!("openweathermap error: {status} {txt}");
    }
    Ok(resp.json().await.context("parse response")?)
}

/// Share of slots carrying rain, as an integer percent.
fn percent_rainy(slots: &[ForecastSlot]) -> u8 {
    if slots.is_empty() {
        return 0;
    }
    let rainy = slots.iter().filter(|s| s.rain.is_some()).count();
    ((rainy * 100) / slots.len()) as u8
}

/// Fold 3-hourly slots into per-day snapshots (local days via the provider's
/// UTC offset): max temperature and wind, mean humidity, rainy-slot share as
/// rain chance, midday condition label.
fn fold_daily(slots: &[ForecastSlot], tz_offset: i64) -> Vec<WeatherSnapshot> {
    let mut days: Vec<(NaiveDate, Vec<&ForecastSlot>)> = Vec::new();
    for slot in slots {
        let Some(local) = DateTime::from_timestamp(slot.dt + tz_offset, 0) else {
            continue;
        };
        let date = local.date_naive();
        match days.last_mut() {
            Some((d, bucket)) if *d == date => bucket.push(slot),
            _ => days.push((date, vec![slot])),
        }
    }

    days.into_iter()
        .take(7)
        .map(|(date, bucket)| {
            let temp = bucket.iter().map(|s| s.main.temp).fold(f64::MIN, f64::max);
            let humidity = clamp_percent(
                bucket.iter().map(|s| s.main.humidity).sum::<f64>() / bucket.len() as f64,
            );
            let wind = bucket.iter().map(|s| s.wind.speed).fold(0.0, f64::max);
            let rainy = bucket.iter().filter(|s| s.rain.is_some()).count();
            let rain_chance = ((rainy * 100) / bucket.len()) as u8;
            let condition = bucket
                .iter()
                .min_by_key(|s| {
                    let hour = (s.dt + tz_offset).rem_euclid(86_400) / 3_600;
                    (hour - 12).abs()
                })
                .and_then(|s| s.weather.first())
                .map(|w| w.main.to_lowercase())
                .unwrap_or_else(|| "unknown".to_string());

            WeatherSnapshot::new(temp, rain_chance, wind, humidity)
                .with_date(date)
                .with_day_name(date.format("%A").to_string())
                .with_condition(condition)
        })
        .collect()
}

fn clamp_percent(v: f64) -> u8 {
    v.round().clamp(0.0, 100.0) as u8
}

fn format_local_time(ts: i64, tz_offset: i64) -> String {
    DateTime::from_timestamp(ts + tz_offset, 0)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
