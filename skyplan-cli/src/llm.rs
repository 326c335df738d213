//! LLM advisory call for newly added tasks.
//!
//! The model's answer is opaque free text; `skyplan_core::advisory` parses
//! the trailing `RISK_LEVEL:` tag out of it. Any failure here degrades to
//! the weather-threshold backstop upstream, so errors are reported, never
//! fatal.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::{Config, llm_api_key};
use crate::openweather::CurrentConditions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Anthropic,
    OpenAI,
}

impl Provider {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "anthropic" => Ok(Provider::Anthropic),
            "openai" => Ok(Provider::OpenAI),
            other => bail!("unknown llm provider '{other}' (expected anthropic or openai)"),
        }
    }
}

/// Ask the configured model for a task advisory. Returns the raw text,
/// including the `RISK_LEVEL:` trailer when the model cooperates.
pub async fn advise(cfg: &Config, task_name: &str, conditions: &CurrentConditions) -> Result<String> {
    if !cfg.llm.enabled {
        bail!("llm advisory disabled in config");
    }
    let provider = Provider::from_name(&cfg.llm.provider)?;
    let key = llm_api_key(cfg).context("no llm api key configured")?;
    let prompt = build_prompt(task_name, conditions);

    match provider {
        Provider::Anthropic => anthropic_complete(&cfg.llm.model, &key, &prompt).await,
        Provider::OpenAI => openai_complete(&cfg.llm.model, &key, &prompt).await,
    }
}

fn build_prompt(task_name: &str, c: &CurrentConditions) -> String {
    format!(
        "You are Skyplan, a weather assistant helping users plan their daily activities.\n\
         \n\
         Task: \"{task_name}\"\n\
         Location: {city}\n\
         \n\
         Current Weather Conditions:\n\
         - Temperature: {temp:.0}°C (Feels like {feels:.0}°C)\n\
         - Condition: {desc}\n\
         - Humidity: {humidity}%\n\
         - Wind Speed: {wind:.1} m/s\n\
         - Rain Chance (next 24h): {rain}%\n\
         \n\
         Analyze this task and provide:\n\
         1. Risk assessment: is this activity SAFE, CAUTION, or DANGEROUS in this weather?\n\
         2. A brief suggestion (2-3 sentences max) covering suitability, clothing/gear,\n\
            and timing alternatives if the weather is poor. Use emojis naturally.\n\
         \n\
         Important:\n\
         - If the weather is dangerous, start with \"⚠️ WARNING:\" or \"🚨 ALERT:\"\n\
         - For caution conditions, start with \"⚡ CAUTION:\"\n\
         - For good conditions, start with \"✅\" or \"👍\"\n\
         \n\
         At the end, add on a new line: RISK_LEVEL: [none/low/medium/high]\n",
        city = c.city,
        temp = c.temp_c,
        feels = c.feels_like_c,
        desc = c.description,
        humidity = c.humidity,
        wind = c.wind_speed,
        rain = c.rain_chance,
    )
}

async fn anthropic_complete(model: &str, key: &str, prompt: &str) -> Result<String> {
    #[derive(Serialize)]
    struct Msg {
        role: String,
        content: String,
    }

    #[derive(Serialize)]
    struct Req {
        model: String,
        max_tokens: i32,
        messages: Vec<Msg>,
    }

    #[derive(Deserialize)]
    struct Resp {
        content: Vec<ContentBlock>,
    }

    #[derive(Deserialize)]
    struct ContentBlock {
        #[serde(rename = "type")]
        t: String,
        text: Option<String>,
    }

    let body = Req {
        model: model.to_string(),
        max_tokens: 400,
        messages: vec![Msg {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
    };

    let client = reqwest::Client::new();
    let resp = client
        .post("https://api.anthropic.com/v1/messages")
        .header("x-api-key", key)
        .header("anthropic-version", "2023-06-01")
        .json(&body)
        .send()
        .await
        .context("anthropic request")?;

    let status = resp.status();
    if !status.is_success() {
        let txt = resp.text().await.unwrap_or_default();
        bail!("anthropic error: {status} {txt}");
    }

    let out: Resp = resp.json().await.context("parse anthropic response")?;
    let mut s = String::new();
    for b in out.content {
        if b.t == "text"
            && let Some(t) = b.text
        {
            s.push_str(&t);
        }
    }
    Ok(s.trim().to_string())
}

async fn openai_complete(model: &str, key: &str, prompt: &str) -> Result<String> {
    #[derive(Serialize)]
    struct Msg {
        role: String,
        content: String,
    }

    #[derive(Serialize)]
    struct Req {
        model: String,
        messages: Vec<Msg>,
        temperature: f32,
    }

    #[derive(Deserialize)]
    struct Resp {
        choices: Vec<Choice>,
    }

    #[derive(Deserialize)]
    struct Choice {
        message: MsgOut,
    }

    #[derive(Deserialize)]
    struct MsgOut {
        content: Option<String>,
    }

    let body = Req {
        model: model.to_string(),
        messages: vec![Msg {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        temperature: 0.4,
    };

    let client = reqwest::Client::new();
    let resp = client
        .post("https://api.openai.com/v1/chat/completions")
        .header("authorization", format!("Bearer {key}"))
        .json(&body)
        .send()
        .await
        .context("openai request")?;

    let status = resp.status();
    if !status.is_success() {
        let txt = resp.text().await.unwrap_or_default();
        bail!("openai error: {status} {txt}");
    }

    let out: Resp = resp.json().await.context("parse openai response")?;
    let content = out
        .choices
        .first()
        .and_then(|c| c.message.content.clone())
        .unwrap_or_default();
    Ok(content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_names_parse() {
        assert_eq!(Provider::from_name("anthropic").unwrap(), Provider::Anthropic);
        assert_eq!(Provider::from_name("openai").unwrap(), Provider::OpenAI);
        assert!(Provider::from_name("gemini-ultra-9").is_err());
    }

    #[test]
    fn prompt_carries_weather_fields_and_risk_trailer() {
        let c = CurrentConditions {
            city: "Pokhara".to_string(),
            temp_c: 21.0,
            feels_like_c: 20.0,
            condition: "clear".to_string(),
            description: "clear sky".to_string(),
            humidity: 55,
            wind_speed: 2.5,
            rain_chance: 10,
            sunrise: "06:10".to_string(),
            sunset: "18:20".to_string(),
        };
        let p = build_prompt("go hiking", &c);
        assert!(p.contains("\"go hiking\""));
        assert!(p.contains("Pokhara"));
        assert!(p.contains("21°C"));
        assert!(p.contains("Rain Chance (next 24h): 10%"));
        assert!(p.contains("RISK_LEVEL: [none/low/medium/high]"));
    }
}
