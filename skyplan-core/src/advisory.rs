//! Advisory text risk parsing.
//!
//! The advisory generator is opaque free text from an LLM call. This module
//! is the only place that looks inside it: extract a trailing `RISK_LEVEL:`
//! tag when present, otherwise infer from emoji/keyword markers, otherwise
//! fall back to plain weather thresholds. The threshold backstop is also the
//! degraded path when the advisory call fails or is disabled, so the overall
//! flow never depends on the LLM answering.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::weather::WeatherSnapshot;

static RISK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    // Tolerates "RISK_LEVEL: [medium]" bracket styles the model sometimes emits.
    Regex::new(r"(?i)RISK_LEVEL:\s*\[?\s*(none|low|medium|high)").expect("risk tag pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::None => "none",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Parsed advisory: the free-text suggestion with the tag stripped, plus the
/// resolved risk level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub suggestion: String,
    pub risk: RiskLevel,
}

impl Advisory {
    /// Deterministic stand-in for a failed or disabled advisory call.
    pub fn fallback(weather: &WeatherSnapshot) -> Self {
        Self {
            suggestion: "✓ Task noted. Check weather conditions above for planning.".to_string(),
            risk: weather_risk_backstop(weather),
        }
    }
}

/// Parse free-form advisory text against the snapshot it was generated for.
pub fn parse_advisory(text: &str, weather: &WeatherSnapshot) -> Advisory {
    if let Some(idx) = text.find("RISK_LEVEL:") {
        let suggestion = text[..idx].trim().to_string();
        let risk = RISK_TAG
            .captures(&text[idx..])
            .and_then(|c| c.get(1))
            .map(|m| match m.as_str().to_lowercase().as_str() {
                "low" => RiskLevel::Low,
                "medium" => RiskLevel::Medium,
                "high" => RiskLevel::High,
                _ => RiskLevel::None,
            })
            .unwrap_or(RiskLevel::None);
        return Advisory { suggestion, risk };
    }

    let upper = text.to_uppercase();
    let risk = if text.contains('🚨') || upper.contains("DANGEROUS") {
        RiskLevel::High
    } else if text.contains("⚠️") || upper.contains("WARNING") {
        RiskLevel::High
    } else if text.contains('⚡') || upper.contains("CAUTION") {
        RiskLevel::Medium
    } else {
        weather_risk_backstop(weather)
    };

    Advisory {
        suggestion: text.trim().to_string(),
        risk,
    }
}

/// Weather-threshold-only risk classification.
pub fn weather_risk_backstop(weather: &WeatherSnapshot) -> RiskLevel {
    if weather.rain_chance > 60 || weather.temp_c < 5.0 || weather.temp_c > 35.0 {
        RiskLevel::Medium
    } else if weather.rain_chance > 30 {
        RiskLevel::Low
    } else {
        RiskLevel::None
    }
}
