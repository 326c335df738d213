//! Outdoor task classification.
//!
//! Deterministic keyword matching, no LLM: a task is weather-sensitive iff
//! its lowercased name contains any configured keyword as a substring.
//! Substring (not whole-word) semantics are intentional and load-bearing;
//! "brunch run" and "running" both match "run".

/// Default keyword list for outdoor activities.
pub const OUTDOOR_KEYWORDS: &[&str] = &[
    "hiking", "jogging", "running", "walk", "walking",
    "cycle", "cycling", "bike", "biking", "ride", "riding",
    "picnic", "park", "outdoor", "garden", "yard", "backyard",
    "sport", "sports", "football", "soccer", "cricket",
    "basketball", "volleyball", "badminton", "tennis",
    "trek", "trekking", "camp", "camping", "climb", "climbing",
    "trail", "swim", "swimming", "beach", "sunbathe", "sunbathing",
    "skate", "skating", "skateboard", "skateboarding",
    "surf", "surfing", "kayak", "kayaking", "canoe", "canoeing",
    "fishing", "hunt", "hunting",
    "photography", "nature", "explore", "exploring",
    "field", "fieldwork", "gardening",
    "dog walk", "walk dog", "run errands", "errands", "travel", "trip",
];

/// Keyword configuration, injectable so tests can override the list
/// without touching globals.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub keywords: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            keywords: OUTDOOR_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl ClassifierConfig {
    /// True iff the task name contains any keyword as a substring.
    pub fn is_outdoor(&self, task_name: &str) -> bool {
        let lower = task_name.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_common_activities() {
        let c = ClassifierConfig::default();
        assert!(c.is_outdoor("Go hiking with friends"));
        assert!(c.is_outdoor("PICNIC at the lake"));
        assert!(c.is_outdoor("morning cycling"));
        assert!(c.is_outdoor("walk dog before work"));
    }

    #[test]
    fn indoor_tasks_do_not_match() {
        let c = ClassifierConfig::default();
        assert!(!c.is_outdoor("Finish tax return"));
        assert!(!c.is_outdoor("Read a book"));
        assert!(!c.is_outdoor("Clean the kitchen"));
    }

    #[test]
    fn substring_semantics_are_preserved() {
        let c = ClassifierConfig::default();
        assert!(c.is_outdoor("prepare for marathon running drills"));
        // "carpark" contains "park": accepted false positive of substring matching.
        assert!(c.is_outdoor("pay carpark fine"));
    }

    #[test]
    fn custom_keyword_list_overrides_default() {
        let c = ClassifierConfig {
            keywords: vec!["stargazing".to_string()],
        };
        assert!(c.is_outdoor("Stargazing tonight"));
        assert!(!c.is_outdoor("Go hiking"));
    }
}
