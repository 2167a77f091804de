//! Skill advice
//!
//! Static lookup from interest keywords to career advice. Triggers are
//! independent, so one interest can yield several suggestions.

use serde::{Deserialize, Serialize};

pub const FALLBACK_ADVICE: &str = "Could not generate specific skill suggestions. Try broadening your interest, e.g., 'web development', 'data science'.";

/// Career track an interest can point to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    Data,
    Web,
    Android,
    AiMl,
}

impl Track {
    /// Evaluation order of the lookup table
    pub const ALL: [Track; 4] = [Track::Data, Track::Web, Track::Android, Track::AiMl];

    /// Lowercase substrings that select this track
    pub fn triggers(&self) -> &'static [&'static str] {
        match self {
            Track::Data => &["data"],
            Track::Web => &["web"],
            Track::Android => &["android"],
            Track::AiMl => &["ai", "ml"],
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Track::Data => "For Data Roles",
            Track::Web => "For Web Development",
            Track::Android => "For Android Development",
            Track::AiMl => "For AI/ML",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Track::Data => "Learn Python (Pandas, NumPy), SQL, Excel, and visualization tools like Tableau or Power BI.",
            Track::Web => "Master HTML, CSS, JavaScript. Explore frameworks like React.js, Angular, or Vue.js for frontend, and Node.js, Django, or Flask for backend.",
            Track::Android => "Try Kotlin or Java for native development, or Flutter for cross-platform apps. Get familiar with Android Studio.",
            Track::AiMl => "Work on projects using scikit-learn, TensorFlow, or PyTorch. Explore libraries like Hugging Face for NLP and OpenCV for computer vision.",
        }
    }

    fn matches(&self, lowered_interest: &str) -> bool {
        self.triggers().iter().any(|t| lowered_interest.contains(t))
    }
}

/// One advice paragraph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub track: Track,
    pub text: String,
}

impl From<Track> for Suggestion {
    fn from(track: Track) -> Self {
        Self {
            track,
            text: track.advice().to_string(),
        }
    }
}

/// Advice for an interest string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum Advice {
    Suggestions(Vec<Suggestion>),
    Fallback(String),
}

impl Advice {
    pub fn tracks(&self) -> Vec<Track> {
        match self {
            Advice::Suggestions(items) => items.iter().map(|s| s.track).collect(),
            Advice::Fallback(_) => Vec::new(),
        }
    }
}

/// Select advice paragraphs for an interest string
pub fn advise(interest: &str) -> Advice {
    let lowered = interest.to_lowercase();
    let suggestions: Vec<Suggestion> = Track::ALL
        .iter()
        .filter(|track| track.matches(&lowered))
        .map(|track| Suggestion::from(*track))
        .collect();

    if suggestions.is_empty() {
        Advice::Fallback(FALLBACK_ADVICE.to_string())
    } else {
        Advice::Suggestions(suggestions)
    }
}
