use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::personality::TraitScores;

/// Unique identifier for a companion, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanionId(pub Uuid);

impl CompanionId {
    /// Create a new CompanionId using UUID v7 (time-sortable, guaranteed ordering).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a CompanionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for CompanionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CompanionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompanionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A companion persona bonded to one human user.
///
/// The persona carries its own Big Five vector, seeded agreeable and
/// emotionally stable, which then evolves to complement the user it talks
/// to. Trust grows with every exchange and gates how candid the persona
/// is willing to be.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Companion {
    pub id: CompanionId,
    /// URL-safe unique slug derived from the user's name ("Alex Johnson" -> "alex-johnson").
    pub slug: String,
    /// Name of the human this companion is bonded to.
    pub user_name: String,
    /// The persona's own display name.
    pub companion_name: String,
    /// The persona's current trait vector.
    pub traits: TraitScores,
    pub humor_style: HumorStyle,
    /// How eager the persona is to probe and ask questions (0..=1).
    pub curiosity: f64,
    /// Relationship trust. Starts low, grows with each exchange (0..=1).
    pub trust: f64,
    /// Total number of exchanges this companion has had.
    pub conversation_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Last time this companion was part of a conversation.
    pub last_active_at: Option<DateTime<Utc>>,
}

impl Companion {
    /// Development stage derived from the current trust level.
    pub fn stage(&self) -> DevelopmentStage {
        DevelopmentStage::from_trust(self.trust)
    }
}

/// Humor registers, used both for the persona's own style and for the
/// dominant style learned from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumorStyle {
    SelfAwareSarcastic,
    Sarcastic,
    SelfDeprecating,
    Wordplay,
    Unknown,
}

impl fmt::Display for HumorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HumorStyle::SelfAwareSarcastic => write!(f, "self_aware_sarcastic"),
            HumorStyle::Sarcastic => write!(f, "sarcastic"),
            HumorStyle::SelfDeprecating => write!(f, "self_deprecating"),
            HumorStyle::Wordplay => write!(f, "wordplay"),
            HumorStyle::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for HumorStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "self_aware_sarcastic" => Ok(HumorStyle::SelfAwareSarcastic),
            "sarcastic" => Ok(HumorStyle::Sarcastic),
            "self_deprecating" => Ok(HumorStyle::SelfDeprecating),
            "wordplay" => Ok(HumorStyle::Wordplay),
            "unknown" => Ok(HumorStyle::Unknown),
            other => Err(format!("invalid humor style: '{other}'")),
        }
    }
}

impl Default for HumorStyle {
    fn default() -> Self {
        HumorStyle::Unknown
    }
}

/// Relationship stage derived from trust.
///
/// Boundaries: below 0.2, below 0.5, below 0.8, and everything above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentStage {
    GettingToKnowYou,
    BuildingRapport,
    DevelopingFriendship,
    DeepConnection,
}

impl DevelopmentStage {
    pub fn from_trust(trust: f64) -> Self {
        if trust < 0.2 {
            DevelopmentStage::GettingToKnowYou
        } else if trust < 0.5 {
            DevelopmentStage::BuildingRapport
        } else if trust < 0.8 {
            DevelopmentStage::DevelopingFriendship
        } else {
            DevelopmentStage::DeepConnection
        }
    }

    /// Short human label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            DevelopmentStage::GettingToKnowYou => "Getting to know you",
            DevelopmentStage::BuildingRapport => "Building rapport",
            DevelopmentStage::DevelopingFriendship => "Developing friendship",
            DevelopmentStage::DeepConnection => "Deep connection",
        }
    }

    /// Full first-person description of the stage.
    pub fn description(&self) -> &'static str {
        match self {
            DevelopmentStage::GettingToKnowYou => {
                "Getting to know you - I'm still learning your style!"
            }
            DevelopmentStage::BuildingRapport => {
                "Building rapport - I'm starting to understand you better"
            }
            DevelopmentStage::DevelopingFriendship => {
                "Developing friendship - We're getting comfortable with each other"
            }
            DevelopmentStage::DeepConnection => {
                "Deep connection - I feel like I really know you now"
            }
        }
    }
}

impl fmt::Display for DevelopmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevelopmentStage::GettingToKnowYou => write!(f, "getting_to_know_you"),
            DevelopmentStage::BuildingRapport => write!(f, "building_rapport"),
            DevelopmentStage::DevelopingFriendship => write!(f, "developing_friendship"),
            DevelopmentStage::DeepConnection => write!(f, "deep_connection"),
        }
    }
}

/// Request to create a new companion. Only `user_name` is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompanionRequest {
    pub user_name: String,
    /// Persona display name; defaults to "Ren".
    pub companion_name: Option<String>,
    /// User's age, kept as a profile entry for timeline and guardian flows.
    pub age: Option<u8>,
    /// User's location, kept as a profile entry for guardian research.
    pub location: Option<String>,
}

/// One key/value fact learned about a companion's user.
///
/// Keys are namespaced by concern (`personality_*`, `style_*`, `user_*`)
/// and upserts replace the previous value for the same key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub companion_id: CompanionId,
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Generate a URL-safe slug from a display name.
///
/// Rules:
/// - Lowercase
/// - Replace non-alphanumeric characters with hyphens
/// - Collapse consecutive hyphens into one
/// - Trim leading/trailing hyphens
///
/// # Examples
///
/// ```
/// use renexus_types::companion::slugify;
///
/// assert_eq!(slugify("Alex Johnson"), "alex-johnson");
/// assert_eq!(slugify("Dr.  Sam  Lee!"), "dr-sam-lee");
/// assert_eq!(slugify("---jo---ann---"), "jo-ann");
/// ```
pub fn slugify(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();

    // Collapse consecutive hyphens and trim edges
    let mut result = String::with_capacity(slug.len());
    let mut prev_was_hyphen = true; // treat start as hyphen to trim leading
    for c in slug.chars() {
        if c == '-' {
            if !prev_was_hyphen {
                result.push('-');
            }
            prev_was_hyphen = true;
        } else {
            result.push(c);
            prev_was_hyphen = false;
        }
    }

    // Trim trailing hyphen
    if result.ends_with('-') {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Alex Johnson"), "alex-johnson");
    }

    #[test]
    fn test_slugify_special_chars() {
        assert_eq!(slugify("Dr.  Sam  Lee!"), "dr-sam-lee");
    }

    #[test]
    fn test_slugify_leading_trailing() {
        assert_eq!(slugify("---jo---ann---"), "jo-ann");
    }

    #[test]
    fn test_companion_id_display() {
        let id = CompanionId::new();
        let s = id.to_string();
        let parsed: CompanionId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_stage_boundaries() {
        assert_eq!(
            DevelopmentStage::from_trust(0.1),
            DevelopmentStage::GettingToKnowYou
        );
        assert_eq!(
            DevelopmentStage::from_trust(0.2),
            DevelopmentStage::BuildingRapport
        );
        assert_eq!(
            DevelopmentStage::from_trust(0.5),
            DevelopmentStage::DevelopingFriendship
        );
        assert_eq!(
            DevelopmentStage::from_trust(0.8),
            DevelopmentStage::DeepConnection
        );
        assert_eq!(
            DevelopmentStage::from_trust(1.0),
            DevelopmentStage::DeepConnection
        );
    }

    #[test]
    fn test_humor_style_roundtrip() {
        for style in [
            HumorStyle::SelfAwareSarcastic,
            HumorStyle::Sarcastic,
            HumorStyle::SelfDeprecating,
            HumorStyle::Wordplay,
            HumorStyle::Unknown,
        ] {
            let s = style.to_string();
            let parsed: HumorStyle = s.parse().unwrap();
            assert_eq!(style, parsed);
        }
    }
}
