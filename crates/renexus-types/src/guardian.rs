//! Digital-footprint guardian types for Renexus.
//!
//! Findings, risk levels, recommendations, and action plans for the
//! privacy-protection flows. Research is simulated locally; these types
//! are agnostic about where findings come from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::companion::CompanionId;

/// Basic facts about the user that seed footprint research.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetails {
    pub name: String,
    pub age: Option<u8>,
    pub location: Option<String>,
}

/// Privacy risk attached to a finding, and the overall rollup level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Title-case label for reports ("Low", "Medium", "High").
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(format!("invalid risk level: '{other}'")),
        }
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Low
    }
}

/// Where a piece of footprint information was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    SocialMedia,
    Professional,
    DataBroker,
    NewsMention,
    Educational,
}

impl FindingKind {
    /// Title-case label for reports ("Social Media", "Data Broker", ...).
    pub fn label(&self) -> &'static str {
        match self {
            FindingKind::SocialMedia => "Social Media",
            FindingKind::Professional => "Professional",
            FindingKind::DataBroker => "Data Broker",
            FindingKind::NewsMention => "News Mention",
            FindingKind::Educational => "Educational",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingKind::SocialMedia => write!(f, "social_media"),
            FindingKind::Professional => write!(f, "professional"),
            FindingKind::DataBroker => write!(f, "data_broker"),
            FindingKind::NewsMention => write!(f, "news_mention"),
            FindingKind::Educational => write!(f, "educational"),
        }
    }
}

impl FromStr for FindingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "social_media" => Ok(FindingKind::SocialMedia),
            "professional" => Ok(FindingKind::Professional),
            "data_broker" => Ok(FindingKind::DataBroker),
            "news_mention" => Ok(FindingKind::NewsMention),
            "educational" => Ok(FindingKind::Educational),
            other => Err(format!("invalid finding kind: '{other}'")),
        }
    }
}

/// Unique identifier for a footprint finding, wrapping a UUID v7.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FindingId(pub Uuid);

impl FindingId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for FindingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FindingId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A finding produced by a research source, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingDraft {
    /// Platform or site the information was found on.
    pub source: String,
    pub kind: FindingKind,
    pub content: String,
    pub risk: RiskLevel,
    pub recommendation: String,
}

/// A persisted piece of digital-footprint information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintFinding {
    pub id: FindingId,
    pub companion_id: CompanionId,
    pub source: String,
    pub kind: FindingKind,
    pub content: String,
    pub risk: RiskLevel,
    pub recommendation: String,
    pub discovered_at: DateTime<Utc>,
}

/// Rolled-up risk assessment across all findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivacyAssessment {
    pub overall: RiskLevel,
    pub high_risk_items: u32,
    pub medium_risk_items: u32,
    pub total_findings: u32,
}

/// Category a recommendation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    General,
    DataBrokers,
    Passwords,
    TwoFactor,
    /// Targeted at one specific high-risk finding.
    Specific,
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationCategory::General => write!(f, "general"),
            RecommendationCategory::DataBrokers => write!(f, "data_brokers"),
            RecommendationCategory::Passwords => write!(f, "passwords"),
            RecommendationCategory::TwoFactor => write!(f, "two_factor"),
            RecommendationCategory::Specific => write!(f, "specific"),
        }
    }
}

/// How urgent a recommendation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
        }
    }
}

/// How hard a recommendation is to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
        }
    }
}

/// An actionable privacy recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub difficulty: Difficulty,
}

/// Tip categories the guardian can speak to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    General,
    SocialMedia,
    Passwords,
    DataBrokers,
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TipCategory::General => write!(f, "general"),
            TipCategory::SocialMedia => write!(f, "social_media"),
            TipCategory::Passwords => write!(f, "passwords"),
            TipCategory::DataBrokers => write!(f, "data_brokers"),
        }
    }
}

impl FromStr for TipCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(TipCategory::General),
            "social_media" => Ok(TipCategory::SocialMedia),
            "passwords" => Ok(TipCategory::Passwords),
            "data_brokers" => Ok(TipCategory::DataBrokers),
            other => Err(format!("invalid tip category: '{other}'")),
        }
    }
}

impl Default for TipCategory {
    fn default() -> Self {
        TipCategory::General
    }
}

/// How much time the user wants to spend on privacy work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeCommitment {
    Low,
    Medium,
    High,
}

impl fmt::Display for TimeCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeCommitment::Low => write!(f, "low"),
            TimeCommitment::Medium => write!(f, "medium"),
            TimeCommitment::High => write!(f, "high"),
        }
    }
}

impl FromStr for TimeCommitment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(TimeCommitment::Low),
            "medium" => Ok(TimeCommitment::Medium),
            "high" => Ok(TimeCommitment::High),
            other => Err(format!("invalid time commitment: '{other}'")),
        }
    }
}

impl Default for TimeCommitment {
    fn default() -> Self {
        TimeCommitment::Medium
    }
}

/// A phased privacy action plan sized to the user's time budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionPlan {
    pub immediate: Vec<String>,
    pub weekly: Vec<String>,
    pub monthly: Vec<String>,
    pub estimated_time: String,
}

/// Acknowledgement returned when footprint research kicks off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchStatus {
    pub queries_generated: u32,
    pub estimated_time: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_risk_level_roundtrip() {
        for risk in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            let parsed: RiskLevel = risk.to_string().parse().unwrap();
            assert_eq!(risk, parsed);
        }
    }

    #[test]
    fn test_finding_kind_roundtrip() {
        for kind in [
            FindingKind::SocialMedia,
            FindingKind::Professional,
            FindingKind::DataBroker,
            FindingKind::NewsMention,
            FindingKind::Educational,
        ] {
            let parsed: FindingKind = kind.to_string().parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_finding_kind_labels() {
        assert_eq!(FindingKind::SocialMedia.label(), "Social Media");
        assert_eq!(FindingKind::DataBroker.label(), "Data Broker");
    }

    #[test]
    fn test_tip_category_falls_back_via_default() {
        let parsed = "whatever".parse::<TipCategory>().unwrap_or_default();
        assert_eq!(parsed, TipCategory::General);
    }

    #[test]
    fn test_time_commitment_roundtrip() {
        for tc in [
            TimeCommitment::Low,
            TimeCommitment::Medium,
            TimeCommitment::High,
        ] {
            let parsed: TimeCommitment = tc.to_string().parse().unwrap();
            assert_eq!(tc, parsed);
        }
    }
}
