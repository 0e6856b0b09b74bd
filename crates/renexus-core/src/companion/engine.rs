//! The conversation engine.
//!
//! `exchange` runs one full message round trip: analyze the user's text,
//! fold it into the learned style profile, compose and adapt a reply,
//! record the turn, evolve the companion, and persist what was learned.

use chrono::Utc;
use tracing::debug;

use renexus_types::companion::{Companion, CompanionId, ProfileEntry};
use renexus_types::config::GlobalConfig;
use renexus_types::conversation::{ConversationId, ConversationTurn};
use renexus_types::error::RepositoryError;
use renexus_types::personality::TextAnalysis;
use renexus_types::style::{MessageStyle, StyleProfile};

use crate::personality::TraitAnalyzer;
use crate::repository::{CompanionRepository, ConversationRepository, ProfileRepository};
use crate::style::StyleLearner;

use super::responder::Responder;

/// Profile key for the user's age, set at creation time.
pub const KEY_USER_AGE: &str = "user_age";
/// Profile key for the user's location, set at creation time.
pub const KEY_USER_LOCATION: &str = "user_location";

const KEY_STYLE_VOCABULARY: &str = "style_vocabulary_level";
const KEY_STYLE_SENTENCE_LENGTH: &str = "style_sentence_length";
const KEY_STYLE_EXPRESSIVENESS: &str = "style_expressiveness";
const KEY_STYLE_FORMALITY: &str = "style_formality";
const KEY_STYLE_QUESTION_FREQUENCY: &str = "style_question_frequency";
const KEY_STYLE_HUMOR: &str = "style_humor";
const KEY_STYLE_TOPICS: &str = "style_topics";
const KEY_STYLE_MESSAGES: &str = "style_messages_analyzed";

/// Anchor for the persona's openness when mirroring the user.
const OPENNESS_MIRROR_BASE: f64 = 0.7;
/// How strongly the user's openness pulls the persona's down.
const OPENNESS_MIRROR_WEIGHT: f64 = 0.2;

/// Everything produced by one chat exchange.
#[derive(Debug, Clone)]
pub struct ExchangeOutcome {
    pub reply: String,
    pub analysis: TextAnalysis,
    pub style: MessageStyle,
}

/// Drives conversations for a single companion at a time.
///
/// The engine is stateless between calls; per-companion state lives in the
/// repositories and in the [`StyleLearner`] the caller holds for the session.
pub struct CompanionEngine<C, V, P> {
    companion_repo: C,
    conversation_repo: V,
    profile_repo: P,
    analyzer: TraitAnalyzer,
    responder: Responder,
    config: GlobalConfig,
}

impl<C, V, P> CompanionEngine<C, V, P>
where
    C: CompanionRepository,
    V: ConversationRepository,
    P: ProfileRepository,
{
    pub fn new(companion_repo: C, conversation_repo: V, profile_repo: P, config: GlobalConfig) -> Self {
        let responder = Responder::new(config.reserved_trust_threshold);
        Self {
            companion_repo,
            conversation_repo,
            profile_repo,
            analyzer: TraitAnalyzer::default(),
            responder,
            config,
        }
    }

    /// Rebuild the style learner from the companion's persisted profile.
    ///
    /// Unknown or malformed entries are skipped, leaving that slot at its
    /// default.
    pub async fn learner_for(
        &self,
        companion_id: &CompanionId,
    ) -> Result<StyleLearner, RepositoryError> {
        let entries = self.profile_repo.entries_for(companion_id).await?;
        let mut profile = StyleProfile::default();
        for entry in &entries {
            match entry.key.as_str() {
                KEY_STYLE_VOCABULARY => parse_f64(&entry.value, &mut profile.vocabulary_level),
                KEY_STYLE_SENTENCE_LENGTH => parse_f64(&entry.value, &mut profile.sentence_length),
                KEY_STYLE_EXPRESSIVENESS => parse_f64(&entry.value, &mut profile.expressiveness),
                KEY_STYLE_FORMALITY => parse_f64(&entry.value, &mut profile.formality),
                KEY_STYLE_QUESTION_FREQUENCY => {
                    parse_f64(&entry.value, &mut profile.question_frequency)
                }
                KEY_STYLE_HUMOR => {
                    if let Ok(style) = entry.value.parse() {
                        profile.humor_style = style;
                    }
                }
                KEY_STYLE_TOPICS => {
                    if let Ok(topics) = serde_json::from_str(&entry.value) {
                        profile.topic_interests = topics;
                    }
                }
                KEY_STYLE_MESSAGES => {
                    if let Ok(count) = entry.value.parse() {
                        profile.messages_analyzed = count;
                    }
                }
                _ => {}
            }
        }
        Ok(StyleLearner::with_profile(profile, self.config.style_learning_rate))
    }

    /// Run one full exchange and persist every side effect.
    ///
    /// `companion` is mutated in place with the evolved trait vector, trust,
    /// and counters; the same values are written back to storage.
    pub async fn exchange(
        &self,
        companion: &mut Companion,
        learner: &mut StyleLearner,
        user_message: &str,
    ) -> Result<ExchangeOutcome, RepositoryError> {
        let analysis = self.analyzer.analyze(user_message);
        let style = learner.observe(user_message);

        let reply = self.responder.compose(companion, user_message);
        let reply = learner.adapt(&reply);

        let turn = ConversationTurn {
            id: ConversationId::new(),
            companion_id: companion.id.clone(),
            user_message: user_message.to_string(),
            reply: reply.clone(),
            sentiment: Some(analysis.features.sentiment),
            trait_snapshot: serde_json::to_string(&analysis).ok(),
            created_at: Utc::now(),
        };
        self.conversation_repo.append(&turn).await?;

        self.evolve(companion, &analysis);
        self.companion_repo.update(companion).await?;
        self.persist_insights(&companion.id, &analysis, learner.profile())
            .await?;

        debug!(
            companion_id = %companion.id,
            trust = companion.trust,
            sentiment = analysis.features.sentiment,
            "Exchange recorded"
        );

        Ok(ExchangeOutcome { reply, analysis, style })
    }

    /// The most recent turns for a companion, newest first.
    pub async fn recent_turns(
        &self,
        companion_id: &CompanionId,
        limit: i64,
    ) -> Result<Vec<ConversationTurn>, RepositoryError> {
        self.conversation_repo.recent(companion_id, limit).await
    }

    /// Every profile entry stored for a companion, ordered by key.
    pub async fn insights(
        &self,
        companion_id: &CompanionId,
    ) -> Result<Vec<ProfileEntry>, RepositoryError> {
        self.profile_repo.entries_for(companion_id).await
    }

    /// Apply per-exchange evolution to the companion.
    ///
    /// Trust grows by the configured gain, capped at 1.0. The persona's
    /// openness runs counter to the user's, anchored at the mirror base.
    fn evolve(&self, companion: &mut Companion, analysis: &TextAnalysis) {
        companion.trust = (companion.trust + self.config.trust_gain).min(1.0);
        companion.traits.openness =
            OPENNESS_MIRROR_BASE - analysis.traits.openness * OPENNESS_MIRROR_WEIGHT;
        companion.conversation_count += 1;
        let now = Utc::now();
        companion.updated_at = now;
        companion.last_active_at = Some(now);
    }

    async fn persist_insights(
        &self,
        companion_id: &CompanionId,
        analysis: &TextAnalysis,
        profile: &StyleProfile,
    ) -> Result<(), RepositoryError> {
        let personality = [
            ("personality_openness", analysis.traits.openness),
            ("personality_conscientiousness", analysis.traits.conscientiousness),
            ("personality_extraversion", analysis.traits.extraversion),
            ("personality_agreeableness", analysis.traits.agreeableness),
            ("personality_neuroticism", analysis.traits.neuroticism),
            ("personality_complexity", analysis.features.complexity),
            ("personality_curiosity", analysis.features.curiosity),
            ("personality_enthusiasm", analysis.features.enthusiasm),
            ("personality_self_focus", analysis.features.self_focus),
            ("personality_sentiment", analysis.features.sentiment),
        ];
        for (key, value) in personality {
            self.profile_repo
                .upsert(companion_id, key, &value.to_string())
                .await?;
        }

        let style = [
            (KEY_STYLE_VOCABULARY, profile.vocabulary_level),
            (KEY_STYLE_SENTENCE_LENGTH, profile.sentence_length),
            (KEY_STYLE_EXPRESSIVENESS, profile.expressiveness),
            (KEY_STYLE_FORMALITY, profile.formality),
            (KEY_STYLE_QUESTION_FREQUENCY, profile.question_frequency),
        ];
        for (key, value) in style {
            self.profile_repo
                .upsert(companion_id, key, &value.to_string())
                .await?;
        }

        self.profile_repo
            .upsert(companion_id, KEY_STYLE_HUMOR, &profile.humor_style.to_string())
            .await?;
        let topics =
            serde_json::to_string(&profile.topic_interests).unwrap_or_else(|_| "[]".to_string());
        self.profile_repo
            .upsert(companion_id, KEY_STYLE_TOPICS, &topics)
            .await?;
        self.profile_repo
            .upsert(
                companion_id,
                KEY_STYLE_MESSAGES,
                &profile.messages_analyzed.to_string(),
            )
            .await?;

        Ok(())
    }
}

fn parse_f64(value: &str, slot: &mut f64) {
    if let Ok(parsed) = value.parse() {
        *slot = parsed;
    }
}
