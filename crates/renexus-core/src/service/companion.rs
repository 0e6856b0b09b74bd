//! Companion lifecycle: creation, lookup, listing, deletion.

use chrono::Utc;
use tracing::info;

use renexus_types::companion::{
    slugify, Companion, CompanionId, CreateCompanionRequest, HumorStyle,
};
use renexus_types::error::{CompanionError, RepositoryError};
use renexus_types::guardian::UserDetails;
use renexus_types::personality::TraitScores;

use crate::companion::engine::{KEY_USER_AGE, KEY_USER_LOCATION};
use crate::repository::{CompanionFilter, CompanionRepository, ProfileRepository};

const DEFAULT_COMPANION_NAME: &str = "Ren";
const SEED_CURIOSITY: f64 = 0.9;
const SEED_TRUST: f64 = 0.1;
const MAX_SLUG_ATTEMPTS: u32 = 100;

/// Trait vector every new persona starts from: warm, calm, otherwise neutral.
fn seed_traits() -> TraitScores {
    TraitScores {
        openness: 0.5,
        conscientiousness: 0.5,
        extraversion: 0.5,
        agreeableness: 0.8,
        neuroticism: 0.3,
    }
}

fn storage(err: RepositoryError) -> CompanionError {
    CompanionError::StorageError(err.to_string())
}

/// Manages companion records and the user facts attached to them.
pub struct CompanionService<C, P> {
    companion_repo: C,
    profile_repo: P,
}

impl<C, P> CompanionService<C, P>
where
    C: CompanionRepository,
    P: ProfileRepository,
{
    pub fn new(companion_repo: C, profile_repo: P) -> Self {
        Self {
            companion_repo,
            profile_repo,
        }
    }

    /// Create a companion bonded to the named user.
    ///
    /// The slug is derived from the user's name; when taken, a numeric
    /// suffix is appended. Age and location, when given, become profile
    /// entries so the guardian and timeline flows can use them later.
    pub async fn create(
        &self,
        request: CreateCompanionRequest,
    ) -> Result<Companion, CompanionError> {
        let user_name = request.user_name.trim();
        if user_name.is_empty() {
            return Err(CompanionError::InvalidName(
                "name must not be empty".to_string(),
            ));
        }
        let base = slugify(user_name);
        if base.is_empty() {
            return Err(CompanionError::InvalidName(format!(
                "'{user_name}' contains no usable characters"
            )));
        }
        let slug = self.unique_slug(&base).await?;

        let now = Utc::now();
        let companion = Companion {
            id: CompanionId::new(),
            slug,
            user_name: user_name.to_string(),
            companion_name: request
                .companion_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(DEFAULT_COMPANION_NAME)
                .to_string(),
            traits: seed_traits(),
            humor_style: HumorStyle::SelfAwareSarcastic,
            curiosity: SEED_CURIOSITY,
            trust: SEED_TRUST,
            conversation_count: 0,
            created_at: now,
            updated_at: now,
            last_active_at: None,
        };

        let created = self
            .companion_repo
            .create(&companion)
            .await
            .map_err(|err| match err {
                RepositoryError::Conflict(slug) => CompanionError::SlugConflict(slug),
                other => storage(other),
            })?;

        if let Some(age) = request.age {
            self.profile_repo
                .upsert(&created.id, KEY_USER_AGE, &age.to_string())
                .await
                .map_err(storage)?;
        }
        if let Some(location) = request
            .location
            .as_deref()
            .map(str::trim)
            .filter(|location| !location.is_empty())
        {
            self.profile_repo
                .upsert(&created.id, KEY_USER_LOCATION, location)
                .await
                .map_err(storage)?;
        }

        info!(companion_id = %created.id, slug = %created.slug, "Companion created");
        Ok(created)
    }

    pub async fn get(&self, id: &CompanionId) -> Result<Companion, CompanionError> {
        self.companion_repo
            .get_by_id(id)
            .await
            .map_err(storage)?
            .ok_or(CompanionError::NotFound)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Companion, CompanionError> {
        self.companion_repo
            .get_by_slug(slug)
            .await
            .map_err(storage)?
            .ok_or(CompanionError::NotFound)
    }

    pub async fn list(
        &self,
        filter: Option<CompanionFilter>,
    ) -> Result<Vec<Companion>, CompanionError> {
        self.companion_repo.list(filter).await.map_err(storage)
    }

    /// Delete a companion and everything stored under it.
    pub async fn delete(&self, id: &CompanionId) -> Result<(), CompanionError> {
        self.get(id).await?;
        self.companion_repo.delete(id).await.map_err(storage)?;
        info!(companion_id = %id, "Companion deleted");
        Ok(())
    }

    /// Assemble the user facts known for a companion, for guardian research
    /// and timeline rendering.
    pub async fn user_details(
        &self,
        companion: &Companion,
    ) -> Result<UserDetails, CompanionError> {
        let age = self
            .profile_repo
            .get(&companion.id, KEY_USER_AGE)
            .await
            .map_err(storage)?
            .and_then(|entry| entry.value.parse().ok());
        let location = self
            .profile_repo
            .get(&companion.id, KEY_USER_LOCATION)
            .await
            .map_err(storage)?
            .map(|entry| entry.value);
        Ok(UserDetails {
            name: companion.user_name.clone(),
            age,
            location,
        })
    }

    async fn unique_slug(&self, base: &str) -> Result<String, CompanionError> {
        if self
            .companion_repo
            .get_by_slug(base)
            .await
            .map_err(storage)?
            .is_none()
        {
            return Ok(base.to_string());
        }
        for counter in 2..=MAX_SLUG_ATTEMPTS {
            let candidate = format!("{base}-{counter}");
            if self
                .companion_repo
                .get_by_slug(&candidate)
                .await
                .map_err(storage)?
                .is_none()
            {
                return Ok(candidate);
            }
        }
        Err(CompanionError::SlugConflict(base.to_string()))
    }
}
