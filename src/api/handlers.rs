//! API Handlers
//!
//! HTTP request handlers for each story server endpoint.

use std::sync::{Arc, Mutex, PoisonError};

use axum::{body::Bytes, extract::State, Json};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{cache_key, InMemoryStoryCache, StoryCache};
use crate::catalog::{generate_random_keywords, KeywordCatalog, DEFAULT_RANDOM_KEYWORDS};
use crate::config::Config;
use crate::error::Result;
use crate::generation::{GenerationParams, StoryGenerator};
use crate::models::{HealthResponse, KeywordsResponse, StoryRequest, StoryResponse};
use crate::story::{build_prompt, ensure_known_keywords, sanitize_name, validate_age};

/// Random source used to pick keywords.
pub type SharedRng = Arc<Mutex<Box<dyn RngCore + Send>>>;

/// Application state shared across all handlers.
///
/// The cache lock is only held for individual reads and writes, never
/// across the generation call. Two concurrent misses on the same key both
/// generate and the later write wins.
#[derive(Clone)]
pub struct AppState {
    /// Allowed keywords
    pub catalog: Arc<KeywordCatalog>,
    /// Generated stories by cache key
    pub cache: Arc<RwLock<Box<dyn StoryCache>>>,
    /// Text generation backend
    pub generator: Arc<dyn StoryGenerator>,
    /// Sampling parameters for every generation call
    pub params: GenerationParams,
    rng: SharedRng,
}

impl AppState {
    /// Creates an AppState around `generator` with the reference catalog,
    /// an empty in-memory cache and an entropy-seeded RNG.
    pub fn new(generator: Arc<dyn StoryGenerator>) -> Self {
        let cache: Box<dyn StoryCache> = Box::new(InMemoryStoryCache::new());
        let rng: Box<dyn RngCore + Send> = Box::new(StdRng::from_entropy());
        Self {
            catalog: Arc::new(KeywordCatalog::reference()),
            cache: Arc::new(RwLock::new(cache)),
            generator,
            params: GenerationParams::default(),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Creates an AppState backed by the OpenAI client from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(config.openai_client()))
    }

    /// Replaces the story cache.
    pub fn with_cache(mut self, cache: Box<dyn StoryCache>) -> Self {
        self.cache = Arc::new(RwLock::new(cache));
        self
    }

    /// Replaces the random source used for keyword selection.
    pub fn with_rng<R: RngCore + Send + 'static>(mut self, rng: R) -> Self {
        let rng: Box<dyn RngCore + Send> = Box::new(rng);
        self.rng = Arc::new(Mutex::new(rng));
        self
    }

    fn random_keywords(&self, count: usize) -> Vec<String> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_random_keywords(&self.catalog, count, &mut *rng)
    }
}

/// Handler for GET /keywords
///
/// Lists the catalog and the total number of keywords.
pub async fn keywords_handler(State(state): State<AppState>) -> Json<KeywordsResponse> {
    Json(KeywordsResponse::new(&state.catalog))
}

/// Handler for POST /generate-story
///
/// An empty body, with or without a content type, is a request with no
/// fields set. A non-empty body must be a JSON story request.
pub async fn generate_story_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StoryResponse>> {
    let req = StoryRequest::from_body(&body)?;
    generate_story(&state, req).await.map(Json)
}

/// Resolves a story request against the cache and the generator.
///
/// Validates name, then age, then keywords; the first failure is returned.
/// Keywords the caller gave are used as-is, even an empty list; random ones
/// are picked only when the field is absent. Serves from cache when the
/// keyword set was seen before, otherwise generates, stores and returns a
/// new story.
pub async fn generate_story(state: &AppState, req: StoryRequest) -> Result<StoryResponse> {
    let name = req.name.as_ref().map(sanitize_name).transpose()?;
    let age = req.age.as_ref().map(validate_age).transpose()?;

    let keywords = match req.keywords {
        Some(keywords) => {
            ensure_known_keywords(&state.catalog, &keywords)?;
            keywords
        }
        None => state.random_keywords(DEFAULT_RANDOM_KEYWORDS),
    };

    let key = cache_key(&keywords);
    let cached = state.cache.read().await.get(&key);
    if let Some(story) = cached {
        debug!(%key, "Story cache hit");
        return Ok(StoryResponse::cached(story, keywords));
    }
    debug!(%key, "Story cache miss");

    let prompt = build_prompt(&keywords, name.as_deref(), age);
    let story = state.generator.generate(&prompt, &state.params).await?;

    state.cache.write().await.put(key, story.clone());
    info!(keywords = ?keywords, "Generated new story");

    Ok(StoryResponse::fresh(story, keywords))
}

/// Handler for GET /health
///
/// Reports liveness and the number of cached stories.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache_size = state.cache.read().await.len();
    Json(HealthResponse::ok(cache_size))
}
