use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{MAX_PLAYER_NAME_LEN, SCORE_SERVICE_TIMEOUT_MS};
use crate::error::ScoreServiceError;

const HIGH_SCORES_PATH: &str = "get_high_scores";
const SUBMIT_SCORE_PATH: &str = "submit_score";
const ANONYMOUS_PLAYER: &str = "Anonymous";

/// One leaderboard row as exchanged with the score service.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

/// Remote high-score storage.
pub trait ScoreService {
    /// Fetches the current leaderboard, best first.
    fn fetch_high_scores(&self) -> Result<Vec<ScoreEntry>, ScoreServiceError>;

    /// Submits one finished game. The response body is not inspected.
    fn submit_score(&self, entry: &ScoreEntry) -> Result<(), ScoreServiceError>;
}

/// Score service reached over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpScoreService {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpScoreService {
    /// Creates a client for the service rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_millis(SCORE_SERVICE_TIMEOUT_MS))
            .build();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

impl ScoreService for HttpScoreService {
    fn fetch_high_scores(&self) -> Result<Vec<ScoreEntry>, ScoreServiceError> {
        let response = self.agent.get(&self.url(HIGH_SCORES_PATH)).call()?;
        Ok(serde_json::from_reader(response.into_reader())?)
    }

    fn submit_score(&self, entry: &ScoreEntry) -> Result<(), ScoreServiceError> {
        self.agent.post(&self.url(SUBMIT_SCORE_PATH)).send_json(entry)?;
        Ok(())
    }
}

/// Trims a typed name and substitutes a placeholder when nothing is left.
#[must_use]
pub fn normalize_player_name(raw: &str) -> String {
    let trimmed: String = raw.trim().chars().take(MAX_PLAYER_NAME_LEN).collect();
    if trimmed.is_empty() {
        ANONYMOUS_PLAYER.to_owned()
    } else {
        trimmed
    }
}

/// Last known leaderboard plus the service it came from.
///
/// Every service failure is logged and swallowed here; the previous rows
/// stay on screen.
pub struct Leaderboard {
    service: Option<Box<dyn ScoreService>>,
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    #[must_use]
    pub fn new(service: Option<Box<dyn ScoreService>>) -> Self {
        Self {
            service,
            entries: Vec::new(),
        }
    }

    /// A leaderboard with no backing service; all calls are no-ops.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.service.is_some()
    }

    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Best score currently known, zero when the board is empty.
    #[must_use]
    pub fn top_score(&self) -> u32 {
        self.entries.iter().map(|entry| entry.score).max().unwrap_or(0)
    }

    /// Reloads the rows. Returns true when the service answered.
    pub fn refresh(&mut self) -> bool {
        let Some(service) = self.service.as_ref() else {
            return false;
        };

        match service.fetch_high_scores() {
            Ok(mut entries) => {
                entries.sort_by(|a, b| b.score.cmp(&a.score));
                tracing::debug!(rows = entries.len(), "leaderboard refreshed");
                self.entries = entries;
                true
            }
            Err(error) => {
                tracing::warn!("failed to load high scores: {error}");
                false
            }
        }
    }

    /// Submits a score once, then reloads the rows. Returns true when the
    /// submission went through. Failures are not retried.
    pub fn submit(&mut self, raw_name: &str, score: u32) -> bool {
        let Some(service) = self.service.as_ref() else {
            return false;
        };

        let entry = ScoreEntry {
            name: normalize_player_name(raw_name),
            score,
        };
        if let Err(error) = service.submit_score(&entry) {
            tracing::warn!(name = %entry.name, score, "failed to submit score: {error}");
            return false;
        }

        tracing::info!(name = %entry.name, score, "score submitted");
        self.refresh();
        true
    }
}
