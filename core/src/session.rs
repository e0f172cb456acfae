//! Search lifecycle shared by the UI.
//!
//! `idle -> loading` on every search, `loading -> results` when a search
//! yields at least one video, `loading -> idle` on failure or an empty list.
//! Each search gets a generation number; completions from an older
//! generation are ignored so a slow response cannot replace a newer one.

use crate::error::Result;
use crate::model::VideoSummary;
use log::{debug, error, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Results,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    generation: u64,
    phase: SearchPhase,
    videos: Vec<VideoSummary>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    pub fn can_export(&self) -> bool {
        self.phase == SearchPhase::Results
    }

    /// Ranked results of the latest finished search.
    pub fn videos(&self) -> &[VideoSummary] {
        &self.videos
    }

    /// Starts a search, discarding the previous results. Returns the
    /// generation to hand back to [`SearchSession::finish`].
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = SearchPhase::Loading;
        self.videos.clear();
        debug!("Search generation {} started", self.generation);
        self.generation
    }

    /// Applies the outcome of a search. Returns `false` when `generation` has
    /// been superseded and the outcome was dropped.
    pub fn finish(&mut self, generation: u64, outcome: Result<Vec<VideoSummary>>) -> bool {
        if generation != self.generation {
            debug!(
                "Dropping stale search generation {generation} (current {})",
                self.generation
            );
            return false;
        }

        match outcome {
            Ok(videos) if videos.is_empty() => {
                info!("Search returned no videos");
                self.phase = SearchPhase::Idle;
            }
            Ok(videos) => {
                info!("Search returned {} videos", videos.len());
                self.videos = videos;
                self.phase = SearchPhase::Results;
            }
            Err(e) => {
                error!("Error fetching videos: {e}");
                self.phase = SearchPhase::Idle;
            }
        }
        true
    }
}
