//! The session orchestrator: drives one design run end to end.

use crate::{
    DeterministicStyleGuide, FeedbackConfig, InMemorySessionStore, RuleJudge, SmartDraftCurator,
    art_director, designer, feedback, narrator,
};
use booksmith_core::{
    ArtifactMetadata, DesignArtifact, DesignIteration, Photo, Session, SessionInput, SessionStatus,
};
use booksmith_error::{BooksmithError, BooksmithResult, SessionError, SessionErrorKind};
use booksmith_interface::{Curator, SessionStore, StyleGuideGenerator, VisualJudge};
use booksmith_security::{
    BuiltinFontRegistry, ContentFields, DesignGate, DesignSpec, LayoutSettings,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Fixed progress checkpoints along the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Checkpoint {
    Started,
    ThemeReady,
    NarratorStarted,
    NarratorDone,
    DesignerStarted,
    Complete,
}

impl Checkpoint {
    fn percent(self) -> u8 {
        match self {
            Checkpoint::Started => 10,
            Checkpoint::ThemeReady => 30,
            Checkpoint::NarratorStarted => 40,
            Checkpoint::NarratorDone => 60,
            Checkpoint::DesignerStarted => 70,
            Checkpoint::Complete => 100,
        }
    }
}

/// Drives design sessions through the art director, narrator, and designer
/// stages, refines important pages through the self-correction loop, and
/// gates the result before assembling the final artifact.
///
/// Collaborators come in through the `booksmith_interface` traits; the
/// [`BookDesigner::deterministic`] constructor wires up the rule-based
/// defaults so the pipeline runs without any model backend.
pub struct BookDesigner {
    store: Arc<dyn SessionStore>,
    generator: Arc<dyn StyleGuideGenerator>,
    curator: Arc<dyn Curator>,
    judge: Arc<dyn VisualJudge>,
    gate: DesignGate,
    feedback: FeedbackConfig,
}

impl BookDesigner {
    /// Create an orchestrator over explicit collaborators.
    pub fn new(
        store: Arc<dyn SessionStore>,
        generator: Arc<dyn StyleGuideGenerator>,
        curator: Arc<dyn Curator>,
        judge: Arc<dyn VisualJudge>,
        gate: DesignGate,
    ) -> Self {
        Self {
            store,
            generator,
            curator,
            judge,
            gate,
            feedback: FeedbackConfig::default(),
        }
    }

    /// Fully deterministic orchestrator: in-memory store, rule-based
    /// generator, curator, and judge, and the built-in font registry.
    pub fn deterministic() -> Self {
        Self::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(DeterministicStyleGuide::new()),
            Arc::new(SmartDraftCurator::new()),
            Arc::new(RuleJudge::new()),
            DesignGate::new(Box::new(BuiltinFontRegistry::new())),
        )
    }

    /// Replace the self-correction tuning.
    pub fn with_feedback(mut self, feedback: FeedbackConfig) -> Self {
        self.feedback = feedback;
        self
    }

    /// Create a pending session without starting the pipeline.
    pub fn create_session(&self, input: SessionInput) -> BooksmithResult<Session> {
        self.store.create(input)
    }

    /// Fetch a session by id.
    pub fn get_session(&self, id: &str) -> BooksmithResult<Option<Session>> {
        self.store.get(id)
    }

    /// Run one design session end to end.
    ///
    /// Creates the session, drives it through every stage, and returns the
    /// completed record. On a stage failure the stored session is moved to
    /// the terminal error state before the error propagates.
    #[instrument(skip_all, fields(
        activities = input.activities.len(),
        photos = input.photos.len(),
    ))]
    pub async fn run_design_session(&self, input: SessionInput) -> BooksmithResult<Session> {
        let session = self.store.create(input)?;
        let id = session.id.clone();
        info!(id = %id, "Design session started");

        match self.drive(session).await {
            Ok(session) => {
                info!(id = %id, pages = session
                    .output
                    .artifact
                    .as_ref()
                    .map(|a| a.pages.len())
                    .unwrap_or(0), "Design session completed");
                Ok(session)
            }
            Err(e) => {
                self.mark_error(&id, &e);
                Err(e)
            }
        }
    }

    async fn drive(&self, mut session: Session) -> BooksmithResult<Session> {
        let activities = session.input.activities.clone();
        let photos = session.input.photos.clone();
        let options = session.input.options.clone();

        self.advance(
            &mut session,
            SessionStatus::ArtDirector,
            Checkpoint::Started,
            "Choosing a theme",
        )?;
        let (art, primary_race) = art_director::direct(
            &activities,
            &photos,
            &options,
            self.curator.as_ref(),
            self.generator.as_ref(),
        )
        .await?;
        let theme = art.theme.clone();
        session.output.art_director = Some(art);
        self.advance(
            &mut session,
            SessionStatus::ArtDirector,
            Checkpoint::ThemeReady,
            "Theme selected",
        )?;

        self.advance(
            &mut session,
            SessionStatus::Narrator,
            Checkpoint::NarratorStarted,
            "Writing chapters",
        )?;
        let narration = narrator::narrate(&activities, &options, primary_race.as_ref());
        let chapters = narration.chapters.clone();
        let highlights = narration.highlights.clone();
        let year_narrative = narration.year_narrative.clone();
        session.output.narrator = Some(narration);
        self.advance(
            &mut session,
            SessionStatus::Narrator,
            Checkpoint::NarratorDone,
            "Chapters written",
        )?;

        self.advance(
            &mut session,
            SessionStatus::Designer,
            Checkpoint::DesignerStarted,
            "Laying out pages",
        )?;
        let mut designed =
            designer::design(&chapters, &theme, &highlights, self.curator.as_ref()).await?;

        // Important pages go through the self-correction loop; the rest
        // carry the unrefined score.
        let mut iterations: Vec<DesignIteration> = Vec::new();
        for page in &mut designed.pages {
            if page.page_type.is_important() {
                let outcome = feedback::design_with_feedback(
                    page,
                    &theme,
                    self.judge.as_ref(),
                    &self.feedback,
                );
                *page = outcome.design;
                iterations.extend(outcome.iterations);
            } else {
                page.score = Some(self.feedback.unrefined_score);
            }
        }
        let final_score = mean_score(&designed.pages.iter().filter_map(|p| p.score).collect::<Vec<_>>());
        designed.iterations = iterations.clone();
        designed.final_score = final_score;
        let pages = designed.pages.clone();
        session.output.designer = Some(designed);

        // Gate the theme and book text before trusting them for rendering
        let spec = DesignSpec {
            theme: (&theme).into(),
            layout: Some(LayoutSettings {
                page_size: Some("letter".to_string()),
                margin: Some(48.0),
                show_page_numbers: Some(true),
            }),
            content: Some(ContentFields {
                title: Some(year_narrative.title.clone()),
                subtitle: None,
                athlete_name: None,
                foreword: Some(year_narrative.opening_paragraph.clone()),
                captions: caption_texts(&photos),
            }),
        };
        let verdict = self.gate.validate(&spec)?;
        for warning in &verdict.warnings {
            warn!(id = %session.id, warning, "Gate warning");
        }
        if !verdict.valid {
            debug!(id = %session.id, findings = verdict.errors.len(), "Gate rejected the spec");
            session.errors.extend(verdict.errors.iter().cloned());
        }

        session.output.artifact = Some(DesignArtifact {
            theme,
            metadata: ArtifactMetadata {
                total_pages: pages.len() as u32,
                generated_at: Utc::now(),
                design_iterations: iterations.len() as u32,
                final_score,
            },
            pages,
        });
        self.advance(
            &mut session,
            SessionStatus::Completed,
            Checkpoint::Complete,
            "Design complete",
        )?;
        Ok(session)
    }

    /// Move the session forward and persist the new record.
    ///
    /// Percent only ratchets upward, so repeated checkpoints within one
    /// stage keep progress monotone.
    fn advance(
        &self,
        session: &mut Session,
        status: SessionStatus,
        checkpoint: Checkpoint,
        message: &str,
    ) -> BooksmithResult<()> {
        if !session.status.may_transition(status) {
            return Err(SessionError::new(SessionErrorKind::InvalidTransition {
                from: session.status.to_string(),
                to: status.to_string(),
            })
            .into());
        }
        session.status = status;
        session.progress.current_stage = status.to_string();
        session.progress.percent_complete =
            session.progress.percent_complete.max(checkpoint.percent());
        session.progress.message = message.to_string();
        debug!(
            id = %session.id,
            status = %status,
            percent = session.progress.percent_complete,
            "Session advanced"
        );

        let replaced = self.store.replace(session.clone())?;
        match replaced {
            Some(stored) => {
                *session = stored;
                Ok(())
            }
            None => {
                Err(SessionError::new(SessionErrorKind::NotFound(session.id.clone())).into())
            }
        }
    }

    /// Best-effort move to the terminal error state.
    fn mark_error(&self, id: &str, error: &BooksmithError) {
        let fetched = match self.store.get(id) {
            Ok(Some(session)) => session,
            Ok(None) => {
                warn!(id, "Session vanished before error could be recorded");
                return;
            }
            Err(e) => {
                warn!(id, error = %e, "Store unavailable while recording error");
                return;
            }
        };
        let mut session = fetched;
        if session.status.may_transition(SessionStatus::Error) {
            session.status = SessionStatus::Error;
            session.progress.current_stage = SessionStatus::Error.to_string();
            session.progress.message = "Design session failed".to_string();
            session.errors.push(error.to_string());
            if let Err(e) = self.store.replace(session) {
                warn!(id, error = %e, "Failed to persist error state");
            }
        }
    }
}

impl std::fmt::Debug for BookDesigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookDesigner")
            .field("generator", &self.generator.name())
            .field("feedback", &self.feedback)
            .finish_non_exhaustive()
    }
}

fn mean_score(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

fn caption_texts(photos: &[Photo]) -> Vec<String> {
    photos
        .iter()
        .filter_map(|p| p.caption.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use booksmith_core::{Activity, DesignOptions, PageType, WorkoutType};
    use chrono::{TimeZone, Utc};

    fn race(id: &str, month: u32) -> Activity {
        Activity {
            id: id.to_string(),
            name: format!("Race {id}"),
            workout_type: Some(WorkoutType::Race),
            distance: 42_195.0,
            moving_time: 3 * 3600,
            elevation_gain: 150.0,
            start_date: Utc.with_ymd_and_hms(2024, month, 14, 9, 0, 0).unwrap(),
            kudos_count: 20,
            photo_count: 1,
            pr_rank: Some(1),
        }
    }

    fn input(activities: Vec<Activity>) -> SessionInput {
        SessionInput {
            activities,
            photos: vec![],
            options: DesignOptions::default(),
        }
    }

    #[tokio::test]
    async fn test_full_run_completes_with_artifact() {
        let designer = BookDesigner::deterministic();
        let session = designer
            .run_design_session(input(vec![race("m", 4)]))
            .await
            .unwrap();
        assert_eq!(session.status, SessionStatus::Completed);
        assert_eq!(session.progress.percent_complete, 100);
        assert!(session.errors.is_empty());

        let artifact = session.output.artifact.unwrap();
        assert_eq!(artifact.theme.name, "Quiet Miles");
        assert_eq!(artifact.metadata.total_pages as usize, artifact.pages.len());
        assert!(artifact.metadata.final_score >= 70.0);
        assert!(artifact.pages.iter().all(|p| p.score.is_some()));
    }

    #[tokio::test]
    async fn test_empty_input_still_completes() {
        let designer = BookDesigner::deterministic();
        let session = designer.run_design_session(input(vec![])).await.unwrap();
        assert_eq!(session.status, SessionStatus::Completed);
        let narrator = session.output.narrator.as_ref().unwrap();
        assert!(narrator.chapters.is_empty());
        assert!(
            narrator
                .year_narrative
                .opening_paragraph
                .contains("consistent dedication")
        );
        let artifact = session.output.artifact.unwrap();
        let types: Vec<PageType> = artifact.pages.iter().map(|p| p.page_type).collect();
        assert_eq!(
            types,
            vec![PageType::Cover, PageType::YearStats, PageType::BackCover]
        );
    }

    #[tokio::test]
    async fn test_completed_session_is_persisted() {
        let designer = BookDesigner::deterministic();
        let session = designer
            .run_design_session(input(vec![race("m", 2)]))
            .await
            .unwrap();
        let stored = designer.get_session(&session.id).unwrap().unwrap();
        assert_eq!(stored.status, SessionStatus::Completed);
        assert!(stored.output.artifact.is_some());
    }

    #[tokio::test]
    async fn test_stage_failure_marks_session_error() {
        struct FailingGenerator;

        #[async_trait::async_trait]
        impl StyleGuideGenerator for FailingGenerator {
            async fn generate(
                &self,
                _request: &booksmith_interface::StyleGuideRequest,
            ) -> BooksmithResult<booksmith_interface::StyleGuideResponse> {
                Err(booksmith_error::DesignError::new(
                    booksmith_error::DesignErrorKind::StyleGuide("backend offline".to_string()),
                )
                .into())
            }

            fn name(&self) -> &'static str {
                "failing"
            }
        }

        let store = Arc::new(InMemorySessionStore::new());
        let designer = BookDesigner::new(
            store.clone(),
            Arc::new(FailingGenerator),
            Arc::new(SmartDraftCurator::new()),
            Arc::new(RuleJudge::new()),
            DesignGate::new(Box::new(BuiltinFontRegistry::new())),
        );
        let result = designer.run_design_session(input(vec![race("m", 6)])).await;
        assert!(result.is_err());

        // The stored record landed in the terminal error state
        let ids = store.session_ids();
        assert_eq!(ids.len(), 1);
        let session = store.get(&ids[0]).unwrap().unwrap();
        assert_eq!(session.status, SessionStatus::Error);
        assert!(session.errors.iter().any(|e| e.contains("backend offline")));
    }

    #[tokio::test]
    async fn test_important_pages_are_refined() {
        let designer = BookDesigner::deterministic();
        let session = designer
            .run_design_session(input(vec![race("m", 9)]))
            .await
            .unwrap();
        let output = session.output.designer.unwrap();
        assert!(!output.iterations.is_empty());
        for page in &output.pages {
            if !page.page_type.is_important() {
                assert_eq!(page.score, Some(75.0));
            }
        }
    }
}
