//! Application state and key handling

use crate::backend::{ApyHubVerifier, SupabaseStore};
use crate::config::SignupConfig;
use crate::pipeline::{PendingWork, PipelineEvent, PrecheckStage, SubmissionPipeline};
use crate::state::{SignupSession, SlideState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// The signup being filled in
    pub session: SignupSession,
    /// Step slide animation
    pub slide: SlideState,
    pipeline: SubmissionPipeline,
    /// Finished pipeline work comes back through here
    events_tx: mpsc::UnboundedSender<PipelineEvent>,
    events_rx: mpsc::UnboundedReceiver<PipelineEvent>,
    quit: bool,
}

impl App {
    /// Build the app with clients created from configuration
    pub fn new(config: &SignupConfig) -> Result<Self> {
        let store = SupabaseStore::new(
            config.supabase_url()?,
            config.supabase_anon_key()?,
            config.signups_table(),
        )?;
        let mut pipeline = SubmissionPipeline::new(Arc::new(store));

        let check_enabled = config.academic_email_check();
        let token = match config.apy_token() {
            Ok(token) => Some(token),
            Err(err) if check_enabled => return Err(err.into()),
            Err(_) => None,
        };
        if let Some(token) = token {
            let verifier = ApyHubVerifier::new(config.academic_email_endpoint(), token);
            pipeline = pipeline.with_precheck(PrecheckStage::academic_email(
                Arc::new(verifier),
                check_enabled,
            ));
        }

        tracing::info!(
            table = config.signups_table(),
            academic_email_check = check_enabled,
            "signup flow ready"
        );

        Ok(Self::with_pipeline(pipeline))
    }

    pub fn with_pipeline(pipeline: SubmissionPipeline) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            session: SignupSession::default(),
            slide: SlideState::new(),
            pipeline,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the UI needs fast redraws
    pub fn is_animating(&self) -> bool {
        self.slide.is_animating() || self.session.flow().is_busy()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.session.flow().is_submitted() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                self.quit = true;
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit = true,
            // Same path as the on-screen OK / Submit control
            KeyCode::Enter | KeyCode::Down => self.submit_active_field(),
            KeyCode::Char('n') if ctrl => self.submit_active_field(),
            KeyCode::Up | KeyCode::BackTab => self.session.retreat(),
            KeyCode::Char('p') if ctrl => self.session.retreat(),
            KeyCode::Char('u') if ctrl => self.session.set_active_value(String::new()),
            KeyCode::Char(c) if !ctrl => self.session.input_char(c),
            KeyCode::Backspace => self.session.backspace(),
            _ => {}
        }

        self.slide.sync(self.session.flow());
        Ok(())
    }

    /// Validate the active field and start whatever comes next
    pub fn submit_active_field(&mut self) {
        if let Some(work) = self.pipeline.submit_active_field(&mut self.session) {
            self.dispatch(work);
        }
    }

    /// Apply finished pipeline work. Call once per loop tick.
    pub fn poll_pipeline(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            tracing::debug!(?event, "pipeline event");
            if let Some(work) = self.pipeline.complete(&mut self.session, event) {
                self.dispatch(work);
            }
        }
        self.slide.sync(self.session.flow());
    }

    fn dispatch(&self, work: PendingWork) {
        let pipeline = self.pipeline.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let event = pipeline.run(work).await;
            if tx.send(event).is_err() {
                tracing::debug!("app closed before pipeline work finished");
            }
        });
    }
}
