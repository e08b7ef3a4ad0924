//! Workflow session controller
//!
//! One `Session` instance owns all mutable workflow state: the pair list,
//! the generated URL, the feedback log and the in-flight gate. The two
//! backend workflows are split into `begin_*`/`finish_*` halves so the
//! network round-trip can be awaited by the caller while the state
//! transitions stay synchronous and testable.
//!
//! At most one workflow invocation is in flight at a time: while a request
//! is awaiting the backend, re-triggering either workflow is rejected with
//! no observable effect. No automatic retries; the user re-triggers.

use crate::api::{DetectResponse, ValidateRequest, ValidateResponse};
use crate::error::{Error, Result};
use crate::feedback::{FeedbackLog, Level};
use crate::pairs::{InsertOutcome, PairList, PairValues, RemoveOutcome, ReplaceOutcome};
use crate::query;
use crate::validate::{validate_for_submission, validate_remote_source};

/// Workflow phase; `Validating` is synchronous and collapses into the
/// begin call, so only the suspension point is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    AwaitingBackend,
}

/// Everything the caller needs to issue the validate-configuration call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub service_root: String,
    pub request: ValidateRequest,
}

/// Everything the caller needs to issue the auto-detect call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectRequest {
    pub service_root: String,
    pub remote_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingGenerate {
    service_root: String,
    remote_url: String,
    pairs: Vec<PairValues>,
}

/// Session state for one page lifetime
#[derive(Debug, Clone)]
pub struct Session {
    pairs: PairList,
    feedback: FeedbackLog,
    phase: Phase,
    generated_url: Option<String>,
    pending: Option<PendingGenerate>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            pairs: PairList::new(),
            feedback: FeedbackLog::new(),
            phase: Phase::Idle,
            generated_url: None,
            pending: None,
        }
    }

    pub fn pairs(&self) -> &PairList {
        &self.pairs
    }

    pub fn feedback(&self) -> &FeedbackLog {
        &self.feedback
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::AwaitingBackend
    }

    pub fn generated_url(&self) -> Option<&str> {
        self.generated_url.as_deref()
    }

    /// Record a notice outside of the workflow transitions (UI actions)
    pub fn notify(&mut self, level: Level, message: impl Into<String>, now: &str) {
        self.feedback.push(level, message, now);
    }

    /// Reset the banner if it still shows a transient message
    pub fn clear_notice_if(&mut self, message: &str) {
        self.feedback.clear_current_if(message);
    }

    // --- pair editing -----------------------------------------------------

    pub fn set_landing(&mut self, index: usize, value: impl Into<String>) {
        self.pairs.set_landing(index, value);
    }

    pub fn set_front(&mut self, index: usize, value: impl Into<String>) {
        self.pairs.set_front(index, value);
    }

    pub fn insert_pair_after(&mut self, anchor: Option<usize>, now: &str) {
        if let InsertOutcome::AtCapacity = self.pairs.insert_after(anchor) {
            self.feedback.push(
                Level::Info,
                format!("At most {} manual pairs can be added.", self.pairs.capacity()),
                now,
            );
        }
    }

    pub fn remove_pair(&mut self, index: usize, now: &str) {
        if let RemoveOutcome::ClearedLastRow = self.pairs.remove(index) {
            self.feedback.push(
                Level::Info,
                "At least one row must remain; its fields were cleared instead.",
                now,
            );
        }
    }

    // --- generate workflow -------------------------------------------------

    /// Validate inputs and open the validate-configuration round-trip.
    ///
    /// Rejected silently while another request is in flight. Local
    /// validation failures surface a notice and leave the session idle
    /// without contacting the backend.
    pub fn begin_generate(
        &mut self,
        service_root: &str,
        remote_url: &str,
        now: &str,
    ) -> Result<GenerateRequest> {
        if self.is_busy() {
            return Err(Error::Busy);
        }
        self.generated_url = None;

        let remote = self.check(validate_remote_source(remote_url), now)?;
        let root = self.check(normalized_root(service_root), now)?;
        let pairs = self.check(validate_for_submission(&self.pairs), now)?;

        self.feedback.push(
            Level::Info,
            "Validating the configuration and generating the link...",
            now,
        );
        self.phase = Phase::AwaitingBackend;
        self.pending = Some(PendingGenerate {
            service_root: root.clone(),
            remote_url: remote.clone(),
            pairs: pairs.clone(),
        });
        Ok(GenerateRequest {
            service_root: root,
            request: ValidateRequest {
                remote_url: remote,
                node_pairs: pairs,
            },
        })
    }

    /// Close the validate-configuration round-trip.
    ///
    /// On backend success the download URL is composed and stored; on any
    /// failure the URL stays cleared so the post-success actions remain
    /// disabled. Always returns to idle.
    pub fn finish_generate(&mut self, outcome: Result<ValidateResponse>, now: &str) {
        let pending = self.pending.take();
        self.phase = Phase::Idle;
        match outcome {
            Ok(response) => {
                self.feedback.absorb_backend_logs(&response.logs, now);
                if response.success {
                    if let Some(p) = pending {
                        self.generated_url =
                            Some(query::subscription_url(&p.service_root, &p.remote_url, &p.pairs));
                        let message = response
                            .message
                            .unwrap_or_else(|| "Configuration validated; link generated.".to_string());
                        self.feedback.push(Level::Success, message, now);
                    }
                } else {
                    self.generated_url = None;
                    let message = response
                        .message
                        .unwrap_or_else(|| "validation failed".to_string());
                    self.feedback
                        .push(Level::Error, Error::BackendRejected(message).to_string(), now);
                }
            }
            Err(error) => {
                self.generated_url = None;
                self.feedback.push(Level::Error, error.to_string(), now);
            }
        }
    }

    // --- autodetect workflow -----------------------------------------------

    /// Validate the remote source and open the auto-detect round-trip
    pub fn begin_autodetect(
        &mut self,
        service_root: &str,
        remote_url: &str,
        now: &str,
    ) -> Result<DetectRequest> {
        if self.is_busy() {
            return Err(Error::Busy);
        }
        let remote = self.check(validate_remote_source(remote_url), now)?;
        let root = self.check(normalized_root(service_root), now)?;

        self.feedback
            .push(Level::Info, "Auto-detecting landing/front pairs...", now);
        self.phase = Phase::AwaitingBackend;
        Ok(DetectRequest {
            service_root: root,
            remote_url: remote,
        })
    }

    /// Close the auto-detect round-trip.
    ///
    /// Suggestions replace the whole list, truncated to capacity. An empty
    /// suggestion set, a reported failure or a transport fault all reset
    /// the list to a single empty row: edits made before auto-detecting are
    /// discarded either way.
    pub fn finish_autodetect(&mut self, outcome: Result<DetectResponse>, now: &str) {
        self.phase = Phase::Idle;
        match outcome {
            Ok(response) => {
                self.feedback.absorb_backend_logs(&response.logs, now);
                if response.success && !response.suggested_pairs.is_empty() {
                    let replaced = self.pairs.replace_all(response.suggested_pairs);
                    let message = response
                        .message
                        .unwrap_or_else(|| "Auto-detection finished.".to_string());
                    self.feedback.push(Level::Success, message, now);
                    if let ReplaceOutcome::Truncated { kept, dropped } = replaced {
                        self.feedback.push(
                            Level::Warn,
                            format!(
                                "Detected {} pairs; only the first {} are kept.",
                                kept + dropped,
                                kept
                            ),
                            now,
                        );
                    }
                } else if response.success {
                    self.pairs.replace_all(Vec::new());
                    let message = response.message.unwrap_or_else(|| {
                        "No pairs were detected; check the subscription or add pairs manually."
                            .to_string()
                    });
                    self.feedback.push(Level::Info, message, now);
                } else {
                    self.pairs.replace_all(Vec::new());
                    let message = response
                        .message
                        .unwrap_or_else(|| "auto-detection failed".to_string());
                    self.feedback
                        .push(Level::Error, Error::BackendRejected(message).to_string(), now);
                }
            }
            Err(error) => {
                self.pairs.replace_all(Vec::new());
                self.feedback.push(Level::Error, error.to_string(), now);
            }
        }
    }

    /// Surface a local validation failure and hand the error back
    fn check<T>(&mut self, result: Result<T>, now: &str) -> Result<T> {
        if let Err(error) = &result {
            self.feedback.push(Level::Error, error.to_string(), now);
        }
        result
    }
}

fn normalized_root(service_root: &str) -> Result<String> {
    let root = query::normalize_service_root(service_root);
    if root.is_empty() {
        return Err(Error::MissingServiceRoot);
    }
    Ok(root)
}
