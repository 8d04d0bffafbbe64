//! Interview session state machine.
//!
//! One `ConversationSession` per interactive connection, owned explicitly
//! by its caller -- no hidden process-wide session store. The session holds
//! the active case binding, the append-only transcript, and the orchestration
//! of "send user turn, receive patient turn, append both".
//!
//! States: `Uninitialized -> Ready` on first case selection; `Ready ->
//! AwaitingReply` while a completion call is in flight; back to `Ready` on
//! both success and failure. There is no terminal state; the session lives
//! until its owning connection ends.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use anamnesis_types::chat::{Turn, TurnRole};
use anamnesis_types::config::ChatConfig;
use anamnesis_types::error::SessionError;
use anamnesis_types::llm::{CompletionRequest, Message};

use crate::llm::BoxLlmProvider;
use crate::registry::CaseRegistry;

/// The model-side binding for a session: which case the provider is
/// configured with, and the instruction text it was bound to.
///
/// Invariant: while a binding exists, `system_instruction` equals the
/// registry's instruction for `label`. Case changes and resets replace the
/// whole binding together with the transcript; the two are never out of sync.
#[derive(Debug, Clone)]
pub struct CaseBinding {
    pub label: String,
    pub system_instruction: String,
    pub model: String,
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Ready,
    AwaitingReply,
}

/// A single student-patient interview session.
pub struct ConversationSession {
    id: Uuid,
    registry: Arc<CaseRegistry>,
    provider: Arc<BoxLlmProvider>,
    config: ChatConfig,
    binding: Option<CaseBinding>,
    transcript: Vec<Turn>,
    state: SessionState,
}

impl ConversationSession {
    /// Create a session with no case selected yet.
    pub fn new(
        registry: Arc<CaseRegistry>,
        provider: Arc<BoxLlmProvider>,
        config: ChatConfig,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            registry,
            provider,
            config,
            binding: None,
            transcript: Vec::new(),
            state: SessionState::Uninitialized,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The active case binding, if a case has been selected.
    pub fn binding(&self) -> Option<&CaseBinding> {
        self.binding.as_ref()
    }

    /// Label of the active case, if any.
    pub fn active_case(&self) -> Option<&str> {
        self.binding.as_ref().map(|b| b.label.as_str())
    }

    /// The ordered transcript so far.
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Select a patient case by label.
    ///
    /// Re-selecting the currently active case is idempotent: the transcript
    /// and binding are left untouched, so unrelated re-runs never discard
    /// history. Selecting a different case (or the first case on a fresh
    /// session) discards the transcript and installs a new binding. An
    /// unknown label fails with the session unchanged.
    pub fn select_case(&mut self, label: &str) -> Result<(), SessionError> {
        if self.state == SessionState::AwaitingReply {
            return Err(SessionError::ReplyPending);
        }

        let entry = self.registry.get(label)?;

        if self
            .binding
            .as_ref()
            .is_some_and(|b| b.label == entry.label)
        {
            debug!(case = %label, "case already active, keeping transcript");
            return Ok(());
        }

        info!(session_id = %self.id, case = %entry.label, "binding patient case");
        self.binding = Some(CaseBinding {
            label: entry.label.clone(),
            system_instruction: entry.instruction.clone(),
            model: self.config.model.clone(),
        });
        self.transcript.clear();
        self.state = SessionState::Ready;
        Ok(())
    }

    /// Discard the transcript and rebind the active case from the registry.
    ///
    /// Fails with `NoActiveCase` before the first selection, and with
    /// `UnknownCase` if the active label no longer resolves.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.state == SessionState::AwaitingReply {
            return Err(SessionError::ReplyPending);
        }

        let label = self
            .binding
            .as_ref()
            .map(|b| b.label.clone())
            .ok_or(SessionError::NoActiveCase)?;

        let entry = self.registry.get(&label)?;
        info!(session_id = %self.id, case = %label, "resetting simulation");
        self.binding = Some(CaseBinding {
            label: entry.label.clone(),
            system_instruction: entry.instruction.clone(),
            model: self.config.model.clone(),
        });
        self.transcript.clear();
        self.state = SessionState::Ready;
        Ok(())
    }

    /// Submit one student turn and wait for the patient's reply.
    ///
    /// Input that is empty after trimming is ignored (`Ok(None)`, transcript
    /// unchanged). Otherwise the user turn is appended, the full transcript
    /// plus the bound instruction text goes to the provider, and on success
    /// the patient turn is appended and returned. On provider failure the
    /// error propagates unchanged: the user turn stays as the transcript's
    /// unanswered tail, no patient turn is appended, and the session returns
    /// to `Ready` so the next submission is accepted. Nothing is retried.
    pub async fn submit_user_turn(&mut self, text: &str) -> Result<Option<Turn>, SessionError> {
        if self.state == SessionState::AwaitingReply {
            return Err(SessionError::ReplyPending);
        }

        let binding = self.binding.as_ref().ok_or(SessionError::NoActiveCase)?;

        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        self.transcript.push(Turn::new(TurnRole::User, text));

        let messages: Vec<Message> = self
            .transcript
            .iter()
            .map(|t| Message {
                role: t.role.as_message_role(),
                content: t.content.clone(),
            })
            .collect();

        let request = CompletionRequest {
            model: binding.model.clone(),
            messages,
            system: Some(binding.system_instruction.clone()),
            max_tokens: self.config.max_output_tokens,
            temperature: self.config.temperature,
        };

        self.state = SessionState::AwaitingReply;
        let result = self.provider.complete(&request).await;
        self.state = SessionState::Ready;

        match result {
            Ok(response) => {
                debug!(
                    session_id = %self.id,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "patient reply received"
                );
                let turn = Turn::new(TurnRole::Patient, response.content);
                self.transcript.push(turn.clone());
                Ok(Some(turn))
            }
            Err(e) => Err(SessionError::Model(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anamnesis_types::llm::{CompletionResponse, LlmError, Usage};

    use crate::llm::LlmProvider;

    /// Deterministically echoes the last user message back.
    struct EchoProvider;

    impl LlmProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        fn model(&self) -> &str {
            "echo-1"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            let content = request
                .messages
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_default();
            Ok(CompletionResponse {
                content,
                model: "echo-1".to_string(),
                usage: Usage::default(),
            })
        }
    }

    /// Always fails with a provider error.
    struct FailingProvider;

    impl LlmProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        fn model(&self) -> &str {
            "failing-1"
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::Provider {
                message: "boom".to_string(),
            })
        }
    }

    fn session_with<P: LlmProvider + 'static>(provider: P) -> ConversationSession {
        ConversationSession::new(
            Arc::new(CaseRegistry::builtin()),
            Arc::new(BoxLlmProvider::new(provider)),
            ChatConfig::default(),
        )
    }

    fn first_label() -> String {
        CaseRegistry::builtin().labels().next().unwrap().to_string()
    }

    #[test]
    fn test_fresh_session_is_uninitialized() {
        let session = session_with(EchoProvider);
        assert_eq!(session.state(), SessionState::Uninitialized);
        assert!(session.binding().is_none());
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_select_then_reset_binds_each_case() {
        let registry = CaseRegistry::builtin();
        for label in registry.labels() {
            let mut session = session_with(EchoProvider);
            session.select_case(label).unwrap();
            session.reset().unwrap();

            assert!(session.transcript().is_empty());
            let binding = session.binding().unwrap();
            assert_eq!(binding.label, label);
            assert_eq!(
                binding.system_instruction,
                registry.get(label).unwrap().instruction
            );
        }
    }

    #[tokio::test]
    async fn test_reselecting_active_case_keeps_transcript() {
        let mut session = session_with(EchoProvider);
        let label = first_label();
        session.select_case(&label).unwrap();
        session.submit_user_turn("hello").await.unwrap();
        assert_eq!(session.transcript().len(), 2);

        session.select_case(&label).unwrap();
        assert_eq!(session.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_switching_case_clears_transcript() {
        let registry = CaseRegistry::builtin();
        let labels: Vec<String> = registry.labels().map(String::from).collect();

        let mut session = session_with(EchoProvider);
        session.select_case(&labels[0]).unwrap();
        session.submit_user_turn("hello").await.unwrap();
        assert!(!session.transcript().is_empty());

        session.select_case(&labels[1]).unwrap();
        assert!(session.transcript().is_empty());
        assert_eq!(session.active_case(), Some(labels[1].as_str()));
    }

    #[tokio::test]
    async fn test_blank_submissions_are_noops() {
        let mut session = session_with(EchoProvider);
        session.select_case(&first_label()).unwrap();

        assert!(session.submit_user_turn("").await.unwrap().is_none());
        assert!(session.submit_user_turn("   ").await.unwrap().is_none());
        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_echo_provider_round_trip() {
        let mut session = session_with(EchoProvider);
        session.select_case(&first_label()).unwrap();

        let reply = session.submit_user_turn("hello").await.unwrap().unwrap();
        assert_eq!(reply.role, TurnRole::Patient);
        assert_eq!(reply.content, "hello");

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, TurnRole::User);
        assert_eq!(transcript[0].content, "hello");
        assert_eq!(transcript[1].role, TurnRole::Patient);
        assert_eq!(transcript[1].content, "hello");
    }

    #[tokio::test]
    async fn test_provider_failure_keeps_user_turn_and_recovers() {
        let mut session = session_with(FailingProvider);
        session.select_case(&first_label()).unwrap();

        let err = session.submit_user_turn("hi").await.unwrap_err();
        assert!(matches!(err, SessionError::Model(_)));

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, TurnRole::User);
        assert_eq!(transcript[0].content, "hi");
        assert_eq!(session.state(), SessionState::Ready);

        // The session must accept a subsequent submission.
        let err = session.submit_user_turn("still there?").await.unwrap_err();
        assert!(matches!(err, SessionError::Model(_)));
        assert_eq!(session.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_label_leaves_session_unchanged() {
        let mut session = session_with(EchoProvider);
        let label = first_label();
        session.select_case(&label).unwrap();
        session.submit_user_turn("hello").await.unwrap();
        let before = session.transcript().len();

        let err = session.select_case("unknown-label").unwrap_err();
        assert!(matches!(err, SessionError::UnknownCase(_)));
        assert_eq!(session.transcript().len(), before);
        assert_eq!(session.active_case(), Some(label.as_str()));
    }

    #[tokio::test]
    async fn test_submit_without_case_fails() {
        let mut session = session_with(EchoProvider);
        let err = session.submit_user_turn("hello").await.unwrap_err();
        assert!(matches!(err, SessionError::NoActiveCase));
    }

    #[test]
    fn test_reset_without_case_fails() {
        let mut session = session_with(EchoProvider);
        let err = session.reset().unwrap_err();
        assert!(matches!(err, SessionError::NoActiveCase));
    }
}
