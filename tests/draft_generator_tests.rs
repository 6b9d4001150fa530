//! Draft generator behaviour with a stubbed text-generation service

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use offerdeck::app::draft::prompt::{DEFAULT_DELAY, DEFAULT_PART, DEFAULT_SOLUTION};
    use offerdeck::app::draft::{
        Clipboard, ClipboardError, DraftError, DraftErrorKind, DraftField, DraftGenerator,
        DraftResult, TextGenerator,
    };
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Records prompts and answers every request with the same outcome
    struct StubGenerator {
        reply: Result<String, DraftError>,
        delay: Duration,
        prompts: Mutex<Vec<String>>,
    }

    impl StubGenerator {
        fn replying(reply: Result<String, DraftError>) -> Arc<Self> {
            Self::slow(reply, Duration::ZERO)
        }

        fn slow(reply: Result<String, DraftError>, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                reply,
                delay,
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, DraftError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            tokio::time::sleep(self.delay).await;
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    fn settle(drafts: &mut DraftGenerator) {
        for _ in 0..100 {
            drafts.poll_timeout(Duration::from_millis(50));
            if !drafts.is_pending() {
                return;
            }
        }
        panic!("request never completed");
    }

    #[test]
    fn test_empty_fields_use_default_phrases() {
        let stub = StubGenerator::replying(Ok("ok".into()));
        let mut drafts = DraftGenerator::new(stub.clone());
        drafts.submit();
        settle(&mut drafts);

        let prompts = stub.prompts();
        assert_eq!(prompts.len(), 1);
        for phrase in [DEFAULT_PART, DEFAULT_DELAY, DEFAULT_SOLUTION] {
            assert!(prompts[0].contains(phrase), "missing {:?}", phrase);
        }
    }

    #[test]
    fn test_filled_fields_replace_default_phrases() {
        let stub = StubGenerator::replying(Ok("ok".into()));
        let mut drafts = DraftGenerator::new(stub.clone());
        drafts.update_field(DraftField::PartDescription, "Brake Pad ABC-123");
        drafts.update_field(DraftField::Delay, "2-3 business days");
        drafts.update_field(DraftField::ProposedSolution, "Priority re-stock arranged");
        drafts.submit();
        settle(&mut drafts);

        let prompt = &stub.prompts()[0];
        assert!(prompt.contains("Brake Pad ABC-123"));
        assert!(prompt.contains("2-3 business days"));
        assert!(prompt.contains("Priority re-stock arranged"));
        assert!(!prompt.contains(DEFAULT_PART));
        assert!(!prompt.contains(DEFAULT_DELAY));
        assert!(!prompt.contains(DEFAULT_SOLUTION));
    }

    #[test]
    fn test_generated_text_becomes_success_verbatim() {
        let text = "Dear Valued Customer, ... Sincerely, Your Marketparts Team.";
        let mut drafts = DraftGenerator::new(StubGenerator::replying(Ok(text.into())));
        drafts.submit();
        settle(&mut drafts);
        assert_eq!(drafts.result(), &DraftResult::Success(text.to_string()));
    }

    #[test]
    fn test_malformed_response_becomes_failed() {
        let mut drafts = DraftGenerator::new(StubGenerator::replying(Err(DraftError::malformed(
            "no candidates",
            r#"{"candidates":[]}"#,
        ))));
        drafts.submit();
        settle(&mut drafts);

        let err = drafts.result().error().expect("expected a failure");
        assert_eq!(err.kind(), DraftErrorKind::MalformedResponse);
        assert_eq!(
            err.user_message(),
            "Failed to generate draft: unexpected response from the AI service."
        );
    }

    #[test]
    fn test_transport_failure_becomes_failed() {
        let mut drafts = DraftGenerator::new(StubGenerator::replying(Err(DraftError::Transport(
            "connection refused".into(),
        ))));
        drafts.submit();
        settle(&mut drafts);

        let err = drafts.result().error().expect("expected a failure");
        assert_eq!(err.kind(), DraftErrorKind::Transport);
        assert_eq!(err.user_message(), "Could not connect to the AI service.");
    }

    #[test]
    fn test_copy_writes_nothing_unless_success() {
        let stub = StubGenerator::slow(Ok("draft".into()), Duration::from_millis(200));
        let mut drafts = DraftGenerator::new(stub);
        let mut clipboard = RecordingClipboard::default();

        assert_eq!(drafts.result(), &DraftResult::Empty);
        assert_eq!(drafts.copy_result_to_clipboard(&mut clipboard), Ok(false));

        drafts.submit();
        assert_eq!(drafts.result(), &DraftResult::Pending);
        assert_eq!(drafts.copy_result_to_clipboard(&mut clipboard), Ok(false));
        assert!(clipboard.writes.is_empty());

        settle(&mut drafts);
        assert_eq!(drafts.copy_result_to_clipboard(&mut clipboard), Ok(true));
        assert_eq!(clipboard.writes, vec!["draft".to_string()]);
    }

    #[test]
    fn test_copy_writes_nothing_after_failure() {
        let mut drafts =
            DraftGenerator::new(StubGenerator::replying(Err(DraftError::MissingApiKey)));
        drafts.submit();
        settle(&mut drafts);

        let mut clipboard = RecordingClipboard::default();
        assert_eq!(drafts.copy_result_to_clipboard(&mut clipboard), Ok(false));
        assert!(clipboard.writes.is_empty());
    }

    #[test]
    fn test_resubmit_clears_previous_result() {
        let stub = StubGenerator::slow(Ok("again".into()), Duration::from_millis(150));
        let mut drafts = DraftGenerator::new(stub);
        drafts.submit();
        settle(&mut drafts);
        assert_eq!(drafts.result().text(), Some("again"));

        drafts.submit();
        assert_eq!(drafts.result(), &DraftResult::Pending);
        assert_eq!(drafts.result().text(), None);
        settle(&mut drafts);
    }

    /// Panics on the first call, succeeds afterwards
    struct FlakyGenerator {
        calls: Mutex<u32>,
    }

    #[async_trait]
    impl TextGenerator for FlakyGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, DraftError> {
            let call = {
                let mut calls = self.calls.lock().unwrap();
                *calls += 1;
                *calls
            };
            if call == 1 {
                panic!("first call fails hard");
            }
            Ok("recovered".into())
        }
    }

    #[test]
    fn test_generator_panic_fails_and_allows_resubmit() {
        let mut drafts = DraftGenerator::new(Arc::new(FlakyGenerator {
            calls: Mutex::new(0),
        }));
        drafts.submit();
        settle(&mut drafts);

        let err = drafts.result().error().expect("expected a failure");
        assert_eq!(err.kind(), DraftErrorKind::Transport);

        drafts.submit();
        settle(&mut drafts);
        assert_eq!(drafts.result().text(), Some("recovered"));
    }

    #[test]
    fn test_only_latest_submission_is_accepted() {
        let stub = StubGenerator::slow(Ok("same".into()), Duration::from_millis(50));
        let mut drafts = DraftGenerator::new(stub.clone());
        let first = drafts.submit();
        let second = drafts.submit();
        assert_eq!(second, first + 1);

        settle(&mut drafts);
        assert_eq!(drafts.result().text(), Some("same"));

        // The other completion arrives later and changes nothing
        std::thread::sleep(Duration::from_millis(200));
        assert!(!drafts.poll());
        assert_eq!(stub.prompts().len(), 2);
    }
}
