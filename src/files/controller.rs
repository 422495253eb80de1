//! Menu-triggered model file operations
//!
//! [`FileDialogController`] sits between the File menu and the native
//! choosers. Open and Save As are fire-and-forget: each request runs its
//! dialog on a worker thread and the outcome is picked up by [`poll`] on the
//! UI thread, which writes the user-visible log line. Save and Close are not
//! implemented and only raise a notice.
//!
//! [`poll`]: FileDialogController::poll

use crate::error::{Error, Result};
use crate::files::dialogs::{DialogBackend, DialogKind, DialogRequest, DialogResult, Notifier};
use crate::i18n::Translator;
use crate::logging::{emit, SharedLogger};
use log::Level;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

const LOG_TARGET: &str = module_path!();

/// Title of the notice shown for stubbed operations.
pub const UNIMPLEMENTED_TITLE: &str = "Not yet implemented";

/// Storage backend the shell edits models through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderType {
    #[default]
    Local,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Local => "local",
        }
    }
}

/// A finished dialog whose outcome the shell may want to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Opened(PathBuf),
    Saved(PathBuf),
    Canceled(DialogKind),
    Failed(DialogKind),
}

struct PendingDialog {
    kind: DialogKind,
    receiver: Receiver<Result<DialogResult>>,
}

/// Runs open/save choosers and reports what happened.
pub struct FileDialogController {
    backend: Arc<dyn DialogBackend>,
    notifier: Box<dyn Notifier>,
    logger: SharedLogger,
    translator: Arc<Translator>,
    provider: ProviderType,
    pending: Vec<PendingDialog>,
    repaint: Option<egui::Context>,
}

impl FileDialogController {
    pub fn new(
        backend: Arc<dyn DialogBackend>,
        notifier: Box<dyn Notifier>,
        logger: SharedLogger,
        translator: Arc<Translator>,
    ) -> Self {
        Self {
            backend,
            notifier,
            logger,
            translator,
            provider: ProviderType::default(),
            pending: Vec::new(),
            repaint: None,
        }
    }

    /// Wake the UI whenever a dialog finishes.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    /// Swap the translator after a language change.
    pub fn set_translator(&mut self, translator: Arc<Translator>) {
        self.translator = translator;
    }

    pub fn provider(&self) -> ProviderType {
        self.provider
    }

    /// Number of dialogs still waiting on the user.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Menu operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Show the open chooser for a threat model.
    pub fn request_open(&mut self) {
        self.log(
            Level::Debug,
            format_args!(
                "Open File redirected to /{}/threatmodel/import",
                self.provider.as_str()
            ),
        );
        let request = DialogRequest::open(self.translator.tc("desktop.file.open"));
        self.spawn(request);
    }

    /// Show the save chooser for a threat model.
    pub fn request_save_as(&mut self) {
        let request = DialogRequest::save(self.translator.tc("desktop.file.saveAs"));
        self.spawn(request);
    }

    /// Save the current model in place.
    ///
    /// Always shows the not-implemented notice, even when the model already
    /// has a file path.
    pub fn request_save(&self) {
        self.notify_unimplemented("Save");
    }

    /// Close the current model and return to the dashboard.
    pub fn request_close(&self) {
        self.log(
            Level::Debug,
            format_args!(
                "Close {} model file, redirect to /dashboard/",
                self.provider.as_str()
            ),
        );
        self.notify_unimplemented("Close");
    }

    /// Log a model picked from the recent documents list as opened.
    pub fn report_opened(&self, path: &Path) {
        self.log(
            Level::Info,
            format_args!("{}: {}", self.translator.tc("threatmodel.opened"), path.display()),
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Completion handling
    // ─────────────────────────────────────────────────────────────────────────

    /// Handle every dialog that has finished since the last call.
    ///
    /// Dialogs that finished together are handled in the order they were
    /// requested. Unfinished ones stay pending.
    pub fn poll(&mut self) -> Vec<DialogOutcome> {
        let mut finished = Vec::new();
        self.pending.retain(|pending| match pending.receiver.try_recv() {
            Ok(result) => {
                finished.push((pending.kind, result));
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => {
                finished.push((
                    pending.kind,
                    Err(Error::dialog("dialog worker exited without a result")),
                ));
                false
            }
        });

        finished
            .into_iter()
            .map(|(kind, result)| self.complete(kind, result))
            .collect()
    }

    fn complete(&self, kind: DialogKind, result: Result<DialogResult>) -> DialogOutcome {
        let (success_key, error_key) = match kind {
            DialogKind::Open => ("threatmodel.opened", "threatmodel.errors.open"),
            DialogKind::Save => ("threatmodel.saved", "threatmodel.errors.save"),
        };

        match result {
            Ok(result) => match result.chosen_path() {
                Some(path) => {
                    self.log(
                        Level::Info,
                        format_args!("{}: {}", self.translator.tc(success_key), path.display()),
                    );
                    match kind {
                        DialogKind::Open => DialogOutcome::Opened(path.clone()),
                        DialogKind::Save => DialogOutcome::Saved(path.clone()),
                    }
                }
                None => {
                    self.log(Level::Debug, format_args!("{:?} dialog canceled", kind));
                    DialogOutcome::Canceled(kind)
                }
            },
            Err(e) => {
                self.log(
                    Level::Warn,
                    format_args!("{}: {}", self.translator.tc(error_key), e),
                );
                DialogOutcome::Failed(kind)
            }
        }
    }

    fn spawn(&mut self, request: DialogRequest) {
        let (tx, rx) = mpsc::channel();
        let kind = request.kind;
        let backend = Arc::clone(&self.backend);
        let repaint = self.repaint.clone();

        let spawned = thread::Builder::new()
            .name(format!("{:?}-dialog", kind).to_lowercase())
            .spawn(move || {
                let _ = tx.send(backend.show(&request));
                if let Some(ctx) = repaint {
                    ctx.request_repaint();
                }
            });

        match spawned {
            Ok(_) => self.pending.push(PendingDialog { kind, receiver: rx }),
            Err(e) => {
                self.complete(kind, Err(Error::dialog(e.to_string())));
            }
        }
    }

    fn notify_unimplemented(&self, feature: &'static str) {
        let err = Error::Unimplemented {
            feature,
            provider: self.provider.as_str(),
        };
        self.notifier.error_box(UNIMPLEMENTED_TITLE, &err.to_string());
    }

    fn log(&self, level: Level, args: std::fmt::Arguments<'_>) {
        emit(self.logger.as_ref(), LOG_TARGET, level, args);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::testing::CaptureLogger;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    /// Answers requests from a queue and records what it was asked.
    #[derive(Default)]
    struct ScriptedBackend {
        answers: Mutex<VecDeque<Result<DialogResult>>>,
        requests: Mutex<Vec<DialogRequest>>,
    }

    impl ScriptedBackend {
        fn with(answers: Vec<Result<DialogResult>>) -> Arc<Self> {
            Arc::new(Self {
                answers: Mutex::new(answers.into()),
                requests: Mutex::default(),
            })
        }

        fn requests(&self) -> Vec<DialogRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl DialogBackend for ScriptedBackend {
        fn show(&self, request: &DialogRequest) -> Result<DialogResult> {
            self.requests.lock().unwrap().push(request.clone());
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(DialogResult::canceled()))
        }
    }

    /// Holds each answer until the test releases it, so several dialogs
    /// can be open at once.
    #[derive(Default)]
    struct GatedBackend {
        gates: Mutex<Vec<mpsc::Sender<Result<DialogResult>>>>,
    }

    impl GatedBackend {
        fn wait_for_shown(&self, count: usize) {
            let deadline = Instant::now() + Duration::from_secs(5);
            while self.gates.lock().unwrap().len() < count {
                assert!(Instant::now() < deadline, "dialog never shown");
                thread::sleep(Duration::from_millis(1));
            }
        }

        fn release(&self, index: usize, answer: Result<DialogResult>) {
            self.gates.lock().unwrap()[index].send(answer).unwrap();
        }
    }

    impl DialogBackend for GatedBackend {
        fn show(&self, _request: &DialogRequest) -> Result<DialogResult> {
            let (tx, rx) = mpsc::channel();
            self.gates.lock().unwrap().push(tx);
            rx.recv().unwrap_or_else(|_| Err(Error::dialog("gate dropped")))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        shown: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl Notifier for RecordingNotifier {
        fn error_box(&self, title: &str, message: &str) {
            self.shown
                .lock()
                .unwrap()
                .push((title.to_string(), message.to_string()));
        }
    }

    struct Harness {
        controller: FileDialogController,
        backend: Arc<ScriptedBackend>,
        notifier: RecordingNotifier,
        logger: Arc<CaptureLogger>,
    }

    fn harness(answers: Vec<Result<DialogResult>>) -> Harness {
        let backend = ScriptedBackend::with(answers);
        let notifier = RecordingNotifier::default();
        let logger = Arc::new(CaptureLogger::default());
        let translator = Arc::new(Translator::new(crate::config::Language::En).unwrap());
        let controller = FileDialogController::new(
            backend.clone(),
            Box::new(notifier.clone()),
            logger.clone(),
            translator,
        );
        Harness {
            controller,
            backend,
            notifier,
            logger,
        }
    }

    /// Poll until nothing is pending, collecting every outcome.
    fn settle(controller: &mut FileDialogController) -> Vec<DialogOutcome> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut outcomes = Vec::new();
        while controller.pending_count() > 0 {
            assert!(Instant::now() < deadline, "dialogs never finished");
            outcomes.extend(controller.poll());
            thread::sleep(Duration::from_millis(1));
        }
        outcomes
    }

    #[test]
    fn test_open_logs_selected_path_once() {
        let mut h = harness(vec![Ok(DialogResult::selected("/tmp/model.json"))]);
        h.controller.request_open();
        let outcomes = settle(&mut h.controller);

        assert_eq!(
            outcomes,
            vec![DialogOutcome::Opened(PathBuf::from("/tmp/model.json"))]
        );
        let infos = h.logger.messages_at(Level::Info);
        assert_eq!(infos.len(), 1);
        assert!(infos[0].contains("/tmp/model.json"));
        assert!(infos[0].starts_with("Threat model successfully opened"));
    }

    #[test]
    fn test_open_canceled_logs_no_info() {
        let mut h = harness(vec![Ok(DialogResult::canceled())]);
        h.controller.request_open();
        let outcomes = settle(&mut h.controller);

        assert_eq!(outcomes, vec![DialogOutcome::Canceled(DialogKind::Open)]);
        assert!(h.logger.messages_at(Level::Info).is_empty());
        assert!(h.logger.messages_at(Level::Warn).is_empty());
    }

    #[test]
    fn test_save_as_failure_logs_one_warning() {
        let mut h = harness(vec![Err(Error::dialog("disk full"))]);
        h.controller.request_save_as();
        let outcomes = settle(&mut h.controller);

        assert_eq!(outcomes, vec![DialogOutcome::Failed(DialogKind::Save)]);
        let warnings = h.logger.messages_at(Level::Warn);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("disk full"));
        assert!(h.logger.messages_at(Level::Info).is_empty());
    }

    #[test]
    fn test_save_as_success_logs_saved_path() {
        let mut h = harness(vec![Ok(DialogResult::selected("/home/me/out.json"))]);
        h.controller.request_save_as();
        settle(&mut h.controller);

        let infos = h.logger.messages_at(Level::Info);
        assert_eq!(infos.len(), 1);
        assert!(infos[0].starts_with("Threat model successfully saved"));
        assert!(infos[0].contains("/home/me/out.json"));
    }

    #[test]
    fn test_requests_carry_threat_model_filters() {
        let mut h = harness(vec![]);
        h.controller.request_open();
        h.controller.request_save_as();
        settle(&mut h.controller);

        let requests = h.backend.requests();
        assert_eq!(requests.len(), 2);
        for request in &requests {
            assert!(request.filters.iter().any(|f| f.extensions == ["json"]));
            assert!(request.filters.iter().any(|f| f.extensions == ["*"]));
        }
        let titles: Vec<_> = requests.iter().map(|r| r.title.as_str()).collect();
        assert!(titles.contains(&"Open Model"));
        assert!(titles.contains(&"Save Model As"));
    }

    #[test]
    fn test_save_and_close_show_notice_without_dialog() {
        let h = harness(vec![]);
        h.controller.request_save();
        h.controller.request_close();

        assert!(h.backend.requests().is_empty());
        assert_eq!(h.controller.pending_count(), 0);
        let shown = h.notifier.shown.lock().unwrap().clone();
        assert_eq!(
            shown,
            vec![
                (
                    UNIMPLEMENTED_TITLE.to_string(),
                    "Save model file TBD for local".to_string()
                ),
                (
                    UNIMPLEMENTED_TITLE.to_string(),
                    "Close model file TBD for local".to_string()
                ),
            ]
        );
        assert!(h
            .logger
            .messages_at(Level::Debug)
            .iter()
            .any(|m| m == "Close local model file, redirect to /dashboard/"));
    }

    #[test]
    fn test_repeated_opens_log_in_call_order() {
        let mut h = harness(vec![
            Ok(DialogResult::selected("/tmp/first.json")),
            Ok(DialogResult::selected("/tmp/second.json")),
        ]);

        h.controller.request_open();
        settle(&mut h.controller);
        h.controller.request_open();
        settle(&mut h.controller);

        let infos = h.logger.messages_at(Level::Info);
        assert_eq!(infos.len(), 2);
        assert!(infos[0].contains("/tmp/first.json"));
        assert!(infos[1].contains("/tmp/second.json"));
    }

    #[test]
    fn test_overlapping_opens_each_log_once() {
        let backend = Arc::new(GatedBackend::default());
        let logger = Arc::new(CaptureLogger::default());
        let mut controller = FileDialogController::new(
            backend.clone(),
            Box::new(RecordingNotifier::default()),
            logger.clone(),
            Arc::new(Translator::new(crate::config::Language::En).unwrap()),
        );

        controller.request_open();
        backend.wait_for_shown(1);
        controller.request_open();
        backend.wait_for_shown(2);
        assert_eq!(controller.pending_count(), 2);
        assert!(controller.poll().is_empty());

        // Second dialog answers while the first is still open
        backend.release(1, Ok(DialogResult::selected("/tmp/second.json")));
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut outcomes = Vec::new();
        while outcomes.is_empty() {
            assert!(Instant::now() < deadline, "second dialog never finished");
            outcomes.extend(controller.poll());
            thread::sleep(Duration::from_millis(1));
        }
        assert_eq!(
            outcomes,
            vec![DialogOutcome::Opened(PathBuf::from("/tmp/second.json"))]
        );
        assert_eq!(controller.pending_count(), 1);

        backend.release(0, Ok(DialogResult::selected("/tmp/first.json")));
        assert_eq!(
            settle(&mut controller),
            vec![DialogOutcome::Opened(PathBuf::from("/tmp/first.json"))]
        );

        let infos = logger.messages_at(Level::Info);
        assert_eq!(infos.len(), 2);
        assert!(infos[0].contains("/tmp/second.json"));
        assert!(infos[1].contains("/tmp/first.json"));
    }

    #[test]
    fn test_completions_ready_together_follow_request_order() {
        let (tx_a, rx_a) = mpsc::channel();
        let (tx_b, rx_b) = mpsc::channel();
        let mut h = harness(vec![]);
        h.controller.pending.push(PendingDialog {
            kind: DialogKind::Open,
            receiver: rx_a,
        });
        h.controller.pending.push(PendingDialog {
            kind: DialogKind::Open,
            receiver: rx_b,
        });

        // Second dialog answers first
        tx_b.send(Ok(DialogResult::selected("/tmp/b.json"))).unwrap();
        tx_a.send(Ok(DialogResult::selected("/tmp/a.json"))).unwrap();

        let outcomes = h.controller.poll();
        assert_eq!(
            outcomes,
            vec![
                DialogOutcome::Opened(PathBuf::from("/tmp/a.json")),
                DialogOutcome::Opened(PathBuf::from("/tmp/b.json")),
            ]
        );
    }

    #[test]
    fn test_vanished_worker_is_logged_as_failure() {
        let (tx, rx) = mpsc::channel::<Result<DialogResult>>();
        let mut h = harness(vec![]);
        h.controller.pending.push(PendingDialog {
            kind: DialogKind::Open,
            receiver: rx,
        });
        drop(tx);

        assert_eq!(
            h.controller.poll(),
            vec![DialogOutcome::Failed(DialogKind::Open)]
        );
        assert_eq!(h.logger.messages_at(Level::Warn).len(), 1);
    }

    #[test]
    fn test_unfinished_dialog_stays_pending() {
        let (_tx, rx) = mpsc::channel::<Result<DialogResult>>();
        let mut h = harness(vec![]);
        h.controller.pending.push(PendingDialog {
            kind: DialogKind::Save,
            receiver: rx,
        });

        assert!(h.controller.poll().is_empty());
        assert_eq!(h.controller.pending_count(), 1);
    }

    #[test]
    fn test_report_opened_logs_info() {
        let h = harness(vec![]);
        h.controller.report_opened(Path::new("/tmp/recent.json"));
        let infos = h.logger.messages_at(Level::Info);
        assert_eq!(infos.len(), 1);
        assert!(infos[0].contains("/tmp/recent.json"));
    }

    #[test]
    fn test_provider_label() {
        let h = harness(vec![]);
        assert_eq!(h.controller.provider().as_str(), "local");
    }
}
