//! Copy-to-clipboard interaction: one boolean flag, one action, one
//! supersedable reset timer.
//!
//! The clipboard itself is abstracted behind [`ClipboardWriter`] so the state
//! transitions can be exercised without a browser. Failures are logged and
//! swallowed: the button label simply never flips, which is the intended UX.

use anyhow::Result;

/// How long the "Prompt copied!" acknowledgment stays visible.
pub const COPY_FEEDBACK_MS: u32 = 3200;

pub const LABEL_IDLE: &str = "Copy prompt";
pub const LABEL_COPIED: &str = "Prompt copied!";

/// Asynchronous, fallible plain-text clipboard write.
#[allow(async_fn_in_trait)] // single-threaded event loop, no Send bound wanted
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// The one piece of mutable UI state: whether a copy was just acknowledged,
/// and when that acknowledgment expires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyState {
    copied: bool,
    reset_due_ms: Option<u64>,
}

impl CopyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Button label, derived from the flag and never stored separately.
    pub fn label(&self) -> &'static str {
        if self.copied { LABEL_COPIED } else { LABEL_IDLE }
    }

    /// Record a successful clipboard write at `now_ms` and (re)arm the
    /// revert deadline. A second copy while already copied moves the
    /// deadline: the latest write governs.
    pub fn mark_copied(&mut self, now_ms: u64) {
        self.copied = true;
        self.reset_due_ms = Some(now_ms + u64::from(COPY_FEEDBACK_MS));
    }

    /// Record a failed clipboard write. The flag stays down and any pending
    /// revert is dropped.
    pub fn mark_failed(&mut self) {
        self.copied = false;
        self.reset_due_ms = None;
    }

    /// Revert the flag once the deadline has passed. A timer that fires
    /// early, or one superseded by a later copy, is a no-op.
    pub fn advance(&mut self, now_ms: u64) {
        if let Some(due) = self.reset_due_ms
            && now_ms >= due
        {
            self.copied = false;
            self.reset_due_ms = None;
        }
    }
}

/// The copy action: write `text` to the clipboard and apply the outcome to
/// `state`. Returns whether the write succeeded so the caller can arm the
/// revert timer. Failures never escape; they go to the log and the flag
/// stays down.
pub async fn copy_text<C: ClipboardWriter>(
    clipboard: &C,
    text: &str,
    state: &mut CopyState,
    now_ms: u64,
) -> bool {
    match clipboard.write_text(text).await {
        Ok(()) => {
            state.mark_copied(now_ms);
            true
        }
        Err(err) => {
            log::warn!("unable to copy prompt: {err:#}");
            state.mark_failed();
            false
        }
    }
}

/// `navigator.clipboard` as the [`ClipboardWriter`] capability.
#[cfg(feature = "hydrate")]
pub struct NavigatorClipboard;

#[cfg(feature = "hydrate")]
impl ClipboardWriter for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        use anyhow::{anyhow, bail};

        let Some(window) = web_sys::window() else {
            bail!("no window");
        };
        // Absent outside secure contexts; treat as a normal write failure
        let clipboard = window.navigator().clipboard();
        if clipboard.is_undefined() {
            bail!("clipboard API unavailable");
        }
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map_err(|err| anyhow!("clipboard write rejected: {err:?}"))?;
        Ok(())
    }
}

/// Wall-clock milliseconds for deadline bookkeeping (client only).
#[cfg(feature = "hydrate")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use futures::executor::block_on;
    use std::sync::Mutex;

    struct AlwaysOk;
    impl ClipboardWriter for AlwaysOk {
        async fn write_text(&self, _text: &str) -> Result<()> {
            Ok(())
        }
    }

    struct Denied;
    impl ClipboardWriter for Denied {
        async fn write_text(&self, _text: &str) -> Result<()> {
            Err(anyhow!("write denied"))
        }
    }

    /// Models a platform with no clipboard capability at all.
    struct NoClipboard;
    impl ClipboardWriter for NoClipboard {
        async fn write_text(&self, _text: &str) -> Result<()> {
            Err(anyhow!("clipboard API unavailable"))
        }
    }

    static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct CapturingLogger;
    impl log::Log for CapturingLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }
        fn log(&self, record: &log::Record) {
            CAPTURED.lock().unwrap().push(record.args().to_string());
        }
        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger;

    fn install_logger() {
        // Global, so ignore the error when a second test installs it
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Warn);
    }

    #[test]
    fn label_follows_flag() {
        let mut state = CopyState::new();
        assert!(!state.is_copied());
        assert_eq!(state.label(), LABEL_IDLE);

        state.mark_copied(1_000);
        assert!(state.is_copied());
        assert_eq!(state.label(), LABEL_COPIED);

        state.advance(1_000 + 3200);
        assert_eq!(state.label(), LABEL_IDLE);
    }

    #[test]
    fn successful_copy_sets_flag() {
        let mut state = CopyState::new();
        let ok = block_on(copy_text(&AlwaysOk, "payload", &mut state, 0));
        assert!(ok);
        assert!(state.is_copied());
        assert_eq!(state.label(), LABEL_COPIED);
    }

    #[test]
    fn reverts_at_exactly_3200_ms() {
        let mut state = CopyState::new();
        assert!(block_on(copy_text(&AlwaysOk, "payload", &mut state, 10_000)));

        state.advance(10_000 + 3199);
        assert!(state.is_copied(), "must not revert one ms early");

        state.advance(10_000 + 3200);
        assert!(!state.is_copied());
        assert_eq!(state.label(), LABEL_IDLE);
    }

    #[test]
    fn second_copy_rearms_the_deadline() {
        let mut state = CopyState::new();
        assert!(block_on(copy_text(&AlwaysOk, "payload", &mut state, 0)));

        // 2000 ms later, copy again
        assert!(block_on(copy_text(&AlwaysOk, "payload", &mut state, 2_000)));

        // 4000 ms after the first copy the original deadline has passed,
        // but the second copy re-armed it
        state.advance(4_000);
        assert!(state.is_copied());

        // 3200 ms after the second copy it reverts
        state.advance(2_000 + 3200);
        assert!(!state.is_copied());
    }

    #[test]
    fn stale_timer_fire_is_a_no_op() {
        let mut state = CopyState::new();
        state.mark_copied(0);
        state.mark_copied(2_000);

        // The first timer would have fired at 3200; the deadline moved
        state.advance(3_200);
        assert!(state.is_copied());
    }

    #[test]
    fn denied_write_stays_idle_and_logs_once() {
        install_logger();

        let mut state = CopyState::new();
        let ok = block_on(copy_text(&Denied, "payload", &mut state, 0));
        assert!(!ok);
        assert!(!state.is_copied());
        assert_eq!(state.label(), LABEL_IDLE);

        let records = CAPTURED.lock().unwrap();
        let denials = records.iter().filter(|m| m.contains("write denied")).count();
        assert_eq!(denials, 1, "exactly one diagnostic record");
    }

    #[test]
    fn missing_clipboard_resolves_to_failure_path() {
        install_logger();

        let mut state = CopyState::new();
        let ok = block_on(copy_text(&NoClipboard, "payload", &mut state, 0));
        assert!(!ok);
        assert!(!state.is_copied());
        assert_eq!(state.label(), LABEL_IDLE);
    }

    #[test]
    fn failure_after_success_clears_the_flag() {
        let mut state = CopyState::new();
        assert!(block_on(copy_text(&AlwaysOk, "payload", &mut state, 0)));
        assert!(!block_on(copy_text(&NoClipboard, "payload", &mut state, 1_000)));
        assert!(!state.is_copied());

        // The superseded revert must not resurrect anything
        state.advance(3_200);
        assert!(!state.is_copied());
    }
}
