//! Developer hot reload: `Uninitialized → Polling → Ready`.
//!
//! [`LiveCoding`] drives a [`CodeWatcher`]; [`NoHotReload`] stands in for it
//! wherever the feature is unavailable. Both sit behind [`HotReload`], so
//! callers never need to know which one they hold.

use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;
use std::time::SystemTime;

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

/// Interval between watcher polls while waiting for it to initialize.
pub const INIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadState {
    Uninitialized,
    Polling,
    Ready,
}

pub trait HotReload {
    /// Brings the controller to `Ready`. May block until the watcher has
    /// initialized; later calls do nothing.
    fn init(&mut self);

    /// Lets the watcher apply pending work. Called once per frame; does
    /// nothing before `Ready`.
    fn update(&mut self);

    /// Requests an immediate reload. Failures are logged, never returned.
    fn trigger_reload(&mut self);

    fn state(&self) -> ReloadState;
}

/// The controller used when hot reload is not available.
#[derive(Debug, Default)]
pub struct NoHotReload;

impl HotReload for NoHotReload {
    fn init(&mut self) {}

    fn update(&mut self) {}

    fn trigger_reload(&mut self) {
        debug!("hot reload is not available in this build");
    }

    fn state(&self) -> ReloadState {
        ReloadState::Uninitialized
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatcherMessage {
    pub severity: Severity,
    pub text: String,
}

impl WatcherMessage {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }
}

/// Something that notices code changes and applies them to the running process.
pub trait CodeWatcher {
    fn is_initialized(&self) -> bool;

    fn update(&mut self);

    fn try_reload(&mut self);

    /// Messages produced since the last call.
    fn drain_messages(&mut self) -> Vec<WatcherMessage>;
}

type WatcherFactory<W> = Box<dyn FnOnce() -> W>;
type StateObserver = Box<dyn FnMut(ReloadState)>;

/// Hot reload driven by a [`CodeWatcher`], built lazily by [`HotReload::init`].
pub struct LiveCoding<W: CodeWatcher> {
    factory: Option<WatcherFactory<W>>,
    watcher: Option<W>,
    state: ReloadState,
    poll_interval: Duration,
    observers: Vec<StateObserver>,
}

impl<W: CodeWatcher> LiveCoding<W> {
    pub fn new(factory: impl FnOnce() -> W + 'static) -> Self {
        Self {
            factory: Some(Box::new(factory)),
            watcher: None,
            state: ReloadState::Uninitialized,
            poll_interval: INIT_POLL_INTERVAL,
            observers: Vec::new(),
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Calls `observer` on every state transition.
    pub fn on_state_change(mut self, observer: impl FnMut(ReloadState) + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn watcher(&self) -> Option<&W> {
        self.watcher.as_ref()
    }

    fn set_state(&mut self, state: ReloadState) {
        self.state = state;
        for observer in self.observers.iter_mut() {
            observer(state);
        }
    }

    fn forward_messages(watcher: &mut W) {
        for message in watcher.drain_messages() {
            match message.severity {
                Severity::Debug => debug!("[live] {}", message.text),
                Severity::Info => info!("[live] {}", message.text),
                Severity::Warning => warn!("[live] {}", message.text),
                Severity::Error => error!("[live] {}", message.text),
            }
        }
    }
}

impl<W: CodeWatcher> HotReload for LiveCoding<W> {
    fn init(&mut self) {
        let Some(factory) = self.factory.take() else {
            return;
        };

        self.set_state(ReloadState::Polling);
        let mut watcher = factory();
        while !watcher.is_initialized() {
            std::thread::sleep(self.poll_interval);
            watcher.update();
            Self::forward_messages(&mut watcher);
        }
        watcher.update();
        Self::forward_messages(&mut watcher);

        self.watcher = Some(watcher);
        self.set_state(ReloadState::Ready);
        info!("live coding ready");
    }

    fn update(&mut self) {
        if self.state != ReloadState::Ready {
            return;
        }
        if let Some(watcher) = self.watcher.as_mut() {
            watcher.update();
            Self::forward_messages(watcher);
        }
    }

    fn trigger_reload(&mut self) {
        info!("reloading code");
        match self.watcher.as_mut() {
            Some(watcher) if self.state == ReloadState::Ready => {
                watcher.try_reload();
                Self::forward_messages(watcher);
            }
            _ => warn!("live coding is not initialized, reload ignored"),
        }
    }

    fn state(&self) -> ReloadState {
        self.state
    }
}

/// Applies one patch file to the running process.
pub type PatchHandler = Box<dyn FnMut(&Path) -> Result<(), String>>;

/// Watches a directory for patch files.
///
/// The initial scan runs on a background thread; the watcher reports
/// initialized once it has finished. Files that appear or change after
/// that are queued and handed to every registered handler on reload.
pub struct PatchDirWatcher {
    dir: PathBuf,
    baseline: Arc<Mutex<Option<HashMap<PathBuf, SystemTime>>>>,
    seen: Option<HashMap<PathBuf, SystemTime>>,
    pending: Vec<PathBuf>,
    handlers: Vec<PatchHandler>,
    messages: Vec<WatcherMessage>,
}

impl PatchDirWatcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let baseline = Arc::new(Mutex::new(None));

        let scan_dir = dir.clone();
        let scan_result = baseline.clone();
        let spawned = std::thread::Builder::new()
            .name("live-coding-scan".to_string())
            .spawn(move || {
                let stamps = scan(&scan_dir);
                *scan_result.lock().unwrap_or_else(|e| e.into_inner()) = Some(stamps);
            });

        let mut messages = Vec::new();
        if let Err(e) = spawned {
            // scan inline rather than never initializing
            messages.push(WatcherMessage::new(
                Severity::Warning,
                format!("background scan unavailable ({}), scanning inline", e),
            ));
            *baseline.lock().unwrap_or_else(|e| e.into_inner()) = Some(scan(&dir));
        }

        Self {
            dir,
            baseline,
            seen: None,
            pending: Vec::new(),
            handlers: Vec::new(),
            messages,
        }
    }

    pub fn with_handler(mut self, handler: impl FnMut(&Path) -> Result<(), String> + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn pending(&self) -> &[PathBuf] {
        &self.pending
    }

    fn take_baseline(&mut self) {
        if self.seen.is_none() {
            let mut baseline = self.baseline.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(stamps) = baseline.take() {
                self.messages.push(WatcherMessage::new(
                    Severity::Info,
                    format!("watching {} ({} file(s))", self.dir.display(), stamps.len()),
                ));
                self.seen = Some(stamps);
            }
        }
    }
}

impl CodeWatcher for PatchDirWatcher {
    fn is_initialized(&self) -> bool {
        self.seen.is_some() || self.baseline.lock().map(|b| b.is_some()).unwrap_or(true)
    }

    fn update(&mut self) {
        self.take_baseline();
        let Some(seen) = self.seen.as_mut() else {
            return;
        };

        let mut changed: Vec<PathBuf> = scan(&self.dir)
            .into_iter()
            .filter_map(|(path, stamp)| match seen.insert(path.clone(), stamp) {
                Some(previous) if previous == stamp => None,
                _ => Some(path),
            })
            .collect();
        changed.sort();

        for path in changed {
            if !self.pending.contains(&path) {
                self.messages.push(WatcherMessage::new(
                    Severity::Debug,
                    format!("patch detected: {}", path.display()),
                ));
                self.pending.push(path);
            }
        }
    }

    fn try_reload(&mut self) {
        self.update();
        if self.pending.is_empty() {
            self.messages
                .push(WatcherMessage::new(Severity::Info, "no pending patches"));
            return;
        }
        if self.handlers.is_empty() {
            self.messages.push(WatcherMessage::new(
                Severity::Warning,
                format!("{} patch(es) pending but no handler registered", self.pending.len()),
            ));
            return;
        }

        for path in std::mem::take(&mut self.pending) {
            for handler in self.handlers.iter_mut() {
                let message = match handler(&path) {
                    Ok(()) => WatcherMessage::new(
                        Severity::Info,
                        format!("applied {}", path.display()),
                    ),
                    Err(e) => WatcherMessage::new(
                        Severity::Error,
                        format!("failed to apply {}: {}", path.display(), e),
                    ),
                };
                self.messages.push(message);
            }
        }
    }

    fn drain_messages(&mut self) -> Vec<WatcherMessage> {
        std::mem::take(&mut self.messages)
    }
}

/// Modification times of the regular files directly inside `dir`.
/// An unreadable directory counts as empty.
fn scan(dir: &Path) -> HashMap<PathBuf, SystemTime> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return HashMap::new();
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let metadata = entry.metadata().ok()?;
            if !metadata.is_file() {
                return None;
            }
            Some((entry.path(), metadata.modified().ok()?))
        })
        .collect()
}

/// The hot reload controller for this build: live coding on unix builds
/// with the `live-coding` feature and a watch directory, otherwise the
/// no-op controller.
pub fn for_platform(watch_dir: Option<&Path>) -> Box<dyn HotReload> {
    #[cfg(all(unix, feature = "live-coding"))]
    {
        if let Some(dir) = watch_dir {
            let dir = dir.to_path_buf();
            return Box::new(LiveCoding::new(move || PatchDirWatcher::new(dir)));
        }
    }

    #[cfg(not(all(unix, feature = "live-coding")))]
    let _ = watch_dir;

    Box::new(NoHotReload)
}
