//! Watch Use Case implementation

use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::event::{MetadataKind, ModifyKind};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::event::BuildEvent;
use crate::application::pipeline::BundlePipeline;
use crate::domain::ports::{FileSystem, Formatter};
use crate::error::BundleResult;

use super::scheduler::{WatchScheduler, DEBOUNCE_MS};

/// Startup cooldown: notify sometimes replays events for existing files
/// right after a watch is registered
const STARTUP_COOLDOWN_MS: u64 = 500;

const POLL_INTERVAL_MS: u64 = 50;

/// Watch Use Case
///
/// Builds once, then rebuilds from scratch whenever something under the
/// source root is created, modified or removed. Build failures are reported
/// as events and the watcher keeps running.
pub struct WatchUseCase<F: FileSystem, T: Formatter> {
    pipeline: BundlePipeline<F, T>,
    debounce: Duration,
    cooldown: Duration,
}

impl<F: FileSystem, T: Formatter> WatchUseCase<F, T> {
    pub fn new(pipeline: BundlePipeline<F, T>) -> Self {
        Self {
            pipeline,
            debounce: Duration::from_millis(DEBOUNCE_MS),
            cooldown: Duration::from_millis(STARTUP_COOLDOWN_MS),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Start watching (blocking)
    ///
    /// Returns when `running` is cleared. Only watcher setup errors are
    /// returned; build errors go to `on_event`.
    pub fn start<E>(&self, running: Arc<AtomicBool>, on_event: E) -> BundleResult<()>
    where
        E: Fn(BuildEvent),
    {
        let config = self.pipeline.config();
        on_event(BuildEvent::WatchStarted {
            source: config.source_root.display().to_string(),
            destination: config.destination.display().to_string(),
        });

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    if is_change(&event.kind) {
                        for path in event.paths {
                            let _ = tx.send(path);
                        }
                    }
                }
            },
            Config::default(),
        )?;
        watcher.watch(&config.source_root, RecursiveMode::Recursive)?;

        // The initial build runs after the cooldown, so anything dropped
        // here is already reflected by it.
        let cooldown_end = Instant::now() + self.cooldown;
        while Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(Duration::from_millis(POLL_INTERVAL_MS));
        }

        let filter = ChangeFilter::new(&config.source_root, &config.destination);
        let mut scheduler = WatchScheduler::with_debounce(self.debounce);
        scheduler.trigger();

        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(POLL_INTERVAL_MS)) {
                if filter.is_relevant(&path) {
                    scheduler.note_change(path);
                }
            }

            if scheduler.should_run() {
                self.run_scheduled(&mut scheduler, &rx, &filter, &on_event);
            }
        }

        on_event(BuildEvent::Shutdown);
        Ok(())
    }

    fn run_scheduled(
        &self,
        scheduler: &mut WatchScheduler,
        rx: &Receiver<PathBuf>,
        filter: &ChangeFilter,
        on_event: &impl Fn(BuildEvent),
    ) {
        let changes = match scheduler.begin() {
            Ok(changes) => changes,
            Err(e) => {
                on_event(BuildEvent::Error {
                    message: e.to_string(),
                });
                return;
            }
        };

        for path in &changes {
            on_event(BuildEvent::FileChanged {
                path: path.display().to_string(),
            });
        }

        // Errors were already reported as events
        let _ = self.pipeline.execute(on_event);

        // Changes that arrived during the build are still queued in the channel
        while let Ok(path) = rx.try_recv() {
            if filter.is_relevant(&path) {
                scheduler.note_change(path);
            }
        }

        if scheduler.finish() {
            on_event(BuildEvent::RerunQueued);
        }
    }
}

/// Create, modify and remove events count as changes. Permission changes
/// can make a fragment unreadable, so metadata changes other than access
/// time count too.
pub(crate) fn is_change(kind: &EventKind) -> bool {
    match kind {
        EventKind::Create(_) | EventKind::Remove(_) => true,
        EventKind::Modify(ModifyKind::Metadata(MetadataKind::AccessTime)) => false,
        EventKind::Modify(_) => true,
        _ => false,
    }
}

/// Decides which changed paths should trigger a rebuild
#[derive(Debug, Clone)]
pub(crate) struct ChangeFilter {
    roots: Vec<PathBuf>,
    destinations: Vec<PathBuf>,
}

impl ChangeFilter {
    pub(crate) fn new(source_root: &Path, destination: &Path) -> Self {
        let mut roots = vec![source_root.to_path_buf()];
        roots.extend(source_root.canonicalize().ok());

        let mut destinations = vec![destination.to_path_buf()];
        if let (Some(parent), Some(name)) = (destination.parent(), destination.file_name()) {
            if let Ok(parent) = parent.canonicalize() {
                destinations.push(parent.join(name));
            }
        }

        Self {
            roots,
            destinations,
        }
    }

    /// Anything under the tree except the destination and hidden entries
    pub(crate) fn is_relevant(&self, path: &Path) -> bool {
        if self.destinations.iter().any(|d| d == path) {
            return false;
        }

        match self
            .roots
            .iter()
            .find_map(|root| path.strip_prefix(root).ok())
        {
            Some(relative) => !relative.components().any(|c| match c {
                Component::Normal(name) => is_hidden(name),
                _ => false,
            }),
            None => !path.file_name().map(is_hidden).unwrap_or(false),
        }
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
