pub mod mocks;

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::theme::{MemoryStore, MemorySurface, ThemePreferenceManager, STORAGE_KEY};

pub type TestManager = ThemePreferenceManager<MemoryStore, MemorySurface>;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Test logger: prints through `env_logger` and keeps every record emitted
/// on the current test thread.
struct CapturingLogger {
    inner: env_logger::Logger,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
        self.inner.log(record);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

static INIT: Once = Once::new();

/// Installs the test logger once and clears this thread's captured records.
pub fn setup() {
    INIT.call_once(|| {
        let inner = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("debug"),
        )
        .is_test(true)
        .build();
        let logger: &'static CapturingLogger = Box::leak(Box::new(CapturingLogger { inner }));
        if log::set_logger(logger).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Messages logged at `level` on this thread since the last [`setup`].
pub fn logged(level: Level) -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    })
}

pub fn empty_manager() -> TestManager {
    setup();
    ThemePreferenceManager::new(MemoryStore::new(), MemorySurface::default())
}

pub fn manager_with(stored: &str) -> TestManager {
    setup();
    ThemePreferenceManager::new(
        MemoryStore::with_item(STORAGE_KEY, stored),
        MemorySurface::default(),
    )
}

/// Root attribute and content classes, for before/after comparisons.
pub fn snapshot(manager: &TestManager) -> (Option<String>, Vec<String>) {
    (
        manager.surface().root_attribute(crate::theme::THEME_ATTRIBUTE),
        manager.surface().content_classes(),
    )
}
