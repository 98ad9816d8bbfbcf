use std::sync::Mutex;

use availability_calendar::config::{ENV_MIN_DURATION, ENV_PRUNE_EMPTY, ENV_UTC_OFFSET};

/// Tests touching process-wide `CALENDAR_*` variables run one at a time.
static CALENDAR_ENV_LOCK: Mutex<()> = Mutex::new(());

const CALENDAR_VARS: [&str; 3] = [ENV_MIN_DURATION, ENV_PRUNE_EMPTY, ENV_UTC_OFFSET];

/// Runs `f` with every `CALENDAR_*` variable unset except those in `vars`.
///
/// Previous values are restored afterwards, including on panic.
pub fn with_calendar_env<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = CALENDAR_ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = RestoreEnv::capture();

    for key in CALENDAR_VARS {
        std::env::remove_var(key);
    }
    for (key, value) in vars {
        std::env::set_var(key, value);
    }
    f()
}

struct RestoreEnv(Vec<(&'static str, Option<String>)>);

impl RestoreEnv {
    fn capture() -> Self {
        Self(
            CALENDAR_VARS
                .iter()
                .map(|key| (*key, std::env::var(key).ok()))
                .collect(),
        )
    }
}

impl Drop for RestoreEnv {
    fn drop(&mut self) {
        for (key, value) in self.0.drain(..) {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}
