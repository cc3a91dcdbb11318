//! Identity-keyed lookup tables and strategy vectors for two-player
//! max-plus game automata.
//!
//! # Module Structure
//!
//! - `lookup` — Handle-keyed tables (owning, borrowing, integer, default-valued)
//! - `game` — Game graph abstraction and the reference automaton
//! - `strategy` — Strategy vectors and the plays they induce

mod game;
mod lookup;
mod strategy;

pub use game::*;
pub use lookup::*;
pub use strategy::*;

// ============================================================================
// LOOKUP SENTINELS
// Miss values returned by the integer tables. They differ between the two
// tables; use `exists` or `find` when the sentinel is a legal stored value.
// ============================================================================
/// Returned by [`IntLookup::get`] for absent handles.
pub const INT_LOOKUP_MISS: i32 = 0;
/// Returned by [`IntIntLookup::get`] for absent keys.
pub const INT_INT_LOOKUP_MISS: i32 = -1;

// ============================================================================
// STRATEGY INITIALIZATION
// ============================================================================
/// Environment variable holding a `u64` seed for random strategy initialization.
/// Unset or unparsable means a fresh thread-local RNG on every call.
pub const STRATEGY_SEED: &str = "STRATEGY_SEED";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize strategy logging: `verbosity` and coarser go to
/// `<dir>/strategy-<unix-time>.log`, INFO and coarser to the terminal.
/// Per-vertex overwrites and default materializations log at TRACE, so pass
/// `LevelFilter::Trace` to follow a strategy being edited.
#[cfg(feature = "logging")]
pub fn log<P>(dir: P, verbosity: log::LevelFilter) -> std::io::Result<()>
where
    P: AsRef<std::path::Path>,
{
    std::fs::create_dir_all(dir.as_ref())?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .add_filter_allow_str(module_path!())
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let path = dir.as_ref().join(format!("strategy-{}.log", time));
    let file = simplelog::WriteLogger::new(verbosity, config.clone(), std::fs::File::create(path)?);
    let term = simplelog::TermLogger::new(
        verbosity.min(log::LevelFilter::Info),
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e))
}

#[cfg(all(test, feature = "logging"))]
mod tests {
    use super::*;

    #[test]
    fn logs_into_given_directory_once() {
        let dir = std::env::temp_dir().join(format!("maxplus-logs-{}", std::process::id()));
        assert!(log(&dir, log::LevelFilter::Trace).is_ok());
        assert!(std::fs::read_dir(&dir).unwrap().count() >= 1);
        assert!(log(&dir, log::LevelFilter::Trace).is_err());
        std::fs::remove_dir_all(&dir).ok();
    }
}
