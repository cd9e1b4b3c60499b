use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::guarantee::PendingGuarantee;
use crate::history::Order;
use crate::outcome::Outcome;
use crate::tunables::Tunables;

const SESSION_VERSION: u32 = 1;

/// On-disk session: the chronological symbol string plus the pending
/// guarantee, if one was armed. Everything else is derived, so it is not
/// stored. There is no cross-version compatibility promise: a version
/// mismatch just means starting fresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionFile {
    version: u32,
    saved_at: i64,
    symbols: String,
    #[serde(default)]
    pending: Option<PendingGuarantee>,
}

/// Writes the session to `path`, creating parent directories as needed.
pub fn save(engine: &Engine, path: &Path) -> Result<()> {
    let symbols: String = engine
        .get_history(None, Order::Chronological)
        .iter()
        .map(|o| o.symbol())
        .collect();
    let file = SessionFile {
        version: SESSION_VERSION,
        saved_at: Utc::now().timestamp(),
        symbols,
        pending: engine.pending_guarantee().cloned(),
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating session dir {}", parent.display()))?;
    }
    let raw = serde_json::to_string_pretty(&file)?;
    fs::write(path, raw).with_context(|| format!("writing session {}", path.display()))?;
    Ok(())
}

/// Best-effort load: a missing file, unreadable JSON, a version mismatch
/// or a bad symbol all yield `None` rather than an error. The caller
/// starts an empty session in that case.
pub fn load(tunables: Tunables, path: &Path) -> Option<Engine> {
    let raw = fs::read_to_string(path).ok()?;
    let file = serde_json::from_str::<SessionFile>(&raw).ok()?;
    if file.version != SESSION_VERSION {
        return None;
    }
    let mut outcomes = Vec::with_capacity(file.symbols.len());
    for ch in file.symbols.chars() {
        outcomes.push(Outcome::from_symbol(ch.encode_utf8(&mut [0u8; 4])).ok()?);
    }
    let mut engine = Engine::from_outcomes(tunables, outcomes);
    engine.restore_pending(file.pending);
    Some(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_mismatch_loads_nothing() {
        let dir = std::env::temp_dir().join("studio_engine_persist_unit");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad_version.json");
        fs::write(
            &path,
            r#"{"version":99,"saved_at":0,"symbols":"HAD","pending":null}"#,
        )
        .unwrap();
        assert!(load(Tunables::default(), &path).is_none());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_symbols_load_nothing() {
        let dir = std::env::temp_dir().join("studio_engine_persist_unit");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad_symbols.json");
        fs::write(
            &path,
            r#"{"version":1,"saved_at":0,"symbols":"HXD","pending":null}"#,
        )
        .unwrap();
        assert!(load(Tunables::default(), &path).is_none());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_loads_nothing() {
        let path = std::env::temp_dir().join("studio_engine_persist_unit/absent.json");
        assert!(load(Tunables::default(), &path).is_none());
    }
}
