use crate::codec;
use crate::config::model::{STORAGE_KEY, StudioConfig};
use crate::config::patch::StudioPatch;
use crate::store::storage::Storage;

/// Where the initial state came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InitSource {
    /// A share token in the URL fragment.
    Fragment,
    /// The persisted snapshot.
    Storage,
    /// Nothing usable was found.
    Defaults,
}

/// Owner of the single [`StudioConfig`].
///
/// Reads go through [`StudioStore::current`]; every write goes through
/// [`StudioStore::patch`] (or the helpers built on it) and is persisted immediately, one
/// storage write per call.
#[derive(Debug)]
pub struct StudioStore<S: Storage> {
    config: StudioConfig,
    storage: S,
    key: String,
    origin: InitSource,
}

impl<S: Storage> StudioStore<S> {
    /// Initialize under [`STORAGE_KEY`]. See [`StudioStore::open_with_key`].
    pub fn open(storage: S, fragment: Option<&str>) -> Self {
        Self::open_with_key(storage, STORAGE_KEY, fragment)
    }

    /// Build the initial state: defaults, overlaid by the first usable snapshot among
    /// `fragment` (a share token) and the persisted entry under `key`.
    ///
    /// Unusable layers are skipped with a log line; this never fails. The resulting state is
    /// written back to storage.
    #[tracing::instrument(skip(storage, fragment))]
    pub fn open_with_key(storage: S, key: &str, fragment: Option<&str>) -> Self {
        let defaults = StudioConfig::default();

        let from_fragment = fragment
            .filter(|f| !f.trim().trim_start_matches('#').is_empty())
            .and_then(|f| match codec::try_decode(f) {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring undecodable URL fragment");
                    None
                }
            });

        let (config, origin) = match from_fragment {
            Some(snapshot) => (snapshot.merged_over(&defaults), InitSource::Fragment),
            None => match load_snapshot(&storage, key) {
                Some(snapshot) => (snapshot.merged_over(&defaults), InitSource::Storage),
                None => (defaults, InitSource::Defaults),
            },
        };
        tracing::debug!(?origin, scene = config.scene, "studio state initialized");

        let mut store = Self {
            config,
            storage,
            key: key.to_owned(),
            origin,
        };
        store.persist();
        store
    }

    /// The latest state.
    pub fn current(&self) -> &StudioConfig {
        &self.config
    }

    /// Where the initial state came from.
    pub fn origin(&self) -> InitSource {
        self.origin
    }

    /// The storage key this store persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Shallow-merge `patch` into the state, then persist.
    pub fn patch(&mut self, patch: &StudioPatch) {
        patch.apply_to(&mut self.config);
        self.persist();
    }

    /// Patch computed from the current state, for toggles and relative steps.
    pub fn update(&mut self, f: impl FnOnce(&StudioConfig) -> StudioPatch) {
        let patch = f(&self.config);
        self.patch(&patch);
    }

    /// Replace the state with defaults, then persist.
    pub fn reset(&mut self) {
        self.config = StudioConfig::default();
        self.persist();
    }

    /// Share token for the current state; empty if encoding failed.
    pub fn share_token(&self) -> String {
        codec::encode(&self.config)
    }

    /// `base` with its fragment replaced by the share token, or `None` if encoding failed.
    pub fn share_url(&self, base: &str) -> Option<String> {
        let token = self.share_token();
        (!token.is_empty()).then(|| codec::share_url(base, &token))
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.config) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "could not serialize studio state");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &json) {
            tracing::warn!(error = %e, key = %self.key, "could not persist studio state");
        }
    }
}

fn load_snapshot<S: Storage>(storage: &S, key: &str) -> Option<StudioPatch> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(error = %e, key, "could not read persisted studio state");
            return None;
        }
    };
    match StudioPatch::from_json(&raw) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!(error = %e, key, "discarding malformed persisted studio state");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/studio.rs"]
mod tests;
