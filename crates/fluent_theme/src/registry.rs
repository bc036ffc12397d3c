//! Surface to theme registry
//!
//! Maps display surfaces (windows, or any view that can carry a theme) to
//! themes. A surface without its own theme inherits from its nearest
//! ancestor, then from the registry default. The registry is a plain value
//! owned by the application, so tests and multi-window hosts can keep
//! independent registries side by side.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::theme::Theme;

/// Opaque handle for a display surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

#[derive(Default)]
struct RegistryState {
    themes: FxHashMap<SurfaceId, Arc<Theme>>,
    parents: FxHashMap<SurfaceId, SurfaceId>,
}

impl RegistryState {
    /// `surface` followed by its ancestors, nearest first. Stops on a cycle.
    fn lineage(&self, surface: SurfaceId) -> Vec<SurfaceId> {
        let mut seen = FxHashSet::default();
        let mut chain = Vec::new();
        let mut current = Some(surface);
        while let Some(id) = current {
            if !seen.insert(id) {
                tracing::warn!(surface = %surface, "surface hierarchy contains a cycle");
                break;
            }
            chain.push(id);
            current = self.parents.get(&id).copied();
        }
        chain
    }
}

pub struct ThemeRegistry {
    default_theme: RwLock<Arc<Theme>>,
    state: RwLock<RegistryState>,
    revision: AtomicU64,
}

impl ThemeRegistry {
    pub fn new(default_theme: Arc<Theme>) -> Self {
        Self {
            default_theme: RwLock::new(default_theme),
            state: RwLock::new(RegistryState::default()),
            revision: AtomicU64::new(0),
        }
    }

    /// Associate `theme` with `surface`, or remove the association with `None`
    pub fn register(&self, surface: SurfaceId, theme: Option<Arc<Theme>>) {
        let mut state = self.state.write().unwrap();
        match theme {
            Some(theme) => {
                tracing::debug!(surface = %surface, theme = theme.name(), "registered theme");
                state.themes.insert(surface, theme);
            }
            None => {
                if state.themes.remove(&surface).is_none() {
                    return;
                }
                tracing::debug!(surface = %surface, "unregistered theme");
            }
        }
        self.bump();
    }

    /// Theme in effect for `surface`
    pub fn theme(&self, surface: SurfaceId) -> Arc<Theme> {
        let state = self.state.read().unwrap();
        state
            .lineage(surface)
            .into_iter()
            .find_map(|id| state.themes.get(&id).cloned())
            .unwrap_or_else(|| self.default_theme())
    }

    /// Theme registered directly on `surface`, ignoring inheritance
    pub fn registered_theme(&self, surface: SurfaceId) -> Option<Arc<Theme>> {
        self.state.read().unwrap().themes.get(&surface).cloned()
    }

    /// Attach `child` under `parent`, or detach it with `None`
    pub fn set_parent(&self, child: SurfaceId, parent: Option<SurfaceId>) {
        let mut state = self.state.write().unwrap();
        match parent {
            Some(parent) => {
                state.parents.insert(child, parent);
            }
            None => {
                state.parents.remove(&child);
            }
        }
        self.bump();
    }

    pub fn parent(&self, surface: SurfaceId) -> Option<SurfaceId> {
        self.state.read().unwrap().parents.get(&surface).copied()
    }

    /// Whether a theme change on `changed` can affect `surface`.
    ///
    /// True when `changed` is `surface` itself or one of its ancestors.
    pub fn is_applicable_change(&self, changed: SurfaceId, surface: SurfaceId) -> bool {
        self.state.read().unwrap().lineage(surface).contains(&changed)
    }

    pub fn default_theme(&self) -> Arc<Theme> {
        self.default_theme.read().unwrap().clone()
    }

    /// Replace the theme used by surfaces with nothing registered in their lineage
    pub fn set_default_theme(&self, theme: Arc<Theme>) {
        tracing::debug!(theme = theme.name(), "replaced default theme");
        *self.default_theme.write().unwrap() = theme;
        self.bump();
    }

    /// Surfaces with a directly registered theme, sorted
    pub fn surfaces(&self) -> Vec<SurfaceId> {
        let mut surfaces: Vec<_> = self.state.read().unwrap().themes.keys().copied().collect();
        surfaces.sort_unstable();
        surfaces
    }

    /// Counter bumped by every registration, hierarchy or default change
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    fn bump(&self) {
        self.revision.fetch_add(1, Ordering::AcqRel);
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new(Arc::new(Theme::default()))
    }
}

impl fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("default_theme", &self.default_theme().name().to_string())
            .field("surfaces", &self.surfaces())
            .field("revision", &self.revision())
            .finish()
    }
}
