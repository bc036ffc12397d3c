//! Per-instance control token sets
//!
//! Resolution order for every lookup:
//!
//! 1. the instance's own override
//! 2. the theme-wide override registered on the control's [`Theme`]
//! 3. the control type's default provider
//!
//! A set either holds one theme or is bound to a surface of a
//! [`ThemeRegistry`]. A bound set looks its theme up on every lookup, so
//! registering or unregistering a theme on the surface (or an ancestor)
//! takes effect for instances that already exist.
//!
//! Writes never notify anyone. Each mutation bumps [`ControlTokenSet::revision`],
//! theme-wide registrations bump [`Theme::revision`] and surface changes bump
//! [`ThemeRegistry::revision`], so the owner decides on its next layout pass
//! whether to redraw.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use fluent_core::{Appearance, Color, FontInfo, ImageAsset, ShadowInfo};
use rustc_hash::FxHashMap;

use crate::error::{Result, ThemeError};
use crate::registry::{SurfaceId, ThemeRegistry};
use crate::theme::Theme;
use crate::value::{ControlTokenValue, TokenContext, TokenKind, TokenValue};

/// Closed set of token identifiers consumed by one control type
pub trait TokenSetKey: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Control state the defaults depend on (style, size, ...)
    type Props: Clone + Default + fmt::Debug + Send + Sync + 'static;

    /// Stable control name, used as the theme registration key and in theme files
    const CONTROL: &'static str;

    fn all() -> &'static [Self];

    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|token| token.name() == name)
    }

    /// Default provider. Must cover every identifier.
    fn default_value(self, props: &Self::Props) -> ControlTokenValue;

    /// Kind of value this token yields, independent of props
    fn kind(self) -> TokenKind {
        self.default_value(&Self::Props::default()).kind()
    }
}

/// Override map for one control type
pub type TokenOverrides<K> = FxHashMap<K, ControlTokenValue>;

/// Which layer answered a lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenSource {
    Instance,
    Theme,
    Default,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenSource::Instance => "instance",
            TokenSource::Theme => "theme",
            TokenSource::Default => "default",
        })
    }
}

/// Where a token set gets its theme from
#[derive(Clone)]
enum ThemeBinding {
    Fixed(Arc<Theme>),
    Surface {
        registry: Arc<ThemeRegistry>,
        surface: SurfaceId,
    },
}

impl ThemeBinding {
    fn theme(&self) -> Arc<Theme> {
        match self {
            ThemeBinding::Fixed(theme) => theme.clone(),
            ThemeBinding::Surface { registry, surface } => registry.theme(*surface),
        }
    }
}

/// Token set owned by a single control instance
#[derive(Clone)]
pub struct ControlTokenSet<K: TokenSetKey> {
    props: K::Props,
    binding: ThemeBinding,
    overrides: TokenOverrides<K>,
    revision: u64,
}

impl<K: TokenSetKey> ControlTokenSet<K> {
    /// Set that always resolves against `theme`
    pub fn new(props: K::Props, theme: Arc<Theme>) -> Self {
        Self::with_binding(props, ThemeBinding::Fixed(theme))
    }

    /// Set that resolves against whatever theme `registry` has for `surface`
    pub fn on_surface(props: K::Props, registry: Arc<ThemeRegistry>, surface: SurfaceId) -> Self {
        Self::with_binding(props, ThemeBinding::Surface { registry, surface })
    }

    fn with_binding(props: K::Props, binding: ThemeBinding) -> Self {
        Self {
            props,
            binding,
            overrides: FxHashMap::default(),
            revision: 0,
        }
    }

    pub fn props(&self) -> &K::Props {
        &self.props
    }

    /// Replace the control state the defaults read
    pub fn set_props(&mut self, props: K::Props) {
        self.props = props;
        self.bump();
    }

    /// Theme lookups currently resolve against
    pub fn theme(&self) -> Arc<Theme> {
        self.binding.theme()
    }

    /// Surface this set is bound to, if any
    pub fn surface(&self) -> Option<SurfaceId> {
        match &self.binding {
            ThemeBinding::Fixed(_) => None,
            ThemeBinding::Surface { surface, .. } => Some(*surface),
        }
    }

    /// Pin the set to `theme`, detaching it from any surface.
    ///
    /// Returns `true` if lookups may now resolve differently.
    pub fn update_theme(&mut self, theme: Arc<Theme>) -> bool {
        if let ThemeBinding::Fixed(current) = &self.binding {
            if Arc::ptr_eq(current, &theme) {
                return false;
            }
        }
        tracing::debug!(
            control = K::CONTROL,
            from = self.theme().name(),
            to = theme.name(),
            "control token set switched theme"
        );
        self.binding = ThemeBinding::Fixed(theme);
        self.bump();
        true
    }

    /// Follow `registry`'s theme for `surface` from now on
    pub fn bind_surface(&mut self, registry: Arc<ThemeRegistry>, surface: SurfaceId) {
        tracing::debug!(control = K::CONTROL, surface = %surface, "control token set bound to surface");
        self.binding = ThemeBinding::Surface { registry, surface };
        self.bump();
    }

    /// Counter bumped by every mutation of this set
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Resolved value of `token` in `appearance`
    pub fn get(&self, token: K, appearance: Appearance) -> TokenValue {
        let theme = self.theme();
        self.get_in(&theme, token, appearance)
    }

    /// Unevaluated value of `token`, same precedence as [`get`](Self::get)
    pub fn value(&self, token: K) -> ControlTokenValue {
        self.value_in(&self.theme(), token)
    }

    /// The active override for `token`: the instance's, else the theme's
    pub fn override_value(&self, token: K) -> Option<ControlTokenValue> {
        self.override_in(&self.theme(), token)
    }

    pub fn source(&self, token: K) -> TokenSource {
        self.source_in(&self.theme(), token)
    }

    fn get_in(&self, theme: &Theme, token: K, appearance: Appearance) -> TokenValue {
        self.value_in(theme, token)
            .evaluate(&TokenContext::new(theme, appearance))
    }

    fn value_in(&self, theme: &Theme, token: K) -> ControlTokenValue {
        self.override_in(theme, token)
            .unwrap_or_else(|| token.default_value(&self.props))
    }

    fn override_in(&self, theme: &Theme, token: K) -> Option<ControlTokenValue> {
        if let Some(value) = self.overrides.get(&token) {
            return Some(value.clone());
        }
        theme
            .tokens::<K>()
            .and_then(|tokens| tokens.get(&token).cloned())
    }

    fn source_in(&self, theme: &Theme, token: K) -> TokenSource {
        if self.overrides.contains_key(&token) {
            TokenSource::Instance
        } else if theme
            .tokens::<K>()
            .is_some_and(|tokens| tokens.contains_key(&token))
        {
            TokenSource::Theme
        } else {
            TokenSource::Default
        }
    }

    pub fn instance_overrides(&self) -> &TokenOverrides<K> {
        &self.overrides
    }

    pub fn set_override(&mut self, token: K, value: impl Into<ControlTokenValue>) {
        let value = value.into();
        tracing::trace!(control = K::CONTROL, token = token.name(), kind = %value.kind(), "set override");
        self.overrides.insert(token, value);
        self.bump();
    }

    /// Drop the instance override for `token`. No-op if there is none.
    pub fn remove_override(&mut self, token: K) {
        if self.overrides.remove(&token).is_some() {
            self.bump();
        }
    }

    /// Replace every instance override.
    ///
    /// Tokens present in `overrides` are set, all others are removed. `None`
    /// removes every instance override.
    pub fn replace_all_overrides(&mut self, overrides: Option<TokenOverrides<K>>) {
        self.overrides = overrides.unwrap_or_default();
        self.bump();
    }

    /// Copy active overrides from a parent control's token set.
    ///
    /// For each `(ours, theirs)` pair the parent's override (instance or
    /// theme-wide) becomes our instance override. If the parent has none,
    /// our instance override for that token is removed.
    pub fn set_overrides_from<U: TokenSetKey>(
        &mut self,
        other: &ControlTokenSet<U>,
        mapping: &[(K, U)],
    ) {
        let mut overrides = self.overrides.clone();
        for &(ours, theirs) in mapping {
            match other.override_value(theirs) {
                Some(value) => {
                    overrides.insert(ours, value);
                }
                None => {
                    overrides.remove(&ours);
                }
            }
        }
        self.overrides = overrides;
        self.bump();
    }

    /// Every token with its resolved value and the layer that supplied it
    pub fn resolve_all(&self, appearance: Appearance) -> Vec<(K, TokenValue, TokenSource)> {
        let theme = self.theme();
        K::all()
            .iter()
            .map(|&token| {
                (
                    token,
                    self.get_in(&theme, token, appearance),
                    self.source_in(&theme, token),
                )
            })
            .collect()
    }

    pub fn color(&self, token: K, appearance: Appearance) -> Color {
        self.get(token, appearance).color()
    }

    pub fn float(&self, token: K, appearance: Appearance) -> f32 {
        self.get(token, appearance).float()
    }

    pub fn font(&self, token: K, appearance: Appearance) -> FontInfo {
        self.get(token, appearance).font()
    }

    pub fn shadow(&self, token: K, appearance: Appearance) -> ShadowInfo {
        self.get(token, appearance).shadow()
    }

    pub fn image(&self, token: K, appearance: Appearance) -> ImageAsset {
        self.get(token, appearance).image()
    }

    pub fn try_color(&self, token: K, appearance: Appearance) -> Result<Color> {
        self.typed(token, appearance, TokenKind::Color, |v| v.as_color())
    }

    pub fn try_float(&self, token: K, appearance: Appearance) -> Result<f32> {
        self.typed(token, appearance, TokenKind::Float, |v| v.as_float())
    }

    pub fn try_font(&self, token: K, appearance: Appearance) -> Result<FontInfo> {
        self.typed(token, appearance, TokenKind::Font, |v| v.as_font().cloned())
    }

    pub fn try_shadow(&self, token: K, appearance: Appearance) -> Result<ShadowInfo> {
        self.typed(token, appearance, TokenKind::Shadow, |v| v.as_shadow().copied())
    }

    pub fn try_image(&self, token: K, appearance: Appearance) -> Result<ImageAsset> {
        self.typed(token, appearance, TokenKind::Image, |v| v.as_image().cloned())
    }

    fn typed<T>(
        &self,
        token: K,
        appearance: Appearance,
        expected: TokenKind,
        extract: impl FnOnce(&TokenValue) -> Option<T>,
    ) -> Result<T> {
        let value = self.get(token, appearance);
        extract(&value).ok_or_else(|| ThemeError::KindMismatch {
            token: format!("{}.{}", K::CONTROL, token.name()),
            expected,
            found: value.kind(),
        })
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

impl<K: TokenSetKey> fmt::Debug for ControlTokenSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlTokenSet")
            .field("control", &K::CONTROL)
            .field("props", &self.props)
            .field("theme", &self.theme().name().to_string())
            .field("surface", &self.surface())
            .field("overrides", &self.overrides.len())
            .field("revision", &self.revision)
            .finish()
    }
}
