//! Command implementations. Each returns data; `main` does the printing.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use fluent_controls::{
    apply_config, AvatarToken, BadgeProps, BadgeSize, BadgeStyle, BadgeToken, ButtonToken,
    ShimmerToken,
};
use fluent_core::{Appearance, Color};
use fluent_theme::{
    ControlTokenSet, SharedColorSet, SharedColorShade, SurfaceId, Theme, ThemeConfig, ThemeError,
    ThemePreset, ThemeRegistry, TokenOverrides, TokenSource,
};
use tracing::{debug, info};

use crate::cli::{ControlArg, TokensArgs};
use crate::controls::DemoControl;
use crate::table::TokenRow;

/// Surface the demo resolves on.
const DEMO_WINDOW: SurfaceId = SurfaceId::new(1);

#[derive(Debug)]
pub struct TokenReport {
    pub control: &'static str,
    pub theme: String,
    pub appearance: Appearance,
    pub rows: Vec<TokenRow>,
}

pub fn run_tokens(args: &TokensArgs, appearance: Appearance) -> Result<TokenReport> {
    let registry = Arc::new(ThemeRegistry::default());
    registry.register(
        DEMO_WINDOW,
        Some(load_theme(args.config.as_deref(), &args.preset)?),
    );

    let (control, rows) = match args.control {
        ControlArg::Badge => resolve::<BadgeToken>(&registry, args, appearance)?,
        ControlArg::Button => resolve::<ButtonToken>(&registry, args, appearance)?,
        ControlArg::Avatar => resolve::<AvatarToken>(&registry, args, appearance)?,
        ControlArg::Shimmer => resolve::<ShimmerToken>(&registry, args, appearance)?,
    };

    Ok(TokenReport {
        control,
        theme: registry.theme(DEMO_WINDOW).name().to_string(),
        appearance,
        rows,
    })
}

fn resolve<K: DemoControl>(
    registry: &Arc<ThemeRegistry>,
    args: &TokensArgs,
    appearance: Appearance,
) -> Result<(&'static str, Vec<TokenRow>)> {
    let props = K::props(args.style.as_deref(), args.size.as_deref())?;
    debug!(control = K::CONTROL, ?props, %appearance, "resolving token table");

    if args.theme_override {
        let theme = registry.theme(DEMO_WINDOW);
        // demo overrides layer on top of anything the theme file registered
        let mut tokens: TokenOverrides<K> = theme
            .tokens::<K>()
            .map(|existing| (*existing).clone())
            .unwrap_or_default();
        tokens.extend(K::theme_wide_overrides());
        theme.register::<K>(Some(tokens));
    }

    let mut set = ControlTokenSet::<K>::on_surface(props, registry.clone(), DEMO_WINDOW);
    if args.control_override {
        set.replace_all_overrides(Some(K::per_control_overrides()));
    }

    let rows = set
        .resolve_all(appearance)
        .into_iter()
        .map(|(token, value, source)| TokenRow {
            token: token.name(),
            value,
            source,
        })
        .collect();
    Ok((K::CONTROL, rows))
}

/// Theme file wins over the preset id.
pub fn load_theme(config: Option<&Path>, preset: &str) -> Result<Arc<Theme>> {
    match config {
        Some(path) => Ok(Arc::new(load_config_theme(path)?.0)),
        None => {
            let preset = ThemePreset::from_id(preset)
                .ok_or_else(|| ThemeError::UnknownPreset(preset.to_string()))?;
            info!(%preset, "using built-in preset");
            Ok(Arc::new(preset.theme()))
        }
    }
}

fn load_config_theme(path: &Path) -> Result<(Theme, ThemeConfig)> {
    let config = ThemeConfig::load(path)
        .with_context(|| format!("failed to load theme file {}", path.display()))?;
    let theme = config
        .build_theme()
        .with_context(|| format!("invalid theme in {}", path.display()))?;
    apply_config(&theme, &config)
        .with_context(|| format!("invalid control overrides in {}", path.display()))?;
    info!(theme = theme.name(), path = %path.display(), "loaded theme file");
    Ok((theme, config))
}

#[derive(Debug, PartialEq)]
pub struct CheckReport {
    pub name: String,
    pub preset: ThemePreset,
    pub alias_overrides: usize,
    pub controls: Vec<&'static str>,
}

pub fn run_check(path: &Path) -> Result<CheckReport> {
    let (theme, config) = load_config_theme(path)?;
    Ok(CheckReport {
        name: theme.name().to_string(),
        preset: config.preset()?,
        alias_overrides: theme.color_overrides().count(),
        controls: theme.registered_controls(),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioStep {
    pub label: &'static str,
    pub color: Color,
    pub source: TokenSource,
}

/// Badge background through both override layers and back.
pub fn run_scenario(appearance: Appearance) -> Vec<ScenarioStep> {
    let token = BadgeToken::BackgroundTintColor;
    let theme = Arc::new(Theme::default());
    let mut badge = ControlTokenSet::<BadgeToken>::new(
        BadgeProps::new(BadgeStyle::Neutral, BadgeSize::Medium),
        theme.clone(),
    );

    let mut steps = Vec::new();
    let mut record = |label: &'static str, badge: &ControlTokenSet<BadgeToken>| {
        steps.push(ScenarioStep {
            label,
            color: badge.color(token, appearance),
            source: badge.source(token),
        });
    };

    record("default", &badge);

    let mut theme_wide = TokenOverrides::<BadgeToken>::default();
    theme_wide.insert(token, Color::from_hex(0x822FFF).into());
    theme.register::<BadgeToken>(Some(theme_wide));
    record("theme-wide purple", &badge);

    badge.set_override(
        token,
        SharedColorSet::DarkOrange.color(SharedColorShade::Primary),
    );
    record("instance orange", &badge);

    badge.remove_override(token);
    record("instance removed", &badge);

    theme.register::<BadgeToken>(None);
    record("theme-wide unregistered", &badge);

    steps
}
