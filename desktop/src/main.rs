use std::sync::Arc;

use anyhow::Context;
use api::coins_config::CoinsConfig;
use api::mm2::Mm2Config;
use api::mm2::Mm2Service;
use api::prefs::user_prefs::UserPrefs;
use api::price_map::PriceMap;
use api::Backend;
use dioxus::desktop::Config;
use dioxus::desktop::LogicalSize;
use dioxus::desktop::WindowBuilder;
use dioxus::prelude::*;
use ui::events::WindowGeometry;
use ui::icons::IconCache;
use ui::DashboardContext;

fn main() -> anyhow::Result<()> {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let prefs = UserPrefs::from_env();
    dioxus_logger::tracing::info!("prefs: {:#?}", prefs);

    let coins = CoinsConfig::load_or_builtin(&prefs.coins_config_path())?;
    let prices = PriceMap::load_or_empty(&prefs.prices_path(), prefs.fiat())
        .with_context(|| format!("reading {}", prefs.prices_path().display()))?;

    let backend = Mm2Service::start(Mm2Config::from_env(), coins).context("starting the mm2 poller")?;

    // A corrupt icon is the one asset problem that stops startup.
    let icons = IconCache::load(&prefs.icons_dir(), &backend.enableable_coins())?;
    dioxus_logger::tracing::info!("loaded {} coin icon(s)", icons.len());

    let (width, height) = UserPrefs::WINDOW_SIZE;
    let context = DashboardContext {
        backend: Arc::new(backend),
        prices: Arc::new(prices),
        icons,
        prefs,
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title("atomicDEX")
                    .with_inner_size(LogicalSize::new(width, height)),
            ),
        )
        .with_context(context)
        .launch(App);

    Ok(())
}

/// Where the window sits on screen, in logical pixels.
fn window_geometry() -> WindowGeometry {
    let window = dioxus::desktop::window();
    let scale = window.scale_factor();
    let size = window.inner_size().to_logical::<f64>(scale);
    let (x, y) = window
        .outer_position()
        .map(|p| {
            let p = p.to_logical::<f64>(scale);
            (p.x, p.y)
        })
        .unwrap_or((0.0, 0.0));
    WindowGeometry {
        x,
        y,
        width: size.width,
        height: size.height,
    }
}

#[component]
fn App() -> Element {
    rsx! {
        ui::DashboardApp {
            geometry: move |_| window_geometry(),
            on_quit: move |_| dioxus::desktop::window().close(),
        }
    }
}
