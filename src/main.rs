#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod i18n;
mod project;
mod state;
mod ui;

use anyhow::Context;
use iced::window;

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let catalog = i18n::Catalog::embedded().context("translation resources are inconsistent")?;
    let store = state::persistence::default_store();

    iced::application(app::Portfolio::title, app::Portfolio::update, app::Portfolio::view)
        .subscription(app::Portfolio::subscription)
        .theme(app::Portfolio::theme)
        .window(window::Settings {
            size: (1100.0, 820.0).into(),
            min_size: Some((720.0, 600.0).into()),
            ..window::Settings::default()
        })
        .run_with(move || app::Portfolio::new(catalog, store))
        .map_err(|err| anyhow::anyhow!("failed to run the portfolio window: {err}"))
}
