//! CommsDeck - Station Communications Console
//!
//! Standalone desktop build of the communications console panel, driven by
//! a local presenter standing in for the game session layer.

mod logging_setup;
mod presenter;

use anyhow::Result;
use clap::Parser;

use commsdeck_ui::{LocaleManager, UserConfig};
use presenter::ConsolePresenter;

/// CommsDeck - station communications console
#[derive(Parser, Debug)]
#[command(name = "commsdeck", version, about)]
struct Args {
    /// Override the configured language (e.g. "en", "de")
    #[arg(long)]
    lang: Option<String>,

    /// Start with the station on a locked (command-only) alert level
    #[arg(long)]
    locked_alert: bool,
}

struct CommsDeckApp {
    presenter: ConsolePresenter,
    i18n: LocaleManager,
}

impl eframe::App for CommsDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |_ui| {});
        self.presenter.frame(ctx, &self.i18n);

        // The panel holds no timer; repaint so the countdown ticks.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

fn main() -> Result<()> {
    logging_setup::init()?;
    let args = Args::parse();

    let mut config = UserConfig::load();
    if let Some(lang) = args.lang {
        // Command line override only; not persisted.
        config.language = lang;
    }

    let i18n = LocaleManager::new(&config.language);
    tracing::info!(language = %i18n.language(), "starting commsdeck");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([
            config.window_width.unwrap_or(480) as f32,
            config.window_height.unwrap_or(520) as f32,
        ])
        .with_min_inner_size([400.0, 420.0]);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "CommsDeck",
        native_options,
        Box::new(move |cc| {
            config.theme.apply(&cc.egui_ctx);
            let presenter = ConsolePresenter::new(&i18n, &config, args.locked_alert);
            Ok(Box::new(CommsDeckApp { presenter, i18n }))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {e}"))?;

    Ok(())
}
