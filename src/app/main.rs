//! Native desktop entry point for the event organizer client.

use eframe::egui;
use evorg::app::{theme, views, AppState};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("evorg=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Event Organizer",
        options,
        Box::new(|cc| {
            theme::styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(EvorgApp::default()))
        }),
    )
}

struct EvorgApp {
    state: AppState,
}

impl Default for EvorgApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for EvorgApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.state.pump();

        views::render_top_bar(ctx, &mut self.state, frame);

        views::render_main_panel(ctx, &mut self.state);

        // The feed and worker channels deliver between frames.
        ctx.request_repaint();
    }
}
