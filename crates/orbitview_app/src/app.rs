// SPDX-License-Identifier: MIT OR Apache-2.0
//! eframe window shell around the graph display.

use orbitview_graph::ui::CANVAS_SIZE;
use orbitview_graph::GraphDisplay;

/// The viewer application: one graph display for the session.
pub struct ViewerApp {
    display: GraphDisplay<String>,
}

impl ViewerApp {
    /// Wrap a prepared display.
    pub fn new(display: GraphDisplay<String>) -> Self {
        Self { display }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.display.ui(ui);
        });
    }
}

/// Open the window and run the display until the user closes it. Closing
/// the window drops the display and with it the redraw tick.
pub fn run(display: GraphDisplay<String>) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(CANVAS_SIZE)
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Graph Display",
        options,
        Box::new(|_cc| Ok(Box::new(ViewerApp::new(display)))),
    )
}
