use std::sync::Arc;

use eframe::egui::{self, ScrollArea, Ui};

use crate::data::loader::DataContext;
use crate::state::AppState;
use crate::ui::shell;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    data: Arc<DataContext>,
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(data: Arc<DataContext>) -> Self {
        let state = AppState::new(&data);
        Self { data, state }
    }

    /// Draw one frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        // ---- Bottom panel: loaded table summary ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui: &mut Ui| {
            shell::status_bar(ui, &self.data);
        });

        // ---- Central panel: the page ----
        egui::CentralPanel::default().show(ctx, |ui: &mut Ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    shell::page(ui, &mut self.state);
                });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
