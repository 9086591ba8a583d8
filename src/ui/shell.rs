use eframe::egui::{Color32, RichText, Ui};

use crate::data::loader::DataContext;
use crate::data::DataError;
use crate::state::AppState;
use crate::ui::{policy, ranking, trend};

pub const PAGE_TITLE: &str =
    "Economic Resilience Pathways Mapping India's Transition to a $5 Trillion Economy Dashboard";

pub const DESCRIPTION: &str = "This dashboard summarizes insights from official statistics \
(MoSPI datasets) to track sectoral performance, regional development, and policy priorities \
as India moves toward a $5 Trillion economy.";

pub const SECTOR_HEADER: &str = "📈 Sectoral Performance Trends";
pub const REGIONAL_HEADER: &str = "📊 Regional Development Index (2023)";
pub const POLICY_HEADER: &str = "📝 Policy Zone Classification";

pub const CREDITS_HEADER: &str = "Project Creator";
pub const CREDITS: [(&str, &str); 4] = [
    ("Name", "Avik Hawlader"),
    (
        "Institute",
        "Indian Institute of Science Education and Research Bhopal",
    ),
    ("Email", "avik21@iiserb.ac.in"),
    ("Submission", "Innovate with GoIStats Hackathon 2025"),
];

// ---------------------------------------------------------------------------
// Page body
// ---------------------------------------------------------------------------

/// Render the whole page top to bottom. Section order is fixed.
pub fn page(ui: &mut Ui, state: &mut AppState) {
    ui.heading(RichText::new(format!("🌏 {PAGE_TITLE}")).size(26.0).strong());
    ui.add_space(4.0);
    ui.label(DESCRIPTION);

    section_header(ui, SECTOR_HEADER);
    match &mut state.trend {
        Ok(t) => trend::sector_trend(ui, t),
        Err(e) => view_error(ui, e),
    }

    section_header(ui, REGIONAL_HEADER);
    match &state.rankings {
        Ok(r) => ranking::regional_ranking(ui, r),
        Err(e) => view_error(ui, e),
    }

    section_header(ui, POLICY_HEADER);
    match &state.policy {
        Ok(p) => policy::policy_table(ui, p),
        Err(e) => view_error(ui, e),
    }

    ui.add_space(12.0);
    ui.separator();
    credits(ui);
}

fn section_header(ui: &mut Ui, text: &str) {
    ui.add_space(16.0);
    ui.label(RichText::new(text).size(20.0).strong());
    ui.add_space(4.0);
}

fn view_error(ui: &mut Ui, err: &DataError) {
    ui.label(RichText::new(format!("Error: {err}")).color(Color32::RED));
}

fn credits(ui: &mut Ui) {
    ui.label(RichText::new(CREDITS_HEADER).size(18.0).strong());
    for (field, value) in CREDITS {
        ui.horizontal(|ui: &mut Ui| {
            ui.strong(format!("{field}:"));
            if field == "Submission" {
                ui.label(RichText::new(value).italics());
            } else {
                ui.label(value);
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

/// One-line summary of the loaded tables.
pub fn status_bar(ui: &mut Ui, data: &DataContext) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} sectoral rows · {} sector contributions · {} regional observations · {} policy rows",
            data.sector_gdp.len(),
            data.top_sectors.len(),
            data.regional_index.len(),
            data.policy_table.len()
        ));
    });
}
