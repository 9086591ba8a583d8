use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::state::TrendState;

pub const SELECTOR_LABEL: &str = "Select sectors to view GDP contribution trends:";
pub const CHART_TITLE: &str = "GDP Contribution of Selected Sectors";

// ---------------------------------------------------------------------------
// Sector trend section: selector + line chart
// ---------------------------------------------------------------------------

/// Render the selector and, when something is selected, the chart.
pub fn sector_trend(ui: &mut Ui, trend: &mut TrendState) {
    sector_selector(ui, trend);

    if trend.series.is_empty() {
        return;
    }

    ui.add_space(6.0);
    ui.label(RichText::new(CHART_TITLE).strong().size(15.0));

    Plot::new("sector_trend")
        .height(360.0)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("GDP_Contribution")
        .x_axis_formatter(|mark, _range| {
            if mark.value.fract() == 0.0 {
                format!("{:.0}", mark.value)
            } else {
                String::new()
            }
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for series in &trend.series {
                let color = trend.colors.color_for(&series.sector);

                for segment in series.segments.iter().filter(|seg| seg.len() > 1) {
                    let points: PlotPoints = segment.iter().copied().collect();
                    plot_ui.line(
                        Line::new(points)
                            .name(&series.sector)
                            .color(color)
                            .width(2.0),
                    );
                }

                let markers: PlotPoints = series.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(markers)
                        .name(&series.sector)
                        .color(color)
                        .radius(3.5),
                );
            }
        });
}

/// Multi-select: removable chips for the current selection and a drop-down
/// with one checkbox per sector.
fn sector_selector(ui: &mut Ui, trend: &mut TrendState) {
    ui.label(SELECTOR_LABEL);

    // Collect the interaction first, apply it after the widgets are drawn.
    let mut toggled: Option<String> = None;
    let mut select_all = false;
    let mut select_none = false;

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for sector in &trend.selected {
            let chip = egui::Button::new(RichText::new(format!("{sector}  ✕")).color(Color32::WHITE))
                .fill(trend.colors.color_for(sector))
                .small();
            if ui.add(chip).on_hover_text("Remove").clicked() {
                toggled = Some(sector.clone());
            }
        }

        egui::ComboBox::from_id_salt("sector_select")
            .selected_text(format!(
                "{}/{} sectors",
                trend.selected.len(),
                trend.options.len()
            ))
            .close_behavior(egui::PopupCloseBehavior::CloseOnClickOutside)
            .show_ui(ui, |ui: &mut Ui| {
                ui.horizontal(|ui: &mut Ui| {
                    if ui.small_button("All").clicked() {
                        select_all = true;
                    }
                    if ui.small_button("None").clicked() {
                        select_none = true;
                    }
                });
                ui.separator();

                for sector in &trend.options {
                    let mut checked = trend.is_selected(sector);
                    let text = RichText::new(sector).color(trend.colors.color_for(sector));
                    if ui.checkbox(&mut checked, text).changed() {
                        toggled = Some(sector.clone());
                    }
                }
            });
    });

    if select_all {
        trend.select_all();
    } else if select_none {
        trend.select_none();
    } else if let Some(sector) = toggled {
        trend.toggle(&sector);
    }
}
