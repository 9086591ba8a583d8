use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::color::ContinuousScale;
use crate::data::ranking::{Rankings, StateMean};

pub const TOP_TITLE: &str = "Top 10 States by Development Index";
pub const BOTTOM_TITLE: &str = "Bottom 10 States by Development Index";

/// Two bar charts side by side: highest states left, lowest right.
pub fn regional_ranking(ui: &mut Ui, rankings: &Rankings) {
    ui.columns(2, |cols: &mut [Ui]| {
        ranking_chart(&mut cols[0], "top_states", TOP_TITLE, &rankings.top);
        ranking_chart(&mut cols[1], "bottom_states", BOTTOM_TITLE, &rankings.bottom);
    });
}

fn ranking_chart(ui: &mut Ui, id: &str, title: &str, states: &[StateMean]) {
    ui.label(RichText::new(title).strong().size(15.0));

    // Colour range is per chart.
    let scale = ContinuousScale::plasma(states.iter().map(|s| s.mean));
    let bars: Vec<Bar> = states
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Bar::new(i as f64, s.mean)
                .name(&s.state)
                .fill(scale.color_for(s.mean))
                .width(0.7)
        })
        .collect();
    let labels: Vec<String> = states.iter().map(|s| s.state.clone()).collect();

    Plot::new(id)
        .height(340.0)
        .x_axis_label("State")
        .y_axis_label("Index")
        .x_axis_formatter(move |mark, _range| axis_label(&labels, mark.value))
        .show_grid([false, true])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).element_formatter(Box::new(
                |bar: &Bar, _chart: &BarChart| format!("{}\nIndex: {:.3}", bar.name, bar.value),
            )));
        });
}

/// State name for a bar position; blank between bars and outside the range.
pub fn axis_label(labels: &[String], value: f64) -> String {
    if value < -0.5 || (value - value.round()).abs() > 1e-6 {
        return String::new();
    }
    labels
        .get(value.round() as usize)
        .cloned()
        .unwrap_or_default()
}
