//! Chart widgets drawn with egui_plot from prepared chart data

use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, MarkerShape, Plot, PlotPoints, Points};
use fooddash_services::{CategoryCount, Distplot, Histogram, Series};

const CHART_HEIGHT: f32 = 280.0;

const PALETTE: [Color32; 4] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(214, 39, 40),
];

fn color(i: usize) -> Color32 {
    PALETTE[i % PALETTE.len()]
}

/// Bars keyed by row index
pub fn bars(ui: &mut egui::Ui, id: usize, name: &str, points: &[[f64; 2]]) {
    let bars: Vec<Bar> = points.iter().map(|[x, y]| Bar::new(*x, *y).width(0.8)).collect();
    Plot::new(("bars", id))
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(name).color(color(0)));
        });
}

/// One bar per category, labelled on the x axis
pub fn category_bars(ui: &mut egui::Ui, id: usize, name: &str, counts: &[CategoryCount]) {
    let labels: Vec<String> = counts.iter().map(|c| c.label.clone()).collect();
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| Bar::new(i as f64, c.count as f64).width(0.7).name(&c.label))
        .collect();

    Plot::new(("category_bars", id))
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .legend(Legend::default())
        .x_axis_formatter(move |mark: GridMark, _range| category_label(&labels, mark.value))
        .y_axis_label("count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(name).color(color(0)));
        });
}

fn category_label(labels: &[String], value: f64) -> String {
    if value.fract() != 0.0 || value < 0.0 {
        return String::new();
    }
    labels.get(value as usize).cloned().unwrap_or_default()
}

pub fn histogram(ui: &mut egui::Ui, id: usize, name: &str, histogram: &Histogram) {
    let bars: Vec<Bar> = histogram
        .bins
        .iter()
        .map(|b| Bar::new(b.center(), b.count as f64).width(b.width()))
        .collect();

    Plot::new(("histogram", id))
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(name).color(color(0)));
        });
}

pub fn line(ui: &mut egui::Ui, id: usize, series: &[Series]) {
    Plot::new(("line", id))
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for (i, s) in series.iter().enumerate() {
                plot_ui.line(
                    Line::new(PlotPoints::from(s.points.clone()))
                        .name(&s.name)
                        .color(color(i)),
                );
            }
        });
}

/// Unstacked series, each filled down to zero
pub fn area(ui: &mut egui::Ui, id: usize, series: &[Series]) {
    Plot::new(("area", id))
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for (i, s) in series.iter().enumerate() {
                plot_ui.line(
                    Line::new(PlotPoints::from(s.points.clone()))
                        .name(&s.name)
                        .color(color(i))
                        .fill(0.0),
                );
            }
        });
}

/// Density histograms with KDE curves and a rug strip below the axis
pub fn distplot(ui: &mut egui::Ui, id: usize, distplot: &Distplot) {
    let peak = distplot
        .series
        .iter()
        .flat_map(|s| s.densities.iter().chain(s.curve.iter().map(|p| &p[1])))
        .fold(0.0_f64, |acc, d| acc.max(*d));
    let rug_step = if peak > 0.0 { peak * 0.06 } else { 0.001 };

    Plot::new(("distplot", id))
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for (i, s) in distplot.series.iter().enumerate() {
                let c = color(i);

                let bars: Vec<Bar> = s
                    .bins
                    .iter()
                    .zip(&s.densities)
                    .map(|(b, d)| Bar::new(b.center(), *d).width(b.width()))
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(&s.label)
                        .color(c.gamma_multiply(0.6)),
                );

                if !s.curve.is_empty() {
                    plot_ui.line(Line::new(PlotPoints::from(s.curve.clone())).name(&s.label).color(c));
                }

                let y = -rug_step * (i as f64 + 1.0);
                let rug: Vec<[f64; 2]> = s.rug.iter().map(|x| [*x, y]).collect();
                plot_ui.points(
                    Points::new(rug)
                        .name(&s.label)
                        .shape(MarkerShape::Down)
                        .radius(3.0)
                        .color(c),
                );
            }
        });
}
