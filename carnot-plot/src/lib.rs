use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint};

/// A runnable egui application showing one or more diagrams side by side.
#[derive(Default)]
pub struct DiagramApp {
    diagrams: Vec<Diagram>,
}

/// A single plot with labelled axes and named line series.
pub struct Diagram {
    title: String,
    x_label: String,
    y_label: String,
    series: Vec<Series>,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
}

impl DiagramApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn add_diagram(mut self, diagram: Diagram) -> Self {
        self.diagrams.push(diagram);
        self
    }

    #[must_use]
    pub fn diagram_count(&self) -> usize {
        self.diagrams.len()
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, title: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            title,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl Diagram {
    #[must_use]
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points.iter().copied().map(Into::into).collect(),
        });

        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the series names in the order they were added.
    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|series| series.name.as_str())
    }

    fn show(&self, ui: &mut egui::Ui) {
        ui.heading(&self.title);

        Plot::new(&self.title)
            .legend(Legend::default())
            .x_axis_label(&self.x_label)
            .y_axis_label(&self.y_label)
            .show(ui, |plot_ui| {
                for series in &self.series {
                    let points = series.points.as_slice();
                    let name = &series.name;

                    plot_ui.line(Line::new(points).name(name));
                }
            });
    }
}

impl eframe::App for DiagramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.diagrams.is_empty() {
                return;
            }

            ui.columns(self.diagrams.len(), |columns| {
                for (column, diagram) in columns.iter_mut().zip(&self.diagrams) {
                    diagram.show(column);
                }
            });
        });
    }
}
