use crate::histogram::Histogram;

const AXIS_LABEL_SPACE: f32 = 20.0;

/// Window showing the generated sequence next to its frequency histogram.
pub struct HistogramApp {
    title: String,
    sequence: Vec<i64>,
    histogram: Histogram,
}

impl HistogramApp {
    pub fn new(title: String, sequence: Vec<i64>, histogram: Histogram) -> Self {
        Self {
            title,
            sequence,
            histogram,
        }
    }

    fn draw_bars(&self, ui: &mut egui::Ui) {
        let rect = ui.available_rect_before_wrap();
        let painter = ui.painter_at(rect);
        let bins = self.histogram.counts().len().max(1);
        let max = self.histogram.max_count().max(1);

        let slot = rect.width() / bins as f32;
        let baseline = rect.bottom() - AXIS_LABEL_SPACE;
        let plot_height = (rect.height() - 2.0 * AXIS_LABEL_SPACE).max(0.0);

        for (i, (lo, _hi, count)) in self.histogram.bins().enumerate() {
            let left = rect.left() + slot * i as f32;
            let height = plot_height * count as f32 / max as f32;
            let bar = egui::Rect::from_min_max(
                egui::pos2(left + 2.0, baseline - height),
                egui::pos2(left + slot - 2.0, baseline),
            );
            painter.rect_filled(bar, 0.0, egui::Color32::LIGHT_BLUE);

            painter.text(
                egui::pos2(left, baseline + 2.0),
                egui::Align2::CENTER_TOP,
                lo.to_string(),
                egui::FontId::monospace(12.0),
                egui::Color32::GRAY,
            );
            painter.text(
                egui::pos2(bar.center().x, bar.top() - 2.0),
                egui::Align2::CENTER_BOTTOM,
                count.to_string(),
                egui::FontId::proportional(12.0),
                egui::Color32::WHITE,
            );
        }

        ui.allocate_rect(rect, egui::Sense::hover());
    }
}

impl eframe::App for HistogramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("sequence_panel")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.heading("Parameters");
                ui.label(egui::RichText::new(&self.title).monospace());
                ui.separator();

                ui.heading("Sequence");
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
                        for (i, value) in self.sequence.iter().enumerate() {
                            ui.label(format!("{:>5}: {}", i + 1, value));
                        }
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Frequency");
            if self.histogram.excluded() > 0 {
                ui.colored_label(
                    egui::Color32::YELLOW,
                    format!("{} values fall outside the bins", self.histogram.excluded()),
                );
            }
            ui.add_space(8.0);
            self.draw_bars(ui);
        });
    }
}

pub fn show(app: HistogramApp) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "LCG histogram",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
