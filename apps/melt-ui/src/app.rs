use std::time::Instant;

use melt_chart::{ChartConfig, MeltChart};

use crate::demo::demo_proteins;
use crate::surface::EguiSurface;

pub struct MeltApp {
    chart: MeltChart<EguiSurface>,
}

impl MeltApp {
    pub fn new() -> Self {
        let config = ChartConfig {
            width: 640.0,
            height: 440.0,
            axes_visible: true,
            ..ChartConfig::default()
        };
        let mut chart = MeltChart::new(config, EguiSurface::new());
        if let Err(e) = chart.add(demo_proteins()) {
            eprintln!("demo data rejected: {e}");
        }
        Self { chart }
    }

    fn color32(color: melt_core::Hsl, opacity: f64) -> egui::Color32 {
        let [r, g, b] = color.to_rgb8();
        egui::Color32::from_rgba_unmultiplied(r, g, b, (opacity.clamp(0.0, 1.0) * 255.0) as u8)
    }

    fn draw_axes(&self, painter: &egui::Painter, origin: egui::Pos2, now: Instant) {
        let opacity = self.chart.surface().axes_opacity_at(now);
        if opacity <= 0.0 {
            return;
        }
        let scales = self.chart.scales();
        let color = Self::color32(melt_core::Hsl::new(0.0, 0.0, 0.35), opacity);
        let stroke = egui::Stroke::new(1.0, color);
        let font = egui::FontId::proportional(10.0);

        let x_range = scales.x().range();
        let y_range = scales.y().range();
        let baseline = origin.y + y_range[0] as f32;

        // X axis with temperature ticks along the bottom.
        painter.line_segment(
            [
                egui::pos2(origin.x + x_range[0] as f32, baseline),
                egui::pos2(origin.x + x_range[1] as f32, baseline),
            ],
            stroke,
        );
        for tick in scales.ticks_x() {
            let x = origin.x + scales.x().project(tick) as f32;
            painter.line_segment(
                [egui::pos2(x, baseline), egui::pos2(x, baseline + 4.0)],
                stroke,
            );
            painter.text(
                egui::pos2(x, baseline + 6.0),
                egui::Align2::CENTER_TOP,
                format!("{tick:.0}"),
                font.clone(),
                color,
            );
        }

        // Y axis with ratio ticks on the left.
        painter.line_segment(
            [
                egui::pos2(origin.x, origin.y + y_range[1] as f32),
                egui::pos2(origin.x, baseline),
            ],
            stroke,
        );
        for tick in scales.ticks_y() {
            let y = origin.y + scales.y().project(tick) as f32;
            painter.line_segment(
                [egui::pos2(origin.x - 4.0, y), egui::pos2(origin.x, y)],
                stroke,
            );
            painter.text(
                egui::pos2(origin.x - 6.0, y),
                egui::Align2::RIGHT_CENTER,
                format!("{tick:.1}"),
                font.clone(),
                color,
            );
        }
    }
}

impl eframe::App for MeltApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Toggle axes").clicked() {
                    self.chart.toggle_axes();
                }
                if ui.button("Toggle average").clicked() {
                    self.chart.toggle_average(None);
                }
                if ui.button("Rescale 30\u{2013}80").clicked() {
                    self.chart.rescale(Some(30.0), Some(80.0));
                }
                if ui.button("Rescale 37\u{2013}65").clicked() {
                    self.chart.rescale(Some(37.0), Some(65.0));
                }
                ui.label(format!("{} curve(s)", self.chart.store().len()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let cfg = self.chart.config();
            let size = egui::vec2(cfg.width as f32, cfg.height as f32);
            let margin = cfg.margin;
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());

            // Paths and axes live in plot-area coordinates; offset by margins.
            let origin = egui::pos2(
                response.rect.min.x + margin.left as f32,
                response.rect.min.y + margin.top as f32,
            );

            let now = Instant::now();
            self.draw_axes(&painter, origin, now);

            for path in self.chart.surface().frame_paths(now) {
                if path.points.len() < 2 {
                    continue;
                }
                let points: Vec<egui::Pos2> = path
                    .points
                    .iter()
                    .map(|p| egui::pos2(origin.x + p[0] as f32, origin.y + p[1] as f32))
                    .collect();
                let stroke =
                    egui::Stroke::new(path.width as f32, Self::color32(path.color, path.opacity));
                painter.add(egui::Shape::line(points, stroke));
            }

            let domain = self.chart.scales().x().domain();
            ui.label(format!(
                "Temperature domain {:.0}\u{2013}{:.0} \u{00b0}C",
                domain[0], domain[1]
            ));

            if self.chart.surface().is_animating(now) {
                ctx.request_repaint();
            }
        });
    }
}
