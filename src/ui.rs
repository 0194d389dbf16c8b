// src/ui.rs

//! egui front end: labels, the orientation canvas, and the two tick sources.

use std::time::Instant;

use eframe::egui;
use rand::rngs::ThreadRng;

use crate::clock::ClockState;
use crate::color::Rgb;
use crate::core::ClockError;
use crate::core::clock_constants::{CLOCK_TICK_PERIOD, COLOR_TICK_PERIOD};
use crate::core::display_constants::{
    ARROW_STROKE_WIDTH, CANVAS_SIZE, CIRCLE_STROKE_WIDTH, CLOCK_FONT_SIZE, ZONE_FONT_SIZE,
};
use crate::render::ArrowGeometry;
use crate::schedule::PeriodicTask;

fn to_color32(color: Rgb) -> egui::Color32 {
    let [r, g, b] = color.to_rgb8();
    egui::Color32::from_rgb(r, g, b)
}

fn draw_orientation(painter: &egui::Painter, rect: egui::Rect, geometry: &ArrowGeometry) {
    let origin = rect.min;
    let center = origin + egui::vec2(geometry.center[0], geometry.center[1]);
    let [dx, dy] = geometry.direction();

    painter.circle_stroke(
        center,
        geometry.radius,
        egui::Stroke::new(CIRCLE_STROKE_WIDTH, egui::Color32::WHITE),
    );
    painter.arrow(
        center,
        egui::vec2(dx, dy),
        egui::Stroke::new(ARROW_STROKE_WIDTH, egui::Color32::WHITE),
    );
}

pub struct ChromaticClockApp {
    state: ClockState,
    clock_task: PeriodicTask,
    color_task: PeriodicTask,
    rng: ThreadRng,
}

impl ChromaticClockApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, ClockError> {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut rng = rand::rng();
        let state = ClockState::new(&mut rng)?;
        let now = Instant::now();
        log::info!(
            "clock started: clock tick every {:?}, color tick every {:?}",
            CLOCK_TICK_PERIOD,
            COLOR_TICK_PERIOD
        );

        Ok(Self {
            state,
            clock_task: PeriodicTask::new("clock", CLOCK_TICK_PERIOD, now),
            color_task: PeriodicTask::new("color", COLOR_TICK_PERIOD, now),
            rng,
        })
    }

    /// Runs whichever ticks are due. Each tick body completes before the next
    /// one starts.
    fn run_due_ticks(&mut self, now: Instant) {
        if self.clock_task.poll(now) {
            if let Err(e) = self.state.clock_tick(&chrono::Local::now(), &mut self.rng) {
                log::error!("clock tick failed, keeping previous target: {}", e);
            }
        }
        if self.color_task.poll(now) {
            let color = self.state.color_tick();
            log::trace!("display color {}", color);
        }
    }
}

impl eframe::App for ChromaticClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.run_due_ticks(now);

        let reading = self.state.reading();
        let display = to_color32(self.state.display_color());
        let geometry = ArrowGeometry::from_state(&self.state.quantum_state(), CANVAS_SIZE);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(reading.zone_label())
                        .size(ZONE_FONT_SIZE)
                        .color(display),
                );
                ui.label(egui::RichText::new(&reading.time_text).size(CLOCK_FONT_SIZE));

                let (response, painter) = ui.allocate_painter(
                    egui::vec2(CANVAS_SIZE[0], CANVAS_SIZE[1]),
                    egui::Sense::hover(),
                );
                draw_orientation(&painter, response.rect, &geometry);
            });
        });

        let wait = self.clock_task.remaining(now).min(self.color_task.remaining(now));
        ctx.request_repaint_after(wait);
    }
}
