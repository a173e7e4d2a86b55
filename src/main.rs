//! Pin inputs demo
//!
//! Shows one input widget per composite pin type the way a node's parameter
//! panel would, and logs every value the widgets send downstream.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use eframe::egui;
use log::{info, warn};
use rand::Rng;

use pin_inputs::constants::demo;
use pin_inputs::{get_input_widget, PinType, PinValue, SharedPinWidget, WidgetOptions};

type EventLog = Rc<RefCell<VecDeque<String>>>;

/// One pin row in the demo panel
struct PinRow {
    pin_type: PinType,
    widget: SharedPinWidget,
    blocked: bool,
}

struct PinInputsDemo {
    rows: Vec<PinRow>,
    events: EventLog,
}

impl PinInputsDemo {
    fn new() -> Self {
        let events: EventLog = Rc::new(RefCell::new(VecDeque::new()));
        let mut rows = Vec::new();

        for pin_type in PinType::ALL {
            let sink = events.clone();
            let setter = Box::new(move |value: PinValue| {
                let json = serde_json::to_string(&value).unwrap_or_else(|e| e.to_string());
                let entry = format!(
                    "{} {} <- {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    value.pin_type(),
                    json
                );
                let mut sink = sink.borrow_mut();
                sink.push_front(entry);
                sink.truncate(demo::MAX_LOG_ENTRIES);
            });

            match get_input_widget(
                pin_type.identifier(),
                setter,
                PinValue::zero(pin_type),
                WidgetOptions::default(),
            ) {
                Ok(widget) => rows.push(PinRow {
                    pin_type,
                    widget: SharedPinWidget::new(widget),
                    blocked: false,
                }),
                Err(e) => warn!("Skipping {}: {}", pin_type, e),
            }
        }

        info!("Created {} pin input widgets", rows.len());
        Self { rows, events }
    }

    fn randomize(row: &PinRow) {
        let mut rng = rand::rng();
        let count = row.pin_type.descriptor().field_count();
        let components: Vec<f64> = (0..count)
            .map(|_| rng.random_range(-demo::RANDOM_RANGE..=demo::RANDOM_RANGE))
            .collect();

        let result = PinValue::from_components(row.pin_type, &components)
            .and_then(|value| row.widget.set_widget_value(&value));
        if let Err(e) = result {
            warn!("Failed to push value into {}: {}", row.pin_type, e);
        }
    }
}

impl eframe::App for PinInputsDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("event_log")
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.heading("Data setter calls");
                if ui.button("Clear").clicked() {
                    self.events.borrow_mut().clear();
                }
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for entry in self.events.borrow().iter() {
                        ui.monospace(entry);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Pin Inputs");
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                for row in &mut self.rows {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.strong(row.pin_type.identifier());
                            if ui.button("Randomize").clicked() {
                                Self::randomize(row);
                            }
                            if ui.button("Reset").clicked() {
                                row.widget.reset_to_default();
                            }
                            if ui.checkbox(&mut row.blocked, "Block signals").changed() {
                                row.widget.block_widget_signals(row.blocked);
                            }
                        });
                        row.widget.ui(ui);
                    });
                }
            });
        });
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(demo::WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Pin Inputs",
        options,
        Box::new(|_cc| Ok(Box::new(PinInputsDemo::new()))),
    )
}
