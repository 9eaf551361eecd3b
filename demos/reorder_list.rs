#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use egui_reorder::{
    Direction, GestureBackend, ReorderList, ReorderOptions, ReorderSession, show_preview,
};

#[derive(Clone, Debug)]
struct Animal {
    id: u32,
    name: &'static str,
}

struct App {
    animals: Vec<Animal>,
    photos: Vec<u32>,
    animals_session: ReorderSession,
    photos_session: ReorderSession,
    touch: bool,
}

impl App {
    fn sessions(touch: bool) -> (ReorderSession, ReorderSession) {
        let backend = GestureBackend::from_touch_screen(touch);
        let animals = ReorderSession::new(ReorderOptions {
            direction: Direction::Vertical,
            backend,
            debug_event_log: true,
            ..Default::default()
        });
        let photos = ReorderSession::new(ReorderOptions {
            direction: Direction::Horizontal,
            backend,
            item_spacing: Some(8.0),
            ..Default::default()
        });
        (animals, photos)
    }
}

impl Default for App {
    fn default() -> Self {
        let (animals_session, photos_session) = Self::sessions(false);
        Self {
            animals: ["Rex", "Mina", "Pixel", "Gribouille", "Tofu"]
                .into_iter()
                .zip(1..)
                .map(|(name, id)| Animal { id, name })
                .collect(),
            photos: (1..=6).collect(),
            animals_session,
            photos_session,
            touch: false,
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 520.0])
            .with_title("egui_reorder demo"),
        ..Default::default()
    };

    eframe::run_native(
        "egui_reorder demo",
        options,
        Box::new(|_cc| Ok(Box::new(App::default()))),
    )
}

fn card(ui: &mut egui::Ui, text: String, dimmed: bool) -> egui::Response {
    let frame = egui::Frame::group(ui.style());
    let response = frame
        .show(ui, |ui| {
            ui.set_min_width(140.0);
            let label = egui::Label::new(text).selectable(false);
            if dimmed {
                ui.add_enabled(false, label);
            } else {
                ui.add(label);
            }
        })
        .response;
    response.on_hover_cursor(egui::CursorIcon::Grab)
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("egui_reorder_demo_help").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Drag items to reorder them.");
                if ui.checkbox(&mut self.touch, "Touch backend (floating preview)").changed() {
                    let (animals, photos) = Self::sessions(self.touch);
                    self.animals_session = animals;
                    self.photos_session = photos;
                }
                let mut disabled = self.animals_session.is_disabled();
                if ui.checkbox(&mut disabled, "Disable animals").changed() {
                    self.animals_session.set_disabled(disabled);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Animals");
            let animals = ReorderList::new(&mut self.animals_session).show(
                ui,
                &mut self.animals,
                |animal| animal.id,
                |ui, animal, hints| card(ui, format!("#{} {}", animal.id, animal.name), hints.is_dragging),
            );
            if animals.reordered() {
                log::info!(
                    "animals: {:?}",
                    self.animals.iter().map(|a| a.name).collect::<Vec<_>>()
                );
            }
            let preview = animals.preview(&self.animals_session, &self.animals);
            show_preview(ctx, &self.animals_session, &preview, |ui, animal| {
                card(ui, format!("#{} {}", animal.id, animal.name), false)
            });

            ui.add_space(16.0);
            ui.heading("Photos");
            let photos = ReorderList::new(&mut self.photos_session).show(
                ui,
                &mut self.photos,
                |photo| *photo,
                |ui, photo, hints| card(ui, format!("photo {photo}"), hints.is_dragging),
            );
            let preview = photos.preview(&self.photos_session, &self.photos);
            show_preview(ctx, &self.photos_session, &preview, |ui, photo| {
                card(ui, format!("photo {photo}"), false)
            });

            ui.add_space(16.0);
            ui.collapsing("Session log (animals)", |ui| {
                ui.monospace(self.animals_session.debug_log_text());
            });
        });
    }
}
