use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Align, Context, Layout};

use crate::universe::{Universe, load_universe};

mod interaction;
mod render_utils;
mod sim;
mod view;

pub struct ConstellationApp {
    data_path: String,
    state: AppState,
    reload_rx: Option<Receiver<Result<Universe, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<Universe, String>>,
    },
    Ready(ViewModel),
    Error(String),
}

struct ViewModel {
    universe: Universe,
    scene: Option<sim::Scene>,
}

impl ViewModel {
    fn new(universe: Universe) -> Self {
        Self {
            universe,
            scene: None,
        }
    }

    fn show(&mut self, ctx: &Context, data_path: &str, reload_requested: &mut bool, is_loading: bool) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("constellation");
                    ui.separator();
                    ui.label(format!("data: {data_path}"));
                    ui.label(format!("skills: {}", self.universe.skill_count()));
                    ui.label(format!("projects: {}", self.universe.project_count()));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let reload_button =
                            ui.add_enabled(!is_loading, egui::Button::new("Reload universe"));
                        if reload_button.clicked() {
                            *reload_requested = true;
                        }
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                if is_loading {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading universe data...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                } else {
                    self.draw_scene(ui);
                }
            });
    }
}

impl ConstellationApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data_path: String) -> Self {
        let state = Self::start_load(data_path.clone());
        Self {
            data_path,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(data_path: String) -> Receiver<Result<Universe, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_universe(&data_path).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(data_path: String) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(data_path),
        }
    }
}

impl eframe::App for ConstellationApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(universe) => AppState::Ready(ViewModel::new(universe)),
                        Err(error) => AppState::Error(error),
                    });
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading universe data...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load universe data");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.data_path.clone()));
                    }
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(ctx, &self.data_path, &mut reload_requested, is_reloading);

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.data_path.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => {
                            transition = Some(match result {
                                Ok(universe) => AppState::Ready(ViewModel::new(universe)),
                                Err(error) => AppState::Error(error),
                            });
                        }
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition =
                                Some(AppState::Error("Background load worker disconnected".to_owned()));
                        }
                    }
                }
            }
        }

        if let Some(next_state) = transition {
            self.reload_rx = None;
            self.state = next_state;
        }
    }
}
