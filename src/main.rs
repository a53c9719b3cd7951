// src/main.rs
use log::error;
use nannou::prelude::*;
use std::sync::OnceLock;
use std::time::Instant;

use triball::{
    config::Config,
    controllers::{AnimationController, Repaint},
    draw::NannouSurface,
};

// Loaded and validated before the nannou app starts
static CONFIG: OnceLock<Config> = OnceLock::new();

struct Model {
    controller: AnimationController,
    last_update: Instant,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Config::load() {
        Ok(config) => {
            let _ = CONFIG.set(config);
        }
        Err(err) => {
            error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    }

    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = CONFIG.get_or_init(Config::default);

    app.new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .build()
        .expect("Failed to create window");

    // Nothing moves until the first tap
    app.set_loop_mode(LoopMode::Wait);

    // Layout is fixed from the initial window size
    let bounds = app.window_rect();
    let controller = AnimationController::new(config, bounds.w(), bounds.h())
        .expect("Config was validated at startup");

    Model {
        controller,
        last_update: Instant::now(),
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    if model.controller.handle_tap() {
        // Don't count the idle time before the tap towards the first tick
        model.last_update = Instant::now();
        app.set_loop_mode(LoopMode::refresh_sync());
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let dt = now - model.last_update;
    model.last_update = now;

    if let Some(Repaint::Settle) = model.controller.advance(dt) {
        // Final frame is drawn by the view call that follows this update
        app.set_loop_mode(LoopMode::Wait);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let mut surface = NannouSurface::new(
        &draw,
        app.window_rect(),
        model.controller.pin_params().clone(),
    );
    model.controller.render(&mut surface);

    if let Err(err) = draw.to_frame(app, &frame) {
        error!("Failed to draw frame: {:?}", err);
    }
}
