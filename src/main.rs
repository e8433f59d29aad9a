//! Headless demo driver for the showroom controller.

use std::path::Path;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use glam::Vec2;
use showroom::doors::DoorSide;
use showroom::engine::renderer::NullRenderer;
use showroom::input::{InputEvent, InputProcessor, MouseButton};
use showroom::options::Options;
use showroom::panel::HeadlessPanel;
use showroom::scene::demo::demo_car;
use showroom::{ShowroomEngine, ShowroomError};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
/// Upper bound on frames spent waiting for one scripted step to settle.
const MAX_STEP_FRAMES: u32 = 10_000;

type Engine = ShowroomEngine<NullRenderer>;

fn load_options() -> Result<Options, ShowroomError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading options from {path}");
            Options::load(Path::new(&path))
        }
        None => Ok(Options::default()),
    }
}

/// Tick the engine at its target rate until nothing is loading or
/// animating.
fn settle(engine: &mut Engine) {
    let mut frames = 0;
    while frames < MAX_STEP_FRAMES {
        match engine.tick() {
            Some(_) => frames += 1,
            None => thread::sleep(Duration::from_millis(1)),
        }
        if !engine.is_loading() && engine.scheduler().is_idle() {
            return;
        }
    }
    log::warn!("step did not settle after {MAX_STEP_FRAMES} frames");
}

/// Canvas pixel over the center of the named mesh, if it is on screen.
fn pixel_over(engine: &Engine, name: &str) -> Option<Vec2> {
    let scene = engine.scene();
    let id = scene.find_by_name(name)?;
    let bounds = scene.node(id)?.mesh()?.bounds;
    let world = scene.world_transform(id).transform_point3(bounds.center());
    let ndc = engine.camera().project(world)?;
    let size = engine.viewport().as_vec2();
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * size.x,
        (1.0 - ndc.y) * 0.5 * size.y,
    ))
}

/// Feed a press/release pair at `pixel` through the input processor.
fn click(engine: &mut Engine, input: &mut InputProcessor, pixel: Vec2) {
    let events = [
        InputEvent::CursorMoved {
            x: pixel.x,
            y: pixel.y,
        },
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        },
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        },
    ];
    for event in events {
        if let Some(command) = input.handle_event(event) {
            engine.execute(command);
        }
    }
}

fn press(engine: &mut Engine, input: &InputProcessor, key: &str) {
    match input.handle_key_press(key) {
        Some(command) => engine.execute(command),
        None => log::warn!("no binding for {key}"),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let mut input = InputProcessor::with_key_bindings(options.keybindings.clone());
    let mut engine = ShowroomEngine::new(options, NullRenderer::new(), WIDTH, HEIGHT);

    let mut panel = HeadlessPanel::new();
    let (body, _glass) = engine.bind_panel(&mut panel);

    if let Err(e) = engine.load_scene_with(demo_car) {
        log::error!("could not start scene loader: {e}");
        return ExitCode::FAILURE;
    }
    settle(&mut engine);
    if engine.roles().is_empty() {
        log::error!("no car in the scene; nothing to show");
        return ExitCode::FAILURE;
    }

    let door_pixel = pixel_over(&engine, &engine.options().scene.left_door_panel);
    match door_pixel {
        Some(pixel) => click(&mut engine, &mut input, pixel),
        None => log::warn!("left door is off screen"),
    }
    settle(&mut engine);

    press(&mut engine, &input, "KeyN");
    settle(&mut engine);
    press(&mut engine, &input, "KeyF");
    settle(&mut engine);

    let _ = panel.set_number(body, "metalness", 0.8);
    let _ = engine.tick();

    log::info!(
        "session done: {} frames, {:.0} fps, left door {:?}, camera {:?}, body metalness {}",
        engine.renderer().frames(),
        engine.fps(),
        engine.doors().state(DoorSide::Left).phase,
        engine.camera_transition().mode(),
        engine.materials().body().get().metalness,
    );
    ExitCode::SUCCESS
}
