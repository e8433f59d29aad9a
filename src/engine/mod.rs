//! The showroom engine: owns every piece of interactive state and runs the
//! per-frame loop.

pub mod command;
mod frame;
mod input;
pub mod renderer;
mod scene_management;

use std::sync::mpsc::Receiver;

use glam::{UVec2, Vec3};

pub use self::frame::FrameReport;
pub use self::input::ClickOutcome;
use self::renderer::Renderer;
use crate::animation::AnimationScheduler;
use crate::camera::{Camera, CameraTransition, OrbitControls};
use crate::doors::DoorStateMachine;
use crate::error::ShowroomError;
use crate::material::MaterialLibrary;
use crate::options::Options;
use crate::picking::HitTester;
use crate::scene::roles::RoleTable;
use crate::scene::Scene;
use crate::util::frame_timing::FrameTiming;

/// A scene arriving from a loader thread.
pub type PendingScene = Receiver<Result<Scene, ShowroomError>>;

/// Interactive car viewer core.
///
/// # Construction
///
/// [`ShowroomEngine::new`] starts with an empty scene, the camera at the
/// far preset, both doors closed, and both shared materials created from
/// options. Attach a car with [`attach_scene`](Self::attach_scene) or hand
/// a loader channel to [`load_scene`](Self::load_scene).
///
/// # Interaction
///
/// Pointer, keyboard, and panel actions arrive as
/// [`ShowroomCommand`](command::ShowroomCommand)s through
/// [`execute`](Self::execute). Clicks are hit-tested immediately; the
/// resulting door or camera tweens are advanced by the frame loop.
///
/// # Frame loop
///
/// Call [`tick`](Self::tick) once per display refresh, or
/// [`frame`](Self::frame) with an explicit delta. Each frame polls a
/// pending load, advances orbit damping, advances every tween, then draws.
pub struct ShowroomEngine<R: Renderer> {
    /// Runtime options the engine was built from.
    options: Options,
    /// The mounted scene graph (empty until a load completes).
    scene: Scene,
    /// Typed node lookup built once per attached scene.
    roles: RoleTable,
    /// Shared body and glass materials.
    materials: MaterialLibrary,
    /// Active perspective camera.
    camera: Camera,
    /// Damped drag/scroll orbit.
    orbit: OrbitControls,
    /// Near/far walk controller.
    camera_transition: CameraTransition,
    /// Left and right door state.
    doors: DoorStateMachine,
    /// Every in-flight tween.
    scheduler: AnimationScheduler,
    /// Click → node resolution.
    hit_tester: HitTester,
    /// Frame clock; the only reader of wall time.
    frame_timing: FrameTiming,
    /// Drawing backend.
    renderer: R,
    /// Loader channel still waiting for a scene.
    pending_scene: Option<PendingScene>,
}

// =============================================================================
// Core
// =============================================================================

impl<R: Renderer> ShowroomEngine<R> {
    /// Engine for a `width` × `height` canvas drawing through `renderer`.
    #[must_use]
    pub fn new(options: Options, renderer: R, width: u32, height: u32) -> Self {
        let aspect = if width > 0 && height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
        let camera = Camera::from_options(&options.camera, aspect);
        let orbit = OrbitControls::new(camera.target, &options.camera);
        log::info!(
            "showroom engine created ({width}x{height}, {} fps target)",
            options.frame.target_fps
        );

        Self {
            scene: Scene::new(),
            roles: RoleTable::default(),
            materials: MaterialLibrary::from_options(&options.materials),
            camera_transition: CameraTransition::from_options(&options.camera),
            doors: DoorStateMachine::from_options(&options.doors),
            scheduler: AnimationScheduler::new(),
            hit_tester: HitTester::new(width, height),
            frame_timing: FrameTiming::new(options.frame.target_fps),
            pending_scene: None,
            camera,
            orbit,
            renderer,
            options,
        }
    }
}

// =============================================================================
// Accessors
// =============================================================================

impl<R: Renderer> ShowroomEngine<R> {
    /// Options the engine was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The mounted scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Typed node lookup for the mounted scene.
    #[must_use]
    pub fn roles(&self) -> &RoleTable {
        &self.roles
    }

    /// Shared body and glass materials.
    #[must_use]
    pub fn materials(&self) -> &MaterialLibrary {
        &self.materials
    }

    /// The active camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Near/far walk controller.
    #[must_use]
    pub fn camera_transition(&self) -> &CameraTransition {
        &self.camera_transition
    }

    /// Door state for both sides.
    #[must_use]
    pub fn doors(&self) -> &DoorStateMachine {
        &self.doors
    }

    /// The animation scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    /// The drawing backend.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Current canvas size in pixels.
    #[must_use]
    pub fn viewport(&self) -> UVec2 {
        self.hit_tester.viewport()
    }

    /// Point the orbit controls revolve around.
    #[must_use]
    pub fn orbit_target(&self) -> Vec3 {
        self.orbit.target
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// Whether a loader channel is still outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending_scene.is_some()
    }
}
