//! Walk-up / back-away camera transition.
//!
//! The camera rests in one of two modes. A request that does not match the
//! resting mode, or that arrives while a walk is still in flight, is
//! ignored; calling `move_near` twice therefore never starts a second
//! tween from a stale pose.

use web_time::Duration;

use super::core::{Camera, CameraPose};
use crate::animation::{AnimationHandle, AnimationScheduler, Tween};
use crate::options::CameraOptions;
use crate::util::easing::EasingFunction;

/// Resting camera mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMode {
    /// Backed away from the car.
    Far,
    /// Walked up to the car.
    Near,
}

impl CameraMode {
    /// The other mode.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Far => Self::Near,
            Self::Near => Self::Far,
        }
    }
}

/// Outcome of a near/far request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraRequest {
    /// A walk toward the requested mode started.
    Started(AnimationHandle),
    /// A walk is already in flight; nothing changed.
    IgnoredInFlight,
    /// The camera already rests in the requested mode; nothing changed.
    IgnoredWrongMode,
}

/// Drives the camera between the far and near presets.
#[derive(Debug, Clone)]
pub struct CameraTransition {
    mode: CameraMode,
    far: CameraPose,
    near: CameraPose,
    duration: Duration,
    easing: EasingFunction,
    in_flight: Option<(AnimationHandle, CameraMode)>,
}

impl CameraTransition {
    /// Controller resting at the far preset.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            mode: CameraMode::Far,
            far: CameraPose::from_arrays(options.far_eye, options.far_target),
            near: CameraPose::from_arrays(options.near_eye, options.near_target),
            duration: Duration::from_millis(u64::from(options.transition_ms)),
            easing: EasingFunction::Linear,
            in_flight: None,
        }
    }

    /// Resting mode. While a walk is in flight this is still the mode it
    /// started from.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Whether a walk is currently running.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Preset pose for `mode`.
    #[must_use]
    pub fn preset(&self, mode: CameraMode) -> CameraPose {
        match mode {
            CameraMode::Far => self.far,
            CameraMode::Near => self.near,
        }
    }

    /// Walk from the far preset up to the car.
    pub fn move_near(
        &mut self,
        camera: &Camera,
        scheduler: &mut AnimationScheduler,
    ) -> CameraRequest {
        self.request(CameraMode::Near, camera, scheduler)
    }

    /// Back away from the car to the far preset.
    pub fn move_far(
        &mut self,
        camera: &Camera,
        scheduler: &mut AnimationScheduler,
    ) -> CameraRequest {
        self.request(CameraMode::Far, camera, scheduler)
    }

    /// Request whichever walk is valid from the resting mode.
    pub fn toggle(
        &mut self,
        camera: &Camera,
        scheduler: &mut AnimationScheduler,
    ) -> CameraRequest {
        self.request(self.mode.opposite(), camera, scheduler)
    }

    fn request(
        &mut self,
        destination: CameraMode,
        camera: &Camera,
        scheduler: &mut AnimationScheduler,
    ) -> CameraRequest {
        if self.in_flight.is_some() {
            log::debug!("camera walk to {destination:?} ignored: already moving");
            return CameraRequest::IgnoredInFlight;
        }
        if self.mode == destination {
            log::debug!("camera walk to {destination:?} ignored: already there");
            return CameraRequest::IgnoredWrongMode;
        }

        // Start from where the camera actually is so an orbit made while
        // resting does not snap back before the walk begins.
        let tween = Tween::new(
            camera.pose(),
            self.preset(destination),
            self.duration,
            self.easing,
        );
        let handle = scheduler.start_camera(tween);
        self.in_flight = Some((handle, destination));
        log::info!("camera walking {:?} -> {destination:?}", self.mode);
        CameraRequest::Started(handle)
    }

    /// Apply one sample of this controller's walk. Samples from any other
    /// track are ignored. Returns `true` if the camera was written.
    pub fn apply(
        &mut self,
        handle: AnimationHandle,
        pose: CameraPose,
        finished: bool,
        camera: &mut Camera,
    ) -> bool {
        let Some((active, destination)) = self.in_flight else {
            return false;
        };
        if active != handle {
            return false;
        }
        camera.set_pose(pose);
        if finished {
            self.mode = destination;
            self.in_flight = None;
            log::info!("camera arrived at {destination:?}");
        }
        true
    }
}
