//! Owner of every in-flight tween, advanced once per frame.
//!
//! Controllers start tweens through an injected `&mut AnimationScheduler`
//! and get back an [`AnimationHandle`]. Each frame the engine calls
//! [`AnimationScheduler::advance`] with the frame delta and routes the
//! resulting samples back to the controller that owns each track.

use super::tween::Tween;
use crate::camera::core::CameraPose;
use crate::doors::DoorSide;

/// Identifies one started tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationHandle(u64);

/// The value a track produced this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animated {
    /// Swing angle (radians, unsigned) of a door.
    DoorAngle {
        /// Which door.
        side: DoorSide,
        /// Angle away from closed.
        angle: f32,
    },
    /// Camera eye and look-at target.
    CameraPose(CameraPose),
}

/// One track's output for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSample {
    /// Track that produced the value.
    pub handle: AnimationHandle,
    /// Interpolated value.
    pub value: Animated,
    /// Whether this is the track's last sample (value is the exact end).
    pub finished: bool,
}

enum Track {
    Door { side: DoorSide, tween: Tween<f32> },
    Camera(Tween<CameraPose>),
}

impl Track {
    fn advance(&mut self, dt: f32) -> (Animated, bool) {
        match self {
            Track::Door { side, tween } => {
                let angle = tween.advance(dt);
                (
                    Animated::DoorAngle { side: *side, angle },
                    tween.is_finished(),
                )
            }
            Track::Camera(tween) => {
                let pose = tween.advance(dt);
                (Animated::CameraPose(pose), tween.is_finished())
            }
        }
    }
}

struct ActiveTween {
    handle: AnimationHandle,
    track: Track,
}

/// Collection of active tweens sharing one frame clock.
///
/// Tweens are independent: advancing one never affects another. There is
/// no cancellation; a started tween runs until it finishes.
#[derive(Default)]
pub struct AnimationScheduler {
    active: Vec<ActiveTween>,
    next_handle: u64,
}

impl AnimationScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, track: Track) -> AnimationHandle {
        let handle = AnimationHandle(self.next_handle);
        self.next_handle += 1;
        self.active.push(ActiveTween { handle, track });
        handle
    }

    /// Start a door swing track.
    pub fn start_door(
        &mut self,
        side: DoorSide,
        tween: Tween<f32>,
    ) -> AnimationHandle {
        self.push(Track::Door { side, tween })
    }

    /// Start a camera pose track.
    pub fn start_camera(&mut self, tween: Tween<CameraPose>) -> AnimationHandle {
        self.push(Track::Camera(tween))
    }

    /// Whether the track behind `handle` is still running.
    #[must_use]
    pub fn is_active(&self, handle: AnimationHandle) -> bool {
        self.active.iter().any(|a| a.handle == handle)
    }

    /// Number of running tracks.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Whether nothing is animating.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance every track by `dt` seconds, in start order.
    ///
    /// Finished tracks emit their exact end value with `finished = true`
    /// and are retired in the same call.
    pub fn advance(&mut self, dt: f32) -> Vec<AnimationSample> {
        let mut samples = Vec::with_capacity(self.active.len());
        self.active.retain_mut(|active| {
            let (value, finished) = active.track.advance(dt);
            samples.push(AnimationSample {
                handle: active.handle,
                value,
                finished,
            });
            !finished
        });
        samples
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use web_time::Duration;

    use super::*;
    use crate::util::easing::EasingFunction;

    fn door_tween(to: f32, ms: u64) -> Tween<f32> {
        Tween::new(0.0, to, Duration::from_millis(ms), EasingFunction::Linear)
    }

    #[test]
    fn handles_are_unique() {
        let mut s = AnimationScheduler::new();
        let a = s.start_door(DoorSide::Left, door_tween(1.0, 100));
        let b = s.start_door(DoorSide::Right, door_tween(1.0, 100));
        assert_ne!(a, b);
        assert_eq!(s.active_count(), 2);
    }

    #[test]
    fn finished_tracks_retire_with_exact_value() {
        let mut s = AnimationScheduler::new();
        let h = s.start_door(DoorSide::Left, door_tween(2.0, 100));
        let first = s.advance(0.05);
        assert_eq!(first.len(), 1);
        assert!(!first[0].finished);
        assert!(s.is_active(h));

        let last = s.advance(0.05);
        assert_eq!(
            last[0].value,
            Animated::DoorAngle {
                side: DoorSide::Left,
                angle: 2.0
            }
        );
        assert!(last[0].finished);
        assert!(!s.is_active(h));
        assert!(s.is_idle());
        assert!(s.advance(0.05).is_empty());
    }

    #[test]
    fn concurrent_tracks_are_independent() {
        let mut s = AnimationScheduler::new();
        let short = s.start_door(DoorSide::Left, door_tween(1.0, 100));
        let pose = CameraPose {
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
        };
        let long = s.start_camera(Tween::new(
            pose,
            CameraPose {
                eye: Vec3::ONE,
                target: Vec3::X,
            },
            Duration::from_millis(400),
            EasingFunction::Linear,
        ));

        let samples = s.advance(0.1);
        assert_eq!(samples.len(), 2);
        assert!(samples.iter().any(|x| x.handle == short && x.finished));
        assert!(samples.iter().any(|x| x.handle == long && !x.finished));
        assert!(s.is_active(long));
        assert_eq!(s.active_count(), 1);
    }
}
