//! Per-door open/close state and the swing tweens that drive it.
//!
//! Each door is independent. A toggle is accepted only from a resting
//! phase (`Closed` or `Open`); toggles that arrive mid-swing are dropped.

use glam::{Quat, Vec3};
use web_time::Duration;

use crate::animation::{AnimationHandle, AnimationScheduler, Tween};
use crate::options::DoorOptions;
use crate::scene::{NodeId, Scene};
use crate::util::easing::EasingFunction;

/// Which of the two doors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorSide {
    /// Driver-side door.
    Left,
    /// Passenger-side door.
    Right,
}

impl DoorSide {
    /// Both sides, left first.
    pub const BOTH: [DoorSide; 2] = [DoorSide::Left, DoorSide::Right];

    /// Dense index for per-side arrays.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Door lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorPhase {
    /// Resting shut.
    Closed,
    /// Swinging toward the open angle.
    Opening,
    /// Resting at the open angle.
    Open,
    /// Swinging back toward zero.
    Closing,
}

impl DoorPhase {
    /// Whether the door is mid-swing.
    #[must_use]
    pub fn is_moving(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

/// State of one door.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorState {
    /// Current swing angle in radians, always in `[0, open_angle]`.
    pub current_angle: f32,
    /// Angle the door is heading toward (0 or the open angle).
    pub target_angle: f32,
    /// Lifecycle phase.
    pub phase: DoorPhase,
    animation: Option<AnimationHandle>,
}

impl DoorState {
    const CLOSED: Self = Self {
        current_angle: 0.0,
        target_angle: 0.0,
        phase: DoorPhase::Closed,
        animation: None,
    };

    /// Whether the door rests open or is on its way there.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.phase, DoorPhase::Open | DoorPhase::Opening)
    }
}

/// Outcome of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoorToggle {
    /// A swing started toward `target_angle`.
    Started {
        /// Swing tween handle.
        handle: AnimationHandle,
        /// Destination angle in radians.
        target_angle: f32,
    },
    /// The door is already swinging; nothing changed.
    IgnoredInFlight,
}

/// State machine for both doors.
#[derive(Debug, Clone)]
pub struct DoorStateMachine {
    states: [DoorState; 2],
    open_angle: f32,
    duration: Duration,
    easing: EasingFunction,
    hinge_axis: Vec3,
    mirror_right: bool,
}

impl DoorStateMachine {
    /// Both doors closed, swing parameters from `options`.
    #[must_use]
    pub fn from_options(options: &DoorOptions) -> Self {
        let hinge_axis = Vec3::from(options.hinge_axis).try_normalize().unwrap_or_else(|| {
            log::warn!("door hinge axis {:?} is degenerate, using +Y", options.hinge_axis);
            Vec3::Y
        });
        Self {
            states: [DoorState::CLOSED; 2],
            open_angle: options.open_angle_deg.to_radians(),
            duration: Duration::from_millis(u64::from(options.duration_ms)),
            easing: options.easing,
            hinge_axis,
            mirror_right: options.mirror_right,
        }
    }

    /// Current state of one door.
    #[must_use]
    pub fn state(&self, side: DoorSide) -> &DoorState {
        &self.states[side.index()]
    }

    /// Fully open swing angle in radians.
    #[must_use]
    pub fn open_angle(&self) -> f32 {
        self.open_angle
    }

    /// Close both doors immediately. Used when a new scene is attached.
    pub fn reset(&mut self) {
        self.states = [DoorState::CLOSED; 2];
    }

    /// Start opening a closed door or closing an open one.
    pub fn toggle(
        &mut self,
        side: DoorSide,
        scheduler: &mut AnimationScheduler,
    ) -> DoorToggle {
        let open_angle = self.open_angle;
        let state = &mut self.states[side.index()];
        let (phase, target_angle) = match state.phase {
            DoorPhase::Closed => (DoorPhase::Opening, open_angle),
            DoorPhase::Open => (DoorPhase::Closing, 0.0),
            DoorPhase::Opening | DoorPhase::Closing => {
                log::debug!("{side:?} door is {:?}, toggle ignored", state.phase);
                return DoorToggle::IgnoredInFlight;
            }
        };

        let tween = Tween::new(
            state.current_angle,
            target_angle,
            self.duration,
            self.easing,
        );
        let handle = scheduler.start_door(side, tween);
        state.phase = phase;
        state.target_angle = target_angle;
        state.animation = Some(handle);
        log::info!("{side:?} door {phase:?}");
        DoorToggle::Started {
            handle,
            target_angle,
        }
    }

    /// Apply one swing sample: update the door state and rotate its pivot.
    /// Samples for a swing this machine no longer tracks are ignored.
    /// Returns `true` if the sample was applied.
    pub fn apply(
        &mut self,
        side: DoorSide,
        handle: AnimationHandle,
        angle: f32,
        finished: bool,
        pivot: Option<(&mut Scene, NodeId)>,
    ) -> bool {
        let rotation = self.rotation_for(side, angle);
        let state = &mut self.states[side.index()];
        if state.animation != Some(handle) {
            return false;
        }
        state.current_angle = angle;
        if finished {
            state.current_angle = state.target_angle;
            state.animation = None;
            state.phase = match state.phase {
                DoorPhase::Opening => DoorPhase::Open,
                DoorPhase::Closing => DoorPhase::Closed,
                resting => resting,
            };
            log::info!("{side:?} door {:?}", state.phase);
        }
        if let Some((scene, node)) = pivot {
            scene.set_rotation(node, rotation);
        }
        true
    }

    /// Pivot rotation for a swing angle. The right door turns the other way
    /// when mirrored so both doors open outward.
    #[must_use]
    pub fn rotation_for(&self, side: DoorSide, angle: f32) -> Quat {
        let signed = match side {
            DoorSide::Right if self.mirror_right => -angle,
            _ => angle,
        };
        Quat::from_axis_angle(self.hinge_axis, signed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Animated;
    use crate::scene::Transform;

    fn machine() -> (DoorStateMachine, AnimationScheduler) {
        (
            DoorStateMachine::from_options(&DoorOptions::default()),
            AnimationScheduler::new(),
        )
    }

    /// Run the scheduler until idle, returning each angle seen per side.
    fn run(
        doors: &mut DoorStateMachine,
        scheduler: &mut AnimationScheduler,
    ) -> [Vec<f32>; 2] {
        let mut seen = [Vec::new(), Vec::new()];
        for _ in 0..1000 {
            for sample in scheduler.advance(1.0 / 60.0) {
                if let Animated::DoorAngle { side, angle } = sample.value {
                    if doors.apply(side, sample.handle, angle, sample.finished, None) {
                        seen[side.index()].push(angle);
                    }
                }
            }
            if scheduler.is_idle() {
                break;
            }
        }
        seen
    }

    #[test]
    fn open_swing_is_monotonic_and_exact() {
        let (mut doors, mut scheduler) = machine();
        let open = doors.open_angle();
        assert!(matches!(
            doors.toggle(DoorSide::Left, &mut scheduler),
            DoorToggle::Started { .. }
        ));
        assert_eq!(doors.state(DoorSide::Left).phase, DoorPhase::Opening);

        let [left, right] = run(&mut doors, &mut scheduler);
        assert!(left.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(left.last().copied(), Some(open));
        assert!(right.is_empty());

        let state = doors.state(DoorSide::Left);
        assert_eq!(state.phase, DoorPhase::Open);
        assert_eq!(state.current_angle, open);
        assert_eq!(doors.state(DoorSide::Right), &DoorState::CLOSED);
    }

    #[test]
    fn close_swing_returns_exactly_to_zero() {
        let (mut doors, mut scheduler) = machine();
        let _ = doors.toggle(DoorSide::Right, &mut scheduler);
        let _ = run(&mut doors, &mut scheduler);
        let _ = doors.toggle(DoorSide::Right, &mut scheduler);
        assert_eq!(doors.state(DoorSide::Right).phase, DoorPhase::Closing);

        let [_, right] = run(&mut doors, &mut scheduler);
        assert!(right.windows(2).all(|w| w[1] <= w[0]));
        let state = doors.state(DoorSide::Right);
        assert_eq!(state.phase, DoorPhase::Closed);
        assert_eq!(state.current_angle, 0.0);
    }

    #[test]
    fn toggle_mid_swing_is_ignored() {
        let (mut doors, mut scheduler) = machine();
        let _ = doors.toggle(DoorSide::Left, &mut scheduler);
        let _ = scheduler.advance(0.1);
        assert_eq!(
            doors.toggle(DoorSide::Left, &mut scheduler),
            DoorToggle::IgnoredInFlight
        );
        assert_eq!(scheduler.active_count(), 1);
        assert_eq!(doors.state(DoorSide::Left).phase, DoorPhase::Opening);
    }

    #[test]
    fn doors_swing_concurrently() {
        let (mut doors, mut scheduler) = machine();
        let _ = doors.toggle(DoorSide::Left, &mut scheduler);
        let _ = doors.toggle(DoorSide::Right, &mut scheduler);
        assert_eq!(scheduler.active_count(), 2);
        let _ = run(&mut doors, &mut scheduler);
        assert!(doors.state(DoorSide::Left).is_open());
        assert!(doors.state(DoorSide::Right).is_open());
    }

    #[test]
    fn apply_rotates_pivot_with_mirrored_right_door() {
        let (mut doors, mut scheduler) = machine();
        let mut scene = Scene::new();
        let pivot = scene.add_group("door_pivot_right", None, Transform::IDENTITY).unwrap();

        let DoorToggle::Started { handle, target_angle } =
            doors.toggle(DoorSide::Right, &mut scheduler)
        else {
            panic!("toggle from closed must start");
        };
        assert!(doors.apply(
            DoorSide::Right,
            handle,
            target_angle,
            true,
            Some((&mut scene, pivot)),
        ));

        let rotation = scene.node(pivot).unwrap().transform.rotation;
        let (axis, angle) = rotation.to_axis_angle();
        assert!((angle - target_angle).abs() < 1e-5);
        assert!(axis.abs_diff_eq(-Vec3::Y, 1e-5));
    }

    #[test]
    fn stale_samples_are_ignored() {
        let (mut doors, mut scheduler) = machine();
        let stray = scheduler.start_door(
            DoorSide::Left,
            Tween::new(0.0, 1.0, Duration::ZERO, EasingFunction::Linear),
        );
        assert!(!doors.apply(DoorSide::Left, stray, 1.0, true, None));
        assert_eq!(doors.state(DoorSide::Left), &DoorState::CLOSED);
    }

    #[test]
    fn reset_closes_everything() {
        let (mut doors, mut scheduler) = machine();
        let _ = doors.toggle(DoorSide::Left, &mut scheduler);
        doors.reset();
        assert_eq!(doors.state(DoorSide::Left), &DoorState::CLOSED);
    }
}
