//! Rotation controller: the single writer of the carousel yaw.
//!
//! Three sources compete for the angle: a live drag, the snap that follows
//! a release, and programmatic navigation. Exactly one is authoritative at
//! a time. Starting a drag discards any in-flight animation, and starting an
//! animation replaces the previous one from the current (possibly
//! mid-animation) angle.

use std::f32::consts::TAU;

use super::animation::RotationAnimation;
use super::state::CarouselState;
use super::velocity::VelocityTracker;
use crate::options::RotationOptions;
use crate::util::angle::{closest_angle_delta, slot_angle, FRONT_ANGLE};
use crate::util::frame::Frame;

/// Owns [`CarouselState`] and applies drag, snap, navigation and per-frame
/// animation to it.
#[derive(Debug, Clone)]
pub struct RotationController {
    state: CarouselState,
    velocity: VelocityTracker,
    options: RotationOptions,
    model_count: usize,
    /// Slot the in-flight animation is heading to.
    target_index: Option<usize>,
}

impl RotationController {
    /// Controller for a ring of `model_count` models, starting at yaw 0.
    #[must_use]
    pub fn new(options: RotationOptions, model_count: usize) -> Self {
        Self {
            state: CarouselState::default(),
            velocity: VelocityTracker::new(options.velocity_window_ms),
            options,
            model_count,
            target_index: None,
        }
    }

    /// Read-only view of the yaw state.
    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Current yaw in radians.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.state.current_angle
    }

    /// Whether an eased rotation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.animation.is_some()
    }

    /// Number of slots on the ring.
    #[must_use]
    pub fn model_count(&self) -> usize {
        self.model_count
    }

    /// Replace the tuning parameters. Takes effect for the next drag or
    /// animation.
    pub fn set_options(&mut self, options: RotationOptions) {
        self.velocity.set_window(options.velocity_window_ms);
        self.options = options;
    }

    /// Change the number of slots. Any in-flight animation is dropped
    /// because its target slot no longer exists.
    pub fn set_model_count(&mut self, model_count: usize) {
        self.model_count = model_count;
        self.state.animation = None;
        self.target_index = None;
    }

    /// Yaw that puts slot `index` in front of the viewer.
    #[must_use]
    pub fn front_angle_for(&self, index: usize) -> f32 {
        FRONT_ANGLE - slot_angle(index, self.model_count)
    }

    /// Slot the carousel is at or heading to: the animation target while
    /// one is in flight, otherwise the slot nearest the current yaw.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        if self.state.animation.is_some() {
            if let Some(index) = self.target_index {
                return Some(index);
            }
        }
        self.nearest_index()
    }

    /// Slot nearest the current yaw.
    #[must_use]
    pub fn nearest_index(&self) -> Option<usize> {
        let slot = self.slot_coordinate()?;
        Some(self.normalize_slot(slot.round() as i64))
    }

    /// Start dragging at pointer `x`. Cancels any in-flight animation; the
    /// angle reached so far becomes the baseline.
    pub fn begin_drag(&mut self, x: f32, time_ms: f64) {
        self.state.observe(time_ms);
        if self.state.animation.take().is_some() {
            log::debug!(
                "drag cancelled animation at {:.3} rad",
                self.state.current_angle
            );
        }
        self.target_index = None;
        self.state.is_dragging = true;
        self.state.drag_anchor_x = x;
        self.velocity.clear();
        self.velocity.push(x, time_ms);
    }

    /// Move the drag to pointer `x`. Ignored unless dragging.
    pub fn update_drag(&mut self, x: f32, time_ms: f64) {
        if !self.state.is_dragging {
            return;
        }
        self.state.observe(time_ms);
        let delta = (x - self.state.drag_anchor_x) * self.options.drag_sensitivity;
        self.state.current_angle += delta;
        self.state.drag_anchor_x = x;
        self.velocity.push(x, time_ms);
    }

    /// Release the drag and snap to a slot.
    ///
    /// A release faster than the flick threshold snaps to the next slot in
    /// the flick direction; otherwise to the nearest slot. Returns the slot
    /// the carousel is now animating to, or `None` when not dragging or the
    /// ring is empty.
    pub fn end_drag(&mut self, time_ms: f64) -> Option<usize> {
        if !self.state.is_dragging {
            return None;
        }
        self.state.observe(time_ms);
        self.state.is_dragging = false;

        let velocity =
            self.velocity.velocity(time_ms) * self.options.drag_sensitivity;
        self.velocity.clear();

        let slot = self.slot_coordinate()?;
        // Yaw grows as the slot coordinate shrinks.
        let k = if velocity.abs() > self.options.flick_velocity_threshold {
            if velocity > 0.0 {
                slot.ceil() as i64 - 1
            } else {
                slot.floor() as i64 + 1
            }
        } else {
            slot.round() as i64
        };

        let step = TAU / self.model_count as f32;
        let target = FRONT_ANGLE - k as f32 * step;
        let index = self.normalize_slot(k);
        log::debug!(
            "release at {:.3} rad, velocity {velocity:.5} rad/ms -> slot {index}",
            self.state.current_angle
        );
        self.animate_to(target, Some(index));
        Some(index)
    }

    /// End a drag without snapping (surface detached mid-gesture).
    pub fn abort_drag(&mut self) {
        self.state.is_dragging = false;
        self.velocity.clear();
    }

    /// Animate along the shortest path until slot `index` faces the viewer.
    ///
    /// Out-of-range indices wrap. Returns the normalized index, or `None`
    /// (without touching the state) for an empty ring or while a drag holds
    /// the carousel.
    pub fn rotate_to_index(&mut self, index: usize) -> Option<usize> {
        if self.model_count == 0 {
            return None;
        }
        if self.state.is_dragging {
            log::debug!("ignoring rotate_to_index({index}) during drag");
            return None;
        }
        let index = index % self.model_count;
        let desired = self.front_angle_for(index);
        let current = self.state.current_angle;
        let target = current + closest_angle_delta(current, desired);
        self.animate_to(target, Some(index));
        Some(index)
    }

    /// Jump to slot `index` without animating.
    pub fn reset_to_index(&mut self, index: usize) -> Option<usize> {
        if self.model_count == 0 {
            return None;
        }
        let index = index % self.model_count;
        self.state.animation = None;
        self.target_index = None;
        self.state.current_angle = self.front_angle_for(index);
        Some(index)
    }

    /// Advance one rendered frame.
    ///
    /// An in-flight animation sets the yaw from the frame timestamp and is
    /// dropped once complete. Otherwise, when not dragging, idle
    /// auto-rotation is applied.
    pub fn tick(&mut self, frame: Frame) {
        self.state.observe(frame.now_ms);

        if let Some(animation) = self.state.animation {
            self.state.current_angle = animation.sample(frame.now_ms);
            if animation.is_complete(frame.now_ms) {
                self.state.animation = None;
                self.target_index = None;
            }
            return;
        }

        if !self.state.is_dragging && self.options.auto_rotate_speed != 0.0 {
            self.state.current_angle +=
                self.options.auto_rotate_speed * frame.delta_secs;
        }
    }

    fn animate_to(&mut self, target: f32, index: Option<usize>) {
        let animation = RotationAnimation::new(
            self.state.current_angle,
            target,
            self.state.clock_ms,
            self.options.animation_duration_ms,
            self.options.easing,
        );
        log::debug!(
            "animating {:.3} -> {:.3} rad over {} ms",
            animation.start_angle,
            animation.target_angle,
            animation.duration_ms
        );
        self.state.animation = Some(animation);
        self.target_index = index;
    }

    /// Position of the current yaw in slot units (slot k faces the viewer
    /// at `FRONT_ANGLE - k * step`).
    fn slot_coordinate(&self) -> Option<f32> {
        if self.model_count == 0 {
            return None;
        }
        let step = TAU / self.model_count as f32;
        Some((FRONT_ANGLE - self.state.current_angle) / step)
    }

    fn normalize_slot(&self, k: i64) -> usize {
        k.rem_euclid(self.model_count as i64) as usize
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;
    use crate::util::angle::wrap_signed;

    fn controller(n: usize) -> RotationController {
        RotationController::new(RotationOptions::default(), n)
    }

    fn frame(now_ms: f64) -> Frame {
        Frame::at(now_ms, 1.0 / 60.0)
    }

    #[test]
    fn drag_adds_scaled_delta() {
        let mut c = controller(3);
        c.begin_drag(100.0, 0.0);
        c.update_drag(140.0, 10.0);
        assert!((c.angle() - 0.1).abs() < 1e-6);
        assert_eq!(c.state().drag_anchor_x(), 140.0);
        c.update_drag(120.0, 20.0);
        assert!((c.angle() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn update_without_drag_is_ignored() {
        let mut c = controller(3);
        c.update_drag(500.0, 10.0);
        assert_eq!(c.angle(), 0.0);
        assert_eq!(c.end_drag(20.0), None);
    }

    #[test]
    fn slow_release_snaps_to_nearest_slot() {
        let mut c = controller(4);
        let _ = c.reset_to_index(0);
        c.begin_drag(0.0, 0.0);
        // 0.3 rad over a long, slow drag
        for step in 1..=60 {
            c.update_drag(step as f32 * 2.0, f64::from(step) * 20.0);
        }
        c.update_drag(120.0, 1400.0);
        assert_eq!(c.end_drag(1400.0), Some(0));
        let anim = c.state().animation().copied().unwrap();
        assert!((anim.target_angle - FRONT_ANGLE).abs() < 1e-6);
    }

    #[test]
    fn flick_snaps_to_adjacent_slot_in_flick_direction() {
        let mut c = controller(3);
        let _ = c.reset_to_index(0);
        c.begin_drag(0.0, 0.0);
        // 0.4 px/ms * 0.0025 rad/px = 0.001 rad/ms, ending 0.3 rad past slot 0
        for step in 1..=30 {
            c.update_drag(step as f32 * 4.0, f64::from(step) * 10.0);
        }
        assert!((c.angle() - (FRONT_ANGLE + 0.3)).abs() < 1e-4);
        assert_eq!(c.nearest_index(), Some(0));

        assert_eq!(c.end_drag(300.0), Some(2));
        let anim = c.state().animation().copied().unwrap();
        assert!((anim.target_angle - (FRONT_ANGLE + TAU / 3.0)).abs() < 1e-5);
    }

    #[test]
    fn negative_flick_moves_the_other_way() {
        let mut c = controller(3);
        let _ = c.reset_to_index(0);
        c.begin_drag(0.0, 0.0);
        for step in 1..=10 {
            c.update_drag(-(step as f32) * 4.0, f64::from(step) * 10.0);
        }
        assert_eq!(c.end_drag(100.0), Some(1));
    }

    #[test]
    fn rotate_to_index_takes_shortest_path() {
        let mut c = controller(4);
        let _ = c.reset_to_index(0);
        for index in 0..4 {
            let _ = c.rotate_to_index(index).unwrap();
            let anim = c.state().animation().copied().unwrap();
            let travel = anim.target_angle - anim.start_angle;
            assert!(travel.abs() <= PI + 1e-5, "travel {travel} for {index}");
            let facing = wrap_signed(anim.target_angle - c.front_angle_for(index));
            assert!(facing.abs() < 1e-5);
        }
    }

    #[test]
    fn rotate_to_index_wraps_out_of_range() {
        let mut c = controller(3);
        assert_eq!(c.rotate_to_index(7), Some(1));
    }

    #[test]
    fn empty_ring_is_a_no_op() {
        let mut c = controller(0);
        let before = c.state().clone();
        assert_eq!(c.rotate_to_index(0), None);
        assert_eq!(c.rotate_to_index(5), None);
        assert_eq!(c.reset_to_index(1), None);
        assert_eq!(c.nearest_index(), None);
        assert_eq!(c.state(), &before);

        c.begin_drag(0.0, 0.0);
        c.update_drag(40.0, 10.0);
        assert_eq!(c.end_drag(20.0), None);
        assert!(!c.state().is_dragging());
        assert!(!c.is_animating());
    }

    #[test]
    fn tick_completes_animation_on_target() {
        let mut c = controller(4);
        c.tick(frame(0.0));
        let _ = c.rotate_to_index(1);
        let target = c.state().animation().unwrap().target_angle;
        c.tick(frame(225.0));
        assert!(c.is_animating());
        c.tick(frame(450.0));
        assert!(!c.is_animating());
        assert_eq!(c.angle(), target);
    }

    #[test]
    fn begin_drag_cancels_animation_without_jump() {
        let mut c = controller(4);
        c.tick(frame(0.0));
        let _ = c.rotate_to_index(2);
        c.tick(frame(100.0));
        let mid = c.angle();
        c.begin_drag(50.0, 110.0);
        assert!(!c.is_animating());
        assert_eq!(c.angle(), mid);
        c.tick(frame(500.0));
        assert_eq!(c.angle(), mid);
    }

    #[test]
    fn auto_rotation_only_when_idle() {
        let options = RotationOptions {
            auto_rotate_speed: 0.5,
            ..RotationOptions::default()
        };
        let mut c = RotationController::new(options, 3);
        c.tick(Frame::at(0.0, 2.0));
        assert!((c.angle() - 1.0).abs() < 1e-6);

        c.begin_drag(0.0, 0.0);
        c.tick(Frame::at(16.0, 2.0));
        assert!((c.angle() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn current_index_prefers_animation_target() {
        let mut c = controller(5);
        let _ = c.reset_to_index(0);
        let _ = c.rotate_to_index(3);
        assert_eq!(c.current_index(), Some(3));
        assert_eq!(c.nearest_index(), Some(0));
    }

    #[test]
    fn navigation_is_ignored_while_dragging() {
        let mut c = controller(3);
        let _ = c.reset_to_index(0);
        c.begin_drag(0.0, 0.0);
        assert_eq!(c.rotate_to_index(1), None);
        assert!(!c.is_animating());

        c.update_drag(200.0, 16.0);
        let dragged = c.angle();
        assert!((dragged - (FRONT_ANGLE + 0.5)).abs() < 1e-6);
        c.tick(frame(32.0));
        assert_eq!(c.angle(), dragged);

        let _ = c.end_drag(48.0);
        assert_eq!(c.rotate_to_index(1), Some(1));
    }
}
