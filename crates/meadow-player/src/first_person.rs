//! First-person controller: mouse look, WASD walking, jumping and gravity.
//!
//! The controller is kinematic. Each step moves horizontally relative to the
//! current yaw, integrates vertical velocity under the effective gravity and
//! then resolves against the ground: anything below the surface is lifted onto
//! it, and a grounded player walking downhill stays attached within
//! [`SNAP_DISTANCE`]. With gravity switched off the player holds altitude and
//! cannot jump.

use glam::{Quat, Vec3};
use tracing::debug;

use crate::gravity::GravityState;
use crate::ground::GroundQuery;

/// Acceleration in units/s² per unit of configured gravity.
pub const GRAVITY_SCALE: f32 = 25.0;

/// Maximum drop a grounded player follows without becoming airborne.
pub const SNAP_DISTANCE: f32 = 0.2;

/// Movement intent for one step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveInput {
    /// `+1` forward, `-1` backward.
    pub forward: f32,
    /// `+1` right, `-1` left.
    pub strafe: f32,
    /// Jump requested this step.
    pub jump: bool,
}

/// Kinematic first-person player.
#[derive(Clone, Debug)]
pub struct FirstPersonController {
    /// Feet position in world units.
    pub position: Vec3,
    /// Horizontal rotation in radians. Positive yaw turns right, from -Z towards +X.
    pub yaw: f32,
    /// Vertical rotation in radians. Positive pitch looks up.
    pub pitch: f32,
    /// Maximum pitch magnitude in radians.
    pub pitch_limit: f32,
    /// Radians per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    /// Walk speed in units per second.
    pub speed: f32,
    /// Jump apex height in units.
    pub jump_height: f32,
    /// Vertical velocity in units per second (positive = up).
    pub vertical_velocity: f32,
    /// Standing on ground after the last step.
    pub grounded: bool,
    /// Switchable gravity.
    pub gravity: GravityState,
    /// Eye height above the feet.
    pub height: f32,
}

impl Default for FirstPersonController {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            pitch_limit: 89.0_f32.to_radians(),
            mouse_sensitivity: 0.003,
            speed: 7.0,
            jump_height: 1.5,
            vertical_velocity: 0.0,
            grounded: false,
            gravity: GravityState::new(0.7),
            height: 1.7,
        }
    }
}

impl FirstPersonController {
    /// Controller standing at `position` with default tuning.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// View rotation from yaw and pitch.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(-self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    /// Camera position: feet plus eye height.
    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::Y * self.height
    }

    /// Apply mouse delta to yaw and pitch, clamping pitch.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch = (self.pitch - dy * self.mouse_sensitivity)
            .clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Flip gravity and return whether it is now enabled.
    pub fn toggle_gravity(&mut self) -> bool {
        let enabled = self.gravity.toggle();
        if !enabled {
            self.vertical_velocity = 0.0;
        }
        debug!(enabled, "Gravity toggled");
        enabled
    }

    /// Unit horizontal direction for `input`, or zero.
    pub fn move_direction(&self, input: &MoveInput) -> Vec3 {
        let rotation = Quat::from_rotation_y(-self.yaw);
        let forward = rotation * Vec3::NEG_Z;
        let right = rotation * Vec3::X;
        (forward * input.forward + right * input.strafe).normalize_or_zero()
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, input: &MoveInput, ground: &impl GroundQuery, dt: f32) {
        self.position += self.move_direction(input) * self.speed * dt;

        let g = self.gravity.effective() * GRAVITY_SCALE;
        if g > 0.0 {
            if self.grounded && input.jump {
                self.vertical_velocity = (2.0 * g * self.jump_height).sqrt();
                self.grounded = false;
            } else if !self.grounded {
                self.vertical_velocity -= g * dt;
            }
        } else {
            self.vertical_velocity = 0.0;
        }
        self.position.y += self.vertical_velocity * dt;

        let Some(surface) = ground.ground_height(self.position.x, self.position.z) else {
            self.grounded = false;
            return;
        };

        let below = self.position.y <= surface;
        let snap = self.grounded
            && g > 0.0
            && self.vertical_velocity <= 0.0
            && self.position.y - surface <= SNAP_DISTANCE;

        if below || snap {
            self.position.y = surface;
            if self.vertical_velocity <= 0.0 {
                self.vertical_velocity = 0.0;
                self.grounded = true;
            } else {
                self.grounded = false;
            }
        } else {
            self.grounded = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ground::FlatGround;
    use std::f32::consts::FRAC_PI_2;

    const DT: f32 = 1.0 / 60.0;

    /// Ground sloping down along +X.
    struct Slope;

    impl GroundQuery for Slope {
        fn ground_height(&self, x: f32, _z: f32) -> Option<f32> {
            Some(-0.3 * x)
        }
    }

    /// Ground only where |x| < 5.
    struct Ledge;

    impl GroundQuery for Ledge {
        fn ground_height(&self, x: f32, _z: f32) -> Option<f32> {
            (x.abs() < 5.0).then_some(0.0)
        }
    }

    fn run(
        player: &mut FirstPersonController,
        input: MoveInput,
        ground: &impl GroundQuery,
        secs: f32,
    ) {
        let steps = (secs / DT).round() as usize;
        for _ in 0..steps {
            player.step(&input, ground, DT);
        }
    }

    #[test]
    fn test_falls_onto_ground() {
        let mut player = FirstPersonController::default();
        run(&mut player, MoveInput::default(), &FlatGround { height: 0.0 }, 1.0);
        assert_eq!(player.position.y, 0.0);
        assert!(player.grounded);
        assert_eq!(player.vertical_velocity, 0.0);
    }

    #[test]
    fn test_gravity_off_holds_altitude() {
        let mut player = FirstPersonController::default();
        assert!(!player.toggle_gravity());
        run(&mut player, MoveInput::default(), &FlatGround { height: 0.0 }, 1.0);
        assert_eq!(player.position.y, 1.0);
        assert!(!player.grounded);

        assert!(player.toggle_gravity());
        run(&mut player, MoveInput::default(), &FlatGround { height: 0.0 }, 1.0);
        assert_eq!(player.position.y, 0.0);
    }

    #[test]
    fn test_gravity_off_cannot_jump() {
        let mut player = FirstPersonController::at(Vec3::ZERO);
        run(&mut player, MoveInput::default(), &FlatGround { height: 0.0 }, 0.1);
        player.toggle_gravity();
        let jump = MoveInput {
            jump: true,
            ..Default::default()
        };
        run(&mut player, jump, &FlatGround { height: 0.0 }, 0.5);
        assert_eq!(player.position.y, 0.0);
    }

    #[test]
    fn test_gravity_off_still_lifted_out_of_ground() {
        let mut player = FirstPersonController::at(Vec3::new(0.0, -1.0, 0.0));
        player.toggle_gravity();
        player.step(&MoveInput::default(), &FlatGround { height: 0.5 }, DT);
        assert_eq!(player.position.y, 0.5);
    }

    #[test]
    fn test_jump_reaches_jump_height() {
        let mut player = FirstPersonController::at(Vec3::ZERO);
        let ground = FlatGround { height: 0.0 };
        player.step(&MoveInput::default(), &ground, DT);
        assert!(player.grounded);

        let jump = MoveInput {
            jump: true,
            ..Default::default()
        };
        player.step(&jump, &ground, DT);
        let mut apex = player.position.y;
        for _ in 0..120 {
            player.step(&MoveInput::default(), &ground, DT);
            apex = apex.max(player.position.y);
        }
        assert!(
            (apex - player.jump_height).abs() < 0.2,
            "Apex {apex} should be near {}",
            player.jump_height
        );
        assert!(player.grounded);
        assert_eq!(player.position.y, 0.0);
    }

    #[test]
    fn test_cannot_jump_midair() {
        let mut player = FirstPersonController::at(Vec3::new(0.0, 10.0, 0.0));
        let jump = MoveInput {
            jump: true,
            ..Default::default()
        };
        player.step(&jump, &FlatGround { height: 0.0 }, DT);
        assert!(player.vertical_velocity < 0.0);
    }

    #[test]
    fn test_walk_forward_along_neg_z() {
        let mut player = FirstPersonController::at(Vec3::ZERO);
        let input = MoveInput {
            forward: 1.0,
            ..Default::default()
        };
        run(&mut player, input, &FlatGround { height: 0.0 }, 1.0);
        assert!((player.position.z + 7.0).abs() < 1e-3);
        assert!(player.position.x.abs() < 1e-4);
    }

    #[test]
    fn test_walk_direction_follows_yaw() {
        let player = FirstPersonController {
            yaw: FRAC_PI_2,
            ..Default::default()
        };
        let dir = player.move_direction(&MoveInput {
            forward: 1.0,
            ..Default::default()
        });
        assert!(dir.x > 0.99);
    }

    #[test]
    fn test_diagonal_not_faster() {
        let player = FirstPersonController::default();
        let dir = player.move_direction(&MoveInput {
            forward: 1.0,
            strafe: 1.0,
            jump: false,
        });
        assert!((dir.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_stays_grounded_walking_downhill() {
        let mut player = FirstPersonController::at(Vec3::ZERO);
        player.step(&MoveInput::default(), &Slope, DT);
        assert!(player.grounded);

        player.yaw = FRAC_PI_2;
        let input = MoveInput {
            forward: 1.0,
            ..Default::default()
        };
        for _ in 0..60 {
            player.step(&input, &Slope, DT);
            assert!(player.grounded);
        }
        let surface = Slope.ground_height(player.position.x, 0.0).unwrap();
        assert!((player.position.y - surface).abs() < 1e-5);
    }

    #[test]
    fn test_falls_off_edge() {
        let mut player = FirstPersonController::at(Vec3::new(4.0, 0.0, 0.0));
        player.step(&MoveInput::default(), &Ledge, DT);
        player.yaw = FRAC_PI_2;
        let input = MoveInput {
            forward: 1.0,
            ..Default::default()
        };
        run(&mut player, input, &Ledge, 1.0);
        assert!(!player.grounded);
        assert!(player.position.y < -1.0);
    }

    #[test]
    fn test_pitch_clamps_at_limits() {
        let mut player = FirstPersonController::default();
        player.apply_mouse_delta(0.0, -1e6);
        assert!((player.pitch - player.pitch_limit).abs() < 1e-6);
        player.apply_mouse_delta(0.0, 1e6);
        assert!((player.pitch + player.pitch_limit).abs() < 1e-6);
    }

    #[test]
    fn test_eye_above_feet() {
        let player = FirstPersonController::at(Vec3::new(3.0, 2.0, -1.0));
        let eye = player.eye_position();
        assert!(eye.abs_diff_eq(Vec3::new(3.0, 3.7, -1.0), 1e-6));
    }

    #[test]
    fn test_mouse_right_turns_right() {
        let mut player = FirstPersonController::default();
        let forward = MoveInput {
            forward: 1.0,
            ..Default::default()
        };
        let strafe_right = MoveInput {
            strafe: 1.0,
            ..Default::default()
        };
        let right = player.move_direction(&strafe_right);
        let before = player.move_direction(&forward);

        player.apply_mouse_delta(300.0, 0.0);
        let after = player.move_direction(&forward);
        assert!(after.dot(right) > 0.5, "Forward {after} should swing towards {right}");
        assert!(after.dot(before) > 0.0);
    }

    #[test]
    fn test_mouse_left_turns_left() {
        let mut player = FirstPersonController::default();
        player.apply_mouse_delta(-300.0, 0.0);
        let after = player.move_direction(&MoveInput {
            forward: 1.0,
            ..Default::default()
        });
        assert!(after.x < -0.5);
    }

    #[test]
    fn test_view_rotation_matches_walk_direction() {
        let mut player = FirstPersonController::default();
        player.apply_mouse_delta(200.0, 0.0);
        let look = player.rotation() * Vec3::NEG_Z;
        let walk = player.move_direction(&MoveInput {
            forward: 1.0,
            ..Default::default()
        });
        assert!(look.abs_diff_eq(walk, 1e-5));
    }
}
