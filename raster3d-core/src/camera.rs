/// Camera pose and the controller that integrates held input into it
use crate::algebra::{direction, Mat4, Vec4};
use crate::transform::Transform;

/// Movement speed in units per second
pub const MOVE_SPEED: f32 = 3.0;
/// Turn speed in radians per second
pub const TURN_SPEED: f32 = 3.0;

/// Logical camera controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    LookUp,
    LookDown,
    LookLeft,
    LookRight,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::MoveForward,
        Action::MoveBack,
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
        Action::LookUp,
        Action::LookDown,
        Action::LookLeft,
        Action::LookRight,
    ];
}

/// Source of held-key state, polled once per frame
pub trait InputState {
    fn is_held(&self, action: Action) -> bool;
}

/// Camera orientation and position in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Per-axis angles in radians: x = pitch, y = yaw, z = roll
    pub rotation: Vec4,
    pub translation: Vec4,
}

impl CameraPose {
    pub fn origin() -> Self {
        Self {
            rotation: Vec4::zeros(),
            translation: Vec4::zeros(),
        }
    }

    /// The camera's own placement in the world, with unit scale
    pub fn model_matrix(&self) -> Mat4 {
        Transform::model_matrix(
            &self.rotation,
            &self.translation,
            &direction(1.0, 1.0, 1.0),
        )
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::origin()
    }
}

/// Owns the persistent camera pose and advances it once per frame
#[derive(Debug, Clone, Default)]
pub struct CameraController {
    pose: CameraPose,
}

impl CameraController {
    pub fn new(pose: CameraPose) -> Self {
        Self { pose }
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn reset(&mut self) {
        self.pose = CameraPose::origin();
    }

    /// Integrate one frame of held input over `dt` seconds.
    ///
    /// The movement delta is expressed in camera space and rotated by the
    /// orientation from before this frame's turn is applied.
    pub fn update(&mut self, dt: f32, input: &impl InputState) {
        let step = MOVE_SPEED * dt;
        let turn = TURN_SPEED * dt;

        let mut local = direction(0.0, 0.0, 0.0);
        if input.is_held(Action::MoveForward) {
            local.z -= step;
        }
        if input.is_held(Action::MoveBack) {
            local.z += step;
        }
        if input.is_held(Action::MoveLeft) {
            local.x -= step;
        }
        if input.is_held(Action::MoveRight) {
            local.x += step;
        }
        // Screen y runs down, so "up" is world -y.
        if input.is_held(Action::MoveUp) {
            local.y -= step;
        }
        if input.is_held(Action::MoveDown) {
            local.y += step;
        }

        let mut turn_delta = direction(0.0, 0.0, 0.0);
        if input.is_held(Action::LookLeft) {
            turn_delta.y += turn;
        }
        if input.is_held(Action::LookRight) {
            turn_delta.y -= turn;
        }
        if input.is_held(Action::LookUp) {
            turn_delta.x -= turn;
        }
        if input.is_held(Action::LookDown) {
            turn_delta.x += turn;
        }

        let orientation = Transform::rotation_matrix(&self.pose.rotation);
        self.pose.translation += orientation * local;
        self.pose.rotation += turn_delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Held(HashSet<Action>);

    impl Held {
        fn keys(actions: &[Action]) -> Self {
            Self(actions.iter().copied().collect())
        }
    }

    impl InputState for Held {
        fn is_held(&self, action: Action) -> bool {
            self.0.contains(&action)
        }
    }

    #[test]
    fn test_forward_one_second_moves_three_units() {
        let mut controller = CameraController::default();
        controller.update(1.0, &Held::keys(&[Action::MoveForward]));

        let pose = controller.pose();
        assert_eq!(pose.translation, direction(0.0, 0.0, -3.0));
        assert_eq!(pose.rotation, Vec4::zeros());
    }

    #[test]
    fn test_no_keys_leaves_pose_unchanged() {
        let start = CameraPose {
            rotation: direction(0.4, -2.0, 0.1),
            translation: direction(5.0, -1.5, 12.0),
        };
        let mut controller = CameraController::new(start);
        for dt in [0.0, 0.016, 1.0, 250.0] {
            controller.update(dt, &Held::keys(&[]));
            assert_eq!(*controller.pose(), start);
        }
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut controller = CameraController::default();
        let held = Held::keys(&[
            Action::MoveForward,
            Action::MoveBack,
            Action::MoveLeft,
            Action::MoveRight,
            Action::LookLeft,
            Action::LookRight,
        ]);
        controller.update(0.5, &held);
        assert_eq!(*controller.pose(), CameraPose::origin());
    }

    #[test]
    fn test_up_moves_towards_negative_y() {
        let mut controller = CameraController::default();
        controller.update(0.5, &Held::keys(&[Action::MoveUp]));
        assert_eq!(controller.pose().translation.y, -1.5);
    }

    #[test]
    fn test_look_keys_turn_pose() {
        let mut controller = CameraController::default();
        controller.update(0.5, &Held::keys(&[Action::LookLeft, Action::LookUp]));
        let rotation = controller.pose().rotation;
        assert_eq!(rotation.y, 1.5);
        assert_eq!(rotation.x, -1.5);
    }

    #[test]
    fn test_movement_follows_current_heading() {
        let start = CameraPose {
            rotation: direction(0.0, std::f32::consts::FRAC_PI_2, 0.0),
            translation: Vec4::zeros(),
        };
        let mut controller = CameraController::new(start);
        controller.update(1.0, &Held::keys(&[Action::MoveForward]));

        // Facing -x after a quarter turn left.
        let moved = controller.pose().translation;
        assert!((moved - direction(-3.0, 0.0, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn test_turn_applies_after_movement() {
        let mut controller = CameraController::default();
        let held = Held::keys(&[Action::MoveForward, Action::LookLeft]);
        controller.update(0.5, &held);

        // Movement used the heading from before the turn.
        let moved = controller.pose().translation;
        assert!((moved - direction(0.0, 0.0, -1.5)).norm() < 1e-6);
        assert_eq!(controller.pose().rotation.y, 1.5);
    }

    #[test]
    fn test_rotation_is_not_clamped() {
        let mut controller = CameraController::default();
        for _ in 0..10 {
            controller.update(1.0, &Held::keys(&[Action::LookRight]));
        }
        assert!((controller.pose().rotation.y + 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_reset_returns_to_origin() {
        let mut controller = CameraController::default();
        controller.update(1.0, &Held::keys(&[Action::MoveRight, Action::LookDown]));
        assert_ne!(*controller.pose(), CameraPose::origin());
        controller.reset();
        assert_eq!(*controller.pose(), CameraPose::origin());
    }
}
