//! Property-based tests for the robot state machine.
//!
//! These tests use proptest to verify the movement and rotation laws
//! across many randomly generated planes, positions and headings.

use gridbot::core::{Coordinate, Direction, Plane, Robot, RobotError};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_direction()(variant in 0..4usize) -> Direction {
        Direction::CLOCKWISE[variant]
    }
}

prop_compose! {
    fn arbitrary_plane()(width in 0..20u32, height in 0..20u32) -> Plane {
        Plane::new(width, height)
    }
}

prop_compose! {
    fn plane_and_inside_point()(plane in arbitrary_plane())
        (x in 0..=plane.width() as i32, y in 0..=plane.height() as i32, plane in Just(plane))
        -> (Plane, Coordinate) {
        (plane, Coordinate::new(x, y))
    }
}

proptest! {
    #[test]
    fn contains_matches_bounds(plane in arbitrary_plane(), x in -30..30i32, y in -30..30i32) {
        let inside = (0..=plane.width() as i32).contains(&x)
            && (0..=plane.height() as i32).contains(&y);
        prop_assert_eq!(plane.contains(Coordinate::new(x, y)), inside);
    }

    #[test]
    fn place_succeeds_iff_contained(
        plane in arbitrary_plane(),
        x in -30..30i32,
        y in -30..30i32,
        direction in arbitrary_direction(),
    ) {
        let coordinate = Coordinate::new(x, y);
        match Robot::place(&plane, coordinate, direction) {
            Ok(robot) => {
                let placement = robot.placement().unwrap();
                prop_assert!(plane.contains(coordinate));
                prop_assert_eq!(placement.coordinate(), coordinate);
                prop_assert_eq!(placement.direction(), direction);
            }
            Err(error) => {
                prop_assert!(!plane.contains(coordinate));
                prop_assert_eq!(error, RobotError::OutOfBounds { plane });
            }
        }
    }

    #[test]
    fn move_advances_one_unit_or_is_rejected(
        (plane, coordinate) in plane_and_inside_point(),
        direction in arbitrary_direction(),
    ) {
        let robot = Robot::place(&plane, coordinate, direction).unwrap();
        let placement = robot.placement().unwrap();

        match placement.advance(&plane) {
            Ok(moved) => {
                let dx = moved.coordinate().x - coordinate.x;
                let dy = moved.coordinate().y - coordinate.y;
                prop_assert_eq!((dx, dy), direction.delta());
                prop_assert_eq!(moved.direction(), direction);
                prop_assert!(plane.contains(moved.coordinate()));
            }
            Err(error) => {
                prop_assert_eq!(error, RobotError::BlockedByBoundary);
                prop_assert!(!plane.contains(coordinate.step(direction)));
            }
        }
    }

    #[test]
    fn left_then_right_is_identity(
        (plane, coordinate) in plane_and_inside_point(),
        direction in arbitrary_direction(),
    ) {
        let robot = Robot::place(&plane, coordinate, direction).unwrap();
        let placement = *robot.placement().unwrap();

        prop_assert_eq!(placement.turn_left().turn_right(), placement);
        prop_assert_eq!(placement.turn_right().turn_left(), placement);
    }

    #[test]
    fn four_rights_make_a_full_turn(direction in arbitrary_direction()) {
        let robot = Robot::place(&Plane::default(), Coordinate::new(2, 2), direction).unwrap();
        let placement = *robot.placement().unwrap();

        let spun = placement.turn_right().turn_right().turn_right().turn_right();
        prop_assert_eq!(spun, placement);
    }

    #[test]
    fn report_format_is_exact(
        (plane, coordinate) in plane_and_inside_point(),
        direction in arbitrary_direction(),
    ) {
        let robot = Robot::place(&plane, coordinate, direction).unwrap();
        let expected = format!("Output: {},{},{}", coordinate.x, coordinate.y, direction.as_str());

        prop_assert_eq!(robot.placement().unwrap().report(), expected);
    }

    #[test]
    fn robot_never_leaves_plane(
        (plane, coordinate) in plane_and_inside_point(),
        direction in arbitrary_direction(),
        moves in prop::collection::vec(0..3u8, 0..40),
    ) {
        let robot = Robot::place(&plane, coordinate, direction).unwrap();
        let mut placement = *robot.placement().unwrap();

        for op in moves {
            placement = match op {
                0 => placement.advance(&plane).unwrap_or(placement),
                1 => placement.turn_left(),
                _ => placement.turn_right(),
            };
            prop_assert!(plane.contains(placement.coordinate()));
        }
    }
}
