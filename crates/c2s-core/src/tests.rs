//! Unit tests for c2s-core primitives.

#[cfg(test)]
mod geo {
    use crate::{Point, polyline_length};

    #[test]
    fn zero_distance() {
        let p = Point::new(12.5, -3.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn two_point_polyline_is_exact() {
        let shape = [Point::new(0.0, 0.0), Point::new(300.0, 0.0)];
        assert_eq!(polyline_length(&shape), 300.0);
    }

    #[test]
    fn multi_segment_polyline() {
        // 3-4-5 leg followed by a 10 m straight.
        let shape = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(13.0, 4.0),
        ];
        assert!((polyline_length(&shape) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_polylines() {
        assert_eq!(polyline_length(&[]), 0.0);
        assert_eq!(polyline_length(&[Point::new(1.0, 1.0)]), 0.0);
    }

    #[test]
    fn display_as_shape_pair() {
        assert_eq!(Point::new(-300.0, 0.5).to_string(), "-300,0.5");
    }
}

#[cfg(test)]
mod lane {
    use crate::invert_lane_index;

    #[test]
    fn inversion_maps_ends() {
        assert_eq!(invert_lane_index(0, 3), Some(2));
        assert_eq!(invert_lane_index(1, 3), Some(1));
        assert_eq!(invert_lane_index(2, 3), Some(0));
        assert_eq!(invert_lane_index(0, 1), Some(0));
    }

    #[test]
    fn inversion_is_involutive() {
        for count in 1..6 {
            for i in 0..count {
                let once = invert_lane_index(i, count).unwrap();
                assert_eq!(invert_lane_index(once, count), Some(i));
            }
        }
    }

    #[test]
    fn out_of_range_ordinal() {
        assert_eq!(invert_lane_index(3, 3), None);
        assert_eq!(invert_lane_index(0, 0), None);
    }
}

#[cfg(test)]
mod ids {
    use crate::{internal_edge_id, lane_id};

    #[test]
    fn lane_naming() {
        assert_eq!(lane_id("road_0_1_0", 2), "road_0_1_0_2");
    }

    #[test]
    fn internal_edge_naming() {
        let edge = internal_edge_id("intersection_1_1", 7);
        assert_eq!(edge, ":intersection_1_1_7");
        assert_eq!(lane_id(&edge, 0), ":intersection_1_1_7_0");
    }
}

#[cfg(test)]
mod direction {
    use crate::{CoreError, Direction};

    #[test]
    fn known_tags() {
        assert_eq!(Direction::from_tag("go_straight").unwrap(), Direction::Straight);
        assert_eq!(Direction::from_tag("turn_left").unwrap(), Direction::Left);
        assert_eq!(Direction::from_tag("turn_right").unwrap(), Direction::Right);
    }

    #[test]
    fn codes() {
        assert_eq!(Direction::Straight.as_code(), "s");
        assert_eq!(Direction::Left.as_code(), "l");
        assert_eq!(Direction::Right.to_string(), "r");
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let err = "u_turn".parse::<Direction>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownDirection(ref t) if t == "u_turn"));
    }
}

#[cfg(test)]
mod config {
    use crate::TranslateConfig;

    #[test]
    fn defaults() {
        let c = TranslateConfig::default();
        assert_eq!(c.internal_lane_speed, 3.93);
        assert_eq!(c.internal_lane_length, 2.19);
        assert_eq!(c.net_file, "network.net.xml");
        assert_eq!(c.route_file, "routes.rou.xml");
        assert_eq!(c.config_file, "simulation.sumocfg");
    }
}
