//! Unit tests for apron-core.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, FlightId, NodeId};

    #[test]
    fn node_id_invalid_is_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn edge_id_index_roundtrip() {
        let e = EdgeId(7);
        assert_eq!(e.index(), 7);
    }

    #[test]
    fn flight_id_from_str() {
        let a: FlightId = "DAL123".into();
        let b = FlightId::new("DAL123");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "DAL123");
    }
}

#[cfg(test)]
mod geo {
    use crate::geo::{polyline_length_m, Point2D};

    #[test]
    fn distance_is_euclidean() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_eq!(a.distance_m(b), 5.0);
    }

    #[test]
    fn cell_truncates_not_rounds() {
        let p = Point2D::new(1.9, -1.1);
        assert_eq!(p.cell(), (1, -2));
    }

    #[test]
    fn polyline_length_sums_segments() {
        let pts = [
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 4.0),
            Point2D::new(3.0, 10.0),
        ];
        assert_eq!(polyline_length_m(&pts), 11.0);
    }

    #[test]
    fn polyline_length_empty_is_zero() {
        assert_eq!(polyline_length_m(&[]), 0.0);
        assert_eq!(polyline_length_m(&[Point2D::new(0.0, 0.0)]), 0.0);
    }
}

#[cfg(test)]
mod cost {
    use crate::cost::{edge_cost, travel_time_s, CostWeights};

    #[test]
    fn defaults_match_contract() {
        let w = CostWeights::default();
        assert_eq!(w.w_d, 1.0);
        assert_eq!(w.w_t, 1.0);
        assert_eq!(w.w_f, 0.5);
        assert_eq!(w.s_a, 15.0);
    }

    #[test]
    fn cost_formula_exact() {
        let w = CostWeights::default();
        // cost = 1*100 + 1*10 + 0.5*(0.1*100 + 0.05*10) = 100 + 10 + 0.5*10.5 = 115.25
        let c = edge_cost(100.0, 10.0, &w);
        assert!((c - 115.25).abs() < 1e-9);
    }

    #[test]
    fn travel_time_uses_slower_of_cap_and_aircraft_speed() {
        // Edge cap 10 m/s, aircraft nominal 15 m/s -> uses 10 m/s (slower).
        assert_eq!(travel_time_s(100.0, 10.0, 15.0), 10.0);
        // Edge cap 20 m/s, aircraft nominal 15 m/s -> uses 15 m/s (slower).
        assert!((travel_time_s(150.0, 20.0, 15.0) - 10.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod time {
    use crate::time::{parse_timestamp, Timestamp};

    #[test]
    fn epoch_seconds_parses() {
        let t = parse_timestamp("1700000000").unwrap();
        assert_eq!(t, Timestamp(1_700_000_000));
    }

    #[test]
    fn rfc3339_parses() {
        let t = parse_timestamp("2023-11-14T22:13:20+00:00").unwrap();
        assert_eq!(t, Timestamp(1_700_000_000));
    }

    #[test]
    fn garbage_is_parse_error() {
        assert!(parse_timestamp("not-a-time").is_err());
    }

    #[test]
    fn shift_and_abs_diff() {
        let a = Timestamp(100);
        let b = a.shift(45);
        assert_eq!(b.0, 145);
        assert_eq!(b.abs_diff(a), 45);
        assert_eq!(b - a, 45);
    }
}
