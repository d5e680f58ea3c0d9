//! Integration tests for apron-output.

mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{ConflictRow, ScheduleRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn schedule_row(flight_id: &str, sequence_index: u32) -> ScheduleRow {
        ScheduleRow {
            flight_id: flight_id.to_string(),
            sequence_index,
            node: sequence_index,
            unix_time_secs: 1_700_000_000 + sequence_index as i64 * 60,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("schedule.csv").exists());
        assert!(dir.path().join("conflicts.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("schedule.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["flight_id", "sequence_index", "node", "unix_time_secs"]);
    }

    #[test]
    fn csv_schedule_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![schedule_row("AB100", 0), schedule_row("AB100", 1)];
        w.write_schedule_rows(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("schedule.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 2);
        assert_eq!(&read_rows[0][0], "AB100");
        assert_eq!(&read_rows[1][1], "1");
    }

    #[test]
    fn csv_conflict_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = ConflictRow {
            conflict_id: 0,
            kind: "NodeOvertake".to_string(),
            severity: "Blocking".to_string(),
            node: 5,
            flight_a: "AB100".to_string(),
            flight_b: "AB200".to_string(),
            time_a_unix_secs: 1000,
            time_b_unix_secs: 1010,
        };
        w.write_conflict_rows(std::slice::from_ref(&row)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("conflicts.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][1], "NodeOvertake");
        assert_eq!(&read_rows[0][4], "AB100");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_rows_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_schedule_rows(&[]).unwrap();
    }
}

mod observer_tests {
    use tempfile::TempDir;

    use apron_core::{CostWeights, EdgeKind, NodeId, Point2D, Timestamp};
    use apron_graph::{GraphBuildOptions, GraphBuilder, PolylineFeature};
    use apron_schedule::{Flight, OperationKind};
    use apron_scheduler::{Scheduler, SchedulingStrategy};

    use crate::csv::CsvWriter;
    use crate::observer::ScheduleOutputObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn scheduler_run_writes_schedule_rows() {
        let line = PolylineFeature::new(
            EdgeKind::NetworkRoad,
            vec![Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0)],
        );
        let (graph, _) = GraphBuilder::new().build(&[], &[vec![line]], &GraphBuildOptions::default());

        let scheduler = Scheduler::new(&graph, CostWeights::default(), SchedulingStrategy::FirstComeFirstServed);
        let flights = vec![Flight::new("AB100", OperationKind::Arrival, NodeId(0), NodeId(1), Timestamp(1000))];

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = ScheduleOutputObserver::new(writer);
        scheduler.run(flights, &mut obs);

        assert!(obs.take_error().is_none(), "no write errors expected");
        obs.into_writer().finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("schedule.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2); // two waypoints: node 0, node 1
        assert_eq!(&rows[0][0], "AB100");
    }
}
