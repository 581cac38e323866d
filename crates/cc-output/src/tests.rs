//! Integration tests for cc-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use cc_core::SimConfig;
    use cc_sim::{ScriptedArrival, SimBuilder};

    use crate::csv::CsvWriter;
    use crate::observer::{SimOutputObserver, write_report};
    use crate::row::{CallRow, OccupancyRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_rows(dir: &TempDir, file: &str) -> Vec<Vec<String>> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("occupancy.csv").exists());
        assert!(dir.path().join("calls.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("occupancy.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["time", "busy_operators"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("calls.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["call_id", "priority", "arrival_time", "service_start_time", "departure_time", "wait_time"],
        );
    }

    #[test]
    fn unfinished_call_leaves_empty_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_calls(&[CallRow {
            call_id:            4,
            priority:           2,
            arrival_time:       9,
            service_start_time: None,
            departure_time:     None,
            wait_time:          None,
        }])
        .unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir, "calls.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][2], "9");
        assert_eq!(&rows[0][3], "");
        assert_eq!(&rows[0][5], "");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_occupancy(&[OccupancyRow { time: 0, busy_operators: 1 }]).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        assert_eq!(read_rows(&dir, "occupancy.csv").len(), 1);
    }

    #[test]
    fn observer_writes_scripted_run() {
        let config = SimConfig { num_operators: 1, horizon: 100, ..SimConfig::default() };
        let mut sim = SimBuilder::new(config)
            .scripted_arrivals(vec![ScriptedArrival::new(0, 1), ScriptedArrival::new(1, 0)])
            .build()
            .unwrap();

        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // Busy from 0 to 28; the handoff at 14 does not change occupancy.
        let occupancy = read_rows(&dir, "occupancy.csv");
        assert_eq!(occupancy, [["0", "1"], ["28", "0"]]);

        let calls = read_rows(&dir, "calls.csv");
        assert_eq!(calls.len(), 2);
        assert_eq!(&calls[1][3], "14"); // service_start_time
        assert_eq!(&calls[1][5], "13"); // wait_time
    }

    #[test]
    fn write_report_matches_observer_output() {
        let config = SimConfig { num_operators: 2, horizon: 120, ..SimConfig::default() };

        let streamed = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(streamed.path()).unwrap());
        let report = SimBuilder::new(config).build().unwrap().run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let batched = tmp();
        let mut w = CsvWriter::new(batched.path()).unwrap();
        write_report(&mut w, &report).unwrap();

        for file in ["occupancy.csv", "calls.csv"] {
            assert_eq!(read_rows(&streamed, file), read_rows(&batched, file), "{file}");
        }
        assert_eq!(read_rows(&batched, "calls.csv").len(), report.calls.len());
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use std::path::Path;

    use tempfile::TempDir;

    use cc_core::SimConfig;
    use cc_sim::{ScriptedArrival, SimBuilder};

    use crate::observer::SimOutputObserver;
    use crate::row::{CallRow, OccupancyRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn count(dir: &Path, table: &str) -> i64 {
        let conn = rusqlite::Connection::open(dir.join("output.db")).unwrap();
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0)).unwrap()
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_occupancy_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows = [
            OccupancyRow { time: 0,  busy_operators: 1 },
            OccupancyRow { time: 3,  busy_operators: 2 },
            OccupancyRow { time: 14, busy_operators: 1 },
        ];
        w.write_occupancy(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM occupancy", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_missing_times_stored_as_null() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_calls(&[CallRow {
            call_id:            0,
            priority:           1,
            arrival_time:       5,
            service_start_time: Some(7),
            departure_time:     None,
            wait_time:          Some(2),
        }])
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (start, departure, wait): (Option<i64>, Option<i64>, Option<i64>) = conn
            .query_row(
                "SELECT service_start_time, departure_time, wait_time FROM calls WHERE call_id = 0",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(start, Some(7));
        assert_eq!(departure, None);
        assert_eq!(wait, Some(2));
    }

    #[test]
    fn second_run_replaces_first() {
        let dir = tmp();
        for _ in 0..2 {
            let config = SimConfig { num_operators: 1, horizon: 100, ..SimConfig::default() };
            let mut sim = SimBuilder::new(config)
                .scripted_arrivals(vec![ScriptedArrival::new(0, 1), ScriptedArrival::new(1, 0)])
                .build()
                .unwrap();
            let mut obs = SimOutputObserver::new(SqliteWriter::new(dir.path()).unwrap());
            sim.run(&mut obs).unwrap();
            assert!(obs.take_error().is_none());
        }

        // One run's worth: busy at 0, idle at 28.
        assert_eq!(count(dir.path(), "occupancy"), 2);
        assert_eq!(count(dir.path(), "calls"), 2);
    }
}
