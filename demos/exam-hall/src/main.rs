use std::process::ExitCode;

use seatforge::prelude::*;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Sample exam
// ---------------------------------------------------------------------------

/// Two batches sharing a hall with aisles and a small zoned lab.
fn sample_exam() -> ExamConfig {
    let batches = vec![
        Batch::new("cse-2020", "20CS", "0001", "0060").with_exclusions(["20CS0013", "20CS0044"]),
        Batch::new("ece-2020", "20EC", "0001", "0045"),
        Batch::new("mech-2021", "21ME", "001", "030"),
    ];

    let mut hall = Room::new(6, 10)
        .with_name("Main Hall")
        .with_adjacency(true, 5, false);
    for row in 1..=6 {
        hall.block_seat(SeatPos::new(row, 1));
    }

    let mut lab = Room::new(4, 6)
        .with_name("Drawing Lab")
        .with_fill_strategy(FillStrategy::ColumnMajor)
        .with_adjacency(true, 3, true);
    for col in 1..=6 {
        lab.zone_seat(SeatPos::new(1, col), 2);
    }

    ExamConfig::new(batches, vec![hall, lab])
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn load(path: Option<String>) -> Result<ExamConfig, SeatforgeError> {
    match path {
        Some(path) => {
            tracing::info!(%path, "loading exam configuration");
            let bytes = std::fs::read(&path)?;
            Ok(JsonCodec.decode(&bytes)?)
        }
        None => Ok(sample_exam()),
    }
}

fn run() -> Result<(), SeatforgeError> {
    let config = load(std::env::args().nth(1))?;
    config.validate()?;

    let plan = SeatingEngine::new().compute(&config);
    let stats = plan.stats;

    eprintln!(
        "students: {}  raw capacity: {}  effective capacity: {}",
        stats.total_students, stats.total_raw_capacity, stats.total_effective_capacity
    );
    if stats.is_over_capacity() {
        eprintln!("warning: {} students will not get a seat", stats.overflow());
    }
    for summary in &plan.rooms {
        eprintln!(
            "room {} {:?}: {}/{} seats filled",
            summary.room, summary.name, summary.filled, summary.effective_capacity
        );
    }
    for unseated in &plan.unseated {
        eprintln!("unseated {}: {}", unseated.batch_id, unseated.count);
    }

    let bytes = JsonCodec.encode(&plan)?;
    println!("{}", String::from_utf8_lossy(&bytes));
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exam-hall failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_exam_is_valid() {
        assert!(sample_exam().validate().is_ok());
    }

    #[test]
    fn test_sample_exam_zones_hold_only_mech() {
        let plan = SeatingEngine::new().compute(&sample_exam());
        for col in 1..=6 {
            if let Some(seat) = plan.seat(1, 1, col) {
                assert_eq!(seat.batch_id, "mech-2021");
            }
        }
        assert!(plan.room_assignments(1).all(|(pos, a)| pos.row == 1 || a.batch_id != "mech-2021"));
    }

    #[test]
    fn test_sample_exam_round_trips_through_json() {
        let config = sample_exam();
        let bytes = JsonCodec.encode(&config).unwrap();
        let decoded: ExamConfig = JsonCodec.decode(&bytes).unwrap();
        assert_eq!(config, decoded);
    }
}
