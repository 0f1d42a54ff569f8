//! Tests for chunk shape properties of the generic chunk sizer and temporal chunk refiner.
#![allow(missing_docs)]

use std::num::NonZeroU64;
use std::sync::Arc;

use cfchunk::diagnostics::LogDiagnostics;
use cfchunk::time::{Calendar, TimeCoordinate, TimeUnit, TimeUnits};
use cfchunk::{
    ChunkShapeCalculator, ChunkShapeError, ChunkShapeOptions, ChunkShapeTraits, Field,
    FieldTraits, InvalidArgumentError, compute_generic_chunk, compute_optimal_chunk,
};
use itertools::Itertools;

const SHAPES: [&[u64]; 7] = [
    &[512, 512, 256],
    &[1, 100, 100],
    &[1009],
    &[48, 100],
    &[1460, 1, 192, 288],
    &[365, 3, 7, 11],
    &[1_000_003, 2],
];

const VOLUMES: [f64; 5] = [4.0, 1000.0, 1_048_576.0, 4e6, 1e15];

fn hourly(num_values: u32) -> TimeCoordinate {
    TimeCoordinate::new(
        (0..num_values).map(f64::from).collect(),
        TimeUnits::new(TimeUnit::Hour, "2000-01-01 00:00:00"),
        Calendar::Standard,
    )
}

#[test]
fn generic_chunk_divides_shape() {
    for (shape, volume) in SHAPES.into_iter().cartesian_product(VOLUMES) {
        let chunk_shape = compute_generic_chunk(shape, volume, 4, 0.8).unwrap();
        assert_eq!(chunk_shape.len(), shape.len());
        assert!(
            chunk_shape.divides(shape),
            "{chunk_shape:?} does not divide {shape:?}"
        );
    }
}

#[test]
fn generic_chunk_volume_tolerance() {
    for ((shape, volume), scale_tol) in SHAPES
        .into_iter()
        .cartesian_product(VOLUMES)
        .cartesian_product([0.5, 0.8, 1.0])
    {
        let chunk_shape = compute_generic_chunk(shape, volume, 4, scale_tol).unwrap();
        let saturated = chunk_shape.to_array_shape() == shape;
        assert!(
            saturated || chunk_shape.num_bytes(4) >= scale_tol * volume,
            "{chunk_shape:?} of {shape:?} is below {scale_tol} of {volume} bytes"
        );
    }
}

#[test]
fn generic_chunk_saturation() {
    for shape in SHAPES {
        let chunk_shape = compute_generic_chunk(shape, 1e300, 4, 0.8).unwrap();
        assert_eq!(chunk_shape.to_array_shape(), shape);
    }
}

#[test]
fn generic_chunk_degenerate_dimension() {
    for volume in VOLUMES {
        let chunk_shape = compute_generic_chunk(&[1460, 1, 192, 288], volume, 4, 0.8).unwrap();
        assert_eq!(chunk_shape[1].get(), 1);
    }
}

#[test]
fn generic_chunk_deterministic() {
    for (shape, volume) in SHAPES.into_iter().cartesian_product(VOLUMES) {
        let chunk_shape = compute_generic_chunk(shape, volume, 8, 0.8).unwrap();
        for _ in 0..3 {
            assert_eq!(
                compute_generic_chunk(shape, volume, 8, 0.8).unwrap(),
                chunk_shape
            );
        }
    }
}

#[test]
fn generic_chunk_megabyte_volume() {
    let chunk_shape = compute_generic_chunk(&[512, 512, 256], 1_048_576.0, 4, 0.8).unwrap();
    assert!(chunk_shape.divides(&[512, 512, 256]));
    assert!((838_860.0..=1_048_576.0).contains(&chunk_shape.num_bytes(4)));
}

#[test]
fn optimal_chunk_hourly_alignment() {
    for volume in [4.0, 800.0, 4000.0, 19_200.0, 1e9] {
        let field = Field::new(vec![48, 100]).with_time_axis(0, hourly(48));
        let chunk_shape = compute_optimal_chunk(&field, volume, 4).unwrap();
        assert!(
            [12, 24, 48].contains(&chunk_shape[0].get()),
            "{chunk_shape:?} at {volume} bytes"
        );
        assert!(chunk_shape.divides(field.shape()));
    }
}

#[test]
fn optimal_chunk_time_axis_position() {
    let field = Field::new(vec![100, 48]).with_time_axis(1, hourly(48));
    let chunk_shape = compute_optimal_chunk(&field, 800.0, 4).unwrap();
    let baseline = compute_generic_chunk(&[100, 48], 800.0, 4, 0.8).unwrap();
    assert_eq!(chunk_shape[0], baseline[0]);
    assert_eq!(chunk_shape[1].get() % 12, 0);
    assert!(chunk_shape.divides(&[100, 48]));
}

#[test]
fn optimal_chunk_sub_daily_alignment() {
    let field = Field::new(vec![1460, 1, 192, 288]).with_time_axis(
        0,
        TimeCoordinate::new(
            (0..1460).map(|i| 6.0 * f64::from(i)).collect(),
            TimeUnits::new(TimeUnit::Hour, "2000-01-01"),
            Calendar::NoLeap,
        ),
    );
    for volume in [1000.0, 1_048_576.0, 4e6] {
        let chunk_shape = compute_optimal_chunk(&field, volume, 4).unwrap();
        let time_length = chunk_shape[0].get();
        assert_eq!(time_length % 4, 0, "{chunk_shape:?} at {volume} bytes");
        assert_eq!(1460 % time_length, 0, "{chunk_shape:?} at {volume} bytes");
        assert!(chunk_shape.divides(field.shape()));
    }
}

#[test]
fn optimal_chunk_other_interval_keeps_baseline() {
    // Two day spacing has no natural chunk length step
    let field = Field::new(vec![100, 20]).with_time_axis(
        0,
        TimeCoordinate::new(
            (0..100).map(|i| 2.0 * f64::from(i)).collect(),
            TimeUnits::new(TimeUnit::Day, "1850-01-01"),
            Calendar::NoLeap,
        ),
    );
    let chunk_shape = compute_optimal_chunk(&field, 560.0, 4).unwrap();
    let baseline = compute_generic_chunk(&[100, 20], 560.0, 4, 0.8).unwrap();
    assert_eq!(chunk_shape, baseline);
    assert_eq!(chunk_shape.to_array_shape(), vec![25, 5]);
}

#[test]
fn optimal_chunk_errors() {
    assert!(matches!(
        compute_optimal_chunk(&Field::new(vec![48, 100]), 800.0, 4),
        Err(ChunkShapeError::MissingTimeAxis)
    ));
    let field = Field::new(vec![1, 100]).with_time_axis(0, hourly(1));
    assert!(matches!(
        compute_optimal_chunk(&field, 800.0, 4),
        Err(ChunkShapeError::InsufficientTimeSamples(_))
    ));
    let field = Field::new(vec![48, 100]).with_time_axis(0, hourly(48));
    assert!(matches!(
        compute_optimal_chunk(&field, 800.0, 0),
        Err(ChunkShapeError::InvalidArgument(
            InvalidArgumentError::ZeroWordSize
        ))
    ));
}

#[test]
fn optimal_chunk_json_field() {
    let field: Field = serde_json::from_str(
        r#"{
            "name": "tas",
            "shape": [100, 20],
            "time": {
                "axis": 0,
                "coordinate": {
                    "values": [0.5, 1.5],
                    "units": "days since 1850-01-01",
                    "calendar": "noleap"
                }
            }
        }"#,
    )
    .unwrap();
    assert!(matches!(
        compute_optimal_chunk(&field, 560.0, 4),
        Err(ChunkShapeError::InvalidArgument(
            InvalidArgumentError::TimeCoordinateLengthMismatch(2, 100)
        ))
    ));

    let values = (0..100).map(|i| f64::from(i) + 0.5).collect_vec();
    let field = Field::new(vec![100, 20]).with_name("tas").with_time_axis(
        0,
        TimeCoordinate::new(
            values,
            "days since 1850-01-01".parse().unwrap(),
            Calendar::NoLeap,
        ),
    );
    let chunk_shape = compute_optimal_chunk(&field, 560.0, 4).unwrap();
    assert_eq!(chunk_shape.to_array_shape(), vec![50, 5]);
    assert_eq!(field.frequency().unwrap().to_string(), "1d");
}

#[test]
fn calculator_log_diagnostics() {
    testing_logger::setup();
    let calculator = ChunkShapeCalculator::default()
        .with_options(ChunkShapeOptions::default())
        .with_diagnostics(Arc::new(LogDiagnostics::new(log::Level::Info)));
    let field = Field::new(vec![48, 100])
        .with_name("tas")
        .with_time_axis(0, hourly(48));
    let chunk_shape = calculator.chunk_shape(&field, 800.0).unwrap();
    assert_eq!(chunk_shape.to_array_shape(), vec![12, 25]);
    testing_logger::validate(|captured_logs| {
        assert!(captured_logs.iter().all(|log| log.level == log::Level::Info));
        let bodies = captured_logs.iter().map(|log| log.body.as_str()).collect_vec();
        assert!(bodies.contains(&"time axis 0 (hourly): chunk length 8 replaced with 12"));
        assert!(bodies.contains(&"tas of shape [48, 100] has chunk shape [12, 25]"));
    });
}

#[test]
fn calculator_diagnostics_do_not_change_results() {
    let field = Field::new(vec![1460, 1, 192, 288]).with_time_axis(
        0,
        TimeCoordinate::new(
            (0..1460).map(|i| 6.0 * f64::from(i)).collect(),
            TimeUnits::new(TimeUnit::Hour, "2000-01-01"),
            Calendar::NoLeap,
        ),
    );
    let quiet = ChunkShapeCalculator::default().with_options(ChunkShapeOptions::default());
    let logged = quiet
        .clone()
        .with_diagnostics(Arc::new(LogDiagnostics::default()));
    assert_eq!(
        quiet.chunk_shape(&field, 4e6).unwrap(),
        logged.chunk_shape(&field, 4e6).unwrap()
    );
}

#[test]
fn calculator_shared_between_threads() {
    let calculator = Arc::new(
        ChunkShapeCalculator::default()
            .with_options(ChunkShapeOptions::default())
            .with_diagnostics(Arc::new(LogDiagnostics::default())),
    );
    let field = Arc::new(Field::new(vec![48, 100]).with_time_axis(0, hourly(48)));
    let expected = calculator.chunk_shape(field.as_ref(), 800.0).unwrap();
    std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| {
                let calculator = calculator.clone();
                let field = field.clone();
                scope.spawn(move || calculator.chunk_shape(field.as_ref(), 800.0).unwrap())
            })
            .collect_vec();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
    assert_eq!(
        expected,
        [12, 25].map(|i| NonZeroU64::new(i).unwrap()).to_vec()
    );
}
