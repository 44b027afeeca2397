//! Round-trip laws for every codec.
//!
//! `read(write(table))` must reproduce the point sequence exactly, for
//! tables of several sizes with negative and fractional coordinates, in
//! memory and on disk, with either storage backend on the reading side.

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};

use tabfn_codec::{binary, snapshot, text, CodecError};
use tabfn_core::{ArrayTabulated, LinkedTabulated, Point, TabulatedFunction};

fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("unexpected error: {:?}", e),
    }
}

/// An awkward table of `size` points: negative and fractional x, y values
/// spanning sign changes and very small magnitudes.
fn awkward_points(size: usize) -> Vec<Point> {
    (0..size)
        .map(|i| {
            let t = i as f64;
            let x = -17.3 + t * 0.7 + (t / 13.0).fract() * 0.05;
            let sign = if i % 2 == 0 { -1.0 } else { 1.0 };
            Point::new(x, (t - 3.0) * 0.1234567890123 * sign)
        })
        .collect()
}

type WriteFn = fn(&ArrayTabulated, &mut Vec<u8>) -> Result<(), CodecError>;
type ReadArrayFn = fn(&mut Cursor<Vec<u8>>) -> Result<ArrayTabulated, CodecError>;
type ReadLinkedFn = fn(&mut Cursor<Vec<u8>>) -> Result<LinkedTabulated, CodecError>;

fn codecs() -> Vec<(&'static str, WriteFn, ReadArrayFn, ReadLinkedFn)> {
    vec![
        ("binary", binary::write, binary::read, binary::read),
        ("text", text::write, text::read, text::read),
        ("snapshot", snapshot::write, snapshot::read, snapshot::read),
    ]
}

#[test]
fn test_round_trips_at_sizes_2_10_and_100() {
    for size in [2, 10, 100] {
        let points = awkward_points(size);
        let table = must(ArrayTabulated::from_points(points.clone()));
        for (name, write, read_array, read_linked) in codecs() {
            let mut buffer = Vec::new();
            must(write(&table, &mut buffer));

            let array = must(read_array(&mut Cursor::new(buffer.clone())));
            assert_eq!(array.to_points(), points, "{name} at size {size}");

            let linked = must(read_linked(&mut Cursor::new(buffer)));
            assert_eq!(linked.to_points(), points, "{name} at size {size} (linked)");
        }
    }
}

#[test]
fn test_round_trip_survives_mutation_history() {
    // A table that has been inserted into and pruned serializes by value,
    // with no trace of the edits.
    let mut table = must(LinkedTabulated::from_points(awkward_points(10)));
    must(table.insert(Point::new(100.0, -1.0)));
    must(table.insert(Point::new(-100.0, 1.0)));
    must(table.remove(5));
    must(table.set_y(0, 42.0));

    let mut buffer = Vec::new();
    must(binary::write(&table, &mut buffer));
    let back: LinkedTabulated = must(binary::read(&mut Cursor::new(buffer)));
    assert_eq!(back, table);
}

#[test]
fn test_binary_round_trip_through_a_file() {
    let dir = must(tempfile::tempdir());
    let path = dir.path().join("table.bin");
    let table = must(ArrayTabulated::from_points(awkward_points(25)));

    let mut writer = BufWriter::new(must(File::create(&path)));
    must(binary::write(&table, &mut writer));
    must(writer.into_inner());

    let mut reader = BufReader::new(must(File::open(&path)));
    let back: ArrayTabulated = must(binary::read(&mut reader));
    assert_eq!(back, table);
}

#[test]
fn test_text_round_trip_through_a_file() {
    let dir = must(tempfile::tempdir());
    let path = dir.path().join("table.txt");
    let table = must(ArrayTabulated::from_points(awkward_points(25)));

    let mut writer = BufWriter::new(must(File::create(&path)));
    must(text::write(&table, &mut writer));
    must(writer.into_inner());

    let mut reader = BufReader::new(must(File::open(&path)));
    let back: ArrayTabulated = must(text::read(&mut reader));
    assert_eq!(back, table);
}

#[test]
fn test_snapshot_round_trip_through_one_shared_file() {
    // Write two snapshots back to back into the same file and restore
    // both; the length-prefixed form needs no separators.
    let dir = must(tempfile::tempdir());
    let path = dir.path().join("tables.snap");
    let first = must(ArrayTabulated::from_points(awkward_points(2)));
    let second = must(LinkedTabulated::from_points(awkward_points(10)));

    let mut file = must(File::create(&path));
    must(snapshot::write(&first, &mut file));
    must(snapshot::write(&second, &mut file));
    drop(file);

    let mut file = must(File::open(&path));
    let first_back: LinkedTabulated = must(snapshot::read(&mut file));
    let second_back: ArrayTabulated = must(snapshot::read(&mut file));
    assert_eq!(first_back.to_points(), first.to_points());
    assert_eq!(second_back.to_points(), second.to_points());
}

#[test]
fn test_each_reader_rejects_a_table_of_one_point() {
    let lonely = vec![Point::new(0.0, 0.0)];

    let mut buffer = Vec::new();
    buffer.extend_from_slice(&1i32.to_be_bytes());
    buffer.extend_from_slice(&0.0f64.to_be_bytes());
    buffer.extend_from_slice(&0.0f64.to_be_bytes());
    let result: Result<ArrayTabulated, _> = binary::read(&mut Cursor::new(buffer));
    assert!(matches!(result, Err(CodecError::InvalidCount { count: 1 })));

    let result: Result<ArrayTabulated, _> = text::read(&mut Cursor::new("1 0 0"));
    assert!(matches!(result, Err(CodecError::InvalidCount { count: 1 })));

    let buffer = must(bincode::serde::encode_to_vec(
        &lonely,
        bincode::config::standard(),
    ));
    let result: Result<ArrayTabulated, _> = snapshot::read(&mut Cursor::new(buffer));
    assert!(matches!(result, Err(CodecError::Table(_))));
}

#[test]
fn test_formats_agree_on_the_decoded_sequence() {
    let table = must(ArrayTabulated::from_points(awkward_points(33)));

    let mut binary_buf = Vec::new();
    must(binary::write(&table, &mut binary_buf));
    let from_binary: ArrayTabulated = must(binary::read(&mut Cursor::new(binary_buf)));

    let mut text_buf = Vec::new();
    must(text::write(&table, &mut text_buf));
    let from_text: ArrayTabulated = must(text::read(&mut Cursor::new(text_buf)));

    let mut snap_buf = Vec::new();
    must(snapshot::write(&table, &mut snap_buf));
    let from_snapshot: ArrayTabulated = must(snapshot::read(&mut Cursor::new(snap_buf)));

    assert_eq!(from_binary, from_text);
    assert_eq!(from_text, from_snapshot);
}
