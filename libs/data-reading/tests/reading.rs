use std::io::{self, BufRead, BufReader, Read};

use approx::assert_relative_eq;
use config::constants::ReaderConfig;
use data_reading::{read_values, read_values_from_path, values_from_line, ReadError};

#[test]
fn custom_comment_characters() {
    let config = ReaderConfig::new(";%").unwrap();
    assert_eq!(values_from_line("1 2 ; 3 # 4", &config), vec![1.0, 2.0]);
    assert_eq!(values_from_line("5 # 6 % 7", &config), vec![5.0, 6.0]);
}

#[test]
fn reads_table_with_header_and_comments() {
    let text = "\
# time  value
0.0   -1.0
0.1    0.5   # rising
junk line
0.2    1.0e-1
";
    let rows = read_values(text.as_bytes(), &ReaderConfig::default()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_relative_eq!(rows[1][1], 0.5);
    assert_relative_eq!(rows[2][1], 0.1);
}

#[test]
fn invalid_utf8_is_a_line_error() {
    let bytes: &[u8] = b"1 2\n\xff\xfe\n";
    let err = read_values(bytes, &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, ReadError::Line { line: 2, .. }));
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "device gone"))
    }
}

#[test]
fn reader_failure_is_reported() {
    let reader: Box<dyn BufRead> = Box::new(BufReader::new(FailingReader));
    let err = read_values(reader, &ReaderConfig::default()).unwrap_err();
    assert!(err.to_string().contains("device gone"));
}

#[test]
fn missing_file_is_an_open_error() {
    let path = std::env::temp_dir().join("data-reading-missing-file-does-not-exist.txt");
    let err = read_values_from_path(&path, &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, ReadError::Open { .. }));
}

#[test]
fn reads_from_file() {
    let path = std::env::temp_dir().join(format!("data-reading-{}.dat", std::process::id()));
    std::fs::write(&path, "1 2 3\n# skip\n4 5 6\n").unwrap();
    let rows = read_values_from_path(&path, &ReaderConfig::default()).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
}
