use normkit_helpers::{HelperError, arith, array, file, math, text};
use tempfile::tempdir;

#[test]
fn test_round_trip_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("numbers.txt");

    let sorted = array::sort(Some(vec![5, 3, 8])).unwrap();
    let body = sorted.iter().map(i64::to_string).collect::<Vec<_>>().join("\n");
    file::write_to_file(&path, &body).unwrap();

    let back: Vec<i64> = file::read_from_file(&path)
        .unwrap()
        .lines()
        .map(|l| l.parse().unwrap())
        .collect();
    assert_eq!(back, vec![3, 5, 8]);
    assert_eq!(array::find_max(Some(back.as_slice())), Some(8));
}

#[test]
fn test_helpers_compose() {
    assert_eq!(arith::add(math::factorial(4).unwrap() as i64, -4), 20);
    assert_eq!(text::reverse(Some("racecar")).as_deref(), Some("racecar"));
    assert!(text::is_empty(text::reverse(Some("")).as_deref()));
}

#[test]
fn test_errors_name_their_path() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone.txt");
    let err = file::read_from_file(&missing).unwrap_err();

    assert!(matches!(err, HelperError::Read { .. }));
    assert!(err.to_string().contains("gone.txt"));
}
