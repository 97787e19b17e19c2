mod common;

use camino::Utf8Path;
use starbot::neighbors::{naive_neighbors, NeighborQuery, QueryPoint};
use starbot::stars::{LoadMode, RecordStore};
use starbot::StarbotError;

use common::{data_path, temp_path, write_csv};

#[test]
fn test_load_ten_stars() {
    let store = RecordStore::from_csv_path(&data_path("ten_stars.csv"), LoadMode::Lazy).unwrap();
    assert_eq!(store.len(), 10);

    let ids: Vec<&str> = store.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        ["0", "1", "2", "3", "3759", "70667", "71454", "71457", "87666", "118721"]
    );
    assert_eq!(store.stars()[8].name, "Barnard's Star");
    assert_eq!(store.stars()[1].name, "");
}

#[test]
fn test_header_plus_n_rows() {
    let mut contents = String::from("StarID,ProperName,X,Y,Z\n");
    for i in 0..25 {
        contents.push_str(&format!("{i},Star {i},{i},{},{}\n", i * 2, -i));
    }
    let file = write_csv(&contents);

    let store = RecordStore::from_csv_path(&temp_path(&file), LoadMode::Strict).unwrap();
    assert_eq!(store.len(), 25);
    assert!(store.iter().all(|s| !s.id.contains("StarID")));
    assert_eq!(store.stars()[24].name, "Star 24");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = RecordStore::from_csv_path(Utf8Path::new("tests/data/nope.csv"), LoadMode::Lazy)
        .unwrap_err();
    assert!(matches!(err, StarbotError::IoError(_)));
}

#[test]
fn test_malformed_file_lazy_and_strict() {
    let path = data_path("malformed_stars.csv");

    let store = RecordStore::from_csv_path(&path, LoadMode::Lazy).unwrap();
    assert_eq!(store.len(), 2);

    let err = RecordStore::from_csv_path(&path, LoadMode::Strict).unwrap_err();
    assert_eq!(
        err,
        StarbotError::ParseError {
            field: "y".into(),
            value: "north".into()
        }
    );
}

#[test]
fn test_invalid_utf8_row_loads_and_ranks() {
    let mut file = write_csv("StarID,ProperName,X,Y,Z\n0,Sol,0,0,0\n");
    std::io::Write::write_all(&mut file, b"1,\xc9toile,1,0,0\n2,Vega,2,0,0\n").unwrap();

    let store = RecordStore::from_csv_path(&temp_path(&file), LoadMode::Lazy).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.stars()[1].name, "\u{FFFD}toile");

    let query = NeighborQuery::new(2, QueryPoint::named("Vega"));
    assert_eq!(naive_neighbors(&store, &query).unwrap(), ["1", "0"]);

    let query = NeighborQuery::new(1, QueryPoint::named("\u{FFFD}toile"));
    assert_eq!(naive_neighbors(&store, &query).unwrap(), ["0"]);
}
