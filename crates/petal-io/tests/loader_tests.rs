//! Loader integration tests against files written at test time

use petal_io::{load_dataset, CoercionPolicy, FieldNames, IoError, LoadOptions};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn path_of(file: &NamedTempFile) -> &str {
    file.path().to_str().expect("utf-8 temp path")
}

#[test]
fn test_load_with_extra_columns() {
    let file = write_csv(
        "SepalLength,SepalWidth,PetalLength,PetalWidth,Species\n\
         5.1,3.5,1.4,0.2,setosa\n\
         7.0,3.2,4.7,1.4,versicolor\n\
         6.3,3.3,6.0,2.5,virginica\n",
    );

    let out = load_dataset(path_of(&file), &LoadOptions::default()).unwrap();
    assert_eq!(out.dataset.len(), 3);
    assert_eq!(
        out.dataset.species(),
        vec!["setosa", "versicolor", "virginica"]
    );
    assert_eq!(out.dataset.petal_lengths(), vec![1.4, 4.7, 6.0]);
    assert_eq!(out.dataset.petal_widths(), vec![0.2, 1.4, 2.5]);
}

#[test]
fn test_load_lenient_collects_warnings() {
    let file = write_csv(
        "PetalLength,PetalWidth,Species\n\
         1.4,0.2,setosa\n\
         oops,0.3,setosa\n\
         1.5,bad,setosa\n",
    );

    let out = load_dataset(path_of(&file), &LoadOptions::default()).unwrap();
    assert_eq!(out.dataset.len(), 3);
    assert_eq!(out.warnings.len(), 2);
    assert_eq!(out.warnings[0].line, 3);
    assert_eq!(out.warnings[1].line, 4);
    assert_eq!(out.warnings[1].field, "PetalWidth");
}

#[test]
fn test_load_strict_rejects() {
    let file = write_csv("PetalLength,PetalWidth,Species\noops,0.3,setosa\n");
    let options = LoadOptions {
        coercion: CoercionPolicy::Strict,
        ..Default::default()
    };

    let err = load_dataset(path_of(&file), &options).unwrap_err();
    assert!(matches!(err, IoError::Coercion(_)));
}

#[test]
fn test_load_missing_column() {
    let file = write_csv("PetalLength,Species\n1.4,setosa\n");
    let err = load_dataset(path_of(&file), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, IoError::ColumnNotFound(ref c) if c == "PetalWidth"));
}

#[test]
fn test_load_custom_field_names() {
    let file = write_csv("len,wid,kind\n2.0,1.0,a\n");
    let options = LoadOptions {
        fields: FieldNames {
            petal_length: "len".to_string(),
            petal_width: "wid".to_string(),
            species: "kind".to_string(),
        },
        ..Default::default()
    };

    let out = load_dataset(path_of(&file), &options).unwrap();
    assert_eq!(out.dataset.records()[0].species, "a");
    assert_eq!(out.dataset.records()[0].petal_length, 2.0);
}

#[test]
fn test_load_header_only() {
    let file = write_csv("PetalLength,PetalWidth,Species\n");
    let out = load_dataset(path_of(&file), &LoadOptions::default()).unwrap();
    assert!(out.dataset.is_empty());
}
