use std::fs;
use std::path::Path;

use qes_core::{assemble_dataset, energy_loss_from_x, write_csv, PipelineError, MERGED_SOURCE_NAME};
use qes_parser::COLUMN_NAMES;

fn column_values(df: &polars::prelude::DataFrame, name: &str) -> Vec<String> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .iter()
        .map(|value| value.unwrap_or("").to_string())
        .collect()
}

fn write_fixture_tree(root: &Path) {
    fs::write(
        root.join("3He.dat"),
        "\
Z A E Theta w sigma err sys citation
2 3 0.5 60.0 0.2 13.5 0.4 0.1 Benhar:2006er
2 3 0.5 60.0 0.1 12.5 0.3 0.1 Benhar:2006er
1 2 0.4 36.0 0.05 10.0 0.2 0.1 Benhar:2006er
",
    )
    .unwrap();

    let special_dir = root.join("E12-14-012");
    fs::create_dir_all(&special_dir).unwrap();
    fs::write(
        special_dir.join("E12-14-012_statUncertainties.dat"),
        "\
2 4 1.1 20.0 0.3 5.5 0.05 Dai:2018xhi
2 4 1.1 20.0 0.4 6.5 0.06 Dai:2018xhi
",
    )
    .unwrap();
    fs::write(
        special_dir.join("E12-14-012_totUncertainties.dat"),
        "\
2 4 1.1 20.0 0.3 5.5 0.15 Dai:2018xhi
2 4 1.1 20.0 0.4 6.5 0.16 Dai:2018xhi
",
    )
    .unwrap();

    // Non-.dat files are ignored entirely.
    fs::write(root.join("notes.txt"), "3 4 0.5 60.0 0.1 12.5 0.3 x:1\n").unwrap();
}

#[test]
fn assembles_sorts_and_merges_a_fixture_tree() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_tree(dir.path());

    let df = assemble_dataset(dir.path()).unwrap();

    assert_eq!(df.height(), 5);
    assert_eq!(df.width(), 11);
    assert_eq!(df.get_column_names(), COLUMN_NAMES);

    // Sorted by (Z, A, E, Theta) ascending, regardless of traversal order.
    assert_eq!(column_values(&df, "Z"), ["1", "2", "2", "2", "2"]);
    assert_eq!(column_values(&df, "A"), ["2", "3", "3", "4", "4"]);

    // The merged pair carries both uncertainties and the synthetic source.
    let sources = column_values(&df, "initial file name");
    assert_eq!(sources[0], "3He.dat");
    assert_eq!(sources[3], MERGED_SOURCE_NAME);
    assert_eq!(sources[4], MERGED_SOURCE_NAME);
    assert_eq!(column_values(&df, "error (random)")[3], "0.05");
    assert_eq!(column_values(&df, "error (systematic)")[3], "");
    assert_eq!(column_values(&df, "error (total)")[3], "0.15");
}

#[test]
fn missing_input_directory_is_fatal_and_produces_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("not_there");
    let result = assemble_dataset(&missing);
    assert!(matches!(result, Err(PipelineError::MissingInputDir(_))));
}

#[test]
fn lone_uncertainty_pair_file_is_not_emitted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("E12-14-012_statUncertainties.dat"),
        "2 4 1.1 20.0 0.3 5.5 0.05 Dai:2018xhi\n",
    )
    .unwrap();

    let df = assemble_dataset(dir.path()).unwrap();
    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 11);
}

#[test]
fn corrected_table_round_trips_through_csv() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_tree(dir.path());

    let df = assemble_dataset(dir.path()).unwrap();
    let corrected = energy_loss_from_x(&df).unwrap();

    let output = dir.path().join("merged_table.csv");
    write_csv(&corrected, &output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let mut lines = written.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("Z,A,E (GeV),Theta (degrees)"));
    assert_eq!(lines.count(), 5);
}
