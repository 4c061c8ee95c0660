use std::fs;
use std::path::Path;

use shapecons::Error;
use shapecons::Options;
use shapecons::run;
use shapecons::sc_structure::Alphabet;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn table(values: &[f64]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{}\t{}\n", i + 1, v))
        .collect()
}

fn setup(dir: &Path) -> Options {
    // Pair (1,8) and (2,7) are consistent, (3,6) is not: position 6 jumps
    // from LOW to HIGH. The pseudoknot is never constrained.
    write(dir, "short.txt", &table(&[0.1, 0.2, 0.5, 0.9, 0.9, 0.1, 0.2, 0.3]));
    write(dir, "long.txt", &table(&[0.1, 0.2, 0.5, 0.9, 0.9, 0.95, 0.2, 0.3, 0.4]));
    write(dir, "frag.db", ">frag\nGGGAACCC\n(((..)))[] (-2.10)\n");
    Options::new(dir.join("short.txt"), dir.join("long.txt"), dir.join("frag.db"))
}

#[test]
fn test_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let options = setup(dir.path());
    let outcome = run(&options).unwrap();

    assert_eq!(outcome.structure.primary().len(), 3);
    assert_eq!(outcome.structure.pseudoknot().len(), 1);
    assert!(!outcome.retained.contains(6));
    assert_eq!(
        outcome.constraints.to_string(),
        "DS:\n-1\nSS:\n-1\nMod:\n-1\nPairs:\n1 8\n2 7\n-1 -1\nFMN:\n-1\nForbids:\n-1 -1\n"
    );
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = setup(dir.path());
    options.window = 3;

    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    run(&options).unwrap().constraints.write(&first).unwrap();
    run(&options).unwrap().constraints.write(&second).unwrap();
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_statistics_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    let stats_dir = dir.path().join("stats");
    fs::create_dir(&stats_dir).unwrap();
    write(&stats_dir, "a.txt", &table(&[0.1, 0.3]));
    write(&stats_dir, "b.txt", &table(&[0.9]));
    write(&stats_dir, "notes.md", "not a table");

    let mut options = setup(dir.path());
    options.stats_dir = Some(stats_dir);
    let outcome = run(&options).unwrap();
    assert_eq!(outcome.statistics.low.count, 2);
    assert_eq!(outcome.statistics.high.count, 1);
    assert_eq!(outcome.statistics.medium.sd, None);
}

#[test]
fn test_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = setup(dir.path());
    options.longer = dir.path().join("absent.txt");
    let err = run(&options).unwrap_err();
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn test_unbalanced_structure_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let options = setup(dir.path());
    write(dir.path(), "frag.db", "((((......\n");
    match run(&options) {
        Err(Error::Structure { source, .. }) => {
            assert_eq!(source.alphabet(), Some(Alphabet::Primary))
        }
        other => panic!("expected a structure error, got {other:?}"),
    }
}

#[test]
fn test_even_window_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = setup(dir.path());
    options.window = 4;
    assert!(matches!(run(&options), Err(Error::Window(_))));
}

#[test]
fn test_constraint_file_in_statistics_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = setup(dir.path());
    options.stats_dir = Some(dir.path().to_path_buf());

    let before = run(&options).unwrap();
    before.constraints.write(dir.path().join("frag_cons.txt")).unwrap();
    let after = run(&options).unwrap();
    assert_eq!(before.statistics, after.statistics);
    assert_eq!(before.constraints.to_string(), after.constraints.to_string());
}

#[test]
fn test_malformed_table_in_statistics_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = setup(dir.path());
    write(dir.path(), "broken.txt", "1 0.1
2 high
");
    options.stats_dir = Some(dir.path().to_path_buf());
    assert!(matches!(run(&options), Err(Error::Profile(_))));
}
