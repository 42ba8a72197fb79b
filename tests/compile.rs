use std::fs;

use namelist::compile::compile_name_list;
use tempfile::TempDir;

#[test]
fn writes_sorted_unique_lowercase_names() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("girls.csv");
    let target = tmp.path().join("girls.txt");
    fs::write(&source, "Anna, Bob\nanna, 123, Cid!\n").unwrap();

    let compiled = compile_name_list(&source, &target).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "anna\nbob\n");
    assert_eq!(compiled.names.iter().collect::<Vec<_>>(), vec!["anna", "bob"]);
    assert_eq!(compiled.stats.accepted, 3);
    assert_eq!(compiled.stats.rejected, 2);
}

#[test]
fn year_of_birth_records_keep_only_names() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("yob1880.txt");
    let target = tmp.path().join("out.txt");
    fs::write(
        &source,
        "Mary,F,7065\r\nAnna,F,2604\r\nEmma,F,2003\r\nJohn,M,9655\r\n",
    )
    .unwrap();

    compile_name_list(&source, &target).unwrap();

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "anna\nemma\nf\njohn\nm\nmary\n"
    );
}

#[test]
fn rerun_produces_identical_output() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("boys.csv");
    let target = tmp.path().join("boys.txt");
    fs::write(&source, "Zed,Max\n  max ,Éric,O'Brien\n").unwrap();

    compile_name_list(&source, &target).unwrap();
    let first = fs::read(&target).unwrap();
    compile_name_list(&source, &target).unwrap();
    let second = fs::read(&target).unwrap();

    assert_eq!(first, second);
    assert_eq!(String::from_utf8(first).unwrap(), "max\nzed\néric\n");
}

#[test]
fn empty_input_writes_empty_file() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("empty.csv");
    let target = tmp.path().join("empty.txt");
    fs::write(&source, "1,2,3\n\n").unwrap();

    let compiled = compile_name_list(&source, &target).unwrap();

    assert!(compiled.names.is_empty());
    assert_eq!(fs::read_to_string(&target).unwrap(), "");
}

#[test]
fn reads_every_source_file_in_a_directory() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("years");
    fs::create_dir_all(source.join("1900s")).unwrap();
    fs::write(source.join("yob1880.txt"), "Mary,F,7065\n").unwrap();
    fs::write(source.join("1900s/yob1901.csv"), "Ruth,F,10\n").unwrap();
    fs::write(source.join("README.md"), "Ignored,Notes\n").unwrap();
    let target = tmp.path().join("nested/out/girls.txt");

    let compiled = compile_name_list(&source, &target).unwrap();

    assert!(compiled.names.contains("mary"));
    assert!(compiled.names.contains("ruth"));
    assert!(!compiled.names.contains("ignored"));
    assert_eq!(compiled.stats.rows, 2);
    assert_eq!(fs::read_to_string(&target).unwrap(), "f\nmary\nruth\n");
}

#[test]
fn directory_without_sources_errors() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("nothing");
    fs::create_dir_all(&source).unwrap();

    let err = compile_name_list(&source, &tmp.path().join("out.txt")).unwrap_err();
    assert!(err.to_string().contains("no .csv or .txt files"));
}

#[test]
fn missing_input_errors_with_path() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("absent.csv");
    let target = tmp.path().join("out.txt");

    let err = compile_name_list(&source, &target).unwrap_err();

    assert!(err.to_string().contains("absent.csv"));
    assert!(!target.exists());
}

#[test]
fn unwritable_output_errors() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("girls.csv");
    fs::write(&source, "Anna\n").unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let result = compile_name_list(&source, &blocker.join("girls.txt"));
    assert!(result.is_err());
}

#[test]
fn dotted_capital_i_names_are_rejected() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("girls.csv");
    let target = tmp.path().join("girls.txt");
    fs::write(&source, "İpek,Anna,ǅemila\n").unwrap();

    let compiled = compile_name_list(&source, &target).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "anna\nǆemila\n");
    assert_eq!(compiled.stats.rejected, 1);
}

#[cfg(unix)]
#[test]
fn symlinked_source_files_are_read() {
    let tmp = TempDir::new().unwrap();
    let shared = tmp.path().join("shared.csv");
    fs::write(&shared, "Ruth,F\n").unwrap();
    let source = tmp.path().join("years");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("yob1880.txt"), "Mary,F\n").unwrap();
    std::os::unix::fs::symlink(&shared, source.join("yob1881.csv")).unwrap();

    let compiled = compile_name_list(&source, &tmp.path().join("out.txt")).unwrap();

    assert!(compiled.names.contains("mary"));
    assert!(compiled.names.contains("ruth"));
}

#[cfg(unix)]
#[test]
fn walk_errors_fail_the_source() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("years");
    fs::create_dir_all(source.join("1900s")).unwrap();
    fs::write(source.join("yob1880.txt"), "Mary,F\n").unwrap();
    std::os::unix::fs::symlink(&source, source.join("1900s/again")).unwrap();
    let target = tmp.path().join("out.txt");

    let err = compile_name_list(&source, &target).unwrap_err();

    assert!(err.to_string().contains("years"));
    assert!(!target.exists());
}
