use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn dictionary() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("unigram_freq.csv");
    fs::write(
        &path,
        "word,count\nspelling,100\ncorrect,90\nword,80\nchecker,70\naccept,60\nexcept,50\n",
    )
    .unwrap();
    (dir, path)
}

fn spellsuggest(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("spellsuggest").unwrap();
    cmd.current_dir(cwd)
        .env_remove("SPELLSUGGEST_DICTIONARY")
        .arg("--no-color");
    cmd
}

#[test]
fn test_suggestions_in_input_order() {
    let (dir, path) = dictionary();

    spellsuggest(dir.path())
        .arg("--dictionary")
        .arg(&path)
        .arg("--no-timing")
        .args(["speling", "Word", "acept", "xyzabcfgu"])
        .assert()
        .success()
        .stdout("speling spelling\nWord word\nacept accept\nxyzabcfgu xyzabcfgu\n");
}

#[test]
fn test_timing_line() {
    let (dir, path) = dictionary();

    spellsuggest(dir.path())
        .arg("--dictionary")
        .arg(&path)
        .arg("wword")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("wword word\nTime : "))
        .stdout(predicate::str::contains("words per second"));
}

#[test]
fn test_default_dictionary_in_working_directory() {
    let (dir, _path) = dictionary();

    spellsuggest(dir.path())
        .args(["--no-timing", "spellign"])
        .assert()
        .success()
        .stdout("spellign spelling\n");
}

#[test]
fn test_local_config_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("terms.csv"), "term,freq\nhello,3\n").unwrap();
    fs::write(
        dir.path().join(".spellsuggest.toml"),
        "dictionary = \"terms.csv\"\nword_column = \"term\"\ncount_column = \"freq\"\n",
    )
    .unwrap();

    spellsuggest(dir.path())
        .args(["--no-timing", "helo"])
        .assert()
        .success()
        .stdout("helo hello\n");
}

#[test]
fn test_json_output() {
    let (dir, path) = dictionary();

    let output = spellsuggest(dir.path())
        .arg("--dictionary")
        .arg(&path)
        .args(["--format", "json", "--no-timing", "speling", "xyzabcfgu"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_words"], 2);
    assert_eq!(json["corrected"], 1);
    assert_eq!(json["results"][0]["suggestion"], "spelling");
    assert!(json["results"][1]["suggestion"].is_null());
    assert_eq!(json["results"][1]["resolved"], "xyzabcfgu");
    assert!(json.get("timing").is_none());
}

#[test]
fn test_missing_dictionary_fails() {
    let dir = tempdir().unwrap();

    spellsuggest(dir.path())
        .arg("speling")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("frequency data unavailable"));
}

#[test]
fn test_empty_dictionary_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "word,count\n").unwrap();

    spellsuggest(dir.path())
        .arg("--dictionary")
        .arg(&path)
        .arg("speling")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frequency table is empty"));
}

#[test]
fn test_no_words() {
    let (dir, path) = dictionary();

    spellsuggest(dir.path())
        .arg("--dictionary")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No words specified"));
}

#[test]
fn test_dict_info() {
    let (dir, path) = dictionary();

    spellsuggest(dir.path())
        .arg("--dictionary")
        .arg(&path)
        .args(["dict", "info", "--top", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words: 6"))
        .stdout(predicate::str::contains("Total frequency: 450"))
        .stdout(predicate::str::contains("Top 2 words:"))
        .stdout(predicate::str::contains("spelling"));
}
