//! Integration tests for the senryu CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn senryu() -> Command {
    let mut cmd = Command::cargo_bin("senryu").unwrap();
    cmd.env_remove("SENRYU_TOKENIZER").env_remove("SENRYU_CONFIG");
    cmd
}

#[test]
fn test_ruby_mecab_text() {
    senryu()
        .arg("ruby")
        .arg("-i")
        .arg(fixture_path("furuike.mecab.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("古池[ふるいけ]や\n"))
        .stdout(predicate::str::contains("蛙[かえる]飛[と]び込[こ]む\n"))
        .stdout(predicate::str::contains("水[みず]の音[おと]\n"));
}

#[test]
fn test_ruby_kuromoji_json_output() {
    senryu()
        .arg("ruby")
        .arg("-i")
        .arg(fixture_path("furuike.json"))
        .arg("-f")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"ruby_data\""))
        .stdout(predicate::str::contains("\"かえる\""))
        .stdout(predicate::str::contains("\"source\""));
}

#[test]
fn test_ruby_markdown_output() {
    senryu()
        .arg("ruby")
        .arg("-i")
        .arg(fixture_path("furuike.mecab.txt"))
        .arg("-f")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. <ruby>古池<rt>ふるいけ</rt></ruby>や",
        ))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total items: 3*"));
}

#[test]
fn test_check_accepts_verse() {
    senryu()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("furuike.mecab.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "✓ 古池や 蛙飛び込む 水の音 [5-7-5: 5/7/5]",
        ));
}

#[test]
fn test_check_kuromoji_accepts_verse() {
    senryu()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("furuike.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ 古池や 蛙飛び込む 水の音"));
}

#[test]
fn test_check_rejects_short_phrase() {
    senryu()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("rejected.mecab.txt"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("✗ 古池や 飛び込む 水の音 [5-7-5: 5/4/5]"))
        .stdout(predicate::str::contains("error code 2"))
        .stderr(predicate::str::contains("1 of 1 submission(s) rejected"));
}

#[test]
fn test_check_tolerance_override() {
    // 4 morae against a target of 7 is within a tolerance of 3
    senryu()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("rejected.mecab.txt"))
        .arg("--tolerance")
        .arg("3")
        .assert()
        .success();

    senryu()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("rejected.mecab.txt"))
        .arg("--tolerance")
        .arg("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_check_two_phrase_form_groups() {
    senryu()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("furuike.mecab.txt"))
        .arg("--form")
        .arg("5-7")
        .assert()
        .failure()
        .stdout(predicate::str::contains("✓ 古池や 蛙飛び込む [5-7: 5/7]"))
        .stdout(predicate::str::contains("expected 2 phrases, got 1"))
        .stderr(predicate::str::contains("1 of 2 submission(s) rejected"));
}

#[test]
fn test_check_json_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.json");

    senryu()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("furuike.mecab.txt"))
        .arg("-f")
        .arg("json")
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value[0]["accepted"], true);
    assert_eq!(value[0]["display_text"], "古池や 蛙飛び込む 水の音");
    assert_eq!(value[0]["verse"]["error_code"], 0);
}

#[test]
fn test_glob_pattern() {
    senryu()
        .arg("check")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("*.mecab.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("✓ 古池や 蛙飛び込む 水の音"))
        .stdout(predicate::str::contains("✗ 古池や 飛び込む 水の音"))
        .stderr(predicate::str::contains("1 of 2 submission(s) rejected"));
}

#[test]
fn test_invalid_file() {
    senryu()
        .arg("ruby")
        .arg("-i")
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_count_arguments() {
    senryu()
        .arg("count")
        .arg("ふるいけや")
        .arg("きゃべつ、")
        .assert()
        .success()
        .stdout(predicate::str::contains("ふるいけや\t5 morae\t0 symbols"))
        .stdout(predicate::str::contains("きゃべつ、\t3 morae\t1 symbols"));
}

#[test]
fn test_count_stdin() {
    senryu()
        .arg("count")
        .arg("-f")
        .arg("json")
        .write_stdin("しずかさや\n\nセミノコエ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mora_count\": 5"))
        .stdout(predicate::str::contains("セミノコエ"));
}

#[test]
fn test_generate_config_and_use_it() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("senryu.toml");

    senryu()
        .arg("generate-config")
        .arg("-o")
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration template written"));

    let content = fs::read_to_string(&config_file)
        .unwrap()
        .replace("default_format = \"text\"", "default_format = \"json\"");
    fs::write(&config_file, content).unwrap();

    senryu()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("furuike.mecab.txt"))
        .arg("-c")
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"accepted\": true"));

    senryu()
        .arg("generate-config")
        .arg("-o")
        .arg(&config_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "[validation]\ntolerance = 9\n").unwrap();

    senryu()
        .arg("check")
        .arg("-i")
        .arg(fixture_path("furuike.mecab.txt"))
        .arg("-c")
        .arg(&config_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_list_forms_and_formats() {
    senryu()
        .arg("list")
        .arg("forms")
        .assert()
        .success()
        .stdout(predicate::str::contains("5-7-5"))
        .stdout(predicate::str::contains("7-5"));

    senryu()
        .arg("list")
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"));
}

#[cfg(unix)]
#[test]
fn test_tokenizer_command() {
    // cat stands in for mecab: each input line already is analyzer output
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("phrases.txt");
    fs::write(
        &input,
        "桜\t名詞,一般,*,*,*,*,桜,サクラ,サクラ\n咲く\t動詞,自立,*,*,五段・カ行イ音便,基本形,咲く,サク,サク\n",
    )
    .unwrap();

    senryu()
        .arg("ruby")
        .arg("-i")
        .arg(&input)
        .arg("--tokenizer-cmd")
        .arg("cat")
        .assert()
        .success()
        .stdout(predicate::str::contains("桜[さくら]\n"))
        .stdout(predicate::str::contains("咲[さ]く\n"));
}

#[test]
fn test_help_lists_commands() {
    senryu()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ruby"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("generate-config"));
}
