//! Configuration and vocabulary loading from real files.

use std::io::Write;
use tempfile::NamedTempFile;
use word_finder::config::{ConfigError, load_config};
use word_finder::finder::{FinderType, WordFinder};
use word_finder::wordlists::{LoadError, load_from_file, load_vocabulary};

mod common;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn config_drives_engine_points_and_vocabulary() {
    let words = write_temp("Hat\n\nah\n  at  \nha\na\nJuana\n");
    let config = write_temp(&format!(
        r#"
engine = "profile"

[letter_points]
h = 1
a = 5
t = 1

[words]
location = {:?}
"#,
        words.path().display().to_string()
    ));

    let config = load_config(config.path()).unwrap();
    let points = config.letter_points().unwrap();

    let mut finder = FinderType::from_name(&config.engine, points);
    let loaded = load_vocabulary(&mut finder, config.words.location.as_deref()).unwrap();

    assert_eq!(finder.name(), "profile");
    assert_eq!(loaded, 6);

    let scored = finder.find_scored("tha");
    let words: Vec<_> = scored.iter().map(|m| m.word.as_str()).collect();
    let scores: Vec<_> = scored.iter().map(|m| m.score).collect();
    assert_eq!(words, ["hat", "ah", "at", "ha", "a"]);
    assert_eq!(scores, [7, 6, 6, 6, 5]);
}

#[test]
fn config_without_points_scores_zero() {
    let config = write_temp("engine = \"trie\"\n");
    let config = load_config(config.path()).unwrap();
    let points = config.letter_points().unwrap();

    let mut finder = FinderType::from_name(&config.engine, points);
    finder.add("hat").add("ah");

    assert!(finder.find_scored("hat").iter().all(|m| m.score == 0));
}

#[test]
fn config_with_bad_group_is_rejected() {
    let config = write_temp("[letter_points]\n\"a1\" = 1\n");
    let err = load_config(config.path()).unwrap_err();
    let ConfigError::Validation(errors) = err else {
        panic!("expected validation errors, got {err:?}");
    };
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("'1'"), "{errors:?}");
}

#[test]
fn config_with_unknown_key_is_rejected() {
    let config = write_temp("engines = \"trie\"\n");
    let err = load_config(config.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
}

#[test]
fn vocabulary_file_round_trip() {
    let words = write_temp(&common::BASIC.join("\n"));

    for name in common::ENGINES {
        let mut finder = FinderType::from_name(name, word_finder::core::LetterPoints::standard());
        let loaded = load_from_file(&mut finder, words.path()).unwrap();

        assert_eq!(loaded, common::BASIC.len());
        assert_eq!(finder.find_matches("tha"), ["hat", "ah", "ha", "at", "a"]);
    }
}

#[test]
fn missing_vocabulary_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let mut finder = FinderType::from_name("trie", word_finder::core::LetterPoints::standard());
    let err = load_vocabulary(&mut finder, Some(path.as_path())).unwrap_err();

    assert!(matches!(err, LoadError::Open { .. }));
    assert!(err.to_string().contains("missing.txt"));
    assert_eq!(finder.stats().words_added, 0);
}

#[test]
fn sample_config_matches_builtin_defaults() {
    let config = load_config(std::path::Path::new("data/word_finder.toml")).unwrap();
    let builtin = word_finder::config::AppConfig::default();

    assert_eq!(config.engine, builtin.engine);
    assert_eq!(config.letter_points, builtin.letter_points);
    assert_eq!(config.server, builtin.server);

    let mut finder = FinderType::from_name(&config.engine, config.letter_points().unwrap());
    let loaded = load_vocabulary(&mut finder, config.words.location.as_deref()).unwrap();
    assert_eq!(loaded, word_finder::wordlists::WORDS_COUNT);
}
