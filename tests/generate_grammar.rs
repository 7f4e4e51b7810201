use my_cat_grammar::config::load_config_from_file;
use my_cat_grammar::grammar::{matching_stresses, DerivationalResolver};
use my_cat_grammar::grammar_io::{load_grammar, to_json};
use my_cat_grammar::resources::{EnglishConjugator, Lexicon, PronunciationIndex};
use my_cat_grammar::{build_grammar, run_grammar_generation, GrammarError, LoadedResources, OutputTarget};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const CMUDICT: &str = "\
;;; test fixture
atrocious AH0 T R OW1 SH AH0 S
ferocious F ER0 OW1 SH AH0 S
ferociously F ER0 OW1 SH AH0 S L IY0
delicious D IH0 L IH1 SH AH0 S
deliciously D IH0 L IH1 SH AH0 S L IY0
precocious P R IH0 K OW1 SH AH0 S
happy HH AE1 P IY0
happily HH AE1 P AH0 L IY0
cat K AE1 T
bat B AE1 T
dog D AO1 G
";

const LEXICON: &str = r#"{
  "synsets": [
    {"id": "teacher.n.01", "pos": "n",
     "lemmas": [{"name": "teacher", "derivations": [{"synset": "teach.v.01", "lemma": "teach"}]}]},
    {"id": "teach.v.01", "pos": "v", "lemmas": [{"name": "teach"}]},
    {"id": "gardener.n.01", "pos": "n",
     "lemmas": [{"name": "gardener", "derivations": [{"synset": "garden.v.01", "lemma": "garden"},
                                                     {"synset": "garden.n.01", "lemma": "garden"}]}]},
    {"id": "garden.v.01", "pos": "v", "lemmas": [{"name": "garden"}]},
    {"id": "garden.n.01", "pos": "n", "lemmas": [{"name": "garden"}]},
    {"id": "cook.n.01", "pos": "n",
     "lemmas": [{"name": "cook", "derivations": [{"synset": "cook.v.01", "lemma": "cook"}]}]},
    {"id": "cook.v.01", "pos": "v", "lemmas": [{"name": "cook"}]},
    {"id": "superstar.n.01", "pos": "n", "lemmas": [{"name": "superstar"}]},
    {"id": "musical_instrument.n.01", "pos": "n",
     "lemmas": [{"name": "musical_instrument"}, {"name": "instrument"}],
     "hyponyms": ["woodwind.n.01", "banjo.n.01"]},
    {"id": "woodwind.n.01", "pos": "n", "lemmas": [{"name": "woodwind"}], "hyponyms": ["oboe.n.01"]},
    {"id": "oboe.n.01", "pos": "n", "lemmas": [{"name": "oboe"}, {"name": "hautboy"}]},
    {"id": "banjo.n.01", "pos": "n", "lemmas": [{"name": "banjo"}]}
  ]
}"#;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

/// A complete, tiny resource tree plus a config pointing at it.
fn setup_project(config_extra: &str) -> tempfile::TempDir {
    let temp = tempdir().unwrap();
    let root = temp.path();
    write(root, "cmudict.dict", CMUDICT);
    write(root, "lexicon.json", LEXICON);
    write(root, "corpora/data/words/adjs.json", r#"{"adjs": ["ferocious", "delicious", "precocious", "happy"]}"#);
    write(root, "corpora/data/foods/fruits.json", r#"{"description": "fruits", "fruits": ["watermelon", "kiwi"]}"#);
    write(root, "corpora/data/humans/bodyParts.json", r#"{"bodyParts": ["arm", "elbow"]}"#);
    write(root, "corpora/data/humans/occupations.json", r#"{"occupations": ["cook", "teacher", "astronaut", "gardener"]}"#);
    write(root, "corpora/data/words/encouraging_words.json", r#"{"encouraging_words": ["wonderful", "brilliant"]}"#);
    write(root, "my_cat.toml", &format!("output = \"out/grammar.json\"\n{}", config_extra));
    temp
}

#[test]
fn end_to_end_grammar_file() {
    let temp = setup_project("");
    let config = load_config_from_file(&temp.path().join("my_cat.toml")).unwrap();
    let target = OutputTarget::from_config(&config);
    let document = run_grammar_generation(&config, &target).unwrap();

    let written = fs::read_to_string(temp.path().join("out/grammar.json")).unwrap();
    let json: Value = serde_json::from_str(&written).unwrap();

    assert_eq!(json["atrociously"], serde_json::json!(["ferociously", "deliciously"]));
    assert_eq!(
        json["setOccupation"],
        serde_json::json!(["[actor:teacher][acts:teaches]", "[actor:gardener][acts:gardens]"])
    );
    assert_eq!(json["instrument"], serde_json::json!(["oboe", "hautboy", "banjo"]));
    assert_eq!(json["superstar"], serde_json::json!(["superstar"]));
    assert_eq!(json["origin"], serde_json::json!(["#[#setPronouns#][#setOccupation#]stanza#"]));
    assert_eq!(json["setPronouns"].as_array().unwrap().len(), 3);
    assert!(!written.contains("they're"));

    // Sorted keys on disk, same content as returned.
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(load_grammar(&temp.path().join("out/grammar.json")).unwrap(), document);
}

#[test]
fn occupation_entries_are_well_formed() {
    let temp = setup_project("");
    let config = load_config_from_file(&temp.path().join("my_cat.toml")).unwrap();
    let resources = LoadedResources::load(&config).unwrap();
    let document = build_grammar(&config, &resources).unwrap();

    let occupations = document.get("setOccupation").unwrap();
    assert!(occupations.len() <= resources.corpora.occupations.len());
    let pattern = regex::Regex::new(r"^\[actor:([^\]]+)\]\[acts:([^\]]+)\]$").unwrap();
    for entry in occupations {
        let caps = pattern.captures(entry).expect("actor/acts bundle");
        assert_ne!(&caps[1], &caps[2]);
        assert!(!caps[2].is_empty());
    }
}

#[test]
fn configured_stanzas_are_weighted() {
    let temp = setup_project(
        r##"
[[stanzas]]
template = """
    #he# can eat a whole #watermelon#
    #he# #acts# #atrociously#"""
weight = 3

[[stanzas]]
template = "my cat is #encouragement#"
weight = 1
"##,
    );
    let config = load_config_from_file(&temp.path().join("my_cat.toml")).unwrap();
    let resources = LoadedResources::load(&config).unwrap();
    let document = build_grammar(&config, &resources).unwrap();

    let stanzas = document.get("stanza").unwrap();
    assert_eq!(stanzas.len(), 4);
    assert_eq!(
        stanzas.iter().filter(|s| *s == "#he# can eat a whole #watermelon#\n#he# #acts# #atrociously#").count(),
        3
    );
    assert_eq!(stanzas[3], "my cat is #encouragement#");
}

#[test]
fn zero_weight_aborts_without_output() {
    let temp = setup_project("[[stanzas]]\ntemplate = \"#he# naps\"\nweight = 0\n");
    let config = load_config_from_file(&temp.path().join("my_cat.toml")).unwrap();
    let err = run_grammar_generation(&config, &OutputTarget::from_config(&config)).unwrap_err();
    assert!(matches!(err, GrammarError::MalformedTemplate { weight: 0, .. }));
    assert!(!temp.path().join("out/grammar.json").exists());
}

#[test]
fn no_resolvable_occupation_still_writes_grammar() {
    let temp = setup_project("");
    write(temp.path(), "corpora/data/humans/occupations.json", r#"{"occupations": ["cook", "astronaut"]}"#);
    let config = load_config_from_file(&temp.path().join("my_cat.toml")).unwrap();
    let document = run_grammar_generation(&config, &OutputTarget::from_config(&config)).unwrap();

    assert!(document.get("setOccupation").unwrap().is_empty());
    assert!(temp.path().join("out/grammar.json").exists());
}

#[test]
fn missing_corpus_names_the_file() {
    let temp = setup_project("");
    fs::remove_file(temp.path().join("corpora/data/foods/fruits.json")).unwrap();
    let config = load_config_from_file(&temp.path().join("my_cat.toml")).unwrap();
    let err = LoadedResources::load(&config).unwrap_err();
    assert!(err.to_string().contains("fruits.json"), "{err}");
}

#[test]
fn stress_matching_cat_bat_dog() {
    let index = PronunciationIndex::from_text("cat K AE1 T\nbat B AE1 T\ndog D AO1 G Z0\n");
    let candidates = vec!["bat".to_string(), "dog".to_string()];
    assert_eq!(matching_stresses(&index, "cat", &candidates), vec!["bat"]);
    assert!(matching_stresses(&index, "unknownword", &candidates).is_empty());
}

#[test]
fn teacher_resolves_to_teaches() {
    let lexicon = Lexicon::from_json_str(LEXICON).unwrap();
    let resolver = DerivationalResolver::new(&lexicon, &EnglishConjugator);
    assert_eq!(resolver.occupation_action("teacher").as_deref(), Some("teaches"));
    assert_eq!(resolver.occupation_action("cook"), None);
}

#[test]
fn json_round_trip_preserves_lists() {
    let temp = setup_project("");
    let config = load_config_from_file(&temp.path().join("my_cat.toml")).unwrap();
    let resources = LoadedResources::load(&config).unwrap();
    let document = build_grammar(&config, &resources).unwrap();

    let reparsed: my_cat_grammar::GrammarDocument = serde_json::from_str(&to_json(&document).unwrap()).unwrap();
    assert_eq!(reparsed, document);
}

#[test]
fn binary_writes_grammar_to_stdout() {
    let temp = setup_project("");
    let output = Command::new(env!("CARGO_BIN_EXE_my-cat-grammar"))
        .arg("--config")
        .arg(temp.path().join("my_cat.toml"))
        .arg("--output")
        .arg("-")
        .arg("--quiet")
        .output()
        .expect("run binary");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["stanza"].as_array().unwrap().len(), 3);
    assert!(!temp.path().join("out/grammar.json").exists());
}

#[test]
fn binary_fails_on_broken_lexicon() {
    let temp = setup_project("");
    write(temp.path(), "lexicon.json", "{ not json");
    let output = Command::new(env!("CARGO_BIN_EXE_my-cat-grammar"))
        .arg("--config")
        .arg(temp.path().join("my_cat.toml"))
        .output()
        .expect("run binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("lexicon"));
    assert!(!temp.path().join("out/grammar.json").exists());
}
