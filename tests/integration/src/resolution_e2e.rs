//! End-to-end resolution tests over real temporary repositories

use std::fs;
use std::sync::Mutex;

use pretty_assertions::assert_eq;
use scout_config::{CONFIG_FILENAME, ProgressSink, load, load_with_sink, save};
use tempfile::TempDir;

/// Repo with no rc file and only .js files: the js bucket gets the
/// always-on todo scanner, and eslint only when a marker exists.
#[test]
fn js_repo_without_rc_file_gets_inferred_defaults() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();
    fs::write(temp.path().join("src/app.js"), "var x = 1;").unwrap();

    let config = load(temp.path()).unwrap();

    let js_names: Vec<&str> = config
        .analysers("js")
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert!(js_names.contains(&"todos"));
    assert!(!js_names.contains(&"eslint"));

    assert!(config.analysers("ts").is_empty());
    assert!(config.analysers("coffee").is_empty());

    // Universal baseline is always present
    assert_eq!(config.analysers("all")[0].name, "security");
    assert_eq!(config.analysers("json")[0].name, "depaudit");
}

#[test]
fn js_repo_with_eslint_marker_gets_ci_failing_lint() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("app.js"), "").unwrap();
    fs::write(temp.path().join(".eslintrc"), "{}").unwrap();

    let config = load(temp.path()).unwrap();

    let eslint = config
        .analysers("js")
        .iter()
        .find(|a| a.name == "eslint")
        .expect("eslint should be enabled");
    assert!(config.analyser_fails_ci(eslint));

    let todos = config
        .analysers("js")
        .iter()
        .find(|a| a.name == "todos")
        .unwrap();
    assert!(!config.analyser_fails_ci(todos));
}

#[test]
fn declared_rc_file_wins_over_inference() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("app.js"), "").unwrap();
    fs::write(temp.path().join(".eslintrc"), "{}").unwrap();
    fs::write(
        temp.path().join(CONFIG_FILENAME),
        r#"{
            // hand-authored: only jshint, nothing inferred
            "exclude": ["vendor/**"],
            "languages": {"js": {"jshint": {"failCiOnError": true}}}
        }"#,
    )
    .unwrap();

    let config = load(temp.path()).unwrap();

    let analysers = config.analysers("js");
    assert_eq!(analysers.len(), 1);
    assert_eq!(analysers[0].name, "jshint");
    assert!(config.analyser_fails_ci(&analysers[0]));
    assert!(config.analysers("all").is_empty());

    assert_eq!(
        config.included_paths(&["src/a.js", "vendor/b.js"], "js"),
        vec!["src/a.js"]
    );
}

#[test]
fn save_writes_canonical_json_that_reloads_identically() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("app.js"), "").unwrap();
    fs::write(temp.path().join(".jshintrc"), "{}").unwrap();

    let inferred = load(temp.path()).unwrap();
    save(temp.path(), &inferred).unwrap();

    let on_disk = fs::read_to_string(temp.path().join(CONFIG_FILENAME)).unwrap();
    assert!(on_disk.contains("    \"languages\""));

    let reloaded = load(temp.path()).unwrap();
    assert_eq!(reloaded.languages(), inferred.languages());
    assert_eq!(reloaded.exclude(), inferred.exclude());
    assert_eq!(
        reloaded.all_analysers().len(),
        inferred.all_analysers().len()
    );
}

struct SharedSink(Mutex<Vec<String>>);

impl ProgressSink for SharedSink {
    fn emit(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

#[test]
fn inference_narrates_detection_decisions() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("app.ts"), "").unwrap();
    fs::write(temp.path().join("tslint.json"), "{}").unwrap();

    let sink = SharedSink(Mutex::new(Vec::new()));
    let config = load_with_sink(temp.path(), &sink).unwrap();

    assert!(
        config
            .analysers("ts")
            .iter()
            .any(|a| a.name == "tslint")
    );
    let messages = sink.0.lock().unwrap();
    assert!(messages.iter().any(|m| m.contains("tslint")));
}

#[test]
fn rc_file_present_means_sink_stays_silent() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILENAME), "{}").unwrap();

    let sink = SharedSink(Mutex::new(Vec::new()));
    let config = load_with_sink(temp.path(), &sink).unwrap();

    assert!(config.languages().is_empty());
    assert!(sink.0.lock().unwrap().is_empty());
}

#[test]
fn concurrent_loads_produce_independent_configs() {
    let temp_a = TempDir::new().unwrap();
    let temp_b = TempDir::new().unwrap();
    fs::write(temp_a.path().join("a.js"), "").unwrap();
    fs::write(temp_b.path().join("b.coffee"), "").unwrap();

    let (config_a, config_b) = std::thread::scope(|s| {
        let a = s.spawn(|| load(temp_a.path()).unwrap());
        let b = s.spawn(|| load(temp_b.path()).unwrap());
        (a.join().unwrap(), b.join().unwrap())
    });

    assert!(!config_a.analysers("js").is_empty());
    assert!(config_a.analysers("coffee").is_empty());
    assert!(!config_b.analysers("coffee").is_empty());
    assert!(config_b.analysers("js").is_empty());
}
