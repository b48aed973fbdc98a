use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const KEYS_PATH: &str = "src/generated/locale_keys.rs";
const MESSAGES_PATH: &str = "src/generated/codegen_loader.rs";

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_generate_login_scenario() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "messages/en.json",
        r#"{"login": {"title": "Sign in", "button": {"ok": "OK"}}}"#,
    )?;

    let output = test.generate_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Generated 4 key constants from 'en' and 1 locale"));

    assert_eq!(
        test.read_file(KEYS_PATH)?,
        r#"// @generated by glotgen. Do not edit by hand.

pub struct LocaleKeys;

#[allow(dead_code, non_upper_case_globals)]
impl LocaleKeys {
    pub const login_title: &'static str = "login.title";
    pub const login_button_ok: &'static str = "login.button.ok";
    pub const login_button: &'static str = "login.button";
    pub const login: &'static str = "login";
}
"#
    );

    assert_eq!(
        test.read_file(MESSAGES_PATH)?,
        r#"// @generated by glotgen. Do not edit by hand.

use glotgen::runtime::{Messages, TranslationProvider};

pub static LOCALES: &[(&str, Messages)] = &[
    ("en", &[
        ("login_title", "Sign in"),
        ("login_button_ok", "OK"),
        ("login_button", "{\"ok\":\"OK\"}"),
        ("login", "{\"title\":\"Sign in\",\"button\":{\"ok\":\"OK\"}}"),
    ]),
];

pub struct CodegenLoader;

impl TranslationProvider for CodegenLoader {
    fn locales(&self) -> &'static [(&'static str, Messages)] {
        LOCALES
    }
}
"#
    );

    Ok(())
}

#[test]
fn test_generate_twice_is_byte_identical() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"a": {"b": "B"}, "c": 1}"#)?;
    test.write_file("messages/de.json", r#"{"a": {"b": "Be"}}"#)?;

    assert!(test.generate_command().output()?.status.success());
    let keys = test.read_file(KEYS_PATH)?;
    let messages = test.read_file(MESSAGES_PATH)?;

    assert!(test.generate_command().output()?.status.success());
    assert_eq!(test.read_file(KEYS_PATH)?, keys);
    assert_eq!(test.read_file(MESSAGES_PATH)?, messages);

    Ok(())
}

#[test]
fn test_generate_missing_source_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error: Source path"));
    assert!(stderr(&output).contains("messages' does not exist."));
    assert!(stderr(&output).contains("no files were written"));
    assert!(!test.exists("src/generated"));

    Ok(())
}

#[test]
fn test_generate_empty_source_dir() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/README.md", "translations go here")?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("does not contain any JSON files"));
    assert!(!test.exists("src/generated"));

    Ok(())
}

#[test]
fn test_generate_missing_source_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", "{}")?;

    let output = test
        .generate_command()
        .args(["--source-file", "de.json"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Source file"));
    assert!(stderr(&output).contains("de.json' does not exist."));

    Ok(())
}

#[test]
fn test_generate_malformed_reference_keeps_old_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"["not an object"]"#)?;
    test.write_file(KEYS_PATH, "// previous output")?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("root must be a JSON object, found an array"));
    assert_eq!(test.read_file(KEYS_PATH)?, "// previous output");

    Ok(())
}

#[test]
fn test_generate_skips_malformed_secondary() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/de.json", r#"{"title": "Titel"}"#)?;
    test.write_file("messages/en.json", "{ invalid json }")?;

    let output = test.generate_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("warning: skipped"));
    assert!(stderr(&output).contains("en.json"));

    let messages = test.read_file(MESSAGES_PATH)?;
    assert!(messages.contains(r#"("de", &["#));
    assert!(!messages.contains(r#"("en""#));

    Ok(())
}

#[test]
fn test_generate_backup_file_keeps_its_own_name() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"title": "Sign in"}"#)?;
    test.write_file("messages/en.json~", r#"{"title": "Old sign in"}"#)?;

    let output = test.generate_command().arg("--verbose").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).matches("(reference)").count(), 1);

    let messages = test.read_file(MESSAGES_PATH)?;
    assert!(messages.contains("(\"en\", &[\n        (\"title\", \"Sign in\"),\n    ]),"));
    assert!(messages.contains(r#"("en.json~", &["#));

    Ok(())
}

#[test]
fn test_generate_strict_collision() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"a": {"b_c": "1"}, "a_b": {"c": "2"}}"#)?;

    let output = test.generate_command().arg("--strict").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("symbolic name collision(s): a_b_c <- a.b_c, a_b.c"));
    assert!(!test.exists(KEYS_PATH));

    let output = test.generate_command().output()?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: symbol 'a_b_c' is generated by several keys"));

    Ok(())
}

#[test]
fn test_generate_with_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".glotgenrc.json",
        r#"{
            "sourceDir": "./i18n",
            "outputDir": "./src/i18n",
            "keysFile": "keys.rs",
            "messagesFile": "messages.rs",
            "referenceLocale": "en",
            "runtimePath": "crate::runtime"
        }"#,
    )?;
    test.write_file("i18n/de.json", r#"{"german": "ja"}"#)?;
    test.write_file("i18n/en.json", r#"{"english": "yes"}"#)?;

    let output = test.generate_command().arg("--verbose").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("(reference)"));

    let keys = test.read_file("src/i18n/keys.rs")?;
    assert!(keys.contains(r#"pub const english: &'static str = "english";"#));
    assert!(!keys.contains("german"));

    let messages = test.read_file("src/i18n/messages.rs")?;
    assert!(messages.contains("use crate::runtime::{Messages, TranslationProvider};"));
    assert!(messages.contains(r#"("german", "ja")"#));

    Ok(())
}

#[test]
fn test_cli_overrides_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glotgenrc.json", r#"{ "outputDir": "./from-config" }"#)?;
    test.write_file("messages/en.json", r#"{"a": "A"}"#)?;

    let output = test
        .generate_command()
        .args(["-O", "from-cli", "--skip-branch-keys"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.exists("from-cli/locale_keys.rs"));
    assert!(!test.exists("from-config"));

    Ok(())
}

#[test]
fn test_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glotgenrc.json", r#"{ "maxDepth": 0 }"#)?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("maxDepth"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("generate"));

    Ok(())
}
