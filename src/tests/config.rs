use super::Config;
use crate::theme::Theme;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_gives_defaults() {
    let config = Config::load_from(Path::new("/definitely/not/here/a2a-docs.toml"));
    assert_eq!(config, Config::default());
    assert_eq!(config.theme(), Theme::System);
    assert_eq!(config.default_section, "getting-started");
    assert_eq!(config.narrow_width(), 100);
    assert_eq!(config.log_path(), None);
}

#[test]
fn test_empty_file_gives_defaults() {
    let file = config_file("");
    assert_eq!(Config::load_from(file.path()), Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = config_file("theme = \"dark\"\nnarrow_width = 80\n");
    let config = Config::load_from(file.path());

    assert_eq!(config.theme(), Theme::Dark);
    assert_eq!(config.narrow_width(), 80);
    assert_eq!(config.default_section, "getting-started");
    assert_eq!(config.dark_syntax_theme, "base16-ocean.dark");
}

#[test]
fn test_full_file() {
    let file = config_file(
        r#"theme = "light"
default_section = "security"
narrow_width = 120
dark_syntax_theme = "Solarized (dark)"
light_syntax_theme = "Solarized (light)"
log_file = "/tmp/a2a-docs.log"
"#,
    );
    let config = Config::load_from(file.path());

    assert_eq!(config.theme(), Theme::Light);
    assert_eq!(config.default_section, "security");
    assert_eq!(config.narrow_width(), 120);
    assert_eq!(config.light_syntax_theme, "Solarized (light)");
    assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/a2a-docs.log")));
}

#[test]
fn test_invalid_file_falls_back() {
    let file = config_file("theme = [\n");
    assert_eq!(Config::load_from(file.path()), Config::default());
}

#[test]
fn test_unknown_theme_name_is_system() {
    let config = Config {
        theme: "sepia".to_string(),
        ..Config::default()
    };
    assert_eq!(config.theme(), Theme::System);
}

#[test]
fn test_huge_breakpoint_saturates() {
    let config = Config {
        narrow_width: 1_000_000,
        ..Config::default()
    };
    assert_eq!(config.narrow_width(), u16::MAX);
}
