use std::io::Write;
use tempfile::NamedTempFile;
use moments::{load_runtime_conf, RuntimeConf, SCALE_REFERENCE_EPS};
use moments::moments::MomentError;
use moments::moments::moment_centered::NormalizationMode;

/// The file is removed when the returned handle is dropped
fn write_conf(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_yaml_conf() {
    let conf_file = write_conf("normalization: NormalizeByMu02PMu20By2\nreference_eps: 1.0e-6\nprint_grid: true\n");
    let conf = load_runtime_conf(conf_file.path()).unwrap();
    assert_eq!(conf.normalization, Some(NormalizationMode::NormalizeByMu02PMu20By2));
    assert_eq!(conf.reference_eps, 1e-6);
    assert!(conf.print_grid);
}

#[test]
fn missing_fields_use_defaults() {
    let conf_file = write_conf("normalization: null\n");
    let conf = load_runtime_conf(conf_file.path()).unwrap();
    assert_eq!(conf.normalization, None);
    assert_eq!(conf.reference_eps, SCALE_REFERENCE_EPS);
    assert!(!conf.print_grid);

    let default = RuntimeConf::default();
    assert_eq!(default.reference_eps, SCALE_REFERENCE_EPS);
    assert!(!default.print_grid);
}

#[test]
fn invalid_conf_is_reported() {
    let conf_file = write_conf("normalization: NormalizeByArea\n");
    assert!(matches!(load_runtime_conf(conf_file.path()), Err(MomentError::Config(_))));

    let conf_file = write_conf("normalization: NormalizeByMu00\nreference_eps: -1.0\n");
    assert!(matches!(load_runtime_conf(conf_file.path()), Err(MomentError::Config(_))));

    assert!(matches!(load_runtime_conf("/nonexistent/moments_conf.yaml"), Err(MomentError::Config(_))));
}

#[test]
fn conf_files_are_scratch_files() {
    let conf_file = write_conf("normalization: NormalizeByMu00\n");
    let path = conf_file.path().to_path_buf();
    assert_eq!(load_runtime_conf(&path).unwrap().normalization, Some(NormalizationMode::NormalizeByMu00));
    drop(conf_file);
    assert!(!path.exists());
    assert!(matches!(load_runtime_conf(&path), Err(MomentError::Config(_))));
}
