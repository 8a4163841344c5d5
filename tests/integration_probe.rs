//! Integration tests for the Filebeat version probe.
//!
//! Real `filebeat` is rarely present on CI, so most tests stand in a POSIX
//! shell for it via `ProbeOptions`. The test against the real binary passes
//! whether or not Filebeat is installed.

use filebeat_facts::{
    filebeat_version, filebeat_version_blocking_with_options, filebeat_version_with_options,
    Kernel, ProbeError, ProbeOptions, FILEBEAT_VERSION,
};

fn fake_filebeat(output: &str) -> ProbeOptions {
    ProbeOptions {
        executable: "sh".to_string(),
        args: vec!["-c".to_string(), format!("printf '%s\\n' '{}'", output)],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_real_filebeat_if_installed() {
    match filebeat_version().await {
        Ok(Some(version)) => {
            assert!(
                version.as_str().split('.').count() == 3,
                "unexpected version shape: {}",
                version
            );
            println!("filebeat_version => {}", version);
        }
        Ok(None) => println!("filebeat_version => (no value)"),
        Err(e) => println!("filebeat_version => error: {}", e.description()),
    }
}

#[tokio::test]
async fn test_release_banner() {
    let result = filebeat_version_with_options(fake_filebeat(
        "filebeat version 7.14.2 (amd64), libbeat 7.14.2 [4aa8b5c built 2021-09-13 21:35:21 +0000 UTC]",
    ))
    .await
    .unwrap();
    assert_eq!(result.unwrap().as_str(), "7.14.2");
}

#[tokio::test]
async fn test_arbitrary_components_exact() {
    for expected in ["0.0.0", "10.0.100", "123.45.6789"] {
        let banner = format!("filebeat version {} (arm64)", expected);
        let result = filebeat_version_with_options(fake_filebeat(&banner))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(result.as_str(), expected);
    }
}

#[tokio::test]
async fn test_empty_output_is_absent() {
    let options = ProbeOptions {
        executable: "true".to_string(),
        ..Default::default()
    };
    let result = filebeat_version_with_options(options).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_failing_command_without_output_is_absent() {
    let options = ProbeOptions {
        executable: "false".to_string(),
        ..Default::default()
    };
    let result = filebeat_version_with_options(options).await.unwrap();
    assert!(result.is_none());
}

// Output without a version token is a hard failure, not "no value". This
// asymmetry with the empty-output case is intentional.
#[tokio::test]
async fn test_output_without_version_fails_hard() {
    let result = filebeat_version_with_options(fake_filebeat("filebeat version unknown")).await;
    match result {
        Err(ProbeError::PatternMismatch { output }) => {
            assert_eq!(output, "filebeat version unknown");
        }
        other => panic!("expected PatternMismatch, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_executable_file_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filebeat");
    std::fs::write(&path, "not a program").unwrap();

    let options = ProbeOptions {
        executable: path.to_string_lossy().into_owned(),
        ..Default::default()
    };
    let result = filebeat_version_with_options(options).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_probe_is_idempotent() {
    let options = fake_filebeat("filebeat version 8.11.3 (amd64)");
    let first = filebeat_version_with_options(options.clone()).await.unwrap();
    let second = filebeat_version_with_options(options).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.unwrap().as_str(), "8.11.3");
}

#[test]
fn test_blocking_entry_point() {
    let result =
        filebeat_version_blocking_with_options(fake_filebeat("filebeat version 7.17.0 (amd64)"))
            .unwrap();
    assert_eq!(result.map(String::from), Some("7.17.0".to_string()));
}

#[tokio::test]
async fn test_confinement_skips_non_linux() {
    let options = fake_filebeat("filebeat version unknown");
    for kernel in Kernel::all().filter(|k| *k != Kernel::Linux) {
        let result = FILEBEAT_VERSION
            .resolve_on(Some(kernel), options.clone())
            .await
            .unwrap();
        assert!(result.is_none(), "{} should not evaluate", kernel);
    }
}

#[tokio::test]
async fn test_confinement_evaluates_linux() {
    let result = FILEBEAT_VERSION
        .resolve_on(Some(Kernel::Linux), fake_filebeat("filebeat version unknown"))
        .await;
    assert!(matches!(result, Err(ProbeError::PatternMismatch { .. })));
}
