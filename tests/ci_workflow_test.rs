use std::path::Path;

fn read_repo_file(relative: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

fn publish_job(workflow: &str) -> &str {
    let start = workflow
        .find("\n  publish:")
        .expect("workflow defines a publish job");
    &workflow[start..]
}

#[test]
fn test_publish_runs_after_tests_on_merged_release_pr() {
    let workflow = read_repo_file(".github/workflows/ci.yml");
    let publish = publish_job(&workflow);

    assert!(publish.contains("needs: test"));
    assert!(publish.contains("github.event.pull_request.merged == true"));
    assert!(publish.contains("github.base_ref == 'release'"));
    assert!(publish.contains("cargo publish"));
    assert!(publish.contains("CARGO_REGISTRY_TOKEN"));
}

#[test]
fn test_publish_steps_do_not_require_lock_file() {
    let workflow = read_repo_file(".github/workflows/ci.yml");
    let publish = publish_job(&workflow);
    let has_lock_file = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("Cargo.lock")
        .exists();

    // 沒有提交 Cargo.lock 時 --locked 會讓 package/publish 直接失敗
    if !has_lock_file {
        assert!(!publish.contains("--locked"));
    }
}
