//! Integration tests for the Prysm CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the prysm binary
#[allow(deprecated)]
fn prysm_cmd() -> Command {
    Command::cargo_bin("prysm").unwrap()
}

const BLOG_PLAN: &str = r#"
[[steps]]
op = "add_field"
model = "User"
field = "id"
type = "Int"
default = "cuid()"

[[steps]]
op = "set_primary_key"
model = "User"
field = "id"

[[steps]]
op = "add_relation"
model = "User"
name = "posts"
kind = "OneToMany"
related = "Post"
inverse = "author"

[[steps]]
op = "add_field"
model = "Post"
field = "id"
type = "Int"

[[steps]]
op = "set_primary_key"
model = "Post"
field = "id"

[[steps]]
op = "add_field"
model = "Post"
field = "authorId"
type = "Int"

[[steps]]
op = "add_relation"
model = "Post"
name = "author"
kind = "ManyToOne"
related = "User"
inverse = "posts"
"#;

const EXPECTED_BLOG: &str = r#"datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

model User {
  id Int @id @default(cuid())
  posts Post[]
}

model Post {
  id Int @id
  authorId Int
  author User @relation(fields: [authorId], references: [id])
}"#;

fn write_plan(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_help_command() {
    prysm_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prysm CLI"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("print"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_version_command() {
    prysm_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_print_renders_plan() {
    let temp_dir = TempDir::new().unwrap();
    let plan = write_plan(&temp_dir, "blog.toml", BLOG_PLAN);

    let assert = prysm_cmd()
        .current_dir(temp_dir.path())
        .args(["print", "--plan", plan.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    pretty_assertions::assert_eq!(stdout, format!("{}\n", EXPECTED_BLOG));
}

#[test]
fn test_print_json_plan() {
    let temp_dir = TempDir::new().unwrap();
    let plan = write_plan(
        &temp_dir,
        "tags.json",
        r#"{"steps": [
            {"op": "add_relation", "model": "Tag", "name": "posts", "kind": "ManyToMany", "related": "Post"},
            {"op": "add_relation", "model": "Post", "name": "tags", "kind": "ManyToMany", "related": "Tag"}
        ]}"#,
    );

    prysm_cmd()
        .current_dir(temp_dir.path())
        .args(["print", "--plan", plan.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("posts Post[] @relation(\"PostToTag\")"))
        .stdout(predicate::str::contains("tags Tag[] @relation(\"PostToTag\")"));
}

#[test]
fn test_generate_writes_tenant_file() {
    let temp_dir = TempDir::new().unwrap();
    let plan = write_plan(&temp_dir, "blog.toml", BLOG_PLAN);

    prysm_cmd()
        .current_dir(temp_dir.path())
        .args(["generate", "--plan", plan.to_str().unwrap(), "--tenant", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema written to"));

    let written = temp_dir.path().join("prisma").join("acme.prisma");
    assert!(written.exists(), "prisma/acme.prisma should exist");
    assert_eq!(fs::read_to_string(written).unwrap(), EXPECTED_BLOG);
}

#[test]
fn test_generate_uses_config_output() {
    let temp_dir = TempDir::new().unwrap();
    let plan = write_plan(&temp_dir, "blog.toml", BLOG_PLAN);
    fs::write(
        temp_dir.path().join("prysm.toml"),
        "[output]\ndirectory = \"schemas\"\nextension = \"schema\"\n",
    )
    .unwrap();

    prysm_cmd()
        .current_dir(temp_dir.path())
        .args(["generate", "--plan", plan.to_str().unwrap(), "--tenant", "acme"])
        .assert()
        .success();

    assert!(temp_dir.path().join("schemas").join("acme.schema").exists());
}

#[test]
fn test_generate_output_flag_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    let plan = write_plan(&temp_dir, "blog.toml", BLOG_PLAN);
    let out = temp_dir.path().join("custom");

    prysm_cmd()
        .current_dir(temp_dir.path())
        .args([
            "generate",
            "--plan",
            plan.to_str().unwrap(),
            "--tenant",
            "beta",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(out.join("beta.prisma").exists());
}

#[test]
fn test_generate_reports_omitted_relation() {
    let temp_dir = TempDir::new().unwrap();
    let plan = write_plan(
        &temp_dir,
        "orphan.toml",
        r#"
[[steps]]
op = "add_field"
model = "Post"
field = "id"
type = "Int"

[[steps]]
op = "add_relation"
model = "Post"
name = "author"
kind = "ManyToOne"
related = "User"
"#,
    );

    prysm_cmd()
        .current_dir(temp_dir.path())
        .args(["generate", "--plan", plan.to_str().unwrap(), "--tenant", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Post.author: no backing field, many-to-one relation omitted",
        ));

    let written = fs::read_to_string(temp_dir.path().join("prisma").join("acme.prisma")).unwrap();
    assert!(!written.contains("author"));
}

#[test]
fn test_generate_rejects_bad_tenant() {
    let temp_dir = TempDir::new().unwrap();
    let plan = write_plan(&temp_dir, "blog.toml", BLOG_PLAN);

    prysm_cmd()
        .current_dir(temp_dir.path())
        .args(["generate", "--plan", plan.to_str().unwrap(), "--tenant", "../escape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid tenant id"));
}

#[test]
fn test_generate_missing_plan() {
    let temp_dir = TempDir::new().unwrap();
    let plan = temp_dir.path().join("nonexistent.toml");

    prysm_cmd()
        .current_dir(temp_dir.path())
        .args(["generate", "--plan", plan.to_str().unwrap(), "--tenant", "acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan file not found"));
}

#[test]
fn test_failing_step_reports_field_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let plan = write_plan(
        &temp_dir,
        "broken.toml",
        r#"
[[steps]]
op = "set_primary_key"
model = "User"
field = "id"
"#,
    );

    prysm_cmd()
        .current_dir(temp_dir.path())
        .args(["print", "--plan", plan.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Step 1 (set_primary_key) failed"))
        .stderr(predicate::str::contains("field `id` not found in model `User`"));
}

#[test]
fn test_validate_with_valid_plan() {
    let temp_dir = TempDir::new().unwrap();
    let plan = write_plan(&temp_dir, "blog.toml", BLOG_PLAN);

    prysm_cmd()
        .current_dir(temp_dir.path())
        .args(["validate", "--plan", plan.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_validate_with_invalid_plan() {
    let temp_dir = TempDir::new().unwrap();
    let plan = write_plan(
        &temp_dir,
        "dupes.toml",
        r#"
[[steps]]
op = "add_field"
model = "User"
field = "email"
type = "String"

[[steps]]
op = "add_field"
model = "User"
field = "email"
type = "String"
"#,
    );

    prysm_cmd()
        .current_dir(temp_dir.path())
        .args(["validate", "--plan", plan.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("duplicate field `User.email`"));
}

#[test]
fn test_missing_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let plan = write_plan(&temp_dir, "blog.toml", BLOG_PLAN);

    prysm_cmd()
        .current_dir(temp_dir.path())
        .args(["--config", "missing.toml", "print", "--plan", plan.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_invalid_command() {
    prysm_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
