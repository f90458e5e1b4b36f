#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
//! Integration tests for the `template` command.

use aclfw_cli::cli::TemplateOpts;
use aclfw_cli::commands;
use aclfw_cli::config::AclConfig;
use aclfw_cli::config::template::template;
use aclfw_cli::logging::Logger;

#[test]
fn template_round_trips_through_loader() {
    let dir = tempfile::tempdir().unwrap();
    let opts = TemplateOpts {
        output: dir.path().join("acl_template.yaml"),
    };

    commands::template::run(&opts, &Logger::new("test")).unwrap();

    assert_eq!(AclConfig::load(&opts.output).unwrap(), template());
}

#[test]
fn template_keys_follow_document_order() {
    let dir = tempfile::tempdir().unwrap();
    let opts = TemplateOpts {
        output: dir.path().join("acl_template.yaml"),
    };

    commands::template::run(&opts, &Logger::new("test")).unwrap();

    let text = std::fs::read_to_string(&opts.output).unwrap();
    let positions: Vec<usize> = [
        "target_directory:",
        "permissions:",
        "per_dir_permissions:",
        "apply_to:",
    ]
    .iter()
    .map(|key| text.find(key).expect("key present"))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
    assert!(text.contains("USERNAME"));
    assert!(text.contains("subdir2/nested_subdir"));
}

#[test]
fn template_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let opts = TemplateOpts {
        output: dir.path().join("acl_template.yaml"),
    };
    std::fs::write(&opts.output, "stale: true\n").unwrap();

    commands::template::run(&opts, &Logger::new("test")).unwrap();

    assert!(!std::fs::read_to_string(&opts.output).unwrap().contains("stale"));
}
