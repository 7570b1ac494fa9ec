use depmap::core::{classify, DependencyKind, Language};

#[test]
fn relative_targets_are_internal_for_every_language() {
    assert_eq!(classify(".module", Language::Python), DependencyKind::Internal);
    assert_eq!(classify("..utils", Language::Python), DependencyKind::Internal);
    assert_eq!(classify("./utils", Language::Javascript), DependencyKind::Internal);
    assert_eq!(classify("../lib", Language::Typescript), DependencyKind::Internal);
    assert_eq!(classify("./local", Language::Go), DependencyKind::Internal);
}

#[test]
fn python_stdlib_is_external_stdlib() {
    assert_eq!(classify("os", Language::Python), DependencyKind::Stdlib);
    assert_eq!(classify("os.path", Language::Python), DependencyKind::Stdlib);
    assert_eq!(classify("json", Language::Python), DependencyKind::Stdlib);
    assert!(classify("os", Language::Python).is_external());
}

#[test]
fn python_unknown_roots_are_third_party() {
    assert_eq!(classify("requests", Language::Python), DependencyKind::ThirdParty);
    assert_eq!(classify("fastapi", Language::Python), DependencyKind::ThirdParty);
}

#[test]
fn javascript_builtins_and_node_prefix_are_stdlib() {
    assert_eq!(classify("fs", Language::Javascript), DependencyKind::Stdlib);
    assert_eq!(classify("node:fs", Language::Javascript), DependencyKind::Stdlib);
    assert_eq!(classify("path", Language::Typescript), DependencyKind::Stdlib);
}

#[test]
fn javascript_registry_names_are_third_party() {
    assert_eq!(classify("react", Language::Javascript), DependencyKind::ThirdParty);
    assert_eq!(classify("express", Language::Javascript), DependencyKind::ThirdParty);
}

#[test]
fn javascript_absolute_paths_are_internal() {
    assert_eq!(classify("/src/app", Language::Javascript), DependencyKind::Internal);
}

#[test]
fn java_reserved_namespaces_count_as_standard_not_external() {
    assert_eq!(classify("java.util.List", Language::Java), DependencyKind::Internal);
    assert_eq!(classify("javax.servlet", Language::Java), DependencyKind::Internal);
    assert!(!classify("java.util.List", Language::Java).is_external());
}

#[test]
fn java_other_packages_are_third_party() {
    assert_eq!(
        classify("org.springframework", Language::Java),
        DependencyKind::ThirdParty
    );
}

#[test]
fn go_single_segment_names_are_treated_as_stdlib() {
    // naming heuristic, not a membership check
    assert_eq!(classify("fmt", Language::Go), DependencyKind::Stdlib);
    assert_eq!(classify("strings", Language::Go), DependencyKind::Stdlib);
}

#[test]
fn go_pathlike_imports_are_third_party() {
    assert_eq!(
        classify("github.com/user/repo", Language::Go),
        DependencyKind::ThirdParty
    );
    assert_eq!(classify("net/http", Language::Go), DependencyKind::ThirdParty);
}

#[test]
fn unknown_language_defaults_to_external() {
    assert_eq!(classify("anything", Language::Unknown), DependencyKind::ThirdParty);
}
