use chrono::DateTime;
use vbundle_core::bundle::{Bundle, Changelog, Component};
use vbundle_core::group::Group;

fn bundle(name: &str, version: &str) -> Bundle {
    Bundle {
        changelogs: vec![Changelog {
            component: "etcd".to_string(),
            description: "Etcd version updated.".to_string(),
            kind: "changed".to_string(),
        }],
        components: vec![Component::new("etcd", "3.2.0")],
        dependencies: vec![],
        deprecated: false,
        name: name.to_string(),
        time: DateTime::from_timestamp(10, 0),
        version: version.to_string(),
        wip: false,
    }
}

fn members(group: &Group) -> Vec<String> {
    group.iter().map(|b| b.to_string()).collect()
}

#[test]
fn test_seeded_group() {
    let group = Group::seeded(bundle("a-operator", "0.1.0"));
    assert_eq!(group.len(), 1);
    assert!(!group.is_empty());
    assert!(group.contains_authority("a-operator"));
    assert!(!group.contains_authority("b-operator"));
}

#[test]
fn test_sort_members_by_name_then_version() {
    let mut group = Group::seeded(bundle("kubernetes-operator", "0.1.0"));
    group.push(bundle("cloud-config-operator", "0.3.0"));
    group.push(bundle("aws-operator", "1.0.0"));
    group.sort_members();
    assert_eq!(
        members(&group),
        vec![
            "aws-operator@1.0.0",
            "cloud-config-operator@0.3.0",
            "kubernetes-operator@0.1.0",
        ]
    );
}

#[test]
fn test_sort_members_version_is_lexicographic() {
    let mut group = Group::from(vec![bundle("x", "0.10.0"), bundle("x", "0.9.0")]);
    group.sort_members();
    assert_eq!(members(&group), vec!["x@0.10.0", "x@0.9.0"]);
}

#[test]
fn test_equality_is_ordered_and_by_value() {
    let a = Group::from(vec![bundle("a", "0.1.0"), bundle("b", "0.1.0")]);
    let b = Group::from(vec![bundle("a", "0.1.0"), bundle("b", "0.1.0")]);
    let reversed = Group::from(vec![bundle("b", "0.1.0"), bundle("a", "0.1.0")]);
    assert_eq!(a, b);
    assert_ne!(a, reversed);

    let mut deprecated = b.clone().into_bundles();
    deprecated[0].deprecated = true;
    assert_ne!(a, Group::from(deprecated));
}

#[test]
fn test_is_all_deprecated() {
    let mut first = bundle("a", "0.1.0");
    let mut second = bundle("b", "0.1.0");
    first.deprecated = true;
    assert!(!Group::from(vec![first.clone(), second.clone()]).is_all_deprecated());
    second.deprecated = true;
    assert!(Group::from(vec![first, second]).is_all_deprecated());
    assert!(!Group::default().is_all_deprecated());
}

#[test]
fn test_display_and_serialize() {
    let group = Group::from(vec![bundle("a", "0.1.0"), bundle("b", "0.2.0")]);
    assert_eq!(group.to_string(), "[a@0.1.0, b@0.2.0]");
    let json = serde_json::to_value(&group).unwrap();
    assert!(json.is_array());
    assert_eq!(json[1]["name"], "b");
}
