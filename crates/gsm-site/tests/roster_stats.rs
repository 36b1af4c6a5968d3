mod common;

use gsm_core::GsmError;
use gsm_site::{Contributor, RoleFilter, Roster, UpstreamContributor};

use common::fixture_roster;

fn names(contributors: &[&Contributor]) -> Vec<String> {
    contributors.iter().map(|c| c.name.clone()).collect()
}

#[test]
fn fixture_stats_match_hand_totals() {
    let roster = fixture_roster();
    let stats = roster.stats();
    assert_eq!(stats.contributors, 4);
    assert_eq!(stats.total_contributions, 240);
    assert_eq!(stats.average_contributions, 60);
    assert_eq!(roster.contribution_percentage(120), 50);
}

#[test]
fn contributors_sort_by_count_descending() {
    let roster = fixture_roster();
    assert_eq!(
        names(&roster.sorted_by_contributions()),
        ["Lin Wei", "Maria Santos", "Ada Brook", "Kenji Ito"]
    );
}

#[test]
fn role_filters_partition_the_wall() {
    let roster = fixture_roster();
    assert_eq!(names(&roster.filter(RoleFilter::Core)), ["Maria Santos"]);
    assert_eq!(names(&roster.filter(RoleFilter::Advisor)), ["Kenji Ito"]);
    assert_eq!(
        names(&roster.filter(RoleFilter::Community)),
        ["Lin Wei", "Ada Brook"]
    );
    assert_eq!(roster.filter(RoleFilter::All).len(), 4);

    let founder = &roster.contributors()[0];
    assert!(founder.is_core_badge());
    assert!(!founder.is_core());
}

#[test]
fn chinese_role_keywords_are_recognised() {
    let roster = Roster::from_json_slice(
        r#"[{"name":"张三","role":"核心成员"},{"name":"李四","role":"学术顾问"}]"#.as_bytes(),
    )
    .unwrap();
    assert_eq!(names(&roster.filter(RoleFilter::Core)), ["张三"]);
    assert_eq!(names(&roster.filter(RoleFilter::Advisor)), ["李四"]);
}

#[test]
fn empty_roster_has_zero_stats() {
    let roster = Roster::default();
    assert_eq!(roster.average_contributions(), 0);
    assert_eq!(roster.contribution_percentage(10), 0);
}

#[test]
fn upstream_merge_updates_and_appends() {
    let mut roster = fixture_roster();
    let upstream = vec![
        UpstreamContributor {
            login: "msantos".into(),
            contributions: 95,
            avatar_url: String::new(),
        },
        UpstreamContributor {
            login: "newdev".into(),
            contributions: 3,
            avatar_url: "https://avatars.example/newdev".into(),
        },
    ];
    let summary = roster.merge_upstream(&upstream, "2026-10-17");
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.added, 1);
    assert_eq!(roster.len(), 5);
    assert_eq!(roster.contributors()[1].contributions, 95);

    let added = roster.contributors().last().unwrap();
    assert_eq!(added.github.as_deref(), Some("newdev"));
    assert_eq!(added.joined.as_deref(), Some("2026-10-17"));
    assert_eq!(added.role, "Code contributor");
    assert_eq!(roster.filter(RoleFilter::Community).len(), 3);
}

#[test]
fn unknown_filter_is_a_catalog_error() {
    let err = "staff".parse::<RoleFilter>().unwrap_err();
    match err {
        GsmError::Catalog(info) => assert_eq!(info.code, "unknown_filter"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_roster_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = Roster::load(&dir.path().join("absent.json")).unwrap_err();
    match err {
        GsmError::Io(info) => {
            assert_eq!(info.code, "roster_read");
            assert!(info.context.contains_key("path"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
