use std::sync::Arc;

use antmap::{MappingTarget, ParamConstraint, ParamValue, RegexConstraint, UrlMapping};

fn numeric(name: &str) -> ParamConstraint {
    let validator = RegexConstraint::new(r"\d+").expect("validator regex should compile");
    ParamConstraint::with_validator(name, Arc::new(validator))
}

#[test]
fn mapping_when_pattern_is_static_then_only_exact_path_matches() {
    let mapping = UrlMapping::new("/book/list", Vec::new()).expect("mapping should build");

    assert!(mapping.match_uri("/book/list").is_some());
    assert!(mapping.match_uri("/book/list/").is_some());
    assert!(mapping.match_uri("/book").is_none());
    assert!(mapping.match_uri("/book/list/extra").is_none());
}

#[test]
fn mapping_when_capture_matches_then_parameter_is_extracted() {
    let mapping = UrlMapping::new("/blog/(*)", vec![ParamConstraint::new("id")])
        .expect("mapping should build");

    let info = mapping.match_uri("/blog/my-post").expect("path should match");

    assert_eq!(
        info.parameters().get("id"),
        Some(&ParamValue::from("my-post"))
    );
}

#[test]
fn mapping_when_constraint_rejects_value_then_match_is_silent_negative() {
    let mapping =
        UrlMapping::new("/blog/(*)", vec![numeric("id")]).expect("mapping should build");

    assert!(mapping.match_uri("/blog/not-a-number").is_none());

    let info = mapping.match_uri("/blog/42").expect("numeric id should match");
    assert_eq!(info.parameters().get("id"), Some(&ParamValue::from("42")));
}

#[test]
fn mapping_when_optional_token_absent_then_shorter_variant_matches() {
    let mapping = UrlMapping::new("/shop/(*)?", vec![ParamConstraint::new("id")])
        .expect("mapping should build");

    let with_id = mapping.match_uri("/shop/7").expect("full variant should match");
    assert_eq!(with_id.parameters().get("id"), Some(&ParamValue::from("7")));

    let without_id = mapping.match_uri("/shop").expect("short variant should match");
    assert!(without_id.parameters().get("id").is_none());
}

#[test]
fn mapping_when_captured_value_embeds_question_mark_then_truncated_before_validation() {
    let mapping =
        UrlMapping::new("/blog/(*)", vec![numeric("id")]).expect("mapping should build");

    let info = mapping
        .match_uri("/blog/42?format=json")
        .expect("truncated value should satisfy the constraint");

    assert_eq!(info.parameters().get("id"), Some(&ParamValue::from("42")));
}

#[test]
fn mapping_when_residual_segments_follow_last_capture_then_paired_as_parameters() {
    let mapping = UrlMapping::new("/show/(*)/**", vec![ParamConstraint::new("id")])
        .expect("mapping should build");

    let info = mapping
        .match_uri("/show/5/sort/date/order/desc")
        .expect("path should match");

    assert_eq!(info.parameters().get("id"), Some(&ParamValue::from("5")));
    assert_eq!(info.parameters().get("sort"), Some(&ParamValue::from("date")));
    assert_eq!(info.parameters().get("order"), Some(&ParamValue::from("desc")));
}

#[test]
fn mapping_when_residual_has_unpaired_trailing_token_then_it_is_dropped() {
    let mapping = UrlMapping::new("/show/(*)/**", vec![ParamConstraint::new("id")])
        .expect("mapping should build");

    let info = mapping
        .match_uri("/show/5/sort/date/dangling")
        .expect("path should match");

    assert_eq!(info.parameters().get("sort"), Some(&ParamValue::from("date")));
    assert!(info.parameters().get("dangling").is_none());
}

#[test]
fn mapping_when_fixed_parameter_collides_with_capture_then_fixed_value_wins() {
    let mapping = UrlMapping::builder("/page/(*)")
        .constraint(ParamConstraint::new("id"))
        .parameter("id", "pinned")
        .parameter("lang", "en")
        .build()
        .expect("mapping should build");

    let info = mapping.match_uri("/page/9").expect("path should match");

    assert_eq!(info.parameters().get("id"), Some(&ParamValue::from("pinned")));
    assert_eq!(info.parameters().get("lang"), Some(&ParamValue::from("en")));
}

#[test]
fn mapping_when_controller_is_static_then_target_is_fixed() {
    let mapping = UrlMapping::builder("/books")
        .controller("book")
        .action("list")
        .build()
        .expect("mapping should build");

    let info = mapping.match_uri("/books").expect("path should match");

    assert_eq!(info.controller(), Some(&MappingTarget::Fixed("book".into())));
    assert_eq!(info.action(), Some(&MappingTarget::Fixed("list".into())));
    assert!(info.view().is_none());
}

#[test]
fn mapping_when_controller_is_constrained_then_target_resolves_late() {
    let mapping = UrlMapping::new(
        "/(*)/(*)",
        vec![
            ParamConstraint::new("controller"),
            ParamConstraint::new("action"),
        ],
    )
    .expect("mapping should build");

    let info = mapping.match_uri("/book/show").expect("path should match");

    let controller = info.controller().expect("controller target should exist");
    assert_eq!(controller, &MappingTarget::Deferred("controller".into()));
    assert_eq!(controller.resolve(info.parameters()), Some("book"));

    let action = info.action().expect("action target should exist");
    assert_eq!(action.resolve(info.parameters()), Some("show"));
}

#[test]
fn mapping_when_groups_outnumber_constraints_then_build_fails() {
    let err = UrlMapping::new("/book/(*)", Vec::new())
        .expect_err("unbound capture group should be a configuration error");

    match err {
        antmap::PatternError::UnboundCaptureGroups {
            groups,
            constraints,
            ..
        } => {
            assert_eq!(groups, 1);
            assert_eq!(constraints, 0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn mapping_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<UrlMapping>();
    assert_send_sync::<antmap::UrlMappingTable>();
}
