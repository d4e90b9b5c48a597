use antmap::{ParamConstraint, UrlMapping};

#[test]
fn binding_when_placeholder_is_plain_then_constraint_is_required() {
    let mapping = UrlMapping::new("/book/(*)", vec![ParamConstraint::new("id")])
        .expect("mapping should build");

    assert!(!mapping.constraints()[0].is_nullable());
}

#[test]
fn binding_when_placeholder_has_question_mark_then_constraint_is_nullable() {
    let mapping = UrlMapping::new("/shop/(*)?", vec![ParamConstraint::new("id")])
        .expect("mapping should build");

    assert!(mapping.constraints()[0].is_nullable());
}

#[test]
fn binding_when_constraint_has_no_placeholder_then_constraint_is_nullable() {
    let mapping = UrlMapping::new(
        "/shop/(*)",
        vec![ParamConstraint::new("id"), ParamConstraint::new("sort")],
    )
    .expect("mapping should build");

    assert!(!mapping.constraints()[0].is_nullable());
    assert!(mapping.constraints()[1].is_nullable());
}

#[test]
fn binding_when_capture_is_double_wildcard_then_constraint_is_nullable() {
    let mapping = UrlMapping::new(
        "/blog/(*)/(**)",
        vec![ParamConstraint::new("blogId"), ParamConstraint::new("rest")],
    )
    .expect("mapping should build");

    assert!(!mapping.constraints()[0].is_nullable());
    assert!(mapping.constraints()[1].is_nullable());
}

#[test]
fn binding_when_mixed_optional_markers_then_each_decision_is_positional() {
    let mapping = UrlMapping::new(
        "/(*)/(*)?/(*)",
        vec![
            ParamConstraint::new("controller"),
            ParamConstraint::new("action"),
            ParamConstraint::new("id"),
        ],
    )
    .expect("mapping should build");

    assert!(!mapping.constraints()[0].is_nullable());
    assert!(mapping.constraints()[1].is_nullable());
    assert!(!mapping.constraints()[2].is_nullable());
}
