use columns::{Arrangements, Breakpoints, ColumnStyle, annotate_columns, emit};

fn declaration_value(style: &ColumnStyle, property: &str) -> Option<String> {
    style
        .declarations()
        .into_iter()
        .find(|decl_item| decl_item.property == property)
        .map(|decl_item| decl_item.value)
}

#[test]
fn quarter_three_quarter_mirrors_to_smaller_breakpoints() {
    let _ = env_logger::builder().is_test(true).try_init();
    let arrangements = Arrangements::default().with("xl", ["1/4", "3/4"]);
    let styles = emit(3, &arrangements);
    assert_eq!(styles.len(), 3);

    let expected = ["1/4", "3/4", "1/4"];
    for (style, weight) in styles.iter().zip(expected) {
        for breakpoint in ["xl", "lg", "md", "sm"] {
            let property = format!("--columns-{breakpoint}");
            assert_eq!(
                declaration_value(style, &property).as_deref(),
                Some(weight),
                "column {} at {breakpoint}",
                style.index
            );
        }
    }

    let first = styles.first();
    assert_eq!(
        first
            .and_then(|style| declaration_value(style, "--flex-xl"))
            .as_deref(),
        Some("0 1 var(--flex-basis)")
    );
    assert_eq!(
        first
            .and_then(|style| style.entry("xl"))
            .map(|entry| entry.flex_basis.to_string())
            .as_deref(),
        Some("calc(100% * 1/4)")
    );
}

#[test]
fn keyword_columns_map_to_flex_shorthands() {
    let _ = env_logger::builder().is_test(true).try_init();
    let arrangements = Arrangements::default()
        .with("xl", ["auto", "fill", "full", "42px"])
        .with("sm", ["full"]);
    let styles = emit(4, &arrangements);
    let flexes: Vec<Option<String>> = styles
        .iter()
        .map(|style| declaration_value(style, "--flex-xl"))
        .collect();
    assert_eq!(
        flexes,
        vec![
            Some("0 1 auto".to_owned()),
            Some("1 0 0".to_owned()),
            Some("0 0 100%".to_owned()),
            Some("0 1 42px".to_owned()),
        ]
    );
    for style in &styles {
        assert_eq!(
            declaration_value(style, "--flex-sm").as_deref(),
            Some("0 0 100%")
        );
        assert_eq!(
            declaration_value(style, "--columns-xl").as_deref(),
            Some("1")
        );
    }
}

#[test]
fn style_attributes_are_merged_in_document_order() {
    let _ = env_logger::builder().is_test(true).try_init();
    let arrangements = Arrangements::default()
        .with("xl", ["1/3", "2/3"])
        .with("md", ["50%"]);
    let revised = annotate_columns(
        &["  padding: 1rem ; ;--flex-xl: stale", "", "color:red;"],
        &arrangements,
    );
    assert_eq!(revised.len(), 3);
    assert_eq!(
        revised.first().map(String::as_str),
        Some(
            "padding: 1rem;\
             --columns-xl:1/3;--columns-lg:1/3;--columns-md:1/2;--columns-sm:1/2;\
             --flex-xl:0 1 var(--flex-basis);--flex-lg:0 1 var(--flex-basis);\
             --flex-md:0 1 var(--flex-basis);--flex-sm:0 1 var(--flex-basis)"
        )
    );
    assert!(
        revised
            .get(1)
            .is_some_and(|style| style.starts_with("--columns-xl:2/3;--columns-lg:2/3;"))
    );
    assert!(
        revised
            .get(2)
            .is_some_and(|style| style.starts_with("color:red;--columns-xl:1/3;"))
    );
}

#[test]
fn custom_breakpoints_follow_caller_order() {
    let _ = env_logger::builder().is_test(true).try_init();
    let breakpoints = Breakpoints::new(["desktop", "tablet", "mobile"]);
    let arrangements = Arrangements::new(&breakpoints)
        .with("desktop", ["1/2"])
        .with("mobile", ["full"]);
    let styles = emit(2, &arrangements);
    let properties: Vec<String> = styles
        .first()
        .map(|style| {
            style
                .declarations()
                .into_iter()
                .map(|decl_item| format!("{}:{}", decl_item.property, decl_item.value))
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(
        properties,
        vec![
            "--columns-desktop:1/2",
            "--columns-tablet:1/2",
            "--columns-mobile:1",
            "--flex-desktop:0 1 var(--flex-basis)",
            "--flex-tablet:0 1 var(--flex-basis)",
            "--flex-mobile:0 0 100%",
        ]
    );
}

#[test]
fn empty_largest_breakpoint_gives_equal_columns_everywhere() {
    let _ = env_logger::builder().is_test(true).try_init();
    let arrangements = Arrangements::default();
    for style in emit(3, &arrangements) {
        for entry in &style.entries {
            assert_eq!(entry.flex.to_string(), "1 1 0%");
            assert_eq!(entry.columns_declaration().value, "1");
            assert_eq!(entry.fraction, None);
        }
    }
}

#[test]
fn author_styles_survive_annotation() {
    let _ = env_logger::builder().is_test(true).try_init();
    let arrangements = Arrangements::default().with("xl", ["1/2"]);
    let revised = annotate_columns(
        &["background-image:url(data:image/png;base64,AAAA);COLOR:Red;custom-flag"],
        &arrangements,
    );
    assert!(revised.first().is_some_and(|style| style.starts_with(
        "background-image:url(data:image/png;base64,AAAA);COLOR:Red;custom-flag;--columns-xl:1/2;"
    )));
}

#[test]
fn zero_denominator_falls_back_to_equal_width() {
    let _ = env_logger::builder().is_test(true).try_init();
    let arrangements = Arrangements::default().with("xl", ["1/0"]);
    let styles = emit(1, &arrangements);
    let first = styles.first();
    for breakpoint in ["xl", "lg", "md", "sm"] {
        assert_eq!(
            first
                .and_then(|style| declaration_value(style, &format!("--flex-{breakpoint}")))
                .as_deref(),
            Some("1 1 0%")
        );
        assert_eq!(
            first
                .and_then(|style| declaration_value(style, &format!("--columns-{breakpoint}")))
                .as_deref(),
            Some("1")
        );
    }
}
