use textdb::{parse_indental, parse_indental_strict, parse_indental_with_options, ParseOptions};

const BASIC: &str = "\
NAME
  KEY : VALUE
  LIST
    ITEM1
    ITEM2
";

/// Mirrors a real-world editing artifact: trailing spaces and tabs on
/// every line must never change the parse.
fn with_trailing_spaces(source: &str) -> String {
    source.replace('\n', " \t \n")
}

#[test]
fn test_basic_document() {
    let doc = parse_indental(BASIC);
    assert!(doc.is_valid());
    assert_eq!(doc.categories(), vec!["NAME"]);

    let body = doc.get("NAME").unwrap();
    assert_eq!(body.get_str("KEY"), Some("VALUE"));
    assert_eq!(
        body.get_list("LIST"),
        Some(&["ITEM1".to_string(), "ITEM2".to_string()][..])
    );
}

#[test]
fn test_trailing_whitespace_is_ignored() {
    let doc = parse_indental(&with_trailing_spaces(BASIC));
    assert!(doc.is_valid());
    assert_eq!(doc, parse_indental(BASIC));
}

#[test]
fn test_multiple_categories_keep_source_order() {
    let source = "NAME\n  KEY : VALUE\nABC\nXYZ\n";
    let doc = parse_indental(source);
    assert_eq!(doc.categories(), vec!["NAME", "ABC", "XYZ"]);
}

#[test]
fn test_names_are_uppercased_but_values_are_not() {
    let doc = parse_indental("colors\n  favorite : Deep Blue\n");
    let body = doc.get("COLORS").unwrap();
    assert_eq!(body.get_str("FAVORITE"), Some("Deep Blue"));
}

#[test]
fn test_symbolize_names() {
    let options = ParseOptions::new().with_symbolize_names(true);
    let doc = parse_indental_with_options("My Category\n  Some Key : Deep Blue\n", options);

    assert_eq!(doc.categories(), vec!["my_category"]);
    assert_eq!(
        doc.get("my_category").unwrap().get_str("some_key"),
        Some("Deep Blue")
    );
}

#[test]
fn test_value_may_contain_the_separator() {
    let doc = parse_indental("NAME\n  KEY : a : b : c\n");
    assert_eq!(doc.get("NAME").unwrap().get_str("KEY"), Some("a : b : c"));
}

#[test]
fn test_empty_value() {
    let doc = parse_indental("NAME\n  KEY :\n");
    assert!(doc.is_valid());
    assert_eq!(doc.get("NAME").unwrap().get_str("KEY"), Some(""));
}

#[test]
fn test_comments_and_blank_lines_count_in_numbering() {
    let source = "NAME\n; note\n\n  KEY : A\n  KEY : B\n";
    let doc = parse_indental(source);
    assert_eq!(doc.errors().len(), 1);
    assert_eq!(doc.errors()[0].to_string(), "Duplicate key on line 5");
}

#[test]
fn test_tab_indent_is_reported_at_any_width() {
    for source in ["\tINVALID", " \tINVALID", "  \t  INVALID"] {
        let doc = parse_indental(source);
        assert_eq!(doc.errors().len(), 1, "source {source:?}");
        assert_eq!(
            doc.errors()[0].to_string(),
            "Indented with non-space characters on line 1"
        );
    }
}

#[test]
fn test_unexpected_indent_levels() {
    for indent in [1, 3, 5, 6] {
        let source = format!("NAME\n{}X : Y\n", " ".repeat(indent));
        let doc = parse_indental(&source);
        assert_eq!(doc.errors().len(), 1, "indent width {indent}");
        assert_eq!(
            doc.errors()[0].to_string(),
            "Unexpected indent level on line 2"
        );
    }
}

#[test]
fn test_orphaned_lines_after_duplicate_category() {
    let source = "NAME\n  A : 1\nNAME\n  B : 2\nOTHER\n  C : 3\n";
    let doc = parse_indental(source);

    let messages: Vec<String> = doc.errors().iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "Duplicate category on line 3",
            "No category specified on line 4",
        ]
    );

    // The first body is preserved unchanged; parsing resumes at OTHER.
    assert_eq!(doc.get("NAME").unwrap().get_str("A"), Some("1"));
    assert_eq!(doc.get("NAME").unwrap().get_str("B"), None);
    assert_eq!(doc.get("OTHER").unwrap().get_str("C"), Some("3"));
}

#[test]
fn test_list_item_without_a_list() {
    let doc = parse_indental("NAME\n    STRAY\n");
    assert_eq!(doc.errors()[0].to_string(), "No list specified on line 2");
}

#[test]
fn test_strict_mode_returns_the_document_for_clean_input() {
    let doc = parse_indental_strict(BASIC).unwrap();
    assert!(doc.is_valid());
    assert_eq!(doc, parse_indental(BASIC));
}

#[test]
fn test_strict_mode_raises_with_the_first_diagnostic() {
    let source = "NAME\nNAME\n  KEY : V\n";
    let err = parse_indental_strict(source).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate category on line 2");
    assert_eq!(err.diagnostic().line(), Some(2));
}

#[test]
fn test_empty_input() {
    let doc = parse_indental("");
    assert!(doc.is_valid());
    assert!(doc.is_empty());
    assert_eq!(doc.categories(), Vec::<&str>::new());
}

#[test]
fn test_template_wrapper_is_stripped() {
    let wrapped = "const doc = `\nNAME\n  KEY : VALUE\n`\n";
    let doc = parse_indental(wrapped);
    assert!(doc.is_valid());
    assert_eq!(doc.get("NAME").unwrap().get_str("KEY"), Some("VALUE"));

    // Numbering restarts inside the wrapper.
    let wrapped = "const doc = `\nNAME\n  KEY : A\n  KEY : B\n`\n";
    let doc = parse_indental(wrapped);
    assert_eq!(doc.errors()[0].to_string(), "Duplicate key on line 3");
}

#[test]
fn test_half_open_wrapper_is_parsed_literally() {
    // No closing backtick: the opening line is an ordinary (invalid)
    // category line, not a wrapper.
    let doc = parse_indental("const doc = `\nNAME\n");
    assert!(doc.is_valid());
    assert_eq!(doc.categories(), vec!["CONST DOC = `", "NAME"]);
}

#[test]
fn test_document_serializes_to_json() {
    let doc = parse_indental(BASIC);
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "NAME": { "KEY": "VALUE", "LIST": ["ITEM1", "ITEM2"] }
        })
    );
}

#[test]
fn test_iteration_in_source_order() {
    let doc = parse_indental("B\n  K : 1\nA\n  K : 2\n");
    let names: Vec<&str> = doc.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}
