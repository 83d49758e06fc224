use opal_syntax::{
    DiagnosticKind, Node, NodeKind, ParseOptions, Position, parse, parse_with_options,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.opal",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn kinds(root: &Node) -> Vec<NodeKind> {
    root.walk().map(|n| n.kind).collect()
}

/// Asserts the shape rules every parsed tree obeys.
///
/// - the root is untracked and only the root carries errors
/// - every other node has a 1-based position
/// - no two text runs sit side by side
fn check_invariants(root: &Node) {
    assert_eq!(root.kind, NodeKind::Root);
    assert!(root.position().is_untracked());

    for node in root.walk().skip(1) {
        assert!(
            node.line >= 1 && node.column >= 1,
            "untracked {} below the root",
            node.kind
        );
        assert!(node.errors.is_empty(), "errors on {}", node.kind);
        for pair in node.children.windows(2) {
            assert!(
                !(pair[0].kind == NodeKind::Text && pair[1].kind == NodeKind::Text),
                "adjacent text runs under {}: {:?} {:?}",
                node.kind,
                pair[0].value,
                pair[1].value
            );
        }
    }
}

#[test]
fn empty_input() {
    let doc = parse("");
    assert_eq!(kinds(&doc.root), [NodeKind::Root]);
    assert!(!doc.has_errors());
}

#[rstest]
#[case::plain("Foo bar baz", &["Foo bar baz"])]
#[case::semicolons("Foo; bar; baz", &["Foo", "bar", "baz"])]
#[case::blank_lines("Foo\n\nbar\n \n\nbaz", &["Foo", "bar", "baz"])]
#[case::escaped("Foo\\; bar\\; baz", &["Foo; bar; baz"])]
fn paragraphs(#[case] src: &str, #[case] expected: &[&str]) {
    init_logger();
    let doc = parse(src);
    check_invariants(&doc.root);

    let values: Vec<_> = doc
        .root
        .children
        .iter()
        .map(|para| {
            assert_eq!(para.kind, NodeKind::Paragraph);
            assert_eq!(para.children.len(), 1);
            para.children[0].value.as_str()
        })
        .collect();
    assert_eq!(values, expected);
}

#[test]
fn inline_bold() {
    let doc = parse("Foo `b bar` baz");
    assert_eq!(
        kinds(&doc.root),
        [
            NodeKind::Root,
            NodeKind::Paragraph,
            NodeKind::Text,
            NodeKind::Bold,
            NodeKind::Text
        ]
    );
    assert_eq!(doc.root.children[0].children[1].value, "bar");
}

#[test]
fn heading_block() {
    let doc = parse(".1: Foo bar baz");
    let heading = &doc.root.children[0];
    assert_eq!(heading.kind, NodeKind::Heading(1));
    assert_eq!(heading.level(), Some(1));
    assert_eq!(heading.children[0].value, "Foo bar baz");
}

#[test]
fn list_block() {
    let doc = parse(".list\n- foo\n- bar\n- baz");
    let list = &doc.root.children[0];
    assert_eq!(list.kind, NodeKind::List);
    assert_eq!(list.children.len(), 3);
    for item in &list.children {
        assert_eq!(item.kind, NodeKind::ListItem);
        assert_eq!(kinds(item), [NodeKind::ListItem, NodeKind::Text]);
    }
}

#[test]
fn table_block() {
    let doc = parse(".table\na | b\nc | d");
    let table = &doc.root.children[0];
    assert_eq!(table.kind, NodeKind::Table);
    assert_eq!(table.children.len(), 2);
    for row in &table.children {
        assert_eq!(row.kind, NodeKind::TableRow);
        assert_eq!(row.children.len(), 2);
        for cell in &row.children {
            assert_eq!(kinds(cell), [NodeKind::TableData, NodeKind::Text]);
        }
    }
}

#[rstest]
#[case::labelled("Foo `l bar example.com` baz", "bar", "example.com")]
#[case::self_labelled("Foo `l _ example.com` baz", "example.com", "example.com")]
#[case::last_whitespace_splits("`l the full docs example.com/a`", "the full docs", "example.com/a")]
fn hyperlinks(#[case] src: &str, #[case] display_text: &str, #[case] url: &str) {
    let doc = parse(src);
    let link = doc
        .root
        .walk()
        .find(|n| n.kind == NodeKind::Hyperlink)
        .unwrap();
    assert_eq!(link.display_text, display_text);
    assert_eq!(link.url, url);
    assert!(!doc.has_errors());
}

#[rstest]
#[case::inline("a `nope x` b")]
#[case::block(".nope: x\n\nb")]
#[case::block_with_body(".nope\nx\n\nb")]
fn unknown_keyword_is_reported_once(#[case] src: &str) {
    let doc = parse(src);
    check_invariants(&doc.root);

    let invalid = doc
        .root
        .walk()
        .filter(|n| n.kind == NodeKind::InvalidTag)
        .count();
    assert_eq!(invalid, 1);
    assert_eq!(doc.diagnostics.len(), 1);
    assert_eq!(doc.diagnostics[0].kind, DiagnosticKind::InvalidTagName);

    // parsing went on past the bad tag
    let last = doc.root.walk().last().unwrap();
    assert_eq!(last.value, "b");
}

#[rstest]
#[case(";")]
#[case(".")]
#[case("`")]
#[case("\\")]
#[case("``")]
#[case("`l`")]
#[case(". x")]
#[case("./")]
#[case(".1/")]
#[case(".list/")]
#[case(".list\n-")]
#[case(".list\n- `b")]
#[case(".table\n|")]
#[case(".table\n| |\n|")]
#[case("- - -")]
#[case("a\\")]
#[case("`b x; y`")]
#[case("\n\n\n")]
#[case(".1:\n\n.2:")]
#[case("`` `` ``")]
#[case("\\\n\\\n")]
fn malformed_input_still_yields_a_tree(#[case] src: &str) {
    init_logger();
    let doc = parse(src);
    check_invariants(&doc.root);
    assert_eq!(doc.root.errors.len(), doc.diagnostics.len());
}

#[test]
fn parsing_is_deterministic() {
    let src = read_fixture("field_notes");
    assert_eq!(parse(&src), parse(&src));
}

#[test]
fn independent_parses_run_in_parallel() {
    let sources = [
        read_fixture("field_notes"),
        read_fixture("broken"),
        "Foo `b bar` baz".to_string(),
    ];
    let sequential: Vec<_> = sources.iter().map(|src| parse(src)).collect();

    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|src| scope.spawn(move || parse(src)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(parallel, sequential);
}

#[test]
fn fixture_field_notes() {
    init_logger();
    let doc = parse(&read_fixture("field_notes"));
    check_invariants(&doc.root);
    assert!(!doc.has_errors(), "{:?}", doc.root.errors);

    use NodeKind::*;
    assert_eq!(
        kinds(&doc.root),
        [
            Root,
            Title,
            Text,
            Heading(1),
            Text,
            Paragraph,
            Text,
            Bold,
            Text,
            Hyperlink,
            Text,
            List,
            ListItem,
            Text,
            Italic,
            Text,
            ListItem,
            Text,
            ListItem,
            Text,
            Hyperlink,
            Table,
            TableRow,
            TableData,
            Text,
            TableData,
            Text,
            TableRow,
            TableData,
            Text,
            TableData,
            Text,
            TableRow,
            TableData,
            Text,
            TableData,
            Text,
            TableOfContents,
        ]
    );

    // positions only ever move forward through the document
    let positions: Vec<Position> = doc.root.walk().skip(1).map(Node::position).collect();
    assert!(positions.windows(2).all(|w| w[0] <= w[1]), "{positions:?}");

    let list = &doc.root.children[3];
    assert!(list.is_ordered_list());
    assert_eq!(list.children[1].children[0].value, "Refill water (both tanks)");

    let table = &doc.root.children[4];
    assert!(table.has_header_row());
    assert_eq!(table.children[2].children[1].children[0].value, "7");

    let paragraph = &doc.root.children[2];
    assert_eq!(paragraph.children[2].value, "before sunrise. Notes are in");
    assert_eq!(paragraph.children[3].display_text, "the log");
    assert_eq!(paragraph.children[3].url, "https://example.com/log");
    assert_eq!(paragraph.children[3].position(), Position::new(6, 1));
}

#[test]
fn fixture_broken_reports_with_source_label() {
    init_logger();
    let options = ParseOptions::default().with_source_label("broken.opal");
    let doc = parse_with_options(&read_fixture("broken"), &options);
    check_invariants(&doc.root);

    assert_eq!(
        doc.root.errors,
        [
            "Invalid tag name at broken.opal:1:2",
            "Invalid tag name at broken.opal:3:12",
            "Unexpected end of file at broken.opal:3:38",
        ]
    );

    let paragraph = &doc.root.children[1];
    let inline: Vec<_> = paragraph.children.iter().map(|n| n.kind).collect();
    assert_eq!(
        inline,
        [
            NodeKind::Text,
            NodeKind::InvalidTag,
            NodeKind::Text,
            NodeKind::Bold
        ]
    );
    assert_eq!(paragraph.children[3].value, "unclosed");
}

#[test]
fn serializes_to_the_renderer_shape() {
    let doc = parse(".list/n\n- `l docs example.com`\n\n`zz x`");
    let value = serde_json::to_value(&doc.root).unwrap();

    assert_eq!(
        value,
        json!({
            "type": "Root",
            "errors": ["Invalid tag name at line 4, column 2"],
            "children": [
                {
                    "type": "List",
                    "attrs": ["n"],
                    "line": 1,
                    "column": 1,
                    "children": [{
                        "type": "ListItem",
                        "line": 2,
                        "column": 1,
                        "children": [{
                            "type": "Hyperlink",
                            "displayText": "docs",
                            "url": "example.com",
                            "line": 2,
                            "column": 3
                        }]
                    }]
                },
                {
                    "type": "Paragraph",
                    "line": 4,
                    "column": 1,
                    "children": [{
                        "type": "InvalidTag",
                        "value": "x",
                        "line": 4,
                        "column": 1
                    }]
                }
            ]
        })
    );
}
