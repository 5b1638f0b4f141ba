use blockdown_core::{NodeKind, ParseOptions, SourceBlock, parse_page, parse_page_with_diagnostics};
use blockdown_markdown::{AnchorStyle, RenderOptions, Renderer, render_body, render_document};

const BLOG_POST: &str = r#"{
    "id": "page-1",
    "type": "page",
    "title": "Hello World",
    "children": [
        {"id": "props", "type": "code", "language": "ini",
         "title": "[properties]\nPublished = yes\nTag = rust\nnot a property"},
        {"id": "toc-top", "type": "table_of_contents"},
        {"id": "h-intro", "type": "header", "title": "Intro"},
        {"id": "t1", "type": "text", "title": "Some text."},
        {"id": "h-details", "type": "sub_header", "title": "Details"},
        {"id": "toc-mid", "type": "table_of_contents"},
        {"id": "h-outro", "type": "header", "title": "Outro"},
        {"id": "li", "type": "bulleted_list", "title": "item"},
        {"id": "blank", "type": "text", "title": "   "}
    ]
}"#;

fn blog_post() -> SourceBlock {
    SourceBlock::from_json(BLOG_POST).expect("fixture should decode")
}

#[test]
fn renders_blog_post_document() {
    let page = parse_page(&blog_post(), &ParseOptions::default());
    let options = RenderOptions {
        front_matter: true,
        ..RenderOptions::default()
    };
    let markdown = render_document(&page, &options).expect("front matter should serialize");

    insta::assert_snapshot!(markdown, @r"
    ---
    title: Hello World
    tags: rust
    published: true
    ---


    # Intro
    Some text.
    ## Details
    # Table of Contents
     - [Intro](#Intro)
     - &nbsp;&nbsp;&nbsp;&nbsp;[Details](#Details)
    # Outro
     - item
    ");
}

#[test]
fn toc_only_sees_headings_before_it() {
    let page = parse_page(&blog_post(), &ParseOptions::default());
    let options = RenderOptions::default();
    let renderer = Renderer::new(&page, &options);

    let tocs: Vec<String> = page
        .nodes
        .iter()
        .filter(|n| n.kind() == NodeKind::TableOfContents)
        .map(|n| renderer.render_node(n))
        .collect();

    assert_eq!(tocs.len(), 2);
    assert_eq!(tocs[0], "");
    assert!(tocs[1].contains("[Intro](#Intro)"));
    assert!(tocs[1].contains("[Details](#Details)"));
    assert!(!tocs[1].contains("Outro"));
}

#[test]
fn slug_anchor_option_changes_links_only() {
    let page = parse_page(&blog_post(), &ParseOptions::default());
    let options = RenderOptions {
        anchor_style: AnchorStyle::Slug,
        ..RenderOptions::default()
    };
    let body = render_body(&page, &options);
    assert!(body.contains(" - [Intro](#intro)"));
    assert!(body.contains("[Details](#details)"));
    assert!(body.contains("## Details"));
}

#[test]
fn rendering_is_repeatable() {
    let page = parse_page(&blog_post(), &ParseOptions::default());
    let options = RenderOptions::default();
    let first = render_body(&page, &options);
    let second = render_body(&page, &options);
    assert_eq!(first, second);
}

#[test]
fn unknown_kind_renders_visible_placeholder() {
    let source = SourceBlock::from_json(
        r#"{"id": "p", "type": "page", "title": "T",
            "children": [{"id": "embed-42", "type": "embed", "title": "<iframe>"}]}"#,
    )
    .unwrap();
    let (page, diagnostics) = parse_page_with_diagnostics(&source, &ParseOptions::default());
    assert_eq!(page.nodes[0].kind(), NodeKind::Unsupported);
    assert_eq!(diagnostics.count(), 1);

    let body = render_body(&page, &RenderOptions::default());
    insta::assert_snapshot!(body, @r"
    <!-- unsupported page block
    type: embed
    block id: embed-42
    -->
    ");
}

#[test]
fn properties_block_emits_nothing() {
    let source = SourceBlock::from_json(
        r#"{"id": "p", "type": "page", "title": "",
            "children": [{"id": "c", "type": "code",
                          "title": "foo\n[properties]\nkey1 = val1\nbadline\nkey2=val2"}]}"#,
    )
    .unwrap();
    let page = parse_page(&source, &ParseOptions::default());

    assert!(page.nodes.is_empty());
    assert_eq!(page.properties.get("key1").map(String::as_str), Some("val1"));
    assert_eq!(page.properties.get("key2").map(String::as_str), Some("val2"));
    assert_eq!(page.properties.len(), 2);
    assert_eq!(render_body(&page, &RenderOptions::default()), "");
}

#[test]
fn front_matter_of_untitled_page_omits_title() {
    let source = SourceBlock::from_json(r#"{"id": "p", "type": "page"}"#).unwrap();
    let page = parse_page(&source, &ParseOptions::default());
    let options = RenderOptions {
        front_matter: true,
        ..RenderOptions::default()
    };
    let markdown = render_document(&page, &options).unwrap();
    assert_eq!(markdown, "---\npublished: false\n---\n\n");
    assert!(!page.is_renderable());
    assert_eq!(page.file_name(), Some("p"));
}
