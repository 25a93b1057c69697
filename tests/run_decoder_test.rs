//! Integration tests for run decoding.

use unrun::{
    parse_run, parse_run_with_options, Color, ContentChild, DecodeOptions, ErrorKind, FontSize,
    RunDecoder,
};

const W_NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

fn run_xml(body: &str) -> String {
    format!("<w:r {}>{}</w:r>", W_NS, body)
}

#[test]
fn test_content_order_matches_document_order() {
    let xml = run_xml(
        r#"<w:t>one</w:t><w:tab/><w:drawing><wp:inline/></w:drawing><w:t xml:space="preserve"> two </w:t><w:tab/>"#,
    );
    let run = parse_run(&xml).unwrap();

    let kinds: Vec<&str> = run
        .children
        .iter()
        .map(|c| match c {
            ContentChild::TextSpan(_) => "t",
            ContentChild::Tab => "tab",
            ContentChild::EmbeddedObject(_) => "drawing",
            ContentChild::Unrecognized(_) => "other",
        })
        .collect();

    assert_eq!(kinds, vec!["t", "tab", "drawing", "t", "tab"]);
    assert_eq!(run.plain_text(), "one\t two \t");
}

#[test]
fn test_empty_run() {
    let run = parse_run(&run_xml("")).unwrap();

    assert!(run.children.is_empty());
    assert!(run.properties.is_none());
    assert!(run.field_instruction.is_none());
    assert!(run.is_empty());
}

#[test]
fn test_run_with_only_unknown_children_is_empty() {
    let run = parse_run(&run_xml(r#"<w:lastRenderedPageBreak/><w:br w:type="page"/>"#)).unwrap();
    assert!(run.is_empty());
}

#[test]
fn test_properties_size_and_color() {
    let run = parse_run(&run_xml(
        r#"<w:rPr><w:sz w:val="24"/><w:color w:val="FF0000"/></w:rPr><w:t>Red</w:t>"#,
    ))
    .unwrap();

    let props = run.properties.expect("properties");
    assert_eq!(props.size, Some(FontSize::new("24")));
    assert_eq!(props.color, Some(Color::new("FF0000")));
    assert!(props.run_style.is_none());
    assert!(props.paragraph_style.is_none());
}

#[test]
fn test_unknown_vendor_element_is_ignored() {
    let run = parse_run(&run_xml(
        r#"<w14:glow w14:rad="63500"><w14:srgbClr w14:val="FF0000"/></w14:glow><w:t>Hello</w:t>"#,
    ))
    .unwrap();

    assert_eq!(run.children, vec![ContentChild::TextSpan("Hello".into())]);
}

#[test]
fn test_unknown_element_before_and_after_content() {
    let run = parse_run(&run_xml(
        r#"<mc:AlternateContent><mc:Choice><w:t>inner</w:t></mc:Choice></mc:AlternateContent><w:t>Hello</w:t><x:ext/>"#,
    ))
    .unwrap();

    // Text nested inside an unknown element is not lifted into the run.
    assert_eq!(run.children, vec![ContentChild::TextSpan("Hello".into())]);
}

#[test]
fn test_tab_with_attributes_is_one_marker() {
    let run = parse_run(&run_xml(r#"<w:tab w:val="right" w:pos="9360" w:leader="dot"/>"#)).unwrap();
    assert_eq!(run.children, vec![ContentChild::Tab]);
}

#[test]
fn test_malformed_properties_leave_content_intact() {
    let decoded = RunDecoder::new()
        .decode(&run_xml(
            r#"<w:t>before</w:t><w:rPr>stray<w:sz w:val="24"/><w:b/></w:rPr><w:t>after</w:t>"#,
        ))
        .unwrap();

    assert!(decoded.value.properties.is_none());
    assert_eq!(
        decoded.value.children,
        vec![
            ContentChild::TextSpan("before".into()),
            ContentChild::TextSpan("after".into()),
        ]
    );
    assert_eq!(decoded.diagnostics.len(), 1);
    assert_eq!(decoded.diagnostics[0].element, "rPr");
}

#[test]
fn test_malformed_properties_fail_in_strict_mode() {
    let err = parse_run_with_options(
        &run_xml(r#"<w:rPr>stray</w:rPr><w:t>x</w:t>"#),
        DecodeOptions::new().strict(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
}

#[test]
fn test_truncated_run_is_stream_error() {
    let err = parse_run(r#"<w:r><w:rPr><w:sz w:val="24"/></w:rPr><w:t>Hel"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Stream);
}

#[test]
fn test_decoding_is_idempotent() {
    let xml = run_xml(
        r#"<w:rPr><w:rStyle w:val="Strong"/></w:rPr><w:instrText xml:space="preserve"> HYPERLINK "x" </w:instrText><w:t>a</w:t><w:drawing><wp:anchor><wp:extent cx="1" cy="2"/></wp:anchor></w:drawing>"#,
    );

    let first = parse_run(&xml).unwrap();
    let second = parse_run(&xml).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_drawing_subtree_is_kept() {
    let run = parse_run(&run_xml(
        r#"<w:drawing>
            <wp:inline>
                <wp:extent cx="914400" cy="457200"/>
                <wp:docPr id="1" name="Picture 1" descr="Logo"/>
                <a:graphic><a:graphicData><pic:pic><pic:blipFill><a:blip r:embed="rId7"/></pic:blipFill></pic:pic></a:graphicData></a:graphic>
            </wp:inline>
        </w:drawing><w:t>caption</w:t>"#,
    ))
    .unwrap();

    let drawing = run.drawings().next().expect("drawing");
    assert!(drawing.is_inline());
    assert_eq!(drawing.embedded_relationship_id(), Some("rId7"));
    assert_eq!(drawing.description(), Some("Logo"));
    assert_eq!(drawing.extent().map(|e| (e.cx, e.cy)), Some((914_400, 457_200)));
    assert_eq!(run.plain_text(), "caption");
}

#[test]
fn test_paragraph_style_inside_run_properties_is_preserved() {
    let run = parse_run(&run_xml(r#"<w:rPr><w:pStyle w:val="Title"/></w:rPr>"#)).unwrap();
    let props = run.properties.unwrap();
    assert_eq!(props.paragraph_style.unwrap().value, "Title");
}

#[test]
fn test_prefix_is_ignored_for_dispatch() {
    let run = parse_run(r#"<r><rPr><sz val="18"/></rPr><t>plain</t><tab/></r>"#).unwrap();

    assert_eq!(run.plain_text(), "plain\t");
    assert_eq!(run.properties.unwrap().size.unwrap().points(), Some(9.0));
}
