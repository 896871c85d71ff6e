//! Property-style tests over the public extraction API.
//!
//! Each test pins down one of the behavioral guarantees the extraction
//! engine makes, exercised through the same entry points the server uses.

use page_insight::{analyze_detailed, analyze_summary, navigable_links, Link};

/// A handful of structurally different documents, from well-formed to
/// hostile, used to check invariants that must hold for any input.
const DOCUMENTS: &[&str] = &[
    "",
    "plain text, no markup at all",
    "<html><head><title>T</title></head><body></body></html>",
    r##"<html><body>
        <a href="/a">a</a><a href="https://base.example/b">b</a>
        <a href="https://elsewhere.example/c">c</a><a href="#d">d</a>
        <a>e</a><a href="">f</a><a href="mailto:g@example.com">g</a>
    </body></html>"##,
    "<div><a href='/x'>unclosed<a href='broken",
    r#"<body><p>words only here</p></body>"#,
];

#[test]
fn summary_link_counts_always_balance() {
    for html in DOCUMENTS {
        let summary = analyze_summary(html, "https://base.example");
        assert_eq!(
            summary.internal_links + summary.external_links,
            summary.total_links,
            "imbalance for input: {html:?}"
        );
    }
}

#[test]
fn detailed_link_count_matches_navigable_filter() {
    for html in DOCUMENTS {
        let report = analyze_detailed(html, "https://base.example");
        assert_eq!(report.links.len(), report.link_count.min(10));
        for link in &report.links {
            let href = link.href.as_deref().expect("navigable link without href");
            assert!(!href.is_empty());
            assert!(!href.starts_with('#'));
        }
    }
}

#[test]
fn detailed_samples_are_prefixes_in_document_order() {
    let mut html = String::from("<html><head>");
    for i in 0..12 {
        html.push_str(&format!("<meta name=\"m{i}\" content=\"v{i}\">"));
    }
    html.push_str("</head><body>");
    for i in 0..15 {
        html.push_str(&format!("<a href=\"/link{i}\">l{i}</a>"));
    }
    for i in 0..9 {
        html.push_str(&format!("<img src=\"/img{i}.png\">"));
    }
    html.push_str("</body></html>");

    let report = analyze_detailed(&html, "https://base.example");

    assert_eq!(report.links.len(), 10);
    assert_eq!(report.link_count, 15);
    for (i, link) in report.links.iter().enumerate() {
        assert_eq!(link.href.as_deref(), Some(format!("/link{i}").as_str()));
    }

    assert_eq!(report.meta_tags.len(), 10);
    for (i, tag) in report.meta_tags.iter().enumerate() {
        assert_eq!(tag.name, format!("m{i}"));
    }

    assert_eq!(report.images.len(), 5);
    assert_eq!(report.image_count, 9);
    for (i, image) in report.images.iter().enumerate() {
        assert_eq!(image.src, format!("/img{i}.png"));
    }
}

#[test]
fn hrefless_anchor_counts_in_neither_configuration() {
    let html = r#"<html><body><a name="top">bookmark</a><a href="/x">x</a></body></html>"#;

    let report = analyze_detailed(html, "https://base.example");
    assert_eq!(report.link_count, 1);

    let summary = analyze_summary(html, "https://base.example");
    assert_eq!(summary.total_links, 1);
    assert_eq!(summary.external_links, 0);
}

#[test]
fn empty_body_word_count_is_zero() {
    for html in [
        "<html><body></body></html>",
        "<html><body>   \n </body></html>",
        "",
    ] {
        let report = analyze_detailed(html, "https://base.example");
        assert_eq!(report.word_count, 0, "for input: {html:?}");
    }
}

#[test]
fn title_fallbacks_differ_per_configuration() {
    let html = "<html><body><p>untitled page</p></body></html>";

    let report = analyze_detailed(html, "https://base.example");
    assert_eq!(report.title, "No title found");

    let summary = analyze_summary(html, "https://base.example");
    assert_eq!(summary.title, "");
}

#[test]
fn email_found_on_every_surface_appears_once() {
    let html = r#"<html><body>
        <p>Mail support@base.example for help.</p>
        <a href="mailto:support@base.example">mail</a>
        <a href="https://helpdesk.example/new?cc=support@base.example">form</a>
    </body></html>"#;

    let summary = analyze_summary(html, "https://base.example");
    assert_eq!(summary.emails, vec!["support@base.example"]);
}

#[test]
fn property_only_meta_tag_is_retained() {
    let html = r#"<html><head><meta property="og:title" content="X"></head></html>"#;
    let report = analyze_detailed(html, "https://base.example");
    assert_eq!(report.meta_tags.len(), 1);
    assert_eq!(report.meta_tags[0].name, "og:title");
    assert_eq!(report.meta_tags[0].content, "X");
}

#[test]
fn navigable_links_helper_agrees_with_detailed_report() {
    let links = vec![
        Link {
            text: "a".into(),
            href: Some("/a".into()),
        },
        Link {
            text: "b".into(),
            href: Some("#b".into()),
        },
        Link {
            text: "c".into(),
            href: None,
        },
    ];
    let navigable = navigable_links(&links);
    assert_eq!(navigable.len(), 1);
    assert_eq!(navigable[0].href.as_deref(), Some("/a"));
}
