// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page basics.
//!
//! Build a small article, list its readable elements, and measure them.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p readable_demos --example page_basics`

use kurbo::{Point, Rect, Vec2};
use readable_page::{
    Element, Page, ReadableConfig, TextRun, element_bounds, is_point_inside_element,
    line_height_of_first_line, top_level_readable_elements,
};

fn main() {
    env_logger::init();

    // <div id="content-1">
    //   <h1>Title</h1>
    //   <div><blockquote>Hello</blockquote></div>
    //   <p>A long paragraph that wraps over three lines.</p>
    // </div>
    let mut page = Page::new();
    let root = page
        .insert_element(
            None,
            Element::new("DIV")
                .with_id("content-1")
                .with_layout(Rect::new(0.0, 0.0, 640.0, 400.0)),
        )
        .unwrap();
    let h1 = page
        .insert_element(
            Some(root),
            Element::new("H1").with_layout(Rect::new(0.0, 0.0, 640.0, 48.0)),
        )
        .unwrap();
    page.insert_text(
        h1,
        TextRun::new("Title").with_lines([Rect::new(0.0, 0.0, 120.0, 48.0)]),
    )
    .unwrap();
    let wrapper = page
        .insert_element(
            Some(root),
            Element::new("DIV").with_layout(Rect::new(0.0, 64.0, 640.0, 112.0)),
        )
        .unwrap();
    let quote = page
        .insert_element(
            Some(wrapper),
            Element::new("BLOCKQUOTE").with_layout(Rect::new(40.0, 64.0, 600.0, 112.0)),
        )
        .unwrap();
    page.insert_text(
        quote,
        TextRun::new("Hello").with_lines([Rect::new(40.0, 76.0, 100.0, 100.0)]),
    )
    .unwrap();
    let para = page
        .insert_element(
            Some(root),
            Element::new("P").with_layout(Rect::new(0.0, 128.0, 640.0, 200.0)),
        )
        .unwrap();
    page.insert_text(
        para,
        TextRun::new("A long paragraph that wraps over three lines.").with_lines([
            Rect::new(0.0, 128.0, 640.0, 152.0),
            Rect::new(0.0, 152.0, 640.0, 176.0),
            Rect::new(0.0, 176.0, 200.0, 200.0),
        ]),
    )
    .unwrap();

    let readable = top_level_readable_elements(&page, &ReadableConfig::default()).unwrap();
    println!("== Readable elements ==");
    for &id in &readable {
        println!(
            "  {:?} <{}> {:?}",
            id,
            page.tag_name(id).unwrap_or("?"),
            page.text_content(id)
        );
    }
    assert_eq!(readable, vec![root, quote, para]);

    // Scroll and confirm bounds stay page-absolute.
    page.scroll_by(Vec2::new(0.0, 100.0));
    let bounds = element_bounds(&page, para).unwrap();
    println!("== Paragraph bounds after scroll ==\n  {bounds:?}");
    assert_eq!(bounds.top, 128.0);

    let line = line_height_of_first_line(&page, para);
    println!("== First line height ==\n  {line}");
    assert_eq!(line, 24.0);

    assert!(is_point_inside_element(&page, Point::new(640.0, 200.0), para));
}
