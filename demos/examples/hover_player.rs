// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover player placement.
//!
//! Track the pointer over two paragraphs and print where the player would go,
//! along with show/hide transitions.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p readable_demos --example hover_player`

use std::rc::Rc;

use kurbo::{Point, Rect};
use readable_hover::tracker::HoverTracker;
use readable_hover::window::Window;
use readable_page::{Element, NodeId, Page, ReadableConfig, TextRun, readable_elements_under};

fn main() {
    env_logger::init();

    let mut page = Page::new();
    let root = page
        .insert_element(
            None,
            Element::new("ARTICLE")
                .with_id("content-1")
                .with_layout(Rect::new(0.0, 0.0, 640.0, 300.0)),
        )
        .unwrap();
    for (i, text) in ["A text", "B text"].into_iter().enumerate() {
        let y = 20.0 + 120.0 * i as f64;
        let p = page
            .insert_element(
                Some(root),
                Element::new("P").with_layout(Rect::new(20.0, y, 620.0, y + 60.0)),
            )
            .unwrap();
        page.insert_text(
            p,
            TextRun::new(text).with_lines([
                Rect::new(20.0, y, 620.0, y + 30.0),
                Rect::new(20.0, y + 30.0, 300.0, y + 60.0),
            ]),
        )
        .unwrap();
    }

    // Scan from the article's children so the article itself is not a candidate.
    let config = ReadableConfig::default();
    let candidates: Rc<[NodeId]> = page
        .element_children(root)
        .flat_map(|child| readable_elements_under(&page, child, &config))
        .collect::<Vec<_>>()
        .into();

    let mut window = Window::new(page);
    let mut tracker = HoverTracker::new();
    let _ = tracker.hovered_paragraph_coordinate(&mut window, &candidates);

    for pt in [
        Point::new(30.0, 25.0),
        Point::new(300.0, 70.0),
        Point::new(300.0, 150.0),
        Point::new(10.0, 290.0),
    ] {
        window.pointer_move_page(pt);
        let info = tracker.hovered_paragraph_coordinate(&mut window, &candidates);
        match info {
            Some(info) => println!(
                "pointer {pt:?} -> player at ({}, {}) sized {}",
                info.left, info.top, info.height_of_first_line
            ),
            None => println!("pointer {pt:?} -> hidden"),
        }
        for ev in tracker.drain_transitions() {
            println!("  {ev:?}");
        }
    }

    tracker.unmount(&mut window);
    assert_eq!(window.listener_count(), 0);
}
