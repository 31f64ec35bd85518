// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize a horizontal menu and mirror the engine's events in a fake page.
//!
//! The "page" holds two lists of labels. Events returned by the menu are
//! applied to it exactly as a DOM adapter would move nodes and toggle classes.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_priority_nav_demos --example priority_nav_resize`

use kurbo::Size;
use understory_priority_nav::{
    Direction, Directive, MenuAnchors, MenuConfiguration, NavEvent, PriorityNav, StackLayout,
};

const LABELS: [&str; 6] = ["Home", "Products", "Solutions", "Pricing", "Blog", "Contact"];
const ROW_H: f64 = 40.0;

#[derive(Default)]
struct Page {
    visible: Vec<usize>,
    hidden: Vec<usize>,
    button_active: bool,
    panel_open: bool,
}

impl Page {
    fn apply(&mut self, events: &[NavEvent<usize>]) {
        for event in events {
            match *event {
                NavEvent::Hidden(item) => {
                    self.visible.retain(|&i| i != item);
                    self.hidden.insert(0, item);
                }
                NavEvent::Restored(item) => {
                    self.hidden.retain(|&i| i != item);
                    self.visible.push(item);
                }
                NavEvent::Control(Directive::Show) => self.button_active = true,
                NavEvent::Control(Directive::Hide) => self.button_active = false,
                NavEvent::Control(Directive::Open) => self.panel_open = true,
                NavEvent::Control(Directive::Close) => self.panel_open = false,
            }
        }
    }

    fn render(&self) -> String {
        let names = |items: &[usize]| {
            items
                .iter()
                .map(|&i| LABELS[i])
                .collect::<Vec<_>>()
                .join(" | ")
        };
        let button = if self.button_active { " [More]" } else { "" };
        let panel = if self.panel_open { "open" } else { "closed" };
        format!(
            "{}{button}  // hidden ({panel}): {}",
            names(&self.visible),
            names(&self.hidden)
        )
    }
}

fn item_size(item: &usize) -> Size {
    // Roughly 9px per character plus padding.
    Size::new(LABELS[*item].len() as f64 * 9.0 + 24.0, ROW_H)
}

fn layout(width: f64) -> StackLayout<fn(&usize) -> Size> {
    StackLayout::new(
        Direction::Horizontal,
        Size::new(width, ROW_H),
        item_size as fn(&usize) -> Size,
    )
    .with_toggle(Size::new(64.0, ROW_H))
    .with_gap(8.0)
}

fn main() {
    env_logger::init();

    let anchors = MenuAnchors::new("nav", "nav-more", "nav-toggle", 0..LABELS.len());
    let Some(mut nav) = PriorityNav::attach(anchors, MenuConfiguration::default()) else {
        return;
    };
    let mut page = Page {
        visible: (0..LABELS.len()).collect(),
        ..Default::default()
    };

    page.apply(&nav.on_load(&layout(900.0)));
    println!("load @ 900: {}", page.render());

    for width in [700.0, 520.0, 380.0, 250.0, 600.0, 1024.0] {
        page.apply(&nav.on_resize(&layout(width)));
        println!(
            "resize @ {width:>4}: {}  (at minimum: {})",
            page.render(),
            nav.is_at_minimum()
        );
        if width == 380.0 {
            page.apply(&nav.on_toggle_click());
            println!("click        : {}", page.render());
        }
    }

    page.apply(&nav.on_resize(&layout(300.0)));
    page.apply(&nav.on_orientation_change(&layout(1200.0)));
    println!("rotate @ 1200: {}", page.render());
}
