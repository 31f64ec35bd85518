// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Several independent menus, attribute-driven configuration, and lifecycle hooks.
//!
//! Run:
//! - `cargo run -p understory_priority_nav_demos --example priority_nav_menus`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Size;
use understory_priority_nav::{
    Direction, Hooks, MenuAnchors, MenuConfiguration, MenuOptions, NavRegistry, StackLayout,
};

fn item(_: &u32) -> Size {
    Size::new(150.0, 36.0)
}

fn layout(direction: Direction, container: Size) -> StackLayout<fn(&u32) -> Size> {
    StackLayout::new(direction, container, item as fn(&u32) -> Size)
        .with_toggle(Size::new(150.0, 36.0))
        .with_trailing(Size::new(150.0, 36.0))
}

fn main() {
    env_logger::init();

    let moves = Rc::new(Cell::new(0_u32));
    let counter = moves.clone();
    let hooks = Hooks::new()
        .on_init(|| println!("main menu initialized"))
        .on_item_move(move || counter.set(counter.get() + 1));

    let mut menus: NavRegistry<&str, u32> = NavRegistry::new();
    menus.attach(
        "main",
        MenuAnchors::new("main-list", "main-more", "main-toggle", 0..8),
        MenuConfiguration::resolve(MenuOptions::default(), MenuOptions::default(), hooks),
    );

    // The sidebar reads its direction from markup attributes.
    let attrs = MenuOptions::from_attributes([("data-direction", "vertical"), ("data-min-items", "2")]);
    menus.attach(
        "sidebar",
        MenuAnchors::new("side-list", "side-more", "side-toggle", 0..6),
        MenuConfiguration::resolve(attrs, MenuOptions::default(), Hooks::new()),
    );

    // A footer rendered without its toggle is never driven.
    let footer = MenuAnchors {
        visible_list: Some("footer-list"),
        hidden_list: Some("footer-more"),
        toggle: None,
        items: vec![0, 1, 2],
    };
    let attached = menus.attach("footer", footer, MenuConfiguration::default());
    println!("footer attached: {attached}");

    for (pass, (viewport_w, viewport_h)) in [(1280.0, 800.0), (800.0, 400.0), (1280.0, 800.0)]
        .into_iter()
        .enumerate()
    {
        for (name, nav) in menus.iter_mut() {
            let direction = nav.config().direction();
            let container = match direction {
                Direction::Horizontal => Size::new(viewport_w, 36.0),
                Direction::Vertical => Size::new(200.0, viewport_h * 0.5),
            };
            let provider = layout(direction, container);
            let _ = if pass == 0 {
                nav.on_load(&provider)
            } else {
                nav.on_resize(&provider)
            };
            println!(
                "{viewport_w}x{viewport_h} {name:>8} ({direction}): {} visible, {} hidden, minimum={} breakpoint={:?}",
                nav.state().visible().len(),
                nav.state().len(),
                nav.is_at_minimum(),
                nav.active_breakpoint(viewport_w),
            );
        }
    }
    println!("main menu moved {} items", moves.get());
}
