//! Menu state machine example
//!
//! Replays a scripted interaction against a small menu tree and prints the
//! resulting view after every frame: opening a submenu, selecting a leaf,
//! switching to another submenu, and dismissing with Escape.

use std::cell::RefCell;
use std::rc::Rc;

use vela_ui::{Key, TargetedEvent, UiContext};
use vela_ui_widgets::{Menu, MenuItem, MenuNodeView, MenuView, SubMenu};

fn main() {
    env_logger::init();

    let mut ctx = UiContext::new();
    let selection = Rc::new(RefCell::new(Vec::<String>::new()));

    let script: Vec<(&str, Vec<TargetedEvent>)> = vec![
        ("initial frame", vec![]),
        ("click the File submenu", vec![TargetedEvent::click("file")]),
        ("select Open", vec![TargetedEvent::click("open")]),
        ("switch to the Edit submenu", vec![TargetedEvent::click("edit")]),
        ("press Escape", vec![TargetedEvent::key("menu", Key::Escape)]),
    ];

    for (label, events) in script {
        for event in events {
            ctx.push_event(event);
        }
        ctx.begin_frame();

        let sink = Rc::clone(&selection);
        let current = selection.borrow().clone();
        let view = Menu::new("menu")
            .with_selected(current)
            .on_select(move |id| sink.borrow_mut().push(id.to_string()))
            .show(&mut ctx, |menu| {
                menu.submenu(SubMenu::new("file", "File"), |sub| {
                    sub.item(MenuItem::new("open").with_label("Open"));
                    sub.item(MenuItem::new("save").with_label("Save"));
                });
                menu.submenu(SubMenu::new("edit", "Edit"), |sub| {
                    sub.item(MenuItem::new("undo").with_label("Undo"));
                    sub.item(MenuItem::new("paste").with_label("Paste").with_disabled(true));
                });
                menu.item(MenuItem::new("quit").with_label("Quit"));
            });

        println!("-- {label}");
        print_view(&view);
    }

    println!("selected so far: {:?}", selection.borrow());
}

fn print_view(view: &MenuView) {
    println!("   open submenu: {:?}", view.open_submenu);
    print_nodes(&view.nodes, 1);
}

fn print_nodes(nodes: &[MenuNodeView], depth: usize) {
    let indent = "   ".repeat(depth);
    for node in nodes {
        match node {
            MenuNodeView::Item(item) => {
                let mark = if item.selected { "*" } else { " " };
                let state = if item.disabled { " (disabled)" } else { "" };
                println!("{indent}{mark} {}{state}", item.label);
            }
            MenuNodeView::Submenu(submenu) => {
                let arrow = if submenu.open { "v" } else { ">" };
                println!("{indent}{arrow} {}", submenu.title);
                if submenu.open {
                    print_nodes(&submenu.children, depth + 1);
                }
            }
        }
    }
}
