//! Toast lifecycle example
//!
//! Shows a handful of toasts with different kinds and durations, then drives
//! the manager's clock until every auto-dismissing toast is gone. Run with
//! `RUST_LOG=debug` to watch the manager's internal transitions.

use std::thread;
use std::time::{Duration, Instant};

use vela_ui_widgets::{ToastConfig, ToastProvider, ToastSpec};

fn main() {
    env_logger::init();

    let provider = ToastProvider::new(ToastConfig::default());
    let toasts = provider.handle();

    toasts.show(ToastSpec::success("Settings saved"));
    toasts.show(ToastSpec::warning("Disk space is getting low"));
    toasts.show(
        ToastSpec::info("Build finished").with_duration(Duration::from_millis(1500)),
    );
    let sticky = toasts.show(ToastSpec::error("Deploy failed: check the logs"));
    toasts.show_with(ToastSpec::info("Reconnecting..."), |id| {
        println!("  ({id} closed)");
    });

    provider.tick(Instant::now());
    print_overlay(&provider);

    // Error toasts never auto-dismiss; close the sticky one after a moment
    // so the loop below can drain everything.
    thread::sleep(Duration::from_millis(500));
    toasts.dismiss(sticky);

    while let Some(deadline) = provider.next_deadline() {
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
        provider.tick(Instant::now());
        print_overlay(&provider);
    }

    println!("all toasts dismissed");
}

fn print_overlay(provider: &ToastProvider) {
    let view = provider.overlay_view();
    println!("{} active:", view.len());
    for toast in &view.toasts {
        println!("  [{:?}] {} ({:?})", toast.kind, toast.message, toast.phase);
    }
}
