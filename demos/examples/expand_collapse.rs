// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expand and collapse one item on a headless page.
//!
//! Clicks "Photo One", steps the clock through every phase deadline, then
//! dismisses it, printing the page after each step.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p folio_demos --example expand_collapse`

use folio_content::MemorySource;
use folio_menu::ElementId;
use folio_router::{Archive, HeadlessPage, Location, MemoryLocation, SiteConfig};
use kurbo::Rect;

const MENU: &str = r#"{"columns":[
    {"id":"media","title":"Media","items":[{"name":"Photo One","type":"image","thumbnail":"img/one-t.jpg"}]},
    {"id":"writing","title":"Writing","items":["On Maps", {"name":"Field Notes","type":"book"}]}
]}"#;

fn main() {
    env_logger::init();

    let source = MemorySource::new()
        .with("data/menu-data.json", MENU)
        .with("content/media/photo-one.md", "A photo, *lightly* edited.");
    let mut archive = Archive::new(
        SiteConfig::default(),
        MemoryLocation::new(""),
        source,
        HeadlessPage::new(),
    );
    if let Err(e) = archive.init(0) {
        eprintln!("init failed: {e}");
        return;
    }

    println!("== Menu ==");
    for item in archive.view().items() {
        println!("  {:?}  {:<12} {:?}", item.id, item.label, item.presentation);
    }

    let anchor = Rect::new(40.0, 120.0, 160.0, 144.0);
    archive.click(ElementId { column: 0, item: 0 }, anchor, 0);
    report(&archive, 0);

    while let Some(due) = archive.next_deadline() {
        archive.advance(due);
        archive.deliver_notifications(due);
        report(&archive, due);
    }

    println!("== Dismiss ==");
    archive.dismiss(2000);
    while let Some(due) = archive.next_deadline() {
        archive.advance(due);
        archive.deliver_notifications(due);
        report(&archive, due);
    }
}

fn report(archive: &Archive<MemoryLocation, MemorySource, HeadlessPage>, t: u64) {
    let stage = &archive.page().stage;
    println!(
        "t={t:>5}ms  phase={:<17} location={:<20} placeholder={:?} content={}",
        format!("{:?}", archive.sequencer().phase()),
        archive.location().fragment(),
        stage.placeholder.as_ref().map(|p| p.rect),
        stage.content.as_deref().unwrap_or("-").trim_end(),
    );
}
