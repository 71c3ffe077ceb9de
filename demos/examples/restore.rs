// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page loads that already name an item.
//!
//! Serves the site from a directory (default: the current one) and routes each
//! fragment given on the command line as if the page were loaded with it.
//! Unknown items are redirected to the menu.
//!
//! Run:
//! - `cargo run -p folio_demos --example restore -- path/to/site '#/media/photo-one' '#/nope/x'`

use folio_content::DirSource;
use folio_router::{Archive, HeadlessPage, Location, MemoryLocation, SiteConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let root = args.next().unwrap_or_else(|| ".".into());
    let fragments: Vec<String> = args.collect();
    if fragments.is_empty() {
        log::warn!("no fragments given; nothing to route");
    }

    for fragment in fragments {
        let mut archive = Archive::new(
            SiteConfig::default(),
            MemoryLocation::new(fragment.as_str()),
            DirSource::new(&root),
            HeadlessPage::new(),
        );
        if let Err(e) = archive.init(0) {
            eprintln!("{fragment}: {e}");
            continue;
        }
        archive.deliver_notifications(0);

        let page = archive.page();
        println!(
            "{fragment:<24} -> location={:<20} title={:<16} menu_visible={} content_bytes={}",
            archive.location().fragment(),
            archive.sequencer().current_title().unwrap_or("-"),
            page.stage.menu_visible,
            page.stage.content.as_ref().map_or(0, String::len),
        );
    }
}
