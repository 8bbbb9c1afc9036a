//! Console demo for the Cascade waterfall engine.
//!
//! Plays the classic photo-feed scenario without a screen: a data source
//! with random item heights grows a page at a time, and a single designated
//! caller runs one incremental layout pass per page. Output is the placement
//! table and the final content size.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use cascade_geometry::EdgeInsets;
use cascade_layout::{ItemSource, WaterfallConfig, WaterfallLayout};
use rand::Rng;

const PAGE_SIZE: usize = 30;
const PAGE_COUNT: usize = 4;
const CONTAINER_WIDTH: f32 = 390.0;
const COLUMNS: usize = 3;

/// Feed of items with random heights and colors, grown a page at a time.
///
/// Heights are drawn once and cached, so the engine sees the same answer
/// every time it asks about an index.
struct ItemFeed {
    heights: Vec<f32>,
    colors: Vec<[u8; 3]>,
}

impl ItemFeed {
    fn new() -> Self {
        let mut feed = Self {
            heights: Vec::new(),
            colors: Vec::new(),
        };
        feed.load_page();
        feed
    }

    /// Appends one page of items, as if a fetch just completed.
    fn load_page(&mut self) {
        let mut rng = rand::thread_rng();
        for _ in 0..PAGE_SIZE {
            self.heights.push(rng.gen_range(100.0..=150.0));
            self.colors.push([rng.gen(), rng.gen(), rng.gen()]);
        }
    }

    fn color(&self, index: usize) -> [u8; 3] {
        self.colors[index]
    }
}

impl ItemSource for ItemFeed {
    fn item_count(&self) -> usize {
        self.heights.len()
    }

    fn item_height(&self, index: usize) -> Option<f32> {
        self.heights.get(index).copied()
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = WaterfallConfig::new(CONTAINER_WIDTH)
        .columns(COLUMNS)
        .section_inset(EdgeInsets::uniform(10.0))
        .interitem_spacing(10.0)
        .line_spacing(10.0);
    let mut layout = WaterfallLayout::new(config)?;

    let mut feed = ItemFeed::new();
    for page in 0..PAGE_COUNT {
        if page > 0 {
            // Consumption reached the end of the feed; pretend a fetch is
            // in flight, then extend the item count and lay out the tail.
            log::info!("reached the end of the feed, loading more...");
            thread::sleep(Duration::from_millis(200));
            feed.load_page();
        }
        let placements = layout.layout_from(&feed)?;
        log::info!(
            "page {}: {} items placed, max column height {:.1}",
            page,
            placements.len(),
            layout.state().max_height()
        );
    }

    println!("item   col  frame                       color");
    for placement in layout.placements() {
        let frame = placement.frame;
        let [r, g, b] = feed.color(placement.index);
        println!(
            "{:>4}  {:>4}  ({:>6.1}, {:>7.1}) {:.1}x{:>5.1}  #{r:02x}{g:02x}{b:02x}",
            placement.index,
            placement.index % COLUMNS,
            frame.x,
            frame.y,
            frame.width,
            frame.height,
        );
    }

    let content = layout.content_size();
    println!();
    println!(
        "{} items in {} columns, content height {:.1}",
        feed.item_count(),
        COLUMNS,
        content.height.max(0.0)
    );
    Ok(())
}
