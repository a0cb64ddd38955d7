mod app;
mod models;
mod search;
mod sources;
mod view;

use app::Application;
use search::persist::{FilterStore, MemoryStore};
use search::FieldChange;
use sources::{FixtureSource, HotelSource, HttpHotelSource};
use tracing::{info, Level};
use view::{CatalogView, Pagination};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏨 Hotel Catalog Browser");
    info!("========================");
    info!("");

    match std::env::args().nth(1) {
        Some(url) => {
            info!("Loading hotel feed from {}", url);
            run(HttpHotelSource::new(url)?).await
        }
        None => {
            info!("No feed URL given, browsing the built-in sample catalog");
            run(FixtureSource::new()).await
        }
    }
}

async fn run<Src: HotelSource>(source: Src) -> anyhow::Result<()> {
    let mut app = Application::mount(source, MemoryStore::default()).await?;

    println!("Full catalog:");
    print_catalog(&mut app);

    // Narrow the country picker the way a user typing into it would.
    app.set_country_query("Fra");
    println!(
        "Countries matching '{}': {}",
        app.country_query(),
        app.visible_countries().join(", ")
    );

    // Narrow to affordable hotels and show the filtered pages. The category
    // checkbox arrives as a wire-level event, the price pair as one atomic
    // typed change.
    info!("Applying filters: category 'hotel', price up to 250");
    app.handle_raw(&search::RawFieldChange {
        field: "type",
        value: "hotel",
        checked: Some(true),
    });
    app.change(FieldChange::PriceRange { from: 0, to: 250 });
    app.apply_filters().await?;

    println!("Filtered catalog:");
    print_catalog(&mut app);

    // An unsatisfiable filter lands on the empty state.
    info!("Applying an unsatisfiable review-count filter");
    app.change(FieldChange::ReviewCount(1_000_000));
    app.apply_filters().await?;
    print_catalog(&mut app);

    info!("Resetting filters");
    app.reset().await?;
    if app.form().filters().is_default() {
        info!("Filter specification back at its defaults");
    }

    println!(
        "\n✅ Back to the full catalog: {} hotels (loaded at {})",
        app.hotels().len(),
        app.loaded_at().map(|t| t.to_rfc3339()).unwrap_or_default()
    );

    Ok(())
}

/// Walk every page of the current view and print the hotel cards
fn print_catalog<Src: HotelSource, S: FilterStore>(app: &mut Application<Src, S>) {
    let page_count = Pagination::page_count(app.hotels().len());

    for page in 0..page_count.max(1) {
        app.set_page(page);
        match app.view() {
            CatalogView::Results {
                hotels,
                page,
                page_count,
                total,
            } => {
                println!("-- page {}/{} ({} total) --", page + 1, page_count, total);
                for (i, hotel) in hotels.iter().enumerate() {
                    println!(
                        "{}. {} ({} {} per night)",
                        page * view::PAGE_SIZE + i + 1,
                        hotel.name,
                        hotel.min_price,
                        hotel.currency
                    );
                    println!(
                        "   {} stars, {}, {}",
                        hotel.stars, hotel.category, hotel.country
                    );
                    println!(
                        "   rated {} from {} reviews (last: {})",
                        hotel.rating, hotel.reviews_amount, hotel.last_review
                    );
                    println!();
                }
            }
            CatalogView::NothingFound => {
                println!("Nothing matched those filters.");
                println!("Try different settings, or clear the filters to see the full catalog.");
            }
        }
    }

    app.set_page(0);
}
