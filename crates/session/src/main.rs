//! Scripted demo session over the sample catalog.
//!
//! Runs the storefront core through a browse/add/update/remove cycle and
//! logs the derived totals at each step. `RUST_LOG=debug` shows the
//! per-operation events from the session boundary.

use anyhow::Result;

use celestial_catalog::{samples::sample_catalog, Category, FilterSpec, Selector};
use celestial_session::StorefrontSession;

fn main() -> Result<()> {
    celestial_observability::init();

    let mut session = StorefrontSession::new(sample_catalog());
    tracing::info!(products = session.catalog().len(), "session started");

    let crystals = session.browse(&FilterSpec {
        category: Selector::Only(Category::Crystal),
        ..FilterSpec::default()
    });
    tracing::info!(matched = crystals.len(), "crystals in stock");

    let amethyst = crystals
        .first()
        .map(|p| p.id.clone())
        .ok_or_else(|| anyhow::anyhow!("sample catalog has no crystals"))?;

    session.add_to_cart(&amethyst);
    session.add_to_cart(&amethyst);
    session.add_to_cart(&"service-1".into());

    session.update_quantity(&amethyst, 3);
    session.remove_item(&"service-1".into());

    let totals = session.totals();
    tracing::info!(
        items = session.cart().item_count(),
        subtotal = %totals.subtotal,
        shipping = %totals.shipping,
        total = %totals.total,
        "checkout preview"
    );

    Ok(())
}
