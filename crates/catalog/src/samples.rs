//! Demo catalog data.
//!
//! A seam for demos and tests, not part of the core contract: every API in
//! this workspace accepts arbitrary catalogs.

use celestial_core::Money;

use crate::catalog::Catalog;
use crate::product::{Category, Planet, Product, ProductId};

fn gemstone(
    id: &str,
    name: &str,
    description: &str,
    price_cents: u64,
    planet: Planet,
    category: Category,
    weight_carat: f32,
    rating: f32,
    image: &str,
) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Money::from_cents(price_cents),
        category,
        planet: Some(planet),
        rating: Some(rating),
        weight_carat: Some(weight_carat),
        duration: None,
        image: Some(image.to_owned()),
    }
}

fn service(id: &str, name: &str, description: &str, price_major: u64, duration: &str) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Money::from_major(price_major),
        category: Category::Service,
        planet: None,
        rating: None,
        weight_carat: None,
        duration: Some(duration.to_owned()),
        image: None,
    }
}

/// The demo storefront catalog: eight gemstones and eight bookable astrology
/// services.
pub fn sample_catalog() -> Catalog {
    let products = vec![
        gemstone(
            "gem-1",
            "Amethyst Crystal",
            "A powerful stone for spiritual growth and protection. Enhances intuition and promotes calm.",
            12_999,
            Planet::Jupiter,
            Category::Crystal,
            8.5,
            4.8,
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&q=80",
        ),
        gemstone(
            "gem-2",
            "Rose Quartz",
            "The stone of unconditional love. Opens the heart chakra and attracts loving relationships.",
            8_999,
            Planet::Venus,
            Category::SemiPrecious,
            6.2,
            4.7,
            "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=800&q=80",
        ),
        gemstone(
            "gem-3",
            "Lapis Lazuli",
            "Enhances wisdom, truth and self-awareness. Stimulates enlightenment and spiritual journey.",
            14_999,
            Planet::Saturn,
            Category::Precious,
            7.8,
            4.9,
            "https://images.unsplash.com/photo-1602173574767-37ac01994b2a?w=800&q=80",
        ),
        gemstone(
            "gem-4",
            "Citrine",
            "Known as the merchant's stone. Attracts wealth, prosperity and success in business.",
            11_999,
            Planet::Sun,
            Category::Crystal,
            5.4,
            4.6,
            "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=800&q=80",
        ),
        gemstone(
            "gem-5",
            "Moonstone",
            "Balances emotions and enhances intuition. Connected to the divine feminine energy.",
            19_999,
            Planet::Moon,
            Category::Birthstone,
            4.2,
            4.9,
            "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=800&q=80",
        ),
        gemstone(
            "gem-6",
            "Black Obsidian",
            "A powerful protection stone that shields against negativity and clears psychic smog.",
            7_999,
            Planet::Mars,
            Category::Crystal,
            9.0,
            4.5,
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&q=80",
        ),
        gemstone(
            "gem-7",
            "Clear Quartz",
            "The master healer. Amplifies energy and thought, and connects to the higher self.",
            6_999,
            Planet::Mercury,
            Category::Crystal,
            7.1,
            4.7,
            "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=800&q=80",
        ),
        gemstone(
            "gem-8",
            "Emerald",
            "Promotes loyalty, unconditional love, and stimulates the heart chakra.",
            29_999,
            Planet::Venus,
            Category::Precious,
            3.8,
            5.0,
            "https://images.unsplash.com/photo-1602173574767-37ac01994b2a?w=800&q=80",
        ),
        service(
            "service-1",
            "Birth Chart Reading",
            "Comprehensive analysis of your natal chart revealing personality traits, strengths, and life path.",
            120,
            "60 min",
        ),
        service(
            "service-2",
            "Compatibility Analysis",
            "Detailed examination of relationship dynamics between two individuals based on their charts.",
            150,
            "75 min",
        ),
        service(
            "service-3",
            "Transit Forecast",
            "Predictions for upcoming months based on planetary movements and their impact on your chart.",
            100,
            "45 min",
        ),
        service(
            "service-4",
            "Career Guidance",
            "Astrological insights into your professional path, strengths, and optimal career directions.",
            135,
            "60 min",
        ),
        service(
            "service-5",
            "Solar Return Reading",
            "Analysis of your upcoming year based on your solar return chart, highlighting key themes.",
            90,
            "45 min",
        ),
        service(
            "service-6",
            "Electional Astrology",
            "Finding the most auspicious time for important events like weddings, business launches, etc.",
            180,
            "90 min",
        ),
        service(
            "service-7",
            "Remedial Measures",
            "Personalized recommendations for gemstones, rituals, and practices to balance planetary energies.",
            110,
            "50 min",
        ),
        service(
            "service-8",
            "Emergency Reading",
            "Urgent astrological guidance for pressing life situations and immediate decision-making.",
            200,
            "30 min",
        ),
    ];

    // Sample ids are unique by construction.
    Catalog::new(products).expect("sample catalog ids are unique")
}
