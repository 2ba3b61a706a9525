//! Seed data for fresh stores.
//!
//! The memory backend loads both collections through
//! [`MemoryStore::seeded`](super::MemoryStore::seeded); the SQLite backend
//! inserts only the content pages on first run, since a durable package
//! catalog starts empty and is filled over the API.

use crate::models::{
    BlockItem, BlockKind, ContentBlock, Faq, ItineraryDay, Package, WebsiteContent,
};

/// Demo travel packages.
pub fn packages() -> Vec<Package> {
    vec![
        Package {
            id: "1".to_string(),
            title: "Bali Paradise Escape".to_string(),
            description:
                "Experience the beautiful beaches and vibrant culture of Bali on this 7-day adventure."
                    .to_string(),
            price: 1299.0,
            duration: "7 days".to_string(),
            location: "Bali, Indonesia".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1537996194471-e657df975ab4?auto=format&fit=crop&w=800&h=500"
                    .to_string(),
            people: None,
            rating: None,
            reviews: None,
            itinerary: vec![
                ItineraryDay {
                    day: 1,
                    title: "Arrival in Denpasar".to_string(),
                    description:
                        "Welcome to Bali! Transfer to your beach resort and enjoy a welcome dinner."
                            .to_string(),
                    activities: vec![
                        "Airport pickup".to_string(),
                        "Hotel check-in".to_string(),
                        "Welcome dinner".to_string(),
                    ],
                },
                ItineraryDay {
                    day: 2,
                    title: "Ubud Cultural Tour".to_string(),
                    description:
                        "Explore the cultural heart of Bali with visits to temples and art villages."
                            .to_string(),
                    activities: vec![
                        "Temple visit".to_string(),
                        "Art market".to_string(),
                        "Traditional dance performance".to_string(),
                    ],
                },
            ],
            inclusions: vec![
                "Hotel accommodation".to_string(),
                "Daily breakfast".to_string(),
                "Airport transfers".to_string(),
                "Guided tours".to_string(),
            ],
            exclusions: vec![
                "International flights".to_string(),
                "Travel insurance".to_string(),
                "Personal expenses".to_string(),
            ],
            faqs: vec![
                Faq {
                    question: "What's the best time to visit Bali?".to_string(),
                    answer:
                        "The best time to visit Bali is during the dry season from April to October."
                            .to_string(),
                },
                Faq {
                    question: "Do I need a visa?".to_string(),
                    answer:
                        "Many countries receive a 30-day visa on arrival, but please check your country's specific requirements."
                            .to_string(),
                },
            ],
            featured: true,
            created_at: "2023-05-15T00:00:00Z".to_string(),
            updated_at: "2023-06-10T00:00:00Z".to_string(),
        },
        Package {
            id: "2".to_string(),
            title: "Thailand Adventure".to_string(),
            description:
                "Discover the wonders of Thailand from bustling Bangkok to serene beaches."
                    .to_string(),
            price: 1499.0,
            duration: "10 days".to_string(),
            location: "Thailand".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1528181304800-259b08848526?auto=format&fit=crop&w=800&h=500"
                    .to_string(),
            people: None,
            rating: None,
            reviews: None,
            itinerary: vec![
                ItineraryDay {
                    day: 1,
                    title: "Bangkok Arrival".to_string(),
                    description: "Arrive in Bangkok and transfer to your hotel in the city center."
                        .to_string(),
                    activities: vec![
                        "Airport pickup".to_string(),
                        "Hotel check-in".to_string(),
                        "Evening at leisure".to_string(),
                    ],
                },
                ItineraryDay {
                    day: 2,
                    title: "Bangkok City Tour".to_string(),
                    description: "Explore the magnificent Grand Palace and temples of Bangkok."
                        .to_string(),
                    activities: vec![
                        "Grand Palace visit".to_string(),
                        "Wat Pho tour".to_string(),
                        "Canal boat ride".to_string(),
                    ],
                },
            ],
            inclusions: vec![
                "Hotel accommodation".to_string(),
                "Daily breakfast".to_string(),
                "Transportation".to_string(),
                "English-speaking guide".to_string(),
            ],
            exclusions: vec![
                "International flights".to_string(),
                "Optional activities".to_string(),
                "Tips".to_string(),
            ],
            faqs: vec![
                Faq {
                    question: "Is Thailand safe for tourists?".to_string(),
                    answer:
                        "Thailand is generally considered safe for tourists, but always exercise normal precautions."
                            .to_string(),
                },
                Faq {
                    question: "What currency is used in Thailand?".to_string(),
                    answer: "The Thai Baht (THB) is the local currency.".to_string(),
                },
            ],
            featured: false,
            created_at: "2023-04-20T00:00:00Z".to_string(),
            updated_at: "2023-04-22T00:00:00Z".to_string(),
        },
    ]
}

/// Default marketing-site content: the home and about pages.
pub fn website_content() -> Vec<WebsiteContent> {
    vec![
        WebsiteContent {
            page: "home".to_string(),
            title: "TravelScribe - Your Journey Begins Here".to_string(),
            description: "Discover amazing travel packages and experiences around the world"
                .to_string(),
            blocks: vec![
                ContentBlock {
                    id: "home-hero-1".to_string(),
                    kind: BlockKind::Hero,
                    title: Some("Explore the World with TravelScribe".to_string()),
                    content: Some(
                        "Discover unforgettable travel experiences tailored to your preferences. From tropical beaches to mountain retreats, we have the perfect vacation package for you."
                            .to_string(),
                    ),
                    image_url: Some(
                        "https://images.unsplash.com/photo-1469854523086-cc02fe5d8800?auto=format&fit=crop&w=1200&h=600"
                            .to_string(),
                    ),
                    button_text: Some("Explore Packages".to_string()),
                    button_link: Some("/packages".to_string()),
                    items: None,
                },
                ContentBlock {
                    id: "home-features-1".to_string(),
                    kind: BlockKind::Features,
                    title: Some("Why Choose Us".to_string()),
                    content: None,
                    image_url: None,
                    button_text: None,
                    button_link: None,
                    items: Some(vec![
                        BlockItem {
                            title: Some("Expertly Crafted Itineraries".to_string()),
                            content: Some(
                                "Our travel specialists design perfect journeys based on years of experience and local knowledge."
                                    .to_string(),
                            ),
                            image_url: None,
                        },
                        BlockItem {
                            title: Some("Personalized Service".to_string()),
                            content: Some(
                                "Every trip is tailored to your preferences, ensuring a unique and memorable experience."
                                    .to_string(),
                            ),
                            image_url: None,
                        },
                        BlockItem {
                            title: Some("Best Price Guarantee".to_string()),
                            content: Some(
                                "We promise competitive pricing without compromising on quality or service."
                                    .to_string(),
                            ),
                            image_url: None,
                        },
                    ]),
                },
                ContentBlock {
                    id: "home-testimonial-1".to_string(),
                    kind: BlockKind::Testimonial,
                    title: None,
                    content: Some(
                        "TravelScribe made our honeymoon absolutely perfect! The attention to detail and personalized service exceeded our expectations."
                            .to_string(),
                    ),
                    image_url: None,
                    button_text: None,
                    button_link: None,
                    items: Some(vec![BlockItem {
                        title: Some("Sarah & James".to_string()),
                        content: Some("Bali Paradise Escape".to_string()),
                        image_url: None,
                    }]),
                },
            ],
            updated_at: "2023-06-15T00:00:00Z".to_string(),
        },
        WebsiteContent {
            page: "about".to_string(),
            title: "About TravelScribe".to_string(),
            description: "Learn about our story, mission, and dedicated team".to_string(),
            blocks: vec![
                ContentBlock {
                    id: "about-text-1".to_string(),
                    kind: BlockKind::Text,
                    title: Some("Our Story".to_string()),
                    content: Some(
                        "Founded in 2015, TravelScribe began with a simple mission: to create authentic, transformative travel experiences. Our founders, avid travelers themselves, wanted to share their passion for discovery with others through carefully crafted journeys that go beyond typical tourism."
                            .to_string(),
                    ),
                    image_url: None,
                    button_text: None,
                    button_link: None,
                    items: None,
                },
                ContentBlock {
                    id: "about-image-1".to_string(),
                    kind: BlockKind::Image,
                    title: None,
                    content: None,
                    image_url: Some(
                        "https://images.unsplash.com/photo-1507608616759-54f48f0af0ee?auto=format&fit=crop&w=1000&h=600"
                            .to_string(),
                    ),
                    button_text: None,
                    button_link: None,
                    items: None,
                },
                ContentBlock {
                    id: "about-text-2".to_string(),
                    kind: BlockKind::Text,
                    title: Some("Our Team".to_string()),
                    content: Some(
                        "Our diverse team brings together expertise from across the travel industry. From destination specialists to customer service experts, everyone at TravelScribe shares a passion for travel and a commitment to excellence."
                            .to_string(),
                    ),
                    image_url: None,
                    button_text: None,
                    button_link: None,
                    items: None,
                },
            ],
            updated_at: "2023-05-28T00:00:00Z".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_packages_are_valid() {
        let packages = packages();
        assert_eq!(packages.len(), 2);
        for package in &packages {
            package.validate().expect("seed package should validate");
        }
        // Itinerary ordinals are contiguous from 1.
        for package in &packages {
            for (position, day) in package.itinerary.iter().enumerate() {
                assert_eq!(day.day as usize, position + 1);
            }
        }
    }

    #[test]
    fn test_seed_content_pages() {
        let content = website_content();
        let pages: Vec<&str> = content.iter().map(|c| c.page.as_str()).collect();
        assert_eq!(pages, vec!["home", "about"]);

        // Block ids are unique within each document.
        for document in &content {
            let mut ids: Vec<&str> = document.blocks.iter().map(|b| b.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), document.blocks.len());
        }
    }
}
