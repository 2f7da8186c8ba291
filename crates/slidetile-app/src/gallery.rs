//! Preset images offered when the player does not supply one.

use rand::RngExt as _;

pub const PRESET_IMAGES: [&str; 7] = [
    "https://images.unsplash.com/photo-1564507592333-c60657eea523?auto=format&fit=crop&q=80&w=800",
    "https://images.unsplash.com/photo-1508804185872-d7badad00f7d?auto=format&fit=crop&q=80&w=800",
    "https://images.unsplash.com/photo-1552832230-c0197dd311b5?auto=format&fit=crop&q=80&w=800",
    "https://images.unsplash.com/photo-1605130284535-11dd9eedc58a?auto=format&fit=crop&q=80&w=800",
    "https://images.unsplash.com/photo-1518235506717-31ed33bc18dc?auto=format&fit=crop&q=80&w=800",
    "https://images.unsplash.com/photo-1581467655410-0c2bf55d9d6c?auto=format&fit=crop&q=80&w=800",
    "https://images.unsplash.com/photo-1587474260584-136574528ed5?auto=format&fit=crop&q=80&w=800",
];

#[must_use]
pub fn random_image() -> &'static str {
    PRESET_IMAGES[rand::rng().random_range(0..PRESET_IMAGES.len())]
}
