//! Quote collections and random quote selection

use clap::ValueEnum;
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

/// Quotes shown in motivational mode
pub const MOTIVATIONAL_QUOTES: &[&str] = &[
    "Stay focused and never give up!",
    "You're doing great! Keep going!",
    "Success is the sum of small efforts!",
    "Focus on progress, not perfection!",
    "Every minute counts towards your goals!",
    "You're stronger than you think!",
    "Great things take time and effort!",
    "Believe in yourself and keep grinding!",
    "Turn your dreams into plans, plans into actions.",
    "The expert in anything was once a beginner.",
];

/// Quotes shown in sarcastic mode
pub const SARCASTIC_QUOTES: &[&str] = &[
    "Oh look, another distraction. How surprising.",
    "Yes, checking social media is definitely more important than your goals right now.",
    "Your goals called. They're still waiting for you to show up.",
    "Breaking news: Work doesn't do itself. Shocking revelation, I know.",
    "Another break? Your focus has the attention span of a goldfish swimming in circles.",
    "I see you eyeing that phone. Don't even think about it, we both know what happens next.",
    "Wow, 2 minutes of work. You're basically unstoppable now. Nobel Prize incoming.",
    "Your productivity level: Potato. Let's aim for something more ambitious, like a slightly motivated potato.",
    "Procrastination: Because why do today what you can stress about tomorrow and panic about next week?",
    "I'm sure that notification is absolutely life-changing and cannot wait another 20 minutes.",
];

/// Which quote collection is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum QuoteMode {
    #[default]
    Motivational,
    Sarcastic,
}

impl QuoteMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            QuoteMode::Motivational => QuoteMode::Sarcastic,
            QuoteMode::Sarcastic => QuoteMode::Motivational,
        }
    }

    /// Quote collection for this mode
    pub fn quotes(self) -> &'static [&'static str] {
        match self {
            QuoteMode::Motivational => MOTIVATIONAL_QUOTES,
            QuoteMode::Sarcastic => SARCASTIC_QUOTES,
        }
    }

    /// Upper-case label used by the mode control
    pub fn label(self) -> &'static str {
        match self {
            QuoteMode::Motivational => "MOTIVATIONAL",
            QuoteMode::Sarcastic => "SARCASTIC",
        }
    }
}

/// Pick a quote uniformly at random. Returns `None` for an empty collection.
pub fn pick<R: Rng + ?Sized>(quotes: &[&'static str], rng: &mut R) -> Option<&'static str> {
    quotes.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn pick_is_deterministic_for_a_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(pick(MOTIVATIONAL_QUOTES, &mut a), pick(MOTIVATIONAL_QUOTES, &mut b));
        }
    }

    #[test]
    fn pick_stays_inside_the_collection() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let quote = pick(SARCASTIC_QUOTES, &mut rng).unwrap();
            assert!(SARCASTIC_QUOTES.contains(&quote));
        }
    }

    #[test]
    fn pick_from_empty_collection() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick(&[], &mut rng), None);
    }

    #[test]
    fn pick_reaches_every_quote() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(pick(MOTIVATIONAL_QUOTES, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), MOTIVATIONAL_QUOTES.len());
    }

    #[test]
    fn mode_toggles_between_collections() {
        let mode = QuoteMode::default();
        assert_eq!(mode, QuoteMode::Motivational);
        assert_eq!(mode.toggled(), QuoteMode::Sarcastic);
        assert_eq!(mode.toggled().toggled(), mode);
        assert_eq!(mode.toggled().quotes(), SARCASTIC_QUOTES);
        assert_eq!(mode.toggled().label(), "SARCASTIC");
    }
}
