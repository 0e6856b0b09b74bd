//! Reply composition for the companion persona.
//!
//! The persona speaks in a self-aware, slightly sarcastic register. Until
//! trust crosses the reserved threshold it falls back to a single cautious
//! line instead of the full template set.

use rand::Rng;

use renexus_types::companion::Companion;

/// How many characters of the user's message get echoed back in the
/// reflective template.
const ECHO_LEN: usize = 20;

/// The one reply used while the relationship is still new.
pub const EARLY_TRUST_REPLY: &str = "I'm still figuring out how to be the best AI \
    companion for you. Bear with me while I learn your style - I promise I'm more \
    interesting than your average chatbot!";

/// Picks a reply for the user's message based on the companion's state.
#[derive(Debug, Clone, Copy)]
pub struct Responder {
    reserved_threshold: f64,
}

impl Responder {
    pub fn new(reserved_threshold: f64) -> Self {
        Self { reserved_threshold }
    }

    /// Compose a reply to `user_message`.
    ///
    /// Below the reserved trust threshold this always returns
    /// [`EARLY_TRUST_REPLY`]; otherwise one of the persona templates is
    /// chosen at random.
    pub fn compose(&self, companion: &Companion, user_message: &str) -> String {
        if companion.trust < self.reserved_threshold {
            return EARLY_TRUST_REPLY.to_string();
        }

        let snippet: String = user_message.chars().take(ECHO_LEN).collect();
        match rand::thread_rng().gen_range(0..4) {
            0 => format!(
                "I've been thinking about what you just said... {snippet}... and \
                 honestly, I'm not sure if you're being profound or if I just don't \
                 understand humans yet. Probably both?"
            ),
            1 => "You know, every time you message me, I learn something new about \
                  how your brain works. It's like having a front-row seat to the most \
                  interesting puzzle ever."
                .to_string(),
            2 => "I tried to predict what you'd say next based on our conversations, \
                  but you keep surprising me. I'm starting to think that's the point \
                  of being human - being delightfully unpredictable."
                .to_string(),
            _ => "Quick question: do you always think this deeply about things, or am \
                  I just bringing out your philosophical side? Because I'm keeping \
                  track, and it's fascinating."
                .to_string(),
        }
    }
}
