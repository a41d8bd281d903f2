//! The two typewriter animations: the hero role label and the contact
//! tagline.
//!
//! Both are plain state machines stepped by elapsed time. The GUI feeds them
//! timer ticks; tests feed durations directly.

use std::time::Duration;

/// First `n` characters of `s` (clamped to its length).
fn prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

pub const HERO_PHRASES: [&str; 2] = ["Web Designer", "Graphic Designer"];
pub const HERO_TICK: Duration = Duration::from_millis(100);

/// Role label that types a phrase, deletes it, and swaps to the other one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroTypewriter {
    phrases: [String; 2],
    text: String,
    full_text: String,
    index: usize,
    deleting: bool,
    pending: Duration,
}

impl Default for HeroTypewriter {
    fn default() -> Self {
        Self::new(HERO_PHRASES[0], HERO_PHRASES[1])
    }
}

impl HeroTypewriter {
    /// Starts "deleting" an empty first phrase, so the first tick flips to
    /// typing the second one.
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            phrases: [first.to_string(), second.to_string()],
            text: String::new(),
            full_text: first.to_string(),
            index: 0,
            deleting: true,
            pending: Duration::ZERO,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Apply one 100 ms tick.
    pub fn step(&mut self) {
        let len = self.full_text.chars().count();
        if !self.deleting && self.index <= len {
            self.text = prefix(&self.full_text, self.index);
            self.index += 1;
        } else if self.deleting && self.index > 0 {
            self.text = prefix(&self.full_text, self.index);
            self.index -= 1;
        } else {
            let was_deleting = self.deleting;
            self.deleting = !self.deleting;
            if was_deleting {
                self.full_text = if self.full_text == self.phrases[0] {
                    self.phrases[1].clone()
                } else {
                    self.phrases[0].clone()
                };
                self.index = 0;
            }
        }
    }

    /// Consume `elapsed` in whole ticks; the remainder carries over.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.pending += elapsed;
        let mut ticks = 0;
        while self.pending >= HERO_TICK {
            self.pending -= HERO_TICK;
            self.step();
            ticks += 1;
        }
        ticks
    }
}

pub const TAGLINE_TYPE_DELAY: Duration = Duration::from_millis(60);
pub const TAGLINE_DELETE_DELAY: Duration = Duration::from_millis(50);
pub const TAGLINE_PAUSE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaglinePhase {
    Typing,
    PausedAfterType,
    Deleting,
}

/// Tagline that types each phrase of a list, pauses, deletes it and moves
/// on to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaglineTypewriter {
    words: Vec<String>,
    word_index: usize,
    current_text: String,
    phase: TaglinePhase,
    pending: Duration,
}

impl TaglineTypewriter {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words.iter().map(|w| w.as_ref().to_string()).collect(),
            word_index: 0,
            current_text: String::new(),
            phase: TaglinePhase::Deleting,
            pending: Duration::ZERO,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn current_text(&self) -> &str {
        &self.current_text
    }

    pub fn phase(&self) -> TaglinePhase {
        self.phase
    }

    /// Delay before the next transition in the current phase.
    pub fn delay(&self) -> Duration {
        match self.phase {
            TaglinePhase::Typing => TAGLINE_TYPE_DELAY,
            TaglinePhase::PausedAfterType => TAGLINE_PAUSE,
            TaglinePhase::Deleting => TAGLINE_DELETE_DELAY,
        }
    }

    pub fn step(&mut self) {
        let Some(word) = self.words.get(self.word_index) else {
            return;
        };
        match self.phase {
            TaglinePhase::Typing => {
                let typed = self.current_text.chars().count();
                if typed >= word.chars().count() {
                    self.phase = TaglinePhase::PausedAfterType;
                } else {
                    self.current_text = prefix(word, typed + 1);
                }
            }
            TaglinePhase::PausedAfterType => {
                self.phase = TaglinePhase::Deleting;
            }
            TaglinePhase::Deleting => {
                if self.current_text.is_empty() {
                    self.phase = TaglinePhase::Typing;
                    self.word_index = (self.word_index + 1) % self.words.len();
                } else {
                    self.current_text.pop();
                }
            }
        }
    }

    /// Consume `elapsed`, stepping whenever the current phase's delay is
    /// covered.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        if self.words.is_empty() {
            return 0;
        }
        self.pending += elapsed;
        let mut steps = 0;
        while self.pending >= self.delay() {
            self.pending -= self.delay();
            self.step();
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_first_cycle_swaps_to_second_phrase() {
        let mut hero = HeroTypewriter::default();
        assert_eq!(hero.full_text(), "Web Designer");
        assert!(hero.is_deleting());
        assert_eq!(hero.index(), 0);

        hero.step();
        assert_eq!(hero.full_text(), "Graphic Designer");
        assert!(!hero.is_deleting());
        assert_eq!(hero.index(), 0);
        assert_eq!(hero.text(), "");

        hero.step();
        hero.step();
        assert_eq!(hero.text(), "G");
    }

    #[test]
    fn test_hero_full_cycle() {
        let mut hero = HeroTypewriter::default();
        hero.step(); // swap to "Graphic Designer"

        // 17 typing ticks reveal 0..=16 characters.
        for _ in 0..17 {
            hero.step();
        }
        assert_eq!(hero.text(), "Graphic Designer");
        assert!(!hero.is_deleting());

        hero.step(); // index exhausted: start deleting, no swap
        assert!(hero.is_deleting());
        assert_eq!(hero.full_text(), "Graphic Designer");

        while hero.index() > 0 {
            hero.step();
        }
        assert_eq!(hero.text(), "G");

        hero.step(); // deleting exhausted: swap back
        assert_eq!(hero.full_text(), "Web Designer");
        assert!(!hero.is_deleting());
        assert_eq!(hero.index(), 0);
    }

    #[test]
    fn test_hero_advance_uses_100ms_ticks() {
        let mut hero = HeroTypewriter::default();
        assert_eq!(hero.advance(Duration::from_millis(99)), 0);
        assert_eq!(hero.advance(Duration::from_millis(1)), 1);
        assert_eq!(hero.full_text(), "Graphic Designer");
        assert_eq!(hero.advance(Duration::from_millis(350)), 3);
        assert_eq!(hero.text(), "Gr");
    }

    #[test]
    fn test_hero_multibyte_phrases() {
        let mut hero = HeroTypewriter::new("Diseño", "Fundación");
        hero.step();
        for _ in 0..10 {
            hero.step();
        }
        assert_eq!(hero.text(), "Fundación");
    }

    #[test]
    fn test_tagline_single_phrase_loop() {
        let mut tagline = TaglineTypewriter::new(&["abc"]);
        assert_eq!(tagline.phase(), TaglinePhase::Deleting);

        // First 50 ms tick: empty while deleting, start typing.
        assert_eq!(tagline.advance(TAGLINE_DELETE_DELAY), 1);
        assert_eq!(tagline.phase(), TaglinePhase::Typing);
        assert_eq!(tagline.word_index(), 0);

        assert_eq!(tagline.advance(TAGLINE_TYPE_DELAY * 3), 3);
        assert_eq!(tagline.current_text(), "abc");

        tagline.advance(TAGLINE_TYPE_DELAY);
        assert_eq!(tagline.phase(), TaglinePhase::PausedAfterType);
        assert_eq!(tagline.delay(), TAGLINE_PAUSE);

        assert_eq!(tagline.advance(Duration::from_millis(199)), 0);
        assert_eq!(tagline.advance(Duration::from_millis(1)), 1);
        assert_eq!(tagline.phase(), TaglinePhase::Deleting);

        tagline.advance(TAGLINE_DELETE_DELAY * 3);
        assert_eq!(tagline.current_text(), "");
        tagline.advance(TAGLINE_DELETE_DELAY);
        assert_eq!(tagline.phase(), TaglinePhase::Typing);
        assert_eq!(tagline.word_index(), 0);
    }

    #[test]
    fn test_tagline_advances_word_index() {
        let mut tagline = TaglineTypewriter::new(&["a", "b"]);
        tagline.step(); // empty: typing, word 1
        assert_eq!(tagline.word_index(), 1);
        tagline.step();
        assert_eq!(tagline.current_text(), "b");
        tagline.step(); // complete -> pause
        tagline.step(); // pause -> deleting
        tagline.step(); // pop
        tagline.step(); // empty -> next word
        assert_eq!(tagline.word_index(), 0);
        assert_eq!(tagline.phase(), TaglinePhase::Typing);
    }

    #[test]
    fn test_tagline_empty_list_is_inert() {
        let mut tagline = TaglineTypewriter::new::<&str>(&[]);
        assert_eq!(tagline.advance(Duration::from_secs(5)), 0);
        tagline.step();
        assert_eq!(tagline.current_text(), "");
    }
}
