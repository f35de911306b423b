/// State machine behind the hero typing animation.
///
/// Owns the target string and the byte length of the prefix revealed so far.
/// The offset always lands on a char boundary, so multi-byte characters
/// appear atomically rather than as partial bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    target: String,
    revealed: usize,
}

impl Typewriter {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            revealed: 0,
        }
    }

    /// Reveal the next character. Returns `false` once the full target is
    /// already visible, without changing any state.
    pub fn tick(&mut self) -> bool {
        match self.target[self.revealed..].chars().next() {
            Some(c) => {
                self.revealed += c.len_utf8();
                true
            }
            None => false,
        }
    }

    /// The currently revealed prefix of the target string.
    pub fn revealed(&self) -> &str {
        &self.target[..self.revealed]
    }

    pub fn is_done(&self) -> bool {
        self.revealed == self.target.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_tick() {
        let target = "HTML, CSS, JavaScript, and React.";
        let mut tw = Typewriter::new(target);

        let chars: Vec<char> = target.chars().collect();
        for n in 0..chars.len() {
            // Prefix property: after n ticks, exactly the first n chars show
            let expected: String = chars[..n].iter().collect();
            assert_eq!(tw.revealed(), expected);
            assert!(!tw.is_done(), "should still be active after {} ticks", n);
            assert!(tw.tick());
        }

        assert_eq!(tw.revealed(), target);
        assert!(tw.is_done());
    }

    #[test]
    fn test_tick_after_completion_is_noop() {
        let mut tw = Typewriter::new("abc");
        while tw.tick() {}

        assert!(tw.is_done());
        assert!(!tw.tick());
        assert_eq!(tw.revealed(), "abc");
        assert!(tw.is_done());
    }

    #[test]
    fn test_multibyte_chars_revealed_atomically() {
        let mut tw = Typewriter::new("héllo");

        assert!(tw.tick());
        assert_eq!(tw.revealed(), "h");
        assert!(tw.tick());
        assert_eq!(tw.revealed(), "hé");
        while tw.tick() {}
        assert_eq!(tw.revealed(), "héllo");
    }

    #[test]
    fn test_empty_target_is_done_immediately() {
        let mut tw = Typewriter::new("");

        assert!(tw.is_done());
        assert!(!tw.tick());
        assert_eq!(tw.revealed(), "");
    }
}
