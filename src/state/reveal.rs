/// One-shot visibility flag: `Unseen -> Revealed`, and `Revealed` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Unseen,
    Revealed,
}

impl Reveal {
    #[cfg(test)]
    pub fn is_revealed(self) -> bool {
        self == Reveal::Revealed
    }

    /// Feeds one intersection report. Returns `true` only on the report that
    /// reveals the element, which is the caller's cue to stop observing it.
    pub fn observe(&mut self, intersecting: bool, ratio: f64, threshold: f64) -> bool {
        if *self == Reveal::Unseen && intersecting && ratio >= threshold {
            *self = Reveal::Revealed;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_threshold_is_crossed() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(false, 0.0, 0.1));
        assert!(!reveal.observe(true, 0.05, 0.1));
        assert!(!reveal.is_revealed());

        assert!(reveal.observe(true, 0.1, 0.1));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn never_retriggers() {
        let mut reveal = Reveal::default();
        assert!(reveal.observe(true, 0.5, 0.2));

        // Leaves and re-enters the viewport.
        assert!(!reveal.observe(false, 0.0, 0.2));
        assert!(!reveal.observe(true, 1.0, 0.2));
        assert_eq!(reveal, Reveal::Revealed);
    }
}
