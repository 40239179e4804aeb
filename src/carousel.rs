/// Index into a fixed-size list of slides that wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Jump to `index`, clamped to the last slide.
    pub fn go_to(self, index: usize) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: index.min(self.len - 1),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.prev().index(), 2);
        assert_eq!(carousel.next().next().next().index(), 0);
    }

    #[test]
    fn test_go_to_clamps() {
        let carousel = Carousel::new(4);
        assert_eq!(carousel.go_to(2).index(), 2);
        assert_eq!(carousel.go_to(10).index(), 3);
    }

    #[test]
    fn test_empty_is_inert() {
        let carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.next(), carousel);
        assert_eq!(carousel.prev(), carousel);
        assert_eq!(carousel.go_to(3), carousel);
    }
}
