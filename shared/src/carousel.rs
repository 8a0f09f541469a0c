/// Images the orb cycles through, relative to the image base URL.
pub const ORB_IMAGES: [&str; 8] = [
    "1.png", "2.png", "3.png", "4.png", "5.png", "6.png", "7.png", "8.png",
];

/// Index into a fixed ring of images, advanced one click at a time.
#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Carousel {
        Carousel {
            index: 0,
            len: len.max(1),
        }
    }

    /// Moves to the next image, wrapping after the last, and returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn at_last(&self) -> bool {
        self.index == self.len - 1
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Carousel::new(ORB_IMAGES.len())
    }
}
