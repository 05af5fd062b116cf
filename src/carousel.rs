//! Photo viewer state: an inline carousel and a full-screen modal.

/// Inline single-image viewer over an ordered photo list.
///
/// Navigation wraps around in both directions. An empty list has no viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoCarousel {
    photos: Vec<String>,
    index: usize,
}

impl PhotoCarousel {
    /// `None` when there are no photos to show.
    pub fn new(photos: Vec<String>, initial_index: usize) -> Option<Self> {
        if photos.is_empty() {
            return None;
        }
        let index = initial_index.min(photos.len() - 1);
        Some(Self { photos, index })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    pub fn current(&self) -> &str {
        &self.photos[self.index]
    }

    pub fn next(&mut self) {
        self.index = if self.index + 1 == self.photos.len() {
            0
        } else {
            self.index + 1
        };
    }

    pub fn previous(&mut self) {
        self.index = if self.index == 0 {
            self.photos.len() - 1
        } else {
            self.index - 1
        };
    }

    /// Jump to a dot. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.photos.len() {
            self.index = index;
        }
    }

    /// Arrows, dots and the counter only appear with more than one photo.
    pub fn shows_controls(&self) -> bool {
        self.photos.len() > 1
    }

    /// One-based position label, e.g. `"2 / 5"`.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.photos.len())
    }
}

/// Keys the full-screen viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Full-screen photo viewer that owns keyboard input while open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoModal {
    carousel: PhotoCarousel,
    open: bool,
}

impl PhotoModal {
    /// Opens at `initial_index`; `None` when there are no photos.
    pub fn open(photos: Vec<String>, initial_index: usize) -> Option<Self> {
        PhotoCarousel::new(photos, initial_index).map(|carousel| Self {
            carousel,
            open: true,
        })
    }

    pub fn carousel(&self) -> &PhotoCarousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut PhotoCarousel {
        &mut self.carousel
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Background scrolling is disabled exactly while the modal is open.
    pub fn locks_scroll(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle a key press. Keys are ignored once the modal is closed.
    pub fn handle_key(&mut self, key: ViewerKey) {
        if !self.open {
            return;
        }
        match key {
            ViewerKey::Escape => self.close(),
            ViewerKey::ArrowLeft => self.carousel.previous(),
            ViewerKey::ArrowRight => self.carousel.next(),
            ViewerKey::Other => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("/uploads/{i}.jpg")).collect()
    }

    #[test]
    fn test_empty_list_has_no_viewer() {
        assert!(PhotoCarousel::new(vec![], 0).is_none());
        assert!(PhotoModal::open(vec![], 0).is_none());
    }

    #[test]
    fn test_next_n_times_returns_to_start() {
        for n in 1..=6 {
            for start in 0..n {
                let mut carousel = PhotoCarousel::new(photos(n), start).unwrap();
                for _ in 0..n {
                    carousel.next();
                }
                assert_eq!(carousel.index(), start);
            }
        }
    }

    #[test]
    fn test_previous_at_zero_wraps_to_last() {
        let mut carousel = PhotoCarousel::new(photos(4), 0).unwrap();
        carousel.previous();
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.current(), "/uploads/3.jpg");
        assert_eq!(carousel.position_label(), "4 / 4");
    }

    #[test]
    fn test_initial_index_is_clamped() {
        let carousel = PhotoCarousel::new(photos(3), 10).unwrap();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_controls_only_for_multiple_photos() {
        assert!(!PhotoCarousel::new(photos(1), 0).unwrap().shows_controls());
        assert!(PhotoCarousel::new(photos(2), 0).unwrap().shows_controls());
    }

    #[test]
    fn test_jump_to_ignores_out_of_range() {
        let mut carousel = PhotoCarousel::new(photos(3), 0).unwrap();
        carousel.jump_to(2);
        assert_eq!(carousel.index(), 2);
        carousel.jump_to(7);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_modal_keys() {
        let mut modal = PhotoModal::open(photos(3), 1).unwrap();
        assert!(modal.locks_scroll());

        modal.handle_key(ViewerKey::ArrowRight);
        modal.handle_key(ViewerKey::ArrowRight);
        assert_eq!(modal.carousel().index(), 0);
        modal.handle_key(ViewerKey::ArrowLeft);
        assert_eq!(modal.carousel().index(), 2);
        modal.handle_key(ViewerKey::Other);
        assert_eq!(modal.carousel().index(), 2);

        modal.handle_key(ViewerKey::Escape);
        assert!(!modal.is_open());
        assert!(!modal.locks_scroll());

        modal.handle_key(ViewerKey::ArrowRight);
        assert_eq!(modal.carousel().index(), 2);
    }
}
