use photo_timeline_core::{Direction, Lightbox, LightboxState, LightboxSurface};
use proptest::prelude::*;

#[derive(Default)]
struct Screen {
    shown: Option<String>,
}

impl LightboxSurface for Screen {
    fn show_image(&mut self, src: &str) {
        self.shown = Some(src.to_string());
    }

    fn clear_image(&mut self) {
        self.shown = None;
    }

    fn set_visible(&mut self, _visible: bool) {}

    fn set_scroll_locked(&mut self, _locked: bool) {}
}

fn image_list() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,6}\\.jpg", 1..12)
}

proptest! {
    #[test]
    fn prop_open_shows_requested_image(images in image_list(), seed in 0usize..64) {
        let start = seed % images.len();
        let mut lightbox = Lightbox::new(Screen::default());
        lightbox.open(images.clone(), start as isize);

        prop_assert_eq!(lightbox.current(), Some(images[start].as_str()));
        prop_assert_eq!(lightbox.surface().shown.as_deref(), Some(images[start].as_str()));
    }

    #[test]
    fn prop_full_cycle_returns_to_start(
        images in image_list(),
        seed in 0usize..64,
        forward in any::<bool>(),
    ) {
        let start = seed % images.len();
        let direction = if forward { Direction::Next } else { Direction::Previous };
        let mut lightbox = Lightbox::new(Screen::default());
        lightbox.open(images.clone(), start as isize);

        for _ in 0..images.len() {
            lightbox.advance(direction);
        }

        prop_assert_eq!(lightbox.current_index(), start);
        prop_assert!(lightbox.is_open());
    }

    #[test]
    fn prop_next_then_previous_is_identity(images in image_list(), seed in 0usize..64) {
        prop_assume!(images.len() > 1);
        let start = seed % images.len();
        let mut lightbox = Lightbox::new(Screen::default());
        lightbox.open(images, start as isize);

        lightbox.advance(Direction::Next);
        lightbox.advance(Direction::Previous);

        prop_assert_eq!(lightbox.current_index(), start);
    }

    #[test]
    fn prop_index_stays_in_bounds(
        images in image_list(),
        start in -20isize..40,
        moves in proptest::collection::vec(any::<bool>(), 0..30),
    ) {
        let mut lightbox = Lightbox::new(Screen::default());
        lightbox.open(images.clone(), start);

        for forward in moves {
            lightbox.advance(if forward { Direction::Next } else { Direction::Previous });
            prop_assert!(lightbox.current_index() < images.len());
        }
    }

    #[test]
    fn prop_reopen_never_leaks_previous_list(
        first in image_list(),
        second in image_list(),
        seed in 0usize..64,
    ) {
        let mut lightbox = Lightbox::new(Screen::default());
        lightbox.open(first.clone(), (seed % first.len()) as isize);
        lightbox.close();
        prop_assert_eq!(lightbox.state(), &LightboxState::Closed);

        lightbox.open(second.clone(), seed as isize);
        prop_assert_eq!(lightbox.images(), second.as_slice());
        let shown = lightbox.surface().shown.clone().unwrap_or_default();
        prop_assert!(second.contains(&shown));
    }
}
