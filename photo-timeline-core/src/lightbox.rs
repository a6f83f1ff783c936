/// Bề mặt hiển thị mà lightbox điều khiển (DOM, hoặc bản giả khi test).
pub trait LightboxSurface {
    fn show_image(&mut self, src: &str);
    fn clear_image(&mut self);
    fn set_visible(&mut self, visible: bool);
    fn set_scroll_locked(&mut self, locked: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { images: Vec<String>, index: usize },
}

/// Trình xem ảnh toàn màn hình; mọi thay đổi trạng thái đi qua các thao tác bên dưới.
#[derive(Debug)]
pub struct Lightbox<S> {
    state: LightboxState,
    surface: S,
}

impl<S: LightboxSurface> Lightbox<S> {
    pub fn new(surface: S) -> Self {
        Self {
            state: LightboxState::Closed,
            surface,
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Ảnh đang hiển thị, nếu lightbox đang mở.
    pub fn current(&self) -> Option<&str> {
        match &self.state {
            LightboxState::Open { images, index } => images.get(*index).map(String::as_str),
            LightboxState::Closed => None,
        }
    }

    pub fn current_index(&self) -> usize {
        match &self.state {
            LightboxState::Open { index, .. } => *index,
            LightboxState::Closed => 0,
        }
    }

    pub fn images(&self) -> &[String] {
        match &self.state {
            LightboxState::Open { images, .. } => images,
            LightboxState::Closed => &[],
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mở với danh sách mới, thay thế hoàn toàn danh sách cũ.
    ///
    /// Chỉ số được kẹp vào `[0, len - 1]`. Danh sách rỗng không mở gì cả.
    pub fn open(&mut self, images: Vec<String>, start: isize) {
        if images.is_empty() {
            self.close();
            return;
        }

        let last = images.len() - 1;
        let index = usize::try_from(start.max(0)).unwrap_or(0).min(last);
        self.state = LightboxState::Open { images, index };
        self.show();
        self.surface.set_visible(true);
        self.surface.set_scroll_locked(true);
    }

    /// Mở tại vị trí của `clicked` trong `images`; không tìm thấy thì mở ảnh đầu.
    pub fn open_at(&mut self, images: Vec<String>, clicked: &str) {
        let start = start_index(&images, clicked);
        self.open(images, start as isize);
    }

    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }

        self.state = LightboxState::Closed;
        self.surface.set_visible(false);
        self.surface.set_scroll_locked(false);
        self.surface.clear_image();
    }

    pub fn advance(&mut self, direction: Direction) {
        let LightboxState::Open { images, index } = &mut self.state else {
            return;
        };
        let len = images.len();
        if len == 0 {
            return;
        }

        *index = match direction {
            Direction::Next => (*index + 1) % len,
            Direction::Previous => (*index + len - 1) % len,
        };
        self.show();
    }

    /// Xử lý phím; trả về `true` nếu phím được dùng.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_open() {
            return false;
        }

        match key {
            "Escape" => self.close(),
            "ArrowLeft" => self.advance(Direction::Previous),
            "ArrowRight" => self.advance(Direction::Next),
            _ => return false,
        }
        true
    }

    fn show(&mut self) {
        if let LightboxState::Open { images, index } = &self.state {
            if let Some(src) = images.get(*index) {
                self.surface.show_image(src);
            }
        }
    }
}

/// Vị trí ảnh được bấm trong lưới, mặc định 0.
pub fn start_index(images: &[String], clicked: &str) -> usize {
    images
        .iter()
        .position(|src| src == clicked)
        .unwrap_or(0)
}
