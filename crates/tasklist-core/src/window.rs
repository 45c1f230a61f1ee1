//! Window geometry: drag-to-move and grow-to-fit.

use std::ops::Sub;

use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Drag gesture state. `offset` is pointer minus window origin at press time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Drag {
    #[default]
    Idle,
    Dragging { offset: Point },
}

#[derive(Clone, Debug)]
pub struct WindowState {
    position: Point,
    size: Size,
    padding: f32,
    drag: Drag,
}

impl WindowState {
    pub fn new(position: Point, size: Size, padding: f32) -> Self {
        Self {
            position,
            size,
            padding,
            drag: Drag::Idle,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, Drag::Dragging { .. })
    }

    /// Geometry reported by the host. Position is ignored mid-drag, where
    /// the host lags behind the positions we asked for.
    pub fn observe(&mut self, position: Point, size: Size) {
        if !self.is_dragging() {
            self.position = position;
        }
        self.size = size;
    }

    /// Primary press over the drag region.
    pub fn press(&mut self, pointer: Point) {
        let offset = pointer - self.position;
        debug!(x = offset.x, y = offset.y, "drag start");
        self.drag = Drag::Dragging { offset };
    }

    /// Pointer move in screen coordinates. Returns the new window origin
    /// while dragging.
    pub fn pointer_moved(&mut self, pointer: Point) -> Option<Point> {
        let Drag::Dragging { offset } = self.drag else {
            return None;
        };
        let position = pointer - offset;
        if position == self.position {
            return None;
        }
        trace!(x = position.x, y = position.y, "drag move");
        self.position = position;
        Some(position)
    }

    pub fn release(&mut self) {
        if self.is_dragging() {
            debug!("drag end");
        }
        self.drag = Drag::Idle;
    }

    /// Grow each dimension the content overflows to content + 2 * padding.
    /// Never shrinks. Returns the new size when it changed.
    pub fn fit_content(&mut self, content: Size) -> Option<Size> {
        let mut next = self.size;
        if content.width > self.size.width {
            next.width = content.width + self.padding * 2.0;
        }
        if content.height > self.size.height {
            next.height = content.height + self.padding * 2.0;
        }
        if next == self.size {
            return None;
        }
        debug!(width = next.width, height = next.height, "autosize");
        self.size = next;
        Some(next)
    }
}
