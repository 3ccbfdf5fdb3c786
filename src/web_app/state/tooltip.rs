// web_app/state/tooltip.rs - Placement of the follow-the-cursor tooltip

/// Gap between the cursor and the tooltip's nearest corner, in CSS pixels
pub const CURSOR_OFFSET: f64 = 15.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Top-left corner for a tooltip of `tooltip` size next to `cursor`.
///
/// The tooltip sits below and to the right of the cursor; on each axis where
/// that would cross the viewport edge it flips to the other side instead.
pub fn place_tooltip(cursor: Point, tooltip: Size, viewport: Size) -> Point {
    let mut x = cursor.x + CURSOR_OFFSET;
    let mut y = cursor.y + CURSOR_OFFSET;

    if x + tooltip.width > viewport.width {
        x = cursor.x - tooltip.width - CURSOR_OFFSET;
    }
    if y + tooltip.height > viewport.height {
        y = cursor.y - tooltip.height - CURSOR_OFFSET;
    }

    Point { x, y }
}

/// What the description tooltip currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    pub text: String,
    pub visible: bool,
    pub position: Point,
}

impl TooltipState {
    pub fn show(&mut self, text: impl Into<String>, position: Point) {
        self.text = text.into();
        self.visible = true;
        self.position = position;
    }

    /// Re-place a tooltip that is already showing; ignored once hidden
    pub fn move_to(&mut self, position: Point) {
        if self.visible {
            self.position = position;
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}
