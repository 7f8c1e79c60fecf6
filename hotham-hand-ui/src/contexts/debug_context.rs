use glam::Vec3;

/// Something that would be useful to see while tuning hand UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebugShape {
    /// A small sphere at a point
    Sphere(Vec3),
    /// A ray from a point, along a direction whose length is the ray's length
    Ray(Vec3, Vec3),
}

/// Shapes recorded this tick when `draw_debug` is on. A renderer can draw them however it likes.
#[derive(Debug, Clone, Default)]
pub struct DebugContext {
    /// Shapes recorded this tick
    pub shapes_this_frame: Vec<DebugShape>,
}

impl DebugContext {
    /// Record a shape
    pub fn draw(&mut self, shape: DebugShape) {
        self.shapes_this_frame.push(shape);
    }

    /// Forget the previous tick's shapes
    pub fn clear(&mut self) {
        self.shapes_this_frame.clear();
    }
}
