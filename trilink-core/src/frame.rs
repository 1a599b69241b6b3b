use nalgebra::{Matrix4, Point3, Vector3};

const ARROW_SHAFT_RADIUS: f32 = 0.05;
const ARROW_HEAD_RADIUS: f32 = 0.10;
const ORIGIN_RADIUS: f32 = 0.10;
const LINK_ALPHA: f32 = 0.8;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Black,
    Gray,
    Yellow,
}

/// Renderable shape descriptor.
///
/// Primitives only describe placement and appearance. Turning them into a mesh
/// is left to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Arrow {
        start: Point3<f32>,
        end: Point3<f32>,
        shaft_radius: f32,
        head_radius: f32,
        color: Color,
        alpha: f32,
    },
    Cylinder {
        center: Point3<f32>,
        axis: Vector3<f32>,
        radius: f32,
        height: f32,
        color: Color,
        alpha: f32,
    },
    Sphere {
        center: Point3<f32>,
        radius: f32,
        color: Color,
        alpha: f32,
    },
}

impl Primitive {
    fn axis_arrow(end: Vector3<f32>, color: Color) -> Self {
        Primitive::Arrow {
            start: Point3::origin(),
            end: end.into(),
            shaft_radius: ARROW_SHAFT_RADIUS,
            head_radius: ARROW_HEAD_RADIUS,
            color,
            alpha: 1.0,
        }
    }

    /// Move the primitive by a rigid-body transform.
    pub fn transform(&self, pose: &Matrix4<f32>) -> Self {
        match self {
            Primitive::Arrow {
                start,
                end,
                shaft_radius,
                head_radius,
                color,
                alpha,
            } => Primitive::Arrow {
                start: pose.transform_point(start),
                end: pose.transform_point(end),
                shaft_radius: *shaft_radius,
                head_radius: *head_radius,
                color: *color,
                alpha: *alpha,
            },
            Primitive::Cylinder {
                center,
                axis,
                radius,
                height,
                color,
                alpha,
            } => Primitive::Cylinder {
                center: pose.transform_point(center),
                axis: pose.transform_vector(axis),
                radius: *radius,
                height: *height,
                color: *color,
                alpha: *alpha,
            },
            Primitive::Sphere {
                center,
                radius,
                color,
                alpha,
            } => Primitive::Sphere {
                center: pose.transform_point(center),
                radius: *radius,
                color: *color,
                alpha: *alpha,
            },
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        match self {
            Primitive::Arrow { color, .. }
            | Primitive::Cylinder { color, .. }
            | Primitive::Sphere { color, .. } => *color,
        }
    }
}

/// Coordinate frame with its attached geometry.
///
/// A frame starts out at the world origin. Applying a transform moves every
/// primitive and accumulates into the frame pose.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameObject {
    name: String,
    pose: Matrix4<f32>,
    primitives: Vec<Primitive>,
}

impl FrameObject {
    /// Three unit axis arrows (x red, y green, z blue) and a black origin dot.
    pub fn coordinate_frame(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            pose: Matrix4::identity(),
            primitives: vec![
                Primitive::axis_arrow(Vector3::x(), Color::Red),
                Primitive::axis_arrow(Vector3::y(), Color::Green),
                Primitive::axis_arrow(Vector3::z(), Color::Blue),
                Primitive::Sphere {
                    center: Point3::origin(),
                    radius: ORIGIN_RADIUS,
                    color: Color::Black,
                    alpha: 1.0,
                },
            ],
        }
    }

    /// Attach a link cylinder running from the origin along the local x-axis.
    pub fn with_link(mut self, length: f32, radius: f32, color: Color) -> Self {
        let link = Primitive::Cylinder {
            center: Point3::new(length / 2.0, 0.0, 0.0),
            axis: Vector3::x(),
            radius,
            height: length,
            color,
            alpha: LINK_ALPHA,
        };

        self.primitives.push(link.transform(&self.pose));
        self
    }

    /// Attach a base sphere just behind the origin.
    pub fn with_base_sphere(mut self, radius: f32) -> Self {
        let sphere = Primitive::Sphere {
            center: Point3::new(-radius, 0.0, 0.0),
            radius,
            color: Color::Gray,
            alpha: LINK_ALPHA,
        };

        self.primitives.push(sphere.transform(&self.pose));
        self
    }

    /// Move the frame and all of its geometry by `transform`.
    pub fn apply_transform(mut self, transform: &Matrix4<f32>) -> Self {
        for primitive in self.primitives.iter_mut() {
            *primitive = primitive.transform(transform);
        }
        self.pose = transform * self.pose;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn pose(&self) -> &Matrix4<f32> {
        &self.pose
    }

    #[inline]
    pub fn origin(&self) -> Point3<f32> {
        crate::transform::origin(&self.pose)
    }

    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }
}

impl std::fmt::Display for FrameObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let point = self.origin();

        write!(
            f,
            "{} [{:.2}, {:.2}, {:.2}]",
            self.name, point.x, point.y, point.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::Axis, transform::compose};

    #[test]
    fn test_coordinate_frame() {
        let frame = FrameObject::coordinate_frame("frame");

        assert_eq!(frame.primitives().len(), 4);
        assert_eq!(frame.origin(), Point3::origin());
        assert_eq!(frame.primitives()[0].color(), Color::Red);
        assert_eq!(frame.primitives()[1].color(), Color::Green);
        assert_eq!(frame.primitives()[2].color(), Color::Blue);
        assert_eq!(frame.primitives()[3].color(), Color::Black);
    }

    #[test]
    fn test_link_geometry() {
        let frame = FrameObject::coordinate_frame("frame1")
            .with_link(5.0, 0.4, Color::Yellow)
            .with_base_sphere(0.4);

        assert_eq!(frame.primitives().len(), 6);
        assert_eq!(
            frame.primitives()[4],
            Primitive::Cylinder {
                center: Point3::new(2.5, 0.0, 0.0),
                axis: Vector3::x(),
                radius: 0.4,
                height: 5.0,
                color: Color::Yellow,
                alpha: 0.8,
            }
        );
        assert_eq!(
            frame.primitives()[5],
            Primitive::Sphere {
                center: Point3::new(-0.4, 0.0, 0.0),
                radius: 0.4,
                color: Color::Gray,
                alpha: 0.8,
            }
        );
    }

    #[test]
    fn test_apply_transform() {
        let pose = compose(&Axis::Z.rotation(90.0), &Vector3::new(3.0, 2.0, 0.0));
        let frame = FrameObject::coordinate_frame("frame1")
            .with_link(5.0, 0.4, Color::Yellow)
            .apply_transform(&pose);

        assert_eq!(frame.pose(), &pose);
        assert_eq!(frame.origin(), Point3::new(3.0, 2.0, 0.0));

        match &frame.primitives()[0] {
            Primitive::Arrow { start, end, .. } => {
                assert_eq!(*start, Point3::new(3.0, 2.0, 0.0));
                assert!(nalgebra::distance(end, &Point3::new(3.0, 3.0, 0.0)) < 1e-5);
            }
            other => panic!("unexpected primitive {:?}", other),
        }

        match &frame.primitives()[4] {
            Primitive::Cylinder { center, axis, .. } => {
                assert!(nalgebra::distance(center, &Point3::new(3.0, 4.5, 0.0)) < 1e-5);
                assert!((axis - Vector3::y()).norm() < 1e-5);
            }
            other => panic!("unexpected primitive {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        let pose = compose(&Axis::Z.rotation(0.0), &Vector3::new(8.0, 2.0, 0.0));
        let frame = FrameObject::coordinate_frame("frame2").apply_transform(&pose);

        assert_eq!(frame.to_string(), "frame2 [8.00, 2.00, 0.00]");
    }
}
