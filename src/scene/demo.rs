use crate::foundation::core::Canvas;
use crate::scene::bouncer::Bouncer;
use crate::scene::group::NodeGroup;
use crate::scene::node::Body;

/// The reference pixel: a 4x4 black square starting at the origin with velocity (4, 6).
pub fn pixel(canvas: Canvas) -> Bouncer {
    Bouncer::new(
        Body::default().with_size(4.0, 4.0).with_velocity(4.0, 6.0),
        canvas.size(),
    )
}

/// A group holding [`pixel`], ready to be pushed under a scene root.
pub fn bouncing_pixel(canvas: Canvas) -> NodeGroup {
    NodeGroup::new().with_child(pixel(canvas))
}
