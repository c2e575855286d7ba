use crate::components::KinematicBody;

/// Advance a body by one tick of gravity and rest it on the ground line
///
/// Velocity is integrated before position. Reaching or passing the ground
/// snaps the body onto it and zeroes the fall.
pub fn integrate_body(body: &mut KinematicBody, gravity: f32, ground_line: f32) {
    body.vel_y += gravity;
    body.pos.y += body.vel_y;

    let rest_y = ground_line - body.size;
    if body.pos.y >= rest_y {
        body.pos.y = rest_y;
        body.vel_y = 0.0;
        body.on_ground = true;
    } else {
        body.on_ground = false;
    }
}
