use kurbo::Vec2;

pub(crate) fn deg_to_rad(angle_deg: f64) -> f64 {
    std::f64::consts::TAU / 360.0 * angle_deg
}

pub(crate) fn rotate(v: Vec2, theta_rad: f64) -> Vec2 {
    let (sin, cos) = theta_rad.sin_cos();
    Vec2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

/// Rounded `x * y / 255` for premultiplied channel math.
pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}
