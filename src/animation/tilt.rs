/// Rotation in degrees for a pointer at (x, y) inside a card of the given
/// size, relative to the card's top-left corner.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let rotate_x = (y - height / 2.0) / 20.0;
    let rotate_y = (width / 2.0 - x) / 20.0;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let (rotate_x, rotate_y) = tilt_angles(x, y, width, height);
    format!(
        "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateY(-4px)",
        rotate_x, rotate_y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        assert_eq!(tilt_angles(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn corners_lean_towards_pointer() {
        assert_eq!(tilt_angles(0.0, 0.0, 200.0, 100.0), (-2.5, 5.0));
        assert_eq!(tilt_angles(200.0, 100.0, 200.0, 100.0), (2.5, -5.0));
    }

    #[test]
    fn transform_keeps_lift() {
        assert_eq!(
            tilt_transform(100.0, 50.0, 200.0, 100.0),
            "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) translateY(-4px)"
        );
    }
}
