//! Hue helpers for the particle snapshot
//!
//! Particles carry a hue in [0, 360); the renderer usually wants RGB.

/// Wrap a hue into [0, 360)
pub fn wrap_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Convert HSL (hue in degrees, s/l in [0,1]) to linear RGB
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = wrap_hue(h);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_negative_hue() {
        assert!((wrap_hue(-30.0) - 330.0).abs() < 1e-5);
        assert!((wrap_hue(400.0) - 40.0).abs() < 1e-5);
    }

    #[test]
    fn red_at_zero_hue() {
        let rgb = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((rgb[0] - 1.0).abs() < 1e-5);
        assert!(rgb[1].abs() < 1e-5);
        assert!(rgb[2].abs() < 1e-5);
    }

    #[test]
    fn grey_at_zero_saturation() {
        let rgb = hsl_to_rgb(123.0, 0.0, 0.5);
        for c in rgb {
            assert!((c - 0.5).abs() < 1e-5);
        }
    }
}
