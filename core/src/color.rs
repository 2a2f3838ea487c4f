//! HSL color utilities
//!
//! Generators paint in HSL (hue gradients along parametric progress, seeded
//! lightness jitter) and buffers store linear RGB triples. Conversions follow
//! the CSS hue2rgb piecewise form with hue wrapping, so `hsl(1.25, ..)` and
//! `hsl(0.25, ..)` are the same color and negative hue offsets are valid.

use glam::Vec3;

#[inline]
fn hue2rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// HSL to RGB. Hue wraps into [0, 1); saturation and lightness clamp.
#[inline]
pub fn hsl(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return Vec3::splat(l);
    }

    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Vec3::new(
        hue2rgb(p, q, h + 1.0 / 3.0),
        hue2rgb(p, q, h),
        hue2rgb(p, q, h - 1.0 / 3.0),
    )
}

/// RGB to (h, s, l), all in [0, 1].
#[inline]
pub fn rgb_to_hsl(rgb: Vec3) -> (f32, f32, f32) {
    let max = rgb.x.max(rgb.y).max(rgb.z);
    let min = rgb.x.min(rgb.y).min(rgb.z);
    let l = (max + min) * 0.5;

    if max == min {
        return (0.0, 0.0, l);
    }

    let delta = max - min;
    let s = if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };
    let h = if max == rgb.x {
        (rgb.y - rgb.z) / delta + if rgb.y < rgb.z { 6.0 } else { 0.0 }
    } else if max == rgb.y {
        (rgb.z - rgb.x) / delta + 2.0
    } else {
        (rgb.x - rgb.y) / delta + 4.0
    };

    (h / 6.0, s, l)
}

/// Offset a color in HSL space and convert back. Hue wraps; saturation and
/// lightness clamp. Used for per-instance jitter around a cluster base color.
#[inline]
pub fn offset_hsl(rgb: Vec3, dh: f32, ds: f32, dl: f32) -> Vec3 {
    let (h, s, l) = rgb_to_hsl(rgb);
    hsl(h + dh, s + ds, l + dl)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_primaries() {
        assert!(close(hsl(0.0, 1.0, 0.5), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(hsl(1.0 / 3.0, 1.0, 0.5), Vec3::new(0.0, 1.0, 0.0)));
        assert!(close(hsl(2.0 / 3.0, 1.0, 0.5), Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        assert!(close(hsl(0.37, 0.0, 0.25), Vec3::splat(0.25)));
    }

    #[test]
    fn test_hue_wraps() {
        assert!(close(hsl(1.25, 0.8, 0.6), hsl(0.25, 0.8, 0.6)));
        assert!(close(hsl(-0.75, 0.8, 0.6), hsl(0.25, 0.8, 0.6)));
    }

    #[test]
    fn test_round_trip() {
        for &(h, s, l) in &[(0.58f32, 0.9f32, 0.58f32), (0.78, 1.0, 0.62), (0.1, 0.75, 0.4)] {
            let rgb = hsl(h, s, l);
            let (h2, s2, l2) = rgb_to_hsl(rgb);
            assert!((h - h2).abs() < 1e-4, "hue: {h} vs {h2}");
            assert!((s - s2).abs() < 1e-4, "sat: {s} vs {s2}");
            assert!((l - l2).abs() < 1e-4, "light: {l} vs {l2}");
        }
    }

    #[test]
    fn test_offset_shifts_hue() {
        let base = hsl(0.5, 0.8, 0.5);
        let shifted = offset_hsl(base, 0.1, 0.0, 0.0);
        let (h, _, _) = rgb_to_hsl(shifted);
        assert!((h - 0.6).abs() < 1e-4);
    }

    #[test]
    fn test_offset_clamps_lightness() {
        let base = hsl(0.2, 0.5, 0.9);
        let brighter = offset_hsl(base, 0.0, 0.0, 0.5);
        let (_, _, l) = rgb_to_hsl(brighter);
        assert!((l - 1.0).abs() < 1e-5);
    }
}
