//! Class and style strings for the reveal animations.

pub const FADE_IN: &str = "fade-in";
pub const SLIDE_UP: &str = "slide-up";
const HIDDEN: &str = "opacity-0";

pub const PARTICLE_COUNT: usize = 20;

pub fn reveal_class(visible: bool, animation: &'static str) -> &'static str {
    if visible {
        animation
    } else {
        HIDDEN
    }
}

/// `animation-delay` for the `index`th item of a staggered list.
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("animation-delay: {}s", seconds(index as u32 * step_ms))
}

/// Width of a skill bar: empty until revealed, then filled to `level` percent.
pub fn skill_bar_style(visible: bool, level: u8, index: usize) -> String {
    let width = if visible { level.min(100) } else { 0 };
    format!(
        "width: {width}%; transition-delay: {}s",
        seconds(index as u32 * 100)
    )
}

fn seconds(ms: u32) -> String {
    let s = format!("{:.3}", ms as f64 / 1000.0);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Largest rotation of the hero portrait on either axis.
pub const TILT_MAX_DEG: f64 = 15.0;
const TILT_SCALE: f64 = 1.05;

/// Transform tilting a card toward the pointer at (`x`, `y`) inside a
/// `width` x `height` box. Flat when the pointer is outside.
pub fn tilt_style(x: f64, y: f64, width: f64, height: f64, outside: bool) -> String {
    if outside || width <= 0.0 || height <= 0.0 {
        return "transform: perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1)".to_string();
    }
    let dx = (x / width * 2.0 - 1.0).clamp(-1.0, 1.0);
    let dy = (y / height * 2.0 - 1.0).clamp(-1.0, 1.0);
    format!(
        "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale({TILT_SCALE})",
        0.0 - dy * TILT_MAX_DEG,
        dx * TILT_MAX_DEG
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub delay: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s",
            self.left, self.top, self.delay
        )
    }
}

/// Scattered hero particles. Positions come from the index alone so the
/// server-rendered markup and the hydrated markup agree.
pub fn particles() -> Vec<Particle> {
    (0..PARTICLE_COUNT as u64)
        .map(|i| Particle {
            left: unit(i * 3) * 100.0,
            top: unit(i * 3 + 1) * 100.0,
            delay: unit(i * 3 + 2) * 6.0,
        })
        .collect()
}

// splitmix64 mapped onto [0, 1)
fn unit(seed: u64) -> f64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class(false, SLIDE_UP), "opacity-0");
        assert_eq!(reveal_class(true, SLIDE_UP), "slide-up");
        assert_eq!(reveal_class(true, FADE_IN), "fade-in");
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 200), "animation-delay: 0s");
        assert_eq!(stagger_delay(1, 200), "animation-delay: 0.2s");
        assert_eq!(stagger_delay(3, 200), "animation-delay: 0.6s");
    }

    #[test]
    fn test_skill_bar_fills_after_reveal() {
        assert_eq!(skill_bar_style(false, 90, 0), "width: 0%; transition-delay: 0s");
        assert_eq!(skill_bar_style(true, 90, 2), "width: 90%; transition-delay: 0.2s");
        assert_eq!(skill_bar_style(true, 250, 0), "width: 100%; transition-delay: 0s");
    }

    #[test]
    fn test_particles_are_deterministic_and_in_bounds() {
        let a = particles();
        assert_eq!(a.len(), PARTICLE_COUNT);
        assert_eq!(a, particles());
        for p in &a {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.0..6.0).contains(&p.delay));
        }
    }

    #[test]
    fn test_particles_are_scattered() {
        let a = particles();
        assert!(a.windows(2).any(|w| w[0].left != w[1].left));
    }

    #[test]
    fn test_tilt_is_flat_outside_card() {
        let flat = "transform: perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1)";
        assert_eq!(tilt_style(10.0, 10.0, 320.0, 320.0, true), flat);
        // not measured yet
        assert_eq!(tilt_style(0.0, 0.0, 0.0, 0.0, false), flat);
    }

    #[test]
    fn test_tilt_follows_pointer() {
        assert_eq!(
            tilt_style(160.0, 160.0, 320.0, 320.0, false),
            "transform: perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) scale(1.05)"
        );
        assert_eq!(
            tilt_style(320.0, 0.0, 320.0, 320.0, false),
            "transform: perspective(1000px) rotateX(15.00deg) rotateY(15.00deg) scale(1.05)"
        );
        assert_eq!(
            tilt_style(80.0, 240.0, 320.0, 320.0, false),
            "transform: perspective(1000px) rotateX(-7.50deg) rotateY(-7.50deg) scale(1.05)"
        );
    }

    #[test]
    fn test_tilt_never_exceeds_max_angle() {
        assert_eq!(
            tilt_style(-500.0, 900.0, 320.0, 320.0, false),
            "transform: perspective(1000px) rotateX(-15.00deg) rotateY(-15.00deg) scale(1.05)"
        );
    }
}
