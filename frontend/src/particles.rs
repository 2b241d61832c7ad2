use std::ops::Range;

use rand::Rng;

/// A dot placed in percent-of-container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub delay: f64,
}

#[derive(Debug, Clone)]
pub struct ScatterSpec {
    pub count: usize,
    pub size: Range<f64>,
    pub delay: Range<f64>,
}

impl ScatterSpec {
    /// Background field behind the curtain.
    pub fn intro_field(count: usize) -> Self {
        Self {
            count,
            size: 1.0..4.0,
            delay: 0.0..5.0,
        }
    }

    /// Sparkles painted on each curtain panel.
    pub fn curtain_sparkles(count: usize) -> Self {
        Self {
            count,
            size: 4.0..4.0,
            delay: 0.0..2.0,
        }
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> f64 {
    if range.is_empty() {
        range.start
    } else {
        rng.gen_range(range.clone())
    }
}

pub fn scatter<R: Rng + ?Sized>(rng: &mut R, spec: &ScatterSpec) -> Vec<Particle> {
    (0..spec.count)
        .map(|_| Particle {
            x: rng.gen::<f64>() * 100.0,
            y: rng.gen::<f64>() * 100.0,
            size: sample(rng, &spec.size),
            delay: sample(rng, &spec.delay),
        })
        .collect()
}

/// A blurred orb drifting across a section background.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingElement {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: String,
    pub duration: f64,
    pub delay: f64,
}

impl FloatingElement {
    /// Drift keyframe offsets in px; alternate by id so neighbours diverge.
    pub fn drift(&self) -> [(i32, i32); 3] {
        let id = self.id;
        [
            (if id % 2 == 0 { 50 } else { -50 }, if id % 3 == 0 { 50 } else { -50 }),
            (if id % 3 == 0 { -30 } else { 30 }, if id % 2 == 0 { -30 } else { 30 }),
            (if id % 5 == 0 { 40 } else { -40 }, if id % 4 == 0 { 40 } else { -40 }),
        ]
    }
}

pub fn floating_elements<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    size: Range<f64>,
    colors: &[String],
) -> Vec<FloatingElement> {
    (0..count)
        .map(|id| FloatingElement {
            id,
            x: rng.gen::<f64>() * 100.0,
            y: rng.gen::<f64>() * 100.0,
            size: sample(rng, &size),
            color: if colors.is_empty() {
                "#8B5CF6".to_string()
            } else {
                colors[rng.gen_range(0..colors.len())].clone()
            },
            duration: rng.gen_range(15.0..45.0),
            delay: rng.gen_range(0.0..5.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn intro_field_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = scatter(&mut rng, &ScatterSpec::intro_field(50));
        assert_eq!(particles.len(), 50);
        for p in &particles {
            assert!((0.0..=100.0).contains(&p.x));
            assert!((0.0..=100.0).contains(&p.y));
            assert!((1.0..4.0).contains(&p.size));
            assert!((0.0..5.0).contains(&p.delay));
        }
    }

    #[test]
    fn fixed_size_spec_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(1);
        let sparkles = scatter(&mut rng, &ScatterSpec::curtain_sparkles(20));
        assert!(sparkles.iter().all(|p| p.size == 4.0));
    }

    #[test]
    fn floating_elements_pick_from_palette() {
        let mut rng = StdRng::seed_from_u64(3);
        let colors = vec!["#111111".to_string(), "#222222".to_string()];
        let elements = floating_elements(&mut rng, 15, 10.0..40.0, &colors);
        assert_eq!(elements.len(), 15);
        for (i, e) in elements.iter().enumerate() {
            assert_eq!(e.id, i);
            assert!(colors.contains(&e.color));
            assert!((10.0..40.0).contains(&e.size));
            assert!((15.0..45.0).contains(&e.duration));
        }
    }

    #[test]
    fn drift_alternates_by_id() {
        let base = FloatingElement {
            id: 0,
            x: 0.0,
            y: 0.0,
            size: 10.0,
            color: String::new(),
            duration: 20.0,
            delay: 0.0,
        };
        let odd = FloatingElement { id: 1, ..base.clone() };
        assert_eq!(base.drift()[0], (50, 50));
        assert_eq!(odd.drift()[0], (-50, -50));
    }
}
