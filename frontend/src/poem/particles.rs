use rand::Rng;

const PALETTE: [&str; 3] = ["var(--zone-6-fire)", "var(--zone-4-flow)", "#ffffff"];

/// A decorative dot thrown when the poem opens. Coordinates are percentages
/// of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub x_pct: f64,
    pub y_pct: f64,
    pub color: &'static str,
}

/// Scatters `count` particles within 15% of the overlay centre.
pub fn burst<R: Rng + ?Sized>(rng: &mut R, first_id: u64, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| Particle {
            id: first_id + i as u64,
            x_pct: rng.random_range(35.0..65.0),
            y_pct: rng.random_range(35.0..65.0),
            color: PALETTE[rng.random_range(0..PALETTE.len())],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn burst_has_requested_size_within_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        let particles = burst(&mut rng, 100, 20);
        assert_eq!(particles.len(), 20);
        for (i, p) in particles.iter().enumerate() {
            assert_eq!(p.id, 100 + i as u64);
            assert!((35.0..65.0).contains(&p.x_pct));
            assert!((35.0..65.0).contains(&p.y_pct));
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn empty_burst() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(burst(&mut rng, 0, 0).is_empty());
    }
}
