use rand::Rng;

pub const DEFAULT_PARTICLE_COUNT: usize = 100;
pub const LINK_DISTANCE: f64 = 150.0;
pub const GRID_SPACING: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub alpha: f64,
}

/// A line between two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen::<f64>() * width,
                y: rng.gen::<f64>() * height,
                vx: (rng.gen::<f64>() - 0.5) * 0.5,
                vy: (rng.gen::<f64>() - 0.5) * 0.5,
                size: rng.gen::<f64>() * 2.0 + 1.0,
                alpha: rng.gen::<f64>() * 0.5 + 0.2,
            })
            .collect();
        Self { width, height, particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Moves every particle one frame, wrapping at the edges.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 {
                p.x = width;
            }
            if p.x > width {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = height;
            }
            if p.y > height {
                p.y = 0.0;
            }
        }
    }

    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist = (a.x - b.x).hypot(a.y - b.y);
                if dist < LINK_DISTANCE {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        alpha: 0.1 * (1.0 - dist / LINK_DISTANCE),
                    });
                }
            }
        }
        links
    }
}

/// Offsets of grid lines along one axis: 0, spacing, 2*spacing, ... below `extent`.
pub fn grid_lines(extent: f64, spacing: f64) -> Vec<f64> {
    if spacing <= 0.0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut offset = 0.0;
    while offset < extent {
        lines.push(offset);
        offset += spacing;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle { x, y, vx, vy, size: 1.0, alpha: 0.5 }
    }

    fn field(particles: Vec<Particle>) -> ParticleField {
        ParticleField { width: 400.0, height: 300.0, particles }
    }

    #[test]
    fn test_new_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::new(DEFAULT_PARTICLE_COUNT, 800.0, 600.0, &mut rng);
        assert_eq!(field.particles().len(), 100);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((-0.25..0.25).contains(&p.vx));
            assert!((-0.25..0.25).contains(&p.vy));
            assert!((1.0..3.0).contains(&p.size));
            assert!((0.2..0.7).contains(&p.alpha));
        }
    }

    #[test]
    fn test_step_wraps_edges() {
        let mut f = field(vec![
            particle(0.1, 150.0, -0.2, 0.0),
            particle(399.9, 150.0, 0.2, 0.0),
            particle(200.0, 0.1, 0.0, -0.2),
            particle(200.0, 299.9, 0.0, 0.2),
        ]);
        f.step();
        let ps = f.particles();
        assert_eq!(ps[0].x, 400.0);
        assert_eq!(ps[1].x, 0.0);
        assert_eq!(ps[2].y, 300.0);
        assert_eq!(ps[3].y, 0.0);
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut f = ParticleField::new(50, 320.0, 240.0, &mut rng);
        for _ in 0..5_000 {
            f.step();
        }
        for p in f.particles() {
            assert!(p.x >= 0.0 && p.x <= 320.0);
            assert!(p.y >= 0.0 && p.y <= 240.0);
        }
    }

    #[test]
    fn test_links_only_for_close_pairs() {
        let f = field(vec![
            particle(0.0, 0.0, 0.0, 0.0),
            particle(90.0, 120.0, 0.0, 0.0), // distance 150 from the first
            particle(30.0, 40.0, 0.0, 0.0),  // distance 50 from the first
        ]);
        let links = f.links();
        // (0,2) at 50 and (1,2) at 100
        assert_eq!(links.len(), 2);
        let first = links[0];
        assert_eq!(first.from, (0.0, 0.0));
        assert_eq!(first.to, (30.0, 40.0));
        assert!((first.alpha - 0.1 * (1.0 - 50.0 / 150.0)).abs() < 1e-12);
        for link in &links {
            assert!(link.alpha > 0.0 && link.alpha <= 0.1);
        }
    }

    #[test]
    fn test_resize_then_wrap() {
        let mut f = field(vec![particle(390.0, 10.0, 0.5, 0.0)]);
        f.resize(200.0, 300.0);
        f.step();
        assert_eq!(f.particles()[0].x, 0.0);
        assert_eq!(f.width(), 200.0);
    }

    #[test]
    fn test_grid_lines() {
        assert_eq!(grid_lines(120.0, GRID_SPACING), vec![0.0, 50.0, 100.0]);
        assert_eq!(grid_lines(100.0, GRID_SPACING), vec![0.0, 50.0]);
        assert!(grid_lines(0.0, GRID_SPACING).is_empty());
        assert!(grid_lines(100.0, 0.0).is_empty());
    }
}
