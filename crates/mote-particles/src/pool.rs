//! Debris particles: short-lived visual bursts with a swap-remove pool

/// One debris particle. Life starts at 1 and decays linearly to 0.
#[derive(Clone)]
pub struct Debris {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub life: f32,
    pub size: f32,
    pub color: [f32; 4],
    pub alive: bool,
}

impl Debris {
    pub fn dead() -> Self {
        Self {
            position: [0.0; 2],
            velocity: [0.0; 2],
            life: 0.0,
            size: 0.0,
            color: [0.0; 4],
            alive: false,
        }
    }
}

/// Swap-remove pool for O(1) kill and contiguous alive iteration.
pub struct DebrisPool {
    particles: Vec<Debris>,
    alive_count: usize,
}

impl DebrisPool {
    pub fn new(capacity: usize) -> Self {
        let mut particles = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            particles.push(Debris::dead());
        }
        Self {
            particles,
            alive_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn alive_count(&self) -> usize {
        self.alive_count
    }

    /// Spawn one particle, returning a mutable ref to initialize it.
    /// Returns None if the pool is full.
    pub fn spawn(&mut self) -> Option<&mut Debris> {
        if self.alive_count >= self.particles.len() {
            return None;
        }
        let idx = self.alive_count;
        self.particles[idx] = Debris {
            alive: true,
            life: 1.0,
            ..Debris::dead()
        };
        self.alive_count += 1;
        Some(&mut self.particles[idx])
    }

    /// Integrate all alive particles one step, then compact out the expired
    /// ones. `gravity` is added to vertical velocity, `decay` subtracted from
    /// life. Removal is immediate — the alive slice never holds a dead particle.
    pub fn integrate(&mut self, gravity: f32, decay: f32) {
        for p in &mut self.particles[..self.alive_count] {
            p.position[0] += p.velocity[0];
            p.position[1] += p.velocity[1];
            p.velocity[1] += gravity;
            p.life -= decay;
        }
        self.compact();
    }

    fn compact(&mut self) {
        let mut i = 0;
        while i < self.alive_count {
            if !self.particles[i].alive || self.particles[i].life <= 0.0 {
                self.particles[i].alive = false;
                self.alive_count -= 1;
                if i < self.alive_count {
                    self.particles.swap(i, self.alive_count);
                }
                // Don't increment i — the swapped-in particle needs checking
            } else {
                i += 1;
            }
        }
    }

    /// Drop all alive particles at once (session restart)
    pub fn clear(&mut self) {
        for p in &mut self.particles[..self.alive_count] {
            p.alive = false;
        }
        self.alive_count = 0;
    }

    /// Alive particles for rendering
    pub fn alive_slice(&self) -> &[Debris] {
        &self.particles[..self.alive_count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_spawn_and_expire() {
        let mut pool = DebrisPool::new(4);
        assert_eq!(pool.alive_count(), 0);

        for i in 0..3 {
            let p = pool.spawn().unwrap();
            p.position[0] = i as f32;
        }
        assert_eq!(pool.alive_count(), 3);

        // Life 1.0, decay 0.5 per step: dead after the second integrate
        pool.integrate(0.0, 0.5);
        assert_eq!(pool.alive_count(), 3);
        pool.integrate(0.0, 0.5);
        assert_eq!(pool.alive_count(), 0);
    }

    #[test]
    fn pool_full_rejects_spawn() {
        let mut pool = DebrisPool::new(2);
        assert!(pool.spawn().is_some());
        assert!(pool.spawn().is_some());
        assert!(pool.spawn().is_none());
    }

    #[test]
    fn integrate_applies_gravity_and_motion() {
        let mut pool = DebrisPool::new(1);
        {
            let p = pool.spawn().unwrap();
            p.velocity = [2.0, -3.0];
        }
        pool.integrate(0.2, 0.03);
        let p = &pool.alive_slice()[0];
        assert_eq!(p.position, [2.0, -3.0]);
        assert!((p.velocity[1] - (-2.8)).abs() < 1e-6);
        assert!((p.life - 0.97).abs() < 1e-6);
    }

    #[test]
    fn compact_keeps_survivors() {
        let mut pool = DebrisPool::new(4);
        for i in 0..4 {
            let p = pool.spawn().unwrap();
            p.position[0] = i as f32;
            // Stagger lifetimes so only half survive one step
            p.life = if i % 2 == 0 { 1.0 } else { 0.01 };
        }
        pool.integrate(0.0, 0.02);
        assert_eq!(pool.alive_count(), 2);
        for p in pool.alive_slice() {
            assert!(p.life > 0.0);
        }
    }

    #[test]
    fn clear_empties_pool() {
        let mut pool = DebrisPool::new(8);
        for _ in 0..5 {
            pool.spawn().unwrap();
        }
        pool.clear();
        assert_eq!(pool.alive_count(), 0);
        assert!(pool.spawn().is_some());
    }
}
