//! The per-frame driver. One [`Simulation`] owns every piece of mutable
//! scene state; the host calls [`Simulation::frame`] once per display refresh
//! and forwards input through [`Simulation::handle`].

use crate::camera::{Camera, Viewport};
use crate::comet::Comet;
use crate::config::{ConfigError, TunnelConfig};
use crate::constants::DT_MAX;
use crate::motion::{ControlEvent, FrameMotion, MotionModel};
use crate::nebula::{self, NebulaBlob};
use crate::pools::{PoolSizes, Pools};
use crate::quality::QualityController;
use crate::quotes::QuoteScheduler;
use crate::render::{self, FrameView};
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Clamp a raw frame delta so a stall (e.g. a backgrounded tab) cannot
/// teleport particles through the near plane in one step.
#[inline]
pub fn clamp_dt(raw_dt: f32) -> f32 {
    if raw_dt.is_finite() {
        raw_dt.clamp(0.0, DT_MAX)
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    pub elapsed: f32,
    pub frames: u64,
}

impl FrameClock {
    pub fn tick(&mut self, raw_dt: f32) -> f32 {
        let dt = clamp_dt(raw_dt);
        self.elapsed += dt;
        self.frames += 1;
        dt
    }
}

pub struct Simulation {
    config: TunnelConfig,
    viewport: Viewport,
    motion: MotionModel,
    pools: Pools,
    comet: Comet,
    quotes: QuoteScheduler,
    quality: QualityController,
    nebula: [NebulaBlob; 3],
    clock: FrameClock,
    started: bool,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: TunnelConfig, viewport: Viewport, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let quality = QualityController::new(config.quality_min, config.quality_max);
        let sizes = PoolSizes::for_viewport(&config, &viewport, quality.quality);
        let pools = Pools::build(sizes, &mut rng, &config);
        let comet = Comet::new(&mut rng);
        let nebula = nebula::build(&mut rng);
        let quotes = QuoteScheduler::new(config.phrases, config.quote_cap);
        Ok(Self {
            config,
            viewport,
            motion: MotionModel::default(),
            pools,
            comet,
            quotes,
            quality,
            nebula,
            clock: FrameClock::default(),
            started: false,
            rng,
        })
    }

    pub fn handle(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Start => {
                self.start();
            }
            other => self.motion.handle(other, self.started),
        }
    }

    /// Leave the idle state. Returns false if already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        log::info!("[input] started");
        true
    }

    /// Viewport changes take effect immediately for projection; pool sizes
    /// follow on the next rebuild.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::debug!(
                "[resize] {}x{} dpr={}",
                viewport.width,
                viewport.height,
                viewport.dpr
            );
            self.viewport = viewport;
        }
    }

    pub fn camera(&self) -> Camera {
        Camera {
            look: self.motion.look,
            warp: self.motion.warp,
            fov: self.config.fov,
            z_near: self.config.z_near,
            z_far: self.config.z_far,
            viewport: self.viewport,
        }
    }

    /// Advance by `raw_dt` seconds and draw the frame onto `surface`.
    ///
    /// Order: clock, quality, motion, then background, dust, stars, quotes,
    /// speed lines and comet, each updated immediately before it is drawn.
    pub fn frame<S: Surface + ?Sized>(&mut self, raw_dt: f32, surface: &mut S) -> FrameMotion {
        let dt = self.clock.tick(raw_dt);
        let running = self.started;

        if running {
            if let Some(q) = self.quality.observe(dt) {
                self.rebuild_pools(q);
            }
        }

        let motion = self.motion.update(dt, running, self.config.base_speed);
        let bounds = self.config.bounds();
        let view = FrameView {
            camera: self.camera(),
            motion,
            elapsed: self.clock.elapsed,
            quality: self.quality.quality,
        };

        render::draw_background(surface, &view, &self.nebula);

        self.pools.dust.update(&mut self.rng, &bounds, &motion);
        render::draw_dust(surface, &view, &self.pools.dust);

        self.pools.stars.update(&mut self.rng, &bounds, &motion);
        render::draw_stars_normal(surface, &view, &self.pools.stars);
        render::draw_stars_glow(surface, &view, &self.pools.stars);

        if running {
            self.quotes.update(&mut self.rng, &bounds, &motion);
            render::draw_quotes(surface, &view, &self.quotes);
        }

        render::draw_speed_lines(surface, &view, &mut self.rng);

        if running {
            self.comet.maybe_spawn(&mut self.rng, &bounds, &motion);
            self.comet.update(&bounds, &motion);
            render::draw_comet(surface, &view, &self.comet);
        }

        motion
    }

    fn rebuild_pools(&mut self, quality: f32) {
        let sizes = PoolSizes::for_viewport(&self.config, &self.viewport, quality);
        self.pools = Pools::build(sizes, &mut self.rng, &self.config);
    }

    pub fn is_running(&self) -> bool {
        self.started
    }

    pub fn cinematic(&self) -> bool {
        self.motion.input.cinematic
    }

    pub fn config(&self) -> &TunnelConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn motion(&self) -> &MotionModel {
        &self.motion
    }

    pub fn motion_mut(&mut self) -> &mut MotionModel {
        &mut self.motion
    }

    pub fn pools(&self) -> &Pools {
        &self.pools
    }

    pub fn quotes(&self) -> &QuoteScheduler {
        &self.quotes
    }

    pub fn comet(&self) -> &Comet {
        &self.comet
    }

    pub fn quality(&self) -> &QualityController {
        &self.quality
    }

    pub fn clock(&self) -> FrameClock {
        self.clock
    }
}
