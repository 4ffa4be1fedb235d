//! Tournament timer - countdown display for archery tournaments
//!
//! Shows the shooting signal, the remaining seconds of the current phase and
//! the active pair, and sounds the horn cues at each phase boundary.

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowId},
};

use tournament_timer::audio::{AudioSystem, CueBank};
use tournament_timer::cli::Args;
use tournament_timer::clock::MatchClock;
use tournament_timer::error::TimerError;
use tournament_timer::input::{KeyBindings, KeyboardState};
use tournament_timer::params::{CueConfig, MatchTiming, RenderConfig};
use tournament_timer::rendering::{compose, load_images, ImageId, RenderSystem};

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    has_logo: bool,

    // Match state
    clock: MatchClock,
    audio: Option<AudioSystem>,

    // Input
    keyboard: KeyboardState,
    bindings: KeyBindings,
    legend: Vec<String>,

    // Configuration
    render_config: RenderConfig,
    cue_config: CueConfig,

    /// First fatal error raised inside the event loop
    startup_error: Option<TimerError>,
}

impl App {
    fn new(timing: MatchTiming, cue_config: CueConfig, render_config: RenderConfig) -> Self {
        let bindings = KeyBindings::default();
        let legend = bindings.legend();

        Self {
            window: None,
            render_system: None,
            has_logo: false,
            clock: MatchClock::new(timing),
            audio: None,
            keyboard: KeyboardState::new(),
            bindings,
            legend,
            render_config,
            cue_config,
            startup_error: None,
        }
    }

    /// Create the window, renderer and audio output
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), TimerError> {
        let mut window_attributes = Window::default_attributes()
            .with_title(self.render_config.title.clone())
            .with_inner_size(LogicalSize::new(
                self.render_config.canvas_width,
                self.render_config.canvas_height,
            ));

        if self.render_config.fullscreen {
            window_attributes = window_attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        window.set_cursor_visible(false);

        // Initialize rendering system
        let mut render_system =
            pollster::block_on(RenderSystem::new(Arc::clone(&window), &self.render_config))?;
        for (id, image) in load_images(&self.render_config)? {
            render_system.upload_image(id, &image);
        }
        self.has_logo = render_system.has_image(ImageId::Logo);

        // Initialize audio system
        self.audio = if self.cue_config.muted {
            info!("Audio muted");
            None
        } else {
            Some(AudioSystem::new(&self.cue_config)?)
        };

        info!("Tournament timer running ({})", self.legend.join(", "));

        self.window = Some(window);
        self.render_system = Some(render_system);
        Ok(())
    }

    /// One frame: input → tick → cues → compose → render
    fn update_frame(&mut self, event_loop: &ActiveEventLoop) {
        let commands = self.bindings.resolve(&self.keyboard);
        self.keyboard.end_frame();

        if commands.exit {
            info!("Exit requested");
            event_loop.exit();
            return;
        }

        if !commands.clock.is_empty() {
            debug!("Input: {:?}", commands.clock);
        }
        self.clock.handle_input(&commands.clock);
        let readout = self.clock.tick(Instant::now());

        for &cue in &readout.cues {
            match &self.audio {
                Some(audio) => audio.play_cue(cue),
                None => debug!("Cue {:?} (muted)", cue),
            }
        }

        let wall_clock = chrono::Local::now().format("%H:%M:%S").to_string();
        let frame = compose(
            &readout,
            &wall_clock,
            &self.legend,
            &self.render_config,
            self.has_logo,
        );

        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        match render_system.render(&frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost or outdated, reconfiguring");
                render_system.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => warn!("Surface error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init(event_loop) {
            error!("Startup failed: {}", e);
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => self.keyboard.key_event(code, state),
            WindowEvent::Focused(false) => self.keyboard.clear(),
            WindowEvent::Resized(size) => {
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.update_frame(event_loop),
            _ => {}
        }
    }
}

fn main() -> Result<(), TimerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let timing = args.match_timing();
    timing.validate()?;

    let cue_config = args.cue_config();
    cue_config.validate().map_err(TimerError::InvalidAudio)?;

    if let Some(dir) = &args.export_cues {
        let bank = CueBank::load(&cue_config, cue_config.sample_rate_hz)?;
        for path in bank.export(dir)? {
            info!("Wrote {}", path.display());
        }
        return Ok(());
    }

    info!(
        "Timing: prepare {}s/{}s, action {}s, warning at {}s",
        timing.prepare_secs[0], timing.prepare_secs[1], timing.action_secs, timing.warn_secs
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(timing, cue_config, args.render_config());
    event_loop.run_app(&mut app)?;

    match app.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
