//! Native entry point: winit event loop driving the sim at a fixed 60Hz

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use atari_breakout::audio::AudioManager;
use atari_breakout::consts::{MAX_STEPS_PER_FRAME, SCREEN_H, SCREEN_W, TICK_DT};
use atari_breakout::renderer::{scene_vertices, RenderState};
use atari_breakout::sim::{tick, GameEvent, GameState, TickInput};

/// Everything that only exists once a window is up
struct Game {
    window: Arc<Window>,
    render: RenderState,
    audio: AudioManager,
    state: GameState,
    input: TickInput,
    events: Vec<GameEvent>,
    accumulator: f32,
    last_frame: Instant,
}

impl Game {
    fn new(window: Arc<Window>) -> Self {
        let render = pollster::block_on(RenderState::new(window.clone()));
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        log::info!("Starting game with seed {seed}");
        Self {
            window,
            render,
            audio: AudioManager::new(),
            state: GameState::new(seed),
            input: TickInput::default(),
            events: Vec::new(),
            accumulator: 0.0,
            last_frame: Instant::now(),
        }
    }

    /// Advance the sim by however many whole ticks elapsed since last frame
    fn update(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        // A long stall (debugger, window drag) must not explode into a
        // catch-up burst.
        self.accumulator = (self.accumulator + elapsed).min(0.25);

        let mut steps = 0;
        while self.accumulator >= TICK_DT && steps < MAX_STEPS_PER_FRAME {
            self.events.clear();
            tick(&mut self.state, &self.input, &mut self.events);
            for event in &self.events {
                if let Some(effect) = AudioManager::cue_for(*event) {
                    self.audio.play(effect);
                }
            }
            // One-shot inputs fire on exactly one tick
            self.input.start = false;
            self.input.restart = false;
            self.accumulator -= TICK_DT;
            steps += 1;
        }
    }

    fn draw(&mut self, event_loop: &ActiveEventLoop) {
        let vertices = scene_vertices(&self.state);
        match self.render.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = self.render.size;
                self.render.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(err) => log::warn!("Surface error: {err:?}"),
        }
    }
}

#[derive(Default)]
struct App {
    game: Option<Game>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.game.is_some() {
            return;
        }
        let attrs = Window::default_attributes()
            .with_title("Atari Breakout")
            .with_inner_size(LogicalSize::new(SCREEN_W as f64, SCREEN_H as f64))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("Failed to create window"),
        );
        log::info!("Window created: {SCREEN_W}x{SCREEN_H}");
        self.game = Some(Game::new(window));
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(game) = &self.game {
            game.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                game.render.resize(size.width, size.height);
            }

            WindowEvent::CursorMoved { position, .. } => {
                // Physical to logical so paddle tracking works on hi-dpi
                let scale = game.window.scale_factor();
                game.input.pointer_x = Some((position.x / scale) as f32);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                game.input.start = true;
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::KeyR)
                {
                    game.input.restart = true;
                }
            }

            WindowEvent::RedrawRequested => {
                game.update();
                game.draw(event_loop);
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Atari Breakout starting...");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::default();
    event_loop.run_app(&mut app).expect("Event loop error");
}
