use glfw::{Action, Key, OpenGlProfileHint, WindowHint};

use anyhow::Context;

use log::{debug, info, trace};

use crate::game::constants::{ANIM_PLAYER_RUNNING, SCREEN_HEIGHT, SCREEN_WIDTH, TIME_STEP};
use crate::game::{Animation, Looping, TimerRegistry};

pub const TITLE: &str = "Chroma";

// Timer tag used by the run loop to pace the frame-rate log
const TIMER_FRAME_RATE: u32 = 1;

#[derive(Debug)]
pub struct App {
    // Timer registry shared by the update loop
    timers: TimerRegistry,
    // Player movement animation, sliced from its sheet at startup
    player_running: Animation,
    // Seconds of accumulated playback time for the running animation
    state_time: f64,
}

impl App {
    pub fn init() -> anyhow::Result<Self> {
        let player_running = ANIM_PLAYER_RUNNING.load()?;
        debug!(
            "loaded {} ({} frames)",
            ANIM_PLAYER_RUNNING.path,
            player_running.len()
        );
        Ok(Self {
            timers: TimerRegistry::new(),
            player_running,
            state_time: 0.0,
        })
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        use glfw::Context;

        let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS)
            .context("Failed to initialize GLFW3")?;

        glfw.window_hint(WindowHint::Resizable(false));
        glfw.window_hint(WindowHint::SRgbCapable(true));
        glfw.window_hint(WindowHint::DoubleBuffer(true));
        glfw.window_hint(WindowHint::ContextVersion(3, 3));
        glfw.window_hint(WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));

        let (mut window, events) = glfw
            .create_window(SCREEN_WIDTH, SCREEN_HEIGHT, TITLE, glfw::WindowMode::Windowed)
            .context("Failed to create GLFW window")?;

        window.set_key_polling(true);
        window.make_current();

        gl::load_with(|s| glfw.get_proc_address_raw(s));

        info!("window open: \"{}\" {}x{}", TITLE, SCREEN_WIDTH, SCREEN_HEIGHT);

        // White background
        unsafe {
            gl::ClearColor(1.0, 1.0, 1.0, 1.0);
        }

        self.timers.set(TIMER_FRAME_RATE);
        let mut frames = 0u32;

        let mut last_time = glfw.get_time();
        let mut accumulator = 0.0;
        while !window.should_close() {
            let now = glfw.get_time();
            accumulator += now - last_time;
            last_time = now;

            // Advance the simulation in fixed steps
            while accumulator >= TIME_STEP {
                self.update(TIME_STEP);
                accumulator -= TIME_STEP;
            }

            unsafe {
                gl::Clear(gl::COLOR_BUFFER_BIT);
            }

            window.swap_buffers();
            glfw.poll_events();

            frames += 1;
            if self.timers.elapsed(TIMER_FRAME_RATE)? >= 1000 {
                trace!("{} frames in the last second", frames);
                frames = 0;
                self.timers.set(TIMER_FRAME_RATE);
            }

            for (_, event) in glfw::flush_messages(&events) {
                if let glfw::WindowEvent::Key(Key::Escape, _, Action::Press, _) = event {
                    window.set_should_close(true);
                }
            }
        }
        info!("shutting down");
        Ok(())
    }

    fn update(&mut self, delta: f64) {
        self.state_time += delta;
        let frame = self.player_running.frame_at(self.state_time, Looping::Loop);
        trace!("player-running frame: {:?}", frame);
    }
}
