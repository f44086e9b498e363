//! Headless orrery session: replays a scripted interaction and logs the
//! camera pose. Pass a TOML preset path to override the default options.

use std::path::Path;

use orrery::engine::OrreryEngine;
use orrery::input::{InputEvent, InputProcessor, MouseButton};
use orrery::options::Options;
use web_time::{Duration, Instant};

/// Simulated display refresh.
const FRAME: Duration = Duration::from_micros(16_667);

/// Headless session driver: replays a short scripted interaction on
/// simulated time and logs where the camera ends up.
struct Session {
    engine: OrreryEngine,
    input: InputProcessor,
    now: Instant,
}

impl Session {
    fn new(options: Options) -> Self {
        let input =
            InputProcessor::with_keybindings(options.keybindings.clone());
        let engine = OrreryEngine::from_options(options, 1280, 720);
        Self {
            engine,
            input,
            now: Instant::now(),
        }
    }

    fn send(&mut self, event: InputEvent) {
        if let Some(cmd) = self.input.handle_event(event) {
            self.engine.execute_at(cmd, self.now);
        }
    }

    fn key(&mut self, key: &str) {
        match self.input.handle_key_press(key) {
            Some(cmd) => self.engine.execute_at(cmd, self.now),
            None => log::warn!("key {key} is not bound"),
        }
    }

    fn run_for(&mut self, seconds: f32) {
        let frames = (seconds / FRAME.as_secs_f32()).ceil() as u32;
        for _ in 0..frames {
            self.now += FRAME;
            let _ = self.engine.frame(self.now);
        }
    }

    fn report(&self, label: &str) {
        let eye = self.engine.eye();
        let target = self.engine.target();
        let focus = self
            .engine
            .focus_info()
            .map_or_else(|| self.engine.focus().to_string(), |i| i.to_string());
        log::info!(
            "{label}: eye ({:.1}, {:.1}, {:.1}) \
             target ({:.1}, {:.1}, {:.1}) | {focus}",
            eye.x,
            eye.y,
            eye.z,
            target.x,
            target.y,
            target.z
        );
    }

    fn drag(&mut self, button: MouseButton, from: (f32, f32), to: (f32, f32)) {
        self.send(InputEvent::CursorMoved { x: from.0, y: from.1 });
        self.send(InputEvent::MouseButton {
            button,
            pressed: true,
        });
        let steps = 10;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.send(InputEvent::CursorMoved {
                x: from.0 + (to.0 - from.0) * t,
                y: from.1 + (to.1 - from.1) * t,
            });
            self.run_for(FRAME.as_secs_f32());
        }
        self.send(InputEvent::MouseButton {
            button,
            pressed: false,
        });
    }
}

fn load_options() -> Options {
    let Some(path) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&path)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}; falling back to default options");
            Options::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = load_options();
    let body_count = options.system.bodies.len();
    let mut session = Session::new(options);

    session.key("Backquote");
    session.run_for(2.5);
    session.report("overview");

    session.drag(MouseButton::Left, (640.0, 360.0), (840.0, 300.0));
    session.run_for(1.0);
    session.report("after rotate");

    session.drag(MouseButton::Right, (640.0, 360.0), (600.0, 400.0));
    session.run_for(1.0);
    session.report("after pan");

    for _ in 0..5 {
        session.send(InputEvent::Scroll { delta: -120.0 });
    }
    session.run_for(1.0);
    session.report("after zoom");

    for slot in 1..=body_count.min(8) {
        session.key(&format!("Digit{slot}"));
        session.run_for(2.2);
        session.report("arrived");
    }

    session.key("Space");
    session.key("Tab");
    session.run_for(2.2);
    session.report("paused, cycled");

    log::info!(
        "session done: {:.0} fps simulated, {} stars in backdrop",
        session.engine.fps(),
        session.engine.backdrop().stars.len()
    );
}
