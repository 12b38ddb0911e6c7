use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use gdi_template_core::{
    AppConfig, AppState, ClientSize, RenderError,
    config::SceneConfig,
    events::{Handled, WindowEvent, WindowOps, handle_event},
    paint::{FrameRect, FrameReport, GraphicsBackend, Rgb, compose_frame},
    pump::{MessagePump, PumpStatus, run_loop_with_stats},
    state::Animation,
};

/// Counts live objects; every create must meet its release.
#[derive(Default)]
struct CountingBackend {
    live: Cell<i32>,
    created: Cell<u32>,
    drawn: RefCell<Vec<FrameRect>>,
}

impl CountingBackend {
    fn create(&self) {
        self.live.set(self.live.get() + 1);
        self.created.set(self.created.get() + 1);
    }

    fn release(&self) {
        self.live.set(self.live.get() - 1);
    }
}

impl GraphicsBackend for CountingBackend {
    type Surface = ();
    type Bitmap = ();
    type Brush = ();
    type Selection = ();

    fn create_surface(&self) -> Result<(), RenderError> {
        self.create();
        Ok(())
    }

    fn create_bitmap(&self, _size: ClientSize) -> Result<(), RenderError> {
        self.create();
        Ok(())
    }

    fn create_brush(&self, _color: Rgb) -> Result<(), RenderError> {
        self.create();
        Ok(())
    }

    fn select_bitmap(&self, _surface: &(), _bitmap: &()) -> Result<(), RenderError> {
        Ok(())
    }

    fn select_brush(&self, _surface: &(), _brush: &()) -> Result<(), RenderError> {
        Ok(())
    }

    fn restore(&self, _surface: &(), _previous: ()) {}

    fn draw_rect(&self, _surface: &(), rect: FrameRect) -> Result<(), RenderError> {
        self.drawn.borrow_mut().push(rect);
        Ok(())
    }

    fn present(&self, _surface: &(), _size: ClientSize) -> Result<(), RenderError> {
        Ok(())
    }

    fn release_bitmap(&self, _bitmap: ()) {
        self.release();
    }

    fn release_brush(&self, _brush: ()) {
        self.release();
    }

    fn release_surface(&self, _surface: ()) {
        self.release();
    }
}

/// A single simulated window: repaint requests queue a paint message, and
/// the user closes the window after a fixed number of painted frames.
struct SimulatedWindow {
    state: Rc<RefCell<AppState>>,
    scene: SceneConfig,
    backend: CountingBackend,
    queue: VecDeque<WindowEvent>,
    quit: Option<i32>,
    quits_posted: u32,
    close_after: u64,
    erase_requests: u32,
}

impl SimulatedWindow {
    fn new(config: &AppConfig, close_after: u64) -> Self {
        let client = ClientSize::new(984, 661);
        Self {
            state: Rc::new(RefCell::new(AppState::new(
                client,
                Animation::from(config.animation),
            ))),
            scene: config.scene,
            backend: CountingBackend::default(),
            queue: VecDeque::new(),
            quit: None,
            quits_posted: 0,
            close_after,
            erase_requests: 0,
        }
    }
}

impl WindowOps for SimulatedWindow {
    fn paint(&mut self) -> Result<FrameReport, RenderError> {
        let report = compose_frame(&self.backend, &self.state.borrow(), &self.scene)?;
        self.state.borrow_mut().record_frame();
        if self.state.borrow().frames_painted() == self.close_after {
            self.queue.push_back(WindowEvent::Close);
        }
        Ok(report)
    }

    fn post_quit(&mut self, exit_code: i32) {
        self.quits_posted += 1;
        self.quit = Some(exit_code);
    }
}

impl MessagePump for SimulatedWindow {
    fn pump(&mut self) -> PumpStatus {
        if let Some(code) = self.quit.take() {
            return PumpStatus::Quit(code);
        }
        let Some(event) = self.queue.pop_front() else {
            return PumpStatus::Idle;
        };
        if event == WindowEvent::EraseBackground {
            self.erase_requests += 1;
        }
        let handled = handle_event(event, self);
        assert_eq!(handled, Handled::Consumed);
        PumpStatus::Dispatched
    }

    fn request_repaint(&mut self) {
        self.queue.push_back(WindowEvent::EraseBackground);
        self.queue.push_back(WindowEvent::Paint);
    }
}

/// Verify a full session: each idle iteration moves the rectangle one pixel and
/// paints it, closing the window ends the loop with code 0, and no drawing
/// object outlives its frame.
#[test]
fn test_session_paints_each_idle_step_and_exits_cleanly() {
    let config = AppConfig::default();
    let mut window = SimulatedWindow::new(&config, 10);
    let state = Rc::clone(&window.state);

    let outcome = run_loop_with_stats(&mut window, &state);

    assert_eq!(outcome.exit_code, 0);
    assert_eq!(outcome.stats.idle, 10);
    assert_eq!(outcome.stats.repaints, 10);
    assert_eq!(window.quits_posted, 1);
    assert_eq!(window.erase_requests, 10);
    assert_eq!(state.borrow().position(), 10.0);
    assert_eq!(state.borrow().frames_painted(), 10);
    assert_eq!(state.borrow().client(), ClientSize::new(984, 661));

    assert_eq!(window.backend.live.get(), 0);
    assert_eq!(window.backend.created.get(), 30);

    let lefts: Vec<i32> = window.backend.drawn.borrow().iter().map(|r| r.left).collect();
    assert_eq!(lefts, (1..=10).collect::<Vec<_>>());
    assert!(
        window
            .backend
            .drawn
            .borrow()
            .iter()
            .all(|r| r.top == 40 && r.bottom == 50 && r.right - r.left == 40)
    );
}

/// Verify a scene override changes what is drawn but not the loop behaviour.
#[test]
fn test_scene_override_is_drawn() {
    let mut config = AppConfig::default();
    config.scene.top = 100;
    config.scene.bottom = 160;
    config.scene.width = 25;
    let mut window = SimulatedWindow::new(&config, 3);
    let state = Rc::clone(&window.state);

    run_loop_with_stats(&mut window, &state);

    let drawn = window.backend.drawn.borrow();
    assert_eq!(drawn.len(), 3);
    assert_eq!(
        drawn[2],
        FrameRect {
            left: 3,
            top: 100,
            right: 28,
            bottom: 160,
        }
    );
}
