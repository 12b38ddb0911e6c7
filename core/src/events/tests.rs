use super::*;
use crate::paint::FrameRect;
use crate::state::ClientSize;

#[derive(Default)]
struct FakeWindow {
    paints: u32,
    quits: Vec<i32>,
    fail_paint: bool,
}

impl WindowOps for FakeWindow {
    fn paint(&mut self) -> Result<FrameReport, RenderError> {
        self.paints += 1;
        if self.fail_paint {
            return Err(RenderError::Surface);
        }
        Ok(FrameReport {
            rect: FrameRect {
                left: 0,
                top: 40,
                right: 40,
                bottom: 50,
            },
            size: ClientSize::new(984, 661),
        })
    }

    fn post_quit(&mut self, exit_code: i32) {
        self.quits.push(exit_code);
    }
}

#[test]
fn erase_background_never_paints() {
    let mut window = FakeWindow::default();

    for _ in 0..10 {
        assert_eq!(
            handle_event(WindowEvent::EraseBackground, &mut window),
            Handled::Consumed
        );
    }

    assert_eq!(window.paints, 0);
    assert!(window.quits.is_empty());
}

#[test]
fn close_posts_exactly_one_quit() {
    let mut window = FakeWindow::default();
    handle_event(WindowEvent::Paint, &mut window);
    handle_event(WindowEvent::EraseBackground, &mut window);

    assert_eq!(handle_event(WindowEvent::Close, &mut window), Handled::Consumed);

    assert_eq!(window.quits, vec![0]);
}

#[test]
fn paint_is_consumed_even_when_frame_fails() {
    let mut window = FakeWindow {
        fail_paint: true,
        ..FakeWindow::default()
    };

    assert_eq!(handle_event(WindowEvent::Paint, &mut window), Handled::Consumed);
    assert_eq!(window.paints, 1);
}

#[test]
fn other_messages_fall_through() {
    let mut window = FakeWindow::default();

    assert_eq!(handle_event(WindowEvent::Other, &mut window), Handled::Default);
    assert_eq!(window.paints, 0);
    assert!(window.quits.is_empty());
}
