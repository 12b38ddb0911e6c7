//! Window message routing.

#[cfg(test)]
mod tests;

use crate::error::RenderError;
use crate::paint::FrameReport;

/// The window messages the template reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Paint,
    EraseBackground,
    Close,
    /// Anything else, left to default OS handling.
    Other,
}

/// Whether a message was handled here or must go to the default procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Consumed,
    Default,
}

/// Side effects a window can perform while handling an event.
pub trait WindowOps {
    /// Renders one frame. The visible surface must be validated even when the
    /// frame itself fails.
    fn paint(&mut self) -> Result<FrameReport, RenderError>;

    /// Posts the quit signal to the thread's message queue.
    fn post_quit(&mut self, exit_code: i32);
}

pub fn handle_event<W: WindowOps + ?Sized>(event: WindowEvent, window: &mut W) -> Handled {
    match event {
        WindowEvent::Paint => {
            match window.paint() {
                Ok(report) => log::trace!("painted frame at {:?}", report.rect),
                Err(e) => log::warn!("frame skipped: {e}"),
            }
            Handled::Consumed
        }
        // Default handling would clear the client area before every paint
        // and flicker.
        WindowEvent::EraseBackground => Handled::Consumed,
        WindowEvent::Close => {
            log::info!("close requested");
            window.post_quit(0);
            Handled::Consumed
        }
        WindowEvent::Other => Handled::Default,
    }
}
