//! [`Scheduler`] backed by `setTimeout` / `setInterval`.

use std::time::Duration;

use folio_core::{Message, Repeat, Scheduler, TimerEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::app::dispatch;

/// A live browser timer and the callback it invokes. Must be handed back to
/// [`BrowserScheduler::cancel`]; the timer is cleared before the callback is
/// released.
#[derive(Debug)]
pub struct BrowserTimer {
    id: Option<i32>,
    repeat: Repeat,
    _callback: Closure<dyn FnMut()>,
}

#[derive(Debug)]
pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn schedule(
        &mut self,
        delay: Duration,
        repeat: Repeat,
        event: TimerEvent,
    ) -> BrowserTimer {
        let callback = Closure::wrap(Box::new(move || {
            dispatch(Message::Timer(event));
        }) as Box<dyn FnMut()>);
        let function = callback.as_ref().unchecked_ref();
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);

        let scheduled = match repeat {
            Repeat::Once => self
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    function, millis,
                ),
            Repeat::Every => self
                .window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    function, millis,
                ),
        };
        let id = match scheduled {
            Ok(id) => Some(id),
            Err(err) => {
                log::warn!("timer: could not schedule {event:?}: {err:?}");
                None
            }
        };

        BrowserTimer {
            id,
            repeat,
            _callback: callback,
        }
    }

    fn cancel(&mut self, timer: BrowserTimer) {
        let Some(id) = timer.id else {
            return;
        };
        match timer.repeat {
            Repeat::Once => self.window.clear_timeout_with_handle(id),
            Repeat::Every => self.window.clear_interval_with_handle(id),
        }
    }
}
