//! Background-thread driver for the typewriter.
//!
//! The TUI drives its typewriter inline from the event loop; plain-terminal
//! playback (`folio intro`) runs it on a thread instead. The handle owns the
//! thread and guarantees no frame is delivered after `stop()` returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::Typewriter;

/// How often the worker re-checks the stop flag while waiting out a delay.
const POLL_SLICE: Duration = Duration::from_millis(10);

/// Handle to a typewriter ticking on a background thread.
///
/// Each tick's visible text is handed to the sink closure. Dropping the
/// handle stops the thread; `stop()` does the same explicitly and is safe to
/// call more than once.
///
/// # Example
///
/// ```ignore
/// let tw = Typewriter::new(phrases, Timing::default())?;
/// let mut handle = TypewriterHandle::spawn(tw, |frame| print!("\r{frame}"));
/// // ... later ...
/// handle.stop();
/// ```
pub struct TypewriterHandle {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TypewriterHandle {
    /// Spawn a thread that waits out each phase delay, advances the
    /// typewriter, and passes the new frame to `sink`.
    pub fn spawn<F>(mut typewriter: Typewriter, mut sink: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        let handle = thread::spawn(move || loop {
            // Sleep in slices so stop() is honoured promptly even during the
            // long full-phrase hold.
            let deadline = Instant::now() + typewriter.delay();
            loop {
                if !running_clone.load(Ordering::Relaxed) {
                    return;
                }
                let now = Instant::now();
                if now >= deadline {
                    break;
                }
                thread::sleep((deadline - now).min(POLL_SLICE));
            }
            if !running_clone.load(Ordering::Relaxed) {
                return;
            }
            sink(typewriter.tick());
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    /// Stop the thread and wait for it to finish.
    ///
    /// No frame reaches the sink after this returns. Calling `stop` on an
    /// already-stopped handle is a no-op.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typewriter::Timing;
    use std::sync::mpsc;

    fn fast_timing() -> Timing {
        Timing {
            type_interval: Duration::from_millis(1),
            delete_interval: Duration::from_millis(1),
            full_pause: Duration::from_millis(1),
        }
    }

    #[test]
    fn test_frames_arrive_in_order() {
        let tw = Typewriter::new(vec!["Hi".to_string()], fast_timing()).unwrap();
        let (tx, rx) = mpsc::channel();
        let mut handle = TypewriterHandle::spawn(tw, move |frame| {
            let _ = tx.send(frame.to_string());
        });

        let frames: Vec<String> = rx.iter().take(5).collect();
        handle.stop();
        assert_eq!(frames, vec!["H", "Hi", "Hi", "H", ""]);
    }

    #[test]
    fn test_no_frames_after_stop() {
        let tw = Typewriter::new(vec!["Hello".to_string()], fast_timing()).unwrap();
        let (tx, rx) = mpsc::channel();
        let mut handle = TypewriterHandle::spawn(tw, move |frame| {
            let _ = tx.send(frame.to_string());
        });

        // Let it get partway through typing, then tear down.
        let _ = rx.recv();
        handle.stop();

        // Frames sent before stop may still sit in the channel; drain them.
        while rx.try_recv().is_ok() {}
        thread::sleep(Duration::from_millis(50));
        assert_eq!(rx.try_iter().count(), 0, "tick fired after teardown");
    }

    #[test]
    fn test_stop_twice_is_harmless() {
        let tw = Typewriter::new(vec!["Hi".to_string()], fast_timing()).unwrap();
        let mut handle = TypewriterHandle::spawn(tw, |_| {});
        handle.stop();
        handle.stop();
    }

    #[test]
    fn test_drop_after_stop_is_harmless() {
        let tw = Typewriter::new(vec!["Hi".to_string()], fast_timing()).unwrap();
        let mut handle = TypewriterHandle::spawn(tw, |_| {});
        handle.stop();
        drop(handle);
    }

    #[test]
    fn test_drop_stops_the_thread() {
        let tw = Typewriter::new(vec!["Hello".to_string()], fast_timing()).unwrap();
        let (tx, rx) = mpsc::channel();
        {
            let _handle = TypewriterHandle::spawn(tw, move |frame| {
                let _ = tx.send(frame.to_string());
            });
            let _ = rx.recv();
        }
        // Sender side is gone with the thread; the channel must report so.
        thread::sleep(Duration::from_millis(50));
        while rx.try_recv().is_ok() {}
        assert!(matches!(rx.try_recv(), Err(mpsc::TryRecvError::Disconnected)));
    }
}
