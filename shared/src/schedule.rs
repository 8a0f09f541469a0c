use std::{cell::Cell, rc::Rc};

use futures::{
    channel::mpsc::{self, UnboundedReceiver, UnboundedSender},
    Stream, StreamExt,
};

/// Shared stop flag for animation loops. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct Cancellation(Rc<Cell<bool>>);

impl Cancellation {
    pub fn new() -> Cancellation {
        Cancellation::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Feeding end of a stream of display refreshes.
///
/// Once `cancellation` fires it hangs up, which ends the stream and lets whoever reads it
/// finish.
pub struct RefreshSender {
    sender: Option<UnboundedSender<f64>>,
    cancellation: Cancellation,
}

impl RefreshSender {
    /// Forwards one refresh. Returns whether the next refresh is still wanted.
    pub fn refresh(&mut self, timestamp: f64) -> bool {
        let sent = match &self.sender {
            Some(sender) if !self.cancellation.is_cancelled() => {
                sender.unbounded_send(timestamp).is_ok()
            }
            _ => false,
        };

        if !sent {
            self.sender = None;
        }

        sent
    }
}

/// A refresh stream for [`run`], and the [`RefreshSender`] that feeds it.
pub fn refreshes(cancellation: Cancellation) -> (RefreshSender, UnboundedReceiver<f64>) {
    let (sender, receiver) = mpsc::unbounded();

    (
        RefreshSender {
            sender: Some(sender),
            cancellation,
        },
        receiver,
    )
}

/// Drives an animation loop: waits for each display refresh from `refreshes` and runs `step`
/// with its timestamp, until `cancellation` fires or the refreshes run dry.
///
/// Returns the number of steps taken.
pub async fn run<S, F>(mut refreshes: S, cancellation: Cancellation, mut step: F) -> u64
where
    S: Stream<Item = f64> + Unpin,
    F: FnMut(f64),
{
    let mut steps = 0;

    while !cancellation.is_cancelled() {
        match refreshes.next().await {
            Some(_) if cancellation.is_cancelled() => break,
            Some(timestamp) => {
                step(timestamp);
                steps += 1;
            }
            None => break,
        }
    }

    steps
}
