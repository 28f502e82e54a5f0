/*!
Running calls on the process main thread.

AppKit only reports screen details (visible frame, scale, name) and yields
activation from the main thread. A server answers requests on worker
threads, so those calls are queued to a [`MainThreadLoop`] that the
embedding program runs on its main thread.
*/

use std::sync::mpsc;

type Job = Box<dyn FnOnce() + Send>;

/// Queues jobs for the thread running the paired [`MainThreadLoop`].
#[derive(Debug, Clone)]
pub struct MainThread {
  jobs: mpsc::Sender<Job>,
}

/// Receiving end of [`main_thread`]. Run it on the main thread.
#[derive(Debug)]
pub struct MainThreadLoop {
  jobs: mpsc::Receiver<Job>,
}

/// Create a connected queue and loop.
pub fn main_thread() -> (MainThread, MainThreadLoop) {
  let (jobs, rx) = mpsc::channel();
  (MainThread { jobs }, MainThreadLoop { jobs: rx })
}

impl MainThreadLoop {
  /// Run queued jobs until every [`MainThread`] handle is dropped.
  pub fn run(self) {
    for job in self.jobs {
      job();
    }
    log::debug!("[main] queue closed");
  }
}

impl MainThread {
  /// Run `f` on the loop thread and wait for its result.
  ///
  /// `None` when the loop is no longer running.
  pub fn run<T, F>(&self, f: F) -> Option<T>
  where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
  {
    let (reply, result) = mpsc::sync_channel(1);
    let job: Job = Box::new(move || {
      if reply.send(f()).is_err() {
        log::debug!("[main] caller went away before the reply");
      }
    });
    self.jobs.send(job).ok()?;
    result.recv().ok()
  }
}
