//! Clock host - event loop that owns the engine

use tokio::sync::{mpsc, watch};

use reloj_core::{ClockError, ClockResult, DialTime, Mode};
use reloj_time::Chronograph;

use crate::{DialFrame, Renderer, RuntimeConfig, SharedFrame, TickSource};

/// Control input from the host UI
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostCommand {
    SetMode(Mode),
    /// Start or resume the stopwatch
    Start,
    Stop,
    Reset,
    /// Re-align the wall clock
    Reseed(DialTime),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostStats {
    pub ticks: u64,
    pub commands: u64,
    pub frames: u64,
}

/// Cloneable handle for talking to a running host
#[derive(Clone, Debug)]
pub struct HostHandle {
    commands: mpsc::Sender<HostCommand>,
    shutdown: watch::Sender<bool>,
    frame: SharedFrame,
}

impl HostHandle {
    pub async fn send(&self, command: HostCommand) -> ClockResult<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| ClockError::HostStopped)
    }

    /// Ask the loop to exit after the current step
    pub fn shutdown(&self) {
        // No receiver means the loop already exited
        let _ = self.shutdown.send(true);
    }

    /// Latest published frame
    pub fn frame(&self) -> DialFrame {
        self.frame.snapshot()
    }

    pub fn shared_frame(&self) -> SharedFrame {
        self.frame.clone()
    }
}

/// Owns the chronograph on a single task
///
/// Ticks and commands are applied one at a time; after each one the host
/// publishes a fresh frame and hands it to the renderer.
pub struct ClockHost<R> {
    engine: Chronograph,
    renderer: R,
    frame: SharedFrame,
    commands: mpsc::Receiver<HostCommand>,
    shutdown: watch::Receiver<bool>,
    stats: HostStats,
}

impl<R: Renderer> ClockHost<R> {
    pub fn new(config: &RuntimeConfig, renderer: R) -> ClockResult<(Self, HostHandle)> {
        config.validate()?;

        let mut engine = Chronograph::seeded(config.seed.resolve())?;
        engine.set_mode(config.initial_mode);

        let frame = SharedFrame::new(DialFrame::capture(&engine, 0));
        let (command_tx, command_rx) = mpsc::channel(config.command_buffer);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let host = ClockHost {
            engine,
            renderer,
            frame: frame.clone(),
            commands: command_rx,
            shutdown: shutdown_rx,
            stats: HostStats::default(),
        };
        let handle = HostHandle {
            commands: command_tx,
            shutdown: shutdown_tx,
            frame,
        };

        Ok((host, handle))
    }

    /// Run until shutdown is requested or `ticks` is exhausted.
    ///
    /// Shutdown and pending commands take priority over the next tick.
    pub async fn run<T: TickSource>(mut self, mut ticks: T) -> ClockResult<HostStats> {
        tracing::info!(
            mode = %self.engine.mode(),
            time = %self.engine.clock().time(),
            "clock host starting"
        );
        self.publish();

        loop {
            if *self.shutdown.borrow() {
                break;
            }

            tokio::select! {
                biased;

                Ok(()) = self.shutdown.changed() => continue,

                Some(command) = self.commands.recv() => self.apply(command),

                tick = ticks.next_tick() => match tick {
                    Some(tick) => {
                        let report = self.engine.tick();
                        self.stats.ticks += 1;
                        if report.wrapped {
                            tracing::debug!(seq = tick.seq, "dial wrapped past twelve");
                        }
                    }
                    None => {
                        tracing::info!("tick source exhausted");
                        break;
                    }
                },
            }

            self.publish();
        }

        tracing::info!(
            ticks = self.stats.ticks,
            commands = self.stats.commands,
            "clock host stopped"
        );
        Ok(self.stats)
    }

    fn apply(&mut self, command: HostCommand) {
        tracing::debug!(?command, "host command");
        self.stats.commands += 1;

        match command {
            HostCommand::SetMode(mode) => self.engine.set_mode(mode),
            HostCommand::Start => self.engine.stopwatch_mut().start(),
            HostCommand::Stop => self.engine.stopwatch_mut().stop(),
            HostCommand::Reset => self.engine.stopwatch_mut().reset(),
            HostCommand::Reseed(time) => {
                if let Err(e) = self.engine.clock_mut().seed_time(time) {
                    tracing::warn!("Reseed rejected: {}", e);
                }
            }
        }
    }

    fn publish(&mut self) {
        let frame = DialFrame::capture(&self.engine, self.stats.ticks);
        self.renderer.render(&frame);
        self.frame.publish(frame);
        self.stats.frames += 1;
    }
}
