//! Host stand-in for the restart button's interrupt line.
//!
//! Each `SIGUSR1` delivered to the process counts as one falling edge on
//! the button pin. The bridge only stamps the edge and hands it to the
//! trigger; it never touches the game.

use crate::core::{Clock, RestartTrigger};

/// Forward every `SIGUSR1` to `trigger` until the signal stream ends.
#[cfg(unix)]
pub async fn watch_sigusr1<C>(trigger: &'static RestartTrigger, clock: C) -> anyhow::Result<()>
where
    C: Clock + Send + 'static,
{
    use tokio::signal::unix::{signal, SignalKind};

    let mut edges = signal(SignalKind::user_defined1())?;
    log::info!(
        "restart button bound to SIGUSR1 (pid {}, debounce {}us)",
        std::process::id(),
        trigger.quiet_us()
    );
    while edges.recv().await.is_some() {
        trigger.press(&clock);
    }
    Ok(())
}

/// Signals are unavailable; the button can only be driven in-process.
#[cfg(not(unix))]
pub async fn watch_sigusr1<C>(_trigger: &'static RestartTrigger, _clock: C) -> anyhow::Result<()>
where
    C: Clock + Send + 'static,
{
    log::warn!("restart button signal is not supported on this platform");
    std::future::pending::<()>().await;
    Ok(())
}

/// A full press-and-release: two edges one quiet interval apart.
///
/// Only the first of the pair arms the trigger, the same way a bouncing
/// mechanical switch produces one odd and one even accepted edge.
pub fn click<C: Clock + ?Sized>(trigger: &RestartTrigger, clock: &C) {
    let pressed_at = clock.now_micros();
    trigger.on_edge(pressed_at);
    trigger.on_edge(pressed_at.wrapping_add(u64::from(trigger.quiet_us())));
}
