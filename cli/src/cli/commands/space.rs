//! Space indicator command handler.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::app::AppContext;
use crate::desktop::SpaceIndicator;
use crate::error::Result;

/// Shown when the active space cannot be located.
const UNKNOWN_SPACE: &str = "-";

/// Fastest refresh accepted for `--watch`.
const MIN_REFRESH_MS: u64 = 100;

fn render(indicator: Option<SpaceIndicator>) -> String {
    indicator.map_or_else(|| UNKNOWN_SPACE.to_string(), |i| i.to_string())
}

/// Handles the `niceutil space [--watch]` command.
///
/// With `--watch`, polls on the configured interval and prints the
/// indicator each time it changes, until interrupted.
///
/// # Errors
///
/// Returns an error if the host cannot be queried.
pub async fn handle_space(ctx: &AppContext, watch: bool) -> Result<()> {
    if !watch {
        println!("{}", render(ctx.space_indicator().await?));
        return Ok(());
    }

    let period = ctx
        .config()
        .indicator
        .refresh_interval_ms
        .max(MIN_REFRESH_MS);
    let mut interval = tokio::time::interval(Duration::from_millis(period));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut last: Option<String> = None;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let text = render(ctx.space_indicator().await?);
                if last.as_deref() != Some(text.as_str()) {
                    println!("{text}");
                    last = Some(text);
                }
            }
            _ = &mut ctrl_c => {
                debug!("Interrupted, stopping indicator");
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_space_renders_placeholder() {
        assert_eq!(render(None), "-");
        assert_eq!(
            render(Some(SpaceIndicator {
                active: 1,
                total: 3
            })),
            "[1] 2 3"
        );
    }
}
