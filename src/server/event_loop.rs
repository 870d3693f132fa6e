// src/server/event_loop.rs

//! The main bridge loop: interleaves stdin lines and game ticks on one task, and
//! flushes whatever the core sent to stdout.

use super::context::BridgeContext;
use super::outbound::QueuedOutbound;
use crate::core::CuiError;
use crate::core::protocol::CuiFrameCodec;
use anyhow::Result;
use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{info, warn};

/// Runs until `input` reaches end of stream.
pub async fn run<R, W>(ctx: &mut BridgeContext, input: R, output: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let max_len = ctx.config.max_payload_len;
    let mut frames = FramedRead::new(input, CuiFrameCodec::new(max_len));
    let mut writer = FramedWrite::new(output, CuiFrameCodec::new(max_len));
    let mut outbound = QueuedOutbound::new();

    let mut ticker = interval(ctx.config.tick_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            // A due tick is served before more input, so a busy stdin cannot
            // stall the handshake countdown.
            biased;

            _ = ticker.tick() => {
                ctx.tick(&mut outbound);
            }

            frame = frames.next() => match frame {
                Some(Ok(line)) => ctx.handle_line(&line, &mut outbound),
                Some(Err(e)) => warn!("Failed to read inbound line: {e}"),
                None => {
                    info!("Input closed, stopping bridge.");
                    break;
                }
            },
        }

        for line in outbound.drain() {
            match writer.send(line.to_string()).await {
                Ok(()) => {}
                Err(CuiError::PayloadTooLarge(limit)) => {
                    warn!("Dropping outbound line longer than {limit} bytes");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    SinkExt::<String>::flush(&mut writer).await?;
    Ok(())
}
