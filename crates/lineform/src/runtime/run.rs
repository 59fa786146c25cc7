//! Run — the line loop: read, normalize, write, until EOF.

use std::borrow::Cow;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use crate::conf::{ErrorPolicy, NormalizerConfig, OutputMode};
use crate::parser::{strip_ansi, LineParser, ParseMetrics};

/// Read stdin to EOF, normalize each line, write records to stdout.
pub async fn run_stdio(
    parser: &LineParser,
    config: &NormalizerConfig,
    metrics: &ParseMetrics,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    run(stdin, stdout, parser, config, metrics).await
}

/// The loop proper, generic over its endpoints.
///
/// Owns everything the core does not: input buffering, blank-line skipping,
/// optional ANSI stripping, the skip-or-abort decision on timestamp
/// conversion failures, and read/write error reporting. The parser never
/// touches the stream and never logs.
pub async fn run<R, W>(
    reader: R,
    mut writer: W,
    parser: &LineParser,
    config: &NormalizerConfig,
    metrics: &ParseMetrics,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.is_empty() {
            continue;
        }
        let line: Cow<'_, str> = if config.strip_ansi {
            strip_ansi(&line)
        } else {
            Cow::Borrowed(line.as_str())
        };

        let (format, record) = match parser.parse_tagged(&line) {
            Ok(parsed) => parsed,
            Err(err) => {
                metrics.record_rejected();
                match config.on_error {
                    ErrorPolicy::Skip => {
                        warn!(line = %line, "{err}");
                        continue;
                    }
                    ErrorPolicy::Abort => return Err(err.into()),
                }
            }
        };
        metrics.record(format);

        let rendered = match config.output {
            OutputMode::Text => record.to_string(),
            OutputMode::Json => serde_json::to_string(&record)?,
        };
        writer.write_all(rendered.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await?;

    if config.stats {
        let snap = metrics.snapshot();
        info!(
            "Input drained: total={}, standard={}, iso8601={}, json_lite={}, simple={}, unknown={}, rejected={}",
            snap.total, snap.standard, snap.iso8601, snap.json_lite, snap.simple,
            snap.unknown, snap.rejected
        );
    }
    Ok(())
}
