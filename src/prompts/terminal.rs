use std::sync::atomic::Ordering;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::config::PoolContext;
use crate::error::{GeneratorError, Result};
use crate::metrics::METRICS;
use crate::numeric::Percent;

use super::assets::AssetSelect;
use super::percent::PercentInput;

/// Terminal-backed implementation of both prompt services.
///
/// Line-oriented: one answer per line on stdin, prompts on stdout.
///
/// DESIGN:
/// - One shared buffered reader behind a Mutex, so the asset and
///   percent prompts never split a line between them.
/// - Invalid input is re-asked, not propagated; this keeps the
///   trait contract ("never returns a malformed value") honest.
/// - EOF while an answer is still required is fatal: there is no
///   operator left to ask.
///
pub struct TerminalPrompter {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// Next trimmed line from stdin; `None` on EOF.
    async fn read_line(&self) -> Result<Option<String>> {
        let line = self.lines.lock().await.next_line().await?;
        Ok(line.map(|l| l.trim().to_string()))
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AssetSelect for TerminalPrompter {
    async fn select(&self, message: &str, pool: &PoolContext) -> Result<Vec<String>> {
        println!("{message} [{}]", pool.assets.join(", "));
        println!("(comma-separated, empty for none)");

        loop {
            METRICS.prompts_issued.fetch_add(1, Ordering::Relaxed);

            let Some(line) = self.read_line().await? else {
                return Err(GeneratorError::InputValidation {
                    field: "asset selection".to_string(),
                    reason: "end of input".to_string(),
                });
            };

            if line.is_empty() {
                return Ok(Vec::new());
            }

            let mut selected: Vec<String> = Vec::new();
            let mut unknown: Vec<&str> = Vec::new();

            for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                // Canonicalize to the pool's spelling; match case-insensitively.
                match pool
                    .assets
                    .iter()
                    .find(|a| a.eq_ignore_ascii_case(token))
                {
                    Some(asset) if !selected.contains(asset) => selected.push(asset.clone()),
                    Some(_) => {} // duplicate, first occurrence wins
                    None => unknown.push(token),
                }
            }

            if unknown.is_empty() {
                return Ok(selected);
            }

            METRICS.inputs_rejected.fetch_add(1, Ordering::Relaxed);
            log::warn!("unknown assets for {}: {}", pool.pool, unknown.join(", "));
            println!(
                "Unknown for this pool: {}. Try again.",
                unknown.join(", ")
            );
        }
    }
}

#[async_trait::async_trait]
impl PercentInput for TerminalPrompter {
    async fn percent(&self, message: &str, required: bool) -> Result<Option<Percent>> {
        loop {
            METRICS.prompts_issued.fetch_add(1, Ordering::Relaxed);
            if required {
                println!("{message} (%):");
            } else {
                println!("{message} (%, empty to skip):");
            }

            let Some(line) = self.read_line().await? else {
                if required {
                    return Err(GeneratorError::InputValidation {
                        field: message.to_string(),
                        reason: "end of input".to_string(),
                    });
                }
                return Ok(None);
            };

            if line.is_empty() {
                if required {
                    println!("{message} is required.");
                    continue;
                }
                return Ok(None);
            }

            match line.parse::<Percent>() {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    METRICS.inputs_rejected.fetch_add(1, Ordering::Relaxed);
                    log::warn!("rejected percent input for {message}: {err}");
                    println!("{err}. Try again.");
                }
            }
        }
    }
}
