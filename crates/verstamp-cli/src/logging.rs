//! Diagnostics for a `verstamp` run.
//!
//! The hook crates emit events under their own targets; this module is the
//! only place a subscriber is installed. Everything goes to stderr so stdout
//! stays the artifact list (or JSON document).
//!
//! | Flags     | Hook crates | Other crates |
//! |-----------|-------------|--------------|
//! | `--quiet` | error       | error        |
//! | (none)    | warn        | warn         |
//! | `-v`      | info        | warn         |
//! | `-vv`     | debug       | warn         |
//! | `-vvv`    | trace       | warn         |
//!
//! From `-vv` on, the `initialize` span is printed when it closes, with its
//! `root` and `target` fields and elapsed time. `RUST_LOG` replaces the
//! whole filter.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Targets that belong to the hook and follow `-v`.
const HOOK_TARGETS: [&str; 3] = ["verstamp", "verstamp_core", "verstamp_adapters"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = hook_level(args);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| hook_filter(level));

    let span_events = if level >= LevelFilter::DEBUG {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(level >= LevelFilter::TRACE)
        .with_span_events(span_events)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

/// Level for the hook's own targets.
fn hook_level(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Directive string: other crates stay at warn unless `--quiet` lowers them.
fn directives(level: LevelFilter) -> String {
    let default = level.min(LevelFilter::WARN);
    std::iter::once(default.to_string().to_lowercase())
        .chain(
            HOOK_TARGETS
                .iter()
                .map(|target| format!("{target}={}", level.to_string().to_lowercase())),
        )
        .collect::<Vec<_>>()
        .join(",")
}

fn hook_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::new(directives(level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_maps_to_hook_level() {
        assert_eq!(hook_level(&args(0, false)), LevelFilter::WARN);
        assert_eq!(hook_level(&args(1, false)), LevelFilter::INFO);
        assert_eq!(hook_level(&args(2, false)), LevelFilter::DEBUG);
        assert_eq!(hook_level(&args(7, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(hook_level(&args(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn verbose_only_raises_hook_targets() {
        assert_eq!(
            directives(LevelFilter::DEBUG),
            "warn,verstamp=debug,verstamp_core=debug,verstamp_adapters=debug"
        );
    }

    #[test]
    fn quiet_lowers_everything() {
        assert_eq!(
            directives(LevelFilter::ERROR),
            "error,verstamp=error,verstamp_core=error,verstamp_adapters=error"
        );
    }
}
