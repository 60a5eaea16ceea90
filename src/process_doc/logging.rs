use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the stderr logger. `RUST_LOG` wins over the verbosity count.
pub fn init_cli_logger(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "process_doc=warn",
        1 => "process_doc=info",
        _ => "process_doc=debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "process_doc=warn");
        assert_eq!(default_directive(1), "process_doc=info");
        assert_eq!(default_directive(5), "process_doc=debug");
    }
}
