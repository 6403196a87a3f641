use crate::Environment;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Filter used in production when `RUST_LOG` is unset
pub const PRODUCTION_FILTER: &str = "warn,grpc_client=info";

/// Filter used everywhere else when `RUST_LOG` is unset
///
/// Keeps per-call spans from `grpc_client` visible while silencing the
/// HTTP/2 stack underneath it.
pub const DEVELOPMENT_FILTER: &str = "info,grpc_client=debug,domain_milvus=debug,h2=info,hyper=info,tower=info";

/// Install the color-eyre report hook
///
/// Reports show where the error was raised and skip the environment dump.
/// Later calls are no-ops.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

pub fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        PRODUCTION_FILTER
    } else {
        DEVELOPMENT_FILTER
    }
}

/// Install the global subscriber for `environment`
///
/// Production logs are flattened JSON lines; development logs are compact
/// single lines. Both carry an `ErrorLayer`, so eyre reports include the span
/// trace (service and operation of a failing call). `RUST_LOG` replaces
/// [`default_filter`].
///
/// Returns `false` when a subscriber was already installed, which is the
/// normal case in tests.
///
/// ```ignore
/// use tracing::instrument;
/// use eyre::{Result, WrapErr};
///
/// #[instrument(skip(client))]
/// async fn count(client: &MilvusClient, name: &str) -> Result<i64> {
///     let reply = client.count_collection(name).await.wrap_err("CountCollection failed")?;
///     Ok(reply.collection_row_count)
/// }
/// ```
pub fn init_tracing(environment: &Environment) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let installed = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(true).compact())
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::debug!(?environment, "Tracing initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_per_environment() {
        assert_eq!(default_filter(&Environment::Production), PRODUCTION_FILTER);
        assert_eq!(default_filter(&Environment::Development), DEVELOPMENT_FILTER);
    }

    #[test]
    fn test_default_filters_parse() {
        for directives in [PRODUCTION_FILTER, DEVELOPMENT_FILTER] {
            assert!(EnvFilter::try_new(directives).is_ok(), "{directives}");
        }
    }

    #[test]
    fn test_second_init_is_a_no_op() {
        init_tracing(&Environment::Development);
        assert!(!init_tracing(&Environment::Production));
    }

    #[test]
    fn test_init_with_rust_log_override() {
        temp_env::with_var("RUST_LOG", Some("grpc_client=trace"), || {
            init_tracing(&Environment::Development);
        });
    }
}
