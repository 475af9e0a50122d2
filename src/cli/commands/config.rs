use crate::cli::output;
use crate::config::app_config::AppConfig;

/// Execute the `gabi-audit config` command.
///
/// Shows the resolved collector settings. The token is never printed.
pub fn execute(config: &AppConfig) {
    let env = &config.splunk.env;

    output::header("gabi-audit config");
    output::field("Endpoint", &env.endpoint);
    output::field("Token", env.redacted_token());
    output::field("Index", &env.index);
    output::field("Host", &env.host);
    output::field("Namespace", &env.namespace);
    output::field("Pod", &env.pod);
    output::field(
        "Timeout",
        &format!("{}s", config.splunk.timeout().as_secs()),
    );

    if env.endpoint.is_empty() {
        output::warning("No collector endpoint set: writes will fail to send");
    }
    if env.token.is_empty() {
        output::warning("No token set: requests go out unauthenticated");
    }
}
