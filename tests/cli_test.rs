//! CLI flag and environment parsing tests

use std::time::Duration;

use clap::Parser;
use sensu_teams_handler::config::app_config::DEFAULT_ICON_URL;
use sensu_teams_handler::Cli;

#[test]
fn should_apply_defaults() {
    // Arrange & Act
    let config = Cli::try_parse_from([
        "sensu-teams-handler",
        "--webhook-url",
        "https://example.webhook.office.com/hook",
    ])
    .unwrap()
    .into_config();

    // Assert
    assert_eq!(config.webhook_url, "https://example.webhook.office.com/hook");
    assert_eq!(config.channel, "#general");
    assert_eq!(config.message_prefix, "");
    assert_eq!(config.bot_name, "");
    assert_eq!(config.icon_url, DEFAULT_ICON_URL);
    assert_eq!(config.action_name, "View in Sensu");
    assert_eq!(config.dashboard, "");
}

#[test]
fn should_parse_long_flags() {
    let config = Cli::try_parse_from([
        "sensu-teams-handler",
        "--webhook-url",
        "https://example.webhook.office.com/hook",
        "--channel",
        "#alerts",
        "--message-prefix",
        "@oncall",
        "--bot-name",
        "sensu-bot",
        "--icon-url",
        "https://cdn.example.com/icon.png",
        "--action-name",
        "Open in dashboard",
        "--dashboard",
        "https://dash.example.com/",
        "--timeout-secs",
        "30",
    ])
    .unwrap()
    .into_config();

    assert_eq!(config.channel, "#alerts");
    assert_eq!(config.message_prefix, "@oncall");
    assert_eq!(config.bot_name, "sensu-bot");
    assert_eq!(config.icon_url, "https://cdn.example.com/icon.png");
    assert_eq!(config.action_name, "Open in dashboard");
    assert_eq!(config.dashboard, "https://dash.example.com/");
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn should_parse_short_flags() {
    let config = Cli::try_parse_from([
        "sensu-teams-handler",
        "-w",
        "https://example.webhook.office.com/hook",
        "-c",
        "#alerts",
        "-p",
        "@oncall",
        "-b",
        "sensu-bot",
        "-i",
        "https://cdn.example.com/icon.png",
        "-a",
        "Open",
        "-d",
        "https://dash.example.com/",
    ])
    .unwrap()
    .into_config();

    assert_eq!(config.channel, "#alerts");
    assert_eq!(config.message_prefix, "@oncall");
    assert_eq!(config.bot_name, "sensu-bot");
    assert_eq!(config.action_name, "Open");
    assert_eq!(config.dashboard, "https://dash.example.com/");
}

#[test]
fn should_reject_positional_arguments() {
    // Arrange & Act
    let result = Cli::try_parse_from(["sensu-teams-handler", "-w", "https://x", "extra"]);

    // Assert
    assert!(result.is_err());
}

#[test]
fn should_reject_non_numeric_timeout() {
    let result = Cli::try_parse_from(["sensu-teams-handler", "-t", "soon"]);

    assert!(result.is_err());
}

#[test]
fn should_read_webhook_url_from_environment() {
    // Arrange
    let test_url = "https://example.webhook.office.com/from-env";
    std::env::set_var("MS_TEAMS_WEBHOOK_URL", test_url);

    // Act
    let from_env = Cli::try_parse_from(["sensu-teams-handler"]).unwrap();
    let overridden =
        Cli::try_parse_from(["sensu-teams-handler", "-w", "https://flag.example.com/hook"])
            .unwrap();

    // Assert
    assert_eq!(from_env.webhook_url, test_url);
    assert_eq!(overridden.webhook_url, "https://flag.example.com/hook");

    // Cleanup
    std::env::remove_var("MS_TEAMS_WEBHOOK_URL");
}

#[test]
fn should_read_timeout_from_environment() {
    // Arrange
    std::env::set_var("MS_TEAMS_TIMEOUT_SECS", "45");

    // Act
    let from_env = Cli::try_parse_from(["sensu-teams-handler"]).unwrap();
    let overridden = Cli::try_parse_from(["sensu-teams-handler", "-t", "5"]).unwrap();

    // Assert
    assert_eq!(from_env.timeout_secs, 45);
    assert_eq!(from_env.into_config().timeout, Duration::from_secs(45));
    assert_eq!(overridden.timeout_secs, 5);

    // Cleanup
    std::env::remove_var("MS_TEAMS_TIMEOUT_SECS");
}
