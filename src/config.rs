//! Command-line and environment configuration

use crate::game::{GameConfig, HardModeRule, ResetPolicy};
use clap::Args;
use std::time::Duration;

/// Game rule options shared by `serve` and `play`
#[derive(Debug, Clone, Copy, Args)]
pub struct RuleArgs {
    /// How hard-mode guesses are constrained by earlier clues
    #[arg(long, value_enum, env = "WORDLE_HARD_MODE_RULE", default_value_t = HardModeRule::Positional)]
    pub hard_mode_rule: HardModeRule,

    /// Whether a game in progress may be reset
    #[arg(long, value_enum, env = "WORDLE_RESET_POLICY", default_value_t = ResetPolicy::Anytime)]
    pub reset_policy: ResetPolicy,
}

impl RuleArgs {
    #[must_use]
    pub const fn game_config(self) -> GameConfig {
        GameConfig {
            hard_mode_rule: self.hard_mode_rule,
            reset_policy: self.reset_policy,
        }
    }
}

/// Options of the HTTP server
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "WORDLE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "WORDLE_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Drop sessions idle for this many seconds (0 keeps them forever)
    #[arg(long, env = "WORDLE_SESSION_TTL_SECS", default_value_t = 3600)]
    pub session_ttl_secs: u64,

    /// Allowed CORS origin; repeat or comma-separate for several
    #[arg(long = "cors-origin", env = "WORDLE_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    #[command(flatten)]
    pub rules: RuleArgs,
}

/// Resolved server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub session_ttl: Option<Duration>,
    pub cors_origins: Vec<String>,
}

impl ServeArgs {
    #[must_use]
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            session_ttl: (self.session_ttl_secs > 0)
                .then(|| Duration::from_secs(self.session_ttl_secs)),
            cors_origins: self.cors_origins.clone(),
        }
    }
}

/// Options of the terminal game
#[derive(Debug, Clone, Args)]
pub struct PlayArgs {
    /// Play every guess in hard mode
    #[arg(long)]
    pub hard: bool,

    /// Fix the answer instead of drawing one at random
    #[arg(long)]
    pub answer: Option<String>,

    /// Seed for answers and hints, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub rules: RuleArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn serve_defaults() {
        let cli = TestCli::try_parse_from(["test"]).unwrap();
        let config = cli.serve.server_config();

        assert_eq!(config.port, 5000);
        assert_eq!(config.session_ttl, Some(Duration::from_secs(3600)));
        assert_eq!(cli.serve.rules.game_config(), GameConfig::default());
    }

    #[test]
    fn serve_overrides() {
        let cli = TestCli::try_parse_from([
            "test",
            "--port",
            "8080",
            "--session-ttl-secs",
            "0",
            "--cors-origin",
            "http://a.test,http://b.test",
            "--hard-mode-rule",
            "presence",
            "--reset-policy",
            "after-game-over",
        ])
        .unwrap();
        let config = cli.serve.server_config();

        assert_eq!(config.port, 8080);
        assert_eq!(config.session_ttl, None);
        assert_eq!(config.cors_origins, ["http://a.test", "http://b.test"]);
        assert_eq!(
            cli.serve.rules.game_config(),
            GameConfig {
                hard_mode_rule: HardModeRule::Presence,
                reset_policy: ResetPolicy::AfterGameOver,
            }
        );
    }
}
