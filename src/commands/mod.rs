pub mod run;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    pomo                          # Start with default settings
    pomo -f 30 -b 10              # 30 min focus, 10 min breaks
    pomo -f 20 -b 5 -l 15 -s 3    # Custom long break settings
    pomo --sound false            # Disable sound
"#)]
pub struct Cli {
    /// Focus session duration in minutes
    #[arg(short = 'f', long = "focus", value_name = "MINUTES", default_value_t = 25)]
    focus: u64,

    /// Short break duration in minutes
    #[arg(short = 'b', long = "break", value_name = "MINUTES", default_value_t = 5)]
    break_minutes: u64,

    /// Long break duration in minutes
    #[arg(short = 'l', long = "long-break", value_name = "MINUTES", default_value_t = 15)]
    long_break: u64,

    /// Number of focus sessions before a long break
    #[arg(short = 's', long = "sessions", value_name = "COUNT", default_value_t = 4)]
    sessions: u64,

    /// Enable sound at phase start
    #[arg(long = "sound", value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    sound: bool,

    /// Enable desktop notifications
    #[arg(long = "notify", value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    notify: bool,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = cli.into_config();

        if let Err(e) = config.validate() {
            msg_bail_anyhow!(Message::ConfigValidationFailed(e.to_string()));
        }

        run::cmd(config).await
    }

    fn into_config(self) -> Config {
        Config {
            focus_minutes: self.focus,
            short_break_minutes: self.break_minutes,
            long_break_minutes: self.long_break,
            sessions_before_long_break: self.sessions,
            sound_enabled: self.sound,
            notifications_enabled: self.notify,
        }
    }
}
