use clap::Subcommand;
use okaeri_core::FeatureFlag;

use crate::AppContext;

/// Sub-commands available under `flags`.
#[derive(Debug, Subcommand)]
pub enum FlagsCommands {
    /// Print every flag with its current value
    Show,
    /// Turn one flag on or off
    Set {
        /// Flag name in its stored spelling, e.g. `locationSelectorSearch`
        flag: String,

        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

pub(crate) async fn run_flags(ctx: &AppContext, command: FlagsCommands) -> anyhow::Result<()> {
    match command {
        FlagsCommands::Show => {
            let flags = ctx.preferences.load_feature_flags().await;
            for flag in FeatureFlag::ALL {
                let state = if flags.get(flag) { "on " } else { "off" };
                println!("{state}  {:<34} {}", flag.as_str(), flag.label());
            }
            Ok(())
        }
        FlagsCommands::Set { flag, enabled } => {
            let flag: FeatureFlag = flag.parse()?;
            let mut flags = ctx.preferences.load_feature_flags().await;
            flags.set(flag, enabled);
            ctx.preferences.save_feature_flags(&flags).await?;
            tracing::info!(%flag, enabled, "feature flag updated");
            println!("{flag} = {enabled}");
            Ok(())
        }
    }
}
