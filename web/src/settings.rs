use anyhow::Context;
use clap::Parser;
use redblue_core as game;
use std::cell::OnceCell;
use std::iter;

thread_local! {
    static STARTUP_ARGS: OnceCell<Args> = const { OnceCell::new() };
}

/// Options read from the page's location hash, e.g. `#--seed=42&--fair&-vv`.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Force the first game's seed instead of reading the clock
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Never move the player's piece away from a two-in-a-line
    #[arg(long)]
    pub fair: bool,
}

impl Args {
    pub(crate) fn parse_hash(location_hash: &str) -> anyhow::Result<Self> {
        let args = location_hash
            .trim_start_matches('#')
            .split('&')
            .filter(|arg| !arg.is_empty());
        Self::try_parse_from(iter::once(env!("CARGO_PKG_NAME")).chain(args))
            .with_context(|| format!("could not parse location hash {location_hash:?}"))
    }

    pub(crate) fn from_location() -> anyhow::Result<Self> {
        let location_hash = gloo::utils::window().location().hash().unwrap_or_default();
        Self::parse_hash(&location_hash)
    }

    /// Keeps the arguments parsed at start-up. Later calls are ignored.
    pub(crate) fn store_startup(self) {
        STARTUP_ARGS.with(|startup| {
            if startup.set(self).is_err() {
                log::debug!("start-up arguments already stored");
            }
        });
    }

    /// Runs `f` with the start-up arguments, parsing the hash now if nothing
    /// was stored yet.
    pub(crate) fn with_startup<R>(f: impl FnOnce(&Self) -> R) -> R {
        STARTUP_ARGS.with(|startup| {
            f(startup.get_or_init(|| {
                Self::from_location().unwrap_or_else(|err| {
                    log::warn!("{:#}, using defaults", err);
                    Self::default()
                })
            }))
        })
    }

    pub(crate) fn rules(&self) -> game::Rules {
        if self.fair {
            game::Rules::fair()
        } else {
            game::Rules::default()
        }
    }

    pub(crate) fn first_seed(&self) -> game::Seed {
        self.seed.map_or_else(game::Seed::from_clock, game::Seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::parse_hash("").unwrap();

        assert_eq!(args.seed, None);
        assert_eq!(args.rules(), game::Rules::default());
        assert!(args.rules().redirect_double_threats);
    }

    #[test]
    fn hash_sets_seed_and_fair_rules() {
        let args = Args::parse_hash("#--seed=42&--fair").unwrap();

        assert_eq!(args.first_seed(), game::Seed(42));
        assert_eq!(args.rules(), game::Rules::fair());
    }

    #[test]
    fn verbosity_flags_raise_log_level() {
        let quiet = Args::parse_hash("#").unwrap();
        assert_eq!(quiet.verbose.log_level(), Args::default().verbose.log_level());
        let loud = Args::parse_hash("#-vv").unwrap();

        assert!(loud.verbose.log_level() > quiet.verbose.log_level());
    }

    #[test]
    fn startup_arguments_are_kept_once() {
        Args::parse_hash("#--seed=7").unwrap().store_startup();
        Args::parse_hash("#--seed=8&--fair").unwrap().store_startup();

        let (seed, rules) = Args::with_startup(|args| (args.first_seed(), args.rules()));

        assert_eq!(seed, game::Seed(7));
        assert_eq!(rules, game::Rules::default());
    }

    #[test]
    fn unknown_option_is_an_error() {
        assert!(Args::parse_hash("#--cheat").is_err());
    }
}
