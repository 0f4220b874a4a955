use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use propcoder::{CodingOptions, DecodeStyle, SuperInit};

/// propcoder - NSCoding archiving code from Objective-C @property declarations
#[derive(Debug, Parser)]
#[command(name = "propcoder", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate encodeWithCoder: and initWithCoder: for the declarations in a selection.
    Generate {
        /// File holding the declarations; reads stdin when omitted.
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,

        /// Print only the statements, one per line, instead of complete methods.
        #[arg(long)]
        statements: bool,

        #[command(flatten)]
        coding: CodingArgs,
    },

    /// Show how each line of a selection was parsed and classified.
    Inspect {
        /// File holding the declarations; reads stdin when omitted.
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,
    },
}

/// Code generation settings.
#[derive(Debug, Args)]
pub struct CodingArgs {
    /// Name of the NSCoder variable.
    #[arg(long, value_name = "NAME", default_value = "coder")]
    pub coder: String,

    /// How object attributes are decoded.
    #[arg(long, value_enum, default_value_t = DecodeStyleArg::Plain)]
    pub decode_style: DecodeStyleArg,

    /// Superclass initializer called by initWithCoder:.
    #[arg(long, value_enum, default_value_t = SuperInitArg::Init)]
    pub super_init: SuperInitArg,

    /// Decode readonly properties into their _name backing ivar.
    #[arg(long)]
    pub readonly_ivar: bool,
}

impl CodingArgs {
    pub fn options(&self) -> CodingOptions {
        CodingOptions::default()
            .with_coder(self.coder.as_str())
            .with_decode_style(self.decode_style.into())
            .with_super_init(self.super_init.into())
            .with_readonly_ivar(self.readonly_ivar)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DecodeStyleArg {
    /// [coder decodeObjectForKey:]
    Plain,
    /// The plain call cast to the declared class
    Cast,
    /// decodeObjectOfClass:forKey: for secure-coding classes
    Secure,
}

impl From<DecodeStyleArg> for DecodeStyle {
    fn from(arg: DecodeStyleArg) -> Self {
        match arg {
            DecodeStyleArg::Plain => DecodeStyle::Plain,
            DecodeStyleArg::Cast => DecodeStyle::Cast,
            DecodeStyleArg::Secure => DecodeStyle::Secure,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SuperInitArg {
    /// [super init]
    Init,
    /// [super initWithCoder:coder]
    Coder,
}

impl From<SuperInitArg> for SuperInit {
    fn from(arg: SuperInitArg) -> Self {
        match arg {
            SuperInitArg::Init => SuperInit::Init,
            SuperInitArg::Coder => SuperInit::Coder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "propcoder",
            "generate",
            "Model.h",
            "--coder",
            "aCoder",
            "--decode-style",
            "secure",
            "--super-init",
            "coder",
            "--readonly-ivar",
            "--json",
        ])
        .unwrap();

        assert!(cli.global.json);
        let Command::Generate {
            path,
            statements,
            coding,
        } = cli.command
        else {
            panic!("expected generate");
        };
        assert_eq!(path, Some(PathBuf::from("Model.h")));
        assert!(!statements);

        let options = coding.options();
        assert_eq!(options.coder, "aCoder");
        assert_eq!(options.decode_style, DecodeStyle::Secure);
        assert_eq!(options.super_init, SuperInit::Coder);
        assert!(options.readonly_ivar);
    }

    #[test]
    fn test_defaults_match_library() {
        let cli = Cli::try_parse_from(["propcoder", "generate"]).unwrap();
        let Command::Generate { path, coding, .. } = cli.command else {
            panic!("expected generate");
        };
        assert!(path.is_none());
        assert_eq!(coding.options(), CodingOptions::default());
    }

    #[test]
    fn test_rejects_unknown_style() {
        assert!(Cli::try_parse_from(["propcoder", "generate", "--decode-style", "fancy"]).is_err());
    }
}
